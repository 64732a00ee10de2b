//! # Resolver 模块
//!
//! 关键帧解析与缓存。
//!
//! ## 执行模型
//!
//! ```text
//! resolve(name)
//!   ├─ 缓存命中 ──► 返回共享结果（已完成或进行中）
//!   └─ 缓存未命中
//!        ├─ 合成 6 个候选效果名（2 方向 × 3 角色）
//!        ├─ 并发探测，全部落定后组装 KeyframeSet
//!        └─ 首个调用者占据缓存槽位，后续调用者共享同一个未完成结果
//! ```
//!
//! ## 设计说明
//!
//! - 缓存与视图同生命周期，只在启动/测试边界通过 [`KeyframeResolver::reset`] 重置
//! - 环境没有真正的并行，"首个调用者占据槽位"即是全部所需的同步纪律
//! - 探测不得阻塞导航：需要同步可用性的调用方必须先用
//!   [`KeyframeResolver::prepare_many`] 预热

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared, join_all};

use crate::host::NativeTransitionHost;
use crate::keyframes::{Direction, KeyframeSet, Role};

/// 哨兵过渡名："none" 的每个 cell 均为空，永不探测
pub const NONE_TRANSITION: &str = "none";

/// 内建关键帧名称前缀（`builtinFallback` 回退时使用）
pub const BUILTIN_PREFIX: &str = "builtin-";

/// 共享的解析结果：已完成或进行中
type SharedResolution = Shared<LocalBoxFuture<'static, KeyframeSet>>;

/// 由过渡名、方向、角色合成候选效果标识
///
/// 格式：`{角色前缀}transition-{方向前缀}{名称}`，
/// 角色前缀为 `""` / `incoming-` / `outgoing-`，方向前缀为 `""` / `backward-`。
///
/// 例如 `fade` 的 6 个候选：
///
/// ```text
/// transition-fade              incoming-transition-fade
/// transition-backward-fade     incoming-transition-backward-fade
/// outgoing-transition-fade     outgoing-transition-backward-fade
/// ```
pub fn candidate_name(name: &str, direction: Direction, role: Role) -> String {
    let role_prefix = match role {
        Role::Both => "",
        Role::Incoming => "incoming-",
        Role::Outgoing => "outgoing-",
    };
    let direction_prefix = match direction {
        Direction::Forward => "",
        Direction::Backward => "backward-",
    };
    format!("{role_prefix}transition-{direction_prefix}{name}")
}

/// 关键帧解析器
///
/// 持有 `过渡名 -> KeyframeSet` 的进程级缓存，通过宿主能力探测
/// 每个候选效果是否真实可用。
pub struct KeyframeResolver {
    host: Rc<dyn NativeTransitionHost>,
    cache: RefCell<HashMap<String, SharedResolution>>,
}

impl KeyframeResolver {
    /// 创建解析器并播种哨兵条目
    pub fn new(host: Rc<dyn NativeTransitionHost>) -> Self {
        let resolver = Self {
            host,
            cache: RefCell::new(HashMap::new()),
        };
        resolver.seed();
        resolver
    }

    /// 重置缓存（启动/测试边界使用）
    pub fn reset(&self) {
        self.cache.borrow_mut().clear();
        self.seed();
    }

    fn seed(&self) {
        let empty: SharedResolution = futures::future::ready(KeyframeSet::empty())
            .boxed_local()
            .shared();
        self.cache
            .borrow_mut()
            .insert(NONE_TRANSITION.to_string(), empty);
    }

    /// 解析指定名称的关键帧集合
    ///
    /// 返回共享结果：首个调用者触发 6 个 cell 的并发探测并占据缓存槽位，
    /// 同名的并发调用共享同一个未完成结果，不会重复探测。
    /// 集合只在全部探测落定后才对外可见。
    pub fn resolve(&self, name: &str) -> SharedResolution {
        if let Some(resolution) = self.cache.borrow().get(name) {
            return resolution.clone();
        }

        let host = Rc::clone(&self.host);
        let owned = name.to_string();
        let resolution: SharedResolution = async move {
            let owned = &owned;
            let candidates: Vec<(Direction, Role, String)> = Direction::ALL
                .into_iter()
                .flat_map(|direction| {
                    Role::ALL
                        .into_iter()
                        .map(move |role| (direction, role, candidate_name(owned, direction, role)))
                })
                .collect();

            let outcomes = join_all(
                candidates
                    .iter()
                    .map(|(_, _, candidate)| host.probe_animation(candidate)),
            )
            .await;

            let mut set = KeyframeSet::empty();
            for ((direction, role, candidate), available) in
                candidates.into_iter().zip(outcomes)
            {
                if available {
                    set.set(direction, role, Some(candidate));
                }
            }
            set
        }
        .boxed_local()
        .shared();

        self.cache
            .borrow_mut()
            .insert(name.to_string(), resolution.clone());
        resolution
    }

    /// 取得可用于生成样式的关键帧集合
    ///
    /// 主集合非空则直接返回；为空且 `builtin_fallback` 为真时，
    /// 解析带 [`BUILTIN_PREFIX`] 前缀的内建名称并返回其非空结果。
    /// 两者皆空表示"没有可用关键帧"，以 `None` 表达而非错误。
    pub async fn get_keyframes(&self, name: &str, builtin_fallback: bool) -> Option<KeyframeSet> {
        let primary = self.resolve(name).await;
        if !primary.is_empty() {
            return Some(primary);
        }

        if !builtin_fallback {
            return None;
        }

        let fallback = self.resolve(&format!("{BUILTIN_PREFIX}{name}")).await;
        if fallback.is_empty() { None } else { Some(fallback) }
    }

    /// 预热：去重后批量解析并缓存，丢弃结果
    ///
    /// 在导航需要之前调用，把探测成本隐藏在空闲期。
    pub async fn prepare_many<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: HashSet<String> = names
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();

        let resolutions: Vec<SharedResolution> =
            unique.iter().map(|name| self.resolve(name)).collect();
        join_all(resolutions).await;
    }
}
