//! # Coordinator 模块
//!
//! 导航状态机：拦截 deck 的导航意图，驱动 prepare/commit 两段协议。
//!
//! ## 执行模型
//!
//! ```text
//! 意图到达（idle）
//!   ├─ 宿主无能力 / 无元数据 / 守卫不满足 ──► PassThrough（照常导航）
//!   └─ 守卫满足
//!        ├─ 解析关键帧、插入样式，进入 preparing
//!        ├─ prepare 失败 ──► 直接执行原始导航，回到 idle
//!        └─ prepare 就绪 ──► 携带 apply 标志重投递同一意图
//!             └─ 命中 preparing 的 apply 分支：
//!                  回到 idle → 执行原始导航 → 触发提交（错误静默吞掉）
//! ```
//!
//! ## 设计说明
//!
//! - 两段协议保证 deck 的索引/片段簿记只在准备确认就绪后变化一次，
//!   避免对过期内容启动视觉过渡
//! - 同一时刻至多一次准备在途；准备期间到达的新意图被忽略，
//!   不会重新触发准备
//! - 所有失败路径都降级为无过渡导航，被拦截的意图绝不会被静默丢弃

use std::cell::RefCell;
use std::rc::Rc;

use crate::deck::{DeckEvent, NavigableDeck, NavigationAction, NavigationIntent};
use crate::host::{NativeTransitionHost, PrepareOptions, StartOptions};
use crate::metadata::parse_transition_data;
use crate::resolver::KeyframeResolver;
use crate::styles::resolve_animation_styles;

/// 前进方向使用的具名过渡效果
pub const FORWARD_EFFECT: &str = "slide-forward";

/// 后退方向使用的具名过渡效果
pub const BACKWARD_EFFECT: &str = "slide-backward";

fn direction_effect(backward: bool) -> &'static str {
    if backward { BACKWARD_EFFECT } else { FORWARD_EFFECT }
}

/// 拦截结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intercept {
    /// 未处理：调用方应照常执行原始导航
    PassThrough,
    /// 已处理：协调器保证该导航最终完成（立即或经由二次投递）
    Handled,
}

/// 协调器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CoordinatorState {
    Idle,
    /// 一次准备在途，记录已解析的方向
    Preparing { backward: bool },
}

/// 当前页的片段位置（由事件总线维护，仅用于 prev/next 守卫）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct FragmentPosition {
    index: usize,
    count: usize,
}

impl FragmentPosition {
    /// 处于当前页的后续片段上（prev 应先在页内回退）
    fn past_first(&self) -> bool {
        self.index > 0
    }

    /// 当前页仍有未消费的片段（next 应先在页内前进）
    fn before_last(&self) -> bool {
        self.count > 0 && self.index + 1 < self.count
    }
}

/// 过渡协调器
///
/// 每个放映视图一个实例。通过 [`TransitionCoordinator::intercept`]
/// 接入 deck 的导航处理链，通过 [`TransitionCoordinator::on_deck_event`]
/// 订阅事件总线。
pub struct TransitionCoordinator {
    deck: Rc<dyn NavigableDeck>,
    host: Rc<dyn NativeTransitionHost>,
    resolver: KeyframeResolver,
    state: RefCell<CoordinatorState>,
    fragment: RefCell<FragmentPosition>,
    /// 跨过渡显式保留的元素选择器（如控制浮层）
    shared_elements: Vec<String>,
}

impl TransitionCoordinator {
    /// 创建协调器
    ///
    /// # 参数
    ///
    /// - `deck`: 放映对象
    /// - `host`: 宿主的原生过渡能力
    /// - `shared_elements`: 需要跨过渡保留的元素选择器
    pub fn new(
        deck: Rc<dyn NavigableDeck>,
        host: Rc<dyn NativeTransitionHost>,
        shared_elements: Vec<String>,
    ) -> Self {
        Self {
            deck,
            resolver: KeyframeResolver::new(Rc::clone(&host)),
            host,
            state: RefCell::new(CoordinatorState::Idle),
            fragment: RefCell::new(FragmentPosition::default()),
            shared_elements,
        }
    }

    /// 关键帧解析器
    pub fn resolver(&self) -> &KeyframeResolver {
        &self.resolver
    }

    /// 预热解析缓存，把探测成本隐藏在导航之前
    pub async fn prewarm<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.resolver.prepare_many(names).await;
    }

    /// 处理事件总线上的 deck 通知
    pub fn on_deck_event(&self, event: DeckEvent) {
        match event {
            DeckEvent::Activate { .. } => {
                // 翻页完成，片段位置归零
                *self.fragment.borrow_mut() = FragmentPosition::default();
            }
            DeckEvent::Fragment { index, count } => {
                *self.fragment.borrow_mut() = FragmentPosition { index, count };
            }
            // 全屏只共享事件总线，不属于过渡职责
            DeckEvent::Fullscreen { .. } => {}
        }
    }

    /// 拦截一次导航意图
    ///
    /// 返回 [`Intercept::PassThrough`] 时调用方照常执行原始导航；
    /// 返回 [`Intercept::Handled`] 时协调器接管，保证导航最终完成。
    pub async fn intercept(&self, intent: NavigationIntent) -> Intercept {
        // 宿主无能力：整个引擎退化为直通
        if !self.host.is_supported() {
            return Intercept::PassThrough;
        }

        let state = *self.state.borrow();

        // apply 二次投递：命中在途的准备则进入提交分支
        if intent.apply {
            let CoordinatorState::Preparing { backward } = state else {
                return Intercept::PassThrough;
            };
            *self.state.borrow_mut() = CoordinatorState::Idle;

            // 先完成导航（deck 簿记只在此刻变化），再触发提交
            self.deck.navigate(intent.action);
            let start = StartOptions {
                effect: direction_effect(backward).to_string(),
            };
            if let Err(error) = self.host.start(start).await {
                // 提交只是视觉上的尽力而为
                tracing::debug!(%error, "过渡提交被拒绝，跳过视觉效果");
            }
            return Intercept::Handled;
        }

        // 准备期间的新意图：不重新触发准备
        if state != CoordinatorState::Idle {
            tracing::debug!(action = ?intent.action, "准备期间收到新导航意图，忽略");
            return Intercept::Handled;
        }

        // 被离开页面的过渡元数据，每次导航尝试都重新读取
        let source = self.deck.transition_source();
        let Some(request) = parse_transition_data(source.as_deref()) else {
            return Intercept::PassThrough;
        };

        // 各意图的守卫条件；不满足则照常导航
        let current = self.deck.current_index();
        let fragment = *self.fragment.borrow();
        let backward = match intent.action {
            NavigationAction::Prev => {
                if current == 0 || fragment.past_first() {
                    return Intercept::PassThrough;
                }
                true
            }
            NavigationAction::Next => {
                if current + 1 >= self.deck.slide_count() || fragment.before_last() {
                    return Intercept::PassThrough;
                }
                false
            }
            NavigationAction::Slide { index } => {
                if index == current {
                    return Intercept::PassThrough;
                }
                index < current
            }
        };

        // 没有可用关键帧：照常导航
        let Some(keyframes) = self
            .resolver
            .get_keyframes(&request.name, request.builtin_fallback)
            .await
        else {
            return Intercept::PassThrough;
        };

        let rules = resolve_animation_styles(&keyframes, backward, request.duration.as_deref());
        self.host.insert_styles(&rules);

        *self.state.borrow_mut() = CoordinatorState::Preparing { backward };
        let prepare = PrepareOptions {
            effect: direction_effect(backward).to_string(),
            shared_elements: self.shared_elements.clone(),
        };
        match self.host.prepare(prepare).await {
            Ok(()) => {
                // 准备就绪：携带 apply 标志重投递同一意图，
                // 由上方的 apply 分支完成导航与提交
                let redelivered = Box::pin(self.intercept(intent.with_apply())).await;
                if redelivered == Intercept::PassThrough {
                    // 在途状态意外丢失也不允许吞掉导航
                    self.deck.navigate(intent.action);
                }
            }
            Err(error) => {
                tracing::warn!(%error, "过渡准备被拒绝，降级为无过渡导航");
                *self.state.borrow_mut() = CoordinatorState::Idle;
                self.deck.navigate(intent.action);
            }
        }
        Intercept::Handled
    }
}
