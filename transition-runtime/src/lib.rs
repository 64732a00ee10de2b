//! # Transition Runtime
//!
//! 演示文稿过渡引擎的核心运行时库。
//!
//! ## 架构概述
//!
//! `transition-runtime` 是纯逻辑核心，不渲染幻灯片内容，也不实现
//! 原生过渡原语本身。它通过两个窄接口与外界协作：
//!
//! ```text
//! Deck                       Coordinator                      Host
//!   │                            │                              │
//!   │── 导航意图 ───────────────►│                              │
//!   │                            │── 读取过渡元数据（Validator）│
//!   │                            │── 解析关键帧（Resolver）────►│ 探测
//!   │                            │── 生成样式（Styles）────────►│ 插入 CSS
//!   │                            │── prepare ──────────────────►│
//!   │◄─ 二次投递（apply）────────│◄─ ready ─────────────────────│
//!   │   索引前进，恰好一次       │── start（错误静默）─────────►│
//! ```
//!
//! ## 核心类型
//!
//! - [`TransitionCoordinator`]：导航状态机，驱动 prepare/commit 两段协议
//! - [`KeyframeResolver`]：关键帧探测与进程级缓存
//! - [`TransitionRequest`]：每页幻灯片声明的过渡请求
//! - [`NavigableDeck`] / [`NativeTransitionHost`]：deck 与宿主的窄接口
//!
//! ## 失败语义
//!
//! 本 crate 内没有致命错误：宿主缺少能力、元数据格式错误、
//! prepare/commit 被拒绝，全部降级为无过渡导航，绝不丢弃导航请求。
//!
//! ## 模块结构
//!
//! - [`coordinator`]：导航状态机
//! - [`deck`]：deck 窄接口与事件
//! - [`error`]：错误类型
//! - [`host`]：宿主能力接口
//! - [`keyframes`]：方向 / 角色 / 关键帧集合
//! - [`metadata`]：过渡元数据校验
//! - [`resolver`]：关键帧解析与缓存
//! - [`styles`]：样式规则生成

pub mod coordinator;
pub mod deck;
pub mod error;
pub mod host;
pub mod keyframes;
pub mod metadata;
pub mod resolver;
pub mod styles;

pub use coordinator::{BACKWARD_EFFECT, FORWARD_EFFECT, Intercept, TransitionCoordinator};
pub use deck::{DeckEvent, NavigableDeck, NavigationAction, NavigationIntent};
pub use error::TransitionError;
pub use host::{NativeTransitionHost, PrepareOptions, StartOptions};
pub use keyframes::{Direction, KeyframeSet, Role};
pub use metadata::{TransitionRequest, is_transition_data, parse_transition_data};
pub use resolver::{BUILTIN_PREFIX, KeyframeResolver, NONE_TRANSITION, candidate_name};
pub use styles::{AnimationVariables, resolve_animation_styles, resolve_animation_variables};
