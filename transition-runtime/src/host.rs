//! # Host 模块
//!
//! 定义宿主环境暴露给引擎的原生过渡能力接口。
//!
//! ## 设计说明
//!
//! - 引擎不直接触碰 DOM，只通过 [`NativeTransitionHost`] 与宿主交互
//! - 所有异步方法返回 [`LocalBoxFuture`]：单线程协作模型，不要求 `Send`
//! - 接口保持对象安全，测试中用记录调用的替身实现

use futures::future::LocalBoxFuture;

use crate::error::TransitionError;

/// prepare 调用参数
#[derive(Debug, Clone, PartialEq)]
pub struct PrepareOptions {
    /// 方向对应的具名过渡效果
    pub effect: String,
    /// 需要跨过渡显式保留的元素选择器
    ///
    /// 这些元素（例如屏幕上的控制浮层）单独参与快照，
    /// 避免被原生快照机制重复捕获。
    pub shared_elements: Vec<String>,
}

/// start 调用参数
#[derive(Debug, Clone, PartialEq)]
pub struct StartOptions {
    /// 方向对应的具名过渡效果，与 prepare 时一致
    pub effect: String,
}

/// 原生过渡能力接口
///
/// 对应宿主（浏览器）提供的快照式页面过渡原语：
/// `prepare` 捕获旧状态，`start` 在 DOM 更新后向新状态播放过渡。
pub trait NativeTransitionHost {
    /// 宿主是否具备原生过渡能力
    ///
    /// 为 `false` 时整个引擎退化为直通：所有导航照常进行，没有过渡。
    fn is_supported(&self) -> bool;

    /// 探测具名动画效果是否真实可用
    ///
    /// 实现约定：把效果施加到一次性探测元素上，观察它是否真正启动。
    /// 效果不存在时必须在两次帧回调内自行超时返回 `false`，
    /// 保证探测在任何环境下都不会悬挂。
    fn probe_animation<'a>(&'a self, effect: &'a str) -> LocalBoxFuture<'a, bool>;

    /// 请求准备过渡（快照当前状态）
    fn prepare(&self, options: PrepareOptions) -> LocalBoxFuture<'_, Result<(), TransitionError>>;

    /// 触发过渡提交（向新状态播放动画）
    fn start(&self, options: StartOptions) -> LocalBoxFuture<'_, Result<(), TransitionError>>;

    /// 在活动样式表中插入样式规则
    ///
    /// 每次过渡尝试前调用，规则文本由 [`crate::styles`] 生成。
    fn insert_styles(&self, rules: &[String]);
}
