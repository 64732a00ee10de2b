//! # Error 模块
//!
//! 定义 transition-runtime 中使用的错误类型。
//!
//! 引擎内没有致命错误：所有失败路径都降级为无过渡导航。
//! 这里的类型只用于宿主向引擎报告 prepare/start 被拒绝的原因。

use thiserror::Error;

/// 过渡错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransitionError {
    /// 宿主缺少原生过渡能力
    #[error("宿主缺少原生过渡能力")]
    Unsupported,

    /// 过渡准备被拒绝
    #[error("过渡准备被拒绝: {reason}")]
    PrepareRejected { reason: String },

    /// 过渡提交被拒绝
    #[error("过渡提交被拒绝: {reason}")]
    StartRejected { reason: String },
}
