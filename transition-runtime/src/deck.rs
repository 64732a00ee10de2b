//! # Deck 模块
//!
//! 定义幻灯片放映对象暴露给协调器的窄接口与事件。
//!
//! ## 设计说明
//!
//! - 协调器不拥有 deck，只通过 [`NavigableDeck`] 读取位置并触发原始导航
//! - 激活 / 片段 / 全屏共用同一条事件总线；全屏不在本引擎职责内
//! - `apply` 是内部标志：准备完成后的二次投递携带它，命中 preparing
//!   状态的提交分支，不会重新触发准备

use serde::{Deserialize, Serialize};

/// 导航动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationAction {
    /// 上一页
    Prev,
    /// 下一页
    Next,
    /// 跳转到指定索引
    Slide { index: usize },
}

/// 导航意图
///
/// deck 层的一次导航请求，连同内部 `apply` 标志。
/// 外部投递的意图 `apply` 恒为 `false`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationIntent {
    /// 请求的动作
    pub action: NavigationAction,
    /// 内部二次投递标志
    pub apply: bool,
}

impl NavigationIntent {
    /// 创建"上一页"意图
    pub fn prev() -> Self {
        Self {
            action: NavigationAction::Prev,
            apply: false,
        }
    }

    /// 创建"下一页"意图
    pub fn next() -> Self {
        Self {
            action: NavigationAction::Next,
            apply: false,
        }
    }

    /// 创建"跳转"意图
    pub fn slide(index: usize) -> Self {
        Self {
            action: NavigationAction::Slide { index },
            apply: false,
        }
    }

    /// 携带 apply 标志的同一意图
    pub(crate) fn with_apply(self) -> Self {
        Self {
            apply: true,
            ..self
        }
    }
}

/// Deck 事件总线上的通知
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckEvent {
    /// 幻灯片激活（翻页完成）
    Activate { index: usize },
    /// 当前页片段状态变化
    Fragment { index: usize, count: usize },
    /// 全屏开关（仅共享事件总线，引擎忽略）
    Fullscreen { enabled: bool },
}

/// 幻灯片放映对象的窄接口
///
/// 对应运行中的放映实例：持有当前索引与导航方法。
/// 测试中用替身实现同一契约。
pub trait NavigableDeck {
    /// 幻灯片总数
    fn slide_count(&self) -> usize;

    /// 当前索引
    fn current_index(&self) -> usize;

    /// 当前页附带的过渡元数据原文（JSON 文本），无则为 `None`
    ///
    /// 每次导航尝试都重新读取，引擎不缓存。
    fn transition_source(&self) -> Option<String>;

    /// 执行原始导航
    ///
    /// 绕过拦截直接更新 deck 的索引/片段簿记。
    /// 只有协调器在准备就绪或降级时调用。
    fn navigate(&self, action: NavigationAction);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_creation() {
        let prev = NavigationIntent::prev();
        assert_eq!(prev.action, NavigationAction::Prev);
        assert!(!prev.apply);

        let slide = NavigationIntent::slide(3);
        assert_eq!(slide.action, NavigationAction::Slide { index: 3 });

        let applied = slide.with_apply();
        assert_eq!(applied.action, slide.action);
        assert!(applied.apply);
    }
}
