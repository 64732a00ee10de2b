//! # Keyframes 模块
//!
//! 定义过渡动画的方向、角色与关键帧集合。
//!
//! ## 设计说明
//!
//! - 一个过渡名称对应 6 个可寻址 cell（2 方向 × 3 角色）
//! - cell 的值是宿主环境中真实可用的动画效果名；探测不到则为空
//! - 集合本身不关心探测方式，探测由 [`crate::resolver`] 负责

use serde::{Deserialize, Serialize};

/// 导航方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// 向后翻页（索引增大）
    Forward,
    /// 向前翻页（索引减小）
    Backward,
}

impl Direction {
    /// 全部方向，遍历顺序固定
    pub const ALL: [Direction; 2] = [Direction::Forward, Direction::Backward];

    /// 由 backward 布尔值构造方向
    pub fn from_backward(backward: bool) -> Self {
        if backward {
            Self::Backward
        } else {
            Self::Forward
        }
    }

    /// 是否为后退方向
    pub fn is_backward(self) -> bool {
        matches!(self, Self::Backward)
    }

    /// 写入根作用域自定义属性的数值（前进 `1`，后退 `-1`）
    ///
    /// 幻灯片内容的 CSS 可以读取该值对导航方向做出反应。
    pub fn css_value(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    fn cell_index(self) -> usize {
        match self {
            Self::Forward => 0,
            Self::Backward => 1,
        }
    }
}

/// 关键帧角色
///
/// 区分效果施加在离场页、入场页，还是同一效果同时覆盖两者。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// 同一效果同时作用于入场与离场
    Both,
    /// 仅作用于入场页
    Incoming,
    /// 仅作用于离场页
    Outgoing,
}

impl Role {
    /// 全部角色，遍历顺序固定
    pub const ALL: [Role; 3] = [Role::Both, Role::Incoming, Role::Outgoing];

    fn cell_index(self) -> usize {
        match self {
            Self::Both => 0,
            Self::Incoming => 1,
            Self::Outgoing => 2,
        }
    }
}

/// 关键帧集合
///
/// 6 个 cell 的映射：`(Direction, Role) -> Option<效果名>`。
/// cell 为 `None` 表示对应能力在宿主环境不可用。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyframeSet {
    cells: [[Option<String>; 3]; 2],
}

impl KeyframeSet {
    /// 创建所有 cell 均为空的集合
    pub fn empty() -> Self {
        Self::default()
    }

    /// 读取指定 cell
    pub fn get(&self, direction: Direction, role: Role) -> Option<&str> {
        self.cells[direction.cell_index()][role.cell_index()].as_deref()
    }

    /// 写入指定 cell
    pub fn set(&mut self, direction: Direction, role: Role, name: Option<String>) {
        self.cells[direction.cell_index()][role.cell_index()] = name;
    }

    /// 是否所有 cell 均为空
    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_none()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_backward() {
        assert_eq!(Direction::from_backward(true), Direction::Backward);
        assert_eq!(Direction::from_backward(false), Direction::Forward);
        assert_eq!(Direction::Forward.css_value(), 1);
        assert_eq!(Direction::Backward.css_value(), -1);
    }

    #[test]
    fn test_keyframe_set_get_set() {
        let mut set = KeyframeSet::empty();
        assert!(set.is_empty());

        set.set(
            Direction::Forward,
            Role::Both,
            Some("transition-fade".to_string()),
        );

        assert!(!set.is_empty());
        assert_eq!(set.get(Direction::Forward, Role::Both), Some("transition-fade"));
        assert_eq!(set.get(Direction::Forward, Role::Incoming), None);
        assert_eq!(set.get(Direction::Backward, Role::Both), None);
    }

    #[test]
    fn test_keyframe_set_serialization() {
        let mut set = KeyframeSet::empty();
        set.set(
            Direction::Backward,
            Role::Outgoing,
            Some("outgoing-transition-backward-wipe".to_string()),
        );

        let json = serde_json::to_string(&set).unwrap();
        let deserialized: KeyframeSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, deserialized);
    }
}
