//! # Styles 模块
//!
//! 把解析出的关键帧集合转换为具体的样式规则文本。
//!
//! ## 回退链
//!
//! ```text
//! keyframes[direction][role]
//!   └─ 缺失 ──► keyframes[direction][both]（incoming 复用时标记反向播放）
//!        └─ 缺失且 backward ──► 整体按 forward 重查一次
//!             └─ 仍缺失 ──► 哨兵绑定 "none"（惰性但合法的动画目标）
//! ```
//!
//! backward 对 forward 的回退只发生一次（forward 没有进一步回退），
//! 不存在循环。

use crate::keyframes::{Direction, KeyframeSet, Role};

/// 单个角色解析出的动画变量绑定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationVariables {
    /// 动画效果名；没有可用关键帧时为哨兵值 `"none"`
    pub name: String,
    /// incoming 复用 both 效果时反向播放
    pub reversed: bool,
}

impl AnimationVariables {
    /// 哨兵绑定：保证页面过渡机制始终有合法的惰性目标
    fn none() -> Self {
        Self {
            name: "none".to_string(),
            reversed: false,
        }
    }
}

/// 解析指定角色与方向的动画变量绑定
///
/// 精确 cell 优先；缺失时复用同方向的 `both` cell，
/// 此时 incoming 角色标记为反向播放（入场效果即离场效果倒放）。
/// backward 方向两者皆缺失时，整体按 forward 重查一次。
pub fn resolve_animation_variables(
    keyframes: &KeyframeSet,
    role: Role,
    backward: bool,
) -> AnimationVariables {
    let direction = Direction::from_backward(backward);

    if let Some(name) = keyframes.get(direction, role) {
        return AnimationVariables {
            name: name.to_string(),
            reversed: false,
        };
    }

    if let Some(name) = keyframes.get(direction, Role::Both) {
        return AnimationVariables {
            name: name.to_string(),
            reversed: role == Role::Incoming,
        };
    }

    if backward {
        // backward 没有任何可用 cell：按 forward 重查，至多一次
        return resolve_animation_variables(keyframes, role, false);
    }

    AnimationVariables::none()
}

/// 角色对应的原生过渡伪元素目标
fn pseudo_target(role: Role) -> &'static str {
    match role {
        Role::Incoming => "::view-transition-new(root)",
        _ => "::view-transition-old(root)",
    }
}

/// 生成一次过渡所需的全部样式规则
///
/// 输出顺序固定：方向属性 → 时长（可选）→ incoming 绑定 → outgoing 绑定。
/// 各规则的选择器互不重叠，顺序不影响正确性，固定只为可测试性。
pub fn resolve_animation_styles(
    keyframes: &KeyframeSet,
    backward: bool,
    duration: Option<&str>,
) -> Vec<String> {
    let mut rules = Vec::with_capacity(4);

    // 根作用域记录导航方向，幻灯片内容的 CSS 可据此反应
    let direction = Direction::from_backward(backward);
    rules.push(format!(
        ":root{{--transition-direction:{};}}",
        direction.css_value()
    ));

    if let Some(duration) = duration {
        rules.push(format!(
            "::view-transition-old(root),::view-transition-new(root){{animation-duration:{duration};}}"
        ));
    }

    for role in [Role::Incoming, Role::Outgoing] {
        let variables = resolve_animation_variables(keyframes, role, backward);
        let mut declarations = format!("animation-name:{};", variables.name);
        if variables.reversed {
            declarations.push_str("animation-direction:reverse;");
        }
        rules.push(format!("{}{{{}}}", pseudo_target(role), declarations));
    }

    rules
}
