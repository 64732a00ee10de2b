//! # Metadata 模块
//!
//! 解析并校验幻灯片附带的过渡元数据。
//!
//! ## 输入格式
//!
//! 每页幻灯片可以附带一段 JSON（通常作为 data 属性嵌入标记）：
//!
//! ```json
//! {"name":"fade","duration":"0.3s"}
//! ```
//!
//! - `name`：必填，非空字符串
//! - `duration`：可选，CSS 时间字符串
//! - `builtinFallback`：可选，默认 `true`
//!
//! ## 设计说明
//!
//! 元数据每次导航尝试都从当前页重新读取，不做缓存。
//! 格式错误一律返回 `None`，不抛出、不上报：导航照常进行，只是没有过渡。

use serde::Deserialize;
use serde_json::Value;

/// 每页幻灯片声明的过渡请求
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransitionRequest {
    /// 过渡名称（非空标识符）
    pub name: String,

    /// 显式指定的过渡时长（CSS 时间字符串），`None` 表示使用关键帧自带时长
    #[serde(default)]
    pub duration: Option<String>,

    /// 主关键帧集合为空时，是否回退到内建关键帧
    #[serde(default = "default_builtin_fallback", rename = "builtinFallback")]
    pub builtin_fallback: bool,
}

fn default_builtin_fallback() -> bool {
    true
}

/// 判断一个 JSON 值是否为合法的过渡元数据
///
/// 合法条件：非空对象，`name` 为字符串，`duration` 缺失或为字符串。
pub fn is_transition_data(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };

    let name_ok = object.get("name").is_some_and(Value::is_string);
    let duration_ok = object.get("duration").is_none_or(Value::is_string);

    name_ok && duration_ok
}

/// 解析幻灯片附带的过渡元数据原文
///
/// 输入缺失、JSON 格式错误、未通过校验或 `name` 为空时均返回 `None`，
/// 绝不 panic。
pub fn parse_transition_data(raw: Option<&str>) -> Option<TransitionRequest> {
    let raw = raw?;
    let value: Value = serde_json::from_str(raw).ok()?;

    if !is_transition_data(&value) {
        return None;
    }

    let request: TransitionRequest = serde_json::from_value(value).ok()?;
    if request.name.is_empty() {
        return None;
    }

    Some(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_transition_data() {
        assert!(is_transition_data(&json!({"name": "fade"})));
        assert!(is_transition_data(&json!({"name": "fade", "duration": "1s"})));

        // 缺少 name
        assert!(!is_transition_data(&json!({"duration": "1s"})));
        // name 不是字符串
        assert!(!is_transition_data(&json!({"name": 42})));
        // duration 不是字符串
        assert!(!is_transition_data(&json!({"name": "fade", "duration": 0.3})));
        // 非对象
        assert!(!is_transition_data(&json!(null)));
        assert!(!is_transition_data(&json!("fade")));
        assert!(!is_transition_data(&json!(["fade"])));
    }

    #[test]
    fn test_parse_transition_data() {
        let request = parse_transition_data(Some(r#"{"name":"fade","duration":"0.3s"}"#)).unwrap();
        assert_eq!(request.name, "fade");
        assert_eq!(request.duration.as_deref(), Some("0.3s"));
        assert!(request.builtin_fallback);

        let request =
            parse_transition_data(Some(r#"{"name":"wipe","builtinFallback":false}"#)).unwrap();
        assert_eq!(request.name, "wipe");
        assert_eq!(request.duration, None);
        assert!(!request.builtin_fallback);
    }

    #[test]
    fn test_parse_transition_data_invalid() {
        // 输入缺失
        assert_eq!(parse_transition_data(None), None);
        // 非 JSON
        assert_eq!(parse_transition_data(Some("not json")), None);
        // 未通过校验
        assert_eq!(parse_transition_data(Some(r#"{"duration":"1s"}"#)), None);
        // name 为空
        assert_eq!(parse_transition_data(Some(r#"{"name":""}"#)), None);
        // builtinFallback 类型错误
        assert_eq!(
            parse_transition_data(Some(r#"{"name":"fade","builtinFallback":"yes"}"#)),
            None
        );
    }
}
