//! Typed reads over a node's open props map, with defaults.

use recruitify_common::BuilderNode;
use serde_json::Value;

pub fn str_prop<'a>(node: &'a BuilderNode, key: &str, default: &'a str) -> &'a str {
    node.prop_str(key).unwrap_or(default)
}

/// Non-empty string prop
pub fn opt_str_prop<'a>(node: &'a BuilderNode, key: &str) -> Option<&'a str> {
    node.prop_str(key).filter(|s| !s.is_empty())
}

/// Numeric prop; numeric strings ("24") are accepted too
pub fn num_prop(node: &BuilderNode, key: &str, default: f64) -> f64 {
    match node.props.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

pub fn bool_prop(node: &BuilderNode, key: &str, default: bool) -> bool {
    match node.props.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true",
        _ => default,
    }
}

pub fn array_prop<'a>(node: &'a BuilderNode, key: &str) -> &'a [Value] {
    node.props
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// String field of one record inside an array prop
pub fn item_str<'a>(item: &'a Value, key: &str) -> &'a str {
    item.get(key).and_then(Value::as_str).unwrap_or("")
}

/// CSS pixel length from a number
pub fn px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{}px", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recruitify_common::props;
    use serde_json::json;

    #[test]
    fn test_typed_reads() {
        let node = BuilderNode::new(
            "spacer",
            props! {
                "height" => "48",
                "visible" => true,
                "label" => "",
                "items" => [{ "title": "A" }],
            },
        );

        assert_eq!(num_prop(&node, "height", 32.0), 48.0);
        assert_eq!(num_prop(&node, "missing", 32.0), 32.0);
        assert!(bool_prop(&node, "visible", false));
        assert_eq!(opt_str_prop(&node, "label"), None);
        assert_eq!(str_prop(&node, "missing", "x"), "x");
        assert_eq!(array_prop(&node, "items").len(), 1);
        assert_eq!(item_str(&json!({ "title": "A" }), "title"), "A");
    }

    #[test]
    fn test_px() {
        assert_eq!(px(24.0), "24px");
        assert_eq!(px(1.5), "1.5px");
    }
}
