use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokenwind_core::{token_paths, PathStyle, TokenGroup};
use tokenwind_css::{emit_css, Selector};
use tokenwind_tailwind::{emit_tailwind, tailwind_theme};

fn tree(value: Value) -> TokenGroup {
    serde_json::from_value(value).unwrap()
}

fn source() -> TokenGroup {
    tree(json!({
        "color": {
            "primary": { "value": "#00cc92", "type": "color" },
            "primary-foreground": { "value": "#ffffff", "type": "color" },
            "gray": {
                "50": { "value": "#fafafa", "type": "color" },
                "900": { "value": "#171717", "type": "color" }
            }
        }
    }))
}

fn collect_vars(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => {
            if let Some(name) = s.strip_prefix("var(--").and_then(|s| s.strip_suffix(')')) {
                out.push(name.to_string());
            }
        }
        Value::Object(map) => map.values().for_each(|v| collect_vars(v, out)),
        _ => {}
    }
}

#[test]
fn test_every_css_property_is_referenced_by_tailwind() {
    let tokens = source();

    let css = emit_css(&tokens, Selector::Root, None).unwrap();
    let mut referenced = Vec::new();
    collect_vars(&Value::Object(tailwind_theme(&tokens)), &mut referenced);

    for path in token_paths(&tokens, PathStyle::Shared) {
        assert!(css.contains(&format!("--{}: ", path)), "css missing {}", path);
        assert!(referenced.contains(&path), "tailwind missing {}", path);
    }
}

#[test]
fn test_tailwind_module_for_color_source() {
    let output = emit_tailwind(&source()).unwrap();
    let body = output
        .strip_prefix("export default ")
        .and_then(|s| s.strip_suffix(";\n"))
        .unwrap();
    let config: Value = serde_json::from_str(body).unwrap();

    assert_eq!(
        config,
        json!({
            "theme": { "extend": { "colors": {
                "primary": "var(--color-primary)",
                "primary-foreground": "var(--color-primary-foreground)",
                "gray": {
                    "50": "var(--color-gray-50)",
                    "900": "var(--color-gray-900)"
                }
            } } }
        })
    );
}
