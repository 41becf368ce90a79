//! token 文档结构检查
//!
//! 只检查格式形状（hex / rgb / hsl / oklch 等），不校验颜色本身是否合理。

use crate::resolve::{parse_placeholder, resolve, SourceScope};
use crate::types::{Diagnostic, Node, TokenGroup};
use palette::Srgb;

/// 允许的函数式颜色前缀
const COLOR_FUNCTIONS: &[&str] = &["rgb(", "rgba(", "hsl(", "hsla(", "oklch("];

const VARIANTS: &[&str] = &["light", "dark"];

/// 判断值是否为受支持的颜色格式
pub fn is_color_value(value: &str) -> bool {
    if value.starts_with('#') {
        return value.parse::<Srgb<u8>>().is_ok();
    }
    COLOR_FUNCTIONS.iter().any(|f| value.starts_with(f))
}

fn looks_like_reference(value: &str) -> bool {
    value.starts_with('{') && value.ends_with('}')
}

/// 检查某个 scope 的结构约定，返回诊断信息
///
/// `scope_id` 同时用作文档路径和引用占位符中的 scope-id
pub fn check_scope(document: &TokenGroup, scope_id: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let Some(scope) = document.at_dotted(scope_id) else {
        diagnostics.push(Diagnostic::error(format!("scope `{}` not found", scope_id)));
        return diagnostics;
    };

    let source = scope.group("source");
    match source.and_then(|s| s.group("color")) {
        Some(colors) => check_source_colors(colors, &mut diagnostics),
        None => diagnostics.push(Diagnostic::error(format!(
            "scope `{}` has no `source.color` group",
            scope_id
        ))),
    }

    let source_scope = source.map(|s| SourceScope::new(scope_id, s));
    let mut variant_keys: Vec<(&str, Vec<&str>)> = Vec::new();

    for &variant in VARIANTS {
        match scope.at_path(&["theme", variant, "color"]) {
            Some(colors) => {
                check_theme_colors(variant, colors, source_scope.as_ref(), &mut diagnostics);
                variant_keys.push((variant, colors.keys().collect()));
            }
            None => diagnostics.push(Diagnostic::error(format!(
                "scope `{}` has no `theme.{}.color` group",
                scope_id, variant
            ))),
        }
    }

    if let [(_, light), (_, dark)] = variant_keys.as_slice() {
        let mut light = light.clone();
        let mut dark = dark.clone();
        light.sort_unstable();
        dark.sort_unstable();
        if light != dark {
            diagnostics.push(Diagnostic::error(
                "light and dark themes define different color keys",
            ));
        }
    }

    diagnostics
}

fn check_source_colors(colors: &TokenGroup, diagnostics: &mut Vec<Diagnostic>) {
    for (key, node) in colors.iter() {
        let Node::Token(token) = node else {
            diagnostics.push(Diagnostic::error(format!(
                "source color `{}` is missing `value` or `type`",
                key
            )));
            continue;
        };

        if token.kind != "color" {
            diagnostics.push(Diagnostic::error(format!(
                "source color `{}` has type `{}`, expected `color`",
                key, token.kind
            )));
        }

        if looks_like_reference(&token.value) {
            continue;
        }

        if !is_color_value(&token.value) {
            diagnostics.push(Diagnostic::error(format!(
                "source color `{}` has unsupported value `{}`",
                key, token.value
            )));
        }
    }
}

fn check_theme_colors(
    variant: &str,
    colors: &TokenGroup,
    scope: Option<&SourceScope<'_>>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for (key, node) in colors.iter() {
        let Node::Token(token) = node else {
            diagnostics.push(Diagnostic::error(format!(
                "{} theme color `{}` is missing `value` or `type`",
                variant, key
            )));
            continue;
        };

        if !looks_like_reference(&token.value) {
            continue;
        }

        if parse_placeholder(&token.value).is_none() {
            diagnostics.push(Diagnostic::error(format!(
                "{} theme color `{}` has malformed reference `{}`",
                variant, key, token.value
            )));
            continue;
        }

        match resolve(&token.value, scope) {
            Ok(resolved) if resolved == token.value => {
                diagnostics.push(Diagnostic::warning(format!(
                    "{} theme color `{}` references unknown token `{}`",
                    variant, key, token.value
                )));
            }
            Ok(_) => {}
            Err(err) => diagnostics.push(Diagnostic::error(format!(
                "{} theme color `{}`: {}",
                variant, key, err
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: serde_json::Value) -> TokenGroup {
        serde_json::from_value(value).unwrap()
    }

    fn valid() -> serde_json::Value {
        json!({
            "core": { "ivy-framework": {
                "source": { "color": {
                    "primary": { "value": "#00cc92", "type": "color" },
                    "black": { "value": "oklch(0 0 0)", "type": "color" }
                } },
                "theme": {
                    "light": { "color": {
                        "primary": { "value": "{core.ivy-framework.source.color.primary}", "type": "color" },
                        "foreground": { "value": "{core.ivy-framework.source.color.black}", "type": "color" }
                    } },
                    "dark": { "color": {
                        "foreground": { "value": "#f8f8f8", "type": "color" },
                        "primary": { "value": "{core.ivy-framework.source.color.primary}", "type": "color" }
                    } }
                }
            } }
        })
    }

    #[test]
    fn test_color_formats() {
        assert!(is_color_value("#00cc92"));
        assert!(is_color_value("#fff"));
        assert!(is_color_value("rgba(0, 0, 0, 0.5)"));
        assert!(is_color_value("hsl(120 50% 50%)"));
        assert!(is_color_value("oklch(0.7 0.1 200)"));
        assert!(!is_color_value("#zzzzzz"));
        assert!(!is_color_value("blue"));
    }

    #[test]
    fn test_valid_document_has_no_diagnostics() {
        let doc = document(valid());
        assert!(check_scope(&doc, "core.ivy-framework").is_empty());
    }

    #[test]
    fn test_missing_scope() {
        let doc = document(valid());
        let diagnostics = check_scope(&doc, "core.ivy-web");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].is_error());
    }

    #[test]
    fn test_invalid_source_value() {
        let mut raw = valid();
        raw["core"]["ivy-framework"]["source"]["color"]["primary"]["value"] = json!("green");
        let diagnostics = check_scope(&document(raw), "core.ivy-framework");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("unsupported value `green`"));
    }

    #[test]
    fn test_unknown_reference_is_warning() {
        let mut raw = valid();
        raw["core"]["ivy-framework"]["theme"]["dark"]["color"]["foreground"]["value"] =
            json!("{core.ivy-framework.source.color.nope}");
        let diagnostics = check_scope(&document(raw), "core.ivy-framework");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].level, crate::types::DiagnosticLevel::Warning);
    }

    #[test]
    fn test_foreign_scope_reference_is_error() {
        let mut raw = valid();
        raw["core"]["ivy-framework"]["theme"]["light"]["color"]["primary"]["value"] =
            json!("{core.ivy-web.source.color.primary}");
        let diagnostics = check_scope(&document(raw), "core.ivy-framework");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].is_error());
        assert!(diagnostics[0].message.contains("core.ivy-web"));
    }

    #[test]
    fn test_variant_key_mismatch() {
        let mut raw = valid();
        raw["core"]["ivy-framework"]["theme"]["dark"]["color"]["extra"] =
            json!({ "value": "#000000", "type": "color" });
        let diagnostics = check_scope(&document(raw), "core.ivy-framework");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("different color keys"));
    }
}
