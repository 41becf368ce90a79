use crate::error::TokenError;
use crate::types::TokenGroup;

/// 从 JSON 字符串加载 token 文档
///
/// JSON 格式示例：
/// ```json
/// {
///   "core": {
///     "ivy-framework": {
///       "source": { "color": { "primary": { "value": "#00cc92", "type": "color" } } },
///       "theme": {
///         "light": { "color": { "primary": { "value": "{core.ivy-framework.source.color.primary}", "type": "color" } } }
///       }
///     }
///   }
/// }
/// ```
pub fn load_from_json(json_str: &str) -> Result<TokenGroup, TokenError> {
    Ok(serde_json::from_str(json_str)?)
}

/// 按点分 id 取出某个 scope（如 `core.ivy-framework`）
pub fn find_scope<'a>(document: &'a TokenGroup, id: &str) -> Result<&'a TokenGroup, TokenError> {
    document
        .at_dotted(id)
        .ok_or_else(|| TokenError::MissingScope(id.to_string()))
}

/// 将某个主题变体包装为 `{ theme: { <variant>: ... } }`，供单变体遍历
pub fn theme_tree(scope: &TokenGroup, variant: &str) -> TokenGroup {
    let body = scope
        .at_path(&["theme", variant])
        .cloned()
        .unwrap_or_default();

    TokenGroup::new().with("theme", TokenGroup::new().with(variant, body))
}
