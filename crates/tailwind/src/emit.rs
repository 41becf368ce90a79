use crate::category::CATEGORIES;
use serde_json::{json, Map, Value};
use tokenwind_core::naming::join_path;
use tokenwind_core::{Node, TokenGroup};

/// 将分组转换为 Tailwind 对象，叶子值替换为 `var(--<path>)`
///
/// 始终引用 CSS 变量而不是字面值，运行时以 CSS 为唯一来源
pub fn token_to_tailwind(group: &TokenGroup, prefix: &str) -> Map<String, Value> {
    let mut result = Map::new();

    for (key, node) in group.iter() {
        let path = join_path(prefix, key);
        match node {
            Node::Token(_) => {
                result.insert(key.to_string(), Value::String(format!("var(--{})", path)));
            }
            Node::Group(child) => {
                result.insert(key.to_string(), Value::Object(token_to_tailwind(child, &path)));
            }
            Node::Value(_) => {}
        }
    }

    result
}

/// 按分类表构造 `theme.extend` 内容；缺失的分类不输出
pub fn tailwind_theme(tokens: &TokenGroup) -> Map<String, Value> {
    let mut theme = Map::new();

    for category in CATEGORIES {
        let mut merged: Option<Map<String, Value>> = None;

        for source in category.sources {
            let Some(group) = tokens.at_path(source) else {
                continue;
            };
            let entries = token_to_tailwind(group, &source.join("-"));
            merged.get_or_insert_with(Map::new).extend(entries);
        }

        if let Some(entries) = merged {
            theme.insert(category.key.to_string(), Value::Object(entries));
        }
    }

    theme
}

/// 生成 Tailwind 配置模块
///
/// 输出：`export default { "theme": { "extend": { ... } } };`
pub fn emit_tailwind(tokens: &TokenGroup) -> Result<String, serde_json::Error> {
    let theme = tailwind_theme(tokens);
    tracing::debug!(categories = theme.len(), "emitted tailwind theme");

    let config = json!({
        "theme": {
            "extend": Value::Object(theme)
        }
    });

    Ok(format!(
        "export default {};\n",
        serde_json::to_string_pretty(&config)?
    ))
}
