use crate::types::{Node, Token, TokenGroup};
use serde_json::Value;

/// 深度合并两个 token 树，返回合并后的 target
///
/// 功能：
/// - 分组与分组：递归合并，保留只存在于一侧的兄弟 key
/// - token 与 token：source 的 value/type 覆盖，description 缺省时保留 target 的
/// - token 与分组：按字段合并 `value` / `type` / `description`，结果仍是 token
/// - 其他情况：source 直接覆盖
/// - 被覆盖的 key 保持原位置（IndexMap），新 key 追加到末尾
pub fn merge(mut target: TokenGroup, source: TokenGroup) -> TokenGroup {
    merge_into(&mut target, source);
    target
}

/// 就地合并
pub fn merge_into(target: &mut TokenGroup, source: TokenGroup) {
    for (key, incoming) in source {
        match target.get_mut(&key) {
            Some(existing) => merge_node(existing, incoming),
            None => {
                target.insert(key, incoming);
            }
        }
    }
}

fn merge_node(existing: &mut Node, incoming: Node) {
    let replacement = match (&mut *existing, incoming) {
        (Node::Group(group), Node::Group(other)) => {
            merge_into(group, other);
            None
        }
        (Node::Token(token), Node::Token(other)) => {
            token.value = other.value;
            token.kind = other.kind;
            if other.description.is_some() {
                token.description = other.description;
            }
            None
        }
        // 部分覆盖（如只有 value 或 description）
        (Node::Token(token), Node::Group(fields)) => {
            token.apply_fields(&fields);
            None
        }
        (Node::Group(group), Node::Token(token)) => {
            group.insert("value", Value::String(token.value));
            group.insert("type", Value::String(token.kind));
            if let Some(description) = token.description {
                group.insert("description", Value::String(description));
            }
            Token::from_group(group).map(Node::Token)
        }
        (_, incoming) => Some(incoming),
    };

    if let Some(node) = replacement {
        *existing = node;
    }
}

/// 按顺序合并多层 token 树（如 core → product → theme），后者优先
pub fn merge_all<I>(layers: I) -> TokenGroup
where
    I: IntoIterator<Item = TokenGroup>,
{
    layers.into_iter().fold(TokenGroup::new(), merge)
}
