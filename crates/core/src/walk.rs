use crate::naming::join_path;
use crate::types::{Node, ResolvedToken, TokenGroup};

/// 主题分组的路径命名方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathStyle {
    /// `theme.<variant>.color` 贡献 `theme-<variant>-color`
    #[default]
    Qualified,
    /// `theme.<variant>.color` 只贡献 `color`，明暗主题共享同一组名称
    Shared,
}

/// 遍历 token 树，按文档顺序返回所有 token 及其派生路径
///
/// 规则：
/// - 含 `theme` 的分组：进入 `theme.<variant>.color`（只取第一个 variant）
/// - 否则含 `color` 的分组：进入 `color`，兄弟 key 不再访问
/// - 否则逐个子节点：token 直接输出，分组递归（跳过 `theme`）
pub fn walk(group: &TokenGroup, style: PathStyle) -> Vec<ResolvedToken> {
    let mut out = Vec::new();
    walk_into(group, "", style, &mut out);
    out
}

/// 只返回派生路径
pub fn token_paths(group: &TokenGroup, style: PathStyle) -> Vec<String> {
    walk(group, style).into_iter().map(|t| t.path).collect()
}

fn walk_into(group: &TokenGroup, prefix: &str, style: PathStyle, out: &mut Vec<ResolvedToken>) {
    if let Some((variant, colors)) = theme_colors(group) {
        let segment = match style {
            PathStyle::Qualified => format!("theme-{}-color", variant),
            PathStyle::Shared => "color".to_string(),
        };
        walk_into(colors, &join_path(prefix, &segment), style, out);
        return;
    }

    if let Some(colors) = group.group("color") {
        walk_into(colors, &join_path(prefix, "color"), style, out);
        return;
    }

    for (key, node) in group.iter() {
        match node {
            Node::Token(token) => out.push(ResolvedToken {
                path: join_path(prefix, key),
                key: key.to_string(),
                value: token.value.clone(),
                kind: token.kind.clone(),
            }),
            Node::Group(child) if key != "theme" => {
                walk_into(child, &join_path(prefix, key), style, out);
            }
            _ => {}
        }
    }
}

/// 解析 `theme.<variant>.color`，返回 (variant, color 分组)
fn theme_colors(group: &TokenGroup) -> Option<(&str, &TokenGroup)> {
    let theme = group.group("theme")?;
    let variant = theme.first_key()?;

    if theme.len() > 1 {
        tracing::warn!(
            variant,
            variants = theme.len(),
            "theme group holds several variants, only the first is visited"
        );
    }

    let colors = theme.group(variant)?.group("color")?;
    Some((variant, colors))
}
