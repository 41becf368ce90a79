use crate::alias::AliasTable;
use crate::emit::{write_layer, Declaration, Selector};
use tokenwind_core::{collect_tokens, PathStyle, ResolveError, SourceScope, TokenGroup};

/// 生成旧版扁平变量名的 CSS
///
/// 结构化路径使用限定命名（`theme-dark-color-primary`），再经别名表映射为扁平名。
/// 未命中时按别名表模式处理：严格模式丢弃，宽松模式回退为叶子 key。
pub fn emit_flat_css(
    tokens: &TokenGroup,
    selector: Selector,
    aliases: &AliasTable,
    scope: Option<&SourceScope<'_>>,
) -> Result<String, ResolveError> {
    let mut declarations = Vec::new();

    for token in collect_tokens(tokens, PathStyle::Qualified, scope)? {
        match aliases.flat_name(&token.path, &token.key) {
            Some(name) => declarations.push(Declaration::new(name, token.value)),
            None => tracing::debug!(path = %token.path, "no flat alias, token dropped"),
        }
    }

    Ok(write_layer(selector, &declarations))
}
