pub mod check;
pub mod error;
pub mod loader;
pub mod merge;
pub mod naming;
pub mod resolve;
pub mod types;
pub mod walk;

// Re-export commonly used types
pub use check::{check_scope, is_color_value};
pub use error::{ResolveError, TokenError};
pub use loader::{find_scope, load_from_json, theme_tree};
pub use merge::{merge, merge_all, merge_into};
pub use resolve::{resolve, resolve_tokens, SourceScope};
pub use types::{Diagnostic, DiagnosticLevel, Node, ResolvedToken, Token, TokenGroup};
pub use walk::{token_paths, walk, PathStyle};

/// 遍历并解析引用，供各 emitter 共用
pub fn collect_tokens(
    group: &TokenGroup,
    style: PathStyle,
    scope: Option<&SourceScope<'_>>,
) -> Result<Vec<ResolvedToken>, ResolveError> {
    resolve_tokens(walk(group, style), scope)
}
