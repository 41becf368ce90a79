use thiserror::Error;

/// 加载 token 文档时的错误
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid token document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scope `{0}` not found in token document")]
    MissingScope(String),
}

/// 引用解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// 占位符声明的 scope 与调用方提供的 scope 不一致
    #[error("reference `{value}` targets scope `{found}`, but resolution scope is `{expected}`")]
    ScopeMismatch {
        value: String,
        expected: String,
        found: String,
    },
}
