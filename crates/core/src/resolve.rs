use crate::error::ResolveError;
use crate::types::{Node, ResolvedToken, TokenGroup};
use regex::Regex;
use std::sync::LazyLock;

/// `{<scope-id>.source.color.<token-name>}`
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{([A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*)\.source\.color\.([\w-]+)\}$")
        .expect("placeholder pattern is valid")
});

/// 解析后的引用占位符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    pub scope_id: &'a str,
    pub token_name: &'a str,
}

/// 按占位符语法解析字符串；不匹配时返回 None（视为字面值）
pub fn parse_placeholder(value: &str) -> Option<Placeholder<'_>> {
    let caps = PLACEHOLDER_RE.captures(value)?;
    Some(Placeholder {
        scope_id: caps.get(1)?.as_str(),
        token_name: caps.get(2)?.as_str(),
    })
}

pub fn is_placeholder(value: &str) -> bool {
    PLACEHOLDER_RE.is_match(value)
}

/// 引用解析的目标 scope
///
/// 占位符中的 scope-id 必须是 `ids` 之一（如 `core.ivy-framework`）；
/// 多层合并时 source 是各层的并集，各层 id 都可作为引用目标
#[derive(Debug, Clone)]
pub struct SourceScope<'a> {
    ids: Vec<String>,
    colors: &'a TokenGroup,
}

impl<'a> SourceScope<'a> {
    /// 传入 source 分组：有 `color` 子分组时使用它，否则直接使用该分组
    pub fn new(id: impl Into<String>, source: &'a TokenGroup) -> Self {
        Self::with_ids([id], source)
    }

    /// 接受多个 scope-id，第一个为主 id
    pub fn with_ids<I, S>(ids: I, source: &'a TokenGroup) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if !unique.contains(&id) {
                unique.push(id);
            }
        }

        Self {
            ids: unique,
            colors: source.group("color").unwrap_or(source),
        }
    }

    pub fn id(&self) -> &str {
        self.ids.first().map(String::as_str).unwrap_or_default()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn accepts(&self, scope_id: &str) -> bool {
        self.ids.iter().any(|id| id == scope_id)
    }

    /// 只查一层，不做递归解析
    fn lookup(&self, name: &str) -> Option<&'a str> {
        match self.colors.get(name)? {
            Node::Token(token) => Some(token.value.as_str()),
            Node::Value(serde_json::Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// 解析单个值
///
/// - 没有 scope：原样返回
/// - 非占位符：原样返回
/// - scope-id 不一致：返回 `ResolveError::ScopeMismatch`
/// - 查找失败：原样返回占位符，便于在输出中定位
pub fn resolve(value: &str, scope: Option<&SourceScope<'_>>) -> Result<String, ResolveError> {
    let Some(scope) = scope else {
        return Ok(value.to_string());
    };
    let Some(placeholder) = parse_placeholder(value) else {
        return Ok(value.to_string());
    };

    if !scope.accepts(placeholder.scope_id) {
        return Err(ResolveError::ScopeMismatch {
            value: value.to_string(),
            expected: scope.ids().join(", "),
            found: placeholder.scope_id.to_string(),
        });
    }

    match scope.lookup(placeholder.token_name) {
        Some(resolved) => Ok(resolved.to_string()),
        None => {
            tracing::warn!(reference = value, scope = scope.id(), "unresolved token reference");
            Ok(value.to_string())
        }
    }
}

/// 对遍历结果逐个解析引用
pub fn resolve_tokens(
    tokens: Vec<ResolvedToken>,
    scope: Option<&SourceScope<'_>>,
) -> Result<Vec<ResolvedToken>, ResolveError> {
    tokens
        .into_iter()
        .map(|mut token| {
            token.value = resolve(&token.value, scope)?;
            Ok(token)
        })
        .collect()
}
