use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 设计 token 叶子节点
///
/// 同时具有 `value` 和 `type` 字段的 JSON 对象在解析时即被判定为 token，
/// 之后的遍历不再做结构推断。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// 原始值或引用占位符（如 `{core.ivy-framework.source.color.primary}`）
    pub value: String,
    /// 分类（如 "color"）
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Token {
    pub fn new(value: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: kind.into(),
            description: None,
        }
    }

    pub fn color(value: impl Into<String>) -> Self {
        Self::new(value, "color")
    }

    /// 仅当对象同时包含 `value` 和 `type` 时才构造 token
    fn from_object(map: &Map<String, Value>) -> Option<Self> {
        let value = map.get("value")?;
        let kind = map.get("type")?;

        Some(Self {
            value: scalar_text(value),
            kind: scalar_text(kind),
            description: map
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }

    /// 逐字段应用分组中的 `value` / `type` / `description`，其他 key 忽略
    pub(crate) fn apply_fields(&mut self, fields: &TokenGroup) {
        if let Some(Node::Value(value)) = fields.get("value") {
            self.value = scalar_text(value);
        }
        if let Some(Node::Value(kind)) = fields.get("type") {
            self.kind = scalar_text(kind);
        }
        if let Some(Node::Value(Value::String(description))) = fields.get("description") {
            self.description = Some(description.clone());
        }
    }

    /// 分组中同时存在标量 `value` 和 `type` 时重新判定为 token
    pub(crate) fn from_group(group: &TokenGroup) -> Option<Self> {
        let (Some(Node::Value(value)), Some(Node::Value(kind))) =
            (group.get("value"), group.get("type"))
        else {
            return None;
        };

        Some(Self {
            value: scalar_text(value),
            kind: scalar_text(kind),
            description: match group.get("description") {
                Some(Node::Value(Value::String(description))) => Some(description.clone()),
                _ => None,
            },
        })
    }
}

/// 字符串原样保留，其他 JSON 值保存为紧凑 JSON 文本
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// token 树节点：token、分组或其他 JSON 值
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Token(Token),
    Group(TokenGroup),
    /// 非对象 JSON 值，遍历时跳过
    Value(Value),
}

impl Node {
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Node::Token(token) => Some(token),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&TokenGroup> {
        match self {
            Node::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Node::Token(_))
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => match Token::from_object(&map) {
                Some(token) => Node::Token(token),
                None => Node::Group(TokenGroup::from_map(map)),
            },
            other => Node::Value(other),
        }
    }
}

impl From<Token> for Node {
    fn from(token: Token) -> Self {
        Node::Token(token)
    }
}

impl From<TokenGroup> for Node {
    fn from(group: TokenGroup) -> Self {
        Node::Group(group)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Node::from)
    }
}

/// token 分组（非叶子节点）
///
/// 使用 IndexMap 保持文档顺序，保证输出稳定
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TokenGroup {
    entries: IndexMap<String, Node>,
}

impl TokenGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 对象构造分组，不做 token 判定（根节点总是分组）
    pub fn from_map(map: Map<String, Value>) -> Self {
        map.into_iter()
            .map(|(key, value)| (key, Node::from(value)))
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries.get_mut(key)
    }

    pub fn group(&self, key: &str) -> Option<&TokenGroup> {
        self.get(key).and_then(Node::as_group)
    }

    pub fn token(&self, key: &str) -> Option<&Token> {
        self.get(key).and_then(Node::as_token)
    }

    /// 按路径逐级查找子分组
    pub fn at_path<S: AsRef<str>>(&self, path: &[S]) -> Option<&TokenGroup> {
        path.iter()
            .try_fold(self, |group, key| group.group(key.as_ref()))
    }

    /// 按点分路径查找子分组（如 `core.ivy-framework`）
    pub fn at_dotted(&self, path: &str) -> Option<&TokenGroup> {
        let segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
        self.at_path(&segments)
    }

    /// 插入节点；已存在的 key 保持原位置
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<Node>) -> Option<Node> {
        self.entries.insert(key.into(), node.into())
    }

    /// builder 风格的插入
    pub fn with(mut self, key: impl Into<String>, node: impl Into<Node>) -> Self {
        self.insert(key, node);
        self
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn first_key(&self) -> Option<&str> {
        self.entries.keys().next().map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Node)> for TokenGroup {
    fn from_iter<T: IntoIterator<Item = (String, Node)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TokenGroup {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'de> Deserialize<'de> for TokenGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(map) => Ok(TokenGroup::from_map(map)),
            other => Err(de::Error::custom(format!(
                "expected a token group object, found {}",
                json_kind(&other)
            ))),
        }
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// 遍历得到的 token（带派生路径）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedToken {
    /// 以 `-` 连接的祖先 key 序列（如 "color-primary"）
    pub path: String,
    /// 叶子 key（如 "primary"）
    pub key: String,
    pub value: String,
    pub kind: String,
}

/// 诊断信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == DiagnosticLevel::Error
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Warning,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_leaf_detection_requires_value_and_type() {
        let node = Node::from(json!({ "value": "#fff", "type": "color" }));
        assert_eq!(node, Node::Token(Token::color("#fff")));

        let node = Node::from(json!({ "value": "#fff" }));
        assert!(node.as_group().is_some());
        assert!(!node.is_token());
    }

    #[test]
    fn test_non_string_value_is_stringified() {
        let node = Node::from(json!({ "value": 4, "type": "spacing" }));
        let token = node.as_token().unwrap();
        assert_eq!(token.value, "4");
        assert_eq!(token.kind, "spacing");
    }

    #[test]
    fn test_description_is_preserved() {
        let node = Node::from(json!({
            "value": "#000",
            "type": "color",
            "description": "ink"
        }));
        assert_eq!(node.as_token().unwrap().description.as_deref(), Some("ink"));
    }

    #[test]
    fn test_group_keeps_document_order() {
        let group: TokenGroup = serde_json::from_str(
            r#"{ "zeta": { "value": "1", "type": "x" }, "alpha": { "value": "2", "type": "x" } }"#,
        )
        .unwrap();
        let keys: Vec<&str> = group.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_root_must_be_object() {
        let result: Result<TokenGroup, _> = serde_json::from_str("[1, 2]");
        assert!(result.is_err());
    }

    #[test]
    fn test_at_dotted() {
        let group: TokenGroup = serde_json::from_value(json!({
            "core": { "ivy-framework": { "source": {} } }
        }))
        .unwrap();
        assert!(group.at_dotted("core.ivy-framework").is_some());
        assert!(group.at_dotted("core.ivy-framework.source").is_some());
        assert!(group.at_dotted("core.ivy-web").is_none());
    }

    #[test]
    fn test_serialize_round_shape() {
        let group = TokenGroup::new().with(
            "color",
            TokenGroup::new().with("primary", Token::color("#00cc92")),
        );
        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(
            value,
            json!({ "color": { "primary": { "value": "#00cc92", "type": "color" } } })
        );
    }
}
