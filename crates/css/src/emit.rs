use tokenwind_core::{collect_tokens, PathStyle, ResolveError, SourceScope, TokenGroup};

/// 输出选择器
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selector {
    #[default]
    Root,
    Dark,
}

impl Selector {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Selector::Dark
        } else {
            Selector::Root
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Selector::Root => ":root",
            Selector::Dark => ".dark",
        }
    }
}

/// CSS 自定义属性声明
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// 不含 `--` 前缀的变量名
    pub name: String,
    pub value: String,
}

impl Declaration {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// 将声明包装为 `@layer base { <selector> { ... } }`
///
/// 保证：相同输入产生相同输出
pub fn write_layer(selector: Selector, declarations: &[Declaration]) -> String {
    let indent = "  ";
    let mut css = String::new();

    css.push_str("@layer base {\n");
    css.push_str(&format!("{}{} {{\n", indent, selector.as_str()));
    for decl in declarations {
        css.push_str(&format!(
            "{}{}--{}: {};\n",
            indent, indent, decl.name, decl.value
        ));
    }
    css.push_str(&format!("{}}}\n", indent));
    css.push_str("}\n");

    css
}

/// 生成 CSS 自定义属性
///
/// 变量名使用完整派生路径；主题树使用共享命名（`theme.dark.color.primary` → `--color-primary`），
/// 这样 `.dark` 覆盖的正是 `:root` 定义的变量。
pub fn emit_css(
    tokens: &TokenGroup,
    selector: Selector,
    scope: Option<&SourceScope<'_>>,
) -> Result<String, ResolveError> {
    let declarations: Vec<Declaration> = collect_tokens(tokens, PathStyle::Shared, scope)?
        .into_iter()
        .map(|token| Declaration::new(token.path, token.value))
        .collect();

    tracing::debug!(
        selector = selector.as_str(),
        count = declarations.len(),
        "emitted css custom properties"
    );

    Ok(write_layer(selector, &declarations))
}
