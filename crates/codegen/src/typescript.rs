use indexmap::IndexMap;
use tokenwind_core::{token_paths, PathStyle, TokenGroup};

/// TypeScript 声明与 JavaScript 模块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOutput {
    /// `index.d.ts`
    pub declarations: String,
    /// `index.js`
    pub module: String,
    /// token 名称，按遍历顺序
    pub names: Vec<String>,
}

/// TS/JS token 导出生成器
#[derive(Debug, Clone)]
pub struct TypeEmitter {
    title: String,
}

impl TypeEmitter {
    pub fn new() -> Self {
        Self {
            title: "Design System".to_string(),
        }
    }

    /// 设置头部注释中的设计系统名称（builder 模式）
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// 生成 `TokenName` 联合类型和 `name → var(--name)` 映射
    pub fn emit(&self, tokens: &TokenGroup) -> Result<TypeOutput, serde_json::Error> {
        let names = token_paths(tokens, PathStyle::Shared);

        let declarations = self.declarations(&names);
        let module = self.module(&names)?;

        tracing::debug!(count = names.len(), "emitted token type exports");

        Ok(TypeOutput {
            declarations,
            module,
            names,
        })
    }

    fn declarations(&self, names: &[String]) -> String {
        let union = if names.is_empty() {
            " never".to_string()
        } else {
            names
                .iter()
                .map(|name| format!("\n  | '{}'", escape_single_quoted(name)))
                .collect()
        };

        format!(
            r#"/**
 * Design token names from {title}
 * Autocomplete-friendly type for accessing design tokens
 */
export type TokenName ={union};

/**
 * All design tokens as a key-value map
 * Keys are token names, values are CSS variable references
 */
export const tokens: Record<TokenName, string>;

/**
 * Default export with all tokens
 */
export default tokens;
"#,
            title = self.title,
            union = union,
        )
    }

    fn module(&self, names: &[String]) -> Result<String, serde_json::Error> {
        let map: IndexMap<&str, String> = names
            .iter()
            .map(|name| (name.as_str(), format!("var(--{})", name)))
            .collect();

        Ok(format!(
            r#"/**
 * {title} - Design Tokens
 * Auto-generated token exports
 */
export const tokens = {object};

export default tokens;
"#,
            title = self.title,
            object = serde_json::to_string_pretty(&map)?,
        ))
    }
}

impl Default for TypeEmitter {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
