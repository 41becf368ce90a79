//! C# 静态类生成
//!
//! 所有 token 归入同一分类 `color`（嵌套类 `Color`），常量名取自叶子 key。
//! 生成的辅助方法在运行时通过反射枚举字段，字段为空时输出空块。

use std::collections::HashSet;
use tokenwind_core::naming::{to_identifier, to_pascal_case};
use tokenwind_core::{collect_tokens, PathStyle, ResolveError, SourceScope, TokenGroup};

/// 单个 C# 常量
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CSharpProperty {
    /// 完整 token 路径（如 "color-primary"）
    pub name: String,
    /// C# 字段名（如 "Primary"）
    pub property_name: String,
    pub value: String,
}

/// 一个分类对应一个嵌套类
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CSharpCategory {
    pub category: String,
    pub class_name: String,
    pub properties: Vec<CSharpProperty>,
}

const CATEGORY: &str = "color";

const AUTO_GENERATED_BANNER: &str = "//------------------------------------------------------------------------------
// <auto-generated>
//     This code was generated by %TITLE% build script.
//     Changes to this file may cause incorrect behavior and will be lost if
//     the code is regenerated.
// </auto-generated>
//------------------------------------------------------------------------------
";

const CSS_LOOP: &str = "
            // %CATEGORY% tokens
            foreach (var field in typeof(%CATEGORY%).GetFields(System.Reflection.BindingFlags.Public | System.Reflection.BindingFlags.Static))
            {
                if (field.FieldType == typeof(string))
                {
                    var name = string.Concat(field.Name.Select((x, i) => i > 0 && char.IsUpper(x) ? \"-\" + x.ToString() : x.ToString())).ToLower();
                    var value = field.GetValue(null);
                    css.AppendLine($\"  --{name}: {value};\");
                }
            }";

const DICTIONARY_LOOP: &str = "
            // %CATEGORY% tokens
            foreach (var field in typeof(%CATEGORY%).GetFields(System.Reflection.BindingFlags.Public | System.Reflection.BindingFlags.Static))
            {
                if (field.FieldType == typeof(string))
                {
                    var name = string.Concat(field.Name.Select((x, i) => i > 0 && char.IsUpper(x) ? \"-\" + x.ToString() : x.ToString())).ToLower();
                    var value = field.GetValue(null) as string;
                    if (value != null) tokens[name] = value;
                }
            }";

const GET_TOKEN: &str = "
        /// <summary>
        /// Gets a token value by its CSS variable name
        /// </summary>
        /// <param name=\"tokenName\">Token name in kebab-case (e.g., \"color-primary\")</param>
        /// <returns>Token value or null if not found</returns>
        public static string? GetToken(string tokenName)
        {
            if (string.IsNullOrEmpty(tokenName)) return null;

            if (FieldNames.TryGetValue(tokenName, out var qualified))
            {
                var separator = qualified.IndexOf('.');
                var owner = typeof(%CLASS%).GetNestedType(qualified.Substring(0, separator));
                var member = owner?.GetField(qualified.Substring(separator + 1), System.Reflection.BindingFlags.Public | System.Reflection.BindingFlags.Static);
                return member?.GetValue(null) as string;
            }

            var propertyName = string.Concat(tokenName.Split('-').Where(s => s.Length > 0).Select(s =>
                char.ToUpper(s[0]) + s.Substring(1)));

            foreach (var type in typeof(%CLASS%).GetNestedTypes())
            {
                var field = type.GetField(propertyName, System.Reflection.BindingFlags.Public | System.Reflection.BindingFlags.Static);
                if (field != null) return field.GetValue(null) as string;
            }

            return null;
        }
";

/// C# 静态类生成器
#[derive(Debug, Clone)]
pub struct CSharpEmitter {
    class_name: String,
    namespace: String,
    title: String,
    generated_at: Option<String>,
}

impl CSharpEmitter {
    pub fn new() -> Self {
        Self {
            class_name: "DesignSystemTokens".to_string(),
            namespace: "Ivy.Themes".to_string(),
            title: "Ivy Design System".to_string(),
            generated_at: None,
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// 生成时间戳写入 remarks；不设置时省略该行，输出完全确定
    pub fn with_generated_at(mut self, timestamp: impl Into<String>) -> Self {
        self.generated_at = Some(timestamp.into());
        self
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// 提取并解析 token，按分类分组
    pub fn categories(
        &self,
        tokens: &TokenGroup,
        scope: Option<&SourceScope<'_>>,
    ) -> Result<Vec<CSharpCategory>, ResolveError> {
        let resolved = collect_tokens(tokens, PathStyle::Shared, scope)?;

        let class_name = to_pascal_case(CATEGORY);
        // 成员名不能与所在嵌套类同名（CS0542）
        let mut taken = HashSet::from([class_name.clone()]);
        let properties = resolved
            .into_iter()
            .map(|token| {
                let property_name = unique_property_name(&token.key, &token.path, &mut taken);
                CSharpProperty {
                    name: token.path,
                    property_name,
                    value: token.value,
                }
            })
            .collect();

        Ok(vec![CSharpCategory {
            category: CATEGORY.to_string(),
            class_name,
            properties,
        }])
    }

    /// 生成完整 C# 源文件
    pub fn emit(
        &self,
        tokens: &TokenGroup,
        scope: Option<&SourceScope<'_>>,
    ) -> Result<String, ResolveError> {
        let categories = self.categories(tokens, scope)?;
        let total: usize = categories.iter().map(|c| c.properties.len()).sum();

        let mut out = String::new();
        out.push_str(&AUTO_GENERATED_BANNER.replace("%TITLE%", &self.title));
        out.push_str("\n#nullable enable\n\nusing System.Linq;\n\n");
        out.push_str(&format!("namespace {}\n{{\n", self.namespace));
        out.push_str("    /// <summary>\n");
        out.push_str(&format!(
            "    /// Design System tokens generated from {}\n",
            self.title
        ));
        out.push_str("    /// Provides compile-time access to all design tokens\n");
        out.push_str("    /// </summary>\n");
        out.push_str("    /// <remarks>\n");
        if let Some(generated_at) = &self.generated_at {
            out.push_str(&format!("    /// Generated on: {}\n", generated_at));
        }
        out.push_str(&format!("    /// Total tokens: {}\n", total));
        out.push_str("    /// </remarks>\n");
        out.push_str(&format!("    public static class {}\n    {{\n", self.class_name));

        for category in &categories {
            out.push_str(&nested_class(category));
        }

        out.push_str(&self.field_names(&categories));
        out.push_str(&generate_css_method(&categories));
        out.push_str(&GET_TOKEN.replace("%CLASS%", &self.class_name));
        out.push_str(&all_token_names_method(&categories));
        out.push_str(&all_tokens_method(&categories));

        out.push_str("    }\n}\n");

        tracing::debug!(
            class = %self.class_name,
            count = total,
            "emitted c# token class"
        );

        Ok(out)
    }

    fn field_names(&self, categories: &[CSharpCategory]) -> String {
        let mut out = String::new();
        out.push_str("\n        private static readonly System.Collections.Generic.Dictionary<string, string> FieldNames =\n");
        out.push_str("            new System.Collections.Generic.Dictionary<string, string>\n");
        out.push_str("            {\n");
        for category in categories {
            for property in &category.properties {
                out.push_str(&format!(
                    "                {{ \"{}\", \"{}.{}\" }},\n",
                    escape_string(&property.name),
                    category.class_name,
                    property.property_name
                ));
            }
        }
        out.push_str("            };\n");
        out
    }
}

impl Default for CSharpEmitter {
    fn default() -> Self {
        Self::new()
    }
}

/// 常量名优先取叶子 key；冲突时使用去掉分类前缀的完整路径，再冲突则追加序号
fn unique_property_name(key: &str, path: &str, taken: &mut HashSet<String>) -> String {
    let stripped = path
        .strip_prefix(CATEGORY)
        .and_then(|rest| rest.strip_prefix('-'))
        .unwrap_or(path);

    let candidates = [to_identifier(key), to_identifier(stripped)];
    for candidate in candidates {
        if taken.insert(candidate.clone()) {
            return candidate;
        }
    }

    let base = to_identifier(stripped);
    let mut n = 2;
    loop {
        let candidate = format!("{}{}", base, n);
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

/// 转义 C# 字符串字面量
fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn nested_class(category: &CSharpCategory) -> String {
    let properties: Vec<String> = category
        .properties
        .iter()
        .map(|property| {
            format!(
                "            /// <summary>{}</summary>\n            public static readonly string {} = \"{}\";",
                escape_xml(&property.name),
                property.property_name,
                escape_string(&property.value)
            )
        })
        .collect();

    let mut out = String::new();
    out.push_str("\n        /// <summary>\n");
    out.push_str(&format!("        /// Design tokens for {}\n", category.category));
    out.push_str("        /// </summary>\n");
    out.push_str(&format!("        public static class {}\n", category.class_name));
    out.push_str("        {\n");
    if !properties.is_empty() {
        out.push_str(&properties.join("\n\n"));
        out.push('\n');
    }
    out.push_str("        }\n");
    out
}

fn generate_css_method(categories: &[CSharpCategory]) -> String {
    let mut out = String::new();
    out.push_str(
        "
        /// <summary>
        /// Generates CSS custom properties for all design tokens
        /// </summary>
        /// <param name=\"selector\">CSS selector (default: \":root\")</param>
        /// <returns>CSS string with all custom properties</returns>
        public static string GenerateCSS(string selector = \":root\")
        {
            var css = new System.Text.StringBuilder();
            css.AppendLine($\"{selector} {{\");",
    );
    for category in categories {
        out.push_str(&CSS_LOOP.replace("%CATEGORY%", &category.class_name));
    }
    out.push_str(
        "

            css.AppendLine(\"}\");
            return css.ToString();
        }
",
    );
    out
}

fn all_token_names_method(categories: &[CSharpCategory]) -> String {
    let names: Vec<String> = categories
        .iter()
        .flat_map(|c| c.properties.iter())
        .map(|p| format!("                \"{}\"", escape_string(&p.name)))
        .collect();

    let mut out = String::new();
    out.push_str(
        "
        /// <summary>
        /// Gets all token names
        /// </summary>
        /// <returns>Array of all token names in kebab-case</returns>
        public static string[] GetAllTokenNames()
        {
            return new string[]
            {
",
    );
    if !names.is_empty() {
        out.push_str(&names.join(",\n"));
        out.push('\n');
    }
    out.push_str(
        "            };
        }
",
    );
    out
}

fn all_tokens_method(categories: &[CSharpCategory]) -> String {
    let mut out = String::new();
    out.push_str(
        "
        /// <summary>
        /// Gets all token values as a dictionary
        /// </summary>
        /// <returns>Dictionary of token name -> value</returns>
        public static System.Collections.Generic.Dictionary<string, string> GetAllTokens()
        {
            var tokens = new System.Collections.Generic.Dictionary<string, string>();",
    );
    for category in categories {
        out.push_str(&DICTIONARY_LOOP.replace("%CATEGORY%", &category.class_name));
    }
    out.push_str(
        "

            return tokens;
        }
",
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: serde_json::Value) -> TokenGroup {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_single_token_class() {
        let tokens = tree(json!({
            "color": { "primary": { "value": "#fff", "type": "color" } }
        }));

        let code = CSharpEmitter::new()
            .with_class_name("T")
            .emit(&tokens, None)
            .unwrap();

        assert!(code.contains("public static class T\n"));
        assert!(code.contains("public static class Color\n"));
        assert!(code.contains("/// <summary>color-primary</summary>"));
        assert!(code.contains("public static readonly string Primary = \"#fff\";"));
        assert!(code.contains("            {\n                \"color-primary\"\n            };"));
        assert!(code.contains("{ \"color-primary\", \"Color.Primary\" },"));
        assert!(code.contains("GetToken(string tokenName)"));
        assert!(code.contains("typeof(T).GetNestedType"));
    }

    #[test]
    fn test_references_are_resolved() {
        let source = tree(json!({
            "color": {
                "primary": { "value": "#00cc92", "type": "color" },
                "black": { "value": "#000000", "type": "color" }
            }
        }));
        let light = tree(json!({
            "theme": { "light": { "color": {
                "primary": { "value": "{core.ivy-framework.source.color.primary}", "type": "color" },
                "primary-foreground": { "value": "{core.ivy-framework.source.color.black}", "type": "color" }
            } } }
        }));
        let scope = SourceScope::new("core.ivy-framework", &source);

        let code = CSharpEmitter::new()
            .with_class_name("LightThemeTokens")
            .emit(&light, Some(&scope))
            .unwrap();

        assert!(code.contains("Primary = \"#00cc92\""));
        assert!(code.contains("PrimaryForeground = \"#000000\""));
        assert!(!code.contains("source.color"));
    }

    #[test]
    fn test_values_are_escaped() {
        let tokens = tree(json!({
            "color": { "font": { "value": "\"Inter\", sans-serif", "type": "color" } }
        }));

        let code = CSharpEmitter::new().emit(&tokens, None).unwrap();
        assert!(code.contains("Font = \"\\\"Inter\\\", sans-serif\";"));
    }

    #[test]
    fn test_empty_tree_emits_empty_blocks() {
        let code = CSharpEmitter::new().emit(&TokenGroup::new(), None).unwrap();

        assert!(code.contains("public static class Color\n        {\n        }\n"));
        assert!(code.contains("return new string[]\n            {\n            };"));
        assert!(code.contains("/// Total tokens: 0"));
        assert!(code.contains("foreach (var field in typeof(Color).GetFields"));
    }

    #[test]
    fn test_property_name_collisions() {
        let tokens = tree(json!({
            "color": {
                "primary": { "value": "#111", "type": "color" },
                "brand": { "primary": { "value": "#222", "type": "color" } },
                "gray": { "50": { "value": "#fafafa", "type": "color" } }
            }
        }));

        let categories = CSharpEmitter::new().categories(&tokens, None).unwrap();
        let names: Vec<&str> = categories[0]
            .properties
            .iter()
            .map(|p| p.property_name.as_str())
            .collect();
        assert_eq!(names, vec!["Primary", "BrandPrimary", "_50"]);
    }

    #[test]
    fn test_member_never_shares_class_name() {
        let tokens = tree(json!({
            "color": {
                "color": { "value": "#123456", "type": "color" },
                "primary": { "value": "#fff", "type": "color" }
            }
        }));

        let categories = CSharpEmitter::new().categories(&tokens, None).unwrap();
        let names: Vec<&str> = categories[0]
            .properties
            .iter()
            .map(|p| p.property_name.as_str())
            .collect();
        assert_eq!(names, vec!["Color2", "Primary"]);
        assert_eq!(categories[0].class_name, "Color");
    }

    #[test]
    fn test_timestamp_is_optional() {
        let tokens = tree(json!({
            "color": { "primary": { "value": "#fff", "type": "color" } }
        }));

        let without = CSharpEmitter::new().emit(&tokens, None).unwrap();
        assert!(!without.contains("Generated on:"));

        let with = CSharpEmitter::new()
            .with_generated_at("2026-01-01T00:00:00.000Z")
            .emit(&tokens, None)
            .unwrap();
        assert!(with.contains("/// Generated on: 2026-01-01T00:00:00.000Z"));
    }

    #[test]
    fn test_namespace_and_banner() {
        let code = CSharpEmitter::new()
            .with_namespace("Acme.Tokens")
            .with_title("Acme")
            .emit(&TokenGroup::new(), None)
            .unwrap();

        assert!(code.starts_with("//------------------------------------------------------------------------------\n// <auto-generated>\n"));
        assert!(code.contains("generated by Acme build script."));
        assert!(code.contains("namespace Acme.Tokens\n{\n"));
        assert!(code.ends_with("    }\n}\n"));
    }
}
