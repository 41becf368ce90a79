/// 拼接派生路径：前缀为空时直接返回 key
pub fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}-{}", prefix, key)
    }
}

/// kebab-case → PascalCase
///
/// 例如：
/// - "primary-foreground" → "PrimaryForeground"
/// - "color-brand-primary" → "ColorBrandPrimary"
pub fn to_pascal_case(s: &str) -> String {
    s.split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 生成宿主语言安全的标识符（C#）
///
/// 非字母数字字符视为单词分隔；数字开头时添加 `_` 前缀
pub fn to_identifier(s: &str) -> String {
    let words: String = s
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();

    match words.chars().next() {
        None => "_".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{}", words),
        Some(_) => words,
    }
}
