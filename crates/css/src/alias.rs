//! 结构化 token 路径 → 旧版扁平变量名的别名表
//!
//! 内置表对应 Ivy 前端沿用的变量名；自定义表从配置构造。
//! 同一个结构化路径在 `:root` 和 `.dark` 下可能对应不同的扁平名，因此按选择器分表。

use indexmap::IndexMap;
use phf::phf_map;
use serde::{Deserialize, Serialize};

/// `color-*` → 扁平名（`:root`）
pub static ROOT_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    // Semantic Colors
    "color-primary" => "primary",
    "color-primary-foreground" => "primary-foreground",
    "color-secondary" => "secondary",
    "color-secondary-foreground" => "secondary-foreground",
    "color-destructive" => "destructive",
    "color-destructive-foreground" => "destructive-foreground",
    "color-success" => "success",
    "color-success-foreground" => "success-foreground",
    "color-warning" => "warning",
    "color-warning-foreground" => "warning-foreground",
    "color-info" => "info",
    "color-info-foreground" => "info-foreground",
    // UI Colors
    "color-background" => "background",
    "color-foreground" => "foreground",
    "color-border" => "border",
    "color-input" => "input",
    "color-ring" => "ring",
    "color-muted" => "muted",
    "color-muted-foreground" => "muted-foreground",
    "color-accent" => "accent",
    "color-accent-foreground" => "accent-foreground",
    "color-card" => "card",
    "color-card-foreground" => "card-foreground",
    "color-popover" => "popover",
    "color-popover-foreground" => "popover-foreground",
};

/// `theme-dark-color-*` → 扁平名（`.dark`）
pub static DARK_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "theme-dark-color-primary" => "primary",
    "theme-dark-color-primary-foreground" => "primary-foreground",
    "theme-dark-color-secondary" => "secondary",
    "theme-dark-color-secondary-foreground" => "secondary-foreground",
    "theme-dark-color-destructive" => "destructive",
    "theme-dark-color-destructive-foreground" => "destructive-foreground",
    "theme-dark-color-success" => "success",
    "theme-dark-color-success-foreground" => "success-foreground",
    "theme-dark-color-warning" => "warning",
    "theme-dark-color-warning-foreground" => "warning-foreground",
    "theme-dark-color-info" => "info",
    "theme-dark-color-info-foreground" => "info-foreground",
    "theme-dark-color-background" => "background",
    "theme-dark-color-foreground" => "foreground",
    "theme-dark-color-border" => "border",
    "theme-dark-color-input" => "input",
    "theme-dark-color-ring" => "ring",
    "theme-dark-color-muted" => "muted",
    "theme-dark-color-muted-foreground" => "muted-foreground",
    "theme-dark-color-accent" => "accent",
    "theme-dark-color-accent-foreground" => "accent-foreground",
    "theme-dark-color-card" => "card",
    "theme-dark-color-card-foreground" => "card-foreground",
    "theme-dark-color-popover" => "popover",
    "theme-dark-color-popover-foreground" => "popover-foreground",
};

/// 未命中别名时的处理方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AliasMode {
    /// 丢弃未映射的 token
    Strict,
    /// 回退为叶子 key
    #[default]
    Permissive,
}

#[derive(Debug, Clone)]
enum Entries {
    Static(&'static phf::Map<&'static str, &'static str>),
    Owned(IndexMap<String, String>),
}

/// 不可变别名表，每次调用显式传入
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: Entries,
    mode: AliasMode,
}

impl AliasTable {
    pub fn new(entries: IndexMap<String, String>, mode: AliasMode) -> Self {
        Self {
            entries: Entries::Owned(entries),
            mode,
        }
    }

    pub fn from_static(
        entries: &'static phf::Map<&'static str, &'static str>,
        mode: AliasMode,
    ) -> Self {
        Self {
            entries: Entries::Static(entries),
            mode,
        }
    }

    /// 内置 `:root` 表（宽松模式）
    pub fn ivy_root() -> Self {
        Self::from_static(&ROOT_ALIASES, AliasMode::Permissive)
    }

    /// 内置 `.dark` 表（宽松模式）
    pub fn ivy_dark() -> Self {
        Self::from_static(&DARK_ALIASES, AliasMode::Permissive)
    }

    /// 替换处理模式（builder 模式）
    pub fn with_mode(mut self, mode: AliasMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> AliasMode {
        self.mode
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        match &self.entries {
            Entries::Static(map) => map.get(path).copied(),
            Entries::Owned(map) => map.get(path).map(String::as_str),
        }
    }

    /// 计算扁平变量名；严格模式下未命中返回 None
    pub fn flat_name<'a>(&'a self, path: &str, key: &'a str) -> Option<&'a str> {
        match (self.get(path), self.mode) {
            (Some(alias), _) => Some(alias),
            (None, AliasMode::Permissive) => Some(key),
            (None, AliasMode::Strict) => None,
        }
    }

    pub fn len(&self) -> usize {
        match &self.entries {
            Entries::Static(map) => map.len(),
            Entries::Owned(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
