//! token 分类 → Tailwind 主题 key 的映射

/// 一个 Tailwind 主题分类及其 token 来源路径
#[derive(Debug, Clone, Copy)]
pub struct Category {
    /// Tailwind 主题 key（如 "colors"）
    pub key: &'static str,
    /// token 树中的来源路径；多个来源按顺序合并，后者覆盖前者
    pub sources: &'static [&'static [&'static str]],
}

/// 输出顺序即此表顺序
pub static CATEGORIES: &[Category] = &[
    Category {
        key: "colors",
        sources: &[&["color"]],
    },
    Category {
        key: "fontFamily",
        sources: &[&["typography", "fontFamily"]],
    },
    Category {
        key: "fontSize",
        sources: &[&["typography", "fontSize"]],
    },
    Category {
        key: "lineHeight",
        sources: &[&["typography", "lineHeight"]],
    },
    Category {
        key: "letterSpacing",
        sources: &[&["typography", "letterSpacing"], &["typography", "tracking"]],
    },
    Category {
        key: "spacing",
        sources: &[&["spacing"]],
    },
    Category {
        key: "borderRadius",
        sources: &[&["radius"]],
    },
    Category {
        key: "boxShadow",
        sources: &[&["shadow"]],
    },
    Category {
        key: "screens",
        sources: &[&["breakpoint"]],
    },
    Category {
        key: "transitionDuration",
        sources: &[&["animation", "duration"]],
    },
    Category {
        key: "transitionTimingFunction",
        sources: &[&["animation", "easing"]],
    },
];

/// 按 Tailwind key 查找分类
pub fn category(key: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.key == key)
}
