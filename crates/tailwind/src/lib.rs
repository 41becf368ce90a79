pub mod category;
pub mod emit;

// Re-export main functions
pub use category::{Category, CATEGORIES};
pub use emit::{emit_tailwind, tailwind_theme, token_to_tailwind};
