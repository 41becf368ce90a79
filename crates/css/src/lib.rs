pub mod alias;
pub mod emit;
pub mod flat;

// Re-export main functions
pub use alias::{AliasMode, AliasTable};
pub use emit::{emit_css, write_layer, Declaration, Selector};
pub use flat::emit_flat_css;
