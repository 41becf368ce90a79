pub mod csharp;
pub mod typescript;

// Re-export main types
pub use csharp::{CSharpCategory, CSharpEmitter, CSharpProperty};
pub use typescript::{TypeEmitter, TypeOutput};
