mod ast;
mod builder;
mod clause;
mod params;
mod pattern;
mod render;

pub use ast::*;
pub use builder::{
    create, match_, merge, optional_match, unwind, BuilderError, IntoExprs, IntoPatterns,
    Statement, StatementBuilder,
};
pub use clause::*;
pub use pattern::*;
pub use render::RenderStyle;
