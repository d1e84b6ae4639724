//! C8 Query Translator: pattern catalogue, fluent builder, and tiered resolution.

pub mod builder;
pub mod patterns;
pub mod translator;

pub use builder::QueryBuilder;
pub use patterns::Pattern;
pub use translator::{translate, QueryInput, ResolveResult};
