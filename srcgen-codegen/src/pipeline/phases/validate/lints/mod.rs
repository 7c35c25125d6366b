//! Built-in lints for configuration validation.

mod category_patterns;
mod glob_syntax;
mod redundant_exclusion;
mod relative_pattern;

pub use category_patterns::CategoryPatternsLint;
pub use glob_syntax::GlobSyntaxLint;
pub use redundant_exclusion::RedundantExclusionLint;
pub use relative_pattern::RelativePatternLint;
