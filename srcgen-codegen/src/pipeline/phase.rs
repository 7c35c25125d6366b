//! A single step of the pipeline.

use eyre::Result;

use super::CompilationContext;

/// One step from configuration to manifest.
///
/// The built-in steps run in a fixed order and each fills in one slot of
/// the [`CompilationContext`]:
///
/// | phase        | reads            | writes                |
/// |--------------|------------------|-----------------------|
/// | `validate`   | config           | diagnostics           |
/// | `resolve`    | config           | `order`               |
/// | `enumerate`  | config, root     | `matches`             |
/// | `categorize` | order, matches   | `manifest`            |
/// | `analyze`    | manifest         | diagnostics           |
///
/// A phase that cannot continue records an error diagnostic and returns
/// `Err`; anything softer is only a diagnostic.
pub trait Phase: Send + Sync {
    /// Short lowercase name, used for plugin hooks, log spans and snapshot
    /// file names.
    fn name(&self) -> &'static str;

    /// One line shown in debug logs.
    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
