//! Observers attached to a [`Pipeline`](super::Pipeline).

use eyre::Result;

use super::CompilationContext;

/// Hooks called around every phase.
///
/// [`SnapshotPlugin`](super::SnapshotPlugin) is the plugin shipped with the
/// crate; it records the context after each phase for `--dump-phases`.
/// Returning `Err` from either hook stops the run, and the error is wrapped
/// with the plugin and phase names.
///
/// ```ignore
/// struct CountPlugin;
///
/// impl Plugin for CountPlugin {
///     fn name(&self) -> &'static str { "count" }
///
///     fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
///         if let Some(counts) = ctx.category_counts() {
///             eprintln!("{phase}: {} files", counts.values().sum::<usize>());
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    /// Name used in error messages.
    fn name(&self) -> &'static str;

    fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
