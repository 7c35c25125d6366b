//! Rendering of a [`Manifest`] into an output artifact.
//!
//! Every emitter is a pure function of the manifest and the header, so the
//! same tree and year always give the same bytes.

mod builder;
mod gn;
mod header;
mod json;

use std::path::Path;

use eyre::{Context, Result};
pub use builder::TextBuilder;
pub use gn::GnEmitter;
pub use header::Header;
pub use json::JsonEmitter;
use srcgen_config::OutputFormat;
use srcgen_core::{File, WriteResult};

use crate::Manifest;

/// Renders a manifest in one output format.
pub trait Emitter {
    /// The format this emitter produces.
    fn format(&self) -> OutputFormat;

    /// Render the complete artifact, header included.
    fn render(&self, manifest: &Manifest, header: &Header) -> Result<String>;
}

/// Get the emitter for an output format.
pub fn emitter(format: OutputFormat) -> Box<dyn Emitter> {
    match format {
        OutputFormat::Gn => Box::new(GnEmitter),
        OutputFormat::Json => Box::new(JsonEmitter),
    }
}

/// Render a manifest in the given format.
pub fn render(format: OutputFormat, manifest: &Manifest, header: &Header) -> Result<String> {
    emitter(format).render(manifest, header)
}

/// Replace the artifact at `path` with `content` in a single rename.
///
/// A failure leaves any previous artifact untouched.
pub fn write_artifact(path: &Path, content: &str) -> Result<WriteResult> {
    let result = File::new(path, content)
        .write()
        .wrap_err_with(|| format!("failed to write artifact '{}'", path.display()))?;
    tracing::info!(path = %path.display(), bytes = content.len(), "wrote artifact");
    Ok(result)
}
