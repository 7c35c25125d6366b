//! Starter configuration written by `srcgen init`.

/// A sources.toml laid out for the dav1d source tree.
///
/// The arch template categories are kept even while they match nothing, so
/// build files referencing them keep working.
pub const STARTER_CONFIG: &str = r#"# srcgen configuration
# Regenerate the artifact with `srcgen generate`.

[output]
path = "dav1d_generated.gni"
format = "gn"
generator = "dav1d/generate_sources.py"
copyright_holder = "The Chromium Authors"
license = [
  "Use of this source code is governed by a BSD-style license that can be",
  "found in the LICENSE file.",
]

[source]
root = "."

[[category]]
name = "x86_asm_sources"
patterns = ["libdav1d/src/x86/*.asm"]
exclude = ["libdav1d/src/x86/filmgrain_common.asm"]

[[category]]
name = "x86_template_sources"
patterns = ["libdav1d/src/x86/*_tmpl.c"]

[[category]]
name = "arm32_asm_sources"
patterns = ["libdav1d/src/arm/32/*.S"]
exclude = ["libdav1d/src/arm/32/util.S"]
exclude_patterns = ["libdav1d/src/arm/32/*_tmpl.S"]

[[category]]
name = "arm64_asm_sources"
patterns = ["libdav1d/src/arm/64/*.S"]
exclude = ["libdav1d/src/arm/64/util.S"]
exclude_patterns = ["libdav1d/src/arm/64/*_tmpl.S"]

[[category]]
name = "arm_template_sources"
patterns = ["libdav1d/src/arm/*_tmpl.c"]

[[category]]
name = "template_sources"
description = "Compiled once per bit depth"
patterns = ["libdav1d/src/*_tmpl.c"]

[[category]]
name = "c_headers"
patterns = ["libdav1d/src/*.h"]

[[category]]
name = "c_sources"
patterns = ["libdav1d/src/*.c"]
exclude_categories = ["template_sources"]
"#;
