//! GN include file emitter.

use eyre::Result;
use srcgen_config::OutputFormat;

use super::{Emitter, Header, TextBuilder};
use crate::Manifest;

/// Emits the manifest as GN list assignments.
///
/// ```text
/// c_sources = [
///   "libdav1d/src/cdf.c",
/// ]
///
/// template_sources = []
/// ```
pub struct GnEmitter;

impl Emitter for GnEmitter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Gn
    }

    fn render(&self, manifest: &Manifest, header: &Header) -> Result<String> {
        let mut out = TextBuilder::new();

        out.push_comment(&header.copyright_line());
        for line in &header.license {
            out.push_comment(line);
        }
        out.push_blank();
        out.push_comment(&header.notice());
        out.push_blank();

        for (i, (name, files)) in manifest.iter().enumerate() {
            if i > 0 {
                out.push_blank();
            }

            if files.is_empty() {
                out.push_line(&format!("{} = []", name));
                continue;
            }

            out.push_line(&format!("{} = [", name));
            out.push_indent();
            for file in files {
                out.push_line(&format!("\"{}\",", escape_gn_string(file.as_str())));
            }
            out.push_dedent();
            out.push_line("]");
        }

        Ok(out.build())
    }
}

/// Escape the characters GN treats specially inside string literals.
fn escape_gn_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '"' | '$' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use srcgen_config::OutputConfig;
    use srcgen_core::FilePath;

    use super::*;

    fn header() -> Header {
        Header::from_config(&OutputConfig::default(), 2030)
    }

    fn files(paths: &[&str]) -> BTreeSet<FilePath> {
        paths.iter().map(FilePath::new).collect()
    }

    #[test]
    fn test_header_only_for_empty_manifest() {
        let text = GnEmitter.render(&Manifest::new(), &header()).unwrap();

        assert_eq!(
            text,
            "# Copyright 2030 The Chromium Authors\n\
             # Use of this source code is governed by a BSD-style license that can be\n\
             # found in the LICENSE file.\n\
             \n\
             # NOTE: this file is autogenerated by srcgen - DO NOT EDIT.\n\
             \n"
        );
    }

    #[test]
    fn test_empty_category() {
        let mut manifest = Manifest::new();
        manifest.insert("x86_template_sources", files(&[]));

        let text = GnEmitter.render(&manifest, &header()).unwrap();

        assert!(text.ends_with("\n\nx86_template_sources = []\n"));
    }

    #[test]
    fn test_blank_line_between_categories_only() {
        let mut manifest = Manifest::new();
        manifest.insert("a", files(&["a.c"]));
        manifest.insert("b", files(&[]));
        manifest.insert("c", files(&["c2.c", "c1.c"]));

        let text = GnEmitter.render(&manifest, &header()).unwrap();
        let body = text.split_once("DO NOT EDIT.\n\n").unwrap().1;

        assert_eq!(
            body,
            "a = [\n  \"a.c\",\n]\n\nb = []\n\nc = [\n  \"c1.c\",\n  \"c2.c\",\n]\n"
        );
    }

    #[test]
    fn test_escape_gn_string() {
        assert_eq!(escape_gn_string("src/a.c"), "src/a.c");
        assert_eq!(escape_gn_string("we\"ird$.c"), "we\\\"ird\\$.c");
    }

    #[test]
    fn test_custom_license_lines() {
        let output = OutputConfig {
            copyright_holder: "The Example Project".into(),
            license: vec!["SPDX-License-Identifier: MIT".into()],
            generator: "tools/gen.py".into(),
            ..OutputConfig::default()
        };
        let header = Header::from_config(&output, 2031);

        let text = GnEmitter.render(&Manifest::new(), &header).unwrap();

        assert_eq!(
            text,
            "# Copyright 2031 The Example Project\n\
             # SPDX-License-Identifier: MIT\n\
             \n\
             # NOTE: this file is autogenerated by tools/gen.py - DO NOT EDIT.\n\
             \n"
        );
    }
}
