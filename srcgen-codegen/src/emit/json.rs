//! JSON artifact emitter.

use eyre::{Context, Result};
use serde::Serialize;
use srcgen_config::OutputFormat;

use super::{Emitter, Header};
use crate::Manifest;

#[derive(Serialize)]
struct Document<'a> {
    header: &'a Header,
    categories: &'a Manifest,
}

/// Emits the manifest as a pretty-printed JSON document.
///
/// Categories keep configuration order and files are sorted, so the output
/// is as stable as the GN form.
pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn render(&self, manifest: &Manifest, header: &Header) -> Result<String> {
        let document = Document {
            header,
            categories: manifest,
        };
        let mut out = serde_json::to_string_pretty(&document)
            .wrap_err("failed to serialize manifest as JSON")?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use srcgen_config::OutputConfig;
    use srcgen_core::FilePath;

    use super::*;

    #[test]
    fn test_render() {
        let mut manifest = Manifest::new();
        manifest.insert(
            "c_sources",
            ["src/b.c", "src/a.c"]
                .iter()
                .map(FilePath::new)
                .collect::<BTreeSet<_>>(),
        );
        manifest.insert("template_sources", BTreeSet::new());
        let header = Header::from_config(&OutputConfig::default(), 2030);

        let text = JsonEmitter.render(&manifest, &header).unwrap();

        insta::assert_snapshot!(text, @r#"
        {
          "header": {
            "year": 2030,
            "copyright_holder": "The Chromium Authors",
            "license": [
              "Use of this source code is governed by a BSD-style license that can be",
              "found in the LICENSE file."
            ],
            "generator": "srcgen"
          },
          "categories": {
            "c_sources": [
              "src/a.c",
              "src/b.c"
            ],
            "template_sources": []
          }
        }
        "#);
    }

    #[test]
    fn test_output_is_valid_json() {
        let header = Header::from_config(&OutputConfig::default(), 2031);
        let text = JsonEmitter.render(&Manifest::new(), &header).unwrap();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["header"]["year"], 2031);
        assert!(value["categories"].as_object().unwrap().is_empty());
        assert!(text.ends_with("}\n"));
    }
}
