//! Category membership and exclusion filtering.

use std::collections::{BTreeSet, HashMap};

use eyre::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;
use srcgen_config::{CategoryDef, Exclusion};
use srcgen_core::{EnumerateError, Enumerator, FilePath};

use crate::{Manifest, resolve::evaluation_order};

/// Files a category's patterns matched, before exclusions are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryMatches {
    /// Union of the category's own patterns.
    pub matched: BTreeSet<FilePath>,
    /// Union of the category's `exclude_patterns`.
    pub pattern_excluded: BTreeSet<FilePath>,
}

/// Enumerate the patterns and exclusion patterns of one category.
pub fn enumerate_category(
    category: &CategoryDef,
    enumerator: &Enumerator,
) -> Result<CategoryMatches, EnumerateError> {
    let matched = enumerator.enumerate_all(category.patterns.iter().map(String::as_str))?;
    let pattern_excluded =
        enumerator.enumerate_all(category.exclude_patterns.iter().map(String::as_str))?;

    Ok(CategoryMatches {
        matched,
        pattern_excluded,
    })
}

/// Apply a category's exclusions to its matches.
///
/// `finished` must hold the final set of every category this one excludes.
pub fn apply_exclusions(
    category: &CategoryDef,
    matches: &CategoryMatches,
    finished: &HashMap<String, BTreeSet<FilePath>>,
) -> Result<BTreeSet<FilePath>> {
    let mut files = matches.matched.clone();

    for exclusion in category.exclusions() {
        match exclusion {
            Exclusion::Path(path) => {
                files.remove(&FilePath::new(path));
            }
            Exclusion::Pattern(_) => {}
            Exclusion::Category(other) => {
                let excluded = finished.get(other).ok_or_else(|| {
                    eyre::eyre!(
                        "category '{}' evaluated before excluded category '{}'",
                        category.name,
                        other
                    )
                })?;
                files.retain(|f| !excluded.contains(f));
            }
        }
    }
    files.retain(|f| !matches.pattern_excluded.contains(f));

    Ok(files)
}

/// Compute the final file set of every category.
///
/// Categories are evaluated in dependency order and returned in
/// configuration order. Categories that match nothing are present with an
/// empty set.
pub fn build_categories(categories: &[CategoryDef], enumerator: &Enumerator) -> Result<Manifest> {
    let order = evaluation_order(categories)?;

    let mut matches = IndexMap::new();
    for category in categories {
        let m = enumerate_category(category, enumerator)
            .wrap_err_with(|| format!("failed to enumerate category '{}'", category.name))?;
        matches.insert(category.name.clone(), m);
    }

    finalize(categories, &order, &matches)
}

/// Apply exclusions to already enumerated matches.
///
/// `order` holds indices into `categories` in evaluation order, as returned
/// by [`evaluation_order`]. The manifest lists categories in configuration
/// order.
pub fn finalize(
    categories: &[CategoryDef],
    order: &[usize],
    matches: &IndexMap<String, CategoryMatches>,
) -> Result<Manifest> {
    let mut finished: HashMap<String, BTreeSet<FilePath>> = HashMap::new();
    for &index in order {
        let category = categories
            .get(index)
            .ok_or_else(|| eyre::eyre!("evaluation order refers to missing category #{}", index))?;
        let m = matches
            .get(&category.name)
            .ok_or_else(|| eyre::eyre!("category '{}' was not enumerated", category.name))?;
        let files = apply_exclusions(category, m, &finished)?;
        tracing::debug!(
            category = %category.name,
            matched = m.matched.len(),
            kept = files.len(),
            "categorized"
        );
        finished.insert(category.name.clone(), files);
    }

    let mut manifest = Manifest::new();
    for category in categories {
        let files = finished.remove(&category.name).unwrap_or_default();
        manifest.insert(category.name.clone(), files);
    }
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use tempfile::TempDir;

    use super::*;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn listed<'a>(manifest: &'a Manifest, name: &str) -> Vec<&'a str> {
        manifest
            .get(name)
            .unwrap()
            .iter()
            .map(FilePath::as_str)
            .collect()
    }

    #[test]
    fn test_templates_removed_from_c_sources() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/a.c");
        touch(temp.path(), "src/a_tmpl.c");
        touch(temp.path(), "src/b.h");

        let categories = vec![
            CategoryDef::new("templates", ["src/*_tmpl.c"]),
            CategoryDef::new("c_sources", ["src/*.c"]).excluding_categories(["templates"]),
            CategoryDef::new("headers", ["src/*.h"]),
        ];

        let manifest = build_categories(&categories, &Enumerator::new(temp.path())).unwrap();

        assert_eq!(listed(&manifest, "templates"), ["src/a_tmpl.c"]);
        assert_eq!(listed(&manifest, "c_sources"), ["src/a.c"]);
        assert_eq!(listed(&manifest, "headers"), ["src/b.h"]);
    }

    #[test]
    fn test_literal_and_pattern_exclusions() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "arm/64/mc.S");
        touch(temp.path(), "arm/64/util.S");
        touch(temp.path(), "arm/64/ipred_tmpl.S");

        let categories = vec![
            CategoryDef::new("arm64_asm_sources", ["arm/64/*.S"])
                .excluding(["arm/64/util.S"])
                .excluding_patterns(["arm/64/*_tmpl.S"]),
        ];

        let manifest = build_categories(&categories, &Enumerator::new(temp.path())).unwrap();

        assert_eq!(listed(&manifest, "arm64_asm_sources"), ["arm/64/mc.S"]);
    }

    #[test]
    fn test_literal_exclusion_is_normalized() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "x86/filmgrain_common.asm");
        touch(temp.path(), "x86/mc.asm");

        let categories = vec![
            CategoryDef::new("x86_asm_sources", ["x86/*.asm"])
                .excluding([r".\x86\filmgrain_common.asm"]),
        ];

        let manifest = build_categories(&categories, &Enumerator::new(temp.path())).unwrap();

        assert_eq!(listed(&manifest, "x86_asm_sources"), ["x86/mc.asm"]);
    }

    #[test]
    fn test_dotted_pattern_matches_canonical_exclusion() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/a.c");
        touch(temp.path(), "src/b.c");

        let categories = vec![
            CategoryDef::new("dotted", ["src/./*.c"]).excluding(["src/a.c"]),
            CategoryDef::new("plain", ["src/*.c"]).excluding_categories(["dotted"]),
        ];

        let manifest = build_categories(&categories, &Enumerator::new(temp.path())).unwrap();

        assert_eq!(listed(&manifest, "dotted"), ["src/b.c"]);
        assert_eq!(listed(&manifest, "plain"), ["src/a.c"]);
    }

    #[test]
    fn test_config_order_kept_when_dependency_declared_later() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/a.c");
        touch(temp.path(), "src/a_tmpl.c");

        let categories = vec![
            CategoryDef::new("c_sources", ["src/*.c"]).excluding_categories(["templates"]),
            CategoryDef::new("templates", ["src/*_tmpl.c"]),
        ];

        let manifest = build_categories(&categories, &Enumerator::new(temp.path())).unwrap();

        let names: Vec<_> = manifest.names().collect();
        assert_eq!(names, ["c_sources", "templates"]);
        assert_eq!(listed(&manifest, "c_sources"), ["src/a.c"]);
    }

    #[test]
    fn test_excluding_a_filtered_category_uses_its_final_set() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/a.c");
        touch(temp.path(), "src/b.c");

        // "picked" drops b.c, so "rest" keeps it
        let categories = vec![
            CategoryDef::new("picked", ["src/*.c"]).excluding(["src/b.c"]),
            CategoryDef::new("rest", ["src/*.c"]).excluding_categories(["picked"]),
        ];

        let manifest = build_categories(&categories, &Enumerator::new(temp.path())).unwrap();

        assert_eq!(listed(&manifest, "picked"), ["src/a.c"]);
        assert_eq!(listed(&manifest, "rest"), ["src/b.c"]);
    }

    #[test]
    fn test_empty_tree_gives_empty_categories() {
        let temp = TempDir::new().unwrap();

        let categories = vec![
            CategoryDef::new("x86_asm_sources", ["x86/*.asm"]),
            CategoryDef::new("c_sources", ["src/*.c"]),
        ];

        let manifest = build_categories(&categories, &Enumerator::new(temp.path())).unwrap();

        assert_eq!(manifest.len(), 2);
        assert!(manifest.iter().all(|(_, files)| files.is_empty()));
    }

    #[test]
    fn test_cycle_is_an_error() {
        let temp = TempDir::new().unwrap();

        let categories = vec![
            CategoryDef::new("a", ["*.c"]).excluding_categories(["b"]),
            CategoryDef::new("b", ["*.c"]).excluding_categories(["a"]),
        ];

        let err = build_categories(&categories, &Enumerator::new(temp.path())).unwrap_err();
        assert!(err.to_string().contains("cycle"));
    }

    #[test]
    fn test_apply_exclusions_requires_finished_dependency() {
        let category = CategoryDef::new("a", ["*.c"]).excluding_categories(["b"]);

        let result = apply_exclusions(&category, &CategoryMatches::default(), &HashMap::new());
        assert!(result.is_err());
    }
}
