//! Evaluation order for categories with exclusion dependencies.
//!
//! A category that subtracts another category's files can only be finished
//! once that category is final. The dependencies form a small graph which is
//! sorted topologically here; any cycle is reported instead of guessed at.

use std::{collections::HashMap, fmt};

use srcgen_config::CategoryDef;

/// Failure to order categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A category excludes a category that does not exist.
    UnknownReference { category: String, reference: String },
    /// The named categories exclude each other in a cycle.
    Cycle { members: Vec<String> },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnknownReference {
                category,
                reference,
            } => write!(
                f,
                "category '{}' excludes unknown category '{}'",
                category, reference
            ),
            ResolveError::Cycle { members } => {
                write!(f, "exclusion cycle between categories: ")?;
                write!(f, "{}", members.join(" -> "))?;
                if let Some(first) = members.first() {
                    write!(f, " -> {}", first)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Compute an order in which every category comes after the categories it
/// excludes.
///
/// Returns indices into `categories`. Among categories that are ready at the
/// same time, configuration order wins, so the result is deterministic.
pub fn evaluation_order(categories: &[CategoryDef]) -> Result<Vec<usize>, ResolveError> {
    let index: HashMap<&str, usize> = categories
        .iter()
        .enumerate()
        .map(|(i, c)| (c.name.as_str(), i))
        .collect();

    // dependents[d] lists the categories waiting on d
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); categories.len()];
    let mut pending: Vec<usize> = vec![0; categories.len()];

    for (i, category) in categories.iter().enumerate() {
        let mut deps: Vec<usize> = Vec::new();
        for reference in &category.exclude_categories {
            let &dep = index
                .get(reference.as_str())
                .ok_or_else(|| ResolveError::UnknownReference {
                    category: category.name.clone(),
                    reference: reference.clone(),
                })?;
            if !deps.contains(&dep) {
                deps.push(dep);
            }
        }
        pending[i] = deps.len();
        for dep in deps {
            dependents[dep].push(i);
        }
    }

    let mut order = Vec::with_capacity(categories.len());
    let mut done = vec![false; categories.len()];

    while order.len() < categories.len() {
        let next = (0..categories.len()).find(|&i| !done[i] && pending[i] == 0);
        let Some(next) = next else {
            return Err(ResolveError::Cycle {
                members: find_cycle(categories, &index, &done),
            });
        };

        done[next] = true;
        order.push(next);
        for &dependent in &dependents[next] {
            pending[dependent] -= 1;
        }
    }

    Ok(order)
}

/// Walk exclusion edges from the first unfinished category until a category
/// repeats, and return the categories on that loop.
fn find_cycle(
    categories: &[CategoryDef],
    index: &HashMap<&str, usize>,
    done: &[bool],
) -> Vec<String> {
    let Some(start) = (0..categories.len()).find(|&i| !done[i]) else {
        return Vec::new();
    };

    let mut path: Vec<usize> = vec![start];
    let mut current = start;
    loop {
        // Every unfinished category still has an unfinished dependency
        let next = categories[current]
            .exclude_categories
            .iter()
            .filter_map(|r| index.get(r.as_str()).copied())
            .find(|&dep| !done[dep]);
        let Some(next) = next else {
            break;
        };

        if let Some(pos) = path.iter().position(|&p| p == next) {
            return path[pos..]
                .iter()
                .map(|&i| categories[i].name.clone())
                .collect();
        }
        path.push(next);
        current = next;
    }

    path.iter().map(|&i| categories[i].name.clone()).collect()
}
