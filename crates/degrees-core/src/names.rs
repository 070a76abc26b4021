//! Resolve free-text person names to identifiers.
//!
//! Lookup is case-insensitive. Several persons may share a name; the caller
//! decides how to pick one (the CLI prompts for an id).

use crate::graph::{Graph, PersonId};

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.85;
const MAX_SUGGESTIONS: usize = 3;

/// Outcome of resolving a name against the graph's name index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one person has this name.
    Unique(PersonId),
    /// Several persons share this name, sorted by id.
    Ambiguous(Vec<PersonId>),
    /// Nobody has this name. Carries the closest known display names.
    NotFound { suggestions: Vec<String> },
}

impl Resolution {
    /// Accept `picked` only if it is one of the resolved candidates.
    pub fn choose(&self, picked: &str) -> Option<PersonId> {
        match self {
            Resolution::Unique(id) => (id.as_str() == picked).then(|| id.clone()),
            Resolution::Ambiguous(ids) => ids.iter().find(|id| id.as_str() == picked).cloned(),
            Resolution::NotFound { .. } => None,
        }
    }
}

/// Resolve `name` to one or more person ids.
pub fn resolve(graph: &Graph, name: &str) -> Resolution {
    let mut candidates: Vec<PersonId> = graph
        .person_ids_for_name(name.trim())
        .map(|ids| ids.iter().cloned().collect())
        .unwrap_or_default();

    match candidates.len() {
        0 => Resolution::NotFound {
            suggestions: suggest(graph, name, MAX_SUGGESTIONS),
        },
        1 => Resolution::Unique(candidates.swap_remove(0)),
        _ => Resolution::Ambiguous(candidates),
    }
}

/// Known display names closest to `name`, best match first.
pub fn suggest(graph: &Graph, name: &str, limit: usize) -> Vec<String> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &str)> = graph
        .names()
        .map(|known| (strsim::jaro_winkler(&needle, known), known))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));

    scored
        .into_iter()
        .take(limit)
        .filter_map(|(_, key)| display_name(graph, key))
        .collect()
}

/// Display (original-case) name for a lowercased index key.
fn display_name(graph: &Graph, key: &str) -> Option<String> {
    let id = graph.person_ids_for_name(key)?.iter().next()?;
    graph.person(id.as_str()).map(|p| p.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Person;

    fn make_graph() -> Graph {
        let mut graph = Graph::new();
        graph.insert_person(Person::new("102", "Kevin Bacon", Some(1958)));
        graph.insert_person(Person::new("158", "Tom Hanks", Some(1956)));
        graph.insert_person(Person::new("1697", "Tom Hanks", None));
        graph.insert_person(Person::new("129", "Tom Cruise", Some(1962)));
        graph
    }

    #[test]
    fn test_resolve_unique() {
        let graph = make_graph();
        assert_eq!(
            resolve(&graph, "kevin bacon"),
            Resolution::Unique(PersonId::from("102"))
        );
    }

    #[test]
    fn test_resolve_ambiguous_sorted_by_id() {
        let graph = make_graph();
        assert_eq!(
            resolve(&graph, "Tom Hanks"),
            Resolution::Ambiguous(vec![PersonId::from("158"), PersonId::from("1697")])
        );
    }

    #[test]
    fn test_resolve_not_found_suggests_close_names() {
        let graph = make_graph();
        match resolve(&graph, "Kevin Bacn") {
            Resolution::NotFound { suggestions } => {
                assert_eq!(suggestions.first().map(String::as_str), Some("Kevin Bacon"));
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_not_found_without_close_names() {
        let graph = make_graph();
        assert_eq!(
            resolve(&graph, "zzzz"),
            Resolution::NotFound {
                suggestions: Vec::new()
            }
        );
    }

    #[test]
    fn test_choose_only_accepts_candidates() {
        let graph = make_graph();
        let resolution = resolve(&graph, "tom hanks");
        assert_eq!(resolution.choose("1697"), Some(PersonId::from("1697")));
        assert_eq!(resolution.choose("102"), None);

        let unique = resolve(&graph, "tom cruise");
        assert_eq!(unique.choose("129"), Some(PersonId::from("129")));
        assert_eq!(unique.choose("158"), None);
    }
}
