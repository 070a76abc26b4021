//! One-hop neighbors of a person through shared movies.

use crate::error::SearchError;
use crate::node::Link;
use degrees_core::graph::Graph;
use std::collections::HashSet;

/// Every `(movie, co_star)` pair reachable from `person` in one hop.
///
/// The person never appears as their own neighbor. Two persons who share
/// several movies yield one link per shared movie.
pub fn neighbors_for_person(graph: &Graph, person: &str) -> Result<HashSet<Link>, SearchError> {
    let record = graph
        .person(person)
        .ok_or_else(|| SearchError::InvalidPerson(person.into()))?;

    let mut neighbors = HashSet::new();
    for movie in record.movies.iter().filter_map(|id| graph.movie(id.as_str())) {
        for star in &movie.stars {
            if star.as_str() == person {
                continue;
            }
            neighbors.insert(Link::new(movie.id.clone(), star.clone()));
        }
    }
    Ok(neighbors)
}
