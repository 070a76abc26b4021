//! Human-readable and serializable views of a search result.

use crate::node::Path;
use crate::search::Connection;
use degrees_core::graph::{Graph, PersonId};
use serde::Serialize;
use std::fmt::Write;

/// One rendered step: `from` and `to` starred together in `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub from: String,
    pub to: String,
    pub movie_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

/// Resolve ids in `path` to names and titles. Unknown ids render as themselves.
pub fn step_views(graph: &Graph, source: &PersonId, path: &Path) -> Vec<StepView> {
    path.hops(source)
        .map(|(prev, step)| {
            let movie = graph.movie(step.movie.as_str());
            StepView {
                from: person_name(graph, prev),
                to: person_name(graph, &step.person),
                movie_id: step.movie.to_string(),
                title: movie.map_or_else(|| step.movie.to_string(), |m| m.title.clone()),
                year: movie.and_then(|m| m.year),
            }
        })
        .collect()
}

/// Render a path as "N degrees of separation." followed by one line per step.
pub fn format_path(graph: &Graph, source: &PersonId, path: &Path) -> String {
    let mut out = format!("{} degrees of separation.\n", path.len());
    for (i, step) in step_views(graph, source, path).iter().enumerate() {
        let _ = writeln!(
            out,
            "{}: {} and {} starred in {}",
            i + 1,
            step.from,
            step.to,
            step.title
        );
    }
    out
}

pub fn format_connection(graph: &Graph, source: &PersonId, connection: &Connection) -> String {
    match connection {
        Connection::Connected(path) => format_path(graph, source, path),
        Connection::NotConnected => "Not connected.\n".to_string(),
    }
}

fn person_name(graph: &Graph, id: &PersonId) -> String {
    graph
        .person(id.as_str())
        .map_or_else(|| id.to_string(), |p| p.name.clone())
}
