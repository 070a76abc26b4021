//! Breadth-first shortest connection search.
//!
//! The search starts from a root node `(None, source)` and expands nodes in
//! FIFO order. Nodes are keyed by `(movie, person)` state; a state already
//! pending in the frontier or already explored is never created again, so
//! parent links form a tree. Because the frontier is FIFO, the first node
//! found for the target lies on a shortest path.

use crate::error::SearchError;
use crate::frontier::{ExploredSet, Frontier};
use crate::neighbors::neighbors_for_person;
use crate::node::{Path, SearchNode, State};
use degrees_core::graph::{Graph, PersonId};
use serde::Serialize;
use std::rc::Rc;

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connection {
    Connected(Path),
    NotConnected,
}

impl Connection {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Connection::Connected(path) => Some(path),
            Connection::NotConnected => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Connection::Connected(_))
    }

    /// Degrees of separation, if connected.
    pub fn degrees(&self) -> Option<usize> {
        self.path().map(Path::len)
    }
}

/// Tuning knobs for a single search run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Fail with [`SearchError::BudgetExhausted`] instead of expanding more
    /// than this many nodes. `None` means unbounded.
    pub max_expansions: Option<usize>,
}

/// Work counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes moved to the explored set.
    pub expanded: usize,
    /// Nodes created, including the root.
    pub discovered: usize,
    /// Largest frontier size observed.
    pub frontier_peak: usize,
}

#[derive(Debug, Clone)]
pub struct SearchReport {
    pub connection: Connection,
    pub stats: SearchStats,
}

/// Shortest sequence of `(movie, person)` steps from `source` to `target`.
pub fn shortest_path(
    graph: &Graph,
    source: &PersonId,
    target: &PersonId,
) -> Result<Connection, SearchError> {
    shortest_path_with(graph, source, target, &SearchOptions::default())
        .map(|report| report.connection)
}

/// [`shortest_path`] with options, returning work counters alongside the result.
pub fn shortest_path_with(
    graph: &Graph,
    source: &PersonId,
    target: &PersonId,
    options: &SearchOptions,
) -> Result<SearchReport, SearchError> {
    if !graph.contains_person(target.as_str()) {
        return Err(SearchError::InvalidPerson(target.clone()));
    }

    let root = SearchNode::root(source.clone(), neighbors_for_person(graph, source.as_str())?);
    let mut frontier = Frontier::queue();
    let mut explored = ExploredSet::new();
    frontier.add(root);
    let mut stats = SearchStats {
        expanded: 0,
        discovered: 1,
        frontier_peak: 1,
    };

    let found = 'search: loop {
        if frontier.is_empty() {
            tracing::debug!(%source, %target, expanded = stats.expanded, "frontier exhausted");
            return Ok(SearchReport {
                connection: Connection::NotConnected,
                stats,
            });
        }

        let node = frontier.remove()?;
        if node.person() == target {
            break node;
        }

        if let Some(limit) = options.max_expansions
            && explored.len() >= limit
        {
            return Err(SearchError::BudgetExhausted {
                expanded: explored.len(),
            });
        }
        explored.add(&node);
        stats.expanded = explored.len();

        for link in &node.neighbors {
            let state = State::from(link.clone());
            if frontier.contains_state(&state) || explored.contains_state(&state) {
                continue;
            }

            let neighbors = neighbors_for_person(graph, link.person.as_str())?;
            let child = SearchNode::child(&node, link.clone(), neighbors);
            stats.discovered += 1;

            // Found on discovery: leaves the loop, so the removal check never sees it
            let reached = child.person() == target;
            frontier.add(Rc::clone(&child));
            stats.frontier_peak = stats.frontier_peak.max(frontier.len());
            if reached {
                break 'search child;
            }
        }
    };

    let path = found.path_to(source.as_str())?;
    tracing::debug!(
        %source,
        %target,
        degrees = path.len(),
        expanded = stats.expanded,
        discovered = stats.discovered,
        "found connection"
    );
    Ok(SearchReport {
        connection: Connection::Connected(path),
        stats,
    })
}
