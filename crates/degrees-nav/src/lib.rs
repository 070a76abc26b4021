//! Shortest-connection search over the person/movie graph.
//!
//! Provides the neighbor function, frontier and explored sets, the
//! breadth-first search engine, path reconstruction, and text rendering.

pub mod error;
pub mod frontier;
pub mod neighbors;
pub mod node;
pub mod render;
pub mod search;
