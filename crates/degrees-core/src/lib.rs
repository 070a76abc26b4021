//! Core types and loading for the degrees person/movie graph.
//!
//! Provides the graph store ([`graph::Graph`]), CSV loading from a dataset
//! directory, case-insensitive name resolution, and configuration.

pub mod config;
pub mod graph;
pub mod loader;
pub mod names;
