//! Frontier and explored sets keyed by logical node state.

use crate::error::SearchError;
use crate::node::{SearchNode, State};
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

/// Which node [`Frontier::remove`] hands out next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalPolicy {
    /// Oldest first: breadth-first search. The only policy that yields
    /// shortest paths, and the one the search engine uses.
    Fifo,
    /// Newest first: depth-first search.
    Lifo,
}

/// Discovered nodes waiting to be expanded.
#[derive(Debug)]
pub struct Frontier {
    policy: RemovalPolicy,
    nodes: VecDeque<Rc<SearchNode>>,
    states: HashSet<State>,
}

impl Frontier {
    pub fn new(policy: RemovalPolicy) -> Self {
        Self {
            policy,
            nodes: VecDeque::new(),
            states: HashSet::new(),
        }
    }

    pub fn queue() -> Self {
        Self::new(RemovalPolicy::Fifo)
    }

    pub fn stack() -> Self {
        Self::new(RemovalPolicy::Lifo)
    }

    /// Insert a node. Callers check [`Frontier::contains_state`] first.
    pub fn add(&mut self, node: Rc<SearchNode>) {
        let fresh = self.states.insert(node.state.clone());
        debug_assert!(fresh, "state {:?} added to frontier twice", node.state);
        self.nodes.push_back(node);
    }

    pub fn contains_state(&self, state: &State) -> bool {
        self.states.contains(state)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn remove(&mut self) -> Result<Rc<SearchNode>, SearchError> {
        let node = match self.policy {
            RemovalPolicy::Fifo => self.nodes.pop_front(),
            RemovalPolicy::Lifo => self.nodes.pop_back(),
        }
        .ok_or(SearchError::EmptyFrontier)?;
        self.states.remove(&node.state);
        Ok(node)
    }
}

/// States of nodes that have already been expanded.
#[derive(Debug, Default)]
pub struct ExploredSet {
    states: HashSet<State>,
}

impl ExploredSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a node as expanded. Each state is explored at most once per run.
    pub fn add(&mut self, node: &SearchNode) {
        let fresh = self.states.insert(node.state.clone());
        debug_assert!(fresh, "state {:?} explored twice", node.state);
    }

    pub fn contains_state(&self, state: &State) -> bool {
        self.states.contains(state)
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }
}
