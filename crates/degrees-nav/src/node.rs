//! Search nodes, links, and path reconstruction.

use crate::error::SearchError;
use degrees_core::graph::{MovieId, PersonId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::rc::Rc;

/// "This person, reached via this movie." Edge label and path step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Link {
    pub movie: MovieId,
    pub person: PersonId,
}

impl Link {
    pub fn new(movie: impl Into<MovieId>, person: impl Into<PersonId>) -> Self {
        Self {
            movie: movie.into(),
            person: person.into(),
        }
    }
}

/// Logical state of a search node. Only the root has no movie.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    pub via: Option<MovieId>,
    pub person: PersonId,
}

impl State {
    pub fn root(person: PersonId) -> Self {
        Self { via: None, person }
    }

    /// The link this state was reached by, or `None` for the root.
    pub fn link(&self) -> Option<Link> {
        self.via.as_ref().map(|movie| Link {
            movie: movie.clone(),
            person: self.person.clone(),
        })
    }
}

impl From<Link> for State {
    fn from(link: Link) -> Self {
        Self {
            via: Some(link.movie),
            person: link.person,
        }
    }
}

/// A node discovered during one search run.
///
/// Holds a single upward reference to its parent, so the nodes of a run form
/// a tree rooted at the source.
#[derive(Debug)]
pub struct SearchNode {
    pub state: State,
    pub parent: Option<Rc<SearchNode>>,
    /// Outgoing links, computed when the node is created.
    pub neighbors: HashSet<Link>,
}

impl SearchNode {
    pub fn root(person: PersonId, neighbors: HashSet<Link>) -> Rc<Self> {
        Rc::new(Self {
            state: State::root(person),
            parent: None,
            neighbors,
        })
    }

    pub fn child(parent: &Rc<SearchNode>, link: Link, neighbors: HashSet<Link>) -> Rc<Self> {
        Rc::new(Self {
            state: link.into(),
            parent: Some(Rc::clone(parent)),
            neighbors,
        })
    }

    pub fn person(&self) -> &PersonId {
        &self.state.person
    }

    /// Walk parent links back to `source` and return the steps in source → self order.
    pub fn path_to(&self, source: &str) -> Result<Path, SearchError> {
        let mut steps = Vec::new();
        let mut current = self;
        while current.state.person.as_str() != source {
            steps.push(current.state.link().ok_or(SearchError::BrokenChain)?);
            current = current.parent.as_deref().ok_or(SearchError::BrokenChain)?;
        }
        steps.reverse();
        Ok(Path { steps })
    }
}

/// Steps from the source (exclusive) to the target (inclusive).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    steps: Vec<Link>,
}

impl Path {
    /// Number of steps, i.e. degrees of separation.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True only when source and target are the same person.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Link] {
        &self.steps
    }

    pub fn target(&self) -> Option<&PersonId> {
        self.steps.last().map(|l| &l.person)
    }

    /// Consecutive `(previous person, step)` pairs starting from `source`.
    pub fn hops<'a>(
        &'a self,
        source: &'a PersonId,
    ) -> impl Iterator<Item = (&'a PersonId, &'a Link)> + 'a {
        std::iter::once(source)
            .chain(self.steps.iter().map(|l| &l.person))
            .zip(self.steps.iter())
    }
}
