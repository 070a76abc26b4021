use degrees_core::graph::PersonId;

/// Errors from neighbor lookup and search.
///
/// Two persons not being connected is not an error; see
/// [`crate::search::Connection::NotConnected`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("unknown person id: {0}")]
    InvalidPerson(PersonId),
    #[error("remove() called on an empty frontier")]
    EmptyFrontier,
    #[error("search budget exhausted after expanding {expanded} nodes")]
    BudgetExhausted { expanded: usize },
    #[error("parent chain does not lead back to the source")]
    BrokenChain,
}
