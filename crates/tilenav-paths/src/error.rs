use std::fmt;

use tilenav_core::Point;

/// Which end of a search request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Errors reported when starting a search.
///
/// An unreachable goal is not an error: the search ends with
/// [`SearchStatus::Exhausted`](crate::SearchStatus::Exhausted) and an empty
/// path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start or goal is outside the grid or on a blocked cell.
    InvalidEndpoint { endpoint: Endpoint, pos: Point },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint { endpoint, pos } => {
                write!(f, "no traversable {endpoint}: {pos} is blocked or off the grid")
            }
        }
    }
}

impl std::error::Error for SearchError {}
