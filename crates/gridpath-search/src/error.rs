use std::fmt;

use gridpath_core::Point;
use thiserror::Error;

/// Which end of a search request an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// Recoverable conditions reported by a search call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The start or end node is not part of the graph. Raised before any
    /// traversal happens.
    #[error("{which} endpoint is not part of the graph")]
    InvalidEndpoint { which: Endpoint },
    /// The frontier ran dry without discovering the target.
    #[error("target was not reached ({discovered} nodes discovered)")]
    TargetUnreached { discovered: usize },
}

/// Errors raised while building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid must have a positive size, got {width}x{height}")]
    Empty { width: i32, height: i32 },
    /// Passability outside `[0, 1]` (or NaN).
    #[error("passability {value} at {pos} is outside [0, 1]")]
    InvalidPassability { pos: Point, value: f32 },
}

/// Error returned when parsing a [`Strategy`](crate::Strategy) name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search strategy `{0}`")]
pub struct ParseStrategyError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_side() {
        let err = SearchError::InvalidEndpoint {
            which: Endpoint::End,
        };
        assert_eq!(err.to_string(), "end endpoint is not part of the graph");

        let err = GridError::InvalidPassability {
            pos: Point::new(2, 3),
            value: 1.5,
        };
        assert_eq!(err.to_string(), "passability 1.5 at (2, 3) is outside [0, 1]");
    }
}
