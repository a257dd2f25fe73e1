//! Queries and the strategies used to match them against the index.
//!
//! A [`Query`] is a list of normalized terms. A [`MatchStrategy`] picks one of
//! three [`Matcher`]s:
//!
//! - `ANY`: lines containing at least one term
//! - `NONE`: lines containing none of the terms
//! - `ALL`: lines with the highest match frequency across the terms

pub mod matcher;
pub mod query;
pub mod strategy;

pub use matcher::{AllMatcher, AnyMatcher, MatchSet, Matcher, NoneMatcher};
pub use query::Query;
pub use strategy::MatchStrategy;
