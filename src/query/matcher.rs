//! Matchers turn query terms into the set of matching line ids.

use std::collections::BTreeSet;
use std::fmt::Debug;

use ahash::AHashMap;

use crate::index::InvertedIndex;
use crate::query::strategy::MatchStrategy;

/// A set of matching line ids, iterated in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    line_ids: BTreeSet<usize>,
}

impl MatchSet {
    /// Create an empty match set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of matching lines.
    pub fn len(&self) -> usize {
        self.line_ids.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.line_ids.is_empty()
    }

    /// Whether the line matched.
    pub fn contains(&self, line_id: usize) -> bool {
        self.line_ids.contains(&line_id)
    }

    /// Iterate over line ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.line_ids.iter().copied()
    }

    /// Line ids in ascending order.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl FromIterator<usize> for MatchSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        MatchSet {
            line_ids: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MatchSet {
    type Item = usize;
    type IntoIter = std::collections::btree_set::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.line_ids.into_iter()
    }
}

/// Trait for matching strategies.
///
/// Matching never fails: terms missing from the index simply contribute
/// nothing.
pub trait Matcher: Send + Sync + Debug {
    /// Compute the matching line ids for the given normalized terms.
    fn matches(&self, index: &InvertedIndex, terms: &[String]) -> MatchSet;

    /// Get the name of this matcher.
    fn name(&self) -> &'static str;
}

/// Union of every term's postings.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyMatcher;

impl Matcher for AnyMatcher {
    fn matches(&self, index: &InvertedIndex, terms: &[String]) -> MatchSet {
        terms
            .iter()
            .flat_map(|term| index.postings(term).iter().copied())
            .collect()
    }

    fn name(&self) -> &'static str {
        "any"
    }
}

/// Every line not matched by [`AnyMatcher`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoneMatcher;

impl Matcher for NoneMatcher {
    fn matches(&self, index: &InvertedIndex, terms: &[String]) -> MatchSet {
        let excluded = AnyMatcher.matches(index, terms);
        (0..index.doc_count())
            .filter(|line_id| !excluded.contains(*line_id))
            .collect()
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

/// Lines with the highest hit frequency.
///
/// All postings of all terms are pooled with duplicates, each line id is
/// counted, and the ids reaching the maximum count are returned. A line gains
/// frequency both from matching several distinct terms and from containing
/// one term several times. This is not a strict intersection: when no line
/// contains every term, the best-covered lines still match.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllMatcher;

impl Matcher for AllMatcher {
    fn matches(&self, index: &InvertedIndex, terms: &[String]) -> MatchSet {
        let mut frequencies: AHashMap<usize, usize> = AHashMap::new();
        for term in terms {
            for &line_id in index.postings(term) {
                *frequencies.entry(line_id).or_insert(0) += 1;
            }
        }

        let Some(max_frequency) = frequencies.values().copied().max() else {
            return MatchSet::new();
        };

        frequencies
            .into_iter()
            .filter(|&(_, frequency)| frequency == max_frequency)
            .map(|(line_id, _)| line_id)
            .collect()
    }

    fn name(&self) -> &'static str {
        "all"
    }
}

impl MatchStrategy {
    /// The matcher implementing this strategy.
    pub fn matcher(self) -> &'static dyn Matcher {
        match self {
            MatchStrategy::All => &AllMatcher,
            MatchStrategy::Any => &AnyMatcher,
            MatchStrategy::None => &NoneMatcher,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::SimpleAnalyzer;
    use crate::document::DocumentCollection;

    fn index_of(lines: &[&str]) -> InvertedIndex {
        let docs = DocumentCollection::from_lines(lines.iter().copied());
        InvertedIndex::build(&docs, &SimpleAnalyzer::new())
    }

    fn terms(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    fn people() -> InvertedIndex {
        index_of(&[
            "John Smith john@example.com",
            "Jane Doe jane@example.com",
            "John Jane shared@example.com",
        ])
    }

    #[test]
    fn test_any_is_union() {
        let index = people();
        assert_eq!(AnyMatcher.matches(&index, &terms(&["john"])).to_vec(), vec![0, 2]);
        assert_eq!(
            AnyMatcher.matches(&index, &terms(&["doe", "smith"])).to_vec(),
            vec![0, 1]
        );
    }

    #[test]
    fn test_any_ignores_missing_terms() {
        let index = people();
        assert_eq!(
            AnyMatcher.matches(&index, &terms(&["nobody", "doe"])).to_vec(),
            vec![1]
        );
        assert!(AnyMatcher.matches(&index, &terms(&["nobody"])).is_empty());
    }

    #[test]
    fn test_none_is_complement() {
        let index = people();
        assert_eq!(NoneMatcher.matches(&index, &terms(&["john"])).to_vec(), vec![1]);
        assert_eq!(
            NoneMatcher.matches(&index, &terms(&["nobody"])).to_vec(),
            vec![0, 1, 2]
        );
        assert_eq!(NoneMatcher.matches(&index, &[]).to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_all_picks_max_frequency() {
        let index = people();
        assert_eq!(
            AllMatcher.matches(&index, &terms(&["john", "jane"])).to_vec(),
            vec![2]
        );
    }

    #[test]
    fn test_all_keeps_ties() {
        let index = people();
        assert_eq!(AllMatcher.matches(&index, &terms(&["john"])).to_vec(), vec![0, 2]);
        assert_eq!(
            AllMatcher.matches(&index, &terms(&["smith", "doe"])).to_vec(),
            vec![0, 1]
        );
    }

    #[test]
    fn test_all_is_not_strict_intersection() {
        // No line has both terms, yet the best-covered lines match.
        let index = people();
        let result = AllMatcher.matches(&index, &terms(&["smith", "nobody"]));
        assert_eq!(result.to_vec(), vec![0]);
    }

    #[test]
    fn test_all_counts_repeated_words_on_a_line() {
        let index = index_of(&["echo echo", "echo bravo"]);
        // Line 0 has frequency 2 from one term repeated on the line.
        assert_eq!(
            AllMatcher.matches(&index, &terms(&["echo", "bravo"])).to_vec(),
            vec![0, 1]
        );
        assert_eq!(AllMatcher.matches(&index, &terms(&["echo"])).to_vec(), vec![0]);
    }

    #[test]
    fn test_all_counts_repeated_query_terms() {
        let index = index_of(&["alpha", "beta beta"]);
        // alpha twice in the query gives line 0 frequency 2, tying line 1.
        assert_eq!(
            AllMatcher
                .matches(&index, &terms(&["alpha", "alpha", "beta"]))
                .to_vec(),
            vec![0, 1]
        );
    }

    #[test]
    fn test_all_empty_when_nothing_matches() {
        let index = people();
        assert!(AllMatcher.matches(&index, &terms(&["nobody"])).is_empty());
        assert!(AllMatcher.matches(&index, &[]).is_empty());
    }

    #[test]
    fn test_strategy_matcher() {
        assert_eq!(MatchStrategy::All.matcher().name(), "all");
        assert_eq!(MatchStrategy::Any.matcher().name(), "any");
        assert_eq!(MatchStrategy::None.matcher().name(), "none");
    }
}
