//! F6: components should be syntactically connected.
//!
//! A global filter over the dependency tree. Two tokens pass if one is the
//! head or the grandhead of the other. Three or more tokens pass if the
//! head/dependent edges among them, taken as undirected, connect all of them.
//!
//! The two-token rule admits a grandhead without the intermediate token while
//! the general rule requires every link to be a candidate token; both rules
//! are kept as they are.

use std::collections::VecDeque;

use crate::annotation::sentence::AnnotatedSentence;
use crate::filter::{Filter, FilterScope, TrainingExample};

/// Filter on dependency-tree connectivity of the components.
#[derive(Clone, Copy, Debug, Default)]
pub struct SyntacticConnectivityFilter;

impl SyntacticConnectivityFilter {
    fn head_or_grandhead(sentence: &AnnotatedSentence, a: usize, b: usize) -> bool {
        let head_a = sentence.head(a);
        let head_b = sentence.head(b);
        head_a == b || head_b == a || sentence.head(head_a) == b || sentence.head(head_b) == a
    }

    /// Whether the tokens form one connected component of the dependency
    /// graph restricted to themselves.
    fn is_connected(sentence: &AnnotatedSentence, indices: &[usize]) -> bool {
        let n = indices.len();
        if n <= 1 {
            return true;
        }

        let linked = |i: usize, j: usize| {
            let (a, b) = (indices[i], indices[j]);
            a != b && (sentence.head(a) == b || sentence.head(b) == a)
        };

        let mut visited = vec![false; n];
        let mut queue = VecDeque::from([0]);
        visited[0] = true;
        let mut reached = 1;

        while let Some(i) = queue.pop_front() {
            for j in 0..n {
                if !visited[j] && linked(i, j) {
                    visited[j] = true;
                    reached += 1;
                    queue.push_back(j);
                }
            }
        }

        reached == n
    }
}

impl Filter for SyntacticConnectivityFilter {
    type Evidence = ();

    fn default_evidence(&self) {}

    fn train(&self, _evidence: &mut (), _example: &TrainingExample<'_>) {}

    fn test(&self, _evidence: &(), sentence: &AnnotatedSentence, indices: &[usize]) -> bool {
        if let [a, b] = indices {
            return Self::head_or_grandhead(sentence, *a, *b);
        }
        Self::is_connected(sentence, indices)
    }

    fn name(&self) -> &'static str {
        "syntactic_connectivity"
    }

    fn scope(&self) -> FilterScope {
        FilterScope::Global
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::test_support::john_sentence;

    fn accepts(indices: &[usize]) -> bool {
        SyntacticConnectivityFilter.test(&(), &john_sentence(), indices)
    }

    #[test]
    fn test_two_tokens() {
        // John <- likes
        assert!(accepts(&[0, 8]));
        // John and apples are siblings under likes.
        assert!(!accepts(&[0, 9]));
        // who -> lives -> John
        assert!(accepts(&[0, 2]));
        // New -> York -> in -> lives -> John is too far.
        assert!(!accepts(&[0, 5]));
    }

    #[test]
    fn test_many_tokens() {
        assert!(accepts(&[0, 3, 4, 5, 6]));
        assert!(accepts(&[0, 8, 9]));
        assert!(!accepts(&[0, 3, 4, 9]));
    }

    #[test]
    fn test_order_does_not_matter() {
        assert!(accepts(&[6, 5, 4, 3, 0]));
        assert!(accepts(&[8, 0]));
    }

    #[test]
    fn test_single_token() {
        assert!(accepts(&[7]));
    }
}
