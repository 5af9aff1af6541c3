//! Candidate generation.
//!
//! Given the component lemmas of an expression and the lemmas of a sentence,
//! the matcher enumerates every tuple of token indices that could instantiate
//! the expression: one index per component, repeated components drawing
//! distinct tokens. Lemmas compare case-insensitively.
//!
//! A lemma required `k > 1` times contributes k-combinations of its
//! occurrences rather than k-fold products, so a lemma seen `m` times costs
//! `C(m, k)` instead of `m^k`. Tuples are sorted ascending and collected into
//! a set, so different enumeration paths yielding the same tokens collapse.
//!
//! ```
//! use mwe_detector::matcher::find_candidates;
//!
//! let candidates = find_candidates(&["test1", "test2"], &["test1", "test2", "test3", "test2"]);
//! let candidates: Vec<_> = candidates.into_iter().collect();
//! assert_eq!(candidates, vec![vec![0, 1], vec![0, 3]]);
//! ```

use std::collections::BTreeSet;

use ahash::AHashMap;

use crate::annotation::pos::PartOfSpeech;
use crate::util::combinations::Combinations;

/// Token indices of one candidate match, ascending.
pub type Candidate = Vec<usize>;

/// Every candidate match of `components` in a sentence with lemmas `sentence`.
///
/// Returns the empty set when `components` is empty or when any component
/// lemma is absent from the sentence.
pub fn find_candidates<C, S>(components: &[C], sentence: &[S]) -> BTreeSet<Candidate>
where
    C: AsRef<str>,
    S: AsRef<str>,
{
    let mut result = BTreeSet::new();
    if components.is_empty() {
        return result;
    }

    // Distinct lemmas in first-seen order, with required multiplicity.
    let mut required: Vec<(String, usize)> = Vec::new();
    let mut slot: AHashMap<String, usize> = AHashMap::new();
    for lemma in components {
        let lemma = lemma.as_ref().to_lowercase();
        match slot.get(&lemma) {
            Some(&i) => required[i].1 += 1,
            None => {
                slot.insert(lemma.clone(), required.len());
                required.push((lemma, 1));
            }
        }
    }

    let sentence: Vec<String> = sentence.iter().map(|l| l.as_ref().to_lowercase()).collect();

    // Per distinct lemma, the groups of positions it may occupy.
    let mut drawn: Vec<Vec<Vec<usize>>> = Vec::with_capacity(required.len());
    for (lemma, count) in &required {
        let positions: Vec<usize> = sentence
            .iter()
            .enumerate()
            .filter(|(_, l)| *l == lemma)
            .map(|(i, _)| i)
            .collect();
        if positions.len() < *count {
            return result;
        }
        let groups: Vec<Vec<usize>> = if *count == 1 {
            positions.into_iter().map(|p| vec![p]).collect()
        } else {
            Combinations::new(&positions, *count).collect()
        };
        drawn.push(groups);
    }

    cross_product(&drawn, 0, &mut Vec::new(), &mut result);
    result
}

fn cross_product(
    drawn: &[Vec<Vec<usize>>],
    depth: usize,
    current: &mut Vec<usize>,
    out: &mut BTreeSet<Candidate>,
) {
    if depth == drawn.len() {
        let mut candidate = current.clone();
        candidate.sort_unstable();
        out.insert(candidate);
        return;
    }
    for group in &drawn[depth] {
        let len = current.len();
        current.extend_from_slice(group);
        cross_product(drawn, depth + 1, current, out);
        current.truncate(len);
    }
}

/// Whether sorted indices form a run of adjacent tokens.
///
/// At least `n - 1` of the consecutive differences must equal 1, so a single
/// index always qualifies.
pub fn is_contiguous(indices: &[usize]) -> bool {
    if indices.len() <= 1 {
        return true;
    }
    let unit_gaps = indices.windows(2).filter(|w| w[1] == w[0] + 1).count();
    unit_gaps >= indices.len() - 1
}

/// Candidates of [`find_candidates`] whose tokens are adjacent.
pub fn find_contiguous_candidates<C, S>(components: &[C], sentence: &[S]) -> BTreeSet<Candidate>
where
    C: AsRef<str>,
    S: AsRef<str>,
{
    find_candidates(components, sentence)
        .into_iter()
        .filter(|candidate| is_contiguous(candidate))
        .collect()
}

/// Largest distance between adjacent sorted indices.
///
/// `None` for fewer than two indices, where no gap is defined.
pub fn max_gap(indices: &[usize]) -> Option<usize> {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    sorted.windows(2).map(|w| w[1] - w[0]).max()
}

/// Which candidate generator an entry uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Only runs of adjacent tokens
    Contiguous,
    /// Any combination of positions
    Discontinuous,
}

impl MatchStrategy {
    /// The strategy for entries of the given part of speech.
    ///
    /// Nominal, adjectival, adverbial, adpositional, conjunction and
    /// interjection expressions are matched contiguously; everything else
    /// (verbal expressions in particular) may be discontinuous.
    pub fn for_pos(pos: PartOfSpeech) -> Self {
        match pos {
            PartOfSpeech::Adj
            | PartOfSpeech::Adv
            | PartOfSpeech::Adp
            | PartOfSpeech::Conj
            | PartOfSpeech::Intj
            | PartOfSpeech::Noun
            | PartOfSpeech::Propn => MatchStrategy::Contiguous,
            _ => MatchStrategy::Discontinuous,
        }
    }

    /// Run this strategy's generator.
    pub fn find<C, S>(&self, components: &[C], sentence: &[S]) -> BTreeSet<Candidate>
    where
        C: AsRef<str>,
        S: AsRef<str>,
    {
        match self {
            MatchStrategy::Contiguous => find_contiguous_candidates(components, sentence),
            MatchStrategy::Discontinuous => find_candidates(components, sentence),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(set: BTreeSet<Candidate>) -> Vec<Candidate> {
        set.into_iter().collect()
    }

    #[test]
    fn test_empty_input() {
        let none: [&str; 0] = [];
        assert!(find_candidates(&none, &none).is_empty());
        assert!(find_candidates(&none, &["a"]).is_empty());
    }

    #[test]
    fn test_no_matching_lemmas() {
        assert!(find_candidates(&["test1", "test2"], &["test3", "test4"]).is_empty());
        // One component missing is enough to fail.
        assert!(find_candidates(&["test1", "test2"], &["test1", "test3"]).is_empty());
    }

    #[test]
    fn test_single_lemma() {
        assert_eq!(
            collect(find_candidates(&["test1"], &["test1", "test2"])),
            vec![vec![0]]
        );
    }

    #[test]
    fn test_repeated_lemma_uses_combinations() {
        assert_eq!(
            collect(find_candidates(&["test1", "test1"], &["test1", "test1", "test2"])),
            vec![vec![0, 1]]
        );
        // Not enough occurrences for the multiplicity.
        assert!(find_candidates(&["a", "a"], &["a", "b"]).is_empty());
    }

    #[test]
    fn test_multiple_lemmas_with_redundancies() {
        assert_eq!(
            collect(find_candidates(
                &["test1", "test2"],
                &["test1", "test2", "test3", "test2"]
            )),
            vec![vec![0, 1], vec![0, 3]]
        );
    }

    #[test]
    fn test_duplicates_and_redundancies() {
        let components = ["test1", "test1", "test2", "test2"];
        assert_eq!(
            collect(find_candidates(
                &components,
                &["test1", "test1", "test2", "test2", "test3"]
            )),
            vec![vec![0, 1, 2, 3]]
        );
        assert_eq!(
            collect(find_candidates(
                &components,
                &["test1", "test1", "test2", "test2", "test3", "test2"]
            )),
            vec![vec![0, 1, 2, 3], vec![0, 1, 2, 5], vec![0, 1, 3, 5]]
        );
    }

    #[test]
    fn test_case_insensitivity() {
        assert_eq!(
            collect(find_candidates(&["Test1", "Test2"], &["test1", "TEST2", "test3"])),
            vec![vec![0, 1]]
        );
    }

    #[test]
    fn test_candidates_sorted_unique_in_bounds() {
        let sentence = ["test2", "test1", "test1", "test2", "test1"];
        let candidates = find_candidates(&["test1", "test1", "test2"], &sentence);
        assert!(!candidates.is_empty());
        for candidate in &candidates {
            assert!(candidate.windows(2).all(|w| w[0] < w[1]), "{candidate:?}");
            assert!(candidate.iter().all(|&i| i < sentence.len()));
        }
    }

    #[test]
    fn test_contiguous_subset() {
        let components = ["a", "b"];
        let sentence = ["a", "b", "x", "a", "x", "b"];
        let all = find_candidates(&components, &sentence);
        let contiguous = find_contiguous_candidates(&components, &sentence);

        assert!(contiguous.is_subset(&all));
        assert_eq!(collect(contiguous), vec![vec![0, 1]]);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_is_contiguous() {
        assert!(is_contiguous(&[4]));
        assert!(is_contiguous(&[2, 3, 4]));
        assert!(!is_contiguous(&[2, 4]));
        assert!(!is_contiguous(&[1, 2, 4]));
    }

    #[test]
    fn test_max_gap() {
        assert_eq!(max_gap(&[0, 4, 8]), Some(4));
        assert_eq!(max_gap(&[8, 0, 3]), Some(5));
        assert_eq!(max_gap(&[5]), None);
    }

    #[test]
    fn test_strategy_by_pos() {
        assert_eq!(MatchStrategy::for_pos(PartOfSpeech::Noun), MatchStrategy::Contiguous);
        assert_eq!(MatchStrategy::for_pos(PartOfSpeech::Conj), MatchStrategy::Contiguous);
        assert_eq!(MatchStrategy::for_pos(PartOfSpeech::Verb), MatchStrategy::Discontinuous);
        assert_eq!(MatchStrategy::for_pos(PartOfSpeech::Cconj), MatchStrategy::Discontinuous);
    }
}
