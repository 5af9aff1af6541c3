//! Lexicographic k-combinations.

/// Iterator over all k-element combinations of a slice, in lexicographic
/// order of positions.
///
/// Yields `C(n, k)` vectors. `k == 0` yields a single empty combination and
/// `k > n` yields nothing.
///
/// ```
/// use mwe_detector::util::combinations::Combinations;
///
/// let combos: Vec<Vec<usize>> = Combinations::new(&[1, 3, 5], 2).collect();
/// assert_eq!(combos, vec![vec![1, 3], vec![1, 5], vec![3, 5]]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    positions: Vec<usize>,
    done: bool,
}

impl<'a, T: Clone> Combinations<'a, T> {
    /// Create a combination iterator choosing `k` of `items`.
    pub fn new(items: &'a [T], k: usize) -> Self {
        Combinations {
            items,
            positions: (0..k).collect(),
            done: k > items.len(),
        }
    }

    fn advance(&mut self) {
        let n = self.items.len();
        let k = self.positions.len();

        // Rightmost position that can still move right.
        let mut i = k;
        while i > 0 {
            i -= 1;
            if self.positions[i] < n - k + i {
                self.positions[i] += 1;
                for j in i + 1..k {
                    self.positions[j] = self.positions[j - 1] + 1;
                }
                return;
            }
        }
        self.done = true;
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self
            .positions
            .iter()
            .map(|&p| self.items[p].clone())
            .collect();
        self.advance();
        Some(current)
    }
}
