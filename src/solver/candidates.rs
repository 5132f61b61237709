//! Candidate word generation
//!
//! Candidates are produced lazily in search priority order: larger tile
//! counts first, then subsets in rack index order, then permutations of each
//! subset in lexicographic index order.

use crate::core::Tile;
use rustc_hash::FxHashSet;

/// k-subsets of `0..n` in lexicographic order
///
/// # Examples
/// ```
/// use skrabbkle::solver::candidates::Combinations;
///
/// let combos: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
/// assert_eq!(combos[0], vec![0, 1]);
/// assert_eq!(combos[5], vec![2, 3]);
/// assert_eq!(combos.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    #[must_use]
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let k = self.indices.len();
        // Rightmost index that can still move right
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            self.done = true;
            return None;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// All orderings of `0..k` in lexicographic order
///
/// # Examples
/// ```
/// use skrabbkle::solver::candidates::Permutations;
///
/// let perms: Vec<Vec<usize>> = Permutations::new(3).collect();
/// assert_eq!(perms.len(), 6);
/// assert_eq!(perms[0], vec![0, 1, 2]);
/// assert_eq!(perms[1], vec![0, 2, 1]);
/// assert_eq!(perms[5], vec![2, 1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations {
    order: Vec<usize>,
    started: bool,
    done: bool,
}

impl Permutations {
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self {
            order: (0..k).collect(),
            started: false,
            done: false,
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.order.clone());
        }

        let v = &mut self.order;
        let Some(i) = (1..v.len()).rev().find(|&i| v[i - 1] < v[i]) else {
            self.done = true;
            return None;
        };
        let pivot = i - 1;
        let Some(j) = (i..v.len()).rev().find(|&j| v[j] > v[pivot]) else {
            self.done = true;
            return None;
        };
        v.swap(pivot, j);
        v[i..].reverse();
        Some(v.clone())
    }
}

/// Words spelled by every permutation of every `size`-subset of `tiles`
///
/// Wildcards contribute their current letter (`_` when unassigned), so words
/// containing them never match a dictionary. Duplicates are not removed.
pub fn tier(tiles: &[Tile], size: usize) -> impl Iterator<Item = String> + '_ {
    Combinations::new(tiles.len(), size).flat_map(move |subset| {
        Permutations::new(size).map(move |order| {
            order
                .iter()
                .map(|&i| tiles[subset[i]].char())
                .collect::<String>()
        })
    })
}

/// Every distinct candidate word for sizes `max` down to `min`
///
/// The first occurrence of each word is kept, so the order of first
/// appearances matches the full enumeration.
///
/// # Examples
/// ```
/// use skrabbkle::core::Tile;
/// use skrabbkle::solver::candidates::candidate_words;
///
/// let tiles = [Tile::letter('A', 1), Tile::letter('T', 1)];
/// let words: Vec<String> = candidate_words(&tiles, 1, 2).collect();
/// assert_eq!(words, vec!["AT", "TA", "A", "T"]);
/// ```
pub fn candidate_words(tiles: &[Tile], min: usize, max: usize) -> impl Iterator<Item = String> + '_ {
    let mut seen = FxHashSet::default();
    (min..=max)
        .rev()
        .flat_map(move |size| tier(tiles, size))
        .filter(move |word| seen.insert(word.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(letters: &str) -> Vec<Tile> {
        letters
            .chars()
            .map(|c| if c == '_' { Tile::wildcard(5) } else { Tile::letter(c, 1) })
            .collect()
    }

    #[test]
    fn combination_counts() {
        assert_eq!(Combinations::new(7, 7).count(), 1);
        assert_eq!(Combinations::new(7, 3).count(), 35);
        assert_eq!(Combinations::new(7, 1).count(), 7);
        assert_eq!(Combinations::new(3, 4).count(), 0);
    }

    #[test]
    fn combinations_in_index_order() {
        let combos: Vec<_> = Combinations::new(4, 3).collect();
        assert_eq!(
            combos,
            vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3], vec![1, 2, 3]]
        );
    }

    #[test]
    fn permutation_counts() {
        assert_eq!(Permutations::new(1).count(), 1);
        assert_eq!(Permutations::new(4).count(), 24);
        assert_eq!(Permutations::new(7).count(), 5040);
    }

    #[test]
    fn permutations_match_recursive_order() {
        fn recurse(k: usize, current: &mut Vec<usize>, used: &mut [bool], out: &mut Vec<Vec<usize>>) {
            if current.len() == k {
                out.push(current.clone());
                return;
            }
            for i in 0..k {
                if !used[i] {
                    used[i] = true;
                    current.push(i);
                    recurse(k, current, used, out);
                    current.pop();
                    used[i] = false;
                }
            }
        }

        let mut expected = Vec::new();
        recurse(4, &mut Vec::new(), &mut [false; 4], &mut expected);
        let actual: Vec<_> = Permutations::new(4).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn tier_spells_subsets_then_orders() {
        let rack = tiles("CAT");
        let words: Vec<String> = tier(&rack, 2).collect();
        assert_eq!(words, vec!["CA", "AC", "CT", "TC", "AT", "TA"]);
    }

    #[test]
    fn tier_keeps_duplicates() {
        let rack = tiles("AA");
        let words: Vec<String> = tier(&rack, 2).collect();
        assert_eq!(words, vec!["AA", "AA"]);
    }

    #[test]
    fn candidate_words_deduplicates_and_orders_by_size() {
        let rack = tiles("EEL");
        let words: Vec<String> = candidate_words(&rack, 1, 3).collect();
        assert_eq!(words, vec!["EEL", "ELE", "LEE", "EE", "EL", "LE", "E", "L"]);
    }

    #[test]
    fn wildcards_spell_underscore() {
        let rack = tiles("H_");
        let words: Vec<String> = tier(&rack, 2).collect();
        assert_eq!(words, vec!["H_", "_H"]);
    }

    #[test]
    fn candidate_words_is_lazy() {
        let rack = tiles("ABCDEFG");
        let first: Vec<String> = candidate_words(&rack, 1, 7).take(2).collect();
        assert_eq!(first, vec!["ABCDEFG", "ABCDEGF"]);
    }
}
