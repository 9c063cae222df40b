//! Best-first search for a cheap [set cover]: a selection of subsets of
//! `0..n` whose union is the whole range, where a subset costs its length.
//!
//! States are the sets of covered elements. Expanding a state applies every
//! subset that covers at least one new element. The frontier is ordered by a
//! caller-provided priority, which makes the same search either uniform-cost
//! ([`uniform_cost_priority`]) or greedy ([`greedy_priority`]).
//!
//! [set cover]: https://en.wikipedia.org/wiki/Set_cover_problem

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Total length of the chosen subsets.
pub type Cost = usize;

/// Set of covered elements, stored as a bitset over `0..n`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coverage {
    universe: usize,
    words: Vec<u64>,
}

impl Coverage {
    const WORD_BITS: usize = u64::BITS as usize;

    /// No element of `0..n` is covered.
    #[must_use]
    pub fn empty(n: usize) -> Self {
        Self {
            universe: n,
            words: vec![0; n.div_ceil(Self::WORD_BITS)],
        }
    }

    /// Every element of `0..n` is covered.
    #[must_use]
    pub fn full(n: usize) -> Self {
        let mut coverage = Self::empty(n);
        for element in 0..n {
            coverage.insert(element);
        }
        coverage
    }

    /// Covers `element`. Elements outside of the universe are ignored.
    pub fn insert(&mut self, element: usize) {
        if element >= self.universe {
            return;
        }
        if let Some(word) = self.words.get_mut(element / Self::WORD_BITS) {
            *word |= 1 << (element % Self::WORD_BITS);
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn contains(&self, element: usize) -> bool {
        element < self.universe
            && self
                .words
                .get(element / Self::WORD_BITS)
                .is_some_and(|&word| word & (1 << (element % Self::WORD_BITS)) != 0)
    }

    /// Number of covered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Returns `true` if every element of `other` is covered.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip(&other.words)
            .all(|(&mine, &theirs)| theirs & !mine == 0)
    }

    #[must_use]
    fn union(&self, other: &Self) -> Self {
        Self {
            universe: self.universe,
            words: self
                .words
                .iter()
                .zip(&other.words)
                .map(|(&mine, &theirs)| mine | theirs)
                .collect(),
        }
    }
}

/// A complete cover found by [`search`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Total length of the chosen subsets.
    pub cost: Cost,
    /// Number of states taken from the frontier, the goal included.
    pub expanded: usize,
    /// Indices of the chosen subsets in the order they were applied.
    pub chosen: Vec<usize>,
}

/// Expands the cheapest known states first: Dijkstra's algorithm over
/// coverages.
#[must_use]
pub fn uniform_cost_priority(_coverage: &Coverage, cost: Cost) -> Cost {
    cost
}

/// Expands the states covering the most elements first, breaking ties by
/// cost. Finds a cover quickly but not necessarily the cheapest one.
#[must_use]
pub fn greedy_priority(coverage: &Coverage, cost: Cost) -> (Reverse<usize>, Cost) {
    (Reverse(coverage.len()), cost)
}

/// Searches for a selection of `sets` covering `0..n`, expanding states in
/// the order of `priority` (lower first).
///
/// Elements outside of `0..n` do not cover anything, but a subset always costs
/// its full length.
///
/// A cheaper path to a state that is still on the frontier replaces the
/// costlier one. Returns `None` if the union of all `sets` does not cover
/// `0..n`.
pub fn search<P, F>(n: usize, sets: &[Vec<usize>], priority: F) -> Option<Solution>
where
    P: Ord,
    F: Fn(&Coverage, Cost) -> P,
{
    let subsets: Vec<Coverage> = sets
        .iter()
        .map(|set| {
            let mut coverage = Coverage::empty(n);
            for &element in set {
                coverage.insert(element);
            }
            coverage
        })
        .collect();
    let goal = Coverage::full(n);
    let start = Coverage::empty(n);

    let mut costs: HashMap<Coverage, Cost> = HashMap::new();
    let mut parents: HashMap<Coverage, (Coverage, usize)> = HashMap::new();
    let mut closed: HashSet<Coverage> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    let _ = costs.insert(start.clone(), 0);
    frontier.push(Reverse((priority(&start, 0), 0, start)));

    let mut expanded = 0;
    while let Some(Reverse((_, cost, state))) = frontier.pop() {
        // Entries replaced by a cheaper path stay in the heap until popped.
        if closed.contains(&state) || costs.get(&state).is_some_and(|&best| best < cost) {
            continue;
        }
        expanded += 1;
        if state == goal {
            let chosen = path(&parents, &state);
            tracing::debug!(n, cost, expanded, subsets = chosen.len(), "cover found");
            return Some(Solution {
                cost,
                expanded,
                chosen,
            });
        }
        for (index, subset) in subsets.iter().enumerate() {
            if state.is_superset(subset) {
                continue;
            }
            let next = state.union(subset);
            if closed.contains(&next) {
                continue;
            }
            let next_cost = cost + sets[index].len();
            match costs.entry(next.clone()) {
                Entry::Occupied(mut known) => {
                    if *known.get() <= next_cost {
                        continue;
                    }
                    let _ = known.insert(next_cost);
                },
                Entry::Vacant(unknown) => {
                    let _ = unknown.insert(next_cost);
                },
            }
            let _ = parents.insert(next.clone(), (state.clone(), index));
            frontier.push(Reverse((priority(&next, next_cost), next_cost, next)));
        }
        let _ = closed.insert(state);
    }
    tracing::debug!(n, expanded, "no cover exists");
    None
}

/// Follows parent links from `state` back to the start.
fn path(parents: &HashMap<Coverage, (Coverage, usize)>, state: &Coverage) -> Vec<usize> {
    let mut chosen = Vec::new();
    let mut current = state;
    while let Some((parent, index)) = parents.get(current) {
        chosen.push(*index);
        current = parent;
    }
    chosen.reverse();
    chosen
}

/// Generates a reproducible problem: `n..=5n` subsets, each made of
/// `n/5..=n/2` random draws from `0..n` with duplicates removed.
#[must_use]
pub fn problem(n: usize, seed: u64) -> Vec<Vec<usize>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let count = rng.gen_range(n..=5 * n);
    (0..count)
        .map(|_| {
            let draws = rng.gen_range(n / 5..=n / 2);
            let mut set: Vec<usize> = (0..draws).map(|_| rng.gen_range(0..n)).collect();
            set.sort_unstable();
            set.dedup();
            set
        })
        .collect()
}
