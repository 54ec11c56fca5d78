//! Generation-to-generation transition over a sparse live set.
//!
//! Only the candidate set (live cells and their neighbours) is evaluated,
//! so one step costs O(population) regardless of how far the pattern has
//! spread. Every candidate reads generation N only; the result is a fresh
//! snapshot and the input is never touched.

use super::{ConwayRule, LiveSet, Rule};

/// Next generation under Conway's rule (B3/S23)
pub fn step(live: &LiveSet) -> LiveSet {
    step_with(live, &ConwayRule)
}

/// Next generation under an arbitrary rule
pub fn step_with(live: &LiveSet, rule: &dyn Rule) -> LiveSet {
    live.candidates()
        .into_iter()
        .filter(|&cell| rule.evolve(live.contains(cell), live.count_live_neighbors(cell)))
        .collect()
}

/// Apply `step` n times; n = 0 returns a copy of the input
pub fn step_n(live: &LiveSet, n: u64) -> LiveSet {
    (0..n).fold(live.clone(), |current, _| step(&current))
}

/// Endless iterator over generation 0 (the seed), 1, 2, ...
pub fn generations(seed: LiveSet) -> Generations {
    Generations { next: Some(seed) }
}

/// Iterator returned by [`generations`].
/// Bounded runs use `take(n)`; unbounded runs just stop pulling.
pub struct Generations {
    next: Option<LiveSet>,
}

impl Iterator for Generations {
    type Item = LiveSet;

    fn next(&mut self) -> Option<LiveSet> {
        let current = self.next.take()?;
        self.next = Some(step(&current));
        Some(current)
    }
}
