use std::time::Instant;

use crate::domain::{LiveSet, Rule, default_rule, step_with};

/// Simulation threads one live-set snapshot from generation to generation.
/// Each tick replaces the snapshot with a freshly computed one.
pub struct Simulation {
    pub live: LiveSet,
    pub generation: u64,
    pub rule: Box<dyn Rule>,
    pub last_step_time_ms: f32,  // Step performance metric
}

impl Simulation {
    /// Start at generation 0 with Conway's rule
    pub fn new(seed: LiveSet) -> Self {
        Self {
            live: seed,
            generation: 0,
            rule: default_rule(),
            last_step_time_ms: 0.0,
        }
    }

    /// Set the rule (builder pattern)
    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rule = rule;
        self
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    /// Advance exactly one generation
    pub fn tick(mut self) -> Self {
        let start = Instant::now();
        self.live = step_with(&self.live, self.rule.as_ref());
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        self
    }
}
