use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::Demo;
use crate::error::InputError;
use crate::rendering::Viewport;

pub const DEFAULT_DELAY_MS: u64 = 200;
pub const MIN_DELAY_MS: u64 = 50;
pub const MAX_DELAY_MS: u64 = 1000;

/// How long the driver keeps stepping
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// Show this many generations, then stop (0 = none)
    Limited(u64),
    /// Keep going until the caller stops the loop
    Infinite,
}

impl RunMode {
    pub fn is_infinite(&self) -> bool {
        matches!(self, RunMode::Infinite)
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Limited(n) => write!(f, "LIMITED MODE - {} generations", n),
            RunMode::Infinite => f.write_str("INFINITE MODE - Press Ctrl+C to stop"),
        }
    }
}

/// Which kind of run a mode choice selects, before the generation count is known
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModeChoice {
    /// "a": stop after the demo's generation count
    #[default]
    Limited,
    /// "b": run forever
    Infinite,
}

impl FromStr for ModeChoice {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "limited" => Ok(ModeChoice::Limited),
            "b" | "infinite" => Ok(ModeChoice::Infinite),
            other => Err(InputError::UnknownMode(other.to_string())),
        }
    }
}

/// Everything one run needs. Built once, then only read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub demo: Demo,
    pub viewport: Viewport,
    pub mode: RunMode,
    pub delay: Duration,
    /// Name of a rule known to `rule_by_name`
    pub rule: &'static str,
    /// RNG seed for the random soup; `None` draws from the OS
    pub seed: Option<u64>,
    pub clear_screen: bool,
}

impl RunConfig {
    /// Defaults for a demo: its window, a limited run of its generation
    /// count, the default delay, and Conway's rule
    pub fn new(demo: Demo) -> Self {
        Self {
            demo,
            viewport: demo.viewport(),
            mode: RunMode::Limited(demo.generations()),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            rule: "Conway",
            seed: None,
            clear_screen: true,
        }
    }

    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_rule(mut self, rule: &'static str) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Resolve a mode choice against this demo, with an optional generation override
    pub fn mode_for(demo: Demo, choice: ModeChoice, generations: Option<u64>) -> RunMode {
        match choice {
            ModeChoice::Infinite => RunMode::Infinite,
            ModeChoice::Limited => RunMode::Limited(generations.unwrap_or(demo.generations())),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(Demo::default())
    }
}
