//! User input: command-line flags, interactive prompts, and the fallback
//! policy that turns any bad answer into a documented default.

mod args;
mod interrupt;
mod prompt;

use std::io::{self, BufRead, Write};
use std::time::Duration;

use tracing::warn;

use crate::application::{
    DEFAULT_DELAY_MS, Demo, MAX_DELAY_MS, MIN_DELAY_MS, ModeChoice, RunConfig,
};
use crate::domain::{default_rule, rule_by_name};
use crate::error::InputError;

pub use args::Args;
pub use interrupt::Interrupt;
pub use prompt::{print_menu, prompt};

/// Delay in ms: empty means the default, any integer (negative included)
/// clamps into the allowed range
pub fn parse_speed(input: &str) -> Result<u64, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(DEFAULT_DELAY_MS);
    }
    input
        .parse::<i128>()
        .map(|ms| ms.clamp(MIN_DELAY_MS as i128, MAX_DELAY_MS as i128) as u64)
        .map_err(|_| InputError::InvalidSpeed(input.to_string()))
}

pub fn speed_or_default(input: &str) -> Duration {
    let ms = parse_speed(input).unwrap_or_else(|err| {
        warn!(%err, default_ms = DEFAULT_DELAY_MS, "using default speed");
        DEFAULT_DELAY_MS
    });
    Duration::from_millis(ms)
}

pub fn demo_or_default(input: &str) -> Demo {
    input.parse().unwrap_or_else(|err: InputError| {
        warn!(%err, "running the glider demo");
        Demo::default()
    })
}

/// Empty input silently means a limited run
pub fn mode_or_default(input: &str) -> ModeChoice {
    if input.trim().is_empty() {
        return ModeChoice::default();
    }
    input.parse().unwrap_or_else(|err: InputError| {
        warn!(%err, "using limited mode");
        ModeChoice::default()
    })
}

pub fn rule_or_default(input: &str) -> &'static str {
    match rule_by_name(input) {
        Some(rule) => rule.name(),
        None => {
            let err = InputError::UnknownRule(input.to_string());
            warn!(%err, "using Conway's rule");
            default_rule().name()
        }
    }
}

/// Combine flags with prompts for anything the flags left out
pub fn resolve_config<R: BufRead, W: Write>(
    args: &Args,
    input: &mut R,
    out: &mut W,
) -> io::Result<RunConfig> {
    let interactive = args.pattern.is_none() || args.mode.is_none() || args.speed.is_none();
    if interactive {
        print_menu(out)?;
    }

    let pattern = match &args.pattern {
        Some(p) => p.clone(),
        None => prompt(input, out, "Enter the pattern choice (1-6)")?,
    };
    let mode = match &args.mode {
        Some(m) => m.clone(),
        None => prompt(input, out, "Enter mode (a/b): ")?,
    };
    let speed = match &args.speed {
        Some(s) => s.clone(),
        None => prompt(input, out, "Enter speed in ms (50-1000, default 200): ")?,
    };

    let demo = demo_or_default(&pattern);
    let mode = RunConfig::mode_for(demo, mode_or_default(&mode), args.generations);

    Ok(RunConfig::new(demo)
        .with_mode(mode)
        .with_delay(speed_or_default(&speed))
        .with_rule(rule_or_default(&args.rule))
        .with_seed(args.seed)
        .with_clear_screen(!args.no_clear))
}
