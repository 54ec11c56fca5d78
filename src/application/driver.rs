use std::io::Write;
use std::thread;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::{RunConfig, RunMode, Simulation};
use crate::domain::{default_rule, rule_by_name};
use crate::error::Result;
use crate::rendering::write_frame;

/// Shown under every frame of an infinite run
pub const STOP_HINT: &str = "[Press Ctrl+C to stop]";

/// Outcome of a finished run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames written (one per generation shown)
    pub frames: u64,
    /// Generation the simulation stopped at
    pub final_generation: u64,
    pub final_population: usize,
}

/// Driver owns the generation loop: draw, wait, step.
/// Stopping is only ever decided between two steps.
pub struct Driver {
    config: RunConfig,
}

impl Driver {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Build generation 0 from the configured demo and rule
    pub fn start(&self) -> Simulation {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let rule = rule_by_name(self.config.rule).unwrap_or_else(default_rule);
        Simulation::new(self.config.demo.seed(&mut rng)).with_rule(rule)
    }

    /// Run until the mode says stop. Infinite runs never return on their own.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        self.run_until(out, |_| true)
    }

    /// Like `run`, but also stops as soon as `should_continue` returns false.
    /// The predicate sees each generation before it is drawn.
    pub fn run_until<W, F>(&self, out: &mut W, mut should_continue: F) -> Result<RunSummary>
    where
        W: Write,
        F: FnMut(&Simulation) -> bool,
    {
        let config = &self.config;
        info!(
            demo = %config.demo,
            rule = config.rule,
            mode = ?config.mode,
            delay_ms = config.delay.as_millis() as u64,
            "starting run"
        );

        let mut sim = self.start();
        let mut frames = 0;
        loop {
            if let RunMode::Limited(limit) = config.mode {
                if frames >= limit {
                    break;
                }
            }
            if !should_continue(&sim) {
                break;
            }

            write_frame(out, config.viewport, &sim.live, sim.generation, config.clear_screen)?;
            if config.mode.is_infinite() {
                writeln!(out, "\n{}", STOP_HINT)?;
                out.flush()?;
            }
            frames += 1;

            if !config.delay.is_zero() {
                thread::sleep(config.delay);
            }
            sim = sim.tick();
            debug!(
                generation = sim.generation,
                population = sim.population(),
                visible = config.viewport.visible_count(&sim.live),
                step_ms = sim.last_step_time_ms,
                "stepped"
            );
        }

        let summary = RunSummary {
            frames,
            final_generation: sim.generation,
            final_population: sim.population(),
        };
        info!(?summary, bounds = ?sim.live.bounding_box(), "run finished");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Demo;
    use crate::domain::{glider, step_n};
    use crate::input::Interrupt;
    use std::time::Duration;

    fn quiet(demo: Demo) -> RunConfig {
        RunConfig::new(demo)
            .with_delay(Duration::ZERO)
            .with_clear_screen(false)
    }

    fn frame_count(output: &[u8]) -> usize {
        String::from_utf8_lossy(output).matches("Generation: ").count()
    }

    #[test]
    fn test_limited_run_writes_each_generation() {
        let driver = Driver::new(quiet(Demo::Glider).with_mode(RunMode::Limited(8)));
        let mut out = Vec::new();
        let summary = driver.run(&mut out).unwrap();

        assert_eq!(summary.frames, 8);
        assert_eq!(summary.final_generation, 8);
        assert_eq!(summary.final_population, 5);
        assert_eq!(frame_count(&out), 8);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Generation: 0 | Population: 5\n"));
        assert!(text.contains("Generation: 7 | Population: 5\n"));
    }

    #[test]
    fn test_stop_hint_only_in_infinite_mode() {
        let driver = Driver::new(quiet(Demo::Glider).with_mode(RunMode::Infinite));
        let mut out = Vec::new();
        driver.run_until(&mut out, |sim| sim.generation < 3).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(STOP_HINT).count(), 3);
        assert!(text.contains("\n\n[Press Ctrl+C to stop]\n"));

        let driver = Driver::new(quiet(Demo::Glider).with_mode(RunMode::Limited(3)));
        let mut out = Vec::new();
        driver.run(&mut out).unwrap();
        assert!(!String::from_utf8(out).unwrap().contains(STOP_HINT));
    }

    #[test]
    fn test_interrupt_stops_infinite_run_between_generations() {
        let interrupt = Interrupt::new();
        let driver = Driver::new(quiet(Demo::Glider).with_mode(RunMode::Infinite));
        let mut out = Vec::new();
        let summary = driver
            .run_until(&mut out, |sim| {
                if sim.generation == 5 {
                    interrupt.trigger();
                }
                !interrupt.is_set()
            })
            .unwrap();
        assert_eq!(summary.frames, 5);
        assert_eq!(summary.final_generation, 5);
        assert_eq!(summary.final_population, 5);
    }

    #[test]
    fn test_zero_generations_writes_nothing() {
        let driver = Driver::new(quiet(Demo::GliderGun).with_mode(RunMode::Limited(0)));
        let mut out = Vec::new();
        let summary = driver.run(&mut out).unwrap();
        assert_eq!(summary.frames, 0);
        assert_eq!(summary.final_generation, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_infinite_run_stops_between_generations() {
        let driver = Driver::new(quiet(Demo::GliderGun).with_mode(RunMode::Infinite));
        let mut out = Vec::new();
        let summary = driver.run_until(&mut out, |sim| sim.generation < 40).unwrap();
        assert_eq!(summary.frames, 40);
        assert_eq!(summary.final_generation, 40);
        assert_eq!(frame_count(&out), 40);
    }

    #[test]
    fn test_frame_dimensions_follow_viewport() {
        let driver = Driver::new(quiet(Demo::Oscillators).with_mode(RunMode::Limited(1)));
        let mut out = Vec::new();
        driver.run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let grid: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(grid.len(), 20);
        assert!(grid.iter().all(|row| row.len() == 40));
    }

    #[test]
    fn test_start_matches_demo_seed() {
        let driver = Driver::new(quiet(Demo::Glider));
        let sim = driver.start();
        assert_eq!(sim.live, glider(5, 5));
        assert_eq!(sim.rule.name(), "Conway");
    }

    #[test]
    fn test_unknown_rule_name_uses_conway() {
        let driver = Driver::new(quiet(Demo::Glider).with_rule("Seeds"));
        assert_eq!(driver.start().rule.name(), "Conway");
    }

    #[test]
    fn test_seeded_soup_is_reproducible() {
        let config = quiet(Demo::RandomSoup).with_seed(Some(17));
        let a = Driver::new(config.clone()).start().live;
        let b = Driver::new(config).start().live;
        assert_eq!(a, b);
    }

    #[test]
    fn test_final_state_matches_step_n() {
        let driver = Driver::new(quiet(Demo::RPentomino).with_mode(RunMode::Limited(30)));
        let summary = driver.run(&mut std::io::sink()).unwrap();
        let expected = step_n(&driver.start().live, 30);
        assert_eq!(summary.final_population, expected.len());
    }
}
