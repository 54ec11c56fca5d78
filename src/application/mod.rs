mod demo;
mod driver;
mod run_config;
mod simulation;

pub use demo::Demo;
pub use driver::{Driver, RunSummary};
pub use run_config::{
    RunConfig, RunMode, ModeChoice, DEFAULT_DELAY_MS, MIN_DELAY_MS, MAX_DELAY_MS,
};
pub use simulation::Simulation;
