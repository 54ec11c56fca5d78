// Domain layer - Cells, live sets, rules, transition, patterns
pub mod domain;

// Application layer - Demos, run configuration, generation loop
pub mod application;

// Infrastructure layer - Text rendering, user input
pub mod rendering;
pub mod input;

pub mod error;

// Re-exports for convenience
pub use domain::{Cell, LiveSet, Pattern, Rule, presets, neighbors, count_live_neighbors, step};
pub use application::{Demo, Driver, RunConfig, RunMode, Simulation};
pub use rendering::{Viewport, render_text};
pub use error::{Error, InputError};
