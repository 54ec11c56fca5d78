mod cell;
mod live_set;
mod rules;
mod patterns;
mod transition;

pub use cell::{Cell, neighbors};
pub use live_set::{LiveSet, DEFAULT_DENSITY, count_live_neighbors};
pub use rules::{Rule, ConwayRule, HighLifeRule, all_rules, default_rule, rule_by_name};
pub use patterns::{
    Pattern, presets,
    glider, blinker, block, toad, r_pentomino, gosper_glider_gun,
    beacon, pulsar, lwss, acorn,
};
pub use transition::{step, step_with, step_n, generations, Generations};
