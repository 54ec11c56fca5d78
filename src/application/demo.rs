use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::domain::{
    DEFAULT_DENSITY, LiveSet, Pattern, blinker, block, glider, gosper_glider_gun, presets,
    r_pentomino, toad,
};
use crate::error::InputError;
use crate::rendering::Viewport;

/// Seed scenarios offered by the menu.
/// Each one fixes its seed, window, and generation count for limited runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Demo {
    /// Glider (moves across screen)
    #[default]
    Glider,
    /// Blinker and toad side by side
    Oscillators,
    /// R-pentomino (chaotic growth)
    RPentomino,
    /// Gosper glider gun (never stabilizes)
    GliderGun,
    /// Glider, blinker, block and toad together
    Mixed,
    /// Random 30% soup over the window
    RandomSoup,
    /// Any library pattern placed at (10, 10)
    Preset(Pattern),
}

impl Demo {
    /// Menu entries in key order ("1" through "6")
    pub const MENU: [Demo; 6] = [
        Demo::Glider,
        Demo::Oscillators,
        Demo::RPentomino,
        Demo::GliderGun,
        Demo::Mixed,
        Demo::RandomSoup,
    ];

    /// Menu key, if the demo has one
    pub fn key(&self) -> Option<usize> {
        Self::MENU.iter().position(|d| d == self).map(|i| i + 1)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Demo::Glider => "Glider",
            Demo::Oscillators => "Oscillators",
            Demo::RPentomino => "R-pentomino",
            Demo::GliderGun => "Glider Gun",
            Demo::Mixed => "Mixed",
            Demo::RandomSoup => "Random",
            Demo::Preset(p) => p.name,
        }
    }

    /// Menu line text
    pub fn description(&self) -> &'static str {
        match self {
            Demo::Glider => "Glider (moves across screen)",
            Demo::Oscillators => "Oscillators (blinker and toad)",
            Demo::RPentomino => "R-pentomino (chaotic growth)",
            Demo::GliderGun => "Glider Gun (creates gliders) - INFINITE",
            Demo::Mixed => "Mixed patterns",
            Demo::RandomSoup => "Random soup (30% alive)",
            Demo::Preset(p) => p.description,
        }
    }

    pub fn viewport(&self) -> Viewport {
        match self {
            Demo::Glider | Demo::Mixed | Demo::RandomSoup => Viewport::new(50, 25),
            Demo::Oscillators => Viewport::new(40, 20),
            Demo::RPentomino => Viewport::new(60, 30),
            Demo::GliderGun => Viewport::new(80, 40),
            Demo::Preset(p) => Viewport::new((p.width() + 20).max(40), (p.height() + 20).max(20)),
        }
    }

    /// Generations shown in a limited run
    pub fn generations(&self) -> u64 {
        match self {
            Demo::Glider | Demo::Preset(_) => 100,
            Demo::Oscillators => 50,
            Demo::RPentomino => 200,
            Demo::GliderGun => 300,
            Demo::Mixed | Demo::RandomSoup => 150,
        }
    }

    /// Initial live set. Only `RandomSoup` draws from `rng`.
    pub fn seed<R: Rng>(&self, rng: &mut R) -> LiveSet {
        match self {
            Demo::Glider => glider(5, 5),
            Demo::Oscillators => blinker(10, 10).union(&toad(20, 10)),
            Demo::RPentomino => r_pentomino(30, 15),
            Demo::GliderGun => gosper_glider_gun(5, 10),
            Demo::Mixed => glider(5, 5)
                .union(&blinker(25, 12))
                .union(&block(40, 18))
                .union(&toad(15, 20)),
            Demo::RandomSoup => {
                let Viewport { width, height } = self.viewport();
                LiveSet::random(width, height, DEFAULT_DENSITY, rng)
            }
            Demo::Preset(p) => p.at(10, 10),
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts a menu key, a demo name, or a library pattern name (case-insensitive)
impl FromStr for Demo {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim();
        if let Ok(key) = choice.parse::<usize>() {
            return key
                .checked_sub(1)
                .and_then(|i| Self::MENU.get(i).copied())
                .ok_or_else(|| InputError::UnknownDemo(choice.to_string()));
        }
        Self::MENU
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(choice))
            .or_else(|| presets::by_name(choice).map(Demo::Preset))
            .ok_or_else(|| InputError::UnknownDemo(choice.to_string()))
    }
}
