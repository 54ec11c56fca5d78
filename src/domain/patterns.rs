use super::{Cell, LiveSet};

/// A named, immutable shape that can be stamped anywhere on the plane
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub offsets: &'static [(i32, i32)],  // Relative coordinates of alive cells
}

impl Pattern {
    /// Glider - simplest spaceship, moves diagonally
    pub const GLIDER: Pattern = Pattern {
        name: "Glider",
        description: "Moves diagonally (period 4)",
        offsets: &[
            (1, 0),
            (2, 1),
            (0, 2), (1, 2), (2, 2),
        ],
    };

    /// Blinker - horizontal line, period 2 oscillator
    pub const BLINKER: Pattern = Pattern {
        name: "Blinker",
        description: "Oscillator (period 2)",
        offsets: &[(0, 0), (1, 0), (2, 0)],
    };

    /// Block - simple still life
    pub const BLOCK: Pattern = Pattern {
        name: "Block",
        description: "Still life",
        offsets: &[
            (0, 0), (1, 0),
            (0, 1), (1, 1),
        ],
    };

    /// Toad - period 2 oscillator
    pub const TOAD: Pattern = Pattern {
        name: "Toad",
        description: "Oscillator (period 2)",
        offsets: &[
            (1, 0), (2, 0), (3, 0),
            (0, 1), (1, 1), (2, 1),
        ],
    };

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub const R_PENTOMINO: Pattern = Pattern {
        name: "R-pentomino",
        description: "Methuselah - stabilizes at gen 1103",
        offsets: &[
            (1, 0), (2, 0),
            (0, 1), (1, 1),
            (1, 2),
        ],
    };

    /// Gosper Glider Gun - produces gliders indefinitely
    pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
        name: "Gosper Glider Gun",
        description: "Produces gliders (period 30)",
        offsets: &[
            // Left square
            (0, 4), (0, 5),
            (1, 4), (1, 5),

            // Left circle
            (10, 4), (10, 5), (10, 6),
            (11, 3), (11, 7),
            (12, 2), (12, 8),
            (13, 2), (13, 8),
            (14, 5),
            (15, 3), (15, 7),
            (16, 4), (16, 5), (16, 6),
            (17, 5),

            // Middle pieces
            (20, 2), (20, 3), (20, 4),
            (21, 2), (21, 3), (21, 4),
            (22, 1), (22, 5),
            (24, 0), (24, 1), (24, 5), (24, 6),

            // Right square
            (34, 2), (34, 3),
            (35, 2), (35, 3),
        ],
    };

    /// Beacon - period 2 oscillator
    pub const BEACON: Pattern = Pattern {
        name: "Beacon",
        description: "Oscillator (period 2)",
        offsets: &[
            (0, 0), (1, 0),
            (0, 1),
            (3, 2),
            (2, 3), (3, 3),
        ],
    };

    /// Pulsar - period 3 oscillator
    pub const PULSAR: Pattern = Pattern {
        name: "Pulsar",
        description: "Oscillator (period 3)",
        offsets: &[
            // Top
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            // Upper middle
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            // Center
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            // Lower middle
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            // Bottom
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    };

    /// Lightweight Spaceship (LWSS)
    pub const LWSS: Pattern = Pattern {
        name: "LWSS",
        description: "Lightweight Spaceship (period 4)",
        offsets: &[
            (1, 0), (4, 0),
            (0, 1),
            (0, 2), (4, 2),
            (0, 3), (1, 3), (2, 3), (3, 3),
        ],
    };

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub const ACORN: Pattern = Pattern {
        name: "Acorn",
        description: "Methuselah - stabilizes at gen 5206",
        offsets: &[
            (1, 0),
            (3, 1),
            (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
        ],
    };

    /// Live cells of the pattern translated to (x, y).
    /// Cells that would fall past the i32 limits are left out.
    pub fn at(&self, x: i32, y: i32) -> LiveSet {
        self.offsets
            .iter()
            .filter_map(|&(dx, dy)| Cell::new(x, y).checked_offset(dx, dy))
            .collect()
    }

    /// Number of live cells
    pub const fn len(&self) -> usize {
        self.offsets.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn width(&self) -> u32 {
        self.offsets.iter().map(|&(x, _)| x + 1).max().unwrap_or(0) as u32
    }

    pub fn height(&self) -> u32 {
        self.offsets.iter().map(|&(_, y)| y + 1).max().unwrap_or(0) as u32
    }
}

pub fn glider(x: i32, y: i32) -> LiveSet {
    Pattern::GLIDER.at(x, y)
}

pub fn blinker(x: i32, y: i32) -> LiveSet {
    Pattern::BLINKER.at(x, y)
}

pub fn block(x: i32, y: i32) -> LiveSet {
    Pattern::BLOCK.at(x, y)
}

pub fn toad(x: i32, y: i32) -> LiveSet {
    Pattern::TOAD.at(x, y)
}

pub fn r_pentomino(x: i32, y: i32) -> LiveSet {
    Pattern::R_PENTOMINO.at(x, y)
}

pub fn gosper_glider_gun(x: i32, y: i32) -> LiveSet {
    Pattern::GOSPER_GLIDER_GUN.at(x, y)
}

pub fn beacon(x: i32, y: i32) -> LiveSet {
    Pattern::BEACON.at(x, y)
}

pub fn pulsar(x: i32, y: i32) -> LiveSet {
    Pattern::PULSAR.at(x, y)
}

pub fn lwss(x: i32, y: i32) -> LiveSet {
    Pattern::LWSS.at(x, y)
}

pub fn acorn(x: i32, y: i32) -> LiveSet {
    Pattern::ACORN.at(x, y)
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::Pattern;

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            Pattern::GLIDER,
            Pattern::BLINKER,
            Pattern::BLOCK,
            Pattern::TOAD,
            Pattern::R_PENTOMINO,
            Pattern::GOSPER_GLIDER_GUN,
            Pattern::BEACON,
            Pattern::PULSAR,
            Pattern::LWSS,
            Pattern::ACORN,
        ]
    }

    /// Case-insensitive lookup by pattern name
    pub fn by_name(name: &str) -> Option<Pattern> {
        let name = name.trim();
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{step, step_n};

    #[test]
    fn test_exact_offsets_at_origin() {
        let expect = |p: LiveSet, cells: &[(i32, i32)]| {
            assert_eq!(p, cells.iter().copied().collect::<LiveSet>());
        };
        expect(glider(0, 0), &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        expect(blinker(0, 0), &[(0, 0), (1, 0), (2, 0)]);
        expect(block(0, 0), &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        expect(toad(0, 0), &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)]);
        expect(r_pentomino(0, 0), &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_origin_translation() {
        assert_eq!(glider(12, -7), glider(0, 0).translate(12, -7));
        assert_eq!(gosper_glider_gun(5, 10), gosper_glider_gun(0, 0).translate(5, 10));
    }

    #[test]
    fn test_cell_counts_have_no_duplicates() {
        for p in presets::all_patterns() {
            assert_eq!(p.at(0, 0).len(), p.len(), "{} has duplicate offsets", p.name);
        }
        assert_eq!(Pattern::GOSPER_GLIDER_GUN.len(), 36);
    }

    #[test]
    fn test_dimensions() {
        assert_eq!((Pattern::GLIDER.width(), Pattern::GLIDER.height()), (3, 3));
        assert_eq!((Pattern::BLINKER.width(), Pattern::BLINKER.height()), (3, 1));
        assert_eq!(
            (Pattern::GOSPER_GLIDER_GUN.width(), Pattern::GOSPER_GLIDER_GUN.height()),
            (36, 9)
        );
    }

    #[test]
    fn test_union_of_separate_patterns() {
        let a = blinker(10, 10);
        let b = toad(20, 10);
        let u = a.union(&b);
        assert_eq!(u.len(), a.len() + b.len());
        assert!(a.iter().chain(b.iter()).all(|c| u.contains(c)));
        assert!(u.iter().all(|c| a.contains(c) || b.contains(c)));
    }

    #[test]
    fn test_union_deduplicates_overlap() {
        let u = block(0, 0).union(&block(1, 0));
        assert_eq!(u.len(), 6);
    }

    #[test]
    fn test_oscillator_periods() {
        let b = beacon(0, 0);
        assert_eq!(step_n(&b, 2), b);
        let p = pulsar(-6, -6);
        assert_ne!(step(&p), p);
        assert_eq!(step_n(&p, 3), p);
    }

    #[test]
    fn test_lwss_travels() {
        // Two cells towards -x every four generations
        let ship = lwss(0, 0);
        assert_eq!(step_n(&ship, 4), ship.translate(-2, 0));
    }

    #[test]
    fn test_glider_gun_keeps_growing() {
        let gun = gosper_glider_gun(0, 0);
        let later = step_n(&gun, 120);
        assert!(later.len() > gun.len());
    }

    #[test]
    fn test_by_name() {
        assert_eq!(presets::by_name("r-PENTOMINO"), Some(Pattern::R_PENTOMINO));
        assert_eq!(presets::by_name("nope"), None);
    }
}
