use std::collections::HashSet;
use std::collections::hash_set;

use rand::Rng;

use super::Cell;

/// Fraction of cells alive in a random soup
pub const DEFAULT_DENSITY: f64 = 0.3;

/// LiveSet is a sparse snapshot of one generation.
/// A cell is alive exactly when it is a member; the plane has no size.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiveSet {
    cells: HashSet<Cell>,
}

impl LiveSet {
    /// Create an empty set (every cell dead)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Number of live cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Union of two sets; overlapping cells appear once
    pub fn union(&self, other: &LiveSet) -> LiveSet {
        self.cells.union(&other.cells).copied().collect()
    }

    /// Copy of the set shifted by (dx, dy).
    /// Cells pushed past the i32 limits leave the plane.
    pub fn translate(&self, dx: i32, dy: i32) -> LiveSet {
        self.iter().filter_map(|c| c.checked_offset(dx, dy)).collect()
    }

    /// Number of the cell's 8 neighbours that are alive, in [0, 8]
    pub fn count_live_neighbors(&self, cell: Cell) -> u8 {
        cell.neighbors()
            .filter(|n| self.cells.contains(n))
            .count() as u8
    }

    /// Live cells plus all their neighbours.
    /// Cells outside this set are dead and have no live neighbour.
    pub fn candidates(&self) -> HashSet<Cell> {
        let mut out = HashSet::with_capacity(self.cells.len() * 9);
        for &cell in &self.cells {
            out.insert(cell);
            out.extend(cell.neighbors());
        }
        out
    }

    /// (min corner, max corner) of the live cells, inclusive
    pub fn bounding_box(&self) -> Option<(Cell, Cell)> {
        let mut cells = self.iter();
        let first = cells.next()?;
        Some(cells.fold((first, first), |(lo, hi), c| {
            (
                Cell::new(lo.x.min(c.x), lo.y.min(c.y)),
                Cell::new(hi.x.max(c.x), hi.y.max(c.y)),
            )
        }))
    }

    /// Random soup over [0, width) x [0, height).
    /// `density` is clamped to [0, 1].
    pub fn random<R: Rng>(width: u32, height: u32, density: f64, rng: &mut R) -> Self {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        (0..height as i32)
            .flat_map(|y| (0..width as i32).map(move |x| Cell::new(x, y)))
            .filter(|_| rng.random_bool(density))
            .collect()
    }
}

/// Free-function form of [`LiveSet::count_live_neighbors`]
pub fn count_live_neighbors(live: &LiveSet, cell: Cell) -> u8 {
    live.count_live_neighbors(cell)
}

impl FromIterator<Cell> for LiveSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}

impl FromIterator<(i32, i32)> for LiveSet {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        iter.into_iter().map(Cell::from).collect()
    }
}

impl Extend<Cell> for LiveSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl IntoIterator for LiveSet {
    type Item = Cell;
    type IntoIter = hash_set::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a LiveSet {
    type Item = Cell;
    type IntoIter = std::iter::Copied<hash_set::Iter<'a, Cell>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter().copied()
    }
}
