/// Moore offsets in row-major order, (0, 0) excluded
const MOORE: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Cell is a coordinate on the plane.
/// Whether a cell is alive is decided only by membership in a `LiveSet`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by (dx, dy); `None` past the i32 limits
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// The Moore neighborhood in row-major order, the cell itself excluded.
    /// No clamping and no wraparound: all 8 are yielded except for cells on
    /// the i32 limits, whose missing neighbours do not exist on the plane.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        MOORE
            .into_iter()
            .filter_map(move |(dx, dy)| self.checked_offset(dx, dy))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Free-function form of [`Cell::neighbors`]
pub fn neighbors(cell: Cell) -> impl Iterator<Item = Cell> {
    cell.neighbors()
}
