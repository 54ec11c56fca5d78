use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::domain::{Cell, LiveSet};

pub const ALIVE_CHAR: char = '#';
pub const DEAD_CHAR: char = '.';

/// Rectangle [0, width) x [0, height) shown on screen.
/// Purely a window: it never bounds the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width as i64).contains(&(cell.x as i64))
            && (0..self.height as i64).contains(&(cell.y as i64))
    }

    /// Live cells that fall inside the window
    pub fn visible_count(&self, live: &LiveSet) -> usize {
        live.iter().filter(|&c| self.contains(c)).count()
    }
}

/// Draw the window as `height` newline-joined rows of `width` characters.
/// Live cells outside the window are not shown.
pub fn render_text(viewport: Viewport, live: &LiveSet) -> String {
    let mut out = String::with_capacity(((viewport.width as usize) + 1) * viewport.height as usize);
    for y in 0..viewport.height {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..viewport.width {
            let cell = Cell::new(x as i32, y as i32);
            out.push(if live.contains(cell) { ALIVE_CHAR } else { DEAD_CHAR });
        }
    }
    out
}

pub fn status_line(generation: u64, population: usize) -> String {
    format!("Generation: {} | Population: {}", generation, population)
}

/// Write one frame: optional screen clear, then the status line and grid
pub fn write_frame<W: Write>(
    out: &mut W,
    viewport: Viewport,
    live: &LiveSet,
    generation: u64,
    clear: bool,
) -> io::Result<()> {
    if clear {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    writeln!(out, "{}", status_line(generation, live.len()))?;
    writeln!(out, "{}", render_text(viewport, live))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{blinker, glider, gosper_glider_gun, step_n};

    #[test]
    fn test_render_sizing_ignores_outside_cells() {
        let live: LiveSet = [(-1, -1), (2, 1), (5, 0), (0, 3), (100, 100)].into_iter().collect();
        let text = render_text(Viewport::new(5, 3), &live);
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() == 5));
        assert_eq!(lines, [".....", "..#..", "....."]);
    }

    #[test]
    fn test_render_glider() {
        let text = render_text(Viewport::new(4, 4), &glider(0, 0));
        assert_eq!(text, ".#..\n..#.\n###.\n....");
    }

    #[test]
    fn test_render_empty_and_degenerate() {
        assert_eq!(render_text(Viewport::new(3, 2), &LiveSet::new()), "...\n...");
        assert_eq!(render_text(Viewport::new(4, 0), &blinker(0, 0)), "");
        assert_eq!(render_text(Viewport::new(0, 3), &blinker(0, 0)), "\n\n");
    }

    #[test]
    fn test_render_does_not_touch_live_set() {
        let live = step_n(&gosper_glider_gun(5, 10), 50);
        let before = live.clone();
        let _ = render_text(Viewport::new(10, 10), &live);
        assert_eq!(live, before);
    }

    #[test]
    fn test_visible_count() {
        let live: LiveSet = [(0, 0), (4, 2), (5, 2), (-1, 0)].into_iter().collect();
        assert_eq!(Viewport::new(5, 3).visible_count(&live), 2);
    }

    #[test]
    fn test_status_line() {
        assert_eq!(status_line(12, 5), "Generation: 12 | Population: 5");
    }

    #[test]
    fn test_write_frame_without_clear() {
        let mut buf = Vec::new();
        write_frame(&mut buf, Viewport::new(3, 1), &blinker(0, 0), 0, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Generation: 0 | Population: 3\n###\n");
    }

    #[test]
    fn test_write_frame_with_clear_emits_escape() {
        let mut buf = Vec::new();
        write_frame(&mut buf, Viewport::new(1, 1), &LiveSet::new(), 3, true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with('\u{1b}'));
        assert!(text.ends_with("Generation: 3 | Population: 0\n.\n"));
    }
}
