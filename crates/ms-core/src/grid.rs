//! Grid coordinate types and the maze layout agents move through.
//!
//! The grid is stored row-major with `(0, 0)` in the top-left corner, `x`
//! growing east and `y` growing south, the same orientation the heat-map
//! renderer draws rows and columns in.

use std::fmt;

use crate::{MsError, MsResult};

// ── Cell ──────────────────────────────────────────────────────────────────────

/// One grid position.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in direction `dir`, or `None` when that would
    /// leave the non-negative quadrant.  Upper bounds are the grid's concern.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Cell> {
        let (dx, dy) = dir.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Cell { x, y })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Compass heading on the grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four headings in clockwise order starting at north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    #[inline]
    fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East  => (1, 0),
            Direction::South => (0, 1),
            Direction::West  => (-1, 0),
        }
    }

    #[inline]
    pub fn turn_right(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East  => Direction::South,
            Direction::South => Direction::West,
            Direction::West  => Direction::North,
        }
    }

    #[inline]
    pub fn turn_left(self) -> Direction {
        self.turn_right().turn_right().turn_right()
    }

    #[inline]
    pub fn reverse(self) -> Direction {
        self.turn_right().turn_right()
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// A rectangular maze of open cells and walls.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width:  u32,
    height: u32,
    /// `true` = wall.  Row-major, `width * height` entries.
    walls:  Vec<bool>,
}

impl Grid {
    /// A grid with no interior walls.
    pub fn open(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            walls: vec![false; width as usize * height as usize],
        }
    }

    /// Parse a text layout: `#` is a wall, any other character is open.
    ///
    /// Blank lines are skipped.  Every row must have the same width.
    ///
    /// ```text
    /// #####
    /// #...#
    /// #.#.#
    /// #...#
    /// #####
    /// ```
    pub fn parse(text: &str) -> MsResult<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .collect();

        let Some(first) = rows.first() else {
            return Err(MsError::Parse("grid has no rows".into()));
        };
        let width = first.chars().count();

        let mut walls = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != width {
                return Err(MsError::Parse(format!(
                    "grid row {y} has width {len}, expected {width}"
                )));
            }
            walls.extend(row.chars().map(|c| c == '#'));
        }

        let width = u32::try_from(width)
            .map_err(|_| MsError::Parse("grid is too wide".into()))?;
        let height = u32::try_from(rows.len())
            .map_err(|_| MsError::Parse("grid is too tall".into()))?;

        Ok(Self { width, height, walls })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells (walls included).
    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Row-major index of `cell`, or `None` when it lies outside the grid.
    #[inline]
    pub fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    /// `true` if `cell` is inside the grid and not a wall.
    #[inline]
    pub fn is_open(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| !self.walls[i])
    }

    /// The open neighbour of `cell` in direction `dir`, if any.
    #[inline]
    pub fn neighbour(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        cell.step(dir).filter(|&n| self.is_open(n))
    }

    /// All open neighbours of `cell`, in clockwise order starting at north.
    pub fn open_neighbours(&self, cell: Cell) -> impl Iterator<Item = (Direction, Cell)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.neighbour(cell, d).map(|n| (d, n)))
    }

    /// Error unless `cell` is an open cell of this grid.
    pub fn check_open(&self, cell: Cell) -> MsResult<()> {
        if !self.contains(cell) {
            return Err(MsError::OutOfBounds(cell));
        }
        if !self.is_open(cell) {
            return Err(MsError::Blocked(cell));
        }
        Ok(())
    }
}
