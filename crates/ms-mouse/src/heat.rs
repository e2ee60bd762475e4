//! Dense per-cell visit counts.

use ms_core::{Cell, Grid};

/// One visited cell and how many ticks a mouse spent on it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct HeatRecord {
    pub cell:   Cell,
    pub visits: u32,
}

/// Row-major visit counts over a grid, the shape a heat-map renderer draws
/// as `height` rows of `width` columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeatMap {
    width:  u32,
    height: u32,
    visits: Vec<u32>,
}

impl HeatMap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            visits: vec![0; width as usize * height as usize],
        }
    }

    /// An all-zero map matching `grid`'s dimensions.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.width(), grid.height())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        (cell.x < self.width && cell.y < self.height)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    /// Count one visit to `cell`.  Out-of-bounds cells are ignored.
    pub fn visit(&mut self, cell: Cell) {
        if let Some(i) = self.index(cell) {
            self.visits[i] = self.visits[i].saturating_add(1);
        }
    }

    /// Visits recorded for `cell` (0 outside the map).
    pub fn get(&self, cell: Cell) -> u32 {
        self.index(cell).map_or(0, |i| self.visits[i])
    }

    /// Raw row-major counts.
    pub fn as_slice(&self) -> &[u32] {
        &self.visits
    }

    /// Every visited cell in row-major order.
    pub fn records(&self) -> impl Iterator<Item = HeatRecord> + '_ {
        let w = self.width as usize;
        self.visits
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v > 0)
            .map(move |(i, &visits)| HeatRecord {
                cell: Cell::new((i % w) as u32, (i / w) as u32),
                visits,
            })
    }

    /// Highest count on the map; the top of a colour scale.
    pub fn max_visits(&self) -> u32 {
        self.visits.iter().copied().max().unwrap_or(0)
    }

    pub fn total_visits(&self) -> u64 {
        self.visits.iter().map(|&v| v as u64).sum()
    }

    /// Add another map's counts into this one.
    ///
    /// Returns `false` and leaves `self` untouched when the dimensions differ.
    pub fn merge(&mut self, other: &HeatMap) -> bool {
        if self.width != other.width || self.height != other.height {
            return false;
        }
        for (a, &b) in self.visits.iter_mut().zip(&other.visits) {
            *a = a.saturating_add(b);
        }
        true
    }
}
