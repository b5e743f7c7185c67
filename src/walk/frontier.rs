use rustc_hash::FxHashSet;

use crate::garden::Garden;
use crate::grid::{Coord, neighbors4};

/// Positions occupied after `step` lock-step moves on the infinite tiling.
///
/// Every move goes to an orthogonal neighbor; there is no waiting in place,
/// so a cell is occupied at step `s` only if a neighbor was occupied at
/// `s - 1` and the cell itself is a plot.
#[derive(Clone, Debug)]
pub struct Frontier {
    cells: FxHashSet<Coord>,
    step: u64,
}

impl Frontier {
    pub fn new(start: Coord) -> Self {
        let mut cells = FxHashSet::default();
        cells.insert(start);
        Self { cells, step: 0 }
    }

    /// Replace the occupied set by its successor.
    pub fn advance(&mut self, garden: &Garden) {
        self.cells = expand(&self.cells, garden);
        self.step += 1;
    }

    #[inline]
    pub fn step(&self) -> u64 {
        self.step
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Coord) -> bool {
        self.cells.contains(&pos)
    }

    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Inclusive (min_row, min_col, max_row, max_col), `None` when empty.
    pub fn bounds(&self) -> Option<(i64, i64, i64, i64)> {
        self.cells.iter().fold(None, |acc, &(r, c)| match acc {
            None => Some((r, c, r, c)),
            Some((r0, c0, r1, c1)) => Some((r0.min(r), c0.min(c), r1.max(r), c1.max(c))),
        })
    }
}

/// One lock-step move: all open orthogonal neighbors of `cells`.
pub fn expand(cells: &FxHashSet<Coord>, garden: &Garden) -> FxHashSet<Coord> {
    let mut next =
        FxHashSet::with_capacity_and_hasher(cells.len() + cells.len() / 4 + 4, Default::default());
    for &pos in cells {
        for n in neighbors4(pos) {
            if garden.is_open(n) {
                next.insert(n);
            }
        }
    }
    next
}

/// Number of plots occupied after exactly `steps` moves from the start.
pub fn reachable_after(garden: &Garden, steps: u64) -> usize {
    let mut frontier = Frontier::new(garden.start);
    while frontier.step() < steps {
        frontier.advance(garden);
    }
    frontier.len()
}
