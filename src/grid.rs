/// Row-major flat grid holding one tile of the plane.
/// The plane is tiled periodically in both axes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    pub data: Vec<T>,
    pub w: usize,
    pub h: usize,
}

/// Signed (row, col) position on the infinite tiling.
pub type Coord = (i64, i64);

impl<T: Copy + Default> Grid<T> {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            data: vec![T::default(); w * h],
            w,
            h,
        }
    }

    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.h && col < self.w);
        row * self.w + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[self.idx(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, v: T) {
        let i = self.idx(row, col);
        self.data[i] = v;
    }

    /// Cell of the base tile that `pos` lands on.
    #[inline]
    pub fn at_wrapped(&self, pos: Coord) -> T {
        let (row, col) = wrap_coord(pos, self.w, self.h);
        self.get(row, col)
    }
}

/// Reduce a plane position into the base tile.
///
/// `rem_euclid` keeps the result non-negative for negative coordinates,
/// where `%` would yield a negative remainder.
#[inline]
pub fn wrap_coord((row, col): Coord, w: usize, h: usize) -> (usize, usize) {
    (
        row.rem_euclid(h as i64) as usize,
        col.rem_euclid(w as i64) as usize,
    )
}

/// 4-connected neighbors on the infinite plane: down, right, up, left.
#[inline]
pub fn neighbors4((row, col): Coord) -> [Coord; 4] {
    [(row + 1, col), (row, col + 1), (row - 1, col), (row, col - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_handles_negative_coordinates() {
        assert_eq!(wrap_coord((-1, -1), 11, 11), (10, 10));
        assert_eq!(wrap_coord((-11, 22), 11, 11), (0, 0));
        assert_eq!(wrap_coord((-12, 13), 11, 11), (10, 2));
        assert_eq!(wrap_coord((3, -7), 5, 4), (3, 3));
    }

    #[test]
    fn wrapped_lookup_repeats_the_tile() {
        let mut g = Grid::<bool>::new(3, 2);
        g.set(1, 2, true);
        assert!(g.at_wrapped((1, 2)));
        assert!(g.at_wrapped((-1, -1)));
        assert!(g.at_wrapped((5, 8)));
        assert!(!g.at_wrapped((0, 2)));
    }

    #[test]
    fn neighbors_are_orthogonal() {
        let n = neighbors4((0, 0));
        assert_eq!(n, [(1, 0), (0, 1), (-1, 0), (0, -1)]);
        assert!(n.iter().all(|&(r, c)| r.abs() + c.abs() == 1));
    }
}
