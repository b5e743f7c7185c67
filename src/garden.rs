use std::path::Path;

use crate::error::{Error, Result};
use crate::grid::{Coord, Grid};

pub const ROCK: char = '#';
pub const START: char = 'S';

/// One tile of the garden: blocked cells plus the start position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Garden {
    /// `true` where the tile holds a rock.
    pub rocks: Grid<bool>,
    pub start: Coord,
}

impl Garden {
    /// Parse a garden map. Every character other than `#` is walkable,
    /// including the start marker.
    pub fn parse(input: &str) -> Result<Self> {
        let lines: Vec<&str> = input
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .collect();
        // Blank lines around the map are dropped; blank lines inside it are not.
        let blank = |l: &&str| l.trim().is_empty();
        let begin = lines.iter().position(|l| !blank(l)).unwrap_or(lines.len());
        let end = lines.iter().rposition(|l| !blank(l)).map_or(begin, |i| i + 1);
        let lines = &lines[begin..end];

        let w = match lines.first() {
            Some(first) if !first.is_empty() => first.chars().count(),
            _ => return Err(Error::EmptyGrid),
        };
        let h = lines.len();

        let mut rocks = Grid::<bool>::new(w, h);
        let mut start = None;

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != w {
                return Err(Error::RaggedRow {
                    row,
                    expected: w,
                    found,
                });
            }
            for (col, c) in line.chars().enumerate() {
                match c {
                    ROCK => rocks.set(row, col, true),
                    START => {
                        if start.is_some() {
                            return Err(Error::MultipleStarts { row, col });
                        }
                        start = Some((row as i64, col as i64));
                    }
                    _ => {}
                }
            }
        }

        let start = start.ok_or(Error::MissingStart)?;
        Ok(Self { rocks, start })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let input = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&input)
    }

    #[inline]
    pub fn w(&self) -> usize {
        self.rocks.w
    }

    #[inline]
    pub fn h(&self) -> usize {
        self.rocks.h
    }

    /// Whether `pos` on the infinite tiling is a garden plot.
    #[inline]
    pub fn is_open(&self, pos: Coord) -> bool {
        !self.rocks.at_wrapped(pos)
    }

    pub fn rock_count(&self) -> usize {
        self.rocks.data.iter().filter(|&&r| r).count()
    }
}
