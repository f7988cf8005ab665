//! Tile layout loading and the wall/pickup pass over it.
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::core::geom::Rect;

/// The maze shipped with the game: 31 columns by 34 rows.
pub const DEFAULT_LAYOUT: &str = include_str!("default_layout.txt");

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
}

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,
    #[error("row {row}, column {col}: unknown tile code {code:?}")]
    UnknownTile { row: usize, col: usize, code: char },
    #[error("row {row} is {found} tiles wide, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
    #[error("cannot read layout file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Row-major tile grid. Dimensions never change after parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
}

/// Where a pickup starts, keyed by the open tile that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PickupSeed {
    pub row: usize,
    pub col: usize,
    pub rect: Rect,
}

impl Layout {
    /// Parses `1`/`0` rows. Spaces and commas between codes are ignored,
    /// as are blank lines.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let mut tiles = Vec::new();
        let mut width = None;
        let mut height = 0;

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row = height;
            let mut found = 0;
            for code in line.chars().filter(|c| !c.is_whitespace() && *c != ',') {
                let tile = match code {
                    '1' => Tile::Wall,
                    '0' => Tile::Open,
                    _ => return Err(LayoutError::UnknownTile { row, col: found, code }),
                };
                tiles.push(tile);
                found += 1;
            }
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(LayoutError::Ragged { row, expected, found });
                }
                Some(_) => {}
            }
            height += 1;
        }

        match width {
            Some(width) if width > 0 => Ok(Self { tiles, width, height }),
            _ => Err(LayoutError::Empty),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn builtin() -> Result<Self, LayoutError> {
        Self::parse(DEFAULT_LAYOUT)
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }

    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.tiles[row * self.width + col])
    }

    fn cells(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &t)| (i / self.width, i % self.width, t))
    }

    /// One `tile x tile` rectangle per wall, in row-major order.
    pub fn obstacles(&self, tile: i32) -> Vec<Rect> {
        self.cells()
            .filter(|&(_, _, t)| t == Tile::Wall)
            .map(|(row, col, _)| Rect::new(col as i32 * tile, row as i32 * tile, tile, tile))
            .collect()
    }

    /// One `size x size` seed per open tile, centred in it, in row-major order.
    pub fn pickup_seeds(&self, tile: i32, size: i32) -> Vec<PickupSeed> {
        let inset = tile / 2 - size / 2;
        self.cells()
            .filter(|&(_, _, t)| t == Tile::Open)
            .map(|(row, col, _)| PickupSeed {
                row,
                col,
                rect: Rect::new(col as i32 * tile + inset, row as i32 * tile + inset, size, size),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_layout_dimensions() {
        let layout = Layout::builtin().unwrap();
        assert_eq!(layout.width(), 31);
        assert_eq!(layout.height(), 34);
        // tunnel row is open at both ends
        assert_eq!(layout.tile(14, 0), Some(Tile::Open));
        assert_eq!(layout.tile(14, 30), Some(Tile::Open));
        assert_eq!(layout.tile(0, 0), Some(Tile::Wall));
        assert_eq!(layout.tile(34, 0), None);
    }

    #[test]
    fn every_wall_gets_one_obstacle_and_no_seed() {
        let layout = Layout::builtin().unwrap();
        let obstacles = layout.obstacles(27);
        let seeds = layout.pickup_seeds(27, 10);
        assert_eq!(obstacles.len() + seeds.len(), 31 * 34);

        for row in 0..layout.height() {
            for col in 0..layout.width() {
                let at = Rect::new(col as i32 * 27, row as i32 * 27, 27, 27);
                let has_obstacle = obstacles.contains(&at);
                let has_seed = seeds.iter().any(|s| s.row == row && s.col == col);
                match layout.tile(row, col) {
                    Some(Tile::Wall) => assert!(has_obstacle && !has_seed, "wall at {row},{col}"),
                    Some(Tile::Open) => assert!(!has_obstacle && has_seed, "open at {row},{col}"),
                    None => unreachable!(),
                }
            }
        }
    }

    #[test]
    fn seeds_sit_centred_in_their_tile() {
        let layout = Layout::parse("101").unwrap();
        let seeds = layout.pickup_seeds(27, 10);
        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].rect, Rect::new(27 + 8, 8, 10, 10));
        let tile = Rect::new(27, 0, 27, 27);
        assert_eq!(seeds[0].rect.center(), tile.center());
    }

    #[test]
    fn accepts_comma_separated_rows() {
        let layout = Layout::parse("\n1, 0, 1\n  1,1,1  \n\n").unwrap();
        assert_eq!((layout.width(), layout.height()), (3, 2));
        assert_eq!(layout.tile(0, 1), Some(Tile::Open));
    }

    #[test]
    fn rejects_malformed_layouts() {
        assert!(matches!(Layout::parse(" \n "), Err(LayoutError::Empty)));
        assert!(matches!(
            Layout::parse("101\n1x1"),
            Err(LayoutError::UnknownTile { row: 1, col: 1, code: 'x' })
        ));
        assert!(matches!(
            Layout::parse("101\n10"),
            Err(LayoutError::Ragged { row: 1, expected: 3, found: 2 })
        ));
    }
}
