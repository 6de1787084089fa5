use std::{fmt, io, iter, ops::Not};

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{error::BoardError, pos::Position, print::LineWriter, rule};

/// Rows of cells, the outer index being `y`.
pub type Grid = Vec<Vec<bool>>;

/// Offsets of the 8 neighbors, in reading order around the center tile.
const NEIGHBOR_RELATIVE_POSITIONS: [[isize; 2]; 8] = [
    [-1, -1],
    [0, -1],
    [1, -1],
    [-1, 0],
    [1, 0],
    [-1, 1],
    [0, 1],
    [1, 1],
];

/// A fixed-size board whose edges wrap around, so every tile has exactly 8 neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    tiles: Vec<TileState>,
}

impl Board {
    /// An all-dead board.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        check_dimensions(width, height)?;

        let tiles = vec![TileState::default(); width * height];
        debug!(width, height, "created empty board");

        Ok(Self::with_tiles(width, height, tiles))
    }

    /// A board starting from `seed`, which must have `height` rows of `width` cells.
    pub fn with_seed(width: usize, height: usize, seed: Grid) -> Result<Self, BoardError> {
        check_dimensions(width, height)?;

        if seed.len() != height {
            return Err(BoardError::SeedRowCount {
                rows: seed.len(),
                height,
            });
        }

        let mut tiles = Vec::with_capacity(width * height);
        for (row_index, row) in seed.into_iter().enumerate() {
            if row.len() != width {
                return Err(BoardError::SeedRowLength {
                    row: row_index,
                    len: row.len(),
                    width,
                });
            }

            tiles.extend(row.into_iter().map(TileState::from));
        }

        let board = Self::with_tiles(width, height, tiles);
        debug!(width, height, population = board.population(), "seeded board");

        Ok(board)
    }

    /// A board taking its dimensions from the seed itself.
    pub fn from_grid(seed: Grid) -> Result<Self, BoardError> {
        let height = seed.len();
        let width = seed.first().map_or(0, Vec::len);
        Self::with_seed(width, height, seed)
    }

    fn with_tiles(width: usize, height: usize, tiles: Vec<TileState>) -> Self {
        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn tile_mut<P>(&mut self, pos: P) -> Option<&mut TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get_mut(index)
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[TileState]> {
        self.tiles.chunks(self.width)
    }

    /// A copy of the board as nested rows.
    pub fn grid(&self) -> Grid {
        tiles_to_grid(&self.tiles, self.width)
    }

    /// Row-major snapshot of every cell.
    pub fn cells(&self) -> Vec<bool> {
        self.tiles.iter().map(|tile| tile.is_alive()).collect()
    }

    pub fn population(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_alive()).count()
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        Ok(self.checked_tile(x, y)?.is_alive())
    }

    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        self.cell_at(x, y)
    }

    pub fn is_dead(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        self.is_alive(x, y).map(bool::not)
    }

    pub fn mark_alive(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        *self.checked_tile_mut(x, y)? = TileState::Alive;
        Ok(())
    }

    pub fn mark_dead(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        *self.checked_tile_mut(x, y)? = TileState::Dead;
        Ok(())
    }

    /// Flips the cell, returning whether it is alive afterwards.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool, BoardError> {
        let tile = self.checked_tile_mut(x, y)?;
        *tile = !*tile;
        Ok(tile.is_alive())
    }

    /// The 8 neighbors of a cell, left to right and top to bottom:
    ///
    /// ```text
    /// 0 1 2
    /// 3 c 4
    /// 5 6 7
    /// ```
    pub fn neighbors(&self, x: usize, y: usize) -> Result<[bool; 8], BoardError> {
        self.checked_tile(x, y)?;
        Ok(self.tile_neighbors(Position { x, y }).map(TileState::is_alive))
    }

    pub fn next_cell_state(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        let tile = *self.checked_tile(x, y)?;
        Ok(self.tick_tile(Position { x, y }, tile).is_alive())
    }

    /// The board one generation ahead. Leaves `self` untouched.
    pub fn next_state(&self) -> Grid {
        tiles_to_grid(&self.next_tiles(), self.width)
    }

    pub fn advance(&mut self) {
        let next_tiles = self.next_tiles();
        self.tiles = next_tiles;

        trace!(population = self.population(), "advanced board");
    }

    pub fn step(&mut self, times: usize) {
        for _ in 0..times {
            self.advance();
        }
    }

    /// Writes every row as `0`/`1` tokens, then an empty separator line.
    ///
    /// The whole board is rendered before the first line is handed to `out`. Only a writer
    /// refusing the first line, with nothing written yet, counts as an invalid argument.
    pub fn print<L>(&self, out: &mut L) -> Result<(), BoardError>
    where
        L: LineWriter + ?Sized,
    {
        let lines = self.rows().map(render_row).collect_vec();

        let all_lines = lines.iter().map(String::as_str).chain(iter::once(""));
        for (line_index, line) in all_lines.enumerate() {
            out.write_line(line).map_err(|e| match e.kind() {
                io::ErrorKind::InvalidInput if line_index == 0 => {
                    BoardError::InvalidArgument(e.to_string())
                }
                _ => BoardError::Write(e),
            })?;
        }

        Ok(())
    }

    fn next_tiles(&self) -> Vec<TileState> {
        self.enumerate_tiles()
            .map(|(tile_pos, tile)| self.tick_tile(tile_pos, *tile))
            .collect()
    }

    fn tick_tile(&self, tile_pos: Position, tile: TileState) -> TileState {
        let alive_neighbor_count = self
            .tile_neighbors(tile_pos)
            .into_iter()
            .filter(|neighbor| neighbor.is_alive())
            .count();

        rule::next_tile_state(tile, alive_neighbor_count)
    }

    /// `tile_pos` must be on the board; wrapped offsets then always are too.
    fn tile_neighbors(&self, tile_pos: Position) -> [TileState; 8] {
        NEIGHBOR_RELATIVE_POSITIONS.map(|rel_pos| {
            let Position { x, y } = tile_pos.offset_wrapping(rel_pos, self.width, self.height);
            self.tiles[x + y * self.width]
        })
    }

    fn checked_tile(&self, x: usize, y: usize) -> Result<&TileState, BoardError> {
        self.tile([x, y]).ok_or(self.out_of_range(x, y))
    }

    fn checked_tile_mut(&mut self, x: usize, y: usize) -> Result<&mut TileState, BoardError> {
        let out_of_range = self.out_of_range(x, y);
        self.tile_mut([x, y]).ok_or(out_of_range)
    }

    fn out_of_range(&self, x: usize, y: usize) -> BoardError {
        BoardError::IndexOutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();

        if x >= self.width {
            return None;
        }

        if y >= self.height {
            return None;
        }

        Some(x + (y * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let y = index / self.width;
        let x = index % self.width;
        Position { x, y }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", render_row(row))?;
        }

        Ok(())
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), BoardError> {
    if width == 0 || height == 0 {
        return Err(BoardError::InvalidDimensions { width, height });
    }

    Ok(())
}

fn tiles_to_grid(tiles: &[TileState], width: usize) -> Grid {
    tiles
        .chunks(width)
        .map(|row| row.iter().map(|tile| tile.is_alive()).collect())
        .collect()
}

fn render_row(row: &[TileState]) -> String {
    row.iter()
        .map(|tile| if tile.is_alive() { "1" } else { "0" })
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    pub fn is_alive(self) -> bool {
        self == TileState::Alive
    }
}

impl From<bool> for TileState {
    fn from(alive: bool) -> Self {
        if alive {
            TileState::Alive
        } else {
            TileState::Dead
        }
    }
}

impl From<TileState> for bool {
    fn from(tile: TileState) -> Self {
        tile.is_alive()
    }
}

impl Not for TileState {
    type Output = TileState;

    fn not(self) -> Self::Output {
        match self {
            TileState::Alive => TileState::Dead,
            TileState::Dead => TileState::Alive,
        }
    }
}
