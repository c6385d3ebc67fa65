//! Keyboard cursor over the tile grid.
//!
//! The grid is `columns` wide and filled row by row; the last row may be short.
//! Moves that would leave the grid (or land past the last tile) are ignored.

use crate::types::GameAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardCursor {
    index: usize,
}

impl BoardCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tile index under the cursor (row-major).
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn col(&self, columns: usize) -> usize {
        if columns == 0 {
            0
        } else {
            self.index % columns
        }
    }

    pub fn row(&self, columns: usize) -> usize {
        if columns == 0 {
            0
        } else {
            self.index / columns
        }
    }

    /// Jump to a tile index, e.g. after a mouse click.
    pub fn set_index(&mut self, index: usize, tile_count: usize) {
        if index < tile_count {
            self.index = index;
        }
    }

    /// Pull the cursor back inside a (possibly smaller) new board.
    pub fn clamp(&mut self, tile_count: usize) {
        if self.index >= tile_count {
            self.index = tile_count.saturating_sub(1);
        }
    }

    /// Apply a cursor action. Returns true when the cursor moved; other actions
    /// are ignored.
    pub fn apply(&mut self, action: GameAction, columns: usize, tile_count: usize) -> bool {
        if columns == 0 || tile_count == 0 {
            return false;
        }
        let col = self.col(columns);
        let target = match action {
            GameAction::CursorLeft if col > 0 => Some(self.index - 1),
            GameAction::CursorRight if col + 1 < columns => Some(self.index + 1),
            GameAction::CursorUp => self.index.checked_sub(columns),
            GameAction::CursorDown => Some(self.index + columns),
            _ => None,
        };
        match target {
            Some(next) if next < tile_count => {
                self.index = next;
                true
            }
            _ => false,
        }
    }
}
