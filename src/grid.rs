use crate::error::{Result, SetupError};

/// One board cell, addressed by row and column. Cells off the board are
/// representable: the head leaves the grid on the move that loses the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub row: i32,
    pub col: i32,
}

impl GridCell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }
}

/// A position in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Board geometry, computed once from the screen size. The grid is centred so
/// that no partial cells show at the edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    screen_width: u32,
    screen_height: u32,
    cell_size: u32,
    x_offset: u32,
    y_offset: u32,
    columns: i32,
    rows: i32,
}

impl GridLayout {
    pub fn new(screen_width: u32, screen_height: u32, cell_size: u32) -> Result<Self> {
        if cell_size == 0 {
            return Err(SetupError::InvalidConfig("cell_size must be positive"));
        }
        let columns = screen_width / cell_size;
        let rows = screen_height / cell_size;
        if columns == 0 || rows == 0 {
            return Err(SetupError::ScreenTooSmall {
                width: screen_width,
                height: screen_height,
                cell_size,
            });
        }

        Ok(Self {
            screen_width,
            screen_height,
            cell_size,
            x_offset: (screen_width - columns * cell_size) / 2,
            y_offset: (screen_height - rows * cell_size) / 2,
            columns: columns as i32,
            rows: rows as i32,
        })
    }

    pub fn screen_width(&self) -> u32 {
        self.screen_width
    }

    pub fn screen_height(&self) -> u32 {
        self.screen_height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn x_offset(&self) -> u32 {
        self.x_offset
    }

    pub fn y_offset(&self) -> u32 {
        self.y_offset
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        (0..self.rows).contains(&cell.row) && (0..self.columns).contains(&cell.col)
    }

    /// Top-left pixel of `cell`.
    pub fn grid_to_pixel(&self, cell: GridCell) -> Point {
        let size = self.cell_size as i32;
        Point::new(
            cell.col * size + self.x_offset as i32,
            cell.row * size + self.y_offset as i32,
        )
    }

    /// Cell containing pixel `p`.
    pub fn pixel_to_grid(&self, p: Point) -> GridCell {
        let size = self.cell_size as i32;
        GridCell::new(
            (p.y - self.y_offset as i32).div_euclid(size),
            (p.x - self.x_offset as i32).div_euclid(size),
        )
    }
}
