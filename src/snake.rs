use crate::grid::GridCell;
use std::collections::VecDeque;

/// Snake body, tail at the front and head at the back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snake {
    cells: VecDeque<GridCell>,
}

impl Snake {
    pub fn new(start: GridCell) -> Self {
        let mut cells = VecDeque::new();
        cells.push_back(start);
        Self { cells }
    }

    /// Builds a snake from cells listed tail first.
    pub fn from_cells(cells: impl IntoIterator<Item = GridCell>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    pub fn push_head(&mut self, cell: GridCell) {
        self.cells.push_back(cell);
    }

    /// Removes the oldest cell. No-op on an empty snake.
    pub fn pop_tail(&mut self) -> Option<GridCell> {
        self.cells.pop_front()
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        self.cells.iter().any(|&c| c == cell)
    }

    pub fn head(&self) -> Option<GridCell> {
        self.cells.back().copied()
    }

    pub fn tail(&self) -> Option<GridCell> {
        self.cells.front().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells from tail to head.
    pub fn iter(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.cells.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(snake: &Snake) -> Vec<(i32, i32)> {
        snake.iter().map(|c| (c.row, c.col)).collect()
    }

    #[test]
    fn head_is_latest_push() {
        let mut snake = Snake::new(GridCell::new(0, 0));
        snake.push_head(GridCell::new(0, 1));
        snake.push_head(GridCell::new(1, 1));
        assert_eq!(snake.head(), Some(GridCell::new(1, 1)));
        assert_eq!(snake.tail(), Some(GridCell::new(0, 0)));
        assert_eq!(cells(&snake), vec![(0, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn pop_tail_removes_oldest() {
        let mut snake = Snake::from_cells([GridCell::new(0, 0), GridCell::new(0, 1)]);
        assert_eq!(snake.pop_tail(), Some(GridCell::new(0, 0)));
        assert_eq!(cells(&snake), vec![(0, 1)]);
    }

    #[test]
    fn single_cell_pop_leaves_empty_snake() {
        let mut snake = Snake::new(GridCell::new(3, 4));
        assert_eq!(snake.pop_tail(), Some(GridCell::new(3, 4)));
        assert!(snake.is_empty());
        assert_eq!(snake.head(), None);
    }

    #[test]
    fn push_then_pop_on_empty_snake_is_empty() {
        let mut snake = Snake::default();
        snake.push_head(GridCell::new(2, 2));
        snake.pop_tail();
        assert!(snake.is_empty());
        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.len(), 0);
    }

    #[test]
    fn contains_scans_whole_body() {
        let snake = Snake::from_cells([
            GridCell::new(0, 0),
            GridCell::new(0, 1),
            GridCell::new(1, 1),
        ]);
        assert!(snake.contains(GridCell::new(0, 0)));
        assert!(snake.contains(GridCell::new(1, 1)));
        assert!(!snake.contains(GridCell::new(1, 0)));
    }
}
