use crate::config::FoodPolicy;
use crate::grid::{GridCell, GridLayout};
use crate::snake::Snake;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Places food on the board. The generator is seeded once, so a run can be
/// replayed by feeding the logged seed back through the config.
pub struct FoodSpawner {
    rng: SmallRng,
    policy: FoodPolicy,
    rows: i32,
    columns: i32,
}

impl FoodSpawner {
    pub fn new(layout: &GridLayout, policy: FoodPolicy, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        log::info!("food spawner seeded with {seed} ({policy:?})");
        Self {
            rng: SmallRng::seed_from_u64(seed),
            policy,
            rows: layout.rows(),
            columns: layout.columns(),
        }
    }

    pub fn spawn(&mut self, snake: &Snake) -> GridCell {
        let cell = match self.policy {
            FoodPolicy::Uniform => self.any_cell(),
            FoodPolicy::AvoidSnake => self.free_cell(snake).unwrap_or_else(|| self.any_cell()),
        };
        log::debug!("food spawned at {cell:?}");
        cell
    }

    fn any_cell(&mut self) -> GridCell {
        let row = self.rng.gen_range(0..self.rows);
        let col = self.rng.gen_range(0..self.columns);
        GridCell::new(row, col)
    }

    fn free_cell(&mut self, snake: &Snake) -> Option<GridCell> {
        let taken: HashSet<GridCell> = snake
            .iter()
            .filter(|c| (0..self.rows).contains(&c.row) && (0..self.columns).contains(&c.col))
            .collect();
        let free = (self.rows * self.columns) as usize - taken.len();
        if free == 0 {
            return None;
        }
        let pick = self.rng.gen_range(0..free);
        (0..self.rows)
            .flat_map(|row| (0..self.columns).map(move |col| GridCell::new(row, col)))
            .filter(|cell| !taken.contains(cell))
            .nth(pick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> GridLayout {
        GridLayout::new(150, 90, 30).unwrap()
    }

    #[test]
    fn uniform_food_stays_on_the_board() {
        let layout = layout();
        let mut spawner = FoodSpawner::new(&layout, FoodPolicy::Uniform, Some(7));
        let snake = Snake::new(GridCell::new(0, 0));
        for _ in 0..500 {
            assert!(layout.contains(spawner.spawn(&snake)));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let layout = layout();
        let snake = Snake::default();
        let mut a = FoodSpawner::new(&layout, FoodPolicy::Uniform, Some(42));
        let mut b = FoodSpawner::new(&layout, FoodPolicy::Uniform, Some(42));
        for _ in 0..20 {
            assert_eq!(a.spawn(&snake), b.spawn(&snake));
        }
    }

    #[test]
    fn avoiding_food_never_lands_on_the_snake() {
        let layout = layout();
        // everything but (2, 4) is snake
        let snake = Snake::from_cells(
            (0..3)
                .flat_map(|row| (0..5).map(move |col| GridCell::new(row, col)))
                .filter(|&c| c != GridCell::new(2, 4)),
        );
        let mut spawner = FoodSpawner::new(&layout, FoodPolicy::AvoidSnake, Some(3));
        for _ in 0..50 {
            assert_eq!(spawner.spawn(&snake), GridCell::new(2, 4));
        }
    }

    #[test]
    fn long_snake_on_a_large_board_is_avoided() {
        let layout = GridLayout::new(1920, 1080, 10).unwrap();
        let snake = Snake::from_cells(
            (0..100).flat_map(|row| (0..192).map(move |col| GridCell::new(row, col))),
        );
        let mut spawner = FoodSpawner::new(&layout, FoodPolicy::AvoidSnake, Some(11));
        for _ in 0..100 {
            let food = spawner.spawn(&snake);
            assert!(food.row >= 100 && layout.contains(food), "{food:?}");
        }
    }

    #[test]
    fn full_board_falls_back_to_any_cell() {
        let layout = layout();
        let snake = Snake::from_cells(
            (0..3).flat_map(|row| (0..5).map(move |col| GridCell::new(row, col))),
        );
        let mut spawner = FoodSpawner::new(&layout, FoodPolicy::AvoidSnake, Some(3));
        assert!(layout.contains(spawner.spawn(&snake)));
    }
}
