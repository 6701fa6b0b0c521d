use crate::food::FoodSpawner;
use crate::grid::{GridCell, GridLayout};
use crate::snake::Snake;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// (row, col) delta of one step.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    GameOver,
}

/// Player intent, decoded from input events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    TogglePause,
    Turn(Direction),
}

/// What a single tick did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing moved: paused, finished, or no direction chosen yet.
    Idle,
    Moved,
    Grew,
    Collision,
    OutOfBounds,
}

impl StepOutcome {
    pub fn needs_redraw(self) -> bool {
        !matches!(self, StepOutcome::Idle | StepOutcome::OutOfBounds)
    }
}

pub struct GameState {
    layout: GridLayout,
    snake: Snake,
    food: GridCell,
    direction: Option<Direction>,
    paused: bool,
    game_over: bool,
    food_captured: bool,
}

impl GameState {
    /// One-cell snake in the top-left corner, waiting for the first key.
    pub fn new(layout: GridLayout, spawner: &mut FoodSpawner) -> Self {
        let snake = Snake::new(GridCell::new(0, 0));
        let food = spawner.spawn(&snake);
        Self {
            layout,
            snake,
            food,
            direction: None,
            paused: true,
            game_over: false,
            food_captured: false,
        }
    }

    /// A running game with the given board.
    #[cfg(test)]
    pub(crate) fn with_parts(layout: GridLayout, snake: Snake, food: GridCell, direction: Direction) -> Self {
        Self {
            layout,
            snake,
            food,
            direction: Some(direction),
            paused: false,
            game_over: false,
            food_captured: false,
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> GridCell {
        self.food
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn food_captured(&self) -> bool {
        self.food_captured
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.paused {
            Phase::Paused
        } else {
            Phase::Running
        }
    }

    /// Turns unless `dir` is the reverse of the current heading.
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        if self.direction.is_some_and(|current| current.reverse() == dir) {
            return false;
        }
        if self.direction != Some(dir) {
            log::debug!("direction {:?} -> {dir:?}", self.direction);
        }
        self.direction = Some(dir);
        true
    }

    pub fn toggle_pause(&mut self) {
        if self.game_over {
            return;
        }
        self.paused = !self.paused;
        log::debug!("paused: {}", self.paused);
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Quit => {}
            Command::TogglePause => self.toggle_pause(),
            Command::Turn(dir) => {
                self.set_direction(dir);
                // any arrow resumes, even a rejected reverse
                if self.paused && !self.game_over {
                    self.paused = false;
                    log::debug!("paused: false");
                }
            }
        }
    }

    /// Advances one tick if the game is running.
    pub fn tick(&mut self, spawner: &mut FoodSpawner) -> StepOutcome {
        if self.phase() != Phase::Running {
            return StepOutcome::Idle;
        }
        self.step(spawner)
    }

    /// Moves the snake one cell. Food eaten on the previous step is replaced
    /// first. Collision is checked against the body before the tail moves, so
    /// the cell the tail is about to leave still counts as occupied.
    pub fn step(&mut self, spawner: &mut FoodSpawner) -> StepOutcome {
        if self.food_captured {
            self.food = spawner.spawn(&self.snake);
            self.food_captured = false;
        }

        let (Some(dir), Some(head)) = (self.direction, self.snake.head()) else {
            return StepOutcome::Idle;
        };
        let (d_row, d_col) = dir.offset();
        let next = head.offset(d_row, d_col);
        log::trace!("step {head:?} -> {next:?}");

        if next == self.food {
            self.food_captured = true;
        }

        if self.snake.contains(next) {
            self.finish("ran into itself");
            return StepOutcome::Collision;
        }

        self.snake.push_head(next);
        if !self.food_captured {
            self.snake.pop_tail();
        }

        if !self.layout.contains(next) {
            self.finish("left the board");
            return StepOutcome::OutOfBounds;
        }

        if self.food_captured {
            StepOutcome::Grew
        } else {
            StepOutcome::Moved
        }
    }

    fn finish(&mut self, reason: &str) {
        self.game_over = true;
        self.paused = true;
        log::info!("game over: snake {reason} at length {}", self.snake.len());
    }
}
