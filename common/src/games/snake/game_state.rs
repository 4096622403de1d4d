use crate::{log, log_debug};
use crate::games::SessionRng;
use super::settings::SnakeSettings;
use super::snake::Snake;
use super::snapshot::SnakeSnapshot;
use super::types::{Cell, Direction, EndReason, Phase, Rejection, TickOutcome};

/// Single-player snake on a square toroidal board.
///
/// Driven from outside: a clock calls [`tick`](Self::tick) while the phase is
/// [`Phase::Running`], input calls [`set_direction`](Self::set_direction),
/// and a renderer polls [`snapshot`](Self::snapshot) after each call.
/// Rejected commands never mutate state.
#[derive(Clone, Debug)]
pub struct SnakeGameState {
    settings: SnakeSettings,
    initial_snake: Snake,
    snake: Snake,
    food: Cell,
    direction: Direction,
    pending_direction: Option<Direction>,
    phase: Phase,
    end_reason: Option<EndReason>,
    tick: u64,
    rng: SessionRng,
}

impl SnakeGameState {
    pub fn new(settings: SnakeSettings, mut rng: SessionRng) -> Result<Self, String> {
        if settings.board_size == 0 {
            return Err("Board size must be greater than 0".to_string());
        }
        if let Some(cell) = settings
            .initial_snake
            .iter()
            .find(|c| c.x >= settings.board_size || c.y >= settings.board_size)
        {
            return Err(format!(
                "Initial snake cell ({}, {}) is outside the board",
                cell.x, cell.y
            ));
        }

        let initial_snake = Snake::new(&settings.initial_snake)?;
        let food = random_cell(settings.board_size, &mut rng);

        Ok(Self {
            direction: settings.initial_direction,
            settings,
            snake: initial_snake.clone(),
            initial_snake,
            food,
            pending_direction: None,
            phase: Phase::Idle,
            end_reason: None,
            tick: 0,
            rng,
        })
    }

    pub fn wrapping_inc(value: usize, max: usize) -> usize {
        if value + 1 >= max { 0 } else { value + 1 }
    }

    pub fn wrapping_dec(value: usize, max: usize) -> usize {
        if value == 0 { max - 1 } else { value - 1 }
    }

    pub fn next_head(head: Cell, direction: Direction, board_size: usize) -> Cell {
        match direction {
            Direction::Up => Cell::new(head.x, Self::wrapping_dec(head.y, board_size)),
            Direction::Down => Cell::new(head.x, Self::wrapping_inc(head.y, board_size)),
            Direction::Left => Cell::new(Self::wrapping_dec(head.x, board_size), head.y),
            Direction::Right => Cell::new(Self::wrapping_inc(head.x, board_size), head.y),
        }
    }

    /// Starting from `Ended` restores the initial board first.
    pub fn start(&mut self) -> Result<(), Rejection> {
        match self.phase {
            Phase::Running => return Err(Rejection::AlreadyRunning),
            Phase::Ended => self.restore_initial_board(),
            Phase::Idle => {}
        }

        self.direction = self.settings.initial_direction;
        self.pending_direction = None;
        self.phase = Phase::Running;
        log!(
            "Game started heading {} with {} segments",
            self.direction,
            self.snake.len()
        );
        Ok(())
    }

    /// Queues `direction` for the next tick. Last accepted call wins; each call is
    /// checked against the direction the snake is actually moving in.
    pub fn set_direction(&mut self, direction: Direction) -> Result<(), Rejection> {
        if self.phase != Phase::Running {
            return Err(Rejection::NotRunning);
        }
        if direction.is_opposite(&self.direction) {
            return Err(Rejection::Reversal {
                current: self.direction,
                requested: direction,
            });
        }
        self.pending_direction = Some(direction);
        Ok(())
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Ignored;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
        self.tick += 1;

        let next_head = Self::next_head(self.snake.head(), self.direction, self.settings.board_size);
        let grew = next_head == self.food;
        if grew {
            // Placement ignores the snake's cells on purpose.
            self.food = random_cell(self.settings.board_size, &mut self.rng);
        }
        self.snake.advance(next_head, grew);

        if self.snake.contains_in_body(next_head) {
            self.phase = Phase::Ended;
            self.end_reason = Some(EndReason::SelfCollision);
            log!(
                "Snake ran into itself at ({}, {}) on tick {}. Final score: {}",
                next_head.x,
                next_head.y,
                self.tick,
                self.score()
            );
            return TickOutcome::Collided(EndReason::SelfCollision);
        }

        if grew {
            log!(
                "Ate food at ({}, {}). Length: {}, score: {}",
                next_head.x,
                next_head.y,
                self.snake.len(),
                self.score()
            );
            TickOutcome::Grew
        } else {
            log_debug!(
                "Tick {}: head ({}, {}) heading {}",
                self.tick,
                next_head.x,
                next_head.y,
                self.direction
            );
            TickOutcome::Moved
        }
    }

    pub fn reset(&mut self) {
        self.restore_initial_board();
        self.phase = Phase::Idle;
        log!("Game reset");
    }

    fn restore_initial_board(&mut self) {
        self.snake = self.initial_snake.clone();
        self.food = random_cell(self.settings.board_size, &mut self.rng);
        self.direction = self.settings.initial_direction;
        self.pending_direction = None;
        self.end_reason = None;
        self.tick = 0;
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The direction the snake last moved in (or will start with).
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Saturates at `u32::MAX`; validated configs never get there.
    pub fn score(&self) -> u32 {
        u32::try_from(self.snake.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(self.settings.score_multiplier)
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn settings(&self) -> &SnakeSettings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            board_size: self.settings.board_size,
            snake: self.snake.to_vec(),
            food: self.food,
            phase: self.phase,
            direction: self.direction,
            score: self.score(),
            tick: self.tick,
            end_reason: self.end_reason,
        }
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Cell) {
        self.food = food;
    }
}

fn random_cell(board_size: usize, rng: &mut SessionRng) -> Cell {
    let x = rng.random_range(0..board_size);
    let y = rng.random_range(0..board_size);
    Cell::new(x, y)
}
