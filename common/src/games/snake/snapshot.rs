use serde::{Deserialize, Serialize};

use super::types::{Cell, Direction, EndReason, Phase};

/// Owned copy of everything a renderer reads after a tick.
///
/// Snapshots built by the engine always have a non-empty, in-bounds snake;
/// deserialized ones are not checked, so the accessors here do not index blindly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeSnapshot {
    pub board_size: usize,
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub phase: Phase,
    pub direction: Direction,
    pub score: u32,
    pub tick: u64,
    pub end_reason: Option<EndReason>,
}

impl SnakeSnapshot {
    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.board_size && cell.y < self.board_size
    }

    pub fn length(&self) -> usize {
        self.snake.len()
    }

    pub fn is_snake(&self, cell: Cell) -> bool {
        self.snake.contains(&cell)
    }

    pub fn status_message(&self) -> String {
        match (self.phase, self.end_reason) {
            (Phase::Idle, _) => "Press start to play".to_string(),
            (Phase::Running, _) => format!("Score: {}", self.score),
            (Phase::Ended, Some(EndReason::SelfCollision)) => {
                format!("Game over! You ran into yourself. Final score: {}", self.score)
            }
            (Phase::Ended, None) => format!("Game over! Final score: {}", self.score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(phase: Phase, end_reason: Option<EndReason>) -> SnakeSnapshot {
        SnakeSnapshot {
            board_size: 20,
            snake: vec![Cell::new(11, 10), Cell::new(10, 10), Cell::new(10, 11)],
            food: Cell::new(3, 4),
            phase,
            direction: Direction::Right,
            score: 30,
            tick: 1,
            end_reason,
        }
    }

    #[test]
    fn test_status_message_per_phase() {
        assert_eq!(snapshot(Phase::Idle, None).status_message(), "Press start to play");
        assert_eq!(snapshot(Phase::Running, None).status_message(), "Score: 30");
        assert_eq!(
            snapshot(Phase::Ended, Some(EndReason::SelfCollision)).status_message(),
            "Game over! You ran into yourself. Final score: 30"
        );
    }

    #[test]
    fn test_cell_queries() {
        let snap = snapshot(Phase::Running, None);
        assert_eq!(snap.head(), Some(Cell::new(11, 10)));
        assert_eq!(snap.length(), 3);
        assert!(snap.is_snake(Cell::new(10, 11)));
        assert!(!snap.is_snake(snap.food));
    }

    #[test]
    fn test_empty_deserialized_snapshot_has_no_head() {
        let mut snap = snapshot(Phase::Running, None);
        snap.snake.clear();
        assert_eq!(snap.head(), None);
        assert_eq!(snap.length(), 0);
        assert!(snap.contains(Cell::new(19, 0)));
        assert!(!snap.contains(Cell::new(20, 0)));
    }
}
