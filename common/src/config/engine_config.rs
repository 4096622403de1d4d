use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::games::snake::{Cell, Direction};
use super::Validate;

pub const DEFAULT_CONFIG_FILE: &str = "snake_config.yaml";

const MIN_BOARD_SIZE: usize = 3;
const MAX_BOARD_SIZE: usize = 200;
const MIN_TICK_INTERVAL_MS: u64 = 10;
const MAX_TICK_INTERVAL_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub board_size: usize,
    pub initial_snake: Vec<Cell>,
    pub initial_direction: Direction,
    pub tick_interval_ms: u64,
    pub score_multiplier: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: 20,
            initial_snake: vec![Cell::new(10, 10), Cell::new(10, 11), Cell::new(10, 12)],
            initial_direction: Direction::Right,
            tick_interval_ms: 100,
            score_multiplier: 10,
        }
    }
}

impl EngineConfig {
    /// Largest multiplier for which a snake filling the whole board still scores within `u32`.
    pub fn max_score_multiplier(&self) -> u32 {
        let max_cells = u64::try_from(self.board_size.saturating_mul(self.board_size))
            .unwrap_or(u64::MAX)
            .max(1);
        (u64::from(u32::MAX) / max_cells) as u32
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(format!(
                "board_size must be between {} and {}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.board_size
            ));
        }
        if self.initial_snake.is_empty() {
            return Err("initial_snake must contain at least one cell".to_string());
        }
        if let Some(cell) = self
            .initial_snake
            .iter()
            .find(|c| c.x >= self.board_size || c.y >= self.board_size)
        {
            return Err(format!(
                "initial_snake cell ({}, {}) is outside a {}x{} board",
                cell.x, cell.y, self.board_size, self.board_size
            ));
        }
        let unique: HashSet<&Cell> = self.initial_snake.iter().collect();
        if unique.len() != self.initial_snake.len() {
            return Err("initial_snake must not contain duplicate cells".to_string());
        }
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(format!(
                "tick_interval_ms must be between {} and {}, got {}",
                MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS, self.tick_interval_ms
            ));
        }
        if self.score_multiplier == 0 {
            return Err("score_multiplier must be greater than 0".to_string());
        }
        let max_multiplier = self.max_score_multiplier();
        if self.score_multiplier > max_multiplier {
            return Err(format!(
                "score_multiplier must not exceed {} on a {}x{} board, got {}",
                max_multiplier, self.board_size, self.board_size, self.score_multiplier
            ));
        }
        Ok(())
    }
}
