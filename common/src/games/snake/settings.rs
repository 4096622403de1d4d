use std::time::Duration;

use crate::config::{EngineConfig, Validate};
use super::types::{Cell, Direction};

#[derive(Clone, Debug)]
pub struct SnakeSettings {
    pub board_size: usize,
    pub initial_snake: Vec<Cell>,
    pub initial_direction: Direction,
    pub tick_interval: Duration,
    pub score_multiplier: u32,
}

impl TryFrom<&EngineConfig> for SnakeSettings {
    type Error = String;

    fn try_from(config: &EngineConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(Self {
            board_size: config.board_size,
            initial_snake: config.initial_snake.clone(),
            initial_direction: config.initial_direction,
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            score_multiplier: config.score_multiplier,
        })
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            board_size: config.board_size,
            initial_snake: config.initial_snake,
            initial_direction: config.initial_direction,
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            score_multiplier: config.score_multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_default_config() {
        let settings = SnakeSettings::default();
        assert_eq!(settings.board_size, 20);
        assert_eq!(settings.initial_direction, Direction::Right);
        assert_eq!(settings.tick_interval, Duration::from_millis(100));
        assert_eq!(settings.score_multiplier, 10);
        assert_eq!(
            settings.initial_snake,
            vec![Cell::new(10, 10), Cell::new(10, 11), Cell::new(10, 12)]
        );
    }

    #[test]
    fn test_invalid_config_is_refused() {
        let config = EngineConfig {
            score_multiplier: 0,
            ..EngineConfig::default()
        };
        assert!(SnakeSettings::try_from(&config).is_err());
    }
}
