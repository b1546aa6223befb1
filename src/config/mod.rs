//! Session configuration
//!
//! In-memory configuration for one presentation session: the animation
//! tick period and the identity of the two pause-sensitive sections.
//! Values are fixed for the session's lifetime and validated against
//! the deck before a session is built.

use std::time::Duration;

use thiserror::Error;

use crate::domain::animation::PauseRules;

/// Configuration errors detected at session construction
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Tick period must be greater than zero")]
    ZeroTickPeriod,
    #[error("Pause-sensitive section {index} is outside the deck's {section_count} sections")]
    PauseSectionOutOfRange { index: usize, section_count: usize },
}

/// Tunable constants of a presentation session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Period of the animation tick
    pub tick_period: Duration,
    /// Sections whose active selection suspends the animation
    pub pause_rules: PauseRules,
}

impl SessionConfig {
    /// Animation tick period of the original presentation
    pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(100);
    /// Default index of the ecosystem section
    pub const ECOSYSTEM_SECTION: usize = 1;
    /// Default index of the business-models section
    pub const BUSINESS_MODELS_SECTION: usize = 2;

    /// Checks the configuration against a deck of `section_count` sections
    pub fn validate(&self, section_count: usize) -> Result<(), ConfigError> {
        if self.tick_period.is_zero() {
            return Err(ConfigError::ZeroTickPeriod);
        }
        for index in [
            self.pause_rules.ecosystem_section,
            self.pause_rules.business_models_section,
        ] {
            if index >= section_count {
                return Err(ConfigError::PauseSectionOutOfRange {
                    index,
                    section_count,
                });
            }
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_period: Self::DEFAULT_TICK_PERIOD,
            pause_rules: PauseRules {
                ecosystem_section: Self::ECOSYSTEM_SECTION,
                business_models_section: Self::BUSINESS_MODELS_SECTION,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_for_the_standard_deck() {
        let config = SessionConfig::default();
        assert_eq!(config.tick_period, Duration::from_millis(100));
        assert!(config.validate(8).is_ok());
    }

    #[test]
    fn zero_tick_period_is_rejected() {
        let config = SessionConfig {
            tick_period: Duration::ZERO,
            ..SessionConfig::default()
        };
        assert!(matches!(config.validate(8), Err(ConfigError::ZeroTickPeriod)));
    }

    #[test]
    fn pause_section_outside_deck_is_rejected() {
        let config = SessionConfig::default();
        assert!(matches!(
            config.validate(2),
            Err(ConfigError::PauseSectionOutOfRange { index: 2, section_count: 2 })
        ));
    }
}
