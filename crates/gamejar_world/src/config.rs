//! World configuration.

use std::time::Duration;

use gamejar_math::Transform;
use serde::{Deserialize, Serialize};

use crate::error::WorldError;

/// Configuration for a [`World`](crate::World).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Target ticks per second.
    pub tick_rate: u32,
    /// Whether the camera draws the debug overlay.
    pub debug_overlay: bool,
    /// Initial camera view in world space. `None` matches the surface's
    /// physical resolution one to one.
    pub view: Option<Transform>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            debug_overlay: false,
            view: None,
        }
    }
}

impl WorldConfig {
    #[must_use]
    pub fn with_tick_rate(mut self, tick_rate: u32) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    #[must_use]
    pub fn with_debug_overlay(mut self, enabled: bool) -> Self {
        self.debug_overlay = enabled;
        self
    }

    #[must_use]
    pub fn with_view(mut self, view: Transform) -> Self {
        self.view = Some(view);
        self
    }

    /// The nominal time between ticks, in whole milliseconds.
    ///
    /// 60 ticks per second gives 16 ms. Rates above 1000 are clamped to 1 ms.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        let millis = (1000 / self.tick_rate.max(1)).max(1);
        Duration::from_millis(u64::from(millis))
    }

    /// Check the configuration can drive a world.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidConfig`] if the tick rate is zero.
    pub fn validate(&self) -> Result<(), WorldError> {
        if self.tick_rate == 0 {
            return Err(WorldError::InvalidConfig(
                "tick_rate must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorldConfig::default();
        assert_eq!(config.tick_rate, 60);
        assert!(!config.debug_overlay);
        assert!(config.view.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tick_interval_whole_millis() {
        assert_eq!(
            WorldConfig::default().tick_interval(),
            Duration::from_millis(16)
        );
        let fast = WorldConfig::default().with_tick_rate(5000);
        assert_eq!(fast.tick_interval(), Duration::from_millis(1));
        let slow = WorldConfig::default().with_tick_rate(4);
        assert_eq!(slow.tick_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let config = WorldConfig::default().with_tick_rate(0);
        assert!(matches!(
            config.validate(),
            Err(WorldError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: WorldConfig = serde_json::from_str(r#"{"debug_overlay": true}"#).unwrap();
        assert_eq!(config.tick_rate, 60);
        assert!(config.debug_overlay);
    }
}
