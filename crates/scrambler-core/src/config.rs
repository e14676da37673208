use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            animation: AnimationConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Upper bound (inclusive) on a character's randomization countdown
    #[serde(default = "default_max_randomization_steps")]
    pub max_randomization_steps: u32,
    /// Scheduler tick rate in frames per second
    #[serde(default = "default_tick_fps")]
    pub tick_fps: u16,
    /// Override for the default scramble alphabet
    #[serde(default)]
    pub charset: Option<String>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            max_randomization_steps: default_max_randomization_steps(),
            tick_fps: default_tick_fps(),
            charset: None,
        }
    }
}

impl AnimationConfig {
    /// Randomization bound with the zero case clamped away
    pub fn effective_max_steps(&self) -> u32 {
        self.max_randomization_steps.max(1)
    }

    /// Duration of one scheduler tick
    pub fn tick_duration(&self) -> Duration {
        if self.tick_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.tick_fps as u64)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color theme name
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_randomization_steps() -> u32 {
    14
}

fn default_tick_fps() -> u16 {
    60
}

fn default_theme() -> String {
    "gruvbox".to_string()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/scrambler/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("scrambler")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.animation.max_randomization_steps, 14);
        assert_eq!(config.animation.tick_fps, 60);
        assert!(config.animation.charset.is_none());
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.ui.theme, "gruvbox");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [animation]
            max_randomization_steps = 6
            "#,
        )
        .unwrap();
        assert_eq!(config.animation.max_randomization_steps, 6);
        assert_eq!(config.animation.tick_fps, 60);
        assert_eq!(config.ui.theme, "gruvbox");
    }

    #[test]
    fn test_effective_max_steps_clamps_zero() {
        let config = AnimationConfig {
            max_randomization_steps: 0,
            ..Default::default()
        };
        assert_eq!(config.effective_max_steps(), 1);
    }

    #[test]
    fn test_tick_duration() {
        let config = AnimationConfig {
            tick_fps: 50,
            ..Default::default()
        };
        assert_eq!(config.tick_duration(), Duration::from_millis(20));

        let zero = AnimationConfig {
            tick_fps: 0,
            ..Default::default()
        };
        assert_eq!(zero.tick_duration(), Duration::from_millis(16));
    }
}
