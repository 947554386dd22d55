use std::path::Path;

use serde::Deserialize;
use twenty48::GameConfig;

/// Contents of the optional JSON config file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How many times per second input is polled and the screen redrawn.
    pub tick_rate_hz: f64,
    pub rules: GameConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_hz: 10.0,
            rules: GameConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str::<Config>(&contents)
            .map_err(|err| anyhow::anyhow!("Invalid config '{}': {}", path.display(), err))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.tick_rate_hz.is_finite() && self.tick_rate_hz > 0.0) {
            anyhow::bail!("tick_rate_hz must be positive, got {}", self.tick_rate_hz);
        }
        self.rules.validate()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_match_the_classic_game() {
        let config = Config::default();
        assert_eq!(config.tick_rate_hz, 10.0);
        assert_eq!(config.rules.four_probability, 0.5);
        assert!(!config.rules.spawn_on_unchanged_move);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn nested_rules_are_read() {
        let config: Config =
            serde_json::from_str(r#"{ "rules": { "four_probability": 0.1 } }"#).unwrap();
        assert_eq!(config.tick_rate_hz, 10.0);
        assert_eq!(config.rules.four_probability, 0.1);
    }

    #[test]
    fn bad_values_fail_validation() {
        let config = Config {
            tick_rate_hz: 0.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
        let mut config = Config::default();
        config.rules.four_probability = -0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("twenty48_config_{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{ "tick_rate_hz": 30, "rules": {{ "spawn_on_unchanged_move": true }} }}"#)
            .unwrap();
        drop(file);

        let config = Config::load(&path).unwrap();
        assert_eq!(config.tick_rate_hz, 30.0);
        assert!(config.rules.spawn_on_unchanged_move);

        std::fs::write(&path, r#"{ "tick_rate_hz": -1 }"#).unwrap();
        assert!(Config::load(&path).is_err());
        std::fs::remove_file(&path).unwrap();

        assert!(Config::load(&path).is_err());
    }
}
