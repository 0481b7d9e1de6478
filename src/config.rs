use std::{env, str::FromStr};

use tracing::warn;

pub const DEFAULT_PLAYER: &str = "Player 1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub player: String,
    pub color: bool,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player: DEFAULT_PLAYER.to_string(),
            color: true,
            seed: None,
        }
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring unparseable {}={:?}", key, value);
            default
        }),
        None => default,
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let player = lookup("MINESWEEPER_PLAYER")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(defaults.player);

        let color = if lookup("NO_COLOR").is_some_and(|value| !value.is_empty()) {
            false
        } else {
            parse_or("MINESWEEPER_COLOR", lookup("MINESWEEPER_COLOR"), defaults.color)
        };

        let seed = lookup("MINESWEEPER_SEED").and_then(|raw| match raw.trim().parse() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!("Ignoring unparseable MINESWEEPER_SEED={:?}", raw);
                None
            }
        });

        Self {
            player,
            color,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("MINESWEEPER_PLAYER", "Ada"),
            ("MINESWEEPER_COLOR", "false"),
            ("MINESWEEPER_SEED", "1234"),
        ]);
        assert_eq!(config.player, "Ada");
        assert!(!config.color);
        assert_eq!(config.seed, Some(1234));
    }

    #[test]
    fn test_no_color_wins_over_color_setting() {
        let config = config_from(&[("NO_COLOR", "1"), ("MINESWEEPER_COLOR", "true")]);
        assert!(!config.color);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config_from(&[
            ("MINESWEEPER_PLAYER", "   "),
            ("MINESWEEPER_COLOR", "sometimes"),
            ("MINESWEEPER_SEED", "-5"),
        ]);
        assert_eq!(config, Config::default());
    }
}
