use crate::view::Layout;
use std::{env, path::PathBuf};

pub const DEFAULT_GOAL: u64 = 50;
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub goal: u64,
    pub layout: Layout,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Unset or unparsable values fall back to defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let port = var("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let data_path = var("APP_DATA_PATH")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data/checkin.json"));
        let goal = var("CHECKIN_GOAL")
            .and_then(|value| value.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_GOAL);
        let layout = Layout {
            attendee_list: var("CHECKIN_ROSTER").map_or(true, |v| flag(&v)),
            celebration: var("CHECKIN_CELEBRATION").map_or(true, |v| flag(&v)),
        };

        Self {
            port,
            data_path,
            goal,
            layout,
        }
    }
}

fn flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_path, PathBuf::from("data/checkin.json"));
        assert_eq!(config.goal, 50);
        assert_eq!(config.layout, Layout::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("APP_DATA_PATH", "/tmp/kiosk.json"),
            ("CHECKIN_GOAL", "120"),
            ("CHECKIN_ROSTER", "off"),
            ("CHECKIN_CELEBRATION", "yes"),
        ]);
        assert_eq!(config.port, 9000);
        assert_eq!(config.data_path, PathBuf::from("/tmp/kiosk.json"));
        assert_eq!(config.goal, 120);
        assert!(!config.layout.attendee_list);
        assert!(config.layout.celebration);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_from(&[("PORT", "http"), ("CHECKIN_GOAL", "-3")]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.goal, DEFAULT_GOAL);
    }
}
