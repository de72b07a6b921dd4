use std::{path::Path, path::PathBuf, str::FromStr};

use anyhow::{Context, Result};
use enum_map::{enum_map, EnumMap};
use ratatui::style::Color;
use serde::Deserialize;
use ttt_types::Mark;

/// Settings read from a RON file. Every field may be left out.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
    pub x_color: String,
    pub o_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: None,
            log_filter: "info".to_owned(),
            x_color: "red".to_owned(),
            o_color: "blue".to_owned(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }

    pub fn theme(&self) -> Result<Theme> {
        let x = parse_color(&self.x_color)?;
        let o = parse_color(&self.o_color)?;
        Ok(Theme {
            marks: enum_map! {
                Mark::X => x,
                Mark::O => o,
            },
        })
    }
}

fn parse_color(name: &str) -> Result<Color> {
    Color::from_str(name).map_err(|_| anyhow::anyhow!("unknown color {name:?}"))
}

/// Colours used to draw the marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub marks: EnumMap<Mark, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            marks: enum_map! {
                Mark::X => Color::Red,
                Mark::O => Color::Blue,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("()").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.theme().unwrap(), Theme::default());
    }

    #[test]
    fn partial_file() {
        let config = Config::parse(r#"(log_file: Some("game.log"), o_color: "green")"#).unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("game.log")));
        assert_eq!(config.log_filter, "info");
        let theme = config.theme().unwrap();
        assert_eq!(theme.marks[Mark::X], Color::Red);
        assert_eq!(theme.marks[Mark::O], Color::Green);
    }

    #[test]
    fn bad_color_is_an_error() {
        let config = Config::parse(r#"(x_color: "not-a-colour")"#).unwrap();
        assert!(config.theme().is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(Config::parse("(log_filter: 3)").is_err());
    }
}
