use std::path::Path;

use backend::{Color, Rect};
use serde::Deserialize;

use crate::error::{GameError, Result};
use crate::frame::Palette;

pub const SETTINGS_FILE: &str = "game.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ActorSettings {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Default for ActorSettings {
    fn default() -> Self {
        Self {
            x: 100,
            y: 100,
            w: 50,
            h: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorSettings {
    pub background: [u8; 3],
    pub highlight: [u8; 3],
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            background: [0, 0, 255],
            highlight: [255, 0, 0],
        }
    }
}

/// Startup settings, read from an optional `game.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub texture: String,
    /// Target frames per second, 0 renders as fast as possible.
    pub frame_rate: u32,
    pub step: u32,
    pub actor: ActorSettings,
    pub colors: ColorSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Simple 2D Game Engine".to_string(),
            width: 800,
            height: 600,
            texture: "player.bmp".to_string(),
            frame_rate: 60,
            step: 5,
            actor: ActorSettings::default(),
            colors: ColorSettings::default(),
        }
    }
}

impl Settings {
    /// Reads settings from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Settings> {
        if !path.exists() {
            log::info!("{} not found, using default settings", path.display());
            return Ok(Settings::default());
        }
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&text)?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_toml_str(text: &str) -> Result<Settings> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GameError::InvalidSettings(format!(
                "window size {}x{} must be non-zero",
                self.width, self.height
            )));
        }
        if self.step == 0 {
            return Err(GameError::InvalidSettings("step must be positive".to_string()));
        }
        let ActorSettings { x, y, w, h } = self.actor;
        if w == 0 || h == 0 {
            return Err(GameError::InvalidSettings(format!(
                "actor size {w}x{h} must be non-zero"
            )));
        }
        let fits_x = x >= 0 && i64::from(x) + i64::from(w) <= i64::from(self.width);
        let fits_y = y >= 0 && i64::from(y) + i64::from(h) <= i64::from(self.height);
        if !fits_x || !fits_y {
            return Err(GameError::InvalidSettings(format!(
                "actor {{{x}, {y}, {w}, {h}}} does not fit in a {}x{} window",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn actor_rect(&self) -> Rect {
        Rect::new(self.actor.x, self.actor.y, self.actor.w, self.actor.h)
    }

    pub fn boundary_rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn palette(&self) -> Palette {
        Palette {
            background: Color::from(self.colors.background),
            highlight: Color::from(self.colors.highlight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let settings = Settings::load(Path::new("does/not/exist/game.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.actor_rect(), Rect::new(100, 100, 50, 50));
        assert_eq!(settings.boundary_rect(), Rect::new(0, 0, 800, 600));
        assert_eq!(settings.palette(), Palette::default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let settings = Settings::from_toml_str(
            r#"
            title = "boxes"
            step = 10

            [actor]
            x = 0
            y = 0

            [colors]
            highlight = [0, 255, 0]
            "#,
        )
        .unwrap();
        assert_eq!(settings.title, "boxes");
        assert_eq!(settings.step, 10);
        assert_eq!(settings.actor_rect(), Rect::new(0, 0, 50, 50));
        assert_eq!(settings.palette().highlight, Color::rgb(0, 255, 0));
        assert_eq!(settings.palette().background, Color::BLUE);
        assert_eq!(settings.width, 800);
    }

    #[test]
    fn actor_outside_window_is_rejected() {
        let err = Settings::from_toml_str("[actor]\nx = 780\n").unwrap_err();
        assert!(matches!(err, GameError::InvalidSettings(_)));

        let err = Settings::from_toml_str("[actor]\ny = -5\n").unwrap_err();
        assert!(matches!(err, GameError::InvalidSettings(_)));
    }

    #[test]
    fn zero_step_and_empty_actor_are_rejected() {
        assert!(matches!(
            Settings::from_toml_str("step = 0"),
            Err(GameError::InvalidSettings(_))
        ));
        assert!(matches!(
            Settings::from_toml_str("[actor]\nw = 0\n"),
            Err(GameError::InvalidSettings(_))
        ));
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        assert!(matches!(
            Settings::from_toml_str("width = \"wide\""),
            Err(GameError::Config(_))
        ));
        assert!(matches!(
            Settings::from_toml_str("fullscreen = true"),
            Err(GameError::Config(_))
        ));
    }
}
