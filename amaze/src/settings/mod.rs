use std::{fs, path::PathBuf, time::Duration};

use amaze_core::dims::Dims;
use crossterm::style::{Color, ContentStyle};
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ColorScheme {
    pub wall: Color,
    pub path: Color,
    pub undo: Color,
    pub text: Color,
}

impl ColorScheme {
    pub fn walls(&self) -> ContentStyle {
        ContentStyle {
            foreground_color: Some(self.wall),
            ..Default::default()
        }
    }

    pub fn paths(&self) -> ContentStyle {
        ContentStyle {
            foreground_color: Some(self.path),
            ..Default::default()
        }
    }

    pub fn undos(&self) -> ContentStyle {
        ContentStyle {
            foreground_color: Some(self.undo),
            ..Default::default()
        }
    }

    pub fn texts(&self) -> ContentStyle {
        ContentStyle {
            foreground_color: Some(self.text),
            ..Default::default()
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            wall: Color::White,
            path: Color::Green,
            undo: Color::DarkGrey,
            text: Color::White,
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub color_scheme: Option<ColorScheme>,
    #[serde(default)]
    pub default_size: Option<Dims>,
    #[serde(default)]
    pub step_delay_ms: Option<u64>,
}

impl Settings {
    pub fn get_color_scheme(&self) -> ColorScheme {
        self.color_scheme.unwrap_or_default()
    }

    pub fn get_default_size(&self) -> Dims {
        self.default_size.unwrap_or(Dims(16, 12))
    }

    pub fn get_step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms.unwrap_or(50))
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .expect("no config directory on this platform")
            .join("amaze")
            .join("settings.ron")
    }

    pub fn reset_config(path: PathBuf) {
        let default_settings_string = include_str!("./default_settings.ron");

        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, default_settings_string).unwrap();
    }

    pub fn load(path: PathBuf) -> Self {
        let default_settings_string = include_str!("./default_settings.ron");

        let settings_string = fs::read_to_string(&path);
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        if let Ok(settings_string) = settings_string {
            match options.from_str(&settings_string) {
                Ok(settings) => settings,
                Err(err) => {
                    panic!("Error reading settings file ({:?}), {}", path, err);
                }
            }
        } else {
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, default_settings_string).unwrap();
            options.from_str(default_settings_string).unwrap()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        let settings: Settings = options
            .from_str(include_str!("./default_settings.ron"))
            .unwrap();

        assert_eq!(settings.get_default_size(), Dims(16, 12));
        assert_eq!(settings.get_step_delay(), Duration::from_millis(50));
        assert_eq!(
            settings.get_color_scheme().walls().foreground_color,
            Some(Color::White),
        );
    }

    #[test]
    fn missing_fields_fall_back() {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        let settings: Settings = options.from_str("(step_delay_ms: 5)").unwrap();

        assert_eq!(settings.get_step_delay(), Duration::from_millis(5));
        assert_eq!(settings.get_default_size(), Dims(16, 12));
    }
}
