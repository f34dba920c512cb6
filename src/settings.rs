//! Simulation settings
//!
//! Loaded from a JSON file on the native driver. Missing fields fall back to
//! the defaults in [`crate::consts`].

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Arena, RotationMode};

/// Error loading, saving or validating settings
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "settings I/O error: {e}"),
            SettingsError::Parse(e) => write!(f, "settings parse error: {e}"),
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    /// Walls at x = ±arena_half_width
    pub arena_half_width: f64,
    /// Walls at y = ±arena_half_height
    pub arena_half_height: f64,

    // === Size ===
    pub initial_side: f64,
    /// Grow only while side < max_side_factor × initial_side
    pub max_side_factor: f64,
    /// Shrink only while side > min_side_factor × initial_side
    pub min_side_factor: f64,
    pub grow_factor: f64,
    pub shrink_factor: f64,

    // === Spin ===
    pub initial_spin: f64,
    pub spin_step: f64,
    /// Spin down only while |ω| > min_spin
    pub min_spin: f64,
    /// Spin up only while |ω| < max_spin
    pub max_spin: f64,
    pub rotation_mode: RotationMode,

    // === Motion ===
    /// Velocity components start in [base_speed, 2 × base_speed)
    pub base_speed: f64,

    // === Input ===
    /// Ticks between discrete actions while a key is held
    pub action_cadence: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_half_width: ARENA_HALF_WIDTH,
            arena_half_height: ARENA_HALF_HEIGHT,

            initial_side: INITIAL_SIDE,
            max_side_factor: MAX_SIDE_FACTOR,
            min_side_factor: MIN_SIDE_FACTOR,
            grow_factor: GROW_FACTOR,
            shrink_factor: SHRINK_FACTOR,

            initial_spin: INITIAL_SPIN,
            spin_step: SPIN_STEP,
            min_spin: MIN_SPIN,
            max_spin: MAX_SPIN,
            rotation_mode: RotationMode::default(),

            base_speed: BASE_SPEED,

            action_cadence: ACTION_CADENCE,
        }
    }
}

impl Settings {
    /// The arena these settings describe
    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_half_width, self.arena_half_height)
    }

    /// Check that every value is usable by the simulation
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn positive(name: &str, value: f64) -> Result<(), SettingsError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid(format!("{name} must be positive, got {value}")))
            }
        }

        positive("arena_half_width", self.arena_half_width)?;
        positive("arena_half_height", self.arena_half_height)?;
        positive("initial_side", self.initial_side)?;
        positive("min_side_factor", self.min_side_factor)?;
        positive("max_side_factor", self.max_side_factor)?;
        positive("grow_factor", self.grow_factor)?;
        positive("shrink_factor", self.shrink_factor)?;
        positive("spin_step", self.spin_step)?;
        positive("min_spin", self.min_spin)?;
        positive("max_spin", self.max_spin)?;
        positive("base_speed", self.base_speed)?;

        if !self.initial_spin.is_finite() {
            return Err(SettingsError::Invalid("initial_spin must be finite".into()));
        }
        if self.min_side_factor >= self.max_side_factor {
            return Err(SettingsError::Invalid(format!(
                "min_side_factor ({}) must be below max_side_factor ({})",
                self.min_side_factor, self.max_side_factor
            )));
        }
        if self.min_spin >= self.max_spin {
            return Err(SettingsError::Invalid(format!(
                "min_spin ({}) must be below max_spin ({})",
                self.min_spin, self.max_spin
            )));
        }
        if self.action_cadence == 0 {
            return Err(SettingsError::Invalid("action_cadence must be at least 1".into()));
        }
        // The triangle has to fit inside the arena at startup
        let circumradius = self.initial_side / 3.0_f64.sqrt();
        if circumradius >= self.arena_half_width.min(self.arena_half_height) {
            return Err(SettingsError::Invalid(format!(
                "initial_side {} does not fit in the arena",
                self.initial_side
            )));
        }
        Ok(())
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}): {e}", path.display());
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.arena(), Arena::new(1280.0, 720.0));
        assert_eq!(settings.rotation_mode, RotationMode::Coupled);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "initial_side": 60.0, "rotation_mode": "Simultaneous" }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.initial_side, 60.0);
        assert_eq!(settings.rotation_mode, RotationMode::Simultaneous);
        assert_eq!(settings.action_cadence, ACTION_CADENCE);
        assert_eq!(settings.arena_half_width, ARENA_HALF_WIDTH);
    }

    #[test]
    fn test_rejects_zero_side() {
        let err = Settings::from_json(r#"{ "initial_side": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
        assert!(err.to_string().contains("initial_side"));
    }

    #[test]
    fn test_rejects_inverted_ranges() {
        let settings = Settings {
            min_spin: 5.0,
            max_spin: 1.0,
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));

        let settings = Settings {
            min_side_factor: 2.0,
            max_side_factor: 2.0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_cadence() {
        let settings = Settings {
            action_cadence: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_triangle() {
        let settings = Settings {
            initial_side: 2000.0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir()
            .join(format!("tribounce_settings_{}.json", std::process::id()));
        let settings = Settings {
            spin_step: 0.5,
            action_cadence: 10,
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded.action_cadence, 10);
        assert_eq!(loaded.spin_step, 0.5);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("tribounce_definitely_missing.json");
        assert!(matches!(Settings::load(&path), Err(SettingsError::Io(_))));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }
}
