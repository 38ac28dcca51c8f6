//! Battle field configuration resource.
//!
//! Manages field dimensions loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [field]
//! cols = 6
//! rows = 3
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::tileposition::TilePosition;

/// Default safe values for startup
const DEFAULT_COLS: u32 = 6;
const DEFAULT_ROWS: u32 = 3;
const DEFAULT_CONFIG_PATH: &str = "./field.ini";

/// Battle field configuration resource.
///
/// Stores the grid dimensions movement is bounds-checked against. On setup,
/// load values from the configuration file; missing keys keep their
/// defaults.
#[derive(Resource, Debug, Clone)]
pub struct FieldConfig {
    /// Number of tile columns.
    pub cols: u32,
    /// Number of tile rows.
    pub rows: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Whether a tile lies on the field.
    pub fn in_bounds(&self, tile: TilePosition) -> bool {
        tile.col >= 0
            && tile.row >= 0
            && (tile.col as u32) < self.cols
            && (tile.row as u32) < self.rows
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [field] section
        if let Some(cols) = config.getuint("field", "cols").ok().flatten() {
            self.cols = cols as u32;
        }
        if let Some(rows) = config.getuint("field", "rows").ok().flatten() {
            self.rows = rows as u32;
        }

        info!("Loaded field config: {}x{} tiles", self.cols, self.rows);

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [field] section
        config.set("field", "cols", Some(self.cols.to_string()));
        config.set("field", "rows", Some(self.rows.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to write config file: {}", e))
    }
}
