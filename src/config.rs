use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};
use tracing::warn;

use roomforge_core::Room;

const DEFAULT_PLAN_PATH: &str = "config/plan.toml";

/// Room dimensions as authored in plan files (feet).
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct RoomDims {
    pub width: f32,
    pub length: f32,
    pub height: f32,
}

impl From<RoomDims> for Room {
    fn from(dims: RoomDims) -> Self {
        Room::new(dims.width, dims.length, dims.height)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlanConfig {
    pub room: RoomDims,
    /// Furniture request, in placement-priority order.
    pub furniture: Vec<String>,
    /// Seed for the placement RNG; fixed seeds replay identical layouts.
    pub seed: u64,
    /// Optional JSON catalog overriding the built-in furniture dimensions.
    pub catalog: Option<PathBuf>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        // A modest bedroom, enough to demo every placement path.
        Self {
            room: RoomDims {
                width: 12.0,
                length: 14.0,
                height: 8.0,
            },
            furniture: ["Bed", "Nightstand", "Dresser", "Wardrobe"]
                .into_iter()
                .map(String::from)
                .collect(),
            seed: 0,
            catalog: None,
        }
    }
}

impl PlanConfig {
    /// Load the plan from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_PLAN_PATH))
    }

    /// Load a plan from an explicit path, falling back to defaults on
    /// errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<PlanConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    PlanConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_PLAN_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else {
                    warn!("Plan config not found at {}. Using defaults", path.display());
                }
                PlanConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_is_a_valid_request() {
        let cfg = PlanConfig::default();
        assert!(Room::from(cfg.room).validate().is_ok());
        assert!(!cfg.furniture.is_empty());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = PlanConfig::load_from_path(Path::new("no/such/plan.toml"));
        assert_eq!(cfg.furniture, PlanConfig::default().furniture);
    }

    #[test]
    fn partial_plan_files_fill_in_defaults() {
        let cfg: PlanConfig = toml::from_str(
            r#"
            seed = 7

            [room]
            width = 9.0
            length = 9.0
            height = 8.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.room.width, 9.0);
        assert_eq!(cfg.furniture, PlanConfig::default().furniture);
    }
}
