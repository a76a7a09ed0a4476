#![warn(missing_docs)]
//! Furniture catalog: default dimensions per furniture type, plus the
//! room-kind groupings host UIs offer as presets.

mod room_kind;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use roomforge_core::FurnitureSpec;

pub use room_kind::RoomKind;

/// Dimensions substituted for furniture types the catalog does not know.
///
/// Placement must never abort on an unrecognized label; unknown types get a
/// 2 x 2 x 2 box.
pub const DEFAULT_DIMENSIONS: (f32, f32, f32) = (2.0, 2.0, 2.0);

/// Errors that can occur while loading a catalog definition file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Wrap IO failures when reading definition files.
    #[error("failed to read catalog definitions: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap JSON parsing issues.
    #[error("failed to parse catalog definitions: {0}")]
    Parse(#[from] serde_json::Error),
    /// Validation errors describing why a definition is unusable.
    #[error("invalid catalog definition for {name}: {reason}")]
    Invalid {
        /// Furniture type name of the offending definition.
        name: String,
        /// Human-readable rejection reason.
        reason: &'static str,
    },
}

/// One furniture definition as authored in a catalog JSON file.
#[derive(Debug, Deserialize)]
pub struct FurnitureDefinition {
    /// Catalog key (e.g., "Bed").
    pub name: String,
    /// Footprint extent along x.
    pub width: f32,
    /// Footprint extent along y.
    pub depth: f32,
    /// Extent along z.
    pub height: f32,
}

/// Lookup table from furniture type name to dimensions.
#[derive(Debug, Clone)]
pub struct FurnitureCatalog {
    dimensions: HashMap<String, (f32, f32, f32)>,
}

impl FurnitureCatalog {
    /// The built-in catalog of standard furniture dimensions (feet).
    pub fn built_in() -> Self {
        let entries: [(&str, f32, f32, f32); 14] = [
            ("Bed", 6.67, 5.0, 2.5),
            ("Sofa", 6.0, 3.0, 3.0),
            ("TV Stand", 5.0, 1.5, 2.0),
            ("Coffee Table", 4.0, 2.0, 1.5),
            ("Nightstand", 2.0, 2.0, 2.0),
            ("Dresser", 4.0, 2.0, 4.0),
            ("Wardrobe", 4.0, 2.0, 7.0),
            ("Armchair", 3.0, 3.0, 3.0),
            ("Toilet", 2.5, 2.0, 2.5),
            ("Sink", 2.0, 1.5, 2.5),
            ("Shower", 3.0, 3.0, 7.0),
            ("Bathtub", 5.0, 2.5, 2.0),
            ("Door", 3.0, 0.1, 7.0),
            ("Window", 4.0, 0.1, 4.0),
        ];
        let dimensions = entries
            .into_iter()
            .map(|(name, w, d, h)| (name.to_string(), (w, d, h)))
            .collect();
        Self { dimensions }
    }

    /// Build a catalog from authored definitions, rejecting non-positive
    /// extents.
    pub fn from_definitions(
        definitions: Vec<FurnitureDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut dimensions = HashMap::with_capacity(definitions.len());
        for def in definitions {
            if !(def.width > 0.0 && def.depth > 0.0 && def.height > 0.0) {
                return Err(CatalogError::Invalid {
                    name: def.name,
                    reason: "dimensions must be positive",
                });
            }
            dimensions.insert(def.name, (def.width, def.depth, def.height));
        }
        Ok(Self { dimensions })
    }

    /// Parse a catalog from a JSON definition file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        let definitions: Vec<FurnitureDefinition> = serde_json::from_str(&contents)?;
        Self::from_definitions(definitions)
    }

    /// Load a catalog from `path`, falling back to the built-in table on any
    /// error.
    pub fn load_lenient(path: &Path) -> Self {
        match Self::load(path) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(
                    "Failed to load furniture catalog from {}: {err}. Using built-in catalog",
                    path.display()
                );
                Self::built_in()
            }
        }
    }

    /// Resolve dimensions for `name`, substituting [`DEFAULT_DIMENSIONS`]
    /// for unknown types.
    pub fn dimensions_for(&self, name: &str) -> FurnitureSpec {
        match self.dimensions.get(name) {
            Some(&(width, depth, height)) => FurnitureSpec::new(name, width, depth, height),
            None => {
                debug!(furniture = name, "unknown furniture type, using default dimensions");
                let (width, depth, height) = DEFAULT_DIMENSIONS;
                FurnitureSpec::new(name, width, depth, height)
            }
        }
    }

    /// Whether `name` has an authored entry (as opposed to the default).
    pub fn contains(&self, name: &str) -> bool {
        self.dimensions.contains_key(name)
    }
}

impl Default for FurnitureCatalog {
    fn default() -> Self {
        Self::built_in()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_catalog_covers_standard_types() {
        let catalog = FurnitureCatalog::built_in();
        let bed = catalog.dimensions_for("Bed");
        assert_eq!((bed.width, bed.depth, bed.height), (6.67, 5.0, 2.5));
        let wardrobe = catalog.dimensions_for("Wardrobe");
        assert_eq!(wardrobe.height, 7.0);
    }

    #[test]
    fn unknown_types_resolve_to_default_dimensions() {
        let catalog = FurnitureCatalog::built_in();
        assert!(!catalog.contains("Pinball Machine"));
        let spec = catalog.dimensions_for("Pinball Machine");
        assert_eq!((spec.width, spec.depth, spec.height), DEFAULT_DIMENSIONS);
        assert_eq!(spec.name, "Pinball Machine");
    }

    #[test]
    fn definitions_with_non_positive_extents_are_rejected() {
        let defs = vec![FurnitureDefinition {
            name: "Ghost Chair".into(),
            width: 2.0,
            depth: 0.0,
            height: 3.0,
        }];
        assert!(matches!(
            FurnitureCatalog::from_definitions(defs),
            Err(CatalogError::Invalid { .. })
        ));
    }

    #[test]
    fn load_lenient_falls_back_to_built_in() {
        let catalog = FurnitureCatalog::load_lenient(Path::new("does/not/exist.json"));
        assert!(catalog.contains("Sofa"));
    }
}
