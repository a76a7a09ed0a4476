#![warn(missing_docs)]
//! Placement engine: turns a room plus a furniture request into a
//! collision-free [`Layout`].
//!
//! Generation is a full rebuild on every call. Partial results are normal:
//! items the search cannot fit inside the attempt budget come back as
//! [`Shortfall`]s next to a valid layout, never as an error.

mod placement;
mod predictor;

use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use roomforge_catalog::FurnitureCatalog;
use roomforge_core::{Layout, Room, RoomError};

pub use placement::MAX_ATTEMPTS;
pub use predictor::{feature_row, FeatureRow, Hint, PlacementPredictor, FEATURE_LEN};

/// Caller contract violations. These are the only hard failures of
/// [`generate`]; everything else is reported inside [`PlacementOutcome`].
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Room dimensions failed validation.
    #[error(transparent)]
    InvalidRoom(#[from] RoomError),
    /// No furniture remained after dropping blank type names.
    #[error("furniture request is empty")]
    EmptyFurnitureRequest,
}

/// One furniture item the search could not place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortfall {
    /// Furniture type name.
    pub name: String,
    /// Index of the item in the (filtered) input order.
    pub index: usize,
    /// Attempts consumed before giving up.
    pub attempts: u32,
}

/// Result of one generation request: a valid (possibly partial) layout plus
/// the items that did not fit.
#[derive(Debug, Clone, Serialize)]
pub struct PlacementOutcome {
    /// Collision-free layout of everything that was placed.
    pub layout: Layout,
    /// Items reported unplaced, in input order.
    pub shortfalls: Vec<Shortfall>,
}

impl PlacementOutcome {
    /// Whether every requested item was placed.
    pub fn is_complete(&self) -> bool {
        self.shortfalls.is_empty()
    }
}

/// Generate a layout for `furniture` inside `room`.
///
/// Items are placed independently in input order; earlier items have
/// priority and can block later ones. If `predictor` is present its
/// suggestion is tried on each item's first attempt; predictor absence or
/// failure falls back to pure randomized search. `rng` is caller-supplied so
/// generation is replayable under a fixed seed.
pub fn generate<R: Rng>(
    room: &Room,
    furniture: &[String],
    catalog: &FurnitureCatalog,
    predictor: Option<&dyn PlacementPredictor>,
    rng: &mut R,
) -> Result<PlacementOutcome, GenerateError> {
    room.validate()?;

    let requested: Vec<&str> = furniture
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .collect();
    if requested.is_empty() {
        return Err(GenerateError::EmptyFurnitureRequest);
    }

    let features: Vec<FeatureRow> = requested.iter().map(|_| feature_row(room)).collect();
    let hints = predictor::request_hints(predictor, &features);

    let mut layout = Layout::new();
    let mut shortfalls = Vec::new();

    for (index, name) in requested.iter().enumerate() {
        let spec = catalog.dimensions_for(name);
        let hint = hints.as_ref().map(|h| h[index]);

        match placement::place_item(room, &spec, hint, &mut layout, rng) {
            Some(attempts) => {
                debug!(furniture = spec.name.as_str(), index, attempts, "placed");
            }
            None => {
                warn!(
                    furniture = spec.name.as_str(),
                    index,
                    attempts = MAX_ATTEMPTS,
                    "could not place item without overlap, reporting shortfall"
                );
                shortfalls.push(Shortfall {
                    name: spec.name,
                    index,
                    attempts: MAX_ATTEMPTS,
                });
            }
        }
    }

    Ok(PlacementOutcome { layout, shortfalls })
}
