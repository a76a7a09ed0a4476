//! Predictive-model boundary.
//!
//! The engine never talks to an inference runtime directly. It hands a fixed
//! shape of feature rows to a [`PlacementPredictor`] and gets back one
//! normalized `(x, y)` suggestion per row. Anything that goes wrong on the
//! other side of this trait degrades to pure randomized search.

use roomforge_core::Room;
use tracing::warn;

/// Number of slots in a feature row. The last four are reserved and
/// zero-filled.
pub const FEATURE_LEN: usize = 7;

/// One feature row handed to the predictor per furniture item.
pub type FeatureRow = [f32; FEATURE_LEN];

/// Normalized `(x, y)` suggestion for one furniture item. Values are
/// expected but not guaranteed to lie in `[0, 1]`; the engine clamps.
pub type Hint = [f32; 2];

/// Normalization divisors for room width, length, and height.
const ROOM_FEATURE_SCALE: [f32; 3] = [20.0, 25.0, 10.0];

/// Build the feature row for one furniture item in `room`.
pub fn feature_row(room: &Room) -> FeatureRow {
    let mut row = [0.0; FEATURE_LEN];
    row[0] = room.width / ROOM_FEATURE_SCALE[0];
    row[1] = room.length / ROOM_FEATURE_SCALE[1];
    row[2] = room.height / ROOM_FEATURE_SCALE[2];
    row
}

/// Narrow inference contract for initial-position suggestions.
///
/// Implementations wrap whatever model runtime the host uses; the engine only
/// requires features-in, normalized-coordinates-out. A handle is constructed
/// once, never mutated by the engine, and safely shareable across calls.
pub trait PlacementPredictor {
    /// Predict one normalized `(x, y)` pair per input row.
    fn predict(&self, features: &[FeatureRow]) -> anyhow::Result<Vec<Hint>>;
}

/// Ask `predictor` for hints, absorbing every failure mode into `None`.
pub(crate) fn request_hints(
    predictor: Option<&dyn PlacementPredictor>,
    features: &[FeatureRow],
) -> Option<Vec<Hint>> {
    let predictor = predictor?;
    match predictor.predict(features) {
        Ok(hints) => {
            if hints.len() != features.len() {
                warn!(
                    expected = features.len(),
                    got = hints.len(),
                    "predictor returned misaligned hints, falling back to random search"
                );
                return None;
            }
            Some(hints)
        }
        Err(err) => {
            warn!("predictor failed: {err:#}. Falling back to random search");
            None
        }
    }
}
