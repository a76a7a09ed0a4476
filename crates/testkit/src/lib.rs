#![warn(missing_docs)]
//! Deterministic testing surfaces: predictor doubles, seeded RNGs, a sample
//! mesh asset, and a JSONL snapshot sink for placement outcomes.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use glam::{Vec2, Vec3};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

use roomforge_core::PlacedItem;
use roomforge_engine::{FeatureRow, Hint, PlacementOutcome, PlacementPredictor};
use roomforge_mesh::{box_primitive, TriMesh};

/// A seeded RNG for replayable placement tests.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Predictor double that returns a fixed hint list regardless of features.
pub struct FixedPredictor {
    hints: Vec<Hint>,
}

impl FixedPredictor {
    /// Always suggest `hints`, one per furniture item.
    pub fn new(hints: Vec<Hint>) -> Self {
        Self { hints }
    }

    /// Suggest the same normalized position for every item.
    pub fn uniform(hint: Hint, count: usize) -> Self {
        Self {
            hints: vec![hint; count],
        }
    }
}

impl PlacementPredictor for FixedPredictor {
    fn predict(&self, features: &[FeatureRow]) -> Result<Vec<Hint>> {
        debug_assert_eq!(features.len(), self.hints.len());
        Ok(self.hints.clone())
    }
}

/// Predictor double that always errors, for fallback-path tests.
pub struct FailingPredictor;

impl PlacementPredictor for FailingPredictor {
    fn predict(&self, _features: &[FeatureRow]) -> Result<Vec<Hint>> {
        anyhow::bail!("inference runtime unavailable")
    }
}

/// A deliberately oversized, off-origin sample asset for scaling tests.
pub fn oversized_asset() -> TriMesh {
    box_primitive(Vec3::new(40.0, 25.0, 12.0), Vec2::new(-7.0, 13.0))
}

/// One placed item as captured in snapshot logs.
#[derive(Debug, Serialize)]
struct PlacementRecord<'a> {
    name: &'a str,
    x: f32,
    y: f32,
    width: f32,
    depth: f32,
}

impl<'a> From<&'a PlacedItem> for PlacementRecord<'a> {
    fn from(item: &'a PlacedItem) -> Self {
        Self {
            name: &item.name,
            x: item.x,
            y: item.y,
            width: item.width,
            depth: item.depth,
        }
    }
}

/// A sink that writes placement outcomes as newline-delimited JSON.
pub struct OutcomeSink {
    file: File,
}

impl OutcomeSink {
    /// Create a new sink at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self { file })
    }

    /// Append every placed item and shortfall of `outcome` to the log.
    pub fn write(&mut self, outcome: &PlacementOutcome) -> Result<()> {
        for item in outcome.layout.items() {
            let line = serde_json::to_string(&PlacementRecord::from(item))?;
            self.file.write_all(line.as_bytes())?;
            self.file.write_all(b"\n")?;
        }
        for shortfall in &outcome.shortfalls {
            let line = serde_json::to_string(shortfall)?;
            self.file.write_all(line.as_bytes())?;
            self.file.write_all(b"\n")?;
        }
        Ok(())
    }
}
