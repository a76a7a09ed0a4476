//! roomforge - deterministic furniture-layout generation
//!
//! Headless CLI driver: loads a plan, generates a collision-free layout, and
//! emits drawable records as JSON for an external rendering surface.

mod config;

use anyhow::Result;
use config::PlanConfig;
use serde::Serialize;
use std::{env, fs, path::PathBuf};
use tracing::{info, warn};

use roomforge_catalog::{FurnitureCatalog, RoomKind};
use roomforge_core::{scoped_rng, Rect, Room};
use roomforge_engine::{generate, Shortfall};
use roomforge_scene::{plan_shapes, room_outline, room_wireframe, scene_nodes, NoMeshes};

/// 2D plan document handed to a plan renderer.
#[derive(Serialize)]
struct PlanDocument {
    room: Room,
    outline: Rect,
    shapes: Vec<roomforge_scene::PlanShape>,
    shortfalls: Vec<Shortfall>,
}

/// 3D scene document handed to a scene renderer.
#[derive(Serialize)]
struct SceneDocument {
    room: Room,
    wireframe: Vec<[glam::Vec3; 2]>,
    nodes: Vec<roomforge_scene::SceneNode>,
    shortfalls: Vec<Shortfall>,
}

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting roomforge v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1));

    let mut plan = match cli.config.as_deref() {
        Some(path) => PlanConfig::load_from_path(path),
        None => PlanConfig::load(),
    };
    if let Some(seed) = cli.seed {
        plan.seed = seed;
    }
    if let Some(kind) = cli.room_kind {
        plan.furniture = kind
            .suggested_furniture()
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    let catalog = match plan.catalog.as_deref() {
        Some(path) => FurnitureCatalog::load_lenient(path),
        None => FurnitureCatalog::built_in(),
    };

    let room = Room::from(plan.room);
    let mut rng = scoped_rng(plan.seed, 0);
    // The CLI has no inference runtime attached; generation runs on pure
    // randomized search. Hosts with a model pass a PlacementPredictor here.
    let outcome = generate(&room, &plan.furniture, &catalog, None, &mut rng)?;

    for shortfall in &outcome.shortfalls {
        warn!(
            furniture = shortfall.name.as_str(),
            index = shortfall.index,
            "item did not fit, omitted from layout"
        );
    }
    info!(
        placed = outcome.layout.len(),
        unplaced = outcome.shortfalls.len(),
        "layout generated"
    );

    let json = if cli.scene {
        let doc = SceneDocument {
            room,
            wireframe: room_wireframe(&room),
            nodes: scene_nodes(&outcome.layout, &NoMeshes).collect(),
            shortfalls: outcome.shortfalls,
        };
        serde_json::to_string_pretty(&doc)?
    } else {
        let doc = PlanDocument {
            room,
            outline: room_outline(&room),
            shapes: plan_shapes(&outcome.layout).collect(),
            shortfalls: outcome.shortfalls,
        };
        serde_json::to_string_pretty(&doc)?
    };

    match cli.out {
        Some(path) => {
            fs::write(&path, json)?;
            info!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

struct CliOptions {
    config: Option<PathBuf>,
    seed: Option<u64>,
    room_kind: Option<RoomKind>,
    scene: bool,
    out: Option<PathBuf>,
}

impl CliOptions {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut opts = CliOptions {
            config: None,
            seed: None,
            room_kind: None,
            scene: false,
            out: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    opts.config = args.next().map(PathBuf::from);
                }
                "--seed" => {
                    opts.seed = args.next().and_then(|v| v.parse().ok());
                }
                "--room-kind" => {
                    opts.room_kind = args.next().and_then(|v| {
                        let kind = RoomKind::parse(&v);
                        if kind.is_none() {
                            warn!("unknown room kind {v:?}, keeping configured furniture");
                        }
                        kind
                    });
                }
                "--scene" => {
                    opts.scene = true;
                }
                "--out" => {
                    opts.out = args.next().map(PathBuf::from);
                }
                other => {
                    warn!("ignoring unknown argument {other:?}");
                }
            }
        }

        opts
    }
}
