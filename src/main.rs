//! Globe-Inspector (Headless-Demo).
//!
//! Baut eine In-Memory-Szene, spielt eine kurze Pick-/Filter-Sitzung über den
//! Controller ab und gibt den Endzustand aus (`--json` für maschinenlesbar).

use glam::{DMat4, DVec3};
use globe_inspector::{
    AppController, AppIntent, AppState, Cartographic, Extent, InspectorOptions, MemoryScene,
    ScreenRect, Tile, TileId, TileImagery,
};
use serde::Serialize;
use std::time::{Duration, Instant};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Globe-Inspector v{} startet...", env!("CARGO_PKG_VERSION"));

    let json_output = std::env::args().skip(1).any(|arg| arg == "--json");

    let config_path = InspectorOptions::config_path();
    let options = InspectorOptions::load_from_file(&config_path);
    if let Err(e) = options.write_template_if_missing(&config_path) {
        log::warn!("{:#}", e);
    }

    let scene = build_demo_scene();
    let tile_target = scene
        .screen_position_of(Cartographic::new(0.3, 0.2))
        .ok_or_else(|| anyhow::anyhow!("Demo-Szene ohne sichtbaren Globus"))?;

    let start = Instant::now();
    let mut state = AppState::with_clock(Box::new(scene), options, start)?;
    let mut controller = AppController::new();

    let session = [
        AppIntent::ShowFrustumsChanged { enabled: true },
        AppIntent::PrimitiveBoundingSphereChanged { enabled: true },
        AppIntent::FilterPrimitiveChanged { enabled: true },
        AppIntent::PickPrimitiveRequested,
        AppIntent::PointerPressed {
            screen_pos: glam::Vec2::new(120.0, 120.0),
        },
        AppIntent::TileBoundingSphereChanged { enabled: true },
        AppIntent::PickTileRequested,
        AppIntent::PointerPressed {
            screen_pos: tile_target,
        },
        AppIntent::FilterTileChanged { enabled: true },
    ];

    let mut now = start;
    for intent in session {
        controller.handle_intent(&mut state, intent)?;
        now += Duration::from_millis(60);
        controller.tick(&mut state, now)?;
    }

    let summary = SessionSummary::from_state(&state);
    if json_output {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        log::info!("Selektiertes Primitive: {:?}", summary.selected_primitive);
        log::info!("Selektiertes Tile: {:?}", summary.selected_tile);
        log::info!("Tile-Text:\n{}", summary.tile_text);
        log::info!("Frustum-Statistik:\n{}", summary.frustum_stat_text);
        log::info!("Gerenderte Tiles: {:?}", summary.rendered_tiles);
        log::info!("Ausgeführte Commands: {}", summary.executed_commands);
    }

    Ok(())
}

/// Demo-Szene: drei Modelle und ein 4×2-Raster von Tiles.
fn build_demo_scene() -> MemoryScene {
    let mut scene = MemoryScene::new();
    for i in 0..3 {
        scene.add_model(
            ScreenRect::new(100.0 + i as f32 * 150.0, 100.0, 80.0, 80.0),
            DMat4::from_translation(DVec3::new(i as f64 * 10.0, 0.0, 0.0)),
        );
    }

    let step = 0.25;
    for (index, (column, row)) in (0..4u32).flat_map(|c| (0..2u32).map(move |r| (c, r))).enumerate() {
        let west = f64::from(column) * step;
        let south = f64::from(row) * step;
        scene.add_tile(Tile {
            id: TileId(100 + index as u64),
            level: 5,
            x: column,
            y: row,
            extent: Extent::new(west, south, west + step, south + step),
            imagery: vec![
                TileImagery {
                    ready: true,
                    layer_alpha: 1.0,
                };
                index % 3
            ],
        });
    }
    scene
}

/// Endzustand der Demo-Sitzung.
#[derive(Debug, Serialize)]
struct SessionSummary {
    selected_primitive: Option<u64>,
    selected_tile: Option<u64>,
    tile_text: String,
    frustum_stat_text: String,
    suspend_updates: bool,
    filter_tile: bool,
    rendered_tiles: Vec<u64>,
    executed_commands: usize,
}

impl SessionSummary {
    fn from_state(state: &AppState) -> Self {
        Self {
            selected_primitive: state.selection.primitive().map(|id| id.0),
            selected_tile: state.selection.tile().map(|id| id.0),
            tile_text: state.selection.tile_text().to_owned(),
            frustum_stat_text: state.overlays.frustum_stat_text.clone(),
            suspend_updates: state.flags.suspend_updates(),
            filter_tile: state.flags.filter_tile(),
            rendered_tiles: state.scene.readiness_table().tiles().map(|id| id.0).collect(),
            executed_commands: state.command_log.len(),
        }
    }
}
