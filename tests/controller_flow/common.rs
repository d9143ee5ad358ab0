use globe_inspector::{
    AppController, AppIntent, AppState, Cartographic, Extent, InspectorOptions, MemoryScene,
    PrimitiveId, ScreenRect, Tile, TileId, TileImagery,
};
use glam::{DMat4, DVec3, Vec2};
use std::time::{Duration, Instant};

/// Testaufbau: zwei Modelle, drei Tiles und ein Controller mit fester Startzeit.
pub struct Inspector {
    pub controller: AppController,
    pub state: AppState,
    pub start: Instant,
    pub model_a: PrimitiveId,
    pub model_b: PrimitiveId,
    pub model_a_pos: Vec2,
    pub model_b_pos: Vec2,
    /// Screen-Punkt über Tile 1 (Bucket 2) und Tile 2 (Bucket 0)
    pub overlap_pos: Vec2,
    /// Screen-Punkt nur über Tile 3
    pub tile_three_pos: Vec2,
    /// Screen-Punkt auf dem Globus ohne Tile
    pub empty_globe_pos: Vec2,
    /// Screen-Punkt außerhalb des Globus
    pub off_globe_pos: Vec2,
}

pub fn tile(id: u64, extent: Extent, readiness: usize) -> Tile {
    Tile {
        id: TileId(id),
        level: 6,
        x: id as u32 * 2,
        y: id as u32 + 1,
        extent,
        imagery: vec![
            TileImagery {
                ready: true,
                layer_alpha: 1.0,
            };
            readiness
        ],
    }
}

impl Inspector {
    pub fn new() -> Self {
        let mut scene = MemoryScene::new();
        scene.set_globe_viewport(Some(ScreenRect::new(200.0, 0.0, 1080.0, 720.0)));

        let model_a = scene.add_model(
            ScreenRect::new(0.0, 0.0, 80.0, 80.0),
            DMat4::from_translation(DVec3::new(1.0, 2.0, 3.0)),
        );
        let model_b = scene.add_model(
            ScreenRect::new(0.0, 100.0, 80.0, 80.0),
            DMat4::from_translation(DVec3::new(-1.0, 0.0, 0.0)),
        );

        let wide = Extent::new(-0.5, -0.5, 0.5, 0.5);
        scene.add_tile(tile(1, wide, 2));
        scene.add_tile(tile(2, wide, 0));
        scene.add_tile(tile(3, Extent::new(1.0, 0.0, 1.5, 0.5), 1));

        let overlap_pos = globe_pos(&scene, 0.1, 0.1);
        let tile_three_pos = globe_pos(&scene, 1.2, 0.2);
        let empty_globe_pos = globe_pos(&scene, -2.0, -1.0);

        let start = Instant::now();
        let state = AppState::with_clock(Box::new(scene), InspectorOptions::default(), start)
            .expect("Szene mit Globus");

        Self {
            controller: AppController::new(),
            state,
            start,
            model_a,
            model_b,
            model_a_pos: Vec2::new(40.0, 40.0),
            model_b_pos: Vec2::new(40.0, 140.0),
            overlap_pos,
            tile_three_pos,
            empty_globe_pos,
            off_globe_pos: Vec2::new(100.0, 600.0),
        }
    }

    pub fn send(&mut self, intent: AppIntent) {
        self.controller
            .handle_intent(&mut self.state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    pub fn click(&mut self, screen_pos: Vec2) {
        self.send(AppIntent::PointerPressed { screen_pos });
    }

    pub fn tick_at(&mut self, millis: u64) {
        self.controller
            .tick(&mut self.state, self.start + Duration::from_millis(millis))
            .expect("Tick sollte ohne Fehler durchlaufen");
    }

    pub fn pick_primitive_at(&mut self, screen_pos: Vec2) {
        self.send(AppIntent::PickPrimitiveRequested);
        self.click(screen_pos);
    }

    pub fn pick_tile_at(&mut self, screen_pos: Vec2) {
        self.send(AppIntent::PickTileRequested);
        self.click(screen_pos);
    }
}

fn globe_pos(scene: &MemoryScene, longitude: f64, latitude: f64) -> Vec2 {
    scene
        .screen_position_of(Cartographic::new(longitude, latitude))
        .expect("Globus sichtbar")
}
