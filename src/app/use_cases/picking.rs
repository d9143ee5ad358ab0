//! Use-Case: Pick-Auflösung für Primitives und Terrain-Tiles.

use crate::core::{Cartographic, PrimitiveId, Scene, TileId};
use glam::Vec2;

/// Ergebnis einer Tile-Pick-Auflösung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilePick {
    /// Klick hat das Ellipsoid verfehlt, Selektion bleibt unverändert
    Missed,
    /// Ellipsoid getroffen; `None`, wenn kein gerendertes Tile den Punkt enthält
    Resolved(Option<TileId>),
}

/// Sucht das oberste Primitive unter der Screen-Position.
pub fn resolve_primitive(scene: &dyn Scene, screen_pos: Vec2) -> Option<PrimitiveId> {
    let picked = scene.pick(screen_pos);
    log::debug!("Primitive-Pick bei {:?}: {:?}", screen_pos, picked);
    picked
}

/// Projiziert die Screen-Position aufs Ellipsoid und sucht das gerenderte Tile.
pub fn resolve_tile(scene: &dyn Scene, screen_pos: Vec2) -> TilePick {
    let Some(cartographic) = scene
        .pick_ellipsoid(screen_pos)
        .and_then(|cartesian| scene.cartesian_to_cartographic(cartesian))
    else {
        log::debug!("Tile-Pick bei {:?}: Ellipsoid verfehlt", screen_pos);
        return TilePick::Missed;
    };

    let tile = find_tile_containing(scene, cartographic);
    log::debug!(
        "Tile-Pick bei ({:.5}, {:.5}) rad: {:?}",
        cartographic.longitude,
        cartographic.latitude,
        tile
    );
    TilePick::Resolved(tile)
}

/// Erstes Tile der Readiness-Tabelle, dessen Ausdehnung die Koordinate enthält.
///
/// Gescannt wird in aufsteigender Bucket-Reihenfolge und innerhalb eines Buckets
/// in Listenreihenfolge. Tiles, die die Szene nicht mehr kennt, werden übersprungen.
pub fn find_tile_containing(scene: &dyn Scene, position: Cartographic) -> Option<TileId> {
    scene
        .readiness_table()
        .tiles()
        .find(|id| {
            scene
                .tile(*id)
                .is_some_and(|tile| tile.extent.contains(position))
        })
}
