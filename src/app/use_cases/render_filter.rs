//! Use-Case: Render-Filter auf ein Primitive bzw. Isolation eines Tiles.
//!
//! Primitive-Filter: genau ein `CommandFilter` in der Szene, Ersetzen ist atomar.
//! Tile-Isolation: die Readiness-Tabelle wird auf ein einziges Tile im Bucket
//! seiner Readiness reduziert; dafür muss die LOD-Auswahl eingefroren sein.

use crate::app::state::{TileUpdateMode, TileUpdateToggle};
use crate::core::{CommandFilter, PrimitiveId, Scene, TileId};

/// Installiert bzw. entfernt den Primitive-Filter.
///
/// Aktiv nur mit `enabled` und vorhandenem Primitive, sonst ungefiltert.
pub fn apply_primitive_filter(scene: &mut dyn Scene, enabled: bool, primitive: Option<PrimitiveId>) {
    let filter = match (enabled, primitive) {
        (true, Some(id)) => CommandFilter::ByOwner(id),
        _ => CommandFilter::Unfiltered,
    };

    if scene.debug_command_filter() != filter {
        log::debug!("Command-Filter: {:?}", filter);
        scene.set_debug_command_filter(filter);
    }
}

/// Setzt "Suspend LOD update" über die gemeinsame Übergangsfunktion.
pub fn apply_suspend_updates(scene: &mut dyn Scene, mode: &mut TileUpdateMode, suspend: bool) {
    *mode = mode.apply(TileUpdateToggle::SuspendUpdates(suspend));
    scene.set_suspend_lod_update(mode.suspends_updates());
    log::debug!("Tile-Update-Modus: {:?}", mode);
}

/// Schaltet die Tile-Isolation.
///
/// Ausschalten setzt immer die LOD-Updates fort (und beendet damit auch den
/// Filter). Einschalten friert die Updates ein und schreibt die Readiness-Tabelle
/// neu. Gibt den Bucket des isolierten Tiles zurück.
pub fn apply_tile_isolation(
    scene: &mut dyn Scene,
    mode: &mut TileUpdateMode,
    enabled: bool,
    tile: Option<TileId>,
) -> Option<usize> {
    if !enabled {
        apply_suspend_updates(scene, mode, false);
        return None;
    }

    apply_suspend_updates(scene, mode, true);
    *mode = mode.apply(TileUpdateToggle::FilterTile(true));
    isolate_tile(scene, tile)
}

/// Leert die Readiness-Tabelle und trägt `tile` als einzigen Eintrag ein.
///
/// Ohne Tile (oder bei veralteter Referenz) bleibt die Tabelle leer: der Pass
/// rendert dann keine Tiles.
pub fn isolate_tile(scene: &mut dyn Scene, tile: Option<TileId>) -> Option<usize> {
    let bucket = tile.and_then(|id| match scene.tile(id) {
        Some(data) => Some(data.readiness()),
        None => {
            log::warn!("Tile {:?} nicht mehr in der Szene, Tabelle bleibt leer", id);
            None
        }
    });

    let table = scene.readiness_table_mut();
    table.clear();

    match (tile, bucket) {
        (Some(id), Some(bucket)) => {
            table.set_bucket(bucket, vec![id]);
            log::debug!("Tile {:?} isoliert in Bucket {}", id, bucket);
            Some(bucket)
        }
        _ => None,
    }
}
