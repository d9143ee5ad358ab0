use crate::core::{PrimitiveId, TileId};

/// Änderungsbenachrichtigung eines Selektions-Slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// Primitive-Slot hat einen neuen Wert
    Primitive(Option<PrimitiveId>),
    /// Tile-Slot hat einen neuen Wert
    Tile(Option<TileId>),
}

/// Abgeleiteter Filterzustand eines Selektions-Slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    /// Kein Filter aktiv
    None,
    /// Renderer zeichnet nur Commands dieses Primitives
    ByPrimitive(PrimitiveId),
    /// Readiness-Tabelle enthält nur dieses Tile im angegebenen Bucket
    ByTile {
        /// Isoliertes Tile
        tile: TileId,
        /// Readiness-Bucket, in dem es steht
        bucket: usize,
    },
}

/// Selektierte Primitive/Tile-Slots samt zugehöriger Dekorations-Handles.
///
/// Felder sind privat: Mutationen laufen ausschließlich über die Use-Cases in
/// `use_cases::selection`, die Dekorationen vor dem Überschreiben abräumen.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    primitive: Option<PrimitiveId>,
    reference_frame: Option<PrimitiveId>,
    tile: Option<TileId>,
    tile_text: String,
    changes: Vec<SelectionChange>,
}

impl SelectionStore {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuell selektiertes Primitive.
    pub fn primitive(&self) -> Option<PrimitiveId> {
        self.primitive
    }

    /// Aktuell selektiertes Tile.
    pub fn tile(&self) -> Option<TileId> {
        self.tile
    }

    /// Beobachtbar: ein Primitive ist selektiert.
    pub fn has_picked_primitive(&self) -> bool {
        self.primitive.is_some()
    }

    /// Beobachtbar: ein Tile ist selektiert.
    pub fn has_picked_tile(&self) -> bool {
        self.tile.is_some()
    }

    /// Anzeige-Text des selektierten Tiles (Level, X/Y, Ecken).
    pub fn tile_text(&self) -> &str {
        &self.tile_text
    }

    /// Achsenkreuz-Primitive, das dem selektierten Primitive gehört.
    pub fn reference_frame(&self) -> Option<PrimitiveId> {
        self.reference_frame
    }

    /// Noch nicht abgeholte Änderungen.
    pub fn pending_changes(&self) -> &[SelectionChange] {
        &self.changes
    }

    /// Holt alle Änderungen seit dem letzten Aufruf ab.
    pub fn drain_changes(&mut self) -> Vec<SelectionChange> {
        std::mem::take(&mut self.changes)
    }

    pub(crate) fn replace_primitive(&mut self, primitive: Option<PrimitiveId>) -> Option<PrimitiveId> {
        let previous = std::mem::replace(&mut self.primitive, primitive);
        self.changes.push(SelectionChange::Primitive(primitive));
        previous
    }

    pub(crate) fn attach_reference_frame(&mut self, frame: PrimitiveId) {
        self.reference_frame = Some(frame);
    }

    pub(crate) fn take_reference_frame(&mut self) -> Option<PrimitiveId> {
        self.reference_frame.take()
    }

    pub(crate) fn replace_tile(&mut self, tile: Option<TileId>) -> Option<TileId> {
        let previous = std::mem::replace(&mut self.tile, tile);
        if previous != tile {
            self.changes.push(SelectionChange::Tile(tile));
        }
        previous
    }

    pub(crate) fn set_tile_text(&mut self, text: String) {
        self.tile_text = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacing_slots_records_changes_in_order() {
        let mut store = SelectionStore::new();
        store.replace_primitive(Some(PrimitiveId(1)));
        store.replace_tile(Some(TileId(4)));
        store.replace_tile(Some(TileId(4)));

        assert_eq!(
            store.drain_changes(),
            vec![
                SelectionChange::Primitive(Some(PrimitiveId(1))),
                SelectionChange::Tile(Some(TileId(4))),
            ]
        );
        assert!(store.pending_changes().is_empty());
    }

    #[test]
    fn presence_flags_follow_slots() {
        let mut store = SelectionStore::new();
        assert!(!store.has_picked_primitive());
        assert!(!store.has_picked_tile());

        store.replace_tile(Some(TileId(2)));
        assert!(store.has_picked_tile());

        store.replace_tile(None);
        assert!(!store.has_picked_tile());
    }
}
