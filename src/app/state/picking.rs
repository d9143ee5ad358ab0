/// Eingabemodus des Canvas: nächster Klick wird als Pick interpretiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickMode {
    /// Kein Pick aktiv, Klicks steuern die Kamera
    #[default]
    Idle,
    /// Nächster Klick selektiert ein Primitive
    PickingPrimitive,
    /// Nächster Klick selektiert ein Terrain-Tile
    PickingTile,
}

/// Verwaltet den einen Pointer-Listener für Pick-Modi.
///
/// Es gibt genau einen Listener-Slot: ein scharf geschalteter Modus ersetzt den
/// anderen, doppeltes Registrieren ist damit ausgeschlossen.
#[derive(Debug, Clone, Default)]
pub struct PickController {
    listener: PickMode,
}

impl PickController {
    /// Erstellt einen Controller ohne aktiven Pick-Modus.
    pub fn new() -> Self {
        Self {
            listener: PickMode::Idle,
        }
    }

    /// Aktuell registrierter Listener-Modus.
    pub fn armed_mode(&self) -> PickMode {
        self.listener
    }

    /// Prüft, ob genau dieser Modus scharf ist.
    pub fn is_armed(&self, mode: PickMode) -> bool {
        mode != PickMode::Idle && self.listener == mode
    }

    /// Beobachtbares Flag für den Pick-Primitive-Button.
    pub fn pick_primitive_active(&self) -> bool {
        self.is_armed(PickMode::PickingPrimitive)
    }

    /// Beobachtbares Flag für den Pick-Tile-Button.
    pub fn pick_tile_active(&self) -> bool {
        self.is_armed(PickMode::PickingTile)
    }

    /// Schaltet `mode` scharf.
    ///
    /// Gibt den verdrängten anderen Modus zurück, dessen Listener dabei entfernt
    /// wurde. `Idle` entspricht dem Deaktivieren aller Modi.
    pub fn arm(&mut self, mode: PickMode) -> Option<PickMode> {
        let previous = self.listener;
        self.listener = mode;
        (previous != PickMode::Idle && previous != mode).then_some(previous)
    }

    /// Deaktiviert `mode`, falls aktiv. Idempotent.
    pub fn disarm(&mut self, mode: PickMode) -> bool {
        if self.is_armed(mode) {
            self.listener = PickMode::Idle;
            true
        } else {
            false
        }
    }

    /// Verbraucht den One-Shot-Listener für `mode` (Auto-Disarm nach dem ersten Klick).
    pub fn take_listener(&mut self, mode: PickMode) -> bool {
        self.disarm(mode)
    }
}
