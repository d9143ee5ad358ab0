//! Frustum-Statistik des Renderers.

use indexmap::IndexMap;

/// Anzahl Draw-Commands pro Frustum im letzten Frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrustumStatistics {
    /// Gesamtzahl ausgeführter Commands
    pub total_commands: usize,
    /// Frustum-Bezeichnung → Command-Anzahl, in Reihenfolge des Renderers
    pub commands_in_frustums: IndexMap<String, usize>,
}

impl FrustumStatistics {
    /// Erstellt eine leere Statistik.
    pub fn new(total_commands: usize) -> Self {
        Self {
            total_commands,
            commands_in_frustums: IndexMap::new(),
        }
    }

    /// Fügt einen Frustum-Eintrag hinzu (Builder-Stil).
    pub fn with_frustum(mut self, label: impl Into<String>, commands: usize) -> Self {
        self.commands_in_frustums.insert(label.into(), commands);
        self
    }
}
