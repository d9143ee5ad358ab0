/// Ein- und ausklappbare Abschnitte des Inspector-Panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSection {
    /// Frustums, Performance
    General,
    /// Primitive-Picking und -Filter
    Primitives,
    /// Tile-Picking, Wireframe, LOD
    Terrain,
}

/// Sichtbarkeit von Drop-Down und Abschnitten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    /// Drop-Down des Inspectors geöffnet
    pub drop_down_visible: bool,
    /// Abschnitt "General" ausgeklappt
    pub general_visible: bool,
    /// Abschnitt "Primitives" ausgeklappt
    pub primitives_visible: bool,
    /// Abschnitt "Terrain" ausgeklappt
    pub terrain_visible: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelState {
    /// Standard: Drop-Down offen, nur "General" ausgeklappt.
    pub fn new() -> Self {
        Self {
            drop_down_visible: true,
            general_visible: true,
            primitives_visible: false,
            terrain_visible: false,
        }
    }

    /// Ob ein Abschnitt ausgeklappt ist.
    pub fn is_visible(&self, section: PanelSection) -> bool {
        match section {
            PanelSection::General => self.general_visible,
            PanelSection::Primitives => self.primitives_visible,
            PanelSection::Terrain => self.terrain_visible,
        }
    }

    /// Klappt einen Abschnitt um und gibt den neuen Zustand zurück.
    pub fn toggle(&mut self, section: PanelSection) -> bool {
        let visible = match section {
            PanelSection::General => &mut self.general_visible,
            PanelSection::Primitives => &mut self.primitives_visible,
            PanelSection::Terrain => &mut self.terrain_visible,
        };
        *visible = !*visible;
        *visible
    }

    /// Beschriftung des Ausklapp-Schalters ("-" offen, "+" zu).
    pub fn switch_text(&self, section: PanelSection) -> &'static str {
        if self.is_visible(section) {
            "-"
        } else {
            "+"
        }
    }
}
