//! Zentrale Konfiguration für den Globe-Inspector.
//!
//! `InspectorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::ScreenRect;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Selektion ───────────────────────────────────────────────────────

/// Verzögerung, nach der ein frisch selektiertes Primitive wieder eingeblendet wird.
pub const FLASH_DELAY_MS: u64 = 50;

// ── Frustums ────────────────────────────────────────────────────────

/// Polling-Intervall für den Frustum-Statistik-Text.
pub const FRUSTUM_STATS_INTERVAL_MS: u64 = 100;

// ── Performance-Anzeige ─────────────────────────────────────────────

/// Position und Größe der Performance-Anzeige (x, y, Breite, Höhe).
pub const PERFORMANCE_DISPLAY_RECT: [f32; 4] = [220.0, 5.0, 100.0, 75.0];
/// Hintergrundfarbe der Performance-Anzeige (RGBA).
pub const PERFORMANCE_DISPLAY_BACKGROUND: [f32; 4] = [0.15, 0.15, 0.15, 0.75];
/// Font der Performance-Anzeige.
pub const PERFORMANCE_DISPLAY_FONT: &str = "12px arial,sans-serif";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Dateiname der Optionen-Datei.
pub const CONFIG_FILE_NAME: &str = "globe_inspector.toml";

/// Alle zur Laufzeit änderbaren Inspector-Optionen.
/// Wird als `globe_inspector.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectorOptions {
    // ── Timer ───────────────────────────────────────────────────
    /// Blink-Verzögerung nach Primitive-Selektion in Millisekunden
    pub flash_delay_ms: u64,
    /// Polling-Intervall der Frustum-Statistik in Millisekunden
    pub frustum_stats_interval_ms: u64,

    // ── Performance-Anzeige ─────────────────────────────────────
    /// Rechteck der Performance-Anzeige [x, y, Breite, Höhe]
    pub performance_display_rect: [f32; 4],
    /// Hintergrundfarbe der Performance-Anzeige
    pub performance_display_background: [f32; 4],
    /// Font der Performance-Anzeige
    #[serde(default = "default_performance_display_font")]
    pub performance_display_font: String,
}

impl Default for InspectorOptions {
    fn default() -> Self {
        Self {
            flash_delay_ms: FLASH_DELAY_MS,
            frustum_stats_interval_ms: FRUSTUM_STATS_INTERVAL_MS,
            performance_display_rect: PERFORMANCE_DISPLAY_RECT,
            performance_display_background: PERFORMANCE_DISPLAY_BACKGROUND,
            performance_display_font: default_performance_display_font(),
        }
    }
}

/// Serde-Default für `performance_display_font` (Abwärtskompatibilität).
fn default_performance_display_font() -> String {
    PERFORMANCE_DISPLAY_FONT.to_owned()
}

impl InspectorOptions {
    /// Liest Optionen aus einer TOML-Datei.
    ///
    /// `Ok(None)`, wenn die Datei fehlt; Parse-Fehler werden mit Pfad gemeldet.
    pub fn read_from_file(path: &Path) -> anyhow::Result<Option<Self>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Optionen nicht lesbar: {}", path.display()))
            }
        };
        let options = toml::from_str(&content)
            .with_context(|| format!("Optionen-Datei fehlerhaft: {}", path.display()))?;
        Ok(Some(options))
    }

    /// Wie [`InspectorOptions::read_from_file`], fällt aber immer auf Standardwerte zurück.
    pub fn load_from_file(path: &Path) -> Self {
        match Self::read_from_file(path) {
            Ok(Some(options)) => {
                log::info!("Optionen geladen aus: {}", path.display());
                options
            }
            Ok(None) => {
                log::info!("Keine Optionen-Datei unter {}, Standardwerte", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{:#}, verwende Standardwerte", e);
                Self::default()
            }
        }
    }

    /// Schreibt die Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::debug!("Optionen geschrieben: {}", path.display());
        Ok(())
    }

    /// Legt eine Optionen-Datei mit diesen Werten an, falls noch keine existiert.
    ///
    /// Gibt `true` zurück, wenn eine Datei geschrieben wurde.
    pub fn write_template_if_missing(&self, path: &Path) -> anyhow::Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        self.save_to_file(path)?;
        log::info!("Optionen-Vorlage angelegt: {}", path.display());
        Ok(true)
    }

    /// `globe_inspector.toml` im Verzeichnis der Binary (Fallback: Arbeitsverzeichnis).
    pub fn config_path() -> PathBuf {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        dir.join(CONFIG_FILE_NAME)
    }

    /// Blink-Verzögerung als `Duration`.
    pub fn flash_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.flash_delay_ms)
    }

    /// Frustum-Polling-Intervall als `Duration` (mindestens 1 ms).
    pub fn frustum_stats_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.frustum_stats_interval_ms.max(1))
    }

    /// Rechteck der Performance-Anzeige.
    pub fn performance_display_rectangle(&self) -> ScreenRect {
        let [x, y, width, height] = self.performance_display_rect;
        ScreenRect::new(x, y, width, height)
    }
}
