//! Use-Case: Text der Frustum-Statistik.

use crate::core::FrustumStatistics;
use std::fmt::Write as _;

/// Formatiert die Frustum-Statistik für das Panel.
///
/// Ohne Statistik (Frustums aus oder noch kein Frame) ist der Text leer.
pub fn frustum_stats_text(statistics: Option<&FrustumStatistics>) -> String {
    let Some(statistics) = statistics else {
        return String::new();
    };

    let mut text = format!(
        "Total commands: {}\nCommands in frustums:",
        statistics.total_commands
    );
    for (label, count) in &statistics.commands_in_frustums {
        // Schreiben in einen String schlägt nicht fehl
        let _ = write!(text, "\n  {label}: {count}");
    }
    text
}
