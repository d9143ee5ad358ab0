//! Use-Cases der Application-Layer-Orchestrierung.

pub mod frustum_stats;
pub mod picking;
pub mod render_filter;
pub mod selection;
