//! Integrations-Flows über `AppController`: Intents rein, beobachtbarer Zustand raus.

mod common;
mod overlays;
mod picking;
mod selection;
mod tile_filter;
