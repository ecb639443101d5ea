//! rosterview — interactive terminal client for an activity signup service.
//!
//! Provides:
//! - `model` — activity records and the roster snapshot (wire decode)
//! - `client` — HTTP access to the signup service, plus the `ActivityApi` seam
//! - `store` — snapshot store (single source of truth, wholesale refresh)
//! - `view` — pure derivation: filter/search/sort into the displayed list
//! - `actions` — mutation controller (signup / unregister, single-flight)
//! - `tui` — terminal UI (ratatui/crossterm): state, input, rendering

pub mod actions;
pub mod client;
pub mod model;
pub mod store;
pub mod tui;
pub mod view;
