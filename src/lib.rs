//! Itinerary Planner Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod data;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, SelectionState, UiState, ViewState};
pub use core::{array_move, Activity, Category, Day, GeoPoint, Itinerary, MapCamera, ReorderEngine};
pub use data::sample_itinerary;
