//! UI-Komponenten: Header, Tagesliste mit Drag&Drop, Karte und Status-Bar.

pub mod header;
pub mod itinerary_panel;
pub mod map_panel;
pub mod status;
pub mod theme;

pub use header::render_header;
pub use itinerary_panel::render_itinerary_panel;
pub use map_panel::render_map_panel;
pub use status::render_status_bar;
