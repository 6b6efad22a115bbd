//! Feature-Handler: führen Commands auf dem AppState aus.

pub mod itinerary;
pub mod reorder;
pub mod selection;
pub mod view;
