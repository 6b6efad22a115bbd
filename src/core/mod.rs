//! Domänenkern: Reisedaten, Reorder-Engine und Kartenprojektion.

pub mod itinerary;
pub mod projector;
pub mod reorder;

pub use itinerary::{Activity, Category, Day, GeoPoint, Itinerary};
pub use projector::MapCamera;
pub use reorder::{array_move, DragSession, ReorderEngine};
