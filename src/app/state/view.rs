use crate::core::MapCamera;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Kamera der schematischen Karte
    pub camera: MapCamera,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: MapCamera::new(),
        }
    }
}
