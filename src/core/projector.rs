//! Schematische Kartenprojektion für die Trip-Übersicht.

use glam::Vec2;

use super::GeoPoint;

/// Kamera der schematischen Karte: Zentrum plus kosmetischer Zoom-Level.
///
/// Die Projektion ist bewusst linear (äquirektangular-flach) mit fester
/// Winkelspanne — keine echte Geo-Referenzierung. Der Zoom-Level verändert
/// die Spanne nicht; er wird nur angezeigt (beobachtetes Verhalten der
/// Vorlage, als Vereinfachung beibehalten).
#[derive(Debug, Clone, PartialEq)]
pub struct MapCamera {
    /// Kartenzentrum in Geo-Koordinaten
    pub center: GeoPoint,
    /// Kosmetischer Zoom-Level, geklemmt auf [ZOOM_MIN, ZOOM_MAX]
    pub zoom: i32,
}

impl MapCamera {
    /// Feste Winkelspanne der Kartenfläche in Grad (beide Achsen)
    pub const VIEW_SPAN_DEG: f64 = 0.2;
    /// Rand in Oberflächen-Pixeln, in den geklemmt wird
    pub const MARGIN: f32 = 20.0;
    /// Minimaler Zoom-Level
    pub const ZOOM_MIN: i32 = 8;
    /// Maximaler Zoom-Level
    pub const ZOOM_MAX: i32 = 15;
    /// Standard-Zoom-Level
    pub const ZOOM_DEFAULT: i32 = 11;

    /// Erstellt eine Kamera zentriert auf Delhi (Standard der Beispieldaten)
    pub fn new() -> Self {
        Self {
            center: GeoPoint::new(28.6139, 77.209),
            zoom: Self::ZOOM_DEFAULT,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: GeoPoint) {
        self.center = target;
    }

    /// Erhöht den Zoom-Level um eine Stufe (geklemmt)
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Verringert den Zoom-Level um eine Stufe (geklemmt)
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - 1).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Projiziert einen Geo-Punkt auf die Zeichenfläche.
    ///
    /// Das Ergebnis wird auf `[MARGIN, dim - MARGIN]` geklemmt, damit jede
    /// Aktivität einen sichtbaren, klickbaren Marker behält — auch wenn ihr
    /// Punkt weit außerhalb der aktuellen Spanne liegt. Für solche Punkte
    /// ist die Position dann nicht mehr lagetreu.
    pub fn project(&self, point: GeoPoint, surface: Vec2) -> Vec2 {
        let half_span = Self::VIEW_SPAN_DEG / 2.0;

        let x = ((point.lng - (self.center.lng - half_span)) / Self::VIEW_SPAN_DEG) as f32
            * surface.x;
        // Breitengrad wächst nach Norden, die Oberfläche nach unten
        let y = (((self.center.lat + half_span) - point.lat) / Self::VIEW_SPAN_DEG) as f32
            * surface.y;

        Vec2::new(
            x.clamp(Self::MARGIN, surface.x - Self::MARGIN),
            y.clamp(Self::MARGIN, surface.y - Self::MARGIN),
        )
    }

    /// Zentroid der Bounding-Box einer Punktmenge.
    ///
    /// `None` für die leere Menge — der Aufrufer muss das abfangen, statt
    /// ein irreführendes Standard-Zentrum angezeigt zu bekommen.
    pub fn fit_bounds(points: &[GeoPoint]) -> Option<GeoPoint> {
        let first = points.first()?;

        let mut min_lat = first.lat;
        let mut max_lat = first.lat;
        let mut min_lng = first.lng;
        let mut max_lng = first.lng;

        for p in &points[1..] {
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
            min_lng = min_lng.min(p.lng);
            max_lng = max_lng.max(p.lng);
        }

        Some(GeoPoint::new(
            (min_lat + max_lat) / 2.0,
            (min_lng + max_lng) / 2.0,
        ))
    }
}

impl Default for MapCamera {
    fn default() -> Self {
        Self::new()
    }
}
