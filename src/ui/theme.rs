//! Farbpalette und die totale Kategorie→Farbe-Zuordnung.

use crate::core::Category;

/// Akzentfarbe (Selektion, Day-Header)
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(139, 92, 246);
/// Markerfarbe auf der Karte (unselektiert)
pub const MARKER: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
/// Farbe für das Like-Flag
pub const LIKE: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);
/// Farbe für das Bookmark-Flag
pub const BOOKMARK: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
/// Kartenhintergrund
pub const MAP_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(240, 249, 255);
/// Gitterlinien der Karte
pub const MAP_GRID: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);
/// Kartenhintergrund der Aktivitätskarten
pub const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(255, 255, 255);
/// Rahmenfarbe der Aktivitätskarten
pub const CARD_STROKE: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);

/// Anzeigefarbe einer Kategorie.
///
/// Totale Zuordnung über die geschlossene Kategorie-Menge; `Other` ist der
/// definierte Fallback für unbekannte Kategorien aus der Datenquelle.
pub fn category_color(category: Category) -> egui::Color32 {
    match category {
        Category::Monument => egui::Color32::from_rgb(217, 119, 6),
        Category::Historical => egui::Color32::from_rgb(185, 28, 28),
        Category::UnescoSite => egui::Color32::from_rgb(13, 148, 136),
        Category::Religious => egui::Color32::from_rgb(124, 58, 237),
        Category::Tomb => egui::Color32::from_rgb(87, 83, 78),
        Category::Temple => egui::Color32::from_rgb(234, 88, 12),
        Category::Other => egui::Color32::from_rgb(107, 114, 128),
    }
}
