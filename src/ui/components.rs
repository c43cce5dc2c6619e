//! Reusable UI components
//!
//! Small widgets shared by the library grid and the detail overlay.

use crate::constants::UNKNOWN;
use crate::theme;
use eframe::egui;

/// Display text for an optional metadata field
pub fn or_unknown(value: Option<&str>) -> &str {
    value.unwrap_or(UNKNOWN)
}

/// "Label: value" row in the detail overlay, with the placeholder for missing values
pub fn metadata_row(ui: &mut egui::Ui, label: &str, value: Option<&str>) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
        ui.label(
            egui::RichText::new(format!("{label}:"))
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_MUTED)
                .strong(),
        );
        let color = if value.is_some() {
            theme::TEXT_PRIMARY
        } else {
            theme::TEXT_DIM
        };
        ui.label(
            egui::RichText::new(or_unknown(value))
                .size(theme::FONT_LABEL)
                .color(color),
        );
    });
}

/// Pagination button. Returns true if clicked while enabled.
pub fn page_button(ui: &mut egui::Ui, label: &str, active: bool, enabled: bool) -> bool {
    let button = if active {
        theme::button_accent(label)
    } else {
        theme::button(label)
    };
    ui.add_enabled(enabled, button.min_size(egui::vec2(32.0, 28.0)))
        .clicked()
}

/// Paint a neutral cover stand-in with an icon
pub fn cover_placeholder(painter: &egui::Painter, rect: egui::Rect, loading: bool) {
    painter.rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_SURFACE);
    let icon = if loading {
        egui_phosphor::regular::HOURGLASS
    } else {
        egui_phosphor::regular::BOOK_OPEN
    };
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        icon,
        egui::FontId::proportional(rect.width().min(rect.height()) * 0.25),
        theme::TEXT_DIM,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_render_placeholder() {
        assert_eq!(or_unknown(None), "Unknown");
        assert_eq!(or_unknown(Some("Zine Collective")), "Zine Collective");
    }
}
