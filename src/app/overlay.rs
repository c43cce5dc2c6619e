//! Detail overlay: backdrop, record details and the prev/next bar

use super::library::paint_fitted;
use super::App;
use crate::theme;
use crate::types::Direction;
use crate::ui::components::{cover_placeholder, metadata_row};
use eframe::egui;
use egui_phosphor::regular as icons;

enum Step {
    Next,
    Prev,
}

/// Horizontal entry offset for a transition at `progress` (0..=1).
fn slide_offset(direction: Direction, progress: f32) -> f32 {
    let remaining = (1.0 - progress) * theme::OVERLAY_SLIDE;
    match direction {
        Direction::Forward => remaining,
        Direction::Backward => -remaining,
        Direction::None => 0.0,
    }
}

impl App {
    pub(crate) fn render_overlay(&mut self, ctx: &egui::Context) {
        let Some(record) = self.catalog.selected_record().cloned() else {
            self.overlay_shown = None;
            return;
        };

        // Restart the entry transition whenever the shown record changes
        let now = ctx.input(|i| i.time);
        let started = match &self.overlay_shown {
            Some((id, t)) if *id == record.identifier => *t,
            _ => {
                self.overlay_shown = Some((record.identifier.clone(), now));
                now
            }
        };
        let linear = (((now - started) / theme::OVERLAY_TRANSITION_SECS) as f32).clamp(0.0, 1.0);
        if linear < 1.0 {
            ctx.request_repaint();
        }
        let progress = 1.0 - (1.0 - linear).powi(3);
        let offset_x = slide_offset(self.catalog.direction(), progress);

        let screen = ctx.screen_rect();
        let backdrop = egui::Area::new(egui::Id::new("overlay_backdrop"))
            .fixed_pos(screen.min)
            .order(egui::Order::Middle)
            .interactable(true)
            .show(ctx, |ui| {
                let response = ui.allocate_response(screen.size(), egui::Sense::click());
                ui.painter().rect_filled(screen, 0.0, theme::BG_BACKDROP);
                response
            })
            .inner;
        let mut close = backdrop.clicked();

        let cover = record
            .image_url()
            .and_then(|url| self.cover_texture(ctx, url));
        let pending = record.image_url().is_some_and(|url| self.cover_pending(url));
        let mut read = false;

        let (w, h) = theme::OVERLAY_SIZE;
        egui::Window::new("zine_detail")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .movable(false)
            .frame(theme::overlay_frame())
            .fixed_size(egui::vec2(w, h))
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(offset_x, -theme::SPACING_XL * 2.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.multiply_opacity(progress);
                ui.horizontal_top(|ui| {
                    let (cover_rect, _) =
                        ui.allocate_exact_size(egui::vec2(w * 0.38, h), egui::Sense::hover());
                    match &cover {
                        Some(tex) => paint_fitted(ui.painter(), tex, cover_rect),
                        None => cover_placeholder(ui.painter(), cover_rect, pending),
                    }

                    ui.add_space(theme::SPACING_XL);
                    ui.vertical(|ui| {
                        ui.horizontal_top(|ui| {
                            let title_width = ui.available_width() - 40.0;
                            ui.allocate_ui(egui::vec2(title_width, 0.0), |ui| {
                                ui.label(
                                    egui::RichText::new(record.title().unwrap_or_default())
                                        .size(theme::FONT_TITLE)
                                        .color(theme::TEXT_PRIMARY)
                                        .strong(),
                                );
                            });
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                                if ui
                                    .add(theme::button(icons::X))
                                    .on_hover_text("Close (Esc)")
                                    .clicked()
                                {
                                    close = true;
                                }
                            });
                        });
                        ui.add_space(theme::SPACING_MD);

                        egui::ScrollArea::vertical()
                            .id_salt("zine_detail_fields")
                            .max_height(h - 96.0)
                            .auto_shrink([false, true])
                            .show(ui, |ui| {
                                for (label, value) in record.details() {
                                    metadata_row(ui, label, value);
                                }
                            });

                        ui.add_space(theme::SPACING_LG);
                        let read_label = format!("{}  Read Zine", icons::FILE_PDF);
                        if ui
                            .add(
                                theme::button_accent(read_label)
                                    .min_size(egui::vec2(0.0, theme::FONT_BODY * 2.4)),
                            )
                            .clicked()
                        {
                            read = true;
                        }
                    });
                });
            });

        let mut step = None;
        let count = self.catalog.processed().len();
        let position = self.catalog.current_index().map_or(0, |i| i + 1);
        let (has_prev, has_next) = (self.catalog.has_prev(), self.catalog.has_next());

        egui::Area::new(egui::Id::new("overlay_nav"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -theme::SPACING_XL * 2.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                theme::overlay_frame()
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            let prev = format!("{} Prev", icons::CARET_LEFT);
                            if ui.add_enabled(has_prev, theme::button(prev)).clicked() {
                                step = Some(Step::Prev);
                            }
                            ui.label(
                                egui::RichText::new(format!("{position} / {count}"))
                                    .size(theme::FONT_BODY)
                                    .color(theme::TEXT_SECONDARY),
                            );
                            let next = format!("Next {}", icons::CARET_RIGHT);
                            if ui.add_enabled(has_next, theme::button(next)).clicked() {
                                step = Some(Step::Next);
                            }
                        });
                    });
            });

        if read {
            self.read_zine(&record);
        }
        match step {
            Some(Step::Next) => {
                self.catalog.next();
            }
            Some(Step::Prev) => {
                self.catalog.prev();
            }
            None => {}
        }
        if close {
            self.catalog.close_overlay();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_enters_from_the_right() {
        assert!(slide_offset(Direction::Forward, 0.0) > 0.0);
        assert_eq!(slide_offset(Direction::Forward, 1.0), 0.0);
    }

    #[test]
    fn backward_enters_from_the_left() {
        assert!(slide_offset(Direction::Backward, 0.0) < 0.0);
        assert_eq!(slide_offset(Direction::Backward, 1.0), 0.0);
    }

    #[test]
    fn direct_open_does_not_slide() {
        assert_eq!(slide_offset(Direction::None, 0.0), 0.0);
        assert_eq!(slide_offset(Direction::None, 0.5), 0.0);
    }
}
