//! Library view: header, filter bar, zine grid and pagination

use super::App;
use crate::theme;
use crate::types::{SortOrder, ZineRecord};
use crate::ui::components::{cover_placeholder, page_button};
use eframe::egui;

impl App {
    pub(crate) fn render_library(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("library_header")
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(24, 16)),
            )
            .show(ctx, |ui| {
                self.render_header(ui, ctx);
                ui.add_space(theme::SPACING_MD);
                self.render_filter_bar(ui);
            });

        if self.catalog.total_pages() > 1 {
            egui::TopBottomPanel::bottom("library_pagination")
                .show_separator_line(false)
                .frame(
                    egui::Frame::new()
                        .fill(theme::BG_BASE)
                        .inner_margin(egui::Margin::symmetric(24, 12)),
                )
                .show(ctx, |ui| self.render_pagination(ui));
        }

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(24, 8)),
            )
            .show(ctx, |ui| {
                if let Some(err) = self.load_error.clone() {
                    theme::banner_frame(theme::STATUS_ERROR).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(
                            egui::RichText::new(format!(
                                "{}  Could not load the zine library: {err}",
                                egui_phosphor::regular::WARNING
                            ))
                            .color(theme::STATUS_ERROR),
                        );
                    });
                    ui.add_space(theme::SPACING_MD);
                }

                if !self.catalog.is_loaded() {
                    if self.is_loading() {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(egui::RichText::new("Loading zines...").color(theme::TEXT_MUTED));
                        });
                    }
                    return;
                }

                if self.catalog.processed().is_empty() {
                    ui.label(
                        egui::RichText::new("No zines match this filter.").color(theme::TEXT_MUTED),
                    );
                    return;
                }

                self.render_grid(ui, ctx);
            });
    }

    fn render_header(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Zine Library")
                    .size(theme::FONT_DISPLAY)
                    .color(theme::TEXT_PRIMARY)
                    .strong(),
            );
            ui.label(
                egui::RichText::new(self.catalog.current_page().to_string())
                    .size(theme::FONT_TITLE)
                    .color(theme::ACCENT),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let reload = ui
                    .add_enabled(
                        !self.is_loading(),
                        theme::button(egui_phosphor::regular::ARROW_CLOCKWISE),
                    )
                    .on_hover_text("Reload (F5)");
                if reload.clicked() {
                    self.start_load(ctx);
                }
                if let Some(records) = self.catalog.records() {
                    ui.label(
                        egui::RichText::new(format!("{} zines", records.len()))
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                    );
                }
            });
        });
    }

    fn render_filter_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Filter by Subject:")
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED),
            );
            let subjects = self.catalog.subjects();
            let mut subject = self.catalog.selected_subject().to_string();
            egui::ComboBox::from_id_salt("subject_filter")
                .selected_text(subject.clone())
                .width(220.0)
                .height(360.0)
                .show_ui(ui, |ui| {
                    for s in &subjects {
                        ui.selectable_value(&mut subject, s.clone(), s.as_str());
                    }
                });
            if subject != self.catalog.selected_subject() {
                self.scroll_to_top = true;
            }
            self.catalog.select_subject(subject);

            ui.add_space(theme::SPACING_LG);
            ui.label(
                egui::RichText::new("Sort by:")
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED),
            );
            let mut order = self.catalog.sort_order();
            egui::ComboBox::from_id_salt("sort_order")
                .selected_text(order.label())
                .show_ui(ui, |ui| {
                    for option in SortOrder::ALL {
                        ui.selectable_value(&mut order, option, option.label());
                    }
                });
            if order != self.catalog.sort_order() {
                self.scroll_to_top = true;
            }
            self.catalog.set_sort_order(order);

            if self.catalog.filters_active() {
                ui.add_space(theme::SPACING_LG);
                if ui.add(theme::button("RESET")).clicked() {
                    self.catalog.reset_filters();
                    self.scroll_to_top = true;
                }
            }
        });
    }

    fn render_grid(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let page: Vec<ZineRecord> = self
            .catalog
            .current_page_records()
            .into_iter()
            .cloned()
            .collect();

        let mut scroll = egui::ScrollArea::vertical()
            .id_salt("zine_grid")
            .auto_shrink([false, false]);
        if std::mem::take(&mut self.scroll_to_top) {
            scroll = scroll.vertical_scroll_offset(0.0);
        }

        let mut opened: Option<String> = None;
        scroll.show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(theme::SPACING_LG, theme::SPACING_LG);
                for zine in &page {
                    if self.render_card(ui, ctx, zine) {
                        opened = Some(zine.identifier.clone());
                    }
                }
            });
        });

        if let Some(identifier) = opened {
            self.catalog.open_from_grid(&identifier);
        }
    }

    /// Cover card. Returns true when clicked.
    fn render_card(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, zine: &ZineRecord) -> bool {
        let (w, h) = theme::CARD_SIZE;
        let (rect, response) = ui.allocate_exact_size(egui::vec2(w, h), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let cover = zine.image_url().and_then(|url| self.cover_texture(ctx, url));
            let pending = zine.image_url().is_some_and(|url| self.cover_pending(url));

            let painter = ui.painter();
            painter.rect_filled(rect, theme::RADIUS_DEFAULT, theme::card_fill(&response));

            let cover_rect = egui::Rect::from_min_max(
                rect.min + egui::vec2(theme::SPACING_SM, theme::SPACING_SM),
                egui::pos2(
                    rect.max.x - theme::SPACING_SM,
                    rect.max.y - theme::CARD_TITLE_HEIGHT,
                ),
            );
            match cover {
                Some(tex) => paint_fitted(painter, &tex, cover_rect),
                None => cover_placeholder(painter, cover_rect, pending),
            }

            let title_rect = egui::Rect::from_min_max(
                egui::pos2(rect.min.x + theme::SPACING_SM, cover_rect.max.y + theme::SPACING_SM),
                rect.max - egui::vec2(theme::SPACING_SM, 0.0),
            );
            let galley = painter.layout(
                zine.title().unwrap_or_default().to_string(),
                egui::FontId::proportional(theme::FONT_LABEL),
                theme::TEXT_SECONDARY,
                title_rect.width(),
            );
            painter
                .with_clip_rect(title_rect)
                .galley(title_rect.min, galley, theme::TEXT_SECONDARY);
        }

        response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked()
    }

    fn render_pagination(&mut self, ui: &mut egui::Ui) {
        let current = self.catalog.current_page();
        let total = self.catalog.total_pages();
        let mut target: Option<usize> = None;

        ui.horizontal_wrapped(|ui| {
            let prev = format!("{} Prev", egui_phosphor::regular::CARET_DOUBLE_LEFT);
            if page_button(ui, &prev, false, current > 1) {
                target = Some(current - 1);
            }
            for page in 1..=total {
                if page_button(ui, &page.to_string(), page == current, true) {
                    target = Some(page);
                }
            }
            let next = format!("Next {}", egui_phosphor::regular::CARET_DOUBLE_RIGHT);
            if page_button(ui, &next, false, current < total) {
                target = Some(current + 1);
            }
        });

        if let Some(page) = target {
            self.catalog.paginate(page);
            self.scroll_to_top = true;
        }
    }
}

/// Paint a texture centered in `area`, scaled to fit without cropping.
pub(crate) fn paint_fitted(painter: &egui::Painter, tex: &egui::TextureHandle, area: egui::Rect) {
    let size = tex.size_vec2();
    let scale = (area.width() / size.x).min(area.height() / size.y);
    let rect = egui::Rect::from_center_size(area.center(), size * scale);
    painter.image(
        tex.id(),
        rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}
