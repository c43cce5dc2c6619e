//! Site navigation and the static pages (home, about, donations)

use super::App;
use crate::theme;
use crate::types::View;
use eframe::egui;
use egui_phosphor::regular as icons;
use tracing::debug;

const ABOUT_MISSION: &str = "The Museum of Reclaimed Urban Space Zine Library was created to support \
the museum's mission of preserving and promoting the history of grassroots activism in the Lower East \
Side of Manhattan. This library elevates and makes accessible the oftentimes disenfranchised and \
marginalized voices represented through these typically free publications. First organized in 2021 by \
the Archive Committee at MoRUS, the MoRUS Zine Library was made up of donations from visitors and former \
museum volunteers. Moving forward the scope of our zine collection policy will be focused on subjects \
and genres ranging from DIY, history, and art that deal with topics like housing, environmentalism, and \
activism, especially those emanating from New York City. Despite these collection restrictions, the \
library will continue to reflect the diverse communities of stakeholders concerned with each of these topics.";

const ABOUT_COLLECTION: &str = "While our physical collection currently tops out at about 100 different \
zines (and will continue to grow) this digital repository provides a selection of those zines. The MoRUS \
Zine Library is made up largely of donations. If you see your work featured in the library and wish to be \
more clearly credited, removed from the library, or the documentation of the zine changed in any way \
please don't hesitate to reach out to the archive coordinator. Other zines can be made available by \
reaching out to the archive coordinator.";

const CONTACT_EMAILS: [&str; 2] = ["archives@morusnyc.org", "info@morusnyc.org"];

const DONATE_CALL: &str = "The Museum of Reclaimed Urban Space (MoRUS) is seeking zine submissions for \
our growing Zine Library!";

const DONATE_INTRO: &str = "We invite artists, activists, writers, and community members to contribute \
their work to our expanding digital zine library. MoRUS is dedicated to preserving and celebrating \
grassroots urban activism, DIY culture, and the creative spirit of the Lower East Side, and zines are an \
essential part of that history. We welcome zines of all topics, especially those connected to activism, \
community organizing, art, mutual aid, urban space, and social justice.";

const DONATE_HOW: &str = "Please send one full copy of your zine and a completed Consent to Display Form.";

const DONATE_ADDRESS: [&str; 4] = [
    "Museum of Reclaimed Urban Space (MoRUS)",
    "Attention Zine Archives",
    "155 Avenue C",
    "New York, NY 10009",
];

const DONATE_AFTER: &str = "Upon receiving your zine, we will carefully scan it and add it to our growing \
digital zine library, making it accessible to researchers, artists, and the public. Thank you for \
contributing to the living archive of community voices!";

fn page_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(theme::BG_BASE)
        .inner_margin(egui::Margin::symmetric(24, 24))
}

/// Centered, width-limited column for running text
fn text_column(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    let width = ui.available_width().min(theme::TEXT_COLUMN_WIDTH);
    let margin = (ui.available_width() - width) / 2.0;
    ui.horizontal_top(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_max_width(width);
            add_contents(ui);
        });
    });
}

fn heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_DISPLAY)
            .color(theme::TEXT_PRIMARY)
            .strong(),
    );
    ui.add_space(theme::SPACING_LG);
}

fn subheading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(theme::SPACING_MD);
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_TITLE)
            .color(theme::ACCENT)
            .strong(),
    );
}

fn paragraph(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_BODY)
            .color(theme::TEXT_SECONDARY),
    );
    ui.add_space(theme::SPACING_MD);
}

impl App {
    /// Switch pages. The library's filter, sort, page and overlay do not
    /// outlive a visit; the loaded records do.
    pub fn navigate(&mut self, view: View) {
        if view == self.view {
            return;
        }
        if self.view == View::Library {
            self.catalog.reset_view();
            self.overlay_shown = None;
        }
        debug!(from = ?self.view, to = ?view, "Navigating");
        self.view = view;
        self.scroll_to_top = true;
    }

    pub(crate) fn render_nav(&mut self, ctx: &egui::Context) {
        let mut target = None;
        egui::TopBottomPanel::top("site_nav")
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_ELEVATED)
                    .inner_margin(egui::Margin::symmetric(24, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("MoRUS")
                            .size(theme::FONT_TITLE)
                            .color(theme::ACCENT)
                            .strong(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        for view in View::ALL.into_iter().rev() {
                            let button = if view == self.view {
                                theme::button_accent(view.label())
                            } else {
                                theme::button(view.label())
                            };
                            if ui.add(button).clicked() {
                                target = Some(view);
                            }
                        }
                    });
                });
            });

        if let Some(view) = target {
            self.navigate(view);
        }
    }

    pub(crate) fn render_home(&mut self, ctx: &egui::Context) {
        let mut target = None;
        egui::CentralPanel::default().frame(page_frame()).show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(theme::SPACING_XL * 2.0);
                ui.label(
                    egui::RichText::new("MORUS")
                        .size(theme::FONT_DISPLAY * 2.5)
                        .color(theme::TEXT_PRIMARY)
                        .strong(),
                );
                ui.label(
                    egui::RichText::new("Zine Library")
                        .size(theme::FONT_DISPLAY)
                        .color(theme::ACCENT),
                );
            });
            ui.add_space(theme::SPACING_XL * 3.0);

            let tiles = [
                (View::About, icons::INFO, "About MORUS"),
                (View::Library, icons::BOOKS, "Zine Library"),
                (View::Donate, icons::HAND_HEART, "Zine Donations"),
            ];
            let (w, h) = theme::HOME_TILE_SIZE;
            let row_width = w * tiles.len() as f32 + theme::SPACING_XL * (tiles.len() - 1) as f32;
            ui.horizontal(|ui| {
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
                ui.spacing_mut().item_spacing.x = theme::SPACING_XL;
                for (view, icon, label) in tiles {
                    let (rect, response) =
                        ui.allocate_exact_size(egui::vec2(w, h), egui::Sense::click());
                    let painter = ui.painter();
                    painter.rect_filled(rect, theme::RADIUS_LARGE, theme::card_fill(&response));
                    painter.text(
                        rect.center() - egui::vec2(0.0, theme::SPACING_XL),
                        egui::Align2::CENTER_CENTER,
                        icon,
                        egui::FontId::proportional(h * 0.3),
                        theme::ACCENT,
                    );
                    painter.text(
                        egui::pos2(rect.center().x, rect.max.y - theme::SPACING_XL * 2.0),
                        egui::Align2::CENTER_CENTER,
                        label,
                        egui::FontId::proportional(theme::FONT_TITLE),
                        theme::TEXT_PRIMARY,
                    );
                    if response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                        target = Some(view);
                    }
                }
            });
        });

        if let Some(view) = target {
            self.navigate(view);
        }
    }

    pub(crate) fn render_about(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().frame(page_frame()).show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("about_page")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    text_column(ui, |ui| {
                        heading(ui, "ABOUT MORUS");
                        paragraph(ui, ABOUT_MISSION);
                        paragraph(ui, ABOUT_COLLECTION);
                        ui.horizontal_wrapped(|ui| {
                            ui.label(
                                egui::RichText::new(format!("{}  Contact:", icons::ENVELOPE))
                                    .color(theme::TEXT_MUTED),
                            );
                            for email in CONTACT_EMAILS {
                                ui.hyperlink_to(email, format!("mailto:{email}"));
                            }
                        });
                    });
                });
        });
    }

    pub(crate) fn render_donate(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().frame(page_frame()).show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("donate_page")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    text_column(ui, |ui| {
                        heading(ui, "Zine Donations");
                        paragraph(ui, DONATE_CALL);
                        paragraph(ui, DONATE_INTRO);

                        subheading(ui, "How to Submit");
                        paragraph(ui, DONATE_HOW);
                        ui.label(
                            egui::RichText::new("Mail your submissions to:")
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT_MUTED)
                                .strong(),
                        );
                        theme::banner_frame(theme::ACCENT).show(ui, |ui| {
                            for line in DONATE_ADDRESS {
                                ui.label(egui::RichText::new(line).color(theme::TEXT_PRIMARY));
                            }
                        });
                        ui.add_space(theme::SPACING_LG);
                        paragraph(ui, DONATE_AFTER);
                    });
                });
        });
    }
}
