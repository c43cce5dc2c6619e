use super::App;
use crate::theme;
use eframe::egui;

const TOAST_VISIBLE_SECS: f32 = 3.0;
const TOAST_FADE_SECS: f32 = 0.5;

/// Toast opacity after `elapsed` seconds: solid, then a linear fade to zero.
fn toast_alpha(elapsed: f32) -> f32 {
    if elapsed > TOAST_VISIBLE_SECS {
        ((TOAST_VISIBLE_SECS + TOAST_FADE_SECS - elapsed) / TOAST_FADE_SECS).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

impl App {
    /// Bottom-right notification. Hovering pauses the timer.
    pub(crate) fn render_toast(&mut self, ctx: &egui::Context) {
        let Some(msg) = self.toast_message.clone() else {
            return;
        };
        let elapsed = self
            .toast_start
            .map(|t| t.elapsed().as_secs_f32())
            .unwrap_or(0.0);
        let alpha = toast_alpha(elapsed);

        let screen = ctx.screen_rect();
        let margin = theme::SPACING_LG;
        let response = egui::Area::new(egui::Id::new("toast"))
            .fixed_pos(egui::pos2(screen.right() - margin, screen.bottom() - margin))
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .order(egui::Order::Tooltip)
            .show(ctx, |ui| {
                theme::toast_frame(alpha).show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(msg).color(theme::TEXT_PRIMARY.gamma_multiply(alpha)),
                    );
                });
            })
            .response;

        if response.hovered() {
            self.toast_start = Some(std::time::Instant::now());
        } else if elapsed >= TOAST_VISIBLE_SECS + TOAST_FADE_SECS {
            self.toast_message = None;
            self.toast_start = None;
            return;
        }
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_fades_after_visible_period() {
        assert_eq!(toast_alpha(0.0), 1.0);
        assert_eq!(toast_alpha(TOAST_VISIBLE_SECS), 1.0);
        assert!((toast_alpha(TOAST_VISIBLE_SECS + TOAST_FADE_SECS / 2.0) - 0.5).abs() < 1e-4);
        assert_eq!(toast_alpha(TOAST_VISIBLE_SECS + TOAST_FADE_SECS + 1.0), 0.0);
    }
}
