//! Centralized theme constants for the zine library
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x14, 0x12, 0x10); // ink
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x1f, 0x1c, 0x19);
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x2b, 0x27, 0x23);
pub const BG_HOVER: Color32 = Color32::from_rgb(0x33, 0x2a, 0x22);
pub const BG_BACKDROP: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 190);

// =============================================================================
// COLORS - Accent (Brick)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0xe0, 0x5a, 0x2b);
pub const ACCENT_TEXT: Color32 = Color32::from_rgb(0x1a, 0x0b, 0x05);

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xf5, 0xf0, 0xe6); // paper
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xd6, 0xcf, 0xc2);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa3, 0x9b, 0x8e);
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x6f, 0x68, 0x5e);

// =============================================================================
// COLORS - Borders & Status
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x2f, 0x2a, 0x25);
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x45, 0x3e, 0x37);
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71);

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x3a, 0x34, 0x2e);
pub const BTN_ACCENT: Color32 = ACCENT;

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_DISPLAY: f32 = 30.0;
pub const FONT_TITLE: f32 = 20.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const CARD_SIZE: (f32, f32) = (170.0, 270.0);
pub const CARD_TITLE_HEIGHT: f32 = 40.0;
pub const OVERLAY_SIZE: (f32, f32) = (820.0, 540.0);
pub const HOME_TILE_SIZE: (f32, f32) = (220.0, 200.0);
pub const TEXT_COLUMN_WIDTH: f32 = 720.0;
pub const OVERLAY_SLIDE: f32 = 120.0;
pub const OVERLAY_TRANSITION_SECS: f64 = 0.3;

pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const STROKE_DEFAULT: f32 = 1.0;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    let widget = |bg_fill: Color32, fg: Color32, stroke: egui::Stroke| egui::style::WidgetVisuals {
        bg_fill,
        weak_bg_fill: bg_fill,
        bg_stroke: stroke,
        fg_stroke: egui::Stroke::new(STROKE_DEFAULT, fg),
        corner_radius: RADIUS_DEFAULT.into(),
        expansion: 0.0,
    };
    let border = egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE);

    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_BASE,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        widgets: egui::style::Widgets {
            noninteractive: widget(BG_ELEVATED, TEXT_PRIMARY, border),
            inactive: widget(BTN_DEFAULT, TEXT_SECONDARY, border),
            hovered: widget(BG_HOVER, TEXT_PRIMARY, egui::Stroke::NONE),
            active: widget(BG_SURFACE, TEXT_PRIMARY, egui::Stroke::NONE),
            open: widget(BG_SURFACE, TEXT_PRIMARY, border),
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
        window_corner_radius: egui::CornerRadius::same(RADIUS_LARGE as u8),
        menu_corner_radius: egui::CornerRadius::same(RADIUS_LARGE as u8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.button_padding = egui::vec2(SPACING_LG, 6.0);
        style.spacing.scroll.bar_width = 6.0;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn overlay_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

pub fn banner_frame(color: Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(color.gamma_multiply(0.12))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, color))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

pub fn toast_frame(alpha: f32) -> egui::Frame {
    egui::Frame::new()
        .fill(BG_SURFACE.gamma_multiply(0.9 * alpha))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, ACCENT.gamma_multiply(0.4 * alpha)))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(16, 10))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Accent button for the primary action (Read Zine, active page)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(ACCENT_TEXT).strong())
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Card fill for hover/press feedback on custom-painted grid cards.
pub fn card_fill(response: &egui::Response) -> Color32 {
    if response.is_pointer_button_down_on() {
        lighten(BG_SURFACE, 0.06)
    } else if response.hovered() {
        lighten(BG_SURFACE, 0.12)
    } else {
        BG_ELEVATED
    }
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}
