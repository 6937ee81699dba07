use eframe::egui::{
    Align2, Color32, Context, FontId, Painter, Pos2, RichText, Stroke, Ui, Visuals,
};

use crate::config::MILE_FT;
use crate::ui::config::UI_CONFIG;

/// Creates a colored screen heading
pub fn colored_heading(text: impl Into<String>) -> RichText {
    RichText::new(text).color(UI_CONFIG.colors.heading).strong()
}

/// Creates a form-label style sub-heading
pub fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text).color(UI_CONFIG.colors.label)
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::light();

    // The whole app is a light, airy mobile mock
    visuals.window_fill = UI_CONFIG.colors.panel;
    visuals.panel_fill = UI_CONFIG.colors.background;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.selection.bg_fill = UI_CONFIG.colors.primary;

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.heading(colored_heading(text));
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Formats a distance in feet the way the radius badge shows it.
/// - 0 ft stays "0 ft"
/// - below 1000 ft: raw feet
/// - exactly one mile: "1 mile"
/// - otherwise: miles to one decimal
pub fn format_distance(feet: u32) -> String {
    if feet == MILE_FT {
        return "1 mile".to_string();
    }
    if feet < 1000 {
        return format!("{} ft", feet);
    }
    let miles = (feet as f64 / 528.0).round() / 10.0;
    format!("{} miles", miles)
}

/// Deterministic avatar color from a seed string (FNV-1a over a small
/// pastel palette), so the same person always gets the same circle.
pub fn avatar_color(seed: &str) -> Color32 {
    const PALETTE: &[Color32] = &[
        Color32::from_rgb(155, 143, 230), // purple
        Color32::from_rgb(230, 127, 185), // pink
        Color32::from_rgb(99, 179, 237),  // blue
        Color32::from_rgb(104, 211, 145), // green
        Color32::from_rgb(246, 173, 85),  // orange
        Color32::from_rgb(79, 209, 197),  // teal
    ];

    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in seed.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    PALETTE[(hash % PALETTE.len() as u64) as usize]
}

/// Paint a circular initial-letter avatar with a white border ring.
pub fn draw_avatar(painter: &Painter, center: Pos2, radius: f32, seed: &str, initial: char) {
    painter.circle_filled(center, radius, avatar_color(seed));
    painter.circle_stroke(center, radius, Stroke::new(2.5, Color32::WHITE));
    painter.text(
        center,
        Align2::CENTER_CENTER,
        initial.to_uppercase().to_string(),
        FontId::proportional(radius),
        Color32::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_formatting_matches_the_badge_rules() {
        assert_eq!(format_distance(0), "0 ft");
        assert_eq!(format_distance(42), "42 ft");
        assert_eq!(format_distance(999), "999 ft");
        assert_eq!(format_distance(MILE_FT), "1 mile");
        assert_eq!(format_distance(2640), "0.5 miles");
    }

    #[test]
    fn avatar_color_is_stable_per_seed() {
        assert_eq!(avatar_color("Sarah"), avatar_color("Sarah"));
    }
}
