//! UI helper components

use eframe::egui;

use crate::validation::FieldError;

/// Styled heading with accent color
pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(egui::RichText::new(text).color(egui::Color32::from_rgb(122, 190, 120)));
}

/// Section header with separator
pub fn section_header(ui: &mut egui::Ui, text: &str) {
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(text).strong().size(14.0));
    });
    ui.separator();
}

/// Single-line labeled text input
pub fn labeled_text_field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(
            egui::TextEdit::singleline(value)
                .hint_text(hint)
                .desired_width(f32::INFINITY),
        );
    });
}

/// The ✕ glyph in a dialog corner. Returns true when clicked.
pub fn close_glyph(ui: &mut egui::Ui) -> bool {
    ui.add(egui::Button::new(egui::RichText::new("✕").size(14.0)).frame(false))
        .on_hover_text("Close")
        .clicked()
}

/// Per-field validation complaints under a form
pub fn field_errors(ui: &mut egui::Ui, errors: &[FieldError]) {
    for error in errors {
        ui.colored_label(
            egui::Color32::from_rgb(220, 80, 80),
            format!("{}: {}", error.field, error.problem),
        );
    }
}
