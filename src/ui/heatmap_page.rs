use eframe::egui::{RichText, Ui};

use crate::{
    config::PLOT_CONFIG,
    ui::{UI_CONFIG, UI_TEXT},
};

/// Second route. Owns no state and shares none with the stock page.
pub(crate) fn render_heatmap_page(ui: &mut Ui) {
    ui.heading(
        RichText::new(UI_TEXT.hm_title)
            .size(24.0)
            .strong()
            .color(UI_CONFIG.colors.heading),
    );
    ui.add_space(12.0);
    ui.label(RichText::new(UI_TEXT.hm_body).color(PLOT_CONFIG.color_text_subdued));
}
