use eframe::egui::{ComboBox, RichText, Spinner, Ui};

use crate::{
    config::{PLOT_CONFIG, STOCK_API},
    engine::{StockView, StockViewAction, ViewPhase},
    ui::{PriceChart, UI_CONFIG, UI_TEXT},
};

const SELECTOR_WIDTH: f32 = 280.0;

/// Draws the stock page and reports what the user picked this frame, if anything.
///
/// Picking the entry that is already selected still reports it, so the history is re-fetched.
pub(crate) fn render_stock_page(ui: &mut Ui, view: &StockView) -> Option<StockViewAction> {
    let mut action = None;

    ui.heading(
        RichText::new(UI_TEXT.sp_title)
            .size(24.0)
            .strong()
            .color(UI_CONFIG.colors.heading),
    );
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(UI_TEXT.sp_stock_label);
            let selected_text = match view.selected_name() {
                Some(name) => name,
                None if view.catalog().is_empty() => UI_TEXT.sp_stock_empty,
                None => UI_TEXT.sp_stock_placeholder,
            };
            ComboBox::from_id_salt("stock_selector")
                .width(SELECTOR_WIDTH)
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for (name, ticker) in view.catalog().iter() {
                        let is_selected = view.selected_ticker() == Some(ticker);
                        if ui.selectable_label(is_selected, name).clicked() {
                            action = Some(StockViewAction::SelectInstrument(ticker.to_string()));
                        }
                    }
                });
        });

        ui.add_space(UI_CONFIG.selector_gap);

        ui.vertical(|ui| {
            ui.label(UI_TEXT.sp_interval_label);
            ComboBox::from_id_salt("interval_selector")
                .width(SELECTOR_WIDTH)
                .selected_text(view.window().to_string())
                .show_ui(ui, |ui| {
                    for &window in STOCK_API.window_menu {
                        let is_selected = view.window() == window;
                        if ui
                            .selectable_label(is_selected, window.to_string())
                            .clicked()
                        {
                            action = Some(StockViewAction::SelectWindow(window));
                        }
                    }
                });
        });
    });

    ui.add_space(24.0);

    match view.phase() {
        ViewPhase::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(PLOT_CONFIG.chart_height / 3.0);
                ui.add(Spinner::new().size(32.0));
            });
        }
        ViewPhase::NoInstrumentSelected => {
            ui.label(RichText::new(UI_TEXT.sp_select_prompt).color(PLOT_CONFIG.color_text_subdued));
            PriceChart::new(view.transformed(), "").show(ui);
        }
        ViewPhase::Loaded => {
            let ticker = view.selected_ticker().unwrap_or_default();
            if view.transformed().is_empty() {
                ui.label(RichText::new(UI_TEXT.sp_no_samples).color(PLOT_CONFIG.color_text_subdued));
            }
            PriceChart::new(view.transformed(), ticker).show(ui);
        }
    }

    action
}
