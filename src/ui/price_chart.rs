use {
    eframe::egui::Ui,
    egui_plot::{
        AxisHints, GridInput, GridMark, HPlacement, Legend, Line, LineStyle, Plot, PlotPoints,
        Points, VPlacement,
    },
    std::sync::Arc,
};

use crate::{
    analysis::TransformedHistory,
    config::PLOT_CONFIG,
    ui::UI_TEXT,
    utils::padded_range,
};

/// Two-series line chart: raw prices plus the flat whole-window average.
pub(crate) struct PriceChart<'a> {
    history: &'a TransformedHistory,
    ticker: &'a str,
}

impl<'a> PriceChart<'a> {
    pub(crate) fn new(history: &'a TransformedHistory, ticker: &'a str) -> Self {
        Self { history, ticker }
    }

    pub(crate) fn show(self, ui: &mut Ui) {
        let count = self.history.len();
        let labels: Arc<Vec<String>> =
            Arc::new(self.history.points.iter().map(|p| p.label.clone()).collect());

        let (y_min, y_max) = self
            .history
            .price_bounds()
            .map(|(lo, hi)| padded_range(lo, hi, PLOT_CONFIG.plot_y_padding_pct))
            .unwrap_or((0.0, 1.0));
        let x_min = -PLOT_CONFIG.plot_x_padding;
        let x_max = count.saturating_sub(1) as f64 + PLOT_CONFIG.plot_x_padding;

        let tooltip_labels = labels.clone();

        Plot::new(("price_chart", self.ticker))
            .height(PLOT_CONFIG.chart_height)
            .legend(Legend::default())
            .custom_x_axes(vec![create_time_axis(labels)])
            .custom_y_axes(vec![create_y_axis(self.ticker)])
            .x_grid_spacer(move |input| ordinal_grid_marks(input, count))
            .label_formatter(move |name, value| {
                let idx = value.x.round();
                let time = if idx >= 0.0 {
                    tooltip_labels.get(idx as usize).map(String::as_str)
                } else {
                    None
                };
                match (name.is_empty(), time) {
                    (false, Some(time)) => format!("{}\n{}\n{:.2}", name, time, value.y),
                    (true, Some(time)) => format!("{}\n{:.2}", time, value.y),
                    _ => format!("{:.2}", value.y),
                }
            })
            .allow_scroll(false)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(x_min..=x_max);
                plot_ui.set_plot_bounds_y(y_min..=y_max);

                if self.history.is_empty() {
                    return;
                }

                plot_ui.line(
                    Line::new(
                        UI_TEXT.plot_series_price,
                        PlotPoints::new(self.history.price_series()),
                    )
                    .color(PLOT_CONFIG.price_line_color)
                    .width(PLOT_CONFIG.price_line_width),
                );
                if PLOT_CONFIG.price_marker_radius > 0.0 {
                    plot_ui.points(
                        Points::new(
                            UI_TEXT.plot_series_price,
                            PlotPoints::new(self.history.price_series()),
                        )
                        .color(PLOT_CONFIG.price_line_color)
                        .radius(PLOT_CONFIG.price_marker_radius),
                    );
                }
                plot_ui.line(
                    Line::new(
                        UI_TEXT.plot_series_average,
                        PlotPoints::new(self.history.average_series()),
                    )
                    .color(PLOT_CONFIG.average_line_color)
                    .width(PLOT_CONFIG.average_line_width)
                    .style(LineStyle::Dashed {
                        length: PLOT_CONFIG.average_dash_length,
                    }),
                );
            });
    }
}

/// Integer step that keeps roughly `target` labels on an axis of `count` samples.
pub(crate) fn label_step(count: usize, target: usize) -> usize {
    count.div_ceil(target.max(1)).max(1)
}

// Marks only land on sample positions, so every tick has a clock label.
fn ordinal_grid_marks(input: GridInput, count: usize) -> Vec<GridMark> {
    if count == 0 {
        return Vec::new();
    }
    let step = label_step(count, PLOT_CONFIG.time_axis_label_count);
    let (lo, hi) = input.bounds;
    let first = lo.ceil().max(0.0) as usize;
    let last = (hi.floor().max(0.0) as usize).min(count - 1);

    (first..=last)
        .filter(|i| i % step == 0)
        .map(|i| GridMark {
            value: i as f64,
            step_size: step as f64,
        })
        .collect()
}

fn create_time_axis(labels: Arc<Vec<String>>) -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(move |mark, _range| {
            let idx = mark.value.round();
            if idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .placement(VPlacement::Bottom)
}

fn create_y_axis(ticker: &str) -> AxisHints<'static> {
    let label = format!("{}  {}", ticker, UI_TEXT.plot_y_axis);
    AxisHints::new_y()
        .label(label)
        .formatter(|grid_mark, _range| format!("{:.2}", grid_mark.value))
        .placement(HPlacement::Left)
}
