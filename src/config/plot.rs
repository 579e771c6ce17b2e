//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Raw price series
    pub price_line_color: Color32,
    pub price_line_width: f32,
    /// Radius of the per-sample markers drawn on the price series (0.0 = no markers)
    pub price_marker_radius: f32,
    /// Flat whole-window mean
    pub average_line_color: Color32,
    pub average_line_width: f32,
    pub average_dash_length: f32,

    /// Chart height in points
    pub chart_height: f32,
    /// Target number of labelled ticks on the time axis
    pub time_axis_label_count: usize,

    pub plot_y_padding_pct: f64, // Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_x_padding: f64,     // In sample units, added to both ends of the ordinal axis

    // --- SEMANTIC COLORS ---
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    price_line_color: Color32::from_rgb(136, 132, 216), // Lavender
    price_line_width: 2.0,
    price_marker_radius: 2.5,
    average_line_color: Color32::from_rgb(130, 202, 157), // Sage green
    average_line_width: 1.5,
    average_dash_length: 6.0,

    chart_height: 400.0,
    time_axis_label_count: 8,

    plot_y_padding_pct: 0.05,
    plot_x_padding: 0.5, // half a sample so end markers aren't clipped

    color_text_subdued: Color32::GRAY,
};
