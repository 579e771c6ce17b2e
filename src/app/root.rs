use {
    eframe::{
        Frame, Storage,
        egui::{Align, CentralPanel, Context, Layout, ScrollArea, TopBottomPanel, Ui, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::sync::Arc,
    strum::IntoEnumIterator,
};

use crate::{
    Cli,
    app::Route,
    config::STOCK_API,
    data::{StockApiClient, StockDataProvider},
    engine::{FetchWorker, RepaintHook, StockView, StockViewAction},
    ui::{UI_CONFIG, UI_TEXT, render_heatmap_page, render_stock_page},
    utils::ClockFormat,
};

/// The application shell: a route switcher above a shared page container.
///
/// Only view preferences persist across sessions; fetched data and the
/// current selection always start fresh.
#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) route: Route,
    pub(crate) clock_format: ClockFormat,
    #[serde(skip)]
    pub(crate) stock_view: StockView,
    #[serde(skip)]
    pub(crate) worker: Option<FetchWorker>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            route: Route::default(),
            clock_format: ClockFormat::default(),
            stock_view: StockView::default(),
            worker: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        if let Some(page) = &args.page {
            app.route = Route::from_path(page);
        }
        if args.clock_24h {
            app.clock_format = ClockFormat::TwentyFourHour;
        }

        app.stock_view = StockView::new(STOCK_API.default_window, app.clock_format);

        let base_url = args
            .api_base
            .clone()
            .unwrap_or_else(|| STOCK_API.base_url.to_string());
        log::info!("Using stock service at {}", base_url);
        let provider: Arc<dyn StockDataProvider> = Arc::new(StockApiClient::new(base_url));

        let egui_ctx = cc.egui_ctx.clone();
        let repaint: RepaintHook = Arc::new(move || egui_ctx.request_repaint());

        match FetchWorker::spawn(provider, repaint) {
            Ok(worker) => {
                worker.dispatch(app.stock_view.mount());
                app.worker = Some(worker);
            }
            Err(e) => log::error!("Failed to start fetch worker: {:#}", e),
        }

        app
    }

    /// Feed every completed fetch into the stock view before drawing.
    fn drain_outcomes(&mut self) {
        if let Some(worker) = &self.worker {
            for outcome in worker.drain() {
                self.stock_view.apply(outcome);
            }
        }
    }

    fn handle_stock_action(&mut self, action: StockViewAction) {
        if let Some(request) = self.stock_view.handle(action) {
            match &self.worker {
                Some(worker) => worker.dispatch(request),
                None => log::warn!("No fetch worker. Dropping {:?}", request),
            }
        }
    }

    fn render_nav_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("nav_bar")
            .frame(UI_CONFIG.top_panel_frame())
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for route in Route::iter() {
                        let text = match route {
                            Route::Stocks => UI_TEXT.nav_stocks.as_str(),
                            Route::Heatmap => UI_TEXT.nav_heatmap.as_str(),
                        };
                        ui.selectable_value(&mut self.route, route, text);
                    }

                    // Right-to-left, so listed in reverse display order
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let mut clock = self.clock_format;
                        ui.selectable_value(
                            &mut clock,
                            ClockFormat::TwentyFourHour,
                            ClockFormat::TwentyFourHour.to_string(),
                        );
                        ui.selectable_value(
                            &mut clock,
                            ClockFormat::TwelveHour,
                            ClockFormat::TwelveHour.to_string(),
                        );
                        ui.label(UI_TEXT.nav_clock);
                        if clock != self.clock_format {
                            self.clock_format = clock;
                            self.stock_view.set_clock_format(clock);
                        }
                    });
                });
            });
    }

    fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        with_page_container(ui, |ui| match self.route {
                            Route::Stocks => {
                                if let Some(action) = render_stock_page(ui, &self.stock_view) {
                                    self.handle_stock_action(action);
                                }
                            }
                            Route::Heatmap => render_heatmap_page(ui),
                        });
                    });
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.drain_outcomes();
        self.render_nav_panel(ctx);
        self.render_central_panel(ctx);
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

/// Fixed max-width column centred in the available space.
fn with_page_container(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    let max_width = UI_CONFIG.container_max_width;
    let side = ((ui.available_width() - max_width) / 2.0).max(0.0);
    ui.horizontal_top(|ui| {
        ui.add_space(side);
        ui.vertical(|ui| {
            ui.set_max_width(max_width);
            add_contents(ui);
        });
    });
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.selection.stroke.color = UI_CONFIG.colors.nav_active;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
