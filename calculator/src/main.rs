//! Calculator - a two-line desktop calculator
//!
//! Digits and operators build up a running total; Enter evaluates it.

mod app;

use app::CalculatorApp;
use calccore::config::CalcSettings;
use calccore::CalcTheme;
use eframe::NativeOptions;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = CalcSettings::load();
    tracing::info!(
        precision = settings.precision,
        greeting = settings.show_greeting,
        "starting calculator"
    );

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([375.0, 667.0])
            .with_resizable(false)
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(move |cc| {
            let theme = CalcTheme::default();
            theme.apply(&cc.egui_ctx);
            Box::new(CalculatorApp::new(theme, &settings))
        }),
    )
}
