//! Native viewer for the portfolio page.
//!
//! Run with: cargo run --bin portfolio

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,starfield_portfolio=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Portfolio"),
        ..Default::default()
    };

    eframe::run_native(
        "portfolio",
        options,
        Box::new(|cc| Ok(Box::new(starfield_portfolio::PortfolioApp::new(cc)))),
    )?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
