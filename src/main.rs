//! Checkers GUI
//!
//! Hotseat play with live evaluation readout.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use checkers::ui::CheckersApp;
use checkers::{CapturePolicy, GameConfig, HeuristicWeights};

#[derive(Debug, Parser)]
#[command(name = "checkers", version, about = "8x8 checkers with heuristic evaluation")]
struct Cli {
    /// Heuristic weights: kings, mobility, control, vulnerability, home row
    #[arg(long, num_args = 5, value_names = ["KINGS", "MOBILITY", "CONTROL", "VULN", "HOME"],
          allow_negative_numbers = true)]
    weights: Option<Vec<f64>>,

    /// Hide plain moves while a capture is available
    #[arg(long)]
    forced_capture: bool,
}

impl Cli {
    fn config(&self) -> GameConfig {
        let weights = match self.weights.as_deref() {
            Some(&[a, b, c, d, e]) => HeuristicWeights::new([a, b, c, d, e]),
            _ => HeuristicWeights::default(),
        };
        let capture_policy = if self.forced_capture {
            CapturePolicy::Forced
        } else {
            CapturePolicy::Free
        };
        GameConfig::new(weights, capture_policy)
    }
}

fn main() -> Result<(), eframe::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Cli::parse().config();
    tracing::info!(?config, "starting checkers");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([700.0, 480.0])
            .with_title("Checkers"),
        ..Default::default()
    };

    eframe::run_native(
        "Checkers",
        options,
        Box::new(move |cc| Ok(Box::new(CheckersApp::new(cc, config)))),
    )
}
