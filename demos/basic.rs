//! Example: Basic ternary pad window
//!
//! What it demonstrates
//! - Launching the pad with [`run_pad`] and a default configuration.
//! - Setting custom corner labels and a headline.
//!
//! How to run
//! ```bash
//! cargo run --example basic
//! ```
//! Move the pointer inside the triangle to see the crosshair and label
//! emphasis follow it; click to confirm a selection, click again to
//! reconsider.

use ternpad::{run_pad, TernaryPadConfig};

fn main() -> eframe::Result<()> {
    let mut cfg = TernaryPadConfig::default();
    cfg.title = "Ternary Pad".to_string();
    cfg.headline = Some("Pick a point".to_string());
    cfg.subheadline = Some("The three values depend on the distance to each corner".to_string());
    cfg.labels = [
        "Despair".to_string(),
        "Horror".to_string(),
        "Frustration".to_string(),
    ];

    run_pad(cfg)
}
