//! Example: Settings persistence
//!
//! What it demonstrates
//! - Building a [`PadSettings`] snapshot, saving it, and loading it back.
//! - Applying loaded settings onto a [`TernaryPadConfig`] before launch.
//!
//! How to run
//! ```bash
//! cargo run --example settings
//! ```
//! The demo writes `ternpad_demo_settings.yaml` next to the working
//! directory on first run; edit it and re-run to see the changes applied.

use ternpad::{run_pad, PadSettings, TernaryPadConfig};

fn main() -> eframe::Result<()> {
    let path = std::path::Path::new("ternpad_demo_settings.yaml");

    let mut cfg = TernaryPadConfig::default();
    if path.exists() {
        match PadSettings::load_from_path(path) {
            Ok(settings) => {
                settings.apply_to(&mut cfg);
                println!("Loaded settings from {:?}", path);
            }
            Err(e) => eprintln!("Failed to load settings: {e}"),
        }
    } else {
        let mut settings = PadSettings::default();
        settings.labels = [
            "Sweetness".to_string(),
            "Acidity".to_string(),
            "Bitterness".to_string(),
        ];
        settings.color_scheme = Some("Solarized Dark".to_string());
        if let Err(e) = settings.save_to_path(path) {
            eprintln!("Failed to write demo settings: {e}");
        } else {
            println!("Wrote demo settings to {:?}", path);
        }
        settings.apply_to(&mut cfg);
    }

    run_pad(cfg)
}
