//! Example: Programmatic control of the pad
//!
//! What it demonstrates
//! - Attaching a [`PadActionController`] and a [`WindowController`].
//! - Placing and clearing the selection from a background thread.
//! - Subscribing to output-field value snapshots.
//!
//! How to run
//! ```bash
//! cargo run --example controller
//! ```
//! The selection jumps between preset points every two seconds; every write
//! of the output fields is printed in the terminal.

use std::time::Duration;

use ternpad::{run_pad, PadActionController, TernaryPadConfig, Triangle, WindowController};

fn main() -> eframe::Result<()> {
    let pad_ctrl = PadActionController::new();
    let window_ctrl = WindowController::new();

    // Print every output-field write.
    let values_rx = pad_ctrl.subscribe_values();
    std::thread::spawn(move || {
        while let Ok(snapshot) = values_rx.recv() {
            println!(
                "[values] ({:.4}, {:.4}, {:.4}) at ({:.1}, {:.1}) confirmed={}",
                snapshot.values[0],
                snapshot.values[1],
                snapshot.values[2],
                snapshot.point[0],
                snapshot.point[1],
                snapshot.confirmed
            );
        }
    });

    // Walk the selection through a few preset points.
    let driver = pad_ctrl.clone();
    std::thread::spawn(move || {
        let triangle = Triangle::new(600.0);
        let centroid = triangle.centroid();
        let targets = [
            centroid,
            [centroid[0] - 60.0, centroid[1] + 40.0],
            [centroid[0] + 60.0, centroid[1] + 40.0],
            [centroid[0], centroid[1] - 80.0],
        ];
        loop {
            for target in targets {
                driver.set_selection(target);
                std::thread::sleep(Duration::from_secs(2));
            }
            driver.clear_selection();
            std::thread::sleep(Duration::from_secs(2));
        }
    });

    let mut cfg = TernaryPadConfig::default();
    cfg.title = "Ternary Pad – controller demo".to_string();
    cfg.controllers.pad_action = Some(pad_ctrl);
    cfg.controllers.window = Some(window_ctrl);

    run_pad(cfg)
}
