//! Example: Simple event listener (selection events)
//!
//! What it demonstrates
//! - Creating an [`EventController`] and subscribing to selection events.
//! - Attaching the controller to [`TernaryPadConfig`] so the UI emits events.
//! - Receiving and printing events on a background thread.
//!
//! How to run
//! ```bash
//! cargo run --example events_simple
//! ```
//! Click inside the triangle to see selection events printed in the terminal.

use ternpad::{run_pad, EventController, EventFilter, EventKind, TernaryPadConfig};

fn main() -> eframe::Result<()> {
    // Create the event controller and subscribe to selection-related events.
    let event_ctrl = EventController::new();
    let rx = event_ctrl.subscribe(EventFilter::only(
        EventKind::SELECTION_CONFIRMED
            | EventKind::SELECTION_RECONSIDERED
            | EventKind::VALUES_WRITTEN,
    ));

    // Print received events on a background thread.
    std::thread::spawn(move || {
        while let Ok(evt) = rx.recv() {
            println!("[event] kinds={}", evt.kinds);
            if let Some(values) = &evt.values {
                println!(
                    "  values: ({:.4}, {:.4}, {:.4}) confirmed={}",
                    values.values[0], values.values[1], values.values[2], values.confirmed
                );
            }
            if let Some(pointer) = &evt.pointer {
                if let Some(pp) = &pointer.pad_pos {
                    println!("  pad position: ({:.1}, {:.1})", pp.x, pp.y);
                }
            }
        }
        println!("[event] channel closed");
    });

    let mut cfg = TernaryPadConfig::default();
    cfg.controllers.event = Some(event_ctrl);

    run_pad(cfg)
}
