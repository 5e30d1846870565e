//! Example: Embedding the pad panel in a parent egui application
//!
//! What it demonstrates
//! - Using [`TernaryPadPanel`] directly inside your own `eframe::App`.
//! - Reading the current values back from the panel each frame.
//!
//! How to run
//! ```bash
//! cargo run --example embedded
//! ```

use eframe::egui;
use ternpad::{TernaryPadConfig, TernaryPadPanel};

struct HostApp {
    pad: TernaryPadPanel,
}

impl eframe::App for HostApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("host_status")
            .min_width(180.0)
            .show(ctx, |ui| {
                ui.heading("Host app");
                ui.separator();
                match self.pad.values() {
                    Some(values) => {
                        for (label, v) in self.pad.labels.iter().zip(values) {
                            ui.label(format!("{label}: {v:.4}"));
                        }
                    }
                    None => {
                        ui.label("No selection yet");
                    }
                }
                ui.separator();
                ui.label(format!("Phase: {:?}", self.pad.phase()));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.pad.update(ui);
        });

        ctx.request_repaint_after(std::time::Duration::from_millis(16));
    }
}

fn main() -> eframe::Result<()> {
    let mut cfg = TernaryPadConfig::default();
    // The host draws its own chrome; keep the widget minimal.
    cfg.features.top_bar = false;
    cfg.features.value_readout = false;

    let pad = TernaryPadPanel::from_config(&cfg);

    eframe::run_native(
        "Embedded Ternary Pad",
        eframe::NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(HostApp { pad }))),
    )
}
