//! TernPad crate root: re-exports and module wiring.
//!
//! This crate provides a ready-to-use ternary (triangle) selector widget
//! built on egui/eframe: the user picks a point inside an equilateral
//! triangle and the widget derives three interdependent dimension values
//! from it.
//!
//! The implementation is split into cohesive modules:
//! - `data`: pure geometry, emphasis mapping, and the interaction machine
//! - `view`: the rendering-collaborator trait and effect dispatch
//! - `events`: subscribable UI/interaction events
//! - `controllers`: external control of window and pad actions
//! - `config`: shared configuration
//! - `panel`: the embeddable egui widget
//! - `app`: standalone window wrapper and run helper

mod app;
mod color_scheme;

pub mod config;
pub mod controllers;
pub mod data;
pub mod events;
pub mod panel;
pub mod persistence;
pub mod view;

// Public re-exports for a compact external API
pub use app::{run_pad, TernaryPadApp};
pub use color_scheme::{pad_ink, ColorScheme, CustomColorScheme, PadInk};
pub use config::{Controllers, FeatureFlags, ResponsiveLayout, TernaryPadConfig};
pub use controllers::{PadActionController, ValuesSnapshot, WindowController, WindowInfo};
pub use data::emphasis::{font_size_px, font_weight, LabelEmphasis};
pub use data::geometry::{Dimension, Triangle};
pub use data::interaction::{transition, Effect, Interaction, PadInput, Phase};
pub use events::{EventController, EventFilter, EventKind, PadEvent};
pub use panel::{PadTransform, TernaryPadPanel};
pub use persistence::PadSettings;
pub use view::{dispatch, MarkerId, PadView};
