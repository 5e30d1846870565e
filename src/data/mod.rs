//! Pure widget data: geometry, emphasis mapping, and the interaction state
//! machine. Nothing in this tree depends on egui or any rendering surface.

pub mod emphasis;
pub mod geometry;
pub mod interaction;
