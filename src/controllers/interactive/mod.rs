//! Interactive controller for prompt-driven noise rendering.
//!
//! This module provides the application layer for the terminal session,
//! gathering render settings from the user and dispatching the finished
//! grids to the presentation layer.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: prompt utilities reading from any `BufRead`
//! - **Output**: `GridPresenterPort` for the rendered grids
//! - **Core**: Uses domain actions from `core/` for actual computation

mod controller;
mod settings;

pub use controller::InteractiveController;
pub use settings::RenderSettings;
