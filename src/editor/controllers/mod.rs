//! # Controllers
//!
//! The application loop tying input, layout and rendering together.

pub mod app_controller;

pub use app_controller::{AppController, SCRATCH_BUFFER_NAME};
