//! Front end, file output and error handling around the grid engine

/// Command-line parsing and session orchestration
pub mod cli;
/// Game constants and presentation defaults
pub mod configuration;
/// Error types
pub mod error;
/// Board rendering to images
pub mod image;
/// Key and script input mapping
pub mod input;
/// Turn processing between actions and the engine
pub mod session;
/// Interactive terminal shell
pub mod terminal;
/// Session recording and GIF export
pub mod visualization;
