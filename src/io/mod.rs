/// Command-line interface and run driver
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types
pub mod error;
/// Step progress display
pub mod progress;
/// Renderer data contract and text rendering
pub mod render;
/// Tileset loading
pub mod tileset;
