//! Jotpad - Elm-style notepad
//!
//! This crate provides the model, messages and update logic for a
//! single-window notepad. The binary in `main.rs` adds the winit runtime
//! and the softbuffer renderer on top.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod encoding;
pub mod geometry;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use encoding::TextEncoding;
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
