//! Interactive terminal visualiser for `tilenav-paths`.
//!
//! The [`model::Demo`] holds all state and renders into [`frame::Frame`]s;
//! [`term::Terminal`] is the only part that touches the real terminal.

pub mod config;
pub mod frame;
pub mod logger;
pub mod model;
pub mod term;
