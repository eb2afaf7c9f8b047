//! DevPoint sales assistant: keyword routing, canned replies, an optional
//! Gemini-backed session, and the egui chat skins that host them.

pub mod ai;
pub mod config;
pub mod core;
pub mod logger;
pub mod ui;
