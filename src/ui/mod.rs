pub mod app;
pub mod chat;
pub mod landing;
pub mod panel;
pub mod widget;

pub use app::AssistantApp;
