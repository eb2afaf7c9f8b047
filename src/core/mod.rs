pub mod booking;
pub mod conversation;
pub mod intent;
pub mod keywords;
pub mod reply;
pub mod suggestions;
pub mod surface;
pub mod transcript;

pub use conversation::{Conversation, PendingTurn, Phase};
pub use reply::{Reply, ReplyResolver};
