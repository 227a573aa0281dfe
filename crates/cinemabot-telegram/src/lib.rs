pub mod adapter;
pub mod command;
pub mod context;
pub mod conversation;
pub mod error;
pub mod handler;
pub mod reply;
pub mod send;
pub mod typing;

pub use adapter::TelegramAdapter;
pub use command::Command;
pub use context::BotContext;
pub use conversation::respond;
pub use error::TelegramError;
pub use reply::Reply;
