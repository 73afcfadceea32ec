pub mod chat;
pub mod quick_chat;
pub mod routes;

pub use chat::ChatPage;
pub use quick_chat::QuickChatPage;
