pub mod chat_messages;
pub mod error_banner;
pub mod message_input;
pub mod session_header;
pub mod session_sidebar;

pub use chat_messages::ChatMessages;
pub use error_banner::ErrorBanner;
pub use message_input::MessageInput;
pub use session_header::{SessionHeader, StatusBadge};
pub use session_sidebar::SessionSidebar;
