// Custom Dioxus hooks

pub mod use_backend_health;
pub mod use_error_handler;
pub mod use_quick_chat;
pub mod use_session_chat;
pub mod use_session_manager;

pub use use_backend_health::{use_backend_health, BackendHealth};
pub use use_error_handler::{use_error_handler, ErrorHandler, ErrorState, RecoveryPhase};
pub use use_quick_chat::{use_quick_chat, QuickChat};
pub use use_session_chat::{use_session_chat, SessionChat};
pub use use_session_manager::{use_session_manager, SessionManager};
