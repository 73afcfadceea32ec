// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod chat;
pub mod message;
pub mod session;

pub use chat::{ChatRequest, ChatResponse, HealthStatus, HistoryTurn};
pub use message::{ChatMessage, Role, SendMessageRequest, SendMessageResponse, TEMP_ID_PREFIX};
pub use session::{CreateSessionRequest, Session, UpdateSessionRequest};
