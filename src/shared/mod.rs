pub mod constants;
pub mod errors;
pub mod logging;
pub mod services;
pub mod utils;

// Available in fullstack mode (both client and server)
pub mod hooks;
