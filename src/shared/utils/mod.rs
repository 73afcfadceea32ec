// Utility functions
// Cross-target timing and formatting helpers

pub mod markdown;
pub mod timing;

pub use markdown::render_markdown;
pub use timing::sleep;
