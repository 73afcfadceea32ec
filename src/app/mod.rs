pub mod components;
pub mod layouts;
pub mod pages;

// Re-export the application root
pub use pages::routes::App;
