pub mod navbar;

pub use navbar::AppNavbar;
