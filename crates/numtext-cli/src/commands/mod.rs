pub mod capture;
pub mod loader;
pub mod pattern;
