pub mod button;
pub mod config;
pub mod hero;
pub mod icons;
pub mod navbar;
