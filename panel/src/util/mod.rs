//! Pure helpers shared by panel components.

pub mod zoom;
