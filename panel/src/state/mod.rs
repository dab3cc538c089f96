//! Reactive state owned by panel components.

pub mod panel;
