//! Routed page components.

pub mod home;
