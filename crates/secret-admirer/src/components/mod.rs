//! UI components for the admirer app.

pub mod app;
pub mod game;
pub mod home;
pub mod inbox;
pub mod result;
pub mod sent;
