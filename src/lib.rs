//! Library entry for Hacker Stories exposing the core logic for the binary and integration tests.

pub mod app;
pub mod args;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod storage;
pub mod theme;
pub mod ui;
