//! Terminal user interface

pub mod board;
pub mod components;
pub mod edit;
pub mod theme;

pub use board::BoardApp;
