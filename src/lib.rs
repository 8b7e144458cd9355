pub mod app;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod logging;
pub mod nav;
pub mod suggest;
pub mod widgets;
