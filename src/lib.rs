pub mod adapter;
pub mod cli;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod variables;
