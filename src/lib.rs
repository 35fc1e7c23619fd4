pub mod cli;
pub mod config;
pub mod error;
pub mod file_store;
pub mod form_input;
pub mod portal;
pub mod timer;
