pub mod error;
pub mod questions;
pub mod scoring;
pub mod settings;
pub mod submission;
pub mod utils;
