pub mod logs;

pub use logs::{log_bank_loaded, log_error, log_submission_loaded, ProfileReport};
