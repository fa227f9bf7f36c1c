pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::config::batch_config::{BatchConfig, Case};
pub use crate::core::batch::{BatchRunner, CaseReport};
pub use crate::core::calc::{evaluate_line, Outcome};
pub use crate::core::palindrome::is_palindrome_number;
pub use crate::core::prefix::longest_common_prefix;
pub use crate::core::roman::{parse_roman, roman_to_int};
pub use crate::utils::error::{KataError, Result};
