pub mod batch;
pub mod calc;
pub mod palindrome;
pub mod prefix;
pub mod roman;

pub use crate::utils::error::Result;
