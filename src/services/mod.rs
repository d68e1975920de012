pub mod formatting;
pub mod prompt;
pub mod providers;
