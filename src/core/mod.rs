pub mod error;
pub mod extract;
pub mod key;
pub mod namer;
pub mod rewrite;
pub mod types;
