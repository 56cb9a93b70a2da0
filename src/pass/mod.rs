//! Password generation and strength scoring.

pub mod charset;
mod generate;
pub mod strength;

pub use charset::Categories;
pub use generate::{Password, generate, generate_batch};
pub use strength::{StrengthReport, Verdict, evaluate};
