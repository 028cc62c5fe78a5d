pub mod integration;
pub mod utils;
