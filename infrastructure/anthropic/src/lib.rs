pub mod client;
pub mod content_generator;
