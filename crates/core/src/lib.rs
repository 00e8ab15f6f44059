#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod samples;

pub use error::Error;
