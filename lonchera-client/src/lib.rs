mod client;
pub mod normalizer;

pub use client::{create, Client, ClientImpl, Error, MockClient};
pub use normalizer::{extract_json, extract_lunches, NormalizeError};
