//! Client for the Generative AI inference `chat` action.

pub mod client;
pub mod types;

pub use client::{Client, send_chat};

/// Version segment of the inference API paths.
pub const API_VERSION: &str = "20231130";

pub const DEFAULT_REGION: &str = "eu-frankfurt-1";

/// URL of the `chat` action in `region`.
#[must_use]
pub fn endpoint(region: &str) -> String {
    format!("https://inference.generativeai.{region}.oci.oraclecloud.com/{API_VERSION}/actions/chat")
}
