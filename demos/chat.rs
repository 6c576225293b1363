//! Sends one chat turn to the Generative AI service and prints each step.
//!
//! Reads the profile named by `OCI_CLI_PROFILE` (default `DEFAULT`) from the
//! file named by `OCI_CONFIG_FILE` (default `~/.oci/config`):
//! ```sh
//! RUST_LOG=debug,hyper_util=off,hyper=off,reqwest=off,rustls=off cargo run --example chat --features tracing
//! ```

#![allow(clippy::print_stdout, reason = "Examples are okay to print to stdout")]

use oci_genai_client::auth::ApiKeySigner;
use oci_genai_client::chat::types::{ChatMessage, ChatRequest, Document};
use oci_genai_client::chat::{self, Client};
use oci_genai_client::profile;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let profile = profile::load_from_env()?;
    println!("profile -- {profile:?}");

    let signer = ApiKeySigner::from_profile(&profile)?;
    let region = profile.region.as_deref().unwrap_or(chat::DEFAULT_REGION);
    let client = Client::for_region(region, signer)?;

    let request = ChatRequest::builder()
        .compartment_id(profile.tenancy.clone())
        .message("Tell me something about the company's relational database.")
        .documents(vec![
            Document::builder()
                .title("Oracle")
                .snippet(
                    "Oracle database services and products offer customers cost-optimized and \
                     high-performance versions of Oracle Database, the world's leading converged, \
                     multi-model database management system.",
                )
                .website("https://www.oracle.com/database".to_owned())
                .build(),
        ])
        .chat_history(vec![
            ChatMessage::user("Tell me something about Oracle."),
            ChatMessage::chatbot(
                "Oracle is one of the largest vendors in the enterprise IT market and the \
                 shorthand name of its flagship product.",
            ),
        ])
        .build();
    println!("request -- {}", serde_json::to_string_pretty(&request)?);

    let response = client.chat(&request).await?;
    println!("response -- {}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
