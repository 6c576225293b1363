#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod auth;
pub mod chat;
pub mod error;
pub mod profile;

use reqwest::Request;
use serde::de::DeserializeOwned;

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request<Response: DeserializeOwned>(
    client: &reqwest::Client,
    request: Request,
) -> Result<Response> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if !status_code.is_success() {
        let body = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            body = %body,
            "API request failed"
        );

        return Err(Error::api(status_code, method, path, body));
    }

    let bytes = response.bytes().await?;
    let response = serde_json::from_slice(&bytes).inspect_err(|e| {
        #[cfg(feature = "tracing")]
        tracing::error!(method = %method, path = %path, "unable to decode response body: {e}");
        #[cfg(not(feature = "tracing"))]
        let _ = (&e, &method, &path);
    })?;

    Ok(response)
}
