use reqwest::{
    Client as ReqwestClient, Method,
    header::{HeaderMap, HeaderValue},
};
use url::Url;

use super::types::{ChatRequest, ChatResponse};
use crate::Result;
use crate::auth::RequestSigner;

/// Client for the Generative AI `chat` action.
///
/// Every request is signed with the client's [`RequestSigner`] immediately
/// before it is sent.
///
/// # Example
///
/// ```no_run
/// use oci_genai_client::auth::ApiKeySigner;
/// use oci_genai_client::chat::Client;
/// use oci_genai_client::chat::types::ChatRequest;
/// use oci_genai_client::profile;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let profile = profile::load("~/.oci/config", "DEFAULT")?;
/// let signer = ApiKeySigner::from_profile(&profile)?;
/// let client = Client::for_region("eu-frankfurt-1", signer)?;
///
/// let request = ChatRequest::builder()
///     .compartment_id(profile.tenancy.clone())
///     .message("Tell me something about Oracle.")
///     .build();
/// let response = client.chat(&request).await?;
/// println!("{:?}", response.text());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client<S> {
    endpoint: Url,
    client: ReqwestClient,
    signer: S,
}

impl<S: RequestSigner> Client<S> {
    /// Creates a client posting to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL is invalid or the HTTP client fails to build.
    pub fn new(endpoint: &str, signer: S) -> Result<Client<S>> {
        let mut headers = HeaderMap::new();

        headers.insert("User-Agent", HeaderValue::from_static("oci_genai_client"));
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        let client = ReqwestClient::builder().default_headers(headers).build()?;
        let endpoint = Url::parse(endpoint)?;

        Ok(Self {
            endpoint,
            client,
            signer,
        })
    }

    /// Creates a client for the public inference endpoint of `region`.
    pub fn for_region(region: &str, signer: S) -> Result<Client<S>> {
        Self::new(&super::endpoint(region), signer)
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[must_use]
    pub fn signer(&self) -> &S {
        &self.signer
    }

    /// Sends one chat turn and returns the decoded response body.
    ///
    /// The request is attempted exactly once. Network failures surface as
    /// [`Kind::Transport`](crate::error::Kind::Transport) and non-success
    /// statuses as [`Kind::Api`](crate::error::Kind::Api).
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let mut http_request = self
            .client
            .request(Method::POST, self.endpoint.clone())
            .json(request)
            .build()?;

        self.signer.sign(&mut http_request)?;

        crate::request(&self.client, http_request).await
    }
}

/// Signs and posts `request` to `endpoint_url` with a one-off [`Client`].
pub async fn send_chat<S: RequestSigner>(
    signer: S,
    endpoint_url: &str,
    request: &ChatRequest,
) -> Result<ChatResponse> {
    Client::new(endpoint_url, signer)?.chat(request).await
}
