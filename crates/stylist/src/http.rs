//! Advisor that forwards each request to an external HTTP endpoint.

use std::time::Duration;

use reqwest::Url;
use serde::Serialize;

use crate::advisor::StyleAdvisor;
use crate::request::OutfitRequest;
use crate::result::{OutfitSuggestions, StylistError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Body POSTed to the endpoint: the request fields plus the rendered prompt.
#[derive(Serialize)]
struct WireRequest<'a> {
    #[serde(flatten)]
    request: &'a OutfitRequest,
    prompt: String,
}

/// POSTs `{user_preferences, seasonal_trends, product_catalog, prompt}` as
/// JSON and expects `{outfit_suggestions}` back.
///
/// `suggest` blocks on the ambient tokio runtime, so call it from the
/// blocking pool (`spawn_blocking`), never from an async task.
#[derive(Debug, Clone)]
pub struct HttpStyleAdvisor {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpStyleAdvisor {
    pub fn new(endpoint: Url) -> Result<Self, StylistError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| StylistError::Unavailable(format!("http client: {e}")))?;
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl StyleAdvisor for HttpStyleAdvisor {
    fn suggest(&self, request: &OutfitRequest) -> Result<OutfitSuggestions, StylistError> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| StylistError::Unavailable(format!("no async runtime: {e}")))?;
        let body = WireRequest {
            request,
            prompt: request.render_prompt(),
        };

        runtime.block_on(async {
            let response = self
                .client
                .post(self.endpoint.clone())
                .json(&body)
                .send()
                .await
                .map_err(|e| StylistError::Unavailable(format!("{}: {e}", self.endpoint)))?;

            let status = response.status();
            if !status.is_success() {
                return Err(StylistError::Failed(format!("advisor answered {status}")));
            }

            response
                .json::<OutfitSuggestions>()
                .await
                .map_err(|e| StylistError::Failed(format!("undecodable advisor reply: {e}")))
        })
    }
}
