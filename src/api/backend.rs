//! CrypGod Backend API
//!
//! The chat endpoint (non-streaming mode; the streaming mode lives in
//! [`crate::stream::reader`]) and the wallet public-address endpoint.

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use web_sys::AbortController;

/// Upper bound on a non-streaming request, in milliseconds.
const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Body of `POST /api/chat`, shared by the streaming and non-streaming
/// modes.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ChatResponse {
    response: String,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublicAddressResponse {
    public_address: String,
}

/// Send a chat message without streaming and return the complete response
/// text. The request is aborted client-side if the server takes longer than
/// [`REQUEST_TIMEOUT_MS`].
pub async fn send_chat(
    api_base: &str,
    message: &str,
    session_id: Option<String>,
) -> Result<String, String> {
    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());

    // A late abort on an already-settled fetch is a no-op.
    if let Some(controller) = controller.clone() {
        Timeout::new(REQUEST_TIMEOUT_MS, move || controller.abort()).forget();
    }

    let response = Request::post(&format!("{}/api/chat", api_base))
        .abort_signal(signal.as_ref())
        .json(&ChatRequest {
            message: message.to_string(),
            stream: false,
            session_id,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    let result: ChatResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.response)
}

/// Fetch the wallet's public address from the backend.
pub async fn fetch_public_address(api_base: &str) -> Result<String, String> {
    let response = Request::get(&format!("{}/api/wallet/public_address", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    let result: PublicAddressResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.public_address)
}
