//! Streaming Chat Reader
//!
//! Opens a streaming chat request and drives the [`StreamDecoder`] from the
//! fetch response body, invoking a callback for every decoded event. Any
//! transport failure is reported as a single terminal error event so the
//! caller can render a recoverable state instead of unwinding.

use js_sys::{Reflect, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{ReadableStreamDefaultReader, Request, RequestInit, Response};

use crate::api::backend::ChatRequest;
use crate::stream::decoder::{ChatEvent, StreamDecoder};

/// Send a chat message and stream decoded events into `on_event`.
///
/// Events arrive in the order the server emitted them; decoding and the
/// callback run synchronously per chunk, so the caller sees a totally
/// ordered sequence.
pub async fn stream_chat(
    api_base: &str,
    message: &str,
    session_id: Option<String>,
    mut on_event: impl FnMut(ChatEvent),
) {
    if let Err(error) = run(api_base, message, session_id, &mut on_event).await {
        on_event(ChatEvent::Error { content: error });
    }
}

async fn run(
    api_base: &str,
    message: &str,
    session_id: Option<String>,
    on_event: &mut impl FnMut(ChatEvent),
) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let body = serde_json::to_string(&ChatRequest {
        message: message.to_string(),
        stream: true,
        session_id,
    })
    .map_err(|e| format!("Request build error: {}", e))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let url = format!("{}/api/chat", api_base);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch result".to_string())?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    let stream = response.body().ok_or_else(|| "response has no body".to_string())?;
    let reader: ReadableStreamDefaultReader = stream.get_reader().unchecked_into();

    let mut decoder = StreamDecoder::new();
    loop {
        let result = JsFuture::from(reader.read()).await.map_err(js_error)?;

        let done = Reflect::get(&result, &JsValue::from_str("done"))
            .map_err(js_error)?
            .as_bool()
            .unwrap_or(true);
        if done {
            break;
        }

        let value = Reflect::get(&result, &JsValue::from_str("value")).map_err(js_error)?;
        let chunk = Uint8Array::new(&value).to_vec();
        for event in decoder.feed(&chunk) {
            on_event(event);
        }
    }

    // The final record may not be newline-terminated
    if let Some(event) = decoder.finish() {
        on_event(event);
    }

    Ok(())
}

fn js_error(err: JsValue) -> String {
    err.as_string()
        .map(|msg| format!("Network error: {}", msg))
        .unwrap_or_else(|| format!("Network error: {:?}", err))
}
