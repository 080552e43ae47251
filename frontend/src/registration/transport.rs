use gloo_net::http::Request;
use log::info;
use wasm_bindgen::prelude::*;

use super::errors::{TrackingError, TransportError};
use super::state::RegistrationFormState;

/// Where captured leads are sent. Returns the HTTP status of the reply;
/// deciding what counts as success is up to the caller.
pub trait LeadWebhook {
    async fn post_lead(&self, lead: &RegistrationFormState) -> Result<u16, TransportError>;
}

/// Fire-and-forget conversion tracking, called once per captured lead.
pub trait LeadTracker {
    fn track_lead(&self) -> Result<(), TrackingError>;
}

pub struct GlooWebhook {
    url: String,
}

impl GlooWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl LeadWebhook for GlooWebhook {
    async fn post_lead(&self, lead: &RegistrationFormState) -> Result<u16, TransportError> {
        let request = Request::post(&self.url)
            .header("Content-Type", "application/json")
            .json(lead)
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        info!("Webhook responded with status {}", response.status());
        Ok(response.status())
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = window, js_name = fbq, catch)]
    fn fbq(command: &str, event: &str) -> Result<(), JsValue>;
}

/// Meta pixel loaded by `index.html`. Ad blockers routinely remove it, in
/// which case the call throws and is reported as an error.
pub struct PixelTracker;

impl LeadTracker for PixelTracker {
    fn track_lead(&self) -> Result<(), TrackingError> {
        fbq("track", "Lead").map_err(|e| TrackingError(format!("{:?}", e)))
    }
}
