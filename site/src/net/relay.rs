//! Email relay client for the contact form.
//!
//! Client-side (hydrate): a real `POST` to the EmailJS REST endpoint via
//! `gloo-net`. Server-side (SSR): the relay reports itself unavailable since
//! submissions only happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode collapses into [`RelayError`]; the submission flow only
//! distinguishes success from failure, the variants exist for logging.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use std::future::Future;
use std::pin::Pin;

use serde::Serialize;

use crate::config::RelayConfig;
use crate::state::contact::ContactFormInput;

/// Body EmailJS answers with on success.
#[cfg(any(test, feature = "hydrate"))]
const OK_BODY: &str = "OK";

/// Errors produced by a relay send.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    /// The request never reached the relay.
    #[error("relay request failed: {0}")]
    Network(String),

    /// The relay answered with a non-success status.
    #[error("relay rejected message: status {status}")]
    Status { status: u16, body: String },

    /// The relay answered 2xx but not with the expected body.
    #[error("relay response malformed: {0}")]
    UnexpectedBody(String),

    /// No relay exists in this environment (server render).
    #[error("relay not available on server")]
    Unavailable,
}

/// Template parameters, named the way the relay template expects them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub user_name: String,
    pub user_email: String,
    pub message: String,
}

impl From<&ContactFormInput> for ContactFields {
    fn from(input: &ContactFormInput) -> Self {
        Self {
            user_name: input.name.trim().to_owned(),
            user_email: input.email.trim().to_owned(),
            message: input.message.clone(),
        }
    }
}

/// JSON body of an EmailJS `email/send` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelayMessage {
    pub service_id: String,
    pub template_id: String,
    /// EmailJS calls the public key `user_id` on the wire.
    #[serde(rename = "user_id")]
    pub public_key: String,
    pub template_params: ContactFields,
}

impl RelayMessage {
    #[must_use]
    pub fn new(config: &RelayConfig, fields: ContactFields) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
            template_params: fields,
        }
    }
}

/// Pending relay answer. Single-threaded, so not `Send`.
pub type RelayFuture = Pin<Box<dyn Future<Output = Result<(), RelayError>>>>;

/// Something that can deliver a contact message.
pub trait Relay: 'static {
    fn send(&self, fields: ContactFields) -> RelayFuture;
}

/// Map a relay HTTP answer onto success or a [`RelayError`].
#[cfg(any(test, feature = "hydrate"))]
fn interpret_response(status: u16, body: &str) -> Result<(), RelayError> {
    if !(200..300).contains(&status) {
        return Err(RelayError::Status { status, body: body.to_owned() });
    }
    if body.trim() != OK_BODY {
        return Err(RelayError::UnexpectedBody(body.to_owned()));
    }
    Ok(())
}

/// EmailJS REST client.
#[derive(Clone, Debug)]
pub struct EmailJsRelay {
    config: RelayConfig,
}

impl EmailJsRelay {
    #[must_use]
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

impl Relay for EmailJsRelay {
    fn send(&self, fields: ContactFields) -> RelayFuture {
        let message = RelayMessage::new(&self.config, fields);
        let endpoint = self.config.endpoint.clone();
        Box::pin(post_message(endpoint, message))
    }
}

async fn post_message(endpoint: String, message: RelayMessage) -> Result<(), RelayError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint)
            .json(&message)
            .map_err(|e| RelayError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;
        let status = resp.status();
        log::debug!("relay: {endpoint} answered {status}");
        let body = resp.text().await.map_err(|e| RelayError::UnexpectedBody(e.to_string()))?;
        interpret_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, message);
        Err(RelayError::Unavailable)
    }
}
