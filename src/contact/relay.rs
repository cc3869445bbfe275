use super::{ContactError, ContactForm, RelayTransport};

#[cfg(feature = "hydrate")]
use gloo_net::http::Request;

/// Browser transport: posts the form as JSON to the relay endpoint.
#[derive(Debug, Clone)]
pub struct HttpRelay {
    endpoint: String,
}

impl HttpRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(feature = "hydrate")]
impl RelayTransport for HttpRelay {
    async fn deliver(&self, form: &ContactForm) -> Result<u16, ContactError> {
        // `json` sets the Content-Type header; Accept keeps the relay from redirecting
        let request = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .json(form)
            .map_err(|e| ContactError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;
        log::debug!("relay answered {} {}", response.status(), response.status_text());
        Ok(response.status())
    }
}

#[cfg(not(feature = "hydrate"))]
impl RelayTransport for HttpRelay {
    async fn deliver(&self, _form: &ContactForm) -> Result<u16, ContactError> {
        Err(ContactError::Transport(format!(
            "{} is only reachable from the browser",
            self.endpoint
        )))
    }
}
