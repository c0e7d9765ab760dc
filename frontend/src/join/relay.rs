use gloo_net::http::Request;
use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::join::validation::FormValues;

/// Body posted to the form relay.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub city: String,
    pub zip_code: String,
    pub phone: String,
    pub company_name: String,
    pub max_travel_distance: String,
    pub specializations: String,
    #[serde(rename = "_subject")]
    pub subject: String,
}

impl ApplicationPayload {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            email: values.email.clone(),
            city: values.city.clone(),
            zip_code: values.zip_code.clone(),
            phone: values.phone.clone(),
            company_name: values.company_name.clone(),
            max_travel_distance: values.max_travel_distance.clone(),
            specializations: values.specializations.join(", "),
            subject: config::RELAY_SUBJECT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The relay answered with a non-2xx status.
    #[error("Submission failed")]
    Rejected { status: u16 },
    /// The request never completed.
    #[error("{0}")]
    Transport(String),
}

pub type SubmissionResult = Result<(), SubmissionError>;

/// Delivers an application somewhere. Exactly one attempt per call.
#[allow(async_fn_in_trait)]
pub trait RelayClient {
    async fn send(&self, payload: &ApplicationPayload) -> SubmissionResult;
}

/// The hosted form relay, reached over `fetch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormRelay {
    endpoint: String,
}

impl FormRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl Default for FormRelay {
    fn default() -> Self {
        Self::new(config::get_relay_url())
    }
}

/// Keeps only the JS error's message, without its `TypeError: ` style prefix.
fn transport_error(e: gloo_net::Error) -> SubmissionError {
    match e {
        gloo_net::Error::JsError(js) => SubmissionError::Transport(js.message),
        other => SubmissionError::Transport(other.to_string()),
    }
}

impl RelayClient for FormRelay {
    async fn send(&self, payload: &ApplicationPayload) -> SubmissionResult {
        let response = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .json(payload)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;

        if response.ok() {
            info!("Relay accepted application with status {}", response.status());
            Ok(())
        } else {
            Err(SubmissionError::Rejected { status: response.status() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_uses_relay_field_names() {
        let values = FormValues {
            first_name: "Ana".to_string(),
            last_name: "Perez".to_string(),
            email: "ana@example.com".to_string(),
            phone: "(631) 555-0100".to_string(),
            city: "Huntington".to_string(),
            zip_code: "11746-1234".to_string(),
            company_name: "Perez Tile".to_string(),
            max_travel_distance: "25 miles".to_string(),
            specializations: vec!["Tiling".to_string(), "Masonry".to_string()],
        };

        let payload = serde_json::to_value(ApplicationPayload::from_values(&values)).unwrap();

        assert_eq!(
            payload,
            json!({
                "firstName": "Ana",
                "lastName": "Perez",
                "email": "ana@example.com",
                "city": "Huntington",
                "zipCode": "11746-1234",
                "phone": "(631) 555-0100",
                "companyName": "Perez Tile",
                "maxTravelDistance": "25 miles",
                "specializations": "Tiling, Masonry",
                "_subject": "New Team Member Application",
            })
        );
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(SubmissionError::Rejected { status: 422 }.to_string(), "Submission failed");
        assert_eq!(
            SubmissionError::Transport("Failed to fetch".to_string()).to_string(),
            "Failed to fetch"
        );
    }

    #[test]
    fn non_js_faults_keep_their_display_text() {
        assert_eq!(
            transport_error(gloo_net::Error::GlooError("Request body already used".to_string())),
            SubmissionError::Transport("Request body already used".to_string())
        );

        let serde_fault = serde_json::from_str::<u8>("x").unwrap_err();
        let expected = serde_fault.to_string();
        assert_eq!(
            transport_error(gloo_net::Error::SerdeError(serde_fault)),
            SubmissionError::Transport(expected)
        );
    }

    #[test]
    fn default_relay_points_at_configured_url() {
        assert_eq!(FormRelay::default(), FormRelay::new(config::get_relay_url()));
    }
}
