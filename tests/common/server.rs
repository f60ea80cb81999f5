//! Local stand-in for the postcodes.io bulk endpoint

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use postcode_geocoder::config::GeocoderConfig;

pub const LOOKUP_PATH: &str = "/postcodes";

/// Answers bulk lookups the way postcodes.io does
///
/// Codes starting with "not" are unmatched. Everything else resolves to its
/// uppercase form, at a latitude that encodes its position in the request.
pub struct BulkLookupResponder;

impl Respond for BulkLookupResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = match serde_json::from_slice(&request.body) {
            Ok(body) => body,
            Err(_) => {
                return ResponseTemplate::new(400)
                    .set_body_json(json!({"status": 400, "error": "Invalid JSON submitted"}));
            }
        };

        let codes = body["postcodes"].as_array().cloned().unwrap_or_default();
        let result: Vec<Value> = codes
            .iter()
            .enumerate()
            .map(|(i, code)| {
                let code = code.as_str().unwrap_or_default();
                if code.to_lowercase().starts_with("not") {
                    json!({"query": code, "result": null})
                } else {
                    json!({
                        "query": code,
                        "result": {
                            "postcode": code.to_uppercase(),
                            "latitude": 50.0 + i as f64 / 1000.0,
                            "longitude": -0.1,
                            "country": "England"
                        }
                    })
                }
            })
            .collect();

        ResponseTemplate::new(200).set_body_json(json!({"status": 200, "result": result}))
    }
}

/// Mock server with the bulk responder mounted
pub struct PostcodesServer {
    pub server: MockServer,
}

impl PostcodesServer {
    /// Server answering every lookup
    pub async fn start() -> Self {
        let server = Self::bare().await;
        server.mount_responder().await;
        server
    }

    /// Server with nothing mounted
    pub async fn bare() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub async fn mount_responder(&self) {
        Mock::given(method("POST"))
            .and(path(LOOKUP_PATH))
            .respond_with(BulkLookupResponder)
            .mount(&self.server)
            .await;
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.server.uri(), LOOKUP_PATH)
    }

    /// Geocoder configuration pointing at this server
    pub fn config(&self) -> GeocoderConfig {
        GeocoderConfig {
            endpoint: self.endpoint(),
            timeout: 5,
            ..Default::default()
        }
    }

    /// `postcodes` arrays of every request received, in arrival order
    pub async fn requested_batches(&self) -> Vec<Vec<String>> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| {
                let body: Value = serde_json::from_slice(&request.body).unwrap();
                body["postcodes"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|c| c.as_str().unwrap().to_string())
                    .collect()
            })
            .collect()
    }
}
