//! HTTP client tests against a mock bulk endpoint

#[cfg(test)]
mod tests {
    use crate::common::PostcodesServer;
    use postcode_geocoder::core::lookup::{LookupClient, LookupError, Outcome, PostcodesIoClient};
    use postcode_geocoder::Batch;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    fn batch(codes: &[&str]) -> Batch {
        Batch::new(0, codes.iter().map(|c| c.to_string()).collect())
    }

    fn client_for(server: &PostcodesServer) -> PostcodesIoClient {
        PostcodesIoClient::new(&server.config()).unwrap()
    }

    #[tokio::test]
    async fn test_sends_json_body_with_headers() {
        let server = PostcodesServer::bare().await;
        Mock::given(method("POST"))
            .and(path("/postcodes"))
            .and(header("content-type", "application/json"))
            .and(header("accept", "text/plain"))
            .and(body_json(json!({"postcodes": ["SW1A 1AA", "notapostcode"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "result": [
                    {"query": "SW1A 1AA", "result": {"postcode": "SW1A 1AA", "latitude": 51.501009, "longitude": -0.141588}},
                    {"query": "notapostcode", "result": null}
                ]
            })))
            .expect(1)
            .mount(&server.server)
            .await;

        let outcomes = client_for(&server)
            .lookup(&batch(&["SW1A 1AA", "notapostcode"]))
            .await
            .unwrap();

        assert_eq!(
            outcomes,
            vec![
                Outcome::resolved("SW1A 1AA", 51.501009, -0.141588),
                Outcome::unresolved("notapostcode"),
            ]
        );
    }

    #[tokio::test]
    async fn test_outcomes_follow_request_order() {
        let server = PostcodesServer::start().await;
        let outcomes = client_for(&server)
            .lookup(&batch(&["m1 1ae", "not1", "ec1a 1bb"]))
            .await
            .unwrap();

        let codes: Vec<&str> = outcomes.iter().map(|o| o.code()).collect();
        assert_eq!(codes, vec!["M1 1AE", "not1", "EC1A 1BB"]);
        assert!(!outcomes[1].is_resolved());
    }

    #[tokio::test]
    async fn test_follows_redirects() {
        let server = PostcodesServer::start().await;
        Mock::given(method("POST"))
            .and(path("/moved"))
            .respond_with(
                ResponseTemplate::new(307).insert_header("location", server.endpoint().as_str()),
            )
            .mount(&server.server)
            .await;

        let client = PostcodesIoClient::with_settings(
            format!("{}/moved", server.server.uri()),
            Duration::from_secs(5),
            10,
        )
        .unwrap();

        let outcomes = client.lookup(&batch(&["SW1A 1AA"])).await.unwrap();
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].is_resolved());
    }

    #[tokio::test]
    async fn test_error_payload_is_parsing_error_with_status() {
        let server = PostcodesServer::bare().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "status": 400,
                "error": "Too many postcodes submitted"
            })))
            .mount(&server.server)
            .await;

        let err = client_for(&server)
            .lookup(&batch(&["SW1A 1AA"]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            LookupError::ResponseParsing {
                status: Some(400),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_success_payload_on_error_status_is_accepted() {
        let server = PostcodesServer::bare().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "status": 500,
                "result": [{"query": "not1", "result": null}]
            })))
            .mount(&server.server)
            .await;

        let outcomes = client_for(&server)
            .lookup(&batch(&["not1"]))
            .await
            .unwrap();
        assert_eq!(outcomes, vec![Outcome::unresolved("not1")]);
    }

    #[tokio::test]
    async fn test_html_body_is_parsing_error() {
        let server = PostcodesServer::bare().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server.server)
            .await;

        let err = client_for(&server)
            .lookup(&batch(&["SW1A 1AA"]))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("HTTP 502"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        let client = PostcodesIoClient::with_settings(
            "http://127.0.0.1:9/postcodes",
            Duration::from_secs(2),
            0,
        )
        .unwrap();

        let err = client.lookup(&batch(&["SW1A 1AA"])).await.unwrap_err();
        assert!(matches!(err, LookupError::Network { .. }));
    }
}
