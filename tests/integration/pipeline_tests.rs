//! Full pipeline runs against a mock bulk endpoint

#[cfg(test)]
mod tests {
    use crate::common::assertions::ResultTableAssertions;
    use crate::common::{PostcodesServer, fixtures};
    use postcode_geocoder::core::pipeline::{Notifier, PipelineState, RecordingNotifier};
    use postcode_geocoder::utils::error::{
        EMPTY_SELECTION_MESSAGE, REMOTE_CALL_FAILED_MESSAGE,
    };
    use postcode_geocoder::{FailurePolicy, GeocoderError, Pipeline, TableCell};
    use std::sync::Arc;
    use wiremock::matchers::{body_string_contains, method};
    use wiremock::{Mock, ResponseTemplate};

    fn pipeline(server: &PostcodesServer) -> (Pipeline, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let pipeline =
            Pipeline::from_config(&server.config(), notifier.clone() as Arc<dyn Notifier>)
                .unwrap();
        (pipeline, notifier)
    }

    /// Makes every batch containing `code` fail with a 500 page
    async fn fail_batches_containing(server: &PostcodesServer, code: &str) {
        Mock::given(method("POST"))
            .and(body_string_contains(code))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .with_priority(1)
            .mount(&server.server)
            .await;
    }

    #[tokio::test]
    async fn test_mixed_selection_round_trip() {
        let server = PostcodesServer::start().await;
        let (mut pipeline, notifier) = pipeline(&server);

        let report = pipeline.run_grid(&fixtures::mixed_selection()).await.unwrap();

        report.table.assert_has_header();
        report
            .table
            .assert_codes(&fixtures::mixed_selection_codes());
        report.table.assert_unmatched(3);
        assert_eq!(report.table.rows()[1][1], TableCell::Number(50.0));
        assert!(report.is_complete());
        assert!(notifier.messages().is_empty());
        assert_eq!(pipeline.state(), PipelineState::Done);

        assert_eq!(
            server.requested_batches().await,
            vec![fixtures::mixed_selection_codes()]
        );
    }

    #[tokio::test]
    async fn test_large_selection_is_split_into_bounded_requests() {
        let server = PostcodesServer::start().await;
        let (mut pipeline, _) = pipeline(&server);

        let report = pipeline.run_grid(&fixtures::numbered_codes(250)).await.unwrap();

        let sizes: Vec<usize> = server
            .requested_batches()
            .await
            .iter()
            .map(|b| b.len())
            .collect();
        assert_eq!(sizes, vec![99, 99, 52]);
        assert_eq!(report.batches, 3);
        assert_eq!(report.table.len(), 251);

        let sent: Vec<String> = server.requested_batches().await.concat();
        let returned: Vec<String> = report
            .table
            .data_rows()
            .iter()
            .map(|r| r[0].to_string())
            .collect();
        assert_eq!(sent, returned);
    }

    #[tokio::test]
    async fn test_exact_multiple_of_batch_size_sends_no_empty_request() {
        let server = PostcodesServer::start().await;
        let (mut pipeline, _) = pipeline(&server);

        pipeline.run_grid(&fixtures::numbered_codes(198)).await.unwrap();

        let sizes: Vec<usize> = server
            .requested_batches()
            .await
            .iter()
            .map(|b| b.len())
            .collect();
        assert_eq!(sizes, vec![99, 99]);
    }

    #[tokio::test]
    async fn test_blank_selection_never_calls_remote() {
        let server = PostcodesServer::start().await;
        let (mut pipeline, notifier) = pipeline(&server);

        let err = pipeline
            .run_grid(&fixtures::blank_selection())
            .await
            .unwrap_err();

        assert!(matches!(err, GeocoderError::EmptySelection));
        assert_eq!(notifier.messages(), vec![EMPTY_SELECTION_MESSAGE]);
        assert!(server.requested_batches().await.is_empty());
    }

    #[tokio::test]
    async fn test_skip_batch_keeps_other_rows() {
        let server = PostcodesServer::start().await;
        // Code 120 lands in the second batch
        fail_batches_containing(&server, "AB12 0CD").await;
        let (mut pipeline, notifier) = pipeline(&server);

        let report = pipeline.run_grid(&fixtures::numbered_codes(250)).await.unwrap();

        assert!(!report.is_complete());
        assert_eq!(report.failed_batches.len(), 1);
        assert_eq!(report.failed_batches[0].index, 1);
        assert_eq!(report.missing_codes(), 99);
        assert_eq!(report.table.data_rows().len(), 151);
        assert_eq!(notifier.messages(), vec![REMOTE_CALL_FAILED_MESSAGE]);
        assert_eq!(server.requested_batches().await.len(), 3);
    }

    #[tokio::test]
    async fn test_short_response_counts_as_failed_batch() {
        let server = PostcodesServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("AB12 0CD"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": 200,
                "result": [{"query": "AB12 0CD", "result": null}]
            })))
            .with_priority(1)
            .mount(&server.server)
            .await;
        let (mut pipeline, notifier) = pipeline(&server);

        let report = pipeline.run_grid(&fixtures::numbered_codes(250)).await.unwrap();

        assert!(!report.is_complete());
        assert_eq!(report.failed_batches[0].index, 1);
        assert!(report.failed_batches[0].error.contains("expected 99 results, got 1"));
        assert_eq!(report.table.data_rows().len(), 151);
        assert_eq!(notifier.messages(), vec![REMOTE_CALL_FAILED_MESSAGE]);
    }

    #[tokio::test]
    async fn test_abort_stops_after_failed_batch() {
        let server = PostcodesServer::start().await;
        fail_batches_containing(&server, "AB12 0CD").await;
        let (pipeline, notifier) = pipeline(&server);
        let mut pipeline = pipeline.with_failure_policy(FailurePolicy::Abort);

        let err = pipeline
            .run_grid(&fixtures::numbered_codes(250))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GeocoderError::RemoteCallFailed { batch_index: 1, .. }
        ));
        assert_eq!(notifier.messages(), vec![REMOTE_CALL_FAILED_MESSAGE]);
        assert_eq!(server.requested_batches().await.len(), 2);
        assert_eq!(pipeline.state(), PipelineState::Failed);
    }
}
