//! E2E tests against api.postcodes.io

#[cfg(test)]
mod tests {
    use postcode_geocoder::core::lookup::{LookupClient, Outcome};
    use postcode_geocoder::{Batch, PostcodesIoClient, geocode_grid, grid_from_rows};

    #[tokio::test]
    #[ignore]
    async fn test_bulk_lookup_resolves_known_postcode() {
        let client = PostcodesIoClient::default();
        let batch = Batch::new(0, vec!["SW1A 1AA".to_string(), "notapostcode".to_string()]);

        let outcomes = client.lookup(&batch).await.expect("lookup failed");

        assert_eq!(outcomes.len(), 2);
        match &outcomes[0] {
            Outcome::Resolved {
                postcode, latitude, ..
            } => {
                assert_eq!(postcode, "SW1A 1AA");
                let latitude = latitude.expect("latitude missing");
                assert!((latitude - 51.501).abs() < 0.01, "latitude {}", latitude);
            }
            other => panic!("expected a match, got {:?}", other),
        }
        assert_eq!(outcomes[1], Outcome::unresolved("notapostcode"));
    }

    #[tokio::test]
    #[ignore]
    async fn test_geocode_grid_spanning_two_batches() {
        let rows: Vec<Vec<&str>> = (0..120).map(|_| vec!["EC1A 1BB"]).collect();
        let report = geocode_grid(&grid_from_rows(rows)).await.expect("run failed");

        assert_eq!(report.batches, 2);
        assert_eq!(report.table.data_rows().len(), 120);
        assert!(report.is_complete());
    }
}
