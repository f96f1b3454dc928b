use pokedex_catalog_client::FilteredCollectionFetcher;
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use wiremock::MockServer;

use super::support::client_for;
use super::support::config_for;
use super::support::generation_body;
use super::support::mount_json;
use super::support::mount_raw;
use super::support::mount_status;
use super::support::species_body;

#[tokio::test]
async fn partial_failures_are_dropped_from_roster() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let names: Vec<String> = (1..=150).map(|i| format!("mon-{i}")).collect();
    mount_json(&server, "/generation/1", generation_body(1, &names)).await;
    for (idx, name) in names.iter().enumerate() {
        let route = format!("/pokemon/{name}");
        match idx {
            // unreachable, missing and malformed members
            10 => mount_status(&server, &route, 500).await,
            20 => mount_status(&server, &route, 404).await,
            30 => mount_raw(&server, &route, "{not json").await,
            _ => {
                let id = u32::try_from(idx + 1)?;
                mount_json(&server, &route, species_body(id, name, &["normal"])).await;
            }
        }
    }
    let fetcher = FilteredCollectionFetcher::new(client_for(&server)?, &config_for(&server));

    let result = fetcher.fetch_roster(1).await?;

    let failed: HashSet<&str> = result.failed_names().collect();
    assert_eq!(failed, HashSet::from(["mon-11", "mon-21", "mon-31"]));
    let summaries = result.into_summaries();
    assert_eq!(summaries.len(), 147);
    let unique: HashSet<u32> = summaries.iter().map(|summary| summary.id).collect();
    assert_eq!(unique.len(), 147);
    Ok(())
}

#[tokio::test]
async fn roster_request_failure_surfaces_as_error() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_status(&server, "/generation/42", 404).await;
    let fetcher = FilteredCollectionFetcher::new(client_for(&server)?, &config_for(&server));

    let err = fetcher.fetch_roster(42).await.err();

    let err = err.ok_or_else(|| anyhow::anyhow!("expected roster failure"))?;
    assert_eq!(err.generation, 42);
    assert!(err.source.is_not_found());
    Ok(())
}
