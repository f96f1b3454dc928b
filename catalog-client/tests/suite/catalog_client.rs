use pokedex_catalog_client::CatalogConfig;
use pokedex_catalog_client::CatalogError;
use pokedex_catalog_client::LookupStatus;
use pokedex_catalog_client::SpeciesSource;
use pokedex_catalog_client::load_name_entries;
use pokedex_catalog_client::lookup_species;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::matchers::query_param;

use super::support::client_for;
use super::support::config_for;
use super::support::mount_json;
use super::support::mount_raw;
use super::support::mount_status;
use super::support::species_body;

#[tokio::test]
async fn fetches_species_summary() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/pokemon/charizard",
        species_body(6, "charizard", &["fire", "flying"]),
    )
    .await;
    let client = client_for(&server)?;

    let summary = client.species("Charizard").await?;

    assert_eq!(summary.id, 6);
    assert_eq!(summary.primary_type(), Some("fire"));
    assert_eq!(summary.secondary_type(), Some("flying"));
    Ok(())
}

#[tokio::test]
async fn missing_species_maps_to_not_found() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_status(&server, "/pokemon/missingno", 404).await;
    let client = client_for(&server)?;

    let err = client.species("missingno").await.err();

    assert!(matches!(err, Some(CatalogError::NotFound { .. })));
    Ok(())
}

#[tokio::test]
async fn server_errors_keep_status() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_status(&server, "/generation/1", 503).await;
    let client = client_for(&server)?;

    let err = client.generation_roster(1).await.err();

    match err {
        Some(CatalogError::Status { status, .. }) => assert_eq!(status.as_u16(), 503),
        other => panic!("expected status error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn malformed_payload_is_reported() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_raw(&server, "/pokemon/pikachu", r#"{"id": "not-a-number"}"#).await;
    let client = client_for(&server)?;

    let err = client.species("pikachu").await.err();

    assert!(matches!(err, Some(CatalogError::Malformed { .. })));
    Ok(())
}

#[tokio::test]
async fn name_entries_derive_sprites_from_ids() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1302,
            "results": [
                {"name": "bulbasaur", "url": "https://catalog.test/pokemon/1/"},
                {"name": "Ivysaur", "url": "https://catalog.test/pokemon/2/"},
                {"name": "glitch"}
            ]
        })))
        .mount(&server)
        .await;
    let client = client_for(&server)?;
    let config = CatalogConfig {
        name_index_limit: 3,
        sprite_base_url: "https://sprites.test/pokemon/".to_string(),
        ..config_for(&server)
    };

    let entries = load_name_entries(&client, &config, "placeholder.png").await?;

    let flattened: Vec<(&str, &str)> = entries
        .iter()
        .map(|entry| (entry.name(), entry.display_asset()))
        .collect();
    assert_eq!(
        flattened,
        vec![
            ("bulbasaur", "https://sprites.test/pokemon/1.png"),
            ("ivysaur", "https://sprites.test/pokemon/2.png"),
            ("glitch", "placeholder.png"),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn lookup_distinguishes_not_found_from_failure() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_json(&server, "/pokemon/eevee", species_body(133, "eevee", &["normal"])).await;
    mount_status(&server, "/pokemon/agumon", 404).await;
    mount_status(&server, "/pokemon/ditto", 500).await;
    let client = client_for(&server)?;

    assert!(matches!(
        lookup_species(&client, "Eevee").await,
        LookupStatus::Found(summary) if summary.id == 133
    ));
    assert!(matches!(
        lookup_species(&client, "agumon").await,
        LookupStatus::NotFound { name } if name == "agumon"
    ));
    assert!(matches!(
        lookup_species(&client, "ditto").await,
        LookupStatus::Failed(CatalogError::Status { .. })
    ));
    Ok(())
}
