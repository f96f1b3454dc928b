use pokedex_catalog_client::CatalogClient;
use pokedex_catalog_client::CatalogConfig;
use pokedex_catalog_client::FilteredCollectionFetcher;
use pokedex_filter::FilterConfig;
use pokedex_filter::FilterCriteria;
use pokedex_filter::FilterQueryCodec;
use pokedex_filter::ResultsState;
use pokedex_filter::ResultsView;
use pretty_assertions::assert_eq;
use serde_json::Value;
use serde_json::json;
use std::sync::Arc;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::method;
use wiremock::matchers::path;

async fn mount(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

fn species(id: u32, name: &str, types: &[&str], height: u32, weight: u32) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(idx, kind)| json!({"slot": idx + 1, "type": {"name": kind}}))
        .collect();
    json!({"id": id, "name": name, "height": height, "weight": weight, "types": types})
}

async fn kanto_server() -> MockServer {
    let server = MockServer::start().await;
    let roster = ["bulbasaur", "charmander", "charizard", "missingno", "vulpix"];
    mount(
        &server,
        "/generation/1",
        ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "name": "generation-i",
            "pokemon_species": roster.iter().map(|name| json!({"name": name})).collect::<Vec<_>>(),
        })),
    )
    .await;
    let bodies = [
        ("bulbasaur", species(1, "bulbasaur", &["grass", "poison"], 7, 69)),
        ("charmander", species(4, "charmander", &["fire"], 6, 85)),
        ("charizard", species(6, "charizard", &["fire", "flying"], 17, 905)),
        ("vulpix", species(37, "vulpix", &["fire"], 6, 99)),
    ];
    for (name, body) in bodies {
        mount(
            &server,
            &format!("/pokemon/{name}"),
            ResponseTemplate::new(200).set_body_json(body),
        )
        .await;
    }
    mount(&server, "/pokemon/missingno", ResponseTemplate::new(404)).await;
    server
}

fn open(server: &MockServer, path: &str) -> anyhow::Result<ResultsView<CatalogClient>> {
    let config = CatalogConfig::with_base_url(server.uri());
    let fetcher = FilteredCollectionFetcher::new(CatalogClient::new(&config)?, &config);
    Ok(ResultsView::open(
        path,
        Arc::new(fetcher),
        &FilterConfig::default(),
    ))
}

#[tokio::test]
async fn encoded_form_reproduces_filtered_view() -> anyhow::Result<()> {
    let server = kanto_server().await;
    let criteria = FilterCriteria::for_generation(1)
        .with_type("Fire")
        .with_height_range(0.5, 1.0);
    let path = FilterQueryCodec::encode_criteria(&criteria);
    assert_eq!(
        path,
        "/filtered-search/generation/1/type/Fire/minHeight/0.5/maxHeight/1/"
    );

    for _ in 0..2 {
        let view = open(&server, &path)?;
        view.load().await;
        let names: Vec<String> = view
            .state()
            .matches()
            .iter()
            .map(|species| species.name.clone())
            .collect();
        assert_eq!(names, vec!["charmander", "vulpix"]);
    }
    Ok(())
}

#[tokio::test]
async fn missing_members_are_skipped_without_failing_the_view() -> anyhow::Result<()> {
    let server = kanto_server().await;
    let view = open(&server, "/filtered-search/generation/1/")?;

    view.load().await;

    let ids: Vec<u32> = view.state().matches().iter().map(|species| species.id).collect();
    assert_eq!(ids, vec![1, 4, 6, 37]);
    Ok(())
}

#[tokio::test]
async fn unknown_generation_reports_failure() -> anyhow::Result<()> {
    let server = kanto_server().await;
    let view = open(&server, "/filtered-search/generation/42/type/Fire/")?;

    view.load().await;

    assert!(matches!(&*view.state(), ResultsState::Failed(_)));
    Ok(())
}
