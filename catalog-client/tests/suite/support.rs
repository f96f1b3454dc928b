use pokedex_catalog_client::CatalogClient;
use pokedex_catalog_client::CatalogConfig;
use serde_json::Value;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::method;
use wiremock::matchers::path;

pub(crate) fn client_for(server: &MockServer) -> anyhow::Result<CatalogClient> {
    Ok(CatalogClient::new(&config_for(server))?)
}

pub(crate) fn config_for(server: &MockServer) -> CatalogConfig {
    CatalogConfig {
        max_concurrent_requests: 8,
        ..CatalogConfig::with_base_url(server.uri())
    }
}

pub(crate) fn species_body(id: u32, name: &str, types: &[&str]) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(idx, kind)| json!({"slot": idx + 1, "type": {"name": kind}}))
        .collect();
    json!({
        "id": id,
        "name": name,
        "height": 7,
        "weight": 69,
        "types": types,
        "sprites": {"front_default": format!("https://sprites.test/{id}.png")}
    })
}

pub(crate) fn generation_body(id: u32, names: &[String]) -> Value {
    let species: Vec<Value> = names
        .iter()
        .map(|name| json!({"name": name, "url": format!("https://catalog.test/pokemon-species/{name}/")}))
        .collect();
    json!({"id": id, "name": format!("generation-{id}"), "pokemon_species": species})
}

pub(crate) async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub(crate) async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

pub(crate) async fn mount_raw(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}
