use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};

use storefront_api::app::{build_app, services::AppServices};
use storefront_catalog::{CatalogRepository, InMemoryCatalog};
use storefront_stylist::{
    HttpStyleAdvisor, OutfitRequest, OutfitSuggestions, StyleAdvisor, StylistError,
};
use storefront_wishlist::{FileStorage, InMemoryStorage, KeyValueStorage};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(services: AppServices) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = build_app(Arc::new(services));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn seeded() -> Self {
        Self::spawn(seeded_services(Arc::new(InMemoryStorage::new()), None)).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn seeded_services(
    storage: Arc<dyn KeyValueStorage>,
    advisor: Option<Arc<dyn StyleAdvisor>>,
) -> AppServices {
    let catalog: Arc<dyn CatalogRepository> = Arc::new(InMemoryCatalog::seeded().unwrap());
    AppServices::new(catalog, storage, advisor)
}

/// Echoes the preferences back so tests can see what reached the advisor.
struct EchoAdvisor;

impl StyleAdvisor for EchoAdvisor {
    fn suggest(&self, request: &OutfitRequest) -> Result<OutfitSuggestions, StylistError> {
        Ok(OutfitSuggestions::new(format!("For \"{}\": try the Denim Jacket.", request.user_preferences)))
    }
}

struct BrokenAdvisor;

impl StyleAdvisor for BrokenAdvisor {
    fn suggest(&self, _request: &OutfitRequest) -> Result<OutfitSuggestions, StylistError> {
        Err(StylistError::Failed("model returned no output".to_string()))
    }
}

/// Stand-in for the external suggestion endpoint.
async fn spawn_stylist_endpoint(fail: bool) -> (String, tokio::task::JoinHandle<()>) {
    async fn answer(axum::Json(body): axum::Json<Value>) -> axum::Json<Value> {
        let prompt = body["prompt"].as_str().unwrap_or_default();
        axum::Json(json!({
            "outfit_suggestions": format!(
                "prefs={} prompt_ok={} catalog_ok={}",
                body["user_preferences"].as_str().unwrap_or_default(),
                prompt.contains("User Preferences:"),
                body["product_catalog"].as_str().unwrap_or_default().contains("Denim Jacket"),
            )
        }))
    }

    async fn broken() -> axum::http::StatusCode {
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    }

    let app = if fail {
        axum::Router::new().route("/suggest", axum::routing::post(broken))
    } else {
        axum::Router::new().route("/suggest", axum::routing::post(answer))
    };
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/suggest", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (url, handle)
}

fn http_advisor(url: &str) -> Arc<dyn StyleAdvisor> {
    Arc::new(HttpStyleAdvisor::new(url.parse().unwrap()).unwrap())
}

fn ids(body: &Value, field: &str) -> Vec<u64> {
    body[field]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect()
}

async fn get_json(client: &reqwest::Client, url: String) -> (StatusCode, Value) {
    let res = client.get(url).send().await.unwrap();
    let status = res.status();
    (status, res.json().await.unwrap())
}

fn draft(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Lightweight layer for cool evenings.",
        "price": 9900,
        "image": "https://picsum.photos/600/800?random=40",
        "category": "Outerwear",
        "sizes": ["S", "M"],
        "colors": ["Olive"],
    })
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::seeded().await;
    let res = reqwest::get(srv.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn default_listing_is_the_full_catalog_in_featured_order() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let (status, body) = get_json(&client, srv.url("/products")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body, "items"), (1..=12).collect::<Vec<u64>>());
    assert_eq!(body["showing"], 12);
    assert_eq!(body["total"], 12);
    assert_eq!(body["sort"], "featured");
}

#[tokio::test]
async fn filters_and_sorts_compose() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let (_, body) = get_json(&client, srv.url("/products?category=Outerwear&sort=price-asc")).await;
    assert_eq!(ids(&body, "items"), vec![4, 10]);
    assert_eq!(body["showing"], 2);
    assert_eq!(body["total"], 12);

    let (_, body) = get_json(&client, srv.url("/products?sizes=M")).await;
    assert_eq!(ids(&body, "items"), vec![1, 3, 4, 7, 9, 10]);

    let (_, body) = get_json(&client, srv.url("/products?sizes=M&colors=Black")).await;
    assert_eq!(ids(&body, "items"), vec![1, 4, 7, 10]);

    let (_, body) =
        get_json(&client, srv.url("/products?min_price=10000&max_price=15000&sort=price-asc")).await;
    assert_eq!(ids(&body, "items"), vec![3, 8, 9, 4]);

    let (_, body) = get_json(&client, srv.url("/products?sort=name-asc")).await;
    assert_eq!(ids(&body, "items"), vec![1, 4, 3, 11, 8, 9, 5, 6, 7, 2, 12, 10]);
}

#[tokio::test]
async fn nothing_matching_is_an_empty_list_not_an_error() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let (status, body) = get_json(&client, srv.url("/products?category=Shoes&colors=Gold")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["items"].as_array().unwrap().is_empty());
    assert_eq!(body["showing"], 0);
    assert_eq!(body["total"], 12);
}

#[tokio::test]
async fn malformed_query_parameters_are_rejected() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    for query in [
        "sort=newest",
        "category=Hats",
        "min_price=cheap",
        "min_price=30000&max_price=100",
    ] {
        let (status, body) = get_json(&client, srv.url(&format!("/products?{query}"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{query}");
        assert_eq!(body["error"], "validation_error", "{query}");
    }
}

#[tokio::test]
async fn facets_are_sorted_and_unique() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let (status, body) = get_json(&client, srv.url("/products/facets")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"].as_array().unwrap().len(), 6);
    assert_eq!(body["categories"][0], "Tops");

    let sizes: Vec<&str> = body["sizes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap())
        .collect();
    let mut sorted = sizes.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sizes, sorted);
    assert!(sizes.contains(&"One Size"));
}

#[tokio::test]
async fn single_product_lookup() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let (status, body) = get_json(&client, srv.url("/products/4")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Denim Jacket");
    assert_eq!(body["price"], 15000);

    let (status, body) = get_json(&client, srv.url("/products/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (status, body) = get_json(&client, srv.url("/products/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_id");
}

#[tokio::test]
async fn admin_product_lifecycle() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/products"))
        .json(&draft("Field Jacket"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["id"], 13);

    let (_, body) = get_json(&client, srv.url("/products?category=Outerwear&sort=price-asc")).await;
    assert_eq!(ids(&body, "items"), vec![13, 4, 10]);

    let res = client
        .put(srv.url("/products/13"))
        .json(&draft("Waxed Field Jacket"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated["name"], "Waxed Field Jacket");

    let res = client.delete(srv.url("/products/13")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let (status, _) = get_json(&client, srv.url("/products/13")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let res = client.delete(srv.url("/products/13")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_drafts_name_the_failing_field() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let mut bad = draft("Field Jacket");
    bad["image"] = json!("not a url");

    let res = client.post(srv.url("/products")).json(&bad).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("image"));

    let res = client
        .put(srv.url("/products/99"))
        .json(&draft("Ghost"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wishlist_add_is_idempotent_and_remove_clears() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let res = client.put(srv.url("/wishlist/10")).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "id": 10, "added": true }));

    let res = client.put(srv.url("/wishlist/10")).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["added"], false);

    client.put(srv.url("/wishlist/2")).send().await.unwrap();

    let (_, body) = get_json(&client, srv.url("/wishlist")).await;
    assert_eq!(body["ids"], json!([10, 2]));
    assert_eq!(ids(&body, "items"), vec![2, 10]);

    let res = client.delete(srv.url("/wishlist/10")).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["removed"], true);

    let res = client.delete(srv.url("/wishlist/10")).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["removed"], false);

    let (_, body) = get_json(&client, srv.url("/wishlist")).await;
    assert_eq!(body["ids"], json!([2]));
}

#[tokio::test]
async fn wishlist_rejects_unknown_products() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let res = client.put(srv.url("/wishlist/99")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.put(srv.url("/wishlist/0")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wishlist_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let client = reqwest::Client::new();

    {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::new(dir.path()));
        let srv = TestServer::spawn(seeded_services(storage, None)).await;
        client.put(srv.url("/wishlist/7")).send().await.unwrap();
    }

    let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::new(dir.path()));
    let srv = TestServer::spawn(seeded_services(storage, None)).await;
    let (_, body) = get_json(&client, srv.url("/wishlist")).await;
    assert_eq!(body["ids"], json!([7]));
}

#[tokio::test]
async fn style_suggestions_without_advisor_are_unavailable() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/style-suggestions"))
        .json(&json!({ "user_preferences": "Minimal neutral outfits for city walks." }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "stylist_unavailable");
}

#[tokio::test]
async fn style_suggestions_pass_through_the_advisor_reply() {
    let advisor: Arc<dyn StyleAdvisor> = Arc::new(EchoAdvisor);
    let srv = TestServer::spawn(seeded_services(Arc::new(InMemoryStorage::new()), Some(advisor))).await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/style-suggestions"))
        .json(&json!({ "user_preferences": "  Minimal neutral outfits for city walks.  " }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body["outfit_suggestions"],
        "For \"Minimal neutral outfits for city walks.\": try the Denim Jacket."
    );

    let res = client
        .post(srv.url("/style-suggestions"))
        .json(&json!({ "user_preferences": "too short" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn advisor_failures_map_to_bad_gateway() {
    let advisor: Arc<dyn StyleAdvisor> = Arc::new(BrokenAdvisor);
    let srv = TestServer::spawn(seeded_services(Arc::new(InMemoryStorage::new()), Some(advisor))).await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/style-suggestions"))
        .json(&json!({ "user_preferences": "Bold colors for a summer wedding party." }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "stylist_failed");
}

#[tokio::test]
async fn unknown_body_category_is_a_json_validation_error() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let mut bad = draft("Sun Hat");
    bad["category"] = json!("Hats");
    let res = client.post(srv.url("/products")).json(&bad).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("application/json"));
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("category"));
}

#[tokio::test]
async fn body_and_query_category_names_share_case_rules() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let mut lower = draft("Rain Shell");
    lower["category"] = json!("outerwear");
    let res = client.post(srv.url("/products")).json(&lower).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["category"], "Outerwear");

    let (status, body) = get_json(&client, srv.url("/products?category=outerwear")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body, "items"), vec![4, 10, 13]);
}

#[tokio::test]
async fn malformed_bodies_and_query_strings_get_json_errors() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/products"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");

    let (status, body) = get_json(&client, srv.url("/products?sizes=M&sizes=L")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("sizes"));

    let res = client
        .post(srv.url("/style-suggestions"))
        .json(&json!({ "preferences": "wrong field name entirely" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_wishlist_adds_keep_set_semantics() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let mut requests = Vec::new();
    for n in [3u32, 5, 3, 7, 5, 3, 9, 7] {
        let client = client.clone();
        let url = srv.url(&format!("/wishlist/{n}"));
        requests.push(tokio::spawn(async move {
            client.put(url).send().await.unwrap().status()
        }));
    }
    for request in requests {
        assert_eq!(request.await.unwrap(), StatusCode::OK);
    }

    let (_, body) = get_json(&client, srv.url("/wishlist")).await;
    let mut stored: Vec<u64> = body["ids"]
        .as_array()
        .unwrap()
        .iter()
        .map(|id| id.as_u64().unwrap())
        .collect();
    stored.sort();
    assert_eq!(stored, vec![3, 5, 7, 9]);
}

#[tokio::test(flavor = "multi_thread")]
async fn http_advisor_forwards_the_request_and_returns_the_reply() {
    let (url, endpoint) = spawn_stylist_endpoint(false).await;
    let srv = TestServer::spawn(seeded_services(
        Arc::new(InMemoryStorage::new()),
        Some(http_advisor(&url)),
    ))
    .await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/style-suggestions"))
        .json(&json!({ "user_preferences": "Layered autumn looks with earthy tones." }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body["outfit_suggestions"],
        "prefs=Layered autumn looks with earthy tones. prompt_ok=true catalog_ok=true"
    );
    endpoint.abort();
}

#[tokio::test(flavor = "multi_thread")]
async fn http_advisor_error_status_is_bad_gateway() {
    let (url, endpoint) = spawn_stylist_endpoint(true).await;
    let srv = TestServer::spawn(seeded_services(
        Arc::new(InMemoryStorage::new()),
        Some(http_advisor(&url)),
    ))
    .await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/style-suggestions"))
        .json(&json!({ "user_preferences": "Layered autumn looks with earthy tones." }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "stylist_failed");
    endpoint.abort();
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_http_advisor_is_unavailable() {
    let closed = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        format!("http://{}/suggest", listener.local_addr().unwrap())
    };
    let srv = TestServer::spawn(seeded_services(
        Arc::new(InMemoryStorage::new()),
        Some(http_advisor(&closed)),
    ))
    .await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/style-suggestions"))
        .json(&json!({ "user_preferences": "Layered autumn looks with earthy tones." }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "stylist_unavailable");
}
