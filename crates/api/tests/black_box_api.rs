use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, backed by the in-memory repository, bound to
        // an ephemeral port.
        let app = beerstock_api::app::build_app(None)
            .await
            .expect("failed to build app");
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

    fn beers_url(&self) -> String {
        format!("{}/api/v1/beers", self.base_url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn polar() -> serde_json::Value {
    json!({
        "name": "Polar",
        "brand": "Ambev",
        "max": 50,
        "quantity": 10,
        "type": "LAGER",
    })
}

async fn create_polar(client: &reqwest::Client, srv: &TestServer) -> i64 {
    let res = client
        .post(srv.beers_url())
        .json(&polar())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    created["id"].as_i64().unwrap()
}

#[tokio::test]
async fn health_endpoint_is_up() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn post_creates_a_beer() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.beers_url())
        .json(&polar())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    assert_eq!(created["name"], "Polar");
    assert_eq!(created["brand"], "Ambev");
    assert_eq!(created["type"], "LAGER");
    assert_eq!(created["quantity"], 10);
    assert!(created["id"].as_i64().unwrap() >= 1);
}

#[tokio::test]
async fn post_without_a_required_field_is_bad_request() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.beers_url())
        .json(&json!({ "name": "Polar", "max": 50, "quantity": 10, "type": "LAGER" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn post_with_a_duplicate_name_conflicts() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create_polar(&client, &srv).await;

    let res = client
        .post(srv.beers_url())
        .json(&polar())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "already_registered");
}

#[tokio::test]
async fn get_by_name_returns_the_beer() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create_polar(&client, &srv).await;

    let res = client
        .get(format!("{}/Polar", srv.beers_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let beer: serde_json::Value = res.json().await.unwrap();
    assert_eq!(beer["name"], "Polar");
    assert_eq!(beer["brand"], "Ambev");
    assert_eq!(beer["type"], "LAGER");
}

#[tokio::test]
async fn get_by_unregistered_name_is_not_found() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .get(format!("{}/Polar", srv.beers_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_is_empty_then_contains_the_created_beer() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.beers_url()).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let beers: Vec<serde_json::Value> = res.json().await.unwrap();
    assert!(beers.is_empty());

    create_polar(&client, &srv).await;

    let res = client.get(srv.beers_url()).send().await.unwrap();
    let beers: Vec<serde_json::Value> = res.json().await.unwrap();
    assert_eq!(beers.len(), 1);
    assert_eq!(beers[0]["name"], "Polar");
}

#[tokio::test]
async fn delete_returns_no_content() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let id = create_polar(&client, &srv).await;

    let res = client
        .delete(format!("{}/{}", srv.beers_url(), id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client.get(srv.beers_url()).send().await.unwrap();
    let beers: Vec<serde_json::Value> = res.json().await.unwrap();
    assert!(beers.is_empty());
}

#[tokio::test]
async fn delete_with_an_unknown_id_is_not_found() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .delete(format!("{}/42", srv.beers_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_with_a_malformed_id_is_bad_request() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create_polar(&client, &srv).await;

    let res = client
        .delete(format!("{}/not-a-number", srv.beers_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_id");
}

#[tokio::test]
async fn increment_within_capacity_updates_the_quantity() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let id = create_polar(&client, &srv).await;

    let res = client
        .patch(format!("{}/{}/increment", srv.beers_url(), id))
        .json(&json!({ "quantity": 10 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let beer: serde_json::Value = res.json().await.unwrap();
    assert_eq!(beer["quantity"], 20);
}

#[tokio::test]
async fn increment_to_exactly_max_is_allowed() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let id = create_polar(&client, &srv).await;

    let res = client
        .patch(format!("{}/{}/increment", srv.beers_url(), id))
        .json(&json!({ "quantity": 40 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let beer: serde_json::Value = res.json().await.unwrap();
    assert_eq!(beer["quantity"], 50);
}

#[tokio::test]
async fn increment_past_max_is_bad_request_and_quantity_is_unchanged() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let id = create_polar(&client, &srv).await;

    let res = client
        .patch(format!("{}/{}/increment", srv.beers_url(), id))
        .json(&json!({ "quantity": 80 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "stock_exceeded");

    let res = client
        .get(format!("{}/Polar", srv.beers_url()))
        .send()
        .await
        .unwrap();
    let beer: serde_json::Value = res.json().await.unwrap();
    assert_eq!(beer["quantity"], 10);
}

#[tokio::test]
async fn increment_with_an_unknown_id_is_not_found() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .patch(format!("{}/42/increment", srv.beers_url()))
        .json(&json!({ "quantity": 10 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn increment_with_a_negative_amount_is_bad_request() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let id = create_polar(&client, &srv).await;

    let res = client
        .patch(format!("{}/{}/increment", srv.beers_url(), id))
        .json(&json!({ "quantity": -5 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn decrement_down_to_zero_is_allowed() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let id = create_polar(&client, &srv).await;

    let res = client
        .patch(format!("{}/{}/decrement", srv.beers_url(), id))
        .json(&json!({ "quantity": 10 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let beer: serde_json::Value = res.json().await.unwrap();
    assert_eq!(beer["quantity"], 0);
}

#[tokio::test]
async fn decrement_below_zero_is_bad_request_and_quantity_is_unchanged() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let id = create_polar(&client, &srv).await;

    let res = client
        .patch(format!("{}/{}/decrement", srv.beers_url(), id))
        .json(&json!({ "quantity": 11 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "insufficient_stock");

    let res = client
        .get(format!("{}/Polar", srv.beers_url()))
        .send()
        .await
        .unwrap();
    let beer: serde_json::Value = res.json().await.unwrap();
    assert_eq!(beer["quantity"], 10);
}

#[tokio::test]
async fn decrement_with_an_unknown_id_is_not_found() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .patch(format!("{}/42/decrement", srv.beers_url()))
        .json(&json!({ "quantity": 1 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
