//! Smoke-тесты тонких обёрток ресурсов: путь, метод запроса и
//! camelCase-декодирование ответа.

use std::sync::Arc;

use client::api::{ChatApi, ProductsApi, ReportsApi, ServicesApi, UsersApi};
use client::{HttpClient, MemoryTokenStore};
use common::ClientConfig;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

fn client_for(server: &ServerGuard) -> Arc<HttpClient> {
    let config = ClientConfig::default().with_base_url(server.url());
    let store = Arc::new(MemoryTokenStore::with_tokens("A1", "R1"));
    Arc::new(HttpClient::new(config, store).expect("http client"))
}

#[tokio::test]
async fn chat_lists_conversations_and_sends_message() {
    let mut server = Server::new_async().await;
    let api = ChatApi::new(client_for(&server));

    let conversations = server
        .mock("GET", "/chat/conversations")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"c1","title":"Диагностика"}]"#)
        .create_async()
        .await;

    let send = server
        .mock("POST", "/chat/conversations/c1/messages")
        .match_body(Matcher::Json(json!({ "text": "привет" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"id":"m1","sender":"admin","text":"привет","sentAt":"2026-08-30T10:00:00Z"}"#,
        )
        .create_async()
        .await;

    let list = api.conversations().await.expect("conversations");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].title, "Диагностика");
    assert!(list[0].participants.is_empty());

    let message = api.send("c1", "привет").await.expect("send");
    assert_eq!(message.sender, "admin");

    conversations.assert_async().await;
    send.assert_async().await;
}

#[tokio::test]
async fn users_fetches_profile_and_list() {
    let mut server = Server::new_async().await;
    let api = UsersApi::new(client_for(&server));

    let me = server
        .mock("GET", "/users/me")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"u1","name":"Администратор","email":"admin@supersto.ru","role":"admin"}"#)
        .create_async()
        .await;

    let list = server
        .mock("GET", "/users")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"u1","name":"Администратор","email":"admin@supersto.ru"}]"#)
        .create_async()
        .await;

    let profile = api.me().await.expect("me");
    assert_eq!(profile.role, "admin");

    let users = api.list().await.expect("users");
    assert_eq!(users.len(), 1);
    // поле role отсутствует в ответе списка и берётся по умолчанию
    assert!(users[0].role.is_empty());

    me.assert_async().await;
    list.assert_async().await;
}

#[tokio::test]
async fn products_lists_and_fetches_by_id() {
    let mut server = Server::new_async().await;
    let api = ProductsApi::new(client_for(&server));

    let list = server
        .mock("GET", "/products")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":1,"name":"Антифриз","category":"fluids","price":650.0}]"#)
        .create_async()
        .await;

    let one = server
        .mock("GET", "/products/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":1,"name":"Антифриз","category":"fluids","price":650.0}"#)
        .create_async()
        .await;

    let products = api.list().await.expect("products");
    assert_eq!(products[0].category, "fluids");

    let product = api.get(1).await.expect("product");
    assert_eq!(product.price, 650.0);

    list.assert_async().await;
    one.assert_async().await;
}

#[tokio::test]
async fn services_lists_price_list() {
    let mut server = Server::new_async().await;
    let api = ServicesApi::new(client_for(&server));

    let mock = server
        .mock("GET", "/services")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":1,"name":"Замена масла","price":1200.0,"durationMinutes":45}]"#)
        .create_async()
        .await;

    let services = api.list().await.expect("services");
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].duration_minutes, 45);

    mock.assert_async().await;
}

#[tokio::test]
async fn reports_pass_period_as_query_parameter() {
    let mut server = Server::new_async().await;
    let api = ReportsApi::new(client_for(&server));

    let appointments = server
        .mock("GET", "/reports/appointments")
        .match_query(Matcher::UrlEncoded("period".into(), "week".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"period":"2026-W35","count":12}]"#)
        .create_async()
        .await;

    let revenue = server
        .mock("GET", "/reports/revenue")
        .match_query(Matcher::UrlEncoded("period".into(), "month".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"period":"2026-08","total":154000.0}]"#)
        .create_async()
        .await;

    let rows = api.appointments("week").await.expect("appointments report");
    assert_eq!(rows[0].count, 12);
    assert_eq!(rows[0].total, 0.0);

    let rows = api.revenue("month").await.expect("revenue report");
    assert_eq!(rows[0].total, 154000.0);

    appointments.assert_async().await;
    revenue.assert_async().await;
}
