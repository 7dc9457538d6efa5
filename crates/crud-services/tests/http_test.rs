mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use common::{get, send};
use crud_framework::mock::MockClient;
use crud_framework::{FrameworkError, MemoryStorage, StorageError};
use crud_services::http::{router, ServiceState};
use crud_services::model::{Order, User};
use crud_services::{order_actor, product_actor, user_actor, PEDIDOS_BASE, PRODUCTOS_BASE, USUARIOS_BASE};
use serde_json::json;
use tower::ServiceExt;

async fn users_app() -> Router {
    let (actor, client) = user_actor::new(Box::new(MemoryStorage)).await.unwrap();
    tokio::spawn(actor.run());
    router(ServiceState::new(client, USUARIOS_BASE))
}

async fn orders_app() -> Router {
    let (actor, client) = order_actor::new(Box::new(MemoryStorage)).await.unwrap();
    tokio::spawn(actor.run());
    router(ServiceState::new(client, PEDIDOS_BASE))
}

async fn products_app() -> Router {
    let (actor, client) = product_actor::new(Box::new(MemoryStorage)).await.unwrap();
    tokio::spawn(actor.run());
    router(ServiceState::new(client, PRODUCTOS_BASE))
}

// --- Scenarios ---

#[tokio::test]
async fn test_create_user_after_seed() {
    let app = users_app().await;
    let reply = send(
        &app,
        Method::POST,
        "/api/usuarios",
        Some(json!({"nombre": "Ana", "email": "ana@x.com", "rol": "admin"})),
    )
    .await;

    assert_eq!(reply.status, StatusCode::CREATED);
    assert!(reply.body["id"].as_u64().unwrap() >= 3);
    assert_eq!(reply.body["activo"], true);
    assert_eq!(reply.body["telefono"], "");
    assert_eq!(reply.headers["location"], "/api/usuarios/3");
}

#[tokio::test]
async fn test_create_order_computes_total() {
    let app = orders_app().await;
    let reply = send(
        &app,
        Method::POST,
        "/api/pedidos",
        Some(json!({
            "cliente_id": 1,
            "productos": [{"producto_id": 1, "cantidad": 2, "precio_unitario": 10.0}],
            "direccion_entrega": "X"
        })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(reply.body["total"], 20.0);
    assert_eq!(reply.body["estado"], "pendiente");
}

#[tokio::test]
async fn test_missing_user_is_404() {
    let app = users_app().await;
    let reply = get(&app, "/api/usuarios/999").await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.body["error"], "Usuario no encontrado");
    assert_eq!(reply.body["status"], 404);
}

#[tokio::test]
async fn test_empty_user_body_lists_required_fields() {
    let app = users_app().await;
    let reply = send(&app, Method::POST, "/api/usuarios", Some(json!({}))).await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    let fields = reply.body["fields"].as_array().unwrap();
    for field in ["nombre", "email", "rol"] {
        assert!(fields.contains(&json!(field)), "{field} not reported");
    }

    let all = get(&app, "/api/usuarios").await;
    assert_eq!(all.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_status_update_keeps_total() {
    let app = orders_app().await;
    let before = get(&app, "/api/pedidos/1").await;

    let reply = send(
        &app,
        Method::PUT,
        "/api/pedidos/1",
        Some(json!({"estado": "entregado"})),
    )
    .await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["estado"], "entregado");
    assert_eq!(reply.body["total"], before.body["total"]);
    assert_eq!(reply.body["fecha_pedido"], before.body["fecha_pedido"]);
}

// --- CRUD details ---

#[tokio::test]
async fn test_replacing_items_recomputes_total() {
    let app = orders_app().await;
    let reply = send(
        &app,
        Method::PUT,
        "/api/pedidos/2",
        Some(json!({"productos": [{"producto_id": 5, "cantidad": 4, "precio_unitario": 2.5}]})),
    )
    .await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["total"], 10.0);
    assert_eq!(reply.body["productos"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_empty_update_changes_nothing() {
    let app = users_app().await;
    let before = get(&app, "/api/usuarios/1").await;
    let reply = send(&app, Method::PUT, "/api/usuarios/1", Some(json!({"nombre": ""}))).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, before.body);
}

#[tokio::test]
async fn test_invalid_update_applies_nothing() {
    let app = users_app().await;
    let reply = send(
        &app,
        Method::PUT,
        "/api/usuarios/1",
        Some(json!({"nombre": "Nuevo", "email": "sin-arroba"})),
    )
    .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["fields"], json!(["email"]));

    let user = get(&app, "/api/usuarios/1").await;
    assert_eq!(user.body["nombre"], "Juan Pérez");
}

#[tokio::test]
async fn test_update_missing_order_is_404() {
    let app = orders_app().await;
    let reply = send(&app, Method::PUT, "/api/pedidos/99", Some(json!({"estado": "x"}))).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.body["error"], "Pedido no encontrado");
}

#[tokio::test]
async fn test_delete_then_ids_keep_increasing() {
    let app = products_app().await;

    let reply = send(&app, Method::DELETE, "/productos/2", None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, json!({"message": "Producto eliminado exitosamente"}));

    let again = send(&app, Method::DELETE, "/productos/2", None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/productos").await.body.as_array().unwrap().len(), 1);

    let created = send(
        &app,
        Method::POST,
        "/productos",
        Some(json!({
            "nombre": "Monitor",
            "descripcion": "27 pulgadas",
            "precio": 300,
            "categoria": "tecnologia",
            "stock": 5
        })),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["id"], 3);
}

#[tokio::test]
async fn test_invalid_line_item_fields_are_reported() {
    let app = orders_app().await;
    let reply = send(
        &app,
        Method::POST,
        "/api/pedidos",
        Some(json!({
            "cliente_id": 1,
            "productos": [{"producto_id": 1, "cantidad": 0, "precio_unitario": 10.0}],
            "direccion_entrega": "X"
        })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["fields"], json!(["productos[0].cantidad"]));
}

#[tokio::test]
async fn test_overflowing_total_is_rejected() {
    let app = orders_app().await;
    let huge = json!([{"producto_id": 1, "cantidad": 2, "precio_unitario": 1e308}]);

    let reply = send(
        &app,
        Method::POST,
        "/api/pedidos",
        Some(json!({"cliente_id": 1, "productos": huge, "direccion_entrega": "X"})),
    )
    .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["fields"], json!(["productos"]));

    let reply = send(&app, Method::PUT, "/api/pedidos/1", Some(json!({"productos": huge}))).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["fields"], json!(["productos"]));

    let orders = get(&app, "/api/pedidos").await;
    assert_eq!(orders.body.as_array().unwrap().len(), 2);
    assert_eq!(orders.body[0]["total"], 2.0 * 1500.99 + 45.50);
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let app = users_app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/usuarios")
        .body(Body::from("{ nope"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// --- Filters ---

#[tokio::test]
async fn test_filters_ignore_case() {
    let users = users_app().await;
    let admins = get(&users, "/api/usuarios/rol/ADMIN").await;
    assert_eq!(admins.status, StatusCode::OK);
    assert_eq!(admins.body.as_array().unwrap().len(), 1);

    let products = products_app().await;
    let tech = get(&products, "/productos/categoria/Tecnologia").await;
    assert_eq!(tech.body.as_array().unwrap().len(), 2);

    let orders = orders_app().await;
    let delivered = get(&orders, "/api/pedidos/estado/ENTREGADO").await;
    assert_eq!(delivered.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_filter_value_is_percent_decoded() {
    let app = products_app().await;
    let created = send(
        &app,
        Method::POST,
        "/productos",
        Some(json!({
            "nombre": "Lámpara",
            "descripcion": "De mesa",
            "precio": 30,
            "categoria": "Línea Hogar",
            "stock": 3
        })),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let found = get(&app, "/productos/categoria/l%C3%ADnea%20hogar").await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body.as_array().unwrap().len(), 1);
    assert_eq!(found.body[0]["nombre"], "Lámpara");
}

#[tokio::test]
async fn test_customer_filter() {
    let app = orders_app().await;
    let first = get(&app, "/api/pedidos/cliente/1").await;
    assert_eq!(first.body.as_array().unwrap().len(), 1);
    assert_eq!(first.body[0]["cliente_id"], 1);

    let none = get(&app, "/api/pedidos/cliente/77").await;
    assert_eq!(none.status, StatusCode::OK);
    assert_eq!(none.body, json!([]));

    let bad = get(&app, "/api/pedidos/cliente/abc").await;
    assert_eq!(bad.status, StatusCode::NOT_FOUND);
    assert_eq!(bad.body["error"], "Ruta no encontrada");
}

// --- Routing, methods and CORS ---

#[tokio::test]
async fn test_health() {
    let app = orders_app().await;
    for uri in ["/health", "/api/pedidos/health"] {
        let reply = get(&app, uri).await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body, json!({"status": "healthy", "service": "pedidos-api"}));
    }
}

#[tokio::test]
async fn test_unknown_routes() {
    let app = users_app().await;
    for uri in [
        "/",
        "/api/usuarios/1/extra",
        "/api/usuarios/abc",
        "/api/usuarios/+1",
        "/api/otros",
    ] {
        let reply = get(&app, uri).await;
        assert_eq!(reply.status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(reply.body["error"], "Ruta no encontrada");
    }
}

#[tokio::test]
async fn test_products_root_banner() {
    let app = products_app().await;
    let reply = get(&app, "/").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["message"], "Microservicio de Productos");
    assert!(reply.body["version"].is_string());

    let reply = send(&app, Method::POST, "/", Some(json!({}))).await;
    assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED);

    let orders = orders_app().await;
    assert_eq!(get(&orders, "/").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unsupported_methods() {
    let app = users_app().await;
    for (method, uri) in [
        (Method::POST, "/api/usuarios/1"),
        (Method::DELETE, "/api/usuarios"),
        (Method::PATCH, "/api/usuarios/1"),
        (Method::POST, "/api/usuarios/rol/admin"),
    ] {
        let reply = send(&app, method.clone(), uri, Some(json!({}))).await;
        assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        assert_eq!(reply.body["error"], "Método no permitido");
    }
}

#[tokio::test]
async fn test_options_is_empty_200() {
    let app = orders_app().await;
    let reply = send(&app, Method::OPTIONS, "/api/pedidos/1", None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, serde_json::Value::Null);
}

#[tokio::test]
async fn test_cors_preflight_and_headers() {
    let app = users_app().await;
    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/usuarios")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(preflight).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");

    let request = Request::builder()
        .uri("/api/usuarios/999")
        .header("origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

// --- Internal faults ---

#[tokio::test]
async fn test_storage_failure_is_500() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_create()
        .return_err(FrameworkError::Storage(StorageError::Io {
            path: "pedidos_data.json".into(),
            source: std::io::Error::other("disk full"),
        }));
    let app = router(ServiceState::new(mock.client(), PEDIDOS_BASE));

    let reply = send(
        &app,
        Method::POST,
        "/api/pedidos",
        Some(json!({
            "cliente_id": 1,
            "productos": [{"producto_id": 1, "cantidad": 1, "precio_unitario": 1.0}],
            "direccion_entrega": "X"
        })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        reply.body,
        json!({"error": "Error interno del servidor", "status": 500})
    );
    mock.verify();
}

#[tokio::test]
async fn test_closed_actor_is_500() {
    let mut mock = MockClient::<User>::new();
    mock.expect_list().return_err(FrameworkError::ActorClosed);
    let app = router(ServiceState::new(mock.client(), USUARIOS_BASE));

    let reply = get(&app, "/api/usuarios").await;
    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    mock.verify();
}

#[tokio::test]
async fn test_invalid_body_never_reaches_the_store() {
    // No expectations: any call to the client would fail the test with a 500.
    let mock = MockClient::<User>::new();
    let app = router(ServiceState::new(mock.client(), USUARIOS_BASE));

    let reply = send(&app, Method::POST, "/api/usuarios", Some(json!({"nombre": "Ana"}))).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    mock.verify();
}
