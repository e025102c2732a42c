use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use petreg_database::Database;
use petreg_domain::config::ApiConfig;
use petreg_kernel::server::state::ApiState;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> (Router, Database) {
    let db = Database::builder().url("sqlite::memory:").init().await.unwrap();
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .db(db.clone())
        .register_slice(petreg_pets::init(&db))
        .build()
        .unwrap();
    let (router, _) = petreg_pets::server::router().split_for_parts();

    (router.with_state(state), db)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn create(app: &Router, owner: &str, pet: &str, species: &str, age: Option<i32>) -> StatusCode {
    let body = json!({ "nomeDono": owner, "nomePet": pet, "especiePet": species, "idadePet": age });
    send(app, Method::POST, "/api/pets", Some(body)).await.0
}

async fn list(app: &Router) -> Vec<Value> {
    let (status, body) = send(app, Method::GET, "/api/pets-list", None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().cloned().unwrap()
}

async fn count(db: &Database, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}")).fetch_one(&**db).await.unwrap()
}

#[tokio::test]
async fn created_pet_is_listed_with_its_owner() {
    let (app, _db) = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/pets",
        Some(json!({ "nomeDono": "Ana", "nomePet": "Rex", "especiePet": "Cachorro", "idadePet": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "message": "Cadastro do pet e dono realizado com sucesso!" }));

    let pets = list(&app).await;
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0]["nome"], "Rex");
    assert_eq!(pets[0]["nome_dono"], "Ana");
    assert_eq!(pets[0]["especie"], "Cachorro");
    assert_eq!(pets[0]["idade"], 3);
    assert!(pets[0]["id"].is_i64());
}

#[tokio::test]
async fn optional_fields_may_be_omitted() {
    let (app, db) = app().await;

    let body = json!({ "nomeDono": "Bia", "telefoneDono": "", "nomePet": "Mia", "especiePet": "Pássaro" });
    assert_eq!(send(&app, Method::POST, "/api/pets", Some(body)).await.0, StatusCode::CREATED);

    let pets = list(&app).await;
    assert_eq!(pets[0]["idade"], Value::Null);
    assert_eq!(pets[0]["especie"], "Pássaro");

    let phone: Option<String> =
        sqlx::query_scalar("SELECT telefone FROM donos").fetch_one(&*db).await.unwrap();
    assert!(phone.is_none());
}

#[tokio::test]
async fn extra_fields_are_ignored() {
    let (app, db) = app().await;

    let body = json!({
        "nomeDono": "Ana",
        "telefoneDono": 11_987_654_321_u64,
        "nomePet": "Rex",
        "especiePet": "Cachorro",
        "idadePet": 3,
        "observacao": "x"
    });
    let (status, response) = send(&app, Method::POST, "/api/pets", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response, json!({ "message": "Cadastro do pet e dono realizado com sucesso!" }));

    assert_eq!(count(&db, "pets").await, 1);
    let phone: Option<String> =
        sqlx::query_scalar("SELECT telefone FROM donos").fetch_one(&*db).await.unwrap();
    assert_eq!(phone.as_deref(), Some("11987654321"));
}

#[tokio::test]
async fn missing_required_fields_store_nothing() {
    let (app, db) = app().await;

    let bodies = [
        json!({ "nomeDono": "", "nomePet": "Rex", "especiePet": "Cachorro" }),
        json!({ "nomeDono": "Ana", "nomePet": "   ", "especiePet": "Cachorro" }),
        json!({ "nomeDono": "Ana", "nomePet": "Rex" }),
        json!({}),
    ];

    for body in bodies {
        let (status, response) = send(&app, Method::POST, "/api/pets", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response, json!({ "error": "Nome do dono, nome e espécie do pet são obrigatórios." }));
    }

    assert_eq!(count(&db, "donos").await, 0);
    assert_eq!(count(&db, "pets").await, 0);
}

#[tokio::test]
async fn malformed_body_is_a_client_error() {
    let (app, db) = app().await;

    let request = Request::post("/api/pets")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let wrong_type = json!({ "nomeDono": "Ana", "nomePet": "Rex", "especiePet": "Gato", "idadePet": "três" });
    let (status, body) = send(&app, Method::POST, "/api/pets", Some(wrong_type)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Dados da requisição inválidos." }));

    assert_eq!(count(&db, "pets").await, 0);
}

#[tokio::test]
async fn list_is_newest_first() {
    let (app, _db) = app().await;

    assert_eq!(create(&app, "Ana", "Rex", "Cachorro", Some(3)).await, StatusCode::CREATED);
    assert_eq!(create(&app, "Bia", "Mia", "Gato", None).await, StatusCode::CREATED);
    assert_eq!(create(&app, "Caio", "Tom", "Hamster", Some(1)).await, StatusCode::CREATED);

    let names: Vec<_> = list(&app).await.iter().map(|p| p["nome"].as_str().unwrap().to_owned()).collect();
    assert_eq!(names, ["Tom", "Mia", "Rex"]);
}

#[tokio::test]
async fn owners_are_never_reused() {
    let (app, db) = app().await;

    create(&app, "Ana", "Rex", "Cachorro", Some(3)).await;
    create(&app, "Ana", "Rex", "Cachorro", Some(3)).await;

    assert_eq!(count(&db, "donos").await, 2);
    assert_eq!(count(&db, "pets").await, 2);
}

#[tokio::test]
async fn delete_removes_only_the_target_pet() {
    let (app, db) = app().await;

    create(&app, "Ana", "Rex", "Cachorro", Some(3)).await;
    create(&app, "Bia", "Mia", "Gato", Some(2)).await;
    let pets = list(&app).await;
    let rex = pets.iter().find(|p| p["nome"] == "Rex").unwrap()["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::DELETE, &format!("/api/pets/{rex}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Pet deletado com sucesso!" }));

    let remaining = list(&app).await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["nome"], "Mia");
    assert_eq!(count(&db, "donos").await, 2);
}

#[tokio::test]
async fn deleting_unknown_pet_is_not_found() {
    let (app, db) = app().await;
    create(&app, "Ana", "Rex", "Cachorro", Some(3)).await;

    let (status, body) = send(&app, Method::DELETE, "/api/pets/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Pet não encontrado." }));
    assert_eq!(count(&db, "pets").await, 1);
}

#[tokio::test]
async fn non_integer_id_is_a_client_error() {
    let (app, _db) = app().await;

    let (status, body) = send(&app, Method::DELETE, "/api/pets/rex", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Identificador de pet inválido." }));
}

#[tokio::test]
async fn failed_pet_insert_leaves_no_orphan_owner() {
    let (app, db) = app().await;
    sqlx::query(
        "CREATE TRIGGER reject_pet BEFORE INSERT ON pets WHEN NEW.nome = 'Quebra' \
         BEGIN SELECT RAISE(ABORT, 'pet rejected'); END",
    )
    .execute(&*db)
    .await
    .unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/pets",
        Some(json!({ "nomeDono": "Ana", "nomePet": "Quebra", "especiePet": "Outros" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Erro interno do servidor" }));

    assert_eq!(count(&db, "donos").await, 0);
    assert_eq!(count(&db, "pets").await, 0);

    assert_eq!(create(&app, "Ana", "Rex", "Cachorro", None).await, StatusCode::CREATED);
    assert_eq!(count(&db, "donos").await, 1);
}

#[tokio::test]
async fn database_failure_is_a_server_error() {
    let (app, db) = app().await;
    sqlx::query("DROP TABLE pets").execute(&*db).await.unwrap();

    let (status, body) = send(&app, Method::GET, "/api/pets-list", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Erro interno do servidor" }));

    let (status, _) = send(&app, Method::DELETE, "/api/pets/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn page_offers_every_species() {
    let (app, _db) = app().await;

    let response = app.oneshot(Request::get("/").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));

    let html = String::from_utf8(to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()).unwrap();
    for species in ["Cachorro", "Gato", "Pássaro", "Coelho", "Hamster", "Outros"] {
        assert!(html.contains(&format!(r#"<option value="{species}">"#)), "{species}");
    }
    assert!(html.contains("Lista de Pets"));
}
