//! Integration tests for the policy and permission endpoints

use axum::http::StatusCode;
use serde_json::json;

mod helpers;
use helpers::{count_rows, get, register_user, request, send, setup_test_app, setup_test_db};

#[tokio::test]
async fn test_root_reports_running() {
    let app = setup_test_app(setup_test_db().await);

    let (status, json) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Controle Interno");
    assert_eq!(json["status"], "running");
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_test_app(setup_test_db().await);

    let (status, json) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_list_policies_empty() {
    let app = setup_test_app(setup_test_db().await);

    let (status, json) = get(&app, "/api/politicas").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_and_get_policy() {
    let pool = setup_test_db().await;
    register_user(&pool, "admin").await;
    let app = setup_test_app(pool);

    let body = json!({ "name": "Política de Senhas", "description": "Mínimo de 8 caracteres" });
    let (status, json) = send(&app, request("POST", "/api/politicas", Some("admin"), Some(body))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["name"], "Política de Senhas");
    assert_eq!(json["data"]["active"], true);

    let id = json["data"]["id"].as_i64().unwrap();
    let (status, json) = get(&app, &format!("/api/politicas/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["description"], "Mínimo de 8 caracteres");
}

#[tokio::test]
async fn test_create_policy_blank_name_rejected() {
    let pool = setup_test_db().await;
    let app = setup_test_app(pool.clone());

    let body = json!({ "name": "   ", "description": "Sem nome" });
    let (status, json) = send(&app, request("POST", "/api/politicas", None, Some(body))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(count_rows(&pool, "policies").await, 0);
    assert_eq!(count_rows(&pool, "audit_trails").await, 0);
}

#[tokio::test]
async fn test_get_policy_not_found() {
    let app = setup_test_app(setup_test_db().await);

    let (status, json) = get(&app, "/api/politicas/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_policy() {
    let pool = setup_test_db().await;
    let app = setup_test_app(pool);

    let body = json!({ "name": "Backup", "description": "Diário" });
    let (_, created) = send(&app, request("POST", "/api/politicas", None, Some(body))).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let body = json!({ "name": "Backup", "description": "Semanal", "active": false });
    let (status, json) =
        send(&app, request("PUT", &format!("/api/politicas/{id}"), None, Some(body))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["description"], "Semanal");
    assert_eq!(json["data"]["active"], false);
    assert_eq!(json["data"]["created_at"], created["data"]["created_at"]);
}

#[tokio::test]
async fn test_update_missing_policy_not_found() {
    let app = setup_test_app(setup_test_db().await);

    let body = json!({ "name": "Backup", "description": "Semanal" });
    let (status, _) = send(&app, request("PUT", "/api/politicas/42", None, Some(body))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_toggle_policy_status_twice() {
    let pool = setup_test_db().await;
    let app = setup_test_app(pool);

    let body = json!({ "name": "Firewall", "description": "Regras" });
    let (_, created) = send(&app, request("POST", "/api/politicas", None, Some(body))).await;
    let id = created["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/politicas/{id}/toggle-status");

    let (status, json) = send(&app, request("PUT", &uri, None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["active"], false);
    assert_eq!(json["data"]["message"], "Policy deactivated successfully");

    let (_, json) = send(&app, request("PUT", &uri, None, None)).await;
    assert_eq!(json["data"]["active"], true);
    assert_eq!(json["data"]["message"], "Policy activated successfully");
}

#[tokio::test]
async fn test_delete_policy() {
    let pool = setup_test_db().await;
    let app = setup_test_app(pool.clone());

    let body = json!({ "name": "Antivírus", "description": "Obrigatório" });
    let (_, created) = send(&app, request("POST", "/api/politicas", None, Some(body))).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let (status, json) =
        send(&app, request("DELETE", &format!("/api/politicas/{id}"), None, None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(json.is_null());
    assert_eq!(count_rows(&pool, "policies").await, 0);

    let (status, _) =
        send(&app, request("DELETE", &format!("/api/politicas/{id}"), None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_permission_level_out_of_range() {
    let pool = setup_test_db().await;
    let app = setup_test_app(pool.clone());

    for level in [0, 6] {
        let body = json!({ "name": "Gerente", "level": level, "description": "Gestão" });
        let (status, json) =
            send(&app, request("POST", "/api/permissoes", None, Some(body))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }
    assert_eq!(count_rows(&pool, "permissions").await, 0);
}

#[tokio::test]
async fn test_create_list_and_delete_permission() {
    let pool = setup_test_db().await;
    let app = setup_test_app(pool);

    let body = json!({ "name": "Auditor", "level": 4, "description": "Relatórios" });
    let (status, created) = send(&app, request("POST", "/api/permissoes", None, Some(body))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["level"], 4);

    let (_, list) = get(&app, "/api/permissoes").await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);

    let id = created["data"]["id"].as_i64().unwrap();
    let (status, _) =
        send(&app, request("DELETE", &format!("/api/permissoes/{id}"), None, None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get(&app, &format!("/api/permissoes/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_not_found() {
    let app = setup_test_app(setup_test_db().await);

    let (status, _) = get(&app, "/api/inexistente").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
