//! Integration tests for the catalog API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server, against the in-memory catalog. This validates
//! handler logic, routing, status codes and error bodies without needing
//! a live database.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use bestiary_api::router::build_router;
use bestiary_api::state::AppState;
use bestiary_db::Gateway;
use bestiary_types::{NewCreature, NewSpecies};
use serde_json::{Value, json};
use tower::ServiceExt;

fn empty_router() -> Router {
    build_router(Arc::new(AppState::in_memory()))
}

/// A router over a catalog holding `Gleeble` and two of its creatures.
async fn seeded_router() -> Router {
    let gateway = Gateway::in_memory();
    gateway
        .create_species(&NewSpecies {
            name: String::from("Gleeble"),
            lore: Some(String::from("Tiny gelatinous chaos-beings.")),
        })
        .await
        .unwrap();
    for name in ["Fluffy", "Spike"] {
        gateway
            .create_creature(&NewCreature {
                name: name.to_owned(),
                species_name: String::from("Gleeble"),
            })
            .await
            .unwrap();
    }
    build_router(Arc::new(AppState::new(gateway)))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

fn get(path: &str) -> Request<Body> {
    Request::get(path).body(Body::empty()).unwrap()
}

fn json_request(method: &str, path: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// =========================================================================
// Health
// =========================================================================

#[tokio::test]
async fn test_health() {
    let (status, json) = send(&empty_router(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "status": "ok" }));
}

// =========================================================================
// GET /creatures
// =========================================================================

#[tokio::test]
async fn test_list_creatures_empty_is_ok() {
    let (status, json) = send(&empty_router(), get("/creatures")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_list_creatures_includes_species() {
    let (status, json) = send(&seeded_router().await, get("/creatures")).await;

    assert_eq!(status, StatusCode::OK);
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], 1);
    assert_eq!(list[0]["name"], "Fluffy");
    assert_eq!(list[0]["speciesName"], "Gleeble");
    assert!(list[0]["createdAt"].is_string());
    assert_eq!(list[0]["species"]["name"], "Gleeble");
    assert_eq!(list[1]["name"], "Spike");
}

// =========================================================================
// GET /creatures/{id}
// =========================================================================

#[tokio::test]
async fn test_get_creature_by_id() {
    let (status, json) = send(&seeded_router().await, get("/creatures/2")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 2);
    assert_eq!(json["name"], "Spike");
    assert_eq!(json["species"]["lore"], "Tiny gelatinous chaos-beings.");
}

#[tokio::test]
async fn test_get_creature_non_numeric_id_is_bad_request() {
    let router = seeded_router().await;

    for path in ["/creatures/abc", "/creatures/1.5", "/creatures/1abc", "/creatures/%20"] {
        let (status, json) = send(&router, get(path)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(json, json!({ "error": "Invalid ID" }), "{path}");
    }
}

#[tokio::test]
async fn test_get_creature_missing_is_not_found() {
    let router = seeded_router().await;

    for path in ["/creatures/999", "/creatures/0", "/creatures/-1"] {
        let (status, json) = send(&router, get(path)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(json, json!({ "error": "Creature not found" }), "{path}");
    }
}

// =========================================================================
// POST /creatures
// =========================================================================

#[tokio::test]
async fn test_create_creature() {
    let router = seeded_router().await;
    let body = json!({ "name": "Sparkles", "speciesName": "Gleeble" });

    let (status, json) = send(&router, json_request("POST", "/creatures", &body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["id"], 3);
    assert_eq!(json["name"], "Sparkles");
    assert_eq!(json["speciesName"], "Gleeble");
    assert!(json["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_creature_missing_fields() {
    let router = seeded_router().await;

    let cases = [
        (json!({ "speciesName": "Gleeble" }), "Creature name is required"),
        (json!({ "name": "Fluffy" }), "Species name is required"),
        (json!({ "name": "", "speciesName": "Gleeble" }), "Creature name is required"),
        (
            json!({}),
            "Creature name is required; Species name is required",
        ),
    ];

    for (body, expected) in cases {
        let (status, json) = send(&router, json_request("POST", "/creatures", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(json["error"], expected, "{body}");
    }
}

#[tokio::test]
async fn test_create_creature_wrong_type_is_bad_request() {
    let router = seeded_router().await;
    let body = json!({ "name": 42, "speciesName": "Gleeble" });

    let (status, json) = send(&router, json_request("POST", "/creatures", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_create_creature_malformed_json_is_bad_request() {
    let request = Request::post("/creatures")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, json) = send(&seeded_router().await, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_create_creature_unknown_species_is_bad_request() {
    let router = seeded_router().await;
    let body = json!({ "name": "Ghost", "speciesName": "Nope" });

    let (status, json) = send(&router, json_request("POST", "/creatures", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("violates foreign key constraint")
    );

    // Nothing was stored.
    let (_, list) = send(&router, get("/creatures")).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

// =========================================================================
// Species
// =========================================================================

#[tokio::test]
async fn test_list_species() {
    let (status, json) = send(&seeded_router().await, get("/creatures/species")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!([{ "name": "Gleeble", "lore": "Tiny gelatinous chaos-beings." }])
    );
}

#[tokio::test]
async fn test_create_species_defaults_lore_to_null() {
    let router = empty_router();
    let body = json!({ "name": "Moon-Pip" });

    let (status, json) = send(&router, json_request("POST", "/creatures/species", &body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json, json!({ "name": "Moon-Pip", "lore": null }));
}

#[tokio::test]
async fn test_create_species_requires_name() {
    let router = empty_router();
    let body = json!({ "lore": "Nameless." });

    let (status, json) = send(&router, json_request("POST", "/creatures/species", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "error": "Species name is required" }));
}

#[tokio::test]
async fn test_create_species_duplicate_keeps_original() {
    let router = seeded_router().await;
    let body = json!({ "name": "Gleeble", "lore": "Impostor." });

    let (status, json) = send(&router, json_request("POST", "/creatures/species", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("duplicate key"));

    let (_, species) = send(&router, get("/creatures/species")).await;
    assert_eq!(species[0]["lore"], "Tiny gelatinous chaos-beings.");
    assert_eq!(species.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_patch_species_lore() {
    let router = seeded_router().await;
    let body = json!({ "lore": "Hums at dusk." });

    let (status, json) = send(
        &router,
        json_request("PATCH", "/creatures/species/Gleeble", &body),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "name": "Gleeble", "lore": "Hums at dusk." }));

    let (_, creature) = send(&router, get("/creatures/1")).await;
    assert_eq!(creature["species"]["lore"], "Hums at dusk.");
}

#[tokio::test]
async fn test_patch_species_blank_lore_is_rejected() {
    let router = seeded_router().await;

    for body in [json!({ "lore": "" }), json!({ "lore": "   " }), json!({})] {
        let (status, json) = send(
            &router,
            json_request("PATCH", "/creatures/species/Gleeble", &body),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(json, json!({ "error": "No data provided" }), "{body}");
    }

    let (_, species) = send(&router, get("/creatures/species")).await;
    assert_eq!(species[0]["lore"], "Tiny gelatinous chaos-beings.");
}

#[tokio::test]
async fn test_patch_unknown_species_is_bad_request() {
    let router = seeded_router().await;
    let body = json!({ "lore": "Anything." });

    let (status, json) = send(
        &router,
        json_request("PATCH", "/creatures/species/Nope", &body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Nope"));
}

#[tokio::test]
async fn test_patch_species_name_with_spaces() {
    let router = empty_router();
    let create = json!({ "name": "Mossclaw Newt" });
    let _ = send(&router, json_request("POST", "/creatures/species", &create)).await;

    let body = json!({ "lore": "Damp." });
    let (status, json) = send(
        &router,
        json_request("PATCH", "/creatures/species/Mossclaw%20Newt", &body),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Mossclaw Newt");
}

// =========================================================================
// End-to-end scenario
// =========================================================================

#[tokio::test]
async fn test_gleeble_scenario() {
    let router = empty_router();

    let species = json!({ "name": "Gleeble", "lore": "Tiny..." });
    let (status, json) = send(&router, json_request("POST", "/creatures/species", &species)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json, json!({ "name": "Gleeble", "lore": "Tiny..." }));

    let creature = json!({ "name": "Fluffy", "speciesName": "Gleeble" });
    let (status, json) = send(&router, json_request("POST", "/creatures", &creature)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["id"], 1);

    let (status, json) = send(&router, get("/creatures/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Fluffy");
    assert_eq!(json["species"]["name"], "Gleeble");
    assert_eq!(json["species"]["lore"], "Tiny...");
}

#[tokio::test]
async fn test_cors_headers_present() {
    let request = Request::get("/creatures")
        .header("origin", "http://localhost:5173")
        .body(Body::empty())
        .unwrap();

    let response = empty_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}
