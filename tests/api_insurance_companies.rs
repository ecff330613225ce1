//! Integration tests for the insurance company endpoints
//!
//! - POST /insurance_company
//! - GET /insurance_company/finder
//! - GET /insurance_company/{id}
//! - PUT /insurance_company/{id}
//! - PUT /insurance_company/{id}/status
//! - PUT /insurance_company/{id}/soft_delete
//! - DELETE /insurance_company/{id}

mod common;

#[cfg(test)]
mod insurance_company_tests {
    use super::common::*;
    use serde_json::{Value, json};

    // ============================================================
    // POST /insurance_company
    // ============================================================

    #[tokio::test]
    async fn test_create_forces_pending_status() {
        let server = create_server();

        let response = server
            .post("/insurance_company")
            .json(&company_body("John", "Doe"))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["status_tag"], "SUCCESS");
        assert_eq!(body["message"], "Data saved successfully.");
        assert_eq!(body["data"]["status"], "Pending");
        assert_eq!(body["data"]["name"], "John");
        assert!(body["data"]["id"].is_string());
        assert!(body["data"].get("_id").is_none());
    }

    #[tokio::test]
    async fn test_create_does_not_require_token() {
        let server = create_server();
        let response = server
            .post("/insurance_company")
            .json(&company_body("Acme", "claims@acme.io"))
            .await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_create_missing_field_returns_error_envelope() {
        let server = create_server();

        let response = server
            .post("/insurance_company")
            .json(&json!({ "name": "John" }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["status_tag"], "ERROR");
        assert_eq!(body["data"], json!({}));
        assert!(!body["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_empty_name_fails_validation() {
        let server = create_server();

        let response = server
            .post("/insurance_company")
            .json(&company_body("", "Doe"))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert!(body["message"].as_str().unwrap().contains("name must not be empty"));
    }

    // ============================================================
    // Authorization gate
    // ============================================================

    #[tokio::test]
    async fn test_protected_routes_require_token() {
        let server = create_server();
        let created = create_company(&server, "John", "Doe").await;
        let id = created["id"].as_str().unwrap();

        server.get("/insurance_company/finder").await.assert_status_unauthorized();
        server
            .get(&format!("/insurance_company/{id}"))
            .await
            .assert_status_unauthorized();
        server
            .put(&format!("/insurance_company/{id}/status?status=Active"))
            .await
            .assert_status_unauthorized();
        server
            .delete(&format!("/insurance_company/{id}"))
            .await
            .assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_invalid_token_is_rejected_with_envelope() {
        let server = create_server();
        let (header, _) = authorization();

        let response = server
            .get("/insurance_company/finder")
            .add_header(header, "Bearer not-a-jwt".to_string())
            .await;

        response.assert_status_unauthorized();
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Unable to decode token");
    }

    #[tokio::test]
    async fn test_bearer_header_with_extra_segments_is_rejected() {
        let server = create_server();
        let (header, value) = authorization();

        let response = server
            .get("/insurance_company/finder")
            .add_header(header, format!("{value} extra"))
            .await;

        response.assert_status_unauthorized();
        let body: Value = response.json();
        assert_eq!(body["message"], "Authorization header must be 'Bearer <token>'");
    }

    #[tokio::test]
    async fn test_bearer_scheme_is_case_insensitive() {
        let server = create_server();
        let (header, _) = authorization();

        server
            .get("/insurance_company/finder")
            .add_header(header, format!("bearer {}", create_test_jwt()))
            .await
            .assert_status_ok();
    }

    // ============================================================
    // GET /insurance_company/finder
    // ============================================================

    #[tokio::test]
    async fn test_finder_filters_by_partial_name() {
        let server = create_server();
        create_company(&server, "John", "Doe").await;
        create_company(&server, "Globex", "info@globex.io").await;
        let (header, value) = authorization();

        let response = server
            .get("/insurance_company/finder?name=jo")
            .add_header(header, value)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["total_items"], 1);
        assert_eq!(body["data"]["page_number"], 1);
        assert_eq!(body["data"]["docs_per_page"], 10);
        assert_eq!(body["data"]["items"][0]["name"], "John");
    }

    #[tokio::test]
    async fn test_finder_search_ignores_discrete_filters() {
        let server = create_server();
        create_company(&server, "John", "john@acme.io").await;
        create_company(&server, "Globex", "info@globex.io").await;
        let (header, value) = authorization();

        let response = server
            .get("/insurance_company/finder")
            .add_query_param("search", "ACME")
            .add_query_param("name", "Globex")
            .add_header(header, value)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["total_items"], 1);
        assert_eq!(body["data"]["items"][0]["email"], "john@acme.io");
    }

    #[tokio::test]
    async fn test_finder_pages_partition_matches() {
        let server = create_server();
        for i in 0..5 {
            create_company(&server, &format!("Mutual {i}"), "x@mutual.io").await;
        }

        let mut names = Vec::new();
        for page in 1..=3 {
            let (header, value) = authorization();
            let response = server
                .get(&format!(
                    "/insurance_company/finder?page_number={page}&docs_per_page=2"
                ))
                .add_header(header, value)
                .await;
            response.assert_status_ok();
            let body: Value = response.json();
            assert_eq!(body["data"]["total_items"], 5);
            assert_eq!(body["data"]["total_pages"], 3);
            let items = body["data"]["items"].as_array().unwrap();
            assert!(items.len() <= 2);
            names.extend(items.iter().map(|item| item["name"].clone()));
        }
        assert_eq!(names.len(), 5);
    }

    #[tokio::test]
    async fn test_finder_clamps_page_zero_to_first_page() {
        let server = create_server();
        create_company(&server, "John", "Doe").await;
        let (header, value) = authorization();

        let response = server
            .get("/insurance_company/finder?page_number=0")
            .add_header(header, value)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["page_number"], 1);
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_finder_far_page_is_empty() {
        let server = create_server();
        create_company(&server, "John", "Doe").await;
        let (header, value) = authorization();

        let response = server
            .get("/insurance_company/finder?page_number=9223372036854775807")
            .add_header(header, value)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["total_items"], 1);
        assert_eq!(body["data"]["items"], json!([]));
    }

    #[tokio::test]
    async fn test_finder_rejects_zero_page_size() {
        let server = create_server();
        let (header, value) = authorization();

        let response = server
            .get("/insurance_company/finder?docs_per_page=0")
            .add_header(header, value)
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["status_tag"], "ERROR");
    }

    #[tokio::test]
    async fn test_finder_rejects_non_numeric_page() {
        let server = create_server();
        let (header, value) = authorization();

        let response = server
            .get("/insurance_company/finder?page_number=first")
            .add_header(header, value)
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    // ============================================================
    // GET /insurance_company/{id}
    // ============================================================

    #[tokio::test]
    async fn test_get_by_id_returns_list() {
        let server = create_server();
        let created = create_company(&server, "John", "Doe").await;
        let id = created["id"].as_str().unwrap();
        let (header, value) = authorization();

        let response = server
            .get(&format!("/insurance_company/{id}"))
            .add_header(header, value)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "Data retrieved successfully.");
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["id"], id);
    }

    #[tokio::test]
    async fn test_get_by_unknown_id_returns_empty_list() {
        let server = create_server();
        let (header, value) = authorization();

        let response = server
            .get("/insurance_company/5f0a0a5f1c4ae6f149404935")
            .add_header(header, value)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn test_get_by_malformed_id_fails() {
        let server = create_server();
        let (header, value) = authorization();

        let response = server
            .get("/insurance_company/not-an-object-id")
            .add_header(header, value)
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert!(body["message"].as_str().unwrap().starts_with("Invalid id"));
    }

    // ============================================================
    // PUT /insurance_company/{id}
    // ============================================================

    #[tokio::test]
    async fn test_update_changes_supplied_fields_only() {
        let server = create_server();
        let created = create_company(&server, "John", "Doe").await;
        let id = created["id"].as_str().unwrap();
        let (header, value) = authorization();

        let response = server
            .put(&format!("/insurance_company/{id}"))
            .add_header(header.clone(), value.clone())
            .json(&json!({ "name": "Acme", "status": "Active" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "Data updated successfully.");
        assert_eq!(body["data"]["name"], "Acme");
        assert_eq!(body["data"]["email"], "Doe");
        assert_eq!(body["data"]["status"], "Pending");

        let response = server
            .get(&format!("/insurance_company/{id}"))
            .add_header(header, value)
            .await;
        let body: Value = response.json();
        assert_eq!(body["data"][0]["name"], "Acme");
    }

    #[tokio::test]
    async fn test_update_rejects_empty_name() {
        let server = create_server();
        let created = create_company(&server, "John", "Doe").await;
        let id = created["id"].as_str().unwrap();
        let (header, value) = authorization();

        let response = server
            .put(&format!("/insurance_company/{id}"))
            .add_header(header, value)
            .json(&json!({ "name": "" }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let server = create_server();
        let (header, value) = authorization();

        let response = server
            .put("/insurance_company/5f0a0a5f1c4ae6f149404935")
            .add_header(header, value)
            .json(&json!({ "email": "claims@acme.io" }))
            .await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["message"], "Insurance company not found");
    }

    #[tokio::test]
    async fn test_update_requires_token() {
        let server = create_server();
        let created = create_company(&server, "John", "Doe").await;
        let id = created["id"].as_str().unwrap();

        server
            .put(&format!("/insurance_company/{id}"))
            .json(&json!({ "name": "Acme" }))
            .await
            .assert_status_unauthorized();
    }

    // ============================================================
    // PUT /insurance_company/{id}/status
    // ============================================================

    #[tokio::test]
    async fn test_update_status_unknown_value_fails() {
        let server = create_server();
        let created = create_company(&server, "John", "Doe").await;
        let id = created["id"].as_str().unwrap();
        let (header, value) = authorization();

        let response = server
            .put(&format!("/insurance_company/{id}/status?status=Closed"))
            .add_header(header, value)
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_update_status_not_found() {
        let server = create_server();
        let (header, value) = authorization();

        let response = server
            .put("/insurance_company/5f0a0a5f1c4ae6f149404935/status?status=Active")
            .add_header(header, value)
            .await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["message"], "Insurance company not found");
        assert_eq!(body["data"], json!({}));
    }

    // ============================================================
    // PUT /insurance_company/{id}/soft_delete
    // ============================================================

    #[tokio::test]
    async fn test_soft_delete_toggle_and_default_view() {
        let server = create_server();
        let created = create_company(&server, "John", "Doe").await;
        let id = created["id"].as_str().unwrap();

        let (header, value) = authorization();
        let response = server
            .put(&format!("/insurance_company/{id}/soft_delete?deleted=true"))
            .add_header(header, value)
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body["data"]["delete_at"].is_string());

        let (header, value) = authorization();
        let response = server
            .put(&format!("/insurance_company/{id}/soft_delete?deleted=false"))
            .add_header(header, value)
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["delete_at"], false);

        // a `false` marker is left out of the default view
        let (header, value) = authorization();
        let response = server
            .get("/insurance_company/finder?name=John")
            .add_header(header, value)
            .await;
        let body: Value = response.json();
        assert_eq!(body["data"]["total_items"], 0);
    }

    // ============================================================
    // End to end
    // ============================================================

    #[tokio::test]
    async fn test_create_search_update_delete() {
        let server = create_server();
        let created = create_company(&server, "John", "Doe").await;
        let id = created["id"].as_str().unwrap().to_string();

        let (header, value) = authorization();
        let response = server
            .get("/insurance_company/finder?name=Jo")
            .add_header(header, value)
            .await;
        let body: Value = response.json();
        assert_eq!(body["data"]["items"][0]["id"], id.as_str());

        let (header, value) = authorization();
        let response = server
            .put(&format!("/insurance_company/{id}/status?status=Active"))
            .add_header(header, value)
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"], json!({ "id": id, "status": "Active" }));

        let (header, value) = authorization();
        let response = server
            .get(&format!("/insurance_company/{id}"))
            .add_header(header, value)
            .await;
        let body: Value = response.json();
        assert_eq!(body["data"][0]["status"], "Active");

        let (header, value) = authorization();
        let response = server
            .delete(&format!("/insurance_company/{id}"))
            .add_header(header, value)
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "Data deleted successfully.");

        let (header, value) = authorization();
        let response = server
            .get(&format!("/insurance_company/{id}"))
            .add_header(header, value)
            .await;
        let body: Value = response.json();
        assert_eq!(body["data"], json!([]));

        let (header, value) = authorization();
        server
            .delete(&format!("/insurance_company/{id}"))
            .add_header(header, value)
            .await
            .assert_status_not_found();
    }
}
