//! Integration tests for the profiles API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::test_utils::{body_to_json, failing_app, get, test_app};

    /// Tests listing profiles returns every sample profile
    #[tokio::test]
    async fn it_lists_profiles() {
        let response = get(test_app(), "/api/profiles").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["success"], true);
        let data = body["data"].as_array().unwrap();
        assert!(!data.is_empty());
        assert!(data.iter().any(|p| p["id"] == "nancy-pelosi"));
    }

    /// Tests the total always matches the number of profiles returned
    #[tokio::test]
    async fn it_returns_total_equal_to_data_length() {
        let response = get(test_app(), "/api/profiles").await;
        let body = body_to_json(response.into_body()).await;

        let data_len = body["data"].as_array().unwrap().len() as u64;
        assert_eq!(body["total"].as_u64(), Some(data_len));
    }

    /// Tests profiles are serialized with camel case keys and ISO dates
    #[tokio::test]
    async fn it_serializes_profile_fields() {
        let response = get(test_app(), "/api/profiles").await;
        let body = body_to_json(response.into_body()).await;

        let pelosi = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["id"] == "nancy-pelosi")
            .unwrap()
            .clone();
        assert_eq!(pelosi["name"], "Nancy Pelosi");
        assert_eq!(pelosi["lastTradeDate"], "2024-06-21");
        assert_eq!(pelosi["tradeCount"], 142);
    }

    /// Tests a failing profile source returns a generic 500
    #[tokio::test]
    async fn it_returns_500_when_profiles_fail_to_load() {
        let response = get(failing_app(), "/api/profiles").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_to_json(response.into_body()).await;
        assert_eq!(
            body,
            serde_json::json!({"success": false, "error": "Failed to fetch profiles"})
        );
    }

    /// Tests fetching a single profile by id
    #[tokio::test]
    async fn it_gets_a_profile_by_id() {
        let response = get(test_app(), "/api/profiles/mark-kelly").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "Mark Kelly");
    }

    /// Tests an unknown profile id returns 404
    #[tokio::test]
    async fn it_returns_404_for_unknown_profile() {
        let response = get(test_app(), "/api/profiles/does-not-exist").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Profile not found");
    }

    /// Tests profiles endpoint returns 405 for POST requests
    #[tokio::test]
    async fn it_returns_405_for_post_on_profiles() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/profiles")
                    .method("POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
