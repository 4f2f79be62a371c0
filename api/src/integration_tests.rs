//! End-to-end tests over the stub router and the fakes
//!
//! Drives the axum router in-process with `tower::ServiceExt::oneshot`.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::domain::entities::{GetUserStarsQuery, StarDashboardCommand};
    use crate::domain::ports::StarService;
    use crate::error::StarError;
    use crate::http::context::{ORG_ID_HEADER, USER_ID_HEADER};
    use crate::http::{router, ApiResponse, SharedStarHttpService};
    use crate::test_utils::{
        test_star_command, test_user_stars, FakeStarHttpService, FakeStarService,
    };

    fn app() -> Router {
        let service: SharedStarHttpService = Arc::new(FakeStarHttpService::new());
        router(service)
    }

    async fn send(method: Method, uri: &str, with_identity: bool) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if with_identity {
            builder = builder.header(USER_ID_HEADER, "1").header(ORG_ID_HEADER, "1");
        }
        let response = app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = send(Method::GET, "/health", false).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn star_routes_answer_ok() {
        for (method, uri) in [
            (Method::GET, "/api/user/stars"),
            (Method::POST, "/api/user/stars/dashboard/12"),
            (Method::DELETE, "/api/user/stars/dashboard/12"),
        ] {
            let (status, body) = send(method, uri, true).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body["message"], "ok", "{uri}");
        }
    }

    #[tokio::test]
    async fn star_routes_require_identity() {
        let (status, body) = send(Method::GET, "/api/user/stars", false).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Unauthorized");
    }

    #[tokio::test]
    async fn non_numeric_dashboard_id_is_rejected() {
        let (status, _) = send(Method::POST, "/api/user/stars/dashboard/abc", true).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    /// A caller that depends on `StarService` only through the trait, the way
    /// handlers in a host application would.
    async fn star_and_list(
        service: &dyn StarService,
        cmd: &StarDashboardCommand,
    ) -> Result<Vec<i64>, ApiResponse> {
        cmd.validate()?;
        service.add(cmd).await?;
        let stars = service
            .get_by_user(&GetUserStarsQuery {
                user_id: cmd.user_id,
            })
            .await?;
        let mut ids: Vec<i64> = stars
            .user_stars
            .iter()
            .filter(|(_, starred)| **starred)
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }

    #[tokio::test]
    async fn injected_fake_drives_success_branch() {
        let fake = FakeStarService::new().with_user_stars(test_user_stars(&[100, 3]));
        let ids = star_and_list(&fake, &test_star_command()).await.unwrap();
        assert_eq!(ids, vec![3, 100]);
    }

    #[tokio::test]
    async fn injected_fake_drives_failure_branch() {
        let fake = FakeStarService::new().with_error(StarError::Database("gone".to_string()));
        let err = star_and_list(&fake, &test_star_command()).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let fake = FakeStarService::new().with_error(StarError::NotFound);
        let err = star_and_list(&fake, &test_star_command()).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
