use super::User;
use anyhow::anyhow;
use axum::{
    body::Body,
    http::{HeaderMap, Request, Response, StatusCode},
};
use tower_http::validate_request::ValidateRequest;
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLES_HEADER: &str = "x-user-roles";

///
/// Middleware that reads caller identity set by the API gateway.
/// Gateway verifies the token, so headers are trusted as they are.
/// If identity is correct [User] is added to request extensions.
///
#[derive(Clone, Default)]
pub struct GatewayIdentityValidator;

impl GatewayIdentityValidator {
    pub fn new() -> Self {
        Self
    }

    fn try_parse_identity_headers(headers: &HeaderMap) -> anyhow::Result<User> {
        let Some(user_id) = headers.get(USER_ID_HEADER) else {
            return Err(anyhow!("missing {USER_ID_HEADER} header"));
        };
        let Ok(user_id) = user_id.to_str() else {
            return Err(anyhow!("illegal character in {USER_ID_HEADER} header"));
        };
        let user_id = Uuid::parse_str(user_id.trim())?;

        let roles = match headers.get(USER_ROLES_HEADER) {
            Some(roles) => roles
                .to_str()
                .map_err(|_| anyhow!("illegal character in {USER_ROLES_HEADER} header"))?
                .split(',')
                .map(str::trim)
                .filter(|role| !role.is_empty())
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        };

        Ok(User::new(user_id, roles))
    }
}

impl<B> ValidateRequest<B> for GatewayIdentityValidator {
    type ResponseBody = Body;

    fn validate(&mut self, request: &mut Request<B>) -> Result<(), Response<Self::ResponseBody>> {
        let user = Self::try_parse_identity_headers(request.headers()).map_err(|err| {
            tracing::warn!(%err, "auth error");
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::UNAUTHORIZED;
            response
        })?;

        request.extensions_mut().insert(user);

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::{
        body::Body,
        http::{HeaderValue, Method, Request, StatusCode},
        routing::get,
        Extension, Router,
    };
    use tower::ServiceExt;
    use tower_http::validate_request::ValidateRequestHeaderLayer;

    #[tokio::test]
    async fn missing_user_id_header() {
        test_invalid_identity(None).await;
    }

    #[tokio::test]
    async fn invalid_characters_user_id_header() {
        test_invalid_identity(HeaderValue::from_bytes(b"\xfa\xfb").unwrap()).await;
    }

    #[tokio::test]
    async fn user_id_not_uuid() {
        test_invalid_identity(HeaderValue::from_static("not uuid")).await;
    }

    #[tokio::test]
    async fn correct_request_extension() {
        let router = Router::new()
            .route(
                "/",
                get(|Extension(user): Extension<User>| async move {
                    if user.id != Uuid::parse_str("379a73e6-91dd-48a3-a652-002d34c43670").unwrap() {
                        return StatusCode::INTERNAL_SERVER_ERROR;
                    }

                    let expected_roles = vec![
                        "first_other_application_role".to_string(),
                        "second_other_application_role".to_string(),
                    ];
                    if user.roles != expected_roles {
                        return StatusCode::INTERNAL_SERVER_ERROR;
                    }

                    StatusCode::OK
                }),
            )
            .route_layer(ValidateRequestHeaderLayer::custom(
                GatewayIdentityValidator::new(),
            ));

        let request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .header(USER_ID_HEADER, "379a73e6-91dd-48a3-a652-002d34c43670")
            .header(
                USER_ROLES_HEADER,
                "first_other_application_role, second_other_application_role",
            )
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK)
    }

    #[tokio::test]
    async fn missing_roles_header_no_roles() {
        let router = Router::new()
            .route(
                "/",
                get(|Extension(user): Extension<User>| async move {
                    match user.roles.is_empty() {
                        true => StatusCode::OK,
                        false => StatusCode::INTERNAL_SERVER_ERROR,
                    }
                }),
            )
            .route_layer(ValidateRequestHeaderLayer::custom(
                GatewayIdentityValidator::new(),
            ));

        let request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .header(USER_ID_HEADER, "379a73e6-91dd-48a3-a652-002d34c43670")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK)
    }

    async fn test_invalid_identity(user_id: impl Into<Option<HeaderValue>>) {
        let router = Router::new()
            .route("/", get(|| async { StatusCode::OK }))
            .route_layer(ValidateRequestHeaderLayer::custom(
                GatewayIdentityValidator::new(),
            ));

        let mut request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .body(Body::empty())
            .unwrap();
        if let Some(user_id) = user_id.into() {
            request.headers_mut().insert(USER_ID_HEADER, user_id);
        }

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
