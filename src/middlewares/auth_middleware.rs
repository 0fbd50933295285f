//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 액세스 토큰을 검증하고 사용자 정보를 추출합니다.
//! `TokenService`는 `web::Data<AppState>`에서 가져오므로 미들웨어를 감싸는
//! App에 상태가 등록되어 있어야 합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 인증 미들웨어 팩토리
///
/// 토큰이 없거나 유효하지 않으면 핸들러를 호출하지 않고 401 `{"error": ...}`로 응답합니다.
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::{test, web, App, HttpResponse, http::StatusCode};
    use chrono::Duration;
    use crate::core::AppState;
    use crate::domain::entities::users::user::User;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::repositories::users::InMemoryUserRepository;
    use crate::services::auth::{GoogleAuthService, LineAuthService, LineEndpoints, TokenService};

    fn state() -> AppState {
        let http = reqwest::Client::new();
        AppState::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(TokenService::new("middleware-secret", Duration::minutes(5), Duration::days(1))),
            GoogleAuthService::new(
                http.clone(),
                "client".to_string(),
                "http://127.0.0.1:9/certs".to_string(),
                Duration::seconds(60),
            ),
            LineAuthService::new(
                http,
                "id".to_string(),
                "secret".to_string(),
                LineEndpoints {
                    token_uri: "http://127.0.0.1:9/token".to_string(),
                    profile_uri: "http://127.0.0.1:9/profile".to_string(),
                },
            ),
            4,
        )
    }

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    #[actix_web::test]
    async fn test_required_mode() {
        let state = state();
        let user = User::new_local("kim@example.com".into(), "kim".into(), "h".into());
        let pair = state.token_service.generate_token_pair(&user).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::resource("/me").wrap(AuthMiddleware::required()).to(whoami)),
        )
        .await;

        let req = test::TestRequest::get().uri("/me").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", pair.refresh_token)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", pair.access_token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, user.id.as_bytes());
    }
}
