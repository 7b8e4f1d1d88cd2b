use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_blog::create_blog;
use super::handlers::create_comment::create_comment;
use super::handlers::create_user::create_user;
use super::handlers::delete_blog::delete_blog;
use super::handlers::delete_user::delete_user;
use super::handlers::get_blog::get_blog;
use super::handlers::list_blogs::list_blogs;
use super::handlers::list_comments::list_comments;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::update_blog::update_blog;
use super::middleware::verify_bearer;
use crate::domain::blog::service::BlogService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::blog::PostgresBlogRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub blog_service: Arc<BlogService<PostgresBlogRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    blog_service: Arc<BlogService<PostgresBlogRepository>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        blog_service,
        authenticator,
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/api/users", post(create_user).get(list_users))
        .route("/api/users/:id", delete(delete_user))
        .route("/api/login", post(login))
        .route("/api/blogs", get(list_blogs).post(create_blog))
        .route(
            "/api/blogs/:id",
            get(get_blog).put(update_blog).delete(delete_blog),
        )
        .route(
            "/api/blogs/:id/comments",
            post(create_comment).get(list_comments),
        )
        // Bearer verification runs once per request, for every route
        .layer(middleware::from_fn_with_state(state.clone(), verify_bearer))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
