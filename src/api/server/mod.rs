mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::server::handlers::{maps, photos, routes, sessions};
use crate::api::{interface::DynAPI, API};

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    tracing_subscriber::fmt::init();

    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/sessions", post(sessions::create))
        .route("/sessions/:token", get(sessions::find))
        .route(
            "/sessions/:token/photo",
            post(photos::select).delete(photos::discard),
        )
        .route("/sessions/:token/map/open", post(maps::open))
        .route("/sessions/:token/map/close", post(maps::close))
        .route("/sessions/:token/routes", post(routes::find))
        .layer(Extension(api));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
