use axum::extract::{Extension, Json, Path};
use uuid::Uuid;

use crate::{
    api::interface::DynAPI,
    entities::{RoutePlan, RouteQuery},
    error::Error,
};

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(token): Path<Uuid>,
    Json(query): Json<RouteQuery>,
) -> Result<Json<RoutePlan>, Error> {
    let plan = api.find_route(token, query).await?;

    Ok(plan.into())
}
