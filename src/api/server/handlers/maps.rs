use axum::extract::{Extension, Json, Path};
use uuid::Uuid;

use crate::{api::interface::DynAPI, entities::Session, error::Error};

pub async fn open(
    Extension(api): Extension<DynAPI>,
    Path(token): Path<Uuid>,
) -> Result<Json<Session>, Error> {
    let session = api.open_map(token).await?;

    Ok(session.into())
}

pub async fn close(
    Extension(api): Extension<DynAPI>,
    Path(token): Path<Uuid>,
) -> Result<Json<Session>, Error> {
    let session = api.close_map(token).await?;

    Ok(session.into())
}
