use axum::extract::{Extension, Json, Path};
use uuid::Uuid;

use crate::{
    api::interface::DynAPI,
    entities::{PhotoUpload, Session},
    error::Error,
};

pub async fn select(
    Extension(api): Extension<DynAPI>,
    Path(token): Path<Uuid>,
    Json(photo): Json<PhotoUpload>,
) -> Result<Json<Session>, Error> {
    let session = api.select_photo(token, photo).await?;

    Ok(session.into())
}

pub async fn discard(
    Extension(api): Extension<DynAPI>,
    Path(token): Path<Uuid>,
) -> Result<Json<Session>, Error> {
    let session = api.discard_photo(token).await?;

    Ok(session.into())
}
