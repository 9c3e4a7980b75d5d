use axum::extract::{Extension, Json, Path};
use uuid::Uuid;

use crate::{api::interface::DynAPI, entities::Session, error::Error};

pub async fn create(Extension(api): Extension<DynAPI>) -> Result<Json<Session>, Error> {
    let session = api.create_session().await?;

    Ok(session.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(token): Path<Uuid>,
) -> Result<Json<Session>, Error> {
    let session = api.find_session(token).await?;

    Ok(session.into())
}
