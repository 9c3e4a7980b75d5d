use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{api::MapAPI, entities::Session, error::Error};

#[async_trait]
impl MapAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn open_map(&self, token: Uuid) -> Result<Session, Error> {
        self.mutate(&token, |session| {
            session.map.modal_open = true;
            // the fullscreen canvas was laid out while the modal was hidden
            session.map.fullscreen.invalidate_size();
            session.clone()
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn close_map(&self, token: Uuid) -> Result<Session, Error> {
        self.mutate(&token, |session| {
            session.map.modal_open = false;
            session.clone()
        })
        .await
    }
}
