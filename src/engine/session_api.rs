use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{api::SessionAPI, entities::Session, error::Error};

#[async_trait]
impl SessionAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_session(&self) -> Result<Session, Error> {
        let session = Session::new();

        let mut sessions = self.sessions.lock().await;
        sessions.insert(session.token, session.clone());

        Ok(session)
    }

    #[tracing::instrument(skip(self))]
    async fn find_session(&self, token: Uuid) -> Result<Session, Error> {
        self.snapshot(&token).await
    }
}
