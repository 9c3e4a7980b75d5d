use super::Engine;

use uuid::Uuid;

use crate::{
    entities::Session,
    error::{invalid_input_error, invalid_state_error, Error},
};

impl Engine {
    pub(super) async fn snapshot(&self, token: &Uuid) -> Result<Session, Error> {
        let sessions = self.sessions.lock().await;

        sessions.get(token).cloned().ok_or_else(invalid_input_error)
    }

    pub(super) async fn mutate<T>(
        &self,
        token: &Uuid,
        f: impl FnOnce(&mut Session) -> T,
    ) -> Result<T, Error> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.get_mut(token).ok_or_else(invalid_input_error)?;

        Ok(f(session))
    }

    // writes scoped to one find invocation; a superseded invocation
    // must not overwrite newer state
    pub(super) async fn apply<T>(
        &self,
        token: &Uuid,
        seq: u64,
        f: impl FnOnce(&mut Session) -> T,
    ) -> Result<T, Error> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.get_mut(token).ok_or_else(invalid_input_error)?;

        if session.find_seq != seq {
            return Err(invalid_state_error());
        }

        Ok(f(session))
    }
}
