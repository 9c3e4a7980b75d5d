use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::UploadAPI,
    entities::{PhotoPreview, PhotoUpload, Session},
    error::{invalid_input_error, Error},
};

#[async_trait]
impl UploadAPI for Engine {
    #[tracing::instrument(skip(self, photo))]
    async fn select_photo(&self, token: Uuid, photo: PhotoUpload) -> Result<Session, Error> {
        let content =
            base64::decode(photo.content_base64.trim()).map_err(|_| invalid_input_error())?;

        if content.is_empty() {
            return Err(invalid_input_error());
        }

        let preview = PhotoPreview::new(photo.file_name, photo.media_type, &content);

        self.mutate(&token, |session| {
            session.upload.show_preview(preview);
            // the preview canvas was laid out while its panel was hidden
            session.map.preview.invalidate_size();
            session.clone()
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn discard_photo(&self, token: Uuid) -> Result<Session, Error> {
        self.mutate(&token, |session| {
            session.upload.reset();
            session.clone()
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{SessionAPI, UploadAPI};
    use crate::engine::Engine;
    use crate::entities::{PanelView, PhotoUpload};
    use crate::simulation::StaticAtlas;
    use std::sync::Arc;
    use tokio_test::block_on;

    fn engine() -> Engine {
        let atlas = Arc::new(StaticAtlas::seoul());
        Engine::with_services(atlas.clone(), atlas)
    }

    fn photo() -> PhotoUpload {
        PhotoUpload {
            file_name: "cat.png".into(),
            media_type: "image/png".into(),
            content_base64: base64::encode(b"pawprint"),
        }
    }

    #[test]
    fn selecting_a_photo_shows_the_preview() {
        let engine = engine();
        let token = block_on(engine.create_session()).unwrap().token;

        let session = block_on(engine.select_photo(token, photo())).unwrap();

        assert_eq!(session.upload.view, PanelView::Preview);
        let preview = session.upload.preview.unwrap();
        assert!(preview.data_uri.starts_with("data:image/png;base64,"));
        // the hidden-at-init preview canvas gets told to re-measure
        assert_eq!(session.map.preview.layout_epoch, 1);
    }

    #[test]
    fn discarding_returns_to_upload_and_is_idempotent() {
        let engine = engine();
        let token = block_on(engine.create_session()).unwrap().token;
        block_on(engine.select_photo(token, photo())).unwrap();

        let session = block_on(engine.discard_photo(token)).unwrap();
        assert_eq!(session.upload.view, PanelView::Upload);
        assert!(session.upload.file_value.is_none());
        assert!(session.upload.preview.is_none());

        let again = block_on(engine.discard_photo(token)).unwrap();
        assert_eq!(again.upload.view, PanelView::Upload);
        assert!(again.upload.file_value.is_none());
        assert!(again.upload.preview.is_none());
    }

    #[test]
    fn undecodable_content_is_rejected() {
        let engine = engine();
        let token = block_on(engine.create_session()).unwrap().token;

        let upload = PhotoUpload {
            file_name: "cat.png".into(),
            media_type: "image/png".into(),
            content_base64: "not base64 !!!".into(),
        };

        assert_eq!(block_on(engine.select_photo(token, upload)).unwrap_err().code, 101);
    }

    #[test]
    fn empty_content_is_rejected() {
        let engine = engine();
        let token = block_on(engine.create_session()).unwrap().token;

        let upload = PhotoUpload {
            file_name: "cat.png".into(),
            media_type: "image/png".into(),
            content_base64: String::new(),
        };

        assert_eq!(block_on(engine.select_photo(token, upload)).unwrap_err().code, 101);
    }
}
