use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelView {
    Upload,
    Preview,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PhotoUpload {
    pub file_name: String,
    pub media_type: String,
    pub content_base64: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PhotoPreview {
    pub file_name: String,
    pub media_type: String,
    pub data_uri: String,
}

impl PhotoPreview {
    pub fn new(file_name: String, media_type: String, content: &[u8]) -> Self {
        let data_uri = format!("data:{};base64,{}", media_type, base64::encode(content));

        Self {
            file_name,
            media_type,
            data_uri,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadPanel {
    pub view: PanelView,
    pub file_value: Option<String>,
    pub preview: Option<PhotoPreview>,
}

impl UploadPanel {
    pub fn new() -> Self {
        Self {
            view: PanelView::Upload,
            file_value: None,
            preview: None,
        }
    }

    pub fn show_preview(&mut self, preview: PhotoPreview) {
        self.file_value = Some(preview.file_name.clone());
        self.preview = Some(preview);
        self.view = PanelView::Preview;
    }

    // back action: clearing the file value lets the same file be re-selected
    pub fn reset(&mut self) {
        self.view = PanelView::Upload;
        self.file_value = None;
        self.preview = None;
    }
}

impl Default for UploadPanel {
    fn default() -> Self {
        Self::new()
    }
}
