use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn invalid_file_type() -> Self {
        Toast {
            title: "Invalid file type".to_string(),
            description: "Please upload an image file (JPEG, PNG, etc.)".to_string(),
            variant: ToastVariant::Destructive,
        }
    }
}
