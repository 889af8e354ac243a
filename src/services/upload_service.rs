use crate::error::AnalysisError;
use crate::models::upload_types::UploadedFile;
use image::ImageFormat;
use std::path::Path;

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Extensions offered by the native file picker.
pub const PICKER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff", "webp"];

/// Media type from the extension, then from the leading bytes.
pub fn media_type_for(path: &Path, bytes: &[u8]) -> String {
    ImageFormat::from_path(path)
        .or_else(|_| image::guess_format(bytes))
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| FALLBACK_MEDIA_TYPE.to_string())
}

pub fn read_upload(path: &Path) -> Result<UploadedFile, AnalysisError> {
    let bytes = std::fs::read(path).map_err(|source| AnalysisError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let media_type = media_type_for(path, &bytes);

    Ok(UploadedFile::new(name, media_type, bytes))
}

/// A drop can carry several files; the first image among them wins.
pub fn select_image(files: Vec<UploadedFile>) -> Result<UploadedFile, AnalysisError> {
    let (file_name, media_type) = files
        .first()
        .map(|f| (f.name.clone(), f.media_type.clone()))
        .unwrap_or_default();

    files
        .into_iter()
        .find(UploadedFile::is_image)
        .ok_or(AnalysisError::InvalidFileType {
            file_name,
            media_type,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("canopy-lens-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn media_type_comes_from_extension() {
        assert_eq!(media_type_for(Path::new("patch.png"), &[]), "image/png");
        assert_eq!(media_type_for(Path::new("patch.JPG"), &[]), "image/jpeg");
        assert_eq!(media_type_for(Path::new("scene.tiff"), &[]), "image/tiff");
    }

    #[test]
    fn picker_only_offers_accepted_types() {
        for ext in PICKER_EXTENSIONS {
            let path = PathBuf::from(format!("patch.{}", ext));
            let upload = UploadedFile::new("patch", media_type_for(&path, &[]), Vec::new());
            assert!(upload.is_image(), "{} maps to {}", ext, upload.media_type);
        }
    }

    #[test]
    fn picked_file_reads_as_image_upload() {
        let path = temp_file("scene.tif", b"II*\0");
        let upload = read_upload(&path).unwrap();
        std::fs::remove_dir_all(path.parent().unwrap()).ok();

        assert_eq!(upload.media_type, "image/tiff");
        assert!(upload.is_image());
    }

    #[test]
    fn media_type_falls_back_to_sniffing() {
        assert_eq!(media_type_for(Path::new("patch.bin"), &PNG_SIGNATURE), "image/png");
        assert_eq!(
            media_type_for(Path::new("report.pdf"), b"%PDF-1.7"),
            FALLBACK_MEDIA_TYPE
        );
    }

    #[test]
    fn read_upload_tags_file_with_name_and_type() {
        let path = temp_file("patch.png", &PNG_SIGNATURE);
        let upload = read_upload(&path).unwrap();
        std::fs::remove_dir_all(path.parent().unwrap()).ok();

        assert_eq!(upload.name, "patch.png");
        assert_eq!(upload.media_type, "image/png");
        assert_eq!(upload.bytes, PNG_SIGNATURE);
        assert!(upload.is_image());
    }

    #[test]
    fn read_upload_reports_missing_file() {
        let path = std::env::temp_dir().join("canopy-lens-missing/patch.png");
        assert!(matches!(read_upload(&path), Err(AnalysisError::Read { .. })));
    }

    #[test]
    fn select_image_picks_first_image_in_drop() {
        let files = vec![
            UploadedFile::new("notes.txt", "text/plain", Vec::new()),
            UploadedFile::new("a.png", "image/png", Vec::new()),
            UploadedFile::new("b.jpg", "image/jpeg", Vec::new()),
        ];
        assert_eq!(select_image(files).unwrap().name, "a.png");
    }

    #[test]
    fn select_image_rejects_drop_without_images() {
        let files = vec![
            UploadedFile::new("report.pdf", "application/pdf", Vec::new()),
            UploadedFile::new("notes.txt", "text/plain", Vec::new()),
        ];
        match select_image(files) {
            Err(AnalysisError::InvalidFileType {
                file_name,
                media_type,
            }) => {
                assert_eq!(file_name, "report.pdf");
                assert_eq!(media_type, "application/pdf");
            }
            other => panic!("expected InvalidFileType, got {:?}", other),
        }
    }

    #[test]
    fn select_image_rejects_empty_drop() {
        assert!(matches!(
            select_image(Vec::new()),
            Err(AnalysisError::InvalidFileType { .. })
        ));
    }

    #[test]
    fn image_check_is_case_sensitive_prefix() {
        assert!(UploadedFile::new("a", "image/webp", Vec::new()).is_image());
        assert!(!UploadedFile::new("a", "Image/png", Vec::new()).is_image());
        assert!(!UploadedFile::new("a", "", Vec::new()).is_image());
    }
}
