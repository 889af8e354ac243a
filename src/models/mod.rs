pub mod analysis_types;
pub mod notification_types;
pub mod reference_types;
pub mod upload_types;
