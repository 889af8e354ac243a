pub mod analysis;
pub mod notifier;
pub mod reference_data;
pub mod upload_service;
