use crate::models::reference_types::{
    Hotspot, ModelCard, NdviRange, PreprocessingStep, RegionalLoss, Severity, SpectralBand,
};
use crate::services::reference_data;

#[tauri::command]
pub fn get_model_card() -> ModelCard {
    reference_data::model_card()
}

#[tauri::command]
pub fn get_spectral_bands() -> Vec<SpectralBand> {
    reference_data::SPECTRAL_BANDS.to_vec()
}

#[tauri::command]
pub fn get_preprocessing_steps() -> Vec<PreprocessingStep> {
    reference_data::PREPROCESSING_STEPS.to_vec()
}

#[tauri::command]
pub fn get_ndvi_scale() -> Vec<NdviRange> {
    reference_data::NDVI_SCALE.to_vec()
}

#[tauri::command]
pub fn get_hotspots(min_severity: Option<Severity>) -> Vec<Hotspot> {
    reference_data::hotspots_by_severity(min_severity.unwrap_or(Severity::Low))
}

#[tauri::command]
pub fn get_regional_loss() -> Vec<RegionalLoss> {
    reference_data::REGIONAL_LOSS.to_vec()
}
