use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct SpectralBand {
    pub name: &'static str,
    pub wavelength_nm: u32,
    pub usage: &'static str,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct PreprocessingStep {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ModelCard {
    pub architecture: &'static str,
    pub layers: Vec<&'static str>,
    pub input_shape: [u32; 3],
    pub training_dataset: &'static str,
    pub accuracy: f32,
    pub precision: f32,
    pub recall: f32,
    pub max_upload_bytes: u64,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct NdviRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub description: &'static str,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Hotspot {
    pub lng: f64,
    pub lat: f64,
    pub severity: Severity,
    pub area_km2: f64,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct RegionalLoss {
    pub region: &'static str,
    pub area_km2: u32,
    pub year: u16,
}
