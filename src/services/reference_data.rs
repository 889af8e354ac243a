use crate::models::reference_types::{
    Hotspot, ModelCard, NdviRange, PreprocessingStep, RegionalLoss, Severity, SpectralBand,
};

pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Sentinel-2 bands the detection model is described as consuming.
pub const SPECTRAL_BANDS: [SpectralBand; 5] = [
    SpectralBand {
        name: "Band 2 (Blue)",
        wavelength_nm: 490,
        usage: "Water body detection, atmospheric correction",
    },
    SpectralBand {
        name: "Band 3 (Green)",
        wavelength_nm: 560,
        usage: "Vegetation discrimination, peak reflectance",
    },
    SpectralBand {
        name: "Band 4 (Red)",
        wavelength_nm: 665,
        usage: "Chlorophyll absorption, vegetation classification",
    },
    SpectralBand {
        name: "Band 8 (NIR)",
        wavelength_nm: 842,
        usage: "Vegetation health, biomass estimation",
    },
    SpectralBand {
        name: "Band 11 (SWIR)",
        wavelength_nm: 1610,
        usage: "Moisture content, burned area detection",
    },
];

pub const PREPROCESSING_STEPS: [PreprocessingStep; 3] = [
    PreprocessingStep {
        title: "Cloud Masking",
        description: "Automated cloud and shadow detection and removal using QA bands",
    },
    PreprocessingStep {
        title: "Image Resizing",
        description: "Standardization to 256x256 pixels for consistent model input",
    },
    PreprocessingStep {
        title: "Normalization",
        description: "Pixel value scaling to [0, 1] range for optimal model performance",
    },
];

pub const NDVI_SCALE: [NdviRange; 3] = [
    NdviRange {
        min: None,
        max: Some(0.2),
        description: "Bare soil, rock, water - potential deforestation",
    },
    NdviRange {
        min: Some(0.2),
        max: Some(0.5),
        description: "Sparse vegetation, grasslands - monitoring required",
    },
    NdviRange {
        min: Some(0.5),
        max: None,
        description: "Dense vegetation, healthy forests - normal",
    },
];

pub const HOTSPOTS: [Hotspot; 4] = [
    // Amazon
    Hotspot {
        lng: -60.0217,
        lat: -3.1190,
        severity: Severity::High,
        area_km2: 1.2,
    },
    // Borneo
    Hotspot {
        lng: 105.8544,
        lat: -5.4520,
        severity: Severity::Medium,
        area_km2: 0.8,
    },
    // Congo
    Hotspot {
        lng: 24.7706,
        lat: -2.8770,
        severity: Severity::High,
        area_km2: 2.1,
    },
    // Brazil
    Hotspot {
        lng: -52.2297,
        lat: -3.9939,
        severity: Severity::Low,
        area_km2: 0.4,
    },
];

pub const REGIONAL_LOSS: [RegionalLoss; 4] = [
    RegionalLoss {
        region: "Amazon",
        area_km2: 4200,
        year: 2024,
    },
    RegionalLoss {
        region: "Congo",
        area_km2: 2800,
        year: 2024,
    },
    RegionalLoss {
        region: "Borneo",
        area_km2: 1900,
        year: 2024,
    },
    RegionalLoss {
        region: "SE Asia",
        area_km2: 1500,
        year: 2024,
    },
];

pub fn model_card() -> ModelCard {
    ModelCard {
        architecture: "Convolutional Neural Network (CNN)",
        layers: vec![
            "4 Convolutional layers with ReLU activation",
            "Batch normalization and max pooling",
            "Fully connected layers with dropout (0.5)",
            "Output: Binary classification (Deforested / Not Deforested)",
            "Optimizer: Adam with learning rate 0.001",
            "Loss function: Binary cross-entropy",
        ],
        input_shape: [256, 256, SPECTRAL_BANDS.len() as u32],
        training_dataset: "50,000+ labeled satellite patches from global deforestation hotspots",
        accuracy: 94.2,
        precision: 92.8,
        recall: 95.1,
        max_upload_bytes: MAX_UPLOAD_BYTES,
    }
}

/// Hotspots at or above `min`, most severe first.
pub fn hotspots_by_severity(min: Severity) -> Vec<Hotspot> {
    let mut hotspots: Vec<Hotspot> = HOTSPOTS
        .iter()
        .copied()
        .filter(|h| h.severity.rank() >= min.rank())
        .collect();
    hotspots.sort_by(|a, b| b.severity.rank().cmp(&a.severity.rank()));
    hotspots
}

impl Severity {
    fn rank(&self) -> u8 {
        match self {
            Severity::Low => 0,
            Severity::Medium => 1,
            Severity::High => 2,
        }
    }
}
