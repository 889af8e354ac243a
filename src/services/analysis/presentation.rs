use crate::models::analysis_types::{AnalysisResult, ResultView, VegetationHealth};

const LOW_VEGETATION_MAX: f64 = 0.2;
const MODERATE_VEGETATION_MAX: f64 = 0.5;

impl VegetationHealth {
    /// Threshold rule for the NDVI caption. Independent of the deforestation
    /// verdict, so the two can disagree. NaN falls through to `Healthy`.
    pub fn from_ndvi(ndvi: f64) -> Self {
        if ndvi < LOW_VEGETATION_MAX {
            VegetationHealth::Low
        } else if ndvi < MODERATE_VEGETATION_MAX {
            VegetationHealth::Moderate
        } else {
            VegetationHealth::Healthy
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VegetationHealth::Low => "Low vegetation - potential deforestation",
            VegetationHealth::Moderate => "Moderate vegetation - monitoring recommended",
            VegetationHealth::Healthy => "Healthy vegetation - normal",
        }
    }
}

pub fn vegetation_label(ndvi: f64) -> &'static str {
    VegetationHealth::from_ndvi(ndvi).label()
}

impl ResultView {
    pub fn from_result(file_name: &str, result: &AnalysisResult) -> Self {
        let vegetation = VegetationHealth::from_ndvi(result.ndvi);
        let headline = if result.is_deforested {
            "Deforestation Detected"
        } else {
            "No Deforestation"
        };

        ResultView {
            file_name: file_name.to_string(),
            headline: headline.to_string(),
            explanation: result.explanation.clone(),
            confidence_text: format!("{:.1}%", result.confidence_percent),
            confidence_progress: result.confidence_percent,
            ndvi_text: format!("{:.3}", result.ndvi),
            ndvi_progress: result.ndvi * 100.0,
            vegetation,
            vegetation_label: vegetation.label().to_string(),
        }
    }
}
