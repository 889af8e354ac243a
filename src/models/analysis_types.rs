use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub is_deforested: bool,
    pub confidence_percent: f64,
    pub ndvi: f64,
    pub explanation: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum FlowState {
    Idle,
    #[serde(rename_all = "camelCase")]
    Analyzing { submission: Uuid, file_name: String },
    #[serde(rename_all = "camelCase")]
    Complete {
        submission: Uuid,
        file_name: String,
        result: AnalysisResult,
    },
}

impl FlowState {
    pub fn is_analyzing(&self) -> bool {
        matches!(self, FlowState::Analyzing { .. })
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            FlowState::Complete { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn submission(&self) -> Option<Uuid> {
        match self {
            FlowState::Idle => None,
            FlowState::Analyzing { submission, .. } | FlowState::Complete { submission, .. } => {
                Some(*submission)
            }
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum VegetationHealth {
    Low,
    Moderate,
    Healthy,
}

/// What the result card renders for a completed analysis.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub file_name: String,
    pub headline: String,
    pub explanation: String,
    pub confidence_text: String,
    pub confidence_progress: f64,
    pub ndvi_text: String,
    pub ndvi_progress: f64,
    pub vegetation: VegetationHealth,
    pub vegetation_label: String,
}
