use crate::error::AnalysisError;
use crate::models::analysis_types::AnalysisResult;
use crate::models::upload_types::UploadedFile;
use rand::distr::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use std::sync::{Mutex, PoisonError};

pub const EXPLANATION: &str =
    "Analysis based on multi-spectral band comparison and NDVI calculation";

pub const CONFIDENCE_RANGE: Range<f64> = 70.0..100.0;
pub const NDVI_RANGE: Range<f64> = 0.2..0.7;
const DEFORESTED_PROBABILITY: f64 = 0.5;

/// Turns an accepted upload into an analysis result.
pub trait Predictor: Send + Sync {
    fn predict(&self, file: &UploadedFile) -> AnalysisResult;
}

/// Prebuilt distributions for the mock result. `Uniform::new` narrows its
/// scale so the largest draw stays strictly below the upper bound.
#[derive(Debug, Clone)]
pub struct ResultSampler {
    confidence: Uniform<f64>,
    ndvi: Uniform<f64>,
}

impl ResultSampler {
    pub fn new() -> Result<Self, AnalysisError> {
        Ok(Self {
            confidence: Uniform::new(CONFIDENCE_RANGE.start, CONFIDENCE_RANGE.end)?,
            ndvi: Uniform::new(NDVI_RANGE.start, NDVI_RANGE.end)?,
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> AnalysisResult {
        AnalysisResult {
            is_deforested: rng.random_bool(DEFORESTED_PROBABILITY),
            confidence_percent: rng.sample(&self.confidence),
            ndvi: rng.sample(&self.ndvi),
            explanation: EXPLANATION.to_string(),
        }
    }
}

/// Stand-in model: every field is drawn independently and uniformly,
/// the upload's contents are never looked at.
pub struct RandomPredictor {
    rng: Mutex<StdRng>,
    sampler: ResultSampler,
}

impl RandomPredictor {
    pub fn new(seed: Option<u64>) -> Result<Self, AnalysisError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            rng: Mutex::new(rng),
            sampler: ResultSampler::new()?,
        })
    }
}

impl Predictor for RandomPredictor {
    fn predict(&self, file: &UploadedFile) -> AnalysisResult {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let result = self.sampler.sample(&mut *rng);

        tracing::debug!(
            file = %file.name,
            deforested = result.is_deforested,
            confidence = result.confidence_percent,
            ndvi = result.ndvi,
            "Sampled mock prediction"
        );
        result
    }
}
