use crate::config::Settings;
use crate::error::AnalysisError;
use crate::models::analysis_types::{FlowState, ResultView};
use crate::models::notification_types::Toast;
use crate::models::upload_types::UploadedFile;
use crate::services::analysis::predictor::{Predictor, RandomPredictor};
use crate::services::notifier::Notifier;
use crate::services::upload_service;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Idle → Analyzing → Complete state machine behind the drop zone.
///
/// A submission made while another one is still analyzing supersedes it: the
/// pending timer is aborted, and a completion whose submission id is no longer
/// current is discarded, so only the latest upload ever produces a result.
///
/// `submit*` spawn the delayed analysis with `tokio::spawn` and must be called
/// from inside a Tokio runtime.
#[derive(Clone)]
pub struct UploadAnalysisFlow {
    state: Arc<watch::Sender<FlowState>>,
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
    predictor: Arc<dyn Predictor>,
    notifier: Arc<dyn Notifier>,
    delay: Duration,
}

impl UploadAnalysisFlow {
    pub fn new(delay: Duration, predictor: Arc<dyn Predictor>, notifier: Arc<dyn Notifier>) -> Self {
        let (state, _) = watch::channel(FlowState::Idle);
        Self {
            state: Arc::new(state),
            pending: Arc::new(Mutex::new(None)),
            predictor,
            notifier,
            delay,
        }
    }

    pub fn from_settings(
        settings: &Settings,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, AnalysisError> {
        let predictor = Arc::new(RandomPredictor::new(settings.rng_seed)?);
        Ok(Self::new(settings.analysis_delay(), predictor, notifier))
    }

    pub fn state(&self) -> FlowState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FlowState> {
        self.state.subscribe()
    }

    pub fn result_view(&self) -> Option<ResultView> {
        match &*self.state.borrow() {
            FlowState::Complete {
                file_name, result, ..
            } => Some(ResultView::from_result(file_name, result)),
            _ => None,
        }
    }

    /// Accepts an image upload and starts the simulated analysis. Non-image
    /// uploads are reported to the notifier and leave the state untouched.
    pub fn submit(&self, file: UploadedFile) -> Result<Uuid, AnalysisError> {
        if !file.is_image() {
            return Err(self.reject(AnalysisError::InvalidFileType {
                file_name: file.name,
                media_type: file.media_type,
            }));
        }

        let submission = Uuid::new_v4();
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let previous = self.state.send_replace(FlowState::Analyzing {
            submission,
            file_name: file.name.clone(),
        });
        if previous.is_analyzing() {
            tracing::debug!(superseded = ?previous.submission(), "Superseded pending analysis");
        }
        tracing::info!(%submission, file = %file.name, bytes = file.bytes.len(), "Analyzing upload");

        let state = Arc::clone(&self.state);
        let predictor = Arc::clone(&self.predictor);
        let delay = self.delay;

        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let result = predictor.predict(&file);
            let file_name = file.name;

            let applied = state.send_if_modified(|current| {
                if current.is_analyzing() && current.submission() == Some(submission) {
                    *current = FlowState::Complete {
                        submission,
                        file_name,
                        result,
                    };
                    true
                } else {
                    false
                }
            });

            if applied {
                tracing::info!(%submission, "Analysis complete");
            } else {
                tracing::debug!(%submission, "Discarded stale analysis result");
            }
        }));

        Ok(submission)
    }

    /// Drop-zone entry point: submits the first image among `files`.
    pub fn submit_drop(&self, files: Vec<UploadedFile>) -> Result<Uuid, AnalysisError> {
        match upload_service::select_image(files) {
            Ok(file) => self.submit(file),
            Err(err) => Err(self.reject(err)),
        }
    }

    pub fn submit_path(&self, path: &Path) -> Result<Uuid, AnalysisError> {
        let file = upload_service::read_upload(path)?;
        self.submit(file)
    }

    /// Back to `Idle`, dropping any result and aborting a pending analysis.
    pub fn reset(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let previous = self.state.send_replace(FlowState::Idle);
        if previous != FlowState::Idle {
            tracing::info!(submission = ?previous.submission(), "Analysis reset");
        }
    }

    fn reject(&self, err: AnalysisError) -> AnalysisError {
        tracing::warn!("Rejected upload: {}", err);
        if matches!(err, AnalysisError::InvalidFileType { .. }) {
            self.notifier.notify(Toast::invalid_file_type());
        }
        err
    }
}
