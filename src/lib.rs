pub mod config;
pub mod error;
pub mod models;
pub mod services;

#[cfg(feature = "desktop")]
mod commands;

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "canopy_lens_lib=info";

/// Installs the fmt subscriber; `RUST_LOG` overrides the default filter.
/// Safe to call more than once.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use crate::config::{Settings, SETTINGS_FILE_NAME};
    use crate::services::analysis::flow::UploadAnalysisFlow;
    use crate::services::notifier::EventNotifier;
    use std::sync::Arc;
    use tauri::{Emitter, Manager};

    init_logging();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_window_state::Builder::default().build())
        .setup(|app| {
            let settings_path = app.path().app_config_dir()?.join(SETTINGS_FILE_NAME);
            let settings = Settings::load(Some(&settings_path))?;
            tracing::info!(
                path = %settings_path.display(),
                delay_ms = settings.analysis_delay_ms,
                "Loaded settings"
            );

            let notifier = Arc::new(EventNotifier::new(app.handle().clone()));
            let flow = UploadAnalysisFlow::from_settings(&settings, notifier)?;
            app.manage(flow.clone());

            // Push every state change to the webview
            let app_handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                let mut rx = flow.subscribe();
                while rx.changed().await.is_ok() {
                    let state = rx.borrow_and_update().clone();
                    if let Err(e) = app_handle.emit("analysis-state", &state) {
                        tracing::error!("Failed to emit analysis state: {}", e);
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::analysis::submit_upload,
            commands::analysis::submit_drop,
            commands::analysis::submit_path,
            commands::analysis::pick_and_submit,
            commands::analysis::reset_analysis,
            commands::analysis::get_analysis_state,
            commands::analysis::get_result_view,
            commands::reference::get_model_card,
            commands::reference::get_spectral_bands,
            commands::reference::get_preprocessing_steps,
            commands::reference::get_ndvi_scale,
            commands::reference::get_hotspots,
            commands::reference::get_regional_loss,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
