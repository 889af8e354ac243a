use crate::error::{AppError, ErrorKind};
use crate::models::analysis_types::{FlowState, ResultView};
use crate::models::upload_types::UploadedFile;
use crate::services::analysis::flow::UploadAnalysisFlow;
use crate::services::upload_service::PICKER_EXTENSIONS;
use std::path::Path;
use tauri::{AppHandle, State};
use tauri_plugin_dialog::DialogExt;
use uuid::Uuid;

#[tauri::command]
pub async fn submit_upload(
    flow: State<'_, UploadAnalysisFlow>,
    file: UploadedFile,
) -> Result<Uuid, AppError> {
    Ok(flow.submit(file)?)
}

#[tauri::command]
pub async fn submit_drop(
    flow: State<'_, UploadAnalysisFlow>,
    files: Vec<UploadedFile>,
) -> Result<Uuid, AppError> {
    Ok(flow.submit_drop(files)?)
}

#[tauri::command]
pub async fn submit_path(flow: State<'_, UploadAnalysisFlow>, path: String) -> Result<Uuid, AppError> {
    Ok(flow.submit_path(Path::new(&path))?)
}

/// Opens the native file picker and submits the chosen file. `None` when the
/// user cancels the dialog.
#[tauri::command]
pub async fn pick_and_submit(
    app: AppHandle,
    flow: State<'_, UploadAnalysisFlow>,
) -> Result<Option<Uuid>, AppError> {
    let picked = app
        .dialog()
        .file()
        .set_title("Select a satellite patch")
        .add_filter("Satellite imagery", PICKER_EXTENSIONS)
        .blocking_pick_file();

    let Some(picked) = picked else {
        return Ok(None);
    };
    let path = picked
        .as_path()
        .ok_or_else(|| AppError::new(ErrorKind::Io, "Selected file is not a local path"))?;

    Ok(Some(flow.submit_path(path)?))
}

#[tauri::command]
pub async fn reset_analysis(flow: State<'_, UploadAnalysisFlow>) -> Result<(), AppError> {
    flow.reset();
    Ok(())
}

#[tauri::command]
pub async fn get_analysis_state(flow: State<'_, UploadAnalysisFlow>) -> Result<FlowState, AppError> {
    Ok(flow.state())
}

#[tauri::command]
pub async fn get_result_view(
    flow: State<'_, UploadAnalysisFlow>,
) -> Result<Option<ResultView>, AppError> {
    Ok(flow.result_view())
}
