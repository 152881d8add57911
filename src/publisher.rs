use crate::errors::{AppError, AppResult};
use crate::models::{NormalizedTender, RunMeta};
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Writes the two output artifacts, replacing them whole.
///
/// Parent directories are created as needed. Both documents are
/// pretty-printed UTF-8 JSON with a trailing newline, the shape the static
/// dashboard consumes.
///
/// # Errors
///
/// Returns `ParseError` if serialization fails and `IoError` if directory
/// creation or a file write fails.
pub async fn write_outputs(
    tenders: &[NormalizedTender],
    meta: &RunMeta,
    data_path: &Path,
    meta_path: &Path,
) -> AppResult<()> {
    write_document(data_path, &to_json_document(&tenders)?).await?;
    write_document(meta_path, &to_json_document(meta)?).await?;

    info!(
        total = meta.total,
        data_path = %data_path.display(),
        meta_path = %meta_path.display(),
        "Output artifacts written"
    );

    Ok(())
}

fn to_json_document<T: serde::Serialize>(value: &T) -> AppResult<String> {
    let mut document = serde_json::to_string_pretty(value)?;
    document.push('\n');
    Ok(document)
}

async fn write_document(path: &Path, document: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::IoError(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    fs::write(path, document)
        .await
        .map_err(|e| AppError::IoError(format!("Failed to write {}: {}", path.display(), e)))
}
