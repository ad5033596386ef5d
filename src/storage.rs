use crate::errors::AppError;
use crate::models::MoodJournal;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/moods.json"))
}

pub async fn load_data(path: &Path) -> MoodJournal {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(journal) => journal,
            Err(err) => {
                error!("failed to parse mood journal: {err}");
                MoodJournal::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => MoodJournal::default(),
        Err(err) => {
            error!("failed to read mood journal: {err}");
            MoodJournal::default()
        }
    }
}

pub async fn persist_data(path: &Path, journal: &MoodJournal) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(journal).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
