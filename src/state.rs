use crate::models::MoodJournal;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub journal: Arc<Mutex<MoodJournal>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, journal: MoodJournal) -> Self {
        Self {
            data_path,
            journal: Arc::new(Mutex::new(journal)),
        }
    }
}
