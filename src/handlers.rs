use crate::errors::AppError;
use crate::models::{AddMoodRequest, MoodEntry, RecentResponse, TodayResponse};
use crate::recent::recent_entries;
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use chrono::Local;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = today_key();
    let journal = state.journal.lock().await;
    let today = journal.days.get(&date).cloned();
    let recent = recent_entries(&journal);
    Html(render_index(today.as_ref(), &recent))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    let date = today_key();
    let journal = state.journal.lock().await;
    let entry = journal.days.get(&date).cloned();

    Ok(Json(TodayResponse { date, entry }))
}

pub async fn get_recent(State(state): State<AppState>) -> Result<Json<RecentResponse>, AppError> {
    let journal = state.journal.lock().await;
    Ok(Json(RecentResponse {
        entries: recent_entries(&journal),
    }))
}

pub async fn add_mood(
    State(state): State<AppState>,
    Json(payload): Json<AddMoodRequest>,
) -> Result<Json<MoodEntry>, AppError> {
    for (field, value) in [
        ("rating", payload.rating),
        ("energy", payload.energy),
        ("stress", payload.stress),
    ] {
        if !(1..=5).contains(&value) {
            return Err(AppError::bad_request(format!(
                "{field} must be between 1 and 5"
            )));
        }
    }

    let date = today_key();
    let mut journal = state.journal.lock().await;
    if journal.days.contains_key(&date) {
        return Err(AppError::conflict("mood already logged for today"));
    }

    let entry = payload.into_entry(date.clone());
    journal.days.insert(date, entry.clone());

    persist_data(&state.data_path, &journal).await?;

    Ok(Json(entry))
}

fn today_key() -> String {
    Local::now().date_naive().to_string()
}
