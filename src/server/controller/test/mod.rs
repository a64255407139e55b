use axum::{body::to_bytes, response::Response};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

use crate::server::{media::ImageStore, state::AppState};


/// Builds handler state around the test database with images stored in a temporary
/// directory. The directory lives as long as the returned guard.
fn app_state(db: &DatabaseConnection) -> (AppState, TempDir) {
    let media = tempfile::tempdir().unwrap();
    let state = AppState::new(db.clone(), ImageStore::new(media.path()));

    (state, media)
}

async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
