use axum::Json;

use crate::api::dto::tracks::{TRACKS, TrackResponse};

pub async fn list_tracks() -> Json<Vec<TrackResponse>> {
    Json(TRACKS.to_vec())
}
