/*
 * Responsibility
 * - Tracks の response DTO
 * - DB を持たないので、一覧は固定値 (catalog)
 */
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrackResponse {
    pub id: u32,
    pub name: &'static str,
    pub icon: &'static str,
}

pub const TRACKS: [TrackResponse; 3] = [
    TrackResponse {
        id: 1,
        name: "LeetCode Mastery",
        icon: "💻",
    },
    TrackResponse {
        id: 2,
        name: "Project Building",
        icon: "🚀",
    },
    TrackResponse {
        id: 3,
        name: "System Design",
        icon: "🏗️",
    },
];
