use log::error;
use rocket::serde::json::Json;
use rocket::{get, post, State};

use crate::config;
use crate::models::{
    CaptionEntry, ServiceInfo, TranscriptError, TranscriptRequest, TranscriptResponse,
};
use crate::utils::{extract_video_id, format_time};
use crate::AppState;

#[get("/")]
pub fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "YouTube Transcript API",
        status: "running",
        usage: "/api/transcript?video_id=VIDEO_ID",
    })
}

#[get("/transcript?<video_id>&<url>&<lang>")]
pub async fn get_transcript(
    video_id: Option<String>,
    url: Option<String>,
    lang: Option<String>,
    state: &State<AppState>,
) -> Result<Json<TranscriptResponse>, TranscriptError> {
    let languages = match lang {
        Some(csv) => config::parse_languages(&csv),
        None => config::default_languages(),
    };
    fetch_transcript(state, video_id.or(url), languages).await
}

#[post("/transcript", data = "<request>")]
pub async fn post_transcript(
    request: Json<TranscriptRequest>,
    state: &State<AppState>,
) -> Result<Json<TranscriptResponse>, TranscriptError> {
    let TranscriptRequest {
        video_id,
        url,
        languages,
    } = request.into_inner();
    let languages = languages.unwrap_or_else(config::default_languages);
    fetch_transcript(state, video_id.or(url), languages).await
}

async fn fetch_transcript(
    state: &State<AppState>,
    raw_id: Option<String>,
    languages: Vec<String>,
) -> Result<Json<TranscriptResponse>, TranscriptError> {
    let raw = raw_id.ok_or(TranscriptError::MissingVideoId)?;
    let video_id = extract_video_id(&raw);

    match state.captions.fetch(&video_id, &languages).await {
        Ok(entries) => Ok(Json(render_response(video_id, entries))),
        Err(e) => {
            error!("Failed to fetch transcript for video ID {video_id}: {e}");
            Err(e)
        }
    }
}

fn render_response(video_id: String, entries: Vec<CaptionEntry>) -> TranscriptResponse {
    let text = entries
        .iter()
        .map(|entry| entry.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let formatted = entries
        .iter()
        .map(|entry| format!("[{}] {}", format_time(entry.start), entry.text))
        .collect::<Vec<_>>()
        .join("\n");

    // Characters, not bytes: the default language set is CJK.
    let total_chars = text.chars().count();
    let total_lines = entries.len();

    TranscriptResponse {
        success: true,
        video_id,
        transcript: entries,
        text,
        formatted,
        total_chars,
        total_lines,
    }
}
