use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::Responder;
use rocket::{response, Response};
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use thiserror::Error;

/// One timed caption unit as returned by the captions collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionEntry {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub status: &'static str,
    pub usage: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptRequest {
    pub video_id: Option<String>,
    pub url: Option<String>,
    pub languages: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub success: bool,
    pub video_id: String,
    pub transcript: Vec<CaptionEntry>,
    pub text: String,
    pub formatted: String,
    pub total_chars: usize,
    pub total_lines: usize,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Request failures, each rendered as a JSON error body with its own status.
#[derive(Debug, Clone, Error)]
pub enum TranscriptError {
    #[error("缺少 video_id 参数")]
    MissingVideoId,
    #[error("此视频已禁用字幕")]
    CaptionsDisabled,
    #[error("未找到字幕")]
    NoTranscriptFound,
    #[error("{0}")]
    Upstream(String),
}

impl TranscriptError {
    fn status(&self) -> Status {
        match self {
            TranscriptError::MissingVideoId => Status::BadRequest,
            TranscriptError::CaptionsDisabled | TranscriptError::NoTranscriptFound => {
                Status::NotFound
            }
            TranscriptError::Upstream(_) => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for TranscriptError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let body = ErrorBody {
            error: self.to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        Response::build()
            .status(self.status())
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}
