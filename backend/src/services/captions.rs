use log::info;
use yt_transcript_rs::api::YouTubeTranscriptApi;
use yt_transcript_rs::errors::{CouldNotRetrieveTranscript, CouldNotRetrieveTranscriptReason};

use crate::models::{CaptionEntry, TranscriptError};

/// Boundary to the captions-retrieval collaborator. Handlers only see this
/// trait, so tests can swap in a stub.
#[rocket::async_trait]
pub trait CaptionSource: Send + Sync {
    async fn fetch(
        &self,
        video_id: &str,
        languages: &[String],
    ) -> Result<Vec<CaptionEntry>, TranscriptError>;
}

pub struct YouTubeCaptionSource {
    api: YouTubeTranscriptApi,
}

impl YouTubeCaptionSource {
    pub fn new() -> anyhow::Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| anyhow::anyhow!("Failed to create YouTubeTranscriptApi: {e:?}"))?;
        Ok(YouTubeCaptionSource { api })
    }
}

#[rocket::async_trait]
impl CaptionSource for YouTubeCaptionSource {
    async fn fetch(
        &self,
        video_id: &str,
        languages: &[String],
    ) -> Result<Vec<CaptionEntry>, TranscriptError> {
        let codes: Vec<&str> = languages.iter().map(String::as_str).collect();

        let transcript = self
            .api
            .fetch_transcript(video_id, &codes, false)
            .await
            .map_err(classify)?;

        let entries: Vec<CaptionEntry> = transcript
            .snippets
            .into_iter()
            .map(|snippet| CaptionEntry {
                text: snippet.text,
                start: snippet.start,
                duration: snippet.duration,
            })
            .collect();

        info!("Fetched {} captions for video ID: {video_id}", entries.len());
        Ok(entries)
    }
}

fn classify(err: CouldNotRetrieveTranscript) -> TranscriptError {
    match &err.reason {
        Some(CouldNotRetrieveTranscriptReason::TranscriptsDisabled) => {
            TranscriptError::CaptionsDisabled
        }
        Some(CouldNotRetrieveTranscriptReason::NoTranscriptFound { .. }) => {
            TranscriptError::NoTranscriptFound
        }
        _ => TranscriptError::Upstream(err.to_string()),
    }
}
