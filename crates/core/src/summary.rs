//! Result summary shown in the overlay once a run completes.

use serde::Serialize;

use crate::catalog::QUALITY_LABEL;
use crate::request::GenerationRequest;

/// Placeholder location of the "generated" video. Nothing is ever written
/// there.
pub const PLACEHOLDER_VIDEO_URL: &str = "/api/placeholder-video";

/// Read-only projection of the request taken at completion time.
///
/// Later edits to the request do not change an existing summary; the next
/// completed run takes a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    /// Duration label, e.g. `"5m"`.
    pub duration: String,
    /// Always `"4K"`.
    pub quality: String,
    /// Model id upper-cased, e.g. `"KLING-2.6-PRO"`.
    pub model: String,
    /// Lower-case style id, e.g. `"epic"`.
    pub style: String,
    pub length_minutes: u8,
    pub preview_url: String,
    /// Line under the preview, e.g. `"4K • 5 min • epic"`.
    pub preview_caption: String,
}

impl ResultSummary {
    pub fn from_request(request: &GenerationRequest) -> Self {
        let minutes = request.length.minutes();
        let style = request.style.id();
        Self {
            duration: request.length.duration_label(),
            quality: QUALITY_LABEL.to_string(),
            model: request.model.id().to_uppercase(),
            style: style.to_string(),
            length_minutes: minutes,
            preview_url: PLACEHOLDER_VIDEO_URL.to_string(),
            preview_caption: format!("{QUALITY_LABEL} • {minutes} min • {style}"),
        }
    }
}
