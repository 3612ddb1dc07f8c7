//! The user's current generation parameters.

use serde::{Deserialize, Serialize};

use crate::catalog::{ModelId, VideoLength, VideoMode, VideoStyle, VoiceType};

/// Parameters collected by the console form.
///
/// Every field except `prompt` is a parsed catalog value, so a request can
/// never hold an invalid model, voice, style, mode or length. Setters consume
/// and return the request and overwrite their field unconditionally.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub mode: VideoMode,
    pub model: ModelId,
    pub voice_type: VoiceType,
    pub style: VideoStyle,
    #[serde(rename = "length_minutes")]
    pub length: VideoLength,
}

impl GenerationRequest {
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_mode(mut self, mode: VideoMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_model(mut self, model: ModelId) -> Self {
        self.model = model;
        self
    }

    pub fn with_voice_type(mut self, voice_type: VoiceType) -> Self {
        self.voice_type = voice_type;
        self
    }

    pub fn with_style(mut self, style: VideoStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_length(mut self, length: VideoLength) -> Self {
        self.length = length;
        self
    }

    /// Whether the prompt has any non-whitespace content.
    pub fn has_prompt(&self) -> bool {
        !self.prompt.trim().is_empty()
    }
}

/// A partial update to a [`GenerationRequest`], as sent by the form.
///
/// Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RequestPatch {
    pub prompt: Option<String>,
    pub mode: Option<VideoMode>,
    pub model: Option<ModelId>,
    pub voice_type: Option<VoiceType>,
    pub style: Option<VideoStyle>,
    pub length_minutes: Option<VideoLength>,
}

impl RequestPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply every present field to `request`.
    pub fn apply(self, mut request: GenerationRequest) -> GenerationRequest {
        if let Some(prompt) = self.prompt {
            request = request.with_prompt(prompt);
        }
        if let Some(mode) = self.mode {
            request = request.with_mode(mode);
        }
        if let Some(model) = self.model {
            request = request.with_model(model);
        }
        if let Some(voice_type) = self.voice_type {
            request = request.with_voice_type(voice_type);
        }
        if let Some(style) = self.style {
            request = request.with_style(style);
        }
        if let Some(length) = self.length_minutes {
            request = request.with_length(length);
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_has_catalog_defaults() {
        let req = GenerationRequest::default();
        assert_eq!(req.prompt, "");
        assert_eq!(req.mode, VideoMode::TextToVideo);
        assert_eq!(req.model, ModelId::Veo31);
        assert_eq!(req.voice_type, VoiceType::Auto);
        assert_eq!(req.style, VideoStyle::Cinematic);
        assert_eq!(req.length.minutes(), 3);
    }

    #[test]
    fn setters_overwrite_fields() {
        let req = GenerationRequest::default()
            .with_prompt("A robot walks on Mars")
            .with_model(ModelId::Kling26Pro)
            .with_style(VideoStyle::Epic)
            .with_voice_type(VoiceType::Deep)
            .with_mode(VideoMode::ImageToVideo)
            .with_length(VideoLength::new(5).unwrap());

        assert_eq!(req.prompt, "A robot walks on Mars");
        assert_eq!(req.model, ModelId::Kling26Pro);
        assert_eq!(req.style, VideoStyle::Epic);
        assert_eq!(req.voice_type, VoiceType::Deep);
        assert_eq!(req.mode, VideoMode::ImageToVideo);
        assert_eq!(req.length.minutes(), 5);
    }

    #[test]
    fn whitespace_prompt_is_not_a_prompt() {
        assert!(!GenerationRequest::default().has_prompt());
        assert!(!GenerationRequest::default().with_prompt("  \n\t ").has_prompt());
        assert!(GenerationRequest::default().with_prompt(" x ").has_prompt());
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let base = GenerationRequest::default().with_prompt("keep me");
        let patch: RequestPatch =
            serde_json::from_str(r#"{"style": "horror", "length_minutes": 10}"#).unwrap();

        let req = patch.apply(base);
        assert_eq!(req.prompt, "keep me");
        assert_eq!(req.style, VideoStyle::Horror);
        assert_eq!(req.length.minutes(), 10);
        assert_eq!(req.model, ModelId::Veo31);
    }

    #[test]
    fn patch_accepts_style_label() {
        let patch: RequestPatch = serde_json::from_str(r#"{"style": "Epic"}"#).unwrap();
        assert_eq!(patch.style, Some(VideoStyle::Epic));
    }

    #[test]
    fn patch_rejects_unknown_ids_at_parse_time() {
        assert!(serde_json::from_str::<RequestPatch>(r#"{"model": "sora"}"#).is_err());
        assert!(serde_json::from_str::<RequestPatch>(r#"{"length_minutes": 0}"#).is_err());
    }

    #[test]
    fn empty_patch() {
        assert!(RequestPatch::default().is_empty());
        let patch: RequestPatch = serde_json::from_str(r#"{"prompt": ""}"#).unwrap();
        assert!(!patch.is_empty());
    }
}
