//! Fixed option sets offered by the generation console.
//!
//! Each option is an enum with a stable wire id (`id()`), a display label
//! and, for models, a short description. Ids are what the browser sends and
//! what `serde` reads and writes. Parsing an unknown id is the only way to
//! get a [`CoreError`] out of this module.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Quality banner
// ---------------------------------------------------------------------------

/// Output quality reported for every generated video.
pub const QUALITY_LABEL: &str = "4K";
/// Headline of the quality banner.
pub const QUALITY_HEADLINE: &str = "Premium Quality Output";
/// Detail line of the quality banner.
pub const QUALITY_DETAILS: &str = "4K Ultra HD • High Bitrate • Cinematic Motion";

/// Hero headline shown above the console form.
pub const HERO_HEADLINE: &str = "Create Cinematic Videos with AI";
/// Hero tagline under the headline.
pub const HERO_TAGLINE: &str = "Transform your ideas into stunning 4K videos with AI-powered \
generation, automatic editing, and professional voice synthesis";

/// A capability card in the features grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Auto Image Generation",
        description: "Nano Banana Pro style consistent character generation",
    },
    Feature {
        title: "Smart Voice Synthesis",
        description: "11 Labs inspired auto mood-based voice generation",
    },
    Feature {
        title: "Auto Editing",
        description: "CapCut Pro logic with beat sync and transitions",
    },
];

// ---------------------------------------------------------------------------
// Generation mode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VideoMode {
    #[default]
    TextToVideo,
    ImageToVideo,
}

impl VideoMode {
    pub const ALL: [VideoMode; 2] = [VideoMode::TextToVideo, VideoMode::ImageToVideo];

    pub fn id(self) -> &'static str {
        match self {
            VideoMode::TextToVideo => "text-to-video",
            VideoMode::ImageToVideo => "image-to-video",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VideoMode::TextToVideo => "Text to Video",
            VideoMode::ImageToVideo => "Image to Video",
        }
    }
}

// ---------------------------------------------------------------------------
// Models
// ---------------------------------------------------------------------------

/// Generation model. Purely a label: no model is ever invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModelId {
    #[default]
    #[serde(rename = "veo-3.1")]
    Veo31,
    #[serde(rename = "kling-2.5-turbo")]
    Kling25Turbo,
    #[serde(rename = "kling-2.6-pro")]
    Kling26Pro,
}

impl ModelId {
    pub const ALL: [ModelId; 3] = [ModelId::Veo31, ModelId::Kling25Turbo, ModelId::Kling26Pro];

    pub fn id(self) -> &'static str {
        match self {
            ModelId::Veo31 => "veo-3.1",
            ModelId::Kling25Turbo => "kling-2.5-turbo",
            ModelId::Kling26Pro => "kling-2.6-pro",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModelId::Veo31 => "Veo 3.1",
            ModelId::Kling25Turbo => "Kling 2.5 Turbo",
            ModelId::Kling26Pro => "Kling 2.6 Pro",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ModelId::Veo31 => "Latest Google AI model",
            ModelId::Kling25Turbo => "Fast generation",
            ModelId::Kling26Pro => "Highest quality",
        }
    }
}

// ---------------------------------------------------------------------------
// Voices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceType {
    #[default]
    Auto,
    Male,
    Female,
    Deep,
    Horror,
}

impl VoiceType {
    pub const ALL: [VoiceType; 5] = [
        VoiceType::Auto,
        VoiceType::Male,
        VoiceType::Female,
        VoiceType::Deep,
        VoiceType::Horror,
    ];

    pub fn id(self) -> &'static str {
        match self {
            VoiceType::Auto => "auto",
            VoiceType::Male => "male",
            VoiceType::Female => "female",
            VoiceType::Deep => "deep",
            VoiceType::Horror => "horror",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VoiceType::Auto => "Auto (Mood Based)",
            VoiceType::Male => "Male Voice",
            VoiceType::Female => "Female Voice",
            VoiceType::Deep => "Deep Voice",
            VoiceType::Horror => "Horror Voice",
        }
    }
}

// ---------------------------------------------------------------------------
// Styles
// ---------------------------------------------------------------------------

/// Visual style. The id is the lower-cased display label.
///
/// Deserializes through [`FromStr`], so labels are accepted as well as ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum VideoStyle {
    #[default]
    Cinematic,
    Horror,
    Emotional,
    Trailer,
    Documentary,
    Reel,
    Epic,
    Anime,
    Realistic,
}

impl VideoStyle {
    pub const ALL: [VideoStyle; 9] = [
        VideoStyle::Cinematic,
        VideoStyle::Horror,
        VideoStyle::Emotional,
        VideoStyle::Trailer,
        VideoStyle::Documentary,
        VideoStyle::Reel,
        VideoStyle::Epic,
        VideoStyle::Anime,
        VideoStyle::Realistic,
    ];

    pub fn id(self) -> &'static str {
        match self {
            VideoStyle::Cinematic => "cinematic",
            VideoStyle::Horror => "horror",
            VideoStyle::Emotional => "emotional",
            VideoStyle::Trailer => "trailer",
            VideoStyle::Documentary => "documentary",
            VideoStyle::Reel => "reel",
            VideoStyle::Epic => "epic",
            VideoStyle::Anime => "anime",
            VideoStyle::Realistic => "realistic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VideoStyle::Cinematic => "Cinematic",
            VideoStyle::Horror => "Horror",
            VideoStyle::Emotional => "Emotional",
            VideoStyle::Trailer => "Trailer",
            VideoStyle::Documentary => "Documentary",
            VideoStyle::Reel => "Reel",
            VideoStyle::Epic => "Epic",
            VideoStyle::Anime => "Anime",
            VideoStyle::Realistic => "Realistic",
        }
    }
}

// ---------------------------------------------------------------------------
// Id parsing
// ---------------------------------------------------------------------------

/// Find the option whose id matches `raw`, or fail with a message listing
/// the accepted ids.
fn parse_id<T: Copy>(
    kind: &str,
    raw: &str,
    all: &[T],
    id: impl Fn(T) -> &'static str,
) -> Result<T, CoreError> {
    all.iter().copied().find(|o| id(*o) == raw).ok_or_else(|| {
        let accepted: Vec<&str> = all.iter().map(|o| id(*o)).collect();
        CoreError::Validation(format!(
            "Invalid {kind} '{raw}'. Must be one of: {}",
            accepted.join(", ")
        ))
    })
}

impl FromStr for VideoMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id("mode", s, &Self::ALL, Self::id)
    }
}

impl FromStr for ModelId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id("model", s, &Self::ALL, Self::id)
    }
}

impl FromStr for VoiceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id("voice type", s, &Self::ALL, Self::id)
    }
}

impl FromStr for VideoStyle {
    type Err = CoreError;

    /// Accepts either the id or the display label ("Epic" and "epic" both
    /// parse), since the id is just the lower-cased label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id("style", &s.to_lowercase(), &Self::ALL, Self::id)
    }
}

impl TryFrom<String> for VideoStyle {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

macro_rules! display_as_id {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.id())
                }
            }
        )*
    };
}

display_as_id!(VideoMode, ModelId, VoiceType, VideoStyle);

// ---------------------------------------------------------------------------
// Length
// ---------------------------------------------------------------------------

/// Shortest selectable video length, in minutes.
pub const MIN_LENGTH_MINUTES: u8 = 1;
/// Longest selectable video length, in minutes.
pub const MAX_LENGTH_MINUTES: u8 = 10;
/// Length preselected on a fresh console.
pub const DEFAULT_LENGTH_MINUTES: u8 = 3;
/// Quick-select buttons shown next to the length slider.
pub const LENGTH_SHORTCUTS: [u8; 4] = [1, 3, 5, 10];

/// Video length in whole minutes, always within
/// [`MIN_LENGTH_MINUTES`]..=[`MAX_LENGTH_MINUTES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct VideoLength(u8);

impl VideoLength {
    pub fn new(minutes: u8) -> Result<Self, CoreError> {
        if (MIN_LENGTH_MINUTES..=MAX_LENGTH_MINUTES).contains(&minutes) {
            Ok(Self(minutes))
        } else {
            Err(CoreError::Validation(format!(
                "Video length must be between {MIN_LENGTH_MINUTES} and {MAX_LENGTH_MINUTES} minutes, got {minutes}"
            )))
        }
    }

    pub fn minutes(self) -> u8 {
        self.0
    }

    /// Short duration label, e.g. `"5m"`.
    pub fn duration_label(self) -> String {
        format!("{}m", self.0)
    }

    /// Slider label, e.g. `"1 minute"` or `"5 minutes"`.
    pub fn slider_label(self) -> String {
        if self.0 > 1 {
            format!("{} minutes", self.0)
        } else {
            format!("{} minute", self.0)
        }
    }
}

impl Default for VideoLength {
    fn default() -> Self {
        Self(DEFAULT_LENGTH_MINUTES)
    }
}

impl TryFrom<u8> for VideoLength {
    type Error = CoreError;

    fn try_from(minutes: u8) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl From<VideoLength> for u8 {
    fn from(length: VideoLength) -> Self {
        length.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
