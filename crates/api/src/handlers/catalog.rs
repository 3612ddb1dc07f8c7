//! Handler for the option catalog the console form renders from.
//!
//! - `GET /catalog` — models, voices, styles, modes, length bounds, the
//!   quality banner and the static hero and feature copy.

use axum::Json;
use serde::Serialize;
use vidgen_core::catalog::{
    Feature, ModelId, VideoMode, VideoStyle, VoiceType, DEFAULT_LENGTH_MINUTES, FEATURES,
    HERO_HEADLINE, HERO_TAGLINE, LENGTH_SHORTCUTS, MAX_LENGTH_MINUTES, MIN_LENGTH_MINUTES,
    QUALITY_DETAILS, QUALITY_HEADLINE, QUALITY_LABEL,
};

use crate::response::DataResponse;

#[derive(Debug, Serialize)]
pub struct CatalogOption {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct LengthRange {
    pub min_minutes: u8,
    pub max_minutes: u8,
    pub default_minutes: u8,
    pub shortcuts: [u8; 4],
}

#[derive(Debug, Serialize)]
pub struct QualityInfo {
    pub label: &'static str,
    pub headline: &'static str,
    pub details: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HeroCopy {
    pub headline: &'static str,
    pub tagline: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Catalog {
    pub modes: Vec<CatalogOption>,
    pub models: Vec<CatalogOption>,
    pub voices: Vec<CatalogOption>,
    pub styles: Vec<CatalogOption>,
    pub length: LengthRange,
    pub quality: QualityInfo,
    pub hero: HeroCopy,
    pub features: [Feature; 3],
}

fn options<T: Copy>(
    all: &[T],
    id: fn(T) -> &'static str,
    name: fn(T) -> &'static str,
) -> Vec<CatalogOption> {
    all.iter()
        .map(|o| CatalogOption {
            id: id(*o),
            name: name(*o),
            description: None,
        })
        .collect()
}

/// GET /api/v1/catalog
pub async fn get_catalog() -> Json<DataResponse<Catalog>> {
    let models = ModelId::ALL
        .iter()
        .map(|m| CatalogOption {
            id: m.id(),
            name: m.label(),
            description: Some(m.description()),
        })
        .collect();

    Json(DataResponse {
        data: Catalog {
            modes: options(&VideoMode::ALL, VideoMode::id, VideoMode::label),
            models,
            voices: options(&VoiceType::ALL, VoiceType::id, VoiceType::label),
            styles: options(&VideoStyle::ALL, VideoStyle::id, VideoStyle::label),
            length: LengthRange {
                min_minutes: MIN_LENGTH_MINUTES,
                max_minutes: MAX_LENGTH_MINUTES,
                default_minutes: DEFAULT_LENGTH_MINUTES,
                shortcuts: LENGTH_SHORTCUTS,
            },
            quality: QualityInfo {
                label: QUALITY_LABEL,
                headline: QUALITY_HEADLINE,
                details: QUALITY_DETAILS,
            },
            hero: HeroCopy {
                headline: HERO_HEADLINE,
                tagline: HERO_TAGLINE,
            },
            features: FEATURES,
        },
    })
}
