use glide_core::*;
use serde::{Deserialize, Serialize};

use crate::{Image, ListItem};

/// One slide as supplied by the caller. List order is display order.
///
/// Missing fields decode as empty strings; a slide is never rejected for
/// lacking a source or a label, it just renders with empty attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlideDescriptor {
    #[serde(alias = "imageSrc")]
    pub media_source: String,
    #[serde(alias = "imageAlt")]
    pub media_label: String,
}

impl SlideDescriptor {
    pub fn new(media_source: impl Into<String>, media_label: impl Into<String>) -> Self {
        Self {
            media_source: media_source.into(),
            media_label: media_label.into(),
        }
    }
}

/// Decodes a JSON array of slides.
pub fn slides_from_json(json: &str) -> Result<Vec<SlideDescriptor>> {
    serde_json::from_str(json).map_err(|e| GlideError::Decode {
        what: "slide list",
        reason: e.to_string(),
    })
}

pub fn SlideItem(slide: &SlideDescriptor) -> View {
    ListItem(Modifier::new().class("swiper-item")).child(
        Image(&slide.media_source, &slide.media_label)
            .modifier(Modifier::new().class("swiper-img")),
    )
}
