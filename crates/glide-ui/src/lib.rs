#![allow(non_snake_case)]
//! Widgets: the swipeable [`Carousel`](carousel::Carousel), its
//! [`SlideItem`](slide::SlideItem)s, and the primitives they are built from.

pub mod carousel;
pub mod config;
pub mod gestures;
pub mod slide;
pub mod style;

pub use carousel::Carousel;
pub use config::CarouselConfig;
pub use slide::{SlideDescriptor, SlideItem, slides_from_json};

use glide_core::*;

pub fn Box(modifier: Modifier) -> View {
    View::new(ViewKind::Box).modifier(modifier)
}

pub fn List(modifier: Modifier) -> View {
    View::new(ViewKind::List).modifier(modifier)
}

pub fn ListItem(modifier: Modifier) -> View {
    View::new(ViewKind::ListItem).modifier(modifier)
}

/// A non-draggable image, labelled for screen readers with `alt`.
pub fn Image(src: impl Into<String>, alt: impl Into<String>) -> View {
    let alt = alt.into();
    View::new(ViewKind::Image {
        src: src.into(),
        alt: alt.clone(),
        draggable: false,
    })
    .semantics(Semantics::new(Role::Image).label(alt))
}
