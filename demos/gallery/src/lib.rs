//! Gallery demo: five photos in a swipeable carousel.
//!
//! The same [`App`] is mounted in the browser (`wasm32`) and rendered to a
//! static page by the `gallery-page` binary.

use glide_core::*;
use glide_platform::PageOptions;
use glide_ui::{Box, Carousel, SlideDescriptor, slides_from_json};

#[cfg(target_arch = "wasm32")]
mod web;

const SLIDES_JSON: &str = include_str!("../assets/slides.json");

const PAGE_CSS: &str = "
.container {
  max-width: 640px;
  margin: 40px auto;
}
";

pub fn slides() -> Result<Vec<SlideDescriptor>> {
    slides_from_json(SLIDES_JSON)
}

pub fn page_options() -> PageOptions {
    PageOptions::default()
        .title("Glide gallery")
        .extra_css(PAGE_CSS)
}

pub struct App {
    carousel: Carousel,
}

impl App {
    /// Must be called inside the host's [`with_input_surface`] for drags to
    /// be tracked.
    pub fn new(slides: Vec<SlideDescriptor>) -> Self {
        Self {
            carousel: Carousel::new(slides),
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }
}

impl Component for App {
    fn view(&self) -> View {
        Box(Modifier::new().class("container")).child(self.carousel.view())
    }

    fn on_change(&self, f: std::rc::Rc<dyn Fn()>) {
        self.carousel.on_change(f);
    }
}
