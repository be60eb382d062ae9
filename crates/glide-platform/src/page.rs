use glide_core::View;
use glide_core::markup::render;
use glide_ui::CarouselConfig;
use glide_ui::style::stylesheet;
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::DEFAULT_MOUNT_ID;

/// Document-level settings for [`render_page`].
#[derive(Clone, Debug)]
pub struct PageOptions {
    pub title: String,
    pub mount_id: String,
    /// Styles the carousel stylesheet is generated from.
    pub carousel: CarouselConfig,
    /// App CSS appended after the carousel rules.
    pub extra_css: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Glide".to_string(),
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            carousel: CarouselConfig::default(),
            extra_css: String::new(),
        }
    }
}

impl PageOptions {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn extra_css(mut self, css: impl Into<String>) -> Self {
        self.extra_css = css.into();
        self
    }

    pub fn css(&self) -> String {
        let mut css = stylesheet(&self.carousel);
        css.push_str(&self.extra_css);
        css
    }
}

/// Renders `body` as a complete HTML document, mounted inside the element the
/// browser runner would patch.
pub fn render_page(options: &PageOptions, body: &View) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (options.title) }
                style { (PreEscaped(options.css())) }
            }
            body {
                div id=(options.mount_id) {
                    (render(body))
                }
            }
        }
    }
}
