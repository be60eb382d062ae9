use crate::CarouselConfig;

/// CSS for the class names the carousel renders. Slides are laid out in a
/// single row, each as wide as the container, so that `scrollWidth` on the
/// list is `slide_count * offsetWidth`.
pub fn stylesheet(config: &CarouselConfig) -> String {
    let ms = config.transition_ms;
    format!(
        r#".swiper-container {{
  position: relative;
  overflow: hidden;
  width: 100%;
  touch-action: pan-y;
  user-select: none;
}}
.swiper-list {{
  display: flex;
  margin: 0;
  padding: 0;
  list-style: none;
  transition: transform {ms}ms ease-out;
  cursor: grab;
}}
.swiper-list.is-swiping {{
  transition: none;
  cursor: grabbing;
}}
.swiper-item {{
  flex: 0 0 100%;
  width: 100%;
}}
.swiper-img {{
  display: block;
  width: 100%;
  height: auto;
  pointer-events: none;
}}
.swiper-indicator {{
  display: flex;
  justify-content: center;
  gap: 8px;
  margin: 12px 0 0;
  padding: 0;
  list-style: none;
}}
.swiper-indicator-item {{
  width: 10px;
  height: 10px;
  border-radius: 50%;
  background: #c4c4c4;
  cursor: pointer;
}}
.swiper-indicator-item.active {{
  background: #333;
}}
"#
    )
}
