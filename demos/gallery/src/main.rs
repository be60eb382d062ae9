//! Renders the gallery page to stdout.
//!
//! `gallery-page [SLIDE]` drives the carousel to `SLIDE` with scripted
//! drags on a headless host before rendering, so the page opens on it.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use std::rc::Rc;

    use anyhow::{Context, bail};
    use glide_core::headless::{HeadlessSurface, StaticMeasure, press};
    use glide_core::*;
    use glide_platform::render_page;

    const CONTAINER_WIDTH: f32 = 640.0;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let target: usize = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("slide must be a number, got {arg:?}"))?,
        None => 0,
    };

    let slides = gallery::slides().context("bundled slide list")?;
    if target >= slides.len() {
        bail!("slide {target} out of range (0..{})", slides.len());
    }
    let count = slides.len();

    let surface = Rc::new(HeadlessSurface::new());
    let app = with_input_surface(surface.clone(), || gallery::App::new(slides));
    let carousel = app.carousel();
    carousel
        .list_ref()
        .bind(StaticMeasure::new(CONTAINER_WIDTH, CONTAINER_WIDTH * count as f32));

    // one drag past the threshold per slide
    while carousel.index() < target {
        let before = carousel.index();
        press(&app.view(), PointerEvent::mouse(PointerPhase::Down, 300.0, 0.0));
        surface.dispatch(PointerEvent::mouse(PointerPhase::Move, 200.0, 0.0));
        surface.dispatch(PointerEvent::mouse(PointerPhase::Up, 200.0, 0.0));
        log::info!(
            "swiped to slide {} (offset {})",
            carousel.index(),
            carousel.offset()
        );
        if carousel.index() == before {
            bail!("carousel did not advance past slide {before}");
        }
    }

    let page = render_page(&gallery::page_options(), &app.view());
    println!("{}", page.into_string());
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
