//! # Carousel
//!
//! A horizontally swipeable list of slides with a row of indicator dots.
//!
//! ```rust
//! use std::rc::Rc;
//! use glide_core::*;
//! use glide_core::headless::{HeadlessSurface, StaticMeasure, press};
//! use glide_ui::{Carousel, SlideDescriptor};
//!
//! let surface = Rc::new(HeadlessSurface::new());
//! let carousel = with_input_surface(surface.clone(), || {
//!     Carousel::new(vec![
//!         SlideDescriptor::new("/pic1.jpeg", "A rock formation"),
//!         SlideDescriptor::new("/pic2.jpeg", "Some flowers"),
//!     ])
//! });
//! carousel.list_ref().bind(StaticMeasure::new(200.0, 400.0));
//!
//! press(&carousel.view(), PointerEvent::mouse(PointerPhase::Down, 0.0, 0.0));
//! surface.dispatch(PointerEvent::mouse(PointerPhase::Move, -41.0, 0.0));
//! surface.dispatch(PointerEvent::mouse(PointerPhase::Up, -41.0, 0.0));
//!
//! assert_eq!(carousel.offset(), -200.0);
//! assert_eq!(carousel.index(), 1);
//! ```
//!
//! State lives in three signals (offset, index, swiping) that the host
//! re-renders from, plus a [`SwipeGesture`] that only exists for the length
//! of a drag. A press opens a capture session on the page-wide
//! [`InputSurface`], so the drag keeps tracking outside the widget; the
//! session is closed on release, on cancel, on [`Carousel::dispose`], when
//! the owning [`Scope`] is disposed, and when the last handle is dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glide_core::*;

use crate::gestures::{SwipeGesture, offset_for_index};
use crate::{Box, CarouselConfig, List, ListItem, SlideDescriptor, SlideItem};

/// Cloning shares the same carousel.
#[derive(Clone)]
pub struct Carousel {
    inner: Rc<Inner>,
}

struct Inner {
    slides: Vec<SlideDescriptor>,
    list_ref: NodeRef,
    offset: Signal<f32>,
    index: Signal<usize>,
    swiping: Signal<bool>,
    gesture: RefCell<SwipeGesture>,
    capture: RefCell<Option<Dispose>>,
    surface: Option<Rc<dyn InputSurface>>,
}

impl Carousel {
    pub fn new(slides: Vec<SlideDescriptor>) -> Self {
        Self::with_config(slides, CarouselConfig::default())
    }

    /// Builds a carousel that tracks drags on the surface provided with
    /// [`with_input_surface`] and registers its teardown with the current
    /// [`Scope`].
    pub fn with_config(slides: Vec<SlideDescriptor>, config: CarouselConfig) -> Self {
        let surface = input_surface();
        if surface.is_none() {
            log::warn!("carousel built without an input surface; drags will be ignored");
        }

        let inner = Rc::new(Inner {
            slides,
            list_ref: NodeRef::new(),
            offset: signal(0.0),
            index: signal(0),
            swiping: signal(false),
            gesture: RefCell::new(SwipeGesture::new(config.swipe_threshold)),
            capture: RefCell::new(None),
            surface,
        });

        let weak = Rc::downgrade(&inner);
        on_scope_dispose(move || {
            if let Some(inner) = weak.upgrade() {
                inner.teardown();
            }
        });

        Self { inner }
    }

    /// Current horizontal translation of the slide list, in `[min_offset, 0]`.
    pub fn offset(&self) -> f32 {
        self.inner.offset.get()
    }

    /// Index of the active indicator.
    pub fn index(&self) -> usize {
        self.inner.index.get()
    }

    pub fn is_swiping(&self) -> bool {
        self.inner.swiping.get()
    }

    pub fn slide_count(&self) -> usize {
        self.inner.slides.len()
    }

    pub fn slides(&self) -> &[SlideDescriptor] {
        &self.inner.slides
    }

    /// Ref to the slide list element; the host binds it on mount.
    pub fn list_ref(&self) -> &NodeRef {
        &self.inner.list_ref
    }

    /// Ends any drag in flight and removes its page-wide listeners.
    pub fn dispose(&self) {
        self.inner.teardown();
    }

    pub fn view(&self) -> View {
        let inner = &self.inner;
        let offset = inner.offset.get();
        let index = inner.index.get();
        let swiping = inner.swiping.get();
        let weak = Rc::downgrade(inner);

        let list = List(
            Modifier::new()
                .class("swiper-list")
                .class_if(swiping, "is-swiping")
                .transform(Transform::translate(offset, 0.0))
                .node_ref(inner.list_ref.clone()),
        )
        .with_children(inner.slides.iter().map(SlideItem).collect());

        let indicators = List(Modifier::new().class("swiper-indicator")).with_children(
            (0..inner.slides.len())
                .map(|i| Indicator(i, i == index, weak.clone()))
                .collect(),
        );

        Box(Modifier::new()
            .class("swiper-container")
            .on_pointer_down(move |ev| {
                if let Some(inner) = weak.upgrade() {
                    inner.press(ev);
                }
            }))
        .child(list)
        .child(indicators)
    }
}

fn Indicator(index: usize, active: bool, carousel: Weak<Inner>) -> View {
    ListItem(
        Modifier::new()
            .class("swiper-indicator-item")
            .class_if(active, "active")
            .test_id("indicator")
            .on_click(move || {
                if let Some(inner) = carousel.upgrade() {
                    inner.select(index);
                }
            }),
    )
    .semantics(Semantics::new(Role::Button).label(format!("Go to slide {}", index + 1)))
}

impl Inner {
    fn measure(&self) -> ScrollExtent {
        self.list_ref.extent().unwrap_or_else(|| {
            log::warn!("carousel list is not mounted; measuring it as zero width");
            ScrollExtent::default()
        })
    }

    fn press(self: &Rc<Self>, event: PointerEvent) {
        let Some(pos) = event.position() else {
            log::debug!("press without coordinates ignored");
            return;
        };
        if self.gesture.borrow().is_dragging() {
            log::debug!("press during an active swipe ignored");
            return;
        }
        let Some(surface) = self.surface.clone() else {
            log::warn!("press ignored: no input surface to track the drag on");
            return;
        };

        let extent = self.measure();
        let committed = self.offset.get();
        self.gesture.borrow_mut().begin(extent, pos.x, committed);
        log::debug!(
            "swipe begin: x={} offset={committed} viewport={} content={}",
            pos.x,
            extent.viewport,
            extent.content
        );
        self.swiping.set(true);

        let weak = Rc::downgrade(self);
        let handlers = CaptureHandlers {
            on_move: Rc::new({
                let weak = weak.clone();
                move |ev| {
                    if let Some(inner) = weak.upgrade() {
                        inner.drag(&ev);
                    }
                }
            }),
            on_release: Rc::new(move |_| {
                if let Some(inner) = weak.upgrade() {
                    inner.release();
                }
            }),
        };

        match surface.capture(handlers) {
            Ok(guard) => {
                let stale = self.capture.borrow_mut().replace(guard);
                if let Some(stale) = stale {
                    stale.run();
                }
            }
            Err(err) => {
                log::warn!("could not track swipe: {err}");
                self.gesture.borrow_mut().cancel();
                self.swiping.set(false);
            }
        }
    }

    fn drag(&self, event: &PointerEvent) {
        let Some(pos) = event.position() else {
            return;
        };
        let next = self.gesture.borrow().drag(pos.x);
        if let Some(offset) = next {
            log::trace!("swipe move: x={} offset={offset}", pos.x);
            self.offset.set(offset);
        }
    }

    fn release(&self) {
        let current = self.offset.get();
        let snap = self.gesture.borrow_mut().release(current);
        self.end_capture();

        let Some(snap) = snap else {
            return;
        };
        let index = snap.index.min(self.slides.len().saturating_sub(1));
        log::debug!(
            "swipe end: released at {current}, resting at {} (slide {index})",
            snap.offset
        );

        self.swiping.set(false);
        self.offset.set(snap.offset);
        self.index.set(index);
    }

    fn select(&self, index: usize) {
        if index >= self.slides.len() {
            log::debug!("indicator {index} out of range ({} slides)", self.slides.len());
            return;
        }
        let width = self.measure().viewport;
        log::debug!("indicator jump to slide {index}");
        self.index.set(index);
        self.offset.set(offset_for_index(width, index));
    }

    fn end_capture(&self) {
        let guard = self.capture.borrow_mut().take();
        if let Some(guard) = guard {
            guard.run();
        }
    }

    /// Ends a drag in flight through the release path, so the carousel is
    /// left resting on a slide boundary.
    fn teardown(&self) {
        self.release();
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(guard) = self.capture.get_mut().take() {
            guard.run();
        }
    }
}

impl Component for Carousel {
    fn view(&self) -> View {
        Carousel::view(self)
    }

    fn on_change(&self, f: Rc<dyn Fn()>) {
        let on_offset = f.clone();
        self.inner.offset.subscribe(move |_| on_offset());
        let on_index = f.clone();
        self.inner.index.subscribe(move |_| on_index());
        self.inner.swiping.subscribe(move |_| f());
    }
}

impl std::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("slides", &self.inner.slides.len())
            .field("offset", &self.offset())
            .field("index", &self.index())
            .field("swiping", &self.is_swiping())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use glide_core::headless::*;
    use glide_core::markup::to_html;

    use super::*;

    fn slides(n: usize) -> Vec<SlideDescriptor> {
        (0..n)
            .map(|i| SlideDescriptor::new(format!("/pic{}.jpeg", i + 1), format!("Picture {}", i + 1)))
            .collect()
    }

    struct Harness {
        carousel: Carousel,
        surface: Rc<HeadlessSurface>,
        measure: Rc<StaticMeasure>,
        width: f32,
    }

    fn mount(n: usize, width: f32) -> Harness {
        let surface = Rc::new(HeadlessSurface::new());
        let carousel = with_input_surface(surface.clone(), || Carousel::new(slides(n)));
        let measure = StaticMeasure::new(width, width * n as f32);
        carousel.list_ref().bind(measure.clone());
        Harness {
            carousel,
            surface,
            measure,
            width,
        }
    }

    impl Harness {
        fn down(&self, x: f32) {
            assert!(press(
                &self.carousel.view(),
                PointerEvent::mouse(PointerPhase::Down, x, 0.0)
            ));
        }

        fn move_to(&self, x: f32) {
            self.surface
                .dispatch(PointerEvent::mouse(PointerPhase::Move, x, 0.0));
        }

        fn up(&self) {
            self.surface
                .dispatch(PointerEvent::mouse(PointerPhase::Up, 0.0, 0.0));
        }

        fn mouse_swipe(&self, from: f32, to: f32) {
            self.down(from);
            self.move_to(to);
            self.up();
        }

        fn touch_swipe(&self, from: f32, to: f32) {
            press(
                &self.carousel.view(),
                PointerEvent::touch(PointerPhase::Down, [Vec2::new(from, 0.0)]),
            );
            self.surface
                .dispatch(PointerEvent::touch(PointerPhase::Move, [Vec2::new(to, 0.0)]));
            self.surface
                .dispatch(PointerEvent::touch(PointerPhase::Up, []));
        }

        fn click(&self, i: usize) {
            assert!(click_test_id(&self.carousel.view(), "indicator", i));
        }

        fn list_style(&self) -> String {
            let view = self.carousel.view();
            let list = view.by_class("swiper-list")[0];
            list.modifier.style_attr().unwrap()
        }

        fn active_indicators(&self) -> Vec<usize> {
            let view = self.carousel.view();
            view.by_test_id("indicator")
                .iter()
                .enumerate()
                .filter(|(_, v)| v.modifier.has_class("active"))
                .map(|(i, _)| i)
                .collect()
        }

        fn assert_at_rest(&self) {
            let c = &self.carousel;
            let min_offset = self.width - self.width * c.slide_count() as f32;
            assert!(!c.is_swiping());
            assert!(c.offset() <= 0.0 && c.offset() >= min_offset, "{c:?}");
            assert_eq!(c.offset() % self.width, 0.0, "{c:?}");
            assert_eq!(self.width * c.index() as f32, -c.offset(), "{c:?}");
            assert_eq!(self.active_indicators(), vec![c.index()]);
        }
    }

    #[test]
    fn displays_the_images_in_order() {
        let h = mount(5, 200.0);
        let view = h.carousel.view();
        let rendered: Vec<(String, String)> = view
            .find_all(|v| matches!(v.kind, ViewKind::Image { .. }))
            .into_iter()
            .filter_map(|v| match &v.kind {
                ViewKind::Image { src, alt, .. } => Some((src.clone(), alt.clone())),
                _ => None,
            })
            .collect();
        let expected: Vec<(String, String)> = slides(5)
            .into_iter()
            .map(|s| (s.media_source, s.media_label))
            .collect();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn swipes_on_mouse_move() {
        let h = mount(3, 137.0);
        assert_eq!(h.list_style(), "transform: translate3d(0px, 0, 0)");

        h.mouse_swipe(0.0, -41.0);
        assert_eq!(h.list_style(), "transform: translate3d(-137px, 0, 0)");

        h.mouse_swipe(0.0, 41.0);
        assert_eq!(h.list_style(), "transform: translate3d(0px, 0, 0)");

        h.mouse_swipe(0.0, 25.0);
        assert_eq!(h.list_style(), "transform: translate3d(0px, 0, 0)");

        // already at the start
        h.mouse_swipe(0.0, 1.0);
        assert_eq!(h.list_style(), "transform: translate3d(0px, 0, 0)");

        // already at the end
        h.mouse_swipe(0.0, -(274.0 + 1.0));
        assert_eq!(h.list_style(), "transform: translate3d(-274px, 0, 0)");
        h.assert_at_rest();
    }

    #[test]
    fn swipes_on_touch_move() {
        let h = mount(3, 137.0);

        h.touch_swipe(0.0, -41.0);
        assert_eq!(h.list_style(), "transform: translate3d(-137px, 0, 0)");

        h.touch_swipe(0.0, 41.0);
        assert_eq!(h.list_style(), "transform: translate3d(0px, 0, 0)");

        h.touch_swipe(0.0, -25.0);
        assert_eq!(h.list_style(), "transform: translate3d(0px, 0, 0)");

        h.touch_swipe(0.0, 1.0);
        assert_eq!(h.list_style(), "transform: translate3d(0px, 0, 0)");

        h.touch_swipe(0.0, -275.0);
        assert_eq!(h.list_style(), "transform: translate3d(-274px, 0, 0)");
        h.assert_at_rest();
    }

    #[test]
    fn swipes_on_indicator_click() {
        let h = mount(3, 137.0);
        assert_eq!(h.active_indicators(), vec![0]);

        h.click(1);
        assert_eq!(h.active_indicators(), vec![1]);
        assert_eq!(h.list_style(), "transform: translate3d(-137px, 0, 0)");
    }

    #[test]
    fn threshold_boundary() {
        let h = mount(3, 200.0);
        h.mouse_swipe(0.0, -41.0);
        assert_eq!((h.carousel.offset(), h.carousel.index()), (-200.0, 1));

        let h = mount(3, 200.0);
        h.mouse_swipe(0.0, -30.0);
        assert_eq!((h.carousel.offset(), h.carousel.index()), (0.0, 0));

        h.mouse_swipe(0.0, -40.0);
        assert_eq!((h.carousel.offset(), h.carousel.index()), (0.0, 0));
    }

    #[test]
    fn drag_clamps_while_moving() {
        let h = mount(3, 200.0);
        h.down(0.0);
        assert!(h.carousel.is_swiping());
        h.move_to(-401.0);
        assert_eq!(h.carousel.offset(), -400.0);
        h.move_to(-5_000.0);
        assert_eq!(h.carousel.offset(), -400.0);
        h.move_to(1.0);
        assert_eq!(h.carousel.offset(), 0.0);
        h.move_to(-120.0);
        assert_eq!(h.carousel.offset(), -120.0);
        h.up();
        assert_eq!((h.carousel.offset(), h.carousel.index()), (-200.0, 1));
    }

    #[test]
    fn swiping_class_follows_the_drag() {
        let h = mount(3, 200.0);
        let has_class = |h: &Harness| {
            h.carousel.view().by_class("swiper-list")[0]
                .modifier
                .has_class("is-swiping")
        };
        assert!(!has_class(&h));
        h.down(0.0);
        assert!(has_class(&h));
        h.up();
        assert!(!has_class(&h));
    }

    #[test]
    fn end_to_end_drag_then_indicator() {
        let h = mount(5, 320.0);
        h.down(0.0);
        h.move_to(-41.0);
        h.up();
        assert_eq!((h.carousel.offset(), h.carousel.index()), (-320.0, 1));

        h.click(0);
        assert_eq!((h.carousel.offset(), h.carousel.index()), (0.0, 0));
        h.assert_at_rest();
    }

    #[test]
    fn clicking_active_indicator_is_idempotent() {
        let h = mount(4, 200.0);
        h.click(2);
        let before = (h.carousel.offset(), h.carousel.index());
        h.click(2);
        assert_eq!((h.carousel.offset(), h.carousel.index()), before);
        assert_eq!(before, (-400.0, 2));
    }

    #[test]
    fn indicator_round_trip() {
        let h = mount(6, 150.0);
        for i in (0..6).rev().chain(0..6) {
            h.click(i);
            assert_eq!(h.carousel.index(), i);
            h.assert_at_rest();
        }
    }

    #[test]
    fn indicator_remeasures_the_list() {
        let h = mount(3, 200.0);
        h.measure.set(300.0, 900.0);
        h.click(2);
        assert_eq!(h.carousel.offset(), -600.0);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let h = mount(3, 200.0);
        h.carousel.inner.select(3);
        assert_eq!((h.carousel.offset(), h.carousel.index()), (0.0, 0));
    }

    #[test]
    fn resting_states_stay_on_slide_boundaries() {
        let h = mount(5, 200.0);
        let moves = [-41.0, -41.0, 60.0, -300.0, -1000.0, 39.0, 41.0, 500.0, -199.0, -101.0];
        for to in moves {
            h.mouse_swipe(0.0, to);
            h.assert_at_rest();
        }
    }

    #[test]
    fn capture_session_is_scoped_to_the_drag() {
        let h = mount(3, 200.0);
        assert_eq!(h.surface.active_sessions(), 0);

        h.down(0.0);
        assert_eq!(h.surface.active_sessions(), 1);
        h.move_to(-60.0);
        h.up();
        assert_eq!(h.surface.active_sessions(), 0);

        // a stray release with no drag changes nothing
        h.up();
        assert_eq!((h.carousel.offset(), h.carousel.index()), (-200.0, 1));
        assert_eq!(h.surface.sessions_opened(), 1);
    }

    #[test]
    fn second_press_during_drag_is_ignored() {
        let h = mount(3, 200.0);
        h.down(0.0);
        h.move_to(-60.0);
        h.down(500.0);
        assert_eq!(h.surface.active_sessions(), 1);
        assert_eq!(h.surface.sessions_opened(), 1);
        h.move_to(-70.0);
        assert_eq!(h.carousel.offset(), -70.0);
        h.up();
        assert_eq!(h.surface.active_sessions(), 0);
    }

    #[test]
    fn touch_cancel_ends_the_gesture() {
        let h = mount(3, 200.0);
        h.down(0.0);
        h.move_to(-90.0);
        h.surface
            .dispatch(PointerEvent::touch(PointerPhase::Cancel, []));
        assert_eq!(h.surface.active_sessions(), 0);
        assert_eq!((h.carousel.offset(), h.carousel.index()), (-200.0, 1));
        assert!(!h.carousel.is_swiping());
    }

    #[test]
    fn dispose_mid_drag_removes_listeners() {
        let h = mount(3, 200.0);
        h.down(0.0);
        h.move_to(-90.0);
        h.carousel.dispose();
        assert_eq!(h.surface.active_sessions(), 0);
        h.assert_at_rest();
        assert_eq!((h.carousel.offset(), h.carousel.index()), (-200.0, 1));

        // a fresh gesture still works afterwards
        h.mouse_swipe(0.0, -41.0);
        assert_eq!(h.surface.active_sessions(), 0);
        assert_eq!((h.carousel.offset(), h.carousel.index()), (-400.0, 2));
        h.assert_at_rest();
    }

    #[test]
    fn dispose_when_idle_changes_nothing() {
        let h = mount(3, 200.0);
        h.click(2);
        h.carousel.dispose();
        assert_eq!((h.carousel.offset(), h.carousel.index()), (-400.0, 2));
        h.assert_at_rest();
    }

    #[test]
    fn dropping_the_carousel_removes_listeners() {
        let h = mount(3, 200.0);
        h.down(0.0);
        let Harness {
            carousel, surface, ..
        } = h;
        assert_eq!(surface.active_sessions(), 1);
        drop(carousel);
        assert_eq!(surface.active_sessions(), 0);
    }

    #[test]
    fn scope_disposal_removes_listeners() {
        let surface = Rc::new(HeadlessSurface::new());
        let scope = Scope::new();
        let carousel = scope.run(|| {
            with_input_surface(surface.clone(), || Carousel::new(slides(3)))
        });
        carousel.list_ref().bind(StaticMeasure::new(200.0, 600.0));

        press(
            &carousel.view(),
            PointerEvent::mouse(PointerPhase::Down, 0.0, 0.0),
        );
        surface.dispatch(PointerEvent::mouse(PointerPhase::Move, -130.0, 0.0));
        assert_eq!(surface.active_sessions(), 1);
        scope.dispose();
        assert_eq!(surface.active_sessions(), 0);
        assert!(!carousel.is_swiping());
        assert_eq!((carousel.offset(), carousel.index()), (-200.0, 1));
    }

    #[test]
    fn zero_width_container_rests_at_start() {
        let h = mount(3, 200.0);
        h.measure.set(0.0, 0.0);
        h.mouse_swipe(0.0, -80.0);
        assert_eq!((h.carousel.offset(), h.carousel.index()), (0.0, 0));
        assert!(h.carousel.offset().is_sign_positive());

        h.click(2);
        assert_eq!(h.carousel.index(), 2);
        assert_eq!(h.list_style(), "transform: translate3d(0px, 0, 0)");
    }

    #[test]
    fn unmounted_list_measures_as_zero() {
        let surface = Rc::new(HeadlessSurface::new());
        let carousel = with_input_surface(surface.clone(), || Carousel::new(slides(3)));
        press(
            &carousel.view(),
            PointerEvent::mouse(PointerPhase::Down, 0.0, 0.0),
        );
        surface.dispatch(PointerEvent::mouse(PointerPhase::Move, -100.0, 0.0));
        assert_eq!(carousel.offset(), 0.0);
        surface.dispatch(PointerEvent::mouse(PointerPhase::Up, 0.0, 0.0));
        assert_eq!((carousel.offset(), carousel.index()), (0.0, 0));
    }

    #[test]
    fn empty_list_renders_nothing_and_stays_put() {
        let h = mount(0, 200.0);
        let view = h.carousel.view();
        assert!(view.by_class("swiper-item").is_empty());
        assert!(view.by_test_id("indicator").is_empty());

        h.mouse_swipe(0.0, -100.0);
        assert_eq!((h.carousel.offset(), h.carousel.index()), (0.0, 0));
    }

    #[test]
    fn press_without_surface_is_ignored() {
        let carousel = Carousel::new(slides(3));
        carousel.list_ref().bind(StaticMeasure::new(200.0, 600.0));
        press(
            &carousel.view(),
            PointerEvent::mouse(PointerPhase::Down, 0.0, 0.0),
        );
        assert!(!carousel.is_swiping());
    }

    #[test]
    fn touch_press_without_coordinates_is_ignored() {
        let h = mount(3, 200.0);
        press(
            &h.carousel.view(),
            PointerEvent::touch(PointerPhase::Down, []),
        );
        assert!(!h.carousel.is_swiping());
        assert_eq!(h.surface.sessions_opened(), 0);
    }

    #[test]
    fn custom_threshold_from_config() {
        let surface = Rc::new(HeadlessSurface::new());
        let config = CarouselConfig {
            swipe_threshold: 10.0,
            ..CarouselConfig::default()
        };
        let carousel =
            with_input_surface(surface.clone(), || Carousel::with_config(slides(3), config));
        carousel.list_ref().bind(StaticMeasure::new(200.0, 600.0));
        press(
            &carousel.view(),
            PointerEvent::mouse(PointerPhase::Down, 0.0, 0.0),
        );
        surface.dispatch(PointerEvent::mouse(PointerPhase::Move, -15.0, 0.0));
        surface.dispatch(PointerEvent::mouse(PointerPhase::Up, 0.0, 0.0));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn on_change_fires_for_every_state_write() {
        let h = mount(3, 200.0);
        let hits = Rc::new(Cell::new(0));
        h.carousel.on_change({
            let hits = hits.clone();
            Rc::new(move || hits.set(hits.get() + 1))
        });
        h.down(0.0); // swiping
        h.move_to(-50.0); // offset
        h.up(); // swiping, offset, index
        assert_eq!(hits.get(), 5);
    }

    #[test]
    fn markup_matches_dom_contract() {
        let carousel = Carousel::new(vec![
            SlideDescriptor::new("/pic1.jpeg", "A rock formation"),
            SlideDescriptor::new("/pic2.jpeg", "Some flowers"),
        ]);
        insta::assert_snapshot!(
            to_html(&carousel.view()),
            @r#"<div class="swiper-container"><ul class="swiper-list" style="transform: translate3d(0px, 0, 0)"><li class="swiper-item"><img class="swiper-img" src="/pic1.jpeg" alt="A rock formation" draggable="false"></li><li class="swiper-item"><img class="swiper-img" src="/pic2.jpeg" alt="Some flowers" draggable="false"></li></ul><ul class="swiper-indicator"><li class="swiper-indicator-item active" data-testid="indicator" role="button" aria-label="Go to slide 1"></li><li class="swiper-indicator-item" data-testid="indicator" role="button" aria-label="Go to slide 2"></li></ul></div>"#
        );
    }
}
