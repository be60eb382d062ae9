//! Web runner (wasm32): mounts a [`Component`] into the DOM with `web-sys`.
//!
//! The view tree is turned into real elements once and patched in place on
//! every change. Element events reach the current view's handlers through
//! per-node slots, so listeners are installed once per element rather than
//! once per render. Drags are tracked on `window` through [`WindowSurface`].
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, MouseEvent, TouchEvent, Window};

use glide_core::*;

use crate::{DEFAULT_MOUNT_ID, PageOptions};

const STYLE_ELEMENT_ID: &str = "glide-style";

#[wasm_bindgen]
pub struct WebOptions {
    mount_id: Option<String>,
    page: PageOptions,
    log_level: log::Level,
}

#[wasm_bindgen]
impl WebOptions {
    #[wasm_bindgen(constructor)]
    pub fn new(mount_id: Option<String>) -> Self {
        Self {
            mount_id,
            page: PageOptions::default(),
            log_level: log::Level::Info,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mount_id(&self) -> String {
        self.mount_id
            .clone()
            .unwrap_or_else(|| DEFAULT_MOUNT_ID.to_string())
    }
}

impl WebOptions {
    /// Sets the page settings the injected stylesheet is generated from.
    pub fn page(mut self, page: PageOptions) -> Self {
        self.page = page;
        self
    }

    pub fn log_level(mut self, level: log::Level) -> Self {
        self.log_level = level;
        self
    }
}

impl Default for WebOptions {
    fn default() -> Self {
        Self::new(None)
    }
}

fn dom_err(err: JsValue) -> GlideError {
    GlideError::Dom(format!("{err:?}"))
}

/// An event listener that is removed when dropped.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn new(target: &EventTarget, kind: &'static str, f: impl FnMut(Event) + 'static) -> Result<Self> {
        let closure = Closure::<dyn FnMut(Event)>::new(f);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(dom_err)?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Converts a DOM mouse or touch event. Touch events are recognised by their
/// type so no `TouchEvent` constructor has to exist (desktop browsers).
fn pointer_event(ev: &Event, phase: PointerPhase) -> Option<PointerEvent> {
    if ev.type_().starts_with("touch") {
        let touch: &TouchEvent = ev.unchecked_ref();
        let list = touch.changed_touches();
        let points = (0..list.length())
            .filter_map(|i| list.get(i))
            .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32));
        Some(PointerEvent::touch(phase, points))
    } else {
        let mouse = ev.dyn_ref::<MouseEvent>()?;
        Some(PointerEvent::mouse(
            phase,
            mouse.client_x() as f32,
            mouse.client_y() as f32,
        ))
    }
}

/// `window`-level capture: listeners for moves and releases stay installed
/// until the returned guard runs.
pub struct WindowSurface {
    window: Window,
}

impl WindowSurface {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl InputSurface for WindowSurface {
    fn capture(&self, handlers: CaptureHandlers) -> Result<Dispose> {
        let target: &EventTarget = &self.window;
        let mut listeners = Vec::with_capacity(5);
        for (kind, phase) in [
            ("mousemove", PointerPhase::Move),
            ("touchmove", PointerPhase::Move),
            ("mouseup", PointerPhase::Up),
            ("touchend", PointerPhase::Up),
            ("touchcancel", PointerPhase::Cancel),
        ] {
            let handler = if phase == PointerPhase::Move {
                handlers.on_move.clone()
            } else {
                handlers.on_release.clone()
            };
            listeners.push(Listener::new(target, kind, move |ev| {
                if let Some(pe) = pointer_event(&ev, phase) {
                    handler(pe);
                }
            })?);
        }
        log::trace!("window capture installed");
        Ok(Dispose::new(move || {
            drop(listeners);
            log::trace!("window capture removed");
        }))
    }
}

/// `offsetWidth` / `scrollWidth` of a mounted element.
struct ElementMeasure(HtmlElement);

impl Measure for ElementMeasure {
    fn extent(&self) -> ScrollExtent {
        ScrollExtent::new(self.0.offset_width() as f32, self.0.scroll_width() as f32)
    }
}

#[derive(Default)]
struct Slots {
    pointer_down: Option<Rc<dyn Fn(PointerEvent)>>,
    click: Option<Callback>,
}

/// A mounted element mirroring one [`View`].
struct DomNode {
    element: Element,
    tag: &'static str,
    slots: Rc<RefCell<Slots>>,
    _listeners: Vec<Listener>,
    children: Vec<DomNode>,
}

impl DomNode {
    fn build(document: &Document, view: &View) -> Result<Self> {
        let tag = view.kind.tag();
        let element = document.create_element(tag).map_err(dom_err)?;
        let slots = Rc::new(RefCell::new(Slots::default()));

        let mut listeners = Vec::with_capacity(3);
        for kind in ["mousedown", "touchstart"] {
            let slots = slots.clone();
            listeners.push(Listener::new(&element, kind, move |ev| {
                // clone out so the handler may trigger a re-render
                let handler = slots.borrow().pointer_down.clone();
                if let (Some(h), Some(pe)) = (handler, pointer_event(&ev, PointerPhase::Down)) {
                    h(pe);
                }
            })?);
        }
        listeners.push(Listener::new(&element, "click", {
            let slots = slots.clone();
            move |_| {
                let handler = slots.borrow().click.clone();
                if let Some(h) = handler {
                    h();
                }
            }
        })?);

        let mut node = Self {
            element,
            tag,
            slots,
            _listeners: listeners,
            children: Vec::with_capacity(view.children.len()),
        };
        node.apply(view)?;
        for child in &view.children {
            let built = DomNode::build(document, child)?;
            node.element.append_child(&built.element).map_err(dom_err)?;
            node.children.push(built);
        }
        Ok(node)
    }

    fn apply(&self, view: &View) -> Result<()> {
        let m = &view.modifier;
        self.set_attr("class", m.class_attr().as_deref())?;
        self.set_attr("style", m.style_attr().as_deref())?;
        self.set_attr("data-testid", m.test_id)?;
        let role = view.semantics.as_ref().and_then(|s| s.role.aria_role());
        self.set_attr("role", role)?;
        self.set_attr("aria-label", glide_core::markup::aria_label(view).as_deref())?;
        if let ViewKind::Image {
            src,
            alt,
            draggable,
        } = &view.kind
        {
            self.set_attr("src", Some(src.as_str()))?;
            self.set_attr("alt", Some(alt.as_str()))?;
            self.set_attr("draggable", Some(if *draggable { "true" } else { "false" }))?;
        }

        {
            let mut slots = self.slots.borrow_mut();
            slots.pointer_down = m.on_pointer_down.clone();
            slots.click = m.on_click.clone();
        }

        if let Some(node_ref) = &m.node_ref {
            match self.element.clone().dyn_into::<HtmlElement>() {
                Ok(el) => node_ref.bind(Rc::new(ElementMeasure(el))),
                Err(_) => log::warn!("<{}> cannot be measured", self.tag),
            }
        }
        Ok(())
    }

    fn set_attr(&self, name: &str, value: Option<&str>) -> Result<()> {
        let current = self.element.get_attribute(name);
        match value {
            Some(v) if current.as_deref() != Some(v) => {
                self.element.set_attribute(name, v).map_err(dom_err)
            }
            None if current.is_some() => self.element.remove_attribute(name).map_err(dom_err),
            _ => Ok(()),
        }
    }

    fn patch(&mut self, document: &Document, view: &View) -> Result<()> {
        self.apply(view)?;
        for (i, child) in view.children.iter().enumerate() {
            match self.children.get_mut(i) {
                Some(existing) if existing.tag == child.kind.tag() => {
                    existing.patch(document, child)?;
                }
                Some(existing) => {
                    let fresh = DomNode::build(document, child)?;
                    self.element
                        .replace_child(&fresh.element, &existing.element)
                        .map_err(dom_err)?;
                    *existing = fresh;
                }
                None => {
                    let fresh = DomNode::build(document, child)?;
                    self.element.append_child(&fresh.element).map_err(dom_err)?;
                    self.children.push(fresh);
                }
            }
        }
        while self.children.len() > view.children.len() {
            if let Some(stale) = self.children.pop() {
                self.element.remove_child(&stale.element).map_err(dom_err)?;
            }
        }
        Ok(())
    }
}

fn inject_stylesheet(document: &Document, css: &str) -> Result<()> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let head = document
        .head()
        .ok_or(GlideError::MissingHost("document head"))?;
    let style = document.create_element("style").map_err(dom_err)?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(css));
    head.append_child(&style).map_err(dom_err)?;
    Ok(())
}

struct Mounted {
    document: Document,
    root: Element,
    component: Rc<dyn Component>,
    tree: RefCell<Option<DomNode>>,
}

impl Mounted {
    fn render(&self) -> Result<()> {
        let view = self.component.view();
        let mut tree = self.tree.borrow_mut();
        if let Some(node) = tree.as_mut()
            && node.tag == view.kind.tag()
        {
            return node.patch(&self.document, &view);
        }

        let fresh = DomNode::build(&self.document, &view)?;
        match tree.take() {
            Some(old) => {
                self.root
                    .replace_child(&fresh.element, &old.element)
                    .map_err(dom_err)?;
            }
            None => {
                // drop any server-rendered markup
                self.root.set_inner_html("");
                self.root.append_child(&fresh.element).map_err(dom_err)?;
            }
        }
        *tree = Some(fresh);
        Ok(())
    }
}

/// A running app. Dropping it unmounts the tree and disposes the app scope.
pub struct WebApp {
    mounted: Rc<Mounted>,
    scope: Option<Scope>,
}

impl Drop for WebApp {
    fn drop(&mut self) {
        if let Some(scope) = self.scope.take() {
            scope.dispose();
        }
        let node = self.mounted.tree.borrow_mut().take();
        if let Some(node) = node {
            let _ = self.mounted.root.remove_child(&node.element);
        }
        log::info!("glide app unmounted");
    }
}

/// Mounts the component built by `build` into the element named by
/// `options`, with `window` as its input surface. Widgets created inside
/// `build` are owned by the app scope.
pub fn run_web_app<C>(options: WebOptions, build: impl FnOnce() -> C) -> Result<WebApp>
where
    C: Component + 'static,
{
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    let _ = console_log::init_with_level(options.log_level);

    let window = web_sys::window().ok_or(GlideError::MissingHost("window"))?;
    let document = window
        .document()
        .ok_or(GlideError::MissingHost("document"))?;
    let mount_id = options.mount_id();
    let root = document
        .get_element_by_id(&mount_id)
        .ok_or(GlideError::MissingHost("mount element"))?;
    inject_stylesheet(&document, &options.page.css())?;

    let surface: Rc<dyn InputSurface> = Rc::new(WindowSurface::new(window));
    let scope = Scope::new();
    let component: Rc<dyn Component> = Rc::new(scope.run(|| with_input_surface(surface, build)));

    let mounted = Rc::new(Mounted {
        document,
        root,
        component: component.clone(),
        tree: RefCell::new(None),
    });
    mounted.render()?;

    let weak: Weak<Mounted> = Rc::downgrade(&mounted);
    component.on_change(Rc::new(move || {
        if let Some(mounted) = weak.upgrade()
            && let Err(err) = mounted.render()
        {
            log::error!("re-render failed: {err}");
        }
    }));

    log::info!("glide app mounted into #{mount_id}");
    Ok(WebApp {
        mounted,
        scope: Some(scope),
    })
}
