//! Static HTML for a view tree.
//!
//! The markup follows the same element/attribute contract the browser host
//! builds, so it doubles as server-side rendering and as a readable form of a
//! view in tests.

use maud::{Markup, html};

use crate::{Role, View, ViewKind};

pub fn render(view: &View) -> Markup {
    let m = &view.modifier;
    let class = m.class_attr();
    let style = m.style_attr();
    let test_id = m.test_id;
    let role = view.semantics.as_ref().and_then(|s| s.role.aria_role());
    let label = aria_label(view);

    match &view.kind {
        ViewKind::Box => html! {
            div class=[class] style=[style] data-testid=[test_id] role=[role] aria-label=[label] {
                @for c in &view.children { (render(c)) }
            }
        },
        ViewKind::List => html! {
            ul class=[class] style=[style] data-testid=[test_id] role=[role] aria-label=[label] {
                @for c in &view.children { (render(c)) }
            }
        },
        ViewKind::ListItem => html! {
            li class=[class] style=[style] data-testid=[test_id] role=[role] aria-label=[label] {
                @for c in &view.children { (render(c)) }
            }
        },
        ViewKind::Image {
            src,
            alt,
            draggable,
        } => {
            let draggable = if *draggable { "true" } else { "false" };
            html! {
                img class=[class] src=(src) alt=(alt) draggable=(draggable) style=[style] data-testid=[test_id];
            }
        }
    }
}

/// `aria-label` value; images carry their label as `alt` instead.
pub fn aria_label(view: &View) -> Option<String> {
    let s = view.semantics.as_ref()?;
    if s.role == Role::Image {
        return None;
    }
    s.label.clone()
}

/// Shorthand for `render(view).into_string()`.
pub fn to_html(view: &View) -> String {
    render(view).into_string()
}
