use crate::constants::*;
use crate::input;
use folio_core::{ProjectKind, Section};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Section canvases present on the page, in dispatch order.
pub fn section_canvases(document: &web::Document) -> Vec<(Section, web::HtmlCanvasElement)> {
    let mut found = Vec::new();
    let by_id = [
        (Section::Hero, HERO_CANVAS_ID),
        (Section::About, ABOUT_CANVAS_ID),
        (Section::Skills, SKILLS_CANVAS_ID),
        (Section::Contact, CONTACT_CANVAS_ID),
    ];
    for (section, id) in by_id {
        let canvas = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
        if let Some(canvas) = canvas {
            found.push((section, canvas));
        }
    }
    if let Ok(list) = document.query_selector_all(PROJECT_CANVAS_SELECTOR) {
        let mut index = 0;
        for i in 0..list.length() {
            let canvas = list
                .item(i)
                .and_then(|node| node.dyn_into::<web::HtmlCanvasElement>().ok());
            if let Some(canvas) = canvas {
                found.push((Section::Project(index), canvas));
                index += 1;
            }
        }
    }
    found
}

/// Visualization named by the project card enclosing `canvas`.
pub fn project_kind(canvas: &web::HtmlCanvasElement) -> ProjectKind {
    let attr = canvas
        .closest(PROJECT_CARD_SELECTOR)
        .ok()
        .flatten()
        .and_then(|card| card.get_attribute(PROJECT_KIND_ATTR));
    ProjectKind::from_attr(attr.as_deref())
}

/// Match the canvas backing store to its CSS size and return the new size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let dpr = web::window().map_or(1.0, |w| w.device_pixel_ratio());
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = input::backing_size(rect.width(), rect.height(), dpr);
    if canvas.width() != w || canvas.height() != h {
        canvas.set_width(w);
        canvas.set_height(h);
    }
    (w, h)
}

pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

/// Fraction of the page scrolled, from the window's current scroll offset.
pub fn page_scroll_progress(window: &web::Window) -> f32 {
    let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map_or(0.0, |el| el.scroll_height() as f32);
    let (_, viewport_h) = viewport_size(window);
    folio_core::scroll_progress(scroll_y, scroll_height, viewport_h)
}

/// Attach a listener for the page's lifetime.
pub fn listen(
    target: &web::EventTarget,
    kind: &str,
    passive: bool,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(passive);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("failed to listen for {}: {:?}", kind, e);
    }
    closure.forget();
}
