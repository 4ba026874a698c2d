use crate::{dom, input, Shared};
use folio_core::{pointer_ndc, Section};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire page input into the frame context. Handlers only write the shared
/// signals (or queue a selection); the next frame picks the values up.
pub fn install(
    window: &web::Window,
    ctx: &Shared,
    canvases: &[(Section, web::HtmlCanvasElement)],
) {
    let signals = ctx.borrow().signals.clone();

    {
        let signals = signals.clone();
        let win = window.clone();
        dom::listen(window.as_ref(), "scroll", true, move |_| {
            signals.set_scroll_progress(dom::page_scroll_progress(&win));
        });
    }

    {
        let win = window.clone();
        dom::listen(window.as_ref(), "pointermove", true, move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let (w, h) = dom::viewport_size(&win);
            signals.set_pointer(pointer_ndc(
                ev.client_x() as f32,
                ev.client_y() as f32,
                w,
                h,
            ));
        });
    }

    if let Some((_, canvas)) = canvases.iter().find(|(s, _)| *s == Section::Skills) {
        let ctx = ctx.clone();
        let target = canvas.clone();
        dom::listen(canvas.as_ref(), "click", false, move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let rect = target.get_bounding_client_rect();
            let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            let Some(ndc) = input::canvas_ndc(
                client,
                rect.left() as f32,
                rect.top() as f32,
                rect.width() as f32,
                rect.height() as f32,
            ) else {
                return;
            };
            if let Ok(mut ctx) = ctx.try_borrow_mut() {
                if let Some(id) = ctx.select_at(Section::Skills, ndc) {
                    log::debug!("[click] selected skill node {:?}", id);
                }
            }
        });
    }

    {
        let ctx = ctx.clone();
        let canvases = canvases.to_vec();
        dom::listen(window.as_ref(), "resize", true, move |_| {
            let Ok(mut ctx) = ctx.try_borrow_mut() else {
                return;
            };
            for (section, canvas) in &canvases {
                let (w, h) = dom::sync_canvas_backing_size(canvas);
                if let Some(entry) = ctx.scenes.entry_mut(*section) {
                    if let Some(camera) = entry.camera.as_mut() {
                        camera.set_aspect(w, h);
                    }
                    if let Some(renderer) = entry.renderer.as_mut() {
                        renderer.resize(w, h);
                    }
                }
            }
        });
    }
}
