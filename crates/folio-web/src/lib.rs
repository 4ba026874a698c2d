#![cfg(target_arch = "wasm32")]
mod constants;
mod dom;
mod events;
mod frame;
mod input;

use folio_core::{
    section_camera, section_drift, section_scene, FrameContext, InputSignals, LoopControl,
    SceneEntry, Section, Showcase, ShowcaseParams,
};
use folio_render::{GpuContext, SurfaceRenderer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub(crate) type Shared = Rc<RefCell<FrameContext<SurfaceRenderer>>>;

thread_local! {
    static LOOP: RefCell<Option<LoopControl>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the animation loop; no further frames are ticked or rendered.
#[wasm_bindgen]
pub fn stop_animation() {
    LOOP.with(|control| {
        if let Some(control) = control.borrow().as_ref() {
            control.stop();
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvases = dom::section_canvases(&document);
    if canvases.is_empty() {
        log::warn!("no section canvases on this page");
        return Ok(());
    }

    let instance = wgpu::Instance::default();
    let mut surfaces = Vec::with_capacity(canvases.len());
    for (section, canvas) in &canvases {
        let (w, h) = dom::sync_canvas_backing_size(canvas);
        match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surfaces.push((*section, surface, w, h)),
            Err(e) => log::error!("{:?}: surface error: {}", section, e),
        }
    }
    let gpu = Rc::new(GpuContext::new(instance, surfaces.first().map(|(_, s, _, _)| s)).await?);

    let signals = InputSignals::new();
    signals.set_scroll_progress(dom::page_scroll_progress(&window));
    let mut ctx = FrameContext::new(signals);

    let sections: Vec<Section> = surfaces.iter().map(|(s, _, _, _)| *s).collect();
    let mut showcase = Showcase::new(&mut ctx.objects, &mut ctx.paths, ShowcaseParams::default());
    for (section, canvas) in canvases.iter().filter(|(s, _)| sections.contains(s)) {
        let built = match section {
            Section::Project(i) => showcase.build_project(*i, dom::project_kind(canvas)),
            _ => showcase.build(*section),
        };
        if let Err(e) = built {
            log::error!("{:?}: scene setup failed: {}", section, e);
        }
    }

    for (section, surface, w, h) in surfaces {
        let renderer = match SurfaceRenderer::new(gpu.clone(), surface, w, h) {
            Ok(r) => r,
            Err(e) => {
                log::error!("{:?}: renderer error: {}", section, e);
                continue;
            }
        };
        let aspect = w as f32 / h.max(1) as f32;
        let mut entry = SceneEntry::new(
            section_scene(section),
            section_camera(section, aspect),
            renderer,
        );
        if let Some(drift) = section_drift(section) {
            entry = entry.with_drift(drift);
        }
        ctx.mount(section, entry);
    }
    log::info!(
        "mounted {} sections, {} objects",
        sections.len(),
        ctx.objects.len()
    );

    LOOP.with(|control| *control.borrow_mut() = Some(ctx.control()));
    let ctx: Shared = Rc::new(RefCell::new(ctx));
    events::install(&window, &ctx, &canvases);
    frame::start_loop(ctx);
    Ok(())
}
