mod scroll;

use folio_core::{
    pointer_ndc, section_camera, section_drift, section_scene, FrameContext, InputSignals,
    SceneEntry, Section, Showcase, ShowcaseParams,
};
use folio_render::{GpuContext, SurfaceRenderer};
use scroll::{VirtualScroll, WHEEL_LINE_PX};
use std::rc::Rc;
use std::sync::Arc;
use winit::keyboard::{Key, NamedKey};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("chainfolio (native preview)")
            .build(&event_loop)?,
    );
    let size = window.inner_size();

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(window.clone())?;
    let gpu = Rc::new(pollster::block_on(GpuContext::new(instance, Some(&surface)))?);
    let renderer = SurfaceRenderer::new(gpu, surface, size.width, size.height)?;

    let section = Section::Hero;
    let signals = InputSignals::new();
    let mut ctx = FrameContext::new(signals.clone());
    let built = Showcase::new(&mut ctx.objects, &mut ctx.paths, ShowcaseParams::default())
        .build(section)?;
    let aspect = size.width as f32 / size.height.max(1) as f32;
    let mut entry = SceneEntry::new(
        section_scene(section),
        section_camera(section, aspect),
        renderer,
    );
    if let Some(drift) = section_drift(section) {
        entry = entry.with_drift(drift);
    }
    ctx.mount(section, entry);
    log::info!("hero scene ready: {} objects (wheel scrolls, Esc stops)", built);

    let control = ctx.control();
    let mut scroll = VirtualScroll::default();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => control.stop(),
            WindowEvent::Resized(size) => {
                if let Some(entry) = ctx.scenes.entry_mut(section) {
                    if let Some(camera) = entry.camera.as_mut() {
                        camera.set_aspect(size.width, size.height);
                    }
                    if let Some(renderer) = entry.renderer.as_mut() {
                        renderer.resize(size.width, size.height);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let size = window.inner_size();
                signals.set_pointer(pointer_ndc(
                    position.x as f32,
                    position.y as f32,
                    size.width as f32,
                    size.height as f32,
                ));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                // wheel down scrolls the page down
                let px = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_PX,
                    MouseScrollDelta::PixelDelta(p) => -p.y as f32,
                };
                signals.set_scroll_progress(scroll.scroll_by(px));
            }
            _ => {}
        },
        Event::AboutToWait if !elwt.exiting() => {
            if ctx.frame() {
                window.request_redraw();
            } else {
                log::info!("animation stopped after {} frames", ctx.clock.frames());
                ctx.unmount(section);
                elwt.exit();
            }
        }
        _ => {}
    })?;
    Ok(())
}
