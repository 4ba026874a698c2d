use crate::camera::Camera;
use crate::object::ObjectArena;
use crate::scene::{Scene, SceneRegistry};

/// Draw target for one scene, implemented by the GPU backend.
pub trait RenderSurface {
    /// Draw the scene's objects as seen from `camera`. Failures are handled
    /// inside the surface; dispatch never observes them.
    fn render(&mut self, scene: &Scene, camera: &Camera, objects: &ObjectArena);

    /// Free GPU resources held by this surface. Called once when the
    /// section is unmounted.
    fn release(&mut self) {}
}

/// Render every complete entry once, in registry order. Entries missing a
/// scene, camera or renderer are skipped. Returns the number rendered.
pub fn render_all<R: RenderSurface>(
    registry: &mut SceneRegistry<R>,
    objects: &ObjectArena,
) -> usize {
    let mut rendered = 0;
    for (_, entry) in registry.iter_mut() {
        if let (Some(scene), Some(camera), Some(renderer)) =
            (entry.scene.as_ref(), entry.camera.as_ref(), entry.renderer.as_mut())
        {
            renderer.render(scene, camera, objects);
            rendered += 1;
        }
    }
    rendered
}
