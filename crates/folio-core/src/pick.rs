use crate::camera::Camera;
use crate::object::{ObjectArena, ObjectId, Section};
use glam::{Vec2, Vec3, Vec4};

/// Distance along a normalized ray to the near surface of a sphere.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// World-space ray from the camera eye through an NDC point.
pub fn camera_ray(camera: &Camera, ndc: Vec2) -> (Vec3, Vec3) {
    let inv = camera.view_proj().inverse();
    let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p1 - ro).normalize_or_zero();
    (ro, rd)
}

/// Nearest pickable object of `section` under the NDC point.
pub fn pick_nearest(
    objects: &ObjectArena,
    section: Section,
    camera: &Camera,
    ndc: Vec2,
) -> Option<ObjectId> {
    let (ro, rd) = camera_ray(camera, ndc);
    if rd == Vec3::ZERO {
        return None;
    }
    let mut best = None::<(ObjectId, f32)>;
    for (id, visual) in objects.in_section(section) {
        let Some(radius) = visual.pick_radius else {
            continue;
        };
        let Some(center) = objects.world_position(id) else {
            continue;
        };
        let scaled = radius * visual.transform.scale.max_element();
        if let Some(t) = ray_sphere(ro, rd, center, scaled) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((id, t)),
            }
        }
    }
    best.map(|(id, _)| id)
}
