use crate::object::{ObjectArena, ObjectKind, Section, Visual};
use glam::Vec3;

/// Per-object record uploaded to the instance vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub glow: f32,
    pub shape: u32,
    pub _pad: [u32; 2],
}

/// Flatten the drawable objects of one section into instance records.
pub fn pack_instances(section: Section, objects: &ObjectArena) -> Vec<InstanceData> {
    let mut out = Vec::new();
    for (id, visual) in objects.in_section(section) {
        if !visual.is_drawable() {
            continue;
        }
        let Some(world) = objects.world_matrix(id) else {
            continue;
        };
        let (scale, _, pos) = world.to_scale_rotation_translation();
        let rgb = instance_color(visual);
        out.push(InstanceData {
            pos: pos.to_array(),
            scale: scale.max_element() * visual.size,
            color: [rgb.x, rgb.y, rgb.z, visual.opacity.clamp(0.0, 1.0)],
            glow: glow(visual),
            shape: visual.shape.code(),
            _pad: [0; 2],
        });
    }
    out
}

/// Shader-backed materials blend their two colors over time.
fn instance_color(visual: &Visual) -> Vec3 {
    match visual.uniforms {
        Some(u) => match (u.color1, u.color2) {
            (Some(c1), Some(c2)) => {
                let t = u.time.unwrap_or(0.0);
                let phase = visual.transform.position.x + visual.transform.position.y;
                c1.lerp(c2, 0.5 + 0.5 * (t + phase).sin())
            }
            (Some(c1), None) => c1,
            _ => visual.color,
        },
        None => visual.color,
    }
}

fn glow(visual: &Visual) -> f32 {
    let base = visual.intensity.unwrap_or(0.0).max(0.0);
    match visual.kind {
        ObjectKind::Light => base,
        // points read as soft sparks even without an intensity slot
        ObjectKind::Points => base.max(0.5),
        _ => base * 0.5,
    }
}
