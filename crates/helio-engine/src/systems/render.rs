use crate::core::scene::Scene;
use crate::renderer::label::{LabelBuffer, LabelInstance};
use crate::renderer::ring::{RingBuffer, RingInstance};
use crate::renderer::sphere::{SphereBuffer, SphereInstance};

/// Build the draw buffers from the scene.
/// Inactive bodies and fully transparent visuals are skipped; anything
/// past a buffer's capacity is dropped.
pub fn build_draw_buffers(
    scene: &Scene,
    spheres: &mut SphereBuffer,
    rings: &mut RingBuffer,
    labels: &mut LabelBuffer,
) {
    spheres.clear();
    rings.clear();
    labels.clear();

    for body in scene.iter() {
        if !body.active {
            continue;
        }

        if let Some(sphere) = &body.sphere {
            if sphere.alpha > 0.0 {
                spheres.push(SphereInstance {
                    x: body.pos.x,
                    y: body.pos.y,
                    z: body.pos.z,
                    radius: sphere.radius,
                    yaw: body.yaw,
                    pitch: body.pitch,
                    r: sphere.color.r,
                    g: sphere.color.g,
                    b: sphere.color.b,
                    emissive: sphere.emissive,
                    alpha: sphere.alpha,
                    surface: sphere.surface.id(),
                });
            }
        }

        if let Some(ring) = &body.ring {
            if ring.alpha > 0.0 {
                rings.push(RingInstance {
                    x: body.pos.x,
                    y: body.pos.y,
                    z: body.pos.z,
                    inner: ring.inner,
                    outer: ring.outer,
                    r: ring.color.r,
                    g: ring.color.g,
                    b: ring.color.b,
                    alpha: ring.alpha,
                    tilt: ring.tilt,
                    yaw: body.yaw,
                    _pad0: 0.0,
                });
            }
        }

        if let Some(label) = &body.label {
            if label.alpha > 0.0 {
                labels.push(LabelInstance {
                    x: body.pos.x,
                    y: body.pos.y + label.offset_y,
                    z: body.pos.z,
                    size: label.size,
                    r: label.color.r,
                    g: label.color.g,
                    b: label.color.b,
                    alpha: label.alpha,
                    label_id: label.label.0 as f32,
                    _pad0: 0.0,
                    _pad1: 0.0,
                    _pad2: 0.0,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{BodyId, Color3};
    use crate::assets::labels::LabelId;
    use crate::components::body::Body;
    use crate::components::label::LabelVisual;
    use crate::components::ring::RingVisual;
    use crate::components::sphere::{SphereVisual, SurfaceKind};
    use glam::Vec3;

    fn buffers() -> (SphereBuffer, RingBuffer, LabelBuffer) {
        (SphereBuffer::new(16), RingBuffer::new(16), LabelBuffer::new(16))
    }

    #[test]
    fn maps_sphere_fields() {
        let mut scene = Scene::new();
        scene.spawn(
            Body::new(BodyId(1))
                .with_pos(Vec3::new(1.0, 2.0, 3.0))
                .with_yaw(0.5)
                .with_sphere(
                    SphereVisual::new(2.8, Color3::from_hex(0xFDB813))
                        .with_emissive(1.2)
                        .with_surface(SurfaceKind::Sun),
                ),
        );
        let (mut s, mut r, mut l) = buffers();
        build_draw_buffers(&scene, &mut s, &mut r, &mut l);

        assert_eq!(s.instance_count(), 1);
        let inst = s.instances()[0];
        assert_eq!(inst.z, 3.0);
        assert_eq!(inst.radius, 2.8);
        assert_eq!(inst.yaw, 0.5);
        assert_eq!(inst.surface, SurfaceKind::Sun.id());
    }

    #[test]
    fn skips_inactive_bodies() {
        let mut scene = Scene::new();
        let mut body = Body::new(BodyId(1)).with_sphere(SphereVisual::default());
        body.active = false;
        scene.spawn(body);

        let (mut s, mut r, mut l) = buffers();
        build_draw_buffers(&scene, &mut s, &mut r, &mut l);
        assert_eq!(s.instance_count(), 0);
    }

    #[test]
    fn skips_transparent_visuals() {
        let mut scene = Scene::new();
        scene.spawn(
            Body::new(BodyId(1))
                .with_sphere(SphereVisual::default().with_alpha(0.0))
                .with_ring(RingVisual::default().with_alpha(0.0)),
        );

        let (mut s, mut r, mut l) = buffers();
        build_draw_buffers(&scene, &mut s, &mut r, &mut l);
        assert_eq!(s.instance_count(), 0);
        assert_eq!(r.instance_count(), 0);
    }

    #[test]
    fn label_offset_is_applied() {
        let mut scene = Scene::new();
        scene.spawn(
            Body::new(BodyId(1))
                .with_pos(Vec3::new(0.0, 1.0, 0.0))
                .with_label(LabelVisual::new(LabelId(2), 0.5).with_offset_y(3.5)),
        );

        let (mut s, mut r, mut l) = buffers();
        build_draw_buffers(&scene, &mut s, &mut r, &mut l);
        assert_eq!(l.instance_count(), 1);
        let inst = l.instances()[0];
        assert_eq!(inst.y, 4.5);
        assert_eq!(inst.label_id, 2.0);
    }

    #[test]
    fn overflow_is_dropped_at_capacity() {
        let mut scene = Scene::new();
        for i in 0..10 {
            scene.spawn(Body::new(BodyId(i)).with_sphere(SphereVisual::default()));
        }

        let mut s = SphereBuffer::new(4);
        let mut r = RingBuffer::new(4);
        let mut l = LabelBuffer::new(4);
        build_draw_buffers(&scene, &mut s, &mut r, &mut l);
        assert_eq!(s.instance_count(), 4);
    }

    #[test]
    fn clears_previous_frame() {
        let mut scene = Scene::new();
        scene.spawn(Body::new(BodyId(1)).with_sphere(SphereVisual::default()));

        let (mut s, mut r, mut l) = buffers();
        build_draw_buffers(&scene, &mut s, &mut r, &mut l);
        build_draw_buffers(&scene, &mut s, &mut r, &mut l);
        assert_eq!(s.instance_count(), 1);
    }
}
