/// SharedArrayBuffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Frame params: 20 floats]
/// [Lights: max_lights × 8 floats]
/// [Spheres: max_spheres × 12 floats]
/// [Rings: max_rings × 12 floats]
/// [Labels: max_labels × 12 floats]
/// [Events: max_events × 4 floats]
/// [Stars: star_count × 3 floats]
/// [Dust: dust_count × 3 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// TypeScript reads them from the header to compute offsets dynamically.
/// Star and dust sections are filled once at init and never rewritten.

use crate::api::app::AppConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_SPHERES: usize = 2;
pub const HEADER_SPHERE_COUNT: usize = 3;
pub const HEADER_MAX_RINGS: usize = 4;
pub const HEADER_RING_COUNT: usize = 5;
pub const HEADER_MAX_LABELS: usize = 6;
pub const HEADER_LABEL_COUNT: usize = 7;
pub const HEADER_MAX_LIGHTS: usize = 8;
pub const HEADER_LIGHT_COUNT: usize = 9;
pub const HEADER_MAX_EVENTS: usize = 10;
pub const HEADER_EVENT_COUNT: usize = 11;
pub const HEADER_STAR_COUNT: usize = 12;
pub const HEADER_DUST_COUNT: usize = 13;
pub const HEADER_PROTOCOL_VERSION: usize = 14;
// Index 15 reserved.

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the frame params block (wire format — never changes).
pub const FRAME_PARAM_FLOATS: usize = 20;

/// Floats per point light: x, y, z, r, g, b, intensity, radius.
pub const LIGHT_FLOATS: usize = 8;

/// Floats per sphere instance (wire format — never changes).
pub const SPHERE_FLOATS: usize = 12;

/// Floats per ring instance (wire format — never changes).
pub const RING_FLOATS: usize = 12;

/// Floats per label instance (wire format — never changes).
pub const LABEL_FLOATS: usize = 12;

/// Floats per host event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = 4;

/// Floats per sky point: x, y, z.
pub const SKY_POINT_FLOATS: usize = 3;

/// Default light capacity when none is configured.
pub const DEFAULT_MAX_LIGHTS: usize = 8;

/// Runtime-computed buffer layout, derived from the app's capacities.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum sphere instances.
    pub max_spheres: usize,
    /// Maximum ring instances.
    pub max_rings: usize,
    /// Maximum label instances.
    pub max_labels: usize,
    /// Maximum point lights.
    pub max_lights: usize,
    /// Maximum host events per frame.
    pub max_events: usize,
    /// Number of starfield points.
    pub star_count: usize,
    /// Number of dust points.
    pub dust_count: usize,

    /// Size of light data section in floats.
    pub light_data_floats: usize,
    /// Size of sphere data section in floats.
    pub sphere_data_floats: usize,
    /// Size of ring data section in floats.
    pub ring_data_floats: usize,
    /// Size of label data section in floats.
    pub label_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,
    /// Size of star data section in floats.
    pub star_data_floats: usize,
    /// Size of dust data section in floats.
    pub dust_data_floats: usize,

    /// Offset (in floats) where frame params begin.
    pub frame_params_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,
    /// Offset (in floats) where sphere data begins.
    pub sphere_data_offset: usize,
    /// Offset (in floats) where ring data begins.
    pub ring_data_offset: usize,
    /// Offset (in floats) where label data begins.
    pub label_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,
    /// Offset (in floats) where star data begins.
    pub star_data_offset: usize,
    /// Offset (in floats) where dust data begins.
    pub dust_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_spheres: usize,
        max_rings: usize,
        max_labels: usize,
        max_lights: usize,
        max_events: usize,
        star_count: usize,
        dust_count: usize,
    ) -> Self {
        let light_data_floats = max_lights * LIGHT_FLOATS;
        let sphere_data_floats = max_spheres * SPHERE_FLOATS;
        let ring_data_floats = max_rings * RING_FLOATS;
        let label_data_floats = max_labels * LABEL_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;
        let star_data_floats = star_count * SKY_POINT_FLOATS;
        let dust_data_floats = dust_count * SKY_POINT_FLOATS;

        let frame_params_offset = HEADER_FLOATS;
        let light_data_offset = frame_params_offset + FRAME_PARAM_FLOATS;
        let sphere_data_offset = light_data_offset + light_data_floats;
        let ring_data_offset = sphere_data_offset + sphere_data_floats;
        let label_data_offset = ring_data_offset + ring_data_floats;
        let event_data_offset = label_data_offset + label_data_floats;
        let star_data_offset = event_data_offset + event_data_floats;
        let dust_data_offset = star_data_offset + star_data_floats;

        let buffer_total_floats = dust_data_offset + dust_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_spheres,
            max_rings,
            max_labels,
            max_lights,
            max_events,
            star_count,
            dust_count,
            light_data_floats,
            sphere_data_floats,
            ring_data_floats,
            label_data_floats,
            event_data_floats,
            star_data_floats,
            dust_data_floats,
            frame_params_offset,
            light_data_offset,
            sphere_data_offset,
            ring_data_offset,
            label_data_offset,
            event_data_offset,
            star_data_offset,
            dust_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from an AppConfig.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.max_spheres,
            config.max_rings,
            config.max_labels,
            config.max_lights,
            config.max_events,
            config.star_count,
            config.dust_count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_MAX_SPHERES: usize = 256;
    const DEFAULT_MAX_RINGS: usize = 64;
    const DEFAULT_MAX_LABELS: usize = 32;
    const DEFAULT_MAX_EVENTS: usize = 64;
    const DEFAULT_STAR_COUNT: usize = 8000;
    const DEFAULT_DUST_COUNT: usize = 4000;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&AppConfig::default());

        assert_eq!(layout.max_spheres, DEFAULT_MAX_SPHERES);
        assert_eq!(layout.max_rings, DEFAULT_MAX_RINGS);
        assert_eq!(layout.max_labels, DEFAULT_MAX_LABELS);
        assert_eq!(layout.max_lights, DEFAULT_MAX_LIGHTS);
        assert_eq!(layout.max_events, DEFAULT_MAX_EVENTS);
        assert_eq!(layout.star_count, DEFAULT_STAR_COUNT);
        assert_eq!(layout.dust_count, DEFAULT_DUST_COUNT);

        assert_eq!(layout.frame_params_offset, 16);
        assert_eq!(layout.light_data_offset, 36);
        assert_eq!(layout.sphere_data_offset, 36 + 8 * LIGHT_FLOATS);
        assert_eq!(layout.buffer_total_floats, 40580);
        assert_eq!(layout.buffer_total_bytes, 40580 * 4);
    }

    #[test]
    fn custom_capacities_compute_correctly() {
        let layout = ProtocolLayout::new(128, 32, 16, 4, 32, 1000, 500);

        assert_eq!(layout.sphere_data_floats, 128 * 12);
        assert_eq!(layout.ring_data_floats, 32 * 12);
        assert_eq!(layout.label_data_floats, 16 * 12);
        assert_eq!(layout.light_data_floats, 4 * 8);
        assert_eq!(layout.event_data_floats, 32 * 4);
        assert_eq!(layout.star_data_floats, 3000);
        assert_eq!(layout.dust_data_floats, 1500);

        let expected_total = HEADER_FLOATS
            + FRAME_PARAM_FLOATS
            + 4 * 8
            + 128 * 12
            + 32 * 12
            + 16 * 12
            + 32 * 4
            + 3000
            + 1500;
        assert_eq!(layout.buffer_total_floats, expected_total);
        assert_eq!(layout.buffer_total_bytes, expected_total * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 20, 10, 6, 16, 200, 100);

        assert_eq!(layout.frame_params_offset, HEADER_FLOATS);
        assert_eq!(layout.light_data_offset, layout.frame_params_offset + FRAME_PARAM_FLOATS);
        assert_eq!(layout.sphere_data_offset, layout.light_data_offset + layout.light_data_floats);
        assert_eq!(layout.ring_data_offset, layout.sphere_data_offset + layout.sphere_data_floats);
        assert_eq!(layout.label_data_offset, layout.ring_data_offset + layout.ring_data_floats);
        assert_eq!(layout.event_data_offset, layout.label_data_offset + layout.label_data_floats);
        assert_eq!(layout.star_data_offset, layout.event_data_offset + layout.event_data_floats);
        assert_eq!(layout.dust_data_offset, layout.star_data_offset + layout.star_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.dust_data_offset + layout.dust_data_floats);
    }

    #[test]
    fn wire_sizes_match_instance_structs() {
        use crate::renderer::frame::FrameParams;
        use crate::renderer::label::LabelInstance;
        use crate::renderer::ring::RingInstance;
        use crate::renderer::sphere::SphereInstance;

        assert_eq!(SPHERE_FLOATS, SphereInstance::FLOATS);
        assert_eq!(RING_FLOATS, RingInstance::FLOATS);
        assert_eq!(LABEL_FLOATS, LabelInstance::FLOATS);
        assert_eq!(FRAME_PARAM_FLOATS, FrameParams::FLOATS);
    }
}
