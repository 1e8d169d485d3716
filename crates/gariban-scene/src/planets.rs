/// Scene catalog: the five section planets, the sun, the asteroid belt
/// and the distant-galaxy background.
///
/// Orbit radii and speeds are tuned for readability at the resting
/// camera, not for scale realism. Colors follow the site's section
/// palette, packed as 0xRRGGBB.

use std::f32::consts::TAU;

use gariban_site::Route;
use helio_engine::{Color3, Rng, SurfaceKind};

/// Planet index constants.
pub const HAKKIMDA: usize = 0;
pub const YETENEKLER: usize = 1;
pub const DENEYIM: usize = 2;
pub const PROJELERIM: usize = 3;
pub const ILETISIM: usize = 4;
pub const PLANET_COUNT: usize = 5;

/// One orbiting section planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetSpec {
    /// Orbit radius around the sun, world units.
    pub orbit_radius: f32,
    /// Orbit angle advance in radians per tick, before scroll damping.
    pub orbit_speed: f32,
    /// Base size before zoom and highlight scaling.
    pub size: f32,
    /// Body, glow and orbit-guide color.
    pub primary: Color3,
    /// Accent color (planet ring).
    pub secondary: Color3,
    /// Billboard label text.
    pub label: &'static str,
    /// Procedural surface the host shades this planet with.
    pub surface: SurfaceKind,
    /// Page a click on this planet navigates to.
    pub route: Route,
    /// Self-spin in radians per tick.
    pub spin_yaw: f32,
    pub spin_pitch: f32,
}

/// The five section planets, indexed by the constants above.
pub fn specs() -> [PlanetSpec; PLANET_COUNT] {
    [
        PlanetSpec {
            orbit_radius: 12.0,
            orbit_speed: 0.004,
            size: 1.0,
            primary: Color3::from_hex(0x4f46e5),
            secondary: Color3::from_hex(0x3b82f6),
            label: "HAKKIMDA",
            surface: SurfaceKind::Earth,
            route: Route::About,
            spin_yaw: 0.015,
            spin_pitch: 0.005,
        },
        PlanetSpec {
            orbit_radius: 16.5,
            orbit_speed: 0.003,
            size: 1.1,
            primary: Color3::from_hex(0x06b6d4),
            secondary: Color3::from_hex(0x0891b2),
            label: "YETENEKLER",
            surface: SurfaceKind::Mars,
            route: Route::Skills,
            spin_yaw: 0.015,
            spin_pitch: 0.005,
        },
        PlanetSpec {
            orbit_radius: 21.0,
            orbit_speed: 0.002,
            size: 0.9,
            primary: Color3::from_hex(0x8b5cf6),
            secondary: Color3::from_hex(0xa855f7),
            label: "DENEYİM",
            surface: SurfaceKind::Jupiter,
            route: Route::Experience,
            spin_yaw: 0.015,
            spin_pitch: 0.005,
        },
        PlanetSpec {
            orbit_radius: 31.0,
            orbit_speed: 0.0018,
            size: 0.9,
            primary: Color3::from_hex(0x10b981),
            secondary: Color3::from_hex(0x059669),
            label: "PROJELERİM",
            surface: SurfaceKind::Neptune,
            route: Route::Projects,
            spin_yaw: 0.015,
            spin_pitch: 0.005,
        },
        PlanetSpec {
            orbit_radius: 25.5,
            orbit_speed: 0.0015,
            size: 0.8,
            primary: Color3::from_hex(0xf59e0b),
            secondary: Color3::from_hex(0xfbbf24),
            label: "İLETİŞİM",
            surface: SurfaceKind::Venus,
            route: Route::Contact,
            spin_yaw: 0.015,
            spin_pitch: 0.005,
        },
    ]
}

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_LABEL: &str = "ANA SAYFA";
/// Core sphere radius before zoom and hover scaling.
pub const SUN_CORE_SCALE: f32 = 2.8;
pub const SUN_CORONA_SCALE: f32 = 4.0;
/// Core color, also the origin point light.
pub const SUN_COLOR: u32 = 0xFDB813;
/// Corona and label gold.
pub const SUN_GOLD: u32 = 0xFFD700;
pub const SUN_LABEL_SIZE: f32 = 0.8;
pub const SUN_LABEL_OFFSET: f32 = 5.0;
/// Self-spin in radians per tick.
pub const SUN_SPIN_YAW: f32 = 0.004;
pub const SUN_SPIN_PITCH: f32 = 0.001;
/// Corona counter-rotation in radians per tick.
pub const CORONA_SPIN: f32 = 0.002;

// ── Asteroid belt ────────────────────────────────────────────────────

pub const ROCK_COUNT: usize = 120;
const BELT_RADIUS: f32 = 28.0;
const BELT_RADIUS_SPREAD: f32 = 3.0;
const BELT_HEIGHT_SPREAD: f32 = 0.6;
const ROCK_SIZE_MIN: f32 = 0.02;
const ROCK_SIZE_SPREAD: f32 = 0.04;
pub const ROCK_COLOR: u32 = 0x8B7355;
pub const ROCK_EMISSIVE: f32 = 0.08;
/// Shared belt angle advance in radians per tick, before scroll damping.
pub const BELT_SPEED: f32 = 0.0006;
pub const BELT_DAMPING: f32 = 0.3;

/// One belt rock: a fixed angular slot plus random radial and vertical
/// jitter, sized once at generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RockSpec {
    pub radius: f32,
    /// Fixed slot on the ring; the shared belt angle adds to it.
    pub phase: f32,
    pub height: f32,
    pub size: f32,
}

pub fn generate_rocks(rng: &mut Rng) -> Vec<RockSpec> {
    let mut rocks = Vec::with_capacity(ROCK_COUNT);
    for i in 0..ROCK_COUNT {
        rocks.push(RockSpec {
            radius: BELT_RADIUS + rng.next_f32() * BELT_RADIUS_SPREAD,
            phase: (i as f32 / ROCK_COUNT as f32) * TAU,
            height: (rng.next_f32() - 0.5) * BELT_HEIGHT_SPREAD,
            size: ROCK_SIZE_MIN + rng.next_f32() * ROCK_SIZE_SPREAD,
        });
    }
    rocks
}

// ── Distant galaxies ─────────────────────────────────────────────────

pub const GALAXY_COUNT: usize = 12;
const GALAXY_DISTANCE: f32 = 80.0;
const GALAXY_DISTANCE_SPREAD: f32 = 40.0;
const GALAXY_HEIGHT_SPREAD: f32 = 30.0;
const GALAXY_SIZE_MIN: f32 = 2.0;
const GALAXY_SIZE_SPREAD: f32 = 4.0;
const GALAXY_SPIN_SPREAD: f32 = 0.001;
/// Whole-group yaw in radians per tick.
pub const GALAXY_GROUP_SPIN: f32 = 0.0001;

/// Core color choices, packed 0xRRGGBB.
pub const GALAXY_PALETTE: [u32; 6] = [
    0x8b5cf6, // purple
    0x06b6d4, // cyan
    0xf59e0b, // amber
    0xef4444, // red
    0x10b981, // emerald
    0xf97316, // orange
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalaxyKind {
    Spiral,
    Elliptical,
    Irregular,
}

/// One distant galaxy on the background ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxySpec {
    /// Fixed slot angle on the ring; the group yaw adds to it.
    pub angle: f32,
    pub distance: f32,
    pub height: f32,
    pub size: f32,
    /// Spiral-arm spin in radians per tick.
    pub spin: f32,
    pub kind: GalaxyKind,
    pub color: Color3,
    /// Static core tumble, radians.
    pub initial_rotation: f32,
}

pub fn generate_galaxies(rng: &mut Rng) -> Vec<GalaxySpec> {
    let mut galaxies = Vec::with_capacity(GALAXY_COUNT);
    for i in 0..GALAXY_COUNT {
        galaxies.push(GalaxySpec {
            angle: (i as f32 / GALAXY_COUNT as f32) * TAU,
            distance: GALAXY_DISTANCE + rng.next_f32() * GALAXY_DISTANCE_SPREAD,
            height: (rng.next_f32() - 0.5) * GALAXY_HEIGHT_SPREAD,
            size: GALAXY_SIZE_MIN + rng.next_f32() * GALAXY_SIZE_SPREAD,
            spin: (rng.next_f32() - 0.5) * GALAXY_SPIN_SPREAD,
            kind: match rng.next_int(3) {
                0 => GalaxyKind::Spiral,
                1 => GalaxyKind::Elliptical,
                _ => GalaxyKind::Irregular,
            },
            color: Color3::from_hex(GALAXY_PALETTE[rng.next_int(GALAXY_PALETTE.len() as u32) as usize]),
            initial_rotation: rng.next_f32() * TAU,
        });
    }
    galaxies
}

/// Display label for galaxy `index` (zero-based).
pub fn galaxy_label(index: usize) -> String {
    format!("Galaksi {}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planet_routes_cover_every_section_page() {
        let specs = specs();
        assert_eq!(specs.len(), PLANET_COUNT);
        for (i, spec) in specs.iter().enumerate() {
            assert_eq!(
                spec.route.index(),
                i + 1,
                "planet {} routes out of order",
                spec.label
            );
        }
    }

    #[test]
    fn planet_surfaces_are_distinct() {
        let specs = specs();
        for i in 0..PLANET_COUNT {
            for j in (i + 1)..PLANET_COUNT {
                assert_ne!(specs[i].surface, specs[j].surface);
            }
        }
    }

    #[test]
    fn belt_rocks_stay_inside_the_ring_band() {
        let mut rng = Rng::new(7);
        let rocks = generate_rocks(&mut rng);
        assert_eq!(rocks.len(), ROCK_COUNT);
        for rock in &rocks {
            assert!(rock.radius >= 28.0 && rock.radius < 31.0, "radius {}", rock.radius);
            assert!(rock.height.abs() <= 0.3, "height {}", rock.height);
            assert!(rock.size >= 0.02 && rock.size < 0.06, "size {}", rock.size);
            assert!(rock.phase >= 0.0 && rock.phase < TAU);
        }
    }

    #[test]
    fn galaxies_sit_on_the_background_ring() {
        let mut rng = Rng::new(7);
        let galaxies = generate_galaxies(&mut rng);
        assert_eq!(galaxies.len(), GALAXY_COUNT);
        for galaxy in &galaxies {
            assert!(galaxy.distance >= 80.0 && galaxy.distance < 120.0);
            assert!(galaxy.height.abs() <= 15.0);
            assert!(galaxy.size >= 2.0 && galaxy.size < 6.0);
            assert!(galaxy.spin.abs() <= 0.0005);
            assert!(
                GALAXY_PALETTE.iter().any(|&hex| Color3::from_hex(hex) == galaxy.color),
                "galaxy color not from the palette"
            );
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let mut a = Rng::new(99);
        let mut b = Rng::new(99);
        assert_eq!(generate_rocks(&mut a), generate_rocks(&mut b));
        assert_eq!(generate_galaxies(&mut a), generate_galaxies(&mut b));
    }

    #[test]
    fn galaxy_labels_are_numbered_from_one() {
        assert_eq!(galaxy_label(0), "Galaksi 1");
        assert_eq!(galaxy_label(11), "Galaksi 12");
    }
}
