/// Portfolio scene: a scroll-driven solar system where every section
/// page is an orbiting planet and the sun navigates home.
///
/// All per-frame state derives from (scroll progress, tick count); the
/// eased camera rig is the only value carried across frames.

use std::f32::consts::FRAC_PI_3;

use gariban_site::Route;
use glam::Vec3;
use helio_engine::*;

use crate::planets::{self, GalaxyKind, GalaxySpec, PlanetSpec, RockSpec};

// ── Timing ───────────────────────────────────────────────────────────

const FIXED_DT: f32 = 1.0 / 60.0;
/// Assumed until the page reports its real viewport (kind 99).
const DEFAULT_ASPECT: f32 = 16.0 / 9.0;

/// Seeds for the generated catalog and sky, fixed so reloads produce
/// the identical belt, galaxies, starfield and dust cloud.
const CATALOG_SEED: u64 = 12345;
const SKY_SEED: u64 = 67890;

// ── Custom event kinds from the page ─────────────────────────────────

/// a: hovered navigation target (planet index, planet count = sun, -1 = none).
const CUSTOM_MENU_HOVER: u32 = 1;
/// a/b: viewport width/height in pixels (sent by worker as kind=99).
const CUSTOM_RESIZE: u32 = 99;

// ── Host event kinds to the page ─────────────────────────────────────

/// a: camera distance readout, b: scroll progress.
const EVENT_CAMERA: f32 = 1.0;
/// a: nearest planet index (-1 none), b: distance to one decimal, c: readout visible.
const EVENT_NEAREST: f32 = 2.0;
/// a: route index to navigate to.
const EVENT_NAVIGATE: f32 = 3.0;

// ── Zoom growth per scroll progress ──────────────────────────────────

const PLANET_ZOOM_GAIN: f32 = 0.5;
const SUN_ZOOM_GAIN: f32 = 0.8;
const BELT_ZOOM_GAIN: f32 = 0.3;

// ── Planet visual stack ──────────────────────────────────────────────

/// Sphere radii as multiples of the planet's base size.
const CORE_SCALE: f32 = 1.3;
const ATMOSPHERE_SCALE: f32 = 1.5;
/// Atmosphere self-spin, radians per tick.
const ATMOSPHERE_SPIN: f32 = 0.008;
/// Glow shell radius in world units, the same for every planet.
const GLOW_RADIUS: f32 = 2.5;
/// Highlight ring radii as multiples of the planet's base size.
const HIGHLIGHT_INNER: f32 = 2.2;
const HIGHLIGHT_OUTER: f32 = 2.8;
/// Pick sphere radius as a multiple of the planet's base size. Hover
/// boost is excluded so the hit area stays put while hovered.
const PICK_SCALE: f32 = 2.2;
/// Planet ring radii in world units before zoom/boost scaling.
const PLANET_RING_INNER: f32 = 1.8;
const PLANET_RING_OUTER: f32 = 2.4;
/// Orbit guide half-width in world units.
const ORBIT_GUIDE_HALF_WIDTH: f32 = 0.05;
/// Label layout.
const LABEL_SIZE: f32 = 0.5;
const LABEL_OFFSET: f32 = 3.5;

/// Scroll progress below which the distance readout stays hidden.
const READOUT_MIN_PROGRESS: f32 = 0.2;

// ── Sky decoration ───────────────────────────────────────────────────

const STAR_COUNT: usize = 8000;
const STAR_SHELL_RADIUS: f32 = 300.0;
const STAR_SHELL_DEPTH: f32 = 150.0;
/// Shell radius grows to 500 at full scroll.
const STAR_SCALE_GAIN: f32 = 200.0;
/// Starfield yaw, radians per tick.
const STAR_SPIN: f32 = 0.0001;
const DUST_COUNT: usize = 4000;
const DUST_EXTENTS: Vec3 = Vec3::new(200.0, 100.0, 200.0);
/// Dust cloud drift, radians per tick.
const DUST_SPIN_YAW: f32 = 0.00008;
const DUST_SPIN_PITCH: f32 = 0.00003;

/// Visual boost for one highlight state: (scale, glow, atmosphere opacity).
/// Menu hover wins over nearest, nearest over pointer hover.
fn highlight_tier(menu: bool, nearest: bool, pointer: bool) -> (f32, f32, f32) {
    if menu {
        (1.4, 0.8, 0.6)
    } else if nearest {
        (1.1, 0.4, 0.35)
    } else if pointer {
        (1.2, 0.6, 0.5)
    } else {
        (1.0, 0.15, 0.18)
    }
}

/// What the pointer (or the page's navigation menu) is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HoverTarget {
    Planet(usize),
    Sun,
}

impl HoverTarget {
    /// Wire encoding shared with the page: planet index, planet count for the sun.
    fn wire_index(self) -> f32 {
        match self {
            HoverTarget::Planet(i) => i as f32,
            HoverTarget::Sun => planets::PLANET_COUNT as f32,
        }
    }

    fn from_wire_index(value: f32) -> Option<HoverTarget> {
        let index = value as i32;
        if index >= 0 && (index as usize) < planets::PLANET_COUNT {
            Some(HoverTarget::Planet(index as usize))
        } else if index as usize == planets::PLANET_COUNT {
            Some(HoverTarget::Sun)
        } else {
            None
        }
    }
}

/// Body ids for one planet's visual stack.
#[derive(Debug, Clone, Copy)]
struct PlanetBodies {
    /// Textured sphere, carries the section label.
    core: BodyId,
    atmosphere: BodyId,
    glow: BodyId,
    /// White ring shown only while highlighted.
    highlight: BodyId,
    /// Origin-centered orbit guide.
    orbit: BodyId,
    /// Accent ring, jupiter-styled planets only.
    ring: Option<BodyId>,
}

/// Body ids for one distant galaxy.
#[derive(Debug, Clone, Copy)]
struct GalaxyBodies {
    /// Core sphere, carries the galaxy label.
    core: BodyId,
    halo: BodyId,
    /// Flat rings, spiral galaxies only.
    arms: Option<(BodyId, BodyId)>,
}

// ── Scene struct ─────────────────────────────────────────────────────

pub struct PortfolioScene {
    /// Scroll progress in [0, 1], latest value from the input queue.
    progress: f32,
    /// Fixed update steps since init.
    ticks: u64,
    /// Camera targets and the eased rig that chases them.
    path: CameraPath,
    rig: CameraRig,

    // Hover / navigation state
    menu_hover: Option<HoverTarget>,
    pointer_hover: Option<HoverTarget>,
    /// Target under the pointer at the last press, if any.
    pressed: Option<HoverTarget>,

    // Catalog data
    specs: [PlanetSpec; planets::PLANET_COUNT],
    rocks: Vec<RockSpec>,
    galaxies: Vec<GalaxySpec>,

    // Body ids
    planet_bodies: [Option<PlanetBodies>; planets::PLANET_COUNT],
    sun_core: Option<BodyId>,
    sun_corona: Option<BodyId>,
    rock_ids: Vec<BodyId>,
    galaxy_bodies: Vec<GalaxyBodies>,

    // Cached per-tick results, read by the pointer hit test
    planet_pos: [Vec3; planets::PLANET_COUNT],
    planet_pick_radius: [f32; planets::PLANET_COUNT],
    sun_pick_radius: f32,
    /// Nearest planet index and camera distance.
    nearest: Option<(usize, f32)>,
}

impl PortfolioScene {
    pub fn new() -> Self {
        let mut rng = Rng::new(CATALOG_SEED);
        let rocks = planets::generate_rocks(&mut rng);
        let galaxies = planets::generate_galaxies(&mut rng);

        let path = CameraPath::default();
        let rig = CameraRig::new(&path, DEFAULT_ASPECT);

        Self {
            progress: 0.0,
            ticks: 0,
            path,
            rig,

            menu_hover: None,
            pointer_hover: None,
            pressed: None,

            specs: planets::specs(),
            rocks,
            galaxies,

            planet_bodies: [None; planets::PLANET_COUNT],
            sun_core: None,
            sun_corona: None,
            rock_ids: Vec::new(),
            galaxy_bodies: Vec::new(),

            planet_pos: [Vec3::ZERO; planets::PLANET_COUNT],
            planet_pick_radius: [0.0; planets::PLANET_COUNT],
            sun_pick_radius: 0.0,
            nearest: None,
        }
    }

    // ── Picking ──────────────────────────────────────────────────────

    /// Cast the pointer ray against the pick spheres; the nearest hit
    /// along the ray wins. Positions and radii come from the previous
    /// tick, matching what was last drawn.
    fn hit_test(&self, ndc_x: f32, ndc_y: f32) -> Option<HoverTarget> {
        if self.progress <= 0.0 {
            return None;
        }

        let ray = pick_ray(ndc_x, ndc_y, self.rig.view(), self.rig.projection());

        let mut best: Option<(HoverTarget, f32)> = None;
        if let Some(t) = ray_sphere_intersect(&ray, Vec3::ZERO, self.sun_pick_radius) {
            best = Some((HoverTarget::Sun, t));
        }
        for i in 0..planets::PLANET_COUNT {
            if let Some(t) =
                ray_sphere_intersect(&ray, self.planet_pos[i], self.planet_pick_radius[i])
            {
                if best.map(|(_, nearest)| t < nearest).unwrap_or(true) {
                    best = Some((HoverTarget::Planet(i), t));
                }
            }
        }
        best.map(|(target, _)| target)
    }

    /// Navigation route for a click on this target.
    fn route_for(&self, target: HoverTarget) -> Route {
        match target {
            HoverTarget::Planet(i) => self.specs[i].route,
            HoverTarget::Sun => Route::Home,
        }
    }

    // ── Lights ───────────────────────────────────────────────────────

    /// Ambient plus the three scene lights, rebuilt from scroll progress.
    fn write_lights(ctx: &mut EngineContext, p: f32) {
        ctx.lights.clear();
        ctx.lights.set_ambient(0.2 + 0.15 * p);
        ctx.lights.add(PointLight::new(
            Vec3::ZERO,
            Color3::from_hex(planets::SUN_COLOR),
            6.0 + 3.0 * p,
            0.0,
        ));
        ctx.lights.add(PointLight::new(
            Vec3::new(25.0, 20.0, 25.0),
            Color3::from_hex(0x4f46e5),
            1.2 + 0.6 * p,
            0.0,
        ));
        ctx.lights.add(PointLight::new(
            Vec3::new(-25.0, 20.0, -25.0),
            Color3::from_hex(0x06b6d4),
            1.0 + 0.6 * p,
            0.0,
        ));
    }
}

impl App for PortfolioScene {
    fn config(&self) -> AppConfig {
        AppConfig {
            fixed_dt: FIXED_DT,
            max_spheres: 192,
            max_rings: 48,
            max_labels: 24,
            max_lights: 4,
            max_events: 16,
            star_count: STAR_COUNT,
            dust_count: DUST_COUNT,
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        // ── Sky point sets (written once into the shared buffer) ─────
        let mut rng = Rng::new(SKY_SEED);
        ctx.sky.stars =
            PointCloud::sphere_shell(STAR_COUNT, STAR_SHELL_RADIUS, STAR_SHELL_DEPTH, &mut rng);
        ctx.sky.dust = PointCloud::box_volume(DUST_COUNT, DUST_EXTENTS, &mut rng);

        // ── Sun ──────────────────────────────────────────────────────
        let sun_label = ctx.labels.register(planets::SUN_LABEL);
        let core_id = ctx.next_id();
        ctx.scene.spawn(
            Body::new(core_id)
                .with_tag("sun")
                .with_sphere(
                    SphereVisual::new(planets::SUN_CORE_SCALE, Color3::from_hex(planets::SUN_COLOR))
                        .with_surface(SurfaceKind::Sun)
                        .with_alpha(0.0),
                )
                .with_label(
                    LabelVisual::new(sun_label, planets::SUN_LABEL_SIZE)
                        .with_color(Color3::from_hex(planets::SUN_GOLD))
                        .with_alpha(0.0)
                        .with_offset_y(planets::SUN_LABEL_OFFSET),
                ),
        );
        self.sun_core = Some(core_id);

        let corona_id = ctx.next_id();
        ctx.scene.spawn(
            Body::new(corona_id).with_tag("corona").with_sphere(
                SphereVisual::new(
                    planets::SUN_CORONA_SCALE,
                    Color3::from_hex(planets::SUN_GOLD),
                )
                .with_alpha(0.0),
            ),
        );
        self.sun_corona = Some(corona_id);

        // ── Planets ──────────────────────────────────────────────────
        let specs = self.specs;
        for (i, spec) in specs.iter().enumerate() {
            let label = ctx.labels.register(spec.label);
            let pos = orbit_position(spec.orbit_radius, 0.0);

            let orbit_id = ctx.next_id();
            ctx.scene.spawn(
                Body::new(orbit_id).with_tag("orbit-guide").with_ring(
                    RingVisual::new(
                        spec.orbit_radius - ORBIT_GUIDE_HALF_WIDTH,
                        spec.orbit_radius + ORBIT_GUIDE_HALF_WIDTH,
                        spec.primary,
                    )
                    .with_alpha(0.25),
                ),
            );

            let core_id = ctx.next_id();
            ctx.scene.spawn(
                Body::new(core_id)
                    .with_tag(spec.label)
                    .with_pos(pos)
                    .with_sphere(
                        SphereVisual::new(spec.size * CORE_SCALE, spec.primary)
                            .with_surface(spec.surface)
                            .with_emissive(0.15),
                    )
                    .with_label(LabelVisual::new(label, LABEL_SIZE).with_offset_y(LABEL_OFFSET)),
            );

            let atmosphere_id = ctx.next_id();
            ctx.scene.spawn(
                Body::new(atmosphere_id)
                    .with_tag("atmosphere")
                    .with_pos(pos)
                    .with_sphere(
                        SphereVisual::new(spec.size * ATMOSPHERE_SCALE, spec.primary)
                            .with_alpha(0.18),
                    ),
            );

            let glow_id = ctx.next_id();
            ctx.scene.spawn(
                Body::new(glow_id)
                    .with_tag("glow")
                    .with_pos(pos)
                    .with_sphere(SphereVisual::new(GLOW_RADIUS, spec.primary).with_alpha(0.15)),
            );

            let highlight_id = ctx.next_id();
            ctx.scene.spawn(
                Body::new(highlight_id)
                    .with_tag("highlight")
                    .with_pos(pos)
                    .with_ring(
                        RingVisual::new(
                            spec.size * HIGHLIGHT_INNER,
                            spec.size * HIGHLIGHT_OUTER,
                            Color3::WHITE,
                        )
                        .with_alpha(0.0),
                    ),
            );

            let ring_id = if spec.surface == SurfaceKind::Jupiter {
                let id = ctx.next_id();
                ctx.scene.spawn(
                    Body::new(id).with_tag("planet-ring").with_pos(pos).with_ring(
                        RingVisual::new(PLANET_RING_INNER, PLANET_RING_OUTER, spec.secondary)
                            .with_alpha(0.4),
                    ),
                );
                Some(id)
            } else {
                None
            };

            self.planet_bodies[i] = Some(PlanetBodies {
                core: core_id,
                atmosphere: atmosphere_id,
                glow: glow_id,
                highlight: highlight_id,
                orbit: orbit_id,
                ring: ring_id,
            });
        }

        // ── Asteroid belt ────────────────────────────────────────────
        for i in 0..self.rocks.len() {
            let rock = self.rocks[i];
            let mut pos = orbit_position(rock.radius, rock.phase);
            pos.y = rock.height;

            let id = ctx.next_id();
            ctx.scene.spawn(
                Body::new(id).with_tag("rock").with_pos(pos).with_sphere(
                    SphereVisual::new(rock.size, Color3::from_hex(planets::ROCK_COLOR))
                        .with_emissive(planets::ROCK_EMISSIVE)
                        .with_alpha(0.0),
                ),
            );
            self.rock_ids.push(id);
        }

        // ── Distant galaxies ─────────────────────────────────────────
        for i in 0..self.galaxies.len() {
            let galaxy = self.galaxies[i];
            let label = ctx.labels.register(&planets::galaxy_label(i));
            let mut pos = orbit_position(galaxy.distance, galaxy.angle);
            pos.y = galaxy.height;

            let core_id = ctx.next_id();
            ctx.scene.spawn(
                Body::new(core_id)
                    .with_tag("galaxy")
                    .with_pos(pos)
                    .with_yaw(galaxy.initial_rotation * 0.7)
                    .with_pitch(galaxy.initial_rotation)
                    .with_sphere(SphereVisual::new(galaxy.size, galaxy.color).with_alpha(0.0))
                    .with_label(
                        LabelVisual::new(label, galaxy.size * 0.3)
                            .with_color(galaxy.color)
                            .with_alpha(0.0)
                            .with_offset_y(galaxy.size * 3.0),
                    ),
            );

            let halo_id = ctx.next_id();
            ctx.scene.spawn(
                Body::new(halo_id).with_tag("galaxy-halo").with_pos(pos).with_sphere(
                    SphereVisual::new(galaxy.size * 2.5, galaxy.color).with_alpha(0.0),
                ),
            );

            let arms = if galaxy.kind == GalaxyKind::Spiral {
                let arm_a = ctx.next_id();
                ctx.scene.spawn(
                    Body::new(arm_a).with_tag("galaxy-arm").with_pos(pos).with_ring(
                        RingVisual::new(
                            0.8 * galaxy.size * 1.8,
                            2.2 * galaxy.size * 1.8,
                            galaxy.color,
                        )
                        .with_alpha(0.0),
                    ),
                );
                let arm_b = ctx.next_id();
                ctx.scene.spawn(
                    Body::new(arm_b)
                        .with_tag("galaxy-arm")
                        .with_pos(pos)
                        .with_yaw(FRAC_PI_3)
                        .with_ring(
                            RingVisual::new(
                                0.6 * galaxy.size * 1.5,
                                1.8 * galaxy.size * 1.5,
                                galaxy.color,
                            )
                            .with_alpha(0.0),
                        ),
                );
                Some((arm_a, arm_b))
            } else {
                None
            };

            self.galaxy_bodies.push(GalaxyBodies {
                core: core_id,
                halo: halo_id,
                arms,
            });
        }

        // Everything stays hidden until the first update step derives
        // real visibility from scroll progress.
        for body in ctx.scene.iter_mut() {
            body.active = false;
        }

        Self::write_lights(ctx, self.progress);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // ── Handle input ─────────────────────────────────────────────
        for event in input.iter() {
            match event {
                InputEvent::Scroll { progress } => {
                    self.progress = *progress;
                }
                InputEvent::PointerMove { x, y } => {
                    self.pointer_hover = self.hit_test(*x, *y);
                }
                InputEvent::PointerDown { x, y } => {
                    self.pressed = self.hit_test(*x, *y);
                }
                InputEvent::PointerUp { x, y } => {
                    let released = self.hit_test(*x, *y);
                    if let (Some(pressed), Some(target)) = (self.pressed, released) {
                        if pressed == target {
                            ctx.emit_event(HostEvent {
                                kind: EVENT_NAVIGATE,
                                a: self.route_for(target).index() as f32,
                                b: 0.0,
                                c: 0.0,
                            });
                        }
                    }
                    self.pressed = None;
                }
                InputEvent::Custom { kind, a, b, c } => match *kind {
                    CUSTOM_MENU_HOVER => {
                        self.menu_hover = HoverTarget::from_wire_index(*a);
                    }
                    CUSTOM_RESIZE => {
                        self.rig.set_aspect(*a / b.max(1.0));
                        let _ = c; // unused
                    }
                    _ => {}
                },
            }
        }

        // ── Derive frame scalars ─────────────────────────────────────
        let p = self.progress;
        let ticks = self.ticks as f32;
        let t = ticks * FIXED_DT;
        let fade = curves::scene_fade(p);
        let deep = curves::deep_space_visibility(p);
        let planet_zoom = curves::zoom_scale(p, PLANET_ZOOM_GAIN);
        let sun_zoom = curves::zoom_scale(p, SUN_ZOOM_GAIN);
        let belt_zoom = curves::zoom_scale(p, BELT_ZOOM_GAIN);
        let cam_dist = curves::camera_distance(p);
        let pulse = (t * 2.0).sin() * 0.3 + 0.7;
        let mounted = p > 0.0;

        // ── Ease the camera toward its scroll targets ────────────────
        self.rig.advance(&self.path, p);

        // The whole system mounts together once scrolling starts.
        for body in ctx.scene.iter_mut() {
            body.active = mounted;
        }

        // ── Orbit positions, pick cache, nearest selection ───────────
        for i in 0..planets::PLANET_COUNT {
            let spec = &self.specs[i];
            let angle = orbit_angle(ticks, spec.orbit_speed, p);
            self.planet_pos[i] = orbit_position(spec.orbit_radius, angle);
            self.planet_pick_radius[i] = spec.size * PICK_SCALE * planet_zoom;
        }
        self.sun_pick_radius = planets::SUN_CORE_SCALE * sun_zoom;
        self.nearest = nearest_index(&self.planet_pos, self.rig.pos);

        // ── Planet visual stacks ─────────────────────────────────────
        for i in 0..planets::PLANET_COUNT {
            let spec = self.specs[i];
            let pos = self.planet_pos[i];

            let menu = self.menu_hover == Some(HoverTarget::Planet(i));
            let pointer = self.pointer_hover == Some(HoverTarget::Planet(i));
            let nearest = self.nearest.map(|(n, _)| n == i).unwrap_or(false);
            let highlighted = menu || nearest || pointer;
            let hovered = menu || pointer;
            let (boost, glow, atmosphere) = highlight_tier(menu, nearest, pointer);

            if let Some(bodies) = self.planet_bodies[i] {
                if let Some(body) = ctx.scene.get_mut(bodies.core) {
                    body.pos = pos;
                    body.yaw = ticks * spec.spin_yaw;
                    body.pitch = ticks * spec.spin_pitch;
                    if let Some(sphere) = body.sphere.as_mut() {
                        sphere.radius = spec.size * CORE_SCALE * planet_zoom * boost;
                        sphere.emissive = glow;
                    }
                    if let Some(label) = body.label.as_mut() {
                        label.size =
                            LABEL_SIZE * planet_zoom * if highlighted { 1.3 } else { 1.0 };
                        label.offset_y = LABEL_OFFSET * planet_zoom * boost;
                    }
                }

                if let Some(body) = ctx.scene.get_mut(bodies.atmosphere) {
                    body.pos = pos;
                    body.yaw = ticks * ATMOSPHERE_SPIN;
                    if let Some(sphere) = body.sphere.as_mut() {
                        sphere.radius = spec.size * ATMOSPHERE_SCALE * planet_zoom * boost;
                        sphere.alpha = atmosphere;
                    }
                }

                if let Some(body) = ctx.scene.get_mut(bodies.glow) {
                    body.pos = pos;
                    if let Some(sphere) = body.sphere.as_mut() {
                        sphere.radius = GLOW_RADIUS * planet_zoom * boost;
                        sphere.color = if highlighted { Color3::WHITE } else { spec.primary };
                        sphere.alpha = if highlighted { 0.4 } else { 0.15 };
                    }
                }

                if let Some(body) = ctx.scene.get_mut(bodies.highlight) {
                    body.pos = pos;
                    if let Some(ring) = body.ring.as_mut() {
                        let base = spec.size
                            * planet_zoom
                            * boost
                            * if nearest { pulse } else { 1.0 };
                        ring.inner = base * HIGHLIGHT_INNER;
                        ring.outer = base * HIGHLIGHT_OUTER;
                        ring.alpha = if !highlighted {
                            0.0
                        } else if hovered {
                            0.9
                        } else {
                            0.6
                        };
                    }
                }

                if let Some(body) = ctx.scene.get_mut(bodies.orbit) {
                    if let Some(ring) = body.ring.as_mut() {
                        ring.color = if highlighted { Color3::WHITE } else { spec.primary };
                        ring.alpha = if highlighted { 0.8 } else { 0.25 + 0.2 * p };
                    }
                }

                if let Some(ring_id) = bodies.ring {
                    if let Some(body) = ctx.scene.get_mut(ring_id) {
                        body.pos = pos;
                        if let Some(ring) = body.ring.as_mut() {
                            let scale = planet_zoom * boost;
                            ring.inner = PLANET_RING_INNER * scale;
                            ring.outer = PLANET_RING_OUTER * scale;
                            ring.alpha = if highlighted { 0.8 } else { 0.4 };
                        }
                    }
                }
            }
        }

        // ── Sun ──────────────────────────────────────────────────────
        let sun_menu = self.menu_hover == Some(HoverTarget::Sun);
        let sun_pointer = self.pointer_hover == Some(HoverTarget::Sun);
        let sun_highlighted = sun_menu || sun_pointer;
        let sun_boost = if sun_menu {
            1.3
        } else if sun_pointer {
            1.2
        } else {
            1.0
        };
        let sun_glow = if sun_menu {
            2.0
        } else if sun_pointer {
            1.8
        } else {
            1.2
        };

        if let Some(id) = self.sun_core {
            if let Some(body) = ctx.scene.get_mut(id) {
                body.yaw = ticks * planets::SUN_SPIN_YAW;
                body.pitch = ticks * planets::SUN_SPIN_PITCH;
                if let Some(sphere) = body.sphere.as_mut() {
                    sphere.radius = planets::SUN_CORE_SCALE * sun_zoom * sun_boost;
                    sphere.emissive = sun_glow * fade;
                    sphere.alpha = fade;
                }
                if let Some(label) = body.label.as_mut() {
                    label.size = planets::SUN_LABEL_SIZE
                        * sun_zoom
                        * if sun_highlighted { 1.2 } else { 1.0 };
                    label.offset_y = planets::SUN_LABEL_OFFSET * sun_zoom * sun_boost;
                    label.alpha = fade;
                }
            }
        }

        if let Some(id) = self.sun_corona {
            if let Some(body) = ctx.scene.get_mut(id) {
                body.yaw = -(ticks * planets::CORONA_SPIN);
                if let Some(sphere) = body.sphere.as_mut() {
                    sphere.radius = planets::SUN_CORONA_SCALE * sun_zoom * sun_boost;
                    sphere.alpha = (if sun_highlighted { 0.4 } else { 0.25 }) * fade;
                }
            }
        }

        // ── Asteroid belt ────────────────────────────────────────────
        let belt_angle = ticks * planets::BELT_SPEED * (1.0 - planets::BELT_DAMPING * p);
        for i in 0..self.rock_ids.len() {
            let rock = self.rocks[i];
            if let Some(body) = ctx.scene.get_mut(self.rock_ids[i]) {
                let mut pos = orbit_position(rock.radius, rock.phase + belt_angle);
                pos.y = rock.height;
                body.pos = pos;
                if let Some(sphere) = body.sphere.as_mut() {
                    sphere.radius = rock.size * belt_zoom;
                    sphere.alpha = fade;
                }
            }
        }

        // ── Distant galaxies ─────────────────────────────────────────
        let group_yaw = ticks * planets::GALAXY_GROUP_SPIN;
        for i in 0..self.galaxy_bodies.len() {
            let galaxy = self.galaxies[i];
            let bodies = self.galaxy_bodies[i];
            let mut pos = orbit_position(galaxy.distance, galaxy.angle + group_yaw);
            pos.y = galaxy.height;

            if let Some(body) = ctx.scene.get_mut(bodies.core) {
                body.pos = pos;
                if let Some(sphere) = body.sphere.as_mut() {
                    sphere.alpha = deep * 0.8;
                }
                if let Some(label) = body.label.as_mut() {
                    label.alpha = deep;
                }
            }
            if let Some(body) = ctx.scene.get_mut(bodies.halo) {
                body.pos = pos;
                if let Some(sphere) = body.sphere.as_mut() {
                    sphere.alpha = deep * 0.15;
                }
            }
            if let Some((arm_a, arm_b)) = bodies.arms {
                if let Some(body) = ctx.scene.get_mut(arm_a) {
                    body.pos = pos;
                    body.yaw = ticks * galaxy.spin;
                    if let Some(ring) = body.ring.as_mut() {
                        ring.alpha = deep * 0.5;
                    }
                }
                if let Some(body) = ctx.scene.get_mut(arm_b) {
                    body.pos = pos;
                    body.yaw = FRAC_PI_3 + ticks * galaxy.spin;
                    if let Some(ring) = body.ring.as_mut() {
                        ring.alpha = deep * 0.3;
                    }
                }
            }
        }

        // ── Lights ───────────────────────────────────────────────────
        Self::write_lights(ctx, p);

        // ── Frame parameters ─────────────────────────────────────────
        let (nearest_wire, nearest_dist) = match self.nearest {
            Some((i, dist)) => (i as f32, curves::round_to_tenth(dist)),
            None => (-1.0, 0.0),
        };
        let show_readout = self.nearest.is_some() && p > READOUT_MIN_PROGRESS;

        ctx.frame = FrameParams {
            cam_x: self.rig.pos.x,
            cam_y: self.rig.pos.y,
            cam_z: self.rig.pos.z,
            cam_fov_deg: self.rig.fov_deg,
            scroll: p,
            elapsed: t,
            scene_opacity: fade,
            deep_space: deep,
            star_yaw: ticks * STAR_SPIN,
            star_scale: (STAR_SHELL_RADIUS + STAR_SCALE_GAIN * p) / STAR_SHELL_RADIUS,
            dust_yaw: ticks * DUST_SPIN_YAW,
            dust_pitch: ticks * DUST_SPIN_PITCH,
            dust_size: 0.03 + 0.04 * p,
            dust_opacity: 0.5 + 0.4 * p,
            camera_distance: cam_dist,
            nearest_index: nearest_wire,
            nearest_distance: nearest_dist,
            show_distance: if show_readout { 1.0 } else { 0.0 },
            hover_index: self
                .pointer_hover
                .map(HoverTarget::wire_index)
                .unwrap_or(-1.0),
            ..FrameParams::default()
        };

        // ── Host events ──────────────────────────────────────────────
        ctx.emit_event(HostEvent {
            kind: EVENT_CAMERA,
            a: cam_dist,
            b: p,
            c: 0.0,
        });
        ctx.emit_event(HostEvent {
            kind: EVENT_NEAREST,
            a: nearest_wire,
            b: nearest_dist,
            c: if show_readout { 1.0 } else { 0.0 },
        });

        self.ticks += 1;
    }
}
