//! The assembled solar system: sun, planets, asteroid belt, orbit paths and
//! whichever decorative categories are mounted.
//!
//! The scene owns the simulation clock. Every per-frame update receives a
//! [`FrameTime`] explicitly, so the whole scene can be stepped in tests
//! without a render loop.

use std::collections::BTreeMap;
use std::sync::Arc;

use glam::Vec3;
use orrery_config::Config;
use orrery_orbit::{FrameTime, OrbitConstants, SimulationClock};
use orrery_space::{DecorativeObject, ObjectCategory, Ray};
use orrery_texture::{Texture, TextureSettings};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::belt::{AsteroidBelt, BELT_COUNT, BELT_INNER_RADIUS, BELT_OUTER_RADIUS};
use crate::body::CelestialBody;
use crate::catalog::PLANETS;
use crate::controls::SceneControls;
use crate::events::{EventSink, SceneEvent};
use crate::layout::{build_category, uses_theme};
use crate::orbit_path::OrbitPath;
use crate::sun::Sun;
use crate::theme::SpaceTheme;

/// Camera auto-rotation speed substituted while orbital motion is paused.
pub const AUTO_ROTATE_SPEED: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Label {
    pub name: &'static str,
    pub anchor: Vec3,
}

/// Result of a successful pick.
#[derive(Clone, Debug, PartialEq)]
pub struct PickHit {
    pub event: SceneEvent,
    pub distance: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneStats {
    pub bodies: usize,
    pub asteroids: usize,
    pub mounted_categories: usize,
    pub decorative_objects: usize,
    pub particles: usize,
}

pub struct Scene {
    seed: u64,
    rng: ChaCha8Rng,
    constants: OrbitConstants,
    texture_settings: TextureSettings,
    accretion_size: u32,
    clock: SimulationClock,
    controls: SceneControls,
    last_frame: FrameTime,
    sun: Sun,
    bodies: Vec<CelestialBody>,
    index: FxHashMap<&'static str, usize>,
    belt: AsteroidBelt,
    paths: Vec<OrbitPath>,
    decorations: BTreeMap<ObjectCategory, Vec<DecorativeObject>>,
    events: EventSink,
}

impl Scene {
    /// Build the full scene. The master seed comes from the config, or from
    /// entropy when unset; every generator draws its own seed from it.
    pub fn new(config: &Config, events: EventSink) -> Self {
        let config = config.sanitized();
        let seed = config.scene.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let sim = &config.simulation;
        let constants = OrbitConstants {
            reference_period: sim.reference_period as f32,
            orbital_speed_scale: sim.orbital_speed_scale as f32,
            rotation_speed_scale: sim.rotation_speed_scale as f32,
        };
        let tex = &config.textures;
        let texture_settings = TextureSettings {
            surface_size: (tex.planet_width, tex.planet_height),
            bump_size: (tex.bump_width, tex.bump_height),
            ring_size: (tex.ring_width, tex.ring_height),
            noise_amplitude: tex.noise_amplitude,
        };
        let speed = sim.speed_multiplier as f32;
        let clock = SimulationClock::new(speed, sim.fixed_dt);
        let controls = SceneControls::from_config(&config.scene, clock.speed());

        let sun = Sun::new(tex.sun_size, tex.noise_amplitude, rng.random());
        let bodies: Vec<CelestialBody> = PLANETS
            .iter()
            .map(|spec| CelestialBody::new(spec, &constants, &texture_settings, &mut rng))
            .collect();
        let index = bodies
            .iter()
            .enumerate()
            .map(|(i, b)| (b.name(), i))
            .collect();
        let belt = AsteroidBelt::new(BELT_COUNT, BELT_INNER_RADIUS, BELT_OUTER_RADIUS, &mut rng);
        let paths = bodies
            .iter()
            .map(|b| OrbitPath::new(b.name(), b.orbit().params(), controls.theme.accent))
            .collect();

        let mut scene = Self {
            seed,
            rng,
            constants,
            texture_settings,
            accretion_size: tex.accretion_size,
            last_frame: clock.frame_time(),
            clock,
            controls,
            sun,
            bodies,
            index,
            belt,
            paths,
            decorations: BTreeMap::new(),
            events,
        };
        let mounted: Vec<ObjectCategory> = scene.controls.visibility.iter().collect();
        for category in mounted {
            scene.mount(category);
        }
        info!(seed, stats = ?scene.stats(), "Scene assembled");
        scene
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn constants(&self) -> &OrbitConstants {
        &self.constants
    }

    pub fn texture_settings(&self) -> &TextureSettings {
        &self.texture_settings
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn controls(&self) -> &SceneControls {
        &self.controls
    }

    /// Advance the clock by a real frame delta, running as many fixed steps
    /// as it yields. Returns the number of steps run.
    pub fn advance(&mut self, real_dt: f64) -> u32 {
        // The clock drives the update callback, which needs the rest of the
        // scene mutably.
        let mut clock = std::mem::take(&mut self.clock);
        let steps = clock.tick(real_dt, |frame| self.update(frame));
        self.clock = clock;
        steps
    }

    /// Step every component to `frame`. Planets, rings, moons and the belt
    /// follow the speed multiplier; the sun and decorative objects run on
    /// unscaled time.
    pub fn update(&mut self, frame: FrameTime) {
        self.sun.update(frame);
        for body in &mut self.bodies {
            body.update(frame);
        }
        self.belt.update(frame);
        for object in self.decorations.values_mut().flatten() {
            object.animate(frame.elapsed, frame.dt);
        }
        self.last_frame = frame;
    }

    // --- Inbound controls ---

    pub fn set_speed(&mut self, speed: f32) {
        self.clock.set_speed(speed);
        self.controls.speed = self.clock.speed();
    }

    pub fn set_show_orbits(&mut self, show: bool) {
        self.controls.show_orbits = show;
    }

    pub fn set_show_labels(&mut self, show: bool) {
        self.controls.show_labels = show;
    }

    /// Mount or unmount a decorative category. Mounting always draws fresh
    /// parameters; nothing from a previous mount is reused.
    pub fn set_visible(&mut self, category: ObjectCategory, visible: bool) {
        if self.controls.visibility.is_visible(category) == visible {
            return;
        }
        self.controls.visibility.set(category, visible);
        if visible {
            self.mount(category);
        } else if let Some(objects) = self.decorations.remove(&category) {
            info!(%category, count = objects.len(), "Unmounted decorative category");
        }
    }

    /// Re-tint orbit paths and rebuild the mounted categories whose look
    /// depends on the theme.
    pub fn set_theme(&mut self, theme: SpaceTheme) {
        if self.controls.theme == theme {
            return;
        }
        self.controls.theme = theme;
        for path in &mut self.paths {
            path.retint(self.controls.theme.accent);
        }
        let themed: Vec<ObjectCategory> = self
            .controls
            .visibility
            .iter()
            .filter(|c| uses_theme(*c))
            .collect();
        info!(rebuilt = themed.len(), "Theme changed");
        for category in themed {
            self.mount(category);
        }
    }

    /// Apply a full set of controls, touching only what changed.
    pub fn apply(&mut self, controls: &SceneControls) {
        if controls.speed != self.controls.speed {
            self.set_speed(controls.speed);
        }
        self.set_show_orbits(controls.show_orbits);
        self.set_show_labels(controls.show_labels);
        self.set_theme(controls.theme.clone());
        for category in ObjectCategory::ALL {
            self.set_visible(category, controls.visibility.is_visible(category));
        }
    }

    fn mount(&mut self, category: ObjectCategory) {
        let mut objects = build_category(
            category,
            &self.controls.theme,
            self.accretion_size,
            &mut self.rng,
        );
        for object in &mut objects {
            object.animate(self.last_frame.elapsed, 0.0);
        }
        info!(%category, count = objects.len(), "Mounted decorative category");
        self.decorations.insert(category, objects);
    }

    // --- Queries ---

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn body(&self, name: &str) -> Option<&CelestialBody> {
        self.index.get(name).map(|&i| &self.bodies[i])
    }

    pub fn belt(&self) -> &AsteroidBelt {
        &self.belt
    }

    /// Orbit paths, or nothing while they are hidden.
    pub fn orbit_paths(&self) -> &[OrbitPath] {
        if self.controls.show_orbits {
            &self.paths
        } else {
            &[]
        }
    }

    /// Label anchors, or nothing while labels are hidden.
    pub fn labels(&self) -> Vec<Label> {
        if !self.controls.show_labels {
            return Vec::new();
        }
        self.bodies
            .iter()
            .map(|b| Label {
                name: b.name(),
                anchor: b.label_anchor(),
            })
            .collect()
    }

    pub fn is_mounted(&self, category: ObjectCategory) -> bool {
        self.decorations.contains_key(&category)
    }

    pub fn decorations(&self, category: ObjectCategory) -> &[DecorativeObject] {
        self.decorations
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn all_decorations(&self) -> impl Iterator<Item = &DecorativeObject> {
        self.decorations.values().flatten()
    }

    /// Camera auto-rotation speed while paused.
    pub fn camera_auto_rotate(&self) -> Option<f32> {
        self.clock.is_paused().then_some(AUTO_ROTATE_SPEED)
    }

    /// Nearest selectable planet or decorative object along `ray`. A hit is
    /// reported to the shell as a selection event.
    pub fn pick(&self, ray: &Ray) -> Option<PickHit> {
        let planets = self.bodies.iter().filter_map(|b| {
            b.hitbox()
                .intersect(ray)
                .map(|d| (d, SceneEvent::PlanetSelected(b.name().to_string())))
        });
        let objects = self.all_decorations().filter_map(|o| {
            o.pick(ray)
                .map(|d| (d, SceneEvent::SpaceObjectSelected(o.category())))
        });
        let (distance, event) = planets
            .chain(objects)
            .min_by(|a, b| a.0.total_cmp(&b.0))?;
        debug!(?event, distance, "Picked");
        self.events.emit(event.clone());
        Some(PickHit { event, distance })
    }

    /// Every texture the scene currently holds, for export or upload.
    pub fn textures(&self) -> Vec<Arc<Texture>> {
        let mut out = vec![Arc::clone(self.sun.surface())];
        for body in &self.bodies {
            if let Some(set) = body.cached_textures() {
                out.extend(set.iter().cloned());
            }
        }
        for object in self.all_decorations() {
            if let DecorativeObject::BlackHole(hole) = object {
                out.push(Arc::clone(hole.accretion_texture()));
            }
        }
        out
    }

    pub fn stats(&self) -> SceneStats {
        SceneStats {
            bodies: self.bodies.len(),
            asteroids: self.belt.len(),
            mounted_categories: self.decorations.len(),
            decorative_objects: self.decorations.values().map(Vec::len).sum(),
            particles: self.sun.corona().particles().len()
                + self
                    .all_decorations()
                    .map(|o| o.particles().len())
                    .sum::<usize>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_config::VisibilityConfig;
    use orrery_texture::Rgba;
    use std::f32::consts::TAU;

    fn test_config(seed: u64) -> Config {
        let mut config = Config::default();
        config.scene.seed = Some(seed);
        let t = &mut config.textures;
        t.planet_width = 32;
        t.planet_height = 16;
        t.bump_width = 16;
        t.bump_height = 8;
        t.ring_width = 32;
        t.ring_height = 4;
        t.sun_size = 16;
        t.accretion_size = 16;
        config
    }

    fn scene(seed: u64) -> Scene {
        Scene::new(&test_config(seed), EventSink::channel().0)
    }

    fn frame(elapsed: f32, speed: f32) -> FrameTime {
        FrameTime {
            elapsed,
            dt: 1.0 / 60.0,
            speed,
        }
    }

    fn run(scene: &mut Scene, from: usize, to: usize, speed: f32) {
        for i in from..to {
            scene.update(frame(i as f32 / 60.0, speed));
        }
    }

    #[test]
    fn test_assembles_everything() {
        let scene = scene(1);
        let stats = scene.stats();
        assert_eq!(stats.bodies, 8);
        assert_eq!(stats.asteroids, 200);
        assert_eq!(stats.mounted_categories, ObjectCategory::ALL.len());
        assert_eq!(scene.orbit_paths().len(), 8);
        assert_eq!(scene.labels().len(), 8);
        assert!(scene.body("Saturn").is_some());
        assert!(scene.body("Pluto").is_none());
    }

    #[test]
    fn test_same_seed_same_scene() {
        let a = scene(7);
        let b = scene(7);
        for (x, y) in a.bodies().iter().zip(b.bodies()) {
            assert_eq!(x.orbit().start_phase(), y.orbit().start_phase());
        }
    }

    #[test]
    fn test_start_phases_differ_between_bodies() {
        let scene = scene(2);
        let phases: Vec<f32> = scene.bodies().iter().map(|b| b.orbit().start_phase()).collect();
        assert!(phases.iter().all(|p| (0.0..TAU).contains(p)));
        assert!(phases.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_zero_speed_freezes_planets() {
        let mut scene = scene(3);
        run(&mut scene, 0, 10, 0.0);
        let snapshot = |scene: &Scene| -> Vec<(f32, f32, Vec3)> {
            scene
                .bodies()
                .iter()
                .map(|b| (b.orbit_pose().theta, b.orbit_pose().spin, b.position()))
                .collect()
        };
        let before = snapshot(&scene);
        run(&mut scene, 10, 400, 0.0);
        assert_eq!(snapshot(&scene), before);
        for body in scene.bodies() {
            assert_eq!(body.orbit_pose().theta, body.orbit().start_phase());
        }
    }

    #[test]
    fn test_pausing_mid_run_keeps_planets_in_place() {
        let mut scene = scene(13);
        for _ in 0..600 {
            scene.advance(scene.clock().fixed_dt());
        }
        let running: Vec<Vec3> = scene.bodies().iter().map(|b| b.position()).collect();
        let earth = scene.body("Earth").unwrap();
        assert_ne!(earth.orbit_pose().theta, earth.orbit().start_phase());

        scene.set_speed(0.0);
        for _ in 0..120 {
            scene.advance(scene.clock().fixed_dt());
        }
        let paused: Vec<Vec3> = scene.bodies().iter().map(|b| b.position()).collect();
        assert_eq!(paused, running);

        scene.set_speed(1.0);
        scene.advance(scene.clock().fixed_dt());
        for (body, before) in scene.bodies().iter().zip(&paused) {
            assert!(body.position().distance(*before) < 1.0, "{} jumped", body.name());
        }
    }

    #[test]
    fn test_auto_rotate_only_when_paused() {
        let mut scene = scene(4);
        assert_eq!(scene.camera_auto_rotate(), None);
        scene.set_speed(0.0);
        assert_eq!(scene.camera_auto_rotate(), Some(AUTO_ROTATE_SPEED));
        scene.set_speed(-3.0);
        assert_eq!(scene.controls().speed, 0.0);
    }

    #[test]
    fn test_advance_runs_fixed_steps() {
        let mut config = test_config(5);
        config.simulation.fixed_dt = 0.125;
        let mut scene = Scene::new(&config, EventSink::channel().0);
        let start = scene.body("Mercury").unwrap().position();
        assert_eq!(scene.advance(0.25), 2);
        assert_eq!(scene.clock().update_count(), 2);
        assert_eq!(scene.clock().elapsed(), 0.25);
        assert_ne!(scene.body("Mercury").unwrap().position(), start);
    }

    #[test]
    fn test_remount_draws_fresh_and_leaves_others_alone() {
        let mut toggled = scene(11);
        let mut control = scene(11);
        run(&mut toggled, 0, 30, 1.0);
        run(&mut control, 0, 30, 1.0);

        toggled.set_visible(ObjectCategory::Wormhole, false);
        assert!(!toggled.is_mounted(ObjectCategory::Wormhole));
        assert!(toggled.decorations(ObjectCategory::Wormhole).is_empty());
        run(&mut toggled, 30, 40, 1.0);
        run(&mut control, 30, 40, 1.0);
        toggled.set_visible(ObjectCategory::Wormhole, true);
        run(&mut toggled, 40, 60, 1.0);
        run(&mut control, 40, 60, 1.0);

        let fresh = toggled.decorations(ObjectCategory::Wormhole);
        let original = control.decorations(ObjectCategory::Wormhole);
        assert_eq!(fresh.len(), 1);
        assert_ne!(fresh[0].particles(), original[0].particles());

        for category in ObjectCategory::ALL {
            if category == ObjectCategory::Wormhole {
                continue;
            }
            let a = toggled.decorations(category);
            let b = control.decorations(category);
            assert_eq!(a.len(), b.len(), "{category}");
            for (x, y) in a.iter().zip(b) {
                assert_eq!(x.pose(), y.pose(), "{category}");
                assert_eq!(x.particles(), y.particles(), "{category}");
            }
        }
        for (x, y) in toggled.bodies().iter().zip(control.bodies()) {
            assert_eq!(x.position(), y.position());
        }
    }

    #[test]
    fn test_redundant_toggle_keeps_objects() {
        let mut scene = scene(12);
        let before = scene.decorations(ObjectCategory::Pulsar)[0].particles().as_ptr();
        scene.set_visible(ObjectCategory::Pulsar, true);
        assert_eq!(
            scene.decorations(ObjectCategory::Pulsar)[0].particles().as_ptr(),
            before
        );
    }

    #[test]
    fn test_hidden_categories_not_built() {
        let mut config = test_config(13);
        config.scene.visibility = VisibilityConfig {
            milky_way: false,
            space_dust: false,
            ..VisibilityConfig::default()
        };
        let scene = Scene::new(&config, EventSink::channel().0);
        assert!(!scene.is_mounted(ObjectCategory::MilkyWay));
        assert!(!scene.is_mounted(ObjectCategory::SpaceDust));
        assert!(scene.is_mounted(ObjectCategory::Comets));
    }

    #[test]
    fn test_orbit_and_label_flags() {
        let mut scene = scene(14);
        scene.set_show_orbits(false);
        scene.set_show_labels(false);
        assert!(scene.orbit_paths().is_empty());
        assert!(scene.labels().is_empty());
        scene.set_show_orbits(true);
        assert_eq!(scene.orbit_paths().len(), 8);
    }

    #[test]
    fn test_theme_change_retints_and_rebuilds() {
        let mut scene = scene(15);
        let comet_before = scene.decorations(ObjectCategory::Comets)[0].particles().to_vec();
        let dust_before = scene.decorations(ObjectCategory::SpaceDust)[0].particles()[0];

        let theme = SpaceTheme {
            accent: Rgba::new(0.0, 1.0, 0.0, 1.0),
            stars: Rgba::new(1.0, 1.0, 0.0, 1.0),
            nebula: Rgba::new(0.0, 0.2, 0.0, 1.0),
            nebula_colors: vec![Rgba::new(0.0, 1.0, 0.0, 1.0)],
        };
        scene.set_theme(theme.clone());
        assert!(scene.orbit_paths().iter().all(|p| p.color == theme.accent));
        assert_eq!(
            scene.decorations(ObjectCategory::Comets)[0].particles(),
            comet_before.as_slice()
        );
        assert_ne!(
            scene.decorations(ObjectCategory::SpaceDust)[0].particles()[0],
            dust_before
        );
    }

    #[test]
    fn test_pick_planet_emits_event() {
        let (sink, rx) = EventSink::channel();
        let scene = Scene::new(&test_config(16), sink);
        let earth = scene.body("Earth").unwrap();
        let target = earth.position();
        let origin = target + target.normalize() * 4.0 + Vec3::Y;
        let hit = scene.pick(&Ray::toward(origin, target)).unwrap();
        assert_eq!(hit.event, SceneEvent::PlanetSelected("Earth".into()));
        assert_eq!(rx.try_recv().ok(), Some(hit.event));
    }

    #[test]
    fn test_pick_space_object() {
        let (sink, rx) = EventSink::channel();
        let scene = Scene::new(&test_config(17), sink);
        let pulsar = scene.decorations(ObjectCategory::Pulsar)[0].anchor();
        let origin = pulsar + Vec3::new(0.0, 0.0, 30.0);
        let hit = scene.pick(&Ray::toward(origin, pulsar)).unwrap();
        assert_eq!(
            hit.event,
            SceneEvent::SpaceObjectSelected(ObjectCategory::Pulsar)
        );
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn test_pick_miss_emits_nothing() {
        let (sink, rx) = EventSink::channel();
        let scene = Scene::new(&test_config(18), sink);
        let hit = scene.pick(&Ray::new(Vec3::new(0.0, 500.0, 0.0), Vec3::Y));
        assert!(hit.is_none());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_textures_listed() {
        let scene = scene(19);
        // sun + 8 surfaces + 8 bumps + 2 rings + accretion disk
        assert_eq!(scene.textures().len(), 1 + 8 + 8 + 2 + 1);
    }

    #[test]
    fn test_apply_controls() {
        let mut scene = scene(20);
        let mut controls = scene.controls().clone();
        controls.speed = 4.0;
        controls.show_labels = false;
        controls.visibility.set(ObjectCategory::Nebula, false);
        scene.apply(&controls);
        assert_eq!(scene.clock().speed(), 4.0);
        assert!(scene.labels().is_empty());
        assert!(!scene.is_mounted(ObjectCategory::Nebula));
        assert_eq!(scene.controls(), &controls);
    }
}
