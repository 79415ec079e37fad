//! One renderable planet: cached texture set plus the integrator's live
//! transforms for the body and its attachments.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;
use orrery_orbit::{
    FrameTime, MOON_DISTANCE_FACTOR, MOON_SIZE_FACTOR, Orbit, OrbitConstants, OrbitPose,
    OrbitalParams,
};
use orrery_space::{Hitbox, Pose};
use orrery_texture::{BodyTextures, Palette, Rgba, SurfaceRequest, TextureSet, TextureSettings};
use rand::Rng;
use tracing::debug;

use crate::catalog::{
    PlanetSpec, RING_INNER_BAND, RING_OUTER_BAND, RING_OUTER_FADE,
};
use crate::theme::parse_color;

/// Height of the name label above the body's surface.
pub const LABEL_CLEARANCE: f32 = 1.5;
pub const CLOUD_SHELL_SCALE: f32 = 1.02;
pub const MOON_COLOR: Rgba = Rgba::new(0.75, 0.75, 0.75, 1.0);
const MOON_TRACK_OPACITY: f32 = 0.1;
const RING_SHADOW_OPACITY: f32 = 0.3;

/// A flat annulus in the ring group's local plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingBand {
    pub inner: f32,
    pub outer: f32,
    pub color: Rgba,
    pub opacity: f32,
    /// Textured bands sample the ring map; the shadow disc does not.
    pub textured: bool,
}

/// Moon placement relative to the scene origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoonState {
    pub pose: Pose,
    pub radius: f32,
    /// Radius of the faint circular track drawn around the host.
    pub track_radius: f32,
    pub track_opacity: f32,
}

pub struct CelestialBody {
    spec: &'static PlanetSpec,
    orbit: Orbit,
    palette: Palette,
    textures: BodyTextures,
    pose: OrbitPose,
}

impl CelestialBody {
    /// Validate orbital parameters, draw the start phase once and build the
    /// texture set.
    pub fn new(
        spec: &'static PlanetSpec,
        constants: &OrbitConstants,
        settings: &TextureSettings,
        rng: &mut impl Rng,
    ) -> Self {
        let params = OrbitalParams::new(
            spec.name,
            spec.distance,
            spec.eccentricity,
            spec.orbital_period,
            spec.rotation_period,
            spec.tilt,
        );
        let start_phase = rng.random::<f32>() * TAU;
        let mut orbit = Orbit::new(params, constants, start_phase);
        let pose = orbit.advance(
            FrameTime {
                elapsed: 0.0,
                dt: 0.0,
                speed: 0.0,
            },
            spec.radius,
            spec.has_moon,
        );

        let mut body = Self {
            spec,
            orbit,
            palette: Palette::from_hex(spec.colors),
            textures: BodyTextures::new(),
            pose,
        };
        body.textures(settings, rng);
        debug!(
            body = spec.name,
            start_phase,
            orbital_speed = body.orbit.orbital_speed(),
            rotation_speed = body.orbit.rotation_speed(),
            "Celestial body created"
        );
        body
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn spec(&self) -> &'static PlanetSpec {
        self.spec
    }

    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    pub fn radius(&self) -> f32 {
        self.spec.radius
    }

    pub fn orbit_pose(&self) -> &OrbitPose {
        &self.pose
    }

    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    pub fn update(&mut self, frame: FrameTime) {
        self.pose = self.orbit.advance(frame, self.spec.radius, self.spec.has_moon);
    }

    /// Texture set for this body, generated on first use and cached until
    /// the palette, feature class or name change.
    pub fn textures(&mut self, settings: &TextureSettings, rng: &mut impl Rng) -> &TextureSet {
        let request = SurfaceRequest {
            name: self.spec.name,
            palette: &self.palette,
            feature: self.spec.feature,
        };
        self.textures
            .get_or_generate(&request, self.spec.ring.map(|r| r.tint), settings, rng)
    }

    pub fn cached_textures(&self) -> Option<&TextureSet> {
        self.textures.current()
    }

    pub fn texture_generations(&self) -> u32 {
        self.textures.generations()
    }

    pub fn release_textures(&mut self) {
        self.textures.release();
    }

    /// Planet mesh: tilted about X, spinning about its local Y.
    pub fn body_pose(&self) -> Pose {
        Pose::at(self.pose.position).with_euler(self.tilt(), self.pose.spin, 0.0)
    }

    /// Cloud shell pose and opacity, for bodies that carry one.
    pub fn cloud_layer(&self) -> Option<(Pose, f32)> {
        self.spec.clouds.map(|opacity| {
            let pose = Pose::at(self.pose.position)
                .with_euler(self.tilt(), self.pose.cloud_spin, 0.0)
                .with_uniform_scale(CLOUD_SHELL_SCALE);
            (pose, opacity)
        })
    }

    /// Atmosphere shell pose, color and opacity.
    pub fn atmosphere(&self) -> Option<(Pose, Rgba, f32)> {
        self.spec.atmosphere.map(|atm| {
            let pose = Pose::at(self.pose.position)
                .with_euler(0.0, self.pose.atmosphere_spin, 0.0)
                .with_uniform_scale(atm.scale);
            (pose, parse_color(atm.color, Rgba::WHITE), atm.opacity)
        })
    }

    /// Ring group pose: laid flat then tilted with the body, precessing
    /// about its local Z.
    pub fn ring_pose(&self) -> Option<Pose> {
        self.spec.ring?;
        Some(Pose::at(self.pose.position).with_euler(
            FRAC_PI_2 + self.tilt(),
            0.0,
            self.pose.ring_angle,
        ))
    }

    /// Inner band, outer band and shadow disc, in planet-radius units scaled
    /// to scene units.
    pub fn ring_bands(&self) -> Option<[RingBand; 3]> {
        let ring = self.spec.ring?;
        let r = self.spec.radius;
        let color = parse_color(ring.color, Rgba::WHITE);
        Some([
            RingBand {
                inner: r * RING_INNER_BAND.0,
                outer: r * RING_INNER_BAND.1,
                color,
                opacity: ring.opacity,
                textured: true,
            },
            RingBand {
                inner: r * RING_OUTER_BAND.0,
                outer: r * RING_OUTER_BAND.1,
                color,
                opacity: ring.opacity * RING_OUTER_FADE,
                textured: true,
            },
            RingBand {
                inner: r * RING_INNER_BAND.0,
                outer: r * RING_OUTER_BAND.1,
                color: Rgba::BLACK,
                opacity: RING_SHADOW_OPACITY,
                textured: false,
            },
        ])
    }

    pub fn moon(&self) -> Option<MoonState> {
        let (offset, spin) = self.pose.moon?;
        Some(MoonState {
            pose: Pose::at(self.pose.position + offset).with_euler(0.0, spin, 0.0),
            radius: self.spec.radius * MOON_SIZE_FACTOR,
            track_radius: self.spec.radius * MOON_DISTANCE_FACTOR,
            track_opacity: MOON_TRACK_OPACITY,
        })
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::Sphere {
            center: self.pose.position,
            radius: self.spec.radius,
        }
    }

    pub fn label_anchor(&self) -> Vec3 {
        self.pose.position + Vec3::Y * (self.spec.radius + LABEL_CLEARANCE)
    }

    fn tilt(&self) -> f32 {
        self.orbit.params().axial_tilt_radians()
    }
}
