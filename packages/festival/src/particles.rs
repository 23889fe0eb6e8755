//! Decorative floating particles behind the hero banner.

use rand::Rng;

pub const PARTICLE_COUNT: usize = 20;

/// Fallback used before the real window size is known.
pub const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 720.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Motion parameters for one particle; fixed once generated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub start_y: f64,
    pub end_y: f64,
    pub start_opacity: f64,
    pub end_opacity: f64,
    pub duration_secs: f64,
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R, viewport: Viewport) -> Self {
        Self {
            x: rng.gen::<f64>() * viewport.width,
            start_y: rng.gen::<f64>() * viewport.height,
            end_y: rng.gen::<f64>() * viewport.height,
            start_opacity: random_opacity(rng),
            end_opacity: random_opacity(rng),
            duration_secs: rng.gen::<f64>() * 10.0 + 10.0,
        }
    }

    /// Inline style; the `particle` keyframes read the custom properties.
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}px; top: 0; --from-y: {:.1}px; --to-y: {:.1}px; --from-opacity: {:.2}; --to-opacity: {:.2}; animation-duration: {:.2}s;",
            self.x, self.start_y, self.end_y, self.start_opacity, self.end_opacity, self.duration_secs
        )
    }
}

fn random_opacity<R: Rng>(rng: &mut R) -> f64 {
    rng.gen::<f64>() * 0.5 + 0.3
}

pub fn scatter<R: Rng>(count: usize, viewport: Viewport, rng: &mut R) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng, viewport)).collect()
}
