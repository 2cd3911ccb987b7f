//! Falling confetti for the win celebration.
//!
//! Pure particle integration; drawing is left to the caller.

use rand::Rng;

use crate::constants::{CONFETTI_DURATION_MS, CONFETTI_PARTICLE_COUNT};

const GRAVITY: f64 = 0.08;
const DRAG: f64 = 0.998;
const FADE_START: f64 = 0.7;
const OFFSCREEN_MARGIN: f64 = 50.0;

pub const CONFETTI_COLORS: [&str; 12] = [
    "#e11d48", "#22c55e", "#3b82f6", "#f59e0b", "#8b5cf6", "#ef4444",
    "#ec4899", "#10b981", "#06b6d4", "#fbbf24", "#a78bfa", "#f43f5e",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfettiShape {
    Rect,
    Triangle,
    Circle,
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub rotation: f64,
    pub spin: f64,
    pub color: &'static str,
    pub shape: ConfettiShape,
    pub opacity: f64,
}

impl Particle {
    fn spawn<R: Rng>(rng: &mut R, width: f64) -> Self {
        let shape = if rng.gen_bool(0.35) {
            ConfettiShape::Rect
        } else if rng.gen_bool(0.7) {
            ConfettiShape::Triangle
        } else {
            ConfettiShape::Circle
        };
        Self {
            x: rng.gen_range(0.0..width.max(1.0)),
            y: -20.0 - rng.gen_range(0.0..100.0),
            vx: (rng.gen::<f64>() - 0.5) * 1.2,
            vy: 1.0 + rng.gen_range(0.0..2.0),
            size: 8.0 + rng.gen_range(0.0..12.0),
            rotation: rng.gen_range(0.0..std::f64::consts::TAU),
            spin: (rng.gen::<f64>() - 0.5) * 0.15,
            color: CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())],
            shape,
            opacity: 0.8 + rng.gen_range(0.0..0.2),
        }
    }

    pub fn is_visible(&self, width: f64) -> bool {
        self.x >= -OFFSCREEN_MARGIN && self.x <= width + OFFSCREEN_MARGIN && self.y >= -OFFSCREEN_MARGIN
    }
}

#[derive(Debug, Clone)]
pub struct ConfettiBurst {
    pub particles: Vec<Particle>,
    width: f64,
    height: f64,
    started_at_ms: f64,
    duration_ms: f64,
}

impl ConfettiBurst {
    pub fn new<R: Rng>(rng: &mut R, width: f64, height: f64, now_ms: f64) -> Self {
        Self::with_count(rng, width, height, now_ms, CONFETTI_PARTICLE_COUNT)
    }

    pub fn with_count<R: Rng>(rng: &mut R, width: f64, height: f64, now_ms: f64, count: usize) -> Self {
        let particles = (0..count).map(|_| Particle::spawn(rng, width)).collect();
        Self {
            particles,
            width,
            height,
            started_at_ms: now_ms,
            duration_ms: CONFETTI_DURATION_MS,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Follow a viewport resize. Particles keep their positions; respawns
    /// and the fall-out line use the new bounds.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms - self.started_at_ms > self.duration_ms
    }

    /// Global alpha: 1 until 70% of the lifetime, then linearly down to 0.
    pub fn fade_alpha(&self, now_ms: f64) -> f64 {
        let elapsed = now_ms - self.started_at_ms;
        let fade_start = self.duration_ms * FADE_START;
        if elapsed <= fade_start {
            1.0
        } else {
            (1.0 - (elapsed - fade_start) / (self.duration_ms - fade_start)).clamp(0.0, 1.0)
        }
    }

    /// Advance one frame. Returns false once the burst has expired.
    pub fn step<R: Rng>(&mut self, rng: &mut R, now_ms: f64) -> bool {
        if self.is_finished(now_ms) {
            return false;
        }
        for p in &mut self.particles {
            p.vx *= DRAG;
            p.vy = p.vy * DRAG + GRAVITY;
            p.x += p.vx;
            p.y += p.vy;
            p.rotation += p.spin;

            if p.y > self.height + OFFSCREEN_MARGIN {
                p.y = -20.0 - rng.gen_range(0.0..50.0);
                p.x = rng.gen_range(0.0..self.width.max(1.0));
                p.vx = (rng.gen::<f64>() - 0.5) * 1.5;
                p.vy = 1.0 + rng.gen_range(0.0..2.0);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_burst_spawns_above_screen() {
        let mut rng = StdRng::seed_from_u64(7);
        let burst = ConfettiBurst::new(&mut rng, 800.0, 600.0, 0.0);
        assert_eq!(burst.particles.len(), CONFETTI_PARTICLE_COUNT);
        assert!(burst.particles.iter().all(|p| p.y < 0.0 && p.x >= 0.0 && p.x < 800.0));
    }

    #[test]
    fn test_fade_and_expiry() {
        let mut rng = StdRng::seed_from_u64(7);
        let burst = ConfettiBurst::with_count(&mut rng, 100.0, 100.0, 1000.0, 1);
        assert_eq!(burst.fade_alpha(1000.0 + 2800.0), 1.0);
        assert!((burst.fade_alpha(1000.0 + 3400.0) - 0.5).abs() < 1e-9);
        assert_eq!(burst.fade_alpha(1000.0 + 4000.0), 0.0);
        assert!(!burst.is_finished(5000.0));
        assert!(burst.is_finished(5000.1));
    }

    #[test]
    fn test_fallen_particles_respawn_at_top() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut burst = ConfettiBurst::with_count(&mut rng, 200.0, 100.0, 0.0, 1);
        burst.particles[0].y = 151.0;
        burst.particles[0].vy = 0.0;
        assert!(burst.step(&mut rng, 16.0));
        assert!(burst.particles[0].y < 0.0);
    }

    #[test]
    fn test_resize_moves_fall_out_line() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut burst = ConfettiBurst::with_count(&mut rng, 200.0, 100.0, 0.0, 1);
        burst.resize(400.0, 500.0);
        assert_eq!((burst.width(), burst.height()), (400.0, 500.0));

        // below the old line, above the new one
        burst.particles[0].y = 300.0;
        burst.particles[0].vy = 0.0;
        assert!(burst.step(&mut rng, 16.0));
        assert!(burst.particles[0].y > 300.0);

        burst.particles[0].y = 551.0;
        assert!(burst.step(&mut rng, 32.0));
        let p = &burst.particles[0];
        assert!(p.y < 0.0);
        assert!(p.x >= 0.0 && p.x < 400.0);
    }

    #[test]
    fn test_step_after_expiry_stops() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut burst = ConfettiBurst::with_count(&mut rng, 200.0, 100.0, 0.0, 3);
        assert!(!burst.step(&mut rng, CONFETTI_DURATION_MS + 1.0));
    }
}
