//! Textile particle field
//!
//! Particles orbit their own base points and shy away from the pointer;
//! threads are wavy polylines drifting up and down behind them. The field is
//! advanced and drawn once per animation frame through a [`Painter`], so the
//! simulation itself never touches a canvas and can be stepped with any
//! clock.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use std::f64::consts::TAU;

/// Canvas area per particle
pub const AREA_PER_PARTICLE: f64 = 8000.0;
pub const MAX_PARTICLES: usize = 80;
pub const THREAD_COUNT: usize = 12;
pub const THREAD_SEGMENTS: usize = 20;

/// Pointer influence radius
pub const POINTER_RADIUS: f64 = 150.0;
/// Maximum displacement caused by the pointer
pub const POINTER_PUSH: f64 = 15.0;
/// Particles closer than this are linked
pub const LINK_DISTANCE: f64 = 120.0;
/// Orbit radius around the base point
pub const ORBIT_RADIUS: f64 = 30.0;

/// Frame dimming colour; painting it instead of clearing leaves trails
pub const FADE_FILL: &str = "rgba(51, 50, 89, 0.1)";

/// Where the pointer is parked when it leaves the canvas
pub const PARKED_POINTER: Point = Point {
    x: -1000.0,
    y: -1000.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Berry, plum, sage, taupe, magenta
pub const PALETTE: [Rgb; 5] = [
    Rgb { r: 140, g: 43, b: 89 },
    Rgb { r: 87, g: 49, b: 90 },
    Rgb { r: 190, g: 191, b: 149 },
    Rgb { r: 140, g: 132, b: 116 },
    Rgb { r: 184, g: 56, b: 120 },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub base: Point,
    pub position: Point,
    pub angle: f64,
    pub speed: f64,
    pub radius: f64,
    pub color: Rgb,
}

impl Particle {
    /// Advance the orbit one tick and apply pointer repulsion
    pub fn update(&mut self, pointer: Point) {
        self.angle += self.speed;
        self.position = Point::new(
            self.base.x + self.angle.sin() * ORBIT_RADIUS,
            self.base.y + (self.angle * 0.7).cos() * ORBIT_RADIUS,
        );

        let dx = pointer.x - self.position.x;
        let dy = pointer.y - self.position.y;
        let distance = dx.hypot(dy);

        if distance < POINTER_RADIUS {
            let force = (POINTER_RADIUS - distance) / POINTER_RADIUS;
            let angle = dy.atan2(dx);
            self.position.x -= angle.cos() * force * POINTER_PUSH;
            self.position.y -= angle.sin() * force * POINTER_PUSH;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThreadPoint {
    pub x: f64,
    pub base_y: f64,
    pub offset: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Thread {
    pub points: Vec<ThreadPoint>,
    pub color: Rgb,
    pub speed: f64,
    pub amplitude: f64,
}

/// Quadratic curve segment: control point then end point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadTo {
    pub control: Point,
    pub end: Point,
}

/// A thread resolved for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadPath {
    pub start: Point,
    pub curves: Vec<QuadTo>,
}

impl Thread {
    fn animated_y(&self, point: &ThreadPoint, time: f64) -> f64 {
        point.base_y + (time * self.speed + point.offset).sin() * self.amplitude
    }

    /// Smooth path through the animated points: each segment curves
    /// through the previous point toward the midpoint of the pair.
    pub fn path(&self, time: f64) -> Option<ThreadPath> {
        let first = self.points.first()?;
        let start = Point::new(first.x, self.animated_y(first, time));

        let curves = self
            .points
            .windows(2)
            .map(|pair| {
                let prev = Point::new(pair[0].x, self.animated_y(&pair[0], time));
                let current = Point::new(pair[1].x, self.animated_y(&pair[1], time));
                QuadTo {
                    control: prev,
                    end: Point::new((prev.x + current.x) / 2.0, (prev.y + current.y) / 2.0),
                }
            })
            .collect();

        Some(ThreadPath { start, curves })
    }
}

/// Drawing backend for one frame
pub trait Painter {
    /// Cover the whole surface with a translucent fill
    fn fade(&mut self, width: f64, height: f64, fill: &str);
    /// Stroke a thread (2px, round caps, alpha 0.15)
    fn thread(&mut self, path: &ThreadPath, color: Rgb);
    /// 1px line between two linked particles
    fn link(&mut self, from: Point, to: Point, color: Rgb, alpha: f64);
    /// Radial halo of `radius * 3` plus a solid core
    fn particle(&mut self, at: Point, radius: f64, color: Rgb);
}

/// Number of particles for a surface
pub fn particle_count(width: f64, height: f64) -> usize {
    let count = (width * height / AREA_PER_PARTICLE).floor();
    if count <= 0.0 {
        0
    } else {
        (count as usize).min(MAX_PARTICLES)
    }
}

/// Link opacity for two particles `distance` apart, if linked
pub fn link_alpha(distance: f64) -> Option<f64> {
    (distance < LINK_DISTANCE).then(|| (1.0 - distance / LINK_DISTANCE) * 0.2)
}

/// The whole animated population
#[derive(Debug, Clone)]
pub struct TextileField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    threads: Vec<Thread>,
    pointer: Point,
    rng: SmallRng,
}

impl TextileField {
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::new(),
            threads: Vec::new(),
            pointer: PARKED_POINTER,
            rng: SmallRng::seed_from_u64(seed),
        };
        field.populate();
        field
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn threads(&self) -> &[Thread] {
        &self.threads
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn set_pointer(&mut self, pointer: Point) {
        self.pointer = pointer;
    }

    pub fn park_pointer(&mut self) {
        self.pointer = PARKED_POINTER;
    }

    /// New dimensions; both populations are regenerated from scratch
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    fn populate(&mut self) {
        let count = particle_count(self.width, self.height);
        let particles = (0..count).map(|_| self.random_particle()).collect();
        let threads = (0..THREAD_COUNT).map(|_| self.random_thread()).collect();
        self.particles = particles;
        self.threads = threads;
    }

    fn random_color(&mut self) -> Rgb {
        PALETTE[self.rng.gen_range(0..PALETTE.len())]
    }

    fn random_particle(&mut self) -> Particle {
        let color = self.random_color();
        let position = Point::new(
            self.rng.gen_range(0.0..1.0) * self.width,
            self.rng.gen_range(0.0..1.0) * self.height,
        );
        Particle {
            base: Point::new(
                self.rng.gen_range(0.0..1.0) * self.width,
                self.rng.gen_range(0.0..1.0) * self.height,
            ),
            position,
            angle: self.rng.gen_range(0.0..TAU),
            speed: self.rng.gen_range(0.01..0.03),
            radius: self.rng.gen_range(1.0..3.0),
            color,
        }
    }

    fn random_thread(&mut self) -> Thread {
        let color = self.random_color();
        let step = self.width / THREAD_SEGMENTS as f64;

        let points = (0..THREAD_SEGMENTS)
            .map(|j| {
                let j = j as f64;
                ThreadPoint {
                    x: step * j + self.rng.gen_range(0.0..50.0),
                    base_y: self.height * 0.3
                        + (j * 0.5).sin() * 100.0
                        + self.rng.gen_range(0.0..1.0) * self.height * 0.4,
                    offset: self.rng.gen_range(0.0..TAU),
                }
            })
            .collect();

        Thread {
            points,
            color,
            speed: self.rng.gen_range(0.01..0.03),
            amplitude: self.rng.gen_range(10.0..30.0),
        }
    }

    /// Draw one frame at `time` seconds and advance the particles.
    ///
    /// Layering: fade, threads, links (positions from the previous frame),
    /// then each particle is moved and drawn.
    pub fn frame<P: Painter>(&mut self, time: f64, painter: &mut P) {
        painter.fade(self.width, self.height, FADE_FILL);

        for thread in &self.threads {
            if let Some(path) = thread.path(time) {
                painter.thread(&path, thread.color);
            }
        }

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                if let Some(alpha) = link_alpha(a.position.distance(b.position)) {
                    painter.link(a.position, b.position, a.color, alpha);
                }
            }
        }

        let pointer = self.pointer;
        for particle in &mut self.particles {
            particle.update(pointer);
            painter.particle(particle.position, particle.radius, particle.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Painter that only counts calls
    #[derive(Default)]
    struct Tally {
        fades: usize,
        threads: usize,
        links: Vec<f64>,
        particles: usize,
        order: Vec<&'static str>,
    }

    impl Painter for Tally {
        fn fade(&mut self, _width: f64, _height: f64, fill: &str) {
            assert_eq!(fill, FADE_FILL);
            self.fades += 1;
            self.order.push("fade");
        }

        fn thread(&mut self, path: &ThreadPath, _color: Rgb) {
            assert_eq!(path.curves.len(), THREAD_SEGMENTS - 1);
            self.threads += 1;
            self.order.push("thread");
        }

        fn link(&mut self, _from: Point, _to: Point, _color: Rgb, alpha: f64) {
            self.links.push(alpha);
            self.order.push("link");
        }

        fn particle(&mut self, _at: Point, _radius: f64, _color: Rgb) {
            self.particles += 1;
            self.order.push("particle");
        }
    }

    fn particle_at(x: f64, y: f64) -> Particle {
        Particle {
            base: Point::new(x, y),
            position: Point::new(x, y),
            // Zero speed keeps the orbit at base + (0, 30)
            angle: 0.0,
            speed: 0.0,
            radius: 2.0,
            color: PALETTE[0],
        }
    }

    #[test]
    fn test_particle_count_scales_and_caps() {
        assert_eq!(particle_count(400.0, 200.0), 10);
        assert_eq!(particle_count(1920.0, 1080.0), MAX_PARTICLES);
        assert_eq!(particle_count(50.0, 50.0), 0);
        assert_eq!(particle_count(0.0, 0.0), 0);
    }

    #[test]
    fn test_new_field_populations() {
        let field = TextileField::new(800.0, 400.0, 7);
        assert_eq!(field.particles().len(), 40);
        assert_eq!(field.threads().len(), THREAD_COUNT);
        assert!(field.threads().iter().all(|t| t.points.len() == THREAD_SEGMENTS));
        assert_eq!(field.pointer(), PARKED_POINTER);
    }

    #[test]
    fn test_random_ranges() {
        let field = TextileField::new(1200.0, 800.0, 99);
        for p in field.particles() {
            assert!((0.01..0.03).contains(&p.speed));
            assert!((1.0..3.0).contains(&p.radius));
            assert!(PALETTE.contains(&p.color));
        }
        for t in field.threads() {
            assert!((10.0..30.0).contains(&t.amplitude));
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = TextileField::new(640.0, 480.0, 1234);
        let b = TextileField::new(640.0, 480.0, 1234);
        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.threads(), b.threads());
    }

    #[test]
    fn test_resize_regenerates() {
        let mut field = TextileField::new(400.0, 200.0, 5);
        let before = field.particles().to_vec();

        field.resize(800.0, 400.0);

        assert_eq!(field.width(), 800.0);
        assert_eq!(field.particles().len(), 40);
        assert_ne!(&field.particles()[..before.len()], &before[..]);
    }

    #[test]
    fn test_orbit_without_pointer() {
        let mut particle = particle_at(100.0, 100.0);
        particle.speed = 0.5;
        particle.update(PARKED_POINTER);

        assert_eq!(particle.angle, 0.5);
        assert!((particle.position.x - (100.0 + 0.5_f64.sin() * 30.0)).abs() < 1e-9);
        assert!((particle.position.y - (100.0 + 0.35_f64.cos() * 30.0)).abs() < 1e-9);
    }

    #[test]
    fn test_pointer_pushes_particle_away() {
        let mut particle = particle_at(100.0, 100.0);
        // Orbit puts it at (100, 130); pointer 50px to its right
        particle.update(Point::new(150.0, 130.0));

        let expected_push = (150.0 - 50.0) / 150.0 * POINTER_PUSH;
        assert!((particle.position.x - (100.0 - expected_push)).abs() < 1e-9);
        assert!((particle.position.y - 130.0).abs() < 1e-9);
    }

    #[test]
    fn test_far_pointer_has_no_effect() {
        let mut near = particle_at(100.0, 100.0);
        let mut far = particle_at(100.0, 100.0);
        near.update(PARKED_POINTER);
        far.update(Point::new(100.0, 130.0 + POINTER_RADIUS + 1.0));
        assert_eq!(near.position, far.position);
    }

    #[test]
    fn test_link_alpha() {
        assert_eq!(link_alpha(0.0), Some(0.2));
        assert!((link_alpha(60.0).unwrap() - 0.1).abs() < 1e-12);
        assert_eq!(link_alpha(120.0), None);
        assert_eq!(link_alpha(500.0), None);
    }

    #[test]
    fn test_thread_path_midpoints() {
        let thread = Thread {
            points: vec![
                ThreadPoint { x: 0.0, base_y: 10.0, offset: 0.0 },
                ThreadPoint { x: 20.0, base_y: 30.0, offset: 0.0 },
                ThreadPoint { x: 40.0, base_y: 10.0, offset: 0.0 },
            ],
            color: PALETTE[1],
            speed: 0.0,
            amplitude: 10.0,
        };

        let path = thread.path(0.0).unwrap();
        assert_eq!(path.start, Point::new(0.0, 10.0));
        assert_eq!(path.curves.len(), 2);
        assert_eq!(path.curves[0].control, Point::new(0.0, 10.0));
        assert_eq!(path.curves[0].end, Point::new(10.0, 20.0));
        assert_eq!(path.curves[1].control, Point::new(20.0, 30.0));
        assert_eq!(path.curves[1].end, Point::new(30.0, 20.0));
    }

    #[test]
    fn test_thread_oscillates_with_time() {
        let thread = Thread {
            points: vec![ThreadPoint { x: 0.0, base_y: 100.0, offset: 0.0 }],
            color: PALETTE[2],
            speed: 1.0,
            amplitude: 20.0,
        };
        let quarter = std::f64::consts::FRAC_PI_2;
        assert!((thread.path(quarter).unwrap().start.y - 120.0).abs() < 1e-9);
        assert!(thread.path(0.0).unwrap().curves.is_empty());
    }

    #[test]
    fn test_frame_layering() {
        let mut field = TextileField::new(400.0, 200.0, 11);
        let mut tally = Tally::default();

        field.frame(1.0, &mut tally);

        assert_eq!(tally.fades, 1);
        assert_eq!(tally.threads, THREAD_COUNT);
        assert_eq!(tally.particles, 10);
        assert_eq!(tally.order.first(), Some(&"fade"));
        assert_eq!(tally.order.last(), Some(&"particle"));

        let first_particle = tally.order.iter().position(|s| *s == "particle").unwrap();
        assert!(tally.order[first_particle..].iter().all(|s| *s == "particle"));
        assert!(tally.links.iter().all(|a| *a > 0.0 && *a <= 0.2));
    }

    #[test]
    fn test_pointer_tracking() {
        let mut field = TextileField::new(400.0, 200.0, 3);
        field.set_pointer(Point::new(20.0, 30.0));
        assert_eq!(field.pointer(), Point::new(20.0, 30.0));
        field.park_pointer();
        assert_eq!(field.pointer(), PARKED_POINTER);
    }
}
