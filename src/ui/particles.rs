//! Drifting backdrop particles.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::utils::color;
use super::style_env::{self, StyleEnvironment};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
}

/// `v` wrapped into `0..limit`.
fn wrap(v: f32, limit: f32) -> f32 {
    let r = v.rem_euclid(limit);
    // rem_euclid can round up to `limit` for tiny negative inputs
    if r >= limit {
        0.0
    } else {
        r
    }
}

pub struct Particles {
    rng: StdRng,
    count: usize,
    width: u16,
    height: u16,
    items: Vec<Particle>,
}

impl Particles {
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, StdRng::from_entropy())
    }

    #[cfg(test)]
    pub fn seeded(count: usize, seed: u64) -> Self {
        Self::with_rng(count, StdRng::seed_from_u64(seed))
    }

    fn with_rng(count: usize, rng: StdRng) -> Self {
        Self {
            rng,
            count,
            width: 0,
            height: 0,
            items: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn spawn(&mut self) -> Particle {
        Particle {
            x: self.rng.gen_range(0.0..self.width.max(1) as f32),
            y: self.rng.gen_range(0.0..self.height.max(1) as f32),
            // cells per second; horizontal drift is faster since cells are tall
            vx: self.rng.gen_range(-1.5..1.5),
            vy: self.rng.gen_range(-0.75..0.75),
        }
    }

    /// Scatters the particles again when the drawing area changes size.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (width, height) == (self.width, self.height) && self.items.len() == self.count {
            return;
        }
        self.width = width;
        self.height = height;
        let items = (0..self.count).map(|_| self.spawn()).collect();
        self.items = items;
    }

    pub fn tick(&mut self, dt: f32) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let (w, h) = (self.width as f32, self.height as f32);
        for p in &mut self.items {
            p.x = wrap(p.x + p.vx * dt, w);
            p.y = wrap(p.y + p.vy * dt, h);
        }
    }

    /// Draws into blank cells of `area` only, so text is never covered.
    pub fn render(&self, area: Rect, buf: &mut Buffer, env: &StyleEnvironment) {
        let opacity = env.property(style_env::CARD).map(color::alpha).unwrap_or(0.1);
        let fg = env.faded(style_env::PRIMARY, opacity.max(0.15));
        for p in &self.items {
            let x = area.x + (p.x as u16).min(area.width.saturating_sub(1));
            let y = area.y + (p.y as u16).min(area.height.saturating_sub(1));
            if let Some(cell) = buf.cell_mut((x, y)) {
                if cell.symbol() == " " {
                    cell.set_symbol("·");
                    cell.set_fg(fg);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_spawns_inside_area() {
        let mut particles = Particles::seeded(30, 7);
        assert!(particles.is_empty());
        particles.resize(40, 10);
        assert_eq!(particles.len(), 30);
        assert!(particles.items.iter().all(|p| p.x < 40.0 && p.y < 10.0));
    }

    #[test]
    fn test_particles_wrap_at_edges() {
        let mut particles = Particles::seeded(10, 1);
        particles.resize(20, 5);
        for _ in 0..1000 {
            particles.tick(0.1);
        }
        assert!(particles
            .items
            .iter()
            .all(|p| (0.0..20.0).contains(&p.x) && (0.0..5.0).contains(&p.y)));
    }

    #[test]
    fn test_text_is_never_covered() {
        let mut particles = Particles::seeded(200, 3);
        particles.resize(10, 2);
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 0, "ABCDEFGHIJ", ratatui::style::Style::default());
        particles.render(area, &mut buf, &StyleEnvironment::new(true));

        let top: String = (0..10).map(|x| buf.cell((x, 0)).unwrap().symbol().to_string()).collect();
        assert_eq!(top, "ABCDEFGHIJ");
        let bottom: String = (0..10).map(|x| buf.cell((x, 1)).unwrap().symbol().to_string()).collect();
        assert!(bottom.contains('·'));
    }

    #[test]
    fn test_zero_count_disables_backdrop() {
        let mut particles = Particles::seeded(0, 3);
        particles.resize(10, 10);
        particles.tick(1.0);
        assert!(particles.is_empty());
    }
}
