//! Trailing cursor effect drawn under the mouse pointer.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::utils::color::Rgb;
use super::style_env::StyleEnvironment;

const TRAIL_LEN: usize = 5;
/// Share of the distance to the pointer covered per 60 Hz frame.
const FOLLOW: f32 = 0.1;
const NORMAL: Rgb = Rgb(0x00, 0xff, 0x88);
const PRESSED: Rgb = Rgb(0xff, 0x00, 0x88);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}

#[derive(Debug, Default)]
pub struct CursorTrail {
    pointer: Option<(f32, f32)>,
    pos: (f32, f32),
    pressed: bool,
}

impl CursorTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer moved to cell `(x, y)`. The first sighting places the cursor
    /// directly under it.
    pub fn set_target(&mut self, x: u16, y: u16) {
        let p = (x as f32, y as f32);
        if self.pointer.is_none() {
            self.pos = p;
        }
        self.pointer = Some(p);
    }

    pub fn press(&mut self) {
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    #[cfg(test)]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Pointer left the window.
    pub fn hide(&mut self) {
        self.pointer = None;
        self.pressed = false;
    }

    pub fn is_visible(&self) -> bool {
        self.pointer.is_some()
    }

    #[cfg(test)]
    pub fn position(&self) -> (f32, f32) {
        self.pos
    }

    pub fn frame(&mut self, dt: f32) {
        let Some((tx, ty)) = self.pointer else {
            return;
        };
        let k = 1.0 - (1.0 - FOLLOW).powf(dt * 60.0);
        self.pos.0 += (tx - self.pos.0) * k;
        self.pos.1 += (ty - self.pos.1) * k;
    }

    /// Trail dots between the pointer and the lagging cursor, nearest first.
    pub fn trail(&self) -> Vec<Dot> {
        let Some((mx, my)) = self.pointer else {
            return Vec::new();
        };
        (0..TRAIL_LEN)
            .map(|i| {
                let delay = (i + 1) as f32 * 0.05;
                Dot {
                    x: mx - (mx - self.pos.0) * delay,
                    y: my - (my - self.pos.1) * delay,
                    opacity: 1.0 - delay,
                }
            })
            .collect()
    }

    fn color(&self) -> Rgb {
        if self.pressed {
            PRESSED
        } else {
            NORMAL
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, env: &StyleEnvironment) {
        if !self.is_visible() {
            return;
        }
        let color = self.color();
        let mut put = |x: f32, y: f32, symbol: &str, opacity: f32| {
            let (x, y) = (x.round(), y.round());
            if x < area.x as f32 || y < area.y as f32 {
                return;
            }
            let (x, y) = (x as u16, y as u16);
            if x >= area.right() || y >= area.bottom() {
                return;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol);
                cell.set_fg(env.fade_rgb(color, opacity));
            }
        };
        for dot in self.trail().iter().rev() {
            put(dot.x, dot.y, "•", dot.opacity);
        }
        put(self.pos.0, self.pos.1, "◉", 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_follows_with_easing() {
        let mut cursor = CursorTrail::new();
        cursor.set_target(0, 0);
        cursor.set_target(10, 0);
        cursor.frame(1.0 / 60.0);
        let (x, _) = cursor.position();
        assert!((x - 1.0).abs() < 1e-3);

        for _ in 0..400 {
            cursor.frame(1.0 / 60.0);
        }
        assert!((cursor.position().0 - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_trail_delays_and_opacity() {
        let mut cursor = CursorTrail::new();
        cursor.set_target(0, 0);
        cursor.set_target(20, 0);
        let trail = cursor.trail();
        assert_eq!(trail.len(), 5);
        assert!((trail[0].x - 19.0).abs() < 1e-3);
        assert!((trail[0].opacity - 0.95).abs() < 1e-3);
        assert!((trail[4].x - 15.0).abs() < 1e-3);
        assert!((trail[4].opacity - 0.75).abs() < 1e-3);
    }

    #[test]
    fn test_hidden_cursor_draws_nothing() {
        let mut cursor = CursorTrail::new();
        cursor.set_target(3, 3);
        cursor.press();
        cursor.hide();
        assert!(!cursor.is_visible());
        assert!(!cursor.is_pressed());
        assert!(cursor.trail().is_empty());

        let area = Rect::new(0, 0, 10, 10);
        let mut buf = Buffer::empty(area);
        cursor.render(area, &mut buf, &StyleEnvironment::new(true));
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn test_pressed_colour() {
        let mut cursor = CursorTrail::new();
        cursor.set_target(2, 2);
        let area = Rect::new(0, 0, 5, 5);
        let env = StyleEnvironment::new(true);

        let mut buf = Buffer::empty(area);
        cursor.render(area, &mut buf, &env);
        let cell = buf.cell((2, 2)).unwrap();
        assert_eq!(cell.symbol(), "◉");
        assert_eq!(cell.fg, Color::Rgb(0x00, 0xff, 0x88));

        cursor.press();
        let mut buf = Buffer::empty(area);
        cursor.render(area, &mut buf, &env);
        assert_eq!(buf.cell((2, 2)).unwrap().fg, Color::Rgb(0xff, 0x00, 0x88));
    }
}
