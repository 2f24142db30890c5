use super::ease::Ease;

const MIN_DURATION: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// A single reversible animation from 0 to 1.
///
/// `elapsed` runs over `0..=delay + duration`. Playing forward waits out the
/// delay first; reversing skips back over it once the visible part is done.
#[derive(Debug, Clone)]
pub struct Tween {
    duration: f32,
    delay: f32,
    ease: Ease,
    elapsed: f32,
    direction: Direction,
    playing: bool,
}

impl Tween {
    /// Paused tween at progress 0.
    pub fn new(duration: f32, ease: Ease) -> Self {
        Self {
            duration: duration.max(MIN_DURATION),
            delay: 0.0,
            ease,
            elapsed: 0.0,
            direction: Direction::Forward,
            playing: false,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn total(&self) -> f32 {
        self.delay + self.duration
    }

    pub fn play(&mut self) {
        self.direction = Direction::Forward;
        self.playing = true;
    }

    pub fn reverse(&mut self) {
        self.direction = Direction::Reverse;
        self.playing = true;
    }

    pub fn tick(&mut self, dt: f32) {
        if !self.playing {
            return;
        }
        match self.direction {
            Direction::Forward => {
                self.elapsed = (self.elapsed + dt).min(self.total());
                if self.elapsed >= self.total() {
                    self.playing = false;
                }
            }
            Direction::Reverse => {
                self.elapsed = (self.elapsed - dt).max(0.0);
                if self.elapsed <= self.delay {
                    self.elapsed = 0.0;
                    self.playing = false;
                }
            }
        }
    }

    /// Position on the tween clock in seconds, delay included.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn linear_progress(&self) -> f32 {
        ((self.elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    /// Eased progress.
    pub fn progress(&self) -> f32 {
        self.ease.apply(self.linear_progress())
    }

    #[cfg(test)]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        !self.playing
            && match self.direction {
                Direction::Forward => self.elapsed >= self.total(),
                Direction::Reverse => self.elapsed <= 0.0,
            }
    }
}

/// Per-child offsets for a group of elements animated one after another.
#[derive(Debug, Clone, Copy)]
pub struct Stagger {
    pub base_delay: f32,
    pub step: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Stagger {
    pub fn new(step: f32, duration: f32, ease: Ease) -> Self {
        Self {
            base_delay: 0.0,
            step,
            duration,
            ease,
        }
    }

    pub fn delay_of(&self, index: usize) -> f32 {
        self.base_delay + index as f32 * self.step
    }

    /// Eased progress of child `index` given the parent clock.
    pub fn progress(&self, index: usize, elapsed: f32) -> f32 {
        let local = elapsed - self.delay_of(index);
        if self.duration <= f32::EPSILON {
            return if local >= 0.0 { 1.0 } else { 0.0 };
        }
        self.ease.apply(local / self.duration)
    }

    /// Clock time at which the last of `count` children is done.
    pub fn total(&self, count: usize) -> f32 {
        self.delay_of(count.saturating_sub(1)) + self.duration
    }
}
