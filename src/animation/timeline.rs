use super::ease::Ease;

/// Where a track starts relative to the ones before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Right after the previous track ends.
    After,
    /// Relative to the previous track's end: `"-=1"` is `Relative(-1.0)`.
    Relative(f32),
}

#[derive(Debug, Clone)]
struct Track {
    start: f32,
    duration: f32,
    ease: Ease,
}

/// Sequence of overlapping tracks sharing one clock.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    tracks: Vec<Track>,
    delay: f32,
    elapsed: f32,
    playing: bool,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Appends a track and returns its index.
    pub fn add(&mut self, duration: f32, ease: Ease, position: Position) -> usize {
        let prev_end = self.tracks.last().map(|t| t.start + t.duration).unwrap_or(0.0);
        let start = match position {
            Position::After => prev_end,
            Position::Relative(offset) => prev_end + offset,
        }
        .max(0.0);
        self.tracks.push(Track { start, duration: duration.max(0.001), ease });
        self.tracks.len() - 1
    }

    /// Builder form of [`add`](Self::add).
    pub fn then(mut self, duration: f32, ease: Ease, position: Position) -> Self {
        self.add(duration, ease, position);
        self
    }

    pub fn duration(&self) -> f32 {
        self.tracks
            .iter()
            .map(|t| t.start + t.duration)
            .fold(0.0, f32::max)
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn tick(&mut self, dt: f32) {
        if !self.playing {
            return;
        }
        let end = self.delay + self.duration();
        self.elapsed = (self.elapsed + dt).min(end);
        if self.elapsed >= end {
            self.playing = false;
        }
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.delay + self.duration()
    }

    /// Eased progress of `track` on the timeline's own clock; unknown
    /// indices report 1.
    pub fn progress_of(&self, track: usize) -> f32 {
        self.progress_at(track, self.elapsed)
    }

    /// Eased progress of `track` at clock time `elapsed` (delay included),
    /// for timelines driven by an external clock such as an entrance.
    pub fn progress_at(&self, track: usize, elapsed: f32) -> f32 {
        let Some(t) = self.tracks.get(track) else {
            return 1.0;
        };
        let local = elapsed - self.delay - t.start;
        t.ease.apply(local / t.duration)
    }
}
