/// Cycles through phrases, replacing the shown text one character at a time.
///
/// Each phrase takes `per_phrase` seconds to type over the previous one.
/// After the last phrase the text holds for `repeat_delay` seconds and the
/// cycle starts over from the first phrase.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    per_phrase: f32,
    repeat_delay: f32,
    elapsed: f32,
}

pub const PHRASE_SECONDS: f32 = 2.0;
pub const REPEAT_DELAY_SECONDS: f32 = 3.0;

impl Typewriter {
    pub fn new(phrases: Vec<String>, per_phrase: f32, repeat_delay: f32) -> Self {
        Self {
            phrases,
            per_phrase: per_phrase.max(0.001),
            repeat_delay: repeat_delay.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Swaps phrase `index` (used when the translated title changes).
    pub fn set_phrase(&mut self, index: usize, text: &str) {
        if let Some(p) = self.phrases.get_mut(index) {
            if p != text {
                *p = text.to_string();
            }
        }
    }

    fn cycle_len(&self) -> f32 {
        self.phrases.len() as f32 * self.per_phrase + self.repeat_delay
    }

    pub fn tick(&mut self, dt: f32) {
        let len = self.cycle_len();
        if len <= 0.0 {
            return;
        }
        self.elapsed = (self.elapsed + dt) % len;
    }

    /// Text shown right now.
    pub fn text(&self) -> String {
        let Some(last) = self.phrases.last() else {
            return String::new();
        };
        let typing = self.phrases.len() as f32 * self.per_phrase;
        if self.elapsed >= typing {
            return last.clone();
        }

        let index = ((self.elapsed / self.per_phrase) as usize).min(self.phrases.len() - 1);
        let from = if index == 0 { &self.phrases[0] } else { &self.phrases[index - 1] };
        let to = &self.phrases[index];
        let p = (self.elapsed - index as f32 * self.per_phrase) / self.per_phrase;
        replace_progressively(from, to, p)
    }
}

/// The first `p` share of `to` followed by what is left of `from`.
fn replace_progressively(from: &str, to: &str, p: f32) -> String {
    let from: Vec<char> = from.chars().collect();
    let to: Vec<char> = to.chars().collect();
    let n = from.len().max(to.len());
    let k = ((p.clamp(0.0, 1.0) * n as f32).round() as usize).min(n);

    let mut out: String = to.iter().take(k).collect();
    out.extend(from.iter().skip(k));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Typewriter {
        Typewriter::new(
            vec!["IT-INTEL".into(), "CODE WIZARD".into(), "TECH VISIONARY".into()],
            PHRASE_SECONDS,
            REPEAT_DELAY_SECONDS,
        )
    }

    #[test]
    fn test_starts_on_first_phrase() {
        assert_eq!(hero().text(), "IT-INTEL");
    }

    #[test]
    fn test_mid_replacement() {
        let mut tw = hero();
        tw.tick(3.0);
        // Halfway from "IT-INTEL" to "CODE WIZARD": 6 of 11 characters replaced
        assert_eq!(tw.text(), "CODE WEL");
    }

    #[test]
    fn test_holds_last_phrase_then_restarts() {
        let mut tw = hero();
        tw.tick(6.5);
        assert_eq!(tw.text(), "TECH VISIONARY");
        tw.tick(2.0);
        assert_eq!(tw.text(), "TECH VISIONARY");
        tw.tick(1.0);
        assert_eq!(tw.text(), "IT-INTEL");
    }

    #[test]
    fn test_set_phrase() {
        let mut tw = hero();
        tw.set_phrase(0, "ИТ-ИНТЕЛ");
        assert_eq!(tw.text(), "ИТ-ИНТЕЛ");
        tw.set_phrase(9, "ignored");
    }

    #[test]
    fn test_empty() {
        let mut tw = Typewriter::new(Vec::new(), 2.0, 0.0);
        tw.tick(1.0);
        assert_eq!(tw.text(), "");
    }
}
