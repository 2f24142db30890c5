/// Easing curves used by the page choreography.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Ease {
    /// GSAP `"none"`.
    #[default]
    Linear,
    /// GSAP `power2.out` (cubic).
    Power2Out,
    /// GSAP `power3.out` (quartic).
    Power3Out,
    /// GSAP `back.out(s)`: overshoots then settles.
    BackOut(f32),
    /// framer-motion `easeOut`.
    EaseOut,
}

impl Ease {
    /// Maps linear progress `t` (clamped to 0..1) onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
            Ease::EaseOut => 1.0 - (1.0 - t).powi(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 5] = [
        Ease::Linear,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::BackOut(1.7),
        Ease::EaseOut,
    ];

    #[test]
    fn test_endpoints() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-6, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{ease:?} at 1");
        }
    }

    #[test]
    fn test_clamps_input() {
        assert_eq!(Ease::Linear.apply(-3.0), 0.0);
        assert_eq!(Ease::Linear.apply(7.0), 1.0);
    }

    #[test]
    fn test_back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::BackOut(1.7).apply(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_out_curves_lead_linear() {
        for ease in [Ease::Power2Out, Ease::Power3Out, Ease::EaseOut] {
            assert!(ease.apply(0.5) > 0.5);
        }
    }
}
