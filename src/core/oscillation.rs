//! Looping radius animation
//!
//! An oscillation is attached once and never stepped: the current radius is
//! a pure function of time, evaluated by whoever paints the frame.

use serde::{Deserialize, Serialize};

/// Triangle wave r -> 0 -> r over `period` seconds, repeating forever
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Oscillation {
    /// Radius at the start and end of each cycle
    pub base_radius: f32,
    /// Seconds per full cycle
    pub period: f32,
    /// App-relative time (seconds) the animation was attached
    pub started_at: f64,
}

impl Oscillation {
    pub fn new(base_radius: f32, period: f32, started_at: f64) -> Self {
        Self {
            base_radius,
            period,
            started_at,
        }
    }

    /// Keyframe values of one cycle, evenly spaced over the period
    pub fn keyframes(&self) -> [f32; 3] {
        [self.base_radius, 0.0, self.base_radius]
    }

    /// Position within the current cycle in [0, 1)
    pub fn phase_at(&self, now: f64) -> f64 {
        let period = self.period as f64;
        if period <= 0.0 {
            return 0.0;
        }
        let elapsed = (now - self.started_at).max(0.0);
        (elapsed % period) / period
    }

    /// Interpolated radius at app-relative time `now`
    pub fn radius_at(&self, now: f64) -> f32 {
        let phase = self.phase_at(now);
        // Distance from the nearest cycle boundary, 0 at the ends, 1 at the middle
        let depth = if phase < 0.5 { phase * 2.0 } else { (1.0 - phase) * 2.0 };
        (self.base_radius as f64 * (1.0 - depth)) as f32
    }

    /// Completed cycles since attach
    pub fn cycles_at(&self, now: f64) -> u64 {
        let period = self.period as f64;
        if period <= 0.0 || now <= self.started_at {
            return 0;
        }
        ((now - self.started_at) / period).floor() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_keyframes() {
        let osc = Oscillation::new(5.0, 4.0, 0.0);
        assert_eq!(osc.keyframes(), [5.0, 0.0, 5.0]);
    }

    #[test]
    fn test_triangle_wave_over_one_period() {
        let osc = Oscillation::new(5.0, 4.0, 0.0);
        assert!(close(osc.radius_at(0.0), 5.0));
        assert!(close(osc.radius_at(1.0), 2.5));
        assert!(close(osc.radius_at(2.0), 0.0));
        assert!(close(osc.radius_at(3.0), 2.5));
        assert!(close(osc.radius_at(3.999), 5.0 - 5.0 * 0.0005));
        assert!(close(osc.radius_at(4.0), 5.0));
    }

    #[test]
    fn test_repeats_indefinitely() {
        let osc = Oscillation::new(5.0, 4.0, 0.0);
        for cycle in [1.0, 10.0, 1000.0] {
            let base = cycle * 4.0;
            assert!(close(osc.radius_at(base), 5.0));
            assert!(close(osc.radius_at(base + 2.0), 0.0));
            assert!(close(osc.radius_at(base + 1.0), 2.5));
        }
        assert_eq!(osc.cycles_at(9.0), 2);
    }

    #[test]
    fn test_phase_starts_at_attach_time() {
        let a = Oscillation::new(2.0, 3.0, 0.0);
        let b = Oscillation::new(2.0, 3.0, 1.5);

        // b lags a by half a period
        assert!(close(a.radius_at(1.5), 0.0));
        assert!(close(b.radius_at(1.5), 2.0));
        assert!(close(b.radius_at(3.0), 0.0));
    }

    #[test]
    fn test_before_attach_is_full_radius() {
        let osc = Oscillation::new(3.0, 4.0, 10.0);
        assert!(close(osc.radius_at(5.0), 3.0));
        assert_eq!(osc.cycles_at(5.0), 0);
    }

    #[test]
    fn test_radius_never_exceeds_base() {
        let osc = Oscillation::new(1.2, 3.7, 0.25);
        for i in 0..500 {
            let r = osc.radius_at(i as f64 * 0.037);
            assert!((0.0..=1.2 + 1e-6).contains(&r), "r={} at step {}", r, i);
        }
    }
}
