use std::f64::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::prizes::Prize;

// Constants for the spin animation
pub const WHEEL_SEGMENTS: usize = 8; // Total number of segments in the wheel
pub const MIN_SPINS: f64 = 5.0; // Minimum number of full rotations
pub const MAX_SPINS: f64 = 8.0; // Maximum number of full rotations
pub const SPIN_DURATION_MS: f64 = 5000.0; // Duration of the spin animation
pub const SETTLE_DELAY_MS: f64 = 500.0; // Pause after the wheel stops, before the result is reported
pub const FALLBACK_WIN_COLOR: &str = "#28a745"; // Used when the winning prize is missing from the catalog

/// One pie-slice of the wheel. Exactly one segment per spin is the
/// winning one, and it always sits at index 0.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub color: String,
    pub is_winning: bool,
}

/// Easing function for smooth deceleration
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Builds the 8 display segments for one spin. The winning segment is
/// placed at index 0 with the prize's catalog color (or the fallback
/// color when the name matches no catalog entry); the remaining slots
/// are filled by sampling the catalog with replacement, purely for
/// visual variety. An empty catalog yields a uniform wheel repeating
/// the winning prize.
pub fn build_segments<R: Rng>(winning_prize: &str, catalog: &[Prize], rng: &mut R) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(WHEEL_SEGMENTS);

    let win_color = catalog
        .iter()
        .find(|p| p.name == winning_prize)
        .map(|p| p.color.clone())
        .unwrap_or_else(|| FALLBACK_WIN_COLOR.to_string());

    segments.push(Segment {
        label: winning_prize.to_string(),
        color: win_color.clone(),
        is_winning: true,
    });

    for _ in 1..WHEEL_SEGMENTS {
        let segment = if catalog.is_empty() {
            Segment {
                label: winning_prize.to_string(),
                color: win_color.clone(),
                is_winning: false,
            }
        } else {
            let prize = &catalog[rng.gen_range(0..catalog.len())];
            Segment {
                label: prize.name.clone(),
                color: prize.color.clone(),
                is_winning: false,
            }
        };
        segments.push(segment);
    }

    segments
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SpinPhase {
    Idle,
    Spinning {
        started_at: f64,
        start_rotation: f64,
        total_rotation: f64,
    },
    Settling {
        until: f64,
    },
}

/// What a call to [`SpinWheel::advance`] produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SpinUpdate {
    /// No spin in progress.
    Idle,
    /// The wheel moved (or is settling); keep scheduling frames.
    Animating,
    /// The spin settled; carries the winning segment. Emitted exactly
    /// once per spin.
    Finished(Segment),
}

/// State of the prize wheel for one customer session.
///
/// The wheel is deterministic from the outside in: randomness enters
/// only through the `Rng` handed to [`build_segments`] and
/// [`SpinWheel::start_spin`], and time only through the millisecond
/// timestamps handed to [`SpinWheel::advance`]. The caller owns the
/// frame scheduling; in the browser that is a `requestAnimationFrame`
/// loop, in tests a list of hand-picked instants.
#[derive(Debug, Clone)]
pub struct SpinWheel {
    segments: Vec<Segment>,
    rotation: f64,
    phase: SpinPhase,
}

impl SpinWheel {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            rotation: 0.0,
            phase: SpinPhase::Idle,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Current rotation in radians. Carries over from spin to spin; it
    /// is normalized modulo 2π only when a spin completes.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// True from the moment a spin starts until its result has been
    /// reported, i.e. across both the rotation and the settle delay.
    pub fn is_spinning(&self) -> bool {
        !matches!(self.phase, SpinPhase::Idle)
    }

    /// Replaces the segment set. Ignored while a spin is in flight so
    /// the reported winner always matches what was drawn.
    pub fn set_segments(&mut self, segments: Vec<Segment>) {
        if !self.is_spinning() {
            self.segments = segments;
        }
    }

    /// Starts a spin. Returns `false` without side effects if a spin is
    /// already running (a double-click is a no-op, not an error) or if
    /// no segments have been set.
    ///
    /// The sampled revolution count only adds drama: the total rotation
    /// is corrected so the wheel always comes to rest with segment 0
    /// centered under the pointer at angle 0, wherever it started from.
    pub fn start_spin<R: Rng>(&mut self, now_ms: f64, rng: &mut R) -> bool {
        if self.is_spinning() || self.segments.is_empty() {
            return false;
        }

        let segment_angle = 2.0 * PI / self.segments.len() as f64;
        let target_angle = segment_angle / 2.0;
        let spins = rng.gen_range(MIN_SPINS..MAX_SPINS);

        // Land exactly on the slice center: top up the fractional part
        // of the sampled revolutions so that start + total ≡ target_angle
        // (mod 2π).
        let raw_rotation = spins * 2.0 * PI;
        let correction = (target_angle - self.rotation - raw_rotation).rem_euclid(2.0 * PI);
        let total_rotation = raw_rotation + correction;

        self.phase = SpinPhase::Spinning {
            started_at: now_ms,
            start_rotation: self.rotation,
            total_rotation,
        };
        true
    }

    /// Advances the animation to `now_ms`. Meant to be called once per
    /// scheduled frame; never blocks.
    pub fn advance(&mut self, now_ms: f64) -> SpinUpdate {
        match self.phase {
            SpinPhase::Idle => SpinUpdate::Idle,
            SpinPhase::Spinning {
                started_at,
                start_rotation,
                total_rotation,
            } => {
                let progress = ((now_ms - started_at) / SPIN_DURATION_MS).clamp(0.0, 1.0);
                self.rotation = start_rotation + total_rotation * ease_out_cubic(progress);

                if progress >= 1.0 {
                    self.rotation = self.rotation.rem_euclid(2.0 * PI);
                    self.phase = SpinPhase::Settling {
                        until: now_ms + SETTLE_DELAY_MS,
                    };
                }
                SpinUpdate::Animating
            }
            SpinPhase::Settling { until } => {
                if now_ms >= until {
                    self.phase = SpinPhase::Idle;
                    SpinUpdate::Finished(self.segments[0].clone())
                } else {
                    SpinUpdate::Animating
                }
            }
        }
    }
}

/// Drawing operations the wheel needs from a rendering backend. The
/// frontend implements this over a canvas 2D context; tests implement
/// it with a recording fake.
///
/// All angles are absolute (the wheel rotation is already folded in),
/// so implementations never track rotation state of their own.
pub trait WheelSurface {
    fn clear(&mut self);
    /// Fills one pie wedge spanning `start_angle..end_angle`.
    fn fill_wedge(&mut self, start_angle: f64, end_angle: f64, color: &str);
    /// Draws one word of a segment label along the wedge's mid angle.
    /// `line` counts label lines outward from the first word.
    fn draw_text(&mut self, text: &str, mid_angle: f64, line: usize);
    /// Fills the static hub disc at the wheel center.
    fn fill_hub(&mut self);
}

/// Paints the whole wheel: one wedge per segment starting at
/// `rotation`, each labeled with its text word-wrapped onto successive
/// lines, then the hub on top.
pub fn render_wheel<S: WheelSurface>(segments: &[Segment], rotation: f64, surface: &mut S) {
    surface.clear();
    if segments.is_empty() {
        return;
    }

    let segment_angle = 2.0 * PI / segments.len() as f64;
    for (i, segment) in segments.iter().enumerate() {
        let start = rotation + i as f64 * segment_angle;
        surface.fill_wedge(start, start + segment_angle, &segment.color);

        let mid = start + segment_angle / 2.0;
        for (line, word) in segment.label.split_whitespace().enumerate() {
            surface.draw_text(word, mid, line);
        }
    }
    surface.fill_hub();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prizes::default_prizes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_segments() -> Vec<Segment> {
        let mut rng = StdRng::seed_from_u64(7);
        build_segments("1 Wig Stand", &default_prizes(), &mut rng)
    }

    /// Drives a started wheel to completion and returns the winning
    /// segment together with the timestamp of the finishing frame.
    fn run_to_completion(wheel: &mut SpinWheel, start_ms: f64) -> Segment {
        let mut now = start_ms;
        loop {
            now += 16.0;
            match wheel.advance(now) {
                SpinUpdate::Finished(segment) => return segment,
                SpinUpdate::Animating => {}
                SpinUpdate::Idle => panic!("wheel went idle without finishing"),
            }
        }
    }

    #[test]
    fn test_build_segments_count_and_winner() {
        let segments = test_segments();
        assert_eq!(segments.len(), WHEEL_SEGMENTS);
        assert!(segments[0].is_winning);
        assert_eq!(segments[0].label, "1 Wig Stand");
        assert_eq!(segments[0].color, "#17a2b8");
        assert!(segments[1..].iter().all(|s| !s.is_winning));
    }

    #[test]
    fn test_build_segments_fillers_come_from_catalog() {
        let catalog = default_prizes();
        let mut rng = StdRng::seed_from_u64(21);
        let segments = build_segments("1 Roll-On", &catalog, &mut rng);
        for segment in &segments[1..] {
            assert!(catalog.iter().any(|p| p.name == segment.label));
        }
    }

    #[test]
    fn test_build_segments_unknown_prize_uses_fallback_color() {
        let mut rng = StdRng::seed_from_u64(3);
        let segments = build_segments("Mystery Box", &default_prizes(), &mut rng);
        assert_eq!(segments[0].color, FALLBACK_WIN_COLOR);
        assert_eq!(segments[0].label, "Mystery Box");
        assert!(segments[0].is_winning);
    }

    #[test]
    fn test_build_segments_empty_catalog_is_uniform() {
        let mut rng = StdRng::seed_from_u64(9);
        let segments = build_segments("1 Roll-On", &[], &mut rng);
        assert_eq!(segments.len(), WHEEL_SEGMENTS);
        assert!(segments.iter().all(|s| s.label == "1 Roll-On"));
        assert!(segments.iter().all(|s| s.color == FALLBACK_WIN_COLOR));
        assert!(segments[0].is_winning);
    }

    #[test]
    fn test_ease_out_cubic_endpoints_and_monotonicity() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = ease_out_cubic(step as f64 / 100.0);
            assert!(value > previous);
            previous = value;
        }
    }

    #[test]
    fn test_spin_lands_centered_on_winning_segment() {
        let target_angle = PI / WHEEL_SEGMENTS as f64;
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut wheel = SpinWheel::new(test_segments());
            assert!(wheel.start_spin(0.0, &mut rng));
            run_to_completion(&mut wheel, 0.0);

            let resting = wheel.rotation().rem_euclid(2.0 * PI);
            assert!(
                (resting - target_angle).abs() < 1e-9,
                "seed {seed}: rested at {resting}, expected {target_angle}"
            );
            assert!(!wheel.is_spinning());
        }
    }

    #[test]
    fn test_rotation_carries_over_between_spins() {
        let target_angle = PI / WHEEL_SEGMENTS as f64;
        let mut rng = StdRng::seed_from_u64(11);
        let mut wheel = SpinWheel::new(test_segments());

        assert!(wheel.start_spin(0.0, &mut rng));
        run_to_completion(&mut wheel, 0.0);
        let after_first = wheel.rotation();
        assert!((after_first - target_angle).abs() < 1e-9);

        // The second spin starts from the settled rotation, not zero,
        // and still comes to rest centered on the winner.
        assert!(wheel.start_spin(10_000.0, &mut rng));
        run_to_completion(&mut wheel, 10_000.0);
        assert!((wheel.rotation().rem_euclid(2.0 * PI) - target_angle).abs() < 1e-9);
    }

    #[test]
    fn test_reentrant_spin_is_a_noop() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut wheel = SpinWheel::new(test_segments());

        assert!(wheel.start_spin(0.0, &mut rng));
        let phase_before = format!("{:?}", wheel);
        assert!(!wheel.start_spin(1.0, &mut rng));
        assert_eq!(phase_before, format!("{:?}", wheel));

        // Still guarded mid-flight and while settling.
        wheel.advance(2500.0);
        assert!(!wheel.start_spin(2500.0, &mut rng));
        wheel.advance(SPIN_DURATION_MS);
        assert!(wheel.is_spinning());
        assert!(!wheel.start_spin(SPIN_DURATION_MS + 1.0, &mut rng));
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut wheel = SpinWheel::new(test_segments());
        assert!(wheel.start_spin(0.0, &mut rng));

        assert_eq!(wheel.advance(SPIN_DURATION_MS), SpinUpdate::Animating);
        // Still settling just before the delay elapses.
        assert_eq!(
            wheel.advance(SPIN_DURATION_MS + SETTLE_DELAY_MS - 1.0),
            SpinUpdate::Animating
        );

        let update = wheel.advance(SPIN_DURATION_MS + SETTLE_DELAY_MS);
        match update {
            SpinUpdate::Finished(segment) => {
                assert!(segment.is_winning);
                assert_eq!(segment.label, "1 Wig Stand");
            }
            other => panic!("expected Finished, got {other:?}"),
        }

        // Later frames report Idle; the result is never re-emitted.
        assert_eq!(
            wheel.advance(SPIN_DURATION_MS + SETTLE_DELAY_MS + 100.0),
            SpinUpdate::Idle
        );
    }

    #[test]
    fn test_set_segments_ignored_while_spinning() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut wheel = SpinWheel::new(test_segments());
        assert!(wheel.start_spin(0.0, &mut rng));

        wheel.set_segments(Vec::new());
        assert_eq!(wheel.segments().len(), WHEEL_SEGMENTS);

        run_to_completion(&mut wheel, 0.0);
        wheel.set_segments(Vec::new());
        assert!(wheel.segments().is_empty());
    }

    #[test]
    fn test_spin_requires_segments() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut wheel = SpinWheel::new(Vec::new());
        assert!(!wheel.start_spin(0.0, &mut rng));
        assert_eq!(wheel.advance(16.0), SpinUpdate::Idle);
    }

    #[derive(Default)]
    struct RecordingSurface {
        cleared: usize,
        wedges: Vec<(f64, f64, String)>,
        labels: Vec<(String, f64, usize)>,
        hubs: usize,
    }

    impl WheelSurface for RecordingSurface {
        fn clear(&mut self) {
            self.cleared += 1;
        }
        fn fill_wedge(&mut self, start_angle: f64, end_angle: f64, color: &str) {
            self.wedges.push((start_angle, end_angle, color.to_string()));
        }
        fn draw_text(&mut self, text: &str, mid_angle: f64, line: usize) {
            self.labels.push((text.to_string(), mid_angle, line));
        }
        fn fill_hub(&mut self) {
            self.hubs += 1;
        }
    }

    #[test]
    fn test_render_covers_full_circle() {
        let segments = test_segments();
        let mut surface = RecordingSurface::default();
        render_wheel(&segments, 0.5, &mut surface);

        assert_eq!(surface.cleared, 1);
        assert_eq!(surface.hubs, 1);
        assert_eq!(surface.wedges.len(), WHEEL_SEGMENTS);

        let segment_angle = 2.0 * PI / WHEEL_SEGMENTS as f64;
        let mut covered = 0.0;
        for (i, (start, end, _)) in surface.wedges.iter().enumerate() {
            assert!((start - (0.5 + i as f64 * segment_angle)).abs() < 1e-12);
            covered += end - start;
        }
        assert!((covered - 2.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_render_word_wraps_labels() {
        let segments = vec![
            Segment {
                label: "Hair Dryer + Hair Kits".into(),
                color: "#dc3545".into(),
                is_winning: true,
            },
            Segment {
                label: "Quality Cloth".into(),
                color: "#ffc107".into(),
                is_winning: false,
            },
        ];
        let mut surface = RecordingSurface::default();
        render_wheel(&segments, 0.0, &mut surface);

        assert_eq!(surface.labels.len(), 7);
        let dryer_lines: Vec<_> = surface
            .labels
            .iter()
            .take(5)
            .map(|(word, _, line)| (word.as_str(), *line))
            .collect();
        assert_eq!(
            dryer_lines,
            vec![("Hair", 0), ("Dryer", 1), ("+", 2), ("Hair", 3), ("Kits", 4)]
        );
    }

    #[test]
    fn test_render_empty_segments_only_clears() {
        let mut surface = RecordingSurface::default();
        render_wheel(&[], 0.0, &mut surface);
        assert_eq!(surface.cleared, 1);
        assert!(surface.wedges.is_empty());
        assert_eq!(surface.hubs, 0);
    }
}
