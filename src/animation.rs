// SPDX-License-Identifier: MPL-2.0
//! Time-based fade and shake effects.
//!
//! Sampling is split from driving: the free functions map elapsed time to a
//! visual value, and [`Animator`] applies them to [`Page`] nodes on each frame
//! tick. An effect's clock starts at the first tick that sees it, not when it
//! is scheduled.

use crate::ui::page::{ElementId, Page};
use std::time::{Duration, Instant};

pub const CONTENT_FADE_IN: Duration = Duration::from_millis(600);
pub const DETAILS_FADE_IN: Duration = Duration::from_millis(400);
pub const DETAILS_FADE_OUT: Duration = Duration::from_millis(300);
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);

/// Peak horizontal displacement of a shake, in logical pixels.
pub const SHAKE_DISTANCE: f32 = 10.0;

/// Interval of the frame source while something is animating (~60 Hz).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
}

#[must_use]
pub fn fade_in_opacity(elapsed: Duration, duration: Duration) -> f32 {
    progress(elapsed, duration)
}

#[must_use]
pub fn fade_out_opacity(elapsed: Duration, duration: Duration) -> f32 {
    (1.0 - progress(elapsed, duration)).max(0.0)
}

#[must_use]
pub fn is_finished(elapsed: Duration, duration: Duration) -> bool {
    elapsed >= duration
}

/// Horizontal offset of a shake: 0 → −10 at 25% → +10 at 75% → 0.
#[must_use]
pub fn shake_offset(elapsed: Duration) -> f32 {
    if is_finished(elapsed, SHAKE_DURATION) {
        return 0.0;
    }
    let p = progress(elapsed, SHAKE_DURATION);
    if p < 0.25 {
        -SHAKE_DISTANCE * (p / 0.25)
    } else if p < 0.75 {
        -SHAKE_DISTANCE + 2.0 * SHAKE_DISTANCE * ((p - 0.25) / 0.5)
    } else {
        SHAKE_DISTANCE * (1.0 - (p - 0.75) / 0.25)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Effect {
    FadeIn,
    FadeOut,
    Shake,
}

#[derive(Debug, Clone)]
struct Scheduled {
    target: ElementId,
    effect: Effect,
    duration: Duration,
    started: Option<Instant>,
}

impl Scheduled {
    /// Writes the sampled value; returns `false` once the effect is done.
    fn apply(&mut self, page: &mut Page, now: Instant) -> bool {
        let started = *self.started.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);
        let finished = is_finished(elapsed, self.duration);
        let node = page.node_mut(self.target);

        match self.effect {
            Effect::FadeIn => node.opacity = fade_in_opacity(elapsed, self.duration),
            Effect::FadeOut => {
                node.opacity = fade_out_opacity(elapsed, self.duration);
                if finished {
                    node.hidden = true;
                }
            }
            Effect::Shake => {
                node.offset_x = shake_offset(elapsed);
                if finished {
                    node.shaking = false;
                    node.offset_x = 0.0;
                }
            }
        }
        !finished
    }
}

/// Drives scheduled effects from a frame source.
///
/// Overlapping effects on one element are not coordinated: they are applied
/// in scheduling order and the last one written wins.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    effects: Vec<Scheduled>,
}

impl Animator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveals `target` at opacity 0 and ramps it to 1 over `duration`.
    pub fn fade_in(&mut self, page: &mut Page, target: ElementId, duration: Duration) {
        let node = page.node_mut(target);
        node.opacity = 0.0;
        node.hidden = false;
        self.schedule(target, Effect::FadeIn, duration);
    }

    /// Ramps `target` from 1 to 0 over `duration`, then hides it.
    pub fn fade_out(&mut self, target: ElementId, duration: Duration) {
        self.schedule(target, Effect::FadeOut, duration);
    }

    /// Marks `target` as shaking for [`SHAKE_DURATION`].
    pub fn shake(&mut self, page: &mut Page, target: ElementId) {
        page.node_mut(target).shaking = true;
        self.schedule(target, Effect::Shake, SHAKE_DURATION);
    }

    fn schedule(&mut self, target: ElementId, effect: Effect, duration: Duration) {
        self.effects.push(Scheduled {
            target,
            effect,
            duration,
            started: None,
        });
    }

    /// Samples every effect at `now` and drops the finished ones.
    pub fn tick(&mut self, page: &mut Page, now: Instant) {
        self.effects.retain_mut(|effect| effect.apply(page, now));
    }

    /// Whether a frame source is needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn fade_in_is_linear_and_clamped() {
        let d = ms(400);
        assert!(approx(fade_in_opacity(ms(0), d), 0.0));
        assert!(approx(fade_in_opacity(ms(100), d), 0.25));
        assert!(approx(fade_in_opacity(ms(400), d), 1.0));
        assert!(approx(fade_in_opacity(ms(900), d), 1.0));
    }

    #[test]
    fn fade_out_mirrors_fade_in() {
        let d = ms(300);
        for t in [0, 75, 150, 299, 300, 1000] {
            let sum = fade_in_opacity(ms(t), d) + fade_out_opacity(ms(t), d);
            assert!(approx(sum, 1.0), "at {t} ms");
        }
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        assert!(is_finished(Duration::ZERO, Duration::ZERO));
        assert!(approx(fade_in_opacity(Duration::ZERO, Duration::ZERO), 1.0));
        assert!(approx(fade_out_opacity(Duration::ZERO, Duration::ZERO), 0.0));
    }

    #[test]
    fn shake_follows_keyframes() {
        assert!(approx(shake_offset(ms(0)), 0.0));
        assert!(approx(shake_offset(ms(125)), -SHAKE_DISTANCE));
        assert!(approx(shake_offset(ms(250)), 0.0));
        assert!(approx(shake_offset(ms(375)), SHAKE_DISTANCE));
        assert!(approx(shake_offset(ms(500)), 0.0));
        assert!(approx(shake_offset(ms(800)), 0.0));
    }

    #[test]
    fn shake_stays_within_distance() {
        for t in 0..=500 {
            assert!(shake_offset(ms(t)).abs() <= SHAKE_DISTANCE + 1e-4);
        }
    }

    #[test]
    fn fade_in_starts_on_first_tick() {
        let mut page = Page::new();
        let mut animator = Animator::new();
        animator.fade_in(&mut page, ElementId::EphemerisContent, CONTENT_FADE_IN);

        let node = page.node(ElementId::EphemerisContent);
        assert!(!node.hidden);
        assert!(approx(node.opacity, 0.0));
        assert!(animator.is_animating());

        let t0 = Instant::now();
        animator.tick(&mut page, t0);
        assert!(approx(page.node(ElementId::EphemerisContent).opacity, 0.0));

        animator.tick(&mut page, t0 + ms(300));
        assert!(approx(page.node(ElementId::EphemerisContent).opacity, 0.5));

        animator.tick(&mut page, t0 + ms(600));
        assert!(approx(page.node(ElementId::EphemerisContent).opacity, 1.0));
        assert!(!animator.is_animating());
    }

    #[test]
    fn fade_out_hides_when_done() {
        let mut page = Page::new();
        page.set_hidden(ElementId::EphemerisDetails, false);
        let mut animator = Animator::new();
        animator.fade_out(ElementId::EphemerisDetails, DETAILS_FADE_OUT);

        let t0 = Instant::now();
        animator.tick(&mut page, t0);
        animator.tick(&mut page, t0 + ms(150));
        let node = page.node(ElementId::EphemerisDetails);
        assert!(!node.hidden);
        assert!(approx(node.opacity, 0.5));

        animator.tick(&mut page, t0 + ms(300));
        assert!(page.node(ElementId::EphemerisDetails).hidden);
        assert!(!animator.is_animating());
    }

    #[test]
    fn shake_marker_clears_after_duration() {
        let mut page = Page::new();
        let mut animator = Animator::new();
        animator.shake(&mut page, ElementId::ErrorState);
        assert!(page.node(ElementId::ErrorState).shaking);

        let t0 = Instant::now();
        animator.tick(&mut page, t0);
        animator.tick(&mut page, t0 + ms(125));
        assert!(approx(page.node(ElementId::ErrorState).offset_x, -SHAKE_DISTANCE));
        assert!(page.node(ElementId::ErrorState).shaking);

        animator.tick(&mut page, t0 + SHAKE_DURATION);
        let node = page.node(ElementId::ErrorState);
        assert!(!node.shaking);
        assert!(approx(node.offset_x, 0.0));
    }

    #[test]
    fn later_effect_wins_on_same_element() {
        let mut page = Page::new();
        let mut animator = Animator::new();
        animator.fade_in(&mut page, ElementId::EphemerisDetails, DETAILS_FADE_IN);
        animator.fade_out(ElementId::EphemerisDetails, DETAILS_FADE_OUT);

        let t0 = Instant::now();
        animator.tick(&mut page, t0);
        animator.tick(&mut page, t0 + ms(150));
        // Fade-out is applied after fade-in within the same tick.
        assert!(approx(page.node(ElementId::EphemerisDetails).opacity, 0.5));
    }
}
