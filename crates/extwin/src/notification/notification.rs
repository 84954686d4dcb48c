//! A single notification and its fade state machine

use serde::Serialize;
use crate::math::Color;
use super::FADE_RATE;

/// Phase of a notification, derived from `(duration, alpha)`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPhase {
    /// Time remains and the message is not fully opaque yet
    FadingIn,
    /// Fully opaque, counting down the hold time
    Holding,
    /// Hold time spent, alpha falling
    FadingOut,
    /// Invisible with no time left; removed on the next advance
    Expired,
}

/// A transient message shown in the bottom-right corner of a window
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    text: String,
    color: Color,
    /// Remaining hold time in seconds
    duration: f32,
}

impl Notification {
    /// Create a notification; it always starts fully transparent
    pub fn new(text: impl Into<String>, color: Color, duration: f32) -> Self {
        Self {
            text: text.into(),
            color: color.with_alpha(0.0),
            duration,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current color, alpha included
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.color.a
    }

    /// Remaining hold time in seconds
    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn phase(&self) -> NotificationPhase {
        match (self.duration > 0.0, self.color.a) {
            (true, a) if a < 1.0 => NotificationPhase::FadingIn,
            (true, _) => NotificationPhase::Holding,
            (false, a) if a > 0.0 => NotificationPhase::FadingOut,
            (false, _) => NotificationPhase::Expired,
        }
    }

    /// Advance by `dt` seconds. Exactly one phase step is applied.
    ///
    /// Returns `false` once the notification has expired and should be
    /// dropped.
    pub fn advance(&mut self, dt: f32) -> bool {
        match self.phase() {
            NotificationPhase::FadingIn => self.color.a += dt * FADE_RATE,
            NotificationPhase::Holding => self.duration -= dt,
            NotificationPhase::FadingOut => self.color.a -= dt * FADE_RATE,
            NotificationPhase::Expired => return false,
        }
        true
    }

    /// Color to paint with, alpha clamped to the drawable range
    pub fn draw_color(&self) -> Color {
        self.color.with_alpha(self.color.a.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_transparent() {
        let n = Notification::new("saved", Color::rgba(0.2, 0.4, 0.6, 1.0), 2.0);
        assert_eq!(n.alpha(), 0.0);
        assert!((n.color().g - 0.4).abs() < 0.001);
        assert_eq!(n.phase(), NotificationPhase::FadingIn);
    }

    #[test]
    fn test_fading_in_branch() {
        let mut n = Notification::new("x", Color::WHITE, 1.0);
        assert!(n.advance(0.1));
        assert!((n.alpha() - 0.5).abs() < 0.001);
        assert!((n.duration() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_holding_branch() {
        let mut n = Notification::new("x", Color::WHITE, 1.0);
        n.color.a = 1.0;
        assert_eq!(n.phase(), NotificationPhase::Holding);
        assert!(n.advance(0.25));
        assert!((n.duration() - 0.75).abs() < 0.001);
        assert!((n.alpha() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_fading_out_branch() {
        let mut n = Notification::new("x", Color::WHITE, 0.0);
        n.color.a = 1.0;
        assert_eq!(n.phase(), NotificationPhase::FadingOut);
        assert!(n.advance(0.1));
        assert!((n.alpha() - 0.5).abs() < 0.001);
        assert!((n.duration() - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_expired_branch() {
        let mut n = Notification::new("x", Color::WHITE, -0.05);
        assert_eq!(n.phase(), NotificationPhase::Expired);
        assert!(!n.advance(0.1));
    }

    #[test]
    fn test_overshoot_is_clamped_for_drawing() {
        let mut n = Notification::new("x", Color::WHITE, 1.0);
        n.advance(0.3);
        assert!(n.alpha() > 1.0);
        assert_eq!(n.phase(), NotificationPhase::Holding);
        assert!((n.draw_color().a - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_full_lifecycle_phase_counts() {
        let mut n = Notification::new("x", Color::WHITE, 1.25);
        let mut fade_in = 0;
        let mut hold = 0;
        let mut fade_out = 0;

        loop {
            match n.phase() {
                NotificationPhase::FadingIn => fade_in += 1,
                NotificationPhase::Holding => hold += 1,
                NotificationPhase::FadingOut => fade_out += 1,
                NotificationPhase::Expired => break,
            }
            assert!(n.advance(0.1));
        }

        assert_eq!(fade_in, 2);
        assert_eq!(hold, 13);
        assert_eq!(fade_out, 2);
        assert!(!n.advance(0.1));
    }
}
