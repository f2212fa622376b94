// SPDX-License-Identifier: MPL-2.0
//! Playback clock adapter.
//!
//! Wraps the external [`Player`] so the transport sees a uniform clock:
//! sanitized times, seeks that report the position the player actually
//! landed on, and a single notification type ([`PlayerEvent`]).

use crate::application::port::Player;

/// Notification emitted by the external player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEvent {
    /// The playback position advanced during playback.
    TimeUpdated(f64),
    /// Playback started or resumed.
    StartedPlaying,
    /// Playback paused, either on request or because the media ended.
    Paused,
    /// The user moved the position through the player's own controls.
    UserSeeked(f64),
}

impl PlayerEvent {
    /// Returns the event with its time sanitized, see [`sanitize_time`].
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::TimeUpdated(time) => Self::TimeUpdated(sanitize_time(time)),
            Self::UserSeeked(time) => Self::UserSeeked(sanitize_time(time)),
            other => other,
        }
    }
}

/// Maps NaN and negative positions to zero.
#[must_use]
pub fn sanitize_time(time: f64) -> f64 {
    if time.is_nan() {
        0.0
    } else {
        time.max(0.0)
    }
}

/// Uniform clock over an external [`Player`].
#[derive(Debug)]
pub struct PlaybackClock<P> {
    player: P,
}

impl<P: Player> PlaybackClock<P> {
    #[must_use]
    pub fn new(player: P) -> Self {
        Self { player }
    }

    /// Returns the player's current position.
    #[must_use]
    pub fn now(&self) -> f64 {
        sanitize_time(self.player.current_time())
    }

    /// Seeks the player and returns the position it reports afterwards.
    ///
    /// The player clamps out-of-range targets; the returned value is what
    /// the transport should store.
    pub fn seek(&mut self, time: f64) -> f64 {
        self.player.set_current_time(sanitize_time(time));
        self.now()
    }

    pub fn play(&mut self) {
        self.player.play();
    }

    pub fn pause(&mut self) {
        self.player.pause();
    }

    #[must_use]
    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    #[must_use]
    pub fn into_inner(self) -> P {
        self.player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClampingPlayer {
        time: f64,
        duration: f64,
        play_calls: usize,
        pause_calls: usize,
    }

    impl ClampingPlayer {
        fn new(duration: f64) -> Self {
            Self {
                time: 0.0,
                duration,
                play_calls: 0,
                pause_calls: 0,
            }
        }
    }

    impl Player for ClampingPlayer {
        fn current_time(&self) -> f64 {
            self.time
        }

        fn set_current_time(&mut self, time: f64) {
            self.time = time.clamp(0.0, self.duration);
        }

        fn play(&mut self) {
            self.play_calls += 1;
        }

        fn pause(&mut self) {
            self.pause_calls += 1;
        }
    }

    #[test]
    fn seek_returns_reported_position() {
        let mut clock = PlaybackClock::new(ClampingPlayer::new(20.0));
        assert_eq!(clock.seek(7.5), 7.5);
        assert_eq!(clock.seek(99.0), 20.0);
        assert_eq!(clock.now(), 20.0);
    }

    #[test]
    fn seek_sanitizes_invalid_targets() {
        let mut clock = PlaybackClock::new(ClampingPlayer::new(20.0));
        assert_eq!(clock.seek(f64::NAN), 0.0);
        assert_eq!(clock.seek(-4.0), 0.0);
    }

    #[test]
    fn play_and_pause_forward_to_player() {
        let mut clock = PlaybackClock::new(ClampingPlayer::new(5.0));
        clock.play();
        clock.pause();
        clock.pause();
        assert_eq!(clock.player().play_calls, 1);
        assert_eq!(clock.player().pause_calls, 2);
    }

    #[test]
    fn events_are_normalized() {
        assert_eq!(
            PlayerEvent::TimeUpdated(f64::NAN).normalized(),
            PlayerEvent::TimeUpdated(0.0)
        );
        assert_eq!(
            PlayerEvent::UserSeeked(-1.0).normalized(),
            PlayerEvent::UserSeeked(0.0)
        );
        assert_eq!(PlayerEvent::Paused.normalized(), PlayerEvent::Paused);
    }
}
