// SPDX-License-Identifier: MPL-2.0
//! Media player port definition.
//!
//! The editor never decodes or renders video itself. It drives an external
//! player through the [`Player`] trait and reacts to the notifications that
//! player emits (see [`crate::transport::PlayerEvent`]).
//!
//! # Design Notes
//!
//! - Time is expressed in seconds as `f64`, matching the transcript
//! - Seeking outside `[0, duration]` is clamped by the player, and the editor
//!   trusts whatever position the player reports back
//! - A seek requested through this trait must not be echoed back as a user
//!   seek notification

/// Port for the external media element.
pub trait Player {
    /// Returns the current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Moves the playback position to `time` seconds.
    fn set_current_time(&mut self, time: f64);

    /// Starts or resumes playback.
    fn play(&mut self);

    /// Pauses playback.
    fn pause(&mut self);
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn current_time(&self) -> f64 {
        (**self).current_time()
    }

    fn set_current_time(&mut self, time: f64) {
        (**self).set_current_time(time);
    }

    fn play(&mut self) {
        (**self).play();
    }

    fn pause(&mut self) {
        (**self).pause();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn Player) {}

    struct MockPlayer {
        time: f64,
        duration: f64,
        playing: bool,
    }

    impl Player for MockPlayer {
        fn current_time(&self) -> f64 {
            self.time
        }

        fn set_current_time(&mut self, time: f64) {
            self.time = time.clamp(0.0, self.duration);
        }

        fn play(&mut self) {
            self.playing = true;
        }

        fn pause(&mut self) {
            self.playing = false;
        }
    }

    #[test]
    fn mock_player_lifecycle() {
        let mut player = MockPlayer {
            time: 0.0,
            duration: 30.0,
            playing: false,
        };

        player.set_current_time(12.5);
        assert_eq!(player.current_time(), 12.5);

        player.play();
        assert!(player.playing);
        player.pause();
        assert!(!player.playing);
    }

    #[test]
    fn boxed_player_forwards_calls() {
        let mut player: Box<dyn Player> = Box::new(MockPlayer {
            time: 0.0,
            duration: 10.0,
            playing: false,
        });
        player.set_current_time(99.0);
        assert_eq!(player.current_time(), 10.0);
    }
}
