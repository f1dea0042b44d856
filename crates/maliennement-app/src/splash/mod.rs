//! Splash controller.
//!
//! Keeps the branded splash up for a fixed delay after mount, then flips it
//! off for good. The event loop wakes at [`SplashController::fire_at`]
//! instead of sleeping, so back and close requests keep arriving meanwhile.

mod controller;
mod types;

pub use controller::SplashController;
pub use types::{SplashPhase, SPLASH_DELAY};

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    #[test]
    fn visible_for_the_whole_delay() {
        let mount = Instant::now();
        let mut splash = SplashController::starting_at(mount, SPLASH_DELAY);

        assert!(splash.is_visible());
        assert!(!splash.poll(mount));
        assert!(!splash.poll(mount + Duration::from_millis(1999)));
        assert!(splash.is_visible());
        assert_eq!(splash.phase(), SplashPhase::Visible);
    }

    #[test]
    fn dismissed_exactly_once_and_never_again() {
        let mount = Instant::now();
        let mut splash = SplashController::starting_at(mount, SPLASH_DELAY);

        assert!(splash.poll(mount + SPLASH_DELAY));
        assert!(!splash.is_visible());
        assert_eq!(splash.phase(), SplashPhase::Dismissed);

        for extra in [1, 500, 60_000] {
            assert!(!splash.poll(mount + SPLASH_DELAY + Duration::from_millis(extra)));
            assert!(!splash.is_visible());
        }
    }

    #[test]
    fn late_poll_still_fires_once() {
        let mount = Instant::now();
        let mut splash = SplashController::starting_at(mount, SPLASH_DELAY);
        assert!(splash.poll(mount + Duration::from_secs(30)));
        assert!(!splash.poll(mount + Duration::from_secs(31)));
    }

    #[test]
    fn fire_at_is_mount_plus_delay() {
        let mount = Instant::now();
        let splash = SplashController::starting_at(mount, SPLASH_DELAY);
        assert_eq!(splash.fire_at(), mount + Duration::from_millis(2000));
    }

    #[test]
    fn dropping_before_expiry_has_no_side_effect() {
        let splash = SplashController::new(SPLASH_DELAY);
        assert!(splash.is_visible());
        drop(splash);
    }
}
