//! The loading flag.

use maliennement_webview::SurfaceEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Loading,
    Idle,
}

impl LoadingState {
    pub fn is_loading(self) -> bool {
        self == LoadingState::Loading
    }

    /// Next state after a surface event. Events unrelated to page loads
    /// leave the state as is.
    pub fn on_event(self, event: &SurfaceEvent) -> Self {
        match event {
            SurfaceEvent::PageStarted { .. } => LoadingState::Loading,
            SurfaceEvent::Progress { percent } if *percent < 100 => LoadingState::Loading,
            SurfaceEvent::Progress { .. } => LoadingState::Idle,
            SurfaceEvent::PageFinished { .. } | SurfaceEvent::PageError { .. } => {
                LoadingState::Idle
            }
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading() {
        assert!(LoadingState::default().is_loading());
    }

    #[test]
    fn progress_below_100_keeps_loading() {
        let state = LoadingState::Idle.on_event(&SurfaceEvent::Progress { percent: 99 });
        assert_eq!(state, LoadingState::Loading);
    }

    #[test]
    fn progress_100_is_idle() {
        let state = LoadingState::Loading.on_event(&SurfaceEvent::Progress { percent: 100 });
        assert_eq!(state, LoadingState::Idle);
    }

    #[test]
    fn finished_and_error_are_idle() {
        let finished = SurfaceEvent::PageFinished {
            url: "https://www.maliennement.com/".into(),
        };
        assert_eq!(LoadingState::Loading.on_event(&finished), LoadingState::Idle);

        let error = SurfaceEvent::error(-6, "connection refused", "https://x.test/");
        assert_eq!(LoadingState::Loading.on_event(&error), LoadingState::Idle);
    }

    #[test]
    fn page_start_is_loading() {
        let started = SurfaceEvent::PageStarted {
            url: "https://www.maliennement.com/a".into(),
        };
        assert_eq!(LoadingState::Idle.on_event(&started), LoadingState::Loading);
    }

    #[test]
    fn unrelated_events_keep_state() {
        for event in [
            SurfaceEvent::Scrolled { y: 10.0 },
            SurfaceEvent::PullStarted,
            SurfaceEvent::TitleChanged { title: "t".into() },
        ] {
            assert_eq!(LoadingState::Idle.on_event(&event), LoadingState::Idle);
            assert_eq!(LoadingState::Loading.on_event(&event), LoadingState::Loading);
        }
    }
}
