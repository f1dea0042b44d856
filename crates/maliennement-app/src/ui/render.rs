//! UI state and its projection onto the window's layers.

use crate::content::LoadingState;

/// Everything the window's look depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    pub splash_visible: bool,
    pub content_mounted: bool,
    pub loading: LoadingState,
    pub refreshing: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            splash_visible: true,
            content_mounted: false,
            loading: LoadingState::Loading,
            refreshing: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashLayer {
    Shown,
    /// Cross-fade to content; the host destroys the overlay afterwards.
    FadingOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLayer {
    /// No content surface yet.
    Absent,
    /// Mounted beneath the splash, not shown.
    Hidden,
    /// Shown, fading in while the splash fades out above it.
    FadingIn,
}

/// What the window should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub splash: SplashLayer,
    pub content: ContentLayer,
    pub indicator_visible: bool,
}

pub fn render(state: &UiState) -> Frame {
    let content = match (state.content_mounted, state.splash_visible) {
        (false, _) => ContentLayer::Absent,
        (true, true) => ContentLayer::Hidden,
        (true, false) => ContentLayer::FadingIn,
    };
    Frame {
        splash: if state.splash_visible {
            SplashLayer::Shown
        } else {
            SplashLayer::FadingOut
        },
        content,
        indicator_visible: state.content_mounted
            && (state.loading.is_loading() || state.refreshing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_frame_is_splash_only() {
        let frame = render(&UiState::default());
        assert_eq!(frame.splash, SplashLayer::Shown);
        assert_eq!(frame.content, ContentLayer::Absent);
        assert!(!frame.indicator_visible);
    }

    #[test]
    fn content_fades_in_as_splash_fades_out() {
        let mut state = UiState {
            content_mounted: true,
            ..UiState::default()
        };
        assert_eq!(render(&state).content, ContentLayer::Hidden);

        state.splash_visible = false;
        let frame = render(&state);
        assert_eq!(frame.splash, SplashLayer::FadingOut);
        assert_eq!(frame.content, ContentLayer::FadingIn);
    }

    #[test]
    fn indicator_follows_loading_once_mounted() {
        let mut state = UiState {
            splash_visible: false,
            content_mounted: true,
            ..UiState::default()
        };
        let frame = render(&state);
        assert_eq!(frame.splash, SplashLayer::FadingOut);
        assert!(frame.indicator_visible);

        state.loading = LoadingState::Idle;
        assert!(!render(&state).indicator_visible);
    }

    #[test]
    fn refreshing_shows_indicator() {
        let state = UiState {
            splash_visible: false,
            content_mounted: true,
            loading: LoadingState::Idle,
            refreshing: true,
        };
        assert!(render(&state).indicator_visible);
    }

    #[test]
    fn render_is_pure() {
        let state = UiState {
            splash_visible: false,
            content_mounted: true,
            loading: LoadingState::Idle,
            refreshing: false,
        };
        assert_eq!(render(&state), render(&state));
    }
}
