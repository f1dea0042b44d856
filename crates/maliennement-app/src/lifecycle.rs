//! Host lifecycle callbacks.
//!
//! The window loop does not call the bridges directly. It goes through a
//! [`LifecycleDispatcher`] holding one [`LifecycleCallbacks`] record, the
//! desktop counterpart of a platform's back and save/restore hooks.

use maliennement_platform::SaveBundle;
use maliennement_webview::BrowserSurface;
use tracing::debug;

use crate::content::{self, BackOutcome, ContentHost};

pub type BackFn<S> = Box<dyn FnMut(&mut ContentHost<S>) -> BackOutcome>;
pub type SaveFn<S> = Box<dyn FnMut(&ContentHost<S>, &mut SaveBundle)>;
pub type RestoreFn<S> = Box<dyn FnMut(&mut ContentHost<S>, &SaveBundle) -> bool>;

/// Capability record: what to do on back, save and restore.
pub struct LifecycleCallbacks<S> {
    pub on_back: BackFn<S>,
    pub on_save: SaveFn<S>,
    pub on_restore: RestoreFn<S>,
}

impl<S: BrowserSurface + 'static> LifecycleCallbacks<S> {
    /// The content bridges.
    pub fn content_bridges() -> Self {
        Self {
            on_back: Box::new(content::handle_back::<S>),
            on_save: Box::new(content::save_into::<S>),
            on_restore: Box::new(content::restore_from::<S>),
        }
    }
}

/// Routes lifecycle signals to the registered callbacks.
///
/// With nothing registered, back exits and save/restore do nothing.
pub struct LifecycleDispatcher<S> {
    callbacks: Option<LifecycleCallbacks<S>>,
}

impl<S> Default for LifecycleDispatcher<S> {
    fn default() -> Self {
        Self { callbacks: None }
    }
}

impl<S> LifecycleDispatcher<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register callbacks, replacing any previous record.
    pub fn register(&mut self, callbacks: LifecycleCallbacks<S>) {
        self.callbacks = Some(callbacks);
    }

    pub fn back(&mut self, host: &mut ContentHost<S>) -> BackOutcome {
        match self.callbacks.as_mut() {
            Some(cb) => (cb.on_back)(host),
            None => BackOutcome::Exit,
        }
    }

    pub fn save(&mut self, host: &ContentHost<S>, bundle: &mut SaveBundle) {
        if let Some(cb) = self.callbacks.as_mut() {
            (cb.on_save)(host, bundle);
        }
    }

    pub fn restore(&mut self, host: &mut ContentHost<S>, bundle: &SaveBundle) -> bool {
        match self.callbacks.as_mut() {
            Some(cb) => (cb.on_restore)(host, bundle),
            None => {
                debug!("restore requested with no lifecycle callbacks");
                false
            }
        }
    }
}
