mod scroll;
mod state;

pub use scroll::{ScrollHub, ScrollListener, ScrollSource, ScrollSubscription, WindowScroll};
pub use state::{NavState, SCROLL_THRESHOLD};

use std::sync::Arc;

use leptos::prelude::*;

/// Owns the nav bar state for one mounted page. Child views get it read-only through
/// [`NavController::state`].
#[derive(Debug, Clone, Copy)]
pub struct NavController {
    state: RwSignal<NavState>,
}

impl NavController {
    /// Creates the state and subscribes to `source`. The subscription lives exactly as long as
    /// the current reactive owner.
    pub fn mount<S: ScrollSource>(source: &S) -> Self {
        let state = RwSignal::new(NavState::default());
        let subscription = source.subscribe(Arc::new(move |offset| {
            state.maybe_update(|s| {
                let changed = s.observe_scroll(offset);
                if changed {
                    log::debug!("nav scrolled: {}", s.scrolled());
                }
                changed
            });
        }));
        log::debug!("scroll listener attached");
        on_cleanup(move || subscription.release());
        Self { state }
    }

    pub fn state(&self) -> Signal<NavState> {
        self.state.into()
    }

    pub fn toggle_menu(&self) {
        self.state.update(NavState::toggle_menu);
    }

    pub fn select_link(&self) {
        self.state.maybe_update(NavState::select_link);
    }
}
