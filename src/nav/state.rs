/// Offsets strictly above this count as scrolled.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// The two independent flags behind the nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Re-evaluates the threshold for a new offset. Returns whether the flag changed.
    pub fn observe_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following a link always leaves the menu closed.
    pub fn select_link(&mut self) -> bool {
        let changed = self.menu_open;
        self.menu_open = false;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = NavState::default();
        assert!(!state.scrolled());
        assert!(!state.menu_open());
    }

    #[test]
    fn test_scrolled_tracks_last_offset() {
        let offsets = [0.0, 12.5, 50.0, 50.01, 51.0, 400.0, 400.0, 50.0, 49.0, 1e6, -3.0];
        let mut state = NavState::default();
        for offset in offsets {
            state.observe_scroll(offset);
            assert_eq!(state.scrolled(), offset > 50.0, "offset {offset}");
        }
    }

    #[test]
    fn test_repeated_offset_is_idempotent() {
        let mut state = NavState::default();
        assert!(state.observe_scroll(51.0));
        let snapshot = state;
        assert!(!state.observe_scroll(51.0));
        assert!(!state.observe_scroll(51.0));
        assert_eq!(state, snapshot);

        assert!(state.observe_scroll(50.0));
        assert!(!state.observe_scroll(50.0));
        assert!(!state.scrolled());
    }

    #[test]
    fn test_scroll_scenario() {
        let mut state = NavState::default();
        state.observe_scroll(0.0);
        assert!(!state.scrolled());
        state.observe_scroll(51.0);
        assert!(state.scrolled());
        state.observe_scroll(50.0);
        assert!(!state.scrolled());
    }

    #[test]
    fn test_menu_parity() {
        for toggles in 0..9 {
            let mut state = NavState::default();
            for _ in 0..toggles {
                state.toggle_menu();
            }
            assert_eq!(state.menu_open(), toggles % 2 == 1, "{toggles} toggles");
        }
    }

    #[test]
    fn test_select_link_closes_menu() {
        for toggles in [1, 3, 7] {
            let mut state = NavState::default();
            for _ in 0..toggles {
                state.toggle_menu();
            }
            assert!(state.menu_open());
            assert!(state.select_link());
            assert!(!state.menu_open());
        }

        let mut closed = NavState::default();
        assert!(!closed.select_link());
        assert!(!closed.menu_open());
    }

    #[test]
    fn test_flags_are_independent() {
        let mut state = NavState::default();
        state.toggle_menu();
        state.observe_scroll(300.0);
        assert!(state.menu_open());
        state.select_link();
        assert!(state.scrolled());
    }
}
