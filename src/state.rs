//! View-state controllers, kept free of any DOM types so they can be
//! unit tested on the native target.

/// The top-level screens. Exactly one is active at a time; there is no
/// history stack or URL routing, navigation is plain in-memory state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum View {
    #[default]
    Home,
    Terms,
    Privacy,
    Legal,
    Company,
}

/// Current view plus the navigation drawer flag. The two are independent
/// axes except that navigating always forces the drawer closed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct AppState {
    pub view: View,
    pub drawer_open: bool,
}

impl AppState {
    pub fn navigate(&mut self, target: View) {
        self.view = target;
        self.drawer_open = false;
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }
}

/// Accordion state for the FAQ list: at most one entry expanded at a time.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FaqState(Option<usize>);

impl FaqState {
    /// Collapse `index` if it is the expanded entry, otherwise expand it
    /// (collapsing whatever was open before).
    pub fn toggle(&mut self, index: usize) {
        self.0 = if self.0 == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.0 == Some(index)
    }

    pub fn expanded(&self) -> Option<usize> {
        self.0
    }
}

/// Fraction of the viewport height the about section's top edge must cross
/// before the floating CTA bar appears.
pub const STICKY_REVEAL_RATIO: f64 = 0.7;

/// Whether the floating CTA bar should be shown, given the screen-relative
/// top edge of the about section and the viewport height. Pure so the
/// scroll listener only has to feed in measurements.
pub fn sticky_bar_visible(section_top: f64, viewport_height: f64) -> bool {
    section_top < viewport_height * STICKY_REVEAL_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FaqEntry;

    #[test]
    fn initial_state_is_home_with_drawer_closed() {
        let state = AppState::default();
        assert_eq!(state.view, View::Home);
        assert!(!state.drawer_open);
        assert_eq!(FaqState::default().expanded(), None);
    }

    #[test]
    fn navigate_to_subpage_and_back_lands_on_home() {
        for target in [View::Terms, View::Privacy, View::Legal, View::Company] {
            let mut state = AppState {
                view: View::Home,
                drawer_open: true,
            };
            state.navigate(target);
            assert_eq!(state.view, target);
            assert!(!state.drawer_open);

            state.open_drawer();
            state.navigate(View::Home);
            assert_eq!(state.view, View::Home);
            assert!(!state.drawer_open);
        }
    }

    #[test]
    fn navigating_from_open_drawer_closes_it() {
        let mut state = AppState::default();
        state.open_drawer();
        assert!(state.drawer_open);
        state.navigate(View::Terms);
        assert_eq!(state.view, View::Terms);
        assert!(!state.drawer_open);
    }

    #[test]
    fn drawer_toggle_twice_returns_to_closed() {
        let mut state = AppState::default();
        state.toggle_drawer();
        assert!(state.drawer_open);
        state.toggle_drawer();
        assert!(!state.drawer_open);
    }

    #[test]
    fn drawer_close_is_idempotent() {
        let mut state = AppState::default();
        state.close_drawer();
        assert!(!state.drawer_open);

        state.open_drawer();
        state.close_drawer();
        state.close_drawer();
        assert!(!state.drawer_open);
    }

    #[test]
    fn faq_toggle_same_index_collapses() {
        let mut faq = FaqState::default();
        faq.toggle(0);
        assert_eq!(faq.expanded(), Some(0));
        assert!(faq.is_expanded(0));
        faq.toggle(0);
        assert_eq!(faq.expanded(), None);
    }

    #[test]
    fn faq_toggle_other_index_moves_expansion() {
        let mut faq = FaqState::default();
        faq.toggle(1);
        faq.toggle(2);
        assert_eq!(faq.expanded(), Some(2));
        assert!(!faq.is_expanded(1));
    }

    #[test]
    fn faq_accordion_handles_boundary_fixtures() {
        // Empty fixture: enumerating it yields no toggle targets at all,
        // so the accordion can never leave its initial state.
        let empty: &[FaqEntry] = &[];
        let mut faq = FaqState::default();
        for (index, _) in empty.iter().enumerate() {
            faq.toggle(index);
        }
        assert_eq!(faq.expanded(), None);

        // Single-entry fixture: the only index round-trips through toggle,
        // and the expanded index always points into the fixture.
        let single: &[FaqEntry] = &[FaqEntry {
            question: "予約はいつまでにすれば良いですか？",
            answer: "最短30分前からの当日予約が可能です。",
        }];
        let mut faq = FaqState::default();
        for (index, _) in single.iter().enumerate() {
            faq.toggle(index);
        }
        assert!(faq.is_expanded(0));
        assert!(single.get(faq.expanded().unwrap()).is_some());
        faq.toggle(0);
        assert_eq!(faq.expanded(), None);
    }

    #[test]
    fn sticky_bar_threshold_at_seventy_percent() {
        let viewport = 1000.0;
        assert!(!sticky_bar_visible(900.0, viewport));
        assert!(!sticky_bar_visible(700.0, viewport));
        assert!(sticky_bar_visible(699.0, viewport));
        assert!(sticky_bar_visible(0.0, viewport));
        assert!(sticky_bar_visible(-500.0, viewport));
    }

    #[test]
    fn sticky_bar_flips_once_on_monotonic_scroll() {
        // Section top starts below the fold and rises as the user scrolls.
        let viewport = 800.0;
        let mut transitions = 0;
        let mut last = sticky_bar_visible(1200.0, viewport);
        let mut top = 1200.0;
        while top > -400.0 {
            top -= 7.0;
            let now = sticky_bar_visible(top, viewport);
            if now != last {
                transitions += 1;
                last = now;
            }
        }
        assert_eq!(transitions, 1);
        assert!(last);
    }
}
