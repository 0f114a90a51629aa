//! Mega Menu State Machine
//!
//! Pure transition logic for the dropdown navigation. The DOM layer feeds
//! pointer/click/keyboard/resize events in and applies the returned effects.

/// Widths at or below this are treated as touch viewports
pub const MOBILE_BREAKPOINT_PX: f64 = 767.98;

/// Grace period before a pointer-leave closes the menu
pub const HOVER_CLOSE_DELAY_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewport {
    Desktop,
    Mobile,
}

impl Viewport {
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }
}

/// Input to the state machine
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuEvent {
    /// Pointer entered the trigger of dropdown `i`
    TriggerEnter(usize),
    /// Pointer (re-)entered any dropdown region
    RegionEnter,
    /// Pointer left a dropdown region
    RegionLeave,
    /// The hover-close timer with this token elapsed
    CloseTimerFired(u64),
    TriggerClick(usize),
    OutsideClick,
    Escape,
    Resize { width: f64 },
}

/// Output of a transition, applied in order by the DOM layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuEffect {
    Open(usize),
    Close(usize),
    StartCloseTimer { token: u64, delay_ms: u32 },
    CancelCloseTimer,
    FocusTrigger(usize),
    ViewportChanged(Viewport),
}

#[derive(Clone, Debug)]
pub struct MenuState {
    active: Option<usize>,
    viewport: Viewport,
    pending_close: Option<u64>,
    next_token: u64,
    breakpoint: f64,
    hover_delay_ms: u32,
}

impl MenuState {
    pub fn new(width: f64) -> Self {
        Self::with_timing(width, MOBILE_BREAKPOINT_PX, HOVER_CLOSE_DELAY_MS)
    }

    pub fn with_timing(width: f64, breakpoint: f64, hover_delay_ms: u32) -> Self {
        Self {
            active: None,
            viewport: Viewport::from_width(width, breakpoint),
            pending_close: None,
            next_token: 0,
            breakpoint,
            hover_delay_ms,
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn has_pending_close(&self) -> bool {
        self.pending_close.is_some()
    }

    pub fn handle(&mut self, event: MenuEvent) -> Vec<MenuEffect> {
        let mut effects = Vec::new();
        match event {
            MenuEvent::TriggerEnter(index) => {
                if self.viewport == Viewport::Desktop {
                    self.cancel_timer(&mut effects);
                    self.open(index, &mut effects);
                }
            }
            MenuEvent::RegionEnter => {
                if self.viewport == Viewport::Desktop {
                    self.cancel_timer(&mut effects);
                }
            }
            MenuEvent::RegionLeave => {
                if self.viewport == Viewport::Desktop {
                    // A second leave replaces the pending token
                    self.next_token += 1;
                    self.pending_close = Some(self.next_token);
                    effects.push(MenuEffect::StartCloseTimer {
                        token: self.next_token,
                        delay_ms: self.hover_delay_ms,
                    });
                }
            }
            MenuEvent::CloseTimerFired(token) => {
                if self.pending_close == Some(token) {
                    self.pending_close = None;
                    self.close(&mut effects);
                }
            }
            MenuEvent::TriggerClick(index) => match self.viewport {
                Viewport::Mobile if self.active == Some(index) => self.close(&mut effects),
                Viewport::Mobile => self.open(index, &mut effects),
                Viewport::Desktop => {
                    self.cancel_timer(&mut effects);
                    self.open(index, &mut effects);
                }
            },
            MenuEvent::OutsideClick => self.close(&mut effects),
            MenuEvent::Escape => {
                if let Some(index) = self.active {
                    self.close(&mut effects);
                    effects.push(MenuEffect::FocusTrigger(index));
                }
            }
            MenuEvent::Resize { width } => {
                let viewport = Viewport::from_width(width, self.breakpoint);
                if viewport != self.viewport {
                    self.viewport = viewport;
                    self.cancel_timer(&mut effects);
                    self.close(&mut effects);
                    effects.push(MenuEffect::ViewportChanged(viewport));
                }
            }
        }
        effects
    }

    fn open(&mut self, index: usize, effects: &mut Vec<MenuEffect>) {
        if self.active == Some(index) {
            return;
        }
        self.close(effects);
        self.active = Some(index);
        effects.push(MenuEffect::Open(index));
    }

    fn close(&mut self, effects: &mut Vec<MenuEffect>) {
        if let Some(index) = self.active.take() {
            effects.push(MenuEffect::Close(index));
        }
    }

    fn cancel_timer(&mut self, effects: &mut Vec<MenuEffect>) {
        if self.pending_close.take().is_some() {
            effects.push(MenuEffect::CancelCloseTimer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: f64 = 1280.0;
    const PHONE: f64 = 375.0;

    fn timer_token(effects: &[MenuEffect]) -> u64 {
        effects
            .iter()
            .find_map(|e| match e {
                MenuEffect::StartCloseTimer { token, .. } => Some(*token),
                _ => None,
            })
            .expect("no timer started")
    }

    #[test]
    fn test_hover_opens_exactly_one() {
        let mut state = MenuState::new(DESKTOP);
        assert_eq!(state.handle(MenuEvent::TriggerEnter(0)), vec![MenuEffect::Open(0)]);
        assert_eq!(state.active(), Some(0));

        let effects = state.handle(MenuEvent::TriggerEnter(2));
        assert_eq!(effects, vec![MenuEffect::Close(0), MenuEffect::Open(2)]);
        assert_eq!(state.active(), Some(2));
    }

    #[test]
    fn test_hover_same_trigger_is_noop() {
        let mut state = MenuState::new(DESKTOP);
        state.handle(MenuEvent::TriggerEnter(1));
        assert!(state.handle(MenuEvent::TriggerEnter(1)).is_empty());
    }

    #[test]
    fn test_hover_ignored_on_mobile() {
        let mut state = MenuState::new(PHONE);
        assert!(state.handle(MenuEvent::TriggerEnter(0)).is_empty());
        assert!(!state.is_open());
    }

    #[test]
    fn test_reentry_within_grace_keeps_menu_open() {
        let mut state = MenuState::new(DESKTOP);
        state.handle(MenuEvent::TriggerEnter(0));
        let token = timer_token(&state.handle(MenuEvent::RegionLeave));

        assert_eq!(state.handle(MenuEvent::RegionEnter), vec![MenuEffect::CancelCloseTimer]);
        assert!(state.handle(MenuEvent::CloseTimerFired(token)).is_empty());
        assert_eq!(state.active(), Some(0));
    }

    #[test]
    fn test_leave_without_reentry_closes() {
        let mut state = MenuState::new(DESKTOP);
        state.handle(MenuEvent::TriggerEnter(0));
        let effects = state.handle(MenuEvent::RegionLeave);
        assert_eq!(
            effects,
            vec![MenuEffect::StartCloseTimer { token: 1, delay_ms: HOVER_CLOSE_DELAY_MS }]
        );
        assert_eq!(state.handle(MenuEvent::CloseTimerFired(1)), vec![MenuEffect::Close(0)]);
        assert!(!state.is_open());
        assert!(!state.has_pending_close());
    }

    #[test]
    fn test_second_leave_restarts_timer() {
        let mut state = MenuState::new(DESKTOP);
        state.handle(MenuEvent::TriggerEnter(0));
        let first = timer_token(&state.handle(MenuEvent::RegionLeave));
        let second = timer_token(&state.handle(MenuEvent::RegionLeave));
        assert_ne!(first, second);

        // The stale timer must not close the menu
        assert!(state.handle(MenuEvent::CloseTimerFired(first)).is_empty());
        assert_eq!(state.handle(MenuEvent::CloseTimerFired(second)), vec![MenuEffect::Close(0)]);
    }

    #[test]
    fn test_click_toggles_on_mobile() {
        let mut state = MenuState::new(PHONE);
        assert_eq!(state.handle(MenuEvent::TriggerClick(1)), vec![MenuEffect::Open(1)]);
        assert_eq!(state.handle(MenuEvent::TriggerClick(1)), vec![MenuEffect::Close(1)]);
        assert!(!state.is_open());
    }

    #[test]
    fn test_click_force_opens_on_desktop() {
        let mut state = MenuState::new(DESKTOP);
        state.handle(MenuEvent::TriggerClick(1));
        assert!(state.handle(MenuEvent::TriggerClick(1)).is_empty());
        assert_eq!(state.active(), Some(1));
    }

    #[test]
    fn test_outside_click_closes() {
        let mut state = MenuState::new(DESKTOP);
        state.handle(MenuEvent::TriggerEnter(3));
        assert_eq!(state.handle(MenuEvent::OutsideClick), vec![MenuEffect::Close(3)]);
        assert!(state.handle(MenuEvent::OutsideClick).is_empty());
    }

    #[test]
    fn test_escape_closes_and_returns_focus() {
        let mut state = MenuState::new(DESKTOP);
        state.handle(MenuEvent::TriggerEnter(2));
        assert_eq!(
            state.handle(MenuEvent::Escape),
            vec![MenuEffect::Close(2), MenuEffect::FocusTrigger(2)]
        );
        assert!(state.handle(MenuEvent::Escape).is_empty());
    }

    #[test]
    fn test_resize_across_breakpoint_closes() {
        let mut state = MenuState::new(DESKTOP);
        state.handle(MenuEvent::TriggerEnter(0));
        state.handle(MenuEvent::RegionLeave);

        let effects = state.handle(MenuEvent::Resize { width: PHONE });
        assert_eq!(
            effects,
            vec![
                MenuEffect::CancelCloseTimer,
                MenuEffect::Close(0),
                MenuEffect::ViewportChanged(Viewport::Mobile),
            ]
        );
        assert_eq!(state.viewport(), Viewport::Mobile);

        // Same side of the breakpoint: nothing happens
        assert!(state.handle(MenuEvent::Resize { width: 500.0 }).is_empty());
    }

    #[test]
    fn test_breakpoint_edge() {
        assert_eq!(Viewport::from_width(767.98, MOBILE_BREAKPOINT_PX), Viewport::Mobile);
        assert_eq!(Viewport::from_width(768.0, MOBILE_BREAKPOINT_PX), Viewport::Desktop);
    }
}
