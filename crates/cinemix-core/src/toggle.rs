/// Lifecycle of one optimistic watchlist/favorite flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Idle,
    Pending,
    Committed,
    RolledBack,
}

/// Optimistic boolean toggle: the displayed value flips before the remote
/// call, commits to the remote answer on success and reverts to the
/// pre-action value on failure.
///
/// `Idle(current) -> Pending(flipped) -> Committed(remote) | RolledBack(current)`
#[derive(Debug, Clone, Copy)]
pub struct OptimisticToggle {
    displayed: bool,
    saved: bool,
    state: ToggleState,
}

impl OptimisticToggle {
    pub fn new(current: bool) -> Self {
        Self {
            displayed: current,
            saved: current,
            state: ToggleState::Idle,
        }
    }

    /// Value the view should render right now.
    pub fn displayed(&self) -> bool {
        self.displayed
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// Flip the displayed value and enter `Pending`. Beginning while a
    /// request is already in flight is a no-op; there is exactly one
    /// pending flip at a time.
    pub fn begin(&mut self) -> bool {
        if self.state != ToggleState::Pending {
            self.saved = self.displayed;
            self.displayed = !self.displayed;
            self.state = ToggleState::Pending;
        }
        self.displayed
    }

    /// Remote call succeeded; the remote value is authoritative from here.
    pub fn commit(&mut self, remote: bool) -> bool {
        if self.state == ToggleState::Pending {
            self.displayed = remote;
            self.state = ToggleState::Committed;
        }
        self.displayed
    }

    /// Remote call failed; revert to the pre-action value.
    pub fn rollback(&mut self) -> bool {
        if self.state == ToggleState::Pending {
            self.displayed = self.saved;
            self.state = ToggleState::RolledBack;
        }
        self.displayed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_flips_immediately() {
        let mut toggle = OptimisticToggle::new(false);
        assert_eq!(toggle.state(), ToggleState::Idle);
        assert!(toggle.begin());
        assert!(toggle.displayed());
        assert_eq!(toggle.state(), ToggleState::Pending);
    }

    #[test]
    fn test_commit_keeps_flipped_value() {
        let mut toggle = OptimisticToggle::new(false);
        toggle.begin();
        assert!(toggle.commit(true));
        assert!(toggle.displayed());
        assert_eq!(toggle.state(), ToggleState::Committed);
    }

    #[test]
    fn test_remote_value_is_authoritative() {
        // The server answers with the actual new state; if it disagrees
        // with the optimistic flip, the server wins.
        let mut toggle = OptimisticToggle::new(false);
        toggle.begin();
        assert!(!toggle.commit(false));
        assert!(!toggle.displayed());
    }

    #[test]
    fn test_rollback_reverts_to_pre_action_value() {
        let mut toggle = OptimisticToggle::new(true);
        assert!(!toggle.begin());
        assert!(toggle.rollback());
        assert!(toggle.displayed());
        assert_eq!(toggle.state(), ToggleState::RolledBack);
    }

    #[test]
    fn test_begin_while_pending_is_noop() {
        let mut toggle = OptimisticToggle::new(false);
        toggle.begin();
        assert!(toggle.begin());
        assert_eq!(toggle.state(), ToggleState::Pending);
        assert!(!toggle.rollback());
    }

    #[test]
    fn test_commit_outside_pending_is_noop() {
        let mut toggle = OptimisticToggle::new(false);
        assert!(!toggle.commit(true));
        assert_eq!(toggle.state(), ToggleState::Idle);
        assert!(!toggle.rollback());
        assert_eq!(toggle.state(), ToggleState::Idle);
    }

    #[test]
    fn test_full_cycle_can_restart() {
        let mut toggle = OptimisticToggle::new(false);
        toggle.begin();
        toggle.commit(true);
        // A later user action starts a new cycle from the committed value.
        assert!(!toggle.begin());
        assert_eq!(toggle.state(), ToggleState::Pending);
        toggle.rollback();
        assert!(toggle.displayed());
    }
}
