//! Single-slot toast lifecycle.
//!
//! The DOM layer owns the node and the timers; this slot decides whether a timer
//! that fires still belongs to the toast on screen. Each `show` hands out a new
//! ticket and invalidates the previous one.

/// Identifies one shown toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastTicket(u64);

/// Where the current toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Nothing on screen
    Idle,
    /// Visible, dismissal pending
    Visible(ToastTicket),
    /// Exit animation running, removal pending
    Exiting(ToastTicket),
}

/// At most one toast at a time.
#[derive(Debug, Clone)]
pub struct ToastSlot {
    next: u64,
    phase: ToastPhase,
}

impl Default for ToastSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastSlot {
    /// Empty slot.
    pub fn new() -> Self {
        Self { next: 0, phase: ToastPhase::Idle }
    }

    /// Current phase.
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Whether a toast is on screen (visible or exiting).
    pub fn is_occupied(&self) -> bool {
        !matches!(self.phase, ToastPhase::Idle)
    }

    /// Replace whatever is shown. Returns the ticket for the new toast and
    /// whether a previous toast was pre-empted.
    pub fn show(&mut self) -> (ToastTicket, bool) {
        let preempted = self.is_occupied();
        self.next = self.next.wrapping_add(1);
        let ticket = ToastTicket(self.next);
        self.phase = ToastPhase::Visible(ticket);
        (ticket, preempted)
    }

    /// Dismissal timer fired. True if `ticket` is still visible and should animate out.
    pub fn begin_exit(&mut self, ticket: ToastTicket) -> bool {
        if self.phase == ToastPhase::Visible(ticket) {
            self.phase = ToastPhase::Exiting(ticket);
            true
        } else {
            false
        }
    }

    /// Removal timer fired. True if `ticket` is still on screen and should be removed.
    pub fn finish(&mut self, ticket: ToastTicket) -> bool {
        match self.phase {
            ToastPhase::Exiting(current) | ToastPhase::Visible(current) if current == ticket => {
                self.phase = ToastPhase::Idle;
                true
            }
            _ => false,
        }
    }
}

/// Strip angle brackets so the message can never carry markup.
pub fn sanitize_message(message: &str) -> String {
    message.chars().filter(|c| !matches!(c, '<' | '>')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_angle_brackets() {
        assert_eq!(sanitize_message("<b>hi</b>"), "bhi/b");
        assert_eq!(sanitize_message("✅ Berhasil disalin!"), "✅ Berhasil disalin!");
        assert_eq!(sanitize_message("<<>>"), "");
    }

    #[test]
    fn test_full_lifecycle() {
        let mut slot = ToastSlot::new();
        let (ticket, preempted) = slot.show();
        assert!(!preempted);
        assert!(slot.begin_exit(ticket));
        assert_eq!(slot.phase(), ToastPhase::Exiting(ticket));
        assert!(slot.finish(ticket));
        assert_eq!(slot.phase(), ToastPhase::Idle);
    }

    #[test]
    fn test_preempted_toast_timers_are_ignored() {
        let mut slot = ToastSlot::new();
        let (first, _) = slot.show();
        let (second, preempted) = slot.show();
        assert!(preempted);
        assert_ne!(first, second);

        assert!(!slot.begin_exit(first));
        assert!(!slot.finish(first));
        assert_eq!(slot.phase(), ToastPhase::Visible(second));
    }

    #[test]
    fn test_preempt_during_exit() {
        let mut slot = ToastSlot::new();
        let (first, _) = slot.show();
        assert!(slot.begin_exit(first));
        let (second, preempted) = slot.show();
        assert!(preempted);
        assert!(!slot.finish(first));
        assert!(slot.begin_exit(second));
        assert!(slot.finish(second));
    }

    #[test]
    fn test_rapid_fire_leaves_one_toast() {
        let mut slot = ToastSlot::new();
        let tickets: Vec<ToastTicket> = (0..50).map(|_| slot.show().0).collect();
        let live = tickets.iter().filter(|t| slot.clone().begin_exit(**t)).count();
        assert_eq!(live, 1);
    }
}
