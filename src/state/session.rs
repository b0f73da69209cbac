//! Per-session counters

/// Default number of clicks between "interactions" milestones
pub const DEFAULT_INTERACTION_MILESTONE: u64 = 10;
/// Default number of mouse movements between milestones
pub const DEFAULT_MOUSE_MILESTONE: u64 = 100;

/// Counters owned by one running session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStats {
    /// Clicks on the click button
    pub click_count: u64,
    /// Value of the counter widget
    pub counter: i64,
    /// Clicks and activations anywhere
    pub total_interactions: u64,
    pub mouse_movements: u64,
    interaction_milestone: u64,
    mouse_milestone: u64,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new(DEFAULT_INTERACTION_MILESTONE, DEFAULT_MOUSE_MILESTONE)
    }
}

impl SessionStats {
    /// Create counters with custom milestone intervals (zero is treated as one)
    pub fn new(interaction_milestone: u64, mouse_milestone: u64) -> Self {
        Self {
            click_count: 0,
            counter: 0,
            total_interactions: 0,
            mouse_movements: 0,
            interaction_milestone: interaction_milestone.max(1),
            mouse_milestone: mouse_milestone.max(1),
        }
    }

    /// Count a click on the click button, returning the new total
    pub fn record_click(&mut self) -> u64 {
        self.click_count += 1;
        self.click_count
    }

    /// Count an interaction. Returns the total when it lands on a milestone.
    pub fn record_interaction(&mut self) -> Option<u64> {
        self.total_interactions += 1;
        (self.total_interactions % self.interaction_milestone == 0)
            .then_some(self.total_interactions)
    }

    /// Count a mouse movement. Returns the total when it lands on a milestone.
    pub fn record_mouse_move(&mut self) -> Option<u64> {
        self.mouse_movements += 1;
        (self.mouse_movements % self.mouse_milestone == 0).then_some(self.mouse_movements)
    }

    pub fn increment(&mut self) -> i64 {
        self.counter += 1;
        self.counter
    }

    pub fn decrement(&mut self) -> i64 {
        self.counter -= 1;
        self.counter
    }

    pub fn reset_counter(&mut self) {
        self.counter = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_milestones() {
        let mut stats = SessionStats::default();
        for _ in 0..9 {
            assert_eq!(stats.record_interaction(), None);
        }
        assert_eq!(stats.record_interaction(), Some(10));
        assert_eq!(stats.record_interaction(), None);
    }

    #[test]
    fn test_mouse_milestone_every_hundred() {
        let mut stats = SessionStats::default();
        let hits: Vec<u64> = (0..250).filter_map(|_| stats.record_mouse_move()).collect();
        assert_eq!(hits, vec![100, 200]);
        assert_eq!(stats.mouse_movements, 250);
    }

    #[test]
    fn test_custom_milestones() {
        let mut stats = SessionStats::new(3, 2);
        let hits: Vec<u64> = (0..7).filter_map(|_| stats.record_interaction()).collect();
        assert_eq!(hits, vec![3, 6]);
        assert_eq!(stats.record_mouse_move(), None);
        assert_eq!(stats.record_mouse_move(), Some(2));
    }

    #[test]
    fn test_zero_milestone_does_not_divide_by_zero() {
        let mut stats = SessionStats::new(0, 0);
        assert_eq!(stats.record_interaction(), Some(1));
        assert_eq!(stats.record_mouse_move(), Some(1));
    }

    #[test]
    fn test_counter_goes_negative_and_resets() {
        let mut stats = SessionStats::default();
        assert_eq!(stats.increment(), 1);
        assert_eq!(stats.decrement(), 0);
        assert_eq!(stats.decrement(), -1);
        stats.reset_counter();
        assert_eq!(stats.counter, 0);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = SessionStats::default();
        let b = SessionStats::default();
        a.record_click();
        a.record_click();
        assert_eq!(a.click_count, 2);
        assert_eq!(b.click_count, 0);
    }
}
