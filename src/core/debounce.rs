use std::time::{
    Duration,
    Instant,
};

/// Single-slot delayed trigger: scheduling replaces any pending run, so at
/// most one recomputation is outstanding at a time.
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    pub fn schedule(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once per schedule, after the delay has elapsed.
    pub fn fire(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_delay() {
        let mut debouncer = Debouncer::new(Duration::ZERO);
        assert!(!debouncer.fire());

        debouncer.schedule();
        assert!(debouncer.fire());
        assert!(!debouncer.fire());
    }

    #[test]
    fn test_schedule_replaces_pending_run() {
        let mut debouncer = Debouncer::new(Duration::from_millis(200));
        debouncer.schedule();
        let first = debouncer.deadline.unwrap();
        debouncer.schedule();
        let second = debouncer.deadline.unwrap();
        assert!(second >= first);
        assert!(debouncer.is_pending());

        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire());
    }
}
