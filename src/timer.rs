/// Delayed tasks driven by the frame clock.
///
/// Nothing is ever cancelled: every scheduled task fires on the first
/// `take_due` call whose `now` has reached its due time.
#[derive(Debug)]
pub struct Timers<T> {
    next_seq: u64,
    pending: Vec<Scheduled<T>>,
}

#[derive(Debug)]
struct Scheduled<T> {
    due: f64,
    seq: u64,
    task: T,
}

impl<T> Timers<T> {
    pub fn new() -> Self {
        Self {
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    pub fn schedule(&mut self, now: f64, delay: f64, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Scheduled {
            due: now + delay.max(0.0),
            seq,
            task,
        });
    }

    /// Removes and returns the tasks due at `now`, each with its due time,
    /// ordered by due time and then by scheduling order.
    pub fn take_due(&mut self, now: f64) -> Vec<(f64, T)> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = pending;

        due.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|s| (s.due, s.task)).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self::new()
    }
}
