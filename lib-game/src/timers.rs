//! Timers that fire game events. Nothing ticks on its own: the owner
//! polls with the current time and gets back the events that came due.

use log::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    SpawnPipes,
    UnblockInput,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    id: TimerId,
    event: TimerEvent,
    due: f64,
    period: Option<f64>,
}

#[derive(Debug, Default)]
pub struct Timers {
    next_id: u64,
    active: Vec<Timer>,
}

impl Timers {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            active: Vec::new(),
        }
    }

    /// Fires `event` every `period` seconds, first time at `now + period`.
    pub fn set_interval(&mut self, now: f64, period: f64, event: TimerEvent) -> TimerId {
        self.add(event, now + period, Some(period))
    }

    /// Fires `event` once at `now + delay`.
    pub fn set_timeout(&mut self, now: f64, delay: f64, event: TimerEvent) -> TimerId {
        self.add(event, now + delay, None)
    }

    /// Returns `false` if the timer has already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.active.len();
        self.active.retain(|timer| timer.id != id);

        before != self.active.len()
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.active.iter().any(|timer| timer.id == id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Appends every event due at `now` to `out`, earliest first.
    /// A repeating timer that fell more than one period behind fires
    /// once and skips the missed periods.
    pub fn poll(&mut self, now: f64, out: &mut Vec<TimerEvent>) {
        while let Some(idx) = self.earliest_due(now) {
            let timer = &mut self.active[idx];
            out.push(timer.event);

            let Some(period) = timer.period else {
                self.active.remove(idx);
                continue;
            };

            timer.due += period;
            if timer.due <= now {
                warn!(
                    "Timer {:?} is late by {:.2}ms",
                    timer.event,
                    (now - timer.due) * 1000.0
                );
                timer.due = now + period;
            }
        }
    }

    fn earliest_due(&self, now: f64) -> Option<usize> {
        self.active
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= now)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due))
            .map(|(idx, _)| idx)
    }

    fn add(&mut self, event: TimerEvent, due: f64, period: Option<f64>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.active.push(Timer {
            id,
            event,
            due,
            period,
        });

        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll(timers: &mut Timers, now: f64) -> Vec<TimerEvent> {
        let mut out = Vec::new();
        timers.poll(now, &mut out);
        out
    }

    #[test]
    fn timeout_fires_once() {
        let mut timers = Timers::new();
        let id = timers.set_timeout(2.0, 1.0, TimerEvent::UnblockInput);

        assert!(poll(&mut timers, 2.5).is_empty());
        assert_eq!(poll(&mut timers, 3.0), vec![TimerEvent::UnblockInput]);
        assert!(poll(&mut timers, 10.0).is_empty());
        assert!(!timers.is_active(id));
        assert!(!timers.cancel(id));
    }

    #[test]
    fn interval_repeats() {
        let mut timers = Timers::new();
        timers.set_interval(0.0, 1.5, TimerEvent::SpawnPipes);

        assert!(poll(&mut timers, 1.0).is_empty());
        assert_eq!(poll(&mut timers, 1.5), vec![TimerEvent::SpawnPipes]);
        assert!(poll(&mut timers, 2.9).is_empty());
        assert_eq!(poll(&mut timers, 3.0), vec![TimerEvent::SpawnPipes]);
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn late_interval_skips_missed_periods() {
        let mut timers = Timers::new();
        timers.set_interval(0.0, 1.5, TimerEvent::SpawnPipes);

        assert_eq!(poll(&mut timers, 10.0), vec![TimerEvent::SpawnPipes]);
        assert!(poll(&mut timers, 11.0).is_empty());
        assert_eq!(poll(&mut timers, 11.5), vec![TimerEvent::SpawnPipes]);
    }

    #[test]
    fn cancel_stops_interval() {
        let mut timers = Timers::new();
        let id = timers.set_interval(0.0, 1.5, TimerEvent::SpawnPipes);

        assert!(timers.cancel(id));
        assert!(timers.is_empty());
        assert!(poll(&mut timers, 100.0).is_empty());
    }

    #[test]
    fn events_come_out_in_due_order() {
        let mut timers = Timers::new();
        timers.set_interval(0.0, 1.5, TimerEvent::SpawnPipes);
        timers.set_timeout(0.0, 1.0, TimerEvent::UnblockInput);

        assert_eq!(
            poll(&mut timers, 1.6),
            vec![TimerEvent::UnblockInput, TimerEvent::SpawnPipes]
        );
    }
}
