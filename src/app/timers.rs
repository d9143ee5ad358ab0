//! Timer-Queue für verzögerte und periodische Commands.
//!
//! Läuft kooperativ im Host-Loop: `AppController::tick` schiebt die Uhr vor und
//! führt fällige Commands aus. Jeder Timer hat ein explizites Handle; periodische
//! Timer laufen, bis sie über dieses Handle abgebrochen werden.

use super::AppCommand;
use std::time::{Duration, Instant};

/// Handle eines geplanten Timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct TimerEntry {
    id: TimerId,
    due: Instant,
    interval: Option<Duration>,
    command: AppCommand,
}

/// Geplante Commands, sortiert nach Fälligkeit bei der Auswertung.
#[derive(Debug)]
pub struct TimerQueue {
    now: Instant,
    next_id: u64,
    entries: Vec<TimerEntry>,
}

impl TimerQueue {
    /// Erstellt eine leere Queue mit Startzeitpunkt `now`.
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            next_id: 1,
            entries: Vec::new(),
        }
    }

    /// Letzter bekannter Zeitpunkt des Host-Loops.
    pub fn now(&self) -> Instant {
        self.now
    }

    fn allocate_id(&mut self) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Plant einen einmaligen Command nach `delay`.
    pub fn schedule_once(&mut self, delay: Duration, command: AppCommand) -> TimerId {
        let id = self.allocate_id();
        self.entries.push(TimerEntry {
            id,
            due: self.now + delay,
            interval: None,
            command,
        });
        id
    }

    /// Plant einen periodischen Command im Abstand `interval`.
    pub fn schedule_repeating(&mut self, interval: Duration, command: AppCommand) -> TimerId {
        let id = self.allocate_id();
        self.entries.push(TimerEntry {
            id,
            due: self.now + interval,
            interval: Some(interval),
            command,
        });
        id
    }

    /// Bricht einen Timer ab. Gibt `false` zurück, wenn er nicht (mehr) geplant war.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Prüft, ob ein Timer noch geplant ist.
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Anzahl geplanter Timer.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Timer geplant sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Schiebt die Uhr auf `now` vor und liefert alle fälligen Commands.
    ///
    /// Einmalige Timer werden entfernt, periodische feuern höchstens einmal pro
    /// Aufruf und werden ab `now` neu geplant. Reihenfolge: Fälligkeit, dann Planung.
    pub fn advance(&mut self, now: Instant) -> Vec<AppCommand> {
        if now > self.now {
            self.now = now;
        }

        let mut fired: Vec<(Instant, TimerId, AppCommand)> = Vec::new();
        let mut remaining = Vec::with_capacity(self.entries.len());

        for mut entry in self.entries.drain(..) {
            if entry.due > self.now {
                remaining.push(entry);
                continue;
            }
            fired.push((entry.due, entry.id, entry.command.clone()));
            if let Some(interval) = entry.interval {
                entry.due = self.now + interval;
                remaining.push(entry);
            }
        }

        self.entries = remaining;
        fired.sort_by_key(|(due, id, _)| (*due, id.0));
        fired.into_iter().map(|(_, _, command)| command).collect()
    }
}
