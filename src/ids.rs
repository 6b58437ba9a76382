//! Identifier and clock suppliers.
//!
//! Stores never mint ids or read the wall clock directly; they ask an
//! [`IdSupplier`] and a [`Clock`] so tests can run deterministically.

use chrono::{Local, NaiveDate, TimeZone};
use std::cell::Cell;

/// Source of opaque identifiers, unique within the process lifetime.
pub trait IdSupplier {
    /// Produce a fresh identifier.
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdSupplier for UuidIds {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic `id-1`, `id-2`, ... sequence.
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: Cell<u64>,
}

impl SequentialIds {
    /// Create a sequence starting at `id-1`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSupplier for SequentialIds {
    fn next_id(&self) -> String {
        let next = self.counter.get() + 1;
        self.counter.set(next);
        format!("id-{next}")
    }
}

/// Wall clock abstraction.
pub trait Clock {
    /// Current time as epoch milliseconds.
    fn now_millis(&self) -> i64;

    /// The current calendar day in local time.
    fn today(&self) -> NaiveDate;
}

/// The system clock in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A manually driven clock.
///
/// Every call to [`Clock::now_millis`] advances the clock by one millisecond
/// so consecutive log entries get distinct, increasing timestamps.
#[derive(Debug)]
pub struct FixedClock {
    millis: Cell<i64>,
    today: Cell<NaiveDate>,
}

impl FixedClock {
    /// Create a clock positioned at the given epoch milliseconds and day.
    pub fn new(millis: i64, today: NaiveDate) -> Self {
        Self {
            millis: Cell::new(millis),
            today: Cell::new(today),
        }
    }

    /// Create a clock at local midnight of `today`.
    pub fn at(today: NaiveDate) -> Self {
        let millis = today
            .and_hms_opt(0, 0, 0)
            .and_then(|dt| Local.from_local_datetime(&dt).earliest())
            .map(|dt| dt.timestamp_millis())
            .unwrap_or(0);
        Self::new(millis, today)
    }

    /// Jump forward by `millis`.
    pub fn advance(&self, millis: i64) {
        self.millis.set(self.millis.get() + millis);
    }

    /// Move the calendar day.
    pub fn set_today(&self, today: NaiveDate) {
        self.today.set(today);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        let now = self.millis.get();
        self.millis.set(now + 1);
        now
    }

    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}
