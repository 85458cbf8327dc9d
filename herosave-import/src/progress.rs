//! Import progress reporting.
//!
//! Operations accept an explicit reporter instead of discovering a log target
//! from ambient state; the CLI wires one up per invocation.

/// Trait for receiving import progress updates.
pub trait ImportProgress {
    /// Called after each row lands in the store. `payload_len` carries the
    /// decoded archive length for player rows.
    fn on_record(&self, table: &str, db_guid: i64, payload_len: Option<usize>);

    /// Called when a phase starts or finishes a notable step.
    fn on_phase(&self, message: &str);

    /// Called when the import is complete.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_record(&self, _table: &str, _db_guid: i64, _payload_len: Option<usize>) {}
    fn on_phase(&self, _message: &str) {}
    fn on_complete(&self, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl ImportProgress for LogProgress {
    fn on_record(&self, table: &str, db_guid: i64, payload_len: Option<usize>) {
        match payload_len {
            Some(len) => log::info!("Imported {} {} with archive length {}", table, db_guid, len),
            None => log::info!("Imported {} {}", table, db_guid),
        }
    }

    fn on_phase(&self, message: &str) {
        log::info!("{}", message);
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
