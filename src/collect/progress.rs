//! Progress reporting for the collection loop

use crate::collect::Record;
use crate::constants::record::ADDRESS_PLACEHOLDER;
use crate::coord::Coordinates;

/// Observer notified once per attempt
pub trait Progress: Send + Sync {
    /// A candidate had no road nearby and was discarded
    fn on_discard(&self, attempt: u64, candidate: Coordinates);

    /// A record was appended
    fn on_record(&self, attempt: u64, record: &Record);
}

/// Prints one human-readable line per attempt to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleProgress;

impl ConsoleProgress {
    /// Line printed for a discarded candidate
    pub fn discard_line(attempt: u64, candidate: Coordinates) -> String {
        format!("[attempt {}] no road near {}", attempt, candidate)
    }

    /// Line printed for a new record
    pub fn record_line(record: &Record) -> String {
        let address = if record.address == ADDRESS_PLACEHOLDER {
            "on road, no address"
        } else {
            record.address.as_str()
        };
        format!("[{}] {} — {}", record.number, record.name, address)
    }
}

impl Progress for ConsoleProgress {
    fn on_discard(&self, attempt: u64, candidate: Coordinates) {
        println!("{}", Self::discard_line(attempt, candidate));
    }

    fn on_record(&self, _attempt: u64, record: &Record) {
        println!("{}", Self::record_line(record));
    }
}
