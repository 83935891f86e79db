mod match_history;
mod match_record;
mod store;

pub use match_history::{DEFAULT_MAX_RECORDS, MAX_RECORDS_LIMIT, MatchHistory, MatchStats};
pub use match_record::{MatchRecord, MatchWinner, format_timestamp};
pub use store::HistoryStore;
