mod common;
pub use self::common::{OutputSize, Query};
mod intraday;
pub use self::intraday::{IntradayQuery, Interval};
