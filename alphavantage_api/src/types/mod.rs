mod de;

mod meta;
pub use self::meta::{MetaData, Response};

mod intraday;
pub use self::intraday::{IntradayResponse, Quote, TimeSeries};
