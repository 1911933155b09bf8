pub mod pump;

pub use pump::{PumpSummary, StreamPump};
