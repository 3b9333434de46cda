//! Record sink module for the outbound submission call

mod client;
mod traits;

pub use client::HttpSink;
pub use traits::RecordSink;

#[cfg(test)]
pub use traits::MockRecordSink;
