//! Frame outputs: an in-memory sink for rendered pixels and the line-oriented state stream.

pub(crate) mod ndjson;
pub(crate) mod sink;
