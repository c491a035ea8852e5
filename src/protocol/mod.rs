//! Response framing
//!
//! RESP-style serialization of query results: array headers, bulk strings,
//! simple strings, and error frames. Serialization is a pure emission step
//! with no filtering logic; it never reorders or drops items.

mod resp;

pub use resp::RespWriter;
