//! Buffered RESP frame writer
//!
//! All writes accumulate in a local buffer; nothing reaches the sink until
//! [`RespWriter::flush`]. The executor relies on this: a query that fails
//! mid-traversal must never leave a partial frame on the wire.

use std::io::{self, Write};

/// Buffered RESP writer over an arbitrary byte sink
#[derive(Debug)]
pub struct RespWriter<W: Write> {
    sink: W,
    buf: Vec<u8>,
}

impl<W: Write> RespWriter<W> {
    /// Wraps a sink
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            buf: Vec::new(),
        }
    }

    /// Buffers an array header declaring `len` elements
    pub fn write_array(&mut self, len: usize) {
        self.buf.push(b'*');
        self.buf.extend_from_slice(len.to_string().as_bytes());
        self.buf.extend_from_slice(b"\r\n");
    }

    /// Buffers a bulk string
    pub fn write_bulk(&mut self, s: &str) {
        self.buf.push(b'$');
        self.buf.extend_from_slice(s.len().to_string().as_bytes());
        self.buf.extend_from_slice(b"\r\n");
        self.buf.extend_from_slice(s.as_bytes());
        self.buf.extend_from_slice(b"\r\n");
    }

    /// Buffers a simple string frame (e.g. `OK`)
    pub fn write_simple(&mut self, s: &str) {
        self.buf.push(b'+');
        self.buf.extend_from_slice(s.as_bytes());
        self.buf.extend_from_slice(b"\r\n");
    }

    /// Buffers an error frame. `msg` must be a single line.
    pub fn write_error(&mut self, msg: &str) {
        self.buf.push(b'-');
        self.buf.extend_from_slice(msg.as_bytes());
        self.buf.extend_from_slice(b"\r\n");
    }

    /// Writes all buffered frames to the sink and clears the buffer
    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.write_all(&self.buf)?;
        self.buf.clear();
        self.sink.flush()
    }

    /// Consumes the writer, returning the sink
    pub fn into_inner(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flushed(build: impl FnOnce(&mut RespWriter<Vec<u8>>)) -> Vec<u8> {
        let mut out = RespWriter::new(Vec::new());
        build(&mut out);
        out.flush().unwrap();
        out.into_inner()
    }

    #[test]
    fn test_array_header() {
        assert_eq!(flushed(|w| w.write_array(0)), b"*0\r\n");
        assert_eq!(flushed(|w| w.write_array(6)), b"*6\r\n");
    }

    #[test]
    fn test_bulk_string() {
        assert_eq!(flushed(|w| w.write_bulk("truck1")), b"$6\r\ntruck1\r\n");
        assert_eq!(flushed(|w| w.write_bulk("")), b"$0\r\n\r\n");
    }

    #[test]
    fn test_bulk_string_uses_byte_length() {
        // Multi-byte UTF-8: length prefix counts bytes, not chars
        assert_eq!(flushed(|w| w.write_bulk("é")), "$2\r\né\r\n".as_bytes());
    }

    #[test]
    fn test_simple_and_error_frames() {
        assert_eq!(flushed(|w| w.write_simple("OK")), b"+OK\r\n");
        assert_eq!(
            flushed(|w| w.write_error("ERR syntax error")),
            b"-ERR syntax error\r\n"
        );
    }

    #[test]
    fn test_nothing_reaches_sink_before_flush() {
        let mut out = RespWriter::new(Vec::new());
        out.write_array(2);
        out.write_bulk("a");
        assert!(out.into_inner().is_empty());
    }

    #[test]
    fn test_flush_clears_buffer() {
        let mut out = RespWriter::new(Vec::new());
        out.write_simple("OK");
        out.flush().unwrap();
        out.flush().unwrap();
        assert_eq!(out.into_inner(), b"+OK\r\n");
    }

    #[test]
    fn test_interleaved_pair_frame() {
        let bytes = flushed(|w| {
            w.write_array(4);
            w.write_bulk("truck1");
            w.write_bulk("valueA");
            w.write_bulk("truck2");
            w.write_bulk("valueB");
        });
        assert_eq!(
            bytes,
            b"*4\r\n$6\r\ntruck1\r\n$6\r\nvalueA\r\n$6\r\ntruck2\r\n$6\r\nvalueB\r\n"
        );
    }
}
