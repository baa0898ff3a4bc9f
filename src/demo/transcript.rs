//! Human-readable call transcript.

use std::fmt::Display;
use std::io::{self, Write};

use crate::grpc::RpcError;

/// Indentation of lines inside a numbered section.
const INDENT: &str = "   ";

/// Writes the outcome of each call to an output (stdout in the binary).
pub struct Transcript<W: Write> {
    out: W,
}

impl<W: Write> Transcript<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Banner with the target address.
    pub fn header(&mut self, target: &str) -> io::Result<()> {
        writeln!(self.out, "=== tokio_php Rust gRPC Client ===")?;
        writeln!(self.out, "Connecting to: {}", target)?;
        self.blank()
    }

    /// Unindented line.
    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Numbered section title, e.g. `1. Health Check:`.
    pub fn section(&mut self, index: usize, title: &str) -> io::Result<()> {
        writeln!(self.out, "{}. {}:", index, title)
    }

    /// Indented `name: value` line.
    pub fn field(&mut self, name: impl Display, value: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}{}: {}", INDENT, name, value)
    }

    /// Indented call failure.
    pub fn error(&mut self, err: &RpcError) -> io::Result<()> {
        self.field("Error", err)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    fn render(f: impl FnOnce(&mut Transcript<Vec<u8>>) -> io::Result<()>) -> String {
        let mut transcript = Transcript::new(Vec::new());
        f(&mut transcript).unwrap();
        String::from_utf8(transcript.into_inner()).unwrap()
    }

    #[test]
    fn test_header() {
        let text = render(|t| t.header("localhost:50051"));
        assert_eq!(
            text,
            "=== tokio_php Rust gRPC Client ===\nConnecting to: localhost:50051\n\n"
        );
    }

    #[test]
    fn test_section_and_fields() {
        let text = render(|t| {
            t.section(2, "Execute Script")?;
            t.field("Status Code", 200)?;
            t.error(&RpcError::new(Code::NotFound, "script not found"))
        });
        assert_eq!(
            text,
            "2. Execute Script:\n   Status Code: 200\n   Error: script not found (code: NotFound)\n"
        );
    }
}
