//! Chunked byte-stream comparison with reusable buffers.
//!
//! Compares two readers in lockstep without materializing either stream, so
//! arbitrarily large files are supported with constant memory. A difference in
//! content *or* length makes the streams unequal; only a failed read is an
//! error.

use std::io::Read;
use std::io::{self};

use crate::VerifyError;

/// Buffer size for comparison rounds (64KB per stream).
///
/// This matches typical filesystem block sizes and provides good balance
/// between memory usage and I/O performance.
const COMPARE_BUFFER_SIZE: usize = 64 * 1024;

/// Reusable buffer pair for stream comparison.
///
/// Allocating the buffers once per verification run keeps the per-entry cost
/// of the comparator down to the reads themselves.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
///
/// use verarch_core::compare::CompareBuffer;
/// use verarch_core::compare::streams_equal;
///
/// # fn main() -> Result<(), verarch_core::VerifyError> {
/// let mut buffer = CompareBuffer::new();
/// let outcome = streams_equal(
///     &mut Cursor::new(b"same bytes"),
///     &mut Cursor::new(b"same bytes"),
///     &mut buffer,
/// )?;
/// assert!(outcome.equal);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CompareBuffer {
    lhs: Vec<u8>,
    rhs: Vec<u8>,
}

impl CompareBuffer {
    /// Creates a new zero-initialized buffer pair.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lhs: vec![0u8; COMPARE_BUFFER_SIZE],
            rhs: vec![0u8; COMPARE_BUFFER_SIZE],
        }
    }

    /// Returns the per-stream buffer size in bytes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        COMPARE_BUFFER_SIZE
    }
}

impl Default for CompareBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a stream comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// Whether both streams held identical bytes and identical lengths.
    pub equal: bool,
    /// Number of byte positions examined before the verdict.
    pub bytes_compared: u64,
}

/// Compares two streams for byte-exact equality.
///
/// Both readers are consumed in lockstep rounds of up to
/// [`CompareBuffer::size`] bytes. The comparison short-circuits on the first
/// round that differs; when one stream ends before the other the streams are
/// unequal, not in error.
///
/// # Errors
///
/// Returns [`VerifyError::Io`] if reading either stream fails. A read failure
/// is never conflated with inequality.
pub fn streams_equal<A: Read + ?Sized, B: Read + ?Sized>(
    lhs: &mut A,
    rhs: &mut B,
    buffer: &mut CompareBuffer,
) -> Result<Comparison, VerifyError> {
    let mut bytes_compared: u64 = 0;

    loop {
        let n_lhs = read_full(lhs, &mut buffer.lhs[..])?;
        let n_rhs = read_full(rhs, &mut buffer.rhs[..])?;
        bytes_compared += n_lhs.min(n_rhs) as u64;

        if n_lhs != n_rhs || buffer.lhs[..n_lhs] != buffer.rhs[..n_rhs] {
            return Ok(Comparison {
                equal: false,
                bytes_compared,
            });
        }

        // read_full only comes up short at end-of-stream, so a partial round
        // means both streams ended together.
        if n_lhs < COMPARE_BUFFER_SIZE {
            return Ok(Comparison {
                equal: true,
                bytes_compared,
            });
        }
    }
}

/// Reads until `buf` is full or the stream ends, retrying interrupted reads.
fn read_full<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
