/// Resizable, seekable image outputs

use std::fs::File;
use std::io::{self, Cursor, Seek, Write};

/// A seekable byte sink whose length can be set explicitly
///
/// Finalization resizes the output to the full image size before the scheme
/// writes its structures, so outputs must support both growing (zero fill)
/// and shrinking.
pub trait ImageOutput: Write + Seek {
    /// Truncate or zero-extend to exactly `len` bytes
    fn set_len(&mut self, len: u64) -> io::Result<()>;
}

impl ImageOutput for File {
    fn set_len(&mut self, len: u64) -> io::Result<()> {
        File::set_len(self, len)
    }
}

impl ImageOutput for Cursor<Vec<u8>> {
    fn set_len(&mut self, len: u64) -> io::Result<()> {
        let len = usize::try_from(len)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "image too large"))?;
        self.get_mut().resize(len, 0);
        Ok(())
    }
}
