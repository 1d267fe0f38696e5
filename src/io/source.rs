/// Boot code input sources

use std::fs::File;
use std::io::{self, Cursor, Read};

/// A readable source that can report its total size up front
pub trait BootSource: Read {
    /// Total size of the source in bytes
    fn size(&mut self) -> io::Result<u64>;
}

impl BootSource for File {
    fn size(&mut self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }
}

impl<T: AsRef<[u8]>> BootSource for Cursor<T> {
    fn size(&mut self) -> io::Result<u64> {
        Ok(self.get_ref().as_ref().len() as u64)
    }
}
