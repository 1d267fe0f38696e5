/// Image build options

use crate::error::{Result, SchemeError};

/// Smallest supported sector size
pub const MIN_SECTOR_SIZE: u32 = 512;

/// Options shared by every partition of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageConfig {
    /// Sector size in bytes; one block of the image
    pub sector_size: u32,
}

impl ImageConfig {
    /// Create a configuration with the given sector size
    pub fn new(sector_size: u32) -> Self {
        Self { sector_size }
    }

    /// Classic 512-byte sectors
    pub fn legacy() -> Self {
        Self::new(512)
    }

    /// 4K native sectors
    pub fn advanced_format() -> Self {
        Self::new(4096)
    }

    /// Set the sector size
    pub fn with_sector_size(mut self, sector_size: u32) -> Self {
        self.sector_size = sector_size;
        self
    }

    /// Check the sector size is a power of two of at least 512 bytes
    pub fn validate(&self) -> Result<()> {
        if self.sector_size < MIN_SECTOR_SIZE || !self.sector_size.is_power_of_two() {
            return Err(SchemeError::InvalidSectorSize(self.sector_size));
        }
        Ok(())
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self::legacy()
    }
}
