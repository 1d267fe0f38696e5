/// Builder for partitioned image layouts

use std::path::PathBuf;

use crate::config::ImageConfig;
use crate::context::BuildContext;
use crate::error::{Result, SchemeError};
use crate::image::ImageLayout;
use crate::scheme::SchemeRegistry;

/// Builder for starting an image layout
pub struct ImageBuilder<'r> {
    registry: &'r SchemeRegistry,
    scheme: Option<String>,
    boot_code: Option<PathBuf>,
    config: ImageConfig,
}

impl<'r> ImageBuilder<'r> {
    /// Create a new builder with default values
    pub fn new(registry: &'r SchemeRegistry) -> Self {
        Self {
            registry,
            scheme: None,
            boot_code: None,
            config: ImageConfig::default(),
        }
    }

    /// Set the partition scheme by name
    pub fn scheme<S: Into<String>>(mut self, name: S) -> Self {
        self.scheme = Some(name.into());
        self
    }

    /// Set a file of boot code to embed
    pub fn boot_code<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.boot_code = Some(path.into());
        self
    }

    /// Set the build configuration
    pub fn config(mut self, config: ImageConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the sector size
    pub fn sector_size(mut self, sector_size: u32) -> Self {
        self.config.sector_size = sector_size;
        self
    }

    /// Select the scheme, load boot code and return an empty layout
    pub fn build(self) -> Result<ImageLayout<'r>> {
        self.config.validate()?;

        let mut ctx = BuildContext::new(self.registry);
        let name = self.scheme.ok_or(SchemeError::NoSchemeSelected)?;
        ctx.select(&name)?;

        let max = ctx.max_sector_size()?;
        if self.config.sector_size > max {
            return Err(SchemeError::SectorSizeTooLarge {
                sector_size: self.config.sector_size,
                max,
            });
        }

        if let Some(path) = self.boot_code {
            ctx.load_boot_code_from_path(path)?;
        }

        ImageLayout::new(ctx, self.config)
    }
}
