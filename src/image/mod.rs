/// Partition layout of an image under construction

/// Image builder for starting a layout
pub mod builder;

pub use builder::ImageBuilder;

use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::config::ImageConfig;
use crate::context::BuildContext;
use crate::error::{Result, SchemeError};
use crate::io::ImageOutput;
use crate::partition::Partition;
use crate::scheme::{Lba, SchemeRegistry};

/// An ordered list of placed partitions bound to one scheme
#[derive(Debug)]
pub struct ImageLayout<'r> {
    ctx: BuildContext<'r>,
    config: ImageConfig,
    partitions: Vec<Partition>,
    /// Start block of the next partition
    next_block: Lba,
}

impl<'r> ImageLayout<'r> {
    /// Start a layout from a fresh context with a scheme selected
    pub(crate) fn new(ctx: BuildContext<'r>, config: ImageConfig) -> Result<Self> {
        if ctx.is_locked() {
            return Err(SchemeError::ContextInUse(ctx.validated_count()));
        }
        let next_block = ctx.first_block()?;
        Ok(Self {
            ctx,
            config,
            partitions: Vec::new(),
            next_block,
        })
    }

    /// Create a new builder for a layout
    pub fn builder(registry: &'r SchemeRegistry) -> ImageBuilder<'r> {
        ImageBuilder::new(registry)
    }

    /// The build context, holding the active scheme
    pub fn context(&self) -> &BuildContext<'r> {
        &self.ctx
    }

    /// The build configuration
    pub fn config(&self) -> &ImageConfig {
        &self.config
    }

    /// Partitions placed so far
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// Number of partitions placed so far
    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    /// Block the next partition would start at; the end block once all are added
    pub fn end_block(&self) -> Lba {
        self.next_block
    }

    /// Validate a partition and place it after the previous one
    ///
    /// On error the layout is unchanged.
    pub fn add_partition(&mut self, mut part: Partition) -> Result<&Partition> {
        let max = self.ctx.max_partitions()?;
        if max != 0 && self.partitions.len() >= max as usize {
            return Err(SchemeError::TooManyPartitions { max });
        }

        let start = self.next_block;
        let next = self.ctx.next_block(start, part.size)?;
        self.ctx.validate_partition(&mut part)?;

        part.index = self.partitions.len();
        part.start_block = start;
        debug!(
            "Partition {} ({}) at block {} for {} blocks",
            part.index, part.alias, part.start_block, part.size
        );
        self.next_block = next;
        self.partitions.push(part);
        Ok(&self.partitions[self.partitions.len() - 1])
    }

    /// Size `output` and write the scheme's metadata for all placed partitions
    ///
    /// Partition contents are not written. On error the output must be
    /// discarded.
    pub fn write(self, output: &mut dyn ImageOutput) -> Result<()> {
        self.ctx.finalize(
            output,
            &self.partitions,
            self.next_block,
            self.config.sector_size,
        )
    }

    /// Create (or truncate) a file at `path` and write the layout into it
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let mut file = File::create(path).map_err(SchemeError::WriteError)?;
        self.write(&mut file)
    }
}
