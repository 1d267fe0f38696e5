/// Image finalization

use tracing::info;

use super::BuildContext;
use crate::error::{Result, SchemeError};
use crate::io::ImageOutput;
use crate::partition::Partition;
use crate::scheme::{Lba, MetadataPosition};

impl BuildContext<'_> {
    /// Size the output and have the active scheme write its metadata
    ///
    /// `parts` are the validated partitions in placement order and
    /// `end_block` is the block after the last one as returned by
    /// [`BuildContext::next_block`]. The loaded boot code is handed to the
    /// scheme. This is not transactional: on error the output must be
    /// discarded.
    ///
    /// The build ends here, so the context is consumed:
    ///
    /// ```compile_fail
    /// # use partscheme::{BuildContext, SchemeRegistry};
    /// # use std::io::Cursor;
    /// let registry = SchemeRegistry::new();
    /// let ctx = BuildContext::new(&registry);
    /// let mut out = Cursor::new(Vec::<u8>::new());
    /// let _ = ctx.finalize(&mut out, &[], 1, 512);
    /// let _ = ctx.finalize(&mut out, &[], 1, 512);
    /// ```
    pub fn finalize(
        mut self,
        output: &mut dyn ImageOutput,
        parts: &[Partition],
        end_block: Lba,
        sector_size: u32,
    ) -> Result<()> {
        let scheme = self.scheme()?;

        // The accountant already reserved room before a partition that will never come
        let end = end_block
            .checked_sub(scheme.metadata(MetadataPosition::BeforePartition))
            .and_then(|end| end.checked_add(scheme.metadata(MetadataPosition::EndOfImage)))
            .ok_or(SchemeError::Overflow)?;
        let image_size = end
            .checked_mul(u64::from(sector_size))
            .ok_or(SchemeError::Overflow)?;

        output
            .set_len(image_size)
            .map_err(SchemeError::WriteError)?;

        let boot_code = self.boot_code.take();
        info!(
            "Writing {} image: {} partitions, {} blocks of {} bytes{}",
            scheme.name(),
            parts.len(),
            end,
            sector_size,
            if boot_code.is_some() { " with boot code" } else { "" }
        );
        scheme.write(output, end, parts, boot_code.as_deref())
    }
}
