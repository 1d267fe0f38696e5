/// Partition validation and block accounting

use super::BuildContext;
use crate::alias::{resolve_alias, Alias};
use crate::error::{Result, SchemeError};
use crate::partition::Partition;
use crate::scheme::{Lba, MetadataPosition};

impl BuildContext<'_> {
    /// Check a partition against the active scheme and resolve its type
    ///
    /// An unknown alias is reported before an alias the scheme lacks, and
    /// both before the label length. On error the partition is unchanged.
    pub fn validate_partition(&mut self, part: &mut Partition) -> Result<()> {
        let scheme = self.scheme()?;

        let alias = resolve_alias(&part.alias);
        if alias == Alias::None {
            return Err(SchemeError::InvalidAlias(part.alias.clone()));
        }

        let part_type = scheme
            .type_for(alias)
            .ok_or_else(|| SchemeError::unsupported_alias(&part.alias, scheme.name()))?;

        if let Some(label) = &part.label {
            let length = label.len();
            let max = scheme.max_label_length();
            if length > max {
                return Err(SchemeError::LabelTooLong {
                    label: label.clone(),
                    length,
                    max,
                });
            }
        }

        part.part_type = Some(part_type);
        self.validated += 1;
        Ok(())
    }

    /// Block at which the first partition's content may begin
    pub fn first_block(&self) -> Result<Lba> {
        let scheme = self.scheme()?;
        scheme
            .metadata(MetadataPosition::BeforeImage)
            .checked_add(scheme.metadata(MetadataPosition::BeforePartition))
            .ok_or(SchemeError::Overflow)
    }

    /// Start block of the partition following one at `prev_start` of `prev_size` blocks
    pub fn next_block(&self, prev_start: Lba, prev_size: Lba) -> Result<Lba> {
        let scheme = self.scheme()?;
        let overhead = scheme
            .metadata(MetadataPosition::AfterPartition)
            .checked_add(scheme.metadata(MetadataPosition::BeforePartition))
            .ok_or(SchemeError::Overflow)?;
        prev_start
            .checked_add(prev_size)
            .and_then(|end| end.checked_add(overhead))
            .ok_or(SchemeError::Overflow)
    }
}
