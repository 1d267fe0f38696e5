/// Partition scheme plugin contract

/// Registry of available schemes
pub mod registry;

pub use registry::SchemeRegistry;

use std::fmt;

use crate::alias::Alias;
use crate::error::Result;
use crate::io::ImageOutput;
use crate::partition::Partition;

/// Logical block address, counted in sectors
pub type Lba = u64;

/// Accounting slots a scheme uses to declare its structural overhead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataPosition {
    /// Before the first partition, once per image (e.g. a GPT header and table)
    BeforeImage,
    /// Before every partition (e.g. an EBR sector preceding each logical partition)
    BeforePartition,
    /// After every partition
    AfterPartition,
    /// At the tail of the image, once (e.g. a backup GPT)
    EndOfImage,
}

/// Scheme-specific concrete partition type code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionType {
    /// Numeric type code (MBR/EBR system IDs, BSD fstypes)
    Code(u32),
    /// Type GUID, stored in on-disk byte order
    Guid([u8; 16]),
}

impl fmt::Display for PartitionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionType::Code(code) => write!(f, "{:#04x}", code),
            PartitionType::Guid(guid) => {
                for (i, byte) in guid.iter().enumerate() {
                    if matches!(i, 4 | 6 | 8 | 10) {
                        write!(f, "-")?;
                    }
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}

/// One supported alias of a scheme paired with its concrete type code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasMapping {
    /// Scheme-independent alias
    pub alias: Alias,
    /// Type code written to disk for this alias
    pub part_type: PartitionType,
}

impl AliasMapping {
    /// Pair an alias with a numeric type code
    pub const fn code(alias: Alias, code: u32) -> Self {
        Self {
            alias,
            part_type: PartitionType::Code(code),
        }
    }

    /// Pair an alias with a type GUID
    pub const fn guid(alias: Alias, guid: [u8; 16]) -> Self {
        Self {
            alias,
            part_type: PartitionType::Guid(guid),
        }
    }
}

/// A pluggable on-disk partition table format
///
/// Implementations encode their own structures in [`Scheme::write`]; the
/// framework only relies on the declared limits and metadata sizes to place
/// partitions.
pub trait Scheme: Send + Sync {
    /// Unique name, compared case-insensitively
    fn name(&self) -> &str;

    /// Short human-readable description
    fn description(&self) -> &str {
        ""
    }

    /// Maximum number of partitions (0 = unbounded)
    fn max_partitions(&self) -> u32;

    /// Largest sector size the on-disk format can describe
    fn max_sector_size(&self) -> u32;

    /// Maximum partition label length in bytes (0 = labels unsupported)
    fn max_label_length(&self) -> usize;

    /// Supported aliases in preference order
    ///
    /// Scanning stops at the first [`Alias::None`] entry, if any.
    fn aliases(&self) -> &[AliasMapping];

    /// Size of the boot code area in bytes (0 = no boot code slot)
    fn boot_code_capacity(&self) -> usize {
        0
    }

    /// Number of blocks of metadata at the given position
    fn metadata(&self, position: MetadataPosition) -> Lba;

    /// Encode all on-disk metadata into `output`
    ///
    /// `end` is the final image size in blocks. `parts` are the validated
    /// partitions in placement order, each with its type and start block
    /// resolved. `boot_code` is exactly [`Scheme::boot_code_capacity`] bytes
    /// when present; `None` means the boot area is left empty.
    fn write(
        &self,
        output: &mut dyn ImageOutput,
        end: Lba,
        parts: &[Partition],
        boot_code: Option<&[u8]>,
    ) -> Result<()>;

    /// Look up the concrete type code for an alias
    fn type_for(&self, alias: Alias) -> Option<PartitionType> {
        self.aliases()
            .iter()
            .take_while(|mapping| !mapping.alias.is_none())
            .find(|mapping| mapping.alias == alias)
            .map(|mapping| mapping.part_type)
    }
}

impl fmt::Debug for dyn Scheme + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheme")
            .field("name", &self.name())
            .field("max_partitions", &self.max_partitions())
            .field("max_sector_size", &self.max_sector_size())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Scheme with configurable metadata sizes that records what it was written with
    pub struct MockScheme {
        pub name: &'static str,
        pub max_parts: u32,
        pub max_secsz: u32,
        pub label_len: usize,
        pub aliases: Vec<AliasMapping>,
        pub boot_capacity: usize,
        /// BeforeImage, BeforePartition, AfterPartition, EndOfImage
        pub meta: [Lba; 4],
        pub written_end: Arc<AtomicU64>,
        pub written_parts: Arc<AtomicUsize>,
    }

    impl MockScheme {
        pub fn new(name: &'static str) -> Self {
            Self {
                name,
                max_parts: 4,
                max_secsz: 4096,
                label_len: 0,
                aliases: vec![AliasMapping::code(Alias::FreeBsdUfs, 0xA5)],
                boot_capacity: 0,
                meta: [0; 4],
                written_end: Arc::new(AtomicU64::new(u64::MAX)),
                written_parts: Arc::new(AtomicUsize::new(usize::MAX)),
            }
        }

        pub fn mbr() -> Self {
            let mut scheme = Self::new("mbr");
            scheme.boot_capacity = 512;
            scheme.meta = [1, 0, 0, 0];
            scheme
        }
    }

    impl Scheme for MockScheme {
        fn name(&self) -> &str {
            self.name
        }

        fn max_partitions(&self) -> u32 {
            self.max_parts
        }

        fn max_sector_size(&self) -> u32 {
            self.max_secsz
        }

        fn max_label_length(&self) -> usize {
            self.label_len
        }

        fn aliases(&self) -> &[AliasMapping] {
            &self.aliases
        }

        fn boot_code_capacity(&self) -> usize {
            self.boot_capacity
        }

        fn metadata(&self, position: MetadataPosition) -> Lba {
            match position {
                MetadataPosition::BeforeImage => self.meta[0],
                MetadataPosition::BeforePartition => self.meta[1],
                MetadataPosition::AfterPartition => self.meta[2],
                MetadataPosition::EndOfImage => self.meta[3],
            }
        }

        fn write(
            &self,
            output: &mut dyn ImageOutput,
            end: Lba,
            parts: &[Partition],
            boot_code: Option<&[u8]>,
        ) -> Result<()> {
            use std::io::{Seek, SeekFrom, Write};

            self.written_end.store(end, Ordering::SeqCst);
            self.written_parts.store(parts.len(), Ordering::SeqCst);
            if let Some(code) = boot_code {
                output
                    .seek(SeekFrom::Start(0))
                    .map_err(crate::error::SchemeError::WriteError)?;
                output
                    .write_all(code)
                    .map_err(crate::error::SchemeError::WriteError)?;
            }
            Ok(())
        }
    }
}
