/// Partition entries supplied by the caller

use crate::scheme::{Lba, PartitionType};

/// A partition to be placed in the image
///
/// The caller owns partitions. Validation fills in `part_type`; layout fills
/// in `start_block`. Nothing else is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Position in the partition list
    pub index: usize,
    /// Partition type alias as supplied by the user (e.g. "freebsd-ufs")
    pub alias: String,
    /// Concrete scheme type code, set by validation
    pub part_type: Option<PartitionType>,
    /// Optional partition label
    pub label: Option<String>,
    /// Size in blocks
    pub size: Lba,
    /// First block of the partition, set by layout
    pub start_block: Lba,
}

impl Partition {
    /// Create an unlabelled partition
    pub fn new<S: Into<String>>(alias: S, size: Lba) -> Self {
        Self {
            index: 0,
            alias: alias.into(),
            part_type: None,
            label: None,
            size,
            start_block: 0,
        }
    }

    /// Set the label
    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Block following the last block of the partition
    pub fn end_block(&self) -> Lba {
        self.start_block + self.size
    }

    /// Has the type been resolved by validation?
    pub fn is_resolved(&self) -> bool {
        self.part_type.is_some()
    }
}
