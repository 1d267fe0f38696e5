use thiserror::Error;

/// Result type alias for partition scheme operations
pub type Result<T> = std::result::Result<T, SchemeError>;

/// Errors that can occur while laying out a partitioned image
#[derive(Debug, Error)]
pub enum SchemeError {
    /// No registered scheme carries the requested name
    #[error("Scheme not found: {0}")]
    SchemeNotFound(String),

    /// A layout, validation or finalize call was made before selecting a scheme
    #[error("No partitioning scheme selected")]
    NoSchemeSelected,

    /// Re-selection was attempted after partitions were validated
    #[error("Scheme {current} is locked; cannot switch to {requested} after partitions were validated")]
    SchemeLocked {
        /// Name of the active scheme
        current: String,
        /// Name that was requested
        requested: String,
    },

    /// The partition type alias is not a recognized name
    #[error("Invalid partition type alias: {0}")]
    InvalidAlias(String),

    /// A layout was started from a context that already validated partitions
    #[error("Build context already validated {0} partitions")]
    ContextInUse(usize),

    /// The alias is recognized but the active scheme has no type code for it
    #[error("Partition type {alias} is not supported by the {scheme} scheme")]
    UnsupportedAlias {
        /// Alias as supplied by the caller
        alias: String,
        /// Name of the active scheme
        scheme: String,
    },

    /// Partition label exceeds the scheme's limit
    #[error("Label {label:?} is {length} bytes long (max: {max})")]
    LabelTooLong {
        /// The offending label
        label: String,
        /// Length of the label in bytes
        length: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// The active scheme has no slot for the requested feature
    #[error("Unsupported feature: {0}")]
    UnsupportedFeature(String),

    /// Boot code is larger than the scheme's boot code area
    #[error("Boot code is {size} bytes (capacity: {capacity})")]
    TooLarge {
        /// Size of the boot code source in bytes
        size: u64,
        /// Capacity of the scheme's boot code area in bytes
        capacity: usize,
    },

    /// I/O error while reading an input
    #[error("Read error: {0}")]
    ReadError(#[source] std::io::Error),

    /// I/O error while resizing or writing the output image
    #[error("Write error: {0}")]
    WriteError(#[source] std::io::Error),

    /// A buffer of the given size could not be allocated
    #[error("Allocation of {0} bytes failed")]
    AllocationFailure(usize),

    /// More partitions were added than the scheme can describe
    #[error("Too many partitions (max: {max})")]
    TooManyPartitions {
        /// Maximum number of partitions for the scheme
        max: u32,
    },

    /// Sector size is larger than the scheme supports
    #[error("Sector size {sector_size} exceeds the scheme maximum of {max}")]
    SectorSizeTooLarge {
        /// Requested sector size
        sector_size: u32,
        /// Maximum sector size of the scheme
        max: u32,
    },

    /// Sector or block size is not a power of two of at least 512 bytes
    #[error("Invalid sector size: {0}")]
    InvalidSectorSize(u32),

    /// Block arithmetic exceeded the addressable range
    #[error("Block address overflow")]
    Overflow,
}

impl SchemeError {
    /// Create an unsupported feature error
    pub fn unsupported<S: Into<String>>(feature: S) -> Self {
        SchemeError::UnsupportedFeature(feature.into())
    }

    /// Create an unsupported alias error
    pub fn unsupported_alias<A: Into<String>, S: Into<String>>(alias: A, scheme: S) -> Self {
        SchemeError::UnsupportedAlias {
            alias: alias.into(),
            scheme: scheme.into(),
        }
    }
}
