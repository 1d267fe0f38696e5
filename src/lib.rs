/*!
# partscheme

A Rust library for laying out partitions in raw disk images through pluggable
partition schemes.

## Features

- Scheme plugins (MBR, GPT, EBR chains, ...) behind a single `Scheme` trait
- Scheme-independent partition type aliases resolved to scheme type codes
- Block accounting that honours per-image and per-partition metadata overhead
- Optional boot code, zero-padded to the scheme's boot area
- Final image sizing, then delegation to the scheme's on-disk encoder

## Quick Start

```rust,no_run
use partscheme::{ImageLayout, Partition, SchemeRegistry};

# fn schemes() -> Vec<Box<dyn partscheme::Scheme>> { Vec::new() }
// Register the schemes your tool provides
let registry = SchemeRegistry::with_schemes(schemes());

// Pick a scheme and embed boot code
let mut layout = ImageLayout::builder(&registry)
    .scheme("mbr")
    .boot_code("/boot/mbr")
    .build()?;

// Place partitions one after another
layout.add_partition(Partition::new("freebsd-boot", 1024))?;
layout.add_partition(Partition::new("freebsd-ufs", 2_097_152).with_label("rootfs"))?;

// Size the image and write the partition table
layout.save("disk.img")?;
# Ok::<(), partscheme::SchemeError>(())
```

The lower-level `BuildContext` exposes each step (select, load boot code,
validate, first/next block, finalize) for callers that drive the layout
themselves.

## Modules

- `alias`: Partition type aliases
- `scheme`: Scheme plugin contract and registry
- `context`: Per-build state and layout operations
- `image`: Layout builder
- `io`: Image outputs and boot code sources
- `error`: Error types and Result alias
*/

#![warn(missing_docs)]

/// Partition type aliases
pub mod alias;
/// Image build options
pub mod config;
/// Per-build state and layout operations
pub mod context;
/// Error types and Result alias
pub mod error;
/// Layout builder
pub mod image;
/// Image outputs and boot code sources
pub mod io;
/// Partition entries
pub mod partition;
/// Scheme plugin contract and registry
pub mod scheme;

// Re-export common types
pub use alias::{resolve_alias, Alias};
pub use config::ImageConfig;
pub use context::BuildContext;
pub use error::{Result, SchemeError};
pub use image::{ImageBuilder, ImageLayout};
pub use io::{BootSource, ImageOutput};
pub use partition::Partition;
pub use scheme::{AliasMapping, Lba, MetadataPosition, PartitionType, Scheme, SchemeRegistry};
