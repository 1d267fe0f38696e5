/// Per-build scheme state

/// Boot code loading
pub mod bootcode;
/// Image finalization
pub mod finalize;
/// Partition validation and block accounting
pub mod layout;

use tracing::{debug, warn};

use crate::error::{Result, SchemeError};
use crate::scheme::{Scheme, SchemeRegistry};

/// State of a single image build
///
/// Holds the selected scheme and the loaded boot code. Every build gets its
/// own context, so several builds may share one registry concurrently.
pub struct BuildContext<'r> {
    registry: &'r SchemeRegistry,
    scheme: Option<&'r dyn Scheme>,
    pub(crate) boot_code: Option<Vec<u8>>,
    validated: usize,
}

impl<'r> BuildContext<'r> {
    /// Create a context with no scheme selected
    pub fn new(registry: &'r SchemeRegistry) -> Self {
        Self {
            registry,
            scheme: None,
            boot_code: None,
            validated: 0,
        }
    }

    /// The registry this build selects from
    pub fn registry(&self) -> &'r SchemeRegistry {
        self.registry
    }

    /// Select the active scheme by case-insensitive name
    ///
    /// On failure the previously active scheme, if any, is kept. Switching
    /// to a different scheme is refused once a partition has been validated,
    /// and discards any loaded boot code otherwise.
    pub fn select(&mut self, name: &str) -> Result<()> {
        let found = self
            .registry
            .find(name)
            .ok_or_else(|| SchemeError::SchemeNotFound(name.to_string()))?;

        if let Some(current) = self.scheme {
            if current.name() == found.name() {
                return Ok(());
            }
            if self.is_locked() {
                warn!(
                    "Refusing to switch scheme from {} to {} after {} partitions were validated",
                    current.name(),
                    found.name(),
                    self.validated
                );
                return Err(SchemeError::SchemeLocked {
                    current: current.name().to_string(),
                    requested: found.name().to_string(),
                });
            }
            if self.boot_code.take().is_some() {
                debug!("Discarding boot code loaded for {}", current.name());
            }
        }

        debug!("Selected scheme {}", found.name());
        self.scheme = Some(found);
        Ok(())
    }

    /// The active scheme, if one was selected
    pub fn current(&self) -> Option<&'r dyn Scheme> {
        self.scheme
    }

    /// The active scheme, or `NoSchemeSelected`
    pub(crate) fn scheme(&self) -> Result<&'r dyn Scheme> {
        self.scheme.ok_or(SchemeError::NoSchemeSelected)
    }

    /// Has validation started, fixing the scheme for this build?
    pub fn is_locked(&self) -> bool {
        self.validated > 0
    }

    /// Number of partitions validated so far
    pub fn validated_count(&self) -> usize {
        self.validated
    }

    /// Maximum number of partitions of the active scheme (0 = unbounded)
    pub fn max_partitions(&self) -> Result<u32> {
        Ok(self.scheme()?.max_partitions())
    }

    /// Maximum sector size of the active scheme
    pub fn max_sector_size(&self) -> Result<u32> {
        Ok(self.scheme()?.max_sector_size())
    }
}

impl std::fmt::Debug for BuildContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildContext")
            .field("scheme", &self.scheme.map(|s| s.name()))
            .field("boot_code", &self.boot_code.as_ref().map(|b| b.len()))
            .field("validated", &self.validated)
            .finish()
    }
}
