/// Scheme-independent partition type aliases

use std::fmt;
use std::str::FromStr;

use crate::error::SchemeError;

/// Partition type identifiers understood across all schemes
///
/// `None` is a sentinel returned by [`resolve_alias`] when a name does not
/// match any entry. It is never a valid partition type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alias {
    /// No match
    None,
    /// Extended boot record (a link in a logical partition chain)
    Ebr,
    /// EFI system partition
    Efi,
    /// FAT32 filesystem
    Fat32,
    /// FreeBSD slice
    FreeBsd,
    /// FreeBSD boot partition
    FreeBsdBoot,
    /// FreeBSD NAND filesystem
    FreeBsdNandfs,
    /// FreeBSD swap
    FreeBsdSwap,
    /// FreeBSD UFS filesystem
    FreeBsdUfs,
    /// FreeBSD Vinum volume
    FreeBsdVinum,
    /// FreeBSD ZFS
    FreeBsdZfs,
    /// Nested MBR
    Mbr,
}

/// Name to alias lookup table
const ALIAS_TABLE: &[(&str, Alias)] = &[
    ("ebr", Alias::Ebr),
    ("efi", Alias::Efi),
    ("fat32", Alias::Fat32),
    ("freebsd", Alias::FreeBsd),
    ("freebsd-boot", Alias::FreeBsdBoot),
    ("freebsd-nandfs", Alias::FreeBsdNandfs),
    ("freebsd-swap", Alias::FreeBsdSwap),
    ("freebsd-ufs", Alias::FreeBsdUfs),
    ("freebsd-vinum", Alias::FreeBsdVinum),
    ("freebsd-zfs", Alias::FreeBsdZfs),
    ("mbr", Alias::Mbr),
];

/// Resolve a partition type name to its alias
///
/// Matching is case-insensitive and exact. Returns [`Alias::None`] when
/// nothing matches; callers must check for it.
pub fn resolve_alias(name: &str) -> Alias {
    ALIAS_TABLE
        .iter()
        .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
        .map(|&(_, alias)| alias)
        .unwrap_or(Alias::None)
}

impl Alias {
    /// Canonical lowercase name, or `None` for the sentinel
    pub fn name(&self) -> Option<&'static str> {
        ALIAS_TABLE
            .iter()
            .find(|(_, alias)| alias == self)
            .map(|&(name, _)| name)
    }

    /// All recognized aliases in table order, excluding the sentinel
    pub fn all() -> impl Iterator<Item = Alias> {
        ALIAS_TABLE.iter().map(|&(_, alias)| alias)
    }

    /// Is this the no-match sentinel?
    pub fn is_none(&self) -> bool {
        *self == Alias::None
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().unwrap_or("none"))
    }
}

impl FromStr for Alias {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match resolve_alias(s) {
            Alias::None => Err(SchemeError::InvalidAlias(s.to_string())),
            alias => Ok(alias),
        }
    }
}
