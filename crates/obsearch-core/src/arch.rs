//! Target architecture allow-list.
//!
//! The mirror publishes one package index per hardware platform. The
//! architecture selects the `packages/<arch>/index.txt` path segment and
//! keys the local cache file.

/// A package architecture supported by the mirror.
///
/// # Example
///
/// ```
/// use obsearch_core::Arch;
///
/// let arch: Arch = "amd64".parse().unwrap();
/// assert_eq!(arch, Arch::default());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    /// DEC Alpha
    Alpha,
    /// AMD64 / `x86_64` (the default)
    #[default]
    Amd64,
    /// 64-bit ARM
    Arm64,
    /// 32-bit ARM v7
    Armv7,
    /// HP PA-RISC
    Hppa,
    /// 32-bit x86
    I386,
    /// Sharp Zaurus (SH-4)
    Landisk,
    /// Loongson MIPS64
    Loongson,
    /// PowerPC Macintosh
    Macppc,
    /// Cavium Octeon MIPS64
    Octeon,
    /// 64-bit PowerPC
    Powerpc64,
    /// 64-bit RISC-V
    Riscv64,
    /// Sun UltraSPARC
    Sparc64,
}

impl Arch {
    /// Every architecture the mirror publishes packages for.
    pub const ALL: &'static [Self] = &[
        Self::Alpha,
        Self::Amd64,
        Self::Arm64,
        Self::Armv7,
        Self::Hppa,
        Self::I386,
        Self::Landisk,
        Self::Loongson,
        Self::Macppc,
        Self::Octeon,
        Self::Powerpc64,
        Self::Riscv64,
        Self::Sparc64,
    ];

    /// Mirror path segment for this architecture.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Amd64 => "amd64",
            Self::Arm64 => "arm64",
            Self::Armv7 => "armv7",
            Self::Hppa => "hppa",
            Self::I386 => "i386",
            Self::Landisk => "landisk",
            Self::Loongson => "loongson",
            Self::Macppc => "macppc",
            Self::Octeon => "octeon",
            Self::Powerpc64 => "powerpc64",
            Self::Riscv64 => "riscv64",
            Self::Sparc64 => "sparc64",
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Arch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|a| a.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown architecture: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list_round_trips() {
        for arch in Arch::ALL {
            let parsed: Arch = arch.as_str().parse().unwrap();
            assert_eq!(parsed, *arch);
        }
    }

    #[test]
    fn test_unknown_arch_rejected() {
        assert!("x86_64".parse::<Arch>().is_err());
        assert!("AMD64".parse::<Arch>().is_err());
        assert!("".parse::<Arch>().is_err());
        assert!("vax".parse::<Arch>().is_err());
    }

    #[test]
    fn test_default_is_amd64() {
        assert_eq!(Arch::default(), Arch::Amd64);
        assert_eq!(Arch::default().as_str(), "amd64");
    }
}
