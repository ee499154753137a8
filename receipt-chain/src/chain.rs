//! Chain selection.
//!
//! A selector is free-form text coming from the caller ("ERC20", "Polygon",
//! "trc20", ...). Resolution never fails: anything that is not the Tron
//! token falls back to the EVM family.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

/// Label used when the selector is blank.
pub const DEFAULT_LABEL: &str = "ERC20";

/// Selector token for Tron.
pub const TRON_LABEL: &str = "TRC20";

/// Address encoding family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChainKind {
    /// Ethereum and every EVM-compatible chain: `0x` + 20 hex-encoded bytes.
    #[default]
    EvmLike,
    /// Tron: version byte `0x41` + 20 bytes, Base58Check encoded.
    Tron,
}

impl ChainKind {
    /// Resolve a selector, matching `TRC20` case-insensitively.
    pub fn resolve(selector: &str) -> Self {
        if selector.eq_ignore_ascii_case(TRON_LABEL) {
            Self::Tron
        } else {
            Self::EvmLike
        }
    }

    /// Human-readable family name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::EvmLike => "EVM",
            Self::Tron => "Tron",
        }
    }
}

impl fmt::Display for ChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved chain selector: the encoding family plus the label shown to
/// the user.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Chain {
    kind: ChainKind,
    label: String,
}

impl Chain {
    /// Resolve a free-form selector.
    ///
    /// Blank input becomes `ERC20`, any casing of `TRC20` becomes `TRC20`,
    /// and every other selector keeps its text as the label while using the
    /// EVM encoding.
    pub fn parse(selector: &str) -> Self {
        if selector.trim().is_empty() {
            return Self {
                kind: ChainKind::EvmLike,
                label: DEFAULT_LABEL.to_string(),
            };
        }

        let kind = ChainKind::resolve(selector);
        let label = match kind {
            ChainKind::Tron => TRON_LABEL.to_string(),
            ChainKind::EvmLike => selector.to_string(),
        };
        tracing::trace!(selector, %kind, "resolved chain selector");
        Self { kind, label }
    }

    /// The address encoding family.
    pub const fn kind(&self) -> ChainKind {
        self.kind
    }

    /// The label carried into wallet records.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::parse("")
    }
}

impl FromStr for Chain {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Chain {
    fn from(selector: &str) -> Self {
        Self::parse(selector)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
