//! Error types for species-core.
//!
//! Stat randomization itself never fails: retries and the bounded correction
//! loop degrade silently. The only errors come from resolving ids against a
//! [`Dex`](crate::Dex) or from inserting records and edges into it.

use crate::entity::SpeciesId;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: duplicate species, edge closing a cycle
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: an edge or form link naming a species the dex never saw
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Errors raised by [`Dex`](crate::Dex) lookups and graph insertion.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DexError {
    /// No creature registered under this id.
    #[error("unknown species {0}")]
    UnknownSpecies(SpeciesId),

    /// A creature with this id is already registered.
    #[error("species {0} is already registered")]
    DuplicateSpecies(SpeciesId),

    /// An evolution edge from a creature to itself.
    #[error("species {0} cannot evolve into itself")]
    SelfEvolution(SpeciesId),

    /// The edge would make the evolution graph cyclic.
    #[error("evolution {from} -> {to} would close a cycle")]
    EvolutionCycle {
        /// Pre-evolution.
        from: SpeciesId,
        /// Evolution.
        to: SpeciesId,
    },
}

impl DexError {
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownSpecies(_) => ErrorSeverity::Internal,
            Self::DuplicateSpecies(_) | Self::SelfEvolution(_) | Self::EvolutionCycle { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    /// Static identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownSpecies(_) => "DEX_UNKNOWN_SPECIES",
            Self::DuplicateSpecies(_) => "DEX_DUPLICATE_SPECIES",
            Self::SelfEvolution(_) => "DEX_SELF_EVOLUTION",
            Self::EvolutionCycle { .. } => "DEX_EVOLUTION_CYCLE",
        }
    }
}

pub type DexResult<T> = Result<T, DexError>;
