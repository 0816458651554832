//! Registration locator model.
//!
//! # Responsibility
//! - Define the structured form of legacy compound registration numbers.
//! - Keep the flat sequence number and its volume/page decomposition in
//!   one value so either form can be handed to templates.
//!
//! # Invariants
//! - `sequence` alone is sufficient to re-derive `position` under the
//!   active scheme, and vice versa (round-trip).
//! - `position` is `None` exactly when the year/sequence pair uses plain
//!   sequential numbering.

use serde::{Deserialize, Serialize};

/// Flat registration sequence number as stored in the index tables.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type SequenceNumber = u32;

/// Volume/page/column decomposition of a pre-1873 compound number.
///
/// Three entries were transcribed per ledger page, so `column` is always
/// 1, 2 or 3 for a valid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumePosition {
    /// Ledger volume, 1-based.
    pub volume: u32,
    /// Page within the volume.
    pub page: u32,
    /// Column on the page, 1..=3.
    pub column: u8,
}

/// Page/item decomposition used by the county marriage registers.
///
/// Only data-migration flows read or write this form; report navigation
/// never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyPosition {
    /// Register page, 0-based within the encoded range.
    pub page: u32,
    /// Item on the page, 0..=9.
    pub item: u8,
}

/// Canonical locator for one registration record.
///
/// Serialized with the flat wire names the template layer already binds
/// (`regnum` plus flattened `volume`/`page`/`column` when present).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationLocator {
    /// Registration year the number was issued under.
    pub year: u16,
    /// Flat sequence number; serialized as `regnum` to match the form
    /// field and query parameter naming.
    #[serde(rename = "regnum")]
    pub sequence: SequenceNumber,
    /// Structured position, present only under the column scheme.
    #[serde(flatten)]
    pub position: Option<VolumePosition>,
}

impl RegistrationLocator {
    /// Creates a plain sequential locator with no structured position.
    pub fn sequential(year: u16, sequence: SequenceNumber) -> Self {
        Self {
            year,
            sequence,
            position: None,
        }
    }

    /// Creates a locator carrying its volume/page/column decomposition.
    ///
    /// Used by the codec after classifying a number into the column
    /// scheme; callers should not assemble positions by hand.
    pub fn with_position(year: u16, sequence: SequenceNumber, position: VolumePosition) -> Self {
        Self {
            year,
            sequence,
            position: Some(position),
        }
    }

    /// Returns whether this locator carries a structured position.
    pub fn has_position(&self) -> bool {
        self.position.is_some()
    }
}
