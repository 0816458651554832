//! Domain model for registration locators and transcription statistics.
//!
//! # Responsibility
//! - Define the data shapes exchanged with the external query and
//!   template collaborators.
//! - Keep one canonical locator shape for every registration series
//!   (marriage, death, baptism, cemetery).
//!
//! # Invariants
//! - Every record is addressed by a positive `SequenceNumber`.
//! - Model types carry no request or session state; they are built per
//!   report invocation and discarded after rendering.

pub mod locator;
pub mod stats;
