//! Legacy registration-number codecs and boundary parsing.
//!
//! # Responsibility
//! - Classify flat sequence numbers into the numbering scheme active for
//!   their registration year.
//! - Convert between flat numbers and structured volume/page positions.
//! - Validate form-supplied number strings before any arithmetic runs.
//!
//! # Invariants
//! - Every codec is a pure function; classification never guesses on
//!   failure, it returns a typed error the page can surface as an
//!   "invalid record number" message.
//! - `decode(encode(x)) == x` for every valid structured position.

pub mod codec;
pub mod county;
pub mod parse;
