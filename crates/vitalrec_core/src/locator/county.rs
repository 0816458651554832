//! County marriage register page/item codec.
//!
//! Data-migration flows rewrite county register numbers through this
//! codec; normal report navigation never touches it.

use crate::locator::codec::{LocatorError, LocatorResult};
use crate::model::locator::{CountyPosition, SequenceNumber};

/// Offset distinguishing county-encoded numbers from plain sequences.
pub const COUNTY_BASE: SequenceNumber = 10_000;

const ITEMS_PER_PAGE: u32 = 10;

/// Packs a county page/item pair into a register number.
///
/// # Errors
/// - `ItemOutOfRange` when `item` is not a single digit.
/// - `PositionOutOfRange` when the page would overflow the number space.
pub fn encode(page: u32, item: u8) -> LocatorResult<SequenceNumber> {
    if u32::from(item) >= ITEMS_PER_PAGE {
        return Err(LocatorError::ItemOutOfRange(item));
    }
    let packed = u64::from(COUNTY_BASE) + u64::from(page) * u64::from(ITEMS_PER_PAGE)
        + u64::from(item);
    u32::try_from(packed).map_err(|_| LocatorError::PositionOutOfRange { volume: 1, page })
}

/// Unpacks a county register number into its page/item pair.
///
/// # Errors
/// - `NotCountyEncoded` when `regnum` is at or below the county base and
///   therefore carries no page/item digits.
pub fn decode(regnum: SequenceNumber) -> LocatorResult<CountyPosition> {
    if regnum <= COUNTY_BASE {
        return Err(LocatorError::NotCountyEncoded(regnum));
    }
    let relative = regnum - COUNTY_BASE;
    Ok(CountyPosition {
        page: relative / ITEMS_PER_PAGE,
        item: (relative % ITEMS_PER_PAGE) as u8,
    })
}
