use vitalrec_core::locator::{codec, county};
use vitalrec_core::{CountyPosition, LocatorError, RegistrationLocator, VolumePosition};

#[test]
fn column_scheme_decodes_volume_page_column() {
    let locator = codec::decode(1871, 20001).expect("scheme number should decode");
    assert_eq!(locator.year, 1871);
    assert_eq!(locator.sequence, 20001);
    assert_eq!(
        locator.position,
        Some(VolumePosition {
            volume: 2,
            page: 0,
            column: 1,
        })
    );

    let locator = codec::decode(1872, 34323).expect("scheme number should decode");
    assert_eq!(
        locator.position,
        Some(VolumePosition {
            volume: 3,
            page: 432,
            column: 3,
        })
    );
}

#[test]
fn plain_years_decode_to_identity() {
    let locator = codec::decode(1901, 20001).expect("plain number should decode");
    assert_eq!(locator, RegistrationLocator::sequential(1901, 20001));

    // Small numbers stay sequential even inside the scheme years.
    let locator = codec::decode(1871, 9500).expect("small number should decode");
    assert!(!locator.has_position());
}

#[test]
fn column_scheme_navigation_wraps_across_pages() {
    assert_eq!(codec::previous(1871, 20001).expect("column 1"), 19993);
    assert_eq!(codec::next(1871, 20001).expect("column 1"), 20002);

    assert_eq!(codec::previous(1871, 20002).expect("column 2"), 20001);
    assert_eq!(codec::next(1871, 20002).expect("column 2"), 20003);

    assert_eq!(codec::previous(1871, 20003).expect("column 3"), 20002);
    assert_eq!(codec::next(1871, 20003).expect("column 3"), 20011);
}

#[test]
fn sequential_navigation_steps_by_one() {
    assert_eq!(codec::previous(1901, 500).expect("plain number"), 499);
    assert_eq!(codec::next(1901, 500).expect("plain number"), 501);

    // The first record's predecessor is 0; the page treats the resulting
    // empty fetch as the terminal case.
    assert_eq!(codec::previous(1901, 1).expect("first record"), 0);
}

#[test]
fn unsupported_column_digits_are_rejected() {
    assert_eq!(
        codec::decode(1871, 20000).expect_err("column 0"),
        LocatorError::UnsupportedColumn {
            seq: 20000,
            column: 0,
        }
    );
    assert_eq!(
        codec::decode(1871, 20004).expect_err("column 4"),
        LocatorError::UnsupportedColumn {
            seq: 20004,
            column: 4,
        }
    );
    assert!(codec::previous(1871, 20006).is_err());
    assert!(codec::next(1871, 20009).is_err());
}

#[test]
fn zero_sequence_is_rejected_everywhere() {
    assert_eq!(
        codec::decode(1871, 0).expect_err("zero"),
        LocatorError::NonPositive(0)
    );
    assert_eq!(
        codec::previous(1871, 0).expect_err("zero"),
        LocatorError::NonPositive(0)
    );
    assert_eq!(
        codec::next(1871, 0).expect_err("zero"),
        LocatorError::NonPositive(0)
    );
}

#[test]
fn encode_decode_round_trip_covers_the_scheme() {
    for volume in 1..=3u32 {
        for page in [0u32, 7, 460, 999] {
            for column in 1..=3u8 {
                let position = VolumePosition {
                    volume,
                    page,
                    column,
                };
                let seq = codec::encode(&position).expect("valid position should encode");
                let locator = codec::decode(1871, seq).expect("encoded number should decode");
                assert_eq!(locator.position, Some(position), "seq {seq}");
                assert_eq!(locator.sequence, seq);
            }
        }
    }
}

#[test]
fn encode_rejects_out_of_range_positions() {
    let no_volume = VolumePosition {
        volume: 0,
        page: 12,
        column: 1,
    };
    assert_eq!(
        codec::encode(&no_volume).expect_err("volume 0"),
        LocatorError::PositionOutOfRange {
            volume: 0,
            page: 12,
        }
    );

    let wide_page = VolumePosition {
        volume: 2,
        page: 1000,
        column: 2,
    };
    assert!(matches!(
        codec::encode(&wide_page),
        Err(LocatorError::PositionOutOfRange { .. })
    ));

    let bad_column = VolumePosition {
        volume: 2,
        page: 10,
        column: 4,
    };
    assert!(matches!(
        codec::encode(&bad_column),
        Err(LocatorError::UnsupportedColumn { column: 4, .. })
    ));
}

#[test]
fn pad_to_5_pads_short_numbers_only() {
    assert_eq!(codec::pad_to_5(42), "00042");
    assert_eq!(codec::pad_to_5(20001), "20001");
    assert_eq!(codec::pad_to_5(123456), "123456");
}

#[test]
fn county_codec_round_trips_page_item_pairs() {
    let regnum = county::encode(534, 7).expect("valid pair should encode");
    assert_eq!(regnum, 15347);
    assert_eq!(
        county::decode(regnum).expect("encoded number should decode"),
        CountyPosition { page: 534, item: 7 }
    );

    for page in [0u32, 1, 99, 4080] {
        for item in [0u8, 1, 9] {
            let regnum = county::encode(page, item).expect("valid pair should encode");
            let decoded = county::decode(regnum).expect("round trip");
            assert_eq!(decoded, CountyPosition { page, item });
        }
    }
}

#[test]
fn county_codec_rejects_plain_numbers_and_wide_items() {
    assert_eq!(
        county::decode(10000).expect_err("at the base"),
        LocatorError::NotCountyEncoded(10000)
    );
    assert_eq!(
        county::decode(312).expect_err("below the base"),
        LocatorError::NotCountyEncoded(312)
    );
    assert_eq!(
        county::encode(5, 10).expect_err("two-digit item"),
        LocatorError::ItemOutOfRange(10)
    );
}

#[test]
fn locator_serialization_uses_expected_wire_fields() {
    let locator = codec::decode(1871, 20001).expect("scheme number should decode");
    let json = serde_json::to_value(&locator).expect("locator should serialize");
    assert_eq!(json["year"], 1871);
    assert_eq!(json["regnum"], 20001);
    assert_eq!(json["volume"], 2);
    assert_eq!(json["page"], 0);
    assert_eq!(json["column"], 1);

    let decoded: RegistrationLocator =
        serde_json::from_value(json).expect("wire form should deserialize");
    assert_eq!(decoded, locator);

    let sequential = RegistrationLocator::sequential(1901, 77);
    let json = serde_json::to_value(&sequential).expect("locator should serialize");
    assert_eq!(json["regnum"], 77);
    assert!(json.get("volume").is_none());
}
