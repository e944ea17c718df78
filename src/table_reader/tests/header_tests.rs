//! Tests for header label lookup

use super::super::header::HeaderColumns;
use super::RIG_HEADER;
use crate::config::ColumnStrategy;

#[test]
fn test_locate_rig_header() {
    let columns = HeaderColumns::locate(RIG_HEADER, ",").unwrap();

    assert_eq!(columns.s, 5);
    assert_eq!(columns.re, 6);
    assert_eq!(columns.lift, 7);
}

#[test]
fn test_locate_is_case_insensitive_and_order_free() {
    let columns = HeaderColumns::locate("rE;LIFT n;s", ";").unwrap();

    assert_eq!(columns.re, 0);
    assert_eq!(columns.lift, 1);
    assert_eq!(columns.s, 2);
}

#[test]
fn test_locate_trims_cells() {
    let columns = HeaderColumns::locate(" Lift N , S , Re\r", ",").unwrap();
    assert_eq!(columns, HeaderColumns { lift: 0, s: 1, re: 2 });
}

#[test]
fn test_locate_missing_label() {
    assert!(HeaderColumns::locate("Lift N,S,Speed", ",").is_none());
    assert!(HeaderColumns::locate("S,Re", ",").is_none());
    assert!(HeaderColumns::locate("Lift,S,Re", ",").is_none());
    assert!(HeaderColumns::locate("", ",").is_none());
}

#[test]
fn test_locate_wrong_delimiter_misses_labels() {
    assert!(HeaderColumns::locate("Lift N;S;Re", ",").is_none());
}

#[test]
fn test_locate_multi_character_delimiter() {
    let columns = HeaderColumns::locate("S::Re::Lift N", "::").unwrap();
    assert_eq!(columns, HeaderColumns { lift: 2, s: 0, re: 1 });
}

#[test]
fn test_locate_duplicate_label_uses_last() {
    let columns = HeaderColumns::locate("S,Re,Lift N,S", ",").unwrap();
    assert_eq!(columns.s, 3);
}

#[test]
fn test_strategy_selects_columns() {
    let header = HeaderColumns { lift: 0, s: 1, re: 2 };

    assert_eq!(header.for_strategy(ColumnStrategy::Header), header);
    assert_eq!(
        header.for_strategy(ColumnStrategy::FixedOffsets),
        HeaderColumns::FIXED
    );
}

#[test]
fn test_required_width() {
    assert_eq!(HeaderColumns::FIXED.required_width(), 8);
    assert_eq!(HeaderColumns { lift: 0, s: 4, re: 2 }.required_width(), 5);
}
