use intset::BitSet;

#[test]
fn test_display_format() {
    assert_eq!(BitSet::new().to_string(), "{}");
    assert_eq!(BitSet::from_slice(&[42]).to_string(), "{42}");
    assert_eq!(BitSet::from_slice(&[144, 42, 9, 1]).to_string(), "{1 9 42 144}");
}

#[test]
fn test_display_and_debug_side_by_side() {
    let mut x = BitSet::new();
    x.add(1);
    x.add(144);
    x.add(9);
    x.add(42);

    assert_eq!(format!("{x}"), "{1 9 42 144}");
    assert_eq!(x.to_string(), "{1 9 42 144}");
    assert_eq!(format!("{x:?}"), "{[4398046511618 0 65536] 4}");
}

#[test]
fn test_debug_reports_cached_len() {
    let mut set = BitSet::new();
    set.add(3);
    set.add(3);
    assert_eq!(format!("{set:?}"), "{[8] 2}");
}

#[test]
fn test_second_word_value_in_order() {
    let set = BitSet::from_slice(&[100, 7, 64]);
    assert_eq!(set.words().len(), 2);
    assert_eq!(set.elements(), vec![7, 64, 100]);
    assert_eq!(set.to_string(), "{7 64 100}");
}
