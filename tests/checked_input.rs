use intset::{BitSet, ErrorKind, IntSetError, Result};

#[test]
fn test_negative_values_rejected() {
    let mut set = BitSet::from_slice(&[1, 2]);
    let err = set.try_add(-7).unwrap_err();

    assert_eq!(err, IntSetError::NegativeValue(-7));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(set.to_string(), "{1 2}");
    assert_eq!(set.len(), 2);
}

#[test]
fn test_try_contains() -> Result<()> {
    let set = BitSet::try_from_signed(&[0, 64, 128])?;
    assert!(set.try_contains(64)?);
    assert!(!set.try_contains(65)?);
    assert!(!set.try_contains(1_000_000)?);
    assert!(set.try_contains(i64::MIN).is_err());
    Ok(())
}

#[test]
fn test_try_from_slice() {
    let values: &[i64] = &[5, 3, -1];
    assert_eq!(
        BitSet::try_from(values).unwrap_err(),
        IntSetError::NegativeValue(-1)
    );

    let ok = BitSet::try_from(&[5i64, 3][..]).unwrap();
    assert_eq!(ok.elements(), vec![3, 5]);
}
