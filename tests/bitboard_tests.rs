use sea_battle::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    // Success for board that fits
    let ok = BitBoard::<u64>::try_new(8);
    assert!(ok.is_ok());

    // Failure when board is too large
    let err = BitBoard::<u8>::try_new(3);
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { n: 3, capacity: 8 })));
}

#[test]
fn test_get_set_clear() {
    let mut bb = BitBoard::<u16>::try_new(4).unwrap();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());

    bb.clear(1, 1).unwrap();
    assert!(!bb.get(1, 1).unwrap());

    bb.set(2, 3).unwrap();
    bb.set(0, 0).unwrap();
    assert_eq!(bb.count_ones(), 2);
    bb.clear_all();
    assert!(bb.is_empty());
}

#[test]
fn test_bounds() {
    let mut bb = BitBoard::<u128>::try_new(6).unwrap();
    assert_eq!(
        bb.set(6, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 6, col: 0 }
    );
    assert!(bb.get(0, 6).is_err());
}

#[test]
fn test_iter_set_bits() {
    let mut bb = BitBoard::<u16>::try_new(4).unwrap();
    bb.set(3, 3).unwrap();
    bb.set(0, 1).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
}
