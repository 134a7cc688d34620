//! Integration tests for JSON persistence.
#![cfg(feature = "serde")]

use dynmat::json::{from_json, read_json, to_json, write_json};
use dynmat::{Grid, IoError, Sequence, TextConfig};

#[test]
fn grid_round_trips_through_a_writer() {
    let g = Grid::from_rows(vec![vec![1.5, 2.0], vec![0.0, -1.0]]).unwrap();
    let mut buffer = Vec::new();
    write_json(&mut buffer, &g).unwrap();
    let back: Grid<f64> = read_json(buffer.as_slice()).unwrap();
    assert_eq!(back, g);
}

#[test]
fn empty_or_ragged_documents_are_rejected() {
    let err = from_json::<Sequence<i32>>("[]").unwrap_err();
    assert!(matches!(err, IoError::Json(_)));
    assert!(from_json::<Grid<i32>>("[]").is_err());

    let err = from_json::<Grid<i32>>("[[1, 2], [3]]").unwrap_err();
    assert!(matches!(err, IoError::Json(_)));
    assert!(err.to_string().contains("Operand sizes do not match"), "{err}");
    // Rectangular but not square
    assert!(from_json::<Grid<i32>>("[[1, 2, 3], [4, 5, 6]]").is_err());
}

#[test]
fn text_config_is_serializable() {
    let config = TextConfig::default().with_precision(4);
    let json = to_json(&config).unwrap();
    assert_eq!(from_json::<TextConfig>(&json).unwrap(), config);
}
