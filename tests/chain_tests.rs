use flotilla::{Chain, ChainError, Coord, Direction};

#[test]
fn test_push_and_contains() {
    let mut chain = Chain::new();
    chain.push(Coord::new(3, 4)).unwrap();
    chain.push(Coord::new(3, 5)).unwrap();

    assert!(chain.contains(Coord::new(3, 5)));
    assert!(!chain.contains(Coord::new(3, 8)));
    assert_eq!(chain.len(), 2);
}

#[test]
fn test_push_rejects_non_adjacent() {
    let mut chain = Chain::new();
    chain.push(Coord::new(3, 4)).unwrap();
    chain.push(Coord::new(3, 5)).unwrap();

    assert_eq!(
        chain.push(Coord::new(4, 6)).unwrap_err(),
        ChainError::NotAdjacent
    );
    // Rejected pushes leave the chain untouched.
    assert_eq!(chain.len(), 2);
}

#[test]
fn test_push_rejects_duplicate() {
    let mut chain = Chain::new();
    chain.push(Coord::new(3, 4)).unwrap();
    chain.push(Coord::new(3, 5)).unwrap();

    assert_eq!(
        chain.push(Coord::new(3, 4)).unwrap_err(),
        ChainError::Duplicate
    );
}

#[test]
fn test_last() {
    let mut chain = Chain::new();
    assert_eq!(chain.last(), None);

    chain.push(Coord::new(3, 4)).unwrap();
    chain.push(Coord::new(3, 5)).unwrap();
    assert_eq!(chain.last(), Some(Coord::new(3, 5)));
}

#[test]
fn test_last_direction() {
    let mut chain = Chain::new();
    assert_eq!(chain.last_direction(), None);

    chain.push(Coord::new(3, 4)).unwrap();
    assert_eq!(chain.last_direction(), None);

    chain.push(Coord::new(3, 5)).unwrap();
    assert_eq!(chain.last_direction(), Some(Direction::Down));
}

#[test]
fn test_is_straight() {
    let mut chain = Chain::new();
    assert!(chain.is_straight());

    chain.push(Coord::new(3, 4)).unwrap();
    assert!(chain.is_straight());

    chain.push(Coord::new(3, 5)).unwrap();
    assert!(chain.is_straight());

    chain.push(Coord::new(3, 6)).unwrap();
    assert!(chain.is_straight());

    chain.push(Coord::new(4, 6)).unwrap();
    assert!(!chain.is_straight());
}

#[test]
fn test_bend_at_start_is_not_straight() {
    // The bend sits at the oldest end of the chain, so a check that only
    // looks at the newest steps would miss it.
    let mut chain = Chain::new();
    chain.push(Coord::new(2, 2)).unwrap();
    chain.push(Coord::new(3, 2)).unwrap();
    chain.push(Coord::new(3, 3)).unwrap();
    chain.push(Coord::new(3, 4)).unwrap();
    assert!(!chain.is_straight());
}
