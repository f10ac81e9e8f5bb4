//! Tests for tile parsing, rotation and identity

#[cfg(test)]
mod tests {
    use interlock::AlgorithmError;
    use interlock::spatial::lock::{Lock, Shape, ShapeVocabulary};
    use interlock::spatial::tile::{Edge, Tile};
    use std::collections::HashSet;

    fn sample() -> Tile {
        Tile::from_record("1,heart,spade,spade,club", &ShapeVocabulary::standard()).unwrap()
    }

    #[test]
    fn test_record_polarity_assignment() {
        let tile = sample();
        assert_eq!(tile.id(), 1);
        assert_eq!(tile.rotation(), 0);
        assert_eq!(tile.west(), Lock::male(Shape::HEART));
        assert_eq!(tile.north(), Lock::male(Shape::SPADE));
        assert_eq!(tile.east(), Lock::female(Shape::SPADE));
        assert_eq!(tile.south(), Lock::female(Shape::CLUB));
    }

    #[test]
    fn test_record_fields_trimmed() {
        let tile =
            Tile::from_record(" 12 , heart,spade , club,diamond", &ShapeVocabulary::standard())
                .unwrap();
        assert_eq!(tile.id(), 12);
        assert_eq!(tile.south(), Lock::female(Shape::DIAMOND));
    }

    // Verified by accepting records with extra fields
    #[test]
    fn test_malformed_records_rejected() {
        let vocabulary = ShapeVocabulary::standard();
        for record in [
            "1,heart,spade,spade",
            "1,heart,spade,spade,club,club",
            "x,heart,spade,spade,club",
            "-1,heart,spade,spade,club",
            "1,heart,spade,star,club",
            "",
        ] {
            match Tile::from_record(record, &vocabulary) {
                Err(AlgorithmError::MalformedTileRecord { record: r, .. }) => {
                    assert_eq!(r, record);
                }
                other => unreachable!("Expected MalformedTileRecord for '{record}', got {other:?}"),
            }
        }
    }

    // Clockwise turn moves west to north, north to east, east to south, south to west
    // Verified by swapping the east and south assignments
    #[test]
    fn test_rotate_clockwise_permutation() {
        let original = sample();
        let mut tile = original.clone();
        tile.rotate_clockwise();

        assert_eq!(tile.rotation(), 1);
        assert_eq!(tile.north(), original.west());
        assert_eq!(tile.east(), original.north());
        assert_eq!(tile.south(), original.east());
        assert_eq!(tile.west(), original.south());
    }

    #[test]
    fn test_rotate_counter_clockwise_inverts() {
        let original = sample();
        let mut tile = original.clone();
        tile.rotate_counter_clockwise();
        assert_eq!(tile.rotation(), 3);
        assert_eq!(tile.west(), original.north());
        tile.rotate_clockwise();
        assert_eq!(tile.rotation(), 0);
        assert_eq!(tile.locks(), original.locks());
    }

    #[test]
    fn test_four_clockwise_turns_round_trip() {
        let original = sample();
        let mut tile = original.clone();
        for turn in 1..=4 {
            tile.rotate_clockwise();
            assert_eq!(tile.rotation(), turn % 4);
        }
        assert_eq!(tile.locks(), original.locks());
    }

    // Verified by resetting one turn too few
    #[test]
    fn test_reset_rotation_after_mixed_turns() {
        let original = sample();
        let sequences: [&[bool]; 4] = [
            &[true],
            &[true, true, true],
            &[false, false],
            &[true, false, false, true, true, true, false],
        ];
        for sequence in sequences {
            let mut tile = original.clone();
            for &clockwise in sequence {
                if clockwise {
                    tile.rotate_clockwise();
                } else {
                    tile.rotate_counter_clockwise();
                }
            }
            tile.reset_rotation();
            assert_eq!(tile.rotation(), 0);
            assert_eq!(tile.locks(), original.locks());
        }
    }

    // Rotation moves locks without changing them
    #[test]
    fn test_rotation_preserves_lock_multiset() {
        let original = sample();
        let mut tile = original.clone();
        tile.rotate_clockwise();
        tile.rotate_clockwise();
        let mut before = original.locks().to_vec();
        let mut after = tile.locks().to_vec();
        before.sort_by_key(|lock| (lock.shape(), lock.polarity() as u8));
        after.sort_by_key(|lock| (lock.shape(), lock.polarity() as u8));
        assert_eq!(before, after);
    }

    #[test]
    fn test_equality_by_id_only() {
        let vocabulary = ShapeVocabulary::standard();
        let a = Tile::from_record("7,heart,heart,heart,heart", &vocabulary).unwrap();
        let mut b = Tile::from_record("7,club,spade,diamond,club", &vocabulary).unwrap();
        b.rotate_clockwise();
        let c = Tile::from_record("8,heart,heart,heart,heart", &vocabulary).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Tile> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_lock_by_edge() {
        let tile = sample();
        for (edge, lock) in Edge::ALL.iter().zip(tile.locks()) {
            assert_eq!(tile.lock(*edge), lock);
            assert_eq!(edge.opposite().opposite(), *edge);
        }
    }

    #[test]
    fn test_edge_opposites() {
        assert_eq!(Edge::West.opposite(), Edge::East);
        assert_eq!(Edge::North.opposite(), Edge::South);
        assert_eq!(Edge::East.opposite(), Edge::West);
        assert_eq!(Edge::South.opposite(), Edge::North);
    }
}
