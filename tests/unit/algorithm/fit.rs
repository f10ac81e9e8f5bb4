//! Tests for neighbour-aware placement checks

#[cfg(test)]
mod tests {
    use interlock::algorithm::fit::{fits, is_consistent, mismatched_seams, neighbour};
    use interlock::spatial::board::{Board, BoardOptions};
    use interlock::spatial::lock::{Lock, Shape, ShapeVocabulary};
    use interlock::spatial::tile::{Edge, Tile};

    fn tile(record: &str) -> Tile {
        Tile::from_record(record, &ShapeVocabulary::standard()).unwrap()
    }

    fn board_with(records: &[&str]) -> Board {
        Board::new(records, &BoardOptions::any_size()).unwrap()
    }

    fn place_next(board: &mut Board) {
        let next = board.pop_pending().unwrap();
        board.place_at_cursor(next).unwrap();
    }

    #[test]
    fn test_empty_board_accepts_anything() {
        let board = Board::standard().unwrap();
        for candidate in board.pending() {
            assert!(fits(&board, candidate, 0, 0));
            assert!(fits(&board, candidate, 2, 2));
        }
    }

    // West edge must interlock with the west neighbour's east edge
    // Verified by checking the candidate's west edge against the neighbour's west edge
    #[test]
    fn test_west_neighbour_pairing() {
        // East edge of tile 1 is female heart
        let mut board = board_with(&[
            "1,club,club,heart,club",
            "2,diamond,diamond,diamond,diamond",
            "3,diamond,diamond,diamond,diamond",
            "4,diamond,diamond,diamond,diamond",
        ]);
        place_next(&mut board);

        assert!(fits(&board, &tile("9,heart,spade,spade,spade"), 1, 0));
        assert!(!fits(&board, &tile("9,spade,spade,heart,spade"), 1, 0));

        // A female heart on the west edge has the wrong polarity
        let mut turned = tile("9,spade,spade,heart,spade");
        turned.rotate_clockwise();
        turned.rotate_clockwise();
        assert_eq!(turned.west(), Lock::female(Shape::HEART));
        assert!(!fits(&board, &turned, 1, 0));
    }

    // North edge must interlock with the north neighbour's south edge
    #[test]
    fn test_north_neighbour_pairing() {
        // South edge of tile 1 is female spade
        let mut board = board_with(&[
            "1,club,club,club,spade",
            "2,club,club,club,club",
            "3,club,club,club,club",
            "4,club,club,club,club",
        ]);
        place_next(&mut board);
        place_next(&mut board);

        assert!(fits(&board, &tile("9,heart,spade,diamond,diamond"), 0, 1));
        assert!(!fits(&board, &tile("9,heart,heart,diamond,diamond"), 0, 1));
    }

    // East and south neighbours are checked too when present
    #[test]
    fn test_east_and_south_neighbours() {
        let mut board = board_with(&[
            "1,heart,heart,heart,heart",
            "2,heart,heart,heart,heart",
            "3,heart,heart,heart,heart",
            "4,heart,heart,heart,heart",
        ]);
        for _ in 0..3 {
            place_next(&mut board);
        }

        // Re-check cell (0,0) against its east neighbour (1,0) and south neighbour (0,1),
        // both presenting male hearts
        assert!(neighbour(&board, 0, 0, Edge::East).is_some());
        assert!(neighbour(&board, 0, 0, Edge::South).is_some());
        assert!(neighbour(&board, 0, 0, Edge::West).is_none());
        assert!(neighbour(&board, 0, 0, Edge::North).is_none());

        assert!(fits(&board, &tile("9,spade,spade,heart,heart"), 0, 0));
        assert!(!fits(&board, &tile("9,spade,spade,heart,club"), 0, 0));
        assert!(!fits(&board, &tile("9,spade,spade,club,heart"), 0, 0));

        let mut male_east = tile("9,spade,heart,spade,heart");
        male_east.rotate_clockwise();
        assert_eq!(male_east.east(), Lock::male(Shape::HEART));
        assert!(!fits(&board, &male_east, 0, 0));
    }

    #[test]
    fn test_fits_has_no_side_effects() {
        let mut board = Board::standard().unwrap();
        place_next(&mut board);
        let candidate = board.pending().front().cloned().unwrap();
        let before = candidate.locks();
        let pending_before = board.pending().len();

        let _ = fits(&board, &candidate, 1, 0);

        assert_eq!(candidate.locks(), before);
        assert_eq!(candidate.rotation(), 0);
        assert_eq!(board.pending().len(), pending_before);
        assert_eq!(board.filled(), 1);
    }

    #[test]
    fn test_mismatched_seams() {
        let mut board = board_with(&[
            "1,heart,heart,heart,heart",
            "2,heart,heart,heart,heart",
            "3,heart,heart,heart,heart",
            "4,spade,spade,spade,spade",
        ]);
        for _ in 0..4 {
            place_next(&mut board);
        }

        assert!(board.is_complete());
        let mismatches = mismatched_seams(&board);
        assert_eq!(mismatches.len(), 2);
        assert!(!is_consistent(&board));

        let mut uniform = board_with(&[
            "1,heart,heart,heart,heart",
            "2,heart,heart,heart,heart",
            "3,heart,heart,heart,heart",
            "4,heart,heart,heart,heart",
        ]);
        for _ in 0..4 {
            place_next(&mut uniform);
        }
        assert!(mismatched_seams(&uniform).is_empty());
        assert!(is_consistent(&uniform));
    }
}
