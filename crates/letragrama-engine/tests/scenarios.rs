//! End-to-end placement scenarios on small and reference-sized boards.

use letragrama_core::{Cell, PlacedWord, Segment};
use letragrama_engine::{
    fill, find_path, place_clues, place_spangram, place_spangram_with, LetterPool,
    PlacementError, SpangramSearch,
};
use letragrama_test_utils::fixtures::{empty_board, perimeter_path, reference_board, word_of_len};
use letragrama_test_utils::{assert_board_invariants, assert_spangram_spans, seeded_rng};

#[test]
fn spangram_on_reference_board_spans_opposite_edges() {
    let mut successes = 0;
    for seed in 0..40 {
        let mut board = reference_board();
        let mut rng = seeded_rng(seed);
        match place_spangram(&mut board, "PUZZLES", 6, &mut rng) {
            Ok(placed) => {
                successes += 1;
                assert_eq!(placed.path.len(), 7);
                assert_board_invariants(&board);
                assert_spangram_spans(&board);
            }
            Err(e) => {
                assert!(matches!(e, PlacementError::SpangramUnplaceable { .. }));
                assert!(board.is_empty());
            }
        }
    }
    assert!(successes > 0);
}

#[test]
fn targeted_spangram_always_fits_the_reference_board() {
    for seed in 0..25 {
        let mut board = reference_board();
        let mut rng = seeded_rng(seed);
        let placed =
            place_spangram_with(&mut board, "PUZZLES", 6, SpangramSearch::Targeted, &mut rng)
                .unwrap();
        assert_eq!(placed.path.len(), 7);
        assert_board_invariants(&board);
        assert_spangram_spans(&board);
    }
}

#[test]
fn short_spangram_is_rejected_without_mutation() {
    let mut board = reference_board();
    let before = board.clone();
    let err = place_spangram(&mut board, "AB", 6, &mut seeded_rng(0)).unwrap_err();
    assert!(matches!(err, PlacementError::SpangramTooShort { len: 2, min: 6, .. }));
    assert_eq!(board, before);
}

#[test]
fn single_cell_board_has_no_two_letter_path() {
    let board = empty_board(1, 1);
    for seed in 0..10 {
        for len in 2..6 {
            assert_eq!(
                find_path(&board, Cell::new(0, 0), len, &mut seeded_rng(seed)),
                Err(PlacementError::PathNotFound)
            );
        }
    }
}

#[test]
fn clue_longer_than_the_interior_is_unplaced() {
    let mut board = empty_board(4, 4);
    let rim = perimeter_path(board.grid());
    let spangram = PlacedWord::spangram(word_of_len(rim.len()), rim);
    board.place(spangram.clone()).unwrap();
    assert_eq!(board.free_count(), 4);

    let report = place_clues(&mut board, [word_of_len(5)], &mut seeded_rng(1));
    assert_eq!(report.unplaced, vec![word_of_len(5)]);
    assert!(report.placed.is_empty());
    assert_eq!(board.spangram(), Some(&spangram));
    assert_board_invariants(&board);
}

#[test]
fn interior_clue_fits_beside_the_perimeter_spangram() {
    let mut board = empty_board(4, 4);
    let rim = perimeter_path(board.grid());
    board
        .place(PlacedWord::spangram(word_of_len(rim.len()), rim))
        .unwrap();
    let report = place_clues(&mut board, ["SOLO"], &mut seeded_rng(2));
    assert!(report.is_complete());
    assert_eq!(board.free_count(), 0);
    assert_board_invariants(&board);
}

#[test]
fn second_word_that_would_cross_is_unplaced() {
    let mut board = empty_board(2, 2);
    board
        .place(PlacedWord::manual("AB", vec![Cell::new(0, 0), Cell::new(1, 1)]))
        .unwrap();
    let report = place_clues(&mut board, ["CD"], &mut seeded_rng(0));
    assert_eq!(report.unplaced, vec!["CD".to_string()]);
    assert_eq!(board.len(), 1);
}

#[test]
fn two_clues_on_a_tiny_board_never_cross() {
    for seed in 0..40 {
        let mut board = empty_board(2, 2);
        let report = place_clues(&mut board, ["AB", "CD"], &mut seeded_rng(seed));
        assert_board_invariants(&board);
        match report.unplaced.as_slice() {
            [] => assert_eq!(board.len(), 2),
            [word] => {
                assert_eq!(word, "CD");
                let first = &report.placed[0];
                let seg = Segment::new(first.path[0], first.path[1]);
                let diagonal = seg.a.row != seg.b.row && seg.a.col != seg.b.col;
                assert!(diagonal, "straight first word {seg} should leave room");
            }
            other => panic!("unexpected unplaced words {other:?}"),
        }
    }
}

#[test]
fn full_pipeline_letters_every_cell() {
    let mut board = reference_board();
    let mut rng = seeded_rng(12);
    place_spangram_with(&mut board, "LETRAGRAMA", 6, SpangramSearch::Targeted, &mut rng)
        .unwrap();
    let report = place_clues(&mut board, ["SOL", "LUNA", "ESTRELLA", "MAR"], &mut rng);
    let pool = LetterPool::default();
    let filled = fill(&mut board, &pool, &mut rng);
    assert_eq!(filled.len() + board.occupied_count(), 48);
    assert!(board.is_fully_lettered());
    assert_eq!(report.placed.len() + report.unplaced.len(), 4);
    assert_board_invariants(&board);
    assert_spangram_spans(&board);
}
