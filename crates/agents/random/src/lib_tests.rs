use super::*;

#[test]
fn returns_one_of_the_offered_moves() {
    let mut agent = RandomAgent::new();
    let board = Board::new();
    let legal = board.legal_moves();

    for _ in 0..20 {
        let mv = agent
            .get_move(&board, &legal, &Clock::unlimited())
            .unwrap();
        assert!(legal.contains(&mv));
    }
}

#[test]
fn forfeits_when_no_moves_are_offered() {
    let mut agent = RandomAgent::new();
    let board = Board::new();
    let mv = agent
        .get_move(&board, &[], &Clock::unlimited())
        .unwrap();
    assert_eq!(mv, Move::NONE);
}
