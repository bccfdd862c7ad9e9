//! DATC-style scenarios adapted to the crate's small fixture map. Named after
//! the rule family they exercise, not by DATC section number, since the
//! fixture board doesn't reproduce every DATC province.

mod support;

use diplomacy_adjudicator::unit::UnitType;
use support::*;

#[test]
fn move_to_empty_adjacent_province_succeeds() {
    let mut board = spring_moves_board();
    let england = board.add_player("England");
    place(&mut board, england, UnitType::Army, "yor");
    order(&mut board, "yor", UnitType::Army, moves("lon"));

    diplomacy_adjudicator::dispatch::resolve_movement(&mut board).unwrap();

    assert!(is_occupied_by(&board, "lon", england));
    assert!(is_empty(&board, "yor"));
}

#[test]
fn two_equal_strength_attacks_bounce() {
    let mut board = spring_moves_board();
    let england = board.add_player("England");
    let germany = board.add_player("Germany");
    place(&mut board, england, UnitType::Army, "pic");
    place(&mut board, germany, UnitType::Army, "bur");
    order(&mut board, "pic", UnitType::Army, moves("par"));
    order(&mut board, "bur", UnitType::Army, moves("par"));

    diplomacy_adjudicator::dispatch::resolve_movement(&mut board).unwrap();

    assert!(is_empty(&board, "par"));
    assert!(is_occupied_by(&board, "pic", england));
    assert!(is_occupied_by(&board, "bur", germany));
}

#[test]
fn support_breaks_a_tie_and_dislodges_the_defender() {
    let mut board = spring_moves_board();
    let france = board.add_player("France");
    let germany = board.add_player("Germany");
    place(&mut board, france, UnitType::Army, "pic");
    place(&mut board, france, UnitType::Army, "bel");
    place(&mut board, germany, UnitType::Army, "bur");
    order(&mut board, "pic", UnitType::Army, moves("par"));
    order(&mut board, "bel", UnitType::Army, supports_move("pic", "par"));
    order(&mut board, "bur", UnitType::Army, moves("par"));

    diplomacy_adjudicator::dispatch::resolve_movement(&mut board).unwrap();

    assert!(is_occupied_by(&board, "par", france));
    assert!(is_occupied_by(&board, "bur", germany));
}

#[test]
fn attacking_a_supporting_unit_cuts_its_support() {
    let mut board = spring_moves_board();
    let france = board.add_player("France");
    let germany = board.add_player("Germany");
    place(&mut board, france, UnitType::Army, "pic");
    place(&mut board, france, UnitType::Army, "bel");
    place(&mut board, germany, UnitType::Army, "bur");
    place(&mut board, germany, UnitType::Army, "hol");
    order(&mut board, "pic", UnitType::Army, moves("par"));
    order(&mut board, "bel", UnitType::Army, supports_move("pic", "par"));
    order(&mut board, "bur", UnitType::Army, moves("par"));
    order(&mut board, "hol", UnitType::Army, moves("bel"));

    diplomacy_adjudicator::dispatch::resolve_movement(&mut board).unwrap();

    // bel's support was cut by hol's attack, so pic's move no longer has
    // a strength edge over bur and the two bounce at par.
    assert!(is_empty(&board, "par"));
    assert!(is_occupied_by(&board, "pic", france));
}

#[test]
fn self_dislodgement_is_prohibited() {
    let mut board = spring_moves_board();
    let france = board.add_player("France");
    place(&mut board, france, UnitType::Army, "pic");
    place(&mut board, france, UnitType::Army, "par");
    order(&mut board, "pic", UnitType::Army, moves("par"));
    order(&mut board, "par", UnitType::Army, holds());

    diplomacy_adjudicator::dispatch::resolve_movement(&mut board).unwrap();

    assert!(is_occupied_by(&board, "par", france));
    assert!(is_occupied_by(&board, "pic", france));
    assert!(!is_dislodged(&board, "par"));
}

#[test]
fn army_is_convoyed_across_a_sea_province() {
    let mut board = spring_moves_board();
    let england = board.add_player("England");
    place(&mut board, england, UnitType::Army, "lon");
    place(&mut board, england, UnitType::Fleet, "eng");
    order(&mut board, "lon", UnitType::Army, moves("bel"));
    order(&mut board, "eng", UnitType::Fleet, convoys("lon", "bel"));

    diplomacy_adjudicator::dispatch::resolve_movement(&mut board).unwrap();

    assert!(is_occupied_by(&board, "bel", england));
    assert!(is_empty(&board, "lon"));
}

#[test]
fn dislodged_unit_without_a_legal_retreat_choice_disbands() {
    let mut board = spring_moves_board();
    let france = board.add_player("France");
    let germany = board.add_player("Germany");
    place(&mut board, france, UnitType::Army, "par");
    place(&mut board, germany, UnitType::Army, "pic");
    place(&mut board, germany, UnitType::Army, "bur");
    place(&mut board, germany, UnitType::Army, "gas");
    order(&mut board, "pic", UnitType::Army, moves("par"));
    order(&mut board, "bur", UnitType::Army, supports_move("pic", "par"));
    order(&mut board, "gas", UnitType::Army, holds());
    order(&mut board, "par", UnitType::Army, holds());

    diplomacy_adjudicator::dispatch::resolve_movement(&mut board).unwrap();

    assert!(is_dislodged(&board, "par"));
    let retreat_options = board.province(&"par".into()).unwrap().retreat_options.clone();
    assert!(!retreat_options.iter().any(|r| r.province() == &diplomacy_adjudicator::geo::ProvinceKey::new("pic")));

    let mut turn = board.turn();
    turn = diplomacy_adjudicator::time::Turn::new(turn.season(), turn.year(), diplomacy_adjudicator::time::Phase::Retreat);
    board.set_turn(turn);
    let outcomes = diplomacy_adjudicator::dispatch::resolve_retreats(&mut board).unwrap();
    assert_eq!(outcomes.len(), 1);
}
