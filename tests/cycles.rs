//! Circular-movement scenarios that exercise the resolver's backup rule for
//! dependency cycles (§4.3): a pure rotation of moves with no convoy involved
//! succeeds in its entirety, per the historical "Alexandria" ruling.

mod support;

use diplomacy_adjudicator::unit::UnitType;
use support::*;

#[test]
fn pure_circular_movement_all_succeed() {
    let mut board = spring_moves_board();
    let player = board.add_player("Somebody");

    let ring = ["par", "bur", "mun", "ruh", "hol", "bel", "pic"];
    for province in &ring {
        place(&mut board, player, UnitType::Army, province);
    }

    let next = ["bur", "mun", "ruh", "hol", "bel", "pic", "par"];
    for (from, to) in ring.iter().zip(next.iter()) {
        order(&mut board, from, UnitType::Army, moves(to));
    }

    diplomacy_adjudicator::dispatch::resolve_movement(&mut board).unwrap();

    for (_, to) in ring.iter().zip(next.iter()) {
        assert!(is_occupied_by(&board, to, player), "{to} should hold the rotated unit");
    }
}
