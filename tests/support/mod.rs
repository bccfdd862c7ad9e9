//! Shared scaffolding for integration tests: a board over the crate's fixture
//! map, with a couple of convenience methods for placing units and orders.

use diplomacy_adjudicator::board::Board;
use diplomacy_adjudicator::geo::fixture::FIXTURE_MAP;
use diplomacy_adjudicator::nation::PlayerId;
use diplomacy_adjudicator::order::{MainCommand, MainOrder};
use diplomacy_adjudicator::time::{Phase, Season, Turn};
use diplomacy_adjudicator::unit::UnitType;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn spring_moves_board() -> Board {
    init_logging();
    Board::new(FIXTURE_MAP.clone(), Turn::new(Season::Spring, 1901, Phase::Movement))
}

pub fn fall_moves_board() -> Board {
    Board::new(FIXTURE_MAP.clone(), Turn::new(Season::Fall, 1901, Phase::Movement))
}

pub fn place(board: &mut Board, owner: PlayerId, unit_type: UnitType, province: &str) {
    board
        .mutator()
        .create_unit(unit_type, owner, &province.into(), None)
        .expect("fixture placement should never collide");
}

pub fn order(board: &mut Board, province: &str, unit_type: UnitType, command: MainCommand) {
    board.set_main_order(MainOrder::new(province, unit_type, command));
}

pub fn moves(destination: &str) -> MainCommand {
    MainCommand::Move {
        destination: destination.into(),
        destination_coast: None,
        via_convoy: diplomacy_adjudicator::order::ConvoyPreference::None,
    }
}

pub fn holds() -> MainCommand {
    MainCommand::Hold
}

pub fn supports_move(source_province: &str, destination_province: &str) -> MainCommand {
    MainCommand::Support {
        source_province: source_province.into(),
        destination_province: Some(destination_province.into()),
        destination_coast: None,
    }
}

pub fn supports_hold(source_province: &str) -> MainCommand {
    MainCommand::Support {
        source_province: source_province.into(),
        destination_province: None,
        destination_coast: None,
    }
}

pub fn convoys(source_province: &str, destination_province: &str) -> MainCommand {
    MainCommand::ConvoyTransport {
        source_province: source_province.into(),
        destination_province: destination_province.into(),
    }
}

pub fn is_occupied_by(board: &Board, province: &str, owner: PlayerId) -> bool {
    board
        .province(&province.into())
        .and_then(|s| s.unit.as_ref())
        .map(|u| u.owner == owner)
        .unwrap_or(false)
}

pub fn is_empty(board: &Board, province: &str) -> bool {
    board.province(&province.into()).map(|s| !s.is_occupied()).unwrap_or(true)
}

pub fn is_dislodged(board: &Board, province: &str) -> bool {
    board.province(&province.into()).map(|s| s.dislodged_unit.is_some()).unwrap_or(false)
}
