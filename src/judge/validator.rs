//! Per-unit syntactic and geographic legality checking (§4.1 OrderValidator).

use crate::board::Board;
use crate::error::{Error, ErrorKind};
use crate::geo::{Coast, Map, ProvinceKey, RegionKey};
use crate::judge::convoy;
use crate::order::{MainCommand, MainOrder};
use crate::unit::UnitType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderValidity {
    Valid,
    ValidWithConvoy,
    Mismatched,
    Invalid,
}

/// The result of validating one submitted order: the command to actually feed
/// the resolver (invalid orders are downgraded to holds), the classification,
/// and whether the order may be the object of another unit's support.
#[derive(Debug, Clone)]
pub struct ValidatedOrder {
    pub province: ProvinceKey,
    pub unit_type: UnitType,
    pub effective: MainCommand,
    pub validity: OrderValidity,
    pub not_supportable: bool,
    /// True when this is a move order that requires a successful convoy to
    /// complete, either because its land path is illegal (`ValidWithConvoy`)
    /// or because it was promoted by the convoy-kidnapping rule.
    pub is_convoy: bool,
}

/// Validates every submitted order against the board and map, producing the
/// commands the resolver will actually see. Units with no submitted order are
/// not covered here; callers insert an `Nmr` order for them before validating.
pub fn validate_all(map: &Map, board: &Board) -> Vec<ValidatedOrder> {
    board.main_orders().map(|order| validate_one(map, board, order)).collect()
}

fn validate_one(map: &Map, board: &Board, order: &MainOrder) -> ValidatedOrder {
    let (validity, not_supportable, resolved_coast) = classify(map, board, order);

    let effective = match validity {
        OrderValidity::Invalid => MainCommand::Hold,
        OrderValidity::Mismatched => MainCommand::Hold,
        OrderValidity::Valid | OrderValidity::ValidWithConvoy => {
            let mut command = order.command.clone();
            if let (MainCommand::Move { destination_coast, .. }, Some(coast)) = (&mut command, resolved_coast) {
                *destination_coast = Some(coast);
            }
            command
        }
    };

    ValidatedOrder {
        province: order.province.clone(),
        unit_type: order.unit_type,
        effective,
        validity,
        not_supportable,
        is_convoy: matches!(validity, OrderValidity::ValidWithConvoy),
    }
}

fn is_adjacent(map: &Map, from: &ProvinceKey, to: &ProvinceKey) -> bool {
    map.bordering_provinces(from).into_iter().any(|p| p == to)
}

/// The coasts of `to` reachable by a fleet currently standing in `from`,
/// respecting that fleet's own coast (a fleet on Spain's north coast cannot
/// step straight to Spain's south coast's neighbors).
fn fleet_reachable_coasts(map: &Map, board: &Board, from: &ProvinceKey, to: &ProvinceKey) -> Vec<Option<Coast>> {
    let current_coast = board.province(from).and_then(|s| s.unit.as_ref()).and_then(|u| u.coast);
    let current_region = RegionKey::new(from.clone(), current_coast);
    map.find_bordering(&current_region)
        .into_iter()
        .filter(|r| r.province() == to)
        .map(|r| r.coast())
        .collect()
}

/// Classifies one order's geographic/syntactic legality. Returns the
/// classification, whether the order is ineligible to be the object of
/// support, and — for a fleet move left to auto-resolve its destination
/// coast — the coast that was picked.
fn classify(map: &Map, board: &Board, order: &MainOrder) -> (OrderValidity, bool, Option<Coast>) {
    match &order.command {
        MainCommand::Hold | MainCommand::Nmr => (OrderValidity::Valid, false, None),

        MainCommand::Core => {
            let owner = board.province(&order.province).and_then(|s| s.unit.as_ref().map(|u| u.owner));
            let sc_owner = board.province(&order.province).and_then(|s| s.owner);
            let is_sc = map.find_province(&order.province).map(|p| p.is_supply_center()).unwrap_or(false);
            if is_sc && owner.is_some() && owner == sc_owner {
                (OrderValidity::Valid, false, None)
            } else {
                (OrderValidity::Invalid, true, None)
            }
        }

        MainCommand::Move {
            destination,
            destination_coast,
            ..
        } => {
            if order.unit_type == UnitType::Army {
                if is_adjacent(map, &order.province, destination) {
                    (OrderValidity::Valid, false, None)
                } else if convoy::strict_path_exists(map, board, &order.province, destination, |p| {
                    board.main_order_at(p).is_some()
                }) {
                    (OrderValidity::ValidWithConvoy, false, None)
                } else if convoy::geometric_path_exists(map, board, &order.province, destination) {
                    (OrderValidity::Mismatched, false, None)
                } else {
                    (OrderValidity::Invalid, true, None)
                }
            } else {
                let reachable = fleet_reachable_coasts(map, board, &order.province, destination);
                match destination_coast {
                    Some(c) if reachable.contains(&Some(*c)) => (OrderValidity::Valid, false, None),
                    Some(_) => (OrderValidity::Invalid, true, None),
                    None => match reachable.as_slice() {
                        [] => (OrderValidity::Invalid, true, None),
                        [only] => (OrderValidity::Valid, false, *only),
                        _ => {
                            log::warn!("{}", Error::from(ErrorKind::AmbiguousCoast(destination.to_string())));
                            (OrderValidity::Invalid, true, None)
                        }
                    },
                }
            }
        }

        MainCommand::Support {
            source_province,
            destination_province,
            ..
        } => {
            let Some(supported) = board.main_order_at(source_province) else {
                return (OrderValidity::Invalid, false, None);
            };
            let matches = match destination_province {
                None => !supported.command.is_move(),
                Some(dest) => supported.command.move_destination() == Some(dest),
            };
            let supporter_can_reach = match destination_province {
                None => is_adjacent(map, &order.province, source_province) || &order.province == source_province,
                Some(dest) => is_adjacent(map, &order.province, dest),
            };
            if matches && supporter_can_reach && !rejects_support_of_coring(board, source_province) {
                (OrderValidity::Valid, false, None)
            } else {
                (OrderValidity::Mismatched, false, None)
            }
        }

        MainCommand::ConvoyTransport {
            source_province,
            destination_province,
        } => {
            if order.unit_type != UnitType::Fleet {
                return (OrderValidity::Invalid, false, None);
            }
            let Some(convoyed) = board.main_order_at(source_province) else {
                return (OrderValidity::Invalid, false, None);
            };
            let moves_there = convoyed.command.move_destination() == Some(destination_province);
            let path = convoy::geometric_path_exists(map, board, source_province, destination_province);
            if moves_there && path {
                (OrderValidity::Valid, false, None)
            } else {
                (OrderValidity::Mismatched, false, None)
            }
        }
    }
}

/// §9 Open Question 3, enforced: a support order whose supported unit is
/// itself coring is never valid support, since coring is not a move or hold
/// that support recognizes as its own order type.
pub fn rejects_support_of_coring(board: &Board, source_province: &ProvinceKey) -> bool {
    matches!(
        board.main_order_at(source_province).map(|o| &o.command),
        Some(MainCommand::Core)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::fixture::FIXTURE_MAP;
    use crate::order::{ConvoyPreference, MainOrder};
    use crate::time::{Phase, Season, Turn};

    fn board() -> Board {
        Board::new(FIXTURE_MAP.clone(), Turn::new(Season::Spring, 1901, Phase::Movement))
    }

    #[test]
    fn army_move_onto_a_sea_province_is_invalid_without_a_convoy_offer() {
        let mut b = board();
        let order = MainOrder::new(
            "lon",
            UnitType::Army,
            MainCommand::Move {
                destination: "nth".into(),
                destination_coast: None,
                via_convoy: ConvoyPreference::None,
            },
        );
        let (validity, not_supportable, _) = classify(b.map(), &b, &order);
        assert_eq!(validity, OrderValidity::Invalid);
        assert!(not_supportable);

        b.set_main_order(order);
    }

    #[test]
    fn army_move_across_the_sea_is_valid_with_convoy_when_a_matching_offer_exists() {
        let mut b = board();
        let order = MainOrder::new(
            "lon",
            UnitType::Army,
            MainCommand::Move {
                destination: "bel".into(),
                destination_coast: None,
                via_convoy: ConvoyPreference::None,
            },
        );
        b.set_main_order(order.clone());
        b.set_main_order(MainOrder::new(
            "eng",
            UnitType::Fleet,
            MainCommand::ConvoyTransport {
                source_province: "lon".into(),
                destination_province: "bel".into(),
            },
        ));

        let (validity, _, _) = classify(b.map(), &b, &order);
        assert_eq!(validity, OrderValidity::ValidWithConvoy);
    }

    #[test]
    fn support_of_a_unit_moving_elsewhere_is_mismatched() {
        let mut b = board();
        b.set_main_order(MainOrder::new(
            "bur",
            UnitType::Army,
            MainCommand::Move {
                destination: "mun".into(),
                destination_coast: None,
                via_convoy: ConvoyPreference::None,
            },
        ));
        let support = MainOrder::new(
            "ruh",
            UnitType::Army,
            MainCommand::Support {
                source_province: "bur".into(),
                destination_province: Some("par".into()),
                destination_coast: None,
            },
        );
        let (validity, _, _) = classify(b.map(), &b, &support);
        assert_eq!(validity, OrderValidity::Mismatched);
    }

    #[test]
    fn fleet_move_to_a_single_coast_province_does_not_need_one_named() {
        let b = board();
        let order = MainOrder::new(
            "eng",
            UnitType::Fleet,
            MainCommand::Move {
                destination: "nth".into(),
                destination_coast: None,
                via_convoy: ConvoyPreference::None,
            },
        );
        let (validity, _, resolved_coast) = classify(b.map(), &b, &order);
        assert_eq!(validity, OrderValidity::Valid);
        assert_eq!(resolved_coast, None);
    }
}
