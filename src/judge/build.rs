//! Build phase adjudication (§4.5): reconcile each player's unit count against
//! their supply center count.
//!
//! Per the open question on under-disbandment, a player who owes disbands but
//! submits too few `Disband` orders is **not** auto-disbanded by any distance
//! rule here: the shortfall is logged and the excess units are left standing.

use crate::board::Board;
use crate::geo::{Coast, Map, ProvinceKey, Terrain};
use crate::nation::PlayerId;
use crate::order::BuildOrder;
use crate::unit::{Unit, UnitType};

/// The coast-qualified region a new unit should occupy, or `None` if
/// `unit_type` cannot stand in `province` at all, or the province has more
/// than one matching coast and none was named.
fn build_region(map: &Map, province: &ProvinceKey, unit_type: UnitType, coast: Option<Coast>) -> Option<Option<Coast>> {
    let mut candidates: Vec<Option<Coast>> = map
        .regions_of(province)
        .filter(|r| match unit_type {
            UnitType::Army => r.terrain() != Terrain::Sea,
            UnitType::Fleet => r.terrain() != Terrain::Land,
        })
        .map(|r| r.coast())
        .collect();

    if let Some(c) = coast {
        candidates.retain(|rc| *rc == Some(c));
    }

    match candidates.as_slice() {
        [only] => Some(*only),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    Built { province: ProvinceKey },
    Disbanded { province: ProvinceKey },
    Rejected { province: ProvinceKey, reason: String },
}

/// Applies every player's submitted build orders for the current (Winter)
/// turn, up to the number of builds or disbands their center/unit balance
/// allows.
pub fn adjudicate(board: &mut Board) -> Vec<BuildOutcome> {
    let mut outcomes = Vec::new();
    let player_ids: Vec<PlayerId> = board.players().ids().collect();

    for player in player_ids {
        let centers = board.players().get(player).centers().len() as i64;
        let units = board
            .provinces()
            .filter(|(_, state)| state.unit.as_ref().map(|u| u.owner == player).unwrap_or(false))
            .count() as i64;
        let allowance = centers - units;

        let orders: Vec<BuildOrder> = board.build_orders_of(player).to_vec();

        if allowance > 0 {
            let mut granted = 0;
            for order in orders {
                if granted >= allowance {
                    log::warn!("{:?} submitted more builds than its allowance of {}, ignoring the rest", player, allowance);
                    break;
                }
                match order {
                    BuildOrder::Build {
                        province,
                        unit_type,
                        coast,
                    } => {
                        let is_owned_sc = board
                            .map()
                            .find_province(&province)
                            .map(|p| p.is_supply_center())
                            .unwrap_or(false)
                            && board.province(&province).map(|s| s.owner == Some(player) && !s.is_occupied()).unwrap_or(false);
                        let core_ok = board.build_anywhere()
                            || board.province(&province).map(|s| s.core == Some(player)).unwrap_or(false);
                        let region = build_region(board.map(), &province, unit_type, coast);

                        if !is_owned_sc {
                            outcomes.push(BuildOutcome::Rejected {
                                province: province.clone(),
                                reason: "not an owned, unoccupied supply center".into(),
                            });
                        } else if !core_ok {
                            outcomes.push(BuildOutcome::Rejected {
                                province: province.clone(),
                                reason: "not a core province".into(),
                            });
                        } else if let Some(resolved_coast) = region {
                            let mut mutator = board.mutator();
                            if mutator.create_unit(unit_type, player, &province, resolved_coast).is_ok() {
                                granted += 1;
                                outcomes.push(BuildOutcome::Built { province });
                            } else {
                                outcomes.push(BuildOutcome::Rejected {
                                    province,
                                    reason: "destination occupied".into(),
                                });
                            }
                        } else {
                            outcomes.push(BuildOutcome::Rejected {
                                province: province.clone(),
                                reason: "no matching (or unambiguous) coast for this unit type".into(),
                            });
                        }
                    }
                    BuildOrder::Disband { province } => {
                        outcomes.push(BuildOutcome::Rejected {
                            province,
                            reason: "player is owed builds, not disbands".into(),
                        });
                    }
                }
            }
        } else if allowance < 0 {
            let owed = (-allowance) as usize;
            let mut disbanded = 0;
            for order in orders {
                if disbanded >= owed {
                    break;
                }
                if let BuildOrder::Disband { province } = order {
                    let owns_unit = board
                        .province(&province)
                        .and_then(|s| s.unit.as_ref())
                        .map(|u: &Unit| u.owner == player)
                        .unwrap_or(false);
                    if owns_unit {
                        board.mutator().delete_unit(&province);
                        disbanded += 1;
                        outcomes.push(BuildOutcome::Disbanded { province });
                    }
                }
            }
            if disbanded < owed {
                log::warn!(
                    "{:?} owed {} disbands but only submitted {}, leaving the excess standing",
                    player,
                    owed,
                    disbanded
                );
            }
        }
    }

    outcomes
}
