//! Retreat phase adjudication (§4.4): each dislodged unit either disbands or
//! retreats to one of the options recorded when it was dislodged. Two units
//! retreating to the same province bounce each other and both disband.

use std::collections::HashMap;

use from_variants::FromVariants;

use crate::board::Board;
use crate::geo::{ProvinceKey, RegionKey};
use crate::order::RetreatCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retreated {
    pub from: ProvinceKey,
    pub to: RegionKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disbanded {
    pub from: ProvinceKey,
}

/// One dislodged unit's outcome after retreat resolution.
#[derive(Debug, Clone, PartialEq, Eq, FromVariants)]
pub enum RetreatOutcome {
    Retreated(Retreated),
    Disbanded(Disbanded),
}

/// Resolves every pending retreat order against `board` and mutates it in
/// place: retreating units are moved, disbanded and bounced units are removed.
/// Returns the outcome of each dislodged unit for callers building a report.
pub fn adjudicate(board: &mut Board) -> Vec<RetreatOutcome> {
    let dislodged: Vec<ProvinceKey> = board
        .provinces()
        .filter(|(_, state)| state.dislodged_unit.is_some())
        .map(|(p, _)| p.clone())
        .collect();

    let mut chosen: HashMap<ProvinceKey, (ProvinceKey, RegionKey)> = HashMap::new();
    let mut disbanding: Vec<ProvinceKey> = Vec::new();

    for province in &dislodged {
        let order = board.retreat_orders().find(|o| &o.province == province).cloned();
        match order.map(|o| o.command) {
            Some(RetreatCommand::Disband) | None => disbanding.push(province.clone()),
            Some(RetreatCommand::Move {
                destination,
                destination_coast,
            }) => {
                let target = RegionKey::new(destination.clone(), destination_coast);
                let allowed = board
                    .province(province)
                    .map(|s| s.retreat_options.contains(&target))
                    .unwrap_or(false);
                if allowed {
                    chosen.insert(province.clone(), (destination, target));
                } else {
                    log::warn!("retreat order for {} names an illegal destination, disbanding", province);
                    disbanding.push(province.clone());
                }
            }
        }
    }

    let mut destination_counts: HashMap<ProvinceKey, u32> = HashMap::new();
    for (destination, _) in chosen.values() {
        *destination_counts.entry(destination.clone()).or_insert(0) += 1;
    }

    let mut outcomes = Vec::with_capacity(dislodged.len());

    for (province, (destination, target)) in chosen {
        if destination_counts.get(&destination).copied().unwrap_or(0) > 1 {
            log::debug!("retreats to {} bounce, disbanding contenders", destination);
            disbanding.push(province);
            continue;
        }
        let unit = board.province(&province).and_then(|s| s.dislodged_unit.clone());
        if let Some(unit) = unit {
            let mut mutator = board.mutator();
            mutator.place_unit(&destination, unit);
            mutator.clear_dislodged(&province);
        }
        outcomes.push(Retreated { from: province, to: target }.into());
    }

    for province in disbanding {
        board.mutator().clear_dislodged(&province);
        outcomes.push(Disbanded { from: province }.into());
    }

    outcomes
}
