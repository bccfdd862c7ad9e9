//! Phase dispatch (§6): given a board and its currently pending orders, select
//! the matching adjudicator by `turn.phase()`, run it to completion, and
//! return the board with that phase's orders cleared. Calling the wrong
//! dispatcher for the board's current phase is a caller error, not a panic.

use std::collections::HashSet;

use crate::board::Board;
use crate::error::{Error, ErrorKind};
use crate::geo::RegionKey;
use crate::judge::resolver::{resolve_all, ResolverContext};
use crate::judge::{build, retreat, validator, vassal, Resolution};
use crate::order::MainCommand;

/// Runs movement resolution: validates every submitted order, resolves the
/// fixed point, then mutates the board — relocating successful movers,
/// dislodging units that lost a contest, and transferring supply-center
/// ownership on a Fall turn.
pub fn resolve_movement(board: &mut Board) -> Result<(), Error> {
    if !board.turn().is_moves() {
        return Err(Error::new(ErrorKind::PhaseMismatch {
            expected: "movement",
            found: format!("{:?}", board.turn().phase()),
        }));
    }

    let (contested, successful_moves, occupied_after, stationary) = {
        let validated = validator::validate_all(board.map(), board);
        let ctx = ResolverContext::new(board.map(), board, validated);
        let outcomes = resolve_all(&ctx);

        let contested: HashSet<_> = ctx
            .orders()
            .filter_map(|o| o.command.move_destination().cloned())
            .collect();

        let successful_moves: Vec<_> = ctx
            .orders()
            .filter(|o| o.command.is_move())
            .filter(|o| outcomes.get(&o.province).copied().unwrap_or(Resolution::Fails).succeeded())
            .map(|o| (o.province.clone(), o.command.move_destination().unwrap().clone(), coast_of(&o.command)))
            .collect::<Vec<_>>();

        let vacated: HashSet<_> = successful_moves.iter().map(|(from, ..)| from.clone()).collect();
        let occupied_after: HashSet<_> = ctx
            .board
            .provinces()
            .filter(|(p, s)| s.unit.is_some() && !vacated.contains(*p))
            .map(|(p, _)| p.clone())
            .chain(successful_moves.iter().map(|(_, to, _)| to.clone()))
            .collect();

        let stationary: Vec<_> = ctx
            .orders()
            .filter(|o| !vacated.contains(&o.province))
            .map(|o| o.province.clone())
            .collect();

        (contested, successful_moves, occupied_after, stationary)
    };

    // Relocate successful movers and transfer ownership: always in Fall, and in
    // any season when the destination isn't a supply center (§4.3.1 step 2).
    for (from, to, coast) in &successful_moves {
        let unit = board.province(from).and_then(|s| s.unit.clone());
        if let Some(unit) = unit {
            let owner = unit.owner;
            let mut mutator = board.mutator();
            mutator.delete_unit(from);
            mutator.place_unit(to, crate::unit::Unit::new(owner, unit.unit_type, *coast));
            let is_sc = board.map().find_province(to).map(|p| p.is_supply_center()).unwrap_or(false);
            if board.turn().is_fall() || !is_sc {
                board.mutator().change_owner(to, owner);
            }
        }
    }

    // Dislodge stationary units that lost a contest for their own province; for
    // everyone else left standing, grant Fall ownership of an unowned province
    // (§4.3.1 step 3).
    for province in stationary {
        let attacker_origin = successful_moves
            .iter()
            .find(|(_, to, _)| to == &province)
            .map(|(from, ..)| from.clone());

        let Some(attacker_origin) = attacker_origin else {
            if board.turn().is_fall() {
                let owner = board.province(&province).and_then(|s| s.unit.as_ref()).map(|u| u.owner);
                if let Some(owner) = owner {
                    let already_owned = board.province(&province).and_then(|s| s.owner) == Some(owner);
                    if !already_owned {
                        board.mutator().change_owner(&province, owner);
                    }
                }
            }
            continue;
        };

        let standing_region = board
            .province(&province)
            .and_then(|s| s.unit.as_ref())
            .map(|u| RegionKey::new(province.clone(), u.coast))
            .unwrap_or_else(|| RegionKey::new(province.clone(), None));

        let options: HashSet<RegionKey> = board
            .map()
            .find_bordering(&standing_region)
            .into_iter()
            .filter(|r| {
                let p = r.province();
                !occupied_after.contains(p) && !contested.contains(p) && p != &attacker_origin
            })
            .cloned()
            .collect();

        board.mutator().dislodge(&province, options);
    }

    board.clear_turn_orders();
    Ok(())
}

fn coast_of(command: &MainCommand) -> Option<crate::geo::Coast> {
    match command {
        MainCommand::Move { destination_coast, .. } => *destination_coast,
        _ => None,
    }
}

/// Runs retreat resolution for every dislodged unit, then clears dislodged
/// slots and pending retreat orders.
pub fn resolve_retreats(board: &mut Board) -> Result<Vec<retreat::RetreatOutcome>, Error> {
    if !board.turn().is_retreats() {
        return Err(Error::new(ErrorKind::PhaseMismatch {
            expected: "retreat",
            found: format!("{:?}", board.turn().phase()),
        }));
    }

    let outcomes = retreat::adjudicate(board);
    if board.turn().is_fall() {
        vassal::recompute_at_fall_retreat(board);
    }
    board.clear_turn_orders();
    Ok(outcomes)
}

/// Runs build/disband resolution, then the optional vassal recompute.
pub fn resolve_builds(board: &mut Board) -> Result<Vec<build::BuildOutcome>, Error> {
    if !board.turn().is_builds() {
        return Err(Error::new(ErrorKind::PhaseMismatch {
            expected: "build",
            found: format!("{:?}", board.turn().phase()),
        }));
    }

    let outcomes = build::adjudicate(board);
    vassal::recompute_at_build(board);
    board.clear_turn_orders();
    Ok(outcomes)
}
