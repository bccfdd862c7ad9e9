//! The optional vassal/liege political layer (§4.6), active only when the
//! board carries the `"vassal system"` flag. Recomputed once per build turn;
//! a second, lighter pass runs after Fall retreats to dissolve relationships
//! that no longer hold.
//!
//! This crate has no notion of a player "class" to rank lieges against
//! vassals, so the Fall-retreat dissolution rule uses supply-center count as
//! the rank proxy: a liege ranked at or below its vassal triggers rebellion.
//! See DESIGN.md.

use std::collections::HashSet;

use crate::board::Board;
use crate::nation::PlayerId;
use crate::order::VassalOrder;

/// Runs the build-time recompute: overcommitment/disown, vassal/liege
/// matching, deduplication, dual monarchy, and points.
pub fn recompute_at_build(board: &mut Board) {
    if !board.has_vassal_system() {
        return;
    }

    resolve_overcommitment(board);
    match_vassal_orders(board);
    process_defections(board);
    deduplicate_lieges(board);
    form_dual_monarchies(board);
    credit_points(board);
}

fn centers_of(board: &Board, player: PlayerId) -> u32 {
    board.players().get(player).centers().len() as u32
}

fn resolve_overcommitment(board: &mut Board) {
    let lieges: Vec<PlayerId> = board
        .players()
        .iter()
        .filter(|p| !p.vassals().is_empty())
        .map(|p| p.id())
        .collect();

    for liege in lieges {
        let vassal_centers: u32 = board
            .players()
            .get(liege)
            .vassals()
            .iter()
            .map(|&v| centers_of(board, v))
            .sum();
        let own_centers = centers_of(board, liege);

        if vassal_centers <= own_centers {
            continue;
        }

        log::debug!("{:?} is overcommitted, processing disowns", liege);
        let disowned: HashSet<PlayerId> = board
            .players()
            .get(liege)
            .vassal_orders()
            .iter()
            .filter_map(|o| match o {
                VassalOrder::Disown { vassal } => Some(*vassal),
                _ => None,
            })
            .collect();

        board.players_mut().get_mut(liege).vassals_mut().retain(|v| !disowned.contains(v));
        for &vassal in &disowned {
            board.players_mut().get_mut(vassal).set_liege(None);
        }

        let remaining_centers: u32 = board
            .players()
            .get(liege)
            .vassals()
            .iter()
            .map(|&v| centers_of(board, v))
            .sum();

        if remaining_centers > own_centers {
            log::warn!("{:?} still overcommitted after disowns, dropping all vassals", liege);
            let vassals: Vec<PlayerId> = board.players().get(liege).vassals().to_vec();
            for vassal in vassals {
                board.players_mut().get_mut(vassal).set_liege(None);
            }
            board.players_mut().get_mut(liege).vassals_mut().clear();
        }
    }
}

fn match_vassal_orders(board: &mut Board) {
    let candidates: Vec<PlayerId> = board.players().ids().collect();

    for aspirant in &candidates {
        let offer = board
            .players()
            .get(*aspirant)
            .vassal_orders()
            .iter()
            .find_map(|o| match o {
                VassalOrder::Vassal { liege } => Some(*liege),
                _ => None,
            });
        let Some(liege) = offer else { continue };

        let wants_independence = board
            .players()
            .get(*aspirant)
            .vassal_orders()
            .iter()
            .any(|o| matches!(o, VassalOrder::RebellionMarker));
        if wants_independence {
            continue;
        }

        let accepted = board
            .players()
            .get(liege)
            .vassal_orders()
            .iter()
            .any(|o| matches!(o, VassalOrder::Liege { vassal } if *vassal == *aspirant));

        if accepted {
            board.players_mut().get_mut(*aspirant).set_liege(Some(liege));
            let vassals = board.players_mut().get_mut(liege).vassals_mut();
            if !vassals.contains(aspirant) {
                vassals.push(*aspirant);
            }
        }
    }
}

fn process_defections(board: &mut Board) {
    let defectors: Vec<PlayerId> = board
        .players()
        .iter()
        .filter(|p| p.vassal_orders().iter().any(|o| matches!(o, VassalOrder::Defect)))
        .map(|p| p.id())
        .collect();

    for vassal in defectors {
        if let Some(liege) = board.players().get(vassal).liege() {
            board.players_mut().get_mut(liege).vassals_mut().retain(|v| *v != vassal);
            board.players_mut().get_mut(vassal).set_liege(None);
        }
    }
}

/// A player claimed (accepted) as vassal by more than one liege loses all
/// claimants and reverts to independent.
fn deduplicate_lieges(board: &mut Board) {
    let ids: Vec<PlayerId> = board.players().ids().collect();
    for vassal in ids {
        let claimants: Vec<PlayerId> = board
            .players()
            .iter()
            .filter(|p| p.vassals().contains(&vassal))
            .map(|p| p.id())
            .collect();
        if claimants.len() > 1 {
            log::warn!("{:?} claimed by {} lieges at once, dropping all", vassal, claimants.len());
            for liege in claimants {
                board.players_mut().get_mut(liege).vassals_mut().retain(|v| *v != vassal);
            }
            board.players_mut().get_mut(vassal).set_liege(None);
        }
    }
}

fn form_dual_monarchies(board: &mut Board) {
    let ids: Vec<PlayerId> = board.players().ids().collect();
    for &a in &ids {
        if board.players().get(a).liege().is_some() || !board.players().get(a).vassals().is_empty() {
            continue;
        }
        let proposal = board.players().get(a).vassal_orders().iter().find_map(|o| match o {
            VassalOrder::DualMonarchy { other } => Some(*other),
            _ => None,
        });
        let Some(b) = proposal else { continue };
        if a == b {
            continue;
        }
        if board.players().get(b).liege().is_some() || !board.players().get(b).vassals().is_empty() {
            continue;
        }
        let reciprocated = board
            .players()
            .get(b)
            .vassal_orders()
            .iter()
            .any(|o| matches!(o, VassalOrder::DualMonarchy { other } if *other == a));
        if !reciprocated {
            continue;
        }

        log::debug!("dual monarchy formed between {:?} and {:?}", a, b);
        board.players_mut().get_mut(a).set_liege(Some(b));
        board.players_mut().get_mut(a).vassals_mut().push(b);
        board.players_mut().get_mut(b).set_liege(Some(a));
        board.players_mut().get_mut(b).vassals_mut().push(a);
    }
}

fn credit_points(board: &mut Board) {
    let ids: Vec<PlayerId> = board.players().ids().collect();
    for player in ids {
        let own = centers_of(board, player);
        let liege_share = board
            .players()
            .get(player)
            .liege()
            .map(|l| centers_of(board, l) / 2)
            .unwrap_or(0);
        let vassal_share: u32 = sub_vassal_centers(board, player, &mut HashSet::new());
        board.players_mut().get_mut(player).set_points(own + liege_share + vassal_share);
    }
}

fn sub_vassal_centers(board: &Board, player: PlayerId, seen: &mut HashSet<PlayerId>) -> u32 {
    if !seen.insert(player) {
        return 0;
    }
    board
        .players()
        .get(player)
        .vassals()
        .iter()
        .map(|&v| centers_of(board, v) + sub_vassal_centers(board, v, seen))
        .sum()
}

/// Runs after Fall retreats: dissolves dual monarchies and triggers
/// rebellion when a liege's rank (center count, here) no longer exceeds its
/// vassal's.
pub fn recompute_at_fall_retreat(board: &mut Board) {
    if !board.has_vassal_system() {
        return;
    }

    let ids: Vec<PlayerId> = board.players().ids().collect();
    for vassal in ids {
        let Some(liege) = board.players().get(vassal).liege() else { continue };
        let mutual = board.players().get(liege).liege() == Some(vassal);
        if mutual {
            let still_kingdoms = centers_of(board, vassal) > 0 && centers_of(board, liege) > 0;
            if !still_kingdoms {
                log::debug!("dual monarchy between {:?} and {:?} dissolves", vassal, liege);
                board.players_mut().get_mut(vassal).set_liege(None);
                board.players_mut().get_mut(vassal).vassals_mut().retain(|v| *v != liege);
                board.players_mut().get_mut(liege).set_liege(None);
                board.players_mut().get_mut(liege).vassals_mut().retain(|v| *v != vassal);
            }
            continue;
        }

        if centers_of(board, liege) <= centers_of(board, vassal) {
            log::info!("{:?} outranks liege {:?}, rebelling", vassal, liege);
            board.players_mut().get_mut(liege).vassals_mut().retain(|v| *v != vassal);
            board.players_mut().get_mut(vassal).set_liege(None);
        }
    }
}
