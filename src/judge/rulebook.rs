//! Adjudication rules for the movement phase (§4.3.1): strength calculations
//! for holds, moves and supports, head-on battles, beleaguered garrisons, the
//! self-dislodgement prohibition, and the 1971 convoy-kidnapping promotion.

use crate::geo::ProvinceKey;
use crate::judge::resolver::{ResolverContext, ResolverState};
use crate::judge::{convoy, Resolution};
use crate::nation::PlayerId;
use crate::order::MainCommand;

/// Dispatches to the per-command-type adjudication routine for the order
/// issued from `province`. Called by `ResolverState::resolve` while `province`
/// is marked `Guessing` in `resolver`, so any recursive call back into
/// `resolver.resolve` may itself return a guessed value.
pub fn adjudicate(ctx: &ResolverContext<'_>, resolver: &mut ResolverState, province: &ProvinceKey) -> Resolution {
    let Some(order) = ctx.order_at(province) else {
        return Resolution::Succeeds;
    };

    match &order.command {
        MainCommand::Hold | MainCommand::Nmr | MainCommand::Core => Resolution::Succeeds,
        MainCommand::ConvoyTransport { .. } => adjudicate_convoy(ctx, resolver, province),
        MainCommand::Support { .. } => adjudicate_support(ctx, resolver, province),
        MainCommand::Move { destination, .. } => adjudicate_move(ctx, resolver, province, destination),
    }
}

/// A convoying fleet's order fails if any move targeting its own province
/// succeeds (DATC §5.D): a dislodged fleet never completes its convoy.
fn adjudicate_convoy(ctx: &ResolverContext<'_>, resolver: &mut ResolverState, province: &ProvinceKey) -> Resolution {
    let attackers: Vec<ProvinceKey> = ctx.moves_to(province).map(|o| o.province.clone()).collect();
    for attacker in attackers {
        if resolver.resolve(ctx, &attacker).succeeded() {
            return Resolution::Fails;
        }
    }
    Resolution::Succeeds
}

fn adjudicate_support(ctx: &ResolverContext<'_>, resolver: &mut ResolverState, province: &ProvinceKey) -> Resolution {
    if is_support_cut(ctx, resolver, province) {
        Resolution::Fails
    } else {
        Resolution::Succeeds
    }
}

/// Support is cut by any attacking order against the supporting province,
/// whether or not that attack goes on to succeed — except an attack mounted
/// by the unit the support is being given to, which only cuts support if that
/// attack itself succeeds (§4.3.1).
fn is_support_cut(ctx: &ResolverContext<'_>, resolver: &mut ResolverState, province: &ProvinceKey) -> bool {
    let Some(order) = ctx.order_at(province) else { return false };
    let MainCommand::Support {
        destination_province, ..
    } = &order.command
    else {
        return false;
    };

    for attacker in ctx.moves_to(province) {
        if attacker.province == *province {
            continue;
        }
        if let Some(dest) = destination_province {
            if &attacker.province == dest {
                if resolver.resolve(ctx, &attacker.province).succeeded() {
                    return true;
                }
                continue;
            }
        }
        return true;
    }
    false
}

/// 1 + the number of successful, uncut supports naming this exact move.
fn move_attack_strength(ctx: &ResolverContext<'_>, resolver: &mut ResolverState, province: &ProvinceKey, destination: &ProvinceKey) -> u32 {
    move_attack_strength_against(ctx, resolver, province, destination, None)
}

/// 1 + the number of successful, uncut supports naming this exact move, not
/// counting supports issued by `defender` — per §4.3.1 step 3, only foreign
/// supports count against a contested defender's nation.
fn move_attack_strength_against(
    ctx: &ResolverContext<'_>,
    resolver: &mut ResolverState,
    province: &ProvinceKey,
    destination: &ProvinceKey,
    defender: Option<PlayerId>,
) -> u32 {
    let mut strength = 1;
    let supporters: Vec<ProvinceKey> = ctx
        .orders()
        .filter_map(|o| match &o.command {
            MainCommand::Support {
                source_province,
                destination_province: Some(dest),
                ..
            } if source_province == province && dest == destination => Some(o.province.clone()),
            _ => None,
        })
        .collect();
    for supporter in supporters {
        let owner = ctx.board.province(&supporter).and_then(|s| s.unit.as_ref()).map(|u| u.owner);
        if owner.is_some() && owner == defender {
            continue;
        }
        if resolver.resolve(ctx, &supporter).succeeded() {
            strength += 1;
        }
    }
    strength
}

/// 1 + the number of successful, uncut supports for the unit standing at
/// `province` to hold.
fn hold_strength(ctx: &ResolverContext<'_>, resolver: &mut ResolverState, province: &ProvinceKey) -> u32 {
    let mut strength = 1;
    let supporters: Vec<ProvinceKey> = ctx
        .orders()
        .filter_map(|o| match &o.command {
            MainCommand::Support {
                source_province,
                destination_province: None,
                ..
            } if source_province == province => Some(o.province.clone()),
            _ => None,
        })
        .collect();
    for supporter in supporters {
        if resolver.resolve(ctx, &supporter).succeeded() {
            strength += 1;
        }
    }
    strength
}

/// Whether the move from `province` requires a successful convoy to land,
/// either because it was classified so during validation or because the 1971
/// kidnapping rule applies: a fleet offers to convoy an army that could also
/// walk, and the destination is moving back at the source.
fn requires_convoy(ctx: &ResolverContext<'_>, province: &ProvinceKey, destination: &ProvinceKey) -> bool {
    if ctx.was_validated_as_convoy(province) {
        return true;
    }

    let offered = ctx.orders().any(|o| {
        matches!(
            &o.command,
            MainCommand::ConvoyTransport { source_province, destination_province }
                if source_province == province && destination_province == destination
        )
    });
    if !offered {
        return false;
    }

    ctx.order_at(destination)
        .map(|o| o.command.move_destination() == Some(province))
        .unwrap_or(false)
}

fn adjudicate_move(
    ctx: &ResolverContext<'_>,
    resolver: &mut ResolverState,
    province: &ProvinceKey,
    destination: &ProvinceKey,
) -> Resolution {
    if requires_convoy(ctx, province, destination) {
        let succeeds = convoy::strict_path_exists(ctx.map, ctx.board, province, destination, |p| {
            resolver.resolve(ctx, p).succeeded()
        });
        if !succeeds {
            return Resolution::Fails;
        }
    }

    // Self-dislodgement: a move into a province held by a unit of the same
    // owner never succeeds unless that unit is itself vacating.
    let occupant = ctx.board.province(destination).and_then(|s| s.unit.as_ref());
    let occupant_owner = occupant.map(|u| u.owner);
    let occupant_moving_away = ctx
        .order_at(destination)
        .map(|o| o.command.is_move())
        .unwrap_or(false);
    let occupant_vacates = occupant_moving_away && resolver.resolve(ctx, destination).succeeded();

    if let Some(unit) = occupant {
        let mover_owner = ctx.board.province(province).and_then(|s| s.unit.as_ref()).map(|u| u.owner);
        if Some(unit.owner) == mover_owner && !occupant_vacates {
            return Resolution::Fails;
        }
    }

    // Head-on battle: the unit at `destination` is itself moving to `province`.
    let head_on = occupant_moving_away
        && ctx
            .order_at(destination)
            .and_then(|o| o.command.move_destination())
            .map(|d| d == province)
            .unwrap_or(false);

    // A contested defender (still standing, or a head-on battle) only counts
    // foreign supports toward our attack strength (§4.3.1 step 3); otherwise
    // every succeeding support counts (step 4).
    let contested = occupant.is_some() && (head_on || !occupant_vacates);
    let my_strength = if contested {
        move_attack_strength_against(ctx, resolver, province, destination, occupant_owner)
    } else {
        move_attack_strength(ctx, resolver, province, destination)
    };

    // Head-to-head and multi-way competition: every other move targeting the
    // same destination must be strictly weaker.
    let rivals: Vec<ProvinceKey> = ctx
        .moves_to(destination)
        .filter(|o| &o.province != province)
        .map(|o| o.province.clone())
        .collect();

    for rival in &rivals {
        let rival_destination = ctx
            .order_at(rival)
            .and_then(|o| o.command.move_destination())
            .cloned();
        let Some(rival_destination) = rival_destination else { continue };
        let rival_strength = move_attack_strength(ctx, resolver, rival, &rival_destination);
        if rival_strength >= my_strength {
            return Resolution::Fails;
        }
    }

    if head_on {
        let mover_owner = ctx.board.province(province).and_then(|s| s.unit.as_ref()).map(|u| u.owner);
        let their_strength = move_attack_strength_against(ctx, resolver, destination, province, mover_owner);
        if their_strength >= my_strength {
            return Resolution::Fails;
        }
        return Resolution::Succeeds;
    }

    // Otherwise, if the occupant stands (holds, or its own move fails), its
    // defend strength must be beaten to dislodge it.
    if occupant.is_some() && !occupant_vacates {
        let defend_strength = hold_strength(ctx, resolver, destination);
        if defend_strength >= my_strength {
            return Resolution::Fails;
        }
    }

    Resolution::Succeeds
}
