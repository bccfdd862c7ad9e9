//! The Kruijswijk guess-and-check fixed-point resolver (§4.3).
//!
//! Orders are identified by the stable `ProvinceKey` of the unit issuing them —
//! exactly one order per province, so no separate id type is needed. States are
//! stored by value; no back-references live in the data, only in the explicit
//! `dependency_chain` used to detect cycles.

use std::collections::{HashMap, HashSet};

use crate::board::Board;
use crate::geo::{Map, ProvinceKey};
use crate::judge::rulebook;
use crate::judge::validator::ValidatedOrder;
use crate::judge::Resolution;
use crate::order::MainOrder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResolutionState {
    Guessing(Resolution),
    Known(Resolution),
}

/// Immutable inputs to a round of movement resolution: the map, the board (for
/// unit/ownership lookups), and the validated order set.
pub struct ResolverContext<'a> {
    pub map: &'a Map,
    pub board: &'a Board,
    orders: HashMap<ProvinceKey, MainOrder>,
    is_convoy: HashMap<ProvinceKey, bool>,
}

impl<'a> ResolverContext<'a> {
    pub fn new(map: &'a Map, board: &'a Board, validated: Vec<ValidatedOrder>) -> Self {
        let mut orders = HashMap::with_capacity(validated.len());
        let mut is_convoy = HashMap::with_capacity(validated.len());
        for v in validated {
            is_convoy.insert(v.province.clone(), v.is_convoy);
            orders.insert(
                v.province.clone(),
                MainOrder::new(v.province, v.unit_type, v.effective),
            );
        }
        ResolverContext { map, board, orders, is_convoy }
    }

    pub fn order_at(&self, province: &ProvinceKey) -> Option<&MainOrder> {
        self.orders.get(province)
    }

    pub fn orders(&self) -> impl Iterator<Item = &MainOrder> {
        self.orders.values()
    }

    pub fn was_validated_as_convoy(&self, province: &ProvinceKey) -> bool {
        self.is_convoy.get(province).copied().unwrap_or(false)
    }

    /// Every move order whose destination is `province`.
    pub fn moves_to<'b>(&'b self, province: &'b ProvinceKey) -> impl Iterator<Item = &'b MainOrder> + 'b {
        self.orders()
            .filter(move |o| o.command.move_destination() == Some(province))
    }
}

/// Mutable resolution state threaded through recursive `resolve` calls.
#[derive(Clone)]
pub struct ResolverState {
    state: HashMap<ProvinceKey, ResolutionState>,
    paradoxical_orders: HashSet<ProvinceKey>,
    dependency_chain: Vec<ProvinceKey>,
}

impl ResolverState {
    pub fn new() -> Self {
        ResolverState {
            state: HashMap::new(),
            paradoxical_orders: HashSet::new(),
            dependency_chain: Vec::new(),
        }
    }

    pub fn order_in_paradox(&self, province: &ProvinceKey) -> bool {
        self.paradoxical_orders.contains(province)
    }

    fn clear_state(&mut self, province: &ProvinceKey) {
        self.state.remove(province);
    }

    fn set_state(&mut self, province: ProvinceKey, resolution: ResolutionState) {
        self.state.insert(province, resolution);
    }

    fn knows_outcome_of(&self, province: &ProvinceKey) -> bool {
        matches!(self.state.get(province), Some(ResolutionState::Known(_)))
    }

    fn with_guess(&self, ctx: &ResolverContext<'_>, province: &ProvinceKey, guess: Resolution) -> (Self, Resolution) {
        let mut guesser = self.clone();
        guesser.set_state(province.clone(), ResolutionState::Guessing(guess));
        let result = rulebook::adjudicate(ctx, &mut guesser, province);
        (guesser, result)
    }

    fn snap_to(&mut self, other: Self) {
        self.state = other.state;
        self.paradoxical_orders = other.paradoxical_orders;
        self.dependency_chain = other.dependency_chain;
    }

    /// Backup rule for a detected paradox/circular-dependency batch (§4.3).
    fn resolve_dependency_cycle(&mut self, ctx: &ResolverContext<'_>, cycle: &[ProvinceKey]) {
        if cycle.iter().all(|p| ctx.order_at(p).map(|o| o.command.is_move()).unwrap_or(false)) {
            log::debug!("pure circular movement among {} orders, all succeed", cycle.len());
            for p in cycle {
                self.set_state(p.clone(), ResolutionState::Known(Resolution::Succeeds));
            }
        } else {
            for p in cycle {
                self.dependency_chain.pop();
                if self.knows_outcome_of(p) {
                    continue;
                }

                let is_convoy = matches!(
                    ctx.order_at(p).map(|o| &o.command),
                    Some(crate::order::MainCommand::ConvoyTransport { .. })
                );

                if is_convoy {
                    log::debug!("szykman rule: failing convoy at {}", p);
                    self.paradoxical_orders.insert(p.clone());
                    self.set_state(p.clone(), ResolutionState::Known(Resolution::Fails));
                } else {
                    self.clear_state(p);
                }
            }
        }
    }

    /// Resolve the order issued from `province`, possibly updating state for
    /// other orders visited along the way.
    pub fn resolve(&mut self, ctx: &ResolverContext<'_>, province: &ProvinceKey) -> Resolution {
        match self.state.get(province).copied() {
            Some(ResolutionState::Known(r)) => r,
            Some(ResolutionState::Guessing(r)) => {
                if !self.dependency_chain.contains(province) {
                    self.dependency_chain.push(province.clone());
                }
                r
            }
            None => {
                let (first_resolver, first_result) = self.with_guess(ctx, province, Resolution::Fails);

                if first_resolver.dependency_chain.len() == self.dependency_chain.len() {
                    self.snap_to(first_resolver);
                    self.set_state(province.clone(), ResolutionState::Known(first_result));
                    first_result
                } else {
                    let next_dep = first_resolver.dependency_chain[self.dependency_chain.len()].clone();

                    if &next_dep != province {
                        self.snap_to(first_resolver);
                        self.set_state(province.clone(), ResolutionState::Guessing(first_result));
                        self.dependency_chain.push(province.clone());
                        first_result
                    } else {
                        let (_second_resolver, second_result) = self.with_guess(ctx, province, Resolution::Succeeds);

                        if first_result == second_result {
                            self.set_state(province.clone(), ResolutionState::Known(first_result));
                            first_result
                        } else {
                            log::trace!("paradox while resolving {}, applying backup rule", province);
                            let tail_start = self.dependency_chain.len();
                            let tail = first_resolver.dependency_chain[tail_start..].to_vec();
                            self.resolve_dependency_cycle(ctx, &tail);
                            self.resolve(ctx, province)
                        }
                    }
                }
            }
        }
    }
}

impl Default for ResolverState {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the fixed-point resolver over every order in `ctx`, returning the final
/// resolution of each province's order.
pub fn resolve_all(ctx: &ResolverContext<'_>) -> HashMap<ProvinceKey, Resolution> {
    let mut state = ResolverState::new();
    let provinces: Vec<ProvinceKey> = ctx.orders().map(|o| o.province.clone()).collect();
    for province in &provinces {
        state.resolve(ctx, province);
    }

    provinces
        .into_iter()
        .map(|p| {
            let resolution = state.resolve(ctx, &p);
            (p, resolution)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::fixture::FIXTURE_MAP;
    use crate::judge::validator;
    use crate::order::{ConvoyPreference, MainCommand};
    use crate::time::{Phase, Season, Turn};
    use crate::unit::UnitType;

    fn board() -> Board {
        Board::new(FIXTURE_MAP.clone(), Turn::new(Season::Spring, 1901, Phase::Movement))
    }

    fn mv(destination: &str) -> MainCommand {
        MainCommand::Move {
            destination: destination.into(),
            destination_coast: None,
            via_convoy: ConvoyPreference::None,
        }
    }

    #[test]
    fn equal_strength_moves_to_the_same_province_both_fail() {
        let mut b = board();
        let a = b.add_player("A");
        let bb = b.add_player("B");
        b.mutator().create_unit(UnitType::Army, a, &"pic".into(), None).unwrap();
        b.mutator().create_unit(UnitType::Army, bb, &"bur".into(), None).unwrap();
        b.set_main_order(MainOrder::new("pic", UnitType::Army, mv("par")));
        b.set_main_order(MainOrder::new("bur", UnitType::Army, mv("par")));

        let validated = validator::validate_all(b.map(), &b);
        let ctx = ResolverContext::new(b.map(), &b, validated);
        let outcomes = resolve_all(&ctx);

        assert_eq!(outcomes[&ProvinceKey::new("pic")], Resolution::Fails);
        assert_eq!(outcomes[&ProvinceKey::new("bur")], Resolution::Fails);
    }

    #[test]
    fn unopposed_move_succeeds() {
        let mut b = board();
        let a = b.add_player("A");
        b.mutator().create_unit(UnitType::Army, a, &"yor".into(), None).unwrap();
        b.set_main_order(MainOrder::new("yor", UnitType::Army, mv("lon")));

        let validated = validator::validate_all(b.map(), &b);
        let ctx = ResolverContext::new(b.map(), &b, validated);
        let outcomes = resolve_all(&ctx);

        assert_eq!(outcomes[&ProvinceKey::new("yor")], Resolution::Succeeds);
    }

    #[test]
    fn guessing_state_is_reported_before_resolution_completes() {
        let mut state = ResolverState::new();
        state.set_state(ProvinceKey::new("par"), ResolutionState::Guessing(Resolution::Fails));
        assert!(!state.knows_outcome_of(&ProvinceKey::new("par")));
        state.set_state(ProvinceKey::new("par"), ResolutionState::Known(Resolution::Succeeds));
        assert!(state.knows_outcome_of(&ProvinceKey::new("par")));
    }
}
