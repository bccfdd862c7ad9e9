//! The runtime board state shared by every adjudicator phase.

use std::collections::{HashMap, HashSet};

use crate::error::{Error, ErrorKind};
use crate::geo::{Coast, Map, ProvinceKey, RegionKey};
use crate::nation::{PlayerArena, PlayerId};
use crate::order::{BuildOrder, MainOrder, RetreatOrder};
use crate::time::Turn;
use crate::unit::{Unit, UnitType};

/// Per-province runtime state: ownership, coring progress, and occupancy.
///
/// Invariant: `dislodged_unit` is `Some` only in the interval between movement
/// resolution and retreat resolution for that turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProvinceState {
    pub owner: Option<PlayerId>,
    pub half_core: Option<PlayerId>,
    pub core: Option<PlayerId>,
    pub corer: Option<PlayerId>,
    pub unit: Option<Unit>,
    pub dislodged_unit: Option<Unit>,
    pub retreat_options: HashSet<RegionKey>,
}

impl ProvinceState {
    pub fn is_occupied(&self) -> bool {
        self.unit.is_some()
    }
}

/// A variant rule flag, read from board data (`"adju flags"`, `"build_options"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdjuFlag {
    VassalSystem,
    BuildAnywhere,
}

/// The full game state handed to an adjudicator and mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    map: Map,
    players: PlayerArena,
    provinces: HashMap<ProvinceKey, ProvinceState>,
    turn: Turn,
    flags: HashSet<String>,
    /// Pending orders for the current phase, keyed by issuing province.
    main_orders: HashMap<ProvinceKey, MainOrder>,
    retreat_orders: HashMap<ProvinceKey, RetreatOrder>,
    /// `(province, coast, description)` triples surfaced for the map renderer.
    failed_or_invalid_units: HashSet<(ProvinceKey, Option<Coast>, String)>,
}

impl Board {
    pub fn new(map: Map, turn: Turn) -> Self {
        Board {
            map,
            players: PlayerArena::new(),
            provinces: HashMap::new(),
            turn,
            flags: HashSet::new(),
            main_orders: HashMap::new(),
            retreat_orders: HashMap::new(),
            failed_or_invalid_units: HashSet::new(),
        }
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Turn) {
        self.turn = turn;
    }

    pub fn players(&self) -> &PlayerArena {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut PlayerArena {
        &mut self.players
    }

    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        self.players.insert(name)
    }

    pub fn set_flag(&mut self, flag: impl Into<String>) {
        self.flags.insert(flag.into());
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    pub fn has_vassal_system(&self) -> bool {
        self.has_flag("vassal system")
    }

    pub fn build_anywhere(&self) -> bool {
        self.has_flag("anywhere")
    }

    pub fn province(&self, key: &ProvinceKey) -> Option<&ProvinceState> {
        self.provinces.get(key)
    }

    pub fn province_mut(&mut self, key: &ProvinceKey) -> &mut ProvinceState {
        self.provinces.entry(key.clone()).or_default()
    }

    pub fn provinces(&self) -> impl Iterator<Item = (&ProvinceKey, &ProvinceState)> {
        self.provinces.iter()
    }

    pub fn main_orders(&self) -> impl Iterator<Item = &MainOrder> {
        self.main_orders.values()
    }

    pub fn main_order_at(&self, province: &ProvinceKey) -> Option<&MainOrder> {
        self.main_orders.get(province)
    }

    pub fn set_main_order(&mut self, order: MainOrder) {
        self.main_orders.insert(order.province.clone(), order);
    }

    pub fn retreat_orders(&self) -> impl Iterator<Item = &RetreatOrder> {
        self.retreat_orders.values()
    }

    pub fn set_retreat_order(&mut self, order: RetreatOrder) {
        self.retreat_orders.insert(order.province.clone(), order);
    }

    pub fn build_orders_of(&self, player: PlayerId) -> &[BuildOrder] {
        self.players.get(player).build_orders()
    }

    pub fn mark_failed(&mut self, province: ProvinceKey, coast: Option<Coast>, description: String) {
        self.failed_or_invalid_units.insert((province, coast, description));
    }

    pub fn failed_or_invalid_units(&self) -> &HashSet<(ProvinceKey, Option<Coast>, String)> {
        &self.failed_or_invalid_units
    }

    /// Clears per-turn order fields. Called by each adjudicator after mutation,
    /// per the data model's lifecycle note that `order`/`retreat_options`/`corer`
    /// are reset at phase end.
    pub fn clear_turn_orders(&mut self) {
        self.main_orders.clear();
        self.retreat_orders.clear();
        self.failed_or_invalid_units.clear();
        for state in self.provinces.values_mut() {
            state.corer = None;
        }
        for player in 0..self.players.len() {
            let player = self.players.get_mut(PlayerId(player));
            player.build_orders_mut().clear();
        }
    }

    pub fn mutator(&mut self) -> BoardMutator<'_> {
        BoardMutator { board: self }
    }
}

/// A thin collaborator owning the board-state-changing operations so that the
/// resolver and adjudicators never poke at `Board` fields directly after
/// resolution. Contracts per the data model: `change_owner` is idempotent;
/// `create_unit` fails if the slot is occupied; `delete_unit` clears occupancy
/// and (if present) the unit's owner can no longer find it.
pub struct BoardMutator<'a> {
    board: &'a mut Board,
}

impl BoardMutator<'_> {
    pub fn change_owner(&mut self, province: &ProvinceKey, owner: PlayerId) {
        let state = self.board.province_mut(province);
        state.owner = Some(owner);
    }

    pub fn create_unit(
        &mut self,
        unit_type: UnitType,
        owner: PlayerId,
        province: &ProvinceKey,
        coast: Option<Coast>,
    ) -> Result<(), Error> {
        let state = self.board.province_mut(province);
        if state.is_occupied() {
            return Err(Error::new(ErrorKind::OccupiedDestination(province.to_string())));
        }
        state.unit = Some(Unit::new(owner, unit_type, coast));
        Ok(())
    }

    pub fn delete_unit(&mut self, province: &ProvinceKey) {
        let state = self.board.province_mut(province);
        state.unit = None;
        state.retreat_options.clear();
    }

    pub fn dislodge(&mut self, province: &ProvinceKey, retreat_options: HashSet<RegionKey>) {
        let state = self.board.province_mut(province);
        state.dislodged_unit = state.unit.take();
        state.retreat_options = retreat_options;
    }

    pub fn place_unit(&mut self, province: &ProvinceKey, unit: Unit) {
        let state = self.board.province_mut(province);
        state.unit = Some(unit);
    }

    pub fn clear_dislodged(&mut self, province: &ProvinceKey) {
        let state = self.board.province_mut(province);
        state.dislodged_unit = None;
        state.retreat_options.clear();
    }
}
