use crate::geo::ProvinceKey;
use crate::order::VassalOrder;
use crate::ShortName;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

/// Stable identity for a player. Lieges and vassals are represented as `PlayerId`
/// references into the board's player arena rather than owning references, since
/// the dual-monarchy rule lets two players be each other's liege and vassal at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub(crate) usize);

/// An actor in the game. Players can own units and supply centers and issue orders.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    id: PlayerId,
    name: String,
    centers: HashSet<ProvinceKey>,
    build_orders: Vec<crate::order::BuildOrder>,
    vassal_orders: Vec<VassalOrder>,
    liege: Option<PlayerId>,
    vassals: Vec<PlayerId>,
    points: u32,
}

impl Player {
    pub(crate) fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Player {
            id,
            name: name.into(),
            centers: HashSet::new(),
            build_orders: Vec::new(),
            vassal_orders: Vec::new(),
            liege: None,
            vassals: Vec::new(),
            points: 0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn centers(&self) -> &HashSet<ProvinceKey> {
        &self.centers
    }

    pub fn centers_mut(&mut self) -> &mut HashSet<ProvinceKey> {
        &mut self.centers
    }

    pub fn build_orders(&self) -> &[crate::order::BuildOrder] {
        &self.build_orders
    }

    pub fn build_orders_mut(&mut self) -> &mut Vec<crate::order::BuildOrder> {
        &mut self.build_orders
    }

    pub fn vassal_orders(&self) -> &[VassalOrder] {
        &self.vassal_orders
    }

    pub fn vassal_orders_mut(&mut self) -> &mut Vec<VassalOrder> {
        &mut self.vassal_orders
    }

    pub fn liege(&self) -> Option<PlayerId> {
        self.liege
    }

    pub fn set_liege(&mut self, liege: Option<PlayerId>) {
        self.liege = liege;
    }

    pub fn vassals(&self) -> &[PlayerId] {
        &self.vassals
    }

    pub fn vassals_mut(&mut self) -> &mut Vec<PlayerId> {
        &mut self.vassals
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn set_points(&mut self, points: u32) {
        self.points = points;
    }
}

impl ShortName for Player {
    fn short_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An append-only arena of players, indexed by stable `PlayerId`s. Mirrors the
/// "store in an arena, reference by id" strategy called for wherever a graph of
/// players (liege/vassal) may contain cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerArena {
    players: Vec<Player>,
}

impl PlayerArena {
    pub fn new() -> Self {
        PlayerArena { players: Vec::new() }
    }

    pub fn insert(&mut self, name: impl Into<String>) -> PlayerId {
        let id = PlayerId(self.players.len());
        self.players.push(Player::new(id, name));
        id
    }

    pub fn get(&self, id: PlayerId) -> &Player {
        &self.players[id.0]
    }

    pub fn get_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        (0..self.players.len()).map(PlayerId)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
