//! Convoy path discovery: breadth-first reachability over convoying fleets.
//!
//! Two modes per the data model: *strict*, which only follows fleets issuing a
//! matching `ConvoyTransport` whose own order resolves to succeed, and
//! *geometric*, which ignores fleet orders entirely and is used only to tell
//! `MISMATCHED_ORDER` apart from `INVALID` during validation.

use std::collections::{HashSet, VecDeque};

use crate::board::Board;
use crate::geo::{Map, ProvinceKey, Terrain};
use crate::order::MainCommand;

/// BFS from `origin` to `destination`, moving only through sea provinces for
/// which `passable` returns true.
fn path_exists(map: &Map, origin: &ProvinceKey, destination: &ProvinceKey, passable: impl Fn(&ProvinceKey) -> bool) -> bool {
    let mut visited: HashSet<ProvinceKey> = HashSet::new();
    let mut queue: VecDeque<ProvinceKey> = VecDeque::new();

    for neighbor in map.bordering_provinces(origin) {
        if passable(neighbor) {
            visited.insert(neighbor.clone());
            queue.push_back(neighbor.clone());
        }
    }

    while let Some(province) = queue.pop_front() {
        for neighbor in map.bordering_provinces(&province) {
            if neighbor == destination {
                return true;
            }
            if !visited.contains(neighbor) && passable(neighbor) {
                visited.insert(neighbor.clone());
                queue.push_back(neighbor.clone());
            }
        }
    }

    false
}

fn is_sea(map: &Map, province: &ProvinceKey) -> bool {
    map.regions_of(province).any(|r| r.terrain() == Terrain::Sea)
}

/// Geometric mode: is there *any* chain of sea provinces occupied by fleets
/// (regardless of their orders) connecting `source` to `destination`?
pub fn geometric_path_exists(map: &Map, board: &Board, source: &ProvinceKey, destination: &ProvinceKey) -> bool {
    path_exists(map, source, destination, |p| {
        is_sea(map, p)
            && board
                .province(p)
                .and_then(|s| s.unit.as_ref())
                .map(|u| u.unit_type == crate::unit::UnitType::Fleet)
                .unwrap_or(false)
    })
}

/// Strict mode: is there a chain of fleets each issuing a `ConvoyTransport`
/// matching this exact source/destination, and whose own convoy order
/// resolves (possibly by guess) to succeed?
///
/// `resolves` is supplied by the resolver so that path discovery honors the
/// suspension semantics of the fixed-point algorithm: following an edge
/// through a convoying fleet requires a recursive call back into `resolve`.
pub fn strict_path_exists(
    map: &Map,
    board: &Board,
    source: &ProvinceKey,
    destination: &ProvinceKey,
    mut resolves: impl FnMut(&ProvinceKey) -> bool,
) -> bool {
    path_exists(map, source, destination, |p| {
        let Some(state) = board.province(p) else { return false };
        let Some(unit) = state.unit.as_ref() else { return false };
        if unit.unit_type != crate::unit::UnitType::Fleet {
            return false;
        }
        let Some(order) = board.main_order_at(p) else { return false };
        match &order.command {
            MainCommand::ConvoyTransport {
                source_province,
                destination_province,
            } if source_province == source && destination_province == destination => resolves(p),
            _ => false,
        }
    })
}
