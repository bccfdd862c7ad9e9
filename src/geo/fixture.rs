//! A small hardcoded map sufficient to exercise the DATC 6.A-6.F families and the
//! literal S1-S7 scenarios. Not a substitute for a full variant map; loading one
//! from configuration is a caller concern.

use lazy_static::lazy_static;

use super::builder::ProvinceRegistry;
use super::{Map, Province, Region, RegionKey, Terrain};

fn land(key: &str, name: &str, sc: bool) -> (Province, Region) {
    let p = Province::new(key, name, sc);
    let r = Region::new(key, None, Terrain::Land);
    (p, r)
}

fn sea(key: &str, name: &str) -> (Province, Region) {
    let p = Province::new(key, name, false);
    let r = Region::new(key, None, Terrain::Sea);
    (p, r)
}

fn coastal(key: &str, name: &str, sc: bool) -> (Province, Region) {
    let p = Province::new(key, name, sc);
    let r = Region::new(key, None, Terrain::Coast);
    (p, r)
}

fn rk(s: &str) -> RegionKey {
    RegionKey::new(s, None)
}

/// Builds the fixture map used throughout `tests/` and doctests. Provinces named
/// after their real Diplomacy counterparts (`par`, `bur`, `mun`, ...) so DATC-style
/// scenarios read naturally, but the border set is a deliberately reduced subset of
/// the standard board, not the full variant map.
pub fn build() -> Map {
    let (par_p, par_r) = land("par", "Paris", true);
    let (bur_p, bur_r) = land("bur", "Burgundy", false);
    let (mun_p, mun_r) = land("mun", "Munich", true);
    let (ruh_p, ruh_r) = land("ruh", "Ruhr", false);
    let (gas_p, gas_r) = land("gas", "Gascony", false);
    let (pic_p, pic_r) = land("pic", "Picardy", false);
    let (yor_p, yor_r) = coastal("yor", "Yorkshire", false);
    let (lon_p, lon_r) = coastal("lon", "London", true);
    let (bel_p, bel_r) = coastal("bel", "Belgium", true);
    let (mar_p, mar_r) = coastal("mar", "Marseilles", true);
    let (spa_p, spa_r) = coastal("spa", "Spain", true);
    let (eng_p, eng_r) = sea("eng", "English Channel");
    let (nth_p, nth_r) = sea("nth", "North Sea");
    let (hol_p, hol_r) = land("hol", "Holland", true);

    let registry = ProvinceRegistry::new()
        .add(par_p)
        .add(bur_p)
        .add(mun_p)
        .add(ruh_p)
        .add(gas_p)
        .add(pic_p)
        .add(yor_p)
        .add(lon_p)
        .add(bel_p)
        .add(mar_p)
        .add(spa_p)
        .add(eng_p)
        .add(nth_p)
        .add(hol_p)
        .regions()
        .add(par_r)
        .add(bur_r)
        .add(mun_r)
        .add(ruh_r)
        .add(gas_r)
        .add(pic_r)
        .add(yor_r)
        .add(lon_r)
        .add(bel_r)
        .add(mar_r)
        .add(spa_r)
        .add(eng_r)
        .add(nth_r)
        .add(hol_r)
        .borders();

    registry
        .connect(rk("par"), rk("bur"), Terrain::Land)
        .connect(rk("par"), rk("gas"), Terrain::Land)
        .connect(rk("par"), rk("pic"), Terrain::Land)
        .connect(rk("bur"), rk("mun"), Terrain::Land)
        .connect(rk("bur"), rk("ruh"), Terrain::Land)
        .connect(rk("bur"), rk("gas"), Terrain::Land)
        .connect(rk("mun"), rk("ruh"), Terrain::Land)
        .connect(rk("ruh"), rk("hol"), Terrain::Land)
        .connect(rk("pic"), rk("bel"), Terrain::Land)
        .connect(rk("pic"), rk("eng"), Terrain::Coast)
        .connect(rk("gas"), rk("mar"), Terrain::Land)
        .connect(rk("gas"), rk("spa"), Terrain::Land)
        .connect(rk("mar"), rk("spa"), Terrain::Land)
        .connect(rk("yor"), rk("lon"), Terrain::Land)
        .connect(rk("yor"), rk("nth"), Terrain::Coast)
        .connect(rk("lon"), rk("eng"), Terrain::Coast)
        .connect(rk("bel"), rk("eng"), Terrain::Coast)
        .connect(rk("bel"), rk("nth"), Terrain::Coast)
        .connect(rk("bel"), rk("hol"), Terrain::Land)
        .connect(rk("hol"), rk("nth"), Terrain::Coast)
        .connect(rk("eng"), rk("nth"), Terrain::Sea)
        .into()
}

lazy_static! {
    pub static ref FIXTURE_MAP: Map = build();
}
