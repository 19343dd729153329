//! Stat stages and base stats

use scout_protocol::Stat;
use serde::Deserialize;

const MIN_STAGE: i8 = -6;
const MAX_STAGE: i8 = 6;

/// Base stats as listed in the compendium
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct BaseStats {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spa: u32,
    pub spd: u32,
    pub spe: u32,
}

/// Stat stages of whatever is active on a side, indexed in [`Stat::ALL`]
/// order. Every stage stays within -6..=+6.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatStages([i8; 7]);

impl StatStages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: Stat) -> i8 {
        self.0[stat as usize]
    }

    /// Store a stage, clamped into range
    pub fn set(&mut self, stat: Stat, value: i8) {
        self.0[stat as usize] = value.clamp(MIN_STAGE, MAX_STAGE);
    }

    /// Raise a stage and return how far it actually moved
    pub fn boost(&mut self, stat: Stat, amount: i8) -> i8 {
        let before = self.get(stat);
        self.set(stat, before.saturating_add(amount));
        self.get(stat) - before
    }

    /// Lower a stage and return how far it actually moved
    pub fn unboost(&mut self, stat: Stat, amount: i8) -> i8 {
        self.boost(stat, amount.saturating_neg())
    }

    pub fn clear(&mut self) {
        self.0 = [0; 7];
    }

    pub fn clear_positive(&mut self) {
        self.0.iter_mut().filter(|stage| **stage > 0).for_each(|stage| *stage = 0);
    }

    pub fn clear_negative(&mut self) {
        self.0.iter_mut().filter(|stage| **stage < 0).for_each(|stage| *stage = 0);
    }

    /// Topsy-Turvy
    pub fn invert(&mut self) {
        self.0.iter_mut().for_each(|stage| *stage = -*stage);
    }

    /// Copy the listed stages from another side (Psych Up). Empty means all.
    pub fn copy_from(&mut self, other: &StatStages, stats: &[Stat]) {
        for &stat in selection(stats) {
            self.set(stat, other.get(stat));
        }
    }

    /// Exchange the listed stages with another side (Power Swap, Heart Swap).
    /// Empty means all.
    pub fn swap_with(&mut self, other: &mut StatStages, stats: &[Stat]) {
        for &stat in selection(stats) {
            let idx = stat as usize;
            std::mem::swap(&mut self.0[idx], &mut other.0[idx]);
        }
    }

    pub fn is_clear(&self) -> bool {
        self.0 == [0; 7]
    }
}

fn selection(stats: &[Stat]) -> &[Stat] {
    if stats.is_empty() { &Stat::ALL } else { stats }
}
