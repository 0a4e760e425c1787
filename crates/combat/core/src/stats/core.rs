//! Combatant stat block.
//!
//! The stat block is the only persistent numeric state a combatant carries
//! into battle. HP and MP are always kept within `0..=max`.

use super::bonus::StatKind;
use crate::combat::calculate_damage;

/// Free attribute points granted per level.
pub const POINTS_PER_LEVEL: u32 = 3;
/// Max HP gained per level.
pub const HP_PER_LEVEL: u32 = 10;
/// Max MP gained per level.
pub const MP_PER_LEVEL: u32 = 5;

/// HP/MP pools, attributes and progression.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantStats {
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub str: u32,
    pub dex: u32,
    pub int: u32,
    pub def: u32,
    pub level: u32,
    pub xp: u32,
    pub free_points: u32,
}

impl CombatantStats {
    /// Create a level-1 stat block with full HP and MP.
    pub fn new(hp: u32, mp: u32, str: u32, dex: u32, int: u32, def: u32) -> Self {
        Self {
            hp,
            max_hp: hp,
            mp,
            max_mp: mp,
            str,
            dex,
            int,
            def,
            level: 1,
            xp: 0,
            free_points: 0,
        }
    }

    /// Starting stat line of a fresh player character.
    pub fn player() -> Self {
        Self::new(80, 40, 4, 3, 3, 3)
    }

    /// Sets the level (builder pattern).
    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level.max(1);
        self
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Attribute value by kind.
    pub fn stat(&self, stat: StatKind) -> u32 {
        match stat {
            StatKind::Str => self.str,
            StatKind::Dex => self.dex,
            StatKind::Int => self.int,
            StatKind::Def => self.def,
        }
    }

    /// HP as a percentage of max, rounded down.
    pub fn hp_percent(&self) -> u32 {
        if self.max_hp == 0 {
            return 0;
        }
        (u64::from(self.hp) * 100 / u64::from(self.max_hp)) as u32
    }

    /// Take a hit mitigated by this block's own DEF; returns damage dealt.
    ///
    /// For callers outside the combat session. The session mitigates on its own
    /// and calls [`apply_damage`](Self::apply_damage).
    pub fn take_damage(&mut self, raw: u32) -> u32 {
        let actual = calculate_damage(raw, 0, 0, self.def);
        self.apply_damage(actual)
    }

    /// Subtract HP without mitigation; returns the amount requested.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        self.hp = self.hp.saturating_sub(amount);
        amount
    }

    pub fn heal(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
    }

    pub fn restore_mp(&mut self, amount: u32) {
        self.mp = self.mp.saturating_add(amount).min(self.max_mp);
    }

    /// Spend MP if enough is available. Never partially spends.
    pub fn use_mp(&mut self, cost: u32) -> bool {
        if self.mp < cost {
            return false;
        }
        self.mp -= cost;
        true
    }

    /// XP required to advance from the current level: `floor(100 * 1.5^(level-1))`.
    pub fn xp_needed(&self) -> u32 {
        let exponent = self.level.saturating_sub(1).min(i32::MAX as u32) as i32;
        let needed = 100.0 * 1.5f64.powi(exponent);
        if needed >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            needed as u32
        }
    }

    /// Grant XP, levelling up as many times as it covers. Returns levels gained.
    ///
    /// Each level adds free points and pool size, and fully restores HP and MP.
    pub fn add_xp(&mut self, amount: u32) -> u32 {
        self.xp = self.xp.saturating_add(amount);
        let mut gained = 0;
        while self.xp >= self.xp_needed() {
            self.xp -= self.xp_needed();
            self.level += 1;
            self.free_points += POINTS_PER_LEVEL;
            self.max_hp += HP_PER_LEVEL;
            self.max_mp += MP_PER_LEVEL;
            self.hp = self.max_hp;
            self.mp = self.max_mp;
            gained += 1;
        }
        gained
    }

    /// Spend one free point on an attribute. Returns false with no points left.
    pub fn assign_point(&mut self, stat: StatKind) -> bool {
        if self.free_points == 0 {
            return false;
        }
        let slot = match stat {
            StatKind::Str => &mut self.str,
            StatKind::Dex => &mut self.dex,
            StatKind::Int => &mut self.int,
            StatKind::Def => &mut self.def,
        };
        *slot += 1;
        self.free_points -= 1;
        true
    }
}

impl Default for CombatantStats {
    /// Generic stat line: 50 HP, 30 MP, 3 in every attribute but DEF 2.
    fn default() -> Self {
        Self::new(50, 30, 3, 3, 3, 2)
    }
}
