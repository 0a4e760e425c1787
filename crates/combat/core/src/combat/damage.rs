//! Damage calculation and mitigation.

/// Minimum damage any landed hit deals.
pub const MIN_DAMAGE: u32 = 1;

/// Defense reduction, `floor(def * 0.8)` in integer form.
#[inline]
pub fn defense_reduction(def: u32) -> u32 {
    def.saturating_mul(4) / 5
}

/// Calculate damage dealt by an attack.
///
/// # Formula
///
/// ```text
/// raw = base + stat_bonus + weapon_bonus
/// result = max(1, raw - floor(target_def * 0.8))
/// ```
///
/// A hit always deals at least one point.
pub fn calculate_damage(base: u32, stat_bonus: u32, weapon_bonus: u32, target_def: u32) -> u32 {
    let raw = base.saturating_add(stat_bonus).saturating_add(weapon_bonus);
    raw.saturating_sub(defense_reduction(target_def)).max(MIN_DAMAGE)
}

/// Damage an enemy attack deals to the player.
///
/// If the player is defending, the raw value is halved (at least 1) before
/// the usual defense reduction.
pub fn mitigate_enemy_attack(raw: u32, defending: bool, total_def: u32) -> u32 {
    let raw = if defending {
        (raw / 2).max(MIN_DAMAGE)
    } else {
        raw
    };
    calculate_damage(raw, 0, 0, total_def)
}
