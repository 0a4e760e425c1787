/// Phase of the battle state machine.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    #[default]
    Intro,
    PlayerChoose,
    PlayerAct,
    CheckEnd,
    EnemyAct,
    Win,
    Lose,
    Flee,
}

impl Phase {
    /// Win, Lose and Flee are absorbing.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Lose | Self::Flee)
    }

    /// Phases that wait on a countdown before moving on.
    pub const fn is_timed(self) -> bool {
        matches!(
            self,
            Self::Intro | Self::PlayerAct | Self::EnemyAct | Self::Flee
        )
    }
}

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CombatResult {
    Win,
    Lose,
    Flee,
}

impl From<CombatResult> for Phase {
    fn from(result: CombatResult) -> Self {
        match result {
            CombatResult::Win => Self::Win,
            CombatResult::Lose => Self::Lose,
            CombatResult::Flee => Self::Flee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn terminal_phases_are_the_result_phases() {
        let terminal: Vec<Phase> = Phase::iter().filter(|p| p.is_terminal()).collect();
        assert_eq!(terminal, vec![Phase::Win, Phase::Lose, Phase::Flee]);
        for result in [CombatResult::Win, CombatResult::Lose, CombatResult::Flee] {
            assert!(Phase::from(result).is_terminal());
        }
        assert_eq!(Phase::PlayerChoose.as_ref(), "player_choose");
    }
}
