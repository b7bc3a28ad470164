//! Static skill definitions: kind, timing, caps, costs, and power curves.

use crate::state::{SkillId, SkillKind};

/// Per-level damage table for the meteor strike.
const METEOR_POWER: [i64; 5] = [500, 700, 900, 1_100, 1_300];

impl SkillId {
    pub fn kind(self) -> SkillKind {
        match self {
            SkillId::PowerStrike | SkillId::Meteor => SkillKind::Attack,
            SkillId::Berserk | SkillId::GoldenTouch => SkillKind::Buff,
        }
    }

    /// Cooldown in seconds once the cooldown clock starts.
    pub fn cooldown_secs(self) -> u32 {
        match self {
            SkillId::PowerStrike => 5,
            SkillId::Meteor => 30,
            SkillId::Berserk => 60,
            SkillId::GoldenTouch => 120,
        }
    }

    /// Buff duration in seconds; zero for instant skills.
    pub fn buff_duration_secs(self) -> u32 {
        match self {
            SkillId::Berserk => 30,
            SkillId::GoldenTouch => 20,
            SkillId::PowerStrike | SkillId::Meteor => 0,
        }
    }

    pub fn max_level(self) -> u32 {
        match self {
            SkillId::PowerStrike => 10,
            SkillId::Meteor => 5,
            SkillId::Berserk => 5,
            SkillId::GoldenTouch => 3,
        }
    }

    /// Skill points needed to learn.
    pub fn learn_cost_sp(self) -> i64 {
        match self {
            SkillId::PowerStrike => 1,
            SkillId::Berserk => 2,
            SkillId::Meteor => 3,
            SkillId::GoldenTouch => 5,
        }
    }

    /// Skill points for the next upgrade step from `level`.
    pub fn upgrade_cost_sp(self, level: u32) -> i64 {
        i64::from(level)
    }

    /// Effect magnitude at a level. Strike and the buffs are linear in
    /// level; the meteor reads a flat per-level table.
    ///
    /// Units depend on the skill: percent of attack power for attacks,
    /// percent attack-speed gain for berserk, percent gold gain for the
    /// golden touch.
    pub fn power(self, level: u32) -> i64 {
        let level = level.max(1);
        match self {
            SkillId::PowerStrike => 200 + 20 * i64::from(level),
            SkillId::Meteor => {
                let index = (level as usize - 1).min(METEOR_POWER.len() - 1);
                METEOR_POWER[index]
            }
            SkillId::Berserk => 25 + 5 * i64::from(level),
            SkillId::GoldenTouch => 50 * i64::from(level),
        }
    }
}
