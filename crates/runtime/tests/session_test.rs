//! End-to-end facade scenarios over an in-memory repository.

use std::sync::Arc;

use progress_core::{
    ArtifactId, DungeonId, EggId, KillOutcome, ProgressConfig, ResetClock, ResourceKind, SkillId,
};
use runtime::{MemorySaveRepository, PlayerSession};

// 2024-01-01T00:00:00Z, mid-morning in the UTC+9 reset zone.
const T0: i64 = 1_704_067_200_000;
const DAY_MS: i64 = 24 * 3_600 * 1_000;

fn fresh_session() -> PlayerSession {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    PlayerSession::open(Arc::new(MemorySaveRepository::new()))
}

#[tokio::test]
async fn skill_point_purchase_scenario() {
    let mut session = fresh_session();

    session.add_coins(150_000);
    assert_eq!(session.sp_purchase_cost(), Some(100_000));

    assert!(session.buy_skill_point());
    assert_eq!(session.coins(), 50_000);
    assert_eq!(session.balance(ResourceKind::SkillPoints), 1);
    assert_eq!(session.state().wallet.sp_purchased, 1);
    assert_eq!(session.sp_purchase_cost(), Some(1_000_000));
}

#[tokio::test]
async fn stage_progression_scenario() {
    let mut session = fresh_session();

    for _ in 0..10 {
        session.register_kill();
    }
    assert_eq!(session.state().stage.stage, 2);
    assert_eq!(session.state().stage.kills_in_stage, 0);

    // 190 more kills finish the chapter.
    let mut last = KillOutcome::Progressed;
    for _ in 0..190 {
        last = session.register_kill();
    }
    assert_eq!(last, KillOutcome::ChapterCleared);
    assert_eq!(session.state().stage.chapter, 2);
    assert_eq!(session.state().stage.stage, 1);
    assert_eq!(session.stage_label(), "2-1");
}

#[tokio::test]
async fn kill_rewards_feed_the_wallet() {
    let mut session = fresh_session();

    let reward = session.enemy_gold_reward();
    assert!(reward > 0);
    session.register_kill();
    session.add_coins(reward);
    assert_eq!(session.coins(), reward);
}

#[tokio::test]
async fn upgrades_spend_coins_and_reject_when_broke() {
    let mut session = fresh_session();

    let cost = session.attack_power_upgrade_cost();
    assert!(!session.upgrade_attack_power());

    session.add_coins(cost);
    let power_before = session.attack_power();
    assert!(session.upgrade_attack_power());
    assert_eq!(session.coins(), 0);
    assert!(session.attack_power() > power_before);
}

#[tokio::test]
async fn skill_lifecycle_through_the_facade() {
    let mut session = fresh_session();
    session.add_resource(ResourceKind::SkillPoints, 10);

    assert!(session.try_learn_skill(SkillId::Berserk));
    assert!(session.set_skill_auto_use(SkillId::Berserk, true));
    assert!(session.is_skill_auto_use(SkillId::Berserk));
    let power_level_one = session.skill_power(SkillId::Berserk);

    assert!(session.try_use_skill(SkillId::Berserk, T0));
    assert!(session.is_buff_active(SkillId::Berserk, T0));
    assert!(!session.try_use_skill(SkillId::Berserk, T0 + 1_000));

    // Cooldown only starts once the tick observes the window's end.
    let duration_ms = i64::from(SkillId::Berserk.buff_duration_secs()) * 1_000;
    assert_eq!(session.remaining_cooldown(SkillId::Berserk, T0 + duration_ms - 1), 0.0);
    assert_eq!(session.tick_buffs(T0 + duration_ms), vec![SkillId::Berserk]);
    assert!(session.remaining_cooldown(SkillId::Berserk, T0 + duration_ms) > 0.0);

    assert!(session.try_upgrade_skill(SkillId::Berserk));
    assert!(session.skill_power(SkillId::Berserk) > power_level_one);
}

#[tokio::test]
async fn sweep_budget_and_lifetime_counter() {
    let mut session = fresh_session();
    let limit = ProgressConfig::default().daily_sweep_limit(DungeonId::Artifact);

    // Locked until the dungeon is cleared deep enough.
    assert!(!session.use_sweep_attempt(DungeonId::Artifact, T0));
    session.increase_dungeon_level(DungeonId::Artifact);
    assert_eq!(session.state().dungeon_level(DungeonId::Artifact), 2);

    for used in 0..limit {
        assert_eq!(session.remaining_sweep_attempts(DungeonId::Artifact, T0), limit - used);
        assert!(session.use_sweep_attempt(DungeonId::Artifact, T0));
    }
    assert!(!session.use_sweep_attempt(DungeonId::Artifact, T0));
    assert_eq!(session.sweep_count(DungeonId::Artifact), u64::from(limit));

    // Next day the budget refills; the lifetime counter keeps counting.
    assert!(session.use_sweep_attempt(DungeonId::Artifact, T0 + DAY_MS));
    assert_eq!(session.sweep_count(DungeonId::Artifact), u64::from(limit) + 1);
}

#[tokio::test]
async fn clock_rollback_is_refused_and_counted() {
    let mut session = fresh_session();
    session.increase_dungeon_level(DungeonId::Gold);

    assert!(session.use_sweep_attempt(DungeonId::Gold, T0));
    let remaining = session.remaining_sweep_attempts(DungeonId::Gold, T0);

    // Rolling the supplied clock back must not refill the budget.
    assert_eq!(session.remaining_sweep_attempts(DungeonId::Gold, T0 - DAY_MS), remaining);
    assert_eq!(session.state().tamper_warnings, 1);
}

#[tokio::test]
async fn artifact_and_egg_purchases_gate_on_rubies() {
    let mut session = fresh_session();

    assert!(!session.upgrade_artifact(ArtifactId::WarDrum));

    let attack_before = session.attack_power();
    session.add_resource(ResourceKind::Rubies, session.artifact_upgrade_cost(ArtifactId::WarDrum));
    assert!(session.upgrade_artifact(ArtifactId::WarDrum));
    assert!(session.attack_power() >= attack_before);
    assert_eq!(session.state().artifact_level(ArtifactId::WarDrum), 1);

    assert!(!session.pull_egg(EggId::Turtle));
    session.add_resource(ResourceKind::Rubies, EggId::Turtle.pull_cost_rubies());
    assert!(session.pull_egg(EggId::Turtle));
    assert_eq!(session.state().total_egg_count(), 1);
}

#[tokio::test]
async fn import_remote_overwrites_progress_but_keeps_local_identity() {
    let mut session = fresh_session();
    session.set_identity("local-uuid", "local-sid");
    session.add_coins(10);

    let mut remote = fresh_session();
    remote.add_coins(999_999);
    let mut payload = remote.snapshot();
    payload.state.identity.uuid = String::new();
    payload.state.identity.sid = String::new();

    session.import_remote(payload);
    assert_eq!(session.coins(), 999_999);
    assert_eq!(session.state().identity.uuid, "local-uuid");
    assert_eq!(session.state().identity.sid, "local-sid");

    // A remote that does carry identity wins.
    let mut payload = remote.snapshot();
    payload.state.identity.uuid = "server-uuid".to_owned();
    session.import_remote(payload);
    assert_eq!(session.state().identity.uuid, "server-uuid");
    // Blank remote sid still falls back to the local one.
    assert_eq!(session.state().identity.sid, "local-sid");
}

#[tokio::test]
async fn clear_resets_to_a_fresh_player() {
    let repo = Arc::new(MemorySaveRepository::new());
    let mut session = PlayerSession::with_parts(
        Arc::clone(&repo) as Arc<dyn runtime::SaveRepository>,
        ProgressConfig::default(),
        ResetClock::standard(),
    );

    session.add_coins(5_000);
    session.save();
    session.clear();

    assert_eq!(session.coins(), 0);
    assert!(!session.load());
}
