//! Versioned snapshot migrations.
//!
//! Every persisted snapshot carries a schema version. At load time the
//! raw JSON value is walked through an ordered list of pure
//! value-to-value steps until it reaches the current version; business
//! logic never has to probe for legacy shapes again. Steps are additive:
//! they fill in the new shape and leave old fields where they were, so a
//! migrated save still opens under the build that wrote it.

use serde_json::{Value, json};

/// Schema version written by this build.
pub const CURRENT_VERSION: u32 = 2;

struct Migration {
    from: u32,
    apply: fn(&mut Value),
}

/// Ordered migration steps; each moves a snapshot up one version.
const MIGRATIONS: &[Migration] = &[Migration {
    from: 1,
    apply: migrate_v1_flat_artifact_sweep,
}];

/// Brings a raw snapshot value up to [`CURRENT_VERSION`].
///
/// A snapshot without a version field is treated as schema 1. Returns
/// the version the snapshot ended at.
pub fn migrate_to_current(root: &mut Value) -> u32 {
    let mut version = root
        .get("version")
        .and_then(Value::as_u64)
        .map(|v| v as u32)
        .unwrap_or(1);

    for migration in MIGRATIONS {
        if migration.from == version {
            (migration.apply)(root);
            version += 1;
            tracing::info!("migrated snapshot schema v{} -> v{}", migration.from, version);
        }
    }

    if let Some(root) = root.as_object_mut() {
        root.insert("version".to_owned(), version.into());
    }
    version
}

/// v1 -> v2: the sweep tracker used to store its artifact-dungeon fields
/// flat on the root state instead of inside the per-dungeon map.
///
/// Copies any non-default legacy fields into a fresh `sweeps.artifact`
/// entry. The legacy fields stay in place but are never read again, and
/// an existing map entry always wins, so running the step against an
/// already-migrated shape changes nothing.
fn migrate_v1_flat_artifact_sweep(root: &mut Value) {
    let Some(state) = root.get_mut("state").and_then(Value::as_object_mut) else {
        return;
    };

    let used_attempts = state
        .get("artifactDungeonUsedAttempts")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let sweep_count = state
        .get("artifactDungeonSweepCount")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let last_reset_date = state
        .get("artifactDungeonLastResetDate")
        .cloned()
        .unwrap_or(Value::Null);
    let last_reset_ms = state
        .get("artifactDungeonLastResetMs")
        .cloned()
        .unwrap_or(Value::Null);

    let any_legacy_data = used_attempts != 0
        || sweep_count != 0
        || !last_reset_date.is_null()
        || !last_reset_ms.is_null();
    if !any_legacy_data {
        return;
    }

    let sweeps = state
        .entry("sweeps")
        .or_insert_with(|| json!({}));
    let Some(sweeps) = sweeps.as_object_mut() else {
        return;
    };
    if sweeps.contains_key("artifact") {
        return;
    }

    sweeps.insert(
        "artifact".to_owned(),
        json!({
            "lastResetDate": last_reset_date,
            "usedAttempts": used_attempts,
            "lastResetMs": last_reset_ms,
            "sweepCount": sweep_count,
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_snapshot() -> Value {
        json!({
            "saveTime": 1_700_000_000_000_i64,
            "state": {
                "artifactDungeonUsedAttempts": 3,
                "artifactDungeonLastResetDate": "2023-11-15",
                "artifactDungeonLastResetMs": 1_700_000_000_000_i64,
                "artifactDungeonSweepCount": 41,
            },
        })
    }

    #[test]
    fn unversioned_snapshots_migrate_to_current() {
        let mut root = legacy_snapshot();
        assert_eq!(migrate_to_current(&mut root), CURRENT_VERSION);
        assert_eq!(root["version"], CURRENT_VERSION);

        let entry = &root["state"]["sweeps"]["artifact"];
        assert_eq!(entry["usedAttempts"], 3);
        assert_eq!(entry["lastResetDate"], "2023-11-15");
        assert_eq!(entry["sweepCount"], 41);
    }

    #[test]
    fn migration_is_additive_and_keeps_legacy_fields() {
        let mut root = legacy_snapshot();
        migrate_to_current(&mut root);
        assert_eq!(root["state"]["artifactDungeonUsedAttempts"], 3);
        assert_eq!(root["state"]["artifactDungeonSweepCount"], 41);
    }

    #[test]
    fn migration_never_overwrites_an_existing_map_entry() {
        let mut root = legacy_snapshot();
        root["state"]["sweeps"] = json!({
            "artifact": { "usedAttempts": 1, "sweepCount": 7 },
        });

        migrate_to_current(&mut root);
        assert_eq!(root["state"]["sweeps"]["artifact"]["usedAttempts"], 1);
        assert_eq!(root["state"]["sweeps"]["artifact"]["sweepCount"], 7);
    }

    #[test]
    fn default_legacy_fields_produce_no_map_entry() {
        let mut root = json!({ "state": {} });
        migrate_to_current(&mut root);
        assert!(root["state"]["sweeps"].get("artifact").is_none());
    }

    #[test]
    fn current_snapshots_pass_through_untouched() {
        let mut root = json!({ "version": CURRENT_VERSION, "state": {} });
        let before = root.clone();
        migrate_to_current(&mut root);
        assert_eq!(root, before);
    }
}
