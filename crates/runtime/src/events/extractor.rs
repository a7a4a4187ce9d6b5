//! Event extraction from fighter deltas.
//!
//! Converts a low-level [`FighterDelta`] into the [`BoutEvent`]s it implies.

use duel_core::{DamageOverTime, FighterDelta, FighterFields, FighterView, StatusKind};

use super::bout_event::{BoutEvent, HealthThreshold, hp_percent};

/// Extract bout events from one fighter's delta.
///
/// # Event Ordering
///
/// 1. Action changes
/// 2. Status and ordnance changes
/// 3. Damage, then derived events (threshold crossing, down, death done)
pub fn extract_events(
    delta: &FighterDelta,
    before: &FighterView,
    after: &FighterView,
) -> Vec<BoutEvent> {
    let slot = delta.slot;
    let mut events = Vec::new();

    if delta.changed(FighterFields::ACTION) {
        events.push(BoutEvent::ActionChanged {
            slot,
            from: before.action,
            to: after.action,
        });
    }

    if delta.changed(FighterFields::STATUS) {
        for (kind, was, now) in [
            (StatusKind::Burn, before.burn, after.burn),
            (StatusKind::Bleed, before.bleed, after.bleed),
        ] {
            if let Some(now) = now {
                if is_fresh(was, now) {
                    events.push(BoutEvent::StatusApplied {
                        slot,
                        kind,
                        remaining_damage: now.remaining_damage,
                    });
                }
            }
        }
    }

    if delta.changed(FighterFields::ORDNANCE) {
        let projectiles = after.projectiles.len().saturating_sub(before.projectiles.len());
        let traps = after.traps.len().saturating_sub(before.traps.len());
        if projectiles > 0 || traps > 0 {
            events.push(BoutEvent::OrdnanceDeployed {
                slot,
                projectiles,
                traps,
            });
        }
    }

    if delta.changed(FighterFields::HEALTH) && delta.health_lost > 0 {
        events.push(BoutEvent::DamageTaken {
            slot,
            amount: delta.health_lost,
            hp_before: before.health,
            hp_after: after.health,
        });

        let was = HealthThreshold::from_hp(before.health, before.max_health);
        let now = HealthThreshold::from_hp(after.health, after.max_health);
        if was != now {
            events.push(BoutEvent::HealthThresholdCrossed {
                slot,
                threshold: now,
                hp_percent: hp_percent(after.health, after.max_health),
            });
        }
    }

    if delta.changed(FighterFields::ALIVE) && !after.alive {
        events.push(BoutEvent::FighterDown { slot });
    }

    if delta.changed(FighterFields::DEATH_DONE) && after.death_done {
        events.push(BoutEvent::DeathAnimationDone { slot });
    }

    events
}

/// A record is fresh when it appeared or was replaced by a longer one.
fn is_fresh(was: Option<DamageOverTime>, now: DamageOverTime) -> bool {
    match was {
        None => true,
        Some(was) => now.remaining_ticks > was.remaining_ticks,
    }
}
