use crate::archetype::Contact;
use crate::arena::Arena;
use crate::cue::{AttackCue, CueSink};
use crate::fighter::Fighter;
use crate::health::DamageOutcome;

use super::{AttackKind, HitTarget};

/// Applies the attacker's strike for the frame it just reached, if any.
///
/// Damage lands only while both fighters are alive, the attack area overlaps
/// the target, the archetype window yields a positive strike, and that
/// strike's guard has not fired yet in this attack instance.
pub fn resolve_contact(
    attacker: &mut Fighter,
    target: &mut Fighter,
    arena: &Arena,
) -> Option<DamageOutcome> {
    let at = attacker.attack_frame()?;
    if !attacker.is_alive() || !target.is_alive() {
        return None;
    }

    let policy = attacker.archetype().policy();
    let area = (policy.attack_area)(at.kind, &attacker.body(), attacker.facing(), arena)?;
    if !area.intersects(&target.hurtbox()) {
        return None;
    }

    let strike = (policy.damage_window)(&at)?;
    if strike.damage <= 0 || attacker.attack.record.contains(strike.guard) {
        return None;
    }

    let outcome = target.take_hit(strike.damage);
    attacker.attack.record.insert(strike.guard);
    let contact = Contact {
        kind: at.kind,
        strike,
        facing: attacker.facing(),
        arena,
    };
    (policy.on_hit)(&contact, target);
    Some(outcome)
}

/// Starts `kind` if the cooldown has run out. Returns whether it started.
///
/// A refused start leaves the cooldown and combo state untouched.
pub fn execute_attack<C: CueSink + ?Sized>(
    fighter: &mut Fighter,
    kind: AttackKind,
    cues: &mut C,
) -> bool {
    if fighter.attack.cooldown != 0 {
        return false;
    }
    let policy = fighter.archetype().policy();
    let now_ms = fighter.elapsed_ms();
    let cooldown = (policy.cooldown)(kind, &mut fighter.attack.combo, now_ms);
    fighter.attack.begin(kind, cooldown);
    cues.attack_started(AttackCue {
        slot: fighter.slot(),
        archetype: fighter.archetype(),
        kind,
    });
    true
}
