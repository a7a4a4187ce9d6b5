//! Bout-level properties of the combat rules, driven through the public API.

use duel_core::{
    ActionKind, Archetype, Arena, AttackKind, Bolt, Fighter, InputSnapshot, Muted, Ordnance,
    Slot, StatusKind, execute_attack,
};

const DT: u32 = 16;

fn fighter(slot: Slot, archetype: Archetype, x: i32) -> Fighter {
    Fighter::new(slot, archetype, x, &Arena::default()).expect("valid spawn")
}

/// Runs `attacker`'s updates against a target that stands still.
fn run_attack(attacker: &mut Fighter, target: &mut Fighter, ticks: u32) {
    let arena = Arena::default();
    for _ in 0..ticks {
        attacker.update(&arena, Some(&mut *target), DT);
    }
}

#[test]
fn burn_kills_exactly_on_the_second_installment() {
    let arena = Arena::default();
    let mut warrior = fighter(Slot::One, Archetype::Warrior, 200);
    let other = fighter(Slot::Two, Archetype::Tank, 900);
    warrior.apply_status(StatusKind::Burn, 180, 180);

    let mut healths = Vec::new();
    for _ in 0..200 {
        warrior.move_step(&arena, InputSnapshot::IDLE, &other, false, &mut Muted);
        healths.push(warrior.health().current());
    }

    assert_eq!(healths[58], 120);
    assert_eq!(healths[59], 60);
    assert_eq!(healths[118], 60);
    assert_eq!(healths[119], 0);
    assert!(!warrior.is_alive());
    assert_eq!(warrior.health().damage_taken(), 120);
}

#[test]
fn heavy_swing_knocks_back_exactly_once() {
    let mut tank = fighter(Slot::One, Archetype::Tank, 300);
    let mut target = fighter(Slot::Two, Archetype::Warrior, 400);
    assert!(execute_attack(&mut tank, AttackKind::Third, &mut Muted));

    run_attack(&mut tank, &mut target, 39);
    assert_eq!(target.health().damage_taken(), 0);
    assert_eq!(target.body().x, 400);

    run_attack(&mut tank, &mut target, 1);
    assert_eq!(target.health().damage_taken(), 15);
    assert_eq!(target.body().x, 560);
    assert!(target.is_hit());

    run_attack(&mut tank, &mut target, 50);
    assert_eq!(target.health().damage_taken(), 15);
    assert_eq!(target.body().x, 560);
}

#[test]
fn knockback_against_the_wall_is_clamped_and_never_repeats() {
    let mut tank = fighter(Slot::One, Archetype::Tank, 1100);
    let mut target = fighter(Slot::Two, Archetype::Warrior, 1200);
    assert!(execute_attack(&mut tank, AttackKind::Third, &mut Muted));

    run_attack(&mut tank, &mut target, 40);
    let body = target.body();
    assert_eq!(body.right(), 1400);
    assert_eq!(target.health().damage_taken(), 15);

    // still inside the swing for the rest of the animation and beyond
    run_attack(&mut tank, &mut target, 50);
    assert_eq!(target.health().damage_taken(), 15);
    assert_eq!(target.body(), body);
}

#[test]
fn single_hit_attack_lands_once_per_instance() {
    let mut warrior = fighter(Slot::One, Archetype::Warrior, 300);
    let mut target = fighter(Slot::Two, Archetype::Tank, 450);
    assert!(execute_attack(&mut warrior, AttackKind::First, &mut Muted));

    run_attack(&mut warrior, &mut target, 30);
    assert!(!warrior.attack().is_attacking());
    assert_eq!(target.health().damage_taken(), 8);
}

#[test]
fn sweep_lands_only_on_qualifying_frames() {
    let mut warrior = fighter(Slot::One, Archetype::Warrior, 300);
    let mut target = fighter(Slot::Two, Archetype::Tank, 450);
    assert!(execute_attack(&mut warrior, AttackKind::Second, &mut Muted));

    let mut dealt_on = Vec::new();
    let mut last = 0;
    for _ in 0..40 {
        warrior.update(&Arena::default(), Some(&mut target), DT);
        let taken = target.health().damage_taken();
        if taken != last {
            dealt_on.push((warrior.frame(), taken - last));
            last = taken;
        }
    }
    assert_eq!(dealt_on, vec![(4, 6), (6, 6), (8, 13)]);
    assert_eq!(target.health().damage_taken(), 25);
}

#[test]
fn assassin_flurry_burns_on_the_last_mark() {
    let mut assassin = fighter(Slot::One, Archetype::Assassin, 300);
    let mut target = fighter(Slot::Two, Archetype::Warrior, 450);
    assert!(execute_attack(&mut assassin, AttackKind::Third, &mut Muted));

    run_attack(&mut assassin, &mut target, 40);
    assert_eq!(target.health().damage_taken(), 24);
    assert!(target.status().is_active(StatusKind::Burn));
}

#[test]
fn stab_applies_bleed() {
    let mut trapper = fighter(Slot::One, Archetype::Trapper, 300);
    let mut target = fighter(Slot::Two, Archetype::Warrior, 360);
    assert!(execute_attack(&mut trapper, AttackKind::First, &mut Muted));

    run_attack(&mut trapper, &mut target, 24);
    assert_eq!(target.health().damage_taken(), 5);
    assert!(target.status().is_active(StatusKind::Bleed));
}

#[test]
fn bolt_leaving_the_arena_never_deals_damage() {
    let arena = Arena::default();
    let mut target = fighter(Slot::Two, Archetype::Warrior, 100);
    let mut ordnance = Ordnance::default();
    ordnance.launch(Bolt::with_velocity((1480, 200), (12.0, -1.0), 4, 4));

    let mut dealt = 0;
    for tick in 0..5u32 {
        dealt += ordnance.tick(Some(&mut target), &arena, DT, u64::from(tick) * 16);
    }
    assert_eq!(dealt, 0);
    assert!(ordnance.is_empty());
    assert_eq!(target.health().damage_taken(), 0);
}

#[test]
fn non_positive_damage_is_ignored() {
    let mut target = fighter(Slot::Two, Archetype::Warrior, 100);
    target.apply_damage(0);
    target.apply_damage(-5);
    assert_eq!(target.health().damage_taken(), 0);
    assert!(target.is_alive());
}

#[test]
fn health_stays_derived_and_death_is_permanent() {
    let mut target = fighter(Slot::Two, Archetype::Assassin, 100);
    let mut deaths = 0;
    let mut was_alive = target.is_alive();
    for amount in [7, -3, 0, 25, 13, 40, 9, 1, 100] {
        target.apply_damage(amount);
        let health = target.health();
        assert_eq!(
            health.current(),
            (health.max() - health.damage_taken()).clamp(0, health.max())
        );
        assert!((0..=health.max()).contains(&health.damage_taken()));
        if was_alive && !target.is_alive() {
            deaths += 1;
        }
        assert!(was_alive || !target.is_alive(), "revived");
        was_alive = target.is_alive();
    }
    assert_eq!(deaths, 1);
    assert_eq!(target.health().current(), 0);
}

#[test]
fn dead_fighters_do_not_strike() {
    let mut warrior = fighter(Slot::One, Archetype::Warrior, 300);
    let mut target = fighter(Slot::Two, Archetype::Tank, 450);
    assert!(execute_attack(&mut warrior, AttackKind::First, &mut Muted));
    warrior.apply_damage(500);

    run_attack(&mut warrior, &mut target, 30);
    assert_eq!(target.health().damage_taken(), 0);
    assert_eq!(warrior.action(), ActionKind::Death);
}
