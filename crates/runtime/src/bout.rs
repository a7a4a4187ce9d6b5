//! Fixed-order bout driver.
//!
//! A [`Bout`] owns both fighters and their input providers. Each tick it
//! samples inputs, moves P1 then P2, updates P1 then P2 against each other,
//! and diffs the fighter views taken before and after into [`BoutEvent`]s.
//! The bout is decided once a fallen fighter's death animation completes, or
//! when the tick limit runs out.

use duel_content::Roster;
use duel_core::{
    Archetype, Arena, AttackCue, Fighter, FighterDelta, FighterView, SimConfig, Slot,
};
use serde::Serialize;

use crate::api::{InputContext, InputProvider, Result, RuntimeError};
use crate::events::{BoutEvent, extract_events};

/// 90 seconds at the default tick length.
pub const DEFAULT_MAX_TICKS: u64 = 5_625;

/// Default left edges of the two fighters.
pub const DEFAULT_SPAWN_X: [i32; 2] = [300, 1100];

#[inline]
fn index(slot: Slot) -> usize {
    match slot {
        Slot::One => 0,
        Slot::Two => 1,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum BoutOutcome {
    /// The loser's death animation finished on `tick`.
    Knockout { winner: Slot, tick: u64 },
    /// Tick limit reached; `leader` has more health left, if anyone does.
    TimeUp { leader: Option<Slot>, tick: u64 },
}

impl BoutOutcome {
    pub fn winner(&self) -> Option<Slot> {
        match self {
            Self::Knockout { winner, .. } => Some(*winner),
            Self::TimeUp { leader, .. } => *leader,
        }
    }

    pub fn tick(&self) -> u64 {
        match self {
            Self::Knockout { tick, .. } | Self::TimeUp { tick, .. } => *tick,
        }
    }
}

/// Everything that happened during one tick.
#[derive(Debug, Clone, Serialize)]
pub struct TickReport {
    /// Index of the tick just simulated, starting at 0.
    pub tick: u64,
    pub events: Vec<BoutEvent>,
    pub views: [FighterView; 2],
    pub outcome: Option<BoutOutcome>,
}

impl TickReport {
    pub fn view(&self, slot: Slot) -> &FighterView {
        &self.views[index(slot)]
    }
}

/// Running totals kept per fighter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FighterStats {
    pub attacks_started: u32,
    pub damage_taken: i32,
    pub statuses_suffered: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FighterSummary {
    pub slot: Slot,
    pub archetype: Archetype,
    pub health: i32,
    pub max_health: i32,
    pub alive: bool,
    #[serde(flatten)]
    pub stats: FighterStats,
}

/// Final state of a bout, for logs and the client's JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct BoutSummary {
    pub ticks: u64,
    pub seed: u64,
    pub outcome: Option<BoutOutcome>,
    pub fighters: [FighterSummary; 2],
}

impl BoutSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct Bout {
    arena: Arena,
    config: SimConfig,
    fighters: [Fighter; 2],
    providers: [Box<dyn InputProvider>; 2],
    stats: [FighterStats; 2],
    tick: u64,
    max_ticks: u64,
    outcome: Option<BoutOutcome>,
}

impl Bout {
    pub fn builder() -> BoutBuilder {
        BoutBuilder::default()
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn fighter(&self, slot: Slot) -> &Fighter {
        &self.fighters[index(slot)]
    }

    pub fn stats(&self, slot: Slot) -> FighterStats {
        self.stats[index(slot)]
    }

    /// Ticks simulated so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn max_ticks(&self) -> u64 {
        self.max_ticks
    }

    pub fn outcome(&self) -> Option<BoutOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn views(&self) -> [FighterView; 2] {
        [
            self.fighters[0].view(&self.arena),
            self.fighters[1].view(&self.arena),
        ]
    }

    /// Simulates one tick.
    ///
    /// Fails with [`RuntimeError::BoutFinished`] once an outcome is set.
    pub fn step(&mut self) -> Result<TickReport> {
        if let Some(outcome) = self.outcome {
            return Err(RuntimeError::BoutFinished {
                tick: outcome.tick(),
            });
        }

        let before = self.views();
        let round_over = self.fighters.iter().any(|fighter| !fighter.is_alive());

        let mut inputs = [duel_core::InputSnapshot::IDLE; 2];
        for slot in [Slot::One, Slot::Two] {
            let i = index(slot);
            let ctx = InputContext {
                slot,
                tick: self.tick,
                own: &before[i],
                opponent: &before[1 - i],
            };
            inputs[i] = self.providers[i].provide_input(&ctx);
        }

        let mut cues: Vec<AttackCue> = Vec::new();
        let dt_ms = self.config.tick_ms;
        let [p1, p2] = &mut self.fighters;
        p1.move_step(&self.arena, inputs[0], p2, round_over, &mut cues);
        p2.move_step(&self.arena, inputs[1], p1, round_over, &mut cues);
        p1.update(&self.arena, Some(&mut *p2), dt_ms);
        p2.update(&self.arena, Some(&mut *p1), dt_ms);

        let after = self.views();
        let mut events = Vec::new();
        for cue in cues {
            self.stats[index(cue.slot)].attacks_started += 1;
            events.push(BoutEvent::AttackStarted {
                slot: cue.slot,
                archetype: cue.archetype,
                kind: cue.kind,
            });
        }
        for i in 0..2 {
            if let Some(delta) = FighterDelta::from_views(&before[i], &after[i]) {
                events.extend(extract_events(&delta, &before[i], &after[i]));
            }
        }
        for event in &events {
            self.record(event);
            tracing::debug!(tick = self.tick, ?event, "bout event");
        }

        let tick = self.tick;
        self.tick += 1;
        self.outcome = self.decide();
        if let Some(outcome) = self.outcome {
            tracing::info!(?outcome, ticks = self.tick, "bout decided");
        }
        tracing::trace!(
            tick,
            p1_health = after[0].health,
            p2_health = after[1].health,
            "tick simulated"
        );

        Ok(TickReport {
            tick,
            events,
            views: after,
            outcome: self.outcome,
        })
    }

    /// Steps until the bout is decided, handing every report to `on_tick`.
    pub fn run(&mut self, mut on_tick: impl FnMut(&TickReport)) -> Result<BoutOutcome> {
        tracing::info!(
            p1 = %self.fighters[0].archetype(),
            p2 = %self.fighters[1].archetype(),
            seed = self.config.seed,
            max_ticks = self.max_ticks,
            "bout started"
        );
        loop {
            let report = self.step()?;
            on_tick(&report);
            if let Some(outcome) = report.outcome {
                return Ok(outcome);
            }
        }
    }

    pub fn summary(&self) -> BoutSummary {
        let fighter = |slot: Slot| {
            let f = self.fighter(slot);
            FighterSummary {
                slot,
                archetype: f.archetype(),
                health: f.health().current(),
                max_health: f.health().max(),
                alive: f.is_alive(),
                stats: self.stats(slot),
            }
        };
        BoutSummary {
            ticks: self.tick,
            seed: self.config.seed,
            outcome: self.outcome,
            fighters: [fighter(Slot::One), fighter(Slot::Two)],
        }
    }

    fn record(&mut self, event: &BoutEvent) {
        let stats = &mut self.stats[index(event.slot())];
        match event {
            BoutEvent::DamageTaken { amount, .. } => stats.damage_taken += amount,
            BoutEvent::StatusApplied { .. } => stats.statuses_suffered += 1,
            _ => {}
        }
    }

    /// P1's knockout is checked first, so a double knockout goes to P2.
    fn decide(&self) -> Option<BoutOutcome> {
        let [p1, p2] = &self.fighters;
        if !p1.is_alive() && p1.death_done() {
            return Some(BoutOutcome::Knockout {
                winner: Slot::Two,
                tick: self.tick,
            });
        }
        if !p2.is_alive() && p2.death_done() {
            return Some(BoutOutcome::Knockout {
                winner: Slot::One,
                tick: self.tick,
            });
        }
        if self.tick >= self.max_ticks {
            let (h1, h2) = (p1.health().current(), p2.health().current());
            let leader = match h1.cmp(&h2) {
                std::cmp::Ordering::Greater => Some(Slot::One),
                std::cmp::Ordering::Less => Some(Slot::Two),
                std::cmp::Ordering::Equal => None,
            };
            return Some(BoutOutcome::TimeUp {
                leader,
                tick: self.tick,
            });
        }
        None
    }
}

/// Assembles a [`Bout`] from config, roster, archetypes and providers.
pub struct BoutBuilder {
    config: SimConfig,
    roster: Roster,
    archetypes: [Option<Archetype>; 2],
    spawn_x: [i32; 2],
    providers: [Option<Box<dyn InputProvider>>; 2],
    max_ticks: u64,
}

impl Default for BoutBuilder {
    fn default() -> Self {
        Self {
            config: SimConfig::default(),
            roster: Roster::default(),
            archetypes: [None, None],
            spawn_x: DEFAULT_SPAWN_X,
            providers: [None, None],
            max_ticks: DEFAULT_MAX_TICKS,
        }
    }
}

impl BoutBuilder {
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }

    pub fn archetype(mut self, slot: Slot, archetype: Archetype) -> Self {
        self.archetypes[index(slot)] = Some(archetype);
        self
    }

    pub fn spawn_x(mut self, slot: Slot, x: i32) -> Self {
        self.spawn_x[index(slot)] = x;
        self
    }

    pub fn provider(mut self, slot: Slot, provider: impl InputProvider + 'static) -> Self {
        self.providers[index(slot)] = Some(Box::new(provider));
        self
    }

    pub fn max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn build(mut self) -> Result<Bout> {
        if self.config.tick_ms == 0 {
            return Err(RuntimeError::ZeroTickLength);
        }
        let arena = Arena::from_config(&self.config).map_err(RuntimeError::Arena)?;

        let p1 = self.fighter(Slot::One, &arena)?;
        let p2 = self.fighter(Slot::Two, &arena)?;
        let provider = |slot: Slot, providers: &mut [Option<Box<dyn InputProvider>>; 2]| {
            providers[index(slot)]
                .take()
                .ok_or(RuntimeError::ProviderNotSet { slot })
        };
        let providers = [
            provider(Slot::One, &mut self.providers)?,
            provider(Slot::Two, &mut self.providers)?,
        ];

        tracing::debug!(
            p1 = %p1.archetype(),
            p2 = %p2.archetype(),
            tick_ms = self.config.tick_ms,
            frame_ms = self.config.frame_ms,
            "bout assembled"
        );

        Ok(Bout {
            arena,
            config: self.config,
            fighters: [p1, p2],
            providers,
            stats: [FighterStats::default(); 2],
            tick: 0,
            max_ticks: self.max_ticks,
            outcome: None,
        })
    }

    fn fighter(&self, slot: Slot, arena: &Arena) -> Result<Fighter> {
        let archetype = self.archetypes[index(slot)].ok_or(RuntimeError::ArchetypeNotSet { slot })?;
        Fighter::from_config(
            slot,
            archetype,
            self.roster.profile(archetype),
            self.spawn_x[index(slot)],
            arena,
            &self.config,
        )
        .map_err(|source| RuntimeError::FighterSetup { slot, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::IdleInputProvider;

    fn idle_bout(max_ticks: u64) -> Bout {
        Bout::builder()
            .archetype(Slot::One, Archetype::Warrior)
            .archetype(Slot::Two, Archetype::Tank)
            .provider(Slot::One, IdleInputProvider)
            .provider(Slot::Two, IdleInputProvider)
            .max_ticks(max_ticks)
            .build()
            .expect("bout")
    }

    #[test]
    fn missing_provider_is_reported() {
        let err = Bout::builder()
            .archetype(Slot::One, Archetype::Warrior)
            .archetype(Slot::Two, Archetype::Tank)
            .provider(Slot::One, IdleInputProvider)
            .build()
            .err()
            .expect("no p2 provider");
        assert!(matches!(err, RuntimeError::ProviderNotSet { slot: Slot::Two }));
    }

    #[test]
    fn spawn_outside_arena_names_the_slot() {
        let err = Bout::builder()
            .archetype(Slot::One, Archetype::Warrior)
            .archetype(Slot::Two, Archetype::Tank)
            .spawn_x(Slot::Two, 1390)
            .provider(Slot::One, IdleInputProvider)
            .provider(Slot::Two, IdleInputProvider)
            .build()
            .err()
            .expect("bad spawn");
        assert!(matches!(
            err,
            RuntimeError::FighterSetup {
                slot: Slot::Two,
                ..
            }
        ));
    }

    #[test]
    fn idle_bout_times_out_as_a_draw() {
        let mut bout = idle_bout(10);
        let outcome = bout.run(|_| {}).expect("run");
        assert_eq!(
            outcome,
            BoutOutcome::TimeUp {
                leader: None,
                tick: 10
            }
        );
        assert!(matches!(
            bout.step(),
            Err(RuntimeError::BoutFinished { tick: 10 })
        ));
    }

    #[test]
    fn fighters_turn_to_face_each_other() {
        let mut bout = idle_bout(5);
        let report = bout.step().expect("tick");
        assert_eq!(report.tick, 0);
        assert_eq!(report.view(Slot::One).facing, duel_core::Facing::Right);
        assert_eq!(report.view(Slot::Two).facing, duel_core::Facing::Left);
        assert_eq!(bout.tick(), 1);
    }

    #[test]
    fn summary_serializes() {
        let mut bout = idle_bout(3);
        bout.run(|_| {}).expect("run");
        let json = bout.summary().to_json().expect("json");
        assert!(json.contains("\"result\": \"time_up\""));
        assert!(json.contains("\"archetype\": \"tank\""));
    }
}
