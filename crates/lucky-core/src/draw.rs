//! Draw controller: the spin/stop state machine.
//!
//! The controller never touches clocks or audio itself. Every operation
//! returns the [`DrawEffect`]s the caller must carry out (schedule or cancel a
//! tick, start or stop sound). Ticks are identified by [`TimerHandle`]; only
//! the handle most recently scheduled is accepted, so a cancelled timer that
//! still manages to deliver its tick is ignored.

use std::fmt;
use std::time::Duration;

use tracing::{debug, info, trace};

use crate::picker::CandidatePicker;
use crate::pool::NameList;

/// Default period of the fixed-interval spin
pub const DEFAULT_FIXED_PERIOD: Duration = Duration::from_millis(10);
/// Default first interval of a decelerating spin
pub const DEFAULT_INITIAL_INTERVAL: Duration = Duration::from_millis(100);
/// Default interval growth per tick of a decelerating spin
pub const DEFAULT_INTERVAL_STEP: Duration = Duration::from_millis(200);
/// Default ceiling past which a decelerating spin stops
pub const DEFAULT_INTERVAL_CEILING: Duration = Duration::from_millis(2000);

/// What ends a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopTrigger {
    /// Only an explicit `stop()` ends the draw
    Manual,
    /// The draw ends itself once the interval passes its ceiling
    Deadline,
}

/// How the gap between ticks evolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalPolicy {
    Constant {
        period: Duration,
    },
    Growing {
        initial: Duration,
        step: Duration,
        ceiling: Duration,
    },
}

impl IntervalPolicy {
    fn initial(&self) -> Duration {
        match *self {
            IntervalPolicy::Constant { period } => period,
            IntervalPolicy::Growing { initial, .. } => initial,
        }
    }
}

/// When sound plays during a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundStyle {
    /// Loop for as long as the draw runs
    Ambient,
    /// Play once when the winner is revealed
    Chime,
}

/// Full configuration of a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawStrategy {
    pub stop_trigger: StopTrigger,
    pub interval: IntervalPolicy,
    pub sound: SoundStyle,
}

impl DrawStrategy {
    /// Rapid constant spin, stopped by the user, with looping sound
    pub fn fixed_interval() -> Self {
        Self {
            stop_trigger: StopTrigger::Manual,
            interval: IntervalPolicy::Constant {
                period: DEFAULT_FIXED_PERIOD,
            },
            sound: SoundStyle::Ambient,
        }
    }

    /// Slowing spin that stops on its own, with a chime on the result
    pub fn decelerating() -> Self {
        Self {
            stop_trigger: StopTrigger::Deadline,
            interval: IntervalPolicy::Growing {
                initial: DEFAULT_INITIAL_INTERVAL,
                step: DEFAULT_INTERVAL_STEP,
                ceiling: DEFAULT_INTERVAL_CEILING,
            },
            sound: SoundStyle::Chime,
        }
    }
}

impl Default for DrawStrategy {
    fn default() -> Self {
        Self::fixed_interval()
    }
}

/// User toggles applied when a draw stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub remove_winner_on_stop: bool,
    pub play_sound_on_stop: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            remove_winner_on_stop: false,
            play_sound_on_stop: true,
        }
    }
}

/// Draw lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawPhase {
    #[default]
    Idle,
    Running,
    Stopped,
}

impl DrawPhase {
    pub fn can_start(&self) -> bool {
        matches!(self, DrawPhase::Idle | DrawPhase::Stopped)
    }
}

/// Identity of one scheduled tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Side effect requested by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawEffect {
    /// Deliver `tick(handle)` once `delay` has elapsed
    ScheduleTick { handle: TimerHandle, delay: Duration },
    /// Drop a previously scheduled tick
    CancelTick(TimerHandle),
    StartAmbientSound,
    StopAmbientSound,
    PlayChime,
}

/// Owns the name list, preferences and the draw state machine
#[derive(Debug, Clone)]
pub struct DrawController {
    strategy: DrawStrategy,
    preferences: Preferences,
    names: NameList,
    phase: DrawPhase,
    interval: Duration,
    displayed: Option<String>,
    winner: Option<String>,
    pending: Option<TimerHandle>,
    next_timer_id: u64,
    ticks: u32,
    ambient_playing: bool,
}

impl DrawController {
    pub fn new(strategy: DrawStrategy, preferences: Preferences) -> Self {
        Self {
            strategy,
            preferences,
            names: NameList::default(),
            phase: DrawPhase::Idle,
            interval: strategy.interval.initial(),
            displayed: None,
            winner: None,
            pending: None,
            next_timer_id: 0,
            ticks: 0,
            ambient_playing: false,
        }
    }

    pub fn with_names(mut self, raw: impl Into<String>) -> Self {
        self.names = NameList::new(raw);
        self
    }

    // ─────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────

    pub fn strategy(&self) -> &DrawStrategy {
        &self.strategy
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut Preferences {
        &mut self.preferences
    }

    pub fn names(&self) -> &NameList {
        &self.names
    }

    /// Raw text for editing. Changes apply to the next tick.
    pub fn names_mut(&mut self) -> &mut NameList {
        &mut self.names
    }

    pub fn pool(&self) -> Vec<&str> {
        self.names.pool()
    }

    pub fn phase(&self) -> DrawPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == DrawPhase::Running
    }

    /// Candidate currently on screen, if any draw has sampled one yet
    pub fn displayed(&self) -> Option<&str> {
        self.displayed.as_deref()
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.pending
    }

    /// Ticks applied during the current (or last) draw
    pub fn tick_count(&self) -> u32 {
        self.ticks
    }

    pub fn can_start(&self) -> bool {
        self.phase.can_start() && !self.names.is_empty()
    }

    pub fn can_stop(&self) -> bool {
        self.phase == DrawPhase::Running && self.strategy.stop_trigger == StopTrigger::Manual
    }

    // ─────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────

    /// Begin a draw. No-op when the pool is empty or a draw is running.
    pub fn start(&mut self) -> Vec<DrawEffect> {
        if !self.can_start() {
            debug!(
                "start ignored: phase={:?}, pool={}",
                self.phase,
                self.names.pool_len()
            );
            return Vec::new();
        }

        self.phase = DrawPhase::Running;
        self.interval = self.strategy.interval.initial();
        self.ticks = 0;
        // The previous result leaves the screen until this draw samples
        self.displayed = None;
        self.winner = None;

        let mut effects = Vec::new();
        if self.strategy.sound == SoundStyle::Ambient && self.preferences.play_sound_on_stop {
            self.ambient_playing = true;
            effects.push(DrawEffect::StartAmbientSound);
        }
        effects.push(self.schedule_next());

        info!(
            "Draw started with {} names ({:?})",
            self.names.pool_len(),
            self.strategy.stop_trigger
        );
        effects
    }

    /// End a manual draw and reveal the winner
    pub fn stop(&mut self) -> Vec<DrawEffect> {
        if !self.can_stop() {
            debug!("stop ignored: phase={:?}", self.phase);
            return Vec::new();
        }
        self.finish()
    }

    /// Apply one timer tick
    pub fn tick(
        &mut self,
        handle: TimerHandle,
        picker: &mut dyn CandidatePicker,
    ) -> Vec<DrawEffect> {
        if self.pending != Some(handle) {
            trace!("dropping stale tick {} (pending {:?})", handle, self.pending);
            return Vec::new();
        }
        self.pending = None;
        self.ticks += 1;

        let pool = self.names.pool();
        if !pool.is_empty() {
            let index = picker.pick(pool.len());
            self.displayed = Some(pool[index].to_string());
        }
        trace!(
            "tick {} -> {:?} (interval {:?})",
            self.ticks,
            self.displayed,
            self.interval
        );

        match self.strategy.interval {
            IntervalPolicy::Constant { .. } => vec![self.schedule_next()],
            IntervalPolicy::Growing { step, ceiling, .. } => {
                self.interval += step;
                if self.interval > ceiling {
                    self.finish()
                } else {
                    vec![self.schedule_next()]
                }
            }
        }
    }

    /// Release the timer and sound without choosing a winner
    pub fn teardown(&mut self) -> Vec<DrawEffect> {
        let mut effects = Vec::new();
        if let Some(handle) = self.pending.take() {
            effects.push(DrawEffect::CancelTick(handle));
        }
        if self.ambient_playing {
            self.ambient_playing = false;
            effects.push(DrawEffect::StopAmbientSound);
        }
        if self.phase == DrawPhase::Running {
            self.phase = DrawPhase::Idle;
        }
        effects
    }

    // ─────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────

    fn schedule_next(&mut self) -> DrawEffect {
        self.next_timer_id += 1;
        let handle = TimerHandle::new(self.next_timer_id);
        self.pending = Some(handle);
        DrawEffect::ScheduleTick {
            handle,
            delay: self.interval,
        }
    }

    /// Running -> Stopped: freeze winner, release timer and sound, apply preferences
    fn finish(&mut self) -> Vec<DrawEffect> {
        let mut effects = Vec::new();
        if let Some(handle) = self.pending.take() {
            effects.push(DrawEffect::CancelTick(handle));
        }
        if self.ambient_playing {
            self.ambient_playing = false;
            effects.push(DrawEffect::StopAmbientSound);
        }

        self.phase = DrawPhase::Stopped;
        self.winner = self.displayed.clone();

        match self.winner.clone() {
            Some(winner) => {
                info!("Draw stopped after {} ticks, winner: {}", self.ticks, winner);
                if self.preferences.remove_winner_on_stop && self.names.remove_first(&winner) {
                    debug!("Removed winner {:?} from pool", winner);
                }
                if self.strategy.sound == SoundStyle::Chime && self.preferences.play_sound_on_stop
                {
                    effects.push(DrawEffect::PlayChime);
                }
            }
            None => debug!("Draw stopped before any candidate was sampled"),
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::{RandomPicker, ScriptedPicker};

    fn scheduled(effects: &[DrawEffect]) -> Option<TimerHandle> {
        effects.iter().find_map(|e| match e {
            DrawEffect::ScheduleTick { handle, .. } => Some(*handle),
            _ => None,
        })
    }

    fn decelerating(names: &str, remove: bool) -> DrawController {
        DrawController::new(
            DrawStrategy::decelerating(),
            Preferences {
                remove_winner_on_stop: remove,
                play_sound_on_stop: true,
            },
        )
        .with_names(names)
    }

    /// Tick until the controller stops scheduling, returning the tick count
    fn run_to_completion(draw: &mut DrawController, picker: &mut dyn CandidatePicker) -> u32 {
        let mut handle = draw.pending_timer().expect("draw should be scheduled");
        loop {
            let effects = draw.tick(handle, picker);
            match scheduled(&effects) {
                Some(next) => handle = next,
                None => return draw.tick_count(),
            }
        }
    }

    #[test]
    fn test_start_with_empty_pool_is_noop() {
        let mut draw = DrawController::new(DrawStrategy::fixed_interval(), Preferences::default())
            .with_names("\n   \n");
        assert!(draw.start().is_empty());
        assert_eq!(draw.phase(), DrawPhase::Idle);
        assert!(draw.pending_timer().is_none());
    }

    #[test]
    fn test_fixed_start_schedules_and_starts_ambient_sound() {
        let mut draw = DrawController::new(DrawStrategy::fixed_interval(), Preferences::default())
            .with_names("Alice\nBob");
        let effects = draw.start();
        assert_eq!(effects[0], DrawEffect::StartAmbientSound);
        assert!(matches!(
            effects[1],
            DrawEffect::ScheduleTick { delay, .. } if delay == Duration::from_millis(10)
        ));
        assert_eq!(draw.phase(), DrawPhase::Running);
    }

    #[test]
    fn test_fixed_start_without_sound() {
        let prefs = Preferences {
            play_sound_on_stop: false,
            ..Preferences::default()
        };
        let mut draw =
            DrawController::new(DrawStrategy::fixed_interval(), prefs).with_names("Alice");
        let effects = draw.start();
        assert_eq!(effects.len(), 1);
        assert!(scheduled(&effects).is_some());
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut draw = decelerating("Alice", false);
        draw.start();
        let pending = draw.pending_timer();
        assert!(draw.start().is_empty());
        assert_eq!(draw.pending_timer(), pending);
    }

    #[test]
    fn test_ticks_sample_members_of_current_pool() {
        let mut draw = DrawController::new(DrawStrategy::fixed_interval(), Preferences::default())
            .with_names("Alice\nBob\nCarol");
        let mut picker = RandomPicker::seeded(11);
        let mut handle = scheduled(&draw.start()).unwrap();
        for _ in 0..100 {
            let effects = draw.tick(handle, &mut picker);
            let shown = draw.displayed().unwrap().to_string();
            assert!(draw.pool().contains(&shown.as_str()));
            handle = scheduled(&effects).unwrap();
        }
    }

    #[test]
    fn test_edit_while_running_changes_next_sample() {
        let mut draw = DrawController::new(DrawStrategy::fixed_interval(), Preferences::default())
            .with_names("Alice");
        let mut picker = RandomPicker::seeded(1);
        let handle = scheduled(&draw.start()).unwrap();
        let handle = scheduled(&draw.tick(handle, &mut picker)).unwrap();
        assert_eq!(draw.displayed(), Some("Alice"));

        draw.names_mut().set_raw("Zed");
        draw.tick(handle, &mut picker);
        assert_eq!(draw.displayed(), Some("Zed"));
    }

    #[test]
    fn test_manual_stop_freezes_winner_and_cancels_timer() {
        let mut draw = DrawController::new(DrawStrategy::fixed_interval(), Preferences::default())
            .with_names("Alice\nBob");
        let mut picker = ScriptedPicker::new(vec![1]);
        let handle = scheduled(&draw.start()).unwrap();
        let next = scheduled(&draw.tick(handle, &mut picker)).unwrap();

        let effects = draw.stop();
        assert_eq!(
            effects,
            vec![DrawEffect::CancelTick(next), DrawEffect::StopAmbientSound]
        );
        assert_eq!(draw.phase(), DrawPhase::Stopped);
        assert_eq!(draw.winner(), Some("Bob"));

        // The cancelled tick arriving late changes nothing
        assert!(draw.tick(next, &mut picker).is_empty());
        assert_eq!(draw.displayed(), Some("Bob"));
    }

    #[test]
    fn test_stop_when_idle_is_noop() {
        let mut draw = DrawController::new(DrawStrategy::fixed_interval(), Preferences::default())
            .with_names("Alice");
        assert!(draw.stop().is_empty());
        assert_eq!(draw.phase(), DrawPhase::Idle);
    }

    #[test]
    fn test_stop_is_ignored_for_deadline_draws() {
        let mut draw = decelerating("Alice", false);
        draw.start();
        assert!(draw.stop().is_empty());
        assert!(draw.is_running());
    }

    #[test]
    fn test_stop_before_first_tick_has_no_winner() {
        let mut draw = DrawController::new(DrawStrategy::fixed_interval(), Preferences {
            remove_winner_on_stop: true,
            play_sound_on_stop: false,
        })
        .with_names("Alice\nBob");
        draw.start();
        draw.stop();
        assert_eq!(draw.winner(), None);
        assert_eq!(draw.names().pool(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_restart_then_stop_before_tick_clears_previous_result() {
        let mut draw = DrawController::new(DrawStrategy::fixed_interval(), Preferences {
            remove_winner_on_stop: true,
            play_sound_on_stop: false,
        })
        .with_names("Alice\nBob\nCarol");
        let mut picker = ScriptedPicker::new(vec![1]);
        let handle = scheduled(&draw.start()).unwrap();
        draw.tick(handle, &mut picker);
        draw.stop();
        assert_eq!(draw.winner(), Some("Bob"));
        assert_eq!(draw.pool(), vec!["Alice", "Carol"]);

        draw.start();
        assert_eq!(draw.displayed(), None);
        assert_eq!(draw.winner(), None);
        draw.stop();

        assert_eq!(draw.displayed(), None);
        assert_eq!(draw.winner(), None);
        assert_eq!(draw.pool(), vec!["Alice", "Carol"]);
    }

    #[test]
    fn test_deceleration_stops_after_ten_ticks() {
        let mut draw = decelerating("Alice\nBob\nCarol", false);
        draw.start();
        assert_eq!(draw.interval(), Duration::from_millis(100));
        let ticks = run_to_completion(&mut draw, &mut RandomPicker::seeded(5));
        assert_eq!(ticks, 10);
        assert_eq!(draw.phase(), DrawPhase::Stopped);
        assert_eq!(draw.interval(), Duration::from_millis(2100));
        assert!(draw.pending_timer().is_none());
    }

    #[test]
    fn test_deceleration_intervals_grow_by_step() {
        let mut draw = decelerating("Alice", false);
        let mut picker = ScriptedPicker::new(vec![0]);
        let mut effects = draw.start();
        let mut delays = Vec::new();
        loop {
            let next = effects.iter().find_map(|e| match e {
                DrawEffect::ScheduleTick { handle, delay } => Some((*handle, *delay)),
                _ => None,
            });
            let Some((handle, delay)) = next else {
                break;
            };
            delays.push(delay.as_millis());
            effects = draw.tick(handle, &mut picker);
        }
        assert_eq!(
            delays,
            vec![100, 300, 500, 700, 900, 1100, 1300, 1500, 1700, 1900]
        );
    }

    #[test]
    fn test_auto_stop_removes_winner_and_chimes() {
        let mut draw = decelerating("Alice\nBob\nCarol", true);
        draw.start();
        let mut picker = ScriptedPicker::new(vec![1]);
        let mut handle = draw.pending_timer().unwrap();
        let last = loop {
            let effects = draw.tick(handle, &mut picker);
            match scheduled(&effects) {
                Some(next) => handle = next,
                None => break effects,
            }
        };
        assert_eq!(last, vec![DrawEffect::PlayChime]);
        assert_eq!(draw.winner(), Some("Bob"));
        assert_eq!(draw.displayed(), Some("Bob"));
        assert_eq!(draw.names().pool(), vec!["Alice", "Carol"]);
    }

    #[test]
    fn test_auto_stop_without_sound_is_silent() {
        let mut draw = DrawController::new(DrawStrategy::decelerating(), Preferences {
            remove_winner_on_stop: false,
            play_sound_on_stop: false,
        })
        .with_names("Alice");
        draw.start();
        let mut picker = ScriptedPicker::new(vec![0]);
        let mut handle = draw.pending_timer().unwrap();
        loop {
            let effects = draw.tick(handle, &mut picker);
            assert!(!effects.contains(&DrawEffect::PlayChime));
            match scheduled(&effects) {
                Some(next) => handle = next,
                None => break,
            }
        }
    }

    #[test]
    fn test_remove_winner_removes_single_duplicate() {
        let mut draw = decelerating("Bob\nAlice\nBob", true);
        draw.start();
        run_to_completion(&mut draw, &mut ScriptedPicker::new(vec![2]));
        assert_eq!(draw.winner(), Some("Bob"));
        assert_eq!(draw.names().pool(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_restart_after_stop() {
        let mut draw = decelerating("Alice\nBob", false);
        draw.start();
        run_to_completion(&mut draw, &mut ScriptedPicker::new(vec![0]));
        assert!(draw.can_start());

        let effects = draw.start();
        assert!(draw.is_running());
        assert_eq!(draw.tick_count(), 0);
        assert!(matches!(
            effects[0],
            DrawEffect::ScheduleTick { delay, .. } if delay == Duration::from_millis(100)
        ));
    }

    #[test]
    fn test_ticks_after_stop_do_not_change_display() {
        let mut draw = DrawController::new(DrawStrategy::fixed_interval(), Preferences::default())
            .with_names("Alice\nBob\nCarol");
        let mut picker = RandomPicker::seeded(9);
        let mut handle = scheduled(&draw.start()).unwrap();
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(handle);
            handle = scheduled(&draw.tick(handle, &mut picker)).unwrap();
        }
        draw.stop();
        let frozen = draw.displayed().map(str::to_string);
        seen.push(handle);
        for stale in seen {
            assert!(draw.tick(stale, &mut picker).is_empty());
        }
        assert_eq!(draw.displayed().map(str::to_string), frozen);
    }

    #[test]
    fn test_empty_pool_mid_draw_keeps_display_and_still_decelerates() {
        let mut draw = decelerating("Alice", false);
        let mut picker = ScriptedPicker::new(vec![0]);
        let handle = scheduled(&draw.start()).unwrap();
        let mut handle = scheduled(&draw.tick(handle, &mut picker)).unwrap();
        draw.names_mut().set_raw("");
        loop {
            let effects = draw.tick(handle, &mut picker);
            match scheduled(&effects) {
                Some(next) => handle = next,
                None => break,
            }
        }
        assert_eq!(draw.phase(), DrawPhase::Stopped);
        assert_eq!(draw.winner(), Some("Alice"));
    }

    #[test]
    fn test_teardown_releases_timer_and_sound() {
        let mut draw = DrawController::new(DrawStrategy::fixed_interval(), Preferences::default())
            .with_names("Alice");
        let handle = scheduled(&draw.start()).unwrap();
        let effects = draw.teardown();
        assert_eq!(
            effects,
            vec![DrawEffect::CancelTick(handle), DrawEffect::StopAmbientSound]
        );
        assert_eq!(draw.phase(), DrawPhase::Idle);
        assert!(draw.teardown().is_empty());
    }

    #[test]
    fn test_timer_handles_are_unique() {
        let mut draw = DrawController::new(DrawStrategy::fixed_interval(), Preferences::default())
            .with_names("Alice");
        let mut picker = ScriptedPicker::new(vec![0]);
        let first = scheduled(&draw.start()).unwrap();
        let second = scheduled(&draw.tick(first, &mut picker)).unwrap();
        assert_ne!(first, second);
        assert!(second > first);
    }
}
