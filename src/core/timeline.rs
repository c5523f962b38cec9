// Tween/timeline engine for element styles.
//
// Targets are opaque ids; the platform layer maps them to elements and writes
// the styles reported dirty after each `tick`. All animation time runs on one
// clock which can be paused and time-scaled as a whole.

use super::constants::*;
use super::ease::{lerp, Ease};
use super::input::sanitize_dt;
use super::trigger::{ToggleAction, TriggerBounds};
use fnv::{FnvHashMap, FnvHashSet};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prop {
    /// Vertical translation in px.
    Y,
    Opacity,
    /// Degrees.
    RotationX,
    /// Degrees.
    RotationY,
    Scale,
}

pub type PropSet = SmallVec<[(Prop, f32); 4]>;

pub fn props(values: &[(Prop, f32)]) -> PropSet {
    values.iter().copied().collect()
}

/// The animatable subset of an element's inline style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementStyle {
    pub y: f32,
    pub opacity: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub scale: f32,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            y: 0.0,
            opacity: 1.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            scale: 1.0,
        }
    }
}

impl ElementStyle {
    pub fn get(&self, prop: Prop) -> f32 {
        match prop {
            Prop::Y => self.y,
            Prop::Opacity => self.opacity,
            Prop::RotationX => self.rotation_x,
            Prop::RotationY => self.rotation_y,
            Prop::Scale => self.scale,
        }
    }

    pub fn set(&mut self, prop: Prop, value: f32) {
        if !value.is_finite() {
            return;
        }
        match prop {
            Prop::Y => self.y = value,
            Prop::Opacity => self.opacity = value,
            Prop::RotationX => self.rotation_x = value,
            Prop::RotationY => self.rotation_y = value,
            Prop::Scale => self.scale = value,
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translate3d(0px, {:.3}px, 0px) rotateX({:.3}deg) rotateY({:.3}deg) scale({:.4})",
            self.y, self.rotation_x, self.rotation_y, self.scale
        )
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.4}", self.opacity.clamp(0.0, 1.0))
    }
}

// ---------------- Timelines ----------------

/// Where a step starts relative to what is already on the timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// At the current end of the timeline.
    AfterPrevious,
    /// Offset from the current end; negative values overlap.
    Relative(f32),
    /// Absolute time from the timeline start.
    At(f32),
}

#[derive(Clone, Debug)]
pub struct TimelineStep {
    pub target: TargetId,
    pub to: PropSet,
    pub duration: f32,
    pub ease: Ease,
    pub position: Position,
}

#[derive(Clone, Debug, Default)]
pub struct Timeline {
    pub delay: f32,
    steps: SmallVec<[TimelineStep; 4]>,
}

impl Timeline {
    pub fn new(delay: f32) -> Self {
        Self {
            delay: sanitize_duration(delay),
            steps: SmallVec::new(),
        }
    }

    pub fn to(
        mut self,
        target: TargetId,
        to: PropSet,
        duration: f32,
        ease: Ease,
        position: Position,
    ) -> Self {
        self.steps.push(TimelineStep {
            target,
            to,
            duration: sanitize_duration(duration),
            ease,
            position,
        });
        self
    }

    pub fn steps(&self) -> &[TimelineStep] {
        &self.steps
    }

    /// Absolute start time of every step (timeline delay included).
    pub fn resolve(&self) -> Vec<f32> {
        let mut end = 0.0_f32;
        let mut starts = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            let start = match step.position {
                Position::AfterPrevious => end,
                Position::Relative(offset) => (end + offset).max(0.0),
                Position::At(t) => t.max(0.0),
            };
            end = end.max(start + step.duration);
            starts.push(self.delay + start);
        }
        starts
    }

    /// Time from the timeline start until its last step finishes.
    pub fn total_duration(&self) -> f32 {
        self.resolve()
            .iter()
            .zip(self.steps.iter())
            .map(|(s, step)| s + step.duration)
            .fold(self.delay, f32::max)
    }
}

/// Hero entrance: badge, headline, subtitle, then the call-to-action group,
/// each sliding up and fading in with overlapping starts.
pub fn entrance_timeline(
    badge: Option<TargetId>,
    headline: Option<TargetId>,
    subtitle: Option<TargetId>,
    cta: Option<TargetId>,
) -> Timeline {
    let shown = || props(&[(Prop::Y, 0.0), (Prop::Opacity, 1.0)]);
    let plan = [
        (badge, 1.0, Ease::Power3Out, Position::AfterPrevious),
        (headline, 1.2, Ease::Power3Out, Position::Relative(-0.6)),
        (subtitle, 1.0, Ease::Power2Out, Position::Relative(-0.8)),
        (cta, 1.0, Ease::BackOut(BACK_OUT_OVERSHOOT), Position::Relative(-0.6)),
    ];
    plan.into_iter()
        .fold(Timeline::new(ENTRANCE_DELAY), |tl, (target, dur, ease, pos)| match target {
            Some(t) => tl.to(t, shown(), dur, ease, pos),
            None => tl,
        })
}

// ---------------- Animator ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrubId(usize);

#[derive(Clone, Debug)]
struct ActiveTween {
    target: TargetId,
    from: PropSet,
    to: PropSet,
    duration: f32,
    ease: Ease,
    start_time: f32,
    started: bool,
}

/// Two-state (hidden/revealed) tween that replays in either direction from
/// wherever it currently is.
#[derive(Clone, Debug)]
struct RevealTween {
    target: TargetId,
    hidden: PropSet,
    shown: PropSet,
    duration: f32,
    delay: f32,
    ease: Ease,
    progress: f32,
    direction: f32,
    wait: f32,
}

#[derive(Clone, Debug)]
struct ScrubBinding {
    target: TargetId,
    prop: Prop,
    from: f32,
    to: f32,
    bounds: TriggerBounds,
    lag: f32,
    progress: f32,
    goal: f32,
}

pub struct Animator {
    clock: f32,
    time_scale: f32,
    paused: bool,
    styles: FnvHashMap<TargetId, ElementStyle>,
    tweens: Vec<ActiveTween>,
    reveals: Vec<RevealTween>,
    scrubs: Vec<ScrubBinding>,
    dirty: FnvHashSet<TargetId>,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Animator {
    pub fn new(time_scale: f32) -> Self {
        Self {
            clock: 0.0,
            time_scale: sanitize_scale(time_scale),
            paused: false,
            styles: FnvHashMap::default(),
            tweens: Vec::new(),
            reveals: Vec::new(),
            scrubs: Vec::new(),
            dirty: FnvHashSet::default(),
        }
    }

    pub fn time(&self) -> f32 {
        self.clock
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = sanitize_scale(scale);
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn style(&self, target: TargetId) -> ElementStyle {
        self.styles.get(&target).copied().unwrap_or_default()
    }

    /// No one-shot tween is pending and every reveal/scrub has settled.
    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty()
            && self.reveals.iter().all(|r| r.direction == 0.0)
            && self.scrubs.iter().all(|s| s.progress == s.goal)
    }

    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }

    /// Apply values immediately, killing any tween animating them.
    pub fn set(&mut self, target: TargetId, values: &[(Prop, f32)]) {
        self.kill_props(target, values.iter().map(|(p, _)| *p));
        let style = self.styles.entry(target).or_default();
        for (prop, value) in values {
            style.set(*prop, *value);
        }
        self.dirty.insert(target);
    }

    /// Tween from the values current when the tween starts to `to`. Earlier
    /// tweens on the same target lose the properties this one animates.
    /// Reveals and scrubs are owned by their triggers and are left alone.
    pub fn to(&mut self, target: TargetId, to: PropSet, duration: f32, delay: f32, ease: Ease) {
        if to.is_empty() {
            return;
        }
        self.kill_props(target, to.iter().map(|(p, _)| *p));
        self.tweens.push(ActiveTween {
            target,
            from: PropSet::new(),
            to,
            duration: sanitize_duration(duration),
            ease,
            start_time: self.clock + sanitize_duration(delay),
            started: false,
        });
    }

    /// Jump to `from` now and tween back to the current values.
    pub fn from(&mut self, target: TargetId, from: &[(Prop, f32)], duration: f32, delay: f32, ease: Ease) {
        let current = self.style(target);
        let to: PropSet = from.iter().map(|(p, _)| (*p, current.get(*p))).collect();
        self.set(target, from);
        self.to(target, to, duration, delay, ease);
    }

    pub fn play_timeline(&mut self, timeline: &Timeline) {
        let starts = timeline.resolve();
        for (step, start) in timeline.steps().iter().zip(starts) {
            self.to(step.target, step.to.clone(), step.duration, start, step.ease);
        }
    }

    /// Register a reveal. The target is put into the hidden state right away.
    pub fn add_reveal(
        &mut self,
        target: TargetId,
        hidden: &[(Prop, f32)],
        shown: &[(Prop, f32)],
        duration: f32,
        delay: f32,
        ease: Ease,
    ) -> RevealId {
        self.set(target, hidden);
        self.reveals.push(RevealTween {
            target,
            hidden: props(hidden),
            shown: props(shown),
            duration: sanitize_duration(duration),
            delay: sanitize_duration(delay),
            ease,
            progress: 0.0,
            direction: 0.0,
            wait: 0.0,
        });
        RevealId(self.reveals.len() - 1)
    }

    pub fn apply_toggle(&mut self, id: RevealId, action: ToggleAction) {
        let Some(r) = self.reveals.get_mut(id.0) else {
            return;
        };
        match action {
            ToggleAction::Play => {
                if r.progress <= 0.0 && r.direction <= 0.0 {
                    r.wait = r.delay;
                }
                r.direction = 1.0;
            }
            ToggleAction::Reverse => {
                r.wait = 0.0;
                r.direction = -1.0;
            }
            ToggleAction::None => {}
        }
    }

    /// Whether the reveal is heading toward (or resting at) its shown state.
    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.reveals
            .get(id.0)
            .map(|r| r.direction > 0.0 || (r.direction == 0.0 && r.progress >= 1.0))
            .unwrap_or(false)
    }

    pub fn add_scrub(
        &mut self,
        target: TargetId,
        prop: Prop,
        from: f32,
        to: f32,
        bounds: TriggerBounds,
        lag: f32,
    ) -> ScrubId {
        self.scrubs.push(ScrubBinding {
            target,
            prop,
            from,
            to,
            bounds,
            lag: sanitize_duration(lag),
            progress: 0.0,
            goal: 0.0,
        });
        ScrubId(self.scrubs.len() - 1)
    }

    pub fn set_scrub_bounds(&mut self, id: ScrubId, bounds: TriggerBounds) {
        if let Some(s) = self.scrubs.get_mut(id.0) {
            s.bounds = bounds;
        }
    }

    /// Feed the current scroll offset to every scrub binding.
    pub fn scrub_to(&mut self, scroll: f32) {
        if !scroll.is_finite() {
            return;
        }
        for s in &mut self.scrubs {
            s.goal = s.bounds.progress(scroll);
        }
    }

    /// Advance the animation clock by `dt` real seconds (scaled by the global
    /// time scale) and write every animated value.
    pub fn tick(&mut self, dt: f32) {
        if self.paused {
            return;
        }
        let dt = sanitize_dt(dt) * self.time_scale;
        self.clock += dt;
        self.step_tweens();
        self.step_reveals(dt);
        self.step_scrubs(dt);
    }

    /// Targets whose style changed since the last drain, with their style.
    pub fn drain_dirty(&mut self) -> Vec<(TargetId, ElementStyle)> {
        let mut out: Vec<_> = self
            .dirty
            .drain()
            .map(|t| (t, self.styles.get(&t).copied().unwrap_or_default()))
            .collect();
        out.sort_by_key(|(t, _)| *t);
        out
    }

    fn step_tweens(&mut self) {
        let clock = self.clock;
        let styles = &mut self.styles;
        let dirty = &mut self.dirty;
        self.tweens.retain_mut(|tw| {
            let local = clock - tw.start_time;
            if local < 0.0 {
                return true;
            }
            let style = styles.entry(tw.target).or_default();
            if !tw.started {
                tw.from = tw.to.iter().map(|(p, _)| (*p, style.get(*p))).collect();
                tw.started = true;
            }
            let t = if tw.duration > 0.0 {
                (local / tw.duration).min(1.0)
            } else {
                1.0
            };
            let k = if t >= 1.0 { 1.0 } else { tw.ease.apply(t) };
            for ((prop, from), (_, to)) in tw.from.iter().zip(tw.to.iter()) {
                style.set(*prop, lerp(*from, *to, k));
            }
            dirty.insert(tw.target);
            t < 1.0
        });
    }

    fn step_reveals(&mut self, dt: f32) {
        for r in &mut self.reveals {
            if r.direction == 0.0 {
                continue;
            }
            let mut dt = dt;
            if r.wait > 0.0 {
                let used = r.wait.min(dt);
                r.wait -= used;
                dt -= used;
                if r.wait > 0.0 {
                    continue;
                }
            }
            let rate = if r.duration > 0.0 { dt / r.duration } else { 1.0 };
            r.progress = (r.progress + rate * r.direction).clamp(0.0, 1.0);
            let k = match r.progress {
                p if p >= 1.0 => 1.0,
                p if p <= 0.0 => 0.0,
                p => r.ease.apply(p),
            };
            let style = self.styles.entry(r.target).or_default();
            for ((prop, hidden), (_, shown)) in r.hidden.iter().zip(r.shown.iter()) {
                style.set(*prop, lerp(*hidden, *shown, k));
            }
            self.dirty.insert(r.target);
            if (r.direction > 0.0 && r.progress >= 1.0) || (r.direction < 0.0 && r.progress <= 0.0) {
                r.direction = 0.0;
            }
        }
    }

    fn step_scrubs(&mut self, dt: f32) {
        for s in &mut self.scrubs {
            if s.progress == s.goal {
                continue;
            }
            if s.lag <= 0.0 {
                s.progress = s.goal;
            } else {
                let alpha = 1.0 - (-dt / s.lag).exp();
                s.progress += (s.goal - s.progress) * alpha;
                if (s.goal - s.progress).abs() < 1e-4 {
                    s.progress = s.goal;
                }
            }
            let style = self.styles.entry(s.target).or_default();
            style.set(s.prop, lerp(s.from, s.to, s.progress));
            self.dirty.insert(s.target);
        }
    }

    fn kill_props(&mut self, target: TargetId, killed: impl Iterator<Item = Prop>) {
        let killed: SmallVec<[Prop; 5]> = killed.collect();
        if killed.is_empty() {
            return;
        }
        self.tweens.retain_mut(|tw| {
            if tw.target != target {
                return true;
            }
            if tw.started {
                let keep: SmallVec<[bool; 4]> =
                    tw.to.iter().map(|(p, _)| !killed.contains(p)).collect();
                let mut i = 0;
                tw.from.retain(|_| {
                    let k = keep[i];
                    i += 1;
                    k
                });
            }
            tw.to.retain(|(p, _)| !killed.contains(p));
            !tw.to.is_empty()
        });
    }
}

#[inline]
fn sanitize_duration(d: f32) -> f32 {
    if d.is_finite() {
        d.max(0.0)
    } else {
        0.0
    }
}

#[inline]
fn sanitize_scale(s: f32) -> f32 {
    if s.is_finite() && s > 0.0 {
        s
    } else {
        1.0
    }
}
