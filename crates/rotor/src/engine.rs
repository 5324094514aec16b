use crate::colors::Palette;
use crate::geometry::winning_index;
use crate::labels::{Label, LabelError, LabelList, parse_labels};
use crate::physics::{SpinPhysics, WheelState};
use crate::scene::Scene;
use crate::store::{LABELS_KEY, LabelStore};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplaceError {
    #[error("Cannot change entries while the wheel is spinning")]
    Spinning,
    #[error(transparent)]
    TooFew(#[from] LabelError),
}

/// Result of one animation tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Nothing to advance; the wheel is at rest.
    Idle,
    Spinning,
    /// The wheel came to rest on this frame. Emitted once per spin.
    Stopped(Label),
}

pub struct Engine<R: Rng = ChaCha8Rng> {
    labels: LabelList,
    wheel: WheelState,
    physics: SpinPhysics,
    rng: R,
    store: Box<dyn LabelStore>,
    frames: usize,
}

impl Engine<ChaCha8Rng> {
    /// Loads the persisted label list; a `seed` makes every spin reproducible.
    pub fn new(store: Box<dyn LabelStore>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self::with_rng(store, rng)
    }
}

impl<R: Rng> Engine<R> {
    pub fn with_rng(store: Box<dyn LabelStore>, rng: R) -> Self {
        let labels = load_labels(store.as_ref());
        Self {
            labels,
            wheel: WheelState::default(),
            physics: SpinPhysics::default(),
            rng,
            store,
            frames: 0,
        }
    }

    pub fn labels(&self) -> &LabelList {
        &self.labels
    }

    pub fn state(&self) -> &WheelState {
        &self.wheel
    }

    pub fn is_spinning(&self) -> bool {
        self.wheel.spinning
    }

    /// Whether spin and update controls should accept input.
    pub fn controls_enabled(&self) -> bool {
        !self.wheel.spinning
    }

    /// Launches a spin. Ignored (returns `false`) while a spin is in flight.
    pub fn start_spin(&mut self) -> bool {
        if self.wheel.spinning {
            return false;
        }
        let velocity = self.physics.initial_velocity(&mut self.rng);
        self.wheel.launch(velocity);
        self.frames = 0;
        log::debug!("Spin started at {:.4} rad/frame", velocity);
        true
    }

    pub fn advance_frame(&mut self) -> Frame {
        if !self.wheel.spinning {
            return Frame::Idle;
        }
        self.frames += 1;
        if self.wheel.advance(&self.physics) {
            let winner = self.winner();
            log::info!("Wheel stopped after {} frames on '{}'", self.frames, winner);
            Frame::Stopped(winner)
        } else {
            Frame::Spinning
        }
    }

    /// Label currently under the pointer, from the live rotation and label list.
    pub fn winner(&self) -> Label {
        let idx = winning_index(self.wheel.rotation, self.labels.len());
        self.labels[idx].clone()
    }

    /// Replaces the whole label list from raw text, one label per line.
    ///
    /// Too few labels reverts to the default list without persisting it; the
    /// error is meant to be shown to the user once.
    pub fn replace_labels(&mut self, text: &str) -> Result<&LabelList, ReplaceError> {
        if self.wheel.spinning {
            return Err(ReplaceError::Spinning);
        }

        match parse_labels(text) {
            Ok(labels) => {
                if let Err(e) = self.store.set(LABELS_KEY, &labels.to_text()) {
                    log::warn!("Failed to persist labels: {}", e);
                }
                log::info!("Wheel updated with {} entries", labels.len());
                self.labels = labels;
                Ok(&self.labels)
            }
            Err(e) => {
                log::warn!("Rejected label list: {}", e);
                self.labels = LabelList::default();
                Err(e.into())
            }
        }
    }

    pub fn scene(&self, palette: &Palette) -> Scene<'_> {
        Scene::build(self.wheel.rotation, &self.labels, palette)
    }
}

fn load_labels(store: &dyn LabelStore) -> LabelList {
    match store.get(LABELS_KEY) {
        Ok(Some(text)) => parse_labels(&text).unwrap_or_else(|e| {
            log::warn!("Ignoring stored labels: {}", e);
            LabelList::default()
        }),
        Ok(None) => LabelList::default(),
        Err(e) => {
            log::warn!("Failed to read stored labels: {}", e);
            LabelList::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError};
    use std::f64::consts::PI;

    struct BrokenStore;

    impl LabelStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::DataDirNotFound)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::DataDirNotFound)
        }
    }

    fn engine_with(labels: Option<&str>) -> Engine {
        let store = MemoryStore::new();
        if let Some(text) = labels {
            store.set(LABELS_KEY, text).unwrap();
        }
        Engine::new(Box::new(store), Some(42))
    }

    fn names(engine: &Engine) -> Vec<String> {
        engine.labels().iter().map(|l| l.to_string()).collect()
    }

    fn spin_to_rest(engine: &mut Engine) -> (usize, Label) {
        assert!(engine.start_spin());
        let mut frames = 0;
        loop {
            frames += 1;
            match engine.advance_frame() {
                Frame::Spinning => {}
                Frame::Stopped(winner) => return (frames, winner),
                Frame::Idle => panic!("engine idle mid-spin"),
            }
        }
    }

    #[test]
    fn test_loads_default_when_store_empty() {
        let engine = engine_with(None);
        assert_eq!(engine.labels(), &LabelList::default());
        assert!(engine.controls_enabled());
    }

    #[test]
    fn test_loads_stored_labels() {
        let engine = engine_with(Some("x\n y \n\nz"));
        assert_eq!(names(&engine), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_stored_single_label_falls_back_to_default() {
        let engine = engine_with(Some("solo"));
        assert_eq!(engine.labels(), &LabelList::default());
    }

    #[test]
    fn test_broken_store_degrades_to_memory_defaults() {
        let mut engine = Engine::new(Box::new(BrokenStore), Some(1));
        assert_eq!(engine.labels(), &LabelList::default());
        assert!(engine.replace_labels("a\nb").is_ok());
        assert_eq!(names(&engine), vec!["a", "b"]);
    }

    #[test]
    fn test_start_spin_sets_velocity() {
        let mut engine = engine_with(None);
        assert!(engine.start_spin());
        assert!(engine.is_spinning());
        assert!(!engine.controls_enabled());
        let v = engine.state().angular_velocity;
        assert!((0.9..1.25).contains(&v));
    }

    #[test]
    fn test_start_spin_while_spinning_is_noop() {
        let mut engine = engine_with(None);
        engine.start_spin();
        engine.advance_frame();
        let before = *engine.state();
        assert!(!engine.start_spin());
        assert_eq!(*engine.state(), before);
    }

    #[test]
    fn test_spin_runs_to_rest_and_reports_winner_once() {
        let mut engine = engine_with(None);
        let expected_frames = SpinPhysics::default().frames_to_stop({
            let mut probe = engine_with(None);
            probe.start_spin();
            probe.state().angular_velocity
        });

        let (frames, winner) = spin_to_rest(&mut engine);
        assert_eq!(frames, expected_frames);
        assert_eq!(winner, engine.winner());
        assert!(!engine.is_spinning());
        assert_eq!(engine.state().angular_velocity, 0.0);
        assert_eq!(engine.advance_frame(), Frame::Idle);
        assert!(engine.controls_enabled());
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let (_, a) = spin_to_rest(&mut engine_with(None));
        let (_, b) = spin_to_rest(&mut engine_with(None));
        assert_eq!(a, b);
    }

    #[test]
    fn test_rotation_accumulates_across_spins() {
        let mut engine = engine_with(None);
        spin_to_rest(&mut engine);
        let first = engine.state().rotation;
        assert!(first > 2.0 * PI);
        spin_to_rest(&mut engine);
        assert!(engine.state().rotation > first);
    }

    #[test]
    fn test_winner_is_idempotent() {
        let mut engine = engine_with(None);
        spin_to_rest(&mut engine);
        assert_eq!(engine.winner(), engine.winner());
    }

    #[test]
    fn test_winner_at_rest_with_four_labels() {
        let engine = engine_with(Some("n\ne\ns\nw"));
        assert_eq!(engine.winner().as_str(), "w");
    }

    #[test]
    fn test_winner_uses_current_labels() {
        let mut engine = engine_with(Some("a\nb\nc\nd"));
        spin_to_rest(&mut engine);
        let idx = winning_index(engine.state().rotation, 2);
        engine.replace_labels("left\nright").unwrap();
        assert_eq!(engine.winner(), engine.labels()[idx]);
    }

    #[test]
    fn test_replace_labels_commits_and_persists() {
        let store = std::rc::Rc::new(MemoryStore::new());

        struct Shared(std::rc::Rc<MemoryStore>);
        impl LabelStore for Shared {
            fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
                self.0.get(key)
            }
            fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
                self.0.set(key, value)
            }
        }

        let mut engine = Engine::new(Box::new(Shared(store.clone())), Some(3));
        let list = engine.replace_labels("Alice\nBob\n\n  Charlie  ").unwrap();
        assert_eq!(list.to_text(), "Alice\nBob\nCharlie");
        assert_eq!(
            store.get(LABELS_KEY).unwrap().as_deref(),
            Some("Alice\nBob\nCharlie")
        );
    }

    #[test]
    fn test_replace_with_one_label_reverts_to_default() {
        let mut engine = engine_with(Some("a\nb\nc"));
        let err = engine.replace_labels("OnlyOne").unwrap_err();
        assert_eq!(err, ReplaceError::TooFew(LabelError::TooFew { found: 1 }));
        assert_eq!(engine.labels(), &LabelList::default());
    }

    #[test]
    fn test_replace_rejected_while_spinning() {
        let mut engine = engine_with(Some("a\nb\nc"));
        engine.start_spin();
        assert_eq!(engine.replace_labels("x\ny"), Err(ReplaceError::Spinning));
        assert_eq!(names(&engine), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_scene_reflects_rotation() {
        let mut engine = engine_with(None);
        engine.start_spin();
        engine.advance_frame();
        let palette = Palette::default();
        let scene = engine.scene(&palette);
        assert_eq!(scene.rotation, engine.state().rotation);
        assert_eq!(scene.wedges().count(), 6);
    }
}
