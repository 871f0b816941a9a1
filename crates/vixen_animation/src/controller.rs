//! Exclusive clip playback
//!
//! [`AnimationController`] owns the model's [`AnimationMixer`] and an
//! [`ActionRegistry`] mirroring which clip the user started. At most one
//! registry entry is running at any time; only [`toggle`] and [`stop_all`]
//! change that.
//!
//! [`toggle`]: AnimationController::toggle
//! [`stop_all`]: AnimationController::stop_all

use std::sync::Arc;

use vixen_core::{ActionId, ControlPanel, PanelCommand};

use crate::binding::AnimationTarget;
use crate::clip::AnimationClip;
use crate::mixer::{ActionHandle, AnimationMixer};

pub const DEFAULT_FOLDER_TITLE: &str = "Fox";
pub const STOP_BUTTON_LABEL: &str = "Stop";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionEntry {
    pub name: String,
    pub handle: ActionHandle,
    pub running: bool,
}

/// Entries in clip order. Created once after load, never recreated.
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    entries: Vec<ActionEntry>,
}

impl ActionRegistry {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ActionId) -> Option<&ActionEntry> {
        self.entries.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionId, &ActionEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (ActionId(i), e))
    }

    /// The entry currently running, if any.
    #[must_use]
    pub fn running(&self) -> Option<ActionId> {
        self.entries.iter().position(|e| e.running).map(ActionId)
    }

    #[must_use]
    pub fn running_count(&self) -> usize {
        self.entries.iter().filter(|e| e.running).count()
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<ActionId> {
        self.entries.iter().position(|e| e.name == name).map(ActionId)
    }
}

#[derive(Debug)]
pub struct AnimationController {
    mixer: AnimationMixer,
    registry: ActionRegistry,
    folder_title: String,
    initialized: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(DEFAULT_FOLDER_TITLE)
    }
}

impl AnimationController {
    /// `folder_title` names the panel folder created by [`initialize`](Self::initialize).
    #[must_use]
    pub fn new(folder_title: impl Into<String>) -> Self {
        Self {
            mixer: AnimationMixer::new(),
            registry: ActionRegistry::default(),
            folder_title: folder_title.into(),
            initialized: false,
        }
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    #[must_use]
    pub fn mixer(&self) -> &AnimationMixer {
        &self.mixer
    }

    #[must_use]
    pub fn folder_title(&self) -> &str {
        &self.folder_title
    }

    /// Creates one stopped action per clip and registers the panel folder.
    ///
    /// The folder holds one button per clip, in clip order, followed by a
    /// "Stop" button, and starts expanded. Calling this twice is a bug; in
    /// release builds the second call is logged and ignored.
    pub fn initialize(
        &mut self,
        clips: &[Arc<AnimationClip>],
        target: &impl AnimationTarget,
        panel: &mut ControlPanel,
    ) -> &ActionRegistry {
        debug_assert!(!self.initialized, "AnimationController initialized twice");
        if self.initialized {
            log::warn!("AnimationController::initialize called twice, ignoring");
            return &self.registry;
        }

        for clip in clips {
            let handle = self.mixer.clip_action(Arc::clone(clip), target);
            self.registry.entries.push(ActionEntry {
                name: clip.name.clone(),
                handle,
                running: false,
            });
        }

        let folder = panel.add_folder(self.folder_title.clone());
        folder.open();
        for (id, entry) in self.registry.iter() {
            folder.add_button(entry.name.clone(), PanelCommand::Toggle(id));
        }
        folder.add_button(STOP_BUTTON_LABEL, PanelCommand::StopAll);

        self.initialized = true;
        log::info!("Animation controller ready with {} clip(s)", self.registry.len());

        &self.registry
    }

    /// Starts `id` exclusively, or stops it if it is already running.
    pub fn toggle(&mut self, id: ActionId) {
        let Some(entry) = self.registry.entries.get(id.index()) else {
            log::warn!("Toggle of unknown action {}", id.index());
            return;
        };

        if entry.running {
            let handle = entry.handle;
            self.mixer.stop(handle);
            self.registry.entries[id.index()].running = false;
            log::debug!("Stopped action '{}'", self.registry.entries[id.index()].name);
            return;
        }

        for (index, other) in self.registry.entries.iter_mut().enumerate() {
            if index != id.index() {
                self.mixer.stop(other.handle);
                other.running = false;
            }
        }

        let target = &mut self.registry.entries[id.index()];
        self.mixer.play(target.handle);
        target.running = true;
        log::debug!("Playing action '{}'", target.name);
    }

    /// Stops every action. Safe to call repeatedly.
    pub fn stop_all(&mut self) {
        for entry in &mut self.registry.entries {
            self.mixer.stop(entry.handle);
            entry.running = false;
        }
    }

    /// Starts the first clip, if there is one.
    pub fn autoplay_first(&mut self) {
        if !self.registry.is_empty() {
            self.toggle(ActionId(0));
        }
    }

    pub fn apply(&mut self, command: PanelCommand) {
        match command {
            PanelCommand::Toggle(id) => self.toggle(id),
            PanelCommand::StopAll => self.stop_all(),
        }
    }

    /// Advances the mixer by `dt` and writes poses into `target`.
    pub fn advance(&mut self, dt: f32, target: &mut impl AnimationTarget) {
        if !self.initialized {
            return;
        }
        self.mixer.update(dt, target);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use glam::Vec3;
    use slotmap::SlotMap;
    use vixen_core::NodeHandle;

    use super::*;
    use crate::binding::{TargetPath, TrackValue};
    use crate::clip::{Track, TrackData, TrackMeta};
    use crate::tracks::{InterpolationMode, KeyframeTrack};

    #[derive(Default)]
    struct Rig {
        nodes: SlotMap<NodeHandle, Vec3>,
        names: HashMap<String, NodeHandle>,
    }

    impl Rig {
        fn with_node(name: &str) -> Self {
            let mut rig = Self::default();
            let handle = rig.nodes.insert(Vec3::ZERO);
            rig.names.insert(name.to_string(), handle);
            rig
        }
    }

    impl AnimationTarget for Rig {
        fn find_node(&self, name: &str) -> Option<NodeHandle> {
            self.names.get(name).copied()
        }

        fn apply(&mut self, node: NodeHandle, value: TrackValue) {
            if let (Some(slot), TrackValue::Translation(v)) = (self.nodes.get_mut(node), value) {
                *slot = v;
            }
        }
    }

    fn clip(name: &str) -> Arc<AnimationClip> {
        let track = KeyframeTrack::new(
            vec![0.0, 1.0],
            vec![Vec3::ZERO, Vec3::X],
            InterpolationMode::Linear,
        );
        Arc::new(AnimationClip::new(
            name,
            vec![Track {
                meta: TrackMeta {
                    node_name: "root".into(),
                    target: TargetPath::Translation,
                },
                data: TrackData::Vector3(track),
            }],
        ))
    }

    fn setup(names: &[&str]) -> (AnimationController, ControlPanel, Rig) {
        let rig = Rig::with_node("root");
        let clips: Vec<_> = names.iter().map(|n| clip(n)).collect();
        let mut panel = ControlPanel::new();
        let mut controller = AnimationController::default();
        controller.initialize(&clips, &rig, &mut panel);
        (controller, panel, rig)
    }

    #[test]
    fn mixer_state_tracks_registry() {
        let (mut c, _, _) = setup(&["Survey", "Walk", "Run"]);

        c.toggle(ActionId(1));
        c.toggle(ActionId(2));

        for (_, entry) in c.registry().iter() {
            assert_eq!(c.mixer().is_playing(entry.handle), entry.running);
        }
        assert_eq!(c.registry().running(), Some(ActionId(2)));
    }

    #[test]
    fn stop_rewinds_the_cursor() {
        let (mut c, _, mut rig) = setup(&["Walk"]);

        c.toggle(ActionId(0));
        c.advance(0.5, &mut rig);
        let handle = c.registry().get(ActionId(0)).map(|e| e.handle);
        let time = handle.and_then(|h| c.mixer().action(h)).map(|a| a.time);
        assert!(time.is_some_and(|t| (t - 0.5).abs() < 1e-5));

        c.toggle(ActionId(0));
        let time = handle.and_then(|h| c.mixer().action(h)).map(|a| a.time);
        assert_eq!(time, Some(0.0));
    }

    #[test]
    fn unknown_id_is_ignored() {
        let (mut c, _, _) = setup(&["Walk"]);
        c.toggle(ActionId(0));
        c.toggle(ActionId(7));
        assert_eq!(c.registry().running(), Some(ActionId(0)));
    }

    #[test]
    fn advance_before_initialize_is_noop() {
        let mut rig = Rig::with_node("root");
        let mut c = AnimationController::default();
        c.advance(0.016, &mut rig);
        c.stop_all();
        assert!(!c.is_initialized());
        assert!(c.registry().is_empty());
    }
}
