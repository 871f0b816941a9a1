use std::sync::Arc;

use slotmap::{SlotMap, new_key_type};

use crate::action::AnimationAction;
use crate::binding::{AnimationTarget, bind_clip};
use crate::clip::AnimationClip;

new_key_type! {
    /// Handle to an action owned by an [`AnimationMixer`].
    pub struct ActionHandle;
}

/// Playback driver for the actions of one animated object.
///
/// The mixer owns the playback cursors. It has no notion of exclusivity;
/// that rule lives in [`AnimationController`](crate::AnimationController).
#[derive(Debug, Default)]
pub struct AnimationMixer {
    actions: SlotMap<ActionHandle, AnimationAction>,
}

impl AnimationMixer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stopped action for `clip`, bound to `target`.
    pub fn clip_action(&mut self, clip: Arc<AnimationClip>, target: &impl AnimationTarget) -> ActionHandle {
        let bindings = bind_clip(&clip, target);
        self.actions.insert(AnimationAction::new(clip).with_bindings(bindings))
    }

    #[must_use]
    pub fn action(&self, handle: ActionHandle) -> Option<&AnimationAction> {
        self.actions.get(handle)
    }

    pub fn action_mut(&mut self, handle: ActionHandle) -> Option<&mut AnimationAction> {
        self.actions.get_mut(handle)
    }

    pub fn play(&mut self, handle: ActionHandle) {
        if let Some(action) = self.actions.get_mut(handle) {
            action.play();
        }
    }

    pub fn stop(&mut self, handle: ActionHandle) {
        if let Some(action) = self.actions.get_mut(handle) {
            action.stop();
        }
    }

    #[must_use]
    pub fn is_playing(&self, handle: ActionHandle) -> bool {
        self.actions.get(handle).is_some_and(AnimationAction::is_enabled)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Advances every playing action by `dt` and writes the sampled poses.
    pub fn update(&mut self, dt: f32, target: &mut impl AnimationTarget) {
        for action in self.actions.values_mut() {
            if !action.is_enabled() {
                continue;
            }

            action.update(dt);

            if action.weight <= 0.0 {
                continue;
            }

            for i in 0..action.bindings.len() {
                let binding = action.bindings[i];
                if let Some(value) = action.sample(&binding) {
                    target.apply(binding.node, value);
                }
            }
        }
    }
}
