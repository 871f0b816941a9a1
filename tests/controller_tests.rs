//! Animation Controller Tests
//!
//! Tests for:
//! - Registry creation: one entry per clip, clip order, all stopped
//! - Panel wiring: open "Fox" folder, one button per clip plus "Stop"
//! - toggle: exclusive start, re-click stops, switching between clips
//! - stop_all: stops everything, idempotent
//! - At most one running entry across arbitrary command sequences
//! - Zero-clip models and unknown ids

mod common;

use std::sync::Arc;

use common::{CLIP_NAMES, fox_prefab};
use vixen::animation::{AnimationClip, AnimationController, DEFAULT_FOLDER_TITLE, STOP_BUTTON_LABEL};
use vixen::core::{ActionId, ControlPanel, PanelCommand};
use vixen::scene::Scene;

struct Fixture {
    controller: AnimationController,
    panel: ControlPanel,
    scene: Scene,
}

fn setup_with(clips: &[Arc<AnimationClip>]) -> Fixture {
    let prefab = fox_prefab();
    let mut scene = Scene::new();
    let root = prefab.instantiate(&mut scene);
    scene.animation_root = Some(root);

    let mut panel = ControlPanel::new();
    let mut controller = AnimationController::default();
    controller.initialize(clips, &scene, &mut panel);

    Fixture {
        controller,
        panel,
        scene,
    }
}

fn setup() -> Fixture {
    setup_with(&fox_prefab().animations)
}

fn running(c: &AnimationController) -> Vec<bool> {
    c.registry().iter().map(|(_, e)| e.running).collect()
}

fn assert_mixer_agrees(c: &AnimationController) {
    for (id, entry) in c.registry().iter() {
        assert_eq!(
            c.mixer().is_playing(entry.handle),
            entry.running,
            "mixer and registry disagree on {}",
            id.index()
        );
    }
}

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn registry_follows_clip_order_and_starts_stopped() {
    let f = setup();
    let reg = f.controller.registry();

    assert_eq!(reg.len(), 3);
    let names: Vec<&str> = reg.iter().map(|(_, e)| e.name.as_str()).collect();
    assert_eq!(names, CLIP_NAMES);
    assert_eq!(reg.running(), None);
    assert_eq!(reg.find("Walk"), Some(ActionId(1)));
    assert_eq!(f.controller.mixer().len(), 3);
}

#[test]
fn panel_folder_is_open_with_clip_buttons_then_stop() {
    let f = setup();

    let folder = f.panel.folder(DEFAULT_FOLDER_TITLE).expect("Fox folder");
    assert!(folder.open);

    let labels: Vec<&str> = folder.buttons().iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, ["Survey", "Walk", "Run", STOP_BUTTON_LABEL]);

    assert_eq!(f.panel.find_command("Fox", "Run"), Some(PanelCommand::Toggle(ActionId(2))));
    assert_eq!(f.panel.find_command("Fox", "Stop"), Some(PanelCommand::StopAll));
}

#[test]
fn zero_clips_only_get_a_stop_button() {
    let mut f = setup_with(&[]);

    assert!(f.controller.registry().is_empty());
    let folder = f.panel.folder("Fox").unwrap();
    assert_eq!(folder.buttons().len(), 1);
    assert_eq!(folder.buttons()[0].label, "Stop");

    f.controller.apply(PanelCommand::StopAll);
    f.controller.autoplay_first();
    assert_eq!(f.controller.registry().running(), None);
}

// ============================================================================
// toggle
// ============================================================================

#[test]
fn toggle_starts_only_the_clicked_clip() {
    let mut f = setup();

    f.controller.toggle(ActionId(1));

    assert_eq!(running(&f.controller), [false, true, false]);
    assert_mixer_agrees(&f.controller);
}

#[test]
fn second_click_stops_the_clip() {
    let mut f = setup();

    f.controller.toggle(ActionId(1));
    f.controller.toggle(ActionId(1));

    assert_eq!(running(&f.controller), [false, false, false]);
    assert_mixer_agrees(&f.controller);
}

#[test]
fn switching_clips_stops_the_previous_one() {
    let mut f = setup();

    f.controller.toggle(ActionId(0));
    f.controller.toggle(ActionId(2));

    assert_eq!(running(&f.controller), [false, false, true]);
    assert_mixer_agrees(&f.controller);
}

#[test]
fn unknown_id_changes_nothing() {
    let mut f = setup();
    f.controller.toggle(ActionId(0));

    f.controller.toggle(ActionId(3));
    f.controller.apply(PanelCommand::Toggle(ActionId(99)));

    assert_eq!(running(&f.controller), [true, false, false]);
}

#[test]
fn autoplay_starts_the_first_clip() {
    let mut f = setup();
    f.controller.autoplay_first();
    assert_eq!(f.controller.registry().running(), Some(ActionId(0)));
}

// ============================================================================
// stop_all
// ============================================================================

#[test]
fn stop_all_stops_everything_and_is_idempotent() {
    let mut f = setup();
    f.controller.toggle(ActionId(2));

    f.controller.stop_all();
    assert_eq!(running(&f.controller), [false, false, false]);

    f.controller.stop_all();
    assert_eq!(running(&f.controller), [false, false, false]);
    assert_mixer_agrees(&f.controller);
}

#[test]
fn stopped_clip_restarts_from_the_beginning() {
    let mut f = setup();

    f.controller.toggle(ActionId(1));
    f.controller.advance(0.4, &mut f.scene);
    f.controller.stop_all();
    f.controller.toggle(ActionId(1));

    let handle = f.controller.registry().get(ActionId(1)).unwrap().handle;
    assert_eq!(f.controller.mixer().action(handle).unwrap().time, 0.0);
}

// ============================================================================
// Exclusivity
// ============================================================================

#[test]
fn at_most_one_entry_runs_for_any_command_sequence() {
    let mut f = setup();

    // Deterministic pseudo-random walk over the panel's commands.
    let commands: Vec<PanelCommand> = f.panel.folder("Fox").unwrap().buttons().iter().map(|b| b.command).collect();
    let mut state: u32 = 0x2545_f491;
    for _ in 0..500 {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let command = commands[state as usize % commands.len()];

        let before = f.controller.registry().running();
        f.controller.apply(command);
        let after = f.controller.registry().running();

        assert!(f.controller.registry().running_count() <= 1);
        assert_mixer_agrees(&f.controller);

        match command {
            PanelCommand::StopAll => assert_eq!(after, None),
            PanelCommand::Toggle(id) if before == Some(id) => assert_eq!(after, None),
            PanelCommand::Toggle(id) => assert_eq!(after, Some(id)),
        }
    }
}

#[test]
fn playing_clip_drives_the_scene() {
    let mut f = setup();
    let hip = f.scene.find_in_subtree(f.scene.animation_root.unwrap(), "Hip").unwrap();

    f.controller.toggle(ActionId(1));
    f.controller.advance(0.5, &mut f.scene);

    let pos = f.scene.get_node(hip).unwrap().transform.position;
    assert!(common::approx_vec3(pos, common::CLIP_TARGETS[1] * 0.5));
}
