use vixen_animation::AnimationController;
use vixen_assets::{GltfLoader, LoadHandle, Prefab, SharedPrefab};
use vixen_core::{Clock, ControlPanel, Input, NodeHandle, PanelCommand};
use vixen_render::RenderBackend;
use vixen_scene::Scene;

use crate::config::ViewerConfig;
use crate::controls::OrbitControls;
use crate::stage::{StageNodes, build_stage};
use crate::viewport::{ViewportState, handle_resize, handle_surface_resize};

/// Everything the frame loop touches, owned in one place.
///
/// Load completion, panel clicks, resizes and ticks all go through this
/// context on the loop thread, one at a time.
pub struct ViewerContext<R: RenderBackend> {
    pub config: ViewerConfig,
    pub scene: Scene,
    pub renderer: R,
    pub controller: AnimationController,
    pub panel: ControlPanel,
    pub controls: OrbitControls,
    pub viewport: ViewportState,
    pub input: Input,
    pub stage: StageNodes,

    pub(crate) clock: Clock,
    pending_load: Option<LoadHandle<SharedPrefab>>,
    model_root: Option<NodeHandle>,
}

impl<R: RenderBackend> ViewerContext<R> {
    /// Builds the stage and sizes it to the renderer's current target.
    pub fn new(config: ViewerConfig, renderer: R) -> Self {
        let size = renderer.size();
        let (surface_width, surface_height) = size.surface_size();
        let viewport = ViewportState::from_physical(surface_width, surface_height, size.scale_factor);

        let mut scene = Scene::new();
        let stage = build_stage(&mut scene, &config, viewport.aspect());

        let mut controls = OrbitControls::from_position(config.camera_position(), config.orbit_target());
        controls.enable_damping = config.enable_damping;
        controls.damping_factor = config.damping_factor;

        let mut input = Input::new();
        input.inject_resize(size.width, size.height);

        Self {
            controller: AnimationController::new(config.folder_title.clone()),
            config,
            scene,
            renderer,
            panel: ControlPanel::new(),
            controls,
            viewport,
            input,
            stage,
            clock: Clock::new(),
            pending_load: None,
            model_root: None,
        }
    }

    /// Starts loading the configured model in the background.
    pub fn start_loading(&mut self) {
        let loader = GltfLoader::new(self.config.loader_settings());
        let handle = loader.load(self.config.resolved_model_path());
        self.set_pending_load(handle);
    }

    pub fn set_pending_load(&mut self, handle: LoadHandle<SharedPrefab>) {
        self.pending_load = Some(handle);
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    /// Ticks run so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count()
    }

    #[must_use]
    pub fn model_root(&self) -> Option<NodeHandle> {
        self.model_root
    }

    /// Delivers a finished load, if there is one. Returns whether it did.
    pub fn poll_load(&mut self) -> bool {
        let Some(prefab) = self.pending_load.as_mut().and_then(LoadHandle::poll) else {
            return false;
        };
        self.pending_load = None;
        self.attach_model(&prefab);
        true
    }

    /// Instantiates the model and wires its clips to the controller and panel.
    pub fn attach_model(&mut self, prefab: &Prefab) {
        if self.model_root.is_some() {
            log::warn!("Model already attached, ignoring a second one");
            return;
        }

        let root = prefab.instantiate(&mut self.scene);
        if let Some(node) = self.scene.get_node_mut(root) {
            node.transform.scale = glam::Vec3::splat(self.config.model_scale);
        }

        let first_child = self.scene.get_node(root).and_then(|n| n.children().first().copied());
        if let Some(mesh) = first_child.and_then(|c| self.scene.meshes.get_mut(c)) {
            mesh.cast_shadows = true;
        }

        self.scene.animation_root = Some(root);
        self.model_root = Some(root);

        self.controller.initialize(&prefab.animations, &self.scene, &mut self.panel);
        if self.config.autoplay {
            self.controller.autoplay_first();
        }
    }

    pub fn apply_panel_commands(&mut self, commands: impl IntoIterator<Item = PanelCommand>) {
        for command in commands {
            self.controller.apply(command);
        }
    }

    /// Window resize or scale-factor change, in logical pixels.
    pub fn resize(&mut self, width: u32, height: u32, device_pixel_ratio: f32) {
        let camera = self.scene.active_camera.and_then(|h| self.scene.cameras.get_mut(h));
        handle_resize(&mut self.viewport, camera, &mut self.renderer, width, height, device_pixel_ratio);
        self.input.inject_resize(width, height);
    }

    /// Window resize or scale-factor change, in device pixels as the window
    /// reports them.
    pub fn resize_surface(&mut self, physical_width: u32, physical_height: u32, scale_factor: f32) {
        let camera = self.scene.active_camera.and_then(|h| self.scene.cameras.get_mut(h));
        handle_surface_resize(
            &mut self.viewport,
            camera,
            &mut self.renderer,
            physical_width,
            physical_height,
            scale_factor,
        );
        self.input.inject_resize(self.viewport.width(), self.viewport.height());
    }
}
