use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use log::{debug, info, warn};
use nalgebra_glm as glm;

use super::input::InputEvent;
use super::manifest::{Manifest, PageSpec};
use super::page::PageState;
use crate::animation::{PageAnimator, SmoothDamp};
use crate::flow::PageFlowController;
use crate::model::{PageMesh, PageSkeleton, SkinnedVertex, skin_mesh};
use crate::settings::{AnimationSettings, PageGeometry, Settings};
use crate::texture::TextureProvider;

const INTRO_DELAY: Duration = Duration::from_millis(1000);
const INTRO_TILT_DEG: f32 = -60.0;
const INTRO_SMOOTH_TIME: f32 = 0.5;

/// Told when a page starts turning. Sound and particle effects hang off this.
pub trait FlipListener {
    fn on_page_flip_start(&mut self, page: usize);
}

#[derive(Debug, Clone)]
pub struct Page {
    pub spec: PageSpec,
    pub state: PageState,
    pub skeleton: PageSkeleton,
    animator: PageAnimator,
}

/// Every page of the book plus the flow state driving them.
pub struct Book {
    pages: Vec<Page>,
    flow: PageFlowController,
    mesh: PageMesh,
    geometry: PageGeometry,
    animation: AnimationSettings,
    auto_advance: bool,
    tilt: SmoothDamp,
    started_at: Option<Duration>,
    listeners: Vec<Box<dyn FlipListener>>,
}

impl Book {
    pub fn new(manifest: &Manifest, settings: &Settings) -> Self {
        let flow = PageFlowController::new(manifest.page_count(), &settings.flow);
        let book_closed = flow.book_closed();

        let pages = manifest
            .pages
            .iter()
            .enumerate()
            .map(|(number, spec)| {
                let state = PageState::new(number, flow.is_opened(number), book_closed);
                let mut skeleton = PageSkeleton::new(&settings.geometry);
                let mut animator = PageAnimator::new(skeleton.bone_count(), &settings.animation);
                animator.snap(&mut skeleton, &state, Duration::ZERO);
                Page {
                    spec: spec.clone(),
                    state,
                    skeleton,
                    animator,
                }
            })
            .collect();

        let mut book = Self {
            pages,
            flow,
            mesh: PageMesh::new(&settings.geometry),
            geometry: settings.geometry.clone(),
            animation: settings.animation.clone(),
            auto_advance: settings.flow.auto_advance,
            tilt: SmoothDamp::new(0.0),
            started_at: None,
            listeners: Vec::new(),
        };
        book.update_transforms();
        info!("book ready: {} pages", book.pages.len());
        book
    }

    /// Start the clock-driven parts: intro tilt and, if configured, auto-advance.
    pub fn start(&mut self, now: Duration) {
        self.started_at = Some(now);
        if self.auto_advance {
            self.flow.set_auto_advance(true, now);
        }
    }

    pub fn add_listener(&mut self, listener: Box<dyn FlipListener>) {
        self.listeners.push(listener);
    }

    pub fn handle_input(&mut self, event: InputEvent, now: Duration) {
        debug!("input {event:?}");
        match event {
            InputEvent::NextPage => {
                self.flow.next(now);
            }
            InputEvent::PrevPage => {
                self.flow.prev(now);
            }
            InputEvent::PageIndex(index) => {
                self.flow.go_to(index, now);
            }
            InputEvent::PointerEnter(n) => {
                if let Some(page) = self.pages.get_mut(n) {
                    page.state.hovered = true;
                }
            }
            InputEvent::PointerLeave(n) => {
                if let Some(page) = self.pages.get_mut(n) {
                    page.state.hovered = false;
                }
            }
            InputEvent::ClickPage(n) => {
                let Some(page) = self.pages.get_mut(n) else {
                    return;
                };
                page.state.hovered = false;
                let delayed = self.flow.delayed_page() as i64;
                let target = if page.state.opened { delayed - 1 } else { delayed + 1 };
                self.flow.go_to(target, now);
            }
            InputEvent::ToggleAutoAdvance => {
                let enabled = !self.flow.auto_advance().is_enabled();
                self.auto_advance = enabled;
                self.flow.set_auto_advance(enabled, now);
            }
        }
    }

    /// One frame: `elapsed` is clock time since start, `delta` the frame time in seconds.
    pub fn update(&mut self, elapsed: Duration, delta: f32) {
        self.flow.tick(elapsed);

        let book_closed = self.flow.book_closed();
        let peak = self.animation.highlight_intensity;
        let Self {
            pages,
            flow,
            listeners,
            ..
        } = &mut *self;

        for page in pages.iter_mut() {
            let number = page.state.number;
            if page.state.apply(flow.is_opened(number), book_closed, elapsed) {
                info!("page {number} starts turning (opened = {})", page.state.opened);
                for listener in listeners.iter_mut() {
                    listener.on_page_flip_start(number);
                }
            }
            page.state.update_highlight(peak);
            page.animator.update(&mut page.skeleton, &page.state, elapsed, delta);
        }

        let tilt_target = match self.started_at {
            Some(start) if elapsed >= start + INTRO_DELAY => INTRO_TILT_DEG.to_radians(),
            _ => 0.0,
        };
        self.tilt.damp(tilt_target, INTRO_SMOOTH_TIME, delta.max(0.0));

        self.update_transforms();
    }

    fn update_transforms(&mut self) {
        let book = self.book_transform();
        let depth = self.geometry.depth;
        let delayed = self.flow.delayed_page() as f32;
        for page in &mut self.pages {
            let z = -(page.state.number as f32) * depth + delayed * depth;
            let root = book * glm::translation(&glm::vec3(0.0, 0.0, z));
            page.skeleton.update_world(&root);
        }
    }

    /// Whole-book orientation: spine facing the viewer, tilted by the intro.
    pub fn book_transform(&self) -> glm::Mat4 {
        glm::rotation(self.tilt.value, &glm::vec3(1.0, 0.0, 0.0))
            * glm::rotation(-FRAC_PI_2, &glm::vec3(0.0, 1.0, 0.0))
    }

    /// Load every image the manifest names, skipping past failures.
    /// Returns how many were loaded.
    pub fn preload_textures(&self, provider: &mut dyn TextureProvider) -> usize {
        let ids = Manifest {
            pages: self.pages.iter().map(|p| p.spec.clone()).collect(),
        }
        .texture_ids();
        let mut loaded = 0;
        for id in &ids {
            match provider.load(id) {
                Ok(_) => loaded += 1,
                Err(e) => warn!("skipping texture '{id}': {e}"),
            }
        }
        if loaded < ids.len() {
            warn!("preloaded {loaded} of {} textures", ids.len());
        }
        loaded
    }

    pub fn skinned_page(&self, number: usize) -> Option<Vec<SkinnedVertex>> {
        self.pages.get(number).map(|p| skin_mesh(&self.mesh, &p.skeleton))
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, number: usize) -> Option<&Page> {
        self.pages.get(number)
    }

    pub fn flow(&self) -> &PageFlowController {
        &self.flow
    }

    pub fn mesh(&self) -> &PageMesh {
        &self.mesh
    }

    pub fn tilt(&self) -> f32 {
        self.tilt.value
    }
}
