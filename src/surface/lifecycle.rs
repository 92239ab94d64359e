use tracing::debug;

use crate::deck::model::{Slide, Step, SurfaceCtx};
use crate::foundation::core::{Direction, FrameStamp, Size, SurfaceId, SurfaceInfo};
use crate::foundation::error::{LecternError, LecternResult};
use crate::host::platform::Platform;
use crate::surface::state::StateBag;

struct ActiveSurface {
    id: SurfaceId,
    info: SurfaceInfo,
    slide: usize,
    state: StateBag,
    frame: FrameStamp,
}

/// Owner of the per-slide render surface.
///
/// On every slide entry the previous surface is destroyed before the next one
/// is created, so at most one draw loop is ever alive and callbacks from a
/// stale slide can never mutate current UI. Surface ids are monotonic; events
/// carrying an older id are recognized as stale and dropped by the session.
#[derive(Default)]
pub struct SurfaceLifecycle {
    active: Option<ActiveSurface>,
    next_id: u64,
}

impl SurfaceLifecycle {
    /// A lifecycle with no active surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the active surface, if one exists.
    pub fn active_id(&self) -> Option<SurfaceId> {
        self.active.as_ref().map(|a| a.id)
    }

    /// Deck index of the slide bound to the active surface.
    pub fn active_slide(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.slide)
    }

    /// `true` when `id` names the active surface.
    pub fn is_current(&self, id: SurfaceId) -> bool {
        self.active.as_ref().is_some_and(|a| a.id == id)
    }

    /// Mutable access to the active slide's state bag.
    pub fn state_mut(&mut self) -> Option<&mut StateBag> {
        self.active.as_mut().map(|a| &mut a.state)
    }

    /// Tear down the previous surface (if any) and bring up a fresh one for
    /// `slide`, with an empty state bag, then run the slide's `setup` hook.
    pub fn enter_slide<P: Platform>(
        &mut self,
        platform: &mut P,
        slide_index: usize,
        slide: &mut Slide<P::Painter>,
    ) -> LecternResult<SurfaceId> {
        // Old loop must be fully gone before the new surface exists.
        if let Some(old) = self.active.take() {
            debug!(surface = old.id.0, slide = old.slide, "destroying render surface");
            platform.destroy_surface(old.id);
        }

        let id = SurfaceId(self.next_id);
        self.next_id += 1;
        let info = platform.create_surface(id)?;
        debug!(surface = id.0, slide = slide_index, "created render surface");

        let mut active = ActiveSurface {
            id,
            info,
            slide: slide_index,
            state: StateBag::new(),
            frame: FrameStamp::default(),
        };

        if let Some(setup) = slide.setup.as_mut() {
            let painter = platform
                .painter(id)
                .ok_or_else(|| LecternError::config("platform produced a surface without a painter"))?;
            let mut ctx = SurfaceCtx {
                painter,
                info: active.info,
                frame: active.frame,
            };
            setup(&mut ctx, &mut active.state)
                .map_err(|e| LecternError::content(slide_index, "setup", e))?;
        }

        self.active = Some(active);
        Ok(id)
    }

    /// Deliver one display-refresh tick to the active slide's `draw` hook.
    ///
    /// Returns `false` (doing nothing) when `id` is stale or no surface is
    /// active. `draw` tolerates any number of invocations, including zero.
    pub fn frame<P: Platform>(
        &mut self,
        platform: &mut P,
        slide: &mut Slide<P::Painter>,
        id: SurfaceId,
        dt_secs: f64,
    ) -> LecternResult<bool> {
        let Some(active) = self.active.as_mut() else {
            return Ok(false);
        };
        if active.id != id {
            return Ok(false);
        }

        active.frame.dt_secs = dt_secs;
        active.frame.elapsed_secs += dt_secs;

        if let Some(draw) = slide.draw.as_mut() {
            let painter = platform
                .painter(id)
                .ok_or_else(|| LecternError::config("platform produced a surface without a painter"))?;
            let mut ctx = SurfaceCtx {
                painter,
                info: active.info,
                frame: active.frame,
            };
            draw(&mut ctx, &mut active.state)
                .map_err(|e| LecternError::content(active.slide, "draw", e))?;
        }

        active.frame.index += 1;
        Ok(true)
    }

    /// Resize the backing surface and run the slide's `resize` hook, used by
    /// visualizations whose auxiliary buffers must be invalidated rather than
    /// rescaled.
    pub fn resize<P: Platform>(
        &mut self,
        platform: &mut P,
        slide: &mut Slide<P::Painter>,
        id: SurfaceId,
        size: Size,
    ) -> LecternResult<bool> {
        let Some(active) = self.active.as_mut() else {
            return Ok(false);
        };
        if active.id != id {
            return Ok(false);
        }

        active.info = platform.resize_surface(id, size);

        if let Some(resize) = slide.resize.as_mut() {
            let painter = platform
                .painter(id)
                .ok_or_else(|| LecternError::config("platform produced a surface without a painter"))?;
            let mut ctx = SurfaceCtx {
                painter,
                info: active.info,
                frame: active.frame,
            };
            resize(&mut ctx, &mut active.state)
                .map_err(|e| LecternError::content(active.slide, "resize", e))?;
        }

        Ok(true)
    }

    /// Run a step's `enter` hook against the active surface, if both exist.
    pub fn run_step_enter<P: Platform>(
        &mut self,
        platform: &mut P,
        slide_index: usize,
        step: &mut Step<P::Painter>,
        direction: Direction,
    ) -> LecternResult<()> {
        let Some(active) = self.active.as_mut() else {
            return Ok(());
        };
        let Some(enter) = step.enter.as_mut() else {
            return Ok(());
        };
        let painter = platform
            .painter(active.id)
            .ok_or_else(|| LecternError::config("platform produced a surface without a painter"))?;
        let mut ctx = SurfaceCtx {
            painter,
            info: active.info,
            frame: active.frame,
        };
        enter(&mut ctx, &mut active.state, direction)
            .map_err(|e| LecternError::content(slide_index, "enter", e))
    }
}
