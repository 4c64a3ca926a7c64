use crate::catalog::catalog::WeightCatalog;
use crate::cloth::animator::ClothAnimator;
use crate::cloth::mesh::FabricMesh;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{SwatchError, SwatchResult};
use crate::gauge::report::{GaugeReport, generate_report};
use crate::scene::resources::{ResourceKind, ResourceRegistry};
use crate::session::config::SwatchOpts;
use crate::session::frame_loop::StopHandle;
use crate::strand::model::{Strand, StrandSpec, average_color};
use crate::texture::geometry::StitchGeometry;
use crate::texture::synth::synthesize;
use crate::texture::texture::Texture;
use crate::yarn::helix::YarnModel;

/// Which scene a session is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SceneKind {
    /// Flat gray plane shown when no strands are selected.
    Placeholder,
    /// Textured, billowing fabric plus a yarn preview.
    Swatch,
    /// Nothing; the session has been destroyed.
    Empty,
}

/// Result of one render command.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOutcome {
    /// Scene installed by the command.
    pub scene: SceneKind,
    /// Gauge report; `None` for the placeholder.
    pub report: Option<GaugeReport>,
    /// Needle diameter the texture was sized for.
    pub needle_mm: Option<f64>,
    /// Raster width and height.
    pub texture_size: (u32, u32),
    /// Content hash of the raster.
    pub texture_fingerprint: u64,
}

/// Observable session state, used to compare sessions.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Installed scene.
    pub scene: SceneKind,
    /// Live texture handles.
    pub live_textures: usize,
    /// Live mesh handles.
    pub live_meshes: usize,
    /// Live yarn handles.
    pub live_yarns: usize,
    /// Current gauge report.
    pub report: Option<GaugeReport>,
    /// Content hash of the installed raster.
    pub texture_fingerprint: Option<u64>,
    /// Whether the fabric is at rest.
    pub mesh_flat: bool,
    /// Whether resize events are still delivered.
    pub resize_listener_attached: bool,
    /// Whether `destroy` has run.
    pub destroyed: bool,
}

struct Scene {
    kind: SceneKind,
    animator: ClothAnimator,
    fabric: FabricMesh,
    yarn: Option<YarnModel>,
    report: Option<GaugeReport>,
    needle_mm: Option<f64>,
    started_at: Option<f64>,
}

/// Owns the rendering resources of one swatch view and applies render, clear and destroy
/// commands to them.
///
/// Single-threaded: commands and frame ticks run on the caller's thread, one at a time.
pub struct SwatchSession {
    catalog: WeightCatalog,
    opts: SwatchOpts,
    resources: ResourceRegistry,
    scene: Option<Scene>,
    stop: StopHandle,
    viewport: Option<(u32, u32)>,
    listener_attached: bool,
    destroyed: bool,
}

impl SwatchSession {
    /// Validate `opts` and install the placeholder scene.
    pub fn new(catalog: WeightCatalog, opts: SwatchOpts) -> SwatchResult<Self> {
        opts.validate()?;
        let mut session = Self {
            catalog,
            opts,
            resources: ResourceRegistry::new(),
            scene: None,
            stop: StopHandle::new(),
            viewport: None,
            listener_attached: true,
            destroyed: false,
        };
        session.install_placeholder()?;
        Ok(session)
    }

    /// Catalog the session resolves strands against.
    pub fn catalog(&self) -> &WeightCatalog {
        &self.catalog
    }

    /// Options the session was built with.
    pub fn opts(&self) -> &SwatchOpts {
        &self.opts
    }

    /// Resource ledger.
    pub fn resources(&self) -> &ResourceRegistry {
        &self.resources
    }

    /// Cancellation flag shared with the frame loop; raised by [`SwatchSession::destroy`].
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Installed scene kind.
    pub fn scene_kind(&self) -> SceneKind {
        self.scene.as_ref().map_or(SceneKind::Empty, |s| s.kind)
    }

    /// Installed fabric plane.
    pub fn fabric(&self) -> Option<&FabricMesh> {
        self.scene.as_ref().map(|s| &s.fabric)
    }

    /// Installed yarn preview.
    pub fn yarn(&self) -> Option<&YarnModel> {
        self.scene.as_ref().and_then(|s| s.yarn.as_ref())
    }

    /// Gauge report of the installed swatch.
    pub fn report(&self) -> Option<&GaugeReport> {
        self.scene.as_ref().and_then(|s| s.report.as_ref())
    }

    /// Last viewport size delivered through [`SwatchSession::resize`].
    pub fn viewport(&self) -> Option<(u32, u32)> {
        self.viewport
    }

    /// Render `strands` knitted on a `needle_mm` needle.
    ///
    /// An empty list installs the placeholder. A non-finite or non-positive needle falls back to
    /// the recommended needle. On failure after the previous scene was released, the
    /// placeholder is installed before the error is returned.
    #[tracing::instrument(skip(self, strands), fields(strands = strands.len()))]
    pub fn render(&mut self, strands: &[StrandSpec], needle_mm: f64) -> SwatchResult<RenderOutcome> {
        if self.destroyed {
            return Err(SwatchError::Destroyed);
        }
        if strands.is_empty() {
            self.install_placeholder()?;
            return Ok(self.outcome());
        }

        let resolved: Vec<Strand> = strands.iter().map(Strand::from_spec).collect();
        let ids: Vec<u32> = resolved.iter().map(|s| s.category_id).collect();
        let report = generate_report(&self.catalog, &ids)?;
        let needle = if needle_mm.is_finite() && needle_mm > 0.0 {
            needle_mm
        } else {
            tracing::warn!(
                needle_mm,
                fallback = report.needle.mm,
                "invalid needle size, using recommended needle"
            );
            report.needle.mm
        };
        let geometry =
            StitchGeometry::derive(needle, report.combined.exact_thickness, resolved.len())?;

        self.dispose_scene();
        match self.build_swatch(&resolved, &geometry, report, needle) {
            Ok(scene) => {
                self.scene = Some(scene);
                tracing::debug!(needle_mm = needle, "swatch installed");
                Ok(self.outcome())
            }
            Err(e) => {
                if let Err(fallback) = self.install_placeholder() {
                    tracing::warn!(error = %fallback, "placeholder install failed after render error");
                }
                Err(e)
            }
        }
    }

    /// Release the swatch and show the placeholder. No-op after destroy.
    #[tracing::instrument(skip(self))]
    pub fn clear(&mut self) -> SwatchResult<()> {
        if self.destroyed {
            return Ok(());
        }
        self.install_placeholder()
    }

    /// Advance the billow to wall time `now_secs`.
    ///
    /// Elapsed time is measured from the first tick after the last render. The placeholder does
    /// not move.
    pub fn tick(&mut self, now_secs: f64) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        if scene.kind != SceneKind::Swatch {
            return;
        }
        let start = *scene.started_at.get_or_insert(now_secs);
        let elapsed = (now_secs - start).max(0.0) as f32;
        scene.animator.tick(&mut scene.fabric, elapsed);
        if let Some(yarn) = scene.yarn.as_mut() {
            yarn.tick(elapsed);
        }
    }

    /// Deliver a viewport resize. Returns `false` once the listener is detached.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if !self.listener_attached {
            return false;
        }
        self.viewport = Some((width, height));
        true
    }

    /// Stop the frame loop, release every resource and detach the resize listener.
    ///
    /// Idempotent.
    #[tracing::instrument(skip(self))]
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.stop.stop();
        self.dispose_scene();
        self.listener_attached = false;
        self.destroyed = true;
        tracing::debug!(live = self.resources.live_total(), "session destroyed");
    }

    /// Observable state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            scene: self.scene_kind(),
            live_textures: self.resources.live(ResourceKind::Texture),
            live_meshes: self.resources.live(ResourceKind::Mesh),
            live_yarns: self.resources.live(ResourceKind::Yarn),
            report: self.report().cloned(),
            texture_fingerprint: self.fabric().map(|f| f.texture().fingerprint()),
            mesh_flat: self.fabric().is_none_or(FabricMesh::is_flat),
            resize_listener_attached: self.listener_attached,
            destroyed: self.destroyed,
        }
    }

    fn build_swatch(
        &mut self,
        strands: &[Strand],
        geometry: &StitchGeometry,
        report: GaugeReport,
        needle_mm: f64,
    ) -> SwatchResult<Scene> {
        let texture = synthesize(strands, geometry, &self.opts.texture)?;
        let animator = ClothAnimator::new(
            self.opts.mesh,
            self.opts
                .billow
                .for_combination(report.combined.exact_thickness),
        );
        let fabric = animator.create_mesh(texture, average_color(strands), &mut self.resources)?;
        let yarn = match YarnModel::build(strands, geometry, &self.opts.yarn, &mut self.resources) {
            Ok(yarn) => yarn,
            Err(e) => {
                animator.dispose(fabric, &mut self.resources);
                return Err(e);
            }
        };
        Ok(Scene {
            kind: SceneKind::Swatch,
            animator,
            fabric,
            yarn: Some(yarn),
            report: Some(report),
            needle_mm: Some(needle_mm),
            started_at: None,
        })
    }

    fn install_placeholder(&mut self) -> SwatchResult<()> {
        self.dispose_scene();
        let animator = ClothAnimator::new(self.opts.mesh, self.opts.billow);
        let fabric =
            animator.create_mesh(Texture::placeholder(), Rgb8::NEUTRAL_GRAY, &mut self.resources)?;
        self.scene = Some(Scene {
            kind: SceneKind::Placeholder,
            animator,
            fabric,
            yarn: None,
            report: None,
            needle_mm: None,
            started_at: None,
        });
        tracing::debug!("placeholder installed");
        Ok(())
    }

    fn dispose_scene(&mut self) {
        if let Some(scene) = self.scene.take() {
            scene.animator.dispose(scene.fabric, &mut self.resources);
            if let Some(yarn) = scene.yarn {
                yarn.dispose(&mut self.resources);
            }
        }
    }

    fn outcome(&self) -> RenderOutcome {
        let texture = self.fabric().map(FabricMesh::texture);
        RenderOutcome {
            scene: self.scene_kind(),
            report: self.report().cloned(),
            needle_mm: self.scene.as_ref().and_then(|s| s.needle_mm),
            texture_size: texture.map_or((0, 0), |t| (t.width, t.height)),
            texture_fingerprint: texture.map_or(0, Texture::fingerprint),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/swatch_session.rs"]
mod tests;
