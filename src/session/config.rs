use crate::cloth::mesh::MeshOpts;
use crate::cloth::wave::BillowParams;
use crate::foundation::error::{SwatchError, SwatchResult};
use crate::texture::synth::TextureOpts;
use crate::yarn::helix::YarnOpts;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Tunables for a [`crate::SwatchSession`].
///
/// Every field defaults, so a partial JSON document only needs the keys it overrides.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SwatchOpts {
    /// Stitch raster sizing.
    pub texture: TextureOpts,
    /// Fabric plane size and resolution.
    pub mesh: MeshOpts,
    /// Yarn preview sizing.
    pub yarn: YarnOpts,
    /// Billow waves for a zero-thickness yarn; scaled per combination.
    pub billow: BillowParams,
}

impl SwatchOpts {
    /// Parse options from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SwatchResult<Self> {
        let opts: Self = serde_json::from_reader(r)
            .map_err(|e| SwatchError::serde(format!("parse swatch options JSON: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SwatchResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SwatchError::validation(format!("open swatch options '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate every section.
    pub fn validate(&self) -> SwatchResult<()> {
        self.texture.validate()?;
        self.mesh.validate()?;
        self.yarn.validate()?;
        self.billow.validate()
    }
}
