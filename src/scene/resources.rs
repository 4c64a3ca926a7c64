use std::collections::BTreeMap;

/// What a [`ResourceHandle`] stands for on the host side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    /// An uploaded stitch raster.
    Texture,
    /// A fabric plane geometry buffer.
    Mesh,
    /// A yarn centerline geometry buffer.
    Yarn,
}

/// Opaque id of a host rendering resource. Releasing it twice is harmless.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceHandle {
    id: u64,
    kind: ResourceKind,
}

impl ResourceHandle {
    /// Kind of resource behind this handle.
    pub fn kind(self) -> ResourceKind {
        self.kind
    }

    /// Raw id, unique within one registry.
    pub fn id(self) -> u64 {
        self.id
    }
}

/// Counters kept by [`ResourceRegistry`].
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceStats {
    /// Handles ever acquired.
    pub acquired: u64,
    /// Handles released exactly once.
    pub released: u64,
    /// Release calls for handles that were unknown or already released.
    pub ignored_releases: u64,
}

/// Ledger of live host resources.
///
/// Every acquisition must be paired with a release on every exit path; [`ResourceRegistry::live`]
/// exposes leaks to tests.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    next_id: u64,
    live: BTreeMap<u64, ResourceKind>,
    stats: ResourceStats,
}

impl ResourceRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new resource of `kind`.
    pub fn acquire(&mut self, kind: ResourceKind) -> ResourceHandle {
        self.next_id = self.next_id.saturating_add(1);
        let id = self.next_id;
        self.live.insert(id, kind);
        self.stats.acquired = self.stats.acquired.saturating_add(1);
        ResourceHandle { id, kind }
    }

    /// Release `handle`. Returns `false` (and changes nothing) if it was not live.
    pub fn release(&mut self, handle: ResourceHandle) -> bool {
        match self.live.remove(&handle.id) {
            Some(_) => {
                self.stats.released = self.stats.released.saturating_add(1);
                true
            }
            None => {
                self.stats.ignored_releases = self.stats.ignored_releases.saturating_add(1);
                tracing::debug!(id = handle.id, kind = ?handle.kind, "ignored release of dead handle");
                false
            }
        }
    }

    /// Return `true` if `handle` has been acquired and not yet released.
    pub fn is_live(&self, handle: ResourceHandle) -> bool {
        self.live.contains_key(&handle.id)
    }

    /// Number of live resources of `kind`.
    pub fn live(&self, kind: ResourceKind) -> usize {
        self.live.values().filter(|k| **k == kind).count()
    }

    /// Number of live resources of any kind.
    pub fn live_total(&self) -> usize {
        self.live.len()
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> ResourceStats {
        self.stats.clone()
    }
}
