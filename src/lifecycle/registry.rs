use std::collections::BTreeMap;

/// A resource holding renderer-side state that must be freed explicitly.
///
/// `unload` must tolerate repeated calls.
pub trait Unload {
    /// Free the resource.
    fn unload(&mut self);
}

impl<T: Unload + ?Sized> Unload for Box<T> {
    fn unload(&mut self) {
        (**self).unload();
    }
}

/// Opaque key returned by [`UnloadRegistry::register`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnloadHandle(u64);

/// Explicit teardown list owned by whatever manages renderer lifetime.
///
/// Every registered resource is unloaded at most once: either individually through
/// [`UnloadRegistry::unload`], or by the [`UnloadRegistry::unload_all`] sweep, which also
/// runs on drop. Removing an unknown or already removed handle is a no-op.
pub struct UnloadRegistry<R: Unload = Box<dyn Unload>> {
    next: u64,
    entries: BTreeMap<UnloadHandle, R>,
}

impl<R: Unload> Default for UnloadRegistry<R> {
    fn default() -> Self {
        Self {
            next: 0,
            entries: BTreeMap::new(),
        }
    }
}

impl<R: Unload> std::fmt::Debug for UnloadRegistry<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnloadRegistry")
            .field("live", &self.entries.len())
            .field("next", &self.next)
            .finish()
    }
}

impl<R: Unload> UnloadRegistry<R> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `resource` until it is unloaded or taken back.
    pub fn register(&mut self, resource: R) -> UnloadHandle {
        let handle = UnloadHandle(self.next);
        self.next += 1;
        self.entries.insert(handle, resource);
        tracing::trace!(handle = handle.0, "registered unloadable");
        handle
    }

    /// Borrow a live resource.
    pub fn get(&self, handle: UnloadHandle) -> Option<&R> {
        self.entries.get(&handle)
    }

    /// Mutably borrow a live resource.
    pub fn get_mut(&mut self, handle: UnloadHandle) -> Option<&mut R> {
        self.entries.get_mut(&handle)
    }

    /// Deregister without unloading and hand the resource back.
    pub fn take(&mut self, handle: UnloadHandle) -> Option<R> {
        self.entries.remove(&handle)
    }

    /// Unload and drop one resource. Returns `false` if the handle was not live.
    pub fn unload(&mut self, handle: UnloadHandle) -> bool {
        let Some(mut resource) = self.entries.remove(&handle) else {
            return false;
        };
        resource.unload();
        tracing::trace!(handle = handle.0, "unloaded");
        true
    }

    /// Unload every live resource in registration order and return how many ran.
    pub fn unload_all(&mut self) -> usize {
        let entries = std::mem::take(&mut self.entries);
        let mut tally = 0usize;
        for (_, mut resource) in entries {
            resource.unload();
            tally += 1;
        }
        if tally > 0 {
            tracing::info!(tally, "unloaded all registered resources");
        }
        tally
    }

    /// Whether `handle` is still registered.
    pub fn contains(&self, handle: UnloadHandle) -> bool {
        self.entries.contains_key(&handle)
    }

    /// Number of live resources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no resource is live.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R: Unload> Drop for UnloadRegistry<R> {
    fn drop(&mut self) {
        self.unload_all();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/registry.rs"]
mod tests;
