use crate::application::state::{MetadataProvider, ToggleStore};
use crate::catalog::domain::{MetadataToggles, ToggleKey};

/// AppShell - Owns the toggle store and keeps its provider mounted
///
/// Views built while the shell is alive can reach the store through
/// `use_metadata`. Dropping the shell unmounts the provider.
#[derive(Debug)]
pub struct AppShell {
    store: ToggleStore,
    _provider: MetadataProvider,
}

impl AppShell {
    pub fn mount(initial: MetadataToggles) -> Self {
        let store = ToggleStore::new(initial);
        let provider = MetadataProvider::mount(&store);
        Self {
            store,
            _provider: provider,
        }
    }

    pub fn store(&self) -> &ToggleStore {
        &self.store
    }

    /// Applies toggle overrides through the store. The master switch is
    /// applied first so explicit child values win over its cascade.
    pub fn apply_overrides<I>(&self, overrides: I)
    where
        I: IntoIterator<Item = (ToggleKey, bool)>,
    {
        let mut overrides: Vec<(ToggleKey, bool)> = overrides.into_iter().collect();
        overrides.sort_by_key(|(key, _)| *key != ToggleKey::MASTER);
        for (key, value) in overrides {
            self.store.set(key, value);
        }
    }
}
