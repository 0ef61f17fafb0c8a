use super::toggle_store::ToggleStore;
use crate::shared::error::CatalogError;
use std::cell::RefCell;
use std::marker::PhantomData;

thread_local! {
    static PROVIDERS: RefCell<Vec<ToggleStore>> = const { RefCell::new(Vec::new()) };
}

/// Makes a toggle store reachable from nested views without passing it
/// through every constructor.
///
/// Mounting returns a guard; the store stays reachable until the guard is
/// dropped. Providers nest, and the innermost mounted store wins.
#[must_use = "the provider is unmounted as soon as the guard is dropped"]
#[derive(Debug)]
pub struct MetadataProvider {
    // Mount state is thread-local, so the guard must stay on its thread
    _not_send: PhantomData<*const ()>,
}

impl MetadataProvider {
    pub fn mount(store: &ToggleStore) -> Self {
        PROVIDERS.with(|providers| providers.borrow_mut().push(store.clone()));
        Self {
            _not_send: PhantomData,
        }
    }

    pub fn is_mounted() -> bool {
        PROVIDERS.with(|providers| !providers.borrow().is_empty())
    }
}

impl Drop for MetadataProvider {
    fn drop(&mut self) {
        PROVIDERS.with(|providers| {
            providers.borrow_mut().pop();
        });
    }
}

/// Store of the innermost mounted provider, or `ProviderNotMounted`
pub fn try_use_metadata() -> Result<ToggleStore, CatalogError> {
    PROVIDERS.with(|providers| {
        providers
            .borrow()
            .last()
            .cloned()
            .ok_or(CatalogError::ProviderNotMounted)
    })
}

/// Store of the innermost mounted provider.
///
/// # Panics
/// Panics when no provider is mounted. Rendering a toggle-aware view
/// outside the application shell is a programming error.
pub fn use_metadata() -> ToggleStore {
    match try_use_metadata() {
        Ok(store) => store,
        Err(error) => panic!("{}", error),
    }
}
