//! Theme preference resolution.
//!
//! [`ThemeResolver`] is the single owner of the active [`Themes`] value for a
//! page view. It reconciles three inputs:
//!
//! - a persisted user choice ([`PreferenceStore`]), which always wins when present,
//! - the environment's dark mode signal ([`SystemPreference`]), followed otherwise,
//! - explicit [`ThemeResolver::toggle`] calls.
//!
//! The resolved value is pushed one way into a [`ThemeTarget`] and never read back.
//! The change subscription lives exactly as long as the resolver.

use std::marker::PhantomData;

use yew::Callback;

use super::themes::Themes;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,

    #[error("failed to read stored preference: {0}")]
    Read(String),

    #[error("failed to write stored preference: {0}")]
    Write(String),

    #[error("stored preference {0:?} is not a theme")]
    Invalid(String),
}

pub trait PreferenceStore {
    fn load(&self) -> Result<Option<Themes>, StorageError>;
    fn save(&self, theme: Themes) -> Result<(), StorageError>;
}

pub trait SystemPreference {
    /// Dropping it must deregister the listener.
    type Subscription;

    fn prefers_dark(&self) -> bool;
    fn subscribe(&self, on_change: Callback<bool>) -> Self::Subscription;
}

pub trait ThemeTarget {
    fn apply(&self, theme: Themes);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    SystemFollowing,
    UserOverridden,
}

pub struct ThemeResolver<S, P: SystemPreference, T> {
    store: S,
    target: T,
    current: Themes,
    // set on toggle so a failed write still pins the choice for this session
    overridden: bool,
    _subscription: P::Subscription,
    _system: PhantomData<P>,
}

impl<S, P, T> ThemeResolver<S, P, T>
where
    S: PreferenceStore,
    P: SystemPreference,
    T: ThemeTarget,
{
    /// Resolves the initial theme and applies it to `target` before returning.
    ///
    /// `on_change` receives every later system preference change; the owner is
    /// expected to feed it back through [`ThemeResolver::on_system_change`].
    pub fn initialize(store: S, system: P, target: T, on_change: Callback<bool>) -> Self {
        let current = match stored(&store) {
            Some(theme) => theme,
            None => Themes::from_prefers_dark(system.prefers_dark()),
        };
        target.apply(current);

        let _subscription = system.subscribe(on_change);

        Self {
            store,
            target,
            current,
            overridden: false,
            _subscription,
            _system: PhantomData,
        }
    }

    pub fn current(&self) -> Themes {
        self.current
    }

    pub fn mode(&self) -> Mode {
        if self.is_overridden() {
            Mode::UserOverridden
        } else {
            Mode::SystemFollowing
        }
    }

    pub fn toggle(&mut self) -> Themes {
        let theme = self.current.toggled();
        if let Err(e) = self.store.save(theme) {
            report(&e);
        }
        self.overridden = true;
        self.set(theme);
        theme
    }

    pub fn on_system_change(&mut self, prefers_dark: bool) -> Themes {
        if !self.is_overridden() {
            self.set(Themes::from_prefers_dark(prefers_dark));
        }
        self.current
    }

    fn is_overridden(&self) -> bool {
        self.overridden || stored(&self.store).is_some()
    }

    fn set(&mut self, theme: Themes) {
        if self.current != theme {
            self.current = theme;
            self.target.apply(theme);
        }
    }
}

fn stored(store: &impl PreferenceStore) -> Option<Themes> {
    store.load().unwrap_or_else(|e| {
        report(&e);
        None
    })
}

fn report(error: &StorageError) {
    #[cfg(target_arch = "wasm32")]
    gloo_console::error!(format!("theme preference: {error}"));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = error;
}

#[cfg(test)]
mod tests {
    use super::*;

    use claim::assert_none;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore {
        value: Rc<RefCell<Option<String>>>,
        fail_reads: bool,
        fail_writes: bool,
    }

    impl MemoryStore {
        fn holding(text: &str) -> Self {
            let store = Self::default();
            *store.value.borrow_mut() = Some(text.to_owned());
            store
        }

        fn text(&self) -> Option<String> {
            self.value.borrow().clone()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Result<Option<Themes>, StorageError> {
            if self.fail_reads {
                return Err(StorageError::Read("access denied".into()));
            }
            match self.value.borrow().as_deref() {
                None => Ok(None),
                Some(text) => Themes::try_from(text)
                    .map(Some)
                    .map_err(|_| StorageError::Invalid(text.to_owned())),
            }
        }

        fn save(&self, theme: Themes) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Write("quota exceeded".into()));
            }
            *self.value.borrow_mut() = Some(theme.as_str().to_owned());
            Ok(())
        }
    }

    type Listeners = Rc<RefCell<Vec<(usize, Callback<bool>)>>>;

    #[derive(Clone, Default)]
    struct FakeSystem {
        prefers_dark: Rc<Cell<bool>>,
        listeners: Listeners,
        next_id: Rc<Cell<usize>>,
    }

    impl FakeSystem {
        fn preferring_dark(prefers_dark: bool) -> Self {
            let system = Self::default();
            system.prefers_dark.set(prefers_dark);
            system
        }

        fn flip(&self, prefers_dark: bool) {
            self.prefers_dark.set(prefers_dark);
            for (_, on_change) in self.listeners.borrow().iter() {
                on_change.emit(prefers_dark);
            }
        }

        fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    struct FakeSubscription {
        id: usize,
        listeners: Listeners,
    }

    impl Drop for FakeSubscription {
        fn drop(&mut self) {
            self.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }

    impl SystemPreference for FakeSystem {
        type Subscription = FakeSubscription;

        fn prefers_dark(&self) -> bool {
            self.prefers_dark.get()
        }

        fn subscribe(&self, on_change: Callback<bool>) -> Self::Subscription {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().push((id, on_change));
            FakeSubscription {
                id,
                listeners: self.listeners.clone(),
            }
        }
    }

    #[derive(Clone, Default)]
    struct RecordingTarget {
        applied: Rc<RefCell<Vec<Themes>>>,
    }

    impl RecordingTarget {
        fn applied(&self) -> Vec<Themes> {
            self.applied.borrow().clone()
        }
    }

    impl ThemeTarget for RecordingTarget {
        fn apply(&self, theme: Themes) {
            self.applied.borrow_mut().push(theme);
        }
    }

    // Plays the role of the owning component: system events are queued by the
    // subscription callback and fed back into the resolver.
    struct Harness {
        store: MemoryStore,
        system: FakeSystem,
        target: RecordingTarget,
        queued: Rc<RefCell<Vec<bool>>>,
        resolver: ThemeResolver<MemoryStore, FakeSystem, RecordingTarget>,
    }

    impl Harness {
        fn start(store: MemoryStore, system: FakeSystem) -> Self {
            let target = RecordingTarget::default();
            let queued = Rc::new(RefCell::new(Vec::new()));
            let on_change = {
                let queued = queued.clone();
                Callback::from(move |prefers_dark| queued.borrow_mut().push(prefers_dark))
            };
            let resolver =
                ThemeResolver::initialize(store.clone(), system.clone(), target.clone(), on_change);

            Self {
                store,
                system,
                target,
                queued,
                resolver,
            }
        }

        fn system_flips(&mut self, prefers_dark: bool) -> Themes {
            self.system.flip(prefers_dark);
            let events: Vec<bool> = self.queued.borrow_mut().drain(..).collect();
            for prefers_dark in events {
                self.resolver.on_system_change(prefers_dark);
            }
            self.resolver.current()
        }
    }

    #[test]
    fn stored_dark_wins_regardless_of_system() {
        for prefers_dark in [true, false] {
            let harness = Harness::start(
                MemoryStore::holding("dark"),
                FakeSystem::preferring_dark(prefers_dark),
            );
            assert_eq!(harness.resolver.current(), Themes::Dark);
            assert_eq!(harness.resolver.mode(), Mode::UserOverridden);
        }
    }

    #[test]
    fn stored_light_wins_over_dark_system() {
        let harness = Harness::start(MemoryStore::holding("light"), FakeSystem::preferring_dark(true));
        assert_eq!(harness.resolver.current(), Themes::Light);
        assert_eq!(harness.target.applied(), vec![Themes::Light]);
    }

    #[test]
    fn fresh_session_follows_system() {
        let harness = Harness::start(MemoryStore::default(), FakeSystem::preferring_dark(true));
        assert_eq!(harness.resolver.current(), Themes::Dark);
        assert_eq!(harness.resolver.mode(), Mode::SystemFollowing);

        let harness = Harness::start(MemoryStore::default(), FakeSystem::preferring_dark(false));
        assert_eq!(harness.resolver.current(), Themes::Light);
    }

    #[test]
    fn initialize_applies_once_and_writes_nothing() {
        let harness = Harness::start(MemoryStore::default(), FakeSystem::preferring_dark(true));
        assert_eq!(harness.target.applied(), vec![Themes::Dark]);
        assert_none!(harness.store.text());
        assert_eq!(harness.system.listener_count(), 1);
    }

    #[test]
    fn toggle_twice_restores_theme() {
        let mut harness = Harness::start(MemoryStore::default(), FakeSystem::preferring_dark(false));
        assert_eq!(harness.resolver.toggle(), Themes::Dark);
        assert_eq!(harness.resolver.toggle(), Themes::Light);
        assert_eq!(
            harness.target.applied(),
            vec![Themes::Light, Themes::Dark, Themes::Light]
        );
        assert_eq!(harness.store.text().as_deref(), Some("light"));
    }

    #[test]
    fn toggle_persists_and_pins_theme() {
        let mut harness = Harness::start(MemoryStore::default(), FakeSystem::preferring_dark(false));

        assert_eq!(harness.resolver.toggle(), Themes::Dark);
        assert_eq!(harness.store.text().as_deref(), Some("dark"));
        assert_eq!(harness.resolver.mode(), Mode::UserOverridden);

        assert_eq!(harness.system_flips(false), Themes::Dark);
        assert_eq!(harness.system_flips(true), Themes::Dark);
        assert_eq!(harness.target.applied(), vec![Themes::Light, Themes::Dark]);
    }

    #[test]
    fn toggle_overwrites_previous_choice() {
        let mut harness = Harness::start(MemoryStore::holding("dark"), FakeSystem::preferring_dark(true));
        assert_eq!(harness.resolver.toggle(), Themes::Light);
        assert_eq!(harness.store.text().as_deref(), Some("light"));
    }

    #[test]
    fn system_change_followed_without_override() {
        let mut harness = Harness::start(MemoryStore::default(), FakeSystem::preferring_dark(false));
        assert_eq!(harness.resolver.current(), Themes::Light);

        assert_eq!(harness.system_flips(true), Themes::Dark);
        assert_eq!(harness.system_flips(false), Themes::Light);
        assert_eq!(
            harness.target.applied(),
            vec![Themes::Light, Themes::Dark, Themes::Light]
        );
        assert_none!(harness.store.text());
    }

    #[test]
    fn repeated_system_events_are_idempotent() {
        let mut harness = Harness::start(MemoryStore::default(), FakeSystem::preferring_dark(false));
        harness.system_flips(true);
        harness.system_flips(true);
        harness.system_flips(true);
        assert_eq!(harness.target.applied(), vec![Themes::Light, Themes::Dark]);
    }

    #[test]
    fn stored_preference_ignores_system_changes() {
        let mut harness = Harness::start(MemoryStore::holding("light"), FakeSystem::preferring_dark(false));
        assert_eq!(harness.system_flips(true), Themes::Light);
        assert_eq!(harness.target.applied(), vec![Themes::Light]);
    }

    #[test]
    fn preference_written_elsewhere_pins_theme() {
        let mut harness = Harness::start(MemoryStore::default(), FakeSystem::preferring_dark(false));
        *harness.store.value.borrow_mut() = Some("light".into());
        assert_eq!(harness.system_flips(true), Themes::Light);
    }

    #[test]
    fn read_failure_falls_back_to_system() {
        let store = MemoryStore {
            fail_reads: true,
            ..MemoryStore::holding("light")
        };
        let mut harness = Harness::start(store, FakeSystem::preferring_dark(true));
        assert_eq!(harness.resolver.current(), Themes::Dark);
        assert_eq!(harness.resolver.mode(), Mode::SystemFollowing);
        assert_eq!(harness.system_flips(false), Themes::Light);
    }

    #[test]
    fn invalid_stored_text_is_ignored_and_left_alone() {
        let mut harness = Harness::start(MemoryStore::holding("pastel"), FakeSystem::preferring_dark(true));
        assert_eq!(harness.resolver.current(), Themes::Dark);
        assert_eq!(harness.store.text().as_deref(), Some("pastel"));
        assert_eq!(harness.system_flips(false), Themes::Light);
    }

    #[test]
    fn write_failure_still_flips_for_the_session() {
        let store = MemoryStore {
            fail_writes: true,
            ..MemoryStore::default()
        };
        let mut harness = Harness::start(store, FakeSystem::preferring_dark(false));

        assert_eq!(harness.resolver.toggle(), Themes::Dark);
        assert_none!(harness.store.text());
        assert_eq!(harness.resolver.mode(), Mode::UserOverridden);
        assert_eq!(harness.system_flips(false), Themes::Dark);
    }

    #[test]
    fn dropping_resolver_releases_subscription() {
        let system = FakeSystem::preferring_dark(false);

        for _ in 0..3 {
            let harness = Harness::start(MemoryStore::default(), system.clone());
            assert_eq!(system.listener_count(), 1);
            drop(harness);
            assert_eq!(system.listener_count(), 0);
        }
    }

    #[test]
    fn no_events_reach_a_dropped_resolver() {
        let system = FakeSystem::preferring_dark(false);
        let harness = Harness::start(MemoryStore::default(), system.clone());
        let queued = harness.queued.clone();
        drop(harness);

        system.flip(true);
        assert!(queued.borrow().is_empty());
    }
}
