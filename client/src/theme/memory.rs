//! In-memory theme backends for native tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use super::controller::{AmbientSignal, PreferenceStore, StoreError, StyleTarget};
use super::mode::ThemeMode;

#[derive(Debug)]
struct StoreSlot {
    value: Option<String>,
    available: bool,
    writes: usize,
}

/// Storage shared between clones, so a second controller can "reload" it.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    slot: Rc<RefCell<StoreSlot>>,
}

impl MemoryStore {
    fn with(value: Option<&str>, available: bool) -> Self {
        Self {
            slot: Rc::new(RefCell::new(StoreSlot {
                value: value.map(str::to_owned),
                available,
                writes: 0,
            })),
        }
    }

    pub fn empty() -> Self {
        Self::with(None, true)
    }

    pub fn holding(value: &str) -> Self {
        Self::with(Some(value), true)
    }

    pub fn unavailable() -> Self {
        Self::with(None, false)
    }

    pub fn value(&self) -> Option<String> {
        self.slot.borrow().value.clone()
    }

    pub fn writes(&self) -> usize {
        self.slot.borrow().writes
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        let slot = self.slot.borrow();
        if !slot.available {
            return Err(StoreError::Unavailable);
        }
        Ok(slot.value.clone())
    }

    fn save(&mut self, value: &str) -> Result<(), StoreError> {
        let mut slot = self.slot.borrow_mut();
        if !slot.available {
            return Err(StoreError::Unavailable);
        }
        slot.value = Some(value.to_owned());
        slot.writes += 1;
        Ok(())
    }
}

/// Fixed ambient answer that counts how often it was asked.
#[derive(Clone, Debug)]
pub struct FixedSignal {
    prefers_dark: bool,
    queries: Rc<Cell<usize>>,
}

impl FixedSignal {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark,
            queries: Rc::new(Cell::new(0)),
        }
    }

    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

impl AmbientSignal for FixedSignal {
    fn prefers_dark(&self) -> bool {
        self.queries.set(self.queries.get() + 1);
        self.prefers_dark
    }
}

/// A root class list. Unrelated classes must survive theme changes.
#[derive(Clone, Debug, Default)]
pub struct ClassList {
    classes: BTreeSet<String>,
}

impl ClassList {
    pub fn with_classes(classes: &[&str]) -> Self {
        Self {
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Theme markers currently present.
    pub fn markers(&self) -> Vec<ThemeMode> {
        ThemeMode::ALL
            .into_iter()
            .filter(|mode| self.classes.contains(mode.as_str()))
            .collect()
    }
}

impl StyleTarget for ClassList {
    fn apply(&mut self, mode: ThemeMode) {
        self.classes.remove(mode.toggled().as_str());
        self.classes.insert(mode.as_str().to_owned());
    }
}
