use indexmap::IndexMap;
use std::sync::Arc;

use super::{FlowTypes, Step, StepRef};
use crate::constants::contains_reserved_character;
use crate::errors::FlowError;

/// Entrada de una colección: un step o una subcolección anidada.
pub enum StepEntry<T: FlowTypes> {
    Step(StepRef<T>),
    Collection(StepCollection<T>),
}

impl<T: FlowTypes> Clone for StepEntry<T> {
    fn clone(&self) -> Self {
        match self {
            StepEntry::Step(step) => StepEntry::Step(Arc::clone(step)),
            StepEntry::Collection(c) => StepEntry::Collection(c.clone()),
        }
    }
}

impl<T: FlowTypes> From<StepRef<T>> for StepEntry<T> {
    fn from(step: StepRef<T>) -> Self {
        StepEntry::Step(step)
    }
}

impl<T: FlowTypes> From<StepCollection<T>> for StepEntry<T> {
    fn from(collection: StepCollection<T>) -> Self {
        StepEntry::Collection(collection)
    }
}

/// Árbol ordenado de steps. El orden de inserción es el orden de navegación.
///
/// Las claves no pueden contener `.` ni `%` y no se repiten dentro de una
/// misma colección.
pub struct StepCollection<T: FlowTypes> {
    items: IndexMap<String, StepEntry<T>>,
}

impl<T: FlowTypes> StepCollection<T> {
    pub fn new() -> Self {
        Self { items: IndexMap::new() }
    }

    pub fn add(&mut self, key: impl Into<String>, entry: impl Into<StepEntry<T>>) -> Result<&mut Self, FlowError> {
        let key = key.into();
        if contains_reserved_character(&key) {
            return Err(FlowError::InvalidStepKey(key));
        }
        if self.items.contains_key(&key) {
            return Err(FlowError::DuplicateStepKey(key));
        }
        self.items.insert(key, entry.into());
        Ok(self)
    }

    pub fn add_step<S>(&mut self, key: impl Into<String>, step: S) -> Result<&mut Self, FlowError>
        where S: Step<T> + 'static
    {
        let step: StepRef<T> = Arc::new(step);
        self.add(key, step)
    }

    pub fn add_collection(&mut self, key: impl Into<String>, collection: StepCollection<T>) -> Result<&mut Self, FlowError> {
        self.add(key, collection)
    }

    /// Variante encadenable de `add_step`.
    pub fn with_step<S>(mut self, key: impl Into<String>, step: S) -> Result<Self, FlowError>
        where S: Step<T> + 'static
    {
        self.add_step(key, step)?;
        Ok(self)
    }

    /// Variante encadenable de `add_collection`.
    pub fn with_collection(mut self, key: impl Into<String>, collection: StepCollection<T>) -> Result<Self, FlowError> {
        self.add_collection(key, collection)?;
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&StepEntry<T>> {
        self.items.get(key)
    }

    /// Subcolección mutable para editar niveles anidados.
    pub fn collection_mut(&mut self, key: &str) -> Option<&mut StepCollection<T>> {
        match self.items.get_mut(key) {
            Some(StepEntry::Collection(c)) => Some(c),
            _ => None,
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<StepEntry<T>> {
        self.items.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Número de entradas directas (steps y subcolecciones).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Número de steps hoja en todo el subárbol.
    pub fn step_count(&self) -> usize {
        self.items
            .values()
            .map(|entry| match entry {
                StepEntry::Step(_) => 1,
                StepEntry::Collection(c) => c.step_count(),
            })
            .sum()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, StepEntry<T>> {
        self.items.iter()
    }
}

impl<T: FlowTypes> Default for StepCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FlowTypes> Clone for StepCollection<T> {
    fn clone(&self) -> Self {
        Self { items: self.items.clone() }
    }
}

impl<'a, T: FlowTypes> IntoIterator for &'a StepCollection<T> {
    type Item = (&'a String, &'a StepEntry<T>);
    type IntoIter = indexmap::map::Iter<'a, String, StepEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavigationResponse;
    use crate::step::FlowResponse;

    struct Types;
    impl FlowTypes for Types {
        type Request = ();
        type Response = ();
        type Data = ();
    }

    struct Noop;
    impl Step<Types> for Noop {
        fn handle_request(&self, _: &(), _: &NavigationResponse, _: &mut ()) -> Option<FlowResponse<()>> {
            None
        }
    }

    #[test]
    fn rejects_reserved_characters_and_duplicates() {
        let mut c = StepCollection::<Types>::new();
        assert_eq!(c.add_step("a.b", Noop).err(), Some(FlowError::InvalidStepKey("a.b".into())));
        assert_eq!(c.add_step("%root%", Noop).err(), Some(FlowError::InvalidStepKey("%root%".into())));
        c.add_step("a", Noop).unwrap();
        assert_eq!(c.add_step("a", Noop).err(), Some(FlowError::DuplicateStepKey("a".into())));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn step_count_descends_into_nested_collections() {
        let inner = StepCollection::<Types>::new().with_step("x", Noop).unwrap().with_step("y", Noop).unwrap();
        let mut outer = StepCollection::new().with_step("a", Noop)
                                             .unwrap()
                                             .with_collection("group", inner)
                                             .unwrap()
                                             .with_collection("empty", StepCollection::new())
                                             .unwrap();
        assert_eq!(outer.len(), 3);
        assert_eq!(outer.step_count(), 3);

        outer.collection_mut("group").unwrap().add_step("z", Noop).unwrap();
        assert_eq!(outer.step_count(), 4);
        assert!(outer.collection_mut("a").is_none());
        let keys: Vec<&String> = outer.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "group", "empty"]);
    }

    #[test]
    fn remove_keeps_the_order_of_remaining_entries() {
        let mut c = StepCollection::<Types>::new().with_step("a", Noop)
                                                  .unwrap()
                                                  .with_step("b", Noop)
                                                  .unwrap()
                                                  .with_step("c", Noop)
                                                  .unwrap();
        assert!(matches!(c.remove("b"), Some(StepEntry::Step(_))));
        assert!(c.remove("b").is_none());
        assert!(!c.contains_key("b"));
        let keys: Vec<&String> = c.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "c"]);
    }
}
