use indexmap::IndexMap;
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::Arc;

use super::EligibilityGate;
use crate::constants::PATH_SEPARATOR;
use crate::errors::FlowError;
use crate::hashing::hash_value;
use crate::navigation::{NavigationDirection, NavigationResponse};
use crate::step::{FlowTypes, StepCollection, StepEntry, StepRef};

/// Flujo aplanado: recorrido en profundidad del árbol de steps, en orden de
/// inserción, con claves `{raiz}.{segmento}(.{segmento})*`.
///
/// Las subcolecciones no aparecen como entradas propias; una subcolección
/// vacía no aporta nada.
pub struct FlattenedFlow<T: FlowTypes> {
    steps: IndexMap<String, StepRef<T>>,
}

impl<T: FlowTypes> FlattenedFlow<T> {
    pub fn compile(root_key: &str, items: &StepCollection<T>) -> Self {
        let mut steps = IndexMap::new();
        Self::compile_level(root_key, items, &mut steps);
        Self { steps }
    }

    fn compile_level(prefix: &str, items: &StepCollection<T>, steps: &mut IndexMap<String, StepRef<T>>) {
        for (key, entry) in items.iter() {
            let name = format!("{prefix}{PATH_SEPARATOR}{key}");
            match entry {
                StepEntry::Step(step) => {
                    steps.insert(name, Arc::clone(step));
                }
                StepEntry::Collection(nested) => Self::compile_level(&name, nested, steps),
            }
        }
    }

    pub fn get(&self, step_name: &str) -> Option<&StepRef<T>> {
        self.steps.get(step_name)
    }

    /// Busca un step por nombre completo.
    pub fn get_step(&self, step_name: &str) -> Result<&StepRef<T>, FlowError> {
        if step_name.is_empty() {
            return Err(FlowError::EmptyStepName);
        }
        self.steps
            .get(step_name)
            .ok_or_else(|| FlowError::StepNotFound(step_name.to_string()))
    }

    pub fn index_of(&self, step_name: &str) -> Option<usize> {
        self.steps.get_index_of(step_name)
    }

    fn require_index(&self, step_name: &str) -> Result<usize, FlowError> {
        if step_name.is_empty() {
            return Err(FlowError::EmptyStepName);
        }
        self.index_of(step_name)
            .ok_or_else(|| FlowError::StepNotFound(step_name.to_string()))
    }

    pub fn contains(&self, step_name: &str) -> bool {
        self.steps.contains_key(step_name)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.steps.keys().map(String::as_str)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, StepRef<T>> {
        self.steps.iter()
    }

    /// Firma estable de la definición: hash del JSON canónico de la lista
    /// ordenada de nombres. Cambia si se agrega, quita, renombra o reordena
    /// un step.
    pub fn definition_hash(&self) -> String {
        let names: Vec<Value> = self.steps.keys().map(|k| Value::String(k.clone())).collect();
        hash_value(&Value::Array(names))
    }

    /// Dirección efectiva de un salto directo según el orden de los steps.
    pub fn detect_direct_navigation_direction(&self,
                                              current_step_name: &str,
                                              target_step_name: &str)
                                              -> Result<NavigationDirection, FlowError> {
        let target_index = self.require_index(target_step_name)?;
        let current_index = self.require_index(current_step_name)?;
        Ok(match target_index.cmp(&current_index) {
            Ordering::Less => NavigationDirection::Back,
            Ordering::Greater => NavigationDirection::Next,
            Ordering::Equal => NavigationDirection::Direct,
        })
    }

    /// Step elegible más cercano antes de `current_step_name`.
    pub fn resolve_previous_step_name(&self,
                                      navigation: &NavigationResponse,
                                      current_step_name: &str,
                                      data: &T::Data,
                                      gate: &EligibilityGate<'_, T>)
                                      -> Result<String, FlowError> {
        let current_index = self.require_index(current_step_name)?;
        for index in (0..current_index).rev() {
            if let Some(name) = self.eligible_name_at(index, navigation, data, gate)? {
                return Ok(name);
            }
        }
        Err(FlowError::NoPreviousStepEligible)
    }

    /// Step elegible más cercano después de `current_step_name`.
    pub fn resolve_next_step_name(&self,
                                  navigation: &NavigationResponse,
                                  current_step_name: &str,
                                  data: &T::Data,
                                  gate: &EligibilityGate<'_, T>)
                                  -> Result<String, FlowError> {
        let current_index = self.require_index(current_step_name)?;
        for index in current_index + 1..self.steps.len() {
            if let Some(name) = self.eligible_name_at(index, navigation, data, gate)? {
                return Ok(name);
            }
        }
        Err(FlowError::NoNextStepEligible)
    }

    /// Primer step elegible del flujo.
    pub fn resolve_first_eligible_step_name(&self,
                                            navigation: &NavigationResponse,
                                            data: &T::Data,
                                            gate: &EligibilityGate<'_, T>)
                                            -> Result<String, FlowError> {
        for index in 0..self.steps.len() {
            if let Some(name) = self.eligible_name_at(index, navigation, data, gate)? {
                return Ok(name);
            }
        }
        Err(FlowError::NoEligibleStep)
    }

    fn eligible_name_at(&self,
                        index: usize,
                        navigation: &NavigationResponse,
                        data: &T::Data,
                        gate: &EligibilityGate<'_, T>)
                        -> Result<Option<String>, FlowError> {
        let Some((name, _)) = self.steps.get_index(index) else {
            return Ok(None);
        };
        if gate.is_step_eligible(self, name, navigation, data)? {
            Ok(Some(name.clone()))
        } else {
            Ok(None)
        }
    }

    /// Steps entre `start_step_name` y el destino de `navigation`, en el
    /// orden del recorrido (descendente si el destino está antes).
    ///
    /// El inicio siempre se incluye; el destino se excluye con
    /// `exclude_destination`. Una dirección BACK/NEXT que contradice el orden
    /// de los índices es un error.
    pub fn get_range(&self,
                     start_step_name: &str,
                     navigation: &NavigationResponse,
                     data: &T::Data,
                     gate: &EligibilityGate<'_, T>,
                     exclude_destination: bool,
                     exclude_non_eligible: bool)
                     -> Result<IndexMap<String, StepRef<T>>, FlowError> {
        let target_step_name = navigation.target_step_name().ok_or(FlowError::MissingRangeTarget)?;
        let start_index = self.require_index(start_step_name)?;
        let target_index = self.require_index(target_step_name)?;

        if let Some(direction) = navigation.direction() {
            let consistent = match direction {
                NavigationDirection::Back => target_index <= start_index,
                NavigationDirection::Next => target_index >= start_index,
                NavigationDirection::Direct => true,
            };
            if !consistent {
                return Err(FlowError::InconsistentRange { direction,
                                                          start: start_step_name.to_string(),
                                                          target: target_step_name.to_string() });
            }
        }

        let mut indices: Vec<usize> = if target_index >= start_index {
            (start_index..=target_index).collect()
        } else {
            (target_index..=start_index).rev().collect()
        };
        if exclude_destination {
            indices.pop();
        }

        let mut range = IndexMap::with_capacity(indices.len());
        for index in indices {
            let Some((name, step)) = self.steps.get_index(index) else {
                continue;
            };
            if !exclude_non_eligible || gate.is_step_eligible(self, name, navigation, data)? {
                range.insert(name.clone(), Arc::clone(step));
            }
        }
        Ok(range)
    }
}

impl<'a, T: FlowTypes> IntoIterator for &'a FlattenedFlow<T> {
    type Item = (&'a String, &'a StepRef<T>);
    type IntoIter = indexmap::map::Iter<'a, String, StepRef<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
