use log::debug;

use super::{EligibilityGate, FlattenedFlow};
use crate::constants::{ROOT_PLACEHOLDER, STAY_TARGET};
use crate::errors::FlowError;
use crate::navigation::{NavigationDirection, NavigationIntent, NavigationResponse, ResolvedNavigationResponse};
use crate::step::FlowTypes;

/// Resolución de intenciones de navegación contra un flujo aplanado.
pub struct NavigationResolver<'a, T: FlowTypes> {
    root_key: &'a str,
    flow: &'a FlattenedFlow<T>,
    gate: EligibilityGate<'a, T>,
}

impl<'a, T: FlowTypes> NavigationResolver<'a, T> {
    pub fn new(root_key: &'a str, flow: &'a FlattenedFlow<T>, gate: EligibilityGate<'a, T>) -> Self {
        Self { root_key,
               flow,
               gate }
    }

    /// Resuelve `intent` relativo a `current_step_name`.
    ///
    /// - Ya resuelta: se devuelve sin cambios.
    /// - BACK/NEXT: step elegible más cercano en esa dirección.
    /// - DIRECT: `.` es el step actual y `%root%` se sustituye por la clave
    ///   raíz; la dirección efectiva sale de comparar índices y el destino
    ///   debe ser elegible.
    /// - Sin dirección: error.
    pub fn resolve(&self,
                   intent: NavigationIntent,
                   current_step_name: &str,
                   data: &T::Data)
                   -> Result<ResolvedNavigationResponse, FlowError> {
        let navigation = match intent {
            NavigationIntent::Resolved(resolved) => return Ok(resolved),
            NavigationIntent::Unresolved(navigation) => navigation,
        };

        let resolved = match navigation.direction() {
            Some(NavigationDirection::Back) => {
                let target = self.flow
                                 .resolve_previous_step_name(&navigation, current_step_name, data, &self.gate)?;
                ResolvedNavigationResponse::new(NavigationDirection::Back, target, false)
            }
            Some(NavigationDirection::Next) => {
                let target = self.flow
                                 .resolve_next_step_name(&navigation, current_step_name, data, &self.gate)?;
                ResolvedNavigationResponse::new(NavigationDirection::Next, target, false)
            }
            Some(NavigationDirection::Direct) => self.resolve_direct(&navigation, current_step_name, data)?,
            None => return Err(FlowError::UnresolvableNavigation),
        };
        debug!("resolved navigation from={} direction={} target={} was_direct={}",
               current_step_name,
               resolved.direction(),
               resolved.target_step_name(),
               resolved.was_direct());
        Ok(resolved)
    }

    fn resolve_direct(&self,
                      navigation: &NavigationResponse,
                      current_step_name: &str,
                      data: &T::Data)
                      -> Result<ResolvedNavigationResponse, FlowError> {
        let requested = navigation.target_step_name().ok_or(FlowError::MissingDirectTarget)?;
        let target = if requested == STAY_TARGET {
            current_step_name.to_string()
        } else {
            requested.replace(ROOT_PLACEHOLDER, self.root_key)
        };

        let direction = self.flow.detect_direct_navigation_direction(current_step_name, &target)?;
        let probe = navigation.with_direction(direction);
        if !self.gate.is_step_eligible(self.flow, &target, &probe, data)? {
            return Err(FlowError::TargetNotEligible(target));
        }
        Ok(ResolvedNavigationResponse::new(direction, target, true))
    }
}
