use serde::{Deserialize, Serialize};

use super::NavigationDirection;
use crate::constants::STAY_TARGET;

/// Intención de navegación tal como la expresa un step o un listener.
///
/// Ambos campos son opcionales: BACK/NEXT no necesitan destino y DIRECT sí.
/// Una respuesta sin dirección no es resoluble.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationResponse {
    direction: Option<NavigationDirection>,
    target_step_name: Option<String>,
}

impl NavigationResponse {
    pub fn new(direction: Option<NavigationDirection>, target_step_name: Option<String>) -> Self {
        Self { direction,
               target_step_name }
    }

    #[inline]
    pub fn back() -> Self {
        Self::new(Some(NavigationDirection::Back), None)
    }

    #[inline]
    pub fn next() -> Self {
        Self::new(Some(NavigationDirection::Next), None)
    }

    /// DIRECT hacia `target`. Acepta un nombre completo, `%root%.…` o `.`.
    #[inline]
    pub fn direct(target: impl Into<String>) -> Self {
        Self::new(Some(NavigationDirection::Direct), Some(target.into()))
    }

    /// DIRECT hacia el step actual.
    #[inline]
    pub fn stay() -> Self {
        Self::direct(STAY_TARGET)
    }

    pub fn direction(&self) -> Option<NavigationDirection> {
        self.direction
    }

    pub fn target_step_name(&self) -> Option<&str> {
        self.target_step_name.as_deref()
    }

    /// Copia con la dirección reemplazada.
    pub fn with_direction(&self, direction: NavigationDirection) -> Self {
        Self::new(Some(direction), self.target_step_name.clone())
    }
}

/// Navegación resuelta: dirección efectiva, destino completamente calificado
/// y si la intención original fue DIRECT.
///
/// Solo la resolución del motor construye valores de este tipo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedNavigationResponse {
    direction: NavigationDirection,
    target_step_name: String,
    was_direct: bool,
}

impl ResolvedNavigationResponse {
    pub(crate) fn new(direction: NavigationDirection, target_step_name: String, was_direct: bool) -> Self {
        Self { direction,
               target_step_name,
               was_direct }
    }

    pub fn direction(&self) -> NavigationDirection {
        self.direction
    }

    pub fn target_step_name(&self) -> &str {
        &self.target_step_name
    }

    pub fn was_direct(&self) -> bool {
        self.was_direct
    }

    /// Vista no resuelta con la misma dirección y destino.
    pub fn as_navigation_response(&self) -> NavigationResponse {
        NavigationResponse::new(Some(self.direction), Some(self.target_step_name.clone()))
    }

    /// Reconstruye la intención original: DIRECT hacia el destino si lo fue,
    /// si no la dirección sin destino.
    pub fn to_unresolved_navigation_response(&self) -> NavigationResponse {
        if self.was_direct {
            NavigationResponse::direct(self.target_step_name.clone())
        } else {
            NavigationResponse::new(Some(self.direction), None)
        }
    }
}

impl From<&ResolvedNavigationResponse> for NavigationResponse {
    fn from(resolved: &ResolvedNavigationResponse) -> Self {
        resolved.as_navigation_response()
    }
}

/// Navegación devuelta por un step o listener, resuelta o no.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    Unresolved(NavigationResponse),
    Resolved(ResolvedNavigationResponse),
}

impl NavigationIntent {
    pub fn is_resolved(&self) -> bool {
        matches!(self, NavigationIntent::Resolved(_))
    }

    pub fn direction(&self) -> Option<NavigationDirection> {
        match self {
            NavigationIntent::Unresolved(n) => n.direction(),
            NavigationIntent::Resolved(r) => Some(r.direction()),
        }
    }

    pub fn target_step_name(&self) -> Option<&str> {
        match self {
            NavigationIntent::Unresolved(n) => n.target_step_name(),
            NavigationIntent::Resolved(r) => Some(r.target_step_name()),
        }
    }
}

impl From<NavigationResponse> for NavigationIntent {
    fn from(navigation: NavigationResponse) -> Self {
        NavigationIntent::Unresolved(navigation)
    }
}

impl From<ResolvedNavigationResponse> for NavigationIntent {
    fn from(resolved: ResolvedNavigationResponse) -> Self {
        NavigationIntent::Resolved(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_round_trip_keeps_original_intent() {
        let resolved = ResolvedNavigationResponse::new(NavigationDirection::Next, "w.b".into(), false);
        assert_eq!(resolved.to_unresolved_navigation_response(), NavigationResponse::next());

        let resolved = ResolvedNavigationResponse::new(NavigationDirection::Back, "w.a".into(), true);
        assert_eq!(resolved.to_unresolved_navigation_response(), NavigationResponse::direct("w.a"));
    }

    #[test]
    fn intent_reports_resolution_state() {
        let resolved = ResolvedNavigationResponse::new(NavigationDirection::Back, "w.a".into(), false);
        let intent = NavigationIntent::from(resolved);
        assert!(intent.is_resolved());
        assert_eq!(intent.target_step_name(), Some("w.a"));

        let intent = NavigationIntent::from(NavigationResponse::next());
        assert!(!intent.is_resolved());
        assert_eq!(intent.direction(), Some(NavigationDirection::Next));
        assert_eq!(intent.target_step_name(), None);
    }

    #[test]
    fn default_response_has_no_direction_and_no_target() {
        let r = NavigationResponse::default();
        assert_eq!(r.direction(), None);
        assert_eq!(r.target_step_name(), None);
        assert_eq!(NavigationResponse::stay().target_step_name(), Some("."));
    }

    #[test]
    fn direction_serializes_lowercase() {
        let s = serde_json::to_string(&NavigationDirection::Direct).unwrap();
        assert_eq!(s, "\"direct\"");
    }
}
