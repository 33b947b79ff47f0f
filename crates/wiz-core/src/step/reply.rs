use crate::navigation::{NavigationIntent, NavigationResponse, ResolvedNavigationResponse};

/// Respuesta de un step o de un listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowResponse<R> {
    /// Respuesta terminal: se devuelve al llamador sin navegar.
    Response(R),
    /// Intención de navegación (resuelta o no).
    Navigation(NavigationIntent),
}

impl<R> FlowResponse<R> {
    #[inline]
    pub fn navigate(intent: impl Into<NavigationIntent>) -> Self {
        FlowResponse::Navigation(intent.into())
    }

    #[inline]
    pub fn back() -> Self {
        Self::navigate(NavigationResponse::back())
    }

    #[inline]
    pub fn next() -> Self {
        Self::navigate(NavigationResponse::next())
    }

    #[inline]
    pub fn direct(target: impl Into<String>) -> Self {
        Self::navigate(NavigationResponse::direct(target))
    }

    pub fn is_navigation(&self) -> bool {
        matches!(self, FlowResponse::Navigation(_))
    }

    pub fn navigation(&self) -> Option<&NavigationIntent> {
        match self {
            FlowResponse::Navigation(intent) => Some(intent),
            FlowResponse::Response(_) => None,
        }
    }

    pub fn response(&self) -> Option<&R> {
        match self {
            FlowResponse::Response(r) => Some(r),
            FlowResponse::Navigation(_) => None,
        }
    }
}

impl<R> From<NavigationResponse> for FlowResponse<R> {
    fn from(navigation: NavigationResponse) -> Self {
        FlowResponse::navigate(navigation)
    }
}

impl<R> From<ResolvedNavigationResponse> for FlowResponse<R> {
    fn from(resolved: ResolvedNavigationResponse) -> Self {
        FlowResponse::navigate(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_and_terminal_replies_are_told_apart() {
        let reply: FlowResponse<String> = FlowResponse::direct("w.b");
        assert!(reply.is_navigation());
        assert_eq!(reply.navigation().and_then(|n| n.target_step_name()), Some("w.b"));
        assert_eq!(reply.response(), None);

        let reply = FlowResponse::Response("page".to_string());
        assert!(!reply.is_navigation());
        assert_eq!(reply.response().map(String::as_str), Some("page"));
    }
}
