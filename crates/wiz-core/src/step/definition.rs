use std::sync::Arc;

use super::FlowResponse;
use crate::navigation::NavigationResponse;

/// Tipos concretos con los que trabaja un flujo.
///
/// El motor no inspecciona ninguno de ellos: la petición se pasa tal cual a
/// los steps, la respuesta se devuelve al llamador y los datos son el estado
/// mutable compartido que ve cada predicado de elegibilidad.
pub trait FlowTypes: 'static {
    type Request;
    type Response;
    type Data;
}

/// Trait que define un step del asistente.
pub trait Step<T: FlowTypes>: Send + Sync {
    /// Procesa la petición. `None` es un error de lógica en el motor.
    fn handle_request(&self,
                      request: &T::Request,
                      navigation: &NavigationResponse,
                      data: &mut T::Data)
                      -> Option<FlowResponse<T::Response>>;

    /// Predicado de elegibilidad. Debe ser puro respecto a `data`.
    fn is_eligible_for_navigation(&self, _navigation: &NavigationResponse, _data: &T::Data) -> bool {
        true
    }

    /// Se invoca al abandonar el step hacia atrás.
    fn on_back(&self, _request: &T::Request, _data: &mut T::Data) {}

    /// Se invoca al abandonar el step hacia adelante.
    fn on_next(&self, _request: &T::Request, _data: &mut T::Data) {}

    /// Se invoca cuando un recorrido pasa por el step siendo no elegible.
    fn on_skipped(&self, _request: &T::Request, _navigation: &NavigationResponse, _data: &mut T::Data) {}
}

/// Referencia compartida a un step (el árbol y la vista aplanada comparten instancias).
pub type StepRef<T> = Arc<dyn Step<T>>;
