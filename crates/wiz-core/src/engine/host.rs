use crate::navigation::ResolvedNavigationResponse;
use crate::step::FlowTypes;

/// Puntos de extensión que el motor delega en su anfitrión.
pub trait FlowHost<T: FlowTypes> {
    /// Step actual persistido, o `None` si todavía no hay ninguno.
    fn current_step_name(&self) -> Option<String>;

    /// Persiste el step actual tras una navegación.
    fn set_current_step_name(&mut self, step_name: &str);

    fn data(&self) -> &T::Data;

    fn data_mut(&mut self) -> &mut T::Data;

    /// Respuesta que el llamador recibe tras una navegación (p. ej. una redirección).
    fn navigation_response(&mut self, request: &T::Request, navigation: &ResolvedNavigationResponse) -> T::Response;
}
