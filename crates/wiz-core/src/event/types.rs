use crate::flow::FlattenedFlow;
use crate::navigation::NavigationResponse;
use crate::step::{FlowResponse, FlowTypes, Step};

/// Contexto común de todos los eventos del motor.
pub trait FlowEvent<T: FlowTypes> {
    /// Step que se está procesando (ausente mientras se determina el inicial).
    fn current_step_name(&self) -> Option<&str>;

    fn flattened_flow(&self) -> &FlattenedFlow<T>;

    fn is_propagation_stopped(&self) -> bool;

    /// Impide que los listeners restantes reciban el evento.
    fn stop_propagation(&mut self);
}

/// Consulta de elegibilidad de un step.
///
/// El veredicto empieza en `true` y se combina con AND con el predicado
/// nativo del step; los listeners lo refinan con los métodos de abajo.
pub struct AscertainStepEligibilityEvent<'a, T: FlowTypes> {
    current_step_name: Option<&'a str>,
    flattened_flow: &'a FlattenedFlow<T>,
    data: &'a T::Data,
    navigation: &'a NavigationResponse,
    step: &'a dyn Step<T>,
    step_name: &'a str,
    is_eligible: bool,
    propagation_stopped: bool,
}

impl<'a, T: FlowTypes> AscertainStepEligibilityEvent<'a, T> {
    pub fn new(current_step_name: Option<&'a str>,
               flattened_flow: &'a FlattenedFlow<T>,
               data: &'a T::Data,
               navigation: &'a NavigationResponse,
               step: &'a dyn Step<T>,
               step_name: &'a str)
               -> Self {
        let mut event = Self { current_step_name,
                               flattened_flow,
                               data,
                               navigation,
                               step,
                               step_name,
                               is_eligible: true,
                               propagation_stopped: false };
        event.push_eligibility_test_result(step.is_eligible_for_navigation(navigation, data));
        event
    }

    pub fn data(&self) -> &T::Data {
        self.data
    }

    pub fn navigation(&self) -> &NavigationResponse {
        self.navigation
    }

    pub fn step(&self) -> &dyn Step<T> {
        self.step
    }

    /// Nombre completamente calificado del step consultado.
    pub fn step_name(&self) -> &str {
        self.step_name
    }

    pub fn is_eligible(&self) -> bool {
        self.is_eligible
    }

    pub fn mark_as_non_eligible(&mut self) {
        self.is_eligible = false;
    }

    /// Anula cualquier veto previo, incluido el del propio step.
    pub fn force_eligible(&mut self) {
        self.is_eligible = true;
    }

    /// Combina (AND) un resultado con el veredicto acumulado.
    pub fn push_eligibility_test_result(&mut self, result: bool) {
        self.is_eligible = self.is_eligible && result;
    }
}

impl<T: FlowTypes> FlowEvent<T> for AscertainStepEligibilityEvent<'_, T> {
    fn current_step_name(&self) -> Option<&str> {
        self.current_step_name
    }

    fn flattened_flow(&self) -> &FlattenedFlow<T> {
        self.flattened_flow
    }

    fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

/// Evento previo/posterior a la invocación del step actual.
///
/// En el evento previo la respuesta empieza vacía; en el posterior contiene
/// la respuesta del step (o del evento previo).
pub struct FlowRequestEvent<'a, T: FlowTypes> {
    current_step_name: &'a str,
    flattened_flow: &'a FlattenedFlow<T>,
    data: &'a mut T::Data,
    request: &'a T::Request,
    response: Option<FlowResponse<T::Response>>,
    propagation_stopped: bool,
}

impl<'a, T: FlowTypes> FlowRequestEvent<'a, T> {
    pub fn new(current_step_name: &'a str,
               flattened_flow: &'a FlattenedFlow<T>,
               data: &'a mut T::Data,
               request: &'a T::Request,
               response: Option<FlowResponse<T::Response>>)
               -> Self {
        Self { current_step_name,
               flattened_flow,
               data,
               request,
               response,
               propagation_stopped: false }
    }

    pub fn request(&self) -> &T::Request {
        self.request
    }

    pub fn data(&self) -> &T::Data {
        &*self.data
    }

    pub fn data_mut(&mut self) -> &mut T::Data {
        &mut *self.data
    }

    pub fn response(&self) -> Option<&FlowResponse<T::Response>> {
        self.response.as_ref()
    }

    pub fn has_response(&self) -> bool {
        self.response.is_some()
    }

    pub fn set_response(&mut self, response: impl Into<FlowResponse<T::Response>>) {
        self.response = Some(response.into());
    }

    pub fn clear_response(&mut self) {
        self.response = None;
    }

    /// Consume el evento y libera el préstamo sobre los datos.
    pub fn into_response(self) -> Option<FlowResponse<T::Response>> {
        self.response
    }
}

impl<T: FlowTypes> FlowEvent<T> for FlowRequestEvent<'_, T> {
    fn current_step_name(&self) -> Option<&str> {
        Some(self.current_step_name)
    }

    fn flattened_flow(&self) -> &FlattenedFlow<T> {
        self.flattened_flow
    }

    fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}
