//! Core FlowManager implementation

use log::{debug, trace, warn};
use once_cell::unsync::OnceCell;
use std::sync::Arc;

use super::FlowHost;
use crate::constants::{PATH_SEPARATOR, PLACEHOLDER_MARKER};
use crate::errors::FlowError;
use crate::event::{EventDispatcher, FlowRequestEvent};
use crate::flow::{EligibilityGate, FlattenedFlow, NavigationResolver};
use crate::navigation::{NavigationDirection, NavigationIntent, NavigationResponse, ResolvedNavigationResponse};
use crate::step::{FlowResponse, FlowTypes, Step, StepCollection};

/// Motor de navegación de un asistente.
///
/// Cada llamada a `handle_request` determina el step actual, invoca los
/// listeners previos, el step y los listeners posteriores, resuelve la
/// navegación, dispara los hooks del recorrido y persiste el nuevo step
/// actual a través del `FlowHost`.
pub struct FlowManager<T, H>
    where T: FlowTypes,
          H: FlowHost<T>
{
    key: String,
    items: StepCollection<T>,
    flattened_flow: OnceCell<FlattenedFlow<T>>,
    current_navigation_response: Option<ResolvedNavigationResponse>,
    current_processed_step_name: Option<String>,
    dispatcher: Option<EventDispatcher<T>>,
    host: H,
}

impl<T, H> FlowManager<T, H>
    where T: FlowTypes,
          H: FlowHost<T>
{
    /// Crea el motor. La clave no puede contener `.` ni `%` y el árbol debe
    /// tener al menos un step hoja.
    pub fn new(key: impl Into<String>, items: StepCollection<T>, host: H) -> Result<Self, FlowError> {
        let key = key.into();
        if key.contains(PATH_SEPARATOR) {
            return Err(FlowError::FlowKeyContainsDot(key));
        }
        if key.contains(PLACEHOLDER_MARKER) {
            return Err(FlowError::FlowKeyContainsPercent(key));
        }
        if items.step_count() == 0 {
            return Err(FlowError::EmptyStepCollection);
        }
        Ok(Self { key,
                  items,
                  flattened_flow: OnceCell::new(),
                  current_navigation_response: None,
                  current_processed_step_name: None,
                  dispatcher: None,
                  host })
    }

    #[inline]
    pub fn with_dispatcher(mut self, dispatcher: EventDispatcher<T>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn items(&self) -> &StepCollection<T> {
        &self.items
    }

    /// Vista aplanada, construida en el primer acceso y reutilizada después.
    pub fn flattened_flow(&self) -> &FlattenedFlow<T> {
        self.flattened_flow
            .get_or_init(|| FlattenedFlow::compile(&self.key, &self.items))
    }

    pub fn dispatcher(&self) -> Option<&EventDispatcher<T>> {
        self.dispatcher.as_ref()
    }

    pub fn dispatcher_mut(&mut self) -> Option<&mut EventDispatcher<T>> {
        self.dispatcher.as_mut()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Navegación vigente. Sin navegación previa es DIRECT sin destino.
    pub fn current_navigation_response(&self) -> NavigationResponse {
        current_navigation(&self.current_navigation_response)
    }

    pub fn resolved_navigation_response(&self) -> Option<&ResolvedNavigationResponse> {
        self.current_navigation_response.as_ref()
    }

    pub fn set_current_navigation_response(&mut self, navigation: ResolvedNavigationResponse) {
        self.current_navigation_response = Some(navigation);
    }

    /// Step actual, o el primer step elegible si el anfitrión no tiene uno.
    pub fn resolved_current_step_name(&self) -> Result<String, FlowError> {
        resolve_current_step_name(self.flattened_flow(),
                                  self.dispatcher.as_ref(),
                                  self.current_processed_step_name.as_deref(),
                                  &self.host)
    }

    pub fn is_step_eligible_for_navigation(&self,
                                           step_name: &str,
                                           navigation: &NavigationResponse)
                                           -> Result<bool, FlowError> {
        self.gate().is_step_eligible(self.flattened_flow(), step_name, navigation, self.host.data())
    }

    /// Resuelve una intención relativa a `current_step_name` sin navegar.
    pub fn resolve_navigation_response(&self,
                                       intent: impl Into<NavigationIntent>,
                                       current_step_name: &str)
                                       -> Result<ResolvedNavigationResponse, FlowError> {
        NavigationResolver::new(&self.key, self.flattened_flow(), self.gate()).resolve(intent.into(),
                                                                                     current_step_name,
                                                                                     self.host.data())
    }

    fn gate(&self) -> EligibilityGate<'_, T> {
        EligibilityGate::new(self.dispatcher.as_ref(), self.current_processed_step_name.as_deref())
    }

    /// Procesa una petición completa.
    pub fn handle_request(&mut self, request: &T::Request) -> Result<T::Response, FlowError> {
        let Self { key,
                   items,
                   flattened_flow,
                   current_navigation_response,
                   current_processed_step_name,
                   dispatcher,
                   host } = self;
        let key = key.as_str();
        let items = &*items;
        let flow = flattened_flow.get_or_init(|| FlattenedFlow::compile(key, items));
        let dispatcher = dispatcher.as_ref();

        let current_step_name =
            resolve_current_step_name(flow, dispatcher, current_processed_step_name.as_deref(), &*host)?;
        *current_processed_step_name = Some(current_step_name.clone());
        trace!("handle request flow={} step={}", key, current_step_name);

        let mut cycle = RequestCycle { root_key: key,
                                       flow,
                                       dispatcher,
                                       host,
                                       cached_navigation: current_navigation_response,
                                       current_step_name: &current_step_name };
        cycle.run(request).map_err(|err| {
                              warn!("request failed flow={} step={} error={}", key, current_step_name, err);
                              err
                          })
    }
}

fn current_navigation(cached: &Option<ResolvedNavigationResponse>) -> NavigationResponse {
    match cached {
        Some(resolved) => resolved.as_navigation_response(),
        None => NavigationResponse::new(Some(NavigationDirection::Direct), None),
    }
}

fn resolve_current_step_name<T, H>(flow: &FlattenedFlow<T>,
                                   dispatcher: Option<&EventDispatcher<T>>,
                                   processed_step_name: Option<&str>,
                                   host: &H)
                                   -> Result<String, FlowError>
    where T: FlowTypes,
          H: FlowHost<T>
{
    match host.current_step_name() {
        Some(name) => Ok(name),
        None => {
            let initial = NavigationResponse::new(Some(NavigationDirection::Direct), None);
            let gate = EligibilityGate::new(dispatcher, processed_step_name);
            flow.resolve_first_eligible_step_name(&initial, host.data(), &gate)
        }
    }
}

/// Resultado intermedio de una petición: respuesta terminal o navegación ya resuelta.
enum Handled<R> {
    Response(R),
    Navigation(ResolvedNavigationResponse),
}

/// Préstamos de una sola petición sobre las partes del `FlowManager`.
struct RequestCycle<'a, T, H>
    where T: FlowTypes,
          H: FlowHost<T>
{
    root_key: &'a str,
    flow: &'a FlattenedFlow<T>,
    dispatcher: Option<&'a EventDispatcher<T>>,
    host: &'a mut H,
    cached_navigation: &'a mut Option<ResolvedNavigationResponse>,
    current_step_name: &'a str,
}

impl<'a, T, H> RequestCycle<'a, T, H>
    where T: FlowTypes,
          H: FlowHost<T>
{
    fn run(&mut self, request: &T::Request) -> Result<T::Response, FlowError> {
        let current_step = Arc::clone(self.flow.get_step(self.current_step_name)?);

        let pre = self.raise_pre_handle_event(request)?;
        let handled = self.do_handle_request(request, pre, current_step.as_ref())?;
        let handled = self.raise_post_handle_event(request, handled)?;

        let resolved = match handled {
            Handled::Response(response) => return Ok(response),
            Handled::Navigation(resolved) => resolved,
        };

        self.fire_traversal_hooks(request, &resolved)?;
        self.host.set_current_step_name(resolved.target_step_name());
        debug!("navigated from={} to={} direction={}",
               self.current_step_name,
               resolved.target_step_name(),
               resolved.direction());
        Ok(self.host.navigation_response(request, &resolved))
    }

    fn gate(&self) -> EligibilityGate<'a, T> {
        EligibilityGate::new(self.dispatcher, Some(self.current_step_name))
    }

    fn resolve_and_cache(&mut self, intent: NavigationIntent) -> Result<ResolvedNavigationResponse, FlowError> {
        let resolver = NavigationResolver::new(self.root_key, self.flow, self.gate());
        let resolved = resolver.resolve(intent, self.current_step_name, self.host.data())?;
        *self.cached_navigation = Some(resolved.clone());
        Ok(resolved)
    }

    fn raise_pre_handle_event(&mut self, request: &T::Request) -> Result<Option<Handled<T::Response>>, FlowError> {
        let Some(dispatcher) = self.dispatcher else {
            return Ok(None);
        };
        let mut event = FlowRequestEvent::new(self.current_step_name, self.flow, self.host.data_mut(), request, None);
        dispatcher.dispatch_pre_handle_request(&mut event);

        match event.into_response() {
            Some(FlowResponse::Navigation(intent)) => Ok(Some(Handled::Navigation(self.resolve_and_cache(intent)?))),
            Some(FlowResponse::Response(response)) => Ok(Some(Handled::Response(response))),
            None => Ok(None),
        }
    }

    fn do_handle_request(&mut self,
                         request: &T::Request,
                         pre: Option<Handled<T::Response>>,
                         step: &dyn Step<T>)
                         -> Result<Handled<T::Response>, FlowError> {
        if let Some(handled) = pre {
            return Ok(handled);
        }

        let navigation = current_navigation(&*self.cached_navigation);
        match step.handle_request(request, &navigation, self.host.data_mut()) {
            Some(FlowResponse::Navigation(intent)) => Ok(Handled::Navigation(self.resolve_and_cache(intent)?)),
            Some(FlowResponse::Response(response)) => Ok(Handled::Response(response)),
            None => Err(FlowError::MissingStepResponse(self.current_step_name.to_string())),
        }
    }

    fn raise_post_handle_event(&mut self,
                               request: &T::Request,
                               handled: Handled<T::Response>)
                               -> Result<Handled<T::Response>, FlowError> {
        let Some(dispatcher) = self.dispatcher else {
            return Ok(handled);
        };
        let (original, original_navigation) = match handled {
            Handled::Response(response) => (FlowResponse::Response(response), None),
            Handled::Navigation(resolved) => (FlowResponse::navigate(resolved.clone()), Some(resolved)),
        };
        let mut event =
            FlowRequestEvent::new(self.current_step_name, self.flow, self.host.data_mut(), request, Some(original));
        dispatcher.dispatch_post_handle_request(&mut event);

        match event.into_response() {
            Some(FlowResponse::Navigation(intent)) => {
                // La misma navegación se resuelve de nuevo: los datos pudieron cambiar.
                let intent = match intent {
                    NavigationIntent::Resolved(resolved) if original_navigation.as_ref() == Some(&resolved) => {
                        NavigationIntent::Unresolved(resolved.to_unresolved_navigation_response())
                    }
                    other => other,
                };
                Ok(Handled::Navigation(self.resolve_and_cache(intent)?))
            }
            Some(FlowResponse::Response(response)) => Ok(Handled::Response(response)),
            None => Err(FlowError::ResponseCleared),
        }
    }

    /// Hooks de los steps que se abandonan: el inicio incluido, el destino no.
    fn fire_traversal_hooks(&mut self, request: &T::Request, resolved: &ResolvedNavigationResponse) -> Result<(), FlowError> {
        let direction = resolved.direction();
        if direction == NavigationDirection::Direct {
            return Ok(());
        }
        let navigation = resolved.as_navigation_response();
        let gate = self.gate();
        let range = self.flow
                        .get_range(self.current_step_name, &navigation, self.host.data(), &gate, true, false)?;

        for (name, step) in range.iter() {
            if gate.is_step_eligible(self.flow, name, &navigation, self.host.data())? {
                trace!("hook on_{} step={}", direction, name);
                match direction {
                    NavigationDirection::Back => step.on_back(request, self.host.data_mut()),
                    NavigationDirection::Next => step.on_next(request, self.host.data_mut()),
                    NavigationDirection::Direct => {}
                }
            } else {
                trace!("hook on_skipped step={}", name);
                step.on_skipped(request, &navigation, self.host.data_mut());
            }
        }
        Ok(())
    }
}
