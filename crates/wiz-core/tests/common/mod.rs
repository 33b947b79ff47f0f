//! Fixtures compartidos: un flujo de tres steps con respuestas programadas y
//! un anfitrión en memoria que registra cada llamada.
#![allow(dead_code)]

use std::collections::BTreeSet;

use wiz_core::{FlowHost, FlowManager, FlowResponse, FlowTypes, NavigationResponse, ResolvedNavigationResponse,
               Step, StepCollection};

pub struct TestFlow;

impl FlowTypes for TestFlow {
    type Request = String;
    type Response = String;
    type Data = TestData;
}

#[derive(Debug, Default)]
pub struct TestData {
    /// Claves cortas de steps no elegibles ("step2").
    pub ineligible: BTreeSet<String>,
    /// Registro de llamadas: "step1.handle", "step2.on_back", ...
    pub calls: Vec<String>,
}

impl TestData {
    pub fn count(&self, call: &str) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn set_ineligible(&mut self, keys: &[&str]) {
        self.ineligible = keys.iter().map(|k| k.to_string()).collect();
    }
}

/// Step que devuelve siempre la misma respuesta programada.
pub struct ScriptedStep {
    pub key: &'static str,
    pub reply: Option<FlowResponse<String>>,
}

impl ScriptedStep {
    pub fn new(key: &'static str, reply: Option<FlowResponse<String>>) -> Self {
        Self { key, reply }
    }
}

impl Step<TestFlow> for ScriptedStep {
    fn handle_request(&self,
                      _request: &String,
                      _navigation: &NavigationResponse,
                      data: &mut TestData)
                      -> Option<FlowResponse<String>> {
        data.calls.push(format!("{}.handle", self.key));
        self.reply.clone()
    }

    fn is_eligible_for_navigation(&self, _navigation: &NavigationResponse, data: &TestData) -> bool {
        !data.ineligible.contains(self.key)
    }

    fn on_back(&self, _request: &String, data: &mut TestData) {
        data.calls.push(format!("{}.on_back", self.key));
    }

    fn on_next(&self, _request: &String, data: &mut TestData) {
        data.calls.push(format!("{}.on_next", self.key));
    }

    fn on_skipped(&self, _request: &String, _navigation: &NavigationResponse, data: &mut TestData) {
        data.calls.push(format!("{}.on_skipped", self.key));
    }
}

#[derive(Debug, Default)]
pub struct TestHost {
    pub current: Option<String>,
    pub data: TestData,
    pub navigation_responses: usize,
}

impl FlowHost<TestFlow> for TestHost {
    fn current_step_name(&self) -> Option<String> {
        self.current.clone()
    }

    fn set_current_step_name(&mut self, step_name: &str) {
        self.current = Some(step_name.to_string());
    }

    fn data(&self) -> &TestData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut TestData {
        &mut self.data
    }

    fn navigation_response(&mut self, _request: &String, navigation: &ResolvedNavigationResponse) -> String {
        self.navigation_responses += 1;
        format!("flow manager - response ({})", navigation.target_step_name())
    }
}

/// `root.step1`, `root.step2`, `root.step3` con las respuestas dadas.
pub fn three_steps(replies: [Option<FlowResponse<String>>; 3]) -> StepCollection<TestFlow> {
    let mut items = StepCollection::new();
    for (key, reply) in ["step1", "step2", "step3"].into_iter().zip(replies) {
        items.add_step(key, ScriptedStep::new(key, reply)).expect("valid key");
    }
    items
}

pub fn manager(current: Option<&str>, replies: [Option<FlowResponse<String>>; 3]) -> FlowManager<TestFlow, TestHost> {
    let host = TestHost { current: current.map(str::to_string),
                          ..TestHost::default() };
    FlowManager::new("root", three_steps(replies), host).expect("valid flow")
}

pub fn text(body: &str) -> Option<FlowResponse<String>> {
    Some(FlowResponse::Response(body.to_string()))
}

pub fn back() -> Option<FlowResponse<String>> {
    Some(FlowResponse::back())
}

pub fn next() -> Option<FlowResponse<String>> {
    Some(FlowResponse::next())
}

pub fn direct(target: &str) -> Option<FlowResponse<String>> {
    Some(FlowResponse::direct(target))
}
