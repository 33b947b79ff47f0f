mod common;

use std::sync::{Arc, Mutex};

use common::{manager, next, three_steps, TestData, TestFlow};
use wiz_core::{AscertainStepEligibilityEvent, EligibilityGate, EventDispatcher, FlattenedFlow, FlowError, FlowEvent,
               NavigationResponse};

#[test]
fn verdict_starts_with_native_predicate_and_combines_with_and() {
    let flow = FlattenedFlow::compile("root", &three_steps([None, None, None]));
    let mut data = TestData::default();
    data.set_ineligible(&["step2"]);
    let nav = NavigationResponse::next();

    let step = flow.get_step("root.step1").unwrap();
    let mut event = AscertainStepEligibilityEvent::new(None, &flow, &data, &nav, step.as_ref(), "root.step1");
    assert!(event.is_eligible());
    event.push_eligibility_test_result(true);
    assert!(event.is_eligible());
    event.push_eligibility_test_result(false);
    event.push_eligibility_test_result(true);
    assert!(!event.is_eligible());
    event.force_eligible();
    assert!(event.is_eligible());

    let step = flow.get_step("root.step2").unwrap();
    let event = AscertainStepEligibilityEvent::new(Some("root.step1"), &flow, &data, &nav, step.as_ref(), "root.step2");
    assert!(!event.is_eligible());
    assert_eq!(event.step_name(), "root.step2");
    assert_eq!(event.current_step_name(), Some("root.step1"));
}

#[test]
fn listener_veto_redirects_next_navigation() {
    let mut dispatcher = EventDispatcher::<TestFlow>::new();
    dispatcher.on_ascertain_step_eligibility(|event| {
                  if event.step_name() == "root.step2" {
                      event.mark_as_non_eligible();
                  }
              });
    let mut manager = manager(Some("root.step1"), [next(), None, None]).with_dispatcher(dispatcher);
    assert_eq!(manager.handle_request(&"req".to_string()).unwrap(), "flow manager - response (root.step3)");
    assert_eq!(manager.host().data.calls, ["step1.handle", "step1.on_next", "step2.on_skipped"]);
}

#[test]
fn listener_can_force_a_natively_ineligible_step() {
    let mut dispatcher = EventDispatcher::<TestFlow>::new();
    dispatcher.on_ascertain_step_eligibility(|event| event.force_eligible());
    let mut manager = manager(Some("root.step1"), [next(), None, None]).with_dispatcher(dispatcher);
    manager.host_mut().data.set_ineligible(&["step2"]);
    assert_eq!(manager.handle_request(&"req".to_string()).unwrap(), "flow manager - response (root.step2)");
}

#[test]
fn stopped_propagation_keeps_the_current_verdict() {
    let mut dispatcher = EventDispatcher::<TestFlow>::new();
    dispatcher.on_ascertain_step_eligibility(|event| {
                  event.mark_as_non_eligible();
                  event.stop_propagation();
              })
              .on_ascertain_step_eligibility(|event| event.force_eligible());

    let flow = FlattenedFlow::compile("root", &three_steps([None, None, None]));
    let data = TestData::default();
    let gate = EligibilityGate::new(Some(&dispatcher), None);
    assert!(!gate.is_step_eligible(&flow, "root.step1", &NavigationResponse::next(), &data).unwrap());
    assert!(EligibilityGate::native().is_step_eligible(&flow, "root.step1", &NavigationResponse::next(), &data)
                                     .unwrap());
}

#[test]
fn eligibility_events_report_the_processed_step() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut dispatcher = EventDispatcher::<TestFlow>::new();
    dispatcher.on_ascertain_step_eligibility(move |event| {
                  sink.lock()
                      .unwrap()
                      .push(format!("{:?}->{}", event.current_step_name(), event.step_name()));
              });

    let mut manager = manager(Some("root.step2"), [None, next(), None]).with_dispatcher(dispatcher);
    manager.handle_request(&"req".to_string()).unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.first().map(String::as_str), Some("Some(\"root.step2\")->root.step3"));
    assert!(seen.iter().all(|s| s.starts_with("Some(\"root.step2\")")));
}

#[test]
fn direct_target_vetoed_by_listener() {
    let mut dispatcher = EventDispatcher::<TestFlow>::new();
    dispatcher.on_ascertain_step_eligibility(|event| {
                  if event.step_name() == "root.step3" {
                      event.mark_as_non_eligible();
                  }
              });
    let mut manager = manager(Some("root.step1"), [common::direct("root.step3"), None, None]).with_dispatcher(dispatcher);
    assert_eq!(manager.handle_request(&"req".to_string()).unwrap_err(),
               FlowError::TargetNotEligible("root.step3".into()));
}
