//! End-to-end tests for the event-to-speech pipeline

use std::sync::{Arc, Mutex};

use application::{
    DiagnosticsPort, DispatchController, DispatchOutcome, ReadingConfig, ReadingService,
    SearchStrategy, TextLocator,
};
use async_trait::async_trait;
use domain::entities::{UiEvent, UiEventKind, UiNode, UtteranceStatus};
use domain::value_objects::{ScreenId, WidgetClass};
use proptest::prelude::*;
use tts_engine::{
    Credentials, Engine, EngineConfig, OnlineParams, SynthesisBackend, SynthesisParams, TtsMode,
};

const TARGET_SCREEN: &str = "com.example.chat.TextPreview";
const TARGET_WIDGET: &str = "android.widget.TextView";

/// Backend replaying a script of status codes, one per speak call
struct ScriptedBackend {
    script: Mutex<Vec<i32>>,
    spoken: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    fn new(script: Vec<i32>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script),
            spoken: Mutex::new(Vec::new()),
        })
    }

    fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }
}

#[async_trait]
impl SynthesisBackend for ScriptedBackend {
    async fn speak(&self, text: &str) -> i32 {
        self.spoken.lock().unwrap().push(text.to_string());
        let mut script = self.script.lock().unwrap();
        if script.is_empty() { 0 } else { script.remove(0) }
    }

    async fn stop(&self) {}

    async fn release(&self) {}
}

/// Diagnostics sink collecting every report for later assertions
#[derive(Default)]
struct CollectingDiagnostics {
    entries: Mutex<Vec<String>>,
}

impl CollectingDiagnostics {
    fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

impl DiagnosticsPort for CollectingDiagnostics {
    fn report_status(&self, operation: &str, code: i32) {
        self.entries
            .lock()
            .unwrap()
            .push(format!("error code :{code} method:{operation}"));
    }

    fn report_message(&self, operation: &str, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push(format!("{operation}: {message}"));
    }
}

fn online_config() -> EngineConfig {
    EngineConfig {
        mode: TtsMode::Online,
        credentials: Credentials {
            app_id: "id".to_string(),
            app_key: "key".to_string(),
            secret_key: "secret".to_string(),
            auth_code: None,
        },
        params: SynthesisParams::Online(OnlineParams::default()),
    }
}

fn service_with(
    backend: Arc<ScriptedBackend>,
    diagnostics: Arc<CollectingDiagnostics>,
) -> ReadingService {
    let (engine, _events) = Engine::initialize(online_config(), backend).unwrap();
    let dispatcher = DispatchController::new(engine, diagnostics);
    let config = ReadingConfig::parse(TARGET_SCREEN, TARGET_WIDGET).unwrap();
    ReadingService::new(config, dispatcher)
}

fn class(name: &str) -> WidgetClass {
    WidgetClass::new(name).unwrap()
}

fn text_view(text: &str) -> UiNode {
    UiNode::new(class(TARGET_WIDGET)).with_text(text)
}

fn layout(children: Vec<UiNode>) -> UiNode {
    UiNode::new(class("android.widget.FrameLayout")).with_children(children)
}

fn window_event(screen: &str, root: UiNode) -> UiEvent {
    UiEvent::new(UiEventKind::WindowStateChanged, ScreenId::new(screen).unwrap()).with_root(root)
}

#[tokio::test]
async fn window_change_on_target_screen_reads_the_preview_text() {
    let backend = ScriptedBackend::new(vec![0]);
    let diagnostics = Arc::new(CollectingDiagnostics::default());
    let service = service_with(Arc::clone(&backend), Arc::clone(&diagnostics));

    let event = window_event(TARGET_SCREEN, layout(vec![text_view("Hello")]));
    let outcome = service.handle_event(&event).await;

    match outcome {
        Some(DispatchOutcome::Spoken(utterance)) => {
            assert_eq!(utterance.text, "Hello");
            assert_eq!(utterance.status, UtteranceStatus::Spoken);
        }
        other => unreachable!("unexpected outcome: {other:?}"),
    }
    assert_eq!(backend.spoken(), vec!["Hello".to_string()]);
    assert!(diagnostics.entries().is_empty());
}

#[tokio::test]
async fn stream_of_mixed_events_triggers_exactly_the_matching_ones() {
    let backend = ScriptedBackend::new(vec![0, 0]);
    let diagnostics = Arc::new(CollectingDiagnostics::default());
    let service = service_with(Arc::clone(&backend), diagnostics);

    let events = vec![
        window_event("com.example.OtherScreen", layout(vec![text_view("skip")])),
        window_event(TARGET_SCREEN, layout(vec![text_view("first")])),
        UiEvent::new(
            UiEventKind::WindowContentChanged,
            ScreenId::new(TARGET_SCREEN).unwrap(),
        )
        .with_root(layout(vec![text_view("skip too")])),
        window_event(TARGET_SCREEN, layout(vec![text_view("second")])),
    ];

    for event in &events {
        service.handle_event(event).await;
    }

    assert_eq!(
        backend.spoken(),
        vec!["first".to_string(), "second".to_string()]
    );
}

#[tokio::test]
async fn engine_status_failure_is_logged_and_the_next_event_still_reads() {
    let backend = ScriptedBackend::new(vec![7, 0]);
    let diagnostics = Arc::new(CollectingDiagnostics::default());
    let service = service_with(Arc::clone(&backend), Arc::clone(&diagnostics));

    let failed = service
        .handle_event(&window_event(TARGET_SCREEN, layout(vec![text_view("one")])))
        .await;
    assert!(matches!(failed, Some(DispatchOutcome::Dropped(_))));
    assert_eq!(
        diagnostics.entries(),
        vec!["error code :7 method:speak".to_string()]
    );

    // The pipeline recovers for the next event
    let spoken = service
        .handle_event(&window_event(TARGET_SCREEN, layout(vec![text_view("two")])))
        .await;
    assert!(matches!(spoken, Some(DispatchOutcome::Spoken(_))));
    assert_eq!(backend.spoken(), vec!["one".to_string(), "two".to_string()]);
}

#[tokio::test]
async fn overlong_text_is_logged_and_never_reaches_the_backend() {
    let backend = ScriptedBackend::new(vec![]);
    let diagnostics = Arc::new(CollectingDiagnostics::default());
    let service = service_with(Arc::clone(&backend), Arc::clone(&diagnostics));

    let long_text = "长".repeat(600);
    let outcome = service
        .handle_event(&window_event(TARGET_SCREEN, layout(vec![text_view(&long_text)])))
        .await;

    assert!(matches!(outcome, Some(DispatchOutcome::Dropped(_))));
    assert!(backend.spoken().is_empty());
    assert_eq!(diagnostics.entries().len(), 1);
    assert!(diagnostics.entries()[0].starts_with("dispatch:"));
}

#[tokio::test]
async fn shutdown_makes_every_later_event_a_logged_drop() {
    let backend = ScriptedBackend::new(vec![0]);
    let diagnostics = Arc::new(CollectingDiagnostics::default());
    let service = service_with(Arc::clone(&backend), Arc::clone(&diagnostics));

    let before = service
        .handle_event(&window_event(TARGET_SCREEN, layout(vec![text_view("before")])))
        .await;
    assert!(matches!(before, Some(DispatchOutcome::Spoken(_))));

    service.shutdown().await;

    for text in ["after one", "after two"] {
        let outcome = service
            .handle_event(&window_event(TARGET_SCREEN, layout(vec![text_view(text)])))
            .await;
        assert!(matches!(outcome, Some(DispatchOutcome::Dropped(_))));
    }

    // Only the pre-shutdown text reached the backend
    assert_eq!(backend.spoken(), vec!["before".to_string()]);
    assert_eq!(diagnostics.entries().len(), 2);
}

#[tokio::test]
async fn event_pump_observes_the_full_synthesis_order() {
    let backend = ScriptedBackend::new(vec![0]);
    let (engine, events) = Engine::initialize(online_config(), backend).unwrap();
    let dispatcher =
        DispatchController::new(engine, Arc::new(CollectingDiagnostics::default()));
    let config = ReadingConfig::parse(TARGET_SCREEN, TARGET_WIDGET).unwrap();
    let service = ReadingService::new(config, dispatcher);

    let pump = DispatchController::spawn_event_pump(events);
    service
        .handle_event(&window_event(TARGET_SCREEN, layout(vec![text_view("Hello")])))
        .await;

    drop(service);
    pump.await.unwrap();
}

mod locator_properties {
    use super::*;

    fn arb_node() -> impl Strategy<Value = UiNode> {
        let classes = prop_oneof![
            Just("android.widget.FrameLayout"),
            Just("android.widget.LinearLayout"),
            Just("android.widget.ImageView"),
            Just(TARGET_WIDGET),
        ];
        let leaf = (classes, proptest::option::of("[a-z]{1,8}")).prop_map(|(class_name, text)| {
            let node = UiNode::new(class(class_name));
            match text {
                Some(text) => node.with_text(text),
                None => node,
            }
        });
        leaf.prop_recursive(4, 24, 3, |inner| {
            (
                Just("android.widget.FrameLayout"),
                proptest::collection::vec(inner, 0..3),
            )
                .prop_map(|(class_name, children)| {
                    UiNode::new(class(class_name)).with_children(children)
                })
        })
    }

    fn tree_contains_target(node: &UiNode) -> bool {
        node.children.iter().any(|child| {
            child.class.as_str() == TARGET_WIDGET || tree_contains_target(child)
        })
    }

    proptest! {
        /// A match from either strategy always carries the target class
        /// and is a strict descendant of the root.
        #[test]
        fn any_match_has_the_target_class(root in arb_node()) {
            for strategy in [SearchStrategy::FirstChildOnly, SearchStrategy::AllChildren] {
                let locator = TextLocator::new(class(TARGET_WIDGET)).with_strategy(strategy);
                if let Some(found) = locator.find_speakable(Some(&root)) {
                    prop_assert_eq!(found.class.as_str(), TARGET_WIDGET);
                    prop_assert!(!std::ptr::eq(found, &root));
                }
            }
        }

        /// The full-tree strategy finds a target exactly when one exists
        /// below the root (trees here are well within the depth ceiling).
        #[test]
        fn all_children_finds_iff_target_exists(root in arb_node()) {
            let locator = TextLocator::new(class(TARGET_WIDGET))
                .with_strategy(SearchStrategy::AllChildren);
            prop_assert_eq!(
                locator.find_speakable(Some(&root)).is_some(),
                tree_contains_target(&root)
            );
        }

        /// First-child search never finds anything the full search misses.
        #[test]
        fn first_child_is_a_restriction_of_all_children(root in arb_node()) {
            let first = TextLocator::new(class(TARGET_WIDGET));
            let all = TextLocator::new(class(TARGET_WIDGET))
                .with_strategy(SearchStrategy::AllChildren);
            if first.find_speakable(Some(&root)).is_some() {
                prop_assert!(all.find_speakable(Some(&root)).is_some());
            }
        }
    }
}
