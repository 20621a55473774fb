use super::*;
use crate::{
    deck::{SlideDef, StaticDeck},
    input::{InputEvent, InputProvider, MockInput},
    observe::NavigationObserver,
    render::AnimationKind,
};

const TEST_SLIDES: [SlideDef; 9] = [
    SlideDef {
        title: "Opening",
        category: "title",
    },
    SlideDef {
        title: "Constitutional Basis",
        category: "foundations",
    },
    SlideDef {
        title: "The Act",
        category: "statute",
    },
    SlideDef {
        title: "Institutions",
        category: "institutions",
    },
    SlideDef {
        title: "Key Provisions",
        category: "provisions",
    },
    SlideDef {
        title: "Exemptions",
        category: "exemptions",
    },
    SlideDef {
        title: "Landmark Judgments",
        category: "case_law",
    },
    SlideDef {
        title: "Challenges",
        category: "challenges",
    },
    SlideDef {
        title: "Closing",
        category: "closing",
    },
];

const fn test_deck() -> StaticDeck {
    StaticDeck::new(&TEST_SLIDES, &[], &[])
}

struct ScriptedInput<'a> {
    events: &'a [InputEvent],
    cursor: usize,
}

impl<'a> ScriptedInput<'a> {
    const fn new(events: &'a [InputEvent]) -> Self {
        Self { events, cursor: 0 }
    }
}

impl InputProvider for ScriptedInput<'_> {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        let Some(event) = self.events.get(self.cursor).copied() else {
            return Ok(None);
        };
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(event))
    }
}

#[derive(Default)]
struct RecordingObserver {
    changed: heapless::Vec<u16, 64>,
    settled: heapless::Vec<u16, 64>,
}

impl NavigationObserver for RecordingObserver {
    fn on_slide_changed(&mut self, position: u16) {
        let _ = self.changed.push(position);
    }

    fn on_transition_settled(&mut self, position: u16) {
        let _ = self.settled.push(position);
    }
}

fn make_app(
    start_position: u16,
) -> PresenterApp<StaticDeck, MockInput, RecordingObserver> {
    let config = NavigatorConfig {
        start_position,
        ..NavigatorConfig::default()
    };
    PresenterApp::new(
        test_deck(),
        MockInput::new(),
        RecordingObserver::default(),
        config,
    )
}

fn events(app: &mut PresenterApp<StaticDeck, MockInput, RecordingObserver>) -> (usize, usize) {
    app.with_observers(|obs| (obs.changed.len(), obs.settled.len()))
}

#[test]
fn next_from_first_slide_commits_and_notifies() {
    let mut app = make_app(1);

    let outcome = app.request_next(0);

    assert_eq!(outcome, RequestOutcome::Committed);
    assert_eq!(app.position(), 2);
    assert!(app.is_locked());
    app.with_observers(|obs| {
        assert_eq!(obs.changed.as_slice(), &[2]);
        assert!(obs.settled.is_empty());
    });
}

#[test]
fn slide_changed_fires_before_any_tick() {
    let mut app = make_app(1);

    // No tick between the request and the assertion: emission is part of
    // the request itself.
    let _ = app.request_go_to(4, 50);
    app.with_observers(|obs| assert_eq!(obs.changed.as_slice(), &[4]));
}

#[test]
fn next_at_last_slide_is_dropped() {
    let mut app = make_app(9);

    let outcome = app.request_next(0);

    assert_eq!(outcome, RequestOutcome::Ignored(IgnoreReason::OutOfRange));
    assert_eq!(app.position(), 9);
    assert!(!app.is_locked());
    assert_eq!(events(&mut app), (0, 0));
}

#[test]
fn previous_at_first_slide_is_dropped() {
    let mut app = make_app(1);

    let outcome = app.request_previous(0);

    assert_eq!(outcome, RequestOutcome::Ignored(IgnoreReason::OutOfRange));
    assert_eq!(app.position(), 1);
    assert_eq!(events(&mut app), (0, 0));
}

#[test]
fn go_to_current_slide_is_a_noop() {
    let mut app = make_app(5);

    let outcome = app.request_go_to(5, 0);

    assert_eq!(outcome, RequestOutcome::Ignored(IgnoreReason::AlreadyCurrent));
    assert_eq!(events(&mut app), (0, 0));
}

#[test]
fn go_to_outside_deck_is_dropped() {
    let mut app = make_app(3);

    assert_eq!(
        app.request_go_to(0, 0),
        RequestOutcome::Ignored(IgnoreReason::OutOfRange)
    );
    assert_eq!(
        app.request_go_to(12, 0),
        RequestOutcome::Ignored(IgnoreReason::OutOfRange)
    );
    assert_eq!(app.position(), 3);
    assert_eq!(events(&mut app), (0, 0));
}

#[test]
fn second_request_inside_settle_window_is_busy() {
    let mut app = make_app(1);

    assert_eq!(app.request_go_to(5, 0), RequestOutcome::Committed);
    assert_eq!(
        app.request_go_to(7, 120),
        RequestOutcome::Ignored(IgnoreReason::Busy)
    );
    assert_eq!(app.position(), 5);

    let _ = app.tick(300);
    app.with_observers(|obs| {
        assert_eq!(obs.changed.as_slice(), &[5]);
        assert_eq!(obs.settled.as_slice(), &[5]);
    });

    // The same request is accepted once the window has closed.
    assert_eq!(app.request_go_to(7, 310), RequestOutcome::Committed);
    assert_eq!(app.position(), 7);
}

#[test]
fn lock_releases_only_at_its_own_deadline() {
    let mut app = make_app(1);

    let _ = app.request_next(0);
    assert!(app.is_locked());

    let _ = app.tick(299);
    assert!(app.is_locked());
    app.with_observers(|obs| assert!(obs.settled.is_empty()));

    let _ = app.tick(300);
    assert!(!app.is_locked());
    app.with_observers(|obs| assert_eq!(obs.settled.as_slice(), &[2]));

    // Later ticks do not settle again.
    let _ = app.tick(900);
    app.with_observers(|obs| assert_eq!(obs.settled.len(), 1));
}

#[test]
fn accepted_request_emits_exactly_one_change_and_one_settle() {
    let mut app = make_app(1);

    let _ = app.request_next(0);
    let _ = app.tick(100);
    let _ = app.tick(200);
    let _ = app.tick(300);
    let _ = app.tick(400);

    assert_eq!(events(&mut app), (1, 1));
}

#[test]
fn repeated_go_to_is_idempotent_after_settle() {
    let mut app = make_app(1);

    assert_eq!(app.request_go_to(5, 0), RequestOutcome::Committed);
    let _ = app.tick(300);

    assert_eq!(
        app.request_go_to(5, 400),
        RequestOutcome::Ignored(IgnoreReason::AlreadyCurrent)
    );
    assert_eq!(app.position(), 5);
    assert_eq!(events(&mut app), (1, 1));
}

#[test]
fn position_never_leaves_deck_bounds() {
    let mut app = make_app(1);
    let mut now = 0u64;

    for _ in 0..30 {
        let _ = app.request_next(now);
        now += 300;
        let _ = app.tick(now);
        assert!((1..=9).contains(&app.position()));
    }
    assert_eq!(app.position(), 9);

    for _ in 0..30 {
        let _ = app.request_previous(now);
        now += 300;
        let _ = app.tick(now);
        assert!((1..=9).contains(&app.position()));
    }
    assert_eq!(app.position(), 1);
}

#[test]
fn scripted_burst_applies_only_the_first_event() {
    let script = [InputEvent::Next, InputEvent::Next, InputEvent::GoTo(8)];
    let input = ScriptedInput::new(&script);
    let mut app = PresenterApp::new(
        test_deck(),
        input,
        RecordingObserver::default(),
        NavigatorConfig::default(),
    );

    // All three events drain inside one tick; the lock taken by the first
    // commit rejects the rest of the burst.
    let result = app.tick(0);

    assert_eq!(result, TickResult::RenderRequested);
    assert_eq!(app.position(), 2);
    app.with_observers(|obs| assert_eq!(obs.changed.as_slice(), &[2]));
}

#[test]
fn first_and_last_shortcuts_jump_to_deck_edges() {
    let mut app = make_app(5);

    assert_eq!(app.request_last(0), RequestOutcome::Committed);
    assert_eq!(app.position(), 9);
    let _ = app.tick(300);

    assert_eq!(app.request_first(400), RequestOutcome::Committed);
    assert_eq!(app.position(), 1);
}

#[test]
fn category_jump_targets_first_matching_slide() {
    let mut app = make_app(1);

    assert_eq!(
        app.request_jump_to_category("case_law", 0),
        RequestOutcome::Committed
    );
    assert_eq!(app.position(), 7);

    let _ = app.tick(300);
    assert_eq!(
        app.request_jump_to_category("no_such_tag", 400),
        RequestOutcome::Ignored(IgnoreReason::OutOfRange)
    );
    assert_eq!(app.position(), 7);
}

#[test]
fn start_position_is_clamped_into_deck() {
    let app = make_app(0);
    assert_eq!(app.position(), 1);

    let app = make_app(99);
    assert_eq!(app.position(), 9);
}

#[test]
fn view_reflects_navigation_state() {
    let mut app = make_app(1);

    app.with_view(0, |view| {
        assert_eq!(view.position, 1);
        assert_eq!(view.slide_total, 9);
        assert_eq!(view.title, "Opening");
        assert_eq!(view.progress_pct, 11);
        assert!(!view.can_retreat);
        assert!(view.can_advance);
        assert!(!view.locked);
        assert_eq!(view.animation, None);
    });

    let _ = app.request_next(0);
    app.with_view(150, |view| {
        assert_eq!(view.position, 2);
        assert_eq!(view.title, "Constitutional Basis");
        assert!(view.can_retreat);
        assert!(view.locked);
        let frame = view.animation.expect("transition in flight");
        assert_eq!(frame.kind, AnimationKind::SlideLeft);
        assert_eq!(frame.progress_pct, 50);
    });

    let _ = app.tick(300);
    app.with_view(300, |view| {
        assert!(!view.locked);
        assert_eq!(view.animation, None);
    });
}

#[test]
fn last_slide_view_disables_advance_and_fills_progress() {
    let app = make_app(9);

    app.with_view(0, |view| {
        assert_eq!(view.progress_pct, 100);
        assert!(view.can_retreat);
        assert!(!view.can_advance);
    });
}

#[test]
fn empty_deck_behaves_as_a_single_slide() {
    let deck = StaticDeck::new(&[], &[], &[]);
    let mut app = PresenterApp::new(
        deck,
        MockInput::new(),
        RecordingObserver::default(),
        NavigatorConfig::default(),
    );

    assert_eq!(app.position(), 1);
    assert_eq!(app.slide_total(), 1);
    assert_eq!(
        app.request_next(0),
        RequestOutcome::Ignored(IgnoreReason::OutOfRange)
    );
    app.with_view(0, |view| {
        assert_eq!(view.title, "Untitled");
        assert_eq!(view.progress_pct, 100);
    });
}

#[test]
fn provider_error_is_nonfatal() {
    struct FailingInput;

    impl InputProvider for FailingInput {
        type Error = &'static str;

        fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
            Err("disconnected")
        }
    }

    let mut app = PresenterApp::new(
        test_deck(),
        FailingInput,
        RecordingObserver::default(),
        NavigatorConfig::default(),
    );

    // First tick renders the initial state; the provider error only stops
    // the drain.
    assert_eq!(app.tick(0), TickResult::RenderRequested);
    assert_eq!(app.tick(16), TickResult::NoRender);
    assert_eq!(app.position(), 1);
}
