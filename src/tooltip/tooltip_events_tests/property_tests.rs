//! Property tests for the five tooltip transition rules

use proptest::prelude::*;

use super::*;

fn source_strategy() -> impl Strategy<Value = EventSource> {
    prop_oneof![Just(EventSource::Trigger), Just(EventSource::Tooltip)]
}

fn key_strategy() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        Just(KeyCode::Esc),
        Just(KeyCode::Enter),
        Just(KeyCode::Tab),
        any::<char>().prop_map(KeyCode::Char),
    ]
}

fn modifier_strategy() -> impl Strategy<Value = KeyModifiers> {
    prop_oneof![
        Just(KeyModifiers::SHIFT),
        Just(KeyModifiers::CONTROL),
        Just(KeyModifiers::ALT),
        Just(KeyModifiers::SHIFT | KeyModifiers::CONTROL),
        Just(KeyModifiers::CONTROL | KeyModifiers::ALT),
    ]
}

fn event_strategy() -> impl Strategy<Value = TooltipEvent> {
    prop_oneof![
        Just(TooltipEvent::PointerEnter),
        Just(TooltipEvent::PointerLeave),
        Just(TooltipEvent::FocusGain),
        Just(TooltipEvent::FocusLoss),
        key_strategy().prop_map(|code| TooltipEvent::KeyDown(key(code))),
        (key_strategy(), modifier_strategy())
            .prop_map(|(code, mods)| TooltipEvent::KeyDown(key_with_mods(code, mods))),
    ]
}

fn history_strategy() -> impl Strategy<Value = Vec<(EventSource, TooltipEvent)>> {
    prop::collection::vec((source_strategy(), event_strategy()), 0..24)
}

fn replay(history: &[(EventSource, TooltipEvent)]) -> TooltipController<RecordingSurface> {
    let mut controller = test_controller();
    for (source, event) in history {
        controller.dispatch(*source, *event);
    }
    controller
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Pointer-enter always reveals the tooltip
    #[test]
    fn prop_show_on_enter(history in history_strategy(), source in source_strategy()) {
        let mut controller = replay(&history);

        let result = controller.dispatch(source, TooltipEvent::PointerEnter);

        prop_assert_eq!(result, Propagation::Stop);
        prop_assert!(controller.surface().visible);
        prop_assert!(controller.hover_active());
    }

    // Focus-gain always reveals the tooltip
    #[test]
    fn prop_show_on_focus(history in history_strategy(), source in source_strategy()) {
        let mut controller = replay(&history);

        let result = controller.dispatch(source, TooltipEvent::FocusGain);

        prop_assert_eq!(result, Propagation::Stop);
        prop_assert!(controller.surface().visible);
        prop_assert!(controller.focus_active());
    }

    // Focus held without dismissal keeps the tooltip open through a pointer-leave
    #[test]
    fn prop_leave_respects_focus(history in history_strategy(), source in source_strategy()) {
        let mut controller = replay(&history);
        controller.dispatch(EventSource::Tooltip, TooltipEvent::FocusLoss);
        controller.dispatch(source, TooltipEvent::FocusGain);
        prop_assert!(controller.focus_active() && !controller.dismissed_by_escape());

        controller.dispatch(source, TooltipEvent::PointerLeave);

        prop_assert!(controller.surface().visible);
        prop_assert!(!controller.hover_active());
    }

    // Without focus, pointer-leave always hides
    #[test]
    fn prop_leave_hides_without_focus(history in history_strategy(), source in source_strategy()) {
        let mut controller = replay(&history);
        controller.dispatch(EventSource::Tooltip, TooltipEvent::FocusLoss);
        prop_assert!(!controller.focus_active());

        controller.dispatch(source, TooltipEvent::PointerLeave);

        prop_assert!(!controller.surface().visible);
        prop_assert!(!controller.hover_active());
    }

    // Escape overrides the focus guard on the next pointer-leave
    #[test]
    fn prop_escape_then_leave_hides(history in history_strategy(), source in source_strategy()) {
        let mut controller = replay(&history);
        controller.dispatch(source, TooltipEvent::FocusGain);
        controller.dispatch(source, TooltipEvent::KeyDown(key(KeyCode::Esc)));
        controller.dispatch(EventSource::Tooltip, TooltipEvent::PointerEnter);

        controller.dispatch(EventSource::Tooltip, TooltipEvent::PointerLeave);

        prop_assert!(controller.focus_active());
        prop_assert!(!controller.surface().visible);
    }

    // Hover keeps the tooltip open through the tooltip's blur
    #[test]
    fn prop_blur_respects_hover(history in history_strategy()) {
        let mut controller = replay(&history);
        controller.dispatch(EventSource::Tooltip, TooltipEvent::PointerEnter);

        controller.dispatch(EventSource::Tooltip, TooltipEvent::FocusLoss);

        prop_assert!(controller.surface().visible);
        prop_assert!(!controller.focus_active());
        prop_assert!(!controller.dismissed_by_escape());
    }

    // Without hover, the tooltip's blur hides and resets
    #[test]
    fn prop_blur_hides_without_hover(history in history_strategy()) {
        let mut controller = replay(&history);
        controller.dispatch(EventSource::Trigger, TooltipEvent::PointerLeave);
        prop_assert!(!controller.hover_active());

        controller.dispatch(EventSource::Tooltip, TooltipEvent::FocusLoss);

        prop_assert!(!controller.surface().visible);
        prop_assert!(!controller.focus_active());
        prop_assert!(!controller.dismissed_by_escape());
    }

    // Shift, Ctrl and Alt make every key inert
    #[test]
    fn prop_modifier_keys_inert(
        history in history_strategy(),
        source in source_strategy(),
        code in key_strategy(),
        mods in modifier_strategy(),
    ) {
        let mut controller = replay(&history);
        let flags = controller.flags();
        let calls = controller.surface().calls.len();

        let result = controller.dispatch(source, TooltipEvent::KeyDown(key_with_mods(code, mods)));

        prop_assert_eq!(result, Propagation::Continue);
        prop_assert_eq!(controller.flags(), flags);
        prop_assert_eq!(controller.surface().calls.len(), calls);
    }
}
