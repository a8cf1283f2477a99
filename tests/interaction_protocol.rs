use inkguide::guides::controller::{
    DragState, InteractionController, PointerButton, PointerEvent, PointerModifiers,
};
use inkguide::guides::{
    CommandQueue, Guide, GuideCommand, GuideStore, HitTestConfig, Orientation, OverlayState,
    SurfaceSize,
};

const SURFACE: SurfaceSize = SurfaceSize::new(1280, 720);

fn click(button: PointerButton, point: (i32, i32)) -> PointerEvent {
    PointerEvent::ButtonDown {
        button,
        point,
        modifiers: PointerModifiers::default(),
    }
}

fn settings_mode_with(guides: Vec<Guide>) -> (GuideStore, InteractionController) {
    let mut store = GuideStore::with_guides(guides);
    let mut controller = InteractionController::new(HitTestConfig::default(), SURFACE);
    controller.set_interactive(&mut store, true);
    (store, controller)
}

#[test]
fn click_to_start_then_click_to_finish() {
    let (mut store, mut controller) = settings_mode_with(vec![Guide::vertical(100)]);
    assert_eq!(controller.drag_state(&store), DragState::Idle);

    controller.handle_event(&mut store, click(PointerButton::Primary, (105, 300)));
    assert_eq!(controller.drag_state(&store), DragState::Dragging(0));

    // Releasing the button does not end the drag.
    controller.handle_event(
        &mut store,
        PointerEvent::ButtonUp {
            button: PointerButton::Primary,
            point: (105, 300),
        },
    );
    controller.handle_event(&mut store, PointerEvent::Move { point: (240, 10) });
    controller.handle_event(&mut store, PointerEvent::Move { point: (260, 500) });
    assert_eq!(controller.drag_state(&store), DragState::Dragging(0));

    controller.handle_event(&mut store, click(PointerButton::Primary, (900, 900)));

    assert_eq!(controller.drag_state(&store), DragState::Idle);
    assert_eq!(store.hover_index(), None);
    assert_eq!(store.guides()[0].position, 260);
}

#[test]
fn drag_past_the_surface_edge_clamps_to_the_last_pixel() {
    let (mut store, mut controller) =
        settings_mode_with(vec![Guide::vertical(100), Guide::horizontal(50)]);

    controller.handle_event(&mut store, click(PointerButton::Primary, (100, 400)));
    controller.handle_event(
        &mut store,
        PointerEvent::Move {
            point: (SURFACE.width + 50, 400),
        },
    );
    controller.handle_event(&mut store, click(PointerButton::Primary, (0, 0)));
    assert_eq!(store.guides()[0].position, SURFACE.width - 1);

    controller.handle_event(&mut store, click(PointerButton::Primary, (600, 55)));
    controller.handle_event(&mut store, PointerEvent::Move { point: (600, -40) });
    controller.handle_event(&mut store, click(PointerButton::Primary, (0, 0)));
    assert_eq!(store.guides()[1].position, 0);
}

#[test]
fn deleting_the_dragged_guide_returns_to_idle() {
    let (mut store, mut controller) =
        settings_mode_with(vec![Guide::vertical(100), Guide::vertical(400)]);

    controller.handle_event(&mut store, click(PointerButton::Primary, (402, 10)));
    assert_eq!(controller.drag_state(&store), DragState::Dragging(1));

    controller.handle_event(&mut store, click(PointerButton::Secondary, (410, 10)));

    assert_eq!(controller.drag_state(&store), DragState::Idle);
    assert_eq!(store.positioning_index(), None);
    assert_eq!(store.hover_index(), None);
    assert_eq!(store.guides(), &[Guide::vertical(100)]);
}

#[test]
fn drag_radius_boundary_is_inclusive() {
    let (mut store, mut controller) = settings_mode_with(vec![Guide::horizontal(200)]);

    controller.handle_event(&mut store, click(PointerButton::Primary, (10, 221)));
    assert_eq!(controller.drag_state(&store), DragState::Idle);

    controller.handle_event(&mut store, click(PointerButton::Primary, (10, 220)));
    assert_eq!(controller.drag_state(&store), DragState::Dragging(0));
}

#[test]
fn hover_follows_the_pointer_with_the_smaller_radius() {
    let (mut store, mut controller) = settings_mode_with(vec![Guide::vertical(100)]);

    controller.handle_event(&mut store, PointerEvent::Move { point: (118, 5) });
    assert_eq!(store.hover_index(), None);

    controller.handle_event(&mut store, PointerEvent::Move { point: (115, 5) });
    assert_eq!(store.hover_index(), Some(0));

    controller.handle_event(&mut store, PointerEvent::Leave);
    assert_eq!(store.hover_index(), None);
}

#[test]
fn middle_click_adds_a_guide_through_the_dispatcher() {
    let mut state = OverlayState::new(HitTestConfig::default(), SURFACE);
    state.apply(GuideCommand::SetSettingsMode(true));

    let vertical = state.handle_pointer(click(PointerButton::Middle, (320, 200)));
    let horizontal = state.handle_pointer(PointerEvent::ButtonDown {
        button: PointerButton::Middle,
        point: (320, 200),
        modifiers: PointerModifiers { shift: true },
    });

    for command in [vertical, horizontal].into_iter().flatten() {
        state.apply(command);
    }

    let added: Vec<(Orientation, i32)> = state
        .store
        .guides()
        .iter()
        .map(|g| (g.orientation, g.position))
        .collect();
    assert_eq!(
        added,
        vec![(Orientation::Vertical, 320), (Orientation::Horizontal, 200)]
    );
    assert_eq!(state.store.guides()[0].style(), state.defaults());
}

#[test]
fn leaving_settings_mode_mid_drag_keeps_the_last_position() {
    let mut state = OverlayState::new(HitTestConfig::default(), SURFACE);
    state.store.add(Guide::vertical(100));
    state.apply(GuideCommand::ToggleSettingsMode);

    state.handle_pointer(click(PointerButton::Primary, (100, 10)));
    state.handle_pointer(PointerEvent::Move { point: (150, 10) });
    state.apply(GuideCommand::ToggleSettingsMode);
    state.handle_pointer(PointerEvent::Move { point: (400, 10) });

    assert!(!state.settings_mode());
    assert_eq!(state.store.positioning_index(), None);
    assert_eq!(state.store.guides()[0].position, 150);
}

#[test]
fn hidden_guides_cannot_be_deleted_or_dragged() {
    let mut state = OverlayState::new(HitTestConfig::default(), SURFACE);
    state.store.add(Guide::vertical(100));
    state.apply(GuideCommand::ToggleGuidesVisible);
    state.apply(GuideCommand::SetSettingsMode(true));

    state.apply(GuideCommand::Pointer(click(PointerButton::Secondary, (100, 5))));
    assert_eq!(state.store.len(), 1);

    state.apply(GuideCommand::Pointer(click(PointerButton::Primary, (100, 5))));
    state.apply(GuideCommand::Pointer(PointerEvent::Move { point: (300, 5) }));
    assert_eq!(state.store.positioning_index(), None);
    assert_eq!(state.store.hover_index(), None);
    assert_eq!(state.store.guides()[0].position, 100);

    state.apply(GuideCommand::Pointer(click(PointerButton::Middle, (50, 5))));
    assert_eq!(state.store.len(), 1);
}

#[test]
fn hiding_guides_mid_drag_ends_the_drag() {
    let mut state = OverlayState::new(HitTestConfig::default(), SURFACE);
    state.store.add(Guide::vertical(100));
    state.apply(GuideCommand::SetSettingsMode(true));
    state.apply(GuideCommand::Pointer(click(PointerButton::Primary, (100, 5))));
    state.apply(GuideCommand::Pointer(PointerEvent::Move { point: (150, 5) }));

    state.apply(GuideCommand::ToggleGuidesVisible);
    assert_eq!(state.store.positioning_index(), None);
    assert_eq!(state.store.hover_index(), None);

    state.apply(GuideCommand::ToggleGuidesVisible);
    state.apply(GuideCommand::Pointer(PointerEvent::Move { point: (400, 5) }));
    assert_eq!(state.store.guides()[0].position, 150);
}

fn run(queue: &CommandQueue, state: &mut OverlayState) {
    queue.pump(|command| {
        state.apply(command);
    });
}

#[test]
fn pointer_input_follows_earlier_mode_toggles_in_the_queue() {
    let middle = GuideCommand::Pointer(click(PointerButton::Middle, (64, 32)));

    let mut toggled_first = OverlayState::new(HitTestConfig::default(), SURFACE);
    let queue = CommandQueue::new();
    queue.push(GuideCommand::ToggleSettingsMode);
    queue.push(middle.clone());
    run(&queue, &mut toggled_first);
    assert_eq!(toggled_first.store.guides(), &[Guide::vertical(64)]);

    let mut clicked_first = OverlayState::new(HitTestConfig::default(), SURFACE);
    queue.push(middle);
    queue.push(GuideCommand::ToggleSettingsMode);
    run(&queue, &mut clicked_first);
    assert!(clicked_first.store.is_empty());
    assert!(clicked_first.settings_mode());
}
