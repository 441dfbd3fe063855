//! UI automation tests using egui_kittest and AccessKit
//!
//! These tests drive the real timeline widgets by simulating user input and
//! checking the notifications relayed over the timeline event channel.

use egui_kittest::kittest::Queryable;
use egui_kittest::Harness;
use flowcase::motion::{MotionSegment, Movement, MovementId, RectilinearMotion, WaitMotion};
use flowcase::ui::components::{MovementActions, Timeline};
use flowcase::ui::numeric::NumericFormat;
use flowcase::ui::{AppState, IconSet, Theme, TimelineChannels, TimelineEvent};

/// Timeline wrapper for testing segment rows
struct TimelineApp {
    timeline: Timeline,
    channels: TimelineChannels,
    theme: Theme,
    icons: IconSet,
}

impl TimelineApp {
    fn with_movement(movement: &Movement) -> Self {
        let channels = TimelineChannels::default();
        let timeline =
            Timeline::for_movement(movement, &channels.event_tx, NumericFormat::default());
        Self {
            timeline,
            channels,
            theme: Theme::dark(),
            icons: IconSet::default(),
        }
    }

    fn drain(&self) -> Vec<TimelineEvent> {
        self.channels.event_rx.try_iter().collect()
    }
}

fn rect_movement(x: f64) -> Movement {
    let mut movement = Movement::new("piston");
    movement.segments.push(MotionSegment::Rectilinear(RectilinearMotion {
        velocity: [x, 2.0, 3.0],
        duration: 4.0,
        parent: movement.id,
    }));
    movement
}

fn wait_movement() -> Movement {
    let mut movement = Movement::new("hold");
    movement.segments.push(MotionSegment::Wait(WaitMotion {
        duration: 0.0,
        parent: movement.id,
    }));
    movement
}

/// Test that a rectilinear row exposes all of its fields and controls
#[test]
fn test_rectilinear_row_fields_exist() {
    let app = TimelineApp::with_movement(&rect_movement(1.0));

    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(720.0, 300.0))
        .build_state(
            |ctx, app: &mut TimelineApp| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    app.timeline.show(ui, &app.theme, &app.icons);
                });
            },
            app,
        );

    harness.run();

    let _x = harness.get_by_label("Velocity X (segment 0)");
    let _y = harness.get_by_label("Velocity Y (segment 0)");
    let _z = harness.get_by_label("Velocity Z (segment 0)");
    let _duration = harness.get_by_label("Duration (segment 0)");
    let _delete = harness.get_by_label("Delete segment 0");
}

/// Test that comma-decimal input is normalized and reported as a change
#[test]
fn test_comma_decimal_edit_emits_changed() {
    let movement = rect_movement(0.0);
    let parent = movement.id;
    let app = TimelineApp::with_movement(&movement);

    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(720.0, 300.0))
        .build_state(
            |ctx, app: &mut TimelineApp| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    app.timeline.show(ui, &app.theme, &app.icons);
                });
            },
            app,
        );

    harness.run();

    harness.get_by_label("Velocity X (segment 0)").focus();
    harness.run();

    harness.get_by_label("Velocity X (segment 0)").type_text("1,5");
    harness.run();

    let events = harness.state().drain();
    let last_change = events
        .iter()
        .filter_map(|event| match event {
            TimelineEvent::SegmentChanged { index, segment } => Some((*index, *segment)),
            _ => None,
        })
        .last()
        .expect("editing a field should report a change");

    assert_eq!(last_change.0, 0);
    match last_change.1 {
        MotionSegment::Rectilinear(motion) => {
            assert_eq!(motion.velocity[0], 1.5);
            assert_eq!(motion.velocity[1], 2.0);
            assert_eq!(motion.duration, 4.0);
            assert_eq!(motion.parent, parent);
        }
        MotionSegment::Wait(_) => panic!("rectilinear row reported a wait segment"),
    }
}

/// Test that non-numeric input reports nothing and panics nowhere
#[test]
fn test_non_numeric_edit_is_silent() {
    let app = TimelineApp::with_movement(&rect_movement(1.0));

    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(720.0, 300.0))
        .build_state(
            |ctx, app: &mut TimelineApp| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    app.timeline.show(ui, &app.theme, &app.icons);
                });
            },
            app,
        );

    harness.run();

    harness.get_by_label("Duration (segment 0)").focus();
    harness.run();

    harness.get_by_label("Duration (segment 0)").type_text("abc");
    harness.run();

    assert!(
        harness.state().drain().is_empty(),
        "a non-numeric edit must not report a change"
    );
}

/// Test that clicking delete reports the row's current segment value
#[test]
fn test_delete_click_reports_current_segment() {
    let movement = rect_movement(1.0);
    let parent = movement.id;
    let app = TimelineApp::with_movement(&movement);

    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(720.0, 300.0))
        .build_state(
            |ctx, app: &mut TimelineApp| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    app.timeline.show(ui, &app.theme, &app.icons);
                });
            },
            app,
        );

    harness.run();

    harness.get_by_label("Delete segment 0").click();
    harness.run();

    let events = harness.state().drain();
    match events.as_slice() {
        [TimelineEvent::SegmentDeleted { index: 0, segment }] => {
            assert_eq!(segment.parent(), parent);
            assert_eq!(segment.duration(), 4.0);
        }
        other => panic!("expected a single delete notification, got {other:?}"),
    }
}

/// Test editing and deleting a wait row through its single duration field
#[test]
fn test_wait_row_edit_and_delete() {
    let movement = wait_movement();
    let parent = movement.id;
    let app = TimelineApp::with_movement(&movement);

    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(720.0, 300.0))
        .build_state(
            |ctx, app: &mut TimelineApp| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    app.timeline.show(ui, &app.theme, &app.icons);
                });
            },
            app,
        );

    harness.run();

    harness.get_by_label("Duration (segment 0)").focus();
    harness.run();

    harness.get_by_label("Duration (segment 0)").type_text("2,5");
    harness.run();

    let changed = harness.state().drain();
    match changed.last() {
        Some(TimelineEvent::SegmentChanged { index: 0, segment }) => {
            assert_eq!(segment.duration(), 2.5);
            assert_eq!(segment.parent(), parent);
        }
        other => panic!("expected a change notification, got {other:?}"),
    }

    harness.get_by_label("Delete segment 0").click();
    harness.run();

    let deleted = harness.state().drain();
    match deleted.as_slice() {
        [TimelineEvent::SegmentDeleted { index: 0, segment }] => {
            assert_eq!(segment.duration(), 2.5);
        }
        other => panic!("expected a single delete notification, got {other:?}"),
    }
}

/// Movement actions wrapper for testing the use/delete control
struct ActionsApp {
    actions: MovementActions,
    channels: TimelineChannels,
    icons: IconSet,
}

impl ActionsApp {
    fn new(index: usize, checked: bool) -> Self {
        let channels = TimelineChannels::default();
        let mut actions = MovementActions::new(index, checked);
        let tx = channels.event_tx.clone();
        actions.on_use(move |index, enabled| {
            let _ = tx.send(TimelineEvent::MovementUsed { index, enabled });
        });
        let tx = channels.event_tx.clone();
        actions.on_delete(move |index| {
            let _ = tx.send(TimelineEvent::MovementDeleted { index });
        });
        Self {
            actions,
            channels,
            icons: IconSet::default(),
        }
    }

    fn drain(&self) -> Vec<TimelineEvent> {
        self.channels.event_rx.try_iter().collect()
    }
}

/// Test that toggling the use checkbox reports the new state both ways
#[test]
fn test_use_checkbox_reports_new_state() {
    let app = ActionsApp::new(0, true);

    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(400.0, 200.0))
        .build_state(
            |ctx, app: &mut ActionsApp| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    app.actions.show(ui, &app.icons);
                });
            },
            app,
        );

    harness.run();

    harness.get_by_label("Use movement 0").click();
    harness.run();

    assert_eq!(
        harness.state().drain(),
        vec![TimelineEvent::MovementUsed {
            index: 0,
            enabled: false
        }]
    );

    harness.get_by_label("Use movement 0").click();
    harness.run();

    assert_eq!(
        harness.state().drain(),
        vec![TimelineEvent::MovementUsed {
            index: 0,
            enabled: true
        }]
    );
}

/// Test that the movement delete button reports the row index
#[test]
fn test_movement_delete_reports_index() {
    let app = ActionsApp::new(2, true);

    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(400.0, 200.0))
        .build_state(
            |ctx, app: &mut ActionsApp| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    app.actions.show(ui, &app.icons);
                });
            },
            app,
        );

    harness.run();

    harness.get_by_label("Delete movement 2").click();
    harness.run();

    assert_eq!(
        harness.state().drain(),
        vec![TimelineEvent::MovementDeleted { index: 2 }]
    );
}

/// Application state wrapper for end-to-end document updates
struct StateApp {
    state: AppState,
    theme: Theme,
    icons: IconSet,
}

impl StateApp {
    fn with_one_rectilinear_segment() -> Self {
        let mut state = AppState::new();
        state.new_movement_name = "piston".to_string();
        state.add_movement();
        state.add_rectilinear_segment();
        state.rebuild_rows_if_dirty();
        Self {
            state,
            theme: Theme::dark(),
            icons: IconSet::default(),
        }
    }
}

/// Test the complete flow: type into a field, poll events, document updates
#[test]
fn test_field_edit_flows_into_document() {
    let app = StateApp::with_one_rectilinear_segment();
    let parent: MovementId = app.state.document.get(0).unwrap().id;

    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(720.0, 300.0))
        .build_state(
            |ctx, app: &mut StateApp| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    if let Some(timeline) = app.state.timeline.as_mut() {
                        timeline.show(ui, &app.theme, &app.icons);
                    }
                });
            },
            app,
        );

    harness.run();

    harness.get_by_label("Velocity X (segment 0)").focus();
    harness.run();

    harness.get_by_label("Velocity X (segment 0)").type_text("1,5");
    harness.run();

    harness.state_mut().state.poll_events();

    let movement = harness.state().state.document.get(0).unwrap();
    assert_eq!(movement.id, parent);
    match movement.segments[0] {
        MotionSegment::Rectilinear(motion) => {
            assert_eq!(motion.velocity[0], 1.5);
            assert_eq!(motion.parent, parent);
        }
        MotionSegment::Wait(_) => panic!("segment kind changed unexpectedly"),
    }
}
