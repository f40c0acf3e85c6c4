use elastic_scroll::{
    AxisMode, AxisPhase, BounceResume, BounceStatus, Boundary, Layer, ScrollPosition,
    ScrollSurface, Scroller, ScrollerOptions,
};
use elastic_scroll::{Axis, Rect, Size};
use elastic_testing::{pump_frames, settle, Block, CallbackLog, GestureRobot, MemoryContent};

const FRAMES: usize = 2_000;

fn rows(count: u32, width: f32, height: f32) -> MemoryContent {
    let mut content = MemoryContent::new();
    for block in Block::rows(0, count, Size::new(width, height)) {
        content.attach(block, Layer::Scrollable);
    }
    content
}

/// 180 x 280 viewport over ten 100 px rows: 720 px of vertical range.
fn list(options: ScrollerOptions) -> Scroller<MemoryContent> {
    Scroller::new(options, rows(10, 180.0, 100.0))
}

fn viewport() -> ScrollerOptions {
    ScrollerOptions::new(180.0, 280.0)
}

#[test]
fn slow_drag_follows_the_pointer() {
    let log = CallbackLog::new();
    let mut scroller = list(log.attach(viewport()));
    assert_eq!(scroller.axis(Axis::Y).max_scroll_distance(), 720.0);
    assert!(!scroller.axis(Axis::X).is_scrollable());

    let mut robot = GestureRobot::new(90.0, 200.0);
    robot.drag(&mut scroller, 0.0, -50.0, 1, 500.0);

    assert_eq!(scroller.offset(Axis::Y), -50.0);
    assert_eq!(scroller.surface().offset(Axis::Y), -50.0);
    assert_eq!(log.scrolls(Axis::Y), vec![-50.0]);
    assert!(log.scrolls(Axis::X).is_empty());
    assert!(!scroller.is_scrolling());
    assert!(!scroller.on_frame());
}

#[test]
fn overscroll_at_the_far_end_reports_a_bounce() {
    let log = CallbackLog::new();
    let mut scroller = list(log.attach(viewport()));
    scroller.scroll_to(720.0, false);

    let mut robot = GestureRobot::new(90.0, 200.0);
    robot.press(&mut scroller);
    robot.move_by(&mut scroller, 0.0, -30.0, 16.0);
    assert_eq!(scroller.offset(Axis::Y), -744.0);
    robot.release(&mut scroller);

    assert_eq!(
        log.bounces(),
        vec![(-744.0, BounceStatus { axis: Axis::Y, sign: 1 })]
    );
    assert_eq!(scroller.axis(Axis::Y).phase(), AxisPhase::Bouncing);
}

#[test]
fn flick_glides_and_comes_to_rest() {
    let log = CallbackLog::new();
    let mut scroller = Scroller::new(log.attach(viewport()), rows(100, 180.0, 100.0));

    let mut robot = GestureRobot::new(90.0, 200.0);
    robot.flick(&mut scroller, 0.0, -80.0, 100.0);
    assert_eq!(scroller.offset(Axis::Y), -80.0);
    assert_eq!(scroller.axis(Axis::Y).phase(), AxisPhase::Inertia);

    assert!(scroller.on_frame());
    assert_eq!(scroller.offset(Axis::Y), -93.0);

    assert!(settle(&mut scroller, FRAMES).is_some());
    let offset = scroller.offset(Axis::Y);
    assert!(offset < -580.0 && offset > -780.0, "settled at {offset}");
    assert!(!scroller.is_scrolling());
    assert!(log.bounces().is_empty());
    assert_eq!(scroller.surface().offset(Axis::Y), offset);
}

#[test]
fn content_shorter_than_viewport_does_not_move() {
    let log = CallbackLog::new();
    let mut scroller = Scroller::new(
        log.attach(ScrollerOptions::new(180.0, 720.0)),
        rows(5, 180.0, 100.0),
    );
    assert!(!scroller.axis(Axis::Y).is_scrollable());

    let mut robot = GestureRobot::new(90.0, 200.0);
    robot.flick(&mut scroller, 0.0, -90.0, 80.0);
    settle(&mut scroller, FRAMES);

    assert_eq!(scroller.offset(Axis::Y), 0.0);
    assert!(log.events().is_empty());
}

#[test]
fn bounce_without_handler_returns_to_the_start() {
    let mut scroller = list(viewport());
    let mut robot = GestureRobot::new(90.0, 100.0);
    robot.drag(&mut scroller, 0.0, 30.0, 1, 500.0);
    assert_eq!(scroller.offset(Axis::Y), 24.0);

    assert!(settle(&mut scroller, FRAMES).is_some());
    assert_eq!(scroller.offset(Axis::Y), 0.0);
    assert_eq!(scroller.surface().offset(Axis::Y), 0.0);
    assert_eq!(scroller.axis(Axis::Y).phase(), AxisPhase::Idle);
}

#[test]
fn pull_to_refresh_holds_then_releases() {
    let log = CallbackLog::new();
    let options = log.attach_responding(viewport(), |offset, resume: &BounceResume, status| {
        if status.is_past_start() && offset > 40.0 {
            resume.resume_to(40.0);
        }
    });
    let mut scroller = list(options);

    let mut robot = GestureRobot::new(90.0, 50.0);
    robot.drag(&mut scroller, 0.0, 120.0, 6, 600.0);
    assert_eq!(scroller.offset(Axis::Y), 73.0);

    assert!(settle(&mut scroller, FRAMES).is_some());
    assert_eq!(scroller.offset(Axis::Y), 40.0);
    assert!(scroller.is_scrolling());
    assert!(scroller.axis(Axis::Y).is_parked());

    let handle = log.last_handle(Axis::Y).expect("bounce handle");
    handle.resume();
    assert!(settle(&mut scroller, FRAMES).is_some());
    assert_eq!(scroller.offset(Axis::Y), 0.0);
    assert!(!scroller.is_scrolling());
    assert_eq!(log.bounces().len(), 1);
}

#[test]
fn load_more_extends_the_range_under_the_overscroll() {
    let log = CallbackLog::new();
    let mut scroller = list(log.attach(viewport()));
    scroller.scroll_to(720.0, false);

    let mut robot = GestureRobot::new(90.0, 250.0);
    robot.drag(&mut scroller, 0.0, -60.0, 3, 600.0);
    let overscrolled = scroller.offset(Axis::Y);
    assert!(overscrolled < -720.0);
    assert_eq!(log.bounces()[0].1.sign, 1);

    let more = scroller.surface().next_row(Size::new(180.0, 500.0));
    scroller.add_child(more, true);
    assert_eq!(scroller.axis(Axis::Y).max_scroll_distance(), 1220.0);
    assert_eq!(scroller.offset(Axis::Y), overscrolled);

    assert!(scroller.resume(Axis::Y, None));
    assert_eq!(scroller.axis(Axis::Y).phase(), AxisPhase::Idle);
    assert_eq!(scroller.offset(Axis::Y), overscrolled);
    assert!(!scroller.on_frame());
}

#[test]
fn both_axes_scroll_independently() {
    let mut scroller = Scroller::new(viewport(), rows(10, 400.0, 100.0));
    let mut robot = GestureRobot::new(90.0, 200.0);
    robot.drag(&mut scroller, -40.0, -60.0, 2, 800.0);

    assert_eq!(scroller.offset(Axis::X), -40.0);
    assert_eq!(scroller.offset(Axis::Y), -60.0);
}

#[test]
fn vertical_mode_drops_cross_axis_moves() {
    let options = viewport()
        .with_axis_mode(AxisMode::Vertical)
        .with_cross_axis_margin(0.0);
    let mut scroller = Scroller::new(options, rows(10, 400.0, 100.0));
    assert!(!scroller.axis(Axis::X).is_scrollable());

    let mut robot = GestureRobot::new(90.0, 200.0);
    robot.press(&mut scroller);
    robot.move_by(&mut scroller, 10.0, -5.0, 16.0);
    assert_eq!(scroller.offset(Axis::Y), 0.0);
    robot.move_by(&mut scroller, -50.0, 0.0, 16.0);
    assert_eq!(scroller.offset(Axis::Y), 0.0);
    robot.move_by(&mut scroller, 40.0, -30.0, 16.0);
    assert_eq!(scroller.offset(Axis::Y), -35.0);
    robot.advance(500.0);
    robot.release(&mut scroller);

    assert_eq!(scroller.offset(Axis::X), 0.0);
}

#[test]
fn dropped_moves_carry_their_travel_into_the_next_move() {
    let options = viewport()
        .with_axis_mode(AxisMode::Vertical)
        .with_cross_axis_margin(0.0);
    let mut scroller = Scroller::new(options, rows(10, 400.0, 100.0));

    let mut robot = GestureRobot::new(90.0, 200.0);
    robot.press(&mut scroller);
    robot.move_by(&mut scroller, 10.0, -4.0, 16.0);
    assert_eq!(scroller.offset(Axis::Y), 0.0);

    robot.move_by(&mut scroller, -10.0, -4.0, 16.0);
    assert_eq!(scroller.offset(Axis::Y), -8.0);
    robot.move_by(&mut scroller, 0.0, -5.0, 16.0);
    assert_eq!(scroller.offset(Axis::Y), -13.0);
}

#[test]
fn content_shrinking_under_the_finger_bounces_on_release() {
    let mut scroller = list(viewport());
    let mut robot = GestureRobot::new(90.0, 200.0);
    robot.press(&mut scroller);
    robot.move_by(&mut scroller, 0.0, -500.0, 16.0);
    assert_eq!(scroller.offset(Axis::Y), -500.0);

    let tail = scroller.surface().scrollable_blocks()[5..].to_vec();
    for block in &tail {
        scroller.remove_child(Some(block));
    }
    assert_eq!(scroller.axis(Axis::Y).max_scroll_distance(), 220.0);

    robot.advance(500.0);
    robot.release(&mut scroller);
    assert_eq!(scroller.axis(Axis::Y).phase(), AxisPhase::Bouncing);

    assert!(settle(&mut scroller, FRAMES).is_some());
    assert_eq!(scroller.offset(Axis::Y), -220.0);
    assert_eq!(scroller.axis(Axis::Y).boundary(), Boundary::InRange);
    assert!(!scroller.is_scrolling());
}

#[test]
fn content_shrinking_mid_retract_retracts_to_the_new_edge() {
    let mut scroller = list(viewport());
    scroller.scroll_to(720.0, false);

    let mut robot = GestureRobot::new(90.0, 200.0);
    robot.press(&mut scroller);
    robot.move_by(&mut scroller, 0.0, -30.0, 16.0);
    robot.advance(500.0);
    robot.release(&mut scroller);
    assert!(scroller.on_frame());
    assert!(scroller.offset(Axis::Y) < -720.0);

    let tail = scroller.surface().scrollable_blocks()[5..].to_vec();
    for block in &tail {
        scroller.remove_child(Some(block));
    }
    assert_eq!(scroller.axis(Axis::Y).phase(), AxisPhase::Bouncing);

    assert!(settle(&mut scroller, FRAMES).is_some());
    assert_eq!(scroller.offset(Axis::Y), -220.0);
    assert_eq!(scroller.axis(Axis::Y).phase(), AxisPhase::Idle);
    assert!(!scroller.is_scrolling());
}

#[test]
fn horizontal_mode_without_margin_keeps_diagonal_moves() {
    let options = viewport().with_axis_mode(AxisMode::Horizontal);
    let mut scroller = Scroller::new(options, rows(10, 400.0, 100.0));

    let mut robot = GestureRobot::new(90.0, 200.0);
    robot.drag(&mut scroller, -20.0, -60.0, 1, 500.0);
    assert_eq!(scroller.offset(Axis::X), -20.0);
    assert_eq!(scroller.offset(Axis::Y), 0.0);

    scroller.scroll_to(30.0, false);
    assert_eq!(scroller.offset(Axis::X), -30.0);
    assert_eq!(scroller.offset(Axis::Y), 0.0);
}

#[test]
fn new_touch_interrupts_inertia() {
    let mut scroller = Scroller::new(viewport(), rows(100, 180.0, 100.0));
    let mut robot = GestureRobot::new(90.0, 200.0);
    robot.flick(&mut scroller, 0.0, -150.0, 50.0);
    assert!(pump_frames(&mut scroller, 3));
    let caught_at = scroller.offset(Axis::Y);

    robot.press(&mut scroller);
    assert!(!scroller.on_frame());
    assert_eq!(scroller.offset(Axis::Y), caught_at);

    robot.advance(400.0);
    robot.release(&mut scroller);
    assert!(!scroller.on_frame());
    assert_eq!(scroller.offset(Axis::Y), caught_at);
    assert_eq!(scroller.axis(Axis::Y).phase(), AxisPhase::Idle);
}

#[test]
fn gesture_ends_when_the_last_contact_lifts() {
    let mut scroller = list(viewport());
    let mut first = GestureRobot::new(50.0, 200.0).with_pointer_id(1);
    let mut second = GestureRobot::new(120.0, 200.0).with_pointer_id(2);

    first.press(&mut scroller);
    second.press(&mut scroller);
    first.move_by(&mut scroller, 0.0, -20.0, 100.0);
    second.move_by(&mut scroller, 0.0, -10.0, 100.0);
    assert_eq!(scroller.offset(Axis::Y), -30.0);

    first.advance(400.0);
    first.release(&mut scroller);
    assert_eq!(scroller.active_contacts(), 1);
    assert_eq!(scroller.axis(Axis::Y).phase(), AxisPhase::Dragging);

    second.advance(400.0);
    second.release(&mut scroller);
    assert_eq!(scroller.active_contacts(), 0);
    assert_eq!(scroller.axis(Axis::Y).phase(), AxisPhase::Idle);
}

#[test]
fn destroy_ignores_later_input_and_halts_motion() {
    let mut scroller = Scroller::new(viewport(), rows(100, 180.0, 100.0));
    let mut robot = GestureRobot::new(90.0, 200.0);
    robot.flick(&mut scroller, 0.0, -150.0, 50.0);
    scroller.on_frame();

    scroller.destroy();
    scroller.destroy();
    let frozen = scroller.offset(Axis::Y);
    assert!(scroller.is_destroyed());
    assert!(!scroller.is_animating());
    assert!(!scroller.on_frame());

    robot.drag(&mut scroller, 0.0, -100.0, 2, 500.0);
    assert_eq!(scroller.offset(Axis::Y), frozen);
    assert_eq!(scroller.active_contacts(), 0);
}

#[test]
fn animated_scroll_to_lands_exactly() {
    let log = CallbackLog::new();
    let mut scroller = list(log.attach(viewport()));
    scroller.scroll_to(
        ScrollPosition::Point {
            x: None,
            y: Some(250.0),
        },
        true,
    );
    assert_eq!(scroller.axis(Axis::Y).phase(), AxisPhase::EasingToTarget);
    assert!(settle(&mut scroller, FRAMES).is_some());
    assert_eq!(scroller.offset(Axis::Y), -250.0);
    assert_eq!(log.scrolls(Axis::Y).last(), Some(&-250.0));

    scroller.scroll_to(137.5, false);
    assert_eq!(scroller.offset(Axis::Y), -137.5);
    assert_eq!(scroller.surface().offset(Axis::Y), -137.5);
}

#[test]
fn static_children_do_not_change_the_range() {
    let mut scroller = list(viewport());
    let overlay = Block::new(500, Rect::new(0.0, 0.0, 180.0, 5_000.0));
    scroller.add_child(overlay, false);
    assert_eq!(scroller.axis(Axis::Y).max_scroll_distance(), 720.0);
    assert_eq!(scroller.surface().overlay_blocks().len(), 1);

    scroller.scroll_to(600.0, false);
    let last = scroller.surface().scrollable_blocks()[9];
    scroller.remove_child(Some(&last));
    assert_eq!(scroller.axis(Axis::Y).max_scroll_distance(), 620.0);
    assert_eq!(scroller.offset(Axis::Y), -600.0);

    scroller.remove_child(None);
    assert_eq!(scroller.axis(Axis::Y).max_scroll_distance(), 0.0);
    assert_eq!(scroller.offset(Axis::Y), 0.0);
    assert!(scroller.surface().overlay_blocks().is_empty());
}

#[test]
fn surface_offset_is_adopted_and_overrides_apply() {
    let content = rows(10, 400.0, 100.0).with_offset(0.0, -100.0);
    let options = viewport().with_scroll_x(false);
    let mut scroller = Scroller::new(options, content);
    assert_eq!(scroller.offset(Axis::Y), -100.0);
    assert!(!scroller.axis(Axis::X).is_scrollable());

    let mut robot = GestureRobot::new(90.0, 200.0);
    robot.drag(&mut scroller, -40.0, 0.0, 1, 500.0);
    assert_eq!(scroller.offset(Axis::X), 0.0);
}
