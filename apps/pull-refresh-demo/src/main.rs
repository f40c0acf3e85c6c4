//! Replays a scripted pull-to-refresh / load-more session against a
//! 180 x 280 list of fourteen items, on a virtual 16 ms frame clock.

mod list;

use anyhow::{bail, Result};
use elastic_scroll::{
    Axis, AxisMode, BounceResume, Layer, PointSample, Rect, ScrollSurface, Scroller,
    ScrollerOptions, Size,
};
use list::{Item, ListSurface};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const VIEWPORT: Size = Size::new(180.0, 280.0);
const FRAME_MS: f64 = 16.0;
const REFRESH_HOLD: f32 = 40.0;
const LOADING_DELAY_MS: f64 = 1_000.0;

enum Task {
    FinishRefresh(BounceResume),
    AppendItem(BounceResume),
}

/// Work scheduled by bounce handlers, run by the frame loop once due.
#[derive(Default)]
struct Timeline {
    now_ms: Cell<f64>,
    tasks: RefCell<Vec<(f64, Task)>>,
}

impl Timeline {
    fn after(&self, delay_ms: f64, task: Task) {
        let due = self.now_ms.get() + delay_ms;
        self.tasks.borrow_mut().push((due, task));
    }

    fn take_due(&self) -> Vec<Task> {
        let now = self.now_ms.get();
        let mut tasks = self.tasks.borrow_mut();
        let (due, pending): (Vec<_>, Vec<_>) =
            tasks.drain(..).partition(|(due, _)| *due <= now);
        *tasks = pending;
        due.into_iter().map(|(_, task)| task).collect()
    }

    fn is_idle(&self) -> bool {
        self.tasks.borrow().is_empty()
    }
}

struct Demo {
    scroller: Scroller<ListSurface>,
    timeline: Rc<Timeline>,
    loaded: usize,
}

impl Demo {
    fn new(axis_mode: AxisMode) -> Self {
        let timeline = Rc::new(Timeline::default());
        let mut surface = ListSurface::new();
        surface.attach(
            Item::new("Refresh", Rect::new(66.0, 10.0, 48.0, 14.0)),
            Layer::Static,
        );
        surface.attach(
            Item::new("Loading", Rect::new(66.0, 250.0, 48.0, 14.0)),
            Layer::Static,
        );
        let content_height = surface.height_handle();

        let handler_timeline = Rc::clone(&timeline);
        let options = ScrollerOptions::new(VIEWPORT.width, VIEWPORT.height)
            .with_position(50.0, 20.0)
            .with_axis_mode(axis_mode)
            .on_bounce(move |offset, resume, status| {
                if status.is_past_start() {
                    log::info!("refresh at {offset}");
                    if offset > REFRESH_HOLD {
                        resume.resume_to(REFRESH_HOLD);
                        handler_timeline.after(LOADING_DELAY_MS, Task::FinishRefresh(resume));
                    } else {
                        resume.resume();
                    }
                } else if status.is_past_end() {
                    log::info!("loading at {offset}");
                    resume.resume_to(VIEWPORT.height - content_height.get() - REFRESH_HOLD);
                    handler_timeline.after(LOADING_DELAY_MS, Task::AppendItem(resume));
                } else {
                    resume.resume();
                }
            });

        let mut scroller = Scroller::new(options, surface);
        scroller.add_child(Item::new("list", Rect::new(0.0, 0.0, 180.0, 1000.0)), true);
        for index in 0..14 {
            let top = 15.0 + 70.0 * index as f32;
            scroller.add_child(
                Item::new(format!("item - {index}"), Rect::new(20.0, top, 140.0, 60.0)),
                true,
            );
        }
        Self {
            scroller,
            timeline,
            loaded: 0,
        }
    }

    fn now(&self) -> f64 {
        self.timeline.now_ms.get()
    }

    fn sample(&self, x: f32, y: f32) -> PointSample {
        PointSample::new(0, x, y, self.now())
    }

    /// Drags from `(x, y)` by `dy` in frame-spaced moves, then lifts.
    fn drag(&mut self, x: f32, y: f32, dy: f32, steps: u32) {
        self.scroller.on_pointer_start(self.sample(x, y));
        for step in 1..=steps {
            self.frame();
            let moved = y + dy * step as f32 / steps as f32;
            self.scroller.on_pointer_move(self.sample(x, moved));
        }
        self.scroller.on_pointer_end(self.sample(x, y + dy));
    }

    fn frame(&mut self) {
        self.timeline.now_ms.set(self.now() + FRAME_MS);
        for task in self.timeline.take_due() {
            match task {
                Task::FinishRefresh(resume) => {
                    log::info!("refresh done");
                    resume.resume();
                }
                Task::AppendItem(resume) => {
                    let top = self.scroller.surface().content_length(Axis::Y) + 10.0;
                    self.loaded += 1;
                    let label = format!("new - item {}", self.loaded);
                    log::info!("appending {label}");
                    self.scroller
                        .add_child(Item::new(label, Rect::new(10.0, top, 160.0, 500.0)), true);
                    resume.resume();
                }
            }
        }
        self.scroller.on_frame();
    }

    /// Runs frames until nothing animates and no task is pending.
    fn run_until_idle(&mut self, max_ms: f64) -> Result<()> {
        let deadline = self.now() + max_ms;
        while self.scroller.is_animating() || !self.timeline.is_idle() {
            if self.now() > deadline {
                bail!("still busy after {max_ms} ms at offset {}", self.offset());
            }
            self.frame();
        }
        Ok(())
    }

    fn offset(&self) -> f32 {
        self.scroller.offset(Axis::Y)
    }

    fn report(&self, label: &str) {
        let surface = self.scroller.surface();
        println!(
            "[{:>6.0} ms] {label:<22} offset {:>7.1}  items {:>2}  visible {:?}  overlays {:?}",
            self.now(),
            self.offset(),
            surface.item_count(),
            surface.visible_labels(VIEWPORT),
            surface.revealed_overlays(VIEWPORT),
        );
    }
}

/// Vertical unless the first argument names another mode; unknown names
/// are logged and scroll both axes.
fn axis_mode_arg(arg: Option<&str>) -> AxisMode {
    arg.map_or(AxisMode::Vertical, AxisMode::parse_or_default)
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let axis_mode = axis_mode_arg(std::env::args().nth(1).as_deref());

    println!("=== Elastic Scroll Pull-to-Refresh Demo ({axis_mode:?}) ===");
    let mut demo = Demo::new(axis_mode);
    demo.report("start");

    demo.drag(90.0, 40.0, 120.0, 8);
    demo.report("pulled down");
    for _ in 0..30 {
        demo.frame();
    }
    demo.report("holding for refresh");
    demo.run_until_idle(5_000.0)?;
    demo.report("refreshed");

    let mut flicks = 0;
    while demo.loaded == 0 {
        flicks += 1;
        if flicks > 20 {
            bail!("never reached the end of the list");
        }
        demo.drag(90.0, 240.0, -200.0, 4);
        demo.report("flicked up");
        demo.run_until_idle(10_000.0)?;
    }
    demo.report("loaded more");

    demo.scroller.scroll_to(0.0, true);
    demo.run_until_idle(5_000.0)?;
    demo.report("back to top");

    demo.scroller.destroy();
    println!("scrolling after destroy: {}", demo.scroller.is_scrolling());
    Ok(())
}
