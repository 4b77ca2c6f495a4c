use std::io;
use std::time::{Duration, Instant};

use carousel::{Carousel, CarouselEvent, MouseButton, Slides};
use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, MouseButton as CtButton, MouseEvent,
    MouseEventKind,
};

use crate::layout::Layout;
use crate::terminal::Terminal;
use crate::tween::Tween;
use crate::view;

/// Logical pixels per terminal column, so gesture thresholds keep their scale.
const CELL_WIDTH_PX: f32 = 8.0;
/// Redraw interval while a transition is running.
const FRAME: Duration = Duration::from_millis(16);

enum Flow {
    Continue,
    Quit,
}

pub struct App {
    slides: Slides<String>,
    carousel: Carousel,
    tween: Tween,
    hovered_dot: Option<usize>,
}

impl App {
    pub fn new(slides: Slides<String>, carousel: Carousel) -> Self {
        let tween = Tween::at(carousel.projection().translate_percent);
        Self {
            slides,
            carousel,
            tween,
            hovered_dot: None,
        }
    }

    pub fn run(mut self, term: &mut Terminal) -> io::Result<()> {
        loop {
            let size = term.size()?;
            let layout = Layout::compute(
                size.0,
                size.1,
                self.carousel.total(),
                self.carousel.has_controls(),
            );

            let now = Instant::now();
            let out = term.begin_frame(size)?;
            view::draw(
                out,
                &layout,
                &self.slides,
                &self.carousel,
                self.tween.value(now),
                self.hovered_dot,
            )?;
            term.flush()?;

            let timeout = self.tween.is_running(Instant::now()).then_some(FRAME);
            for event in term.poll(timeout)? {
                if let Flow::Quit = self.handle(event, &layout) {
                    return Ok(());
                }
            }
            self.tween.retarget(self.carousel.projection(), Instant::now());
        }
    }

    fn handle(&mut self, event: CrosstermEvent, layout: &Layout) -> Flow {
        match event {
            CrosstermEvent::Key(key) => return self.handle_key(key),
            CrosstermEvent::Mouse(mouse) => self.handle_mouse(mouse, layout),
            CrosstermEvent::FocusLost => {
                self.carousel.dispatch(CarouselEvent::GestureCancel);
            }
            _ => {}
        }
        Flow::Continue
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Flow::Quit,
            _ => {
                self.carousel.dispatch(key.into());
                Flow::Continue
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, layout: &Layout) {
        let x = mouse.column as f32 * CELL_WIDTH_PX;
        let left = |button: CtButton| MouseButton::from(button) == MouseButton::Left;
        let event = match mouse.kind {
            MouseEventKind::Moved => {
                self.hovered_dot = layout.dot_at(mouse.column, mouse.row);
                return;
            }
            MouseEventKind::Down(button) if left(button) => {
                if let Some(control) = layout.hit(mouse.column, mouse.row) {
                    control
                } else if self.carousel.has_controls()
                    && layout.viewport.contains(mouse.column, mouse.row)
                {
                    CarouselEvent::GestureStart {
                        x,
                        container_width_px: layout.viewport.width as f32 * CELL_WIDTH_PX,
                    }
                } else {
                    return;
                }
            }
            MouseEventKind::Drag(button) if left(button) => CarouselEvent::GestureMove { x },
            MouseEventKind::Up(button) if left(button) => CarouselEvent::GestureEnd { x },
            _ => return,
        };
        log::trace!("[tui] {:?} -> {:?}", mouse.kind, event);
        self.carousel.dispatch(event);
    }
}
