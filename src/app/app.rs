use std::time::{Duration, Instant};

use log::info;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key, NamedKey};
use winit::window::Window;

use page_flip::{Book, InputEvent};

pub struct EventResponse {
    pub repaint: bool,
    pub exit: bool,
}

/// Viewer shell: owns the window, the book and the frame clock.
pub struct App {
    pub window: Window,
    book: Book,
    started: Instant,
    last_frame: Instant,
    last_title: String,
}

impl App {
    pub fn new(window: Window, mut book: Book) -> Self {
        let now = Instant::now();
        book.start(Duration::ZERO);
        let mut app = Self {
            window,
            book,
            started: now,
            last_frame: now,
            last_title: String::new(),
        };
        app.refresh_title();
        app
    }

    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn handle_event(&mut self, event: &WindowEvent) -> EventResponse {
        match event {
            WindowEvent::CloseRequested => {
                return EventResponse {
                    repaint: false,
                    exit: true,
                };
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return EventResponse {
                        repaint: false,
                        exit: false,
                    };
                }
                if event.logical_key == Key::Named(NamedKey::Escape) {
                    return EventResponse {
                        repaint: false,
                        exit: true,
                    };
                }
                if let Some(input) = self.map_key(&event.logical_key) {
                    let now = self.elapsed();
                    self.book.handle_input(input, now);
                    return EventResponse {
                        repaint: true,
                        exit: false,
                    };
                }
            }
            _ => {}
        }

        EventResponse {
            repaint: false,
            exit: false,
        }
    }

    fn map_key(&self, key: &Key) -> Option<InputEvent> {
        let flow = self.book.flow();
        match key {
            Key::Named(NamedKey::ArrowRight | NamedKey::Space) => Some(InputEvent::NextPage),
            Key::Named(NamedKey::ArrowLeft) => Some(InputEvent::PrevPage),
            Key::Named(NamedKey::Home) => Some(InputEvent::PageIndex(flow.lower_bound() as i64)),
            Key::Named(NamedKey::End) => Some(InputEvent::PageIndex(flow.upper_bound() as i64)),
            Key::Character(c) => {
                let c = c.as_str();
                if c.eq_ignore_ascii_case("a") {
                    Some(InputEvent::ToggleAutoAdvance)
                } else {
                    c.parse::<i64>().ok().map(InputEvent::PageIndex)
                }
            }
            _ => None,
        }
    }

    /// Advance the clock and the book by one frame.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        let elapsed = self.elapsed();
        self.book.update(elapsed, delta);
        self.refresh_title();
    }

    fn refresh_title(&mut self) {
        let flow = self.book.flow();
        let auto = if flow.auto_advance().is_enabled() { " [auto]" } else { "" };
        let title = format!(
            "Page Flip - page {}/{}{}",
            flow.current_page(),
            flow.page_count(),
            auto
        );
        if title != self.last_title {
            info!("{title}");
            self.window.set_title(&title);
            self.last_title = title;
        }
    }
}
