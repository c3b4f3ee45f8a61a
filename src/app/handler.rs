use log::error;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use page_flip::Book;

use super::app::App;

pub struct AppHandler {
    app: Option<App>,
    book: Option<Book>,
}

impl AppHandler {
    pub fn new(book: Book) -> Self {
        Self {
            app: None,
            book: Some(book),
        }
    }
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() {
            return;
        }
        let Some(book) = self.book.take() else {
            return;
        };

        let window_attrs = Window::default_attributes()
            .with_title("Page Flip")
            .with_inner_size(winit::dpi::LogicalSize::new(1200.0, 800.0));

        match event_loop.create_window(window_attrs) {
            Ok(window) => self.app = Some(App::new(window, book)),
            Err(e) => {
                error!("failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(app) = &mut self.app {
            let response = app.handle_event(&event);
            if response.repaint {
                app.window.request_redraw();
            }
            if response.exit {
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(app) = &mut self.app {
            app.frame();
            app.window.request_redraw();
        }
    }
}
