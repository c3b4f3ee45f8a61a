use anyhow::Context;
use log::info;
use winit::event_loop::{ControlFlow, EventLoop};

use page_flip::texture::DirectoryTextureProvider;
use page_flip::{Book, FlipListener, Manifest, Settings};

mod app;

struct FlipLogger;

impl FlipListener for FlipLogger {
    fn on_page_flip_start(&mut self, page: usize) {
        info!("flip start: page {page}");
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // page-flip [manifest.json] [texture-dir]
    let mut args = std::env::args().skip(1);
    let manifest = match args.next() {
        Some(path) => {
            Manifest::load(&path).with_context(|| format!("failed to load manifest '{path}'"))?
        }
        None => Manifest::default(),
    };

    let settings = Settings::load();
    let mut book = Book::new(&manifest, &settings);
    book.add_listener(Box::new(FlipLogger));

    if let Some(dir) = args.next() {
        let mut provider = DirectoryTextureProvider::new(&dir);
        let count = book.preload_textures(&mut provider);
        info!("preloaded {count} textures from {dir}");
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut handler = app::AppHandler::new(book);
    event_loop.run_app(&mut handler)?;

    Ok(())
}
