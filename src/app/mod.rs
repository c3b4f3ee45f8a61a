mod app;
mod handler;

pub use handler::AppHandler;
