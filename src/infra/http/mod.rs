mod middleware;
mod public;
mod server;

pub use public::{HttpState, PAGE_PATHS, build_router};
pub use server::{run, serve_until_cancelled, watch_interrupt};
