pub mod health;
pub mod info;
pub mod proxy;

pub use health::health_handler;
pub use info::info_handler;
pub use proxy::{proxy_handler, proxy_root_handler};
