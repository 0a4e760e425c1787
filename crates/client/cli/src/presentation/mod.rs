//! Terminal presentation components used by the CLI client.
pub mod event_loop;
pub mod headless;
pub mod i18n;
pub mod terminal;
pub mod ui;

pub use event_loop::{EventLoop, LoopExit};
pub use headless::HeadlessRunner;
pub use i18n::Localizer;
