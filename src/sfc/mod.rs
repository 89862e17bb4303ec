pub mod block;
pub mod locator;

pub use block::TemplateBlock;
pub use locator::locate_template;
