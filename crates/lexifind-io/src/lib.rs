pub mod clipboard;
pub mod native;

pub use clipboard::ClipboardShare;
pub use native::CommandShare;
