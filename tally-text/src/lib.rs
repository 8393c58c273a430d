mod cursor;
mod span;

pub use cursor::Cursor;
pub use span::Span;
