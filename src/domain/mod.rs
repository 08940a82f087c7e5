pub mod cursor;
pub mod posting;
pub mod thread;

pub use cursor::Cursor;
pub use posting::Posting;
pub use thread::HiringThread;
