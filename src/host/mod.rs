mod fs;
mod traits;

pub use fs::{FsHost, HostAction, Viewport};
pub use traits::{EditorHost, RevealPolicy};
