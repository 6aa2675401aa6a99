//! Version-control status overlay.
//!
//! Wraps one `git status --porcelain` invocation into a path → status
//! mapping. The rest of the program only sees the [`StatusProvider`]
//! capability; when git is unavailable (no repository, executable missing,
//! non-zero exit) the mapping is simply empty and no error reaches the user.

mod status;

pub use status::EmptyStatus;
pub use status::FileStatus;
pub use status::GitStatus;
pub use status::StatusProvider;
