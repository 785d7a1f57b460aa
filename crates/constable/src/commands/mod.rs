//! Command handlers for the constable CLI, one submodule per generated
//! table family.

mod bsd_errno;
mod errno;
mod syscalls;

pub use bsd_errno::{run_bsd_errno, BsdOs};
pub use errno::run_errno;
pub use syscalls::run_syscalls;
