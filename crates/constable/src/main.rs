//! constable - regenerates platform constant tables from kernel sources
//!
//! Usage:
//!   constable syscalls <LINUX_SRC>           Regenerate nr.rs for every Linux arch
//!   constable errno <LINUX_SRC>              Regenerate eno.rs for every Linux arch
//!   constable bsd-errno <ERRNO_H> <OS>       Regenerate eno.rs for a BSD-family OS

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod baselines;
mod commands;
mod corpus;
mod profiles;

use commands::BsdOs;

#[derive(Parser)]
#[command(name = "constable")]
#[command(about = "Regenerates per-architecture errno and syscall number tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the generated per-platform modules
    #[arg(long, default_value = "src/platform")]
    out_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate syscall number tables (nr.rs) for every Linux architecture
    Syscalls {
        /// Path to the Linux kernel source tree
        linux_src: PathBuf,
    },
    /// Regenerate error number tables (eno.rs) for every Linux architecture
    Errno {
        /// Path to the Linux kernel source tree
        linux_src: PathBuf,
    },
    /// Regenerate error number tables for a BSD-family platform from its errno.h
    BsdErrno {
        /// Path to the platform's errno.h
        errno_header: PathBuf,
        /// Target platform family
        os: BsdOs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Syscalls { linux_src } => commands::run_syscalls(&linux_src, &cli.out_dir),
        Commands::Errno { linux_src } => commands::run_errno(&linux_src, &cli.out_dir),
        Commands::BsdErrno { errno_header, os } => {
            commands::run_bsd_errno(&errno_header, os, &cli.out_dir)
        }
    }
}
