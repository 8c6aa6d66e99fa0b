//! CLI subcommand modules.
//!
//! This module contains the implementations for all verdict CLI subcommands.

pub(crate) mod analyze;
pub(crate) mod fuse;
pub(crate) mod quick;
pub(crate) mod strategies;

/// Print a boxed section header.
pub(crate) fn banner(title: &str) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║ {title:^60} ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
}
