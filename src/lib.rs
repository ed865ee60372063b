//! yamato-jobs: cross-referenced Yamato CI job generation.
//!
//! Independent generators each produce jobs for one category and refer to
//! jobs of other categories by a `{file}#{job id}` reference computed from
//! descriptor fields alone, so no generator needs another's output.

pub mod cli;
pub mod commands;
pub mod config;
pub mod descriptor;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod generators;
pub mod job;
pub mod logging;
pub mod metafile;
pub mod naming;
pub mod plan;
