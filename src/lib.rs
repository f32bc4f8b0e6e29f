#![allow(async_fn_in_trait)]

pub mod analysis;
pub mod errors;
pub mod helper_methods;
pub mod logging;
pub mod pipeline;
pub mod report;
#[cfg(test)]
pub mod testing_helper_methods;
pub mod timeline;

/// Separator used when joining original post texts into one scoring corpus.
pub const CORPUS_SEPARATOR: &str = ". ";
