//! Library side of the `dfs` command-line lineup builder.

pub mod logging;
pub mod picks;
pub mod pipeline;
pub mod settings;
