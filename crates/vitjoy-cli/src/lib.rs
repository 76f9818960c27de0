// NOTE: vitjoy CLI layering
//
// args       - clap surface, wire spellings of enum flags
// commands   - dispatcher: resolves the data dir once, opens the catalog,
//              routes to handlers
// handlers   - one module per operation (list/show/doctor/display/browse)
// presentation - shared text formatting (prices, badges, truncation)
//
// The CLI never reimplements catalog semantics: filtering/sorting lives in
// vitjoy-engine, persistence in vitjoy-runtime.

mod args;
mod commands;
mod handlers;
mod presentation;

pub use args::{Cli, Commands};
pub use commands::run;
