/*!
Miscellaneous items related to [logging](log).

Calls to the log macros are made throughout the library, with a target naming
the part of the solver the entry relates to.
No log implementation is provided; when used with
[env_logger](https://docs.rs/env_logger/latest/env_logger/), for example,
entries from clause database reduction alone can be read with
`RUST_LOG=reduction …`.
*/

/// Targets used within the log macros.
pub mod targets {
    pub const ANALYSIS: &str = "analysis";
    pub const BACKJUMP: &str = "backjump";
    pub const CLAUSE_DB: &str = "clause_db";
    pub const PROPAGATION: &str = "propagation";
    pub const REDUCTION: &str = "reduction";
    pub const SOLVE: &str = "solve";
}
