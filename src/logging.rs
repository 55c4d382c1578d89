/*!
Targets for the [log] macros used throughout the crate.

No logger is installed by the library; the binary sets up [env_logger](https://docs.rs/env_logger),
so e.g. `RUST_LOG=bridge=debug error404` shows the clauses handed to the solver.
*/

/// Target names to be used within a [log]! macro.
pub mod targets {
    /// Scenario selection and input comparison
    pub const GAME: &str = "game";

    /// Rule table lookups
    pub const CATALOG: &str = "catalog";

    /// Clause construction and solver calls
    pub const BRIDGE: &str = "bridge";
}
