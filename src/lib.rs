//! This crate provides the core engine for a deterministic multi-tape Turing
//! machine. It includes modules for describing a machine as structured data,
//! validating that description, executing it step by step or to completion,
//! and a catalog of predefined machines.
//!
//! # Example
//!
//! ```
//! use multitape::{programs, Machine};
//!
//! let mut machine = Machine::new(programs::unary_increment()).unwrap();
//! assert_eq!(machine.run_str(&["11"]), Ok(true));
//! assert_eq!(machine.tapes_as_strings(), vec!["111".to_string()]);
//! ```

pub mod machine;
pub mod programs;
pub mod types;
pub mod validate;

/// Re-exports the `Machine` struct from the machine module.
pub use machine::Machine;
/// Re-exports `ProgramInfo`, the `by_name` lookup, and the `PROGRAMS` catalog
/// from the programs module.
pub use programs::{by_name, ProgramInfo, PROGRAMS};
/// Re-exports the core types for machine definition and execution from the
/// types module.
pub use types::{
    Description, DescriptionError, Direction, MachineError, Step, Transition, TransitionKey,
};
/// Re-exports the `validate` function from the validate module.
pub use validate::validate;
