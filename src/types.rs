//! This module defines the core data structures and types used throughout the
//! multi-tape Turing machine engine: directions, transition keys and values,
//! the formal machine description, step outcomes, and error types.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

/// Represents the possible directions a tape head can move after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Move the head one position to the right.
    Right,
    /// Keep the head in the same position.
    Stay,
}

/// The lookup key of the transition table: the current control state together
/// with the symbol currently under each tape's head.
///
/// Structural equality and hashing make this directly usable as a `HashMap`
/// key, which is what guarantees determinism (at most one transition per key).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionKey<Q, S> {
    /// The control state the machine must be in for this rule to apply.
    pub state: Q,
    /// The symbols that must be under the heads, one per tape.
    pub read: Vec<S>,
}

/// The value side of a transition table entry: the next control state, the
/// symbol to write on each tape, and the direction each head moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition<Q, S> {
    /// The control state the machine enters after applying this rule.
    pub next_state: Q,
    /// The symbols written under the heads, one per tape.
    pub write: Vec<S>,
    /// The head movements, one per tape.
    pub moves: Vec<Direction>,
}

/// The formal description of a multi-tape Turing machine.
///
/// States (`Q`) and symbols (`S`) are opaque tokens: anything clonable,
/// equality-comparable and hashable works. In practice most machines use
/// `&str` states and `char` symbols, but nothing in the engine assumes that.
///
/// Transitions are kept as a list in insertion order rather than a map, so
/// that validation reports the first offending entry deterministically and
/// duplicate keys are detected instead of silently overwritten. The
/// [`Machine`](crate::Machine) builds its `HashMap` lookup table from this
/// list after validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Description<Q, S>
where
    Q: Eq + Hash,
    S: Eq + Hash,
{
    /// The full set of control states.
    pub states: HashSet<Q>,
    /// The symbols that may appear in tape inputs. Must be a subset of the
    /// tape alphabet.
    pub input_alphabet: HashSet<S>,
    /// The symbols that may appear on a tape during execution.
    pub tape_alphabet: HashSet<S>,
    /// The reserved filler symbol. Implicitly a member of the tape alphabet
    /// whether or not it was declared there.
    pub blank: S,
    /// The transition rules in insertion order. Keys must be unique.
    pub transitions: Vec<(TransitionKey<Q, S>, Transition<Q, S>)>,
    /// The state the machine is in when a run begins.
    pub start: Q,
    /// The accepting halting state.
    pub accept: Q,
    /// The rejecting halting state.
    pub reject: Q,
    /// The number of tapes. Must be at least one.
    pub num_tapes: usize,
}

/// The outcome of a single [`Machine::step`](crate::Machine::step).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A transition matched and was applied.
    Applied,
    /// No transition matched the current state and head symbols. The machine
    /// stays in its current configuration; further steps keep stalling.
    Stalled,
    /// The machine is in a halting state (accept or reject). Nothing changed.
    Halted,
}

/// A construction-time violation of the machine description invariants.
///
/// Each variant carries the offending value so callers can surface it rather
/// than a generic failure message. These are only ever raised at
/// construction, never during `step` or `run`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DescriptionError<Q: Debug, S: Debug> {
    /// The start state is not a member of the state set.
    #[error("start state {0:?} is not in the state set")]
    UnknownStartState(Q),
    /// The accept state is not a member of the state set.
    #[error("accept state {0:?} is not in the state set")]
    UnknownAcceptState(Q),
    /// The reject state is not a member of the state set.
    #[error("reject state {0:?} is not in the state set")]
    UnknownRejectState(Q),
    /// An input alphabet symbol is missing from the tape alphabet.
    #[error("input symbol {0:?} is not in the tape alphabet")]
    InputSymbolOutsideTapeAlphabet(S),
    /// A transition key or value references a state outside the state set.
    #[error("transition references state {0:?} which is not in the state set")]
    UnknownTransitionState(Q),
    /// A transition reads or writes a symbol outside the tape alphabet.
    #[error("transition uses symbol {0:?} which is not in the tape alphabet")]
    SymbolOutsideTapeAlphabet(S),
    /// A transition's read, write, or direction list does not have one entry
    /// per tape.
    #[error("transition specifies {found} entries where the machine has {expected} tapes")]
    TapeArityMismatch {
        /// The machine's tape count.
        expected: usize,
        /// The number of entries the transition actually carries.
        found: usize,
    },
    /// Two transitions share the same (state, read symbols) key.
    #[error("duplicate transition for state {0:?} reading {1:?}")]
    DuplicateTransition(Q, Vec<S>),
    /// The description declares zero tapes.
    #[error("machine must have at least one tape")]
    NoTapes,
}

/// Represents the errors that can occur while constructing or driving a
/// [`Machine`](crate::Machine).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MachineError<Q: Debug, S: Debug> {
    /// The description violated an invariant; see [`DescriptionError`].
    #[error("{0}")]
    Description(DescriptionError<Q, S>),
    /// `initialize_tapes` was called with the wrong number of tape inputs.
    #[error("expected {expected} tape inputs, got {found}")]
    Input {
        /// The machine's tape count.
        expected: usize,
        /// The number of inputs supplied.
        found: usize,
    },
    /// A bounded run exceeded its maximum step count without halting.
    #[error("machine did not halt within {0} steps")]
    StepLimit(usize),
}

impl<Q: Debug, S: Debug> From<DescriptionError<Q, S>> for MachineError<Q, S> {
    fn from(error: DescriptionError<Q, S>) -> Self {
        MachineError::Description(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_serialization() {
        let left = Direction::Left;
        let stay = Direction::Stay;

        let left_json = serde_json::to_string(&left).unwrap();
        let stay_json = serde_json::to_string(&stay).unwrap();

        assert_eq!(left_json, "\"Left\"");
        assert_eq!(stay_json, "\"Stay\"");

        let left_deserialized: Direction = serde_json::from_str(&left_json).unwrap();
        let stay_deserialized: Direction = serde_json::from_str(&stay_json).unwrap();

        assert_eq!(left, left_deserialized);
        assert_eq!(stay, stay_deserialized);
    }

    #[test]
    fn test_transition_creation() {
        let transition = Transition {
            next_state: "q1",
            write: vec!['X'],
            moves: vec![Direction::Right],
        };

        assert_eq!(transition.next_state, "q1");
        assert_eq!(transition.write, vec!['X']);
        assert_eq!(transition.moves, vec![Direction::Right]);
    }

    #[test]
    fn test_transition_key_equality() {
        let a = TransitionKey {
            state: "q0",
            read: vec!['1', 'B'],
        };
        let b = TransitionKey {
            state: "q0",
            read: vec!['1', 'B'],
        };
        let c = TransitionKey {
            state: "q0",
            read: vec!['B', '1'],
        };

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_description_serialization_round_trip() {
        let description = crate::programs::unary_increment();

        let json = serde_json::to_string(&description).unwrap();
        let decoded: Description<String, char> = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded.start, description.start);
        assert_eq!(decoded.num_tapes, description.num_tapes);
        assert_eq!(decoded.transitions.len(), description.transitions.len());
    }

    #[test]
    fn test_error_display() {
        let error: DescriptionError<&str, char> = DescriptionError::UnknownStartState("q0");

        let error_msg = format!("{}", error);
        assert!(error_msg.contains("start state"));
        assert!(error_msg.contains("q0"));
    }

    #[test]
    fn test_input_error_display() {
        let error: MachineError<&str, char> = MachineError::Input {
            expected: 2,
            found: 3,
        };

        let error_msg = format!("{}", error);
        assert!(error_msg.contains("expected 2 tape inputs"));
        assert!(error_msg.contains("got 3"));
    }
}
