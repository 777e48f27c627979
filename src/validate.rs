//! This module validates a machine [`Description`] before execution. It checks
//! the designated states, the alphabet containment rule, and every transition
//! table entry, reporting the first violation it finds.

use crate::types::{Description, DescriptionError, TransitionKey};
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Validates a machine description against all construction-time invariants.
///
/// The checks run in a fixed order and transitions are examined in insertion
/// order, so the reported error is deterministic for a given description.
///
/// # Returns
///
/// * `Ok(())` if every invariant holds.
/// * `Err(DescriptionError)` naming the first violated invariant and the
///   offending value.
pub fn validate<Q, S>(description: &Description<Q, S>) -> Result<(), DescriptionError<Q, S>>
where
    Q: Clone + Eq + Hash + Debug,
    S: Clone + Eq + Hash + Debug,
{
    let checks: [fn(&Description<Q, S>) -> Result<(), DescriptionError<Q, S>>; 5] = [
        check_shape,
        check_designated_states,
        check_input_alphabet,
        check_transitions,
        check_duplicate_keys,
    ];

    checks
        .iter()
        .find_map(|check| check(description).err())
        .map_or(Ok(()), Err)
}

/// Whether a symbol may legally appear on a tape. The blank is always a
/// member of the tape alphabet, declared or not.
fn in_tape_alphabet<Q, S>(description: &Description<Q, S>, symbol: &S) -> bool
where
    Q: Eq + Hash,
    S: Eq + Hash,
{
    *symbol == description.blank || description.tape_alphabet.contains(symbol)
}

/// Checks basic structural requirements: the machine must have at least one
/// tape.
fn check_shape<Q, S>(description: &Description<Q, S>) -> Result<(), DescriptionError<Q, S>>
where
    Q: Clone + Eq + Hash + Debug,
    S: Clone + Eq + Hash + Debug,
{
    if description.num_tapes == 0 {
        return Err(DescriptionError::NoTapes);
    }

    Ok(())
}

/// Checks that the start, accept, and reject states are members of the state
/// set.
fn check_designated_states<Q, S>(
    description: &Description<Q, S>,
) -> Result<(), DescriptionError<Q, S>>
where
    Q: Clone + Eq + Hash + Debug,
    S: Clone + Eq + Hash + Debug,
{
    if !description.states.contains(&description.start) {
        return Err(DescriptionError::UnknownStartState(
            description.start.clone(),
        ));
    }
    if !description.states.contains(&description.accept) {
        return Err(DescriptionError::UnknownAcceptState(
            description.accept.clone(),
        ));
    }
    if !description.states.contains(&description.reject) {
        return Err(DescriptionError::UnknownRejectState(
            description.reject.clone(),
        ));
    }

    Ok(())
}

/// Checks that the input alphabet is a subset of the tape alphabet.
fn check_input_alphabet<Q, S>(description: &Description<Q, S>) -> Result<(), DescriptionError<Q, S>>
where
    Q: Clone + Eq + Hash + Debug,
    S: Clone + Eq + Hash + Debug,
{
    description
        .input_alphabet
        .iter()
        .find(|symbol| !in_tape_alphabet(description, symbol))
        .map_or(Ok(()), |symbol| {
            Err(DescriptionError::InputSymbolOutsideTapeAlphabet(
                symbol.clone(),
            ))
        })
}

/// Checks every transition table entry in insertion order: the read, write,
/// and direction lists must have one entry per tape, both states must belong
/// to the state set, and every symbol must belong to the tape alphabet.
fn check_transitions<Q, S>(description: &Description<Q, S>) -> Result<(), DescriptionError<Q, S>>
where
    Q: Clone + Eq + Hash + Debug,
    S: Clone + Eq + Hash + Debug,
{
    let num_tapes = description.num_tapes;

    for (key, transition) in &description.transitions {
        for found in [key.read.len(), transition.write.len(), transition.moves.len()] {
            if found != num_tapes {
                return Err(DescriptionError::TapeArityMismatch {
                    expected: num_tapes,
                    found,
                });
            }
        }

        if !description.states.contains(&key.state) {
            return Err(DescriptionError::UnknownTransitionState(key.state.clone()));
        }
        if !description.states.contains(&transition.next_state) {
            return Err(DescriptionError::UnknownTransitionState(
                transition.next_state.clone(),
            ));
        }

        for symbol in key.read.iter().chain(&transition.write) {
            if !in_tape_alphabet(description, symbol) {
                return Err(DescriptionError::SymbolOutsideTapeAlphabet(symbol.clone()));
            }
        }
    }

    Ok(())
}

/// Checks that no two transitions share the same (state, read symbols) key.
/// A duplicate would make the table non-deterministic, or silently lose a
/// rule once entries are folded into the lookup map.
fn check_duplicate_keys<Q, S>(
    description: &Description<Q, S>,
) -> Result<(), DescriptionError<Q, S>>
where
    Q: Clone + Eq + Hash + Debug,
    S: Clone + Eq + Hash + Debug,
{
    let mut seen: HashSet<&TransitionKey<Q, S>> = HashSet::new();

    for (key, _) in &description.transitions {
        if !seen.insert(key) {
            return Err(DescriptionError::DuplicateTransition(
                key.state.clone(),
                key.read.clone(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, Transition};
    use std::collections::HashSet;

    fn increment_description() -> Description<&'static str, char> {
        Description {
            states: HashSet::from(["q0", "qAccept", "qReject"]),
            input_alphabet: HashSet::from(['1']),
            tape_alphabet: HashSet::from(['0', '1', 'B']),
            blank: 'B',
            transitions: vec![
                (
                    TransitionKey {
                        state: "q0",
                        read: vec!['1'],
                    },
                    Transition {
                        next_state: "q0",
                        write: vec!['1'],
                        moves: vec![Direction::Right],
                    },
                ),
                (
                    TransitionKey {
                        state: "q0",
                        read: vec!['B'],
                    },
                    Transition {
                        next_state: "qAccept",
                        write: vec!['1'],
                        moves: vec![Direction::Stay],
                    },
                ),
            ],
            start: "q0",
            accept: "qAccept",
            reject: "qReject",
            num_tapes: 1,
        }
    }

    #[test]
    fn test_valid_description() {
        assert_eq!(validate(&increment_description()), Ok(()));
    }

    #[test]
    fn test_unknown_start_state() {
        let mut description = increment_description();
        description.start = "missing";

        assert_eq!(
            validate(&description),
            Err(DescriptionError::UnknownStartState("missing"))
        );
    }

    #[test]
    fn test_unknown_accept_state() {
        let mut description = increment_description();
        description.accept = "missing";

        assert_eq!(
            validate(&description),
            Err(DescriptionError::UnknownAcceptState("missing"))
        );
    }

    #[test]
    fn test_unknown_reject_state() {
        let mut description = increment_description();
        description.reject = "missing";

        assert_eq!(
            validate(&description),
            Err(DescriptionError::UnknownRejectState("missing"))
        );
    }

    #[test]
    fn test_input_alphabet_not_subset() {
        let mut description = increment_description();
        description.input_alphabet.insert('x');

        assert_eq!(
            validate(&description),
            Err(DescriptionError::InputSymbolOutsideTapeAlphabet('x'))
        );
    }

    #[test]
    fn test_undeclared_blank_is_allowed() {
        let mut description = increment_description();
        description.tape_alphabet.remove(&'B');

        // The blank is implicitly part of the tape alphabet, so transitions
        // reading or writing it stay valid.
        assert_eq!(validate(&description), Ok(()));
    }

    #[test]
    fn test_transition_with_unknown_key_state() {
        let mut description = increment_description();
        description.transitions[0].0.state = "ghost";

        assert_eq!(
            validate(&description),
            Err(DescriptionError::UnknownTransitionState("ghost"))
        );
    }

    #[test]
    fn test_transition_with_unknown_next_state() {
        let mut description = increment_description();
        description.transitions[1].1.next_state = "ghost";

        assert_eq!(
            validate(&description),
            Err(DescriptionError::UnknownTransitionState("ghost"))
        );
    }

    #[test]
    fn test_transition_with_unknown_symbol() {
        let mut description = increment_description();
        description.transitions[0].1.write = vec!['z'];

        assert_eq!(
            validate(&description),
            Err(DescriptionError::SymbolOutsideTapeAlphabet('z'))
        );
    }

    #[test]
    fn test_transition_with_wrong_direction_count() {
        let mut description = increment_description();
        description.transitions[0].1.moves = vec![Direction::Right, Direction::Left];

        assert_eq!(
            validate(&description),
            Err(DescriptionError::TapeArityMismatch {
                expected: 1,
                found: 2,
            })
        );
    }

    #[test]
    fn test_duplicate_transition_key() {
        let mut description = increment_description();
        let duplicate = description.transitions[0].clone();
        description.transitions.push(duplicate);

        assert_eq!(
            validate(&description),
            Err(DescriptionError::DuplicateTransition("q0", vec!['1']))
        );
    }

    #[test]
    fn test_zero_tapes() {
        let mut description = increment_description();
        description.num_tapes = 0;
        description.transitions.clear();

        assert_eq!(validate(&description), Err(DescriptionError::NoTapes));
    }

    #[test]
    fn test_first_transition_error_wins() {
        let mut description = increment_description();
        description.transitions[0].1.write = vec!['y'];
        description.transitions[1].1.write = vec!['z'];

        // Entries are checked in insertion order, so the earlier bad write
        // symbol is the one reported.
        assert_eq!(
            validate(&description),
            Err(DescriptionError::SymbolOutsideTapeAlphabet('y'))
        );
    }
}
