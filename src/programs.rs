//! A catalog of predefined machine descriptions, built directly as structured
//! data. Useful as ready-made demos and as fixtures for consumers of the
//! engine.

use crate::types::{Description, Direction, Transition, TransitionKey};
use std::collections::HashSet;

/// The state and symbol tokens the catalog machines use.
pub type CharDescription = Description<&'static str, char>;

/// A named entry in the catalog.
pub struct ProgramInfo {
    /// A short kebab-case identifier.
    pub name: &'static str,
    /// What the machine computes.
    pub summary: &'static str,
    /// The machine description itself.
    pub description: CharDescription,
}

lazy_static::lazy_static! {
    /// All predefined machine descriptions.
    pub static ref PROGRAMS: Vec<ProgramInfo> = vec![
        ProgramInfo {
            name: "unary-increment",
            summary: "Appends a 1 to a unary number on a single tape",
            description: unary_increment(),
        },
        ProgramInfo {
            name: "binary-compare",
            summary: "Accepts iff two binary tapes hold the same word",
            description: binary_compare(),
        },
        ProgramInfo {
            name: "tape-copy",
            summary: "Copies a binary word from tape 1 onto tape 2",
            description: tape_copy(),
        },
    ];
}

/// Looks up a catalog entry by name.
pub fn by_name(name: &str) -> Option<&'static ProgramInfo> {
    PROGRAMS.iter().find(|info| info.name == name)
}

fn rule(
    state: &'static str,
    read: &[char],
    next_state: &'static str,
    write: &[char],
    moves: &[Direction],
) -> (
    TransitionKey<&'static str, char>,
    Transition<&'static str, char>,
) {
    (
        TransitionKey {
            state,
            read: read.to_vec(),
        },
        Transition {
            next_state,
            write: write.to_vec(),
            moves: moves.to_vec(),
        },
    )
}

/// A single-tape machine over {0, 1, B} that appends a '1' to a unary
/// number: it scans right over the 1s and writes a '1' on the first blank.
pub fn unary_increment() -> CharDescription {
    Description {
        states: HashSet::from(["q0", "qAccept", "qReject"]),
        input_alphabet: HashSet::from(['1']),
        tape_alphabet: HashSet::from(['0', '1', 'B']),
        blank: 'B',
        transitions: vec![
            rule("q0", &['1'], "q0", &['1'], &[Direction::Right]),
            rule("q0", &['B'], "qAccept", &['1'], &[Direction::Stay]),
        ],
        start: "q0",
        accept: "qAccept",
        reject: "qReject",
        num_tapes: 1,
    }
}

/// A two-tape machine that compares two binary words symbol by symbol,
/// moving both heads right on every match. It accepts on a simultaneous
/// blank and rejects on the first mismatch, including words of different
/// length.
pub fn binary_compare() -> CharDescription {
    let mut transitions = vec![
        rule(
            "q0",
            &['0', '0'],
            "q0",
            &['0', '0'],
            &[Direction::Right, Direction::Right],
        ),
        rule(
            "q0",
            &['1', '1'],
            "q0",
            &['1', '1'],
            &[Direction::Right, Direction::Right],
        ),
        rule(
            "q0",
            &['B', 'B'],
            "qAccept",
            &['B', 'B'],
            &[Direction::Stay, Direction::Stay],
        ),
    ];

    // Every differing pair goes straight to reject.
    for (a, b) in [
        ('0', '1'),
        ('1', '0'),
        ('0', 'B'),
        ('B', '0'),
        ('1', 'B'),
        ('B', '1'),
    ] {
        transitions.push(rule(
            "q0",
            &[a, b],
            "qReject",
            &[a, b],
            &[Direction::Stay, Direction::Stay],
        ));
    }

    Description {
        states: HashSet::from(["q0", "qAccept", "qReject"]),
        input_alphabet: HashSet::from(['0', '1']),
        tape_alphabet: HashSet::from(['0', '1', 'B']),
        blank: 'B',
        transitions,
        start: "q0",
        accept: "qAccept",
        reject: "qReject",
        num_tapes: 2,
    }
}

/// A two-tape machine that copies the binary word on tape 1 onto the blank
/// tape 2, accepting when tape 1 runs out.
pub fn tape_copy() -> CharDescription {
    Description {
        states: HashSet::from(["q0", "qAccept", "qReject"]),
        input_alphabet: HashSet::from(['0', '1']),
        tape_alphabet: HashSet::from(['0', '1', 'B']),
        blank: 'B',
        transitions: vec![
            rule(
                "q0",
                &['0', 'B'],
                "q0",
                &['0', '0'],
                &[Direction::Right, Direction::Right],
            ),
            rule(
                "q0",
                &['1', 'B'],
                "q0",
                &['1', '1'],
                &[Direction::Right, Direction::Right],
            ),
            rule(
                "q0",
                &['B', 'B'],
                "qAccept",
                &['B', 'B'],
                &[Direction::Stay, Direction::Stay],
            ),
        ],
        start: "q0",
        accept: "qAccept",
        reject: "qReject",
        num_tapes: 2,
    }
}
