//! This module defines the [`Machine`] struct, which simulates a multi-tape
//! Turing machine. It handles the machine's state, tape operations, head
//! movements, and execution of the validated transition table.

use crate::types::{Description, Direction, MachineError, Step, Transition, TransitionKey};
use crate::validate::validate;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A multi-tape Turing machine.
///
/// The machine owns an immutable, validated [`Description`] plus the mutable
/// run state: one dynamically growing tape per declared tape, one head index
/// per tape, and the current control state. The static description never
/// changes after construction; the run state is reset by
/// [`initialize_tapes`](Machine::initialize_tapes) and mutated only by
/// [`step`](Machine::step).
///
/// Every head index stays within `[0, tape length)` at all times: a head
/// that would leave the written region triggers a one-blank extension of
/// that tape instead.
pub struct Machine<Q, S>
where
    Q: Eq + Hash,
    S: Eq + Hash,
{
    description: Description<Q, S>,
    table: HashMap<TransitionKey<Q, S>, Transition<Q, S>>,
    tapes: Vec<Vec<S>>,
    initial_tapes: Vec<Vec<S>>,
    heads: Vec<usize>,
    state: Q,
    step_count: usize,
}

impl<Q, S> Machine<Q, S>
where
    Q: Clone + Eq + Hash + Debug,
    S: Clone + Eq + Hash + Debug,
{
    /// Creates a new `Machine` from a formal description, validating it
    /// immediately.
    ///
    /// Until [`initialize_tapes`](Machine::initialize_tapes) is called, each
    /// tape holds a single blank cell. Each tape is allocated independently;
    /// no storage is ever shared between tapes.
    ///
    /// # Returns
    ///
    /// * `Ok(Machine)` if the description satisfies all invariants.
    /// * `Err(MachineError::Description(_))` naming the first violated
    ///   invariant otherwise.
    pub fn new(description: Description<Q, S>) -> Result<Self, MachineError<Q, S>> {
        validate(&description)?;

        // Duplicate keys were rejected by validation, so folding into the
        // lookup map cannot lose an entry.
        let table: HashMap<TransitionKey<Q, S>, Transition<Q, S>> =
            description.transitions.iter().cloned().collect();

        let tapes: Vec<Vec<S>> = (0..description.num_tapes)
            .map(|_| vec![description.blank.clone()])
            .collect();
        let initial_tapes = tapes.clone();
        let heads = vec![0; description.num_tapes];
        let state = description.start.clone();

        Ok(Self {
            description,
            table,
            tapes,
            initial_tapes,
            heads,
            state,
            step_count: 0,
        })
    }

    /// Arms the machine for a run: each tape becomes the corresponding input
    /// followed by one blank, every head returns to index 0, the control
    /// state returns to the start state, and the step counter resets.
    ///
    /// Callable any number of times; each call fully discards the previous
    /// run's tapes and head positions.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if exactly one input was supplied per tape.
    /// * `Err(MachineError::Input { .. })` on a count mismatch.
    pub fn initialize_tapes(&mut self, inputs: &[Vec<S>]) -> Result<(), MachineError<Q, S>> {
        if inputs.len() != self.description.num_tapes {
            return Err(MachineError::Input {
                expected: self.description.num_tapes,
                found: inputs.len(),
            });
        }

        self.tapes = inputs
            .iter()
            .map(|input| {
                let mut tape = input.clone();
                tape.push(self.description.blank.clone());
                tape
            })
            .collect();
        self.initial_tapes = self.tapes.clone();
        self.heads = vec![0; self.description.num_tapes];
        self.state = self.description.start.clone();
        self.step_count = 0;

        Ok(())
    }

    /// Restores the run state produced by the last
    /// [`initialize_tapes`](Machine::initialize_tapes) call, so the same
    /// inputs can be run again.
    pub fn reset(&mut self) {
        self.tapes = self.initial_tapes.clone();
        self.heads = vec![0; self.description.num_tapes];
        self.state = self.description.start.clone();
        self.step_count = 0;
    }

    /// Executes a single step: read the symbol under each head, look up the
    /// transition for (state, symbols), write the new symbols, move the
    /// heads, and enter the next state.
    ///
    /// A head moving past either end of its tape grows the tape by one blank
    /// at that end. Moving left from index 0 prepends a blank and leaves the
    /// head at index 0, shifting the existing content up by one.
    ///
    /// # Returns
    ///
    /// * [`Step::Halted`] if the machine is already in accept or reject;
    ///   nothing is mutated.
    /// * [`Step::Stalled`] if no transition matches the current
    ///   configuration; nothing is mutated and every further step stalls the
    ///   same way.
    /// * [`Step::Applied`] otherwise.
    pub fn step(&mut self) -> Step {
        if self.is_halted() {
            return Step::Halted;
        }

        let key = TransitionKey {
            state: self.state.clone(),
            read: self.symbols(),
        };
        let transition = match self.table.get(&key) {
            Some(transition) => transition.clone(),
            None => return Step::Stalled,
        };

        for i in 0..self.tapes.len() {
            let head = self.heads[i];
            self.tapes[i][head] = transition.write[i].clone();

            match transition.moves[i] {
                Direction::Left => {
                    if self.heads[i] == 0 {
                        // Extend the tape to the left; the head lands on the
                        // freshly inserted blank at index 0.
                        self.tapes[i].insert(0, self.description.blank.clone());
                    } else {
                        self.heads[i] -= 1;
                    }
                }
                Direction::Right => {
                    self.heads[i] += 1;
                    if self.heads[i] >= self.tapes[i].len() {
                        self.tapes[i].push(self.description.blank.clone());
                    }
                }
                Direction::Stay => {}
            }
        }

        self.state = transition.next_state.clone();
        self.step_count += 1;

        Step::Applied
    }

    /// Runs the machine to completion on the given inputs.
    ///
    /// Steps until the machine reaches accept or reject. Does not return if
    /// the machine never halts (including a permanent stall on a missing
    /// transition); use [`run_bounded`](Machine::run_bounded) when bounded
    /// execution is needed.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if the machine halted in the accept state.
    /// * `Ok(false)` if it halted in the reject state.
    /// * `Err(MachineError::Input { .. })` on a tape input count mismatch.
    pub fn run(&mut self, inputs: &[Vec<S>]) -> Result<bool, MachineError<Q, S>> {
        self.initialize_tapes(inputs)?;

        while !self.is_halted() {
            self.step();
        }

        Ok(self.is_accepted())
    }

    /// Runs the machine on the given inputs, giving up after `max_steps`
    /// steps.
    ///
    /// The final configuration stays inspectable after an exceeded limit:
    /// exactly `max_steps` steps were taken (stalled steps included, each
    /// leaving the state unchanged).
    ///
    /// # Returns
    ///
    /// * `Ok(accepted)` if the machine halted within the limit.
    /// * `Err(MachineError::StepLimit(max_steps))` if it was still running
    ///   after `max_steps` steps.
    /// * `Err(MachineError::Input { .. })` on a tape input count mismatch.
    pub fn run_bounded(
        &mut self,
        inputs: &[Vec<S>],
        max_steps: usize,
    ) -> Result<bool, MachineError<Q, S>> {
        self.initialize_tapes(inputs)?;

        for _ in 0..max_steps {
            if self.is_halted() {
                return Ok(self.is_accepted());
            }
            self.step();
        }

        if self.is_halted() {
            Ok(self.is_accepted())
        } else {
            Err(MachineError::StepLimit(max_steps))
        }
    }

    /// Checks whether the machine is in a halting state (accept or reject).
    pub fn is_halted(&self) -> bool {
        self.state == self.description.accept || self.state == self.description.reject
    }

    /// Checks whether the machine is in the accept state.
    pub fn is_accepted(&self) -> bool {
        self.state == self.description.accept
    }

    /// Returns the current control state.
    pub fn current_state(&self) -> &Q {
        &self.state
    }

    /// Returns the contents of tape `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not a valid tape index.
    pub fn tape(&self, i: usize) -> &[S] {
        &self.tapes[i]
    }

    /// Returns all tapes.
    pub fn tapes(&self) -> &[Vec<S>] {
        &self.tapes
    }

    /// Returns the head position on tape `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not a valid tape index.
    pub fn head(&self, i: usize) -> usize {
        self.heads[i]
    }

    /// Returns all head positions.
    pub fn heads(&self) -> &[usize] {
        &self.heads
    }

    /// Returns the symbols currently under each tape's head.
    pub fn symbols(&self) -> Vec<S> {
        // Heads are kept within bounds by `step`, so direct indexing holds.
        self.heads
            .iter()
            .enumerate()
            .map(|(i, &pos)| self.tapes[i][pos].clone())
            .collect()
    }

    /// Returns the number of steps taken since the last
    /// [`initialize_tapes`](Machine::initialize_tapes) or
    /// [`reset`](Machine::reset).
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Returns the blank symbol.
    pub fn blank(&self) -> &S {
        &self.description.blank
    }

    /// Returns the validated description this machine was built from.
    pub fn description(&self) -> &Description<Q, S> {
        &self.description
    }
}

impl<Q> Machine<Q, char>
where
    Q: Clone + Eq + Hash + Debug,
{
    /// Arms the machine from string inputs, one per tape. Convenience for
    /// `char`-symbol machines.
    pub fn initialize_tapes_str(&mut self, inputs: &[&str]) -> Result<(), MachineError<Q, char>> {
        let inputs: Vec<Vec<char>> = inputs.iter().map(|input| input.chars().collect()).collect();
        self.initialize_tapes(&inputs)
    }

    /// Runs the machine on string inputs, one per tape.
    pub fn run_str(&mut self, inputs: &[&str]) -> Result<bool, MachineError<Q, char>> {
        let inputs: Vec<Vec<char>> = inputs.iter().map(|input| input.chars().collect()).collect();
        self.run(&inputs)
    }

    /// Returns each tape's contents joined into a `String`. This is what a
    /// presentation layer renders, together with [`heads`](Machine::heads)
    /// for the position markers.
    pub fn tapes_as_strings(&self) -> Vec<String> {
        self.tapes
            .iter()
            .map(|tape| tape.iter().collect())
            .collect()
    }
}
