use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use thiserror::Error;

/// Why a candidate list was rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("at least two choices are required")]
    TooFew,

    #[error("choices must be distinct")]
    NotDistinct,
}

/// Why a mark or query operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("no choices have been set")]
    NotReady,

    #[error("not one of the available choices")]
    InvalidChoice,
}

/// A fixed list of choices and the user's current selection of them.
///
/// Give it the available choices up front and mark choices as the user
/// toggles them:
///
/// ```
/// use multipick::choice::ChoiceSet;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut set = ChoiceSet::new(vec!["tea", "coffee", "water"])?;
/// set.mark_selected(&"coffee")?;
///
/// assert_eq!(
///     set.snapshot(),
///     vec![("tea", false), ("coffee", true), ("water", false)],
/// );
/// # Ok(())
/// # }
/// ```
///
/// Construction validates the candidates: fewer than two entries, or any
/// duplicate by value equality, is rejected and nothing is built. The choice
/// order is fixed for the lifetime of the set and [`ChoiceSet::snapshot`]
/// always reports in that order. A set can also start from
/// `(choice, selected)` pairs via [`ChoiceSet::with_preset`].
pub struct ChoiceSet<T> {
    inner: Inner<T>,
}

enum Inner<T> {
    /// No choices bound yet. Marks and queries fail with `NotReady`.
    Empty,
    Ready {
        choices: Vec<T>,
        states: HashMap<T, bool>,
    },
}

impl<T> Default for ChoiceSet<T> {
    fn default() -> Self {
        Self { inner: Inner::Empty }
    }
}

impl<T: Eq + Hash + Clone> ChoiceSet<T> {
    /// An inert set with no choices. Useful as a placeholder until a
    /// validated set replaces it; never fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validates `choices` and builds a set with every choice unselected.
    pub fn new(choices: Vec<T>) -> Result<Self, BuildError> {
        Self::check(&choices)?;

        let states = choices.iter().map(|c| (c.clone(), false)).collect();

        Ok(Self {
            inner: Inner::Ready { choices, states },
        })
    }

    /// Builds a set from `(choice, selected)` pairs. Pair order becomes the
    /// choice order and each pair's boolean becomes its starting state.
    pub fn with_preset(pairs: Vec<(T, bool)>) -> Result<Self, BuildError> {
        let choices: Vec<T> = pairs.iter().map(|(choice, _)| choice.clone()).collect();
        Self::check(&choices)?;

        let mut states: HashMap<T, bool> =
            choices.iter().map(|c| (c.clone(), false)).collect();
        for (choice, selected) in pairs {
            states.insert(choice, selected);
        }

        Ok(Self {
            inner: Inner::Ready { choices, states },
        })
    }

    /// Pure pre-check for a candidate list: at least two entries, no
    /// duplicates by value equality. The constructors run this themselves;
    /// it is public so callers can vet a list before committing to one.
    pub fn check(candidates: &[T]) -> Result<(), BuildError> {
        if candidates.len() < 2 {
            return Err(BuildError::TooFew);
        }

        let distinct: HashSet<&T> = candidates.iter().collect();
        if distinct.len() != candidates.len() {
            return Err(BuildError::NotDistinct);
        }

        Ok(())
    }

    /// Whether this set was built through a validated constructor.
    pub fn is_ready(&self) -> bool {
        matches!(self.inner, Inner::Ready { .. })
    }

    /// The available choices, in construction order. Empty on an inert set.
    pub fn choices(&self) -> &[T] {
        match &self.inner {
            Inner::Empty => &[],
            Inner::Ready { choices, .. } => choices,
        }
    }

    pub fn len(&self) -> usize {
        self.choices().len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices().is_empty()
    }

    /// Marks `choice` as selected. Selecting an already-selected choice is
    /// a no-op success.
    pub fn mark_selected(&mut self, choice: &T) -> Result<(), ChoiceError> {
        self.set_state(choice, true)
    }

    /// Marks `choice` as unselected. Idempotent, like `mark_selected`.
    pub fn mark_unselected(&mut self, choice: &T) -> Result<(), ChoiceError> {
        self.set_state(choice, false)
    }

    fn set_state(&mut self, choice: &T, selected: bool) -> Result<(), ChoiceError> {
        match &mut self.inner {
            Inner::Empty => Err(ChoiceError::NotReady),
            Inner::Ready { states, .. } => match states.get_mut(choice) {
                Some(state) => {
                    *state = selected;
                    Ok(())
                }
                None => Err(ChoiceError::InvalidChoice),
            },
        }
    }

    /// Clears every selection. Nothing to clear on an inert set.
    pub fn reset(&mut self) {
        if let Inner::Ready { states, .. } = &mut self.inner {
            for state in states.values_mut() {
                *state = false;
            }
        }
    }

    /// The current state of a single choice.
    pub fn state_of(&self, choice: &T) -> Result<bool, ChoiceError> {
        match &self.inner {
            Inner::Empty => Err(ChoiceError::NotReady),
            Inner::Ready { choices, states } => {
                if !choices.contains(choice) {
                    return Err(ChoiceError::InvalidChoice);
                }

                // Invariant: every available choice has a state entry.
                debug_assert!(
                    states.contains_key(choice),
                    "state map out of sync with choices"
                );
                Ok(states.get(choice).copied().unwrap_or(false))
            }
        }
    }

    /// Every choice paired with its current state, in choice order. This is
    /// the whole result of a selection session; it never fails and is empty
    /// on an inert set.
    pub fn snapshot(&self) -> Vec<(T, bool)> {
        match &self.inner {
            Inner::Empty => Vec::new(),
            Inner::Ready { choices, states } => choices
                .iter()
                .map(|c| (c.clone(), states.get(c).copied().unwrap_or(false)))
                .collect(),
        }
    }
}
