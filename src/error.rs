use thiserror::Error;

#[derive(Debug, Error)]
pub enum MultipickError {
    #[error("need at least two choices to pick from (got {0})")]
    TooFewChoices(usize),

    #[error("duplicate choice: {0:?}")]
    DuplicateChoice(String),

    #[error("--selected value is not one of the choices: {0:?}")]
    UnknownPreselect(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
