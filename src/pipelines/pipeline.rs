//! Pipeline trait.
use crate::error::Error;

/// This trait must be implemented for each Pipeline,
/// and is generic over the return type so that
/// each pipeline can report what it did (a summary, a trained model...).
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
