//! Terminal UI components (spinner, colors, interactive prompts).

use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs an interactive prompt flow, treating Ctrl+C or Escape as a clean exit.
///
/// Returns `Ok(true)` if the flow completed and `Ok(false)` if the user
/// cancelled it. Other errors are propagated.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<bool>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Ok(()) => Ok(true),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(false)
        }
        Err(e) => Err(e),
    }
}
