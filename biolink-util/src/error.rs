use std::{
    error::Error,
    fmt::{
        Display,
        Formatter,
    },
    panic::Location,
};

/// Displays an error followed by all of its sources, separated by `: `.
pub struct DisplayErrorChain<'e, E: ?Sized>(&'e E);

impl<'e, E: Error> Display for DisplayErrorChain<'e, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(error) = source {
            write!(f, ": {error}")?;
            source = error.source();
        }
        Ok(())
    }
}

pub trait ErrorExt: Error {
    fn display_chain(&self) -> DisplayErrorChain<Self> {
        DisplayErrorChain(self)
    }
}

impl<E: Error> ErrorExt for E {}

pub trait ResultExt {
    /// Logs the error (if any) with its source chain and the caller's
    /// location, and passes the result through.
    fn log_error(self, message: &str) -> Self;
}

impl<T, E: Error> ResultExt for Result<T, E> {
    #[track_caller]
    fn log_error(self, message: &str) -> Self {
        if let Err(error) = &self {
            let location = Location::caller();
            tracing::error!(
                file = location.file(),
                line = location.line(),
                "{message}: {}",
                error.display_chain()
            );
        }
        self
    }
}
