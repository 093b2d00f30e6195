use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

pub type StdErrorBoxed = Box<dyn std::error::Error + Send + Sync + 'static>;

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn bad_arguments(function: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::BadArguments {
                function: function.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn illegal_type(
        function: impl Into<String>,
        argument: impl Into<String>,
        expected: impl Into<String>,
    ) -> Error {
        Error(
            ErrorKind::IllegalTypeOfArgument {
                function: function.into(),
                argument: argument.into(),
                expected: expected.into(),
            }
            .into(),
        )
    }

    pub fn argument_out_of_bound(
        function: impl Into<String>,
        argument: impl Into<String>,
        message: impl Into<String>,
    ) -> Error {
        Error(
            ErrorKind::ArgumentOutOfBound {
                function: function.into(),
                argument: argument.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn arity(function: impl Into<String>, expected: impl Into<String>, actual: usize) -> Error {
        Error(
            ErrorKind::NumberOfArgumentsDoesntMatch {
                function: function.into(),
                expected: expected.into(),
                actual,
            }
            .into(),
        )
    }

    pub fn unknown_timezone(name: impl Into<String>) -> Error {
        Error(ErrorKind::UnknownTimeZone { name: name.into() }.into())
    }

    pub fn arrow<E>(context: impl Into<String>, source: E) -> Error
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error(
            ErrorKind::Arrow {
                context: context.into(),
                source: Box::new(source),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("bad arguments for function {function}: {message}")]
    BadArguments { function: String, message: String },

    #[error("argument '{argument}' for function {function} must be {expected}")]
    IllegalTypeOfArgument {
        function: String,
        argument: String,
        expected: String,
    },

    #[error("argument '{argument}' for function {function} {message}")]
    ArgumentOutOfBound {
        function: String,
        argument: String,
        message: String,
    },

    #[error("function {function} expects {expected} arguments, got {actual}")]
    NumberOfArgumentsDoesntMatch {
        function: String,
        expected: String,
        actual: usize,
    },

    #[error("unknown time zone '{name}'")]
    UnknownTimeZone { name: String },

    #[error("Arrow error: {context}")]
    Arrow {
        context: String,
        source: StdErrorBoxed,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::bad_arguments("YYYYMMDDToDate", "argument must be finite");
        assert_eq!(
            err.to_string(),
            "bad arguments for function YYYYMMDDToDate: argument must be finite"
        );

        let err = Error::illegal_type("makeDateTime", "timezone", "const string");
        assert_eq!(
            err.to_string(),
            "argument 'timezone' for function makeDateTime must be const string"
        );

        let err = Error::arity("makeDate", "2 or 3", 4);
        assert!(matches!(
            err.kind(),
            ErrorKind::NumberOfArgumentsDoesntMatch { actual: 4, .. }
        ));
    }

    #[test]
    fn test_into_kind() {
        let err = Error::unknown_timezone("Mars/Olympus_Mons");
        match err.into_kind() {
            ErrorKind::UnknownTimeZone { name } => assert_eq!(name, "Mars/Olympus_Mons"),
            other => panic!("unexpected error kind {other:?}"),
        }
    }
}
