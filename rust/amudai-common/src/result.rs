use crate::error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fails the enclosing function with `InvalidArgument` unless `$expr` holds.
/// The argument name and the failed condition are reported verbatim.
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        Err(Error::invalid_arg(name, condition))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;

    use super::*;

    fn check_threshold(threshold: usize) -> Result<usize> {
        verify_arg!(threshold, threshold > 0);
        Ok(threshold)
    }

    #[test]
    fn test_verify_arg() {
        assert_eq!(check_threshold(4).unwrap(), 4);
        let err = check_threshold(0).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "threshold");
                assert_eq!(message, "threshold > 0");
            }
            other => panic!("unexpected error kind {other:?}"),
        }
    }
}
