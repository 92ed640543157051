// Validate that no int parameter is negative. Zero stays legal so
// zero-amount transfers and approval revocations pass through.
#[macro_export]
macro_rules! validate_int_parameters {
    ($($arg:expr),*) => {
        {
            $(
                let value: Option<i128> = Into::<Option<_>>::into($arg);
                if let Some(val) = value {
                    if val < 0 {
                        panic!("negative amount is not allowed: {}", val)
                    }
                }
            )*
        }
    };
}
