/// Boxes foreign errors into a catch-all variant: `from_external_error!(Error::Variant; A, B)`
macro_rules! from_external_error {
    ($error:ident :: $variant:ident; $($source:path),* $(,)?) => {
        $(
            impl From<$source> for $error {
                fn from(err: $source) -> Self { $error::$variant(Box::new(err)) }
            }
        )*
    };
}
