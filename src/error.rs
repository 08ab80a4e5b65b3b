/// The top-level error type for this crate.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The transfer function could not be interpreted by its [`ToZpk`]
    /// conversion. The underlying diagnostic is preserved untranslated.
    ///
    /// [`ToZpk`]: crate::ToZpk
    #[error("transfer function could not be converted to zero-pole-gain form")]
    Conversion(#[source] anyhow::Error),

    #[error("unexpected error while plotting")]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Wrap a failure reported by a [`ToZpk`](crate::ToZpk) implementation.
    pub fn conversion(source: impl Into<anyhow::Error>) -> Self {
        Self::Conversion(source.into())
    }
}
