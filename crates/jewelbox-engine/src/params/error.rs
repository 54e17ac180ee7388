/// Errors raised when applying user-supplied parameter values.
#[derive(Debug, thiserror::Error)]
pub enum ParamError {
    #[error("`{text}` is not a number")]
    NotANumber {
        text: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("{0} is not a finite value")]
    NotFinite(f32),
}
