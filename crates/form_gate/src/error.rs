use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormGateError {
    #[error("failed to compile the `{rule}` pattern: {source}")]
    Pattern {
        rule: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("no document is available")]
    NoDocument,
}
