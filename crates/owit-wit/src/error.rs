use owit_core::error::TranslateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WitError {
    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error("template render failed: {0}")]
    Render(#[from] minijinja::Error),
}
