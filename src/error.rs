use thiserror::Error;

/// Library error type for carousel construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    /// A carousel needs at least one slide for its index to be valid.
    #[error("carousel requires at least one slide")]
    NoSlides,

    /// Autoplay cannot tick on a zero-length period.
    #[error("autoplay interval must be greater than zero")]
    ZeroInterval,
}
