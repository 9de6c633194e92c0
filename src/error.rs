use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Constellation name could not be parsed, or designates
    /// a system we do not plot.
    #[error("unknown constellation \"{0}\"")]
    UnknownConstellation(String),

    /// Coordinate notation could not be parsed
    #[error("unknown coordinate format \"{0}\"")]
    UnknownCoordinateFormat(String),

    /// Sky plot radius must be finite and strictly positive.
    #[error("invalid sky plot radius: {0}")]
    InvalidRadius(f64),

    /// SNR reference (chart full scale) must be finite and strictly positive.
    #[error("invalid snr reference: {0} dB-Hz")]
    InvalidSnrReference(f64),
}
