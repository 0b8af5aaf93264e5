use std::fmt::{Display, Debug, Formatter, Result};


/// Error set for potential waveform construction errors
pub enum WaveformError {
    /// Sampling rate (Hz) must be divisible by `200` so the 5 ms window
    /// maps onto a whole number of output samples
    InvalidSamplingRate(u32),
}

impl Display for WaveformError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            WaveformError::InvalidSamplingRate(rate) => write!(
                f, "Unsupported sampling rate: {} Hz is not divisible by 200", rate
            ),
        }
    }
}

impl Debug for WaveformError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl std::error::Error for WaveformError {}

/// Error set for potential waveform analysis errors
pub enum AnalysisError {
    /// Spectrum cannot be calculated for a series without samples
    EmptyWaveform,
}

impl Display for AnalysisError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let err_msg = match self {
            AnalysisError::EmptyWaveform => "Waveform must contain at least one sample",
        };

        write!(f, "{}", err_msg)
    }
}

impl Debug for AnalysisError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl std::error::Error for AnalysisError {}

/// A set of errors that may occur when using the library
pub enum HodgkinHuxleyWaveformError {
    /// Errors related to waveform construction
    WaveformRelatedError(WaveformError),
    /// Errors related to waveform analysis
    AnalysisRelatedError(AnalysisError),
}

impl Display for HodgkinHuxleyWaveformError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            HodgkinHuxleyWaveformError::WaveformRelatedError(err) => write!(f, "{}", err),
            HodgkinHuxleyWaveformError::AnalysisRelatedError(err) => write!(f, "{}", err),
        }
    }
}

impl Debug for HodgkinHuxleyWaveformError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl std::error::Error for HodgkinHuxleyWaveformError {}

impl From<WaveformError> for HodgkinHuxleyWaveformError {
    fn from(err: WaveformError) -> HodgkinHuxleyWaveformError {
        HodgkinHuxleyWaveformError::WaveformRelatedError(err)
    }
}

impl From<AnalysisError> for HodgkinHuxleyWaveformError {
    fn from(err: AnalysisError) -> HodgkinHuxleyWaveformError {
        HodgkinHuxleyWaveformError::AnalysisRelatedError(err)
    }
}
