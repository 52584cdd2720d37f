use super::*;

/// Report generated from an integration log.
#[derive(Deserialize, PartialEq, Eq, Clone, Copy, Debug, ValueEnum)]
pub enum AnalysisMode {
    /// Radius vs. cumulative radiation length and material, one file per track.
    SEGMENTS,
    /// Polar angle vs. radiation length between the CFPL and CSPR markers, one line per track.
    ANGLES,
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AnalysisMode::SEGMENTS => write!(f, "Segment-indexed track splitting"),
            AnalysisMode::ANGLES => write!(f, "Angle vs. radiation length delta"),
        }
    }
}

/// Where the ANGLES analysis is within the current track.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Phase {
    SeekingStartMarker,
    SeekingStartIntegral,
    SeekingEndMarker,
    SeekingEndIntegral,
    /// Both integrals captured; only end coordinates are still followed.
    AccumulatingEnd,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Phase::SeekingStartMarker => write!(f, "seeking {}", START_MARKER),
            Phase::SeekingStartIntegral => write!(f, "seeking integral after {}", START_MARKER),
            Phase::SeekingEndMarker => write!(f, "seeking {}", END_MARKER),
            Phase::SeekingEndIntegral => write!(f, "seeking integral after {}", END_MARKER),
            Phase::AccumulatingEnd => write!(f, "accumulating end coordinates"),
        }
    }
}
