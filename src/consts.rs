use super::*;

//Markers written by the integration program
/// Prefix of an integration record line.
pub const RECORD_PREFIX: &str = "(CDF 1/";
/// Detector volume opening the angular integration window.
pub const START_MARKER: &str = "CFPL";
/// Detector volume closing the angular integration window.
pub const END_MARKER: &str = "CSPR";
/// Label of the running radiation-length integral.
pub const INTEGRAL_LABEL: &str = "integral so far:";
/// Label of the end coordinates of the latest step.
pub const END_COORDINATES_LABEL: &str = "coordinates of end:";

//Record layout
/// Components in a complete IntegrationData record.
pub const NUM_INTEGRATION_COMPONENTS: usize = 5;

//Output
/// Degrees per radian.
pub const RAD_TO_DEG: f64 = 180./PI;
/// Significant digits of printf-style %g output.
pub const G_PRECISION: i32 = 6;
/// Default capacity of output file buffers.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;
/// Suffix of the per-track summary file.
pub const SUMMARY_SUFFIX: &str = "summary.output";
