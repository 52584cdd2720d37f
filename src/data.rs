use super::*;

/// Quantities accumulated by the integration program over one leg, in log
/// order: radiation length, interaction length, B·dl (cm·kG), path length
/// (cm) and number of steps.
///
/// The step count is kept as a float so that every component is read the
/// same way. A record read from a log keeps however many components the log
/// line carried; the named accessors report a missing component as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationData {
    values: Vec<f64>,
}

const RADIATION_LENGTH: usize = 0;
const INTERACTION_LENGTH: usize = 1;
const BEND_INTEGRAL: usize = 2;
const STEP_SIZE: usize = 3;
const STEP_COUNT: usize = 4;

impl IntegrationData {
    pub fn new(radiation_length: f64, interaction_length: f64, bend_integral: f64, step_size: f64, step_count: f64) -> IntegrationData {
        IntegrationData {
            values: vec![radiation_length, interaction_length, bend_integral, step_size, step_count]
        }
    }

    pub fn from_values(values: Vec<f64>) -> IntegrationData {
        IntegrationData {
            values
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn component(&self, index: usize) -> Result<f64, ParseError> {
        self.values.get(index).copied().ok_or(ParseError::MissingComponent {
            index,
            len: self.values.len(),
        })
    }

    pub fn radiation_length(&self) -> Result<f64, ParseError> {
        self.component(RADIATION_LENGTH)
    }

    pub fn interaction_length(&self) -> Result<f64, ParseError> {
        self.component(INTERACTION_LENGTH)
    }

    pub fn bend_integral(&self) -> Result<f64, ParseError> {
        self.component(BEND_INTEGRAL)
    }

    pub fn step_size(&self) -> Result<f64, ParseError> {
        self.component(STEP_SIZE)
    }

    pub fn step_count(&self) -> Result<f64, ParseError> {
        self.component(STEP_COUNT)
    }

    /// Reads a record written as `[f1 f2 f3 f4 f5]`. Components may be
    /// separated by any run of blanks or tabs; their number is not checked.
    pub fn parse(text: &str) -> Result<IntegrationData, ParseError> {
        let inner = scan::strip_delimiters(text, '[', ']')?;
        Ok(IntegrationData::from_values(scan::parse_floats(inner.split_whitespace())?))
    }

    /// Component-wise combination; a component missing on one side counts as zero.
    fn combine(&self, other: &IntegrationData, operation: impl Fn(f64, f64) -> f64) -> IntegrationData {
        let values = self.values.iter().zip_longest(other.values.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(a, b) => operation(*a, *b),
                EitherOrBoth::Left(a) => operation(*a, 0.),
                EitherOrBoth::Right(b) => operation(0., *b),
            })
            .collect();
        IntegrationData::from_values(values)
    }
}

impl Default for IntegrationData {
    fn default() -> IntegrationData {
        IntegrationData::from_values(vec![0.; NUM_INTEGRATION_COMPONENTS])
    }
}

impl Add<&IntegrationData> for &IntegrationData {
    type Output = IntegrationData;

    fn add(self, other: &IntegrationData) -> IntegrationData {
        self.combine(other, |a, b| a + b)
    }
}

impl Add for IntegrationData {
    type Output = IntegrationData;

    fn add(self, other: IntegrationData) -> IntegrationData {
        &self + &other
    }
}

impl Sub<&IntegrationData> for &IntegrationData {
    type Output = IntegrationData;

    fn sub(self, other: &IntegrationData) -> IntegrationData {
        self.combine(other, |a, b| a - b)
    }
}

impl Sub for IntegrationData {
    type Output = IntegrationData;

    fn sub(self, other: IntegrationData) -> IntegrationData {
        &self - &other
    }
}

impl AddAssign<&IntegrationData> for IntegrationData {
    fn add_assign(&mut self, other: &IntegrationData) {
        *self = &*self + other;
    }
}

impl SubAssign<&IntegrationData> for IntegrationData {
    fn sub_assign(&mut self, other: &IntegrationData) {
        *self = &*self - other;
    }
}

impl fmt::Display for IntegrationData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.values.iter().join("\t"))
    }
}
