use super::*;

/// The integral of the leg quantities along one particle path. Steps are
/// grouped into legs: consecutive steps in the same location belong to the
/// same leg. Both the per-leg and the cumulative data are kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathIntegral {
    legs: Vec<IntegrationLeg>,
}

impl PathIntegral {
    pub fn new() -> PathIntegral {
        PathIntegral {
            legs: vec![]
        }
    }

    /// Add one integration step ending at xyz. A step in the same location
    /// as the last leg extends that leg; any other location opens a new leg.
    pub fn append(&mut self, location: &str, material: &str, xyz: Point, step: IntegrationData) {
        let next = match self.legs.last_mut() {
            None => IntegrationLeg::new(location, material, xyz, step),
            Some(last) if last.location == location => {
                last.accumulate(xyz, &step);
                return;
            },
            Some(last) => IntegrationLeg::continue_from(last, location, material, xyz, step),
        };
        self.legs.push(next);
    }

    /// Add a leg that has already been integrated, e.g. one read back from a log.
    pub fn push_leg(&mut self, leg: IntegrationLeg) {
        self.legs.push(leg);
    }

    pub fn num_legs(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn legs(&self) -> impl Iterator<Item = &IntegrationLeg> {
        self.legs.iter()
    }

    fn get(&self, index: usize) -> Result<&IntegrationLeg, ParseError> {
        self.legs.get(index).ok_or(ParseError::IndexOutOfRange {
            index,
            len: self.legs.len(),
        })
    }

    /// Data for the i'th leg alone.
    pub fn leg(&self, index: usize) -> Result<&IntegrationData, ParseError> {
        Ok(&self.get(index)?.current)
    }

    pub fn location(&self, index: usize) -> Result<&str, ParseError> {
        Ok(self.get(index)?.location.as_str())
    }

    pub fn start_point(&self, index: usize) -> Result<Point, ParseError> {
        Ok(self.get(index)?.start)
    }

    pub fn end_point(&self, index: usize) -> Result<Point, ParseError> {
        Ok(self.get(index)?.end)
    }

    /// Location of the head of the path; empty for an empty path.
    pub fn current_location(&self) -> &str {
        self.legs.last().map_or("", |leg| leg.location.as_str())
    }

    /// Start of the first leg, or the origin for an empty path.
    pub fn path_start(&self) -> Point {
        self.legs.first().map_or(Point::origin(), |leg| leg.start)
    }

    /// End of the last leg, or the origin for an empty path.
    pub fn path_end(&self) -> Point {
        self.legs.last().map_or(Point::origin(), |leg| leg.end)
    }

    /// Cumulative data for the whole path.
    pub fn integral(&self) -> IntegrationData {
        self.legs.last().map_or(IntegrationData::default(), |leg| leg.cumulative.clone())
    }

    /// Sum over the legs [begin, end]; both ends are included.
    pub fn integral_range(&self, begin: usize, end: usize) -> Result<IntegrationData, ParseError> {
        if end < begin {
            return Err(ParseError::InvalidRange {
                begin,
                end,
            });
        }
        let up_to_end = &self.get(end)?.cumulative;
        if begin == 0 {
            return Ok(up_to_end.clone());
        }
        let before_begin = &self.get(begin - 1)?.cumulative;
        Ok(up_to_end - before_begin)
    }
}

impl fmt::Display for PathIntegral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, leg) in self.legs.iter().enumerate() {
            writeln!(f, "Leg #{}\n{}", index, leg)?;
        }
        Ok(())
    }
}
