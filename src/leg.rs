use super::*;

/// The six raw fields of one integration record, delimiters included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordFields<'a> {
    pub id: &'a str,
    pub material: &'a str,
    pub start: &'a str,
    pub end: &'a str,
    pub current: &'a str,
    pub cumulative: &'a str,
}

/// Splits one record line into its fields. A record holds exactly four
/// parenthesized groups (location, material, start point, end point) and two
/// bracketed groups (current and cumulative data), in that relative order:
///
/// `(CDF 1/...) (SILICON) (x,y,z) [current] [cumulative] (x,y,z)`
pub fn split_record(line: &str) -> Result<RecordFields<'_>, ParseError> {
    let parens = scan::find_groups(line, '(', ')');
    let brackets = scan::find_groups(line, '[', ']');
    let malformed = ParseError::MalformedRecord {
        parens: parens.len(),
        brackets: brackets.len(),
    };

    let (id, material, start, end) = parens.into_iter().collect_tuple().ok_or_else(|| malformed.clone())?;
    let (current, cumulative) = brackets.into_iter().collect_tuple().ok_or(malformed)?;

    Ok(RecordFields {
        id,
        material,
        start,
        end,
        current,
        cumulative,
    })
}

/// All consecutive integration steps taken in one detector volume.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationLeg {
    pub location: String,
    pub material: String,
    pub start: Point,
    pub end: Point,
    /// Data for this leg alone.
    pub current: IntegrationData,
    /// Data up to and including this leg.
    pub cumulative: IntegrationData,
}

impl IntegrationLeg {
    /// A leg that begins and ends at xyz and holds one step of data.
    pub fn new(location: &str, material: &str, xyz: Point, data: IntegrationData) -> IntegrationLeg {
        IntegrationLeg {
            location: location.to_string(),
            material: material.to_string(),
            start: xyz,
            end: xyz,
            current: data.clone(),
            cumulative: data,
        }
    }

    /// A new leg starting where `previous` ended, carrying its cumulative data forward.
    pub fn continue_from(previous: &IntegrationLeg, location: &str, material: &str, new_end: Point, step: IntegrationData) -> IntegrationLeg {
        IntegrationLeg {
            location: location.to_string(),
            material: material.to_string(),
            start: previous.end,
            end: new_end,
            cumulative: &previous.cumulative + &step,
            current: step,
        }
    }

    /// Add one step taken in the same location, moving the end point to new_end.
    pub fn accumulate(&mut self, new_end: Point, step: &IntegrationData) {
        self.end = new_end;
        self.current += step;
        self.cumulative += step;
    }

    /// Center of the leg; exact only for straight legs.
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(&self.end)
    }

    /// Reads one record line of the integration log. One enclosing pair of
    /// parentheses is removed from the location and the material.
    pub fn parse(line: &str) -> Result<IntegrationLeg, ParseError> {
        let fields = split_record(line)?;

        Ok(IntegrationLeg {
            location: scan::trim_delimiters(fields.id, '(', ')').to_string(),
            material: scan::trim_delimiters(fields.material, '(', ')').to_string(),
            start: Point::parse(fields.start)?,
            end: Point::parse(fields.end)?,
            current: IntegrationData::parse(fields.current)?,
            cumulative: IntegrationData::parse(fields.cumulative)?,
        })
    }

    /// Renders the leg the way the integration program logs it.
    pub fn to_record_line(&self) -> String {
        format!("({})\t({})\t{}\t{}\t{}\t{}", self.location, self.material, self.start,
            self.current, self.cumulative, self.end)
    }
}

impl Default for IntegrationLeg {
    fn default() -> IntegrationLeg {
        IntegrationLeg::new("", "unk", Point::origin(), IntegrationData::default())
    }
}

impl fmt::Display for IntegrationLeg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Material: {}, Start:{}, End:{}\nCurrent:{}\nCumulative:{}",
            self.material, self.start, self.end, self.current, self.cumulative)
    }
}
