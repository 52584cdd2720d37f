use super::*;

/// A point in 3-d space, in the coordinates of the integration log.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Point {
        Point {
            x,
            y,
            z
        }
    }

    pub fn origin() -> Point {
        Point::default()
    }

    /// Square of the distance from self to other.
    pub fn distance_squared(&self, other: &Point) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2)
    }

    /// Distance from self to other.
    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Distance from self to the origin.
    pub fn radius_from_origin(&self) -> f64 {
        self.distance(&Point::origin())
    }

    /// Cylindrical radius about the beam (z) axis.
    pub fn rho(&self) -> f64 {
        (self.x*self.x + self.y*self.y).sqrt()
    }

    /// Center of the straight segment from self to other.
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x)/2., (self.y + other.y)/2., (self.z + other.z)/2.)
    }

    /// Reads a point written as `(x,y,z)`.
    pub fn parse(text: &str) -> Result<Point, ParseError> {
        let inner = scan::trim_delimiters(text, '(', ')');
        let components = scan::parse_floats(inner.split(','))?;

        match components[..] {
            [x, y, z] => Ok(Point::new(x, y, z)),
            _ => Err(ParseError::ComponentCount {
                expected: 3,
                found: components.len(),
                text: text.to_string(),
            }),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}
