/// A coordinate pair in user space (origin at the top-left corner of the page).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Scales both coordinates by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<&(f64, f64)> for Point {
    fn from(&(x, y): &(f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self {
            x: f64::from(x),
            y: f64::from(y),
        }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(Point::from((1.5, 2.0)), Point::new(1.5, 2.0));
        assert_eq!(Point::from((3, 4)), Point::new(3.0, 4.0));
        assert_eq!(Point::from([5.0, 6.0]), Point::new(5.0, 6.0));
    }

    #[test]
    fn scaling() {
        assert_eq!(Point::new(10.0, 20.0).scaled(0.5), Point::new(5.0, 10.0));
    }
}
