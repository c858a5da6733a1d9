//! GHCN element codes known to the UI.

/// An opaque RGB colour; alpha is chosen at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgba(...)` string.
    pub fn rgba(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Measured quantities with a fixed label and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Prcp,
    Tmax,
    Tmin,
    Snow,
    Snwd,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Prcp,
        Element::Tmax,
        Element::Tmin,
        Element::Snow,
        Element::Snwd,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PRCP" => Some(Element::Prcp),
            "TMAX" => Some(Element::Tmax),
            "TMIN" => Some(Element::Tmin),
            "SNOW" => Some(Element::Snow),
            "SNWD" => Some(Element::Snwd),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Element::Prcp => "PRCP",
            Element::Tmax => "TMAX",
            Element::Tmin => "TMIN",
            Element::Snow => "SNOW",
            Element::Snwd => "SNWD",
        }
    }

    /// Human readable name used for chart legends.
    pub fn label(self) -> &'static str {
        match self {
            Element::Prcp => "Precipitation",
            Element::Tmax => "Max Temperature",
            Element::Tmin => "Min Temperature",
            Element::Snow => "Snowfall",
            Element::Snwd => "Snow Depth",
        }
    }

    /// Unit the raw GHCN value is reported in.
    pub fn unit(self) -> &'static str {
        match self {
            Element::Prcp => "tenths of mm",
            Element::Tmax | Element::Tmin => "tenths of degrees C",
            Element::Snow | Element::Snwd => "mm",
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            Element::Prcp => Rgb::new(0, 0, 255),
            Element::Tmax => Rgb::new(255, 0, 0),
            Element::Tmin => Rgb::new(0, 255, 255),
            Element::Snow => Rgb::new(200, 200, 255),
            Element::Snwd => Rgb::new(230, 230, 255),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for element in Element::ALL {
            assert_eq!(Element::from_code(element.code()), Some(element));
        }
        assert_eq!(Element::from_code("WSFG"), None);
        assert_eq!(Element::from_code("prcp"), None);
    }

    #[test]
    fn rgba_formatting() {
        assert_eq!(Element::Prcp.color().rgba(0.7), "rgba(0, 0, 255, 0.7)");
        assert_eq!(Element::Snow.color().rgba(0.1), "rgba(200, 200, 255, 0.1)");
    }
}
