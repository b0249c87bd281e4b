use std::str::FromStr;
use std::fmt;

/// The two colour themes the site ships. Every themed style cascades from
/// the class this puts on `<body>`, so switching is a single class swap
/// plus a chart redraw.

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Primary,
}

pub struct ThemeParseError;

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Primary];

    pub fn body_class(&self) -> &'static str {
        match *self {
            Theme::Dark => "theme-dark",
            Theme::Primary => "theme-primary",
        }
    }

    /// Hex seed for the chart colour sequence. Slices brighten from here.
    pub fn base_colour(&self) -> &'static str {
        match *self {
            Theme::Dark => "343a40",
            Theme::Primary => "007bff",
        }
    }

    /// A css colour for text drawn directly on the chart canvas.
    pub fn text_colour(&self) -> &'static str {
        match *self {
            Theme::Dark => "#f8f9fa",
            Theme::Primary => "#212529",
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;
    fn from_str(input: &str) -> Result<Theme, Self::Err> {
        match input.to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "primary" => Ok(Theme::Primary),
            _ => Err(ThemeParseError)
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Theme::Dark => write!(f, "dark"),
            Theme::Primary => write!(f, "primary"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips() {
        for theme in Theme::ALL {
            let parsed: Theme = theme.to_string().parse().unwrap_or_else(|_| {
                panic!("'{}' did not parse back", theme)
            });
            assert_eq!(parsed, theme);
        }
    }

    #[test]
    fn unknown_cookie_value_is_rejected() {
        assert!("solarized".parse::<Theme>().is_err());
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn base_colours_are_decodable_rgb() {
        for theme in Theme::ALL {
            let rgb = hex::decode(theme.base_colour()).unwrap();
            assert_eq!(rgb.len(), 3);
        }
    }
}
