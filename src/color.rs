//! Default color cycle and color-string parsing.

use trueno_viz::color::Rgba;

/// The ten-color categorical cycle used for artists without an explicit color.
pub const TAB10: [Rgba; 10] = [
    Rgba::rgb(31, 119, 180),
    Rgba::rgb(255, 127, 14),
    Rgba::rgb(44, 160, 44),
    Rgba::rgb(214, 39, 40),
    Rgba::rgb(148, 103, 189),
    Rgba::rgb(140, 86, 75),
    Rgba::rgb(227, 119, 194),
    Rgba::rgb(127, 127, 127),
    Rgba::rgb(188, 189, 34),
    Rgba::rgb(23, 190, 207),
];

/// Frame and text color.
pub const INK: Rgba = Rgba::rgb(38, 38, 38);

/// The `n`-th color of the default cycle.
#[must_use]
pub const fn cycle(n: usize) -> Rgba {
    TAB10[n % TAB10.len()]
}

/// Parse a color string.
///
/// Accepts single-letter codes (`"r"`, `"k"`), a handful of names
/// (`"steelblue"`), hex (`"#4682b4"`, `"#4682b480"`) and cycle references
/// (`"C0"`–`"C9"`).
#[must_use]
pub fn parse_color(s: &str) -> Option<Rgba> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(n) = s.strip_prefix('C').and_then(|n| n.parse::<usize>().ok()) {
        return Some(cycle(n));
    }

    let rgba = match s.to_ascii_lowercase().as_str() {
        "b" | "blue" => Rgba::BLUE,
        "g" | "green" => Rgba::rgb(0, 128, 0),
        "r" | "red" => Rgba::RED,
        "c" | "cyan" => Rgba::rgb(0, 191, 191),
        "m" | "magenta" => Rgba::rgb(191, 0, 191),
        "y" | "yellow" => Rgba::rgb(191, 191, 0),
        "k" | "black" => Rgba::BLACK,
        "w" | "white" => Rgba::WHITE,
        "gray" | "grey" => Rgba::rgb(128, 128, 128),
        "orange" => Rgba::rgb(255, 165, 0),
        "purple" => Rgba::rgb(128, 0, 128),
        "steelblue" => Rgba::rgb(70, 130, 180),
        "navy" => Rgba::rgb(0, 0, 128),
        "teal" => Rgba::rgb(0, 128, 128),
        _ => return None,
    };
    Some(rgba)
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    let byte = |i: usize| hex.get(i..i + 2).and_then(|h| u8::from_str_radix(h, 16).ok());
    match hex.len() {
        6 => Some(Rgba::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named() {
        assert_eq!(parse_color("r"), Some(Rgba::RED));
        assert_eq!(parse_color("SteelBlue"), Some(Rgba::rgb(70, 130, 180)));
        assert_eq!(parse_color("chartreuse-ish"), None);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_color("#ff0000"), Some(Rgba::RED));
        assert_eq!(parse_color("#00000080"), Some(Rgba::new(0, 0, 0, 128)));
        assert_eq!(parse_color("#fff"), None);
        assert_eq!(parse_color("#gg0000"), None);
    }

    #[test]
    fn test_parse_cycle() {
        assert_eq!(parse_color("C1"), Some(TAB10[1]));
        assert_eq!(parse_color("C12"), Some(TAB10[2]));
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle(0), cycle(10));
    }
}
