//! Tests for name-derived gradient stops

#[cfg(test)]
mod tests {
    use namefractal::color::gradient::{DEEP_NAVY, GRADIENT_STOPS, LAVENDER, SKY_BLUE, STEEL_BLUE};
    use namefractal::color::{ColorGradient, Rgb};
    use namefractal::encoding::letters::name_to_numbers;

    fn is_hex_code(code: &str) -> bool {
        code.len() == 7
            && code.starts_with('#')
            && code.chars().skip(1).all(|c| c.is_ascii_hexdigit())
    }

    // Tests the five derived stops for a sum of 3
    // Verified by offsetting the indigo stop by 60 instead of 80
    #[test]
    fn test_derived_stops_follow_base_color() {
        let gradient = ColorGradient::from_sequence(&name_to_numbers("AB"));
        let stops = gradient.stops();

        assert_eq!(gradient.base_color(), 3);
        assert_eq!(stops[0], Rgb([1, 0x00, 3]));
        assert_eq!(stops[1], Rgb([0x4B, 0x00, 83]));
        assert_eq!(stops[2], Rgb([0x6A, 0x0D, 63]));
        assert_eq!(stops[3], Rgb([0x80, 0x00, 43]));
        assert_eq!(stops[4], Rgb([0x00, 0x00, 103]));
    }

    // Tests the final four stops never change
    // Verified by deriving the lavender stop from the base color
    #[test]
    fn test_fixed_stops() {
        for name in ["AB", "Ada", "", "zzzz"] {
            let gradient = ColorGradient::from_sequence(&name_to_numbers(name));
            assert_eq!(
                &gradient.stops()[5..],
                &[STEEL_BLUE, SKY_BLUE, DEEP_NAVY, LAVENDER]
            );
        }
        assert_eq!(STEEL_BLUE.hex(), "#4682B4");
        assert_eq!(LAVENDER.hex(), "#E6E6FA");
    }

    // Tests blue offsets wrap around at 256
    // Verified by saturating instead of wrapping
    #[test]
    fn test_offsets_wrap() {
        let gradient = ColorGradient::from_base_color(200);
        let stops = gradient.stops();

        assert_eq!(stops[0], Rgb([100, 0, 200]));
        assert_eq!(stops[1].blue(), 24);
        assert_eq!(stops[2].blue(), 4);
        assert_eq!(stops[3].blue(), 240);
        assert_eq!(stops[4].blue(), 44);
    }

    // Tests the base color is the sequence sum modulo 256
    // Verified by taking the sum modulo 255
    #[test]
    fn test_base_color_wraps_sum() {
        let sequence = name_to_numbers("ZZZZZZZZZZ");
        assert_eq!(sequence.sum(), 260);
        assert_eq!(ColorGradient::from_sequence(&sequence).base_color(), 4);
        assert_eq!(ColorGradient::from_sequence(&name_to_numbers("")).base_color(), 0);
    }

    // Tests every gradient has nine well-formed hex codes
    // Verified by dropping the zero padding
    #[test]
    fn test_hex_codes_are_well_formed() {
        for name in ["AB", "Ada Lovelace", "", "Q", "zzzzzzzzzzzzzzzzzzzzzzzzzzzzz"] {
            let codes = ColorGradient::from_sequence(&name_to_numbers(name)).hex_codes();
            assert_eq!(codes.len(), GRADIENT_STOPS);
            for code in &codes {
                assert!(is_hex_code(code), "{name}: malformed code {code}");
            }
        }
    }

    // Tests derived channels print lower case and fixed channels upper case
    // Verified by printing every code in upper case
    #[test]
    fn test_hex_code_case() {
        let codes = ColorGradient::from_base_color(200).hex_codes();

        assert_eq!(
            codes,
            vec![
                "#6400c8", "#4B0018", "#6A0D04", "#8000f0", "#00002c", "#4682B4", "#87CEEB",
                "#00008B", "#E6E6FA",
            ]
        );
    }

    // Tests the gradient summary line
    // Verified by omitting quotes around codes
    #[test]
    fn test_display_lists_quoted_codes() {
        let text = ColorGradient::from_base_color(3).to_string();
        assert!(text.starts_with("['#010003', '#4B0053'"));
        assert!(text.ends_with("'#E6E6FA']"));
    }
}
