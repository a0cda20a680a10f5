//! Tests for field parameter derivation

#[cfg(test)]
mod tests {
    use namefractal::encoding::NumericSequence;
    use namefractal::encoding::letters::name_to_numbers;
    use namefractal::math::FieldParameters;

    fn derive(name: &str) -> FieldParameters {
        FieldParameters::derive(&name_to_numbers(name).or_fallback())
            .expect("Non-empty sequence should derive parameters")
    }

    // Tests the worked example for "AB"
    // Verified by dividing by the odd-position count instead of the length
    #[test]
    fn test_derive_two_letter_name() {
        let params = derive("AB");

        assert_eq!(params.scale_x, 4);
        assert!((params.scale_y - 6.0).abs() < f64::EPSILON);
        assert!((params.c_real - 0.5).abs() < f64::EPSILON);
        assert!((params.c_imag - 1.0).abs() < f64::EPSILON);
        assert!((params.noise_factor - 0.03).abs() < f64::EPSILON);
        assert!((params.extra_term - 3.0_f64.sin()).abs() < f64::EPSILON);
    }

    // Tests the fallback sequence [1]
    // Verified by reading the imaginary part from the even positions
    #[test]
    fn test_derive_fallback_sequence() {
        let params = derive("123");

        assert_eq!(params.scale_x, 2);
        assert!((params.scale_y - 3.0).abs() < f64::EPSILON);
        assert!((params.c_real - 1.0).abs() < f64::EPSILON);
        assert!(params.c_imag.abs() < f64::EPSILON);
        assert!((params.noise_factor - 0.01).abs() < f64::EPSILON);
        assert!((params.extra_term - 1.0_f64.sin()).abs() < f64::EPSILON);
    }

    // Tests empty sequences are rejected rather than dividing by zero
    // Verified by removing the emptiness check
    #[test]
    fn test_derive_rejects_empty_sequence() {
        assert!(FieldParameters::derive(&NumericSequence::default()).is_err());
    }

    // Tests every derived parameter stays within its documented range
    // Verified by removing the +1 from scale_x
    #[test]
    fn test_parameters_stay_in_range() {
        let names = [
            "Ada", "Grace Hopper", "Z", "zzzzzzzzzzzzzzzzzzzz", "Mary-Jane O'Neil", "xy", "J",
        ];

        for name in names {
            let params = derive(name);
            assert!((1..=10).contains(&params.scale_x), "{name}: scale_x");
            assert!((1.5..=16.5).contains(&params.scale_y), "{name}: scale_y");
            assert!((0.0..=0.04).contains(&params.noise_factor), "{name}: noise");
            assert!((-1.0..=1.0).contains(&params.extra_term), "{name}: extra term");
            assert!(params.c_real > 0.0, "{name}: c_real");
            assert!(params.c_imag >= 0.0, "{name}: c_imag");
        }
    }

    // Tests derivation is a pure function of the sequence
    // Verified by mixing in the sequence length as hidden state
    #[test]
    fn test_derive_is_deterministic() {
        assert_eq!(derive("Katherine"), derive("Katherine"));
        assert_eq!(derive("katherine"), derive("KATHERINE"));
    }

    // Tests the parameter summary line
    // Verified by printing scale_y without a decimal point
    #[test]
    fn test_display_summary() {
        assert_eq!(
            derive("AB").to_string(),
            "scale_x=4, scale_y=6.0, c_real=0.5, c_imag=1.0"
        );
    }
}
