use crate::utils::error::{KataError, Result};

/// Value of a single Roman symbol.
pub fn symbol_value(symbol: char) -> Option<i32> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Converts a numeral using subtractive notation.
///
/// Well-formedness is not checked; characters outside the symbol set count as 0.
/// The running sum wraps on overflow.
pub fn roman_to_int(numeral: &str) -> i32 {
    let mut sum = 0i32;
    let mut prev = 0i32;
    for symbol in numeral.chars() {
        let current = symbol_value(symbol).unwrap_or(0);
        if prev < current {
            // Undo the previous addition and add the net difference.
            sum = sum.wrapping_sub(prev).wrapping_add(current - prev);
        } else {
            sum = sum.wrapping_add(current);
        }
        prev = current;
    }
    sum
}

/// Strict conversion: rejects empty input and unknown symbols.
pub fn parse_roman(numeral: &str) -> Result<i32> {
    if numeral.is_empty() {
        return Err(KataError::InvalidNumeral {
            numeral: numeral.to_string(),
            reason: "numeral is empty".to_string(),
        });
    }

    if let Some(bad) = numeral.chars().find(|c| symbol_value(*c).is_none()) {
        return Err(KataError::InvalidNumeral {
            numeral: numeral.to_string(),
            reason: format!("unknown symbol {:?}", bad),
        });
    }

    Ok(roman_to_int(numeral))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_cases() {
        assert_eq!(roman_to_int("III"), 3);
        assert_eq!(roman_to_int("LVIII"), 58);
        assert_eq!(roman_to_int("MCMXCIV"), 1994);
    }

    #[test]
    fn test_subtractive_pairs() {
        assert_eq!(roman_to_int("IV"), 4);
        assert_eq!(roman_to_int("IX"), 9);
        assert_eq!(roman_to_int("XL"), 40);
        assert_eq!(roman_to_int("XC"), 90);
        assert_eq!(roman_to_int("CD"), 400);
        assert_eq!(roman_to_int("CM"), 900);
        assert_eq!(roman_to_int("MMMCMXCIX"), 3999);
    }

    #[test]
    fn test_unvalidated_input_follows_the_algorithm() {
        assert_eq!(roman_to_int(""), 0);
        assert_eq!(roman_to_int("IIII"), 4);
        // I = 1, IV = 4, then X undoes V and adds 10 - 5
        assert_eq!(roman_to_int("IVX"), 4);
        assert_eq!(roman_to_int("XaI"), 11);
    }

    #[test]
    fn test_long_numeral_wraps() {
        let numeral = "M".repeat(2_200_000);
        // 2_200_000_000 - 2^32
        assert_eq!(roman_to_int(&numeral), -2_094_967_296);
        assert_eq!(parse_roman(&numeral).unwrap(), -2_094_967_296);
    }

    #[test]
    fn test_parse_roman() {
        assert_eq!(parse_roman("XIV").unwrap(), 14);
        assert!(matches!(parse_roman(""), Err(KataError::InvalidNumeral { .. })));
        assert!(matches!(parse_roman("xiv"), Err(KataError::InvalidNumeral { .. })));
        assert!(matches!(parse_roman("MCMZ"), Err(KataError::InvalidNumeral { .. })));
    }
}
