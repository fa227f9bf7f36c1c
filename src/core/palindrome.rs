/// Reverses the decimal digits of `value`, keeping its sign.
///
/// Works in `i64`, so the reversal of any `i32` fits.
pub fn reverse_digits(value: i32) -> i64 {
    let mut remaining = i64::from(value);
    let mut reversed = 0i64;
    while remaining != 0 {
        reversed = reversed * 10 + remaining % 10;
        remaining /= 10;
    }
    reversed
}

/// Negative numbers are never palindromes.
pub fn is_palindrome_number(value: i32) -> bool {
    value >= 0 && reverse_digits(value) == i64::from(value)
}
