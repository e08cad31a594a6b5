//! Phone input mask utilities
//!
//! Turns raw keystroke input into the canonical `+7 (XXX) XXX-XX-XX` display
//! mask used by the sign-up form, growing the mask group by group as digits
//! accumulate. The formatter is idempotent: feeding its own output back in
//! yields the same string.

/// Maximum number of significant digits in a masked number (country code
/// included)
pub const MAX_PHONE_DIGITS: usize = 11;

/// Length of the fully formed mask, e.g. `+7 (747) 123-45-67`
pub const FULL_MASK_LEN: usize = 18;

const PHONE_PREFIX: &str = "+7";

/// Format raw user input as a progressive phone mask
///
/// The rules mirror the sign-up form behavior:
/// - every non-digit character is dropped, keeping at most
///   [`MAX_PHONE_DIGITS`] digits;
/// - a second digit other than `7` means the user typed over the fixed
///   country code, so the mask resets to the bare `"+7 "` prefix;
/// - a third digit outside `{0, 4, 7}` is not a valid mobile operator lead,
///   so the mask freezes at `"+7 (<digit>"`;
/// - otherwise the mask grows as `+7 (DDD) DDD-DD-DD`, filling each group
///   only as far as digits exist.
pub fn format_phone_input(input: &str) -> String {
    let digits: Vec<char> = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PHONE_DIGITS)
        .collect();

    if digits.len() > 1 && digits[1] != '7' {
        return format!("{} ", PHONE_PREFIX);
    }

    if digits.len() > 2 && !matches!(digits[2], '0' | '4' | '7') {
        return format!("{} ({}", PHONE_PREFIX, digits[1]);
    }

    // Anything that does not yet start with the country code digit is echoed
    // back as-is: an empty field, a lone digit, or a stray lead that both
    // gates let through.
    if digits.first() != Some(&'7') {
        return digits.into_iter().collect();
    }

    let national: String = digits[1..].iter().collect();
    let (area, rest) = split_at_most(&national, 3);
    let (block, rest) = split_at_most(rest, 3);
    let (pair_one, rest) = split_at_most(rest, 2);
    let (pair_two, _) = split_at_most(rest, 2);

    let mut masked = format!("{} ", PHONE_PREFIX);
    if !area.is_empty() {
        masked.push('(');
        masked.push_str(area);
    }
    if !block.is_empty() {
        masked.push_str(") ");
        masked.push_str(block);
    }
    if !pair_one.is_empty() {
        masked.push('-');
        masked.push_str(pair_one);
    }
    if !pair_two.is_empty() {
        masked.push('-');
        masked.push_str(pair_two);
    }
    masked
}

/// Strip mask decoration, keeping digits and `+` signs only
///
/// Produces the wire-format value sent to the backend, e.g.
/// `+7 (747) 123-45-67` becomes `+77471234567`.
pub fn clean_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

// Digit strings are always ASCII, so byte indexing is safe here.
fn split_at_most(s: &str, n: usize) -> (&str, &str) {
    s.split_at(s.len().min(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_number_is_masked() {
        assert_eq!(format_phone_input("77471234567"), "+7 (747) 123-45-67");
        assert_eq!(format_phone_input("77071234567"), "+7 (707) 123-45-67");
    }

    #[test]
    fn test_non_digit_characters_are_stripped() {
        assert_eq!(
            format_phone_input("+7abc7471234567"),
            "+7 (747) 123-45-67"
        );
        assert_eq!(
            format_phone_input("+7 (747) 123-45-67"),
            "+7 (747) 123-45-67"
        );
    }

    #[test]
    fn test_mask_grows_with_input() {
        assert_eq!(format_phone_input(""), "");
        assert_eq!(format_phone_input("7"), "+7 ");
        assert_eq!(format_phone_input("77"), "+7 (7");
        assert_eq!(format_phone_input("774"), "+7 (74");
        assert_eq!(format_phone_input("7747"), "+7 (747");
        assert_eq!(format_phone_input("77471"), "+7 (747) 1");
        assert_eq!(format_phone_input("7747123"), "+7 (747) 123");
        assert_eq!(format_phone_input("774712345"), "+7 (747) 123-45");
    }

    #[test]
    fn test_extra_digits_are_truncated() {
        assert_eq!(
            format_phone_input("77471234567999"),
            "+7 (747) 123-45-67"
        );
    }

    #[test]
    fn test_second_digit_gate_resets_mask() {
        // Typing over the country code resets to the bare prefix.
        assert_eq!(format_phone_input("89991234567"), "+7 ");
        assert_eq!(format_phone_input("79991234567"), "+7 ");
    }

    #[test]
    fn test_third_digit_gate_freezes_mask() {
        // Operator codes must start with 0, 4 or 7.
        assert_eq!(format_phone_input("772"), "+7 (7");
        assert_eq!(format_phone_input("77812345"), "+7 (7");
    }

    #[test]
    fn test_third_digit_gate_never_exceeds_short_form() {
        let short = format!("{} (7", PHONE_PREFIX);
        for third in ['1', '2', '3', '5', '6', '8', '9'] {
            let input = format!("77{}1234567", third);
            let masked = format_phone_input(&input);
            assert!(
                masked.len() <= short.len(),
                "{:?} produced {:?}",
                input,
                masked
            );
        }
    }

    #[test]
    fn test_format_is_idempotent() {
        let inputs = [
            "",
            "7",
            "8",
            "87",
            "77",
            "772",
            "7747",
            "77471234567",
            "89991234567",
            "+7abc7471234567",
            "hello",
        ];
        for input in inputs {
            let once = format_phone_input(input);
            let twice = format_phone_input(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_clean_phone_number() {
        assert_eq!(clean_phone_number("+7 (747) 123-45-67"), "+77471234567");
        assert_eq!(clean_phone_number("+7 "), "+7");
        assert_eq!(clean_phone_number("747 123 45 67"), "7471234567");
    }
}
