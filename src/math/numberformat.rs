use std::cmp::Ordering;

// Enough fraction digits to write any finite f64 exactly; the smallest
// subnormal needs 1074.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Unsigned decimal digits split at the decimal point, one digit per byte.
struct DecimalDigits {
    integer: Vec<u8>,
    fraction: Vec<u8>
}

impl DecimalDigits {
    /// The shortest digits that read back as `magnitude`.
    fn shortest(magnitude: f64) -> DecimalDigits {
        let scientific = format!("{:e}", magnitude);
        let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
        let exponent: i64 = exponent.parse().unwrap_or(0);
        let digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).map(|b| b - b'0').collect();

        let point = exponent + 1;
        if point <= 0 {
            let mut fraction = vec![0; point.unsigned_abs() as usize];
            fraction.extend(digits);
            DecimalDigits { integer: vec![0], fraction }
        } else {
            let point = point as usize;
            let mut integer = digits;
            let fraction = if integer.len() > point {
                integer.split_off(point)
            } else {
                integer.resize(point, 0);
                Vec::new()
            };
            DecimalDigits { integer, fraction }
        }
    }

    /// The exact value of the binary double.
    fn exact(magnitude: f64) -> DecimalDigits {
        let text = format!("{:.*}", EXACT_FRACTION_DIGITS, magnitude);
        let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
        DecimalDigits {
            integer: integer.bytes().map(|b| b - b'0').collect(),
            fraction: fraction.bytes().map(|b| b - b'0').collect()
        }
    }

    /// Compares the digits past `precision` with one half unit in the last
    /// kept place.
    fn discarded_vs_half(&self, precision: usize) -> Ordering {
        match self.fraction.get(precision) {
            None => Ordering::Less,
            Some(&first) => {
                let rest_is_zero = self.fraction[precision + 1..].iter().all(|&d| d == 0);
                match first.cmp(&5) {
                    Ordering::Equal if !rest_is_zero => Ordering::Greater,
                    ordering => ordering
                }
            }
        }
    }

    fn last_kept_is_odd(&self, precision: usize) -> bool {
        let digit = if precision > 0 {
            self.fraction[precision - 1]
        } else {
            self.integer.last().copied().unwrap_or(0)
        };
        digit % 2 == 1
    }

    fn round_up(&mut self) {
        for digit in self.fraction.iter_mut().rev().chain(self.integer.iter_mut().rev()) {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                return;
            }
        }
        self.integer.insert(0, 1);
    }

    /// Half-even rounding to `precision` fraction digits, padding with zeros
    /// when there are fewer.
    fn round_half_even(&mut self, precision: usize, magnitude: f64) {
        if self.fraction.len() > precision {
            let round_up = match self.discarded_vs_half(precision) {
                Ordering::Less => false,
                Ordering::Greater => true,
                // A tie in the shortest digits is settled on the binary value;
                // both agree on the kept digits.
                Ordering::Equal => match DecimalDigits::exact(magnitude).discarded_vs_half(precision) {
                    Ordering::Less => false,
                    Ordering::Greater => true,
                    Ordering::Equal => self.last_kept_is_odd(precision)
                }
            };
            self.fraction.truncate(precision);
            if round_up {
                self.round_up();
            }
        }
        self.fraction.resize(precision, 0);
    }

    fn is_zero(&self) -> bool {
        self.integer.iter().chain(self.fraction.iter()).all(|&d| d == 0)
    }
}

/// Renders `value` with exactly `precision` fraction digits, rounding half to
/// even, optionally grouping the integer part by thousands with `,`.
///
/// Digits come from the shortest representation of the double, so `0.1`
/// prints as `0.1000…` at any precision. Values that round to zero are printed
/// without a sign.
pub fn format_fixed(value: f64, precision: u32, grouping: bool) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
    }

    let magnitude = value.abs();
    let mut digits = DecimalDigits::shortest(magnitude);
    digits.round_half_even(precision as usize, magnitude);

    let integer_digits: String = digits.integer.iter().map(|&d| char::from(b'0' + d)).collect();
    let mut result = String::new();
    if value < 0.0 && !digits.is_zero() {
        result.push('-');
    }
    if grouping {
        result.push_str(&group_thousands(&integer_digits));
    } else {
        result.push_str(&integer_digits);
    }
    if precision > 0 {
        result.push('.');
        result.extend(digits.fraction.iter().map(|&d| char::from(b'0' + d)));
    }
    result
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_requested_precision() {
        assert_eq!(format_fixed(3.75, 4, true), "3.7500");
        assert_eq!(format_fixed(2.0, 3, false), "2.000");
        assert_eq!(format_fixed(0.5, 1, true), "0.5");
        assert_eq!(format_fixed(0.1, 25, false), "0.1000000000000000000000000");
    }

    #[test]
    fn rounds_half_to_even() {
        assert_eq!(format_fixed(2.625, 2, true), "2.62");
        assert_eq!(format_fixed(0.375, 2, true), "0.38");
        assert_eq!(format_fixed(2.5, 0, true), "2");
        assert_eq!(format_fixed(3.5, 0, true), "4");
    }

    #[test]
    fn ties_in_shortest_digits_follow_the_binary_value() {
        // 2.675 is stored as 2.67499999999999982236431605997495353221893310546875.
        assert_eq!(format_fixed(2.675, 2, false), "2.67");
        assert_eq!(format_fixed(1.005, 2, false), "1.00");
        // 0.45 is stored slightly above the tie.
        assert_eq!(format_fixed(0.45, 1, false), "0.5");
        assert_eq!(format_fixed(-2.675, 2, false), "-2.67");
    }

    #[test]
    fn carries_into_the_integer_part() {
        assert_eq!(format_fixed(9.9999, 2, false), "10.00");
        assert_eq!(format_fixed(999.96, 1, true), "1,000.0");
        assert_eq!(format_fixed(0.96, 0, true), "1");
    }

    #[test]
    fn groups_integer_digits() {
        assert_eq!(format_fixed(1234567.5, 0, true), "1,234,568");
        assert_eq!(format_fixed(1234567.5, 0, false), "1234568");
        assert_eq!(format_fixed(-1234.5678, 2, true), "-1,234.57");
        assert_eq!(format_fixed(999.0, 1, true), "999.0");
        assert_eq!(format_fixed(100000.0, 0, true), "100,000");
    }

    #[test]
    fn zero_precision_drops_the_point() {
        assert_eq!(format_fixed(8.0 / 3.0, 0, true), "3");
    }

    #[test]
    fn negative_values_rounding_to_zero_have_no_sign() {
        assert_eq!(format_fixed(-0.001, 2, true), "0.00");
        assert_eq!(format_fixed(-0.0, 1, true), "0.0");
        assert_eq!(format_fixed(0.0, 2, true), "0.00");
    }

    #[test]
    fn high_precision_keeps_significant_digits() {
        assert_eq!(format_fixed(3.3333333333333335e-16, 30, false), "0.000000000000000333333333333333");
        assert_eq!(format_fixed(1e-30, 35, false), "0.00000000000000000000000000000100000");
        let text = format_fixed(0.5, 30, false);
        assert_eq!(text, format!("0.5{}", "0".repeat(29)));
    }

    #[test]
    fn large_values_use_shortest_digits() {
        assert_eq!(
            format_fixed(7e28, 3, true),
            format!("70{}.000", ",000".repeat(9))
        );
        assert_eq!(format_fixed(1e30, 1, false), format!("1{}.0", "0".repeat(30)));
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_fixed(f64::NAN, 3, true), "NaN");
        assert_eq!(format_fixed(f64::INFINITY, 3, true), "∞");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 3, true), "-∞");
    }
}
