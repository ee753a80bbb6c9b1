//! Numeric literal scanning and value derivation
//!
//! Scanning is a pure transition function, [`step`], driven by the lexer one
//! character at a time. The state records the narrowest base the digits seen
//! so far allow; it only ever widens (binary → octal → decimal → hex digits).
//! An explicit suffix letter (`b`, `o`, `d`, `h`) fixes the base and only a
//! delimiter may follow it. A `.` or an exponent switches to float mode.
//!
//! After scanning, [`Numeral::derive`] turns the scanned text into a base,
//! cleaned digit string and display text:
//!
//! ```text
//! 1010b  -> base 2,  "1010",  "1010 (1010)"
//! 1ACh   -> base 16, "1AC",   "110101100 (1AC)"
//! 3.14   -> float,   "3.14",  "01000000010010001111010111000011 (3.14)"
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Base {
    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }

    fn from_suffix(letter: char) -> Option<Base> {
        match letter {
            'B' => Some(Base::Binary),
            'O' => Some(Base::Octal),
            'D' => Some(Base::Decimal),
            'H' => Some(Base::Hexadecimal),
            _ => None,
        }
    }
}

/// Scanner states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Start,
    BinaryCandidate,
    OctalCandidate,
    DecimalCandidate,
    HexDigits,
    Fraction,
    ExponentSign,
    ExponentDigits,
    /// A base suffix was read; only a delimiter may follow.
    Suffixed(Base),
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanState::Start => write!(f, "START"),
            ScanState::BinaryCandidate => write!(f, "BIN"),
            ScanState::OctalCandidate => write!(f, "OCT"),
            ScanState::DecimalCandidate => write!(f, "DEC"),
            ScanState::HexDigits => write!(f, "HEX"),
            ScanState::Fraction => write!(f, "FLOAT"),
            ScanState::ExponentSign => write!(f, "EXP_SIGN"),
            ScanState::ExponentDigits => write!(f, "EXP_DIGITS"),
            ScanState::Suffixed(base) => write!(f, "END_{}", base.radix()),
        }
    }
}

/// Outcome of feeding one character to the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Consume the character, append `push` to the literal.
    Accept { push: char, next: ScanState },
    /// Append `push` without consuming the character.
    Insert { push: char, next: ScanState },
    /// The literal ends before this character.
    Stop,
    Reject(String),
}

/// Characters that end a literal without belonging to it.
pub fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t' | '\n' | '\r' | ';' | ',' | ':' | '(' | ')' | '{' | '}' | '~' | '+' | '-' | '*' | '/'
    )
}

fn accept(push: char, next: ScanState) -> Step {
    Step::Accept { push, next }
}

fn invalid(c: char) -> Step {
    Step::Reject(format!("invalid character '{}' in number", c))
}

pub fn step(state: ScanState, c: char) -> Step {
    use ScanState::*;

    match state {
        Start => match c {
            '0' | '1' => accept(c, BinaryCandidate),
            '2'..='7' => accept(c, OctalCandidate),
            '8' | '9' => accept(c, DecimalCandidate),
            '.' => accept(c, Fraction),
            _ => Step::Stop,
        },
        BinaryCandidate | OctalCandidate | DecimalCandidate => candidate_step(state, c),
        HexDigits => match c {
            '0'..='9' | 'A'..='F' => accept(c, HexDigits),
            'h' | 'H' => accept('H', Suffixed(Base::Hexadecimal)),
            _ if is_delimiter(c) => Step::Stop,
            _ => invalid(c),
        },
        Fraction => match c {
            '0'..='9' => accept(c, Fraction),
            'e' | 'E' => accept(c, ExponentSign),
            _ if is_delimiter(c) => Step::Stop,
            _ => invalid(c),
        },
        ExponentSign => match c {
            '+' | '-' => accept(c, ExponentDigits),
            '0'..='9' => Step::Insert {
                push: '+',
                next: ExponentDigits,
            },
            _ => Step::Reject("expected a digit in the exponent".to_string()),
        },
        ExponentDigits => match c {
            '0'..='9' => accept(c, ExponentDigits),
            _ if is_delimiter(c) => Step::Stop,
            _ => Step::Reject("exponent must be an integer".to_string()),
        },
        Suffixed(_) => {
            if is_delimiter(c) {
                Step::Stop
            } else {
                Step::Reject(format!("invalid character '{}' after base suffix", c))
            }
        }
    }
}

/// Shared transitions of the binary, octal and decimal candidate states.
fn candidate_step(state: ScanState, c: char) -> Step {
    use ScanState::*;

    match c {
        '0' | '1' => accept(c, state),
        '2'..='7' if state == BinaryCandidate => accept(c, OctalCandidate),
        '2'..='7' => accept(c, state),
        '8' | '9' => accept(c, DecimalCandidate),
        '.' => accept(c, Fraction),
        'e' | 'E' => accept(c, ExponentSign),
        'b' | 'B' if state == BinaryCandidate => accept(c, Suffixed(Base::Binary)),
        'o' | 'O' if state != DecimalCandidate => accept(c, Suffixed(Base::Octal)),
        'd' | 'D' => accept(c, Suffixed(Base::Decimal)),
        'A'..='F' => accept(c, HexDigits),
        'h' | 'H' => accept('H', Suffixed(Base::Hexadecimal)),
        _ if is_delimiter(c) => Step::Stop,
        _ => invalid(c),
    }
}

/// A scanned literal with its derived base, digits and display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral {
    pub base: Base,
    /// Upper-cased literal with the base suffix removed.
    pub digits: String,
    pub is_float: bool,
    pub display: String,
}

impl Numeral {
    /// Derives base, digits and display text from the scanned literal.
    /// Errors carry the message for a lexical error.
    pub fn derive(raw: &str) -> Result<Numeral, String> {
        let mut digits = raw.to_ascii_uppercase();
        let base = match digits.chars().last().and_then(Base::from_suffix) {
            Some(base) => {
                digits.pop();
                base
            }
            None => Base::Decimal,
        };
        let is_float = digits.contains('.') || digits.contains('E');
        let display = display_text(base, &digits, is_float)?;

        Ok(Numeral {
            base,
            digits,
            is_float,
            display,
        })
    }

    /// Magnitude of an integer literal.
    pub fn value(&self) -> Option<u128> {
        if self.is_float {
            None
        } else {
            u128::from_str_radix(&self.digits, self.base.radix()).ok()
        }
    }
}

/// Display text of a literal: its bit pattern followed by the digits.
pub fn display_text(base: Base, digits: &str, is_float: bool) -> Result<String, String> {
    if is_float {
        let bits = float_bits(digits)?;
        Ok(format!("{:032b} ({})", bits, digits))
    } else {
        let value = integer_value(base, digits)?;
        Ok(format!("{:b} ({})", value, digits))
    }
}

fn float_bits(digits: &str) -> Result<u32, String> {
    if digits == "." {
        return Err("malformed number".to_string());
    }
    let text = if digits.is_empty() { "0.0" } else { digits };
    let wide: f64 = text
        .parse()
        .map_err(|_| format!("cannot convert number {}", digits))?;
    let single = wide as f32;
    if wide.is_finite() && !single.is_finite() {
        return Err(format!("number {} does not fit in single precision", digits));
    }
    Ok(single.to_bits())
}

fn integer_value(base: Base, digits: &str) -> Result<u128, String> {
    if digits.is_empty() {
        return Err("empty number".to_string());
    }
    if base == Base::Decimal && digits.len() > 1 && digits.starts_with('0') {
        return Err("malformed number".to_string());
    }
    u128::from_str_radix(digits, base.radix()).map_err(|_| {
        format!(
            "cannot convert number {} in base {}",
            digits,
            base.radix()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feeds `text` through the scanner the way the lexer does.
    fn scan(text: &str) -> Result<String, String> {
        let chars: Vec<char> = text.chars().collect();
        let mut raw = String::new();
        let mut state = ScanState::Start;
        let mut i = 0;
        while i < chars.len() {
            match step(state, chars[i]) {
                Step::Accept { push, next } => {
                    raw.push(push);
                    state = next;
                    i += 1;
                }
                Step::Insert { push, next } => {
                    raw.push(push);
                    state = next;
                }
                Step::Stop => break,
                Step::Reject(message) => return Err(message),
            }
        }
        Ok(raw)
    }

    #[test]
    fn test_candidates_only_widen() {
        assert_eq!(step(ScanState::BinaryCandidate, '5'), accept('5', ScanState::OctalCandidate));
        assert_eq!(step(ScanState::BinaryCandidate, '9'), accept('9', ScanState::DecimalCandidate));
        assert_eq!(step(ScanState::OctalCandidate, '1'), accept('1', ScanState::OctalCandidate));
        assert_eq!(step(ScanState::DecimalCandidate, '3'), accept('3', ScanState::DecimalCandidate));
        assert_eq!(step(ScanState::DecimalCandidate, 'C'), accept('C', ScanState::HexDigits));
    }

    #[test]
    fn test_suffix_letters() {
        assert_eq!(scan("1010b"), Ok("1010b".to_string()));
        assert_eq!(scan("17o"), Ok("17o".to_string()));
        assert_eq!(scan("99d"), Ok("99d".to_string()));
        assert_eq!(scan("1ach").unwrap_err(), "invalid character 'a' in number");
        assert_eq!(scan("1ACh"), Ok("1ACH".to_string()));
        // octal suffix is not available once a decimal digit was seen
        assert!(scan("19o").is_err());
        // 'B' after an octal digit is a hex digit, not a suffix
        assert_eq!(step(ScanState::OctalCandidate, 'B'), accept('B', ScanState::HexDigits));
    }

    #[test]
    fn test_suffix_must_be_followed_by_delimiter() {
        assert_eq!(scan("12h;"), Ok("12H".to_string()));
        assert_eq!(
            scan("12hx").unwrap_err(),
            "invalid character 'x' after base suffix"
        );
    }

    #[test]
    fn test_exponent_sign_is_inserted() {
        assert_eq!(scan("1E3"), Ok("1E+3".to_string()));
        assert_eq!(scan("2.5e-1"), Ok("2.5e-1".to_string()));
        assert!(scan("1Ex").is_err());
        assert!(scan("1E+3.").is_err());
    }

    #[test]
    fn test_delimiters_end_the_literal() {
        assert_eq!(scan("42)"), Ok("42".to_string()));
        assert_eq!(scan("7+1"), Ok("7".to_string()));
        assert_eq!(scan("3.5 "), Ok("3.5".to_string()));
        assert!(scan("42=").is_err());
    }

    #[test]
    fn test_derive_hex_literal() {
        let numeral = Numeral::derive("1ACH").unwrap();
        assert_eq!(numeral.base, Base::Hexadecimal);
        assert_eq!(numeral.digits, "1AC");
        assert_eq!(numeral.value(), Some(428));
        assert_eq!(numeral.display, "110101100 (1AC)");
    }

    #[test]
    fn test_derive_integers() {
        assert_eq!(Numeral::derive("10").unwrap().display, "1010 (10)");
        assert_eq!(Numeral::derive("1010b").unwrap().display, "1010 (1010)");
        assert_eq!(Numeral::derive("12o").unwrap().display, "1010 (12)");
        assert_eq!(Numeral::derive("0").unwrap().display, "0 (0)");
        assert_eq!(Numeral::derive("007").unwrap_err(), "malformed number");
        // a trailing B is read as the binary suffix
        assert!(Numeral::derive("1AB").is_err());
    }

    #[test]
    fn test_derive_floats() {
        let numeral = Numeral::derive("3.14").unwrap();
        assert!(numeral.is_float);
        assert_eq!(numeral.display, "01000000010010001111010111000011 (3.14)");

        let numeral = Numeral::derive("1E+3").unwrap();
        assert!(numeral.is_float);
        assert_eq!(numeral.display, "01000100011110100000000000000000 (1E+3)");

        assert_eq!(Numeral::derive(".").unwrap_err(), "malformed number");
        assert!(Numeral::derive("1E+").is_err());
        assert!(Numeral::derive("1E+39").is_err());
    }

    #[test]
    fn test_display_is_reproducible_from_base_and_digits() {
        for raw in ["1ACH", "777o", "1010b", "123", "0.5", "6.02E+23"] {
            let numeral = Numeral::derive(raw).unwrap();
            let again = display_text(numeral.base, &numeral.digits, numeral.is_float).unwrap();
            assert_eq!(again, numeral.display);
            assert_eq!(Numeral::derive(raw).unwrap(), numeral);
        }
    }
}
