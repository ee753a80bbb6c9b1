// Integration tests for tokenization and numeric literals

use toylang::parser::numeral::{display_text, Base, Numeral};
use toylang::{tokenize, ErrorKind, Token, TokenKind};

/// Source characters covered by the token at `index`. A number can be
/// shorter in the source than its scanned text (`1E3` scans as `1E+3`), so its
/// width is measured up to the next token, and the covered text must lex back
/// to the same number.
fn width(tokens: &[Token], index: usize, lines: &[Vec<char>]) -> usize {
    let token = &tokens[index];
    if token.kind != TokenKind::Number {
        return token.text.chars().count();
    }

    let row = &lines[token.line() - 1];
    let end = match tokens.get(index + 1) {
        Some(next) if next.line() == token.line() => next.column() - 1,
        _ => row.len(),
    };
    let covered: String = row[token.column() - 1..end].iter().collect();
    let relexed = tokenize(&covered).expect("covered text does not lex");
    assert_eq!(relexed.tokens.len(), 1, "{:?} is not one token", covered);
    assert_eq!(relexed.tokens[0].text, token.text);
    end - (token.column() - 1)
}

/// Every character of `source` must be covered by exactly one token, in order.
fn assert_tiles(source: &str) {
    let lexed = tokenize(source).expect("tokenize failed");
    let lines: Vec<Vec<char>> = source.split('\n').map(|l| l.chars().collect()).collect();
    let (mut line, mut column) = (1, 1);

    for (index, token) in lexed.tokens.iter().enumerate() {
        assert_eq!(
            (token.line(), token.column()),
            (line, column),
            "token {} is out of place",
            token
        );
        if token.text == "\n" {
            line += 1;
            column = 1;
        } else {
            column += width(&lexed.tokens, index, &lines);
        }
    }

    let last_line = lines.len();
    let last_column = lines.last().map_or(0, |l| l.len()) + 1;
    assert_eq!((line, column), (last_line, last_column));
}

#[test]
fn test_tokens_tile_comment_free_sources() {
    assert_tiles("a, b : integer;\na = 1010b\nb = a plus 1ACh\nend");
    assert_tiles("x : real;\nx = 3.14 mult 2.5E+1\noutput(x  x)\nend");
    assert_tiles("f : boolean;\nif ~f then { f = true } end_else\nend");
    // exponent literals scan with an inserted sign
    assert_tiles("a : integer;\nx : real;\na = 1E3\nx = 2.5e2 plus 4.0E-1\nend");
}

#[test]
fn test_keyword_and_separator_kinds() {
    let lexed = tokenize("do while f LE 1 loop").unwrap();
    let significant: Vec<_> = lexed
        .tokens
        .iter()
        .filter(|t| !t.is_whitespace())
        .map(|t| (t.kind.code(), t.text.as_str()))
        .collect();
    assert_eq!(
        significant,
        vec![(1, "do"), (1, "while"), (3, "f"), (2, "LE"), (4, "1 (1)"), (1, "loop")]
    );
}

#[test]
fn test_identifier_table_is_insertion_ordered_and_unique() {
    let lexed = tokenize("zeta alpha zeta beta alpha").unwrap();
    assert_eq!(
        lexed.identifiers.iter().collect::<Vec<_>>(),
        vec!["zeta", "alpha", "beta"]
    );
    assert_eq!(lexed.identifiers.ordinal("beta"), Some(3));
}

#[test]
fn test_hex_literal_scenario() {
    let numeral = Numeral::derive("1ACH").unwrap();
    assert_eq!(numeral.base, Base::Hexadecimal);
    assert_eq!(numeral.digits, "1AC");
    assert_eq!(numeral.value(), Some(428));
    assert_eq!(numeral.display, "110101100 (1AC)");
}

#[test]
fn test_display_is_deterministic() {
    for (base, digits, is_float) in [
        (Base::Binary, "1010", false),
        (Base::Octal, "777", false),
        (Base::Decimal, "3.14", true),
        (Base::Hexadecimal, "FF", false),
    ] {
        let first = display_text(base, digits, is_float).unwrap();
        let second = display_text(base, digits, is_float).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_float_display_is_single_precision_bits() {
    let lexed = tokenize("3.14").unwrap();
    assert_eq!(lexed.tokens[0].text, "01000000010010001111010111000011 (3.14)");
}

#[test]
fn test_malformed_numbers_are_lexical_errors() {
    for source in ["12q", "102b", "19o", "1.2.3"] {
        let err = tokenize(source).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lexical, "{} should fail", source);
        assert_eq!(err.line(), 1);
    }
}

#[test]
fn test_space_and_newline_tokens_carry_locations() {
    let lexed = tokenize("a\n b").unwrap();
    let newline = &lexed.tokens[1];
    assert_eq!(newline.kind, TokenKind::Separator);
    assert_eq!((newline.line(), newline.column()), (1, 2));
    let space = &lexed.tokens[2];
    assert!(space.is_separator(" "));
    assert_eq!((space.line(), space.column()), (2, 1));
}
