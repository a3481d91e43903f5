use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::space0,
    combinator::rest,
    sequence::{pair, terminated, tuple},
    IResult,
};

pub const SP: u8 = 0x20;
pub const HTAB: u8 = 0x09;
pub const CR: u8 = 0x0D;
pub const LF: u8 = 0x0A;

/// ```abnf
/// ftext      =   %d33-57 /          ; Printable US-ASCII
///                %d59-126           ;  characters not including
///                                   ;  ":".
/// ```
pub fn is_ftext(c: u8) -> bool {
    (0x21..=0x7E).contains(&c) && c != b':'
}

/// Field name followed by its colon.
///
/// Whitespace between the name and the colon is part of the obsolete
/// syntax (RFC 5322 section 4.5) and is tolerated.
///
/// ```abnf
/// field-name =   1*ftext
/// obs-optional = field-name *WSP ":" unstructured CRLF
/// ```
pub fn field_name(input: &[u8]) -> IResult<&[u8], &[u8]> {
    terminated(take_while1(is_ftext), pair(space0, tag(b":")))(input)
}

/// A full header line, already stripped of its line terminator.
/// Returns the field name and the raw, untrimmed field body.
pub fn header_line(input: &[u8]) -> IResult<&[u8], (&[u8], &[u8])> {
    tuple((field_name, rest))(input)
}

/// Folded lines start with white space (RFC 5322 section 2.2.3).
pub fn is_continuation(line: &[u8]) -> bool {
    matches!(line.first(), Some(&SP) | Some(&HTAB))
}

/// Strip a trailing LF or CRLF.
pub fn strip_eol(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(&[LF]).unwrap_or(line);
    line.strip_suffix(&[CR]).unwrap_or(line)
}

pub fn trim_wsp(mut value: &[u8]) -> &[u8] {
    while let [first, tail @ ..] = value {
        if *first == SP || *first == HTAB {
            value = tail;
        } else {
            break;
        }
    }
    while let [head @ .., last] = value {
        if *last == SP || *last == HTAB {
            value = head;
        } else {
            break;
        }
    }
    value
}
