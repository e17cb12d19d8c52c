//! Week-to-string routines.
//!
//! A format string is literal text with fields in curly braces. Each field
//! is a colon followed by a letter, optionally preceded by an alignment
//! (`<`, `^`, or `>`), a width, and a `0` to pad with zeroes:
//!
//! | Field | Meaning                                  |
//! |-------|------------------------------------------|
//! | `Y`   | the week-numbering year                  |
//! | `y`   | the week-numbering year, within century  |
//! | `W`   | the week number                          |
//! | `D`   | the day of the month the week starts on  |
//! | `d`   | the day of the month the week ends on    |
//! | `M`   | the month the week starts in, from 1     |
//! | `m`   | the month the week ends in, from 1       |
//!
//! Write `{{` and `}}` for literal braces.
//!
//! ```rust
//! use calendar_week::{CalendarWeek, WeekConvention};
//! use calendar_week::format::WeekFormat;
//!
//! let week = CalendarWeek::from_year_week(2017, 21, WeekConvention::iso_8601()).unwrap();
//! let format = WeekFormat::parse("{:Y}-W{>02:W} ({>02:D}/{>02:M} to {>02:d}/{>02:m})").unwrap();
//! assert_eq!(format.format(&week), "2017-W21 (22/05 to 28/05)");
//! ```

use std::fmt::Display;
use std::str::CharIndices;

use pad::{PadStr, Alignment};

use crate::cal::DatePiece;
use crate::cal::datetime::LocalDate;
use crate::cal::week::CalendarWeek;


/// Which end of the week a day or month field refers to.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum End {
    First,
    Last,
}

impl End {
    fn of(self, week: &CalendarWeek) -> LocalDate {
        match self {
            End::First => week.first_day(),
            End::Last  => week.last_day(),
        }
    }
}


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Field<'a> {
    Literal(&'a str),

    Year(NumArguments),
    YearOfCentury(NumArguments),
    Week(NumArguments),

    Day(End, NumArguments),
    Month(End, NumArguments),
}

impl<'a> Field<'a> {
    fn format(&self, week: &CalendarWeek, w: &mut String) {
        match *self {
            Field::Literal(s)        => w.push_str(s),
            Field::Year(a)           => a.format(w, week.year()),
            Field::YearOfCentury(a)  => a.format(w, week.year().rem_euclid(100)),
            Field::Week(a)           => a.format(w, week.week()),
            Field::Day(end, a)       => a.format(w, end.of(week).day()),
            Field::Month(end, a)     => a.format(w, end.of(week).month() as usize),
        }
    }
}


/// A parsed format string, ready to render weeks.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct WeekFormat<'a> {
    pub fields: Vec<Field<'a>>,
}

impl<'a> WeekFormat<'a> {
    pub fn format(&self, week: &CalendarWeek) -> String {
        let mut buf = String::new();
        for field in &self.fields {
            field.format(week, &mut buf);
        }
        buf
    }

    pub fn parse(input: &'a str) -> Result<WeekFormat<'a>, FormatError> {
        let mut parser = FormatParser::new(input);
        parser.parse_format_string()?;

        Ok(WeekFormat { fields: parser.fields })
    }
}


#[derive(PartialEq, Eq, Clone, Debug, Copy, thiserror::Error)]
pub enum FormatError {
    #[error("invalid character {c:?} at position {pos}")]
    InvalidChar { c: char, colon: bool, pos: Pos },

    #[error("unclosed brace at position {open_pos}")]
    OpenCurlyBrace { open_pos: Pos },

    #[error("unmatched closing brace at position {close_pos}")]
    CloseCurlyBrace { close_pos: Pos },

    #[error("no field between positions {open_pos} and {close_pos}")]
    MissingField { open_pos: Pos, close_pos: Pos },

    #[error("field at position {open_pos} is already aligned {current_alignment:?}")]
    DoubleAlignment { open_pos: Pos, current_alignment: Alignment },

    #[error("field at position {open_pos} already has width {current_width}")]
    DoubleWidth { open_pos: Pos, current_width: Width },
}

pub type Width = usize;
pub type Pos = usize;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Arguments {
    pub alignment: Option<Alignment>,
    pub width:     Option<Width>,
    pub pad_char:  Option<char>,
}

impl Arguments {
    pub fn empty() -> Self {
        Self {
            alignment: None,
            width:     None,
            pad_char:  None,
        }
    }

    pub fn set_width(&mut self, width: Width) -> Self {
        self.width = Some(width);
        *self
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        *self
    }

    pub fn set_pad_char(&mut self, pad_char: char) -> Self {
        self.pad_char = Some(pad_char);
        *self
    }

    fn update_width(&mut self, width: Width, open_pos: Pos) -> Result<(), FormatError> {
        match self.width {
            None           => { self.width = Some(width); Ok(()) },
            Some(existing) => Err(FormatError::DoubleWidth { open_pos, current_width: existing }),
        }
    }

    fn update_alignment(&mut self, alignment: Alignment, open_pos: Pos) -> Result<(), FormatError> {
        match self.alignment {
            None           => { self.alignment = Some(alignment); Ok(()) },
            Some(existing) => Err(FormatError::DoubleAlignment { open_pos, current_alignment: existing }),
        }
    }

    fn format(self, w: &mut String, string: &str) {
        let width     = self.width.unwrap_or(0);
        let pad_char  = self.pad_char.unwrap_or(' ');
        let alignment = self.alignment.unwrap_or(Alignment::Left);
        w.push_str(&string.pad(width, pad_char, alignment, false));
    }

    pub fn is_empty(&self) -> bool {
        self.alignment.is_none() && self.width.is_none() && self.pad_char.is_none()
    }
}


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct NumArguments(Arguments);

impl NumArguments {
    #[cfg(test)]
    fn empty() -> Self {
        NumArguments(Arguments::empty())
    }

    fn format<N: Display>(self, w: &mut String, number: N) {
        self.0.format(w, &number.to_string())
    }
}


struct FormatParser<'a> {
    iter:   CharIndices<'a>,
    fields: Vec<Field<'a>>,
    input:  &'a str,
    anchor: Option<Pos>,
    peekee: Option<Option<(Pos, char)>>,
}

impl<'a> FormatParser<'a> {
    fn new(input: &'a str) -> Self {
        FormatParser {
            iter:   input.char_indices(),
            fields: Vec::new(),
            input,
            anchor: None,
            peekee: None,
        }
    }

    fn next(&mut self) -> Option<(Pos, char)> {
        match self.peekee.take() {
            Some(p) => p,
            None    => self.iter.next(),
        }
    }

    fn peek(&mut self) -> Option<(Pos, char)> {
        match self.peekee {
            Some(thing) => thing,
            None => {
                let thing = self.iter.next();
                self.peekee = Some(thing);
                thing
            }
        }
    }

    fn collect_up_to_anchor(&mut self, position: Option<Pos>) {
        if let Some(pos) = self.anchor.take() {
            let text = match position {
                Some(new_pos) => &self.input[pos .. new_pos],
                None          => &self.input[pos ..],
            };
            self.fields.push(Field::Literal(text));
        }
    }

    // Literal fields are slices of the input, so an escaped brace becomes
    // a one-character Literal of its own rather than being merged into
    // the text around it.
    fn parse_format_string(&mut self) -> Result<(), FormatError> {
        loop {
            match self.next() {
                Some((new_pos, '{')) => {
                    self.collect_up_to_anchor(Some(new_pos));

                    let field = self.parse_field(new_pos)?;
                    self.fields.push(field);
                },
                Some((new_pos, '}')) => {
                    if let Some((_, '}')) = self.next() {
                        self.collect_up_to_anchor(Some(new_pos));
                        self.fields.push(Field::Literal(&self.input[new_pos ..= new_pos]));
                    }
                    else {
                        return Err(FormatError::CloseCurlyBrace { close_pos: new_pos });
                    }
                },
                Some((pos, _)) => {
                    if self.anchor.is_none() {
                        self.anchor = Some(pos);
                    }
                },
                None => break,
            }
        }

        self.collect_up_to_anchor(None);
        Ok(())
    }

    fn parse_number(&mut self, first_digit: u32) -> Width {
        let mut number = first_digit as Width;

        while let Some((_, c)) = self.peek() {
            match c.to_digit(10) {
                Some(digit) => {
                    number = number.saturating_mul(10).saturating_add(digit as Width);
                    let _ = self.next();
                },
                None => break,
            }
        }

        number
    }

    fn parse_field(&mut self, open_pos: Pos) -> Result<Field<'a>, FormatError> {
        let mut args = Arguments::empty();
        let mut field = None;
        let close_pos;
        let mut first = true;

        loop {
            match self.next() {
                Some((pos, '{')) if first => return Ok(Field::Literal(&self.input[pos ..= pos])),
                Some((_, '<')) => { args.update_alignment(Alignment::Left, open_pos)?; },
                Some((_, '^')) => { args.update_alignment(Alignment::Middle, open_pos)?; },
                Some((_, '>')) => { args.update_alignment(Alignment::Right, open_pos)?; },
                Some((_, '0')) if args.width.is_none() => { args.pad_char = Some('0'); },
                Some((pos, ':')) => {
                    let letter = match self.next() {
                        Some((_, c)) => c,
                        None         => return Err(FormatError::OpenCurlyBrace { open_pos }),
                    };

                    field = Some(match letter {
                        'Y' => Field::Year(NumArguments(args)),
                        'y' => Field::YearOfCentury(NumArguments(args)),
                        'W' => Field::Week(NumArguments(args)),
                        'D' => Field::Day(End::First, NumArguments(args)),
                        'd' => Field::Day(End::Last, NumArguments(args)),
                        'M' => Field::Month(End::First, NumArguments(args)),
                        'm' => Field::Month(End::Last, NumArguments(args)),
                        c   => return Err(FormatError::InvalidChar { c, colon: true, pos: pos + 1 }),
                    });
                },
                Some((_, n)) if n.is_ascii_digit() => {
                    let width = self.parse_number(n.to_digit(10).unwrap_or(0));
                    args.update_width(width, open_pos)?;
                },
                Some((pos, '}')) => { close_pos = pos; break; },
                Some((pos, c)) => return Err(FormatError::InvalidChar { c, colon: false, pos }),
                None => return Err(FormatError::OpenCurlyBrace { open_pos }),
            };

            first = false;
        }

        field.ok_or(FormatError::MissingField { open_pos, close_pos })
    }
}
