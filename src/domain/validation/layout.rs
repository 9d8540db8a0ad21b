//! Reference-time date layouts
//!
//! Date rules describe their format with a sample rendering of the reference
//! instant `Mon Jan 2 15:04:05 MST 2006` (so `2006-01-02` means ISO date and
//! `02/01/2006` means day/month/year). A layout is compiled once per rule
//! invocation into `chrono` parse items; text that is not a recognised chunk
//! must match literally.
//!
//! Two-digit years (`06`) map 69..=99 to the 1900s and 00..=68 to the
//! 2000s. Weekday names must be spelled correctly but are not checked
//! against the date.

use std::iter;

use chrono::format::{self, Fixed, Item, Numeric, Pad, Parsed};
use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};

/// Which calendar/clock component a chunk fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component {
    Year,
    Month,
    Day,
    Ordinal,
    Hour,
    Hour12,
    Minute,
    Second,
    AmPm,
    Offset,
    Other,
}

/// How much of the value a chunk may consume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Width {
    /// Exactly this many ASCII digits
    Exact(usize),
    /// One or two digits, no leading sign or space
    Digits,
    /// Two digits, 69..=99 in the 1900s and the rest in the 2000s
    ShortYear,
    /// Consumed and checked for shape, but not used (weekday names)
    Ignored,
    /// Whatever chrono accepts for the item
    Free,
}

/// Recognised layout chunks, longest and most specific first
static CHUNKS: &[(&str, Item<'static>, Component, Width)] = &[
    ("January", Item::Fixed(Fixed::LongMonthName), Component::Month, Width::Free),
    ("Jan", Item::Fixed(Fixed::ShortMonthName), Component::Month, Width::Free),
    ("Monday", Item::Fixed(Fixed::LongWeekdayName), Component::Other, Width::Ignored),
    ("Mon", Item::Fixed(Fixed::ShortWeekdayName), Component::Other, Width::Ignored),
    ("MST", Item::Fixed(Fixed::TimezoneName), Component::Other, Width::Free),
    ("Z07:00", Item::Fixed(Fixed::TimezoneOffsetColonZ), Component::Offset, Width::Free),
    ("Z0700", Item::Fixed(Fixed::TimezoneOffsetZ), Component::Offset, Width::Free),
    ("-07:00", Item::Fixed(Fixed::TimezoneOffsetColon), Component::Offset, Width::Free),
    ("-0700", Item::Fixed(Fixed::TimezoneOffset), Component::Offset, Width::Free),
    ("2006", Item::Numeric(Numeric::Year, Pad::Zero), Component::Year, Width::Exact(4)),
    ("002", Item::Numeric(Numeric::Ordinal, Pad::Zero), Component::Ordinal, Width::Exact(3)),
    ("01", Item::Numeric(Numeric::Month, Pad::Zero), Component::Month, Width::Exact(2)),
    ("02", Item::Numeric(Numeric::Day, Pad::Zero), Component::Day, Width::Exact(2)),
    ("03", Item::Numeric(Numeric::Hour12, Pad::Zero), Component::Hour12, Width::Exact(2)),
    ("04", Item::Numeric(Numeric::Minute, Pad::Zero), Component::Minute, Width::Exact(2)),
    ("05", Item::Numeric(Numeric::Second, Pad::Zero), Component::Second, Width::Exact(2)),
    ("06", Item::Numeric(Numeric::YearMod100, Pad::Zero), Component::Year, Width::ShortYear),
    ("15", Item::Numeric(Numeric::Hour, Pad::Zero), Component::Hour, Width::Digits),
    ("_2", Item::Numeric(Numeric::Day, Pad::Space), Component::Day, Width::Free),
    ("PM", Item::Fixed(Fixed::UpperAmPm), Component::AmPm, Width::Free),
    ("pm", Item::Fixed(Fixed::LowerAmPm), Component::AmPm, Width::Free),
    ("1", Item::Numeric(Numeric::Month, Pad::None), Component::Month, Width::Digits),
    ("2", Item::Numeric(Numeric::Day, Pad::None), Component::Day, Width::Digits),
    ("3", Item::Numeric(Numeric::Hour12, Pad::None), Component::Hour12, Width::Digits),
    ("4", Item::Numeric(Numeric::Minute, Pad::None), Component::Minute, Width::Digits),
    ("5", Item::Numeric(Numeric::Second, Pad::None), Component::Second, Width::Digits),
];

/// A compiled date layout
#[derive(Debug, Clone)]
pub struct DateLayout {
    source: String,
    items: Vec<(Item<'static>, Width)>,
    components: Vec<Component>,
}

impl DateLayout {
    /// Compile a reference-time layout
    pub fn compile(layout: &str) -> Self {
        let mut items = Vec::new();
        let mut components = Vec::new();
        let mut literal = String::new();
        let mut rest = layout;

        while !rest.is_empty() {
            // "_2006" is a literal underscore followed by the year
            if rest.starts_with("_2006") {
                literal.push('_');
                rest = &rest[1..];
                continue;
            }

            if let Some(len) = fraction_len(rest) {
                flush_literal(&mut literal, &mut items);
                items.push((Item::Fixed(Fixed::Nanosecond), Width::Free));
                components.push(Component::Second);
                rest = &rest[len..];
                continue;
            }

            match CHUNKS.iter().find(|(chunk, _, _, _)| rest.starts_with(chunk)) {
                Some((chunk, item, component, width)) => {
                    flush_literal(&mut literal, &mut items);
                    items.push((item.clone(), *width));
                    components.push(*component);
                    rest = &rest[chunk.len()..];
                }
                None => {
                    let mut chars = rest.chars();
                    if let Some(c) = chars.next() {
                        literal.push(c);
                    }
                    rest = chars.as_str();
                }
            }
        }
        flush_literal(&mut literal, &mut items);

        Self {
            source: layout.to_string(),
            items,
            components,
        }
    }

    /// The layout text this was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    fn has(&self, component: Component) -> bool {
        self.components.contains(&component)
    }

    /// Parse `value` into a UTC instant
    ///
    /// Zero-padded numeric chunks need their exact digit count. Components
    /// missing from the layout default to year 0, January, day 1 and
    /// midnight. Without a zone offset the value is read as UTC.
    pub fn parse(&self, value: &str) -> Option<DateTime<Utc>> {
        let mut parsed = Parsed::new();
        let mut rest = value;
        for (item, width) in &self.items {
            rest = parse_item(&mut parsed, rest, item, *width)?;
        }
        if !rest.is_empty() {
            return None;
        }
        self.fill_defaults(&mut parsed).ok()?;

        if self.has(Component::Offset) {
            return parsed
                .to_datetime()
                .ok()
                .map(|dt| dt.with_timezone(&Utc));
        }

        let date = parsed.to_naive_date().ok()?;
        let time = if self.has(Component::Hour) || self.has(Component::Hour12) {
            parsed.to_naive_time().ok()?
        } else {
            NaiveTime::MIN
        };
        Some(NaiveDateTime::new(date, time).and_utc())
    }

    fn fill_defaults(&self, parsed: &mut Parsed) -> format::ParseResult<()> {
        if !self.has(Component::Year) {
            parsed.set_year(0)?;
        }
        if !self.has(Component::Ordinal) {
            if !self.has(Component::Month) {
                parsed.set_month(1)?;
            }
            if !self.has(Component::Day) {
                parsed.set_day(1)?;
            }
        }
        if self.has(Component::Hour12) && !self.has(Component::AmPm) {
            parsed.set_ampm(false)?;
        }
        if !self.has(Component::Hour) && !self.has(Component::Hour12) {
            parsed.set_hour(0)?;
        }
        if !self.has(Component::Minute) {
            parsed.set_minute(0)?;
        }
        Ok(())
    }
}

/// Consume one item from the front of `rest`, returning what is left
fn parse_item<'v>(parsed: &mut Parsed, rest: &'v str, item: &Item<'static>, width: Width) -> Option<&'v str> {
    match width {
        Width::Exact(n) => {
            let digits = leading_digits(rest, n)?;
            format::parse(parsed, digits, iter::once(item)).ok()?;
            Some(&rest[n..])
        }
        Width::ShortYear => {
            let yy: i32 = leading_digits(rest, 2)?.parse().ok()?;
            let year = if yy >= 69 { 1900 + yy } else { 2000 + yy };
            parsed.set_year(i64::from(year)).ok()?;
            Some(&rest[2..])
        }
        Width::Digits => {
            if !rest.starts_with(|c: char| c.is_ascii_digit()) {
                return None;
            }
            format::parse_and_remainder(parsed, rest, iter::once(item)).ok()
        }
        Width::Ignored => format::parse_and_remainder(&mut Parsed::new(), rest, iter::once(item)).ok(),
        Width::Free => format::parse_and_remainder(parsed, rest, iter::once(item)).ok(),
    }
}

/// The first `n` bytes of `rest` when they are all ASCII digits
fn leading_digits(rest: &str, n: usize) -> Option<&str> {
    rest.get(..n).filter(|d| d.bytes().all(|b| b.is_ascii_digit()))
}

/// Length of a `.000`/`.999` fractional-second chunk at the start of `rest`
fn fraction_len(rest: &str) -> Option<usize> {
    let digits = rest.strip_prefix('.')?;
    let first = digits.chars().next().filter(|c| *c == '0' || *c == '9')?;
    let run = digits.chars().take_while(|c| *c == first).count();
    let followed_by_digit = digits[run..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit());
    if followed_by_digit {
        None
    } else {
        Some(1 + run)
    }
}

fn flush_literal(literal: &mut String, items: &mut Vec<(Item<'static>, Width)>) {
    if !literal.is_empty() {
        items.push((
            Item::OwnedLiteral(std::mem::take(literal).into_boxed_str()),
            Width::Free,
        ));
    }
}

/// Parse `value` under `layout` in one step
pub fn parse_date(layout: &str, value: &str) -> Option<DateTime<Utc>> {
    DateLayout::compile(layout).parse(value)
}

/// Start of the current UTC day
pub fn today() -> DateTime<Utc> {
    Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc()
}
