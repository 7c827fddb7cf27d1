//! Message formatting
//!
//! A formatted line is `header + body + "\n"`. The header is built from the
//! [`FormatFlags`] in this order: date, time, call site. The body is every
//! value rendered with `Display` and followed by the column delimiter.

use super::flags::FormatFlags;
use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use std::fmt::{self, Display, Write};
use std::panic::Location;

/// Source location reported in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    /// Placeholder used when no location is available
    pub const fn unknown() -> Self {
        Self {
            file: "???",
            line: 0,
        }
    }

    /// Location of the caller of the enclosing `#[track_caller]` chain
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// Final path segment of the file
    pub fn short_file(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(self.file)
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Formatting configuration shared by every message of a logger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    flags: FormatFlags,
    delimiter: String,
}

impl Formatter {
    pub fn new(flags: FormatFlags, delimiter: impl Into<String>) -> Self {
        Self {
            flags,
            delimiter: delimiter.into(),
        }
    }

    pub fn flags(&self) -> FormatFlags {
        self.flags
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Whether the header needs a call site at all
    pub fn wants_call_site(&self) -> bool {
        !self.flags.contains(FormatFlags::NO_STACK_TRACE)
            && self
                .flags
                .intersects(FormatFlags::SHORT_FILE | FormatFlags::LONG_FILE)
    }

    /// Append the header for `now` and `site` to `buf`
    ///
    /// A missing site is rendered as `???:0`.
    pub fn write_header<Tz: TimeZone>(
        &self,
        buf: &mut String,
        now: &DateTime<Tz>,
        site: Option<&CallSite>,
    ) {
        let flags = self.flags;
        if flags.intersects(FormatFlags::DATE | FormatFlags::TIME | FormatFlags::MICROSECONDS) {
            let t = if flags.contains(FormatFlags::UTC) {
                now.naive_utc()
            } else {
                now.naive_local()
            };
            if flags.contains(FormatFlags::DATE) {
                let _ = write!(buf, "{:04}/{:02}/{:02} ", t.year(), t.month(), t.day());
            }
            if flags.intersects(FormatFlags::TIME | FormatFlags::MICROSECONDS) {
                let _ = write!(buf, "{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second());
                if flags.contains(FormatFlags::MICROSECONDS) {
                    // leap seconds report nanos >= 1e9
                    let micros = (t.nanosecond() / 1_000).min(999_999);
                    let _ = write!(buf, ".{:06}", micros);
                }
                buf.push(' ');
            }
        }

        if self.wants_call_site() {
            let site = site.copied().unwrap_or_else(CallSite::unknown);
            let file = if flags.contains(FormatFlags::SHORT_FILE) {
                site.short_file()
            } else {
                site.file
            };
            let _ = write!(buf, "{}:{}: ", file, site.line);
        }
    }

    /// Every value followed by the delimiter
    pub fn concat(&self, values: &[&dyn Display]) -> String {
        let mut out = String::new();
        for value in values {
            let _ = write!(out, "{}", value);
            out.push_str(&self.delimiter);
        }
        out
    }

    /// Like [`Formatter::concat`], with `prefixes[i]` before value `i`
    /// while prefixes remain, and `reset` once at the end.
    pub fn concat_colored(
        &self,
        prefixes: &[String],
        reset: &str,
        values: &[&dyn Display],
    ) -> String {
        let mut out = String::new();
        for (i, value) in values.iter().enumerate() {
            if let Some(prefix) = prefixes.get(i) {
                out.push_str(prefix);
            }
            let _ = write!(out, "{}", value);
            out.push_str(&self.delimiter);
        }
        out.push_str(reset);
        out
    }

    /// Complete line: header at `now`, the body, and a trailing newline
    pub fn line_at<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        site: Option<&CallSite>,
        body: &str,
    ) -> String {
        let mut line = String::with_capacity(body.len() + 48);
        self.write_header(&mut line, now, site);
        line.push_str(body);
        line.push('\n');
        line
    }

    /// Complete line stamped with the current local time
    pub fn line(&self, site: Option<&CallSite>, body: &str) -> String {
        self.line_at(&Local::now(), site, body)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(FormatFlags::STD_FLAGS, " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2009, 1, 23, 1, 23, 23)
            .single()
            .expect("valid datetime")
            + Duration::microseconds(123_123)
    }

    fn header(flags: FormatFlags, site: Option<&CallSite>) -> String {
        let mut buf = String::new();
        Formatter::new(flags, " ").write_header(&mut buf, &fixed_instant(), site);
        buf
    }

    #[test]
    fn test_std_header() {
        assert_eq!(header(FormatFlags::STD_FLAGS, None), "2009/01/23 01:23:23 ");
    }

    #[test]
    fn test_microseconds_header() {
        let flags = FormatFlags::DATE | FormatFlags::TIME | FormatFlags::MICROSECONDS;
        assert_eq!(header(flags, None), "2009/01/23 01:23:23.123123 ");
        // microseconds alone still prints the clock
        assert_eq!(header(FormatFlags::MICROSECONDS, None), "01:23:23.123123 ");
    }

    #[test]
    fn test_utc_conversion() {
        let offset = chrono::FixedOffset::east_opt(3 * 3600).unwrap();
        let local = fixed_instant().with_timezone(&offset);
        let mut buf = String::new();
        Formatter::new(FormatFlags::TIME, "").write_header(&mut buf, &local, None);
        assert_eq!(buf, "04:23:23 ");

        buf.clear();
        Formatter::new(FormatFlags::TIME | FormatFlags::UTC, "").write_header(&mut buf, &local, None);
        assert_eq!(buf, "01:23:23 ");
    }

    #[test]
    fn test_file_headers() {
        let site = CallSite {
            file: "src/a/b/worker.rs",
            line: 7,
        };
        assert_eq!(header(FormatFlags::LONG_FILE, Some(&site)), "src/a/b/worker.rs:7: ");
        assert_eq!(header(FormatFlags::SHORT_FILE, Some(&site)), "worker.rs:7: ");
        assert_eq!(
            header(FormatFlags::SHORT_FILE | FormatFlags::LONG_FILE, Some(&site)),
            "worker.rs:7: "
        );
        assert_eq!(
            header(FormatFlags::DATE | FormatFlags::SHORT_FILE, Some(&site)),
            "2009/01/23 worker.rs:7: "
        );
    }

    #[test]
    fn test_missing_site_placeholder() {
        assert_eq!(header(FormatFlags::LONG_FILE, None), "???:0: ");
    }

    #[test]
    fn test_no_stack_trace_suppresses_file() {
        let site = CallSite::caller();
        let flags = FormatFlags::SHORT_FILE | FormatFlags::NO_STACK_TRACE;
        assert_eq!(header(flags, Some(&site)), "");
    }

    #[test]
    fn test_caller_points_here() {
        let site = CallSite::caller();
        assert!(site.file.ends_with("formatter.rs"));
        assert_eq!(site.short_file(), "formatter.rs");
        assert!(site.line > 0);
    }

    #[test]
    fn test_concat_keeps_trailing_delimiter() {
        let f = Formatter::new(FormatFlags::NONE, "|");
        assert_eq!(f.concat(&[&"x", &1, &2.5]), "x|1|2.5|");
        assert_eq!(f.concat(&[]), "");
    }

    #[test]
    fn test_concat_colored_prefix_exhaustion() {
        let f = Formatter::new(FormatFlags::NONE, " ");
        let prefixes = vec!["RED".to_string(), "GREEN".to_string()];
        assert_eq!(
            f.concat_colored(&prefixes, "RESET", &[&"a", &"b", &"c"]),
            "REDa GREENb c RESET"
        );
        assert_eq!(f.concat_colored(&prefixes, "RESET", &[]), "RESET");
        assert_eq!(f.concat_colored(&[], "RESET", &[&"a"]), "a RESET");
    }

    #[test]
    fn test_line_has_newline() {
        let f = Formatter::new(FormatFlags::STD_FLAGS, " ");
        let line = f.line_at(&fixed_instant(), None, "x y ");
        assert_eq!(line, "2009/01/23 01:23:23 x y \n");
    }
}
