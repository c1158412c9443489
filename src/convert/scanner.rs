use regex::Regex;
use std::borrow::Cow;

/// One match of the scanner over a style value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'h> {
    /// The whole matched span
    pub text: &'h str,
    pub start: usize,
    pub end: usize,
    /// Digits of a source-unit length; `None` for spans that must stay untouched
    pub number: Option<&'h str>,
}

impl Token<'_> {
    pub fn is_length(&self) -> bool {
        self.number.is_some()
    }
}

/// Finds convertible lengths in a raw CSS value.
///
/// The alternation order is the eligibility rule: quoted strings, `url(...)`
/// and `var(...)` are consumed whole before the numeric branch can match
/// inside them, so a `10px` within `url("x10px.png")` is never seen as a
/// length.
#[derive(Debug, Clone)]
pub struct Scanner {
    pattern: Regex,
}

impl Scanner {
    pub fn new(unit: &str) -> Self {
        let source = format!(
            r#""[^"]+"|'[^']+'|url\([^)]+\)|var\([^)]+\)|([0-9]*\.?[0-9]+){}"#,
            regex::escape(unit)
        );
        // The unit is escaped, so the pattern is always well formed.
        let pattern = Regex::new(&source).expect("scanner pattern is valid");
        Self { pattern }
    }

    /// Ordered, non-overlapping matches over `value`.
    pub fn tokens<'s, 'h>(&'s self, value: &'h str) -> impl Iterator<Item = Token<'h>> + 's
    where
        'h: 's,
    {
        self.pattern.captures_iter(value).filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Token {
                text: whole.as_str(),
                start: whole.start(),
                end: whole.end(),
                number: caps.get(1).map(|m| m.as_str()),
            })
        })
    }

    /// Replace every token with the output of `replace`, copying the text
    /// between tokens verbatim. Borrows `value` when nothing changes.
    pub fn replace_all<'h, F>(&self, value: &'h str, mut replace: F) -> Cow<'h, str>
    where
        F: FnMut(&Token<'h>) -> Cow<'h, str>,
    {
        let mut out: Option<String> = None;
        let mut last = 0;

        for token in self.tokens(value) {
            let replacement = replace(&token);
            if replacement == token.text {
                continue;
            }
            let buf = out.get_or_insert_with(|| String::with_capacity(value.len()));
            buf.push_str(&value[last..token.start]);
            buf.push_str(&replacement);
            last = token.end;
        }

        match out {
            Some(mut buf) => {
                buf.push_str(&value[last..]);
                Cow::Owned(buf)
            }
            None => Cow::Borrowed(value),
        }
    }
}
