//! Coupon payload grammar.
//!
//! The assistant formats deals as newline-separated rows:
//!
//! ```text
//! 🏷️ CODE: SAVE20
//! 💰 DISCOUNT: 20% off electronics
//! 🛍️ STORE: Amazon
//! 📝 DETAILS: Valid on laptops and phones
//! ⏰ VALID TILL: 31 Dec
//! 💡 TIP: Stack it with bank offers
//! ```
//!
//! Parsing is line-local and total: every input line yields exactly one
//! [`CouponLine`], lines that match no rule fall through to a verbatim
//! paragraph, and nothing here can fail.

const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Either marker alone classifies a reply as a coupon payload.
const CODE_MARKER: &str = "🏷️ CODE:";
const DISCOUNT_MARKER: &str = "💰 DISCOUNT:";

/// Code rows are also recognised without the variation selector once a
/// reply is known to be a coupon.
const CODE_PREFIXES: &[&str] = &[CODE_MARKER, "🏷 CODE:"];

/// Icon shown next to a labelled coupon row. Names are Font Awesome icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    MoneyBill,
    ShoppingBag,
    FileAlt,
    Clock,
    Lightbulb,
    Tag,
}

impl IconKind {
    /// Maps a row glyph to its icon. Unknown glyphs get [`IconKind::Tag`].
    pub fn from_glyph(glyph: &str) -> Self {
        match glyph.trim_end_matches(VARIATION_SELECTOR) {
            "💰" => IconKind::MoneyBill,
            "🛍" => IconKind::ShoppingBag,
            "📝" => IconKind::FileAlt,
            "⏰" => IconKind::Clock,
            "💡" => IconKind::Lightbulb,
            _ => IconKind::Tag,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            IconKind::MoneyBill => "money-bill",
            IconKind::ShoppingBag => "shopping-bag",
            IconKind::FileAlt => "file-alt",
            IconKind::Clock => "clock",
            IconKind::Lightbulb => "lightbulb",
            IconKind::Tag => "tag",
        }
    }
}

/// One rendered fragment of a coupon payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CouponLine {
    /// A copyable coupon code.
    Code(String),
    Field {
        icon: IconKind,
        label: String,
        value: String,
    },
    /// Any line no rule claimed, kept verbatim.
    Paragraph(String),
}

/// Structured view of a coupon reply, one [`CouponLine`] per input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CouponCard {
    pub lines: Vec<CouponLine>,
}

impl CouponCard {
    pub fn parse(text: &str) -> Self {
        Self { lines: text.split('\n').map(parse_line).collect() }
    }

    /// First code row, if the reply carried one.
    pub fn code(&self) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            CouponLine::Code(code) => Some(code.as_str()),
            _ => None,
        })
    }

    pub fn fields(&self) -> impl Iterator<Item = (IconKind, &str, &str)> + '_ {
        self.lines.iter().filter_map(|line| match line {
            CouponLine::Field { icon, label, value } => Some((*icon, label.as_str(), value.as_str())),
            _ => None,
        })
    }

    /// Text rendering for terminals: codes boxed, fields tagged with their icon.
    pub fn to_plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| match line {
                CouponLine::Code(code) => format!("[ {code} ]"),
                CouponLine::Field { icon, label, value } => {
                    format!("({}) {label}: {value}", icon.name())
                }
                CouponLine::Paragraph(text) => text.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Whether a bot reply should be rendered as a coupon card.
pub fn is_coupon_payload(text: &str) -> bool {
    text.contains(CODE_MARKER) || text.contains(DISCOUNT_MARKER)
}

// ── Line grammar ─────────────────────────────────────────────────────────────

struct LineRule {
    prefixes: &'static [&'static str],
    extract: fn(prefix: &str, rest: &str) -> CouponLine,
}

/// Checked in order; the first matching prefix wins.
const RULES: &[LineRule] = &[
    LineRule { prefixes: CODE_PREFIXES, extract: extract_code },
    LineRule { prefixes: &[DISCOUNT_MARKER], extract: extract_field },
    LineRule { prefixes: &["🛍️ STORE:", "🛍 STORE:"], extract: extract_field },
    LineRule { prefixes: &["📝 DETAILS:"], extract: extract_field },
    LineRule { prefixes: &["⏰ VALID TILL:", "⏰️ VALID TILL:"], extract: extract_field },
    LineRule { prefixes: &["💡 TIP:"], extract: extract_field },
];

fn extract_code(_prefix: &str, rest: &str) -> CouponLine {
    CouponLine::Code(rest.trim().to_string())
}

fn extract_field(prefix: &str, rest: &str) -> CouponLine {
    // Prefixes are always `<glyph> <LABEL>:`.
    let (glyph, label) = prefix.split_once(' ').unwrap_or(("", prefix));
    CouponLine::Field {
        icon: IconKind::from_glyph(glyph),
        label: label.trim_end_matches(':').trim().to_string(),
        value: rest.trim().to_string(),
    }
}

fn parse_line(line: &str) -> CouponLine {
    let line = line.strip_suffix('\r').unwrap_or(line);
    for rule in RULES {
        for prefix in rule.prefixes {
            if let Some(rest) = line.strip_prefix(prefix) {
                return (rule.extract)(prefix, rest);
            }
        }
    }
    CouponLine::Paragraph(line.to_string())
}
