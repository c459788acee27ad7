/// Trait to classify a character into one of the 40 charsets the crate knows
/// about.
///
/// Importing the trait provides the methods on the `char` type.
///
/// Classification runs in two phases. A binary search over a sorted array of
/// disjoint spans locates the only span that can contain the codepoint; the
/// candidate charset's membership rules then confirm or reject it. The rules
/// exist because a few charsets are fragmented: general punctuation, for
/// example, spans U+2010..U+205E but excludes U+2011 and U+2028..U+202F, so a
/// codepoint can land inside a span and still belong to no charset. A rejected
/// candidate is reported as charset 0 ("unclassified/other"); neighboring
/// spans are never consulted, since spans do not overlap.
///
/// Charsets whose members interleave with another charset's (the tab/LF/CR
/// trio inside the control-character range) contribute several spans to the
/// search array, all carrying the same charset id. The id space stays `0..40`
/// either way.
pub trait CharsetClassification {
    /// The id (`0..40`) of the charset this character belongs to.
    fn charset_id(self) -> u8;
    /// The display name of the charset this character belongs to.
    fn charset_name(self) -> &'static str;
}

impl CharsetClassification for char {
    #[inline]
    fn charset_id(self) -> u8 {
        classify(self)
    }

    #[inline]
    fn charset_name(self) -> &'static str {
        charset_name(classify(self))
    }
}

/// Number of charsets, ids `0..40`. Id 0 is the fallback for every codepoint
/// no other charset claims.
pub const CHARSET_COUNT: usize = 40;

/// One membership rule; a charset matches a codepoint when any of its rules
/// does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Matches exactly one codepoint.
    Exact(u32),
    /// Matches `lo <= v <= hi`.
    Inclusive(u32, u32),
    /// Matches `lo < v < hi`, both endpoints excluded.
    Exclusive(u32, u32),
}

impl Rule {
    #[inline]
    pub fn matches(self, value: u32) -> bool {
        match self {
            Rule::Exact(x) => value == x,
            Rule::Inclusive(lo, hi) => lo <= value && value <= hi,
            Rule::Exclusive(lo, hi) => lo < value && value < hi,
        }
    }
}

struct Charset {
    name: &'static str,
    rules: &'static [Rule],
}

/// Index is the charset id, the value the CLI's `--remove_charset` and
/// `--remain_charset` flags take. Charset 0 has no rules of its own; it
/// collects everything the others reject.
const CHARSETS: [Charset; CHARSET_COUNT] = [
    Charset { name: "unclassified/other", rules: &[] }, // 0
    Charset {
        name: "system whitespace (tab, LF, CR)", // 1
        rules: &[Rule::Exact(0x0009), Rule::Exact(0x000A), Rule::Exact(0x000D)],
    },
    Charset { name: "half-width Latin (incl. space)", rules: &[Rule::Inclusive(0x0020, 0x007E)] }, // 2
    Charset {
        name: "control characters", // 3
        rules: &[
            Rule::Inclusive(0x0000, 0x0008),
            Rule::Inclusive(0x000B, 0x000C),
            Rule::Inclusive(0x000E, 0x001F),
            Rule::Inclusive(0x007F, 0x00A0),
        ],
    },
    Charset { name: "extended half-width (Latin-1)", rules: &[Rule::Inclusive(0x00A1, 0x00FF)] }, // 4
    Charset { name: "Hangul jamo", rules: &[Rule::Inclusive(0x1100, 0x11FF)] }, // 5
    Charset { name: "Tai Le", rules: &[Rule::Inclusive(0x1950, 0x1974)] }, // 6
    Charset { name: "New Tai Lue", rules: &[Rule::Inclusive(0x1980, 0x19DF)] }, // 7
    Charset {
        name: "general punctuation", // 8
        rules: &[
            Rule::Exact(0x2010),
            Rule::Inclusive(0x2012, 0x2027),
            Rule::Inclusive(0x2030, 0x205E),
        ],
    },
    Charset {
        name: "superscripts and subscripts", // 9
        rules: &[
            Rule::Exact(0x2070),
            Rule::Exact(0x2071),
            Rule::Inclusive(0x2074, 0x208E),
            Rule::Inclusive(0x2090, 0x209C),
        ],
    },
    Charset { name: "letterlike symbols", rules: &[Rule::Inclusive(0x2100, 0x214F)] }, // 10
    Charset { name: "number forms", rules: &[Rule::Inclusive(0x2150, 0x218B)] }, // 11
    Charset { name: "arrows", rules: &[Rule::Inclusive(0x2190, 0x21FF)] }, // 12
    Charset { name: "mathematical operators", rules: &[Rule::Inclusive(0x2200, 0x22FF)] }, // 13
    Charset { name: "miscellaneous technical", rules: &[Rule::Inclusive(0x2300, 0x23FF)] }, // 14
    Charset { name: "control pictures", rules: &[Rule::Inclusive(0x2400, 0x2426)] }, // 15
    Charset { name: "optical character recognition", rules: &[Rule::Inclusive(0x2440, 0x244A)] }, // 16
    Charset { name: "enclosed alphanumerics", rules: &[Rule::Inclusive(0x2460, 0x24FF)] }, // 17
    Charset { name: "box drawing", rules: &[Rule::Inclusive(0x2500, 0x257F)] }, // 18
    Charset { name: "block elements", rules: &[Rule::Inclusive(0x2580, 0x259F)] }, // 19
    Charset { name: "miscellaneous symbols", rules: &[Rule::Inclusive(0x2600, 0x26FF)] }, // 20
    Charset { name: "dingbats", rules: &[Rule::Inclusive(0x2700, 0x27BF)] }, // 21
    Charset { name: "braille patterns", rules: &[Rule::Inclusive(0x2800, 0x28FF)] }, // 22
    Charset { name: "CJK radicals supplement", rules: &[Rule::Inclusive(0x2E80, 0x2EF3)] }, // 23
    Charset { name: "Kangxi radicals", rules: &[Rule::Inclusive(0x2F00, 0x2FD5)] }, // 24
    Charset { name: "ideographic description", rules: &[Rule::Inclusive(0x2FF0, 0x2FFB)] }, // 25
    Charset { name: "ideographic space", rules: &[Rule::Exact(0x3000)] }, // 26
    Charset { name: "CJK symbols and punctuation", rules: &[Rule::Inclusive(0x3001, 0x303F)] }, // 27
    Charset { name: "Japanese kana", rules: &[Rule::Inclusive(0x3040, 0x30FF)] }, // 28
    Charset { name: "Hangul compatibility jamo", rules: &[Rule::Inclusive(0x3131, 0x318E)] }, // 29
    Charset { name: "CJK strokes", rules: &[Rule::Inclusive(0x31C0, 0x31EF)] }, // 30
    Charset { name: "katakana phonetic extensions", rules: &[Rule::Inclusive(0x31F0, 0x31FF)] }, // 31
    Charset { name: "enclosed CJK letters and months", rules: &[Rule::Inclusive(0x3200, 0x32FF)] }, // 32
    Charset { name: "CJK compatibility", rules: &[Rule::Inclusive(0x3300, 0x33FF)] }, // 33
    Charset { name: "CJK ideographs extension A", rules: &[Rule::Inclusive(0x3400, 0x4DB5)] }, // 34
    Charset { name: "Yijing hexagram symbols", rules: &[Rule::Inclusive(0x4DC0, 0x4DFF)] }, // 35
    Charset { name: "basic Chinese ideographs", rules: &[Rule::Inclusive(0x4E00, 0x9FA5)] }, // 36
    Charset { name: "Yi syllables", rules: &[Rule::Inclusive(0xA000, 0xA48C)] }, // 37
    Charset { name: "Hangul syllables", rules: &[Rule::Inclusive(0xAC00, 0xD7A3)] }, // 38
    Charset { name: "full-width punctuation/symbols", rules: &[Rule::Inclusive(0xFF01, 0xFF65)] }, // 39
];

#[derive(Clone, Copy)]
struct Span {
    lo: u32,
    hi: u32,
    charset: u8,
}

/// Sorted by `lo`, disjoint. Charsets 1 and 3 interleave below U+00A1 and so
/// contribute several spans each; the spans for charsets 8 and 9 are loose
/// supersets with rule gaps inside them.
const SPANS: [Span; 43] = [
    Span { lo: 0x0000, hi: 0x0008, charset: 3 },
    Span { lo: 0x0009, hi: 0x000A, charset: 1 },
    Span { lo: 0x000B, hi: 0x000C, charset: 3 },
    Span { lo: 0x000D, hi: 0x000D, charset: 1 },
    Span { lo: 0x000E, hi: 0x001F, charset: 3 },
    Span { lo: 0x0020, hi: 0x007E, charset: 2 },
    Span { lo: 0x007F, hi: 0x00A0, charset: 3 },
    Span { lo: 0x00A1, hi: 0x00FF, charset: 4 },
    Span { lo: 0x1100, hi: 0x11FF, charset: 5 },
    Span { lo: 0x1950, hi: 0x1974, charset: 6 },
    Span { lo: 0x1980, hi: 0x19DF, charset: 7 },
    Span { lo: 0x2010, hi: 0x205E, charset: 8 },
    Span { lo: 0x2070, hi: 0x209C, charset: 9 },
    Span { lo: 0x2100, hi: 0x214F, charset: 10 },
    Span { lo: 0x2150, hi: 0x218B, charset: 11 },
    Span { lo: 0x2190, hi: 0x21FF, charset: 12 },
    Span { lo: 0x2200, hi: 0x22FF, charset: 13 },
    Span { lo: 0x2300, hi: 0x23FF, charset: 14 },
    Span { lo: 0x2400, hi: 0x2426, charset: 15 },
    Span { lo: 0x2440, hi: 0x244A, charset: 16 },
    Span { lo: 0x2460, hi: 0x24FF, charset: 17 },
    Span { lo: 0x2500, hi: 0x257F, charset: 18 },
    Span { lo: 0x2580, hi: 0x259F, charset: 19 },
    Span { lo: 0x2600, hi: 0x26FF, charset: 20 },
    Span { lo: 0x2700, hi: 0x27BF, charset: 21 },
    Span { lo: 0x2800, hi: 0x28FF, charset: 22 },
    Span { lo: 0x2E80, hi: 0x2EF3, charset: 23 },
    Span { lo: 0x2F00, hi: 0x2FD5, charset: 24 },
    Span { lo: 0x2FF0, hi: 0x2FFB, charset: 25 },
    Span { lo: 0x3000, hi: 0x3000, charset: 26 },
    Span { lo: 0x3001, hi: 0x303F, charset: 27 },
    Span { lo: 0x3040, hi: 0x30FF, charset: 28 },
    Span { lo: 0x3131, hi: 0x318E, charset: 29 },
    Span { lo: 0x31C0, hi: 0x31EF, charset: 30 },
    Span { lo: 0x31F0, hi: 0x31FF, charset: 31 },
    Span { lo: 0x3200, hi: 0x32FF, charset: 32 },
    Span { lo: 0x3300, hi: 0x33FF, charset: 33 },
    Span { lo: 0x3400, hi: 0x4DB5, charset: 34 },
    Span { lo: 0x4DC0, hi: 0x4DFF, charset: 35 },
    Span { lo: 0x4E00, hi: 0x9FA5, charset: 36 },
    Span { lo: 0xA000, hi: 0xA48C, charset: 37 },
    Span { lo: 0xAC00, hi: 0xD7A3, charset: 38 },
    Span { lo: 0xFF01, hi: 0xFF65, charset: 39 },
];

/// Determines the charset id (`0..40`) of a character. 0 means no charset
/// claims it.
#[inline]
pub fn classify(c: char) -> u8 {
    let value = c as u32;
    if value < SPANS[0].lo || value > SPANS[SPANS.len() - 1].hi {
        return 0;
    }
    let index = SPANS.partition_point(|span| span.lo <= value);
    if index == 0 {
        return 0;
    }
    let span = &SPANS[index - 1];
    if value > span.hi {
        return 0;
    }
    let rules = CHARSETS[usize::from(span.charset)].rules;
    if rules.iter().any(|rule| rule.matches(value)) {
        span.charset
    } else {
        0
    }
}

/// The display name of a charset id. Ids outside `0..40` fold to the name of
/// the fallback charset.
#[inline]
pub fn charset_name(id: u8) -> &'static str {
    match CHARSETS.get(usize::from(id)) {
        Some(charset) => charset.name,
        None => CHARSETS[0].name,
    }
}
