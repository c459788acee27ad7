use crate::charsets::{classify, CHARSET_COUNT};

/// A set of charset ids, packed into a bitmask. Only ids in `0..40` exist;
/// anything else is silently outside every set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharsetSet(u64);

/// Charsets removed when no policy is given: unclassified/other and the
/// control characters.
pub const DEFAULT_EXCLUSION: CharsetSet = CharsetSet(0b1001);

impl CharsetSet {
    pub const EMPTY: CharsetSet = CharsetSet(0);
    /// Every valid charset id.
    pub const ALL: CharsetSet = CharsetSet((1 << CHARSET_COUNT) - 1);

    /// Builds a set from a list of ids; ids outside `0..40` are dropped.
    pub fn from_ids(ids: &[u8]) -> CharsetSet {
        let mut set = CharsetSet::EMPTY;
        for &id in ids {
            set.insert(id);
        }
        set
    }

    #[inline]
    pub fn insert(&mut self, id: u8) {
        if usize::from(id) < CHARSET_COUNT {
            self.0 |= 1 << id;
        }
    }

    #[inline]
    pub fn contains(self, id: u8) -> bool {
        usize::from(id) < CHARSET_COUNT && self.0 & (1 << id) != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of ids in the set.
    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Complement within the valid id range.
    #[inline]
    pub fn complement(self) -> CharsetSet {
        CharsetSet(!self.0 & CharsetSet::ALL.0)
    }

    #[inline]
    pub fn intersection(self, other: CharsetSet) -> CharsetSet {
        CharsetSet(self.0 & other.0)
    }
}

/// Resolves a remove/remain request into the set of charsets to drop.
///
/// Both empty: [`DEFAULT_EXCLUSION`]. Only `remove` given: taken verbatim.
/// Only `remain` given: everything but the named charsets. Both given: a
/// charset is dropped only when it is listed in `remove` and not protected by
/// `remain`.
pub fn effective_exclusion(remove: CharsetSet, remain: CharsetSet) -> CharsetSet {
    match (remove.is_empty(), remain.is_empty()) {
        (true, true) => DEFAULT_EXCLUSION,
        (false, true) => remove,
        (true, false) => remain.complement(),
        (false, false) => remove.intersection(remain.complement()),
    }
}

/// Drops every character whose charset lands in the effective exclusion set,
/// keeping the rest in their original order and exact values.
pub fn filter_text(text: &str, remove: CharsetSet, remain: CharsetSet) -> String {
    let excluded = effective_exclusion(remove, remain);
    text.chars().filter(|&c| !excluded.contains(classify(c))).collect()
}

#[cfg(test)]
mod tests {
    use crate::filtering::*;

    #[test]
    fn default_policy_drops_noise_charsets() {
        // 0x1F is a control character, the emoji is unclassified; newline and
        // space survive the default policy
        let filtered = filter_text("a\u{1F}\n b😀", CharsetSet::EMPTY, CharsetSet::EMPTY);
        assert_eq!(filtered, "a\n b");
    }

    #[test]
    fn default_exclusion_is_unclassified_and_controls() {
        assert_eq!(
            effective_exclusion(CharsetSet::EMPTY, CharsetSet::EMPTY),
            CharsetSet::from_ids(&[0, 3])
        );
    }

    #[test]
    fn explicit_removal_is_taken_verbatim() {
        let filtered = filter_text("好！\u{1F}", CharsetSet::from_ids(&[39]), CharsetSet::EMPTY);
        // only full-width punctuation goes; the control character is not excluded
        assert_eq!(filtered, "好\u{1F}");
    }

    #[test]
    fn remain_only_keeps_the_named_charsets() {
        let remain = CharsetSet::from_ids(&[2, 36]);
        let filtered = filter_text("解放J120。 A-1！", CharsetSet::EMPTY, remain);
        assert_eq!(filtered, "解放J120 A-1");
    }

    #[test]
    fn remain_protects_ids_listed_for_removal() {
        let remove = CharsetSet::from_ids(&[0, 3, 5]);
        let remain = CharsetSet::from_ids(&[5]);
        assert_eq!(effective_exclusion(remove, remain), CharsetSet::from_ids(&[0, 3]));

        let jamo = "\u{1F}\u{1100}\u{1101}a";
        assert_eq!(filter_text(jamo, remove, remain), "\u{1100}\u{1101}a");
    }

    #[test]
    fn both_sets_intersect_remove_with_unprotected() {
        let remove = CharsetSet::from_ids(&[2, 27]);
        let remain = CharsetSet::from_ids(&[2]);
        assert_eq!(filter_text("a。b", remove, remain), "ab");
    }

    #[test]
    fn filtering_is_idempotent() {
        let text = "Mixed 内容\u{0B} with\u{3000}noise 😀 and ｦ";
        let combos = [
            (CharsetSet::EMPTY, CharsetSet::EMPTY),
            (CharsetSet::from_ids(&[0, 3, 26]), CharsetSet::EMPTY),
            (CharsetSet::EMPTY, CharsetSet::from_ids(&[2, 36])),
            (CharsetSet::from_ids(&[0, 3, 5]), CharsetSet::from_ids(&[5])),
        ];
        for (remove, remain) in combos {
            let once = filter_text(text, remove, remain);
            assert_eq!(filter_text(&once, remove, remain), once);
        }
    }

    #[test]
    fn order_and_values_are_preserved() {
        let text = "b\u{1F}a\u{7F}c";
        assert_eq!(filter_text(text, CharsetSet::EMPTY, CharsetSet::EMPTY), "bac");
    }

    #[test]
    fn empty_input_filters_to_empty() {
        assert_eq!(filter_text("", CharsetSet::EMPTY, CharsetSet::EMPTY), "");
    }

    #[test]
    fn set_operations() {
        let mut set = CharsetSet::EMPTY;
        assert!(set.is_empty());
        set.insert(39);
        set.insert(0);
        assert!(set.contains(39));
        assert!(set.contains(0));
        assert!(!set.contains(1));
        assert_eq!(set.len(), 2);
        assert_eq!(CharsetSet::ALL.len(), CHARSET_COUNT);
        assert_eq!(CharsetSet::EMPTY.complement(), CharsetSet::ALL);
        assert_eq!(CharsetSet::ALL.intersection(set), set);
    }

    #[test]
    fn out_of_range_ids_never_enter_a_set() {
        assert_eq!(CharsetSet::from_ids(&[40, 255]), CharsetSet::EMPTY);
        assert!(!CharsetSet::ALL.contains(40));
        let mut set = CharsetSet::EMPTY;
        set.insert(64);
        assert!(set.is_empty());
    }
}
