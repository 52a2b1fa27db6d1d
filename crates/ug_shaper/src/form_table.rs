//! Presentation form table for the Uyghur alphabet
//!
//! Maps each supported logical letter from the Arabic block to its four
//! positional glyphs in Arabic Presentation Forms A/B, together with its
//! joining behaviour. The table is built once per process and is read-only
//! afterwards, so any number of threads may consult it without locking.

use std::collections::HashMap;
use std::ops::Range;
use std::sync::OnceLock;

/// Logical code points consumed as input (half-open, 0x06FF itself excluded).
pub const ARABIC_BLOCK: Range<u32> = 0x0600..0x06FF;

/// ARABIC LETTER LAM
pub const LAM: char = '\u{0644}';
/// ARABIC LETTER ALEF
pub const ALEF: char = '\u{0627}';
/// Lam-alef ligature, isolated form
pub const LA: char = '\u{FEFB}';
/// Lam-alef ligature, final form (lam already joined on its right)
pub const LA_FINAL: char = '\u{FEFC}';

/// Positional form of a letter within a joined run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionalForm {
    /// No connections
    Isolated,
    /// Connects to the following letter only
    Initial,
    /// Connects on both sides
    Medial,
    /// Connects to the preceding letter only
    Final,
}

impl PositionalForm {
    /// All forms, in table column order
    pub const ALL: [PositionalForm; 4] = [
        PositionalForm::Isolated,
        PositionalForm::Initial,
        PositionalForm::Medial,
        PositionalForm::Final,
    ];
}

/// The positional glyphs of one logical letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterFormSet {
    /// Logical code point in the Arabic block
    pub letter: char,
    /// Latin transliteration, for diagnostics
    pub name: &'static str,
    pub isolated: char,
    pub initial: char,
    pub medial: char,
    pub final_form: char,
    /// Whether the letter joins to a following letter (dual-joining)
    pub connectable: bool,
}

impl LetterFormSet {
    const fn new(
        letter: char,
        name: &'static str,
        isolated: char,
        initial: char,
        medial: char,
        final_form: char,
        connectable: bool,
    ) -> Self {
        Self {
            letter,
            name,
            isolated,
            initial,
            medial,
            final_form,
            connectable,
        }
    }

    /// Get the glyph for a positional form
    pub fn form(&self, form: PositionalForm) -> char {
        match form {
            PositionalForm::Isolated => self.isolated,
            PositionalForm::Initial => self.initial,
            PositionalForm::Medial => self.medial,
            PositionalForm::Final => self.final_form,
        }
    }

    /// Form a previously emitted glyph takes once a following letter joins it.
    ///
    /// A glyph still equal to the isolated form started the run and becomes
    /// initial; anything else was already joined on its right and becomes medial.
    pub fn joined_form(&self, emitted: char) -> char {
        if emitted == self.isolated {
            self.initial
        } else {
            self.medial
        }
    }
}

const fn right(
    letter: char,
    name: &'static str,
    isolated: char,
    initial: char,
    medial: char,
    final_form: char,
) -> LetterFormSet {
    LetterFormSet::new(letter, name, isolated, initial, medial, final_form, false)
}

const fn dual(
    letter: char,
    name: &'static str,
    isolated: char,
    initial: char,
    medial: char,
    final_form: char,
) -> LetterFormSet {
    LetterFormSet::new(letter, name, isolated, initial, medial, final_form, true)
}

#[rustfmt::skip]
static LETTERS: [LetterFormSet; 33] = [
    right('\u{0627}', "a",     '\u{FE8D}', '\u{FE8D}', '\u{FE8D}', '\u{FE8E}'),
    right('\u{06D5}', "e",     '\u{FEE9}', '\u{FEE9}', '\u{FEE9}', '\u{FEEA}'),
    dual ('\u{0628}', "b",     '\u{FE8F}', '\u{FE91}', '\u{FE92}', '\u{FE90}'),
    dual ('\u{067E}', "p",     '\u{FB56}', '\u{FB58}', '\u{FB59}', '\u{FB57}'),
    dual ('\u{062A}', "t",     '\u{FE95}', '\u{FE97}', '\u{FE98}', '\u{FE96}'),
    dual ('\u{062C}', "j",     '\u{FE9D}', '\u{FE9F}', '\u{FEA0}', '\u{FE9E}'),
    dual ('\u{0686}', "ch",    '\u{FB7A}', '\u{FB7C}', '\u{FB7D}', '\u{FB7B}'),
    dual ('\u{062E}', "x",     '\u{FEA5}', '\u{FEA7}', '\u{FEA8}', '\u{FEA6}'),
    right('\u{062F}', "d",     '\u{FEA9}', '\u{FEA9}', '\u{FEAA}', '\u{FEAA}'),
    right('\u{0631}', "r",     '\u{FEAD}', '\u{FEAD}', '\u{FEAE}', '\u{FEAE}'),
    right('\u{0632}', "z",     '\u{FEAF}', '\u{FEAF}', '\u{FEB0}', '\u{FEB0}'),
    right('\u{0698}', "zh",    '\u{FB8A}', '\u{FB8A}', '\u{FB8B}', '\u{FB8B}'),
    dual ('\u{0633}', "s",     '\u{FEB1}', '\u{FEB3}', '\u{FEB4}', '\u{FEB2}'),
    dual ('\u{0634}', "sh",    '\u{FEB5}', '\u{FEB7}', '\u{FEB8}', '\u{FEB6}'),
    dual ('\u{063A}', "gh",    '\u{FECD}', '\u{FECF}', '\u{FED0}', '\u{FECE}'),
    dual ('\u{0641}', "f",     '\u{FED1}', '\u{FED3}', '\u{FED4}', '\u{FED2}'),
    dual ('\u{0642}', "q",     '\u{FED5}', '\u{FED7}', '\u{FED8}', '\u{FED6}'),
    dual ('\u{0643}', "k",     '\u{FED9}', '\u{FEDB}', '\u{FEDC}', '\u{FEDA}'),
    dual ('\u{06AF}', "g",     '\u{FB92}', '\u{FB94}', '\u{FB95}', '\u{FB93}'),
    dual ('\u{06AD}', "ng",    '\u{FBD3}', '\u{FBD5}', '\u{FBD6}', '\u{FBD4}'),
    dual ('\u{0644}', "l",     '\u{FEDD}', '\u{FEDF}', '\u{FEE0}', '\u{FEDE}'),
    dual ('\u{0645}', "m",     '\u{FEE1}', '\u{FEE3}', '\u{FEE4}', '\u{FEE2}'),
    dual ('\u{0646}', "n",     '\u{FEE5}', '\u{FEE7}', '\u{FEE8}', '\u{FEE6}'),
    dual ('\u{06BE}', "h",     '\u{FBAA}', '\u{FBAC}', '\u{FBAD}', '\u{FBAB}'),
    right('\u{0648}', "o",     '\u{FEED}', '\u{FEED}', '\u{FEEE}', '\u{FEEE}'),
    right('\u{06C7}', "u",     '\u{FBD7}', '\u{FBD7}', '\u{FBD8}', '\u{FBD8}'),
    right('\u{06C6}', "oe",    '\u{FBD9}', '\u{FBD9}', '\u{FBDA}', '\u{FBDA}'),
    right('\u{06C8}', "ue",    '\u{FBDB}', '\u{FBDB}', '\u{FBDC}', '\u{FBDC}'),
    right('\u{06CB}', "w",     '\u{FBDE}', '\u{FBDE}', '\u{FBDF}', '\u{FBDF}'),
    dual ('\u{06D0}', "ee",    '\u{FBE4}', '\u{FBE6}', '\u{FBE7}', '\u{FBE5}'),
    dual ('\u{0649}', "i",     '\u{FEEF}', '\u{FBE8}', '\u{FBE9}', '\u{FEF0}'),
    dual ('\u{064A}', "y",     '\u{FEF1}', '\u{FEF3}', '\u{FEF4}', '\u{FEF2}'),
    dual ('\u{0626}', "hemze", '\u{FE8B}', '\u{FE8B}', '\u{FE8C}', '\u{FB8C}'),
];

static FORM_TABLE: OnceLock<FormTable> = OnceLock::new();

/// Lookup table from logical letter to its form set
#[derive(Debug)]
pub struct FormTable {
    index: HashMap<char, usize>,
    letters: &'static [LetterFormSet],
}

impl FormTable {
    /// Get the process-wide table, building it on first use.
    pub fn global() -> &'static FormTable {
        FORM_TABLE.get_or_init(|| {
            let table = FormTable::build(&LETTERS);
            tracing::debug!(entries = table.len(), "Uyghur form table initialized");
            table
        })
    }

    fn build(letters: &'static [LetterFormSet]) -> Self {
        let index = letters
            .iter()
            .enumerate()
            .map(|(i, set)| (set.letter, i))
            .collect();
        Self { index, letters }
    }

    /// Look up a logical letter. No range check is applied here.
    pub fn get(&self, letter: char) -> Option<&LetterFormSet> {
        self.index.get(&letter).map(|&i| &self.letters[i])
    }

    /// Check whether a logical letter has an entry
    pub fn contains(&self, letter: char) -> bool {
        self.index.contains_key(&letter)
    }

    /// Number of supported letters
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Iterate entries in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = &LetterFormSet> {
        self.letters.iter()
    }
}

/// Check whether a code point lies in the Arabic block
pub fn in_arabic_block(c: char) -> bool {
    ARABIC_BLOCK.contains(&(c as u32))
}

/// Look up the form set for a character.
///
/// Characters outside the Arabic block are never mapped, even before the table
/// is consulted.
pub fn lookup(c: char) -> Option<&'static LetterFormSet> {
    if !in_arabic_block(c) {
        return None;
    }
    FormTable::global().get(c)
}
