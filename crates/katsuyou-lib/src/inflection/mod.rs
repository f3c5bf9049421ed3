//! Module which performs inflection of verbs and adjectives, based on a
//! words class.

mod godan;
mod tables;

pub use self::conjugate::{conjugate, conjugate_adjective, conjugate_verb, Conjugator};
mod conjugate;


use core::fmt;

use fixed_map::{Key, Map};
use serde::{Deserialize, Serialize};

use crate::entities::WordClass;
use crate::Concat;

/// An inflected word, made up of the borrowed stem and up to two fragments
/// from the rule tables.
pub type Inflected<'a> = Concat<'a, 3>;

macro_rules! form {
    ($vis:vis enum $name:ident { $({$variant:ident, $keyword:literal, $describe:literal, $title:literal $(,)?}),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(Serialize, Deserialize, Key)]
        #[serde(rename_all = "kebab-case")]
        $vis enum $name {
            $($variant,)*
        }

        impl $name {
            $vis const ALL: &'static [$name] = &[
                $($name::$variant,)*
            ];

            /// Keyword used to refer to the form.
            $vis fn keyword(&self) -> &'static str {
                match self {
                    $($name::$variant => $keyword,)*
                }
            }

            /// Describe the form.
            $vis fn describe(&self) -> &'static str {
                match self {
                    $($name::$variant => $describe,)*
                }
            }

            /// Longer title for the form.
            $vis fn title(&self) -> &'static str {
                match self {
                    $($name::$variant => $title,)*
                }
            }

            /// Parse the form from its keyword.
            $vis fn parse_keyword(string: &str) -> Option<$name> {
                match string {
                    $($keyword => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.keyword().fmt(f)
            }
        }
    }
}

form! {
    pub enum VerbForm {
        {Dictionary, "dictionary", "辞書形", "辞書形 (じしょけい) dictionary form"},
        {Polite, "polite", "連用形", "連用形 (れんようけい) stem which ～ます attaches to"},
        {Te, "te", "～て", "～te form, joins clauses and acts as a soft command"},
        {Past, "past", "過去形", "過去形 (かこけい) past tense"},
        {Negative, "negative", "未然形", "未然形 (みぜんけい) stem which ～ない attaches to"},
        {Potential, "potential", "可能形", "可能形 (かのうけい) potential, can do ~"},
        {Passive, "passive", "受身形", "受身形 (うけみけい) passive, ~ was done to someone"},
        {Causative, "causative", "使役形", "使役形 (しえきけい) causative, make or let ~ do"},
        {Volitional, "volitional", "意向形", "意向形 (いこうけい) volitional, let's do ~"},
        {Imperative, "imperative", "命令形", "命令形 (めいれいけい) command"},
        {Conditional, "conditional", "～たら", "～たら, conditional, if ~, when ~"},
        {Hypothetical, "hypothetical", "仮定形", "仮定形 (かていけい) hypothetical, if ~"},
    }
}

form! {
    pub enum AdjectiveForm {
        {Basic, "basic", "基本形", "基本形 (きほんけい) attributive form"},
        {Polite, "polite", "～です", "～です, polite present"},
        {Past, "past", "過去形", "過去形 (かこけい) past tense"},
        {Negative, "negative", "否定形", "否定形 (ひていけい) negative"},
        {Te, "te", "～で", "～で, joins clauses (na-adjectives only)"},
    }
}

/// A form of either a verb or an adjective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConjugationForm {
    Verb(VerbForm),
    Adjective(AdjectiveForm),
}

impl ConjugationForm {
    /// Parse a form keyword which applies to words of the given class.
    ///
    /// Keywords like `past` exist for both verbs and adjectives, so the
    /// class decides which one is meant.
    pub fn parse_keyword(class: WordClass, string: &str) -> Option<Self> {
        if class.is_verb() {
            Some(ConjugationForm::Verb(VerbForm::parse_keyword(string)?))
        } else {
            Some(ConjugationForm::Adjective(AdjectiveForm::parse_keyword(
                string,
            )?))
        }
    }

    /// Keyword used to refer to the form.
    pub fn keyword(&self) -> &'static str {
        match self {
            ConjugationForm::Verb(form) => form.keyword(),
            ConjugationForm::Adjective(form) => form.keyword(),
        }
    }
}

impl From<VerbForm> for ConjugationForm {
    #[inline]
    fn from(form: VerbForm) -> Self {
        ConjugationForm::Verb(form)
    }
}

impl From<AdjectiveForm> for ConjugationForm {
    #[inline]
    fn from(form: AdjectiveForm) -> Self {
        ConjugationForm::Adjective(form)
    }
}

impl fmt::Display for ConjugationForm {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.keyword().fmt(f)
    }
}

/// A collection of inflections of a single word.
pub struct Inflections<F>
where
    F: Key,
{
    /// The dictionary form of the word.
    pub dictionary: String,
    inflections: Map<F, String>,
}

impl<F> Inflections<F>
where
    F: Key,
{
    pub(crate) fn new(dictionary: String) -> Self {
        Self {
            dictionary,
            inflections: Map::new(),
        }
    }

    pub(crate) fn insert(&mut self, form: F, word: String) {
        self.inflections.insert(form, word);
    }

    /// Test if an inflection exists.
    pub fn contains(&self, form: F) -> bool {
        self.inflections.contains_key(form)
    }

    /// Get an inflection.
    pub fn get(&self, form: F) -> Option<&str> {
        self.inflections.get(form).map(String::as_str)
    }

    /// The number of inflections.
    pub fn len(&self) -> usize {
        self.inflections.len()
    }

    /// Test if there are no inflections.
    pub fn is_empty(&self) -> bool {
        self.inflections.is_empty()
    }

    /// Iterate over all inflections in form order.
    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> + '_ {
        self.inflections.iter().map(|(form, word)| (form, word.as_str()))
    }
}

impl<F> fmt::Debug for Inflections<F>
where
    F: Key + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inflections")
            .field("dictionary", &self.dictionary)
            .field("inflections", &self.inflections)
            .finish()
    }
}
