//! The lexical entities which can be conjugated or composed into phrases.
//!
//! Every constructor validates its categorical fields, so a value of any of
//! these types is always conjugable by the tables in [`crate::inflection`].

#[cfg(test)]
mod tests;

use core::fmt;

use fixed_map::Key;
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

macro_rules! word_class {
    ($vis:vis enum $name:ident { $(<$variant:ident $ident:literal $doc:literal>)* }) => {
        /// The class of a word, which decides the rule table used to
        /// conjugate it.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(Serialize, Deserialize, Key)]
        #[serde(rename_all = "kebab-case")]
        $vis enum $name {
            $(#[doc = $doc] $variant,)*
        }

        impl $name {
            $vis const VALUES: &'static [$name] = &[$($name::$variant,)*];

            /// Keyword used for this class.
            $vis fn ident(&self) -> &'static str {
                match self {
                    $($name::$variant => $ident,)*
                }
            }

            /// Help text for this class.
            $vis fn help(&self) -> &'static str {
                match self {
                    $($name::$variant => $doc,)*
                }
            }

            /// Parse a class from its keyword.
            $vis fn parse_keyword(string: &str) -> Option<$name> {
                match string {
                    $($ident => Some($name::$variant),)*
                    _ => None,
                }
            }
        }
    }
}

word_class! {
    pub enum WordClass {
        <Godan "godan" "godan verb, 五段動詞">
        <Ichidan "ichidan" "ichidan verb, 一段動詞">
        <IrregularSuru "suru" "irregular verb する">
        <IrregularKuru "kuru" "irregular verb 来る">
        <IAdjective "i-adjective" "i-adjective, 形容詞">
        <NaAdjective "na-adjective" "na-adjective, 形容動詞">
    }
}

impl WordClass {
    /// Test if the class is a verb class.
    pub fn is_verb(&self) -> bool {
        match self {
            WordClass::Godan
            | WordClass::Ichidan
            | WordClass::IrregularSuru
            | WordClass::IrregularKuru => true,
            _ => false,
        }
    }
}

impl fmt::Display for WordClass {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ident().fmt(f)
    }
}

/// One of the nine endings a godan verb can have in its dictionary form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Key)]
pub enum GodanEnding {
    U,
    Ku,
    Gu,
    Su,
    Tsu,
    Nu,
    Bu,
    Mu,
    Ru,
}

impl GodanEnding {
    pub const ALL: [GodanEnding; 9] = [
        GodanEnding::U,
        GodanEnding::Ku,
        GodanEnding::Gu,
        GodanEnding::Su,
        GodanEnding::Tsu,
        GodanEnding::Nu,
        GodanEnding::Bu,
        GodanEnding::Mu,
        GodanEnding::Ru,
    ];

    /// Match an ending character.
    pub fn from_char(c: char) -> Option<Self> {
        let ending = match c {
            'う' => GodanEnding::U,
            'く' => GodanEnding::Ku,
            'ぐ' => GodanEnding::Gu,
            'す' => GodanEnding::Su,
            'つ' => GodanEnding::Tsu,
            'ぬ' => GodanEnding::Nu,
            'ぶ' => GodanEnding::Bu,
            'む' => GodanEnding::Mu,
            'る' => GodanEnding::Ru,
            _ => return None,
        };

        Some(ending)
    }

    /// Match an ending string, which must be exactly one ending character.
    pub fn parse(ending: &str) -> Option<Self> {
        let mut it = ending.chars();
        let (Some(c), None) = (it.next(), it.next()) else {
            return None;
        };

        Self::from_char(c)
    }

    /// The kana of the ending.
    pub fn as_str(&self) -> &'static str {
        match self {
            GodanEnding::U => "う",
            GodanEnding::Ku => "く",
            GodanEnding::Gu => "ぐ",
            GodanEnding::Su => "す",
            GodanEnding::Tsu => "つ",
            GodanEnding::Nu => "ぬ",
            GodanEnding::Bu => "ぶ",
            GodanEnding::Mu => "む",
            GodanEnding::Ru => "る",
        }
    }
}

impl fmt::Display for GodanEnding {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// The only legal ending of an ichidan verb.
pub(crate) const ICHIDAN_ENDING: &str = "る";
/// The only legal ending of an i-adjective.
pub(crate) const I_ADJECTIVE_ENDING: &str = "い";

/// A verb which can be conjugated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Verb {
    /// A godan verb, like 話す.
    Godan { stem: Box<str>, ending: GodanEnding },
    /// An ichidan verb, like 食べる. The ending is always る.
    Ichidan { stem: Box<str> },
    /// The irregular verb する.
    IrregularSuru,
    /// The irregular verb 来る.
    IrregularKuru,
}

impl Verb {
    /// Construct a godan verb.
    pub fn godan(stem: &str, ending: &str) -> Result<Self, Error> {
        let stem = non_empty_stem(WordClass::Godan, stem)?;

        let Some(ending) = GodanEnding::parse(ending) else {
            return Err(Error::new(ErrorKind::invalid_lexeme(
                WordClass::Godan.ident(),
                ending,
                "ending must be one of う, く, ぐ, す, つ, ぬ, ぶ, む, る",
            )));
        };

        Ok(Verb::Godan { stem, ending })
    }

    /// Construct an ichidan verb.
    pub fn ichidan(stem: &str, ending: &str) -> Result<Self, Error> {
        let stem = non_empty_stem(WordClass::Ichidan, stem)?;

        if ending != ICHIDAN_ENDING {
            return Err(Error::new(ErrorKind::invalid_lexeme(
                WordClass::Ichidan.ident(),
                ending,
                "ending must be る",
            )));
        }

        Ok(Verb::Ichidan { stem })
    }

    /// The irregular verb する.
    pub const fn suru() -> Self {
        Verb::IrregularSuru
    }

    /// The irregular verb 来る.
    pub const fn kuru() -> Self {
        Verb::IrregularKuru
    }

    /// Look up an irregular verb by its dictionary form.
    pub fn irregular(dictionary: &str) -> Result<Self, Error> {
        match dictionary {
            "する" => Ok(Verb::IrregularSuru),
            "来る" => Ok(Verb::IrregularKuru),
            _ => Err(Error::new(ErrorKind::invalid_lexeme(
                WordClass::IrregularSuru.ident(),
                dictionary,
                "only する and 来る are irregular",
            ))),
        }
    }

    /// Construct a verb of the given class from its dictionary form.
    ///
    /// ```
    /// use katsuyou_lib::{Verb, WordClass};
    ///
    /// let verb = Verb::parse(WordClass::Godan, "書く")?;
    /// assert_eq!(verb.stem(), Some("書"));
    /// assert_eq!(verb.dictionary(), "書く");
    /// # Ok::<_, katsuyou_lib::Error>(())
    /// ```
    pub fn parse(class: WordClass, dictionary: &str) -> Result<Self, Error> {
        match class {
            WordClass::Godan | WordClass::Ichidan => {
                let (stem, ending) = split_last(dictionary);

                if class == WordClass::Godan {
                    Verb::godan(stem, ending)
                } else {
                    Verb::ichidan(stem, ending)
                }
            }
            WordClass::IrregularSuru | WordClass::IrregularKuru => {
                let verb = Verb::irregular(dictionary)?;

                if verb.class() != class {
                    return Err(Error::new(ErrorKind::invalid_lexeme(
                        class.ident(),
                        dictionary,
                        "dictionary form belongs to another irregular verb",
                    )));
                }

                Ok(verb)
            }
            WordClass::IAdjective | WordClass::NaAdjective => Err(Error::new(
                ErrorKind::invalid_lexeme(class.ident(), dictionary, "not a verb class"),
            )),
        }
    }

    /// The class of the verb.
    pub fn class(&self) -> WordClass {
        match self {
            Verb::Godan { .. } => WordClass::Godan,
            Verb::Ichidan { .. } => WordClass::Ichidan,
            Verb::IrregularSuru => WordClass::IrregularSuru,
            Verb::IrregularKuru => WordClass::IrregularKuru,
        }
    }

    /// The stem of a regular verb.
    pub fn stem(&self) -> Option<&str> {
        match self {
            Verb::Godan { stem, .. } | Verb::Ichidan { stem } => Some(stem),
            _ => None,
        }
    }

    /// The ending of a regular verb.
    pub fn ending(&self) -> Option<&'static str> {
        match self {
            Verb::Godan { ending, .. } => Some(ending.as_str()),
            Verb::Ichidan { .. } => Some(ICHIDAN_ENDING),
            _ => None,
        }
    }

    /// The dictionary form of the verb.
    pub fn dictionary(&self) -> String {
        match self {
            Verb::Godan { stem, ending } => format!("{stem}{ending}"),
            Verb::Ichidan { stem } => format!("{stem}{ICHIDAN_ENDING}"),
            Verb::IrregularSuru => String::from("する"),
            Verb::IrregularKuru => String::from("来る"),
        }
    }
}

/// An adjective which can be conjugated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Adjective {
    /// An i-adjective like 高い. The ending is always い.
    ///
    /// `irregular` is only set for いい / よい, which conjugates from the
    /// root よ.
    IAdjective { stem: Box<str>, irregular: bool },
    /// A na-adjective like 静か.
    NaAdjective { stem: Box<str> },
}

impl Adjective {
    /// Construct a regular i-adjective.
    ///
    /// いい and よい are recognized and constructed as the irregular
    /// adjective.
    pub fn i(stem: &str, ending: &str) -> Result<Self, Error> {
        let stem = non_empty_stem(WordClass::IAdjective, stem)?;

        if ending != I_ADJECTIVE_ENDING {
            return Err(Error::new(ErrorKind::invalid_lexeme(
                WordClass::IAdjective.ident(),
                ending,
                "ending must be い",
            )));
        }

        let irregular = matches!(&*stem, "い" | "よ");
        Ok(Adjective::IAdjective { stem, irregular })
    }

    /// The irregular adjective いい.
    pub fn ii() -> Self {
        Adjective::IAdjective {
            stem: "い".into(),
            irregular: true,
        }
    }

    /// Construct a na-adjective.
    pub fn na(stem: &str) -> Result<Self, Error> {
        let stem = non_empty_stem(WordClass::NaAdjective, stem)?;
        Ok(Adjective::NaAdjective { stem })
    }

    /// Construct an adjective of the given class from its dictionary form.
    ///
    /// Na-adjectives may be given with or without a trailing な.
    pub fn parse(class: WordClass, dictionary: &str) -> Result<Self, Error> {
        match class {
            WordClass::IAdjective => {
                let (stem, ending) = split_last(dictionary);
                Adjective::i(stem, ending)
            }
            WordClass::NaAdjective => {
                Adjective::na(dictionary.strip_suffix('な').unwrap_or(dictionary))
            }
            _ => Err(Error::new(ErrorKind::invalid_lexeme(
                class.ident(),
                dictionary,
                "not an adjective class",
            ))),
        }
    }

    /// The class of the adjective.
    pub fn class(&self) -> WordClass {
        match self {
            Adjective::IAdjective { .. } => WordClass::IAdjective,
            Adjective::NaAdjective { .. } => WordClass::NaAdjective,
        }
    }

    /// The written stem of the adjective.
    pub fn stem(&self) -> &str {
        match self {
            Adjective::IAdjective { stem, .. } | Adjective::NaAdjective { stem } => stem,
        }
    }

    /// The ending of an i-adjective.
    pub fn ending(&self) -> Option<&'static str> {
        match self {
            Adjective::IAdjective { .. } => Some(I_ADJECTIVE_ENDING),
            Adjective::NaAdjective { .. } => None,
        }
    }

    /// Test if this is the irregular adjective いい / よい.
    pub fn is_irregular(&self) -> bool {
        matches!(self, Adjective::IAdjective { irregular: true, .. })
    }
}

/// Either kind of conjugable word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Word {
    Verb(Verb),
    Adjective(Adjective),
}

impl Word {
    /// Construct a word of the given class from its dictionary form.
    pub fn parse(class: WordClass, dictionary: &str) -> Result<Self, Error> {
        if class.is_verb() {
            Ok(Word::Verb(Verb::parse(class, dictionary)?))
        } else {
            Ok(Word::Adjective(Adjective::parse(class, dictionary)?))
        }
    }

    /// The class of the word.
    pub fn class(&self) -> WordClass {
        match self {
            Word::Verb(verb) => verb.class(),
            Word::Adjective(adjective) => adjective.class(),
        }
    }
}

impl From<Verb> for Word {
    #[inline]
    fn from(verb: Verb) -> Self {
        Word::Verb(verb)
    }
}

impl From<Adjective> for Word {
    #[inline]
    fn from(adjective: Adjective) -> Self {
        Word::Adjective(adjective)
    }
}

/// A noun used as part of a phrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Noun(Box<str>);

impl Noun {
    /// Construct a noun, which must not be empty.
    pub fn new(text: &str) -> Result<Self, Error> {
        if text.is_empty() {
            return Err(Error::new(ErrorKind::invalid_lexeme(
                "noun",
                text,
                "noun must not be empty",
            )));
        }

        Ok(Self(text.into()))
    }

    /// The text of the noun.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Noun {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A particle like よ, か or を.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Particle(Box<str>);

impl Particle {
    /// Construct a particle.
    pub fn new(text: &str) -> Self {
        Self(text.into())
    }

    /// The text of the particle.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Particle {
    #[inline]
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Particle {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Particles which turn a subject into a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionalParticle {
    Nara,
    Tara,
    Reba,
    To,
}

impl ConditionalParticle {
    pub const ALL: [ConditionalParticle; 4] = [
        ConditionalParticle::Nara,
        ConditionalParticle::Tara,
        ConditionalParticle::Reba,
        ConditionalParticle::To,
    ];

    /// The kana of the particle.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionalParticle::Nara => "なら",
            ConditionalParticle::Tara => "たら",
            ConditionalParticle::Reba => "れば",
            ConditionalParticle::To => "と",
        }
    }
}

impl fmt::Display for ConditionalParticle {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

fn non_empty_stem(class: WordClass, stem: &str) -> Result<Box<str>, Error> {
    if stem.is_empty() {
        return Err(Error::new(ErrorKind::invalid_lexeme(
            class.ident(),
            stem,
            "stem must not be empty",
        )));
    }

    Ok(stem.into())
}

/// Split off the last character of a dictionary form.
fn split_last(dictionary: &str) -> (&str, &str) {
    match dictionary.char_indices().next_back() {
        Some((index, _)) => dictionary.split_at(index),
        None => ("", ""),
    }
}
