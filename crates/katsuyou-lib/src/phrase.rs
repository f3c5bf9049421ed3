//! Composition of conjugated words into phrases.
//!
//! A [`Phrase`] is an ordered sequence of typed [`Part`]s whose text is the
//! left to right concatenation of each part. The templates in this module
//! ([`attach`], [`connect`], [`conditional`], [`demonstrative`] and
//! [`Interrogative`]) are fixed arrangements of parts and can't fail.
//!
//! ```
//! use katsuyou_lib::phrase::{self, Part};
//! use katsuyou_lib::{conjugate_adjective, conjugate_verb, Adjective, AdjectiveForm, Particle, Verb, VerbForm};
//!
//! let ii = conjugate_adjective(&Adjective::ii(), AdjectiveForm::Basic)?;
//! let koi = conjugate_verb(&Verb::kuru(), VerbForm::Imperative)?;
//!
//! let a = phrase::attach(Part::adjective(ii), Particle::new("よ"));
//! let b = phrase::attach(Part::verb(koi), Particle::new("よ"));
//! assert_eq!(phrase::connect(a, b), "いいよ、来いよ");
//! # Ok::<_, katsuyou_lib::Error>(())
//! ```

#[cfg(test)]
mod tests;

use core::fmt;
use std::hash::{Hash, Hasher};

use crate::entities::{ConditionalParticle, Noun, Particle};

/// The Japanese comma used to connect phrases.
pub const COMMA: &str = "、";

/// The question particle used by interrogatives unless overridden.
pub const QUESTION_PARTICLE: &str = "か";

/// A single part of a phrase.
#[derive(Debug, Clone)]
pub enum Part {
    /// A conjugated verb.
    Verb(String),
    /// A conjugated adjective.
    Adjective(String),
    /// A noun.
    Noun(String),
    /// A particle.
    Particle(String),
    /// An adverb, including demonstrative (そう) and interrogative (どう)
    /// adverbs.
    Adverb(String),
    /// An intensifier like とても.
    Intensifier(String),
    /// A contracted form like じゃ or ちゃ.
    Contracted(String),
    /// A nested phrase.
    Nested(Phrase),
    /// Punctuation.
    Punctuation(String),
}

impl Part {
    /// Construct a verb part.
    pub fn verb(text: impl fmt::Display) -> Self {
        Part::Verb(text.to_string())
    }

    /// Construct an adjective part.
    pub fn adjective(text: impl fmt::Display) -> Self {
        Part::Adjective(text.to_string())
    }

    /// Construct a noun part.
    pub fn noun(text: impl fmt::Display) -> Self {
        Part::Noun(text.to_string())
    }

    /// Construct a particle part.
    pub fn particle(text: impl fmt::Display) -> Self {
        Part::Particle(text.to_string())
    }

    /// Construct an adverb part.
    pub fn adverb(text: impl fmt::Display) -> Self {
        Part::Adverb(text.to_string())
    }

    /// Construct an intensifier part.
    pub fn intensifier(text: impl fmt::Display) -> Self {
        Part::Intensifier(text.to_string())
    }

    /// Construct a contracted part.
    pub fn contracted(text: impl fmt::Display) -> Self {
        Part::Contracted(text.to_string())
    }

    /// Construct a punctuation part.
    pub fn punctuation(text: impl fmt::Display) -> Self {
        Part::Punctuation(text.to_string())
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Verb(text)
            | Part::Adjective(text)
            | Part::Noun(text)
            | Part::Particle(text)
            | Part::Adverb(text)
            | Part::Intensifier(text)
            | Part::Contracted(text)
            | Part::Punctuation(text) => text.fmt(f),
            Part::Nested(phrase) => phrase.fmt(f),
        }
    }
}

impl From<Phrase> for Part {
    #[inline]
    fn from(phrase: Phrase) -> Self {
        Part::Nested(phrase)
    }
}

impl From<&Noun> for Part {
    #[inline]
    fn from(noun: &Noun) -> Self {
        Part::Noun(noun.as_str().to_owned())
    }
}

impl From<&Particle> for Part {
    #[inline]
    fn from(particle: &Particle) -> Self {
        Part::Particle(particle.as_str().to_owned())
    }
}

impl From<ConditionalParticle> for Part {
    #[inline]
    fn from(particle: ConditionalParticle) -> Self {
        Part::Particle(particle.as_str().to_owned())
    }
}

/// A composed phrase.
///
/// Phrases compare and hash by the text they spell out, regardless of how it
/// is split into parts.
#[derive(Debug, Default, Clone)]
pub struct Phrase {
    parts: Vec<Part>,
}

impl Phrase {
    /// Construct an empty phrase.
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Push a part onto the end of the phrase.
    pub fn push(&mut self, part: impl Into<Part>) {
        self.parts.push(part.into());
    }

    /// Push a part and return the phrase.
    #[inline]
    pub fn with(mut self, part: impl Into<Part>) -> Self {
        self.push(part);
        self
    }

    /// The parts of the phrase.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Test if the phrase has no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl FromIterator<Part> for Phrase {
    fn from_iter<I: IntoIterator<Item = Part>>(iter: I) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            part.fmt(f)?;
        }

        Ok(())
    }
}

impl PartialEq for Phrase {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Phrase {}

impl PartialEq<str> for Phrase {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for Phrase {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl Hash for Phrase {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.to_string().hash(state);
    }
}

/// Attach a particle to a phrase, like いい + よ.
pub fn attach(head: impl Into<Part>, particle: impl Into<Particle>) -> Phrase {
    let particle: Particle = particle.into();
    Phrase::new().with(head).with(&particle)
}

/// Connect two phrases with a Japanese comma, like いいよ、来いよ.
pub fn connect(a: impl Into<Part>, b: impl Into<Part>) -> Phrase {
    Phrase::new()
        .with(a)
        .with(Part::punctuation(COMMA))
        .with(b)
}

/// Turn a subject into the condition of a result, like 雨なら + 行かない.
pub fn conditional(
    subject: impl Into<Part>,
    particle: ConditionalParticle,
    result: impl Into<Part>,
) -> Phrase {
    Phrase::new().with(subject).with(particle).with(result)
}

/// Apply a demonstrative adverb to a verb, like そう + した.
pub fn demonstrative(demonstrative: &str, verb: impl Into<Part>) -> Phrase {
    Phrase::new().with(Part::adverb(demonstrative)).with(verb)
}

/// Builder for a question like どうして + 彼が + 来た + の.
#[derive(Debug, Clone)]
pub struct Interrogative {
    adverb: Part,
    subject: Part,
    verb: Part,
    particle: Particle,
}

impl Interrogative {
    /// Construct a question ending in か.
    pub fn new(adverb: &str, subject: impl Into<Part>, verb: impl Into<Part>) -> Self {
        Self {
            adverb: Part::adverb(adverb),
            subject: subject.into(),
            verb: verb.into(),
            particle: Particle::new(QUESTION_PARTICLE),
        }
    }

    /// Override the question particle.
    pub fn particle(mut self, particle: impl Into<Particle>) -> Self {
        self.particle = particle.into();
        self
    }

    /// Build the phrase.
    pub fn build(self) -> Phrase {
        Phrase::new()
            .with(self.adverb)
            .with(self.subject)
            .with(self.verb)
            .with(&self.particle)
    }
}
