//! Japanese verb and adjective conjugation driven by static rule tables, with
//! a small phrase composer on top.
//!
//! ```
//! use katsuyou_lib::{conjugate_verb, Verb, VerbForm};
//!
//! let verb = Verb::godan("話", "す")?;
//! assert_eq!(conjugate_verb(&verb, VerbForm::Polite)?, "話し");
//! # Ok::<_, katsuyou_lib::Error>(())
//! ```

#![allow(clippy::match_like_matches_macro)]

mod concat;
pub use self::concat::Concat;

mod config;
pub use self::config::{Config, IchidanCausative};

mod error;
pub use self::error::Error;

pub mod entities;
pub use self::entities::{
    Adjective, ConditionalParticle, GodanEnding, Noun, Particle, Verb, Word, WordClass,
};

pub mod inflection;
pub use self::inflection::{
    conjugate, conjugate_adjective, conjugate_verb, AdjectiveForm, ConjugationForm, Conjugator,
    Inflected, Inflections, VerbForm,
};

pub mod phrase;
pub use self::phrase::{Interrogative, Part, Phrase};
