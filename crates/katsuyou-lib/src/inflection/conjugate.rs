//! Conjugation of verbs and adjectives through the rule tables.

use crate::config::{Config, IchidanCausative};
use crate::entities::{Adjective, Verb, Word, WordClass, ICHIDAN_ENDING};
use crate::error::{Error, ErrorKind};
use crate::inflection::tables::{self, Irregular};
use crate::inflection::{godan, AdjectiveForm, ConjugationForm, Inflected, Inflections, VerbForm};

/// The engine used by the free conjugation functions.
const DEFAULT: Conjugator = Conjugator::new();

/// Conjugate a verb into the given form.
///
/// ```
/// use katsuyou_lib::{conjugate_verb, Verb, VerbForm};
///
/// let verb = Verb::ichidan("食べ", "る")?;
/// assert_eq!(conjugate_verb(&verb, VerbForm::Te)?, "食べて");
/// assert_eq!(conjugate_verb(&Verb::suru(), VerbForm::Imperative)?, "しろ");
/// # Ok::<_, katsuyou_lib::Error>(())
/// ```
pub fn conjugate_verb(verb: &Verb, form: VerbForm) -> Result<String, Error> {
    Ok(DEFAULT.verb(verb, form)?.to_string())
}

/// Conjugate an adjective into the given form.
pub fn conjugate_adjective(adjective: &Adjective, form: AdjectiveForm) -> Result<String, Error> {
    Ok(DEFAULT.adjective(adjective, form)?.to_string())
}

/// Conjugate any word into the given form.
///
/// Errors with an unsupported form if a verb form is requested for an
/// adjective or the other way around.
pub fn conjugate(word: &Word, form: ConjugationForm) -> Result<String, Error> {
    Ok(DEFAULT.conjugate(word, form)?.to_string())
}

/// A conjugation engine.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Conjugator {
    ichidan_causative: IchidanCausative,
}

impl Conjugator {
    /// Construct an engine with the default behavior.
    pub const fn new() -> Self {
        Self {
            ichidan_causative: IchidanCausative::Collapsed,
        }
    }

    /// Construct an engine from a configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            ichidan_causative: config.ichidan_causative,
        }
    }

    /// Conjugate a verb into the given form.
    pub fn verb<'a>(&self, verb: &'a Verb, form: VerbForm) -> Result<Inflected<'a>, Error> {
        tracing::trace!(class = %verb.class(), %form, "Conjugating verb");

        let inflected = match verb {
            Verb::Godan { stem, ending } => {
                let stem = Inflected::new(stem);

                if form == VerbForm::Dictionary {
                    return Ok(stem.with(ending.as_str()));
                }

                let Some((a, b)) = godan::row(*ending).fragment(form) else {
                    return Err(unsupported(verb.class(), form.keyword()));
                };

                stem.with(a).with(b)
            }
            Verb::Ichidan { stem } => {
                let stem = Inflected::new(stem);

                let fragment = match (form, self.ichidan_causative) {
                    (VerbForm::Dictionary, _) => ICHIDAN_ENDING,
                    (VerbForm::Causative, IchidanCausative::Split) => tables::ICHIDAN_CAUSATIVE,
                    _ => tables::ICHIDAN
                        .get(form)
                        .ok_or_else(|| unsupported(verb.class(), form.keyword()))?,
                };

                stem.with(fragment)
            }
            Verb::IrregularSuru => irregular(&tables::SURU, verb.class(), form)?,
            Verb::IrregularKuru => irregular(&tables::KURU, verb.class(), form)?,
        };

        Ok(inflected)
    }

    /// Conjugate an adjective into the given form.
    pub fn adjective<'a>(
        &self,
        adjective: &'a Adjective,
        form: AdjectiveForm,
    ) -> Result<Inflected<'a>, Error> {
        tracing::trace!(class = %adjective.class(), %form, "Conjugating adjective");

        let not_supported = || unsupported(adjective.class(), form.keyword());

        let inflected = match adjective {
            Adjective::NaAdjective { stem } => {
                let fragment = tables::NA_ADJECTIVE.get(form).ok_or_else(not_supported)?;
                Inflected::new(stem).with(fragment)
            }
            Adjective::IAdjective {
                stem,
                irregular: false,
            } => {
                let fragment = match form {
                    AdjectiveForm::Basic => tables::I_ADJECTIVE_BASIC,
                    form => tables::I_ADJECTIVE.get(form).ok_or_else(not_supported)?,
                };

                Inflected::new(stem).with(fragment)
            }
            // いい keeps its written stem in the basic and polite forms, every
            // other form is built on the root よ.
            Adjective::IAdjective {
                stem,
                irregular: true,
            } => {
                let (root, fragment) = match form {
                    AdjectiveForm::Basic => (&**stem, tables::I_ADJECTIVE_BASIC),
                    AdjectiveForm::Polite => (&**stem, tables::I_ADJECTIVE_POLITE),
                    form => {
                        let fragment = tables::I_ADJECTIVE.get(form).ok_or_else(not_supported)?;
                        (tables::II_ROOT, fragment)
                    }
                };

                Inflected::new(root).with(fragment)
            }
        };

        Ok(inflected)
    }

    /// Conjugate any word into the given form.
    pub fn conjugate<'a>(
        &self,
        word: &'a Word,
        form: ConjugationForm,
    ) -> Result<Inflected<'a>, Error> {
        match (word, form) {
            (Word::Verb(verb), ConjugationForm::Verb(form)) => self.verb(verb, form),
            (Word::Adjective(adjective), ConjugationForm::Adjective(form)) => {
                self.adjective(adjective, form)
            }
            (word, form) => Err(unsupported(word.class(), form.keyword())),
        }
    }

    /// Produce every form of a verb.
    pub fn verb_inflections(&self, verb: &Verb) -> Result<Inflections<VerbForm>, Error> {
        let mut inflections = Inflections::new(verb.dictionary());

        for &form in VerbForm::ALL {
            inflections.insert(form, self.verb(verb, form)?.to_string());
        }

        Ok(inflections)
    }

    /// Produce every form which applies to an adjective.
    pub fn adjective_inflections(
        &self,
        adjective: &Adjective,
    ) -> Result<Inflections<AdjectiveForm>, Error> {
        let mut inflections =
            Inflections::new(self.adjective(adjective, AdjectiveForm::Basic)?.to_string());

        for &form in AdjectiveForm::ALL {
            match self.adjective(adjective, form) {
                Ok(word) => inflections.insert(form, word.to_string()),
                Err(error) if error.is_unsupported_form() => continue,
                Err(error) => return Err(error),
            }
        }

        Ok(inflections)
    }
}

fn irregular(
    table: &'static Irregular,
    class: WordClass,
    form: VerbForm,
) -> Result<Inflected<'static>, Error> {
    if form == VerbForm::Dictionary {
        return Ok(Inflected::new(table.dictionary));
    }

    let Some(word) = table.forms.get(form) else {
        return Err(unsupported(class, form.keyword()));
    };

    Ok(Inflected::new(word))
}

fn unsupported(class: WordClass, form: &'static str) -> Error {
    Error::new(ErrorKind::UnsupportedForm { class, form })
}
