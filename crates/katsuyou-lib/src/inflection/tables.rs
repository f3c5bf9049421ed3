//! Rule tables for ichidan verbs, the irregular verbs and adjectives.

use crate::inflection::{AdjectiveForm, VerbForm};

/// A static mapping from form to the fragment it appends.
pub(super) struct Table<F: 'static> {
    rows: &'static [(F, &'static str)],
}

impl<F> Table<F>
where
    F: Copy + PartialEq,
{
    const fn new(rows: &'static [(F, &'static str)]) -> Self {
        Self { rows }
    }

    /// Look up the fragment for the given form.
    pub(super) fn get(&self, form: F) -> Option<&'static str> {
        self.rows
            .iter()
            .find(|(f, _)| *f == form)
            .map(|(_, fragment)| *fragment)
    }
}

/// A verb whose forms are listed in full.
pub(super) struct Irregular {
    pub(super) dictionary: &'static str,
    pub(super) forms: Table<VerbForm>,
}

/// Fragments appended to the stem of an ichidan verb.
///
/// Polite and negative are the bare stem. Potential, passive, causative and
/// both conditionals share the られ stem.
pub(super) static ICHIDAN: Table<VerbForm> = Table::new(&[
    (VerbForm::Polite, ""),
    (VerbForm::Te, "て"),
    (VerbForm::Past, "た"),
    (VerbForm::Negative, ""),
    (VerbForm::Potential, "られ"),
    (VerbForm::Passive, "られ"),
    (VerbForm::Causative, "られ"),
    (VerbForm::Volitional, "よう"),
    (VerbForm::Imperative, "ろ"),
    (VerbForm::Conditional, "られ"),
    (VerbForm::Hypothetical, "られ"),
]);

/// Causative fragment of an ichidan verb when it is not collapsed into られ.
pub(super) const ICHIDAN_CAUSATIVE: &str = "させ";

pub(super) static SURU: Irregular = Irregular {
    dictionary: "する",
    forms: Table::new(&[
        (VerbForm::Polite, "し"),
        (VerbForm::Te, "して"),
        (VerbForm::Past, "した"),
        (VerbForm::Negative, "し"),
        (VerbForm::Potential, "でき"),
        (VerbForm::Passive, "され"),
        (VerbForm::Causative, "させ"),
        (VerbForm::Volitional, "しよう"),
        (VerbForm::Imperative, "しろ"),
        (VerbForm::Conditional, "したら"),
        (VerbForm::Hypothetical, "すれば"),
    ]),
};

pub(super) static KURU: Irregular = Irregular {
    dictionary: "来る",
    forms: Table::new(&[
        (VerbForm::Polite, "来"),
        (VerbForm::Te, "来て"),
        (VerbForm::Past, "来た"),
        (VerbForm::Negative, "来"),
        (VerbForm::Potential, "来られ"),
        (VerbForm::Passive, "来られ"),
        (VerbForm::Causative, "来させ"),
        (VerbForm::Volitional, "来よう"),
        (VerbForm::Imperative, "来い"),
        (VerbForm::Conditional, "来たら"),
        (VerbForm::Hypothetical, "来れば"),
    ]),
};

/// The ending of the basic form of an i-adjective.
pub(super) const I_ADJECTIVE_BASIC: &str = "い";

/// The polite ending of an i-adjective.
pub(super) const I_ADJECTIVE_POLITE: &str = "いです";

/// Fragments appended to the stem of an i-adjective.
pub(super) static I_ADJECTIVE: Table<AdjectiveForm> = Table::new(&[
    (AdjectiveForm::Polite, I_ADJECTIVE_POLITE),
    (AdjectiveForm::Past, "かった"),
    (AdjectiveForm::Negative, "くない"),
]);

/// The root いい / よい conjugates from, except in its basic and polite forms.
pub(super) const II_ROOT: &str = "よ";

/// Fragments appended to the stem of a na-adjective.
pub(super) static NA_ADJECTIVE: Table<AdjectiveForm> = Table::new(&[
    (AdjectiveForm::Basic, "な"),
    (AdjectiveForm::Polite, "です"),
    (AdjectiveForm::Past, "でした"),
    (AdjectiveForm::Negative, "ではない"),
    (AdjectiveForm::Te, "で"),
]);
