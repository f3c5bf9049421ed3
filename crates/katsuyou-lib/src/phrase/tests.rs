use std::collections::HashSet;

use super::*;

use crate::entities::{Adjective, Verb};
use crate::inflection::{conjugate_adjective, conjugate_verb, AdjectiveForm, VerbForm};

#[test]
fn attach_particle() {
    let ii = conjugate_adjective(&Adjective::ii(), AdjectiveForm::Basic).unwrap();
    let phrase = attach(Part::adjective(ii), "よ");

    assert_eq!(phrase, "いいよ");
    assert!(matches!(phrase.parts(), [Part::Adjective(..), Part::Particle(..)]));

    let koi = conjugate_verb(&Verb::kuru(), VerbForm::Imperative).unwrap();
    assert_eq!(attach(Part::verb(koi), Particle::new("よ")), "来いよ");
}

#[test]
fn connect_phrases() {
    let a = attach(Part::adjective("いい"), "よ");
    let b = attach(Part::verb("来い"), "よ");
    let phrase = connect(a, b);

    assert_eq!(phrase, "いいよ、来いよ");
    assert!(matches!(
        phrase.parts(),
        [Part::Nested(..), Part::Punctuation(..), Part::Nested(..)]
    ));
}

#[test]
fn conditionals() {
    let ame = Noun::new("雨").unwrap();
    let ikanai = Phrase::new()
        .with(Part::verb("行か"))
        .with(Part::verb("ない"));

    let phrase = conditional(&ame, ConditionalParticle::Nara, ikanai);
    assert_eq!(phrase, "雨なら行かない");
}

#[test]
fn demonstratives() {
    let shita = conjugate_verb(&Verb::suru(), VerbForm::Past).unwrap();
    let phrase = demonstrative("そう", Part::verb(shita));

    assert_eq!(phrase, "そうした");
    assert!(matches!(phrase.parts(), [Part::Adverb(..), Part::Verb(..)]));
}

#[test]
fn interrogatives() {
    let kare = Phrase::new()
        .with(&Noun::new("彼").unwrap())
        .with(Part::particle("が"));
    let kita = conjugate_verb(&Verb::kuru(), VerbForm::Past).unwrap();

    let question = Interrogative::new("どうして", kare.clone(), Part::verb(&kita));
    assert_eq!(question.clone().build(), "どうして彼が来たか");
    assert_eq!(question.particle("の").build(), "どうして彼が来たの");
}

#[test]
fn equality_by_text() {
    let a = Phrase::new().with(Part::verb("来い")).with(Part::particle("よ"));
    let b = Phrase::new().with(Part::verb("来いよ"));
    let c = [Part::contracted("来"), Part::punctuation("いよ")]
        .into_iter()
        .collect::<Phrase>();

    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_ne!(a, Phrase::new());

    let set = [a, b, c].into_iter().collect::<HashSet<_>>();
    assert_eq!(set.len(), 1);
}

#[test]
fn empty_phrase() {
    let mut phrase = Phrase::new();
    assert!(phrase.is_empty());
    assert_eq!(phrase, "");

    phrase.push(Part::intensifier("とても"));
    assert!(!phrase.is_empty());
    assert_eq!(phrase.to_string(), "とても");
}
