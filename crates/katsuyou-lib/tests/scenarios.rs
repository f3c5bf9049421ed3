use katsuyou_lib::phrase::{self, Part};
use katsuyou_lib::{
    conjugate, conjugate_adjective, conjugate_verb, Adjective, AdjectiveForm, Conjugator,
    GodanEnding, Verb, VerbForm, Word, WordClass,
};

#[test]
fn godan_polite() {
    let verb = Verb::godan("話", "す").unwrap();
    assert_eq!(conjugate_verb(&verb, VerbForm::Polite).unwrap(), "話し");
}

#[test]
fn ichidan_te() {
    let verb = Verb::ichidan("食べ", "る").unwrap();
    assert_eq!(conjugate_verb(&verb, VerbForm::Te).unwrap(), "食べて");
}

#[test]
fn suru_imperative() {
    assert_eq!(
        conjugate_verb(&Verb::suru(), VerbForm::Imperative).unwrap(),
        "しろ"
    );
    assert_eq!(
        conjugate_verb(&Verb::kuru(), VerbForm::Imperative).unwrap(),
        "来い"
    );
}

#[test]
fn composed_phrases() {
    let ii = conjugate_adjective(&Adjective::ii(), AdjectiveForm::Basic).unwrap();
    let a = phrase::attach(Part::adjective(ii), "よ");
    assert_eq!(a, "いいよ");

    let koi = conjugate_verb(&Verb::kuru(), VerbForm::Imperative).unwrap();
    let b = phrase::attach(Part::verb(koi), "よ");
    assert_eq!(b, "来いよ");

    assert_eq!(phrase::connect(a, b), "いいよ、来いよ");
}

#[test]
fn invalid_godan_ending() {
    let error = Verb::godan("買", "x").unwrap_err();
    assert!(error.is_invalid_lexeme());
    assert!(error.to_string().contains('x'));
}

#[test]
fn irregular_ii() {
    let ii = Adjective::ii();
    assert_eq!(conjugate_adjective(&ii, AdjectiveForm::Basic).unwrap(), "いい");
    assert_eq!(conjugate_adjective(&ii, AdjectiveForm::Past).unwrap(), "よかった");
    assert_eq!(
        conjugate_adjective(&ii, AdjectiveForm::Negative).unwrap(),
        "よくない"
    );
}

#[test]
fn dictionary_round_trip() {
    for (class, dictionary) in [
        (WordClass::Godan, "泳ぐ"),
        (WordClass::Ichidan, "起きる"),
        (WordClass::IrregularSuru, "する"),
        (WordClass::IrregularKuru, "来る"),
    ] {
        let word = Word::parse(class, dictionary).unwrap();
        assert_eq!(word.class(), class);
        assert_eq!(
            conjugate(&word, VerbForm::Dictionary.into()).unwrap(),
            dictionary
        );
    }
}

#[test]
fn every_godan_form_is_stem_plus_fragment() {
    let conjugator = Conjugator::new();

    for ending in GodanEnding::ALL {
        let verb = Verb::godan("ab", ending.as_str()).unwrap();
        let inflections = conjugator.verb_inflections(&verb).unwrap();
        assert_eq!(inflections.len(), VerbForm::ALL.len());

        for (form, word) in inflections.iter() {
            assert!(
                word.starts_with("ab") && word.len() > "ab".len(),
                "{form} of {} was {word}",
                verb.dictionary()
            );
        }
    }
}
