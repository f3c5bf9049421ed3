use super::*;

#[test]
fn godan_endings() {
    for ending in GodanEnding::ALL {
        let verb = Verb::godan("話", ending.as_str()).unwrap();
        assert_eq!(verb.ending(), Some(ending.as_str()));
        assert_eq!(GodanEnding::parse(ending.as_str()), Some(ending));
    }
}

#[test]
fn godan_rejects_unknown_ending() {
    let error = Verb::godan("買", "x").unwrap_err();
    assert!(error.is_invalid_lexeme());

    for ending in ["", "え", "うう", "ル"] {
        assert!(
            Verb::godan("買", ending).unwrap_err().is_invalid_lexeme(),
            "{ending:?} should be rejected"
        );
    }
}

#[test]
fn ichidan_only_ru() {
    assert!(Verb::ichidan("食べ", "る").is_ok());
    assert!(Verb::ichidan("食べ", "う").unwrap_err().is_invalid_lexeme());
}

#[test]
fn empty_stems() {
    assert!(Verb::godan("", "す").unwrap_err().is_invalid_lexeme());
    assert!(Verb::ichidan("", "る").unwrap_err().is_invalid_lexeme());
    assert!(Adjective::i("", "い").unwrap_err().is_invalid_lexeme());
    assert!(Adjective::na("").unwrap_err().is_invalid_lexeme());
    assert!(Noun::new("").unwrap_err().is_invalid_lexeme());
}

#[test]
fn irregular_lookup() {
    assert_eq!(Verb::irregular("する").unwrap(), Verb::suru());
    assert_eq!(Verb::irregular("来る").unwrap(), Verb::kuru());
    assert!(Verb::irregular("くる").unwrap_err().is_invalid_lexeme());
    assert!(Verb::irregular("行く").unwrap_err().is_invalid_lexeme());
}

#[test]
fn parse_verbs() {
    let verb = Verb::parse(WordClass::Godan, "泳ぐ").unwrap();
    assert_eq!(verb.stem(), Some("泳"));
    assert_eq!(verb.ending(), Some("ぐ"));
    assert_eq!(verb.class(), WordClass::Godan);

    let verb = Verb::parse(WordClass::Ichidan, "見る").unwrap();
    assert_eq!(verb.stem(), Some("見"));
    assert_eq!(verb.dictionary(), "見る");

    let verb = Verb::parse(WordClass::IrregularKuru, "来る").unwrap();
    assert_eq!(verb.stem(), None);
    assert_eq!(verb.dictionary(), "来る");

    assert!(Verb::parse(WordClass::IrregularKuru, "する")
        .unwrap_err()
        .is_invalid_lexeme());
    assert!(Verb::parse(WordClass::Godan, "る")
        .unwrap_err()
        .is_invalid_lexeme());
    assert!(Verb::parse(WordClass::Ichidan, "")
        .unwrap_err()
        .is_invalid_lexeme());
    assert!(Verb::parse(WordClass::NaAdjective, "静か")
        .unwrap_err()
        .is_invalid_lexeme());
}

#[test]
fn parse_adjectives() {
    let adjective = Adjective::parse(WordClass::IAdjective, "高い").unwrap();
    assert_eq!(adjective.stem(), "高");
    assert_eq!(adjective.ending(), Some("い"));
    assert!(!adjective.is_irregular());

    assert_eq!(
        Adjective::parse(WordClass::IAdjective, "いい").unwrap(),
        Adjective::ii()
    );
    assert!(Adjective::parse(WordClass::IAdjective, "よい")
        .unwrap()
        .is_irregular());

    let adjective = Adjective::parse(WordClass::NaAdjective, "静かな").unwrap();
    assert_eq!(adjective.stem(), "静か");
    assert_eq!(adjective.ending(), None);

    assert!(Adjective::parse(WordClass::IAdjective, "静か")
        .unwrap_err()
        .is_invalid_lexeme());
    assert!(Adjective::parse(WordClass::Godan, "話す")
        .unwrap_err()
        .is_invalid_lexeme());
}

#[test]
fn word_class_keywords() {
    for class in WordClass::VALUES {
        assert_eq!(WordClass::parse_keyword(class.ident()), Some(*class));
        assert_eq!(class.to_string(), class.ident());
    }

    assert_eq!(WordClass::parse_keyword("yodan"), None);
}

#[test]
fn words() {
    let word = Word::parse(WordClass::NaAdjective, "綺麗").unwrap();
    assert_eq!(word.class(), WordClass::NaAdjective);

    let word = Word::from(Verb::suru());
    assert_eq!(word.class(), WordClass::IrregularSuru);
}

#[test]
fn conditional_particles() {
    let particles = ConditionalParticle::ALL.map(|p| p.as_str());
    assert_eq!(particles, ["なら", "たら", "れば", "と"]);
}
