use crate::entities::GodanEnding;
use crate::inflection::VerbForm;

/// One row of the godan table, holding the kana of each vowel column plus the
/// euphonic te and past forms of the ending.
#[derive(Debug, Clone, Copy)]
pub(super) struct Godan {
    pub(super) a: &'static str,
    pub(super) i: &'static str,
    pub(super) e: &'static str,
    pub(super) o: &'static str,
    pub(super) te: &'static str,
    pub(super) past: &'static str,
}

impl Godan {
    const fn new(
        a: &'static str,
        i: &'static str,
        e: &'static str,
        o: &'static str,
        te: &'static str,
        past: &'static str,
    ) -> Self {
        Self {
            a,
            i,
            e,
            o,
            te,
            past,
        }
    }

    /// The fragment appended to the stem for the given form.
    ///
    /// The dictionary form is never table driven, so it has no fragment.
    pub(super) fn fragment(&self, form: VerbForm) -> Option<(&'static str, &'static str)> {
        let fragment = match form {
            VerbForm::Dictionary => return None,
            VerbForm::Polite => (self.i, ""),
            VerbForm::Te => (self.te, ""),
            VerbForm::Past => (self.past, ""),
            VerbForm::Negative => (self.a, ""),
            VerbForm::Potential => (self.e, ""),
            VerbForm::Passive => (self.a, "れ"),
            VerbForm::Causative => (self.a, "せ"),
            VerbForm::Volitional => (self.o, "う"),
            VerbForm::Imperative => (self.e, ""),
            VerbForm::Conditional => (self.past, "ら"),
            VerbForm::Hypothetical => (self.e, "ば"),
        };

        Some(fragment)
    }
}

/// The U godan table.
pub(super) static U: Godan = Godan::new("わ", "い", "え", "お", "って", "った");
/// The KU godan table.
pub(super) static KU: Godan = Godan::new("か", "き", "け", "こ", "いて", "いた");
/// The GU godan table.
pub(super) static GU: Godan = Godan::new("が", "ぎ", "げ", "ご", "いで", "いだ");
/// The SU godan table.
pub(super) static SU: Godan = Godan::new("さ", "し", "せ", "そ", "して", "した");
/// The TSU godan table.
pub(super) static TSU: Godan = Godan::new("た", "ち", "て", "と", "って", "った");
/// The NU godan table.
pub(super) static NU: Godan = Godan::new("な", "に", "ね", "の", "んで", "んだ");
/// The BU godan table.
pub(super) static BU: Godan = Godan::new("ば", "び", "べ", "ぼ", "んで", "んだ");
/// The MU godan table.
pub(super) static MU: Godan = Godan::new("ま", "み", "め", "も", "んで", "んだ");
/// The RU godan table.
pub(super) static RU: Godan = Godan::new("ら", "り", "れ", "ろ", "って", "った");

/// Get the table row for the given ending.
pub(super) fn row(ending: GodanEnding) -> &'static Godan {
    match ending {
        GodanEnding::U => &U,
        GodanEnding::Ku => &KU,
        GodanEnding::Gu => &GU,
        GodanEnding::Su => &SU,
        GodanEnding::Tsu => &TSU,
        GodanEnding::Nu => &NU,
        GodanEnding::Bu => &BU,
        GodanEnding::Mu => &MU,
        GodanEnding::Ru => &RU,
    }
}
