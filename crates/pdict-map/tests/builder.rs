mod common;

use pdict_map::{build, build_with, identify, interpret};
use pdict_model::{
    BuildError, BuildOptions, DimensionTag, FormClass, FormValue, MorphologicalForms, RawTable,
    WordClass,
};

fn interpret_table(table: &RawTable, word_class: WordClass, lemma: &str) -> MorphologicalForms {
    let layout = identify(table, word_class).expect("layout");
    build(table, &layout, word_class, lemma)
}

fn render(forms: &MorphologicalForms) -> String {
    forms
        .leaves()
        .into_iter()
        .map(|(path, value)| format!("{path} = {}", value.primary().unwrap_or("null")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn pies_declension() {
    let forms = interpret_table(&common::pies(), WordClass::Noun, "pies");
    assert_eq!(forms.word_class(), WordClass::Noun);
    assert_eq!(forms.leaf("singular.genitive"), Some(&FormValue::form("psa")));
    assert_eq!(forms.leaf("plural.nominative"), Some(&FormValue::form("psy")));
    assert!(!forms.metadata.suppletive);
    assert!(forms.metadata.skipped.is_empty());

    insta::assert_snapshot!(render(&forms), @r"
    singular.nominative = pies
    singular.genitive = psa
    singular.dative = psu
    singular.accusative = psa
    singular.instrumental = psem
    singular.locative = psie
    singular.vocative = psie
    plural.nominative = psy
    plural.genitive = psów
    plural.dative = psom
    plural.accusative = psy
    plural.instrumental = psami
    plural.locative = psach
    plural.vocative = psy
    ");
}

#[test]
fn full_noun_table_has_fourteen_leaves() {
    for table in [common::pies(), common::dom_transposed(), common::czlowiek()] {
        let forms = interpret_table(&table, WordClass::Noun, "x");
        let leaves = forms.leaves();
        assert_eq!(leaves.len(), 14);
        assert!(leaves.iter().all(|(_, value)| !value.is_inapplicable()));
    }
}

#[test]
fn transposed_table_reads_the_same_paths() {
    let forms = interpret_table(&common::dom_transposed(), WordClass::Noun, "dom");
    assert_eq!(forms.leaf("singular.genitive"), Some(&FormValue::form("domu")));
    assert_eq!(forms.leaf("plural.instrumental"), Some(&FormValue::form("domami")));
}

#[test]
fn czlowiek_is_suppletive() {
    let forms = interpret_table(&common::czlowiek(), WordClass::Noun, "człowiek");
    assert!(forms.metadata.suppletive);
    assert!(forms.metadata.irregular);
    assert_eq!(forms.leaf("plural.nominative"), Some(&FormValue::form("ludzie")));

    let Some(FormValue::Variants(vocative)) = forms.leaf("singular.vocative") else {
        panic!("expected variant leaf");
    };
    assert_eq!(vocative[&FormClass::Primary], "człowieku");
    assert_eq!(vocative[&FormClass::Archaic], "człowiecze");
}

#[test]
fn suppletion_threshold_is_configurable() {
    let table = common::pies();
    let layout = identify(&table, WordClass::Noun).expect("layout");
    let strict = BuildOptions::new().with_suppletion_threshold(0.9);
    let forms = build_with(&table, &layout, WordClass::Noun, "pies", &strict);
    assert!(forms.metadata.suppletive);
}

#[test]
fn byc_past_neuter_has_null_first_person() {
    let forms = interpret_table(&common::byc_full(), WordClass::Verb, "być");
    assert_eq!(forms.leaf("past.neuter.singular.1"), Some(&FormValue::Inapplicable));
    assert_eq!(forms.leaf("past.neuter.singular.3"), Some(&FormValue::form("było")));
    assert_eq!(forms.leaf("past.masculine.singular.1"), Some(&FormValue::form("byłem")));
    assert_eq!(forms.leaf("present.singular.1"), Some(&FormValue::form("jestem")));
    assert_eq!(forms.leaf("present.plural.3"), Some(&FormValue::form("są")));
    assert_eq!(forms.leaf("future.singular.1"), Some(&FormValue::form("będę")));
    assert_eq!(forms.leaf("imperative.singular.1"), Some(&FormValue::Inapplicable));
    assert_eq!(
        forms.leaf("imperative.plural.3"),
        Some(&FormValue::form("niech będą"))
    );
    assert!(!forms.metadata.suppletive);
    assert!(forms.metadata.skipped.is_empty());
}

#[test]
fn byc_conditional_keeps_clitic_forms_as_alternatives() {
    let forms = interpret_table(&common::byc_full(), WordClass::Verb, "być");
    assert_eq!(
        forms.leaf("conditional.masculine.singular.1"),
        Some(&FormValue::form("byłbym"))
    );
    assert_eq!(
        forms.metadata.alternatives["conditional.masculine.singular.1"],
        ["bym"]
    );
    assert_eq!(forms.leaf("conditional.neuter.singular.2"), Some(&FormValue::Inapplicable));
}

#[test]
fn byc_non_finite_rows() {
    let forms = interpret_table(&common::byc_full(), WordClass::Verb, "być");
    assert_eq!(forms.leaf("infinitive"), Some(&FormValue::form("być")));
    assert_eq!(
        forms.leaf("contemporary_adverbial_participle"),
        Some(&FormValue::form("będąc"))
    );
    assert_eq!(forms.leaf("verbal_noun"), Some(&FormValue::Inapplicable));

    let json = serde_json::to_value(&forms).expect("serialize");
    assert_eq!(json["word_class"], "verb");
    assert_eq!(json["forms"]["infinitive"], "być");
    assert!(json["forms"]["past"]["neuter"]["singular"]["1"].is_null());
    assert_eq!(json["forms"]["present"]["singular"]["1"], "jestem");
}

#[test]
fn past_table_without_neuter_first_person_is_completed_with_nulls() {
    let forms = interpret_table(&common::byc_past_compound(), WordClass::Verb, "być");
    assert_eq!(forms.leaf("past.neuter.singular.1"), Some(&FormValue::Inapplicable));
    assert_eq!(forms.leaf("past.neuter.singular.2"), Some(&FormValue::Inapplicable));
    assert_eq!(forms.leaf("past.neuter.singular.3"), Some(&FormValue::form("było")));
    assert_eq!(forms.leaf("past.feminine.plural.2"), Some(&FormValue::form("byłyście")));
    assert_eq!(forms.metadata.notes, ["tense inferred as past"]);
}

#[test]
fn present_table_without_series_header() {
    let forms = interpret_table(&common::miec_present(), WordClass::Verb, "mieć");
    assert_eq!(forms.leaf("present.plural.2"), Some(&FormValue::form("macie")));
    assert_eq!(forms.leaves().len(), 6);
}

#[test]
fn adjective_declension() {
    let forms = interpret_table(&common::dobry(), WordClass::Adjective, "dobry");
    assert_eq!(
        forms.leaf("positive.singular.masculine.nominative"),
        Some(&FormValue::form("dobry"))
    );
    assert_eq!(
        forms.leaf("positive.singular.neuter.instrumental"),
        Some(&FormValue::form("dobrym"))
    );
    assert_eq!(
        forms.leaf("positive.plural.masculine_personal.nominative"),
        Some(&FormValue::form("dobrzy"))
    );
    assert_eq!(
        forms.leaf("positive.plural.non_masculine_personal.nominative"),
        Some(&FormValue::form("dobre"))
    );
    assert_eq!(
        forms.metadata.alternatives["positive.singular.masculine.accusative"],
        ["dobry"]
    );
    assert_eq!(forms.leaves().len(), 35);
    assert_eq!(forms.metadata.notes, ["comparison inferred as positive"]);
}

#[test]
fn unlabeled_cells_are_skipped_not_fatal() {
    let table = RawTable::from_rows([
        ["przypadek", "lp", "lm", ""],
        ["mianownik", "pies", "psy", "przypis"],
        ["dopełniacz", "psa", "psów", ""],
    ]);
    let forms = interpret_table(&table, WordClass::Noun, "pies");
    assert_eq!(forms.leaves().len(), 4);
    assert_eq!(
        forms.metadata.skipped,
        [BuildError::IncompleteTuple {
            row: 1,
            col: 3,
            missing: vec![DimensionTag::Number],
        }]
    );
}

#[test]
fn interpret_wraps_identify_and_build() {
    let forms = interpret(
        &common::pies(),
        WordClass::Noun,
        "pies",
        &BuildOptions::default(),
    )
    .expect("interpreted");
    assert_eq!(forms.lemma, "pies");
    assert!(interpret(&common::kot_without_cases(), WordClass::Noun, "kot", &BuildOptions::default()).is_err());
}
