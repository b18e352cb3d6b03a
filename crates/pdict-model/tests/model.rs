//! Tests for pdict-model types.

use pdict_model::{
    BuildOptions, Case, FormValue, MorphologicalForms, NounForms, Number, Paradigm, RawCell,
    RawTable, ResolverOptions,
};

#[test]
fn raw_table_deserializes_with_default_spans() {
    let table: RawTable = serde_json::from_str(
        r#"{"rows": [[{"text": "przypadek"}, {"text": "liczba pojedyncza", "col_span": 2}]]}"#,
    )
    .expect("deserialize table");
    assert_eq!(table.rows[0][0], RawCell::new("przypadek"));
    assert_eq!(table.rows[0][1].col_span, 2);
    assert_eq!(table.expand().width(), 3);
}

#[test]
fn noun_paradigm_serializes_in_canonical_order() {
    let mut forms = NounForms::new();
    let singular = forms.entry(Number::Singular).or_default();
    singular.insert(Case::Vocative, FormValue::form("psie"));
    singular.insert(Case::Nominative, FormValue::form("pies"));
    singular.insert(Case::Genitive, FormValue::form("psa"));
    let forms = MorphologicalForms::new("pies", Paradigm::Noun(forms));

    let json = serde_json::to_string(&forms).expect("serialize forms");
    assert_eq!(
        json,
        r#"{"lemma":"pies","word_class":"noun","forms":{"singular":{"nominative":"pies","genitive":"psa","vocative":"psie"}},"metadata":{"irregular":false,"suppletive":false}}"#
    );
}

#[test]
fn options_builders() {
    let build = BuildOptions::new().with_suppletion_threshold(0.5);
    assert!((build.suppletion_threshold - 0.5).abs() < f64::EPSILON);
    assert!((BuildOptions::default().suppletion_threshold - 0.2).abs() < f64::EPSILON);
    assert!(ResolverOptions::new().with_case_fallback(true).case_fallback);
    assert!(!ResolverOptions::default().case_fallback);
}
