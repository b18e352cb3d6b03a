mod common;

use pdict_core::{LemmaResolution, Lookup, LookupOutcome, LookupReport, TableOutcome};
use pdict_ingest::MemorySource;
use pdict_model::{
    Animacy, Aspect, BuildOptions, DimensionTag, FormValue, Gender, StructureError, WordClass,
};

fn found(outcome: LookupOutcome) -> LookupReport {
    match outcome {
        LookupOutcome::Found(report) => report,
        LookupOutcome::NoResults { query } => panic!("no results for {query}"),
    }
}

#[test]
fn inflected_query_yields_the_lemma_paradigm() {
    let wiki = common::wiki();
    let report = found(Lookup::new(&wiki).run("psy").expect("lookup"));

    assert_eq!(report.resolution, LemmaResolution::Redirected("pies".into()));
    assert_eq!(report.lemma(), Some("pies"));
    assert_eq!(report.tables.len(), 1);

    let forms = report.paradigms().next().expect("paradigm");
    assert_eq!(forms.lemma, "pies");
    assert_eq!(forms.word_class(), WordClass::Noun);
    assert_eq!(forms.gender, Some(Gender::Masculine));
    assert_eq!(forms.animacy, Some(Animacy::Animate));
    assert_eq!(forms.leaf("singular.genitive"), Some(&FormValue::form("psa")));
    assert_eq!(forms.leaf("plural.nominative"), Some(&FormValue::form("psy")));
    assert_eq!(forms.leaf("singular.vocative"), Some(&FormValue::form("psie")));
}

#[test]
fn verb_page_through_wrapper_table() {
    let wiki = common::wiki();
    let report = found(Lookup::new(&wiki).run("być").expect("lookup"));
    let forms = report.paradigms().next().expect("paradigm");

    assert_eq!(forms.aspect, Some(Aspect::Imperfective));
    assert_eq!(forms.leaf("infinitive"), Some(&FormValue::form("być")));
    assert_eq!(forms.leaf("past.neuter.singular.1"), Some(&FormValue::Inapplicable));
    assert_eq!(forms.leaf("past.neuter.singular.3"), Some(&FormValue::form("było")));
    assert_eq!(
        forms.leaf("conditional.feminine.singular.3"),
        Some(&FormValue::form("byłaby"))
    );
    assert_eq!(forms.leaf("verbal_noun"), Some(&FormValue::Inapplicable));
}

#[test]
fn homograph_keeps_its_own_paradigm() {
    let wiki = common::wiki();
    let report = found(Lookup::new(&wiki).run("dobra").expect("lookup"));

    assert_eq!(report.resolution, LemmaResolution::Found("dobra".into()));
    assert_eq!(report.tables.len(), 1);
    let forms = report.paradigms().next().expect("paradigm");
    assert_eq!(forms.lemma, "dobra");
    assert_eq!(forms.word_class(), WordClass::Noun);
    assert_eq!(forms.gender, Some(Gender::Neuter));
    assert_eq!(forms.leaf("plural.genitive"), Some(&FormValue::form("dóbr")));
    assert_eq!(forms.leaf("singular.genitive"), None);
}

#[test]
fn adjective_page() {
    let wiki = common::wiki();
    let report = found(Lookup::new(&wiki).run("dobry").expect("lookup"));
    let forms = report.paradigms().next().expect("paradigm");
    assert_eq!(
        forms.leaf("positive.plural.masculine_personal.nominative"),
        Some(&FormValue::form("dobrzy"))
    );
}

#[test]
fn unknown_word_has_no_results() {
    let wiki = common::wiki();
    let outcome = Lookup::new(&wiki).run("aobra").expect("lookup");
    assert_eq!(
        outcome,
        LookupOutcome::NoResults {
            query: "aobra".into()
        }
    );
}

#[test]
fn unreadable_table_falls_back_to_raw() {
    let html = "<p><i>rzeczownik</i></p>\
        <table>\
        <tr><th></th><th>liczba pojedyncza</th><th>liczba mnoga</th></tr>\
        <tr><td>1</td><td>kot</td><td>koty</td></tr>\
        <tr><td>2</td><td>kota</td><td>kotów</td></tr>\
        </table>";
    let wiki = MemorySource::new().with_page("kot", html);
    let report = found(Lookup::new(&wiki).run("kot").expect("lookup"));

    let [TableOutcome::Fallback { heading, error, table }] = report.tables.as_slice() else {
        panic!("expected one fallback table, got {:?}", report.tables);
    };
    assert_eq!(heading.as_deref(), Some("rzeczownik"));
    assert_eq!(
        *error,
        StructureError::InsufficientHeaders {
            word_class: WordClass::Noun,
            missing: vec![DimensionTag::Case],
        }
    );
    assert_eq!(table.rows[1][1].text, "kot");
}

#[test]
fn tables_without_word_class_are_skipped() {
    let html = "<table><tr><td>a</td><td>b</td></tr></table>";
    let wiki = MemorySource::new().with_page("abc", html);
    let report = found(Lookup::new(&wiki).run("abc").expect("lookup"));
    assert_eq!(report.tables, [TableOutcome::Skipped { heading: None }]);
    assert_eq!(report.paradigms().count(), 0);
}

#[test]
fn build_options_reach_the_builder() {
    let wiki = common::wiki();
    let report = found(
        Lookup::new(&wiki)
            .with_build_options(BuildOptions::new().with_suppletion_threshold(0.9))
            .run("pies")
            .expect("lookup"),
    );
    assert!(report.paradigms().all(|forms| forms.metadata.suppletive));
}

#[test]
fn fetch_failure_aborts_the_lookup() {
    let wiki = MemorySource::new().with_api_error("pies", "readonly", "maintenance");
    let err = Lookup::new(&wiki).run("pies").unwrap_err();
    assert_eq!(
        err.to_string(),
        "could not resolve pies: wiki API error readonly: maintenance"
    );
}

#[test]
fn report_serializes_to_json() {
    let wiki = common::wiki();
    let outcome = Lookup::new(&wiki).run("psy").expect("lookup");
    let json = serde_json::to_value(&outcome).expect("json");

    assert_eq!(json["outcome"], "found");
    assert_eq!(json["resolution"]["lemma"], "pies");
    let table = &json["tables"][0];
    assert_eq!(table["outcome"], "interpreted");
    assert_eq!(table["word_class"], "noun");
    assert_eq!(table["forms"]["plural"]["genitive"], "psów");
}
