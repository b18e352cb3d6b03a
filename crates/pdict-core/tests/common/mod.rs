#![allow(dead_code)]

use std::path::PathBuf;

use pdict_ingest::MemorySource;

pub fn page(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../mockdata/pages")
        .join(format!("{name}.html"));
    std::fs::read_to_string(path).expect("fixture page")
}

/// A form-of page in the Polish Wiktionary layout.
pub fn form_of_page(target: &str) -> String {
    format!(
        "<dl><dd><p><i>rzeczownik, forma fleksyjna</i></p></dd>\
         <dd>(1.1) lm od <a href=\"/wiki/{target}\">{target}</a></dd></dl>"
    )
}

/// A small wiki with a noun, a verb, an adjective, one inflected form and a
/// homograph that is both a noun and an inflected form.
pub fn wiki() -> MemorySource {
    MemorySource::new()
        .with_page("pies", page("pies"))
        .with_page("psy", page("psy"))
        .with_page("być", page("byc"))
        .with_page("dobry", page("dobry"))
        .with_page("dobra", page("dobra"))
        .with_page("słoń", "<p><i>rzeczownik, rodzaj męskozwierzęcy</i></p>")
}
