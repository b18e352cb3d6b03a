#![allow(dead_code)]

use pdict_model::{RawCell, RawTable};

fn c(text: &str) -> RawCell {
    RawCell::new(text)
}

fn span(text: &str, row_span: usize, col_span: usize) -> RawCell {
    RawCell::with_spans(text, row_span, col_span)
}

pub fn pies() -> RawTable {
    RawTable::from_rows([
        ["przypadek", "liczba pojedyncza", "liczba mnoga"],
        ["mianownik", "pies", "psy"],
        ["dopełniacz", "psa", "psów"],
        ["celownik", "psu", "psom"],
        ["biernik", "psa", "psy"],
        ["narzędnik", "psem", "psami"],
        ["miejscownik", "psie", "psach"],
        ["wołacz", "psie", "psy"],
    ])
}

pub fn czlowiek() -> RawTable {
    RawTable::from_rows([
        ["przypadek", "lp", "lm"],
        ["M", "człowiek", "ludzie"],
        ["D", "człowieka", "ludzi"],
        ["C", "człowiekowi", "ludziom"],
        ["B", "człowieka", "ludzi"],
        ["N", "człowiekiem", "ludźmi"],
        ["Ms", "człowieku", "ludziach"],
        ["W", "człowieku / człowiecze (arch.)", "ludzie"],
    ])
}

/// Cases across the top, numbers down the side.
pub fn dom_transposed() -> RawTable {
    RawTable::from_rows([
        vec![
            "",
            "mianownik",
            "dopełniacz",
            "celownik",
            "biernik",
            "narzędnik",
            "miejscownik",
            "wołacz",
        ],
        vec!["lp", "dom", "domu", "domowi", "dom", "domem", "domu", "domu"],
        vec!["lm", "domy", "domów", "domom", "domy", "domami", "domach", "domy"],
    ])
}

/// Number headers but row labels that name no case.
pub fn kot_without_cases() -> RawTable {
    RawTable::from_rows([
        ["", "liczba pojedyncza", "liczba mnoga"],
        ["1", "kot", "koty"],
        ["2", "kota", "kotów"],
    ])
}

/// Number on both axes.
pub fn kot_number_twice() -> RawTable {
    RawTable::from_rows([
        ["", "", "lp", "lm"],
        ["lp", "mianownik", "kot", "koty"],
        ["lm", "dopełniacz", "kota", "kotów"],
    ])
}

pub fn byc_past_compound() -> RawTable {
    RawTable::from_rows([
        ["", "lp", "lm"],
        ["1. os. m.", "byłem", "byliśmy"],
        ["2. os. m.", "byłeś", "byliście"],
        ["3. os. m.", "był", "byli"],
        ["1. os. ż.", "byłam", "byłyśmy"],
        ["2. os. ż.", "byłaś", "byłyście"],
        ["3. os. ż.", "była", "były"],
        ["3. os. n.", "było", "były"],
    ])
}

pub fn miec_present() -> RawTable {
    RawTable::from_rows([
        ["", "lp", "lm"],
        ["1 os.", "mam", "mamy"],
        ["2 os.", "masz", "macie"],
        ["3 os.", "ma", "mają"],
    ])
}

/// The full conjugation table as the page renders it, with merged cells.
pub fn byc_full() -> RawTable {
    let persons = || {
        ["1. os.", "2. os.", "3. os.", "1. os.", "2. os.", "3. os."]
            .into_iter()
            .map(c)
            .collect::<Vec<_>>()
    };
    let row = |head: RawCell, forms: &[&str]| {
        let mut row = vec![head];
        row.extend(forms.iter().copied().map(c));
        row
    };

    RawTable::new(vec![
        vec![
            span("forma", 2, 2),
            span("liczba pojedyncza", 1, 3),
            span("liczba mnoga", 1, 3),
        ],
        persons(),
        row(
            span("czas teraźniejszy", 1, 2),
            &["jestem", "jesteś", "jest", "jesteśmy", "jesteście", "są"],
        ),
        row(
            span("czas przeszły", 3, 1),
            &["m", "byłem", "byłeś", "był", "byliśmy", "byliście", "byli"],
        ),
        row(c("ż"), &["byłam", "byłaś", "była", "byłyśmy", "byłyście", "były"]),
        row(c("n"), &["", "", "było", "", "", "były"]),
        row(
            span("czas przyszły", 1, 2),
            &["będę", "będziesz", "będzie", "będziemy", "będziecie", "będą"],
        ),
        row(
            span("tryb rozkazujący", 1, 2),
            &["—", "bądź", "niech będzie", "bądźmy", "bądźcie", "niech będą"],
        ),
        row(
            span("tryb przypuszczający", 3, 1),
            &[
                "m",
                "byłbym / bym",
                "byłbyś / byś",
                "byłby / by",
                "bylibyśmy / byśmy",
                "bylibyście / byście",
                "byliby / by",
            ],
        ),
        row(
            c("ż"),
            &[
                "byłabym / bym",
                "byłabyś / byś",
                "byłaby / by",
                "byłybyśmy / byśmy",
                "byłybyście / byście",
                "byłyby / by",
            ],
        ),
        row(c("n"), &["", "", "byłoby / by", "", "", "byłyby / by"]),
        vec![span("bezokolicznik", 1, 2), span("być", 1, 6)],
        vec![
            span("imiesłów przysłówkowy współczesny", 1, 2),
            span("będąc", 1, 6),
        ],
        vec![span("imiesłów przysłówkowy uprzedni", 1, 2), span("bywszy", 1, 6)],
        vec![span("rzeczownik odsłowny", 1, 2), span("—", 1, 6)],
    ])
}

pub fn dobry() -> RawTable {
    RawTable::new(vec![
        vec![
            span("przypadek", 2, 1),
            span("liczba pojedyncza", 1, 3),
            span("liczba mnoga", 1, 2),
        ],
        ["m", "ż", "n", "mos", "nmos"].into_iter().map(c).collect(),
        plain(["M", "dobry", "dobra", "dobre", "dobrzy", "dobre"]),
        plain(["D", "dobrego", "dobrej", "dobrego", "dobrych", "dobrych"]),
        plain(["C", "dobremu", "dobrej", "dobremu", "dobrym", "dobrym"]),
        plain(["B", "dobrego / dobry", "dobrą", "dobre", "dobrych", "dobre"]),
        plain(["N", "dobrym", "dobrą", "dobrym", "dobrymi", "dobrymi"]),
        plain(["Ms", "dobrym", "dobrej", "dobrym", "dobrych", "dobrych"]),
        plain(["W", "dobry", "dobra", "dobre", "dobrzy", "dobre"]),
    ])
}

fn plain<const N: usize>(cells: [&str; N]) -> Vec<RawCell> {
    cells.into_iter().map(c).collect()
}
