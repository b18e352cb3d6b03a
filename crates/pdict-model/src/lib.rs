pub mod enums;
pub mod error;
pub mod forms;
pub mod layout;
pub mod options;
pub mod table;

pub use enums::{
    Animacy, Aspect, Case, Comparison, DimensionTag, Gender, GenderClass, Label, Mood, NonFinite,
    Number, Person, Series, Tense, WordClass,
};
pub use error::{BuildError, StructureError};
pub use forms::{
    AdjectiveForms, CaseForms, FormClass, FormValue, Metadata, MorphologicalForms, NounForms,
    Paradigm, PersonForms, SeriesForms, VerbForms,
};
pub use layout::{Axis, HeaderLabels, TableLayout};
pub use options::{BuildOptions, ResolverOptions};
pub use table::{CellRange, Grid, MAX_COL_SPAN, MAX_ROW_SPAN, RawCell, RawTable};
