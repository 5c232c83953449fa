use genanki_rs::{Field, Model, Template};

/// A note type as a constant resource: the schema id, its field names and
/// the single card template.
///
/// Bump `version` whenever `fields` or the template text changes so the
/// trace says which layout a package was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSchema {
    pub id: i64,
    pub version: u32,
    pub name: &'static str,
    pub fields: &'static [&'static str],
    pub template_name: &'static str,
    pub question_format: &'static str,
    pub answer_format: &'static str,
}

/// Type-the-word card: plays the audio, asks for the spelling and hides the
/// definition behind a button (or F2).
pub const SPELLING_BEE: CardSchema = CardSchema {
    id: 1607392319,
    version: 1,
    name: "Spelling Bee Model",
    fields: &["Audio", "Word", "Definition", "Notes"],
    template_name: "Spelling Bee Card",
    question_format: include_str!("template/spelling_bee_front.html"),
    answer_format: "{{FrontSide}}",
};

impl CardSchema {
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn to_model(&self) -> Model {
        let fields = self.fields.iter().map(|name| Field::new(name)).collect();
        let template = Template::new(self.template_name)
            .qfmt(self.question_format)
            .afmt(self.answer_format);
        Model::new(self.id, self.name, fields, vec![template])
    }
}
