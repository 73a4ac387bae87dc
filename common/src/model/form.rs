//! The form definition store: metadata plus the ordered question list.
//!
//! `FormDefinition` is a plain data container. It knows nothing about which
//! question is expanded or which menu is open (see `crate::editor`), so every
//! operation here can be exercised without a UI. Mutations either succeed or
//! return a `FormError` and leave the form untouched.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::model::palette::{new_question, option_label};
use crate::model::question::{Question, QuestionId, QuestionPatch, QuestionType};

pub const DEFAULT_FORM_NAME: &str = "Formulario sin título";

/// Appended to the prompt of a duplicated question.
pub const COPY_MARKER: &str = " (Copia)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefinition {
    /// Persistence key; empty until the form is first saved.
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Default for FormDefinition {
    fn default() -> Self {
        Self::new(DEFAULT_FORM_NAME)
    }
}

impl FormDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            description: String::new(),
            questions: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| &q.id == id)
    }

    fn position_or_not_found(&self, id: &QuestionId) -> Result<usize, FormError> {
        self.position(id).ok_or_else(|| FormError::NotFound(id.clone()))
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Appends a question of `kind` with palette defaults and returns it.
    pub fn add_question(&mut self, kind: QuestionType) -> &Question {
        let mut question = new_question(kind);
        // Ids are random; the loop only matters for forms loaded with foreign ids.
        while self.question(&question.id).is_some() {
            question.id = QuestionId::generate();
        }
        self.questions.push(question);
        &self.questions[self.questions.len() - 1]
    }

    /// Merges `patch` into the question `id` after validating the result.
    pub fn update_question(&mut self, id: &QuestionId, patch: &QuestionPatch) -> Result<(), FormError> {
        let index = self.position_or_not_found(id)?;
        let mut updated = self.questions[index].clone();
        patch.apply_to(&mut updated);
        updated.validate()?;
        self.questions[index] = updated;
        Ok(())
    }

    pub fn delete_question(&mut self, id: &QuestionId) -> Result<Question, FormError> {
        let index = self.position_or_not_found(id)?;
        Ok(self.questions.remove(index))
    }

    /// Inserts a copy of `id` right after it. The copy gets a new id and a
    /// marked prompt; every other field is identical.
    pub fn duplicate_question(&mut self, id: &QuestionId) -> Result<&Question, FormError> {
        let index = self.position_or_not_found(id)?;
        let mut copy = self.questions[index].clone();
        copy.id = QuestionId::generate();
        while self.question(&copy.id).is_some() {
            copy.id = QuestionId::generate();
        }
        copy.text.push_str(COPY_MARKER);
        self.questions.insert(index + 1, copy);
        Ok(&self.questions[index + 1])
    }

    /// Moves the question at `from` so that it ends up at `to`.
    pub fn reorder_questions(&mut self, from: usize, to: usize) -> Result<(), FormError> {
        let len = self.questions.len();
        for index in [from, to] {
            if index >= len {
                return Err(FormError::IndexOutOfBounds { index, len });
            }
        }
        let question = self.questions.remove(from);
        self.questions.insert(to, question);
        Ok(())
    }

    /// Appends an auto-labelled option and returns its index.
    pub fn add_option(&mut self, id: &QuestionId) -> Result<usize, FormError> {
        let mut options = self.options_of(id)?;
        let index = options.len();
        options.push(option_label(index));
        self.update_question(id, &QuestionPatch::options(options))?;
        Ok(index)
    }

    pub fn update_option(
        &mut self,
        id: &QuestionId,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), FormError> {
        let mut options = self.options_of(id)?;
        let len = options.len();
        let slot = options
            .get_mut(index)
            .ok_or(FormError::IndexOutOfBounds { index, len })?;
        *slot = text.into();
        self.update_question(id, &QuestionPatch::options(options))
    }

    /// Removes the option at `index`; later options shift down by one.
    pub fn remove_option(&mut self, id: &QuestionId, index: usize) -> Result<String, FormError> {
        let mut options = self.options_of(id)?;
        if index >= options.len() {
            return Err(FormError::IndexOutOfBounds {
                index,
                len: options.len(),
            });
        }
        let removed = options.remove(index);
        self.update_question(id, &QuestionPatch::options(options))?;
        Ok(removed)
    }

    fn options_of(&self, id: &QuestionId) -> Result<Vec<String>, FormError> {
        let question = self
            .question(id)
            .ok_or_else(|| FormError::NotFound(id.clone()))?;
        question.options().map(<[String]>::to_vec).ok_or_else(|| {
            FormError::Validation(format!(
                "las preguntas de tipo \"{}\" no tienen opciones",
                question.kind().label()
            ))
        })
    }

    /// Whole-form check run before handing the form to the save collaborator.
    pub fn validate(&self) -> Result<(), FormError> {
        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(&question.id) {
                return Err(FormError::Validation(format!(
                    "identificador de pregunta duplicado: {}",
                    question.id
                )));
            }
            question.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::question::{CheckboxesConfig, QuestionConfig, TextConfig};

    fn ids(form: &FormDefinition) -> Vec<QuestionId> {
        form.questions.iter().map(|q| q.id.clone()).collect()
    }

    fn max_length(question: &Question) -> Option<u32> {
        match &question.config {
            QuestionConfig::ShortText(TextConfig { max_length, .. }) => *max_length,
            other => panic!("not a short text question: {:?}", other),
        }
    }

    #[test]
    fn ids_stay_unique_through_add_delete_duplicate() {
        let mut form = FormDefinition::default();
        let mut seen = HashSet::new();
        for kind in QuestionType::ALL {
            let id = form.add_question(kind).id.clone();
            assert!(seen.insert(id.clone()));
            let copy = form.duplicate_question(&id).unwrap().id.clone();
            assert!(seen.insert(copy));
        }
        let first = form.questions[0].id.clone();
        form.delete_question(&first).unwrap();
        let again = form.add_question(QuestionType::ShortText).id.clone();
        assert!(seen.insert(again));

        let current = ids(&form);
        let unique: HashSet<_> = current.iter().collect();
        assert_eq!(unique.len(), current.len());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn reorder_and_reverse_restores_order() {
        let mut form = FormDefinition::default();
        for kind in [QuestionType::ShortText, QuestionType::Date, QuestionType::Number, QuestionType::YesNo] {
            form.add_question(kind);
        }
        let original = ids(&form);
        for (i, j) in [(0, 3), (3, 0), (1, 2), (2, 0)] {
            form.reorder_questions(i, j).unwrap();
            assert_ne!(ids(&form), original);
            form.reorder_questions(j, i).unwrap();
            assert_eq!(ids(&form), original);
        }
    }

    #[test]
    fn reorder_rejects_out_of_range_indices() {
        let mut form = FormDefinition::default();
        form.add_question(QuestionType::Date);
        form.add_question(QuestionType::Number);
        let before = form.clone();
        assert_eq!(
            form.reorder_questions(0, 2),
            Err(FormError::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(
            form.reorder_questions(5, 0),
            Err(FormError::IndexOutOfBounds { index: 5, len: 2 })
        );
        assert_eq!(form, before);
    }

    #[test]
    fn duplicate_lands_after_source_with_equal_settings() {
        let mut form = FormDefinition::default();
        form.add_question(QuestionType::Date);
        let source = form.add_question(QuestionType::Checkboxes).id.clone();
        form.add_question(QuestionType::Signature);
        form.update_question(
            &source,
            &QuestionPatch {
                required: Some(true),
                help_text: Some(Some("Marca las zonas".to_string())),
                max_selections: Some(Some(2)),
                ..QuestionPatch::default()
            },
        )
        .unwrap();

        let copy = form.duplicate_question(&source).unwrap().clone();
        let original = form.question(&source).unwrap();
        assert_eq!(form.position(&copy.id), Some(2));
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.text, format!("{}{}", original.text, COPY_MARKER));
        assert_eq!(copy.help_text, original.help_text);
        assert_eq!(copy.required, original.required);
        assert_eq!(copy.config, original.config);
        assert_eq!(form.len(), 4);
    }

    #[test]
    fn required_update_touches_only_its_target() {
        let mut form = FormDefinition::default();
        let a = form.add_question(QuestionType::ShortText).id.clone();
        let b = form.add_question(QuestionType::ShortText).id.clone();
        form.update_question(&a, &QuestionPatch::required(true)).unwrap();
        assert!(form.question(&a).unwrap().required);
        assert!(!form.question(&b).unwrap().required);
    }

    #[test]
    fn missing_ids_are_reported() {
        let mut form = FormDefinition::default();
        form.add_question(QuestionType::ShortText);
        let before = form.clone();
        let ghost = QuestionId::from("q-ghost");
        assert_eq!(
            form.update_question(&ghost, &QuestionPatch::text("x")),
            Err(FormError::NotFound(ghost.clone()))
        );
        assert_eq!(form.delete_question(&ghost), Err(FormError::NotFound(ghost.clone())));
        assert!(form.duplicate_question(&ghost).is_err());
        assert_eq!(form, before);
    }

    #[test]
    fn invalid_update_leaves_question_untouched() {
        let mut form = FormDefinition::default();
        let id = form.add_question(QuestionType::Number).id.clone();
        form.update_question(
            &id,
            &QuestionPatch {
                min_value: Some(Some(5)),
                ..QuestionPatch::default()
            },
        )
        .unwrap();
        let before = form.clone();
        let result = form.update_question(
            &id,
            &QuestionPatch {
                text: Some("Superficie".to_string()),
                max_value: Some(Some(1)),
                ..QuestionPatch::default()
            },
        );
        assert!(matches!(result, Err(FormError::Validation(_))));
        assert_eq!(form, before);
    }

    #[test]
    fn short_text_scenario() {
        let mut form = FormDefinition::default();
        let first = form.add_question(QuestionType::ShortText).id.clone();
        assert_eq!(form.len(), 1);
        assert_eq!(max_length(&form.questions[0]), Some(255));

        let copy = form.duplicate_question(&first).unwrap().id.clone();
        assert_eq!(form.len(), 2);
        assert!(form.questions[1].text.ends_with(COPY_MARKER));
        assert_eq!(max_length(&form.questions[0]), Some(255));
        assert_eq!(max_length(&form.questions[1]), Some(255));

        form.delete_question(&first).unwrap();
        assert_eq!(form.len(), 1);
        assert_eq!(form.questions[0].id, copy);

        form.reorder_questions(0, 0).unwrap();
        assert_eq!(ids(&form), vec![copy]);
    }

    #[test]
    fn checkbox_option_editing_scenario() {
        let mut form = FormDefinition::default();
        let id = form.add_question(QuestionType::Checkboxes).id.clone();
        let options = |form: &FormDefinition| form.question(&id).unwrap().options().unwrap().to_vec();

        assert_eq!(options(&form).len(), 3);
        assert_eq!(form.add_option(&id), Ok(3));
        assert_eq!(options(&form).len(), 4);
        assert_eq!(form.add_option(&id), Ok(4));
        assert_eq!(options(&form).len(), 5);
        assert_eq!(options(&form)[4], "Opción 5");

        form.update_option(&id, 1, "Canalones").unwrap();
        let before = options(&form);
        assert_eq!(form.remove_option(&id, 0), Ok("Opción 1".to_string()));
        let after = options(&form);
        assert_eq!(after.len(), before.len() - 1);
        assert_eq!(after, before[1..].to_vec());
        assert_eq!(after[0], "Canalones");
    }

    #[test]
    fn options_can_be_emptied() {
        let mut form = FormDefinition::default();
        let id = form.add_question(QuestionType::Dropdown).id.clone();
        for _ in 0..3 {
            form.remove_option(&id, 0).unwrap();
        }
        assert_eq!(form.question(&id).unwrap().options(), Some(&[][..]));
        assert_eq!(
            form.remove_option(&id, 0),
            Err(FormError::IndexOutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn option_editing_requires_a_choice_question() {
        let mut form = FormDefinition::default();
        let id = form.add_question(QuestionType::Date).id.clone();
        assert!(matches!(form.add_option(&id), Err(FormError::Validation(_))));
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let mut form = FormDefinition::default();
        form.add_question(QuestionType::ShortText);
        let clone = form.questions[0].clone();
        form.questions.push(clone);
        assert!(matches!(form.validate(), Err(FormError::Validation(_))));
    }

    #[test]
    fn min_selections_above_max_is_rejected() {
        let mut form = FormDefinition::default();
        let id = form.add_question(QuestionType::Checkboxes).id.clone();
        let result = form.update_question(
            &id,
            &QuestionPatch {
                min_selections: Some(3),
                max_selections: Some(Some(1)),
                ..QuestionPatch::default()
            },
        );
        assert!(matches!(result, Err(FormError::Validation(_))));
        assert!(matches!(
            form.question(&id).unwrap().config,
            QuestionConfig::Checkboxes(CheckboxesConfig { min_selections: 0, max_selections: None, .. })
        ));
    }

    #[test]
    fn form_round_trips_through_json() {
        let mut form = FormDefinition::new("Autorización de obra");
        form.set_description("Complete antes de empezar.");
        form.add_question(QuestionType::FileUpload);
        form.add_question(QuestionType::Signature);
        let json = serde_json::to_string(&form).unwrap();
        let back: FormDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, form);
    }
}
