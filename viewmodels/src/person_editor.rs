use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use binding::{
    command::{ParamRelayCommand, RelayCommand, RequeryChannel},
    observable::{NotifyPropertyChanged, ObservableModel},
};
use log::{debug, info};
use strum::IntoStaticStr;

use crate::PersonError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum PersonProperty {
    FirstName,
    LastName,
    FullName,
    IsDirty,
}

impl PersonProperty {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Person {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

pub type SharedPersonEditor = Rc<RefCell<PersonEditor>>;

/// Edits a [`Person`] and keeps track of unsaved changes.
///
/// Observers run while the editor is mutably borrowed. They may query the
/// editor's commands, which report "not executable" during the edit, but must
/// not borrow a [`SharedPersonEditor`] themselves.
pub struct PersonEditor {
    changes: ObservableModel,
    first_name: String,
    last_name: String,
    is_dirty: bool,
    saved: Person,
    max_name_length: usize,
}

impl PersonEditor {
    pub fn new(person: Person, max_name_length: usize) -> Self {
        PersonEditor {
            changes: ObservableModel::new(),
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            is_dirty: false,
            saved: person,
            max_name_length,
        }
    }

    pub fn shared(person: Person, max_name_length: usize) -> SharedPersonEditor {
        Rc::new(RefCell::new(Self::new(person, max_name_length)))
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn saved(&self) -> &Person {
        &self.saved
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> bool {
        let changed = self.changes.set_property(
            &mut self.first_name,
            first_name.into(),
            PersonProperty::FirstName.name(),
        );
        if changed {
            self.name_changed();
        }
        changed
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> bool {
        let changed = self.changes.set_property(
            &mut self.last_name,
            last_name.into(),
            PersonProperty::LastName.name(),
        );
        if changed {
            self.name_changed();
        }
        changed
    }

    /// Splits "First Last" on the first whitespace and announces every name
    /// that actually changed in one go.
    pub fn apply_full_name(&mut self, full_name: &str) -> bool {
        let (first_name, last_name) = split_full_name(full_name);
        let first_changed = self.first_name != first_name;
        let last_changed = self.last_name != last_name;
        if !first_changed && !last_changed {
            return false;
        }

        self.first_name = first_name;
        self.last_name = last_name;
        self.changes.notify_changed_many([
            first_changed.then_some(PersonProperty::FirstName.name()),
            last_changed.then_some(PersonProperty::LastName.name()),
            Some(PersonProperty::FullName.name()),
        ]);
        self.refresh_dirty();
        true
    }

    pub fn validate(&self) -> Result<(), PersonError> {
        self.validate_name(PersonProperty::FirstName, &self.first_name)?;
        self.validate_name(PersonProperty::LastName, &self.last_name)
    }

    pub fn can_save(&self) -> bool {
        self.is_dirty && self.validate().is_ok()
    }

    pub fn save(&mut self) -> Result<Person, PersonError> {
        self.validate()?;
        self.saved = self.current();
        self.refresh_dirty();
        info!("Saved {}", self.full_name());
        Ok(self.saved.clone())
    }

    /// Drops unsaved edits; observers are told to refresh everything.
    pub fn reset(&mut self) {
        self.first_name = self.saved.first_name.clone();
        self.last_name = self.saved.last_name.clone();
        self.is_dirty = false;
        self.changes.notify_all();
    }

    pub fn save_command(
        editor: &SharedPersonEditor,
        channel: &Rc<RequeryChannel>,
    ) -> RelayCommand<Result<Person, PersonError>> {
        let target = Rc::downgrade(editor);
        let guard = Rc::downgrade(editor);
        RelayCommand::with_can_execute(
            move || {
                target
                    .upgrade()
                    .ok_or(PersonError::EditorClosed)?
                    .borrow_mut()
                    .save()
            },
            move || with_editor(&guard, PersonEditor::can_save),
            channel,
        )
    }

    pub fn reset_command(
        editor: &SharedPersonEditor,
        channel: &Rc<RequeryChannel>,
    ) -> RelayCommand {
        let target = Rc::downgrade(editor);
        let guard = Rc::downgrade(editor);
        RelayCommand::with_can_execute(
            move || {
                if let Some(editor) = target.upgrade() {
                    editor.borrow_mut().reset();
                }
            },
            move || with_editor(&guard, PersonEditor::is_dirty),
            channel,
        )
    }

    /// Takes a "First Last" string; blank input is refused.
    pub fn rename_command(
        editor: &SharedPersonEditor,
        channel: &Rc<RequeryChannel>,
    ) -> ParamRelayCommand<String, bool> {
        let target = Rc::downgrade(editor);
        ParamRelayCommand::with_can_execute(
            move |full_name: String| {
                target
                    .upgrade()
                    .is_some_and(|editor| editor.borrow_mut().apply_full_name(&full_name))
            },
            |full_name| !full_name.trim().is_empty(),
            channel,
        )
    }

    fn current(&self) -> Person {
        Person::new(self.first_name.clone(), self.last_name.clone())
    }

    fn name_changed(&mut self) {
        self.changes.notify_changed(PersonProperty::FullName.name());
        self.refresh_dirty();
    }

    fn refresh_dirty(&mut self) {
        let is_dirty = self.current() != self.saved;
        if self
            .changes
            .set_property(&mut self.is_dirty, is_dirty, PersonProperty::IsDirty.name())
        {
            debug!("Person editor dirty: {}", is_dirty);
        }
    }

    fn validate_name(&self, property: PersonProperty, value: &str) -> Result<(), PersonError> {
        if value.trim().is_empty() {
            return Err(PersonError::BlankName(property.name()));
        }
        if value.chars().count() > self.max_name_length {
            return Err(PersonError::NameTooLong {
                property: property.name(),
                max: self.max_name_length,
            });
        }
        Ok(())
    }
}

impl NotifyPropertyChanged for PersonEditor {
    fn observable(&self) -> &ObservableModel {
        &self.changes
    }
}

// An editor that is gone or in the middle of an edit answers false.
fn with_editor(editor: &Weak<RefCell<PersonEditor>>, query: fn(&PersonEditor) -> bool) -> bool {
    editor
        .upgrade()
        .is_some_and(|editor| editor.try_borrow().is_ok_and(|editor| query(&editor)))
}

fn split_full_name(full_name: &str) -> (String, String) {
    let full_name = full_name.trim();
    match full_name.split_once(char::is_whitespace) {
        Some((first, last)) => (first.to_string(), last.trim().to_string()),
        None => (full_name.to_string(), String::new()),
    }
}
