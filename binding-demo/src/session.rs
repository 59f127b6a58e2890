use std::{
    cell::Cell,
    rc::{Rc, Weak},
};

use binding::{
    command::{Command, RequeryChannel, RequerySuggested},
    observable::{NotifyPropertyChanged, PropertyChanged},
    Observer,
};
use log::{info, warn};
use viewmodels::{Person, PersonEditor};

use crate::{config::app::AppConfig, error::AppError};

/// View logging every property change it is told about.
struct PropertyLog;

impl Observer<PropertyChanged> for PropertyLog {
    fn update(&self, event: &PropertyChanged) {
        if event.is_all() {
            info!("[view] refreshing every field");
        } else {
            info!("[view] {} changed", event);
        }
    }
}

/// Button bound to a command without parameter.
struct CommandButton<C> {
    label: &'static str,
    command: Weak<C>,
    enabled: Cell<bool>,
}

impl<C: Command<Parameter = ()> + 'static> CommandButton<C> {
    fn bind(label: &'static str, command: &Rc<C>) -> Rc<Self> {
        let button = Rc::new(CommandButton {
            label,
            command: Rc::downgrade(command),
            enabled: Cell::new(command.can_execute(&())),
        });
        command.subscribe_can_execute_changed(button.clone());
        button
    }
}

impl<C: Command<Parameter = ()>> Observer<RequerySuggested> for CommandButton<C> {
    fn update(&self, _: &RequerySuggested) {
        let enabled = self
            .command
            .upgrade()
            .is_some_and(|command| command.can_execute(&()));
        if self.enabled.replace(enabled) != enabled {
            info!(
                "[view] {} button {}",
                self.label,
                if enabled { "enabled" } else { "disabled" }
            );
        }
    }
}

/// Scripted edit session standing in for a user driving the view.
///
/// The channel is triggered after every edit, as a UI host would after each
/// input event.
pub fn run(app_config: &AppConfig) -> Result<Person, AppError> {
    let channel = RequeryChannel::shared();
    let editor = PersonEditor::shared(
        Person::new(app_config.first_name.clone(), app_config.last_name.clone()),
        app_config.max_name_length,
    );
    editor.borrow().subscribe(Rc::new(PropertyLog));

    let save = Rc::new(PersonEditor::save_command(&editor, &channel));
    let reset = Rc::new(PersonEditor::reset_command(&editor, &channel));
    let rename = PersonEditor::rename_command(&editor, &channel);
    let _save_button = CommandButton::bind("save", &save);
    let _reset_button = CommandButton::bind("reset", &reset);

    info!("Editing {}", editor.borrow().full_name());
    rename.execute_if_allowed(String::from("Grace Hopper"));
    channel.trigger();

    // Same value: nothing is announced.
    editor.borrow_mut().set_last_name("Hopper");
    channel.trigger();

    editor.borrow_mut().set_first_name("");
    channel.trigger();
    if save.execute_if_allowed(()).is_none() {
        warn!("Save refused while the first name is blank");
    }

    editor.borrow_mut().set_first_name("Grace");
    channel.trigger();
    let saved = save
        .execute_if_allowed(())
        .ok_or_else(|| AppError::SaveVetoed(editor.borrow().full_name()))??;

    rename.execute_if_allowed(String::from("Ada Lovelace"));
    channel.trigger();
    reset.execute_if_allowed(());
    channel.trigger();

    info!("Session ended with {}", editor.borrow().full_name());
    Ok(saved)
}
