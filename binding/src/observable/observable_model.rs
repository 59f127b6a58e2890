use common::subject_observer::{Observers, SharedObserver, Subject};
use log::trace;

use super::{AsPropertyName, PropertyChanged};

/// Change notifier embedded by view models.
///
/// Property values stay in the view model; the guarded setters borrow the
/// backing field mutably next to the notifier:
///
/// ```
/// use binding::observable::ObservableModel;
///
/// struct Person {
///     changes: ObservableModel,
///     name: String,
/// }
///
/// impl Person {
///     fn set_name(&mut self, name: String) -> bool {
///         self.changes.set_property(&mut self.name, name, "Name")
///     }
/// }
///
/// let mut person = Person { changes: ObservableModel::new(), name: "A".into() };
/// assert!(person.set_name("B".into()));
/// assert!(!person.set_name("B".into()));
/// ```
#[derive(Debug, Default)]
pub struct ObservableModel {
    observers: Observers<PropertyChanged>,
}

impl ObservableModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Tells observers that any property may have changed.
    pub fn notify_all(&self) {
        self.notify_observers(PropertyChanged::All);
    }

    /// The name is forwarded as given, blank names included.
    pub fn notify_changed(&self, property_name: &str) {
        if self.observers.is_empty() {
            return;
        }
        self.notify_observers(PropertyChanged::named(property_name));
    }

    /// One event per name, in order, skipping missing and blank names.
    /// Repeated names are announced repeatedly.
    pub fn notify_changed_many<I>(&self, property_names: I)
    where
        I: IntoIterator,
        I::Item: AsPropertyName,
    {
        for entry in property_names {
            if let Some(name) = entry
                .as_property_name()
                .filter(|name| !name.trim().is_empty())
            {
                self.notify_changed(name);
            }
        }
    }

    /// Stores `new_value` and notifies `property_name` unless both values are
    /// equal. Returns whether the field changed.
    pub fn set_property<T>(&self, field: &mut T, new_value: T, property_name: &str) -> bool
    where
        T: PartialEq,
    {
        if *field == new_value {
            return false;
        }
        self.replace_property(field, new_value, property_name);
        true
    }

    /// Stores `new_value` and notifies `property_name` without comparing.
    pub fn replace_property<T>(&self, field: &mut T, new_value: T, property_name: &str) {
        *field = new_value;
        self.notify_changed(property_name);
    }
}

impl Subject<PropertyChanged> for ObservableModel {
    fn register_observer(&self, observer: SharedObserver<PropertyChanged>) {
        self.observers.register_observer(observer);
    }

    fn unregister_observer(&self, observer: &SharedObserver<PropertyChanged>) -> bool {
        self.observers.unregister_observer(observer)
    }

    fn notify_observers(&self, event: PropertyChanged) {
        trace!("Property changed: {}", event);
        self.observers.notify_observers(event);
    }
}
