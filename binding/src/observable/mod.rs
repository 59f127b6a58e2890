mod observable_model;
mod property_changed;

pub use observable_model::ObservableModel;
pub use property_changed::{AsPropertyName, PropertyChanged};

use common::subject_observer::{SharedObserver, Subject};

/// Entity whose properties can be observed by a binding layer.
pub trait NotifyPropertyChanged {
    fn observable(&self) -> &ObservableModel;

    fn subscribe(&self, listener: SharedObserver<PropertyChanged>) {
        self.observable().register_observer(listener);
    }

    fn unsubscribe(&self, listener: &SharedObserver<PropertyChanged>) -> bool {
        self.observable().unregister_observer(listener)
    }
}

impl NotifyPropertyChanged for ObservableModel {
    fn observable(&self) -> &ObservableModel {
        self
    }
}
