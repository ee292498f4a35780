//! Form domain layer
//!
//! Declarative field and type descriptors, the values they produce, and the
//! creation wizard that ties them together.

mod control;
mod creation_type;
mod field;
mod form_values;
mod guard;
mod type_picker;
mod wizard;

pub use control::{ControlInput, FieldControl, FieldEdit};
pub use creation_type::CreationType;
pub use field::{FieldDescriptor, FieldKind, FieldValue};
pub use form_values::{FormValues, CATEGORY_KEY, TYPE_KEY};
pub use guard::PendingDiscard;
pub use wizard::{CreationWizard, WizardConfig, WizardEvent, WizardStep};
