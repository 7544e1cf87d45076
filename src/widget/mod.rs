pub mod bidict;
pub mod codec;
pub mod controls;

pub use bidict::BiDict;
pub use codec::{list_to_str, str_to_list, validate_numeric_list};
pub use controls::{Checkbox, ComboBox, DoubleSpinBox, LineEdit, SpinBox};
