mod codec;
mod error;
mod fields;
mod model;
mod patch;
mod validate;

pub use codec::{deserialize, serialize};
pub use error::{ParseError, ValidationError};
pub use fields::{
    OPTIONAL_LAYOUT_FIELDS, POSITIONAL_ONLY_FIELDS, REQUIRED_LAYOUT_FIELDS, REQUIRED_STYLING_KEYS,
    variable_field,
};
pub use model::{
    BoundingBox, FontWeight, Orientation, Template, TemplateCategory, TemplateStatus, TextAlign,
    TextStyle, TextTransform,
};
pub use patch::{LayoutPatch, apply_layout_patch};
pub use validate::{
    VariableReport, VariableWarning, validate_layout, validate_styling, validate_template,
    validate_variables,
};
