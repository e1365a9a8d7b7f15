mod rules;
mod value;

pub use rules::{
    check_text_sufficient_complexity, is_password_valid, is_valid_email, validate_input_value,
};
pub use value::{is_valid_object, is_valid_value, is_valid_value_of_type};
