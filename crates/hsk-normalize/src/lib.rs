pub mod color;
pub mod datetime;
pub mod phone;
pub mod text;

pub use color::{color_from_packed, decode_hex_color};
pub use datetime::{
    DateFormat, DateFormatError, TimezonePolicy, date_from_string, date_from_string_with_format,
    date_from_string_without_timezone, date_string_with_format, date_to_transport_string,
    find_date_from_string, short_format,
};
pub use phone::{digit_length, format_number};
pub use text::random_alphanumeric;
