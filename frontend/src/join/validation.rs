use once_cell::sync::Lazy;
use regex::Regex;

// Digits are spelled [0-9] because `\d` in the regex crate also matches
// non-ASCII digits.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").unwrap());
static ZIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+[0-9]{1,2}[\s\x{FEFF}]?)?\(?[0-9]{3}\)?[\s\x{FEFF}.-]?[0-9]{3}[\s\x{FEFF}.-]?[0-9]{4}$").unwrap()
});

pub const SPECIALIZATIONS: [&str; 26] = [
    "Painting",
    "Drywall",
    "Carpentry",
    "Wallpaper",
    "Hardwood-floor",
    "Masonry",
    "Tiling",
    "Power-wash",
    "Handyman",
    "Bathroom",
    "Kitchen",
    "Roofing",
    "Siding",
    "Remodeling",
    "Framing",
    "Concrete",
    "Decks",
    "Fence",
    "Deck",
    "Shed",
    "Gutter",
    "Drop-ceiling",
    "Flooring",
    "Insulation",
    "Landscaping",
    "Everything",
];

/// Text inputs of the join form, in the order they are laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    City,
    ZipCode,
    CompanyName,
    MaxTravelDistance,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::City,
        Field::ZipCode,
        Field::CompanyName,
        Field::MaxTravelDistance,
    ];

    /// Name used for the input element and as the relay payload key.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::City => "city",
            Field::ZipCode => "zipCode",
            Field::CompanyName => "companyName",
            Field::MaxTravelDistance => "maxTravelDistance",
        }
    }

    pub fn is_required(self) -> bool {
        self != Field::CompanyName
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub zip_code: String,
    pub company_name: String,
    pub max_travel_distance: String,
    pub specializations: Vec<String>,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::City => &self.city,
            Field::ZipCode => &self.zip_code,
            Field::CompanyName => &self.company_name,
            Field::MaxTravelDistance => &self.max_travel_distance,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::City => &mut self.city,
            Field::ZipCode => &mut self.zip_code,
            Field::CompanyName => &mut self.company_name,
            Field::MaxTravelDistance => &mut self.max_travel_distance,
        };
        *slot = value;
    }

    pub fn has_specialization(&self, tag: &str) -> bool {
        self.specializations.iter().any(|s| s == tag)
    }

    /// Adds the tag when it is missing and removes it otherwise.
    pub fn toggle_specialization(&mut self, tag: &str) {
        if self.has_specialization(tag) {
            self.specializations.retain(|s| s != tag);
        } else {
            self.specializations.push(tag.to_string());
        }
    }
}

/// Per-field validation messages. An empty string means the field is fine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorMap {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    city: String,
    zip_code: String,
    max_travel_distance: String,
    specializations: String,
}

impl ErrorMap {
    /// Message for a text field, or "" when it has none. Optional fields
    /// never carry an error.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::City => &self.city,
            Field::ZipCode => &self.zip_code,
            Field::MaxTravelDistance => &self.max_travel_distance,
            Field::CompanyName => "",
        }
    }

    pub fn specializations(&self) -> &str {
        &self.specializations
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.field(field).is_empty())
            && self.specializations.is_empty()
    }

    fn set(&mut self, field: Field, message: &str) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::City => &mut self.city,
            Field::ZipCode => &mut self.zip_code,
            Field::MaxTravelDistance => &mut self.max_travel_distance,
            Field::CompanyName => return,
        };
        *slot = message.to_string();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    pub errors: ErrorMap,
    pub is_valid: bool,
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_zip(value: &str) -> bool {
    ZIP_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Also strips the byte order mark, which `str::trim` keeps.
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

fn required_message(field: Field) -> &'static str {
    match field {
        Field::FirstName => "First name is required",
        Field::LastName => "Last name is required",
        Field::Email => "Email is required",
        Field::Phone => "Phone number is required",
        Field::City => "City is required",
        Field::ZipCode => "Zip code is required",
        Field::MaxTravelDistance => "Max travel distance is required",
        Field::CompanyName => "",
    }
}

fn format_message(field: Field) -> Option<&'static str> {
    match field {
        Field::Email => Some("Please enter a valid email address"),
        Field::ZipCode => Some("Please enter a valid zip code (e.g., 12345 or 12345-6789)"),
        Field::Phone => Some("Please enter a valid phone number (e.g., 123-456-7890)"),
        _ => None,
    }
}

fn has_valid_format(field: Field, value: &str) -> bool {
    match field {
        Field::Email => is_valid_email(value),
        Field::ZipCode => is_valid_zip(value),
        Field::Phone => is_valid_phone(value),
        _ => true,
    }
}

/// Checks every rule and reports all failing fields at once.
///
/// Blank detection trims whitespace, the format checks run against the value
/// exactly as typed.
pub fn validate(values: &FormValues) -> Validation {
    let mut errors = ErrorMap::default();

    for field in Field::ALL.into_iter().filter(|f| f.is_required()) {
        let value = values.get(field);
        if is_blank(value) {
            errors.set(field, required_message(field));
        } else if !has_valid_format(field, value) {
            if let Some(message) = format_message(field) {
                errors.set(field, message);
            }
        }
    }

    if values.specializations.is_empty() {
        errors.specializations = "Please select at least one specialization".to_string();
    }

    let is_valid = errors.is_empty();
    Validation { errors, is_valid }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_values() -> FormValues {
        FormValues {
            first_name: "Ana".to_string(),
            last_name: "Perez".to_string(),
            email: "ana@example.com".to_string(),
            phone: "123-456-7890".to_string(),
            city: "Huntington".to_string(),
            zip_code: "11746".to_string(),
            company_name: String::new(),
            max_travel_distance: "25 miles".to_string(),
            specializations: vec!["Painting".to_string()],
        }
    }

    #[test]
    fn filled_form_is_valid() {
        let result = validate(&filled_values());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let result = validate(&FormValues::default());
        assert!(!result.is_valid);
        for field in Field::ALL {
            if field.is_required() {
                assert_eq!(result.errors.field(field), required_message(field));
            } else {
                assert_eq!(result.errors.field(field), "");
            }
        }
        assert_eq!(
            result.errors.specializations(),
            "Please select at least one specialization"
        );
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let mut values = filled_values();
        values.city = "   \t".to_string();
        let result = validate(&values);
        assert_eq!(result.errors.field(Field::City), "City is required");
    }

    #[test]
    fn only_first_name_missing() {
        let mut values = filled_values();
        values.first_name.clear();
        let result = validate(&values);
        assert!(!result.is_valid);
        assert_eq!(result.errors.field(Field::FirstName), "First name is required");
        for field in Field::ALL.into_iter().filter(|f| *f != Field::FirstName) {
            assert_eq!(result.errors.field(field), "", "{:?}", field);
        }
        assert_eq!(result.errors.specializations(), "");
    }

    #[test]
    fn email_shapes() {
        for ok in ["x@y.z", "first.last@sub.domain.com", "a+b@c.io"] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in ["plainaddress", "no-at.example.com", "user@nodot", "a b@c.d", "@y.z", "x@.z"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn zip_shapes() {
        assert!(is_valid_zip("11746"));
        assert!(is_valid_zip("11746-1234"));
        for bad in ["1174", "ABCDE", "117461", "11746-12", "11746 1234", "١١٧٤٦"] {
            assert!(!is_valid_zip(bad), "{bad}");
        }
    }

    #[test]
    fn phone_shapes() {
        for ok in [
            "123-456-7890",
            "(123) 456-7890",
            "123.456.7890",
            "1234567890",
            "+1 123-456-7890",
            "+12 (123)456 7890",
        ] {
            assert!(is_valid_phone(ok), "{ok}");
        }
        for bad in ["12345", "123-45-67890", "+123 123-456-7890", "phone"] {
            assert!(!is_valid_phone(bad), "{bad}");
        }
    }

    #[test]
    fn format_errors_use_specific_messages() {
        let mut values = filled_values();
        values.email = "nope".to_string();
        values.zip_code = "ABCDE".to_string();
        values.phone = "12345".to_string();
        let result = validate(&values);
        assert!(!result.is_valid);
        assert_eq!(result.errors.field(Field::Email), "Please enter a valid email address");
        assert_eq!(
            result.errors.field(Field::ZipCode),
            "Please enter a valid zip code (e.g., 12345 or 12345-6789)"
        );
        assert_eq!(
            result.errors.field(Field::Phone),
            "Please enter a valid phone number (e.g., 123-456-7890)"
        );
    }

    #[test]
    fn padded_zip_fails_format_check() {
        let mut values = filled_values();
        values.zip_code = " 11746".to_string();
        let result = validate(&values);
        assert_eq!(
            result.errors.field(Field::ZipCode),
            "Please enter a valid zip code (e.g., 12345 or 12345-6789)"
        );
    }

    #[test]
    fn no_specialization_is_an_error_even_when_fields_are_valid() {
        let mut values = filled_values();
        values.specializations.clear();
        let result = validate(&values);
        assert!(!result.is_valid);
        assert_eq!(
            result.errors.specializations(),
            "Please select at least one specialization"
        );
        assert!(Field::ALL.into_iter().all(|f| result.errors.field(f).is_empty()));
    }

    #[test]
    fn validation_is_repeatable() {
        let mut values = filled_values();
        values.email = "broken".to_string();
        values.last_name.clear();
        assert_eq!(validate(&values), validate(&values));
    }

    #[test]
    fn toggling_specializations() {
        let mut values = FormValues::default();
        values.toggle_specialization("Tiling");
        values.toggle_specialization("Fence");
        values.toggle_specialization("Tiling");
        assert_eq!(values.specializations, vec!["Fence".to_string()]);
        assert!(values.has_specialization("Fence"));
        assert!(!values.has_specialization("Tiling"));
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        let mut values = filled_values();
        values.first_name = "\u{FEFF}".to_string();
        values.city = " \u{FEFF} ".to_string();
        let result = validate(&values);
        assert_eq!(result.errors.field(Field::FirstName), "First name is required");
        assert_eq!(result.errors.field(Field::City), "City is required");

        assert!(!is_valid_email("a\u{FEFF}b@c.d"));
        assert!(!is_valid_email("ab@c\u{FEFF}.d"));
        assert!(is_valid_phone("123\u{FEFF}456\u{FEFF}7890"));
    }

    #[test]
    fn field_names_are_distinct() {
        let mut names: Vec<&str> = Field::ALL.iter().map(|field| field.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Field::ALL.len());
    }
}
